use crate::{
    gamemaker::{
        deserialize::reader::DataReader,
        elements::{GMElement, background::GMBackground},
        reference::GMRef,
    },
    prelude::*,
    util::init::vec_with_capacity,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tiles {
    pub background: Option<GMRef<GMBackground>>,
    /// Flattened 2D Array. Access using `tile_data[row + width * col]`.
    pub tile_data: Vec<u32>,
    pub width: u32,
    pub height: u32,
}

impl GMElement for Tiles {
    fn deserialize(reader: &mut DataReader) -> Result<Self> {
        let background: Option<GMRef<GMBackground>> = reader.read_resource_by_id_opt()?;
        let width = reader.read_u32()?;
        let height = reader.read_u32()?;
        let mut tile_data: Vec<u32> = vec_with_capacity(width * height)?;

        if reader.general_info.is_version_at_least((2024, 2)) {
            Self::read_compressed_tile_data(reader, &mut tile_data)?;
        } else {
            for _y in 0..height {
                for _x in 0..width {
                    tile_data.push(reader.read_u32()?);
                }
            }
        }

        Ok(Self { background, tile_data, width, height })
    }
}
impl Tiles {
    fn read_compressed_tile_data(reader: &mut DataReader, tile_data: &mut Vec<u32>) -> Result<()> {
        let total_size: usize = tile_data.capacity();
        if total_size == 0 {
            return Ok(());
        }

        'outer: loop {
            let length = reader.read_u8()?;
            if length >= 128 {
                // Repeat run
                let run_length: u8 = (length & 0x7F) + 1;
                let tile = reader.read_u32()?;
                for _ in 0..run_length {
                    tile_data.push(tile);
                    if tile_data.len() >= total_size {
                        break 'outer;
                    }
                }
            } else {
                // Verbatim run
                for _ in 0..length {
                    let tile = reader.read_u32()?;
                    tile_data.push(tile);
                    if tile_data.len() >= total_size {
                        break 'outer;
                    }
                }
            }
        }

        // Due to a GMAC bug, 2 blank tiles are inserted into the layer
        // If the last 2 tiles in the layer are different.
        // This is a certified YoyoGames moment right here.
        let has_padding: bool = if tile_data.len() == 1 {
            true // Single tile always has padding
        } else if tile_data.len() >= 2 {
            let len = tile_data.len();
            tile_data[len - 1] != tile_data[len - 2]
        } else {
            false // no tiles => no padding (should never happen though?)
        };
        if has_padding {
            let length = reader.read_u8()?;
            let tile = reader.read_u32()?;

            // Sanity check: run of 2 empty tiles
            if length != 0x81 {
                bail!(
                    "Expected 0x81 for run length of compressed tile data padding; got 0x{length:02X}"
                );
            }
            if tile as i32 != -1 {
                bail!("Expected -1 for tile of compressed tile data padding; got 0x{length:02X}");
            }
        }

        if reader.general_info.is_version_at_least((2024, 4)) {
            reader.align(4)?;
        }
        Ok(())
    }

}
