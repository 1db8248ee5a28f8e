use crate::{
    gamemaker::{
        chunk::ChunkName,
        deserialize::reader::DataReader,
        elements::{GMChunk, GMElement, GMListChunk},
    },
    prelude::*,
};

/// `TXTR`: raw embedded texture page blobs.
///
/// Entries come in two on-disk shapes, an 8-byte GMS1 layout and a 28-byte
/// GMS2 layout; which applies is gated on `bytecode_version` here rather
/// than on the pointer spacing a real GameMaker runner uses, since this
/// crate already has the bytecode version in hand from `GEN8`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GMEmbeddedTextures {
    pub texture_pages: Vec<GMEmbeddedTexture>,
    pub exists: bool,
}

impl GMChunk for GMEmbeddedTextures {
    const NAME: ChunkName = ChunkName::new("TXTR");
    fn exists(&self) -> bool {
        self.exists
    }
}

impl GMListChunk for GMEmbeddedTextures {
    type Element = GMEmbeddedTexture;
    fn elements(&self) -> &Vec<Self::Element> {
        &self.texture_pages
    }
    fn elements_mut(&mut self) -> &mut Vec<Self::Element> {
        &mut self.texture_pages
    }
}

impl GMElement for GMEmbeddedTextures {
    fn deserialize(reader: &mut DataReader) -> Result<Self> {
        let mut texture_pages: Vec<GMEmbeddedTexture> = reader.read_pointer_list()?;

        // Raw blob lengths aren't stored; they're inferred from the gap to the
        // next entry's blob offset (or the chunk end for the last one).
        // `data_offset == 0` or a blob starting past the chunk end means the
        // texture is external to this data file.
        for i in 0..texture_pages.len() {
            let Some(data_offset) = texture_pages[i].data_offset else { continue };

            if data_offset == 0 || data_offset >= reader.chunk.end_pos {
                texture_pages[i].data_offset = None;
                continue;
            }

            let next_blob_start = texture_pages[i + 1..]
                .iter()
                .find_map(|t| t.data_offset)
                .unwrap_or(reader.chunk.end_pos);

            reader.cur_pos = data_offset;
            let length = next_blob_start.saturating_sub(data_offset);
            let raw = reader.read_bytes_dyn(length).context("reading embedded texture blob")?;
            texture_pages[i].raw_image_data = raw.to_vec();
        }

        Ok(Self { texture_pages, exists: true })
    }
}

/// A single embedded texture page. The pixel data is kept as an opaque byte
/// blob; decoding it into actual pixels is outside this crate's scope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GMEmbeddedTexture {
    pub unknown: u32,
    pub scaled: Option<u32>,
    pub generated: Option<u32>,
    pub width_or_zero: Option<u32>,
    /// Absolute file offset of the raw texture blob; `None` once resolved to
    /// mean the texture is external (not stored in this data file).
    data_offset: Option<u32>,
    /// Filled in by [`GMEmbeddedTextures::deserialize`] once the blob's length
    /// has been inferred from its neighbour.
    pub raw_image_data: Vec<u8>,
}

impl GMElement for GMEmbeddedTexture {
    fn deserialize(reader: &mut DataReader) -> Result<Self> {
        if reader.general_info.bytecode_version >= 17 {
            let unknown = reader.read_u32()?;
            let _unknown1 = reader.read_u32()?;
            let scaled = Some(reader.read_u32()?);
            let generated = Some(reader.read_u32()?);
            let _unknown2 = reader.read_u32()?;
            let width_or_zero = Some(reader.read_u32()?);
            let data_offset = non_zero(reader.read_u32()?);
            Ok(Self { unknown, scaled, generated, width_or_zero, data_offset, raw_image_data: vec![] })
        } else {
            let unknown = reader.read_u32()?;
            let data_offset = non_zero(reader.read_u32()?);
            Ok(Self { unknown, data_offset, ..Self::default() })
        }
    }
}

const fn non_zero(value: u32) -> Option<u32> {
    if value == 0 { None } else { Some(value) }
}
