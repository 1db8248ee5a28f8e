use std::collections::HashMap;

use crate::{
    gamemaker::{
        chunk::ChunkName,
        data::Endianness,
        deserialize::chunk::{ChunkBounds, Chunks},
        elements::{
            GMElement, function::GMFunction, general_info::GMGeneralInfo,
            texture_page_items::GMTexturePageItem, variable::GMVariable,
        },
        reference::GMRef,
    },
    gml::instruction::InstanceType,
    prelude::*,
};

/// Walks a byte buffer front-to-back, handing out bounds-checked little-endian
/// reads. Every chunk sub-parser is handed the same reader, restricted to its
/// chunk's byte range via `self.chunk`.
#[derive(Debug)]
pub struct DataReader<'a> {
    /// The raw data buffer belonging to the GameMaker data file which is currently being parsed.
    data: &'a [u8],

    /// The current read position within the data buffer.
    /// Reading data will be read from this position; incrementing it.
    pub cur_pos: u32,

    /// How many null bytes of padding should be at the end of every chunk (except the last one).
    /// Only relevant on certain platforms/versions. Defaults to 16, but is narrowed to
    /// 4 or 1 the first time a non-zero byte shows up where padding was expected.
    pub chunk_padding: u32,

    /// Indicates the data file's byte endianness.
    /// In most cases (and assumed by default), this is little-endian.
    /// Big endian is an edge case for certain target platforms (e.g. PS3 or Xbox 360).
    pub endianness: Endianness,

    /// Map of all chunks specified by `FORM`; indexed by chunk tag.
    /// Chunks are removed from here as [`DataReader::read_chunk`] consumes them, so that
    /// leftover chunks can be reported once parsing finishes.
    pub chunks: Chunks,

    /// Byte bounds of the chunk currently being parsed.
    /// Every read is bounds-checked against this range.
    pub chunk: ChunkBounds,

    /// General info about this data file: game name, bytecode version, IDE version, etc.
    /// Holds a garbage placeholder until `GEN8` (always the first chunk) is parsed.
    pub general_info: GMGeneralInfo,

    /// All interned strings by index, populated while parsing `STRG`.
    pub strings: Vec<String>,

    /// Byte bounds of chunk `STRG`, captured before any other chunk is parsed so that
    /// string references anywhere in the file can be resolved against it.
    pub string_chunk: ChunkBounds,

    /// Populated by [`crate::gamemaker::elements::texture_page_items`].
    /// `TPAG` must therefore be parsed before any chunk with texture page item pointers.
    pub texture_page_item_occurrences: HashMap<u32, GMRef<GMTexturePageItem>>,

    /// Populated by [`crate::gamemaker::elements::variable`]. `VARI` must be parsed before `CODE`.
    /// The paired [`InstanceType`] is the fallback used by `CODE` entries with `bytecode_version < 15`,
    /// which don't encode their own instance type per occurrence.
    pub variable_occurrences: HashMap<u32, (GMRef<GMVariable>, InstanceType)>,

    /// Populated by [`crate::gamemaker::elements::function`]. `FUNC` must be parsed before `CODE`.
    pub function_occurrences: HashMap<u32, GMRef<GMFunction>>,
}

impl<'a> DataReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        let end_pos: u32 = data.len().try_into().expect("Data length out of u32 bounds");

        Self {
            data,
            cur_pos: 0,
            chunk_padding: 16,
            endianness: Endianness::Little,
            chunk: ChunkBounds { start_pos: 0, end_pos },
            general_info: GMGeneralInfo::default(),
            strings: vec![],
            string_chunk: ChunkBounds::default(),
            chunks: Chunks::default(),
            texture_page_item_occurrences: HashMap::new(),
            variable_occurrences: HashMap::new(),
            function_occurrences: HashMap::new(),
        }
    }

    /// The size / byte length of the data file.
    pub const fn size(&self) -> u32 {
        self.data.len() as u32
    }

    /// Read the specified number of bytes from the data file while advancing the data position.
    /// Returns an error when trying to read out of chunk bounds.
    pub fn read_bytes_dyn(&mut self, count: u32) -> Result<&'a [u8]> {
        let start: u32 = self.cur_pos;
        let end: u32 = self.cur_pos.checked_add(count).ok_or("Trying to read out of u32 bounds")?;

        if start < self.chunk.start_pos {
            bail!(
                "Trying to read {} bytes out of lower chunk bounds at position {} with start position {}",
                count,
                self.cur_pos,
                self.chunk.start_pos,
            );
        }

        if end > self.chunk.end_pos {
            bail!(
                "Trying to read {} bytes out of upper chunk bounds at position {} with end position {}",
                count,
                self.cur_pos,
                self.chunk.end_pos,
            );
        }

        #[cfg(not(any(target_pointer_width = "32", target_pointer_width = "64")))]
        compile_error!(
            "Cannot safely convert u32 to usize on this platform (target pointer width not 32 or 64)"
        );

        // SAFETY: bounds already checked against chunk.start_pos/end_pos above, which are
        // themselves always within `self.data` by construction.
        let slice: &[u8] = unsafe { self.data.get_unchecked(start as usize..end as usize) };
        self.cur_pos += count;
        Ok(slice)
    }

    /// Read a constant number of bytes from the data file while advancing the data position.
    /// Useful for reading slices with specified sizes like `[u8; 16]`.
    pub fn read_bytes_const<const N: usize>(&mut self) -> Result<&'a [u8; N]> {
        let slice: &[u8] = self.read_bytes_dyn(N as u32)?;
        // SAFETY: read_bytes_dyn is guaranteed to return a slice of exactly N bytes.
        Ok(unsafe { &*slice.as_ptr().cast::<[u8; N]>() })
    }

    /// Read a 32-bit integer and convert it to a bool.
    /// Returns an error when the read number is neither 0 nor 1.
    pub fn read_bool32(&mut self) -> Result<bool> {
        let number = self.read_u32()?;
        match number {
            0 => Ok(false),
            1 => Ok(true),
            n => bail!("Read invalid boolean value {n} (0x{n:08X}) at position {}", self.cur_pos),
        }
    }

    /// Read a UTF-8 character string with the specified byte length.
    /// For reading standard GameMaker string references, see [`DataReader::read_gm_string`].
    pub fn read_literal_string(&mut self, length: u32) -> Result<String> {
        let bytes: Vec<u8> = self
            .read_bytes_dyn(length)
            .with_context(|| format!("reading literal string with length {length}"))?
            .to_vec();

        String::from_utf8(bytes).map_err(|e| e.to_string()).with_context(|| {
            format!(
                "parsing literal UTF-8 string with length {} at position {}",
                length,
                self.cur_pos - length,
            )
        })
    }

    /// Gets the length of the chunk that is being currently parsed.
    pub const fn get_chunk_length(&self) -> u32 {
        self.chunk.end_pos - self.chunk.start_pos
    }

    /// Read bytes until the reader position is divisible by the specified alignment.
    /// Ensures the read padding bytes are all zero.
    pub fn align(&mut self, alignment: u32) -> Result<()> {
        while !self.cur_pos.is_multiple_of(alignment) {
            let byte = self.read_u8()?;
            crate::util::assert::int(byte, 0, "padding byte")
                .with_context(|| format!("aligning reader to {alignment}"))?;
        }
        Ok(())
    }

    /// Ensures the reader is at the specified absolute position.
    /// Used right after seeking to a pointer-list offset, to catch desyncs early.
    pub fn assert_pos(&self, position: u32, pointer_name: &str) -> Result<()> {
        if self.cur_pos != position {
            if position == 0 {
                bail!(
                    "{} pointer is zero at position {}! Null pointers are not supported.",
                    pointer_name,
                    self.cur_pos,
                )
            }
            bail!(
                "{} pointer misaligned: expected position {} but reader is actually at {} (diff: {})",
                pointer_name,
                position,
                self.cur_pos,
                i64::from(position) - i64::from(self.cur_pos),
            )
        }
        Ok(())
    }

    /// Sets the reader position to the current chunk's start position plus the specified relative position.
    pub fn set_rel_cur_pos(&mut self, relative_pos: u32) -> Result<()> {
        let start = self.chunk.start_pos;
        let end = self.chunk.end_pos;
        let pos = start
            .checked_add(relative_pos)
            .ok_or_else(|| err(format!("Relative position {relative_pos} would overflow from start position {start}")))?;

        if pos > end {
            bail!("Position {pos} (start {start} + relative {relative_pos}) exceeds chunk end position {end}");
        }

        self.cur_pos = pos;
        Ok(())
    }

    /// Deserializes an element only if `bytecode_version >= ver_req`, otherwise `None`.
    pub fn deserialize_if_bytecode_version<T: GMElement>(&mut self, ver_req: u8) -> Result<Option<T>> {
        if self.general_info.bytecode_version >= ver_req {
            Ok(Some(T::deserialize(self)?))
        } else {
            Ok(None)
        }
    }

    /// Deserializes an element only if `ide_version.major >= ver_req`, otherwise `None`.
    pub fn deserialize_if_ide_major_version<T: GMElement>(&mut self, ver_req: u32) -> Result<Option<T>> {
        if self.general_info.ide_version.major >= ver_req {
            Ok(Some(T::deserialize(self)?))
        } else {
            Ok(None)
        }
    }
}
