use crate::{
    gamemaker::{chunk::ChunkName, deserialize::reader::DataReader, elements::{GMChunk, GMElement}},
    prelude::*,
};

/// `STRG`: every string referenced anywhere else in the file, stored once and pointed
/// to by byte offset. Entries are read directly (not through [`DataReader::read_gm_string`],
/// which resolves a *reference* to one of these entries).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct GMStrings {
    pub strings: Vec<String>,
    pub exists: bool,
}

impl GMChunk for GMStrings {
    const NAME: ChunkName = ChunkName::new("STRG");
    fn exists(&self) -> bool {
        self.exists
    }
}

impl GMElement for GMStrings {
    fn deserialize(reader: &mut DataReader) -> Result<Self> {
        reader.string_chunk = reader.chunk;
        let pointers: Vec<u32> = reader.read_simple_list()?;

        let mut strings = Vec::with_capacity(pointers.len());
        for pointer in pointers {
            let string = reader
                .read_gm_str(pointer)
                .with_context(|| format!("reading STRG entry at pointer {pointer}"))?;
            strings.push(string);
        }

        Ok(Self { strings, exists: true })
    }
}
