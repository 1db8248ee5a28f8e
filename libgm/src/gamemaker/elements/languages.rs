use crate::{
    gamemaker::{chunk::ChunkName, deserialize::reader::DataReader, elements::{GMChunk, GMElement}},
    prelude::*,
    util::init::vec_with_capacity,
};

/// `LANG`: localized text entries, keyed by an ID shared across every [`GMLanguageData`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GMLanguageInfo {
    pub unknown1: u32,
    pub entry_ids: Vec<String>,
    pub languages: Vec<GMLanguageData>,
    pub exists: bool,
}

impl GMChunk for GMLanguageInfo {
    const NAME: ChunkName = ChunkName::new("LANG");
    fn exists(&self) -> bool {
        self.exists
    }
}

impl GMElement for GMLanguageInfo {
    fn deserialize(reader: &mut DataReader) -> Result<Self> {
        let unknown1 = reader.read_u32()?;
        let language_count = reader.read_u32()?;
        let entry_count = reader.read_u32()?;

        let mut entry_ids: Vec<String> = vec_with_capacity(entry_count)?;
        for _ in 0..entry_count {
            entry_ids.push(reader.read_gm_string()?);
        }

        let mut languages: Vec<GMLanguageData> = vec_with_capacity(language_count)?;
        for _ in 0..language_count {
            let name: String = reader.read_gm_string()?;
            let region: String = reader.read_gm_string()?;
            let mut entries: Vec<String> = Vec::with_capacity(entry_count as usize);
            for _ in 0..entry_count {
                entries.push(reader.read_gm_string()?);
            }
            languages.push(GMLanguageData { name, region, entries });
        }

        Ok(Self { unknown1, entry_ids, languages, exists: true })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GMLanguageData {
    pub name: String,
    pub region: String,
    pub entries: Vec<String>,
}
