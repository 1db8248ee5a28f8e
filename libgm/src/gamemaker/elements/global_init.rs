use crate::{
    gamemaker::{
        chunk::ChunkName,
        deserialize::reader::DataReader,
        elements::{GMChunk, GMElement, GMListChunk, code::GMCode},
        reference::GMRef,
    },
    prelude::*,
};

/// `GLOB`: code entries run once, at game start, before the first room loads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GMGlobalInitScripts {
    pub global_init_scripts: Vec<GMRef<GMCode>>,
    pub exists: bool,
}

impl GMChunk for GMGlobalInitScripts {
    const NAME: ChunkName = ChunkName::new("GLOB");
    fn exists(&self) -> bool {
        self.exists
    }
}

impl GMListChunk for GMGlobalInitScripts {
    type Element = GMRef<GMCode>;
    fn elements(&self) -> &Vec<Self::Element> {
        &self.global_init_scripts
    }
    fn elements_mut(&mut self) -> &mut Vec<Self::Element> {
        &mut self.global_init_scripts
    }
}

impl GMElement for GMGlobalInitScripts {
    fn deserialize(reader: &mut DataReader) -> Result<Self> {
        let global_init_scripts: Vec<GMRef<GMCode>> = reader.read_simple_list()?;
        Ok(Self { global_init_scripts, exists: true })
    }
}
