use crate::{
    gamemaker::{
        chunk::ChunkName,
        deserialize::{reader::DataReader, resources::resource_opt_from_i32},
        elements::{GMChunk, GMElement, GMListChunk, code::GMCode},
        reference::GMRef,
    },
    prelude::*,
};

/// `SCPT`: one entry per named script, linking its name to a `CODE` entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GMScripts {
    pub scripts: Vec<GMScript>,
    pub exists: bool,
}

impl GMChunk for GMScripts {
    const NAME: ChunkName = ChunkName::new("SCPT");
    fn exists(&self) -> bool {
        self.exists
    }
}

impl GMListChunk for GMScripts {
    type Element = GMScript;
    fn elements(&self) -> &Vec<Self::Element> {
        &self.scripts
    }
    fn elements_mut(&mut self) -> &mut Vec<Self::Element> {
        &mut self.scripts
    }
}

impl GMElement for GMScripts {
    fn deserialize(reader: &mut DataReader) -> Result<Self> {
        let scripts: Vec<GMScript> = reader.read_pointer_list()?;
        Ok(Self { scripts, exists: true })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GMScript {
    pub name: String,
    /// Set on GMS2.3+ constructor scripts; the sign bit of the on-disk code ID is
    /// stolen to flag this instead of being part of the ID.
    pub is_constructor: bool,
    pub code: Option<GMRef<GMCode>>,
}

impl GMElement for GMScript {
    fn deserialize(reader: &mut DataReader) -> Result<Self> {
        let name: String = reader.read_gm_string()?;
        let mut code_id: i32 = reader.read_i32()?;
        let mut is_constructor = false;
        if code_id < -1 {
            code_id &= 0x7FFF_FFFF;
            is_constructor = true;
        }
        let code: Option<GMRef<GMCode>> = resource_opt_from_i32(code_id)?;
        Ok(Self { name, is_constructor, code })
    }
}
