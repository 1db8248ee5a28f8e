use crate::{
    gamemaker::{
        deserialize::reader::DataReader, elements::GMElement,
    },
    prelude::*,
};
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bool {
    pub boolean: bool,
}

impl GMElement for Bool {
    fn deserialize(reader: &mut DataReader) -> Result<Self> {
        let boolean = reader.read_bool32()?;
        Ok(Self { boolean })
    }
}
