use crate::{
    gamemaker::{
        deserialize::reader::DataReader, elements::GMElement,
    },
    prelude::*,
};
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct String {
    pub string: std::string::String,
}

impl GMElement for String {
    fn deserialize(reader: &mut DataReader) -> Result<Self> {
        let string: std::string::String = reader.read_gm_string()?;
        Ok(Self { string })
    }
}
