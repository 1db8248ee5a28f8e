use crate::{
    gamemaker::{
        deserialize::reader::DataReader, elements::GMElement,
    },
    prelude::*,
};
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteFrames {
    pub value: i32,
}

impl GMElement for SpriteFrames {
    fn deserialize(reader: &mut DataReader) -> Result<Self> {
        let value = reader.read_i32()?;
        Ok(Self { value })
    }
}
