use crate::{
    gamemaker::{
        deserialize::reader::DataReader,
        elements::{GMElement, sequence::GMSequence},
        reference::GMRef,
    },
    prelude::*,
};
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence {
    pub sequence: GMRef<GMSequence>,
}

impl GMElement for Sequence {
    fn deserialize(reader: &mut DataReader) -> Result<Self> {
        let sequence: GMRef<GMSequence> = reader.read_resource_by_id()?;
        Ok(Self { sequence })
    }
}
