use std::fmt;

use crate::{
    gamemaker::{
        deserialize::reader::DataReader, elements::GMElement,
    },
    prelude::*,
};

#[derive(Clone, PartialEq, Eq)]
pub struct CollisionMask {
    pub rle_data: Vec<u8>,
}

impl fmt::Debug for CollisionMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CollisionMask")
    }
}

impl GMElement for CollisionMask {
    fn deserialize(reader: &mut DataReader) -> Result<Self> {
        let rle_length = reader.read_count("YYSWF Collision Mask RLE Data")?;
        let rle_data: Vec<u8> = reader
            .read_bytes_dyn(rle_length)
            .context("reading RLE Data of Timeline")?
            .to_vec();
        reader.align(4)?; // [From UndertaleModTool] "why it's not aligned before the data is beyond my brain"
        Ok(Self { rle_data })
    }
}
