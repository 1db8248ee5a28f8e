pub mod bitmap;
pub mod shape;
pub mod subshape;

use crate::{
    gamemaker::{
        deserialize::reader::DataReader, elements::GMElement,
    },
    prelude::*,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: i32,
    pub item_data: ItemData,
}

impl GMElement for Item {
    fn deserialize(reader: &mut DataReader) -> Result<Self> {
        let item_type = reader.read_i32()?;
        let id = reader.read_i32()?;
        let item_data: ItemData = match item_type {
            1 => ItemData::ItemShape(shape::Data::deserialize(reader)?),
            2 => ItemData::ItemBitmap(bitmap::Data::deserialize(reader)?),
            3 => ItemData::ItemFont,
            4 => ItemData::ItemTextField,
            5 => ItemData::ItemSprite,
            _ => bail!(
                "Invalid YYSWF Item Type {0} 0x{0:08X} at position {1} while parsing Sprite YYSWF Item",
                item_type,
                reader.cur_pos,
            ),
        };
        Ok(Self { id, item_data })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ItemData {
    ItemShape(shape::Data<subshape::Data>),
    ItemBitmap(bitmap::Data),
    ItemFont,
    ItemTextField,
    ItemSprite,
}
