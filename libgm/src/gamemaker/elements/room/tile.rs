use crate::{
    gamemaker::{
        deserialize::reader::DataReader,
        elements::{GMElement, background::GMBackground, sprite::GMSprite},
        reference::GMRef,
    },
    prelude::*,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub x: i32,
    pub y: i32,
    pub texture: Option<Texture>,
    pub source_x: u32,
    pub source_y: u32,
    pub width: u32,
    pub height: u32,
    pub tile_depth: i32,
    pub instance_id: u32,
    pub scale_x: f32,
    pub scale_y: f32,
    pub color: u32,
}

impl GMElement for Tile {
    fn deserialize(reader: &mut DataReader) -> Result<Self> {
        let x = reader.read_i32()?;
        let y = reader.read_i32()?;
        let texture: Option<Texture> = if reader.general_info.is_version_at_least((2, 0)) {
            reader.read_resource_by_id_opt()?.map(Texture::Sprite)
        } else {
            reader.read_resource_by_id_opt()?.map(Texture::Background)
        };
        let source_x = reader.read_u32()?;
        let source_y = reader.read_u32()?;
        let width = reader.read_u32()?;
        let height = reader.read_u32()?;
        let tile_depth = reader.read_i32()?;
        let instance_id = reader.read_u32()?;
        let scale_x = reader.read_f32()?;
        let scale_y = reader.read_f32()?;
        let color = reader.read_u32()?;
        Ok(Self {
            x,
            y,
            texture,
            source_x,
            source_y,
            width,
            height,
            tile_depth,
            instance_id,
            scale_x,
            scale_y,
            color,
        })
    }

}

#[derive(Debug, Clone, PartialEq)]
pub enum Texture {
    Sprite(GMRef<GMSprite>),
    Background(GMRef<GMBackground>),
}
