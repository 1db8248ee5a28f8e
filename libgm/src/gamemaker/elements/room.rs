mod background;
mod flags;
mod game_object;
pub mod layer;
pub mod tile;
mod view;

pub use background::Background;
pub use flags::Flags;
pub use game_object::GameObject;
pub use layer::Layer;
use macros::named_list_chunk;
pub use tile::Tile;
pub use view::View;

use crate::{
    gamemaker::{
        deserialize::reader::DataReader,
        elements::{GMElement, code::GMCode, sequence::GMSequence},
        reference::GMRef,
    },
    prelude::*,
};

#[named_list_chunk("ROOM")]
pub struct GMRooms {
    pub rooms: Vec<GMRoom>,
    pub exists: bool,
}

impl GMElement for GMRooms {
    fn deserialize(reader: &mut DataReader) -> Result<Self> {
        let rooms: Vec<GMRoom> = reader.read_pointer_list()?;
        Ok(Self { rooms, exists: true })
    }

}

#[derive(Debug, Clone, PartialEq)]
#[repr(C)] // Need explicit layout so memory addresses for gm pointers don't collide
pub struct GMRoom {
    pub name: String,
    pub caption: Option<String>,
    pub width: u32,
    pub height: u32,
    pub speed: u32,
    pub persistent: bool,
    pub background_color: u32,
    pub draw_background_color: bool,
    pub creation_code: Option<GMRef<GMCode>>,
    pub flags: Flags,
    pub backgrounds: Vec<Background>,
    pub views: Vec<View>,
    pub game_objects: Vec<GameObject>,
    pub tiles: Vec<Tile>,
    pub instance_creation_order_ids: Vec<i32>,
    pub world: bool,
    pub top: u32,
    pub left: u32,
    pub right: u32,
    pub bottom: u32,
    pub gravity_x: f32,
    pub gravity_y: f32,
    pub meters_per_pixel: f32,
    pub layers: Vec<Layer>,
    pub sequences: Vec<GMSequence>,
}

impl GMElement for GMRoom {
    fn deserialize(reader: &mut DataReader) -> Result<Self> {
        let name: String = reader.read_gm_string()?;
        let caption: Option<String> = reader.read_gm_string_opt()?;
        let width = reader.read_u32()?;
        let height = reader.read_u32()?;
        let speed = reader.read_u32()?;
        let persistent = reader.read_bool32()?;

        // make alpha 255 (background color doesn't have transparency)
        let background_color: u32 = reader.read_u32()? ^ 0xFF00_0000;

        let draw_background_color = reader.read_bool32()?;
        let creation_code: Option<GMRef<GMCode>> = reader.read_resource_by_id_opt()?;
        let flags = Flags::deserialize(reader)?;

        let backgrounds_ptr = reader.read_u32()?;
        let views_ptr = reader.read_u32()?;
        let game_objects_ptr = reader.read_u32()?;
        let tiles_ptr = reader.read_u32()?;
        let instances_ptr = reader.deserialize_if_gm_version((2024, 13))?.unwrap_or(0);

        let world = reader.read_bool32()?;
        let top = reader.read_u32()?;
        let left = reader.read_u32()?;
        let right = reader.read_u32()?;
        let bottom = reader.read_u32()?;
        let gravity_x = reader.read_f32()?;
        let gravity_y = reader.read_f32()?;
        let meters_per_pixel = reader.read_f32()?;

        let layers_ptr: u32 = reader.deserialize_if_gm_version((2, 0))?.unwrap_or(0);
        let sequences_ptr: u32 = reader.deserialize_if_gm_version((2, 3))?.unwrap_or(0);

        reader.assert_pos(backgrounds_ptr, "Room Backgrounds")?;
        let backgrounds: Vec<Background> = reader.read_pointer_list()?;

        reader.assert_pos(views_ptr, "Room Views")?;
        let views: Vec<View> = reader.read_pointer_list()?;

        reader.assert_pos(game_objects_ptr, "Room Game Objects")?;
        let game_objects: Vec<GameObject> = reader.read_pointer_list()?;

        reader.assert_pos(tiles_ptr, "Room Tiles")?;
        let tiles: Vec<Tile> = reader.read_pointer_list()?;

        let instance_creation_order_ids: Vec<i32> =
            if reader.general_info.is_version_at_least((2024, 13)) {
                reader.assert_pos(instances_ptr, "Room Instance Creation Order IDs")?;
                reader.read_simple_list()?
            } else {
                Vec::new()
            };

        let layers: Vec<Layer> = if reader.general_info.is_version_at_least((2, 0)) {
            reader.assert_pos(layers_ptr, "Room Layers")?;
            reader.read_pointer_list()?
        } else {
            Vec::new()
        };

        let sequences: Vec<GMSequence> = if reader.general_info.is_version_at_least((2, 3)) {
            reader.assert_pos(sequences_ptr, "Room Sequences")?;
            reader.read_pointer_list()?
        } else {
            Vec::new()
        };

        Ok(Self {
            name,
            caption,
            width,
            height,
            speed,
            persistent,
            background_color,
            draw_background_color,
            creation_code,
            flags,
            backgrounds,
            views,
            game_objects,
            tiles,
            instance_creation_order_ids,
            world,
            top,
            left,
            right,
            bottom,
            gravity_x,
            gravity_y,
            meters_per_pixel,
            layers,
            sequences,
        })
    }

}
