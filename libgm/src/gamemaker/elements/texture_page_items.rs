use crate::{
    gamemaker::{
        chunk::ChunkName,
        deserialize::reader::DataReader,
        elements::{GMChunk, GMElement, GMListChunk, embedded_textures::GMEmbeddedTexture},
        reference::GMRef,
    },
    prelude::*,
};

/// `TPAG`: texture atlas sub-rectangles. Every sprite/font/background frame references one
/// of these by pointer; `TPAG` itself must be parsed before any chunk that does so.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GMTexturePageItems {
    pub texture_page_items: Vec<GMTexturePageItem>,
    pub exists: bool,
}

impl GMChunk for GMTexturePageItems {
    const NAME: ChunkName = ChunkName::new("TPAG");
    fn exists(&self) -> bool {
        self.exists
    }
}

impl GMListChunk for GMTexturePageItems {
    type Element = GMTexturePageItem;
    fn elements(&self) -> &Vec<Self::Element> {
        &self.texture_page_items
    }
    fn elements_mut(&mut self) -> &mut Vec<Self::Element> {
        &mut self.texture_page_items
    }
}

impl GMElement for GMTexturePageItems {
    fn deserialize(reader: &mut DataReader) -> Result<Self> {
        let pointers: Vec<u32> = reader.read_simple_list()?;
        let mut texture_page_items: Vec<GMTexturePageItem> = Vec::with_capacity(pointers.len());

        for (i, pointer) in pointers.into_iter().enumerate() {
            reader.cur_pos = pointer;
            reader.texture_page_item_occurrences.insert(pointer, GMRef::new(i as u32));
            texture_page_items.push(GMTexturePageItem::deserialize(reader)?);
        }

        Ok(Self { texture_page_items, exists: true })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GMTexturePageItem {
    pub source_x: u16,
    pub source_y: u16,
    pub source_width: u16,
    pub source_height: u16,
    pub target_x: u16,
    pub target_y: u16,
    pub target_width: u16,
    pub target_height: u16,
    pub bounding_width: u16,
    pub bounding_height: u16,
    pub texture_page: GMRef<GMEmbeddedTexture>,
}

impl GMElement for GMTexturePageItem {
    fn deserialize(reader: &mut DataReader) -> Result<Self> {
        let source_x = reader.read_u16()?;
        let source_y = reader.read_u16()?;
        let source_width = reader.read_u16()?;
        let source_height = reader.read_u16()?;
        let target_x = reader.read_u16()?;
        let target_y = reader.read_u16()?;
        let target_width = reader.read_u16()?;
        let target_height = reader.read_u16()?;
        let bounding_width = reader.read_u16()?;
        let bounding_height = reader.read_u16()?;
        let texture_page_id = reader.read_u16()?;
        let texture_page: GMRef<GMEmbeddedTexture> = GMRef::new(texture_page_id.into());

        Ok(Self {
            source_x,
            source_y,
            source_width,
            source_height,
            target_x,
            target_y,
            target_width,
            target_height,
            bounding_width,
            bounding_height,
            texture_page,
        })
    }
}
