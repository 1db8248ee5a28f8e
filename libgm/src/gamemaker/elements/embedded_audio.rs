use crate::{
    gamemaker::{chunk::ChunkName, deserialize::reader::DataReader, elements::{GMChunk, GMElement, GMListChunk}},
    prelude::*,
};

/// `AUDO`: raw embedded audio payloads (WAV or OGG), referenced by index from `SOND`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GMEmbeddedAudios {
    pub audios: Vec<GMEmbeddedAudio>,
    pub exists: bool,
}

impl GMChunk for GMEmbeddedAudios {
    const NAME: ChunkName = ChunkName::new("AUDO");
    fn exists(&self) -> bool {
        self.exists
    }
}

impl GMListChunk for GMEmbeddedAudios {
    type Element = GMEmbeddedAudio;
    fn elements(&self) -> &Vec<Self::Element> {
        &self.audios
    }
    fn elements_mut(&mut self) -> &mut Vec<Self::Element> {
        &mut self.audios
    }
}

impl GMElement for GMEmbeddedAudios {
    fn deserialize(reader: &mut DataReader) -> Result<Self> {
        let audios: Vec<GMEmbeddedAudio> = reader.read_pointer_list()?;
        Ok(Self { audios, exists: true })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GMEmbeddedAudio {
    pub audio_data: Vec<u8>,
}

impl GMElement for GMEmbeddedAudio {
    fn deserialize(reader: &mut DataReader) -> Result<Self> {
        let audio_data_length = reader.read_u32()?;
        let audio_data: Vec<u8> = reader.read_bytes_dyn(audio_data_length)?.to_vec();
        Ok(Self { audio_data })
    }

    fn deserialize_post_padding(reader: &mut DataReader, is_last: bool) -> Result<()> {
        if !is_last {
            reader.align(4)?;
        }
        Ok(())
    }
}
