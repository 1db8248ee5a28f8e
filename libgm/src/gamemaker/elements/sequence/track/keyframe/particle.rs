use crate::{
    gamemaker::{
        deserialize::reader::DataReader,
        elements::{GMElement, particle_system::GMParticleSystem},
        reference::GMRef,
    },
    prelude::*,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub particle: GMRef<GMParticleSystem>,
}

impl GMElement for Particle {
    fn deserialize(reader: &mut DataReader) -> Result<Self> {
        let particle: GMRef<GMParticleSystem> = reader.read_resource_by_id()?;
        Ok(Self { particle })
    }
}
