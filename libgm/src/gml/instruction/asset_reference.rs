use crate::{
    gamemaker::{
        elements::{
            font::GMFont, function::GMFunction, room::GMRoom, scripts::GMScript,
            sequence::GMSequence, shader::GMShader, sound::GMSound, sprite::GMSprite,
        },
        reference::GMRef,
    },
    prelude::*,
};

/// An asset reference operand of the `Brk` `pushref` signal (GMS2.3+).
///
/// Decoded from a single word: bits 31-24 are the asset kind tag, bits 23-0 the
/// zero-based index into that asset's chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetReference {
    Function(GMRef<GMFunction>),
    Sprite(GMRef<GMSprite>),
    Sound(GMRef<GMSound>),
    Room(GMRef<GMRoom>),
    /// Deprecated since GMS2; this crate does not parse a `PATH` chunk, so the
    /// asset index is kept raw rather than resolved.
    Path(u32),
    Script(GMRef<GMScript>),
    Font(GMRef<GMFont>),
    /// This crate does not parse a `TMLN` chunk, so the asset index is kept raw.
    Timeline(u32),
    Shader(GMRef<GMShader>),
    Sequence(GMRef<GMSequence>),
}

impl AssetReference {
    const FUNC: u8 = 0;
    const SPRT: u8 = 1;
    const SOND: u8 = 2;
    const ROOM: u8 = 3;
    const PATH: u8 = 4;
    const SCPT: u8 = 5;
    const FONT: u8 = 6;
    const TMLN: u8 = 7;
    const SHDR: u8 = 8;
    const SEQN: u8 = 9;

    /// Decodes `(kind_tag << 24) | asset_index` as read from the bytecode stream.
    pub fn parse(raw: u32) -> Result<Self> {
        let kind = (raw >> 24) as u8;
        let index = raw & 0x00FF_FFFF;

        Ok(match kind {
            Self::FUNC => Self::Function(GMRef::new(index)),
            Self::SPRT => Self::Sprite(GMRef::new(index)),
            Self::SOND => Self::Sound(GMRef::new(index)),
            Self::ROOM => Self::Room(GMRef::new(index)),
            Self::PATH => Self::Path(index),
            Self::SCPT => Self::Script(GMRef::new(index)),
            Self::FONT => Self::Font(GMRef::new(index)),
            Self::TMLN => Self::Timeline(index),
            Self::SHDR => Self::Shader(GMRef::new(index)),
            Self::SEQN => Self::Sequence(GMRef::new(index)),
            _ => bail!("Invalid pushref asset kind tag {kind} (0x{kind:02X})"),
        })
    }
}
