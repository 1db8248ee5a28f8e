//! The IDE version quadruple stored in `GEN8`.
//!
//! Unlike `bytecode_version` (a single byte that gates CODE/FUNC/VARI
//! layout), this is the GameMaker Studio version the data file's compiler
//! was built with. Only the major component is used for gating elsewhere
//! in this crate (`ide_version_major >= 2` for the GMS2.3+ shared-bytecode
//! scheme, SEQN, GLOB, LANG); the rest is carried for completeness.

use std::fmt::{Display, Formatter};

use crate::{gamemaker::deserialize::reader::DataReader, prelude::*};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IdeVersion {
    pub major: u32,
    pub minor: u32,
    pub release: u32,
    pub build: u32,
}

impl IdeVersion {
    #[must_use]
    pub const fn is_at_least(&self, major: u32, minor: u32) -> bool {
        self.major > major || (self.major == major && self.minor >= minor)
    }

    pub(crate) fn deserialize(reader: &mut DataReader) -> Result<Self> {
        Ok(Self {
            major: reader.read_u32()?,
            minor: reader.read_u32()?,
            release: reader.read_u32()?,
            build: reader.read_u32()?,
        })
    }
}

impl Display for IdeVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}.{}", self.major, self.minor, self.release, self.build)
    }
}
