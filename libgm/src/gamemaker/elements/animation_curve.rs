pub mod channel;

pub use channel::Channel;

use crate::{gamemaker::{deserialize::reader::DataReader, elements::GMElement}, prelude::*};

/// An embedded animation curve, e.g. owned by a sequence [`Track`](super::sequence::track::Track).
///
/// GameMaker 2.3+. Distinct from the (unparsed, opaque) top-level `ACRV` chunk: these
/// instances are inlined directly into their owning element rather than referenced by pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct GMAnimationCurve {
    pub name: String,
    /// This field may change in the future.
    pub graph_type: u32,
    pub channels: Vec<Channel>,
}

impl GMElement for GMAnimationCurve {
    fn deserialize(reader: &mut DataReader) -> Result<Self> {
        let name = reader.read_gm_string()?;
        let graph_type = reader.read_u32()?;
        let channels: Vec<Channel> = reader.read_simple_list()?;
        Ok(Self { name, graph_type, channels })
    }
}
