//! Everything related to GML (GameMaker language) bytecode.

pub mod instruction;
pub(crate) mod opcodes;
