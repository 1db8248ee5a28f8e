//! Small helpers for allocating containers whose size comes straight from
//! untrusted file data, without letting a corrupted count field trigger a
//! multi-gigabyte allocation before a single byte has actually been read.

use crate::prelude::*;

/// Upper bound on any single count/length field taken at face value.
/// Real GameMaker data files never come close to this; a declared count
/// above it is almost certainly a parsing desync, not a huge game.
pub const FAILSAFE_COUNT: u32 = 500_000;

/// `Vec::with_capacity`, but refuses to pre-allocate for absurd counts.
pub fn vec_with_capacity<T>(count: u32) -> Result<Vec<T>> {
    if count > FAILSAFE_COUNT {
        bail!("Refusing to allocate a Vec for {count} elements (exceeds failsafe limit)");
    }
    Ok(Vec::with_capacity(count as usize))
}

/// `TryFromPrimitive::try_from_primitive`, mapped onto our error type with a
/// description of what was being parsed.
pub fn num_enum_from<T>(raw: T::Primitive, description: &str) -> Result<T>
where
    T: num_enum::TryFromPrimitive,
    T::Primitive: std::fmt::Display + Copy,
{
    T::try_from_primitive(raw).map_err(|_| {
        crate::error::err(format!("Invalid {description} value {raw}"))
    })
}
