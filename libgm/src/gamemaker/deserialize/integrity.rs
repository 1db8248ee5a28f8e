use std::fmt::{Display, UpperHex};

use crate::{gamemaker::deserialize::reader::DataReader, gml::instruction::DataType, prelude::*};

/// Integrity-check helpers, all gated behind the `check-integrity` feature.
/// With the feature disabled, these are no-ops: useful when parsing files from
/// unofficial GameMaker forks whose constants are known to differ.
impl DataReader<'_> {
    pub fn read_gms2_chunk_version(&mut self, desc: &'static str) -> Result<()> {
        let chunk_version = self.read_u32()?;
        self.assert_int(chunk_version, 1, desc)?;
        Ok(())
    }

    pub fn assert_int<I: Copy + Eq + Display + UpperHex>(
        &self,
        actual: I,
        expected: I,
        description: &'static str,
    ) -> Result<()> {
        if cfg!(not(feature = "check-integrity")) || expected == actual {
            return Ok(());
        }

        let width = size_of::<I>() * 2;
        bail!(
            "Expected {description} to be {expected} but it is actually {actual} (0x{actual:0width$X})",
        );
    }

    pub fn assert_bool(&self, actual: bool, expected: bool, description: &'static str) -> Result<()> {
        if cfg!(not(feature = "check-integrity")) || expected == actual {
            return Ok(());
        }
        bail!("Expected {description} to be {expected} but it is actually {actual}");
    }

    pub fn assert_data_type(&self, actual: DataType, expected: DataType, description: &'static str) -> Result<()> {
        if cfg!(not(feature = "check-integrity")) || expected == actual {
            return Ok(());
        }
        bail!("Expected {description} Data Type to be {expected:?} but it is actually {actual:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gms2_chunk_version_one_is_accepted() {
        let buf = 1u32.to_le_bytes();
        let mut reader = DataReader::new(&buf);
        assert!(reader.read_gms2_chunk_version("test chunk version").is_ok());
    }

    #[test]
    #[cfg(feature = "check-integrity")]
    fn gms2_chunk_version_other_than_one_is_rejected() {
        let buf = 2u32.to_le_bytes();
        let mut reader = DataReader::new(&buf);
        assert!(reader.read_gms2_chunk_version("test chunk version").is_err());
    }
}
