use crate::prelude::Result;

macro_rules! bitfield_struct {
    (
        $(#[$meta:meta])*
        $name:ident : $int:ty {
            $(
                $(#[$field_meta:meta])*
                $field:ident: $bit:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct $name {
            $(
                $(#[$field_meta])*
                pub $field: bool,
            )*
        }

        impl crate::gamemaker::elements::GMElement for $name {
            fn deserialize(reader: &mut crate::gamemaker::deserialize::reader::DataReader) -> Result<Self> {
                let raw = <$int>::deserialize(reader)?;
                Ok(Self::parse(raw))
            }
        }

        impl $name {
            pub(crate) const fn parse(raw: $int) -> Self {
                Self {
                    $($field: raw & (1 << $bit) != 0,)*
                }
            }

            /// Repacks the fields back into the raw bit representation.
            ///
            /// Used for integrity checks that recompute a checksum over the original flags;
            /// this crate has no write path.
            pub(crate) const fn build(&self) -> $int {
                let mut raw: $int = 0;
                $(if self.$field { raw |= 1 << $bit; })*
                raw
            }
        }
    };
}

pub(crate) use bitfield_struct;
