use crate::{
    gamemaker::{
        chunk::ChunkName,
        data::Endianness,
        deserialize::reader::DataReader,
        elements::{GMChunk, GMElement},
    },
    prelude::*,
    util::{bench::Stopwatch, smallmap::SmallMap},
};

/// Byte range of a chunk's body within the file buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChunkBounds {
    pub start_pos: u32,
    pub end_pos: u32,
}

impl ChunkBounds {
    #[must_use]
    pub const fn length(&self) -> u32 {
        self.end_pos - self.start_pos
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length() == 0
    }
}

/// The chunk table of a container: every chunk's tag and byte range, in file order.
/// Chunks are removed from here one at a time as they're parsed, so that
/// leftover (unrecognised or intentionally-skipped) chunks can be reported afterwards.
#[derive(Debug, Default)]
pub struct Chunks {
    map: SmallMap<ChunkName, ChunkBounds>,
    /// Tag of the chunk physically last in the file; it never carries trailing padding.
    pub last: ChunkName,
}

impl Chunks {
    pub fn get(&self, name: ChunkName) -> Option<ChunkBounds> {
        self.map.get(&name).copied()
    }

    pub fn remove(&mut self, name: ChunkName) -> Option<ChunkBounds> {
        self.map.remove(&name)
    }

    pub fn push(&mut self, name: ChunkName, bounds: ChunkBounds) -> Result<()> {
        if self.map.contains_key(&name) {
            bail!("Chunk '{name}' appears more than once in FORM");
        }
        self.map.insert(name, bounds);
        self.last = name;
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.map.len()
    }

    pub fn chunk_names(&self) -> impl Iterator<Item = &ChunkName> {
        self.map.keys()
    }
}

impl DataReader<'_> {
    /// Reads a `GameMaker` chunk tag consisting of 4 ASCII characters.
    /// Accounts for endianness: chunk tags are reversed on big-endian targets.
    pub fn read_chunk_name(&mut self) -> Result<ChunkName> {
        let bytes: [u8; 4] = *self.read_bytes_const().context("reading chunk tag")?;
        let name = ChunkName::from_bytes(bytes)?;

        if self.endianness == Endianness::Big {
            let mut bytes = name.as_bytes();
            bytes.reverse();
            return ChunkName::from_bytes(bytes);
        }

        Ok(name)
    }

    /// Reads a chunk of type `T` out of the chunk table, or returns `T::default()`
    /// (not present) if the chunk's tag was never in the table.
    pub fn read_chunk<T: GMChunk>(&mut self) -> Result<T> {
        let Some(chunk) = self.chunks.remove(T::NAME) else {
            return Ok(T::default());
        };

        let ctx = || format!("deserializing chunk '{}'", T::NAME);
        let stopwatch = Stopwatch::start();
        self.cur_pos = chunk.start_pos;
        self.chunk = chunk;

        let element = T::deserialize(self).with_context(ctx)?;

        if T::NAME != self.chunks.last {
            self.read_chunk_padding().with_context(ctx)?;
        }

        crate::util::assert::int(self.cur_pos, self.chunk.end_pos, "chunk end position")
            .with_context(ctx)?;

        log::trace!("Parsing chunk '{}' took {stopwatch}", T::NAME);
        Ok(element)
    }

    /// Reads the null-byte padding that may follow a chunk's body, depending on
    /// the platform and the detected padding granularity (16, 4, or 1 bytes).
    fn read_chunk_padding(&mut self) -> Result<()> {
        while !self.cur_pos.is_multiple_of(self.chunk_padding) {
            let byte: u8 = self.read_u8().context("reading chunk padding")?;
            if byte == 0 {
                continue;
            }

            // Byte is not zero: our assumed padding granularity was wrong. Back off and narrow it.
            self.cur_pos -= 1;
            self.chunk_padding = if self.cur_pos % 4 == 0 { 4 } else { 1 };
            log::debug!("Set chunk padding to {}", self.chunk_padding);
            return Ok(());
        }
        Ok(())
    }
}
