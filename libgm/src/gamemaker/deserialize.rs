pub(crate) mod chunk;
mod lists;
mod numbers;
pub(crate) mod reader;
pub mod resources;
mod integrity;

use std::path::Path;

use crate::{
    gamemaker::{
        chunk::ChunkName,
        data::{Endianness, GMData},
        deserialize::{
            chunk::Chunks,
            reader::DataReader,
        },
        elements::{
            GMChunk,
            background::GMBackgrounds,
            code::{GMCodes, check_yyc},
            embedded_audio::GMEmbeddedAudios,
            embedded_textures::GMEmbeddedTextures,
            font::GMFonts,
            function::GMFunctions,
            game_object::GMGameObjects,
            general_info::GMGeneralInfo,
            global_init::GMGlobalInitScripts,
            languages::GMLanguageInfo,
            options::GMOptions,
            room::GMRooms,
            scripts::GMScripts,
            sequence::GMSequences,
            shader::GMShaders,
            sound::GMSounds,
            sprite::GMSprites,
            strings::GMStrings,
            texture_page_items::GMTexturePageItems,
            variable::GMVariables,
        },
    },
    prelude::*,
    util::bench::Stopwatch,
};

const ERR_TOO_BIG: &str =
    "Data file is bigger than 2,147,483,646 bytes which will lead to bugs in LibGM";

/// Configures how [`DataParser`] behaves when encountering malformed or unrecognized data.
pub struct DataParser {
    options: ParserOptions,
}

pub(crate) struct ParserOptions {
    pub allow_unknown_chunks: bool,
}

impl Default for DataParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DataParser {
    #[must_use]
    pub const fn new() -> Self {
        Self { options: ParserOptions { allow_unknown_chunks: true } }
    }

    /// When **disabled**, requires that every chunk tag present in `FORM` is one this
    /// crate recognizes. Useful to catch unknown chunks (e.g. from a newer GameMaker
    /// release) instead of silently skipping them.
    ///
    /// > Default: **true**
    #[must_use]
    pub const fn allow_unknown_chunks(mut self, enabled: bool) -> Self {
        self.options.allow_unknown_chunks = enabled;
        self
    }

    fn parse(&self, raw_data: impl AsRef<[u8]>) -> Result<GMData> {
        let raw_data = raw_data.as_ref();

        #[cfg(feature = "catch-panic")]
        {
            crate::util::panic::catch(|| self.parse_inner(raw_data))
        }
        #[cfg(not(feature = "catch-panic"))]
        {
            self.parse_inner(raw_data)
        }
    }

    fn parse_inner(&self, raw_data: &[u8]) -> Result<GMData> {
        let stopwatch = Stopwatch::start();
        let form_base_offset = find_form_offset(raw_data)?;
        let mut reader: DataReader = parse_form(&raw_data[form_base_offset as usize..])?;

        // GEN8 must be read first: everything else may reference bytecode_version/ide_version.
        reader.string_chunk = reader
            .chunks
            .get(ChunkName::new("STRG"))
            .ok_or("Chunk STRG does not exist")?;
        reader.general_info = reader.read_chunk()?;
        if !reader.general_info.exists {
            bail!("GEN8 chunk does not exist");
        }

        log::info!(
            "Loading {:?} (IDE {}, Bytecode {})",
            reader.general_info.display_name,
            reader.general_info.ide_version,
            reader.general_info.bytecode_version,
        );

        // Required order: [STRG, FUNC, VARI] --> CODE; TPAG --> [BGND, FONT, OPTN, SPRT]
        let strings: GMStrings = reader.read_chunk()?;
        let texture_page_items: GMTexturePageItems = reader.read_chunk()?;

        if check_yyc(&reader)? {
            log::debug!("CODE chunk is absent; this is a YYC-compiled data file");
        }
        let variables: GMVariables = reader.read_chunk()?;
        let functions: GMFunctions = reader.read_chunk()?;
        let codes: GMCodes = reader.read_chunk()?;

        let embedded_textures: GMEmbeddedTextures = reader.read_chunk()?;
        let scripts: GMScripts = reader.read_chunk()?;
        let fonts: GMFonts = reader.read_chunk()?;
        let sprites: GMSprites = reader.read_chunk()?;
        let game_objects: GMGameObjects = reader.read_chunk()?;
        let rooms: GMRooms = reader.read_chunk()?;
        let backgrounds: GMBackgrounds = reader.read_chunk()?;
        let audios: GMEmbeddedAudios = reader.read_chunk()?;
        let sounds: GMSounds = reader.read_chunk()?;
        let options: GMOptions = reader.read_chunk()?;
        let sequences: GMSequences = reader.read_chunk()?;
        let language_info: GMLanguageInfo = reader.read_chunk()?;
        let global_init_scripts: GMGlobalInitScripts = reader.read_chunk()?;
        let shaders: GMShaders = reader.read_chunk()?;

        if !options.exists {
            bail!("Required chunk OPTN does not exist");
        }

        handle_unread_chunks(&reader.chunks, self.options.allow_unknown_chunks)?;

        let data = GMData {
            chunk_padding: reader.chunk_padding,
            endianness: reader.endianness,
            original_data_size: reader.size(),

            general_info: reader.general_info,
            strings: strings.strings,

            codes,
            functions,
            variables,
            scripts,
            global_init_scripts,
            language_info,

            options,

            embedded_textures,
            texture_page_items,
            sprites,
            backgrounds,
            fonts,
            shaders,
            sequences,

            audios,
            sounds,

            game_objects,
            rooms,

            form_base_offset,
        };

        log::trace!("Parsing data took {stopwatch}");
        Ok(data)
    }

    /// Parse a GameMaker data file from an in-memory buffer.
    pub fn parse_bytes(&self, raw_data: impl AsRef<[u8]>) -> Result<GMData> {
        self.parse(raw_data).context("parsing GameMaker data")
    }

    /// Parse a GameMaker data file (`data.win`, `game.unx`, etc).
    pub fn parse_file(&self, data_file_path: impl AsRef<Path>) -> Result<GMData> {
        let path = data_file_path.as_ref();

        let meta = std::fs::metadata(path)
            .map_err(|e| e.to_string())
            .with_context(|| format!("reading metadata of data file {}", path.display()))?;

        if meta.len() >= i32::MAX as u64 {
            bail!("{ERR_TOO_BIG}");
        }

        let stopwatch = Stopwatch::start();
        let raw_data: Vec<u8> = std::fs::read(path)
            .map_err(|e| e.to_string())
            .with_context(|| format!("reading data file {}", path.display()))?;
        log::trace!("Reading data file took {stopwatch}");

        self.parse(raw_data)
            .with_context(|| format!("parsing GameMaker data file {}", path.display()))
    }
}

/// Locates the `FORM` magic in a buffer that may carry a PE envelope (or other
/// prefix) before the actual container. Every chunk offset in the parsed structure
/// is relative to this position, not to byte 0 of the buffer.
fn find_form_offset(raw_data: &[u8]) -> Result<u32> {
    const MAGIC: &[u8; 4] = b"FORM";

    if raw_data.len() >= 8 && &raw_data[0..4] == MAGIC {
        return Ok(0);
    }

    for offset in 1..raw_data.len().saturating_sub(7) {
        if &raw_data[offset..offset + 4] != MAGIC {
            continue;
        }

        let size = u32::from_le_bytes([
            raw_data[offset + 4],
            raw_data[offset + 5],
            raw_data[offset + 6],
            raw_data[offset + 7],
        ]);

        if (size as usize).checked_add(8).is_some_and(|total| total <= raw_data.len() - offset) {
            log::debug!("Found 'FORM' magic at offset {offset}; treating preceding bytes as an envelope");
            return Ok(offset as u32);
        }
    }

    bail!("Could not find 'FORM' magic anywhere in the data buffer");
}

fn parse_form(raw_data: &[u8]) -> Result<DataReader<'_>> {
    if raw_data.len() >= i32::MAX as usize {
        bail!("{ERR_TOO_BIG}");
    }

    let mut reader = DataReader::new(raw_data);

    let root_chunk_name = reader.read_chunk_name()?;
    reader.endianness = match root_chunk_name.as_str() {
        "FORM" => Endianness::Little,
        "MROF" => Endianness::Big,
        _ => bail!("Invalid data file: expected root chunk to be 'FORM' but found '{root_chunk_name}'"),
    };
    if reader.endianness == Endianness::Big {
        log::warn!("Big endian format might not work, proceed with caution");
    }

    let total_data_len = reader.read_u32()? + reader.cur_pos;
    if total_data_len as usize != raw_data.len() {
        bail!(
            "Specified FORM data length is {} but data is actually {} bytes long",
            total_data_len,
            raw_data.len(),
        );
    }

    while reader.cur_pos + 8 < total_data_len {
        let name = reader.read_chunk_name()?;
        let chunk_length = reader.read_u32()?;
        let start_pos = reader.cur_pos;

        reader.cur_pos = reader
            .cur_pos
            .checked_add(chunk_length)
            .filter(|&pos| pos <= total_data_len)
            .ok_or_else(|| {
                format!("Chunk '{name}' out of bounds: specified length {chunk_length} would exceed total length {total_data_len}")
            })?;

        let end_pos = reader.cur_pos;
        let bounds = chunk::ChunkBounds { start_pos, end_pos };
        reader.chunks.push(name, bounds)?;
    }

    Ok(reader)
}

/// Checks whether any unprocessed chunks remain after the recognized set was read.
fn handle_unread_chunks(chunks: &Chunks, allow_unknown_chunks: bool) -> Result<()> {
    if chunks.is_empty() {
        return Ok(());
    }

    let count = chunks.count();
    let mut buffer = String::with_capacity(count * 6);
    for chunk_name in chunks.chunk_names() {
        buffer.push_str(chunk_name.as_str());
        buffer.push_str(", ");
    }
    buffer.pop();
    buffer.pop();

    let noun = if count == 1 { "chunk" } else { "chunks" };
    let message = format!("{count} unrecognized {noun} preserved as opaque data: {buffer}");

    if allow_unknown_chunks {
        log::debug!("{message}");
        Ok(())
    } else {
        bail!("{message}");
    }
}

/// Parse a GameMaker data file (stored in a buffer) with default settings.
pub fn read_data_bytes(raw_data: impl AsRef<[u8]>) -> Result<GMData> {
    DataParser::new().parse_bytes(raw_data)
}

/// Parse a GameMaker data file (`data.win`, `game.unx`, etc.) with default settings.
pub fn read_data_file(data_file_path: impl AsRef<Path>) -> Result<GMData> {
    DataParser::new().parse_file(data_file_path)
}

#[cfg(test)]
mod tests {
    use super::{find_form_offset, parse_form};

    /// `FORM` + declared size + one `TEST` chunk with a 4-byte zeroed body.
    fn minimal_form() -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(b"FORM");
        buf.extend_from_slice(&12u32.to_le_bytes()); // declared_size: filled in below
        buf.extend_from_slice(b"TEST");
        buf.extend_from_slice(&4u32.to_le_bytes());
        buf.extend_from_slice(&[0u8; 4]);
        buf
    }

    #[test]
    fn finds_form_at_offset_zero() {
        let buf = minimal_form();
        assert_eq!(find_form_offset(&buf).unwrap(), 0);
    }

    #[test]
    fn finds_form_behind_pe_envelope() {
        let mut buf = vec![0xAAu8; 256];
        buf.extend_from_slice(&minimal_form());
        assert_eq!(find_form_offset(&buf).unwrap(), 256);
    }

    #[test]
    fn missing_form_magic_is_an_error() {
        let buf = vec![0xAAu8; 64];
        assert!(find_form_offset(&buf).is_err());
    }

    #[test]
    fn chunk_table_contiguity() {
        let mut buf = Vec::new();
        buf.extend_from_slice(b"FORM");
        buf.extend_from_slice(&0u32.to_le_bytes()); // patched below
        buf.extend_from_slice(b"AAAA");
        buf.extend_from_slice(&4u32.to_le_bytes());
        buf.extend_from_slice(&[1, 2, 3, 4]);
        buf.extend_from_slice(b"BBBB");
        buf.extend_from_slice(&2u32.to_le_bytes());
        buf.extend_from_slice(&[5, 6]);

        let declared_size = (buf.len() - 8) as u32;
        buf[4..8].copy_from_slice(&declared_size.to_le_bytes());

        let reader = parse_form(&buf).unwrap();
        assert_eq!(reader.chunks.count(), 2);

        let first = reader.chunks.get(crate::gamemaker::chunk::ChunkName::new("AAAA")).unwrap();
        let second = reader.chunks.get(crate::gamemaker::chunk::ChunkName::new("BBBB")).unwrap();
        // Second chunk's body starts exactly 8 bytes after the first chunk's body end.
        assert_eq!(second.start_pos, first.end_pos + 8);
        assert_eq!(first.length(), 4);
        assert_eq!(second.length(), 2);
    }
}
