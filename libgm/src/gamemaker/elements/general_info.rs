mod flags;
mod gms2;

use chrono::{DateTime, Utc};
pub use flags::Flags;
pub use gms2::GMS2Data;
use uuid::Uuid;

use crate::{
    gamemaker::{
        chunk::ChunkName,
        data::Endianness,
        deserialize::reader::DataReader,
        elements::{GMChunk, GMElement, room::GMRoom},
        reference::GMRef,
        version::IdeVersion,
    },
    prelude::*,
};

/// Metadata parsed from `GEN8`, always the first chunk in the file.
///
/// `bytecode_version` governs the layout of `CODE`/`FUNC`/`VARI` and which
/// opcode table applies; `ide_version.major` gates `SEQN`/`GLOB`/`LANG`
/// presence and the GMS2.3+ shared-bytecode scheme elsewhere in this crate.
#[derive(Debug, Clone, PartialEq)]
pub struct GMGeneralInfo {
    pub is_debugger_disabled: bool,

    /// Also known as the "WAD version". Governs `CODE`/`FUNC`/`VARI` layout
    /// and opcode numbering. Documented range is `[13, 17+]`.
    pub bytecode_version: u8,

    pub unknown_value: u16,

    /// The file name of the runner.
    pub game_file_name: String,

    /// Which GameMaker configuration the data file was compiled with.
    pub config: String,

    /// The last game object ID of the data file.
    pub last_object_id: u32,

    /// The last tile ID of the data file.
    pub last_tile_id: u32,

    pub game_id: u32,

    /// The `DirectPlay` GUID. Always empty in GameMaker Studio.
    pub directplay_guid: Uuid,

    pub game_name: String,

    /// The GameMaker Studio IDE version this data file's compiler reported.
    /// Only `major` is used for gating elsewhere in this crate.
    pub ide_version: IdeVersion,

    pub default_window_width: u32,
    pub default_window_height: u32,

    pub flags: Flags,

    pub license_crc32: u32,
    pub license_md5: [u8; 16],

    pub timestamp_created: DateTime<Utc>,

    /// The name that gets displayed in the window title.
    pub display_name: String,

    /// Bitmask of function classifications. Kept as a raw value: the exact
    /// bit meanings aren't load-bearing for parsing and aren't decoded.
    pub function_classifications: u64,

    /// The Steam app ID of the game. May be zero.
    pub steam_appid: i32,

    /// Only set when `bytecode_version >= 14`.
    pub debugger_port: Option<u32>,

    pub room_order: Vec<GMRef<GMRoom>>,

    /// GMS2-only tail of `GEN8`, present only when `ide_version.major >= 2`.
    pub gms2_data: Option<GMS2Data>,

    pub exists: bool,
}

impl Default for GMGeneralInfo {
    /// Stub value held by `DataReader` until `GEN8` (always `chunks[0]`) is parsed.
    /// Never meant to be observed outside of that window.
    fn default() -> Self {
        Self {
            is_debugger_disabled: true,
            bytecode_version: 17,
            unknown_value: 0,
            game_file_name: String::new(),
            config: String::new(),
            last_object_id: 100_000,
            last_tile_id: 10_000_000,
            game_id: 1337,
            directplay_guid: Uuid::default(),
            game_name: String::new(),
            ide_version: IdeVersion::default(),
            default_window_width: 1337,
            default_window_height: 1337,
            flags: Flags::default(),
            license_crc32: 1337,
            license_md5: [0; 16],
            timestamp_created: DateTime::default(),
            display_name: String::new(),
            function_classifications: 0,
            steam_appid: 0,
            debugger_port: None,
            room_order: vec![],
            gms2_data: None,
            exists: false,
        }
    }
}

impl GMChunk for GMGeneralInfo {
    const NAME: ChunkName = ChunkName::new("GEN8");
    fn exists(&self) -> bool {
        self.exists
    }
}

impl GMElement for GMGeneralInfo {
    fn deserialize(reader: &mut DataReader) -> Result<Self> {
        let is_debugger_disabled = match reader.read_u8()? {
            0 => false,
            1 => true,
            other => bail!("Invalid bool {other} while reading \"is debugger disabled\""),
        };
        let bytecode_version = reader.read_u8()?;
        let unknown_value = reader.read_u16()?;
        let game_file_name: String = reader.read_gm_string()?;
        let config: String = reader.read_gm_string()?;
        let last_object_id = reader.read_u32()?;
        let last_tile_id = reader.read_u32()?;
        let game_id = reader.read_u32()?;

        let directplay_guid: [u8; 16] = *reader.read_bytes_const().context("reading GUID")?;
        let uuid_parser = match reader.endianness {
            Endianness::Little => uuid::Builder::from_bytes_le,
            Endianness::Big => uuid::Builder::from_bytes,
        };
        let directplay_guid: Uuid = uuid_parser(directplay_guid).into_uuid();

        let game_name: String = reader.read_gm_string()?;
        let ide_version = IdeVersion::deserialize(reader)?;
        let default_window_width = reader.read_u32()?;
        let default_window_height = reader.read_u32()?;
        let flags = Flags::parse(reader.read_u32()?);
        let license_crc32 = reader.read_u32()?;
        let license_md5: [u8; 16] = *reader.read_bytes_const().context("reading license (MD5)")?;

        let timestamp_created = reader.read_i64()?;
        let timestamp_created: DateTime<Utc> = DateTime::from_timestamp(timestamp_created, 0)
            .ok_or_else(|| err(format!("Invalid creation timestamp {timestamp_created}")))?;

        let display_name: String = reader.read_gm_string()?;
        let active_targets = reader.read_u64()?;
        reader.assert_int(active_targets, 0, "active targets")?;
        let function_classifications = reader.read_u64()?;
        let steam_appid = reader.read_i32()?;
        let debugger_port: Option<u32> =
            reader.deserialize_if_bytecode_version(14).context("reading debugger port")?;
        let room_order: Vec<GMRef<GMRoom>> = reader.read_simple_list()?;

        let mut general_info = Self {
            is_debugger_disabled,
            bytecode_version,
            unknown_value,
            game_file_name,
            config,
            last_object_id,
            last_tile_id,
            game_id,
            directplay_guid,
            game_name,
            ide_version,
            default_window_width,
            default_window_height,
            flags,
            license_crc32,
            license_md5,
            timestamp_created,
            display_name,
            function_classifications,
            steam_appid,
            debugger_port,
            room_order,
            gms2_data: None,
            exists: true,
        };

        if general_info.ide_version.major >= 2 {
            let gms2_data = general_info.read_gms2_data(reader)?;
            general_info.gms2_data = Some(gms2_data);
        }

        Ok(general_info)
    }
}
