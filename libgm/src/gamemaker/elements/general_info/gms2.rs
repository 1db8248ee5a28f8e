use crate::{
    gamemaker::{deserialize::reader::DataReader, elements::general_info::GMGeneralInfo},
    prelude::*,
    util::rng::DotnetRng,
};

/// The GMS2-only tail of `GEN8`: a `.NET`-Random-seeded checksum over the already-parsed
/// flag/timestamp/ID fields, plus a handful of genuinely new fields.
#[derive(Debug, Clone, PartialEq)]
pub struct GMS2Data {
    /// The raw checksum words as read from the file. Only meaningful for the
    /// `check-integrity` recomputation below; not otherwise interpreted.
    pub random_uid: [i64; 4],

    /// The FPS of the game.
    pub fps: f32,

    /// If enabled, the game runner may send requests to a GameMaker player count statistics server.
    pub allow_statistics: bool,

    /// Unknown, some sort of checksum.
    pub game_guid: [u8; 16],

    /// Whether the random UID's timestamp was initially offset by a second.
    pub info_timestamp_offset: bool,
}

impl GMGeneralInfo {
    /// Reads the GMS2-only tail of `GEN8`. With the `check-integrity` feature enabled, also
    /// recomputes the expected checksum words from the already-parsed fields and reports a
    /// mismatch instead of silently accepting a corrupted/hand-edited file.
    pub(super) fn read_gms2_data(&self, reader: &mut DataReader) -> Result<GMS2Data> {
        let timestamp: i64 = self.timestamp_created.timestamp();
        let mut info_timestamp_offset: bool = true;
        let seed: i32 = (timestamp & 0xFFFF_FFFF) as i32;
        let mut rng = DotnetRng::new(seed);

        let first_expected: i64 = (i64::from(rng.next()) << 32) | i64::from(rng.next());
        let first_actual = reader.read_i64()?;
        reader.assert_int(first_actual, first_expected, "GMS2 random UID #1")?;

        let info_location: i32 = self.get_info_location(timestamp);
        let mut random_uid = [0_i64; 4];

        for i in 0i32..4 {
            if i == info_location {
                let curr = reader.read_i64()?;
                random_uid[i as usize] = curr;

                if curr != self.get_info_number(first_expected, true) {
                    if curr == self.get_info_number(first_expected, false) {
                        info_timestamp_offset = false;
                    } else if cfg!(feature = "check-integrity") {
                        bail!("Unexpected GMS2 random UID info number");
                    }
                }
            } else {
                let second_actual = reader.read_u32()?;
                let third_actual = reader.read_u32()?;
                let second_expected: u32 = rng.next() as u32;
                let third_expected: u32 = rng.next() as u32;
                reader.assert_int(second_actual, second_expected, "GMS2 random UID #2")?;
                reader.assert_int(third_actual, third_expected, "GMS2 random UID #3")?;

                random_uid[i as usize] = (i64::from(second_actual) << 32) | i64::from(third_actual);
            }
        }

        let fps = reader.read_f32()?;
        let allow_statistics = reader.read_bool32()?;
        let game_guid: [u8; 16] = reader
            .read_bytes_const::<16>()
            .cloned()
            .context("reading Game GUID")?;

        Ok(GMS2Data {
            random_uid,
            fps,
            allow_statistics,
            game_guid,
            info_timestamp_offset,
        })
    }

    const fn get_info_location(&self, timestamp: i64) -> i32 {
        ((timestamp & 0xFFFF) as i32 / 7
            + self.game_id.wrapping_sub(self.default_window_width) as i32
            + self.room_order.len() as i32)
            .abs()
            % 4
    }

    fn get_info_number(&self, first_random: i64, info_timestamp_offset: bool) -> i64 {
        let flags_raw: u32 = self.flags.build();
        let mut info_number: i64 = self.timestamp_created.timestamp();
        if info_timestamp_offset {
            info_number -= 1000;
        }
        info_number = Self::uid_bitmush(info_number);
        info_number ^= first_random;
        info_number = !info_number;
        info_number ^= (i64::from(self.game_id) << 32) | i64::from(self.game_id);
        info_number ^= (i64::from(self.default_window_width) + i64::from(flags_raw)) << 48
            | (i64::from(self.default_window_height) + i64::from(flags_raw)) << 32
            | (i64::from(self.default_window_height) + i64::from(flags_raw)) << 16
            | (i64::from(self.default_window_width) + i64::from(flags_raw));
        info_number ^= i64::from(self.bytecode_version);
        info_number
    }

    const fn uid_bitmush(info_number: i64) -> i64 {
        let mut temp: u64 = info_number as u64;
        temp = (temp << 56 & 0xFF00_0000_0000_0000)
            | (temp >> 8 & 0x00FF_0000_0000_0000)
            | (temp << 32 & 0x0000_FF00_0000_0000)
            | (temp >> 16 & 0x0000_00FF_0000_0000)
            | (temp << 8 & 0x0000_0000_FF00_0000)
            | (temp >> 24 & 0x0000_0000_00FF_0000)
            | (temp >> 16 & 0x0000_0000_0000_FF00)
            | (temp >> 32 & 0x0000_0000_0000_00FF);
        temp as i64
    }
}
