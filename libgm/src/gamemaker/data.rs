use crate::{
    gamemaker::{
        elements::{
            background::GMBackgrounds,
            code::GMCodes,
            embedded_audio::GMEmbeddedAudios,
            embedded_textures::GMEmbeddedTextures,
            font::GMFonts,
            function::{GMFunction, GMFunctions},
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
            texture_page_items::GMTexturePageItems,
            variable::GMVariables,
        },
        reference::GMRef,
    },
    prelude::*,
};

/// Byte order (endianness) for integers and chunk names in data files.
///
/// Most modern platforms use little-endian, which is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Endianness {
    /// Little-endian byte order. The standard for x86/x64 and most modern platforms.
    #[default]
    Little,

    /// Big-endian byte order. Supported for legacy platforms (e.g. PS3, Xbox 360).
    Big,
}

/// The fully parsed contents of a GameMaker data file: one field per recognized chunk,
/// plus a handful of container-level bookkeeping fields.
///
/// Chunks not named here (e.g. `ACRV`, `PATH`, `TMLN`, `PSYS`, `AGRP`) are parsed as opaque
/// blobs and are not retained; see [`crate::gamemaker::deserialize`] for the tolerant-unknown-chunk policy.
#[derive(Debug, Clone, Default)]
pub struct GMData {
    pub general_info: GMGeneralInfo, // GEN8
    pub strings: Vec<String>,        // STRG

    pub codes: GMCodes,                           // CODE
    pub functions: GMFunctions,                   // FUNC
    pub variables: GMVariables,                   // VARI
    pub scripts: GMScripts,                       // SCPT
    pub global_init_scripts: GMGlobalInitScripts, // GLOB
    pub language_info: GMLanguageInfo,            // LANG

    pub options: GMOptions, // OPTN

    pub embedded_textures: GMEmbeddedTextures,  // TXTR
    pub texture_page_items: GMTexturePageItems, // TPAG
    pub sprites: GMSprites,                     // SPRT
    pub backgrounds: GMBackgrounds,              // BGND
    pub fonts: GMFonts,                         // FONT
    pub shaders: GMShaders,                     // SHDR
    pub sequences: GMSequences,                 // SEQN

    pub audios: GMEmbeddedAudios, // AUDO
    pub sounds: GMSounds,         // SOND

    pub game_objects: GMGameObjects, // OBJT
    pub rooms: GMRooms,              // ROOM

    /// Indicates how many null bytes of padding separate chunks (except the last one).
    /// Auto-detected while parsing; only relevant on certain platforms/versions.
    pub chunk_padding: u32,

    /// The data's byte endianness. Affects integer and chunk-name byte order.
    pub endianness: Endianness,

    /// The size of the original data file in bytes.
    pub original_data_size: u32,

    /// Byte offset of the `FORM` magic within the buffer that was parsed.
    /// Zero unless the buffer carried a PE envelope (or other prefix) before `FORM`;
    /// every other offset in this data is relative to this position, not to byte 0.
    pub form_base_offset: u32,
}

impl GMData {
    fn find_function(&self, name: &str) -> Option<GMRef<GMFunction>> {
        self.functions
            .functions
            .iter()
            .position(|function| function.name == name)
            .map(|i| GMRef::new(i as u32))
    }

    /// Looks up a function by name, resolving it against [`GMData::functions`].
    pub fn function_by_name(&self, name: &str) -> Result<GMRef<GMFunction>> {
        self.find_function(name)
            .with_context(|| format!("Could not find function with name {name:?}"))
    }

    /// Validates the names of every named chunk (functions, sprites, sounds, fonts,
    /// rooms, game objects, backgrounds, sequences, shaders, code entries).
    pub fn validate_names(&self) -> Result<()> {
        crate::gamemaker::elements::validate_names(&self.functions)?;
        crate::gamemaker::elements::validate_names(&self.sprites)?;
        crate::gamemaker::elements::validate_names(&self.sounds)?;
        crate::gamemaker::elements::validate_names(&self.fonts)?;
        crate::gamemaker::elements::validate_names(&self.rooms)?;
        crate::gamemaker::elements::validate_names(&self.game_objects)?;
        crate::gamemaker::elements::validate_names(&self.backgrounds)?;
        crate::gamemaker::elements::validate_names(&self.sequences)?;
        crate::gamemaker::elements::validate_names(&self.shaders)?;
        crate::gamemaker::elements::validate_names(&self.codes)?;
        Ok(())
    }
}
