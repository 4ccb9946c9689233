//! Font loading and identity metrics
//!
//! Stores the raw font bytes and creates `FontRef` views on demand for
//! parsing. TTC collections are supported through an explicit face index;
//! single fonts always use face 0. Validation happens here, at load time,
//! so the baker can assume a parseable face.

use std::fs;
use std::path::Path;

use read_fonts::{FontRef as ReadFontRef, TableProvider};

use glyphbake_core::error::{FontParseError, Result};

/// A font brought into memory, ready to bake.
///
/// Owns its data for the lifetime of the value; the baker borrows it only
/// for the duration of a `bake` call.
pub struct Font {
    data: Vec<u8>,
    face_index: u32,
    units_per_em: u16,
}

impl Font {
    /// Opens a font file from disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_file_index(path, 0)
    }

    /// Opens a specific face from a font file (for TTC collections).
    pub fn from_file_index(path: impl AsRef<Path>, face_index: u32) -> Result<Self> {
        let data = fs::read(path.as_ref())
            .map_err(|_| FontParseError::FileNotFound(path.as_ref().display().to_string()))?;

        Self::from_data_index(data, face_index)
    }

    /// Turns raw font bytes into a usable font.
    pub fn from_data(data: Vec<u8>) -> Result<Self> {
        Self::from_data_index(data, 0)
    }

    /// Turns raw font bytes into a specific face (for TTC collections).
    pub fn from_data_index(data: Vec<u8>, face_index: u32) -> Result<Self> {
        // Parse once up front so malformed data fails here, not mid-bake.
        // The first face has to parse for any index to be meaningful, so
        // garbage bytes report as bad data, not as a bad index.
        ReadFontRef::new(&data).map_err(|_| FontParseError::InvalidData)?;
        let font_ref = ReadFontRef::from_index(&data, face_index)
            .map_err(|_| FontParseError::FaceIndexOutOfRange(face_index))?;

        let units_per_em = font_ref
            .head()
            .map(|head| head.units_per_em())
            .unwrap_or(1000);

        Ok(Font {
            data,
            face_index,
            units_per_em,
        })
    }

    /// Raw font bytes as they live in the file.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The face index within a TTC collection (0 for single fonts).
    pub fn face_index(&self) -> u32 {
        self.face_index
    }

    /// The font's internal coordinate grid size.
    pub fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    fn font_ref(&self) -> Option<ReadFontRef<'_>> {
        ReadFontRef::from_index(&self.data, self.face_index).ok()
    }

    /// Finds which glyph draws this character, if any.
    pub fn glyph_id(&self, ch: char) -> Option<u32> {
        self.font_ref()
            .and_then(|font| font.cmap().ok()?.map_codepoint(ch).map(|gid| gid.to_u32()))
    }

    /// How many glyphs this font contains.
    pub fn glyph_count(&self) -> Option<u32> {
        self.font_ref()
            .and_then(|font| font.maxp().ok().map(|maxp| maxp.num_glyphs() as u32))
    }
}
