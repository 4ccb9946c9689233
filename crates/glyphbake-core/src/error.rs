//! Error types for glyphbake

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BakeError>;

/// Main error type for a bake operation
///
/// A bake has exactly two outcomes: complete data, or one of these.
/// There is no partial success and no internal retry.
#[derive(Debug, Error)]
pub enum BakeError {
    #[error("Font parsing failed: {0}")]
    FontParse(#[from] FontParseError),

    #[error("Atlas {width}x{height} too small: glyph for U+{codepoint:04X} does not fit")]
    AtlasOverflow {
        codepoint: u32,
        width: u32,
        height: u32,
    },

    #[error("Invalid bake parameters: pixel height {pixel_height}, atlas {width}x{height}")]
    InvalidParams {
        pixel_height: f32,
        width: u32,
        height: u32,
    },

    #[error("Export failed: {0}")]
    Export(#[from] ExportError),
}

/// Font loading and parsing errors
#[derive(Debug, Error)]
pub enum FontParseError {
    #[error("Font file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid font data")]
    InvalidData,

    #[error("Font collection has no face at index {0}")]
    FaceIndexOutOfRange(u32),

    #[error("Outline extraction failed for U+{0:04X}")]
    OutlineExtraction(u32),
}

/// Atlas export errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),

    #[error("Write failed: {0}")]
    WriteFailed(String),
}
