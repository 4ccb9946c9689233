//! PNG export
//!
//! Encodes the atlas to a single-channel (L8) PNG using the `image`
//! crate. Grayscale in, grayscale out; nothing is expanded to RGBA.

use image::{ExtendedColorType, ImageEncoder};

use glyphbake_core::{
    error::{ExportError, Result},
    types::Atlas,
};

/// Encode the atlas coverage bitmap to PNG.
///
/// Returns a valid PNG with proper IHDR, IDAT, and IEND chunks.
pub fn encode_png(atlas: &Atlas) -> Result<Vec<u8>> {
    let expected = atlas.width() as usize * atlas.height() as usize;
    if atlas.data().len() != expected {
        return Err(ExportError::EncodingFailed(format!(
            "Buffer size mismatch: expected {} bytes for {}x{}, got {}",
            expected,
            atlas.width(),
            atlas.height(),
            atlas.data().len()
        ))
        .into());
    }

    let mut png_data = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new_with_quality(
        &mut png_data,
        image::codecs::png::CompressionType::Default,
        image::codecs::png::FilterType::Sub,
    );

    encoder
        .write_image(
            atlas.data(),
            atlas.width(),
            atlas.height(),
            ExtendedColorType::L8,
        )
        .map_err(|e| ExportError::EncodingFailed(format!("PNG encoding failed: {}", e)))?;

    Ok(png_data)
}

/// Encode the atlas to PNG and write it to `path`.
pub fn write_png(path: impl AsRef<std::path::Path>, atlas: &Atlas) -> Result<()> {
    let png_data = encode_png(atlas)?;
    std::fs::write(path.as_ref(), png_data).map_err(|e| {
        ExportError::WriteFailed(format!("{}: {}", path.as_ref().display(), e))
    })?;
    Ok(())
}
