//! PGM export
//!
//! Binary PGM (P5) is a header plus the raw coverage bytes — the atlas
//! dumped with no dependencies on the consuming side. Handy for diffing
//! bakes and for tools that cannot decode PNG.

use glyphbake_core::{
    error::{ExportError, Result},
    types::Atlas,
};

/// Encode the atlas as a binary PGM (P5) image.
pub fn encode_pgm(atlas: &Atlas) -> Result<Vec<u8>> {
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

    let mut out = format!("P5\n{} {}\n255\n", atlas.width(), atlas.height()).into_bytes();
    out.extend_from_slice(atlas.data());
    Ok(out)
}

/// Encode the atlas as PGM and write it to `path`.
pub fn write_pgm(path: impl AsRef<std::path::Path>, atlas: &Atlas) -> Result<()> {
    let pgm_data = encode_pgm(atlas)?;
    std::fs::write(path.as_ref(), pgm_data).map_err(|e| {
        ExportError::WriteFailed(format!("{}: {}", path.as_ref().display(), e))
    })?;
    Ok(())
}
