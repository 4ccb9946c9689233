//! Glyphbake: TrueType fonts in, glyph atlases out
//!
//! One synchronous transform sits at the heart of this crate: [`bake`]
//! takes a font and a target pixel height, rasterizes the 96 printable
//! ASCII glyphs, and shelf-packs them into a caller-sized single-channel
//! coverage atlas. The result carries the bitmap, a per-glyph metrics
//! table indexed by `codepoint - 32`, and the face's scaled line metrics.
//!
//! What happens to the atlas afterwards — texture upload, quad batching,
//! shader work — is the caller's business. [`BakedFont::quad`] and
//! friends hand over everything a renderer needs, but nothing here
//! touches a GPU.
//!
//! ```no_run
//! use glyphbake::{bake, Font};
//!
//! let font = Font::from_file("fonts/Mono.ttf")?;
//! let baked = bake(&font, 16.0, 256, 256)?;
//!
//! let mut pen = (0.0_f32, 24.0_f32);
//! for ch in "Hello".chars() {
//!     if let Some(quad) = baked.quad(ch, &mut pen.0, &mut pen.1) {
//!         // feed quad.x0..y1 and quad.u0..v1 to your renderer
//!     }
//! }
//! # Ok::<(), glyphbake::BakeError>(())
//! ```
//!
//! Baking is deterministic and holds no shared state: concurrent bakes
//! over independent fonts need no coordination.

mod baker;
mod font;
mod quad;

pub use baker::{bake, bake_bytes, BakedFont};
pub use font::Font;
pub use quad::BakedQuad;

pub use glyphbake_core::{
    error::{BakeError, FontParseError, Result},
    types::{Atlas, GlyphMetrics, FIRST_CODEPOINT, GLYPH_COUNT},
};
