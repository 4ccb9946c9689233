//! Baked-quad layout and text measurement
//!
//! Pure pen math over a [`BakedFont`]: no rendering, no GPU. The caller
//! feeds each quad's screen rect and UV rect to whatever draws textured
//! quads; the pen walks the baseline left to right.

use glyphbake_core::types::{GlyphMetrics, FIRST_CODEPOINT};

use crate::baker::BakedFont;

/// One glyph ready to draw: a screen-space rectangle and the matching
/// normalized UV rectangle into the atlas.
///
/// Screen coordinates are y-down with the pen on the baseline, so `y0`
/// (the glyph top) is usually above the pen and `y1` at or below it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BakedQuad {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
    pub u0: f32,
    pub v0: f32,
    pub u1: f32,
    pub v1: f32,
}

impl BakedFont {
    /// Range-checked metrics lookup for one character.
    ///
    /// Returns `None` outside the baked range `[32, 128)`.
    pub fn glyph(&self, ch: char) -> Option<&GlyphMetrics> {
        let index = (ch as u32).checked_sub(FIRST_CODEPOINT)?;
        self.glyphs.get(index as usize)
    }

    /// Builds the quad for `ch` at the current pen position and advances
    /// the pen.
    ///
    /// Characters outside the baked range leave the pen untouched. Glyphs
    /// with no coverage (space) still advance the pen but yield a
    /// zero-area quad.
    pub fn quad(&self, ch: char, pen_x: &mut f32, pen_y: &mut f32) -> Option<BakedQuad> {
        let glyph = self.glyph(ch)?;
        let inv_w = 1.0 / self.atlas.width() as f32;
        let inv_h = 1.0 / self.atlas.height() as f32;

        let x0 = *pen_x + glyph.x_off;
        let y0 = *pen_y + glyph.y_off;
        let quad = BakedQuad {
            x0,
            y0,
            x1: x0 + glyph.width() as f32,
            y1: y0 + glyph.height() as f32,
            u0: glyph.x0 as f32 * inv_w,
            v0: glyph.y0 as f32 * inv_h,
            u1: glyph.x1 as f32 * inv_w,
            v1: glyph.y1 as f32 * inv_h,
        };

        *pen_x += glyph.x_advance;
        Some(quad)
    }

    /// Quads for a whole string with the pen starting at the origin.
    ///
    /// Unbaked characters are skipped without advancing, and glyphs with
    /// no coverage advance the pen without emitting a quad.
    pub fn layout(&self, text: &str) -> Vec<BakedQuad> {
        let mut pen_x = 0.0;
        let mut pen_y = 0.0;
        let mut quads = Vec::new();
        for ch in text.chars() {
            if let Some(quad) = self.quad(ch, &mut pen_x, &mut pen_y) {
                if quad.x1 > quad.x0 && quad.y1 > quad.y0 {
                    quads.push(quad);
                }
            }
        }
        quads
    }

    /// Total advance width of `text` at the baked pixel height.
    pub fn measure(&self, text: &str) -> f32 {
        text.chars()
            .filter_map(|ch| self.glyph(ch))
            .map(|glyph| glyph.x_advance)
            .sum()
    }

    /// Total advance width of `text` displayed at `display_height` pixels,
    /// linearly rescaling the baked metrics.
    pub fn measure_scaled(&self, text: &str, display_height: f32) -> f32 {
        self.measure(text) * display_height / self.pixel_height
    }
}
