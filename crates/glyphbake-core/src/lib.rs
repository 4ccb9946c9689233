//! Glyphbake Core: the shapes a baked font is made of
//!
//! Everything here is plain data and plain algorithms — no font parsing,
//! no rasterization. The `glyphbake` crate rasterizes glyph outlines and
//! drives the [`shelf::ShelfPacker`] to fill an [`types::Atlas`], recording
//! one [`types::GlyphMetrics`] per printable ASCII codepoint.
//!
//! The split keeps the packer and the data model testable without a single
//! font file in sight.

pub mod error;
pub mod shelf;

pub use error::{BakeError, ExportError, FontParseError, Result};

/// The data structures a bake produces
pub mod types {
    /// First baked codepoint: ASCII space.
    pub const FIRST_CODEPOINT: u32 = 32;

    /// Number of baked glyphs: the printable ASCII range `[32, 128)`.
    pub const GLYPH_COUNT: usize = 96;

    /// Placement and layout metrics for one baked glyph.
    ///
    /// The atlas rectangle is in pixels; `x1 == x0` marks a glyph with no
    /// coverage (space, empty outline). Bearings follow the baked-quad
    /// convention: offsets from the baseline pen position to the bitmap's
    /// top-left corner, with y growing downward, so `y_off` is negative
    /// for glyphs that rise above the baseline.
    #[derive(Debug, Clone, Copy, PartialEq, Default)]
    pub struct GlyphMetrics {
        pub x0: u32,
        pub y0: u32,
        pub x1: u32,
        pub y1: u32,
        pub x_off: f32,
        pub y_off: f32,
        pub x_advance: f32,
    }

    impl GlyphMetrics {
        /// Width of the atlas rectangle in pixels.
        pub fn width(&self) -> u32 {
            self.x1 - self.x0
        }

        /// Height of the atlas rectangle in pixels.
        pub fn height(&self) -> u32 {
            self.y1 - self.y0
        }

        /// Whether this glyph has no coverage in the atlas.
        pub fn is_empty(&self) -> bool {
            self.x0 == self.x1 || self.y0 == self.y1
        }
    }

    /// Single-channel coverage bitmap, row-major, no padding.
    ///
    /// 0 is fully transparent, 255 fully covered. Created zero-filled and
    /// written exactly once per glyph during a bake; immutable afterwards.
    #[derive(Debug, Clone, PartialEq)]
    pub struct Atlas {
        width: u32,
        height: u32,
        data: Vec<u8>,
    }

    impl Atlas {
        /// A zero-initialized atlas of the given dimensions.
        pub fn new(width: u32, height: u32) -> Self {
            Self {
                width,
                height,
                data: vec![0; width as usize * height as usize],
            }
        }

        pub fn width(&self) -> u32 {
            self.width
        }

        pub fn height(&self) -> u32 {
            self.height
        }

        /// Raw coverage bytes, `width * height` of them.
        pub fn data(&self) -> &[u8] {
            &self.data
        }

        /// Consume the atlas, handing the pixel buffer to the caller
        /// (typically for texture upload).
        pub fn into_data(self) -> Vec<u8> {
            self.data
        }

        /// Coverage value at `(x, y)`.
        pub fn get(&self, x: u32, y: u32) -> u8 {
            self.data[(y * self.width + x) as usize]
        }

        /// Copy a `w` x `h` row-major coverage block to position `(x, y)`.
        ///
        /// The caller (the packer) guarantees the block lies inside the
        /// atlas; out-of-bounds placement is a bug, not a recoverable
        /// condition, and will panic in debug builds via slice indexing.
        pub fn blit(&mut self, x: u32, y: u32, w: u32, h: u32, src: &[u8]) {
            debug_assert_eq!(src.len(), (w * h) as usize);
            debug_assert!(x + w <= self.width && y + h <= self.height);
            for row in 0..h {
                let dst = ((y + row) * self.width + x) as usize;
                let s = (row * w) as usize;
                self.data[dst..dst + w as usize].copy_from_slice(&src[s..s + w as usize]);
            }
        }
    }
}
