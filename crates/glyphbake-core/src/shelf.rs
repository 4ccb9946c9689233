//! Shelf rectangle packing for glyph atlases.
//!
//! The classic baked-font strategy: glyphs go left-to-right along a
//! horizontal shelf, and when one would run past the right edge, a new
//! shelf opens below the tallest glyph of the current one. One forward
//! pass, no backtracking, no reflow — the atlas is caller-sized and
//! either everything fits or the bake fails.

/// Single-pass shelf packer over a fixed-size bin.
///
/// Placement is stateful and strictly forward: the pen moves right along
/// the current shelf and down when a shelf fills up. Rectangles packed
/// earlier are never moved or revisited, which is what makes repeated
/// bakes bit-identical.
#[derive(Debug)]
pub struct ShelfPacker {
    width: u32,
    height: u32,
    pen_x: u32,
    pen_y: u32,
    shelf_height: u32,
}

impl ShelfPacker {
    /// Gutter between packed rectangles and around the border, so linear
    /// texture sampling never bleeds a neighboring glyph in.
    pub const GUTTER: u32 = 1;

    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pen_x: Self::GUTTER,
            pen_y: Self::GUTTER,
            shelf_height: 0,
        }
    }

    /// Place a `w` x `h` rectangle.
    ///
    /// Returns the top-left position within the bin, or `None` when the
    /// rectangle cannot fit on the current shelf or any shelf below it.
    /// Zero-area rectangles (space, empty glyphs) succeed at the bin
    /// origin without consuming space; the pen position is not used, as it
    /// may already sit past the bin bottom.
    pub fn pack(&mut self, w: u32, h: u32) -> Option<(u32, u32)> {
        if w == 0 || h == 0 {
            return Some((0, 0));
        }

        if self.pen_x + w + Self::GUTTER > self.width {
            // Shelf full: open a new one below the tallest glyph seen.
            self.pen_y += self.shelf_height + Self::GUTTER;
            self.pen_x = Self::GUTTER;
            self.shelf_height = 0;
        }

        if self.pen_x + w + Self::GUTTER > self.width
            || self.pen_y + h + Self::GUTTER > self.height
        {
            return None;
        }

        let pos = (self.pen_x, self.pen_y);
        self.pen_x += w + Self::GUTTER;
        self.shelf_height = self.shelf_height.max(h);
        Some(pos)
    }

    /// Reset the pen to the top-left corner, forgetting all placements.
    pub fn reset(&mut self) {
        self.pen_x = Self::GUTTER;
        self.pen_y = Self::GUTTER;
        self.shelf_height = 0;
    }
}
