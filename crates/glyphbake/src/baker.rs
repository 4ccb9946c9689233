//! The bake operation: outlines in, atlas out
//!
//! For every codepoint in the printable ASCII range, the baker extracts
//! the glyph outline with skrifa, rasterizes it to a coverage mask with
//! zeno, shelf-packs the mask into the caller-sized atlas, and records
//! placement, bearings, and advance in the metrics table.
//!
//! The outline goes through a dual-path builder: an SVG path string for
//! zeno's rasterizer, and a kurbo path whose `bounding_box()` gives the
//! exact pixel extents without any parsing.

use kurbo::Shape;
use skrifa::MetadataProvider;

use glyphbake_core::{
    error::{BakeError, FontParseError, Result},
    shelf::ShelfPacker,
    types::{Atlas, GlyphMetrics, FIRST_CODEPOINT, GLYPH_COUNT},
};

use crate::font::Font;

/// The complete output of one bake: atlas bitmap, metrics table, and the
/// scaled line metrics of the face.
///
/// Immutable after creation. Re-baking at a different size or atlas
/// dimension produces a new, independent value.
pub struct BakedFont {
    pub(crate) atlas: Atlas,
    pub(crate) glyphs: [GlyphMetrics; GLYPH_COUNT],
    pub(crate) pixel_height: f32,
    pub(crate) ascent: f32,
    pub(crate) descent: f32,
    pub(crate) line_gap: f32,
}

impl BakedFont {
    /// The coverage atlas all 96 glyphs were packed into.
    pub fn atlas(&self) -> &Atlas {
        &self.atlas
    }

    /// The full metrics table, indexed by `codepoint - 32`.
    pub fn glyphs(&self) -> &[GlyphMetrics; GLYPH_COUNT] {
        &self.glyphs
    }

    /// The em height this font was baked at, in pixels.
    pub fn pixel_height(&self) -> f32 {
        self.pixel_height
    }

    /// Distance from baseline to the top of the tallest glyphs, in pixels.
    pub fn ascent(&self) -> f32 {
        self.ascent
    }

    /// Distance from baseline to the bottom of the deepest glyphs, in
    /// pixels. Negative, following font conventions.
    pub fn descent(&self) -> f32 {
        self.descent
    }

    /// Extra spacing between lines, in pixels.
    pub fn line_gap(&self) -> f32 {
        self.line_gap
    }

    /// Baseline-to-baseline distance for consecutive lines, in pixels.
    pub fn line_height(&self) -> f32 {
        self.ascent - self.descent + self.line_gap
    }
}

/// Bakes the printable ASCII range of `font` at `pixel_height` into an
/// atlas of the given dimensions.
///
/// The atlas is caller-sized: it never grows, and packing all 96 glyphs
/// either succeeds completely or fails with [`BakeError::AtlasOverflow`]
/// naming the first codepoint that did not fit. Glyphs the font has no
/// mapping for bake as the font's notdef glyph.
///
/// Deterministic: the same (font, pixel height, dimensions) tuple always
/// produces a bit-identical atlas and metrics table.
pub fn bake(
    font: &Font,
    pixel_height: f32,
    atlas_width: u32,
    atlas_height: u32,
) -> Result<BakedFont> {
    if !(pixel_height > 0.0) || atlas_width == 0 || atlas_height == 0 {
        return Err(BakeError::InvalidParams {
            pixel_height,
            width: atlas_width,
            height: atlas_height,
        });
    }

    // `Font` validated this data at load time; a failure here means the
    // buffer changed out from under us, which we still refuse to bake.
    let font_ref = skrifa::FontRef::from_index(font.data(), font.face_index())
        .map_err(|_| FontParseError::InvalidData)?;

    let outlines = font_ref.outline_glyphs();
    let charmap = font_ref.charmap();
    let size = skrifa::instance::Size::new(pixel_height);
    let location = skrifa::instance::Location::default();
    let scaled = font_ref.glyph_metrics(size, location.coords());

    let mut atlas = Atlas::new(atlas_width, atlas_height);
    let mut packer = ShelfPacker::new(atlas_width, atlas_height);
    let mut glyphs = [GlyphMetrics::default(); GLYPH_COUNT];

    for (index, slot) in glyphs.iter_mut().enumerate() {
        let codepoint = FIRST_CODEPOINT + index as u32;
        let ch = codepoint as u8 as char;

        // Unmapped characters bake as notdef rather than failing the bake.
        let glyph_id = charmap.map(ch).unwrap_or(skrifa::GlyphId::new(0));
        let advance = scaled.advance_width(glyph_id).unwrap_or(0.0);

        let raster = rasterize_glyph(
            &outlines,
            glyph_id,
            size,
            &location,
            codepoint,
            atlas_width,
            atlas_height,
        )?;

        let (x, y) = packer
            .pack(raster.width, raster.height)
            .ok_or(BakeError::AtlasOverflow {
                codepoint,
                width: atlas_width,
                height: atlas_height,
            })?;

        if raster.width > 0 && raster.height > 0 {
            atlas.blit(x, y, raster.width, raster.height, &raster.coverage);
        }

        *slot = GlyphMetrics {
            x0: x,
            y0: y,
            x1: x + raster.width,
            y1: y + raster.height,
            x_off: raster.bearing_x,
            // Stored y-down: negative above the baseline.
            y_off: -raster.bearing_y,
            x_advance: advance,
        };
    }

    let metrics = font_ref.metrics(size, location.coords());
    log::debug!(
        "baked {} glyphs at {}px into a {}x{} atlas",
        GLYPH_COUNT,
        pixel_height,
        atlas_width,
        atlas_height
    );

    Ok(BakedFont {
        atlas,
        glyphs,
        pixel_height,
        ascent: metrics.ascent,
        descent: metrics.descent,
        line_gap: metrics.leading,
    })
}

/// Loads the first face from `data` and bakes it.
///
/// The buffer is owned only for the duration of the call and dropped on
/// return, success or failure.
pub fn bake_bytes(
    data: Vec<u8>,
    pixel_height: f32,
    atlas_width: u32,
    atlas_height: u32,
) -> Result<BakedFont> {
    let font = Font::from_data(data)?;
    bake(&font, pixel_height, atlas_width, atlas_height)
}

/// One rasterized glyph, pre-placement.
struct RasterGlyph {
    width: u32,
    height: u32,
    /// Offset from the glyph origin to the bitmap's left edge, in pixels.
    bearing_x: f32,
    /// Distance from the baseline up to the bitmap's top edge, in pixels.
    bearing_y: f32,
    coverage: Vec<u8>,
}

impl RasterGlyph {
    fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            bearing_x: 0.0,
            bearing_y: 0.0,
            coverage: Vec::new(),
        }
    }
}

/// Turns a single glyph outline into a coverage mask.
///
/// Glyphs whose snapped bounding box exceeds the atlas itself fail as an
/// overflow before any mask memory is allocated, which keeps oversized
/// pixel heights from staging multi-gigabyte buffers for rectangles that
/// could never pack.
#[allow(clippy::too_many_arguments)]
fn rasterize_glyph(
    outlines: &skrifa::outline::OutlineGlyphCollection<'_>,
    glyph_id: skrifa::GlyphId,
    size: skrifa::instance::Size,
    location: &skrifa::instance::Location,
    codepoint: u32,
    max_width: u32,
    max_height: u32,
) -> Result<RasterGlyph> {
    use zeno::Mask;

    // Fonts without an outline table entry for this glyph (bitmap-only
    // faces, stripped notdef) still bake; they just contribute no pixels.
    let Some(glyph) = outlines.get(glyph_id) else {
        return Ok(RasterGlyph::empty());
    };

    let mut builder = MaskPathBuilder::new();
    let settings = skrifa::outline::DrawSettings::unhinted(size, location.coords());
    glyph
        .draw(settings, &mut builder)
        .map_err(|_| FontParseError::OutlineExtraction(codepoint))?;

    let (path_data, bounds_path) = builder.finish();
    let bbox = bounds_path.bounding_box();

    // Empty outlines (space) have no points and an unbounded bbox.
    if !bbox.x0.is_finite() || !bbox.y0.is_finite() || !bbox.x1.is_finite() || !bbox.y1.is_finite()
    {
        return Ok(RasterGlyph::empty());
    }

    // Snap to the pixel grid so the mask covers the full extent.
    let min_x = bbox.x0.floor();
    let min_y = bbox.y0.floor();
    let max_x = bbox.x1.ceil();
    let max_y = bbox.y1.ceil();

    let width = (max_x - min_x) as u64;
    let height = (max_y - min_y) as u64;
    if width == 0 || height == 0 {
        return Ok(RasterGlyph::empty());
    }
    if width > u64::from(max_width) || height > u64::from(max_height) {
        return Err(BakeError::AtlasOverflow {
            codepoint,
            width: max_width,
            height: max_height,
        });
    }
    let width = width as u32;
    let height = height as u32;

    let mut coverage = vec![0u8; width as usize * height as usize];
    let _placement = Mask::new(path_data.as_str())
        .size(width, height)
        .offset((-min_x as i32, -min_y as i32))
        .render_into(&mut coverage, None);

    // Font outlines are y-up, bitmaps are y-down: flip the rows.
    for y in 0..(height / 2) {
        let top_row = y as usize * width as usize;
        let bottom_row = (height - 1 - y) as usize * width as usize;
        for x in 0..width as usize {
            coverage.swap(top_row + x, bottom_row + x);
        }
    }

    Ok(RasterGlyph {
        width,
        height,
        bearing_x: min_x as f32,
        bearing_y: max_y as f32,
        coverage,
    })
}

/// Dual-output path builder: SVG commands for zeno's rasterizer, a kurbo
/// path for exact bounds.
struct MaskPathBuilder {
    commands: Vec<String>,
    bounds_path: kurbo::BezPath,
}

impl MaskPathBuilder {
    fn new() -> Self {
        Self {
            commands: Vec::new(),
            bounds_path: kurbo::BezPath::new(),
        }
    }

    fn finish(self) -> (String, kurbo::BezPath) {
        (self.commands.join(" "), self.bounds_path)
    }
}

impl skrifa::outline::OutlinePen for MaskPathBuilder {
    fn move_to(&mut self, x: f32, y: f32) {
        self.commands.push(format!("M {:.2},{:.2}", x, y));
        self.bounds_path.move_to((x as f64, y as f64));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.commands.push(format!("L {:.2},{:.2}", x, y));
        self.bounds_path.line_to((x as f64, y as f64));
    }

    fn quad_to(&mut self, cx: f32, cy: f32, x: f32, y: f32) {
        self.commands
            .push(format!("Q {:.2},{:.2} {:.2},{:.2}", cx, cy, x, y));
        self.bounds_path
            .quad_to((cx as f64, cy as f64), (x as f64, y as f64));
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.commands.push(format!(
            "C {:.2},{:.2} {:.2},{:.2} {:.2},{:.2}",
            cx0, cy0, cx1, cy1, x, y
        ));
        self.bounds_path.curve_to(
            (cx0 as f64, cy0 as f64),
            (cx1 as f64, cy1 as f64),
            (x as f64, y as f64),
        );
    }

    fn close(&mut self) {
        self.commands.push("Z".to_string());
        self.bounds_path.close_path();
    }
}
