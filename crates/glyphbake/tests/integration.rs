//! End-to-end bake tests against a real monospace font.

use std::fs;
use std::path::PathBuf;

use glyphbake::{bake, bake_bytes, BakeError, Font, GLYPH_COUNT};

fn test_font_path() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.pop(); // glyphbake
    path.pop(); // crates
    path.push("test-fonts");
    path.push("DejaVuSansMono.ttf");
    path
}

fn load_test_font() -> Font {
    Font::from_file(test_font_path()).expect("test font should load")
}

#[test]
fn bake_fits_all_glyphs_in_bounds_without_overlap() {
    let font = load_test_font();
    let baked = bake(&font, 16.0, 256, 256).expect("256x256 fits 96 glyphs at 16px");

    let rects: Vec<_> = baked
        .glyphs()
        .iter()
        .filter(|g| !g.is_empty())
        .map(|g| (g.x0, g.y0, g.x1, g.y1))
        .collect();
    assert!(rects.len() > 90, "almost every printable glyph has coverage");

    for r in &rects {
        assert!(r.0 < r.2 && r.1 < r.3, "degenerate rect {r:?}");
        assert!(r.2 <= 256 && r.3 <= 256, "rect out of bounds {r:?}");
    }
    for (i, a) in rects.iter().enumerate() {
        for b in &rects[i + 1..] {
            let overlap_x = a.0 < b.2 && b.0 < a.2;
            let overlap_y = a.1 < b.3 && b.1 < a.3;
            assert!(!(overlap_x && overlap_y), "overlap: {a:?} vs {b:?}");
        }
    }
}

#[test]
fn repeated_bakes_are_bit_identical() {
    let font = load_test_font();
    let first = bake(&font, 16.0, 256, 256).expect("bake");
    let second = bake(&font, 16.0, 256, 256).expect("bake");

    assert_eq!(first.atlas(), second.atlas());
    assert_eq!(first.glyphs(), second.glyphs());
}

#[test]
fn tiny_atlas_overflows_deterministically() {
    let font = load_test_font();
    for _ in 0..2 {
        let err = bake(&font, 32.0, 8, 8)
            .err()
            .expect("tiny atlas must overflow");
        match err {
            BakeError::AtlasOverflow {
                codepoint,
                width,
                height,
            } => {
                assert_eq!((width, height), (8, 8));
                assert!((32..128).contains(&codepoint));
            },
            other => panic!("expected AtlasOverflow, got {other:?}"),
        }
    }
}

#[test]
fn huge_pixel_height_overflows_without_panicking() {
    let font = load_test_font();
    // Each glyph's bitmap would dwarf the atlas; the bake must report the
    // overflow immediately instead of staging enormous coverage buffers.
    let err = bake(&font, 1.0e6, 256, 256)
        .err()
        .expect("glyphs far larger than the atlas must overflow");
    assert!(matches!(
        err,
        BakeError::AtlasOverflow {
            width: 256,
            height: 256,
            ..
        }
    ));
}

#[test]
fn garbage_bytes_never_panic() {
    assert!(matches!(
        bake_bytes(vec![0u8; 2048], 16.0, 128, 128),
        Err(BakeError::FontParse(_))
    ));
    assert!(matches!(
        bake_bytes(vec![0xAB; 64], 16.0, 128, 128),
        Err(BakeError::FontParse(_))
    ));
    assert!(matches!(
        bake_bytes(Vec::new(), 16.0, 128, 128),
        Err(BakeError::FontParse(_))
    ));
}

#[test]
fn truncated_font_is_a_parse_error() {
    let mut data = fs::read(test_font_path()).expect("read test font");
    data.truncate(100);
    assert!(matches!(
        bake_bytes(data, 16.0, 128, 128),
        Err(BakeError::FontParse(_))
    ));
}

#[test]
fn face_index_beyond_single_font_fails() {
    assert!(Font::from_file_index(test_font_path(), 7).is_err());
}

#[test]
fn invalid_params_are_rejected_up_front() {
    let font = load_test_font();
    for (px, w, h) in [(0.0, 256, 256), (-4.0, 256, 256), (16.0, 0, 256), (16.0, 256, 0)] {
        assert!(matches!(
            bake(&font, px, w, h),
            Err(BakeError::InvalidParams { .. })
        ));
    }
}

#[test]
fn advance_widths_scale_monotonically() {
    let font = load_test_font();
    let small = bake(&font, 12.0, 256, 256).expect("bake at 12px");
    let large = bake(&font, 24.0, 512, 512).expect("bake at 24px");

    for index in 0..GLYPH_COUNT {
        assert!(
            large.glyphs()[index].x_advance >= small.glyphs()[index].x_advance,
            "advance shrank for codepoint {}",
            32 + index
        );
    }
}

#[test]
fn monospace_advances_are_uniform() {
    let font = load_test_font();
    let baked = bake(&font, 16.0, 256, 256).expect("bake");

    let reference = baked.glyph('A').expect("'A' is baked").x_advance;
    assert!(reference > 0.0);
    for glyph in baked.glyphs() {
        assert!((glyph.x_advance - reference).abs() < 1e-4);
    }
}

#[test]
fn space_is_empty_but_advances() {
    let font = load_test_font();
    let baked = bake(&font, 16.0, 256, 256).expect("bake");

    let space = baked.glyph(' ').expect("space is baked");
    assert!(space.is_empty());
    assert!(space.x_advance > 0.0);
}

#[test]
fn line_metrics_are_scaled_to_pixels() {
    let font = load_test_font();
    let baked = bake(&font, 16.0, 256, 256).expect("bake");

    assert!(baked.ascent() > 0.0);
    assert!(baked.descent() < 0.0);
    assert!(baked.line_height() >= baked.ascent() - baked.descent());
    // DejaVu's ascent sits well inside one em.
    assert!(baked.ascent() < 16.0 * 1.5);
}

#[test]
fn quads_walk_the_baseline() {
    let font = load_test_font();
    let baked = bake(&font, 16.0, 256, 256).expect("bake");

    let mut pen_x = 0.0;
    let mut pen_y = 20.0;
    let a = baked.quad('A', &mut pen_x, &mut pen_y).expect("quad for 'A'");
    let b = baked.quad('B', &mut pen_x, &mut pen_y).expect("quad for 'B'");

    assert!(a.x1 > a.x0 && a.y1 > a.y0);
    assert!(b.x0 > a.x0, "pen did not advance");
    assert!(a.y0 < 20.0, "glyph top should rise above the baseline");
    assert!(pen_y == 20.0, "horizontal layout leaves the baseline alone");

    let advance = baked.glyph('A').expect("'A' is baked").x_advance;
    assert!((baked.measure("AB") - 2.0 * advance).abs() < 1e-4);
}

#[test]
fn atlas_has_ink_where_glyphs_landed() {
    let font = load_test_font();
    let baked = bake(&font, 16.0, 256, 256).expect("bake");

    // 'M' at 16px should rasterize with plenty of coverage in its rect.
    let m = baked.glyph('M').expect("'M' is baked");
    let mut ink = 0usize;
    for y in m.y0..m.y1 {
        for x in m.x0..m.x1 {
            if baked.atlas().get(x, y) > 0 {
                ink += 1;
            }
        }
    }
    assert!(ink > 10, "expected coverage inside the 'M' rect, got {ink}");
}

#[test]
fn small_atlas_fits_small_pixel_height() {
    let font = load_test_font();
    let baked = bake(&font, 12.0, 128, 128).expect("128x128 fits 96 glyphs at 12px");
    for glyph in baked.glyphs().iter().filter(|g| !g.is_empty()) {
        assert!(glyph.x1 <= 128 && glyph.y1 <= 128);
    }
}

#[test]
fn baked_atlas_exports_to_png_and_pgm() {
    let font = load_test_font();
    let baked = bake(&font, 16.0, 256, 256).expect("bake");

    let png = glyphbake_export::encode_png(baked.atlas()).expect("png encode");
    assert_eq!(&png[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);

    let pgm = glyphbake_export::encode_pgm(baked.atlas()).expect("pgm encode");
    assert!(pgm.starts_with(b"P5\n256 256\n255\n"));
}
