//! Bake a font's printable ASCII range and dump the atlas as a PNG.
//!
//! ```sh
//! cargo run --example bake_atlas -- test-fonts/DejaVuSansMono.ttf 32
//! ```

use std::env;
use std::process::ExitCode;

use glyphbake::{bake, Font, Result};

fn main() -> ExitCode {
    let mut args = env::args().skip(1);
    let Some(font_path) = args.next() else {
        eprintln!("usage: bake_atlas <font.ttf> [pixel-height]");
        return ExitCode::FAILURE;
    };
    let pixel_height: f32 = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(32.0);

    match run(&font_path, pixel_height) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("bake failed: {err}");
            ExitCode::FAILURE
        },
    }
}

fn run(font_path: &str, pixel_height: f32) -> Result<()> {
    let font = Font::from_file(font_path)?;
    let baked = bake(&font, pixel_height, 512, 512)?;
    glyphbake_export::write_png("atlas.png", baked.atlas())?;

    println!(
        "wrote atlas.png: {}x{} px, {} glyphs at {}px, line height {:.1}px",
        baked.atlas().width(),
        baked.atlas().height(),
        baked.glyphs().len(),
        pixel_height,
        baked.line_height(),
    );
    println!("\"Hello, World!\" measures {:.1}px", baked.measure("Hello, World!"));
    Ok(())
}
