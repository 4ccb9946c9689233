//! Atlas export for glyphbake
//!
//! Turns a baked coverage atlas into an image file for inspection. Two
//! formats: PNG via the `image` crate, and raw binary PGM for consumers
//! that want the header-plus-bytes form. Both keep the atlas as a single
//! grayscale channel; any multi-channel expansion is the caller's job.

mod pgm;
mod png;

pub use pgm::{encode_pgm, write_pgm};
pub use png::{encode_png, write_png};
