//! Turns TrueType glyphs into fixed-size dot-matrix bitmaps for devices that
//! can't rasterize fonts themselves.
//!
//! A run rasterizes each character at each requested size, thresholds it to
//! one bit per pixel and packs the bitmaps into `<size>x<size>_<n>.font`
//! blobs. `index_<n>.json` files map every character and size to the blob
//! and byte offset holding its bitmap.

pub mod bitmap;
pub mod blob;
pub mod config;
pub mod error;
pub mod generator;
pub mod glyph;
pub mod index;
pub mod pack;
pub mod reader;

pub use config::GeneratorConfig;
pub use error::{Error, Result};
pub use generator::{BlobSummary, FontGenerator, GenerationReport};
