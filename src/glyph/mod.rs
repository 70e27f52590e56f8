pub mod rasterizer;
pub mod source;

pub use rasterizer::{DebugImage, Rasterizer};
pub use source::{FontGlyphSource, Glyph, GlyphSource};
