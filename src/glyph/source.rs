use fontdue::{Font, FontSettings};

use crate::error::{Error, Result};

/// Anti-aliased coverage for one glyph's ink box. `coverage` is row-major,
/// `width * height` values where 255 is full ink.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Glyph {
    pub xmin: i32,
    pub width: usize,
    pub height: usize,
    pub coverage: Vec<u8>,
}

impl Glyph {
    pub fn empty() -> Self {
        Self {
            xmin: 0,
            width: 0,
            height: 0,
            coverage: Vec::new(),
        }
    }

    pub fn coverage_at(&self, x: usize, y: usize) -> u8 {
        if x < self.width && y < self.height {
            self.coverage[y * self.width + x]
        } else {
            0
        }
    }
}

/// Something that can turn a character into glyph coverage at a pixel size.
pub trait GlyphSource {
    fn glyph(&self, character: char, px: f32) -> Glyph;

    /// Whether the source has a real glyph for `character` rather than a
    /// fallback.
    fn has_glyph(&self, _character: char) -> bool {
        true
    }
}

impl<T: GlyphSource + ?Sized> GlyphSource for &T {
    fn glyph(&self, character: char, px: f32) -> Glyph {
        (**self).glyph(character, px)
    }

    fn has_glyph(&self, character: char) -> bool {
        (**self).has_glyph(character)
    }
}

// one of these per font file, sizes are picked per call
pub struct FontGlyphSource {
    font: Font,
}

impl FontGlyphSource {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let font = Font::from_bytes(bytes, FontSettings::default())
            .map_err(|err| Error::InvalidFont(err.to_string()))?;
        Ok(Self { font })
    }

    pub fn glyph_count(&self) -> u16 {
        self.font.glyph_count()
    }
}

impl GlyphSource for FontGlyphSource {
    fn glyph(&self, character: char, px: f32) -> Glyph {
        let (metrics, coverage) = self.font.rasterize(character, px);
        Glyph {
            xmin: metrics.xmin,
            width: metrics.width,
            height: metrics.height,
            coverage,
        }
    }

    fn has_glyph(&self, character: char) -> bool {
        self.font.lookup_glyph_index(character) != 0
    }
}
