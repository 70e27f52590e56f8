use std::fmt;

use image::GrayImage;

/// Luminance below which a thresholded pixel counts as ink.
const INK_CUTOFF: u8 = 128;

/// A square 1-bit glyph image, row-major, `true` is ink.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    size: u32,
    pixels: Vec<bool>,
}

impl Bitmap {
    pub fn blank(size: u32) -> Self {
        Self {
            size,
            pixels: vec![false; (size * size) as usize],
        }
    }

    /// Returns `None` unless `pixels` holds exactly `size * size` values.
    pub fn from_pixels(size: u32, pixels: Vec<bool>) -> Option<Self> {
        (pixels.len() as u64 == size as u64 * size as u64).then_some(Self { size, pixels })
    }

    /// Converts a thresholded grayscale crop. Dark pixels become ink.
    pub fn from_luma(image: &GrayImage) -> Self {
        let size = image.width().min(image.height());
        let pixels = (0..size)
            .flat_map(|y| (0..size).map(move |x| (x, y)))
            .map(|(x, y)| image.get_pixel(x, y).0[0] < INK_CUTOFF)
            .collect();
        Self { size, pixels }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn pixels(&self) -> &[bool] {
        &self.pixels
    }

    pub fn get(&self, x: u32, y: u32) -> bool {
        x < self.size && y < self.size && self.pixels[(y * self.size + x) as usize]
    }

    pub fn ink_count(&self) -> usize {
        self.pixels.iter().filter(|p| **p).count()
    }
}

impl fmt::Display for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.pixels.chunks(self.size.max(1) as usize) {
            for &pixel in row {
                f.write_str(if pixel { "█" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
