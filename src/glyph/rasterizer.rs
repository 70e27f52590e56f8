//! Renders a glyph into a `size x size` 1-bit bitmap.
//!
//! The glyph is drawn black on white, ink centred, on a canvas twice the
//! target size. The centre `size x size` window is cropped out and
//! thresholded. The crop is never re-centred or scaled, so ink that lands
//! outside the window is clipped.

use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use image::{imageops, GrayImage, Luma};

use crate::{
    bitmap::Bitmap,
    glyph::source::{Glyph, GlyphSource},
};

const WHITE: u8 = 255;
const BLACK: u8 = 0;

/// Luminance below which a canvas pixel becomes ink.
pub const LUMINANCE_THRESHOLD: u8 = 200;

/// What happened to the debug snapshot of a rasterized glyph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DebugImage {
    Disabled,
    Saved(PathBuf),
    Failed,
}

pub struct Rasterizer<S: GlyphSource> {
    source: S,
    debug_dir: Option<PathBuf>,
}

impl<S: GlyphSource> Rasterizer<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            debug_dir: None,
        }
    }

    pub fn with_debug_dir<P: AsRef<Path>>(mut self, debug_dir: P) -> Self {
        self.debug_dir = Some(debug_dir.as_ref().to_path_buf());
        self
    }

    pub fn rasterize(&self, character: char, size: u32) -> (Bitmap, DebugImage) {
        if !self.source.has_glyph(character) {
            log::warn!("font has no glyph for '{character}', using its fallback glyph");
        }

        let glyph = self.source.glyph(character, size as f32);
        let image = render(&glyph, size);
        let bitmap = Bitmap::from_luma(&image);
        log::trace!("'{character}' at {size}px:\n{bitmap}");

        let debug = match &self.debug_dir {
            None => DebugImage::Disabled,
            Some(dir) => match save_debug_image(&image, dir, character, size) {
                Ok(path) => DebugImage::Saved(path),
                Err(err) => {
                    log::error!("Error saving debug image for char '{character}': {err}");
                    DebugImage::Failed
                }
            },
        };

        (bitmap, debug)
    }
}

/// Draws `glyph` centred on a `2 * size` canvas, crops the centre window
/// and thresholds it to pure black and white.
pub fn render(glyph: &Glyph, size: u32) -> GrayImage {
    let canvas_size = size * 2;
    let mut canvas = GrayImage::from_pixel(canvas_size, canvas_size, Luma([WHITE]));

    let left = (canvas_size as i64 - glyph.width as i64).div_euclid(2) + glyph.xmin as i64;
    let top = (canvas_size as i64 - glyph.height as i64).div_euclid(2);
    draw(&mut canvas, glyph, left, top);

    let origin = (canvas_size - size) / 2;
    let mut cropped = imageops::crop_imm(&canvas, origin, origin, size, size).to_image();
    for pixel in cropped.pixels_mut() {
        pixel.0[0] = if pixel.0[0] < LUMINANCE_THRESHOLD {
            BLACK
        } else {
            WHITE
        };
    }
    cropped
}

fn draw(canvas: &mut GrayImage, glyph: &Glyph, left: i64, top: i64) {
    for y in 0..glyph.height {
        let cy = top + y as i64;
        if cy < 0 || cy >= canvas.height() as i64 {
            continue;
        }
        for x in 0..glyph.width {
            let cx = left + x as i64;
            if cx < 0 || cx >= canvas.width() as i64 {
                continue;
            }
            let luminance = WHITE - glyph.coverage_at(x, y);
            let pixel = canvas.get_pixel_mut(cx as u32, cy as u32);
            pixel.0[0] = pixel.0[0].min(luminance);
        }
    }
}

fn save_debug_image(
    image: &GrayImage,
    dir: &Path,
    character: char,
    size: u32,
) -> anyhow::Result<PathBuf> {
    let name = format!("{character}_{size}.png");
    let mut components = Path::new(&name).components();
    if !matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) {
        anyhow::bail!("{name:?} is not a plain file name");
    }

    fs::create_dir_all(dir)?;
    let path = dir.join(name);
    image.save(&path)?;
    Ok(path)
}
