use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

pub const DEFAULT_SIZES: [u32; 3] = [16, 24, 32];
pub const DEFAULT_CHARS_PER_FILE: usize = 100;
pub const DEFAULT_OUTPUT_DIR: &str = "font_data";
pub const DEBUG_DIR_NAME: &str = "debug";

/// Everything a generation run needs besides the font and the characters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub sizes: Vec<u32>,
    pub chars_per_file: usize,
    pub output_dir: PathBuf,
    pub debug_images: bool,
}

impl GeneratorConfig {
    pub fn with_sizes(mut self, sizes: &[u32]) -> Self {
        self.sizes = sizes.to_vec();
        self
    }

    pub fn with_chars_per_file(mut self, chars_per_file: usize) -> Self {
        self.chars_per_file = chars_per_file;
        self
    }

    pub fn with_output_dir<P: AsRef<Path>>(mut self, output_dir: P) -> Self {
        self.output_dir = output_dir.as_ref().to_path_buf();
        self
    }

    pub fn with_debug_images(mut self, debug_images: bool) -> Self {
        self.debug_images = debug_images;
        self
    }

    pub fn debug_dir(&self) -> PathBuf {
        self.output_dir.join(DEBUG_DIR_NAME)
    }

    /// Rejects sizes whose bitmaps would not start on a byte boundary inside
    /// a blob, since their index offsets could not be represented.
    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(Error::NoSizes);
        }
        if self.chars_per_file == 0 {
            return Err(Error::ZeroChunkSize);
        }
        for &size in &self.sizes {
            if size == 0 {
                return Err(Error::ZeroSize);
            }
            if (size as u64 * size as u64) % 8 != 0 {
                return Err(Error::UnalignedSize(size));
            }
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            chars_per_file: DEFAULT_CHARS_PER_FILE,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            debug_images: true,
        }
    }
}
