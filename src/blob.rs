use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    bitmap::Bitmap,
    error::{Error, Result},
    pack::{pack_bits, packed_len},
};

/// Position of a bitmap inside its blob.
#[derive(Eq, Hash, PartialEq, Clone, Copy, Debug)]
pub struct BitmapHandle(pub usize);

/// The bitmaps for one chunk of characters at one size, written out as a
/// single `.font` file.
#[derive(Debug)]
pub struct Blob {
    size: u32,
    chunk: usize,
    bitmaps: Vec<Bitmap>,
}

impl Blob {
    /// `chunk` is 1-based and only used for the file name.
    pub fn new(size: u32, chunk: usize) -> Self {
        Self {
            size,
            chunk,
            bitmaps: Vec::new(),
        }
    }

    pub fn file_name(&self) -> String {
        format!("{0}x{0}_{1}.font", self.size, self.chunk)
    }

    pub fn len(&self) -> usize {
        self.bitmaps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bitmaps.is_empty()
    }

    pub fn add(&mut self, bitmap: Bitmap) -> Result<BitmapHandle> {
        if bitmap.size() != self.size {
            return Err(Error::BitmapSizeMismatch {
                expected: self.size,
                actual: bitmap.size(),
            });
        }
        self.bitmaps.push(bitmap);
        Ok(BitmapHandle(self.bitmaps.len() - 1))
    }

    pub fn get(&self, handle: BitmapHandle) -> Option<&Bitmap> {
        self.bitmaps.get(handle.0)
    }

    /// Byte offset of the bitmap's first pixel. Only exact when
    /// `size * size` is a multiple of 8, which config validation enforces.
    pub fn offset(&self, handle: BitmapHandle) -> u64 {
        handle.0 as u64 * self.pixels_per_bitmap() / 8
    }

    pub fn byte_len(&self) -> usize {
        packed_len(self.bitmaps.len() * self.pixels_per_bitmap() as usize)
    }

    /// Concatenates every bitmap and packs the result. Bitmaps are not
    /// padded individually.
    pub fn pack(&self) -> Vec<u8> {
        pack_bits(
            self.bitmaps
                .iter()
                .flat_map(|bitmap| bitmap.pixels().iter().copied()),
        )
    }

    pub fn write(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(self.file_name());
        fs::write(&path, self.pack()).map_err(|err| Error::io(&path, err))?;
        Ok(path)
    }

    fn pixels_per_bitmap(&self) -> u64 {
        self.size as u64 * self.size as u64
    }
}
