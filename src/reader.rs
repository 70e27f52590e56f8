//! Reads generated font data back, for checking a run's output.

use std::{
    cell::RefCell,
    collections::{hash_map::Entry, HashMap},
    fs,
    path::{Path, PathBuf},
};

use crate::{
    bitmap::Bitmap,
    error::{Error, Result},
    index::{FontIndex, IndexEntry},
    pack::unpack_bits,
};

pub struct FontStore {
    dir: PathBuf,
    index: FontIndex,
    blobs: RefCell<HashMap<String, Vec<u8>>>,
}

impl FontStore {
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        let index = FontIndex::read_dir(&dir)?;
        Ok(Self {
            dir,
            index,
            blobs: RefCell::new(HashMap::new()),
        })
    }

    pub fn index(&self) -> &FontIndex {
        &self.index
    }

    pub fn entry(&self, character: char, size: u32) -> Result<&IndexEntry> {
        self.index
            .get(character, size)
            .ok_or(Error::MissingEntry { character, size })
    }

    pub fn bitmap(&self, character: char, size: u32) -> Result<Bitmap> {
        let entry = self.entry(character, size)?;
        let pixel_count = size as usize * size as usize;
        let out_of_bounds = || Error::OutOfBounds {
            character,
            size,
            file: entry.file.clone(),
        };

        let bit_offset = (entry.offset as usize)
            .checked_mul(8)
            .ok_or_else(out_of_bounds)?;
        let bits = self.with_blob(&entry.file, |bytes| {
            unpack_bits(bytes, bit_offset, pixel_count)
        })?;
        let bits = bits.ok_or_else(out_of_bounds)?;

        Bitmap::from_pixels(size, bits).ok_or_else(out_of_bounds)
    }

    /// Reads every indexed bitmap once. Returns how many were checked.
    pub fn verify(&self) -> Result<usize> {
        let mut checked = 0;
        for (character, size, _) in self.index.iter() {
            self.bitmap(character, size)?;
            checked += 1;
        }
        Ok(checked)
    }

    fn with_blob<T>(&self, file: &str, f: impl FnOnce(&[u8]) -> T) -> Result<T> {
        let mut blobs = self.blobs.borrow_mut();
        let bytes = match blobs.entry(file.to_string()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let path = self.dir.join(file);
                let bytes = fs::read(&path).map_err(|err| Error::io(&path, err))?;
                entry.insert(bytes)
            }
        };
        Ok(f(bytes))
    }
}
