//! The character index: for every (character, size), which blob holds its
//! bitmap and at which byte offset.
//!
//! On disk the index is split into `index_<n>.json` files of at most
//! `chars_per_file` characters each, in the order characters were first
//! recorded:
//!
//! ```json
//! {
//!   "A": {
//!     "16": { "file": "16x16_1.font", "offset": 0 }
//!   }
//! }
//! ```

use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use indexmap::IndexMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const INDEX_PREFIX: &str = "index_";
const INDEX_SUFFIX: &str = ".json";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub file: String,
    pub offset: u64,
}

type FileSchema = IndexMap<String, IndexMap<String, IndexEntry>>;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FontIndex {
    entries: IndexMap<char, IndexMap<u32, IndexEntry>>,
}

impl FontIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an entry. A character keeps the position it was first
    /// inserted at; a repeated (character, size) replaces the old entry.
    pub fn insert(&mut self, character: char, size: u32, entry: IndexEntry) {
        self.entries
            .entry(character)
            .or_default()
            .insert(size, entry);
    }

    pub fn get(&self, character: char, size: u32) -> Option<&IndexEntry> {
        self.entries.get(&character)?.get(&size)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, u32, &IndexEntry)> + '_ {
        self.entries.iter().flat_map(|(character, sizes)| {
            sizes
                .iter()
                .map(move |(size, entry)| (*character, *size, entry))
        })
    }

    pub fn file_name(chunk: usize) -> String {
        format!("{INDEX_PREFIX}{chunk}{INDEX_SUFFIX}")
    }

    /// Writes `index_1.json`, `index_2.json`, ... into `dir`.
    pub fn write_chunks(&self, dir: &Path, chars_per_file: usize) -> Result<Vec<PathBuf>> {
        let chunks = self.entries.iter().chunks(chars_per_file.max(1));
        let mut paths = Vec::new();

        for (chunk_idx, chunk) in chunks.into_iter().enumerate() {
            let schema: FileSchema = chunk
                .map(|(character, sizes)| {
                    let sizes = sizes
                        .iter()
                        .map(|(size, entry)| (size.to_string(), entry.clone()))
                        .collect();
                    (character.to_string(), sizes)
                })
                .collect();

            let path = dir.join(Self::file_name(chunk_idx + 1));
            write_json(&path, &schema)?;
            log::info!("wrote {} ({} characters)", path.display(), schema.len());
            paths.push(path);
        }

        Ok(paths)
    }

    /// Loads and merges every index file in `dir`, in chunk order.
    pub fn read_dir(dir: &Path) -> Result<Self> {
        let mut files = Vec::new();
        for dir_entry in fs::read_dir(dir).map_err(|err| Error::io(dir, err))? {
            let dir_entry = dir_entry.map_err(|err| Error::io(dir, err))?;
            let name = dir_entry.file_name();
            if let Some(chunk) = name.to_str().and_then(chunk_number) {
                files.push((chunk, dir_entry.path()));
            }
        }
        files.sort();

        let mut index = Self::new();
        for (_, path) in files {
            let file = File::open(&path).map_err(|err| Error::io(&path, err))?;
            let schema: FileSchema = serde_json::from_reader(BufReader::new(file))
                .map_err(|source| Error::Json {
                    path: path.clone(),
                    source,
                })?;

            for (key, sizes) in schema {
                let mut key_chars = key.chars();
                let (Some(character), None) = (key_chars.next(), key_chars.next()) else {
                    log::warn!("{}: skipping key {key:?}, not a single character", path.display());
                    continue;
                };
                for (size, entry) in sizes {
                    match size.parse() {
                        Ok(size) => index.insert(character, size, entry),
                        Err(_) => log::warn!("{}: skipping size {size:?} of '{character}'", path.display()),
                    }
                }
            }
        }

        Ok(index)
    }
}

fn chunk_number(file_name: &str) -> Option<usize> {
    file_name
        .strip_prefix(INDEX_PREFIX)?
        .strip_suffix(INDEX_SUFFIX)?
        .parse()
        .ok()
}

fn write_json(path: &Path, schema: &FileSchema) -> Result<()> {
    let file = File::create(path).map_err(|err| Error::io(path, err))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, schema).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(|err| Error::io(path, err))
}
