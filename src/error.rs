//! Errors returned while generating or reading back font data.
use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("font: could not parse font: {0}")]
    InvalidFont(String),

    #[error("config: at least one size is required")]
    NoSizes,
    #[error("config: size must be greater than zero")]
    ZeroSize,
    #[error("config: size {0} is not usable, {0}x{0} pixels do not fill whole bytes (sizes must be multiples of 4)")]
    UnalignedSize(u32),
    #[error("config: chars per file must be greater than zero")]
    ZeroChunkSize,

    #[error("blob: bitmap is {actual}x{actual} but blob holds {expected}x{expected} bitmaps")]
    BitmapSizeMismatch { expected: u32, actual: u32 },

    #[error("io: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("json: {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("index: no entry for '{character}' at size {size}")]
    MissingEntry { character: char, size: u32 },
    #[error("index: entry for '{character}' at size {size} reads past the end of {file}")]
    OutOfBounds {
        character: char,
        size: u32,
        file: String,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
