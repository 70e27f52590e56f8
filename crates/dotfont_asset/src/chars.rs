use std::path::Path;

use anyhow::{Context, Result};

use crate::loader::{Asset, Loader};

/// The characters to convert, in the order the list file gives them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CharList {
    chars: Vec<char>,
}

impl CharList {
    /// Leading and trailing whitespace is dropped; whitespace between
    /// characters is kept and converted like any other character.
    pub fn parse(text: &str) -> Self {
        Self {
            chars: text.trim().chars().collect(),
        }
    }

    pub fn from_asset(asset: &Asset) -> Result<Self> {
        Ok(Self::parse(asset.text()?))
    }

    pub fn load<S: AsRef<Path>>(loader: &mut Loader, path: S) -> Result<Self> {
        let path = path.as_ref();
        let asset = loader.load(path)?;
        Self::from_asset(asset)
            .with_context(|| format!("Couldn't read character list {}", path.display()))
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}
