use std::{
    collections::HashMap,
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context, Result};

#[derive(Clone, Debug)]
pub struct Asset {
    pub bytes: Vec<u8>,
}

impl Asset {
    /// Decodes the asset as UTF-8 text.
    pub fn text(&self) -> Result<&str> {
        std::str::from_utf8(&self.bytes).map_err(|err| anyhow!("asset is not valid UTF-8: {err}"))
    }
}

/// Reads files from disk once and hands out the cached bytes afterwards.
pub struct Loader {
    assets: HashMap<PathBuf, Asset>,
}

impl Loader {
    pub fn new() -> Self {
        Self {
            assets: HashMap::new(),
        }
    }

    pub fn get<S: AsRef<Path>>(&self, path: S) -> Option<&Asset> {
        self.assets.get(path.as_ref())
    }

    pub fn load<S: AsRef<Path>>(&mut self, path: S) -> Result<&Asset> {
        let path = path.as_ref();
        if !self.assets.contains_key(path) {
            let mut file = File::open(path)
                .with_context(|| format!("Couldn't open asset at {}", path.display()))?;
            let mut bytes = Vec::new();
            file.read_to_end(&mut bytes)
                .with_context(|| format!("Couldn't read asset at {}", path.display()))?;
            log::debug!("loaded {} ({} bytes)", path.display(), bytes.len());
            self.assets.insert(path.to_path_buf(), Asset { bytes });
        }

        self.assets
            .get(path)
            .ok_or(anyhow!("Path doesn't exist in asset map."))
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
