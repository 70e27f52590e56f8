use std::{fs, path::PathBuf};

use crate::{
    blob::Blob,
    config::GeneratorConfig,
    error::{Error, Result},
    glyph::{DebugImage, GlyphSource, Rasterizer},
    index::{FontIndex, IndexEntry},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlobSummary {
    pub path: PathBuf,
    pub size: u32,
    pub chars: usize,
    pub bytes: usize,
}

/// What a generation run wrote.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub blobs: Vec<BlobSummary>,
    pub index_files: Vec<PathBuf>,
    pub debug_saved: usize,
    pub debug_failed: usize,
}

pub struct FontGenerator<S: GlyphSource> {
    rasterizer: Rasterizer<S>,
    config: GeneratorConfig,
}

impl<S: GlyphSource> FontGenerator<S> {
    pub fn new(source: S, config: GeneratorConfig) -> Self {
        let mut rasterizer = Rasterizer::new(source);
        if config.debug_images {
            rasterizer = rasterizer.with_debug_dir(config.debug_dir());
        }
        Self { rasterizer, config }
    }

    /// Rasterizes every character at every configured size and writes the
    /// blobs followed by the index files. Debug snapshots are best-effort;
    /// any other failure stops the run and leaves already written files in
    /// place.
    pub fn generate(&self, chars: &[char]) -> Result<GenerationReport> {
        self.config.validate()?;

        let output_dir = &self.config.output_dir;
        fs::create_dir_all(output_dir).map_err(|err| Error::io(output_dir, err))?;
        if self.config.debug_images {
            let debug_dir = self.config.debug_dir();
            if let Err(err) = fs::create_dir_all(&debug_dir) {
                log::error!("Couldn't create {}: {err}", debug_dir.display());
            }
        }

        let mut report = GenerationReport::default();
        if chars.is_empty() {
            log::warn!("no characters to convert, nothing written");
            return Ok(report);
        }

        let mut index = FontIndex::new();
        for &size in &self.config.sizes {
            for (chunk_idx, chunk) in chars.chunks(self.config.chars_per_file).enumerate() {
                let mut blob = Blob::new(size, chunk_idx + 1);

                for &character in chunk {
                    let (bitmap, debug) = self.rasterizer.rasterize(character, size);
                    match debug {
                        DebugImage::Saved(_) => report.debug_saved += 1,
                        DebugImage::Failed => report.debug_failed += 1,
                        DebugImage::Disabled => {}
                    }

                    let handle = blob.add(bitmap)?;
                    index.insert(
                        character,
                        size,
                        IndexEntry {
                            file: blob.file_name(),
                            offset: blob.offset(handle),
                        },
                    );
                }

                let path = blob.write(output_dir)?;
                log::info!(
                    "wrote {} ({} characters, {} bytes)",
                    path.display(),
                    blob.len(),
                    blob.byte_len()
                );
                report.blobs.push(BlobSummary {
                    path,
                    size,
                    chars: blob.len(),
                    bytes: blob.byte_len(),
                });
            }
        }

        report.index_files = index.write_chunks(output_dir, self.config.chars_per_file)?;
        log::info!(
            "{} characters, {} blobs, {} index files",
            index.len(),
            report.blobs.len(),
            report.index_files.len()
        );
        if report.debug_failed > 0 {
            log::warn!("{} debug images could not be saved", report.debug_failed);
        }

        Ok(report)
    }
}
