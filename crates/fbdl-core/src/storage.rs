//! Partial-file lifecycle for saved media.
//!
//! Bytes go to `<name>.part` and are hashed as they are written; `finalize`
//! renames the temp file to the final name.

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (e.g. `video.mp4` → `video.mp4.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// A completed save.
#[derive(Debug, Clone)]
pub struct SavedFile {
    pub path: PathBuf,
    pub bytes: u64,
    /// Lowercase hex SHA-256 of the content.
    pub sha256: String,
}

/// Sequential writer for a `.part` file.
pub struct PartFile {
    writer: BufWriter<File>,
    hasher: Sha256,
    bytes: u64,
    temp_path: PathBuf,
    final_path: PathBuf,
}

impl PartFile {
    /// Create (or truncate) the temp file for `final_path`.
    pub fn create(final_path: &Path) -> Result<Self> {
        let temp_path = temp_path(final_path);
        let file = File::options()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .with_context(|| format!("failed to create temp file: {}", temp_path.display()))?;
        Ok(Self {
            writer: BufWriter::new(file),
            hasher: Sha256::new(),
            bytes: 0,
            temp_path,
            final_path: final_path.to_path_buf(),
        })
    }

    pub fn write(&mut self, data: &[u8]) -> Result<()> {
        self.writer
            .write_all(data)
            .context("storage write failed")?;
        self.hasher.update(data);
        self.bytes += data.len() as u64;
        Ok(())
    }

    pub fn temp_path(&self) -> &Path {
        &self.temp_path
    }

    /// Flush, sync and rename the temp file over the final path.
    pub fn finalize(self) -> Result<SavedFile> {
        let file = self
            .writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("storage flush failed: {}", e.error()))?;
        file.sync_all().context("storage sync failed")?;
        drop(file);

        std::fs::rename(&self.temp_path, &self.final_path).with_context(|| {
            format!(
                "failed to rename {} to {}",
                self.temp_path.display(),
                self.final_path.display()
            )
        })?;
        Ok(SavedFile {
            path: self.final_path,
            bytes: self.bytes,
            sha256: hex::encode(self.hasher.finalize()),
        })
    }

    /// Drop the writer and remove the temp file.
    pub fn discard(self) {
        let temp_path = self.temp_path.clone();
        drop(self.writer);
        if let Err(e) = std::fs::remove_file(&temp_path) {
            tracing::warn!("could not remove {}: {}", temp_path.display(), e);
        }
    }
}
