//! Saving selected media.
//!
//! The session only knows the [`Downloader`] capability; [`FileDownloader`]
//! streams the media to disk through libcurl.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::http::{self, HttpOptions};
use crate::storage::{PartFile, SavedFile};

/// Capability to save a media URL under a suggested file name.
///
/// Returning `Ok` means the save was handed off; callers get no further
/// confirmation.
pub trait Downloader {
    fn save(&self, media_url: &str, suggested_name: &str) -> Result<()>;
}

/// Saves media into a directory, overwriting any file with the same name.
#[derive(Debug, Clone)]
pub struct FileDownloader {
    dir: PathBuf,
    opts: HttpOptions,
}

impl FileDownloader {
    pub fn new(dir: impl Into<PathBuf>, opts: HttpOptions) -> Self {
        Self {
            dir: dir.into(),
            opts,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// GET `media_url` into `<dir>/<name>` via a `.part` file.
    pub fn save_to(&self, media_url: &str, suggested_name: &str) -> Result<SavedFile> {
        let final_path = self.dir.join(file_name_only(suggested_name)?);
        let mut part = PartFile::create(&final_path)?;

        match self.transfer(media_url, &mut part) {
            Ok(()) => part.finalize(),
            Err(e) => {
                part.discard();
                Err(e)
            }
        }
    }

    fn transfer(&self, media_url: &str, part: &mut PartFile) -> Result<()> {
        let mut easy = curl::easy::Easy::new();
        http::configure(&mut easy, media_url, &self.opts)?;
        easy.fail_on_error(true)?;

        let mut write_error = None;
        let performed = {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| match part.write(data) {
                Ok(()) => Ok(data.len()),
                Err(e) => {
                    write_error = Some(e);
                    // Short count makes libcurl abort the transfer.
                    Ok(0)
                }
            })?;
            transfer.perform()
        };
        if let Some(e) = write_error {
            return Err(e);
        }
        performed.context("media GET failed")?;

        let code = easy.response_code().context("no response code")?;
        if !(200..300).contains(&code) {
            anyhow::bail!("media GET returned HTTP {}", code);
        }
        Ok(())
    }
}

impl Downloader for FileDownloader {
    fn save(&self, media_url: &str, suggested_name: &str) -> Result<()> {
        let saved = self.save_to(media_url, suggested_name)?;
        tracing::info!(
            path = %saved.path.display(),
            bytes = saved.bytes,
            sha256 = %saved.sha256,
            "saved media"
        );
        Ok(())
    }
}

/// Reject names that would escape the download directory.
fn file_name_only(name: &str) -> Result<&str> {
    let file_name = Path::new(name)
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("invalid file name: {name:?}"))?;
    if file_name != name {
        anyhow::bail!("file name must not contain a path: {name:?}");
    }
    Ok(file_name)
}
