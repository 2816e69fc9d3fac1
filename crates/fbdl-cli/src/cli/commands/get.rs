//! `fbdl get <url>` – resolve, then save the chosen quality.

use anyhow::{Context, Result};
use fbdl_core::config::FbdlConfig;
use fbdl_core::downloader::FileDownloader;
use fbdl_core::fetch::Fetcher;
use fbdl_core::session::{Phase, Session};
use fbdl_core::QualityTag;
use std::path::{Path, PathBuf};

use crate::cli::render;

pub async fn run_get(
    cfg: &FbdlConfig,
    url: &str,
    quality: QualityTag,
    download_dir: Option<PathBuf>,
) -> Result<()> {
    let fetcher = Fetcher::from_config(cfg)?;
    let mut session = Session::new();

    match session.submit(url, &fetcher).await {
        Phase::Ready(view) => print!("{}", render::render_view(view)),
        Phase::Error(message) => anyhow::bail!("{message}"),
        Phase::Idle | Phase::Loading => anyhow::bail!("no result"),
    }

    let dir = match download_dir.or_else(|| cfg.download_dir.clone()) {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create download dir {}", dir.display()))?;
    let downloader = FileDownloader::new(&dir, cfg.http_options());

    let request = tokio::task::block_in_place(|| session.select_quality(quality, &downloader))
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    let path = downloader.dir().join(&request.suggested_name);
    println!("{}", saved_line(&path)?);
    Ok(())
}

/// `Saved <path> (<n> bytes)` for a file the downloader just wrote.
pub fn saved_line(path: &Path) -> Result<String> {
    let bytes = std::fs::metadata(path)
        .with_context(|| format!("failed to stat saved file {}", path.display()))?
        .len();
    Ok(format!("Saved {} ({} bytes)", path.display(), bytes))
}
