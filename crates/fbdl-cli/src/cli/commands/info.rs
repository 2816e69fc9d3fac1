//! `fbdl info <url>` – resolve and show the result panel.

use anyhow::Result;
use fbdl_core::config::FbdlConfig;
use fbdl_core::fetch::Fetcher;
use fbdl_core::session::{Phase, Session};
use serde_json::Value;

use crate::cli::render;

pub async fn run_info(cfg: &FbdlConfig, url: &str, json: bool) -> Result<()> {
    let fetcher = Fetcher::from_config(cfg)?;
    let mut session = Session::new();
    session.submit(url, &fetcher).await;

    print!("{}", info_output(&session, json)?);

    if let Phase::Error(message) = session.phase() {
        anyhow::bail!("{message}");
    }
    Ok(())
}

/// `{"state": <phase>, "result": <result or null>}` for `--json`.
pub fn info_document(session: &Session) -> Value {
    serde_json::json!({
        "state": session.phase(),
        "result": session.current(),
    })
}

/// Text written to stdout: the JSON document, or the panel when a result is ready.
pub fn info_output(session: &Session, json: bool) -> Result<String> {
    if json {
        let mut out = serde_json::to_string_pretty(&info_document(session))?;
        out.push('\n');
        return Ok(out);
    }
    Ok(match session.phase() {
        Phase::Ready(view) => render::render_view(view),
        _ => String::new(),
    })
}
