//! Blocking HTTP GET over libcurl.
//!
//! Runs in the current thread; call from `spawn_blocking` if used from async code.

use anyhow::{Context, Result};
use std::time::Duration;

/// Transport options. `None` keeps libcurl's defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpOptions {
    pub connect_timeout: Option<Duration>,
}

/// Status and body of a completed GET.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u32,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub(crate) fn configure(easy: &mut curl::easy::Easy, url: &str, opts: &HttpOptions) -> Result<()> {
    easy.url(url).context("invalid URL")?;
    easy.get(true)?;
    easy.follow_location(true)?;
    if let Some(timeout) = opts.connect_timeout {
        easy.connect_timeout(timeout)?;
    }
    Ok(())
}

/// Performs a GET and buffers the whole body. Follows redirects.
pub fn get(url: &str, opts: &HttpOptions) -> Result<HttpResponse> {
    let mut body = Vec::new();

    let mut easy = curl::easy::Easy::new();
    configure(&mut easy, url, opts)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform().context("GET request failed")?;
    }

    let status = easy.response_code().context("no response code")?;
    Ok(HttpResponse { status, body })
}
