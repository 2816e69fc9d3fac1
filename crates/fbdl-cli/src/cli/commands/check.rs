//! `fbdl check <url>` – shape check only.

use anyhow::Result;
use fbdl_core::validate;

pub fn run_check(url: &str) -> Result<()> {
    if validate::validate(url.trim()) {
        println!("valid");
        Ok(())
    } else {
        println!("invalid");
        anyhow::bail!("not a recognized Facebook video URL: {url}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_accepts_video_url_and_rejects_others() {
        assert!(run_check(" https://m.facebook.com/page/videos/42 ").is_ok());
        let err = run_check("https://example.com/watch?v=1").unwrap_err();
        assert!(err.to_string().contains("not a recognized Facebook video URL"));
    }
}
