//! Facebook video URL shape check.
//!
//! Purely syntactic and deliberately permissive: a string that fits one of the
//! shapes is accepted even if it points nowhere. The extraction API is the real
//! check.

use once_cell::sync::Lazy;
use regex::RegexSet;

static VIDEO_URL_SET: Lazy<RegexSet> = Lazy::new(|| {
    RegexSet::new([
        r"(?i)^https?://(www\.|m\.|web\.)?(facebook|fb)\.com/.*/videos/.*$",
        r"(?i)^https?://(www\.|m\.|web\.)?(facebook|fb)\.com/watch\?v=.*$",
        r"(?i)^https?://(www\.|m\.|web\.)?(facebook|fb)\.com/.*/videos/.*/.*$",
        r"(?i)^https?://(www\.|m\.|web\.)?(facebook|fb)\.com/.*/posts/.*$",
        r"(?i)^https?://(www\.|m\.|web\.)?(facebook|fb)\.com/.*/reels/.*$",
    ])
    .unwrap()
});

/// Returns true if `url` matches any accepted Facebook video URL shape.
pub fn validate(url: &str) -> bool {
    if url.is_empty() {
        return false;
    }
    VIDEO_URL_SET.is_match(url)
}
