//! Maps the extraction API's `data` object into a [`VideoResult`].

use serde_json::Value;

use crate::model::{QualityTag, QualityVariant, VideoResult, DEFAULT_TITLE};

/// Normalize the API `data` object.
///
/// The API exposes a single media URL. When it reports `HD`, the SD variant
/// points at the same URL.
pub fn normalize(data: &Value) -> VideoResult {
    let media_url = non_empty_str(data, "url");
    let quality = data.get("quality").and_then(Value::as_str);

    let variants = match (media_url, quality) {
        (Some(url), Some("HD")) => vec![
            QualityVariant::new("HD Quality", QualityTag::Hd, url),
            QualityVariant::new("SD Quality", QualityTag::Sd, url),
        ],
        (Some(url), _) => vec![QualityVariant::new("Standard Quality", QualityTag::Sd, url)],
        (None, _) => Vec::new(),
    };

    VideoResult {
        success: true,
        title: DEFAULT_TITLE.to_string(),
        thumbnail_url: non_empty_str(data, "thumbnail").unwrap_or_default().to_string(),
        variants,
    }
}

fn non_empty_str<'a>(data: &'a Value, key: &str) -> Option<&'a str> {
    data.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}
