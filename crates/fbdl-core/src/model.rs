//! Data model shared by the validator, fetcher, normalizer and session.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::ResolveError;
use crate::validate;

/// Title used for every result; the extraction API never returns one.
pub const DEFAULT_TITLE: &str = "Facebook Video";

/// A Facebook URL that passed the shape check. Validation is syntactic only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VideoUrl(String);

impl VideoUrl {
    /// Trim `input` and accept it if it matches one of the known URL shapes.
    pub fn parse(input: &str) -> Result<Self, ResolveError> {
        let trimmed = input.trim();
        if validate::validate(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(ResolveError::Validation)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Quality tag of a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityTag {
    Hd,
    Sd,
}

impl QualityTag {
    pub fn as_str(self) -> &'static str {
        match self {
            QualityTag::Hd => "hd",
            QualityTag::Sd => "sd",
        }
    }

    /// File name suggested when saving media of this quality.
    pub fn suggested_filename(self) -> String {
        format!("facebook-video-{}.mp4", self.as_str())
    }
}

impl fmt::Display for QualityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QualityTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("hd") {
            Ok(QualityTag::Hd)
        } else if s.eq_ignore_ascii_case("sd") {
            Ok(QualityTag::Sd)
        } else {
            Err(format!("unknown quality '{s}' (expected hd or sd)"))
        }
    }
}

/// One selectable quality option with a direct media URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QualityVariant {
    label: String,
    quality: QualityTag,
    media_url: String,
}

impl QualityVariant {
    pub(crate) fn new(label: &str, quality: QualityTag, media_url: &str) -> Self {
        Self {
            label: label.to_string(),
            quality,
            media_url: media_url.to_string(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn quality(&self) -> QualityTag {
        self.quality
    }

    pub fn media_url(&self) -> &str {
        &self.media_url
    }
}

/// Normalized extraction result. Variant order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoResult {
    pub success: bool,
    pub title: String,
    /// Thumbnail URL, empty when the API gave none.
    pub thumbnail_url: String,
    pub variants: Vec<QualityVariant>,
}

impl VideoResult {
    /// First variant carrying `tag`, if any.
    pub fn variant(&self, tag: QualityTag) -> Option<&QualityVariant> {
        self.variants.iter().find(|v| v.quality == tag)
    }

    pub fn has_quality(&self, tag: QualityTag) -> bool {
        self.variant(tag).is_some()
    }
}

/// A save handed to a [`Downloader`](crate::downloader::Downloader).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaveRequest {
    pub quality: QualityTag,
    pub media_url: String,
    pub suggested_name: String,
}

impl SaveRequest {
    pub fn for_variant(variant: &QualityVariant) -> Self {
        Self {
            quality: variant.quality,
            media_url: variant.media_url.clone(),
            suggested_name: variant.quality.suggested_filename(),
        }
    }
}
