//! Error taxonomy for a resolve/select interaction.
//!
//! `Display` carries diagnostic detail for logs; [`ResolveError::user_message`]
//! is the fixed text shown to the user.

use thiserror::Error;

use crate::model::QualityTag;

#[derive(Debug, Error)]
pub enum ResolveError {
    /// Input is not one of the accepted Facebook URL shapes. Raised before any I/O.
    #[error("invalid Facebook video URL")]
    Validation,

    /// Transport failure or non-2xx status from the extraction endpoint.
    #[error("network error: {0}")]
    Network(String),

    /// Well-formed HTTP response that is semantically unsuccessful.
    #[error("API error: {0}")]
    Api(String),

    /// Successful response with nothing to download.
    #[error("no download options in API response")]
    NoOptions,

    /// Quality selected while no result is stored.
    #[error("no video data available")]
    NoResult,

    /// Selected quality is not among the stored variants.
    #[error("{0} quality not available")]
    QualityUnavailable(QualityTag),

    /// The downloader rejected or failed the save.
    #[error("save failed: {0}")]
    Save(String),
}

impl ResolveError {
    /// Message shown to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            ResolveError::Validation => "Please enter a valid Facebook video URL".to_string(),
            ResolveError::Network(_) | ResolveError::Api(_) => {
                "Failed to fetch video information. Please try again.".to_string()
            }
            ResolveError::NoOptions => "No download options available for this video".to_string(),
            ResolveError::NoResult => "No video data available".to_string(),
            ResolveError::QualityUnavailable(tag) => format!(
                "{} quality not available for this video",
                tag.as_str().to_uppercase()
            ),
            ResolveError::Save(_) => "Failed to save video. Please try again.".to_string(),
        }
    }

    /// True for failures of the fetch step (logged with detail, shown generically).
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, ResolveError::Network(_) | ResolveError::Api(_))
    }
}
