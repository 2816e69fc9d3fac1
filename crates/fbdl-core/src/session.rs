//! Presentation and selection state for one resolver surface.
//!
//! A submission is split into [`Session::begin`] (validate, enter `Loading`)
//! and [`Session::complete`] (apply the fetch outcome). Every `begin` starts a
//! new generation; a completion whose ticket is older than the latest
//! generation is dropped, so overlapping submissions cannot overwrite a newer
//! result.

use serde::Serialize;

use crate::downloader::Downloader;
use crate::error::ResolveError;
use crate::fetch::Fetcher;
use crate::model::{QualityTag, SaveRequest, VideoResult, VideoUrl, DEFAULT_TITLE};

/// Image shown when the API gives no thumbnail.
pub const PLACEHOLDER_THUMBNAIL: &str = "https://via.placeholder.com/200x200?text=No+Thumbnail";

/// What the result panel shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultView {
    pub thumbnail_url: String,
    pub thumbnail_alt: String,
    pub title: String,
    pub show_hd: bool,
    pub show_sd: bool,
}

impl ResultView {
    fn from_result(result: &VideoResult) -> Self {
        let title = if result.title.is_empty() {
            DEFAULT_TITLE.to_string()
        } else {
            result.title.clone()
        };
        let thumbnail_url = if result.thumbnail_url.is_empty() {
            PLACEHOLDER_THUMBNAIL.to_string()
        } else {
            result.thumbnail_url.clone()
        };
        Self {
            thumbnail_url,
            thumbnail_alt: title.clone(),
            title,
            show_hd: result.has_quality(QualityTag::Hd),
            show_sd: result.has_quality(QualityTag::Sd),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", content = "view", rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Ready(ResultView),
    Error(String),
}

/// Handle for one in-flight submission.
#[derive(Debug, Clone)]
pub struct Ticket {
    generation: u64,
    url: VideoUrl,
}

impl Ticket {
    pub fn url(&self) -> &VideoUrl {
        &self.url
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// A newer submission started; the outcome was discarded.
    Stale,
}

#[derive(Debug, Default)]
pub struct Session {
    phase: Phase,
    current: Option<VideoResult>,
    generation: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Result of the latest applied fetch, if any.
    pub fn current(&self) -> Option<&VideoResult> {
        self.current.as_ref()
    }

    /// Back to `Idle` with no stored result.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.current = None;
    }

    /// Start a submission. Invalid input ends in `Error` without any I/O.
    pub fn begin(&mut self, input: &str) -> Result<Ticket, ResolveError> {
        self.generation += 1;
        self.reset();

        match VideoUrl::parse(input) {
            Ok(url) => {
                self.phase = Phase::Loading;
                Ok(Ticket {
                    generation: self.generation,
                    url,
                })
            }
            Err(e) => {
                tracing::debug!(input, "rejected input URL");
                self.phase = Phase::Error(e.user_message());
                Err(e)
            }
        }
    }

    /// Apply the fetch outcome for `ticket`, unless a newer submission started.
    pub fn complete(
        &mut self,
        ticket: Ticket,
        outcome: Result<VideoResult, ResolveError>,
    ) -> Completion {
        if ticket.generation != self.generation {
            tracing::debug!(
                stale = ticket.generation,
                latest = self.generation,
                "discarding outcome of superseded submission"
            );
            return Completion::Stale;
        }

        match outcome {
            Ok(result) => {
                if !result.success || result.variants.is_empty() {
                    self.phase = Phase::Error(ResolveError::NoOptions.user_message());
                } else {
                    self.phase = Phase::Ready(ResultView::from_result(&result));
                }
                self.current = Some(result);
            }
            Err(e) => {
                if e.is_fetch_failure() {
                    tracing::error!(url = %ticket.url, error = %e, "failed to fetch video information");
                } else {
                    tracing::warn!(url = %ticket.url, error = %e, "fetch rejected");
                }
                self.phase = Phase::Error(e.user_message());
            }
        }
        Completion::Applied
    }

    /// Validate, fetch and apply in one go.
    pub async fn submit(&mut self, input: &str, fetcher: &Fetcher) -> &Phase {
        if let Ok(ticket) = self.begin(input) {
            let outcome = fetcher.fetch_info(ticket.url.as_str()).await;
            self.complete(ticket, outcome);
        }
        &self.phase
    }

    /// Save the stored variant for `tag` through `downloader`.
    ///
    /// Failures move the phase to `Error` but keep the stored result, so
    /// another quality can still be picked.
    pub fn select_quality(
        &mut self,
        tag: QualityTag,
        downloader: &dyn Downloader,
    ) -> Result<SaveRequest, ResolveError> {
        let outcome = self.save_variant(tag, downloader);
        if let Err(e) = &outcome {
            self.phase = Phase::Error(e.user_message());
        }
        outcome
    }

    fn save_variant(
        &self,
        tag: QualityTag,
        downloader: &dyn Downloader,
    ) -> Result<SaveRequest, ResolveError> {
        let result = self
            .current
            .as_ref()
            .filter(|r| !r.variants.is_empty())
            .ok_or(ResolveError::NoResult)?;
        let variant = result
            .variant(tag)
            .ok_or(ResolveError::QualityUnavailable(tag))?;

        let request = SaveRequest::for_variant(variant);
        downloader
            .save(&request.media_url, &request.suggested_name)
            .map_err(|e| {
                let detail = format!("{e:#}");
                tracing::error!(url = %request.media_url, error = %detail, "save failed");
                ResolveError::Save(detail)
            })?;
        Ok(request)
    }
}
