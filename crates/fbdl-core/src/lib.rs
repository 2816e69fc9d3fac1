pub mod config;
pub mod logging;

pub mod downloader;
pub mod error;
pub mod fetch;
pub mod http;
pub mod model;
pub mod normalize;
pub mod session;
pub mod storage;
pub mod validate;

pub use error::ResolveError;
pub use model::{QualityTag, QualityVariant, SaveRequest, VideoResult, VideoUrl};
