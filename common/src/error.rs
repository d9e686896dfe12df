//! Error type definitions

use thiserror::Error;

/// Errors surfaced to the page. Every one is handled at the triggering
/// control; nothing here is fatal.
#[derive(Error, Debug)]
pub enum Error {
    #[error("camera unavailable: {0}")]
    DeviceUnavailable(String),

    #[error("no image selected or captured")]
    NoImageSource,

    #[error("upload failed: {0}")]
    UploadFailed(String),

    #[error("recommendation request failed: {0}")]
    RecommendationFailed(String),

    #[error("invalid data URL: {0}")]
    InvalidDataUrl(String),
}

/// Result alias
pub type Result<T> = std::result::Result<T, Error>;
