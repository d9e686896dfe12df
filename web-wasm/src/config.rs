//! API endpoint configuration
//!
//! The target host is a single build-time value; everything else about
//! the external scan service is opaque to the page.

/// Fallback when `SHELFSCAN_API_BASE` is not set at build time.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Base URL of the scan API, trailing slashes trimmed.
pub fn api_base() -> String {
    option_env!("SHELFSCAN_API_BASE")
        .unwrap_or(DEFAULT_API_BASE)
        .trim_end_matches('/')
        .to_string()
}

pub fn upload_url() -> String {
    format!("{}/upload", api_base())
}

pub fn recommend_url() -> String {
    format!("{}/recommend", api_base())
}
