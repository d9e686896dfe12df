//! Recommendation requests

use shelfscan_common::{Error, RecommendRequest, RecommendResponse, Result};

use crate::api::client;
use crate::config;

/// Asks the recommendation endpoint for titles similar to the extracted
/// ones, steered by an optional free-text preference. Empty `titles` is
/// allowed here; the UI gates the action instead.
pub async fn request(titles: &[String], preference: &str) -> Result<RecommendResponse> {
    let body = RecommendRequest {
        titles: titles.to_vec(),
        user_preference: preference.to_string(),
    };

    let json = client::post_json(&config::recommend_url(), &body)
        .await
        .map_err(Error::RecommendationFailed)?;

    serde_wasm_bindgen::from_value(json).map_err(|e| Error::RecommendationFailed(e.to_string()))
}
