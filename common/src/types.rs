//! Capture and wire payload types
//!
//! Shared between the page state machine and the Web (WASM) front-end:
//! - CapturedImage / FacingMode: camera capture products
//! - UploadResponse: titles extracted by the scan endpoint
//! - RecommendRequest / RecommendResponse: recommendation endpoint payloads

use serde::{Deserialize, Serialize};

/// Still image produced by the camera, held as a base64 data URL until
/// the upload submitter decodes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedImage {
    pub data_url: String,
}

impl CapturedImage {
    pub fn new(data_url: impl Into<String>) -> Self {
        Self {
            data_url: data_url.into(),
        }
    }
}

/// Which physical camera a capture stream targets. A shelf is normally
/// scanned with the back camera, so that is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FacingMode {
    User,
    #[default]
    Environment,
}

impl FacingMode {
    /// Constraint string understood by the capture device API.
    pub fn as_str(&self) -> &'static str {
        match self {
            FacingMode::User => "user",
            FacingMode::Environment => "environment",
        }
    }

    /// The opposite camera.
    pub fn flipped(&self) -> Self {
        match self {
            FacingMode::User => FacingMode::Environment,
            FacingMode::Environment => FacingMode::User,
        }
    }
}

/// Response of the upload endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadResponse {
    pub extracted_titles: Vec<String>,
}

/// Body sent to the recommendation endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendRequest {
    pub titles: Vec<String>,
    pub user_preference: String,
}

/// Response of the recommendation endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendResponse {
    pub recommendations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    // =============================================
    // FacingMode
    // =============================================

    #[test]
    fn test_facing_mode_default_is_environment() {
        assert_eq!(FacingMode::default(), FacingMode::Environment);
    }

    #[test]
    fn test_facing_mode_constraint_strings() {
        assert_eq!(FacingMode::User.as_str(), "user");
        assert_eq!(FacingMode::Environment.as_str(), "environment");
    }

    #[test]
    fn test_facing_mode_flips_both_ways() {
        assert_eq!(FacingMode::User.flipped(), FacingMode::Environment);
        assert_eq!(FacingMode::Environment.flipped(), FacingMode::User);
    }

    // =============================================
    // Wire payloads
    // =============================================

    #[test]
    fn test_upload_response_deserialize() {
        let json = r#"{"extracted_titles": ["Dune", "1984"]}"#;
        let response: UploadResponse = serde_json::from_str(json).expect("deserialize failed");
        assert_eq!(response.extracted_titles, vec!["Dune", "1984"]);
    }

    #[test]
    fn test_upload_response_tolerates_missing_field() {
        let response: UploadResponse = serde_json::from_str("{}").expect("deserialize failed");
        assert!(response.extracted_titles.is_empty());
    }

    #[test]
    fn test_recommend_request_serialize() {
        let request = RecommendRequest {
            titles: vec!["Dune".to_string()],
            user_preference: "mystery".to_string(),
        };

        let json = serde_json::to_string(&request).expect("serialize failed");
        assert!(json.contains("\"titles\":[\"Dune\"]"));
        assert!(json.contains("\"user_preference\":\"mystery\""));
    }

    #[test]
    fn test_recommend_request_empty_titles_still_serializes() {
        let request = RecommendRequest::default();
        let json = serde_json::to_string(&request).expect("serialize failed");
        assert!(json.contains("\"titles\":[]"));
    }

    #[test]
    fn test_recommend_response_deserialize() {
        let json = r#"{"recommendations": ["Gone Girl"]}"#;
        let response: RecommendResponse = serde_json::from_str(json).expect("deserialize failed");
        assert_eq!(response.recommendations, vec!["Gone Girl"]);
    }
}
