//! Page flow tests
//!
//! Drives the state machine the way the page does, with mock server
//! payloads going through the same serde types and codec the WASM
//! front-end uses.

use shelfscan_common::{
    decode_data_url, encode_data_url, Action, DecodedImage, RecommendRequest, RecommendResponse,
    ScanState, UploadResponse, View,
};

/// User selects photo.jpg, submits, server extracts two titles.
#[test]
fn test_file_upload_success_scenario() {
    let mut state = ScanState::default();
    state.apply(Action::SelectFile("photo.jpg".to_string()));
    state.apply(Action::UploadStarted);

    let body = r#"{"extracted_titles": ["Dune", "1984"]}"#;
    let response: UploadResponse = serde_json::from_str(body).expect("parse failed");
    state.apply(Action::UploadSucceeded(response.extracted_titles));

    assert_eq!(state.view(), View::Recommendations);
    assert_eq!(state.titles(), ["Dune", "1984"]);
    assert!(!state.uploading);
    assert!(state.can_recommend());
}

/// Server answers 500; the page shows an error and stays on capture.
#[test]
fn test_upload_server_error_scenario() {
    let mut state = ScanState::default();
    state.apply(Action::SelectFile("photo.jpg".to_string()));
    state.apply(Action::UploadStarted);
    state.apply(Action::UploadFailed("upload failed: API error: 500".to_string()));

    assert!(!state.uploading);
    assert_eq!(state.view(), View::Capture);
    assert!(state.titles().is_empty());
    assert!(state.error.is_some());
}

/// Recommendation round: titles=["Dune"], preference="mystery" yields
/// exactly one recommended title.
#[test]
fn test_recommendation_scenario() {
    let mut state = ScanState::default();
    state.apply(Action::UploadStarted);
    state.apply(Action::UploadSucceeded(vec!["Dune".to_string()]));

    let request = RecommendRequest {
        titles: state.titles().to_vec(),
        user_preference: "mystery".to_string(),
    };
    let body = serde_json::to_string(&request).expect("serialize failed");
    assert_eq!(
        body,
        r#"{"titles":["Dune"],"user_preference":"mystery"}"#
    );

    state.apply(Action::RecommendStarted);
    let response: RecommendResponse =
        serde_json::from_str(r#"{"recommendations": ["Gone Girl"]}"#).expect("parse failed");
    state.apply(Action::RecommendSucceeded(response.recommendations));

    assert_eq!(state.recommendations, ["Gone Girl"]);
    assert_eq!(state.titles(), ["Dune"]);
}

/// A captured frame survives the trip through the codec byte-for-byte
/// before it reaches the multipart builder.
#[test]
fn test_capture_codec_round_trip_scenario() {
    let frame = DecodedImage {
        mime: "image/jpeg".to_string(),
        bytes: vec![0xff, 0xd8, 0xff, 0xe0, 0x00, 0x10],
    };
    let data_url = encode_data_url(&frame);

    let mut state = ScanState::default();
    state.apply(Action::CameraStarted(Default::default()));
    state.apply(Action::FrameCaptured(shelfscan_common::CapturedImage::new(
        data_url.clone(),
    )));

    let captured = state.captured.as_ref().expect("captured image missing");
    let decoded = decode_data_url(&captured.data_url).expect("decode failed");
    assert_eq!(decoded, frame);
}

/// Returning home stops everything and forgets the previous scan.
#[test]
fn test_reset_scenario() {
    let mut state = ScanState::default();
    state.apply(Action::UploadStarted);
    state.apply(Action::UploadSucceeded(vec!["Dune".to_string()]));
    state.apply(Action::RecommendStarted);
    state.apply(Action::RecommendSucceeded(vec!["Gone Girl".to_string()]));

    state.apply(Action::Reset);

    assert_eq!(state, ScanState::default());
    assert_eq!(state.view(), View::Capture);
    assert!(state.recommendations.is_empty());
}
