//! Page state machine
//!
//! One explicit state value plus a transition function instead of
//! scattered flags. UI events and async completions dispatch `Action`s;
//! rendering derives everything from the resulting `ScanState`.

use crate::types::{CapturedImage, FacingMode};

/// Which of the two mutually exclusive views is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Capture,
    Recommendations,
}

/// Single source of truth for the page.
///
/// Invariant: at most one of `selected_file` / `captured` is set at any
/// time; the transition function enforces it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanState {
    pub facing: FacingMode,
    pub streaming: bool,
    pub camera_busy: bool,
    pub captured: Option<CapturedImage>,
    /// Display name of the chosen file; the JS handle lives outside the
    /// state value.
    pub selected_file: Option<String>,
    pub extracted_titles: Option<Vec<String>>,
    pub recommendations: Vec<String>,
    pub uploading: bool,
    pub recommending: bool,
    pub error: Option<String>,
}

/// State transitions dispatched by UI events and async completions.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SelectFile(String),
    CameraPending,
    CameraStarted(FacingMode),
    CameraStopped,
    CameraFailed(String),
    FrameCaptured(CapturedImage),
    Retake,
    UploadStarted,
    UploadSucceeded(Vec<String>),
    UploadFailed(String),
    RecommendStarted,
    RecommendSucceeded(Vec<String>),
    RecommendFailed(String),
    Reset,
}

impl ScanState {
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::SelectFile(name) => {
                self.selected_file = Some(name);
                self.captured = None;
                self.error = None;
            }
            Action::CameraPending => {
                self.camera_busy = true;
                self.error = None;
            }
            Action::CameraStarted(facing) => {
                self.facing = facing;
                self.streaming = true;
                self.camera_busy = false;
                self.captured = None;
            }
            Action::CameraStopped => {
                self.streaming = false;
                self.camera_busy = false;
            }
            Action::CameraFailed(message) => {
                self.streaming = false;
                self.camera_busy = false;
                self.error = Some(message);
            }
            Action::FrameCaptured(image) => {
                self.captured = Some(image);
                self.selected_file = None;
                self.streaming = false;
            }
            Action::Retake => {
                self.captured = None;
            }
            Action::UploadStarted => {
                self.uploading = true;
                self.error = None;
            }
            Action::UploadSucceeded(titles) => {
                // completions arriving after a reset are stale
                if !self.uploading {
                    return;
                }
                self.uploading = false;
                self.streaming = false;
                self.extracted_titles = Some(titles);
            }
            Action::UploadFailed(message) => {
                if !self.uploading {
                    return;
                }
                self.uploading = false;
                self.error = Some(message);
            }
            Action::RecommendStarted => {
                self.recommending = true;
                self.error = None;
            }
            Action::RecommendSucceeded(titles) => {
                if !self.recommending {
                    return;
                }
                self.recommending = false;
                self.recommendations = titles;
            }
            Action::RecommendFailed(message) => {
                if !self.recommending {
                    return;
                }
                self.recommending = false;
                self.error = Some(message);
            }
            Action::Reset => {
                *self = Self::default();
            }
        }
    }

    /// Capture view until titles arrive, then recommendations.
    pub fn view(&self) -> View {
        if self.extracted_titles.is_some() {
            View::Recommendations
        } else {
            View::Capture
        }
    }

    pub fn has_source(&self) -> bool {
        self.selected_file.is_some() || self.captured.is_some()
    }

    pub fn can_upload(&self) -> bool {
        self.has_source() && !self.uploading
    }

    pub fn can_recommend(&self) -> bool {
        !self.titles().is_empty() && !self.recommending
    }

    pub fn titles(&self) -> &[String] {
        self.extracted_titles.as_deref().unwrap_or(&[])
    }
}
