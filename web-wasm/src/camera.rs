//! Camera lifecycle controller
//!
//! Owns the one shared mutable resource on the page: the live device
//! stream. Acquire and release are explicit; every path that drops a
//! stream stops its tracks first, so no device handle leaks.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    CanvasRenderingContext2d, HtmlCanvasElement, HtmlVideoElement, MediaStream,
    MediaStreamConstraints, MediaStreamTrack, MediaTrackConstraints,
};

use shelfscan_common::{CapturedImage, Error, FacingMode, Result};

/// Target resolution for captured stills.
const CAPTURE_WIDTH: u32 = 1280;
const CAPTURE_HEIGHT: u32 = 720;
const CAPTURE_MIME: &str = "image/jpeg";

/// Handle to the active device stream, shared into event closures.
#[derive(Clone, Default)]
pub struct CameraController {
    stream: Rc<RefCell<Option<MediaStream>>>,
    facing: Rc<Cell<FacingMode>>,
}

impl CameraController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn facing(&self) -> FacingMode {
        self.facing.get()
    }

    pub fn is_active(&self) -> bool {
        self.stream.borrow().is_some()
    }

    /// Requests a live stream for the given facing mode. Any stream held
    /// from a previous start is released first.
    pub async fn start(&self, facing: FacingMode) -> Result<MediaStream> {
        self.stop();

        let devices = web_sys::window()
            .and_then(|w| w.navigator().media_devices().ok())
            .ok_or_else(|| Error::DeviceUnavailable("media devices not available".to_string()))?;

        let mut track_constraints = MediaTrackConstraints::new();
        track_constraints.facing_mode(&JsValue::from_str(facing.as_str()));

        let mut constraints = MediaStreamConstraints::new();
        constraints.video(track_constraints.as_ref());
        constraints.audio(&JsValue::FALSE);

        let promise = devices
            .get_user_media_with_constraints(&constraints)
            .map_err(device_err)?;
        let stream: MediaStream = JsFuture::from(promise)
            .await
            .map_err(device_err)?
            .dyn_into()
            .map_err(device_err)?;

        *self.stream.borrow_mut() = Some(stream.clone());
        self.facing.set(facing);
        Ok(stream)
    }

    /// Releases all tracks of the held stream. Idempotent; safe to call
    /// with no stream active.
    pub fn stop(&self) {
        if let Some(stream) = self.stream.borrow_mut().take() {
            for track in stream.get_tracks().iter() {
                if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
                    track.stop();
                }
            }
        }
    }

    /// Stops the current stream and restarts with the opposite camera.
    /// On restart failure no stream is held and the error surfaces.
    pub async fn toggle(&self) -> Result<MediaStream> {
        self.start(self.facing.get().flipped()).await
    }

    /// Draws the current video frame into an off-screen canvas at the
    /// fixed target resolution and encodes it as a JPEG data URL.
    /// Requires an active stream.
    pub fn capture_frame(&self, video: &HtmlVideoElement) -> Result<CapturedImage> {
        if !self.is_active() {
            return Err(Error::DeviceUnavailable("no active camera stream".to_string()));
        }

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| Error::DeviceUnavailable("document not available".to_string()))?;

        let canvas: HtmlCanvasElement = document
            .create_element("canvas")
            .map_err(device_err)?
            .dyn_into()
            .map_err(|_| Error::DeviceUnavailable("canvas element expected".to_string()))?;
        canvas.set_width(CAPTURE_WIDTH);
        canvas.set_height(CAPTURE_HEIGHT);

        let context: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .map_err(device_err)?
            .ok_or_else(|| Error::DeviceUnavailable("2d context not available".to_string()))?
            .dyn_into()
            .map_err(|_| Error::DeviceUnavailable("2d context expected".to_string()))?;

        context
            .draw_image_with_html_video_element_and_dw_and_dh(
                video,
                0.0,
                0.0,
                CAPTURE_WIDTH as f64,
                CAPTURE_HEIGHT as f64,
            )
            .map_err(device_err)?;

        let data_url = canvas.to_data_url_with_type(CAPTURE_MIME).map_err(device_err)?;
        Ok(CapturedImage::new(data_url))
    }
}

fn device_err(e: JsValue) -> Error {
    Error::DeviceUnavailable(format!("{:?}", e))
}
