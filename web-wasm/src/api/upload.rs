//! Upload submission
//!
//! Packages exactly one image source into a multipart payload under
//! field `file` and submits it to the scan endpoint. One attempt per
//! invocation, no retry.

use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, File, FormData};

use shelfscan_common::{
    decode_data_url, CapturedImage, DecodedImage, Error, Result, UploadResponse,
};

use crate::api::client;
use crate::config;

/// One image source chosen for a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource<F, C> {
    Selected(F),
    Captured(C),
}

/// Selection policy for a submission: an explicit file wins over a
/// captured frame; neither present fails before any request is issued.
pub fn resolve_source<F, C>(file: Option<F>, captured: Option<C>) -> Result<ImageSource<F, C>> {
    match (file, captured) {
        (Some(file), _) => Ok(ImageSource::Selected(file)),
        (None, Some(captured)) => Ok(ImageSource::Captured(captured)),
        (None, None) => Err(Error::NoImageSource),
    }
}

/// File name given to captured frames in the multipart body.
pub fn capture_file_name(mime: &str) -> String {
    let ext = match mime {
        "image/png" => "png",
        "image/webp" => "webp",
        _ => "jpg",
    };
    format!("capture.{}", ext)
}

/// Submits the chosen image source and returns the extracted titles.
pub async fn submit(file: Option<File>, captured: Option<CapturedImage>) -> Result<UploadResponse> {
    let source = resolve_source(file.as_ref(), captured.as_ref())?;
    let form = build_form(source)?;

    let json = client::post_multipart(&config::upload_url(), &form)
        .await
        .map_err(Error::UploadFailed)?;

    serde_wasm_bindgen::from_value(json).map_err(|e| Error::UploadFailed(e.to_string()))
}

fn build_form(source: ImageSource<&File, &CapturedImage>) -> Result<FormData> {
    let form = FormData::new().map_err(upload_err)?;

    match source {
        ImageSource::Selected(file) => {
            // a user-chosen file goes in verbatim, keeping its own name
            form.append_with_blob("file", file).map_err(upload_err)?;
        }
        ImageSource::Captured(image) => {
            let decoded = decode_data_url(&image.data_url)?;
            let blob = blob_from_image(&decoded)?;
            form.append_with_blob_and_filename("file", &blob, &capture_file_name(&decoded.mime))
                .map_err(upload_err)?;
        }
    }

    Ok(form)
}

fn blob_from_image(image: &DecodedImage) -> Result<Blob> {
    let bytes = js_sys::Uint8Array::from(image.bytes.as_slice());
    let parts = js_sys::Array::new();
    parts.push(&bytes);

    let mut options = BlobPropertyBag::new();
    options.type_(&image.mime);

    Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(upload_err)
}

fn upload_err(e: JsValue) -> Error {
    Error::UploadFailed(format!("{:?}", e))
}


#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_build_form_tags_captured_blob_with_mime() {
        let image = CapturedImage::new("data:image/png;base64,iVBORw0KGgo=");
        let form = build_form(ImageSource::Captured(&image)).expect("form build failed");

        let blob: Blob = form.get("file").dyn_into().expect("blob entry expected");
        assert_eq!(blob.type_(), "image/png");
        assert_eq!(blob.size(), 8.0);
    }
}
