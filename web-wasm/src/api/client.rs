//! HTTP plumbing for the external scan API
//!
//! Thin fetch wrappers shared by the upload and recommendation calls.
//! Errors come back as plain strings for the callers to wrap in the
//! domain error kinds.

use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestInit, RequestMode, Response};

/// POSTs a JSON body and returns the decoded JSON response value.
pub async fn post_json(url: &str, body: &impl Serialize) -> Result<JsValue, String> {
    let payload = serde_json::to_string(body).map_err(|e| e.to_string())?;

    let mut opts = RequestInit::new();
    opts.method("POST");
    opts.mode(RequestMode::Cors);
    opts.body(Some(&JsValue::from_str(&payload)));

    let request = Request::new_with_str_and_init(url, &opts).map_err(fmt_js)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(fmt_js)?;

    fetch_json(request).await
}

/// POSTs a multipart form. No Content-Type header is set; the browser
/// supplies the multipart boundary.
pub async fn post_multipart(url: &str, form: &FormData) -> Result<JsValue, String> {
    let mut opts = RequestInit::new();
    opts.method("POST");
    opts.mode(RequestMode::Cors);
    opts.body(Some(form.as_ref()));

    let request = Request::new_with_str_and_init(url, &opts).map_err(fmt_js)?;
    fetch_json(request).await
}

async fn fetch_json(request: Request) -> Result<JsValue, String> {
    let window = web_sys::window().ok_or_else(|| "window not available".to_string())?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(fmt_js)?;
    let resp: Response = resp_value.dyn_into().map_err(fmt_js)?;

    if !resp.ok() {
        return Err(format!("API error: {}", resp.status()));
    }

    JsFuture::from(resp.json().map_err(fmt_js)?).await.map_err(fmt_js)
}

fn fmt_js(e: JsValue) -> String {
    format!("{:?}", e)
}
