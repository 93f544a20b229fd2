//! Multipart POST to the inference endpoint.

use anomaly_core::inference::{FIELD_CLASS, FIELD_RGB, FIELD_TIFF};
use anomaly_core::{InferenceError, InferenceResults};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

fn network(e: JsValue) -> InferenceError {
    InferenceError::Network(format!("{:?}", e))
}

pub async fn post_inference(
    endpoint: &str,
    rgb: &web::File,
    tiff: &web::File,
    class_name: &str,
) -> Result<InferenceResults, InferenceError> {
    let form = web::FormData::new().map_err(network)?;
    form.append_with_blob_and_filename(FIELD_RGB, rgb, &rgb.name())
        .map_err(network)?;
    form.append_with_blob_and_filename(FIELD_TIFF, tiff, &tiff.name())
        .map_err(network)?;
    form.append_with_str(FIELD_CLASS, class_name).map_err(network)?;

    let init = web::RequestInit::new();
    init.set_method("POST");
    init.set_body(&JsValue::from(form));
    let request = web::Request::new_with_str_and_init(endpoint, &init).map_err(network)?;

    let window = web::window().ok_or_else(|| InferenceError::Network("no window".into()))?;
    let response: web::Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(network)?
        .dyn_into()
        .map_err(network)?;

    if !response.ok() {
        log::warn!("[infer] {} {}", response.status(), response.status_text());
        return Err(InferenceError::Http(response.status_text()));
    }

    let body = JsFuture::from(response.text().map_err(network)?)
        .await
        .map_err(network)?
        .as_string()
        .ok_or_else(|| InferenceError::Malformed("body is not text".into()))?;
    InferenceResults::from_json(&body)
}
