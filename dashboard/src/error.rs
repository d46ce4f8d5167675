//! Error types for the browser-facing side of the app.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// failure talking to the menu api
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] gloo_net::Error),
    #[error("server answered {0}")]
    Status(u16),
    #[error("could not build request: {0}")]
    Js(String),
}

/// failure reading or writing local storage
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("no window object")]
    NoWindow,
    #[error("local storage is not available")]
    Unavailable,
    #[error("local storage error: {0}")]
    Js(String),
}

/// best-effort text for a thrown js value
pub fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
