//! ==============================================================================
//! api.rs - API client for the menu backend
//! ==============================================================================
//!
//! the backend is not part of this repository. both calls are only made
//! when Config::use_backend is set, and their failures are logged, never
//! shown to the user and never touch the store.
//!
//! endpoints (relative to Config::api_base):
//!     POST upload   multipart, field "menuImage"
//!     GET  menus    json array of menu objects
//!
//! ==============================================================================

use gloo_net::http::Request;
use shared::{Config, RemoteMenu};
use web_sys::{File, FormData};

use crate::error::{js_message, ClientError};

pub const UPLOAD_FIELD: &str = "menuImage";

// ==============================================================================
// API functions
// ==============================================================================

/// Post a menu file
pub async fn upload_menu(config: &Config, file: &File) -> Result<(), ClientError> {
    let form = FormData::new().map_err(|e| ClientError::Js(js_message(&e)))?;
    form.append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())
        .map_err(|e| ClientError::Js(js_message(&e)))?;

    let response = Request::post(&config.endpoint("upload"))
        .body(form)?
        .send()
        .await?;

    if !response.ok() {
        return Err(ClientError::Status(response.status()));
    }
    Ok(())
}

/// List menus known to the backend
pub async fn get_menus(config: &Config) -> Result<Vec<RemoteMenu>, ClientError> {
    let response = Request::get(&config.endpoint("menus")).send().await?;

    if !response.ok() {
        return Err(ClientError::Status(response.status()));
    }
    Ok(response.json::<Vec<RemoteMenu>>().await?)
}

/// fire-and-forget upload; the caller has already updated the store
pub fn sync_upload(config: Config, file: File) {
    leptos::task::spawn_local(async move {
        match upload_menu(&config, &file).await {
            Ok(()) => log::info!("uploaded {} to backend", file.name()),
            Err(e) => log::warn!("backend upload of {} failed: {}", file.name(), e),
        }
    });
}
