//! ==============================================================================
//! browser.rs - window and local storage access
//! ==============================================================================
//!
//! the only place that touches window.localStorage and window.alert.
//! local storage holds nothing but the last logged in username; the
//! store stays the source of truth while the page is open.
//!
//! ==============================================================================

use web_sys::Storage;

use crate::error::{js_message, StorageError};

fn local_storage() -> Result<Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::NoWindow)?;
    window
        .local_storage()
        .map_err(|e| StorageError::Js(js_message(&e)))?
        .ok_or(StorageError::Unavailable)
}

/// stored username, empty values count as absent
pub fn load_username(key: &str) -> Result<Option<String>, StorageError> {
    let value = local_storage()?
        .get_item(key)
        .map_err(|e| StorageError::Js(js_message(&e)))?;
    Ok(value.filter(|name| !name.is_empty()))
}

pub fn save_username(key: &str, username: &str) -> Result<(), StorageError> {
    local_storage()?
        .set_item(key, username)
        .map_err(|e| StorageError::Js(js_message(&e)))
}

/// blocking user notification
pub fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        log::warn!("alert without window: {}", message);
        return;
    };
    if let Err(e) = window.alert_with_message(message) {
        log::warn!("alert failed: {}", js_message(&e));
    }
}
