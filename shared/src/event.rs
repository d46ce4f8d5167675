//! ==============================================================================
//! event.rs - state mutation intents
//! ==============================================================================
//!
//! the single canonical event type. every reducer receives every event and
//! ignores the ones it does not own.
//!
//! wire form (for logging and replay):
//!     {"type": "UPLOAD_MENU", "payload": {"name": "...", "file": "..."}}
//!     {"type": "LOGIN_SUCCESS", "payload": {"username": "..."}}
//!     {"type": "<anything else>", "payload": ...}  -> Event::Unrecognized
//!
//! ==============================================================================

use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

use crate::model::MenuRecord;

pub const UPLOAD_MENU: &str = "UPLOAD_MENU";
pub const LOGIN_SUCCESS: &str = "LOGIN_SUCCESS";
pub const UNRECOGNIZED: &str = "UNRECOGNIZED";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", try_from = "WireEvent")]
pub enum Event {
    /// append a record to the menu slice
    #[serde(rename = "UPLOAD_MENU")]
    MenuUploaded(MenuRecord),
    /// replace the username in the user slice
    #[serde(rename = "LOGIN_SUCCESS")]
    LoginSucceeded { username: String },
    /// any tag this build does not know; identity for every reducer
    #[serde(rename = "UNRECOGNIZED")]
    Unrecognized,
}

impl Event {
    pub fn kind(&self) -> &'static str {
        match self {
            Event::MenuUploaded(_) => UPLOAD_MENU,
            Event::LoginSucceeded { .. } => LOGIN_SUCCESS,
            Event::Unrecognized => UNRECOGNIZED,
        }
    }
}

// ==============================================================================
// decoding
// ==============================================================================

/// tags this build can apply
#[derive(Deserialize)]
#[serde(tag = "type", content = "payload")]
enum KnownEvent {
    #[serde(rename = "UPLOAD_MENU")]
    MenuUploaded(MenuRecord),
    #[serde(rename = "LOGIN_SUCCESS")]
    LoginSucceeded { username: String },
}

/// anything shaped like an event; unknown payloads are skipped
#[derive(Deserialize)]
#[serde(untagged)]
enum WireEvent {
    Known(KnownEvent),
    Other {
        #[serde(rename = "type")]
        kind: String,
        #[serde(default)]
        #[allow(dead_code)]
        payload: Option<IgnoredAny>,
    },
}

impl TryFrom<WireEvent> for Event {
    type Error = String;

    fn try_from(wire: WireEvent) -> Result<Self, Self::Error> {
        match wire {
            WireEvent::Known(KnownEvent::MenuUploaded(record)) => Ok(Event::MenuUploaded(record)),
            WireEvent::Known(KnownEvent::LoginSucceeded { username }) => {
                Ok(Event::LoginSucceeded { username })
            }
            // a known tag only lands here when its payload is malformed
            WireEvent::Other { kind, .. } if kind == UPLOAD_MENU || kind == LOGIN_SUCCESS => {
                Err(format!("malformed {} payload", kind))
            }
            WireEvent::Other { .. } => Ok(Event::Unrecognized),
        }
    }
}

// ==============================================================================
// tests
// ==============================================================================
