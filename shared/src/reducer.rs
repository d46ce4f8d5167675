//! ==============================================================================
//! reducer.rs - pure state transitions
//! ==============================================================================
//!
//! one reducer per slice, each total: events a slice does not own return
//! the slice unchanged. `reduce` composes them by key, the same way the
//! tree is composed.
//!
//! ==============================================================================

use crate::event::Event;
use crate::model::{AppState, MenuState, UserState};

/// user slice: only a successful login changes it
pub fn user_reducer(state: UserState, event: &Event) -> UserState {
    match event {
        Event::LoginSucceeded { username } => UserState {
            username: Some(username.clone()),
        },
        _ => state,
    }
}

/// menu slice: append only, no dedup, no validation
pub fn menu_reducer(mut state: MenuState, event: &Event) -> MenuState {
    match event {
        Event::MenuUploaded(record) => {
            state.menus.push(record.clone());
            state
        }
        _ => state,
    }
}

/// root reducer
pub fn reduce(state: AppState, event: &Event) -> AppState {
    AppState {
        user: user_reducer(state.user, event),
        menu: menu_reducer(state.menu, event),
    }
}

// ==============================================================================
// tests
// ==============================================================================
