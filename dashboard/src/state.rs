//! ==============================================================================
//! state.rs - store bridge into the reactive graph
//! ==============================================================================
//!
//! the Store owns the state; a single subscriber mirrors every new tree
//! into a leptos signal so views re-render. views read through the signal
//! and write only through dispatch.
//!
//! ==============================================================================

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use leptos::prelude::*;
use shared::{AppState, Config, Event, MenuRecord, Store};

use crate::browser;

#[derive(Clone)]
pub struct AppStore {
    store: Arc<Mutex<Store>>,
    state: ReadSignal<AppState>,
}

impl AppStore {
    pub fn new(store: Store) -> Self {
        let (state, set_state) = signal(store.snapshot());
        let store = Arc::new(Mutex::new(store));

        lock(&store).subscribe(move |next| set_state.set(next.clone()));

        Self { store, state }
    }

    pub fn dispatch(&self, event: Event) {
        lock(&self.store).dispatch(event);
    }

    pub fn menus(&self) -> Memo<Vec<MenuRecord>> {
        let state = self.state;
        Memo::new(move |_| state.with(|s| s.menu.menus.clone()))
    }

    pub fn display_name(&self) -> Memo<String> {
        let state = self.state;
        Memo::new(move |_| state.with(|s| s.user.display_name().to_string()))
    }

    /// replay a stored login so the navbar shows it after a reload
    pub fn restore_session(&self, config: &Config) {
        match browser::load_username(&config.username_key) {
            Ok(Some(username)) => {
                log::info!("restored session for {}", username);
                self.dispatch(Event::LoginSucceeded { username });
            }
            Ok(None) => {}
            Err(e) => log::warn!("could not read stored username: {}", e),
        }
    }
}

// dispatch never panics while holding the lock, but a listener might
fn lock(store: &Mutex<Store>) -> MutexGuard<'_, Store> {
    store.lock().unwrap_or_else(PoisonError::into_inner)
}

pub fn use_store() -> AppStore {
    expect_context::<AppStore>()
}

pub fn use_config() -> Config {
    expect_context::<Config>()
}
