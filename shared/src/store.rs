//! ==============================================================================
//! store.rs - owner of the application state
//! ==============================================================================
//!
//! purpose:
//!     holds the state tree, applies events through the reducers and tells
//!     subscribers about every new state.
//!
//! design:
//!     - constructed by the composition root and injected, not global
//!     - dispatch is synchronous and total: it always ends in a new state
//!     - listeners run in subscription order after the state is replaced
//!     - listeners are Send so the store can sit behind Arc<Mutex<_>>
//!
//! ==============================================================================

use std::fmt;

use crate::event::Event;
use crate::model::AppState;
use crate::reducer::reduce;

type Listener = Box<dyn FnMut(&AppState) + Send>;

/// handle returned by `Store::subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

#[derive(Default)]
pub struct Store {
    state: AppState,
    listeners: Vec<(Subscription, Listener)>,
    next_id: u64,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// read-only view of the current tree
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// owned copy of the current tree
    pub fn snapshot(&self) -> AppState {
        self.state.clone()
    }

    /// run every reducer on `event`, then notify subscribers
    pub fn dispatch(&mut self, event: Event) {
        log::debug!("dispatch {}", event.kind());

        let current = std::mem::take(&mut self.state);
        self.state = reduce(current, &event);

        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.state);
        }
    }

    pub fn subscribe<F>(&mut self, listener: F) -> Subscription
    where
        F: FnMut(&AppState) + Send + 'static,
    {
        let id = Subscription(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// returns false if the subscription was already gone
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(id, _)| *id != subscription);
        self.listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MenuRecord;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_dispatch_updates_state() {
        let mut store = Store::default();
        store.dispatch(Event::MenuUploaded(MenuRecord::new("Lunch", "lunch.pdf")));

        assert_eq!(store.state().menu.menus.len(), 1);
        assert_eq!(store.state().user.username, None);
    }

    #[test]
    fn test_subscribers_see_new_state() {
        let mut store = Store::default();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = seen.clone();
        store.subscribe(move |state| {
            sink.lock().unwrap().push(state.menu.menus.len());
        });

        store.dispatch(Event::MenuUploaded(MenuRecord::new("a", "a.pdf")));
        store.dispatch(Event::MenuUploaded(MenuRecord::new("b", "b.pdf")));

        assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_subscribers_notified_in_order() {
        let mut store = Store::default();
        let order = Arc::new(Mutex::new(Vec::new()));

        for tag in ["first", "second"] {
            let sink = order.clone();
            store.subscribe(move |_| sink.lock().unwrap().push(tag));
        }

        store.dispatch(Event::Unrecognized);
        assert_eq!(*order.lock().unwrap(), vec!["first", "second"]);
    }

    #[test]
    fn test_unrecognized_still_notifies() {
        let mut store = Store::default();
        let calls = Arc::new(Mutex::new(0));

        let sink = calls.clone();
        store.subscribe(move |_| *sink.lock().unwrap() += 1);
        store.dispatch(Event::Unrecognized);

        assert_eq!(*calls.lock().unwrap(), 1);
        assert_eq!(store.snapshot(), AppState::default());
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let mut store = Store::default();
        let calls = Arc::new(Mutex::new(0));

        let sink = calls.clone();
        let sub = store.subscribe(move |_| *sink.lock().unwrap() += 1);

        store.dispatch(Event::Unrecognized);
        assert!(store.unsubscribe(sub));
        assert!(!store.unsubscribe(sub));
        store.dispatch(Event::Unrecognized);

        assert_eq!(*calls.lock().unwrap(), 1);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn test_debug_shows_subscriber_count() {
        let mut store = Store::default();
        store.subscribe(|_| {});
        store.subscribe(|_| {});

        assert!(format!("{:?}", store).contains("subscribers: 2"));
    }
}
