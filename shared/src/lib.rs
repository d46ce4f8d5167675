//! ==============================================================================
//! lib.rs - shared core for the only menu front-end
//! ==============================================================================
//!
//! purpose:
//!     everything the web front-end needs that does not touch the browser:
//!     the state tree, the event type, the reducers, the store container,
//!     the form state machines, the search filter, the route table and
//!     the rewards rule. compiles and tests on the host target.
//!
//! relationships:
//!     - used by: dashboard (all state, routing and form logic)
//!     - wire types (RemoteMenu) describe the stub api collaborator
//!
//! data flow:
//!     view -> Event -> Store::dispatch -> reducers -> new AppState
//!          -> subscribers notified -> views re-render
//!
//! ==============================================================================

pub mod config;
pub mod event;
pub mod form;
pub mod model;
pub mod reducer;
pub mod rewards;
pub mod route;
pub mod search;
pub mod store;

pub use config::Config;
pub use event::Event;
pub use form::{FormError, LoginForm, UploadForm, UploadPhase};
pub use model::{AppState, MenuRecord, MenuState, RemoteMenu, UserState};
pub use route::Route;
pub use store::{Store, Subscription};
