//! ==============================================================================
//! lib.rs - Only Menu web front-end
//! ==============================================================================
//!
//! purpose:
//!     leptos wasm app for uploading restaurant menus, searching them and
//!     viewing the reward points they earn.
//!
//! architecture:
//!     - leptos csr (client-side rendering)
//!     - compiled to wasm, runs in browser
//!     - state lives in shared::Store, injected through context
//!     - leptos_router drives history, shared::Route picks the page
//!     - optional calls to the menu api via fetch
//!
//! ==============================================================================

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::Router;
use leptos_router::hooks::use_location;
use shared::{Config, Route, Store};
use wasm_bindgen::prelude::*;

mod api;
mod browser;
mod components;
mod error;
mod state;

use components::{
    ContactUs, Faq, Footer, GetQuote, Home, Login, NavBar, NotFound, Rewards, Sitemap,
    UploadMenu, ViewMenu,
};
use state::AppStore;

// ==============================================================================
// main entry point
// ==============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let config = Config::from_build_env();
    _ = console_log::init_with_level(config.log_level);
    log::info!("only menu starting (api {}, backend {})", config.api_base, config.use_backend);

    mount_to_body(move || view! { <App config=config /> });
}

// ==============================================================================
// app component
// ==============================================================================

#[component]
pub fn App(config: Config) -> impl IntoView {
    provide_meta_context();

    let store = AppStore::new(Store::default());
    store.restore_session(&config);

    provide_context(store);
    provide_context(config);

    view! {
        <Router>
            <div class="App">
                <NavBar />
                <main>
                    <Page />
                </main>
                <Footer />
            </div>
        </Router>
    }
}

/// mounts exactly one page for the current path
#[component]
fn Page() -> impl IntoView {
    let location = use_location();
    let route = Memo::new(move |_| Route::resolve(&location.pathname.get()));

    view! {
        <Title text=move || format!("{} | Only Menu", route.get().title()) />
        {move || match route.get() {
            Route::Home => view! { <Home /> }.into_any(),
            Route::View => view! { <ViewMenu /> }.into_any(),
            Route::Upload => view! { <UploadMenu /> }.into_any(),
            Route::Rewards => view! { <Rewards /> }.into_any(),
            Route::Login => view! { <Login /> }.into_any(),
            Route::Sitemap => view! { <Sitemap /> }.into_any(),
            Route::ContactUs => view! { <ContactUs /> }.into_any(),
            Route::GetQuote => view! { <GetQuote /> }.into_any(),
            Route::Faq => view! { <Faq /> }.into_any(),
            Route::NotFound => view! { <NotFound /> }.into_any(),
        }}
    }
}
