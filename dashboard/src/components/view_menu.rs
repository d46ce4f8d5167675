//! Explore page: local search plus the backend's menu list

use leptos::prelude::*;
use shared::RemoteMenu;

use super::SearchMenu;
use crate::api;
use crate::state::use_config;

#[component]
pub fn ViewMenu() -> impl IntoView {
    view! {
        <div class="view-menu">
            <h2>"Explore Menus"</h2>
            <img src="/images/explore-menus.png" alt="Explore Menus" class="menu-image" />
            <p>
                "Search and explore menus from various restaurants. "
                "Find what you crave and discover new dining experiences."
            </p>
        </div>
        <SearchMenu />
        <RemoteMenus />
    }
}

/// lists what `GET menus` returns; renders nothing without a backend
#[component]
fn RemoteMenus() -> impl IntoView {
    let config = use_config();
    let (menus, set_menus) = signal(Vec::<RemoteMenu>::new());

    // fetch on mount
    Effect::new(move || {
        if !config.use_backend {
            return;
        }
        let config = config.clone();
        leptos::task::spawn_local(async move {
            match api::get_menus(&config).await {
                Ok(list) => set_menus.set(list),
                Err(e) => log::warn!("could not fetch menus: {}", e),
            }
        });
    });

    view! {
        <Show when=move || menus.with(|list| !list.is_empty())>
            <div class="container">
                <h2>"Available Menus"</h2>
                <ul>
                    {move || menus.get().into_iter().map(|menu| view! {
                        <li>{menu.name}" - "{menu.description.unwrap_or_default()}</li>
                    }).collect::<Vec<_>>()}
                </ul>
            </div>
        </Show>
    }
}
