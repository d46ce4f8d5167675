//! Menu search component

use leptos::prelude::*;
use shared::search::filter_menus;

use crate::state::use_store;

#[component]
pub fn SearchMenu() -> impl IntoView {
    let menus = use_store().menus();
    let (query, set_query) = signal(String::new());

    // recomputed on every keystroke
    let results = move || {
        let query = query.get();
        menus.with(|list| filter_menus(list, &query).cloned().collect::<Vec<_>>())
    };

    view! {
        <div class="search-container">
            <h2>"Search Menus"</h2>
            <input
                type="text"
                placeholder="Search for a menu..."
                prop:value=move || query.get()
                on:input=move |ev| set_query.set(event_target_value(&ev))
            />
            <div class="menu-results">
                {move || {
                    let found = results();
                    if found.is_empty() {
                        view! { <p>"No menus found."</p> }.into_any()
                    } else {
                        found.into_iter().map(|menu| view! {
                            <div class="menu-item">
                                <h3>{menu.name}</h3>
                                <p>"Uploaded File: "{menu.file}</p>
                            </div>
                        }).collect::<Vec<_>>().into_any()
                    }
                }}
            </div>
        </div>
    }
}
