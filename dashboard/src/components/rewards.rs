//! Rewards component: one card per uploaded menu

use leptos::prelude::*;
use shared::rewards::{points_for, total_points};

use crate::state::use_store;

#[component]
pub fn Rewards() -> impl IntoView {
    let menus = use_store().menus();

    view! {
        <div class="rewards-container">
            <h2>"My Rewards"</h2>
            {move || menus.with(|list| {
                if list.is_empty() {
                    return view! { <p>"No rewards available yet."</p> }.into_any();
                }

                let cards = list.iter().map(|menu| {
                    let points = points_for(menu);
                    view! {
                        <div class="reward-card">
                            <h3>{menu.name.clone()}</h3>
                            <p>"Uploaded File: "{menu.file.clone()}</p>
                            <p><strong>"Reward Points:"</strong>" "{points}</p>
                            <button class="redeem-button">"Redeem Now"</button>
                        </div>
                    }
                }).collect::<Vec<_>>();

                view! {
                    <p class="rewards-total">"Total Points: "{total_points(list)}</p>
                    {cards}
                }.into_any()
            })}
        </div>
    }
}
