//! Navigation bar component

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::use_store;

#[component]
pub fn NavBar() -> impl IntoView {
    let username = use_store().display_name();

    view! {
        <nav class="navbar">
            <div class="navbar-container">
                <span class="navbar-logo">
                    <A href="/">
                        <img src="/images/logo.png" alt="Only Menu Logo" />
                    </A>
                </span>
                <div class="navbar-links">
                    <A href="/upload">"Upload Menu"</A>
                    <A href="/rewards">"View Reward"</A>
                    <A href="/view">"Search Menu"</A>
                </div>
                <div class="navbar-user">
                    <span class="navbar-username">{move || username.get()}</span>
                    <img src="/images/profile.png" alt="Profile" class="navbar-profile-icon" />
                </div>
            </div>
        </nav>
    }
}
