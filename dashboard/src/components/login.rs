//! Login component
//!
//! there is no auth backend: a submitted username is written to the store
//! and to local storage, then the user is sent home.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use shared::{Event, LoginForm};

use crate::browser;
use crate::state::{use_config, use_store};

#[component]
pub fn Login() -> impl IntoView {
    let store = use_store();
    let config = use_config();
    let navigate = use_navigate();
    let (form, set_form) = signal(LoginForm::default());

    let login = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let mut current = form.get_untracked();
        match current.submit() {
            Ok(username) => {
                if let Err(e) = browser::save_username(&config.username_key, &username) {
                    log::warn!("could not persist username: {}", e);
                }
                store.dispatch(Event::LoginSucceeded { username });
                set_form.set(current);
                navigate("/", Default::default());
            }
            Err(e) => browser::alert(&e.to_string()),
        }
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h2>"Login"</h2>
                <form on:submit=login>
                    <input
                        type="text"
                        name="username"
                        placeholder="Username"
                        required
                        prop:value=move || form.with(|f| f.username.clone())
                        on:input=move |ev| set_form.update(|f| f.username = event_target_value(&ev))
                    />
                    <input
                        type="password"
                        name="password"
                        placeholder="Password"
                        required
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| set_form.update(|f| f.password = event_target_value(&ev))
                    />
                    <button type="submit">"Login"</button>
                </form>
                // not wired to any provider
                <div class="sso-options">
                    <button type="button">"Sign in with Google"</button>
                    <button type="button">"Sign in with Facebook"</button>
                </div>
            </div>
        </div>
    }
}
