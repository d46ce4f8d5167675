//! Footer component

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-container">
                <div class="footer-links">
                    <A href="/sitemap">"Site Map"</A>
                    <A href="/contact-us">"Contact Us"</A>
                    <A href="/get-quote">"Get a Quote"</A>
                    <A href="/faq">"FAQ"</A>
                </div>
                <p class="footer-copy">"© 2024 Only Menu. All rights reserved."</p>
            </div>
        </footer>
    }
}
