//! Static footer pages

use leptos::prelude::*;
use leptos_router::components::A;
use shared::route::ROUTES;

#[component]
pub fn Sitemap() -> impl IntoView {
    view! {
        <div class="sitemap">
            <h1>"Site Map"</h1>
            <ul>
                {ROUTES.iter().map(|&(path, route)| view! {
                    <li><A href=path>{route.title()}</A></li>
                }).collect::<Vec<_>>()}
            </ul>
        </div>
    }
}

#[component]
pub fn ContactUs() -> impl IntoView {
    view! {
        <div class="contact-us">
            <h1>"Contact Us"</h1>
            <p>"Questions about uploads or rewards? Write to "
                <a href="mailto:hello@onlymenu.example">"hello@onlymenu.example"</a>"."
            </p>
        </div>
    }
}

#[component]
pub fn GetQuote() -> impl IntoView {
    view! {
        <div class="get-quote">
            <h1>"Get a Quote"</h1>
            <p>"Want your restaurant's menus listed? Tell us how many locations you have and we will get back to you."</p>
            <A href="/contact-us">"Contact Us"</A>
        </div>
    }
}

#[component]
pub fn Faq() -> impl IntoView {
    view! {
        <div class="faq">
            <h1>"Frequently Asked Questions"</h1>
            <div class="faq-item">
                <h2>"How do I upload a menu?"</h2>
                <p>"You can upload a menu by clicking the \"Upload Menu\" button on the homepage."</p>
            </div>
            <div class="faq-item">
                <h2>"How are rewards calculated?"</h2>
                <p>"Rewards are based on the quality and uniqueness of the menus you upload."</p>
            </div>
        </div>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h2>"404 - Page Not Found"</h2>
            <p>"The page you are looking for does not exist."</p>
        </div>
    }
}
