//! Landing page with one flip card per feature

use leptos::prelude::*;
use leptos_router::components::A;

const CARDS: &[(&str, &str, &str, &str)] = &[
    ("/view", "/images/view-menu.png", "View/Search Menu", "Explore restaurant menus."),
    ("/upload", "/images/upload-menu.png", "Upload Menu", "Upload a menu and earn rewards."),
    ("/rewards", "/images/view-rewards.png", "View Rewards", "See your earned rewards."),
];

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="card-container">
            {CARDS.iter().map(|&(href, image, title, blurb)| view! {
                <A href=href>
                    <div class="card">
                        <div class="card-inner">
                            <div class="card-front">
                                <img src=image alt=title class="card-image" />
                                <p>{title}</p>
                            </div>
                            <div class="card-back">{blurb}</div>
                        </div>
                    </div>
                </A>
            }).collect::<Vec<_>>()}
        </div>
    }
}
