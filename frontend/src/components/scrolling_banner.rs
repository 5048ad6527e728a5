use yew::prelude::*;

use crate::content::agency::BANNER_ITEMS;

fn banner_set(hidden: bool) -> Html {
    html! {
        <div class="banner-set" aria-hidden={hidden.to_string()}>
            { for BANNER_ITEMS.iter().map(|item| html! {
                <div class="banner-item">
                    <span class="banner-text">{ *item }</span>
                    <span class="banner-bullet">{"•"}</span>
                </div>
            }) }
        </div>
    }
}

/// Endless right-to-left ticker of service names. The track holds two
/// identical sets and slides by half its width per loop.
#[function_component(ScrollingBanner)]
pub fn scrolling_banner() -> Html {
    html! {
        <section class="scrolling-banner">
            <style>
                {r#"
                .scrolling-banner {
                    overflow: hidden;
                    padding: 2rem 0;
                    border-top: 1px solid rgba(0, 0, 0, 0.1);
                    border-bottom: 1px solid rgba(0, 0, 0, 0.1);
                }
                .banner-track {
                    display: flex;
                    width: max-content;
                    animation: scroll-left 40s linear infinite;
                }
                .banner-set, .banner-item {
                    display: flex;
                    align-items: center;
                    flex-shrink: 0;
                }
                .banner-item {
                    padding: 0 1rem;
                }
                .banner-text, .banner-bullet {
                    font-size: clamp(3rem, 6vw, 4.5rem);
                    font-weight: 900;
                    letter-spacing: -0.025em;
                    white-space: nowrap;
                }
                .banner-bullet {
                    color: var(--brand-primary);
                    margin: 0 1rem;
                }
                "#}
            </style>
            <div class="banner-track">
                { banner_set(false) }
                { banner_set(true) }
            </div>
        </section>
    }
}
