use yew::prelude::*;

use crate::content::agency::PARTNER_LOGOS;

fn logo_set(hidden: bool) -> Html {
    let last = PARTNER_LOGOS.len().saturating_sub(1);
    html! {
        <div class="logo-set" aria-hidden={hidden.to_string()}>
            { for PARTNER_LOGOS.iter().enumerate().map(|(i, name)| html! {
                <div class="logo-item">
                    <span class="logo-name">{ *name }</span>
                    if i < last {
                        <div class="logo-divider"></div>
                    }
                </div>
            }) }
        </div>
    }
}

#[function_component(LogoMarquee)]
pub fn logo_marquee() -> Html {
    html! {
        <section class="logo-marquee">
            <style>
                {r#"
                .logo-marquee {
                    overflow: hidden;
                    padding: 2rem 0;
                    border-top: 1px solid rgba(0, 0, 0, 0.1);
                    border-bottom: 1px solid rgba(0, 0, 0, 0.1);
                }
                .logo-track {
                    display: flex;
                    width: max-content;
                    animation: scroll-left 30s linear infinite;
                }
                .logo-set, .logo-item {
                    display: flex;
                    align-items: center;
                    flex-shrink: 0;
                }
                .logo-name {
                    padding: 0 4rem;
                    font-size: 1.875rem;
                    font-weight: 600;
                    letter-spacing: 0.025em;
                    color: rgba(0, 0, 0, 0.4);
                    white-space: nowrap;
                }
                .logo-divider {
                    width: 1px;
                    height: 3rem;
                    background: rgba(0, 0, 0, 0.1);
                }
                "#}
            </style>
            <div class="logo-track">
                { logo_set(false) }
                { logo_set(true) }
            </div>
        </section>
    }
}
