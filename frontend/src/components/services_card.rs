use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icons::{Glyph, Icon};
use crate::content::agency::SERVICE_CARD_ITEMS;
use crate::Route;

#[function_component(ServicesCard)]
pub fn services_card() -> Html {
    let last = SERVICE_CARD_ITEMS.len().saturating_sub(1);

    html! {
        <section class="services-card-section">
            <style>
                {r#"
                .services-card-section {
                    padding: 3rem 2rem;
                }
                .services-card {
                    max-width: 1400px;
                    margin: 0 auto;
                    background: var(--bg-dark);
                    border-radius: 16px;
                    padding: 3.5rem;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }
                .services-card-image {
                    aspect-ratio: 4 / 5;
                    overflow: hidden;
                    border-radius: 12px;
                }
                .services-card-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.7s ease;
                }
                .services-card-image:hover img {
                    transform: scale(1.05);
                }
                .services-lead {
                    padding: 1.5rem 0;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                }
                .services-lead h3 {
                    color: #fff;
                    font-size: clamp(1.875rem, 3.5vw, 3rem);
                    font-weight: 700;
                    margin: 0 0 1rem;
                }
                .services-lead p, .services-foot p {
                    color: rgba(255, 255, 255, 0.65);
                    line-height: 1.6;
                    max-width: 24rem;
                }
                .services-item {
                    padding: 1rem 0;
                    font-size: clamp(1.5rem, 3vw, 2.25rem);
                    font-weight: 700;
                    color: rgba(255, 255, 255, 0.3);
                    transition: all 0.3s ease;
                }
                .services-item:hover {
                    color: rgba(255, 255, 255, 0.6);
                    transform: translateX(8px);
                }
                .services-rule {
                    height: 1px;
                    background: rgba(255, 255, 255, 0.1);
                }
                .services-more {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: #fff;
                    font-weight: 700;
                    font-size: 0.75rem;
                    letter-spacing: 0.15em;
                    padding-bottom: 0.25rem;
                    border-bottom: 2px solid var(--brand-primary);
                }
                @media (max-width: 1024px) {
                    .services-card {
                        grid-template-columns: 1fr;
                        padding: 2rem;
                    }
                }
                "#}
            </style>
            <div class="services-card">
                <div class="services-card-image">
                    <img
                        src="https://images.unsplash.com/photo-1519085360753-af0119f7cbe7?w=600&h=750&fit=crop"
                        alt="Professional in modern office"
                        loading="lazy"
                    />
                </div>
                <div>
                    <div class="section-label light"><span class="dot"></span>{"WHAT WE WORK ON"}</div>
                    <div class="services-lead">
                        <h3>{"Web Design"}</h3>
                        <p>{"Creating beautiful, functional digital experiences that drive results and elevate your brand presence."}</p>
                    </div>
                    { for SERVICE_CARD_ITEMS.iter().enumerate().map(|(i, item)| html! {
                        <>
                            <div class="services-item">{ *item }</div>
                            if i < last {
                                <div class="services-rule"></div>
                            }
                        </>
                    }) }
                    <div class="services-foot">
                        <p>{"Delivering digital experiences through versatile subscription"}</p>
                        <Link<Route> to={Route::Services} classes="services-more">
                            {"LEARN MORE"}
                            <Icon glyph={Glyph::ArrowUpRight} size={16} />
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </section>
    }
}
