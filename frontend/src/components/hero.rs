use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icons::{Glyph, Icon};
use crate::content::agency::HERO_BLURB;
use crate::Route;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section class="hero">
            <style>
                {r#"
                .hero {
                    padding: 9rem 2rem 4rem;
                }
                .hero-grid {
                    max-width: 1600px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 3fr 9fr;
                    gap: 3rem;
                    align-items: start;
                }
                .hero-book {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: var(--brand-primary);
                    font-weight: 700;
                    font-size: 13px;
                    letter-spacing: 0.05em;
                    transition: gap 0.3s ease;
                }
                .hero-book:hover {
                    gap: 0.75rem;
                }
                .hero-blurb {
                    color: rgba(0, 0, 0, 0.65);
                    font-size: 17px;
                    line-height: 1.4;
                    max-width: 280px;
                    margin-top: 1.25rem;
                }
                .hero-headline {
                    font-size: clamp(3.5rem, 11vw, 9rem);
                    font-weight: 900;
                    line-height: 0.88;
                    letter-spacing: -0.03em;
                    text-align: right;
                    margin: 0;
                }
                .hero-headline span {
                    display: block;
                }
                .hero-dot {
                    display: inline-block;
                    width: 0.16em;
                    height: 0.16em;
                    margin-left: 0.5rem;
                    vertical-align: top;
                    margin-top: 0.12em;
                    border-radius: 50%;
                    background: var(--brand-primary);
                }
                @media (max-width: 1024px) {
                    .hero-grid {
                        grid-template-columns: 1fr;
                    }
                    .hero-headline {
                        text-align: center;
                    }
                }
                "#}
            </style>
            <div class="hero-grid">
                <div class="fade-in-up">
                    <Link<Route> to={Route::Contact} classes="hero-book">
                        {"BOOK A CALL"}
                        <Icon glyph={Glyph::ArrowUpRight} size={16} />
                    </Link<Route>>
                    <p class="hero-blurb">{ HERO_BLURB }</p>
                </div>
                <h2 class="hero-headline">
                    <span>{"GROWTH"}</span>
                    <span>{"HACKING"}<span class="hero-dot"></span></span>
                </h2>
            </div>
        </section>
    }
}
