use yew::prelude::*;

use crate::components::icons::{Glyph, Icon};
use crate::components::page_sections::PageHero;
use crate::theme::{Swatch, BACKGROUND_COLORS, BRAND_COLORS, NEUTRAL_COLORS, TYPE_SCALE};

const SHOWCASE_GLYPHS: &[Glyph] = &[
    Glyph::ArrowUpRight,
    Glyph::Mail,
    Glyph::Phone,
    Glyph::MapPin,
    Glyph::Calendar,
    Glyph::Clock,
    Glyph::Palette,
    Glyph::Code,
    Glyph::Sparkles,
    Glyph::Zap,
];

fn swatch_row(title: &'static str, swatches: &'static [Swatch], large: bool) -> Html {
    html! {
        <div class="swatch-group">
            <h3>{ title }</h3>
            <div class={classes!("swatch-grid", large.then_some("large"))}>
                { for swatches.iter().map(|swatch| html! {
                    <div class="swatch" key={swatch.token}>
                        <div class="swatch-chip" style={format!("background: var({});", swatch.token)}></div>
                        <p class="swatch-name">{ swatch.name }</p>
                        <p class="swatch-hex">{ swatch.hex }</p>
                    </div>
                }) }
            </div>
        </div>
    }
}

#[function_component(Styleguide)]
pub fn styleguide() -> Html {
    html! {
        <main class="styleguide-page">
            <style>
                {r#"
                .guide-section {
                    padding: 6rem 0;
                }
                .guide-section > .container > h2 {
                    font-size: clamp(2.25rem, 4vw, 3rem);
                    font-weight: 700;
                    margin: 0 0 1rem;
                }
                .guide-section > .container > p {
                    font-size: 1.125rem;
                    color: rgba(0, 0, 0, 0.7);
                    max-width: 42rem;
                    margin: 0 0 3rem;
                }
                .swatch-group + .swatch-group {
                    margin-top: 3rem;
                }
                .swatch-group h3 {
                    font-size: 1.25rem;
                    font-weight: 600;
                    margin: 0 0 1.5rem;
                }
                .swatch-grid {
                    display: grid;
                    grid-template-columns: repeat(7, 1fr);
                    gap: 1rem;
                }
                .swatch-grid.large {
                    grid-template-columns: repeat(4, 1fr);
                }
                .swatch-chip {
                    height: 6rem;
                    border-radius: 12px;
                    border: 1px solid rgba(0, 0, 0, 0.1);
                }
                .swatch-grid.large .swatch-chip {
                    height: 8rem;
                }
                .swatch-name {
                    margin: 0.75rem 0 0.25rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                }
                .swatch-hex {
                    margin: 0;
                    font-family: monospace;
                    font-size: 0.75rem;
                    color: rgba(0, 0, 0, 0.5);
                }
                .type-row {
                    padding: 1.5rem 0;
                    border-bottom: 1px solid rgba(0, 0, 0, 0.1);
                }
                .type-row span {
                    display: block;
                    font-size: 0.875rem;
                    font-weight: 600;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    color: rgba(0, 0, 0, 0.5);
                    margin-bottom: 0.75rem;
                }
                .type-row p {
                    margin: 0;
                    font-weight: 700;
                    line-height: 1.1;
                    overflow-wrap: anywhere;
                }
                .button-grid, .card-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .button-grid h3, .motion-grid h3 {
                    font-size: 0.875rem;
                    font-weight: 600;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    color: rgba(0, 0, 0, 0.5);
                    margin: 0 0 1rem;
                }
                .button-stack {
                    display: flex;
                    flex-direction: column;
                    align-items: flex-start;
                    gap: 1rem;
                }
                .outline-button {
                    border-radius: 999px;
                    padding: 0.5rem 1.25rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                    border: 1px solid rgba(0, 0, 0, 0.1);
                    background: rgba(255, 255, 255, 0.7);
                    cursor: pointer;
                    transition: all 0.2s ease;
                }
                .outline-button:hover, .outline-button.active {
                    background: #fff;
                    border-color: rgba(255, 69, 0, 0.5);
                }
                .text-link {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-weight: 600;
                    color: var(--brand-primary);
                }
                .text-link.underlined {
                    text-decoration: underline;
                    text-underline-offset: 4px;
                }
                .sample-card img {
                    width: 100%;
                    aspect-ratio: 4 / 3;
                    object-fit: cover;
                }
                .sample-card-body {
                    padding: 1.5rem;
                }
                .sample-card-body h3 {
                    font-size: 1.25rem;
                    font-weight: 600;
                    margin: 0 0 0.5rem;
                }
                .sample-card-body p {
                    margin: 0;
                    color: rgba(0, 0, 0, 0.7);
                }
                .sample-card.dark-bg {
                    border-radius: 12px;
                }
                .sample-card.dark-bg p {
                    color: rgba(255, 255, 255, 0.7);
                }
                .sample-card .icon {
                    color: var(--brand-primary);
                    transition: transform 0.3s ease;
                }
                .sample-card:hover .icon {
                    transform: scale(1.1);
                }
                .icon-row {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1.5rem;
                    margin-bottom: 3rem;
                }
                .icon-row span {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 56px;
                    height: 56px;
                    border-radius: 12px;
                    background: #fff;
                    transition: all 0.2s ease;
                }
                .icon-row span:hover {
                    color: var(--brand-primary);
                    transform: translateY(-4px);
                }
                .motion-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 2rem;
                }
                .motion-sample {
                    padding: 1rem 1.5rem;
                    margin-bottom: 0.75rem;
                    border-radius: 12px;
                    background: #fff;
                    font-weight: 500;
                    transition: all 0.3s ease;
                }
                .motion-sample.lift:hover {
                    transform: translateY(-8px);
                    box-shadow: 0 16px 40px rgba(0, 0, 0, 0.12);
                }
                .motion-sample.grow:hover {
                    transform: scale(1.05);
                }
                .motion-sample.tint:hover {
                    color: var(--brand-primary);
                }
                @media (max-width: 1024px) {
                    .swatch-grid, .swatch-grid.large {
                        grid-template-columns: repeat(2, 1fr);
                    }
                    .button-grid, .card-grid, .motion-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
            <PageHero
                label="Design System"
                lead="A comprehensive overview of our design system, including colors, typography, components, and interactions that define the Mitchy brand experience."
            >
                {"Mitchy "}<span class="accent">{"Styleguide"}</span>
            </PageHero>

            <section class="guide-section alt-bg">
                <div class="container">
                    <h2>{"Color Palette"}</h2>
                    <p>{"Our carefully selected color palette balances warmth, professionalism, and energy."}</p>
                    { swatch_row("Brand Colors", BRAND_COLORS, true) }
                    { swatch_row("Backgrounds", BACKGROUND_COLORS, false) }
                    { swatch_row("Neutrals", NEUTRAL_COLORS, false) }
                </div>
            </section>

            <section class="guide-section">
                <div class="container">
                    <h2>{"Typography"}</h2>
                    <p>{"Helvetica Neue provides a clean, modern foundation for our typographic system."}</p>
                    { for TYPE_SCALE.iter().map(|(label, size)| html! {
                        <div class="type-row" key={*label}>
                            <span>{ format!("{} / {}", label, size) }</span>
                            <p style={format!("font-size: {};", size)}>{"Creative agency"}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="guide-section alt-bg">
                <div class="container">
                    <h2>{"Buttons"}</h2>
                    <p>{"Our button system emphasizes clarity and consistent interaction patterns."}</p>
                    <div class="button-grid">
                        <div>
                            <h3>{"Primary CTA"}</h3>
                            <div class="button-stack">
                                <button class="cta-button">{"Primary Button"}</button>
                                <button class="cta-button">
                                    {"With Icon"}
                                    <Icon glyph={Glyph::ArrowUpRight} size={20} />
                                </button>
                            </div>
                        </div>
                        <div>
                            <h3>{"Outline Variant"}</h3>
                            <div class="button-stack">
                                <button class="outline-button">{"Outline Button"}</button>
                                <button class="outline-button active">{"Active State"}</button>
                            </div>
                        </div>
                        <div>
                            <h3>{"Text Links"}</h3>
                            <div class="button-stack">
                                <a href="#" class="text-link">
                                    {"Link with Arrow"}
                                    <Icon glyph={Glyph::ArrowUpRight} size={16} />
                                </a>
                                <a href="#" class="text-link underlined">{"Underlined Link"}</a>
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            <section class="guide-section">
                <div class="container">
                    <h2>{"Cards"}</h2>
                    <p>{"Versatile card components with consistent spacing and elevation."}</p>
                    <div class="card-grid">
                        <article class="card sample-card">
                            <img
                                src="https://images.unsplash.com/photo-1558655146-9f40138edfeb?w=800&q=80&auto=format"
                                alt="Standard card sample"
                                loading="lazy"
                            />
                            <div class="sample-card-body">
                                <h3>{"Standard Card"}</h3>
                                <p>{"With image, hover lift, and shadow transition."}</p>
                            </div>
                        </article>
                        <article class="card sample-card">
                            <div class="sample-card-body">
                                <Icon glyph={Glyph::Palette} size={40} stroke_width={1.5} class="icon" />
                                <h3>{"Service Card"}</h3>
                                <p>{"Icon-based card with hover scale effect."}</p>
                            </div>
                        </article>
                        <article class="sample-card dark-bg">
                            <div class="sample-card-body">
                                <h3>{"Dark Variant"}</h3>
                                <p>{"Dark background for contrast and emphasis."}</p>
                            </div>
                        </article>
                    </div>
                </div>
            </section>

            <section class="guide-section alt-bg">
                <div class="container">
                    <h2>{"Icons & Animations"}</h2>
                    <p>{"Line icons drawn on a 24px grid, with consistent sizing and motion."}</p>
                    <div class="icon-row">
                        { for SHOWCASE_GLYPHS.iter().map(|glyph| html! {
                            <span><Icon glyph={*glyph} /></span>
                        }) }
                    </div>
                    <div class="motion-grid">
                        <div>
                            <h3>{"Entrance Animations"}</h3>
                            <div class="motion-sample fade-in-up">{"Fade In Up (0.6s ease-out)"}</div>
                        </div>
                        <div>
                            <h3>{"Hover Interactions"}</h3>
                            <div class="motion-sample lift">{"Lift on Hover"}</div>
                            <div class="motion-sample grow">{"Scale on Hover"}</div>
                            <div class="motion-sample tint">{"Color Change on Hover"}</div>
                        </div>
                    </div>
                </div>
            </section>
        </main>
    }
}
