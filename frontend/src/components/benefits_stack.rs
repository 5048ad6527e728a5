use yew::prelude::*;

use crate::components::icons::BenefitGlyph;
use crate::content::agency::BENEFITS;
use crate::effects::CardStack;
use crate::scroll::{use_scroll_progress, TrackerWeights};

/// Dark section whose benefit cards climb in and pile up on a sticky rail,
/// each earlier card keeping a strip of its header visible.
#[function_component(BenefitsStack)]
pub fn benefits_stack() -> Html {
    let section = use_node_ref();
    let progress = use_scroll_progress(section.clone(), TrackerWeights::STACK);
    let stack = CardStack::new(BENEFITS.len());

    html! {
        <section class="benefits-stack" ref={section}>
            <style>
                {r#"
                .benefits-stack {
                    background: #050505;
                    color: #fff;
                    padding: 8rem 0;
                    min-height: 200vh;
                }
                .benefits-grid {
                    max-width: 1400px;
                    margin: 0 auto;
                    padding: 0 3rem;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 6rem;
                    align-items: start;
                }
                .benefits-rail {
                    position: sticky;
                    top: 6rem;
                }
                .benefits-rail h2 {
                    font-size: clamp(2.25rem, 4.5vw, 3.75rem);
                    font-weight: 600;
                    line-height: 1.15;
                    margin: 1.5rem 0;
                }
                .benefits-rail h2 span {
                    color: rgba(255, 255, 255, 0.3);
                }
                .benefits-rail p {
                    max-width: 28rem;
                    color: rgba(255, 255, 255, 0.65);
                    line-height: 1.6;
                }
                .benefits-cards {
                    position: relative;
                    padding-bottom: 16rem;
                }
                .benefit-slot {
                    min-height: 360px;
                }
                .benefit-card {
                    position: sticky;
                    border-radius: 32px;
                    border: 1px solid rgba(255, 255, 255, 0.12);
                    background: rgba(0, 0, 0, 0.4);
                    padding: 2.25rem;
                    box-shadow: 0 35px 90px rgba(0, 0, 0, 0.65);
                    backdrop-filter: blur(2px);
                    transition: transform 0.5s ease;
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                    gap: 2.5rem;
                }
                .benefit-card p {
                    font-size: 0.875rem;
                    line-height: 1.6;
                    color: rgba(255, 255, 255, 0.7);
                    margin: 0;
                }
                .benefit-card h3 {
                    margin: 2rem 0 0;
                    font-size: 1.875rem;
                    font-weight: 600;
                }
                @media (max-width: 1024px) {
                    .benefits-stack {
                        min-height: auto;
                        padding: 5rem 0;
                    }
                    .benefits-grid {
                        grid-template-columns: 1fr;
                        gap: 4rem;
                        padding: 0 1.5rem;
                    }
                    .benefits-rail, .benefit-card {
                        position: static;
                    }
                    .benefits-cards {
                        padding-bottom: 0;
                    }
                    .benefit-slot {
                        min-height: 0;
                        margin-bottom: 1.5rem;
                    }
                    .benefit-card {
                        transform: none !important;
                    }
                }
                "#}
            </style>
            <div class="benefits-grid">
                <div class="benefits-rail">
                    <div class="section-label light"><span class="dot"></span>{"Web Development"}</div>
                    <h2>
                        {"Ready to unlock these incredible "}
                        <span>{"subscription benefits?"}</span>
                    </h2>
                    <p>{"At the heart of our design process is a commitment to actively listen and understand your unique challenges and needs."}</p>
                </div>
                <div class="benefits-cards">
                    { for BENEFITS.iter().enumerate().map(|(index, benefit)| html! {
                        <div class="benefit-slot" key={benefit.title}>
                            <article class="benefit-card" style={stack.placement(index, progress).style()}>
                                <p>{ benefit.description }</p>
                                <div>
                                    <BenefitGlyph icon={benefit.icon} />
                                    <h3>{ benefit.title }</h3>
                                </div>
                            </article>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
