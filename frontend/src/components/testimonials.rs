use yew::prelude::*;

use crate::components::fill_text::FillLines;
use crate::content::agency::{CLIENTS, TESTIMONIAL_LINES, TICKER_WORDS};
use crate::scroll::{use_scroll_progress, TrackerWeights};

fn ticker_set(hidden: bool) -> Html {
    html! {
        <div class="ticker-set" aria-hidden={hidden.to_string()}>
            { for TICKER_WORDS.iter().map(|word| html! {
                <span class={classes!("ticker-word", word.muted.then_some("muted"))}>
                    { word.text }
                    if word.dot {
                        <span class="accent">{"."}</span>
                    }
                </span>
            }) }
        </div>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let section = use_node_ref();
    let progress = use_scroll_progress(section.clone(), TrackerWeights::REVEAL);

    html! {
        <section class="testimonials" ref={section}>
            <style>
                {r#"
                .testimonials {
                    padding: 5rem 0;
                }
                .ticker {
                    overflow: hidden;
                    margin-bottom: 5rem;
                }
                .ticker-track {
                    display: flex;
                    width: max-content;
                    animation: scroll-left 35s linear infinite;
                }
                .ticker-set {
                    display: flex;
                    align-items: center;
                    flex-shrink: 0;
                }
                .ticker-word {
                    padding: 0 1rem;
                    font-size: clamp(3.75rem, 9vw, 8rem);
                    font-weight: 900;
                    letter-spacing: -0.025em;
                    white-space: nowrap;
                }
                .ticker-word.muted {
                    color: rgba(0, 0, 0, 0.15);
                }
                .testimonial-body {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 2rem;
                    text-align: center;
                }
                .testimonial-lines {
                    margin: 3rem 0 4rem;
                    font-size: clamp(1.875rem, 3.5vw, 3rem);
                    font-weight: 700;
                    line-height: 1.25;
                }
                .client-row {
                    display: flex;
                    justify-content: center;
                    gap: 2rem;
                    flex-wrap: wrap;
                }
                .client {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.75rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: rgba(0, 0, 0, 0.4);
                }
                .client.highlight {
                    color: #000;
                }
                .client img {
                    width: 10rem;
                    height: 11rem;
                    object-fit: cover;
                    border-radius: 24px;
                }
                "#}
            </style>
            <div class="ticker">
                <div class="ticker-track">
                    { ticker_set(false) }
                    { ticker_set(true) }
                </div>
            </div>
            <div class="testimonial-body">
                <div class="section-label"><span class="dot"></span>{"TESTIMONIALS"}</div>
                <FillLines lines={TESTIMONIAL_LINES} progress={progress} class={classes!("testimonial-lines", "centered")} />
                <div class="client-row">
                    { for CLIENTS.iter().enumerate().map(|(i, client)| html! {
                        // The middle avatar is the quoted client.
                        <div class={classes!("client", (i == 1).then_some("highlight"))}>
                            <img src={client.image} alt={client.name} />
                            <span>{ client.name }</span>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
