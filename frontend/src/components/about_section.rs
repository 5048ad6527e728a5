use yew::prelude::*;

use crate::components::fill_text::FillLines;
use crate::content::agency::{ABOUT_BLURB, ABOUT_LINES};
use crate::scroll::{use_scroll_progress, TrackerWeights};

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    let section = use_node_ref();
    let progress = use_scroll_progress(section.clone(), TrackerWeights::REVEAL);

    html! {
        <section class="about-section" ref={section}>
            <style>
                {r#"
                .about-section {
                    padding: 8rem 2rem;
                }
                .about-grid {
                    max-width: 1600px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 7fr 5fr;
                    gap: 3rem;
                    align-items: start;
                }
                .about-lines {
                    margin-top: 2rem;
                    font-size: clamp(2.25rem, 4.5vw, 3.75rem);
                    font-weight: 700;
                    line-height: 1.25;
                }
                .about-image {
                    aspect-ratio: 4 / 3;
                    overflow: hidden;
                    border-radius: 24px;
                }
                .about-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .about-side p {
                    color: rgba(0, 0, 0, 0.7);
                    line-height: 1.7;
                    margin-top: 1.5rem;
                }
                @media (max-width: 1024px) {
                    .about-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
            <div class="about-grid">
                <div>
                    <div class="section-label"><span class="dot"></span>{"ABOUT US"}</div>
                    <FillLines lines={ABOUT_LINES} progress={progress} class="about-lines" />
                </div>
                <div class="about-side">
                    <div class="about-image">
                        <img
                            src="https://images.unsplash.com/photo-1522071820081-009f0129c71c?w=800&h=600&fit=crop"
                            alt="Team collaboration meeting"
                        />
                    </div>
                    <p>{ ABOUT_BLURB }</p>
                </div>
            </div>
        </section>
    }
}
