use yew::prelude::*;

use crate::components::icons::{Glyph, Icon};
use crate::components::page_sections::PageHero;
use crate::content::releases::{ChangeKind, Release, RELEASES};

#[derive(Properties, PartialEq)]
struct KindBadgeProps {
    kind: ChangeKind,
    size: u32,
}

#[function_component(KindBadge)]
fn kind_badge(props: &KindBadgeProps) -> Html {
    html! {
        <span class={classes!("change-badge", props.kind.class())}>
            <Icon glyph={Glyph::from(props.kind)} size={props.size} />
        </span>
    }
}

fn release_card(index: usize, release: &'static Release) -> Html {
    html! {
        <article
            class="release fade-in-up"
            key={release.version}
            style={format!("animation-delay: {}ms;", index * 100)}
        >
            <span class="release-marker"></span>
            <div class="release-head">
                <h2>{ format!("v{}", release.version) }</h2>
                <span class="release-date">{ release.date }</span>
            </div>
            <h3>{ release.title }</h3>
            <ul>
                { for release.changes.iter().map(|change| html! {
                    <li>
                        <KindBadge kind={change.kind} size={16} />
                        <p>{ change.description }</p>
                    </li>
                }) }
            </ul>
        </article>
    }
}

#[function_component(Changelog)]
pub fn changelog() -> Html {
    html! {
        <main class="changelog-page">
            <style>
                {r#"
                .changelog-column {
                    max-width: 1000px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .change-legend {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    padding: 1.5rem;
                    margin-bottom: 4rem;
                    border-radius: 12px;
                    background: #fff;
                    border: 1px solid rgba(0, 0, 0, 0.05);
                }
                .change-legend div {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                }
                .change-badge {
                    flex-shrink: 0;
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 2rem;
                    height: 2rem;
                    border-radius: 50%;
                    transition: transform 0.2s ease;
                }
                .change-legend .change-badge {
                    width: 1.5rem;
                    height: 1.5rem;
                }
                .change-feature {
                    color: var(--brand-primary);
                    background: rgba(255, 69, 0, 0.1);
                }
                .change-fix {
                    color: #16a34a;
                    background: rgba(22, 163, 74, 0.1);
                }
                .change-improvement {
                    color: #2563eb;
                    background: rgba(37, 99, 235, 0.1);
                }
                .change-breaking {
                    color: #dc2626;
                    background: rgba(220, 38, 38, 0.1);
                }
                .timeline {
                    padding: 6rem 0 8rem;
                }
                .release {
                    position: relative;
                    padding-left: 3rem;
                    border-left: 1px solid rgba(0, 0, 0, 0.1);
                }
                .release + .release {
                    margin-top: 4rem;
                }
                .release-marker {
                    position: absolute;
                    left: -6px;
                    top: 2rem;
                    width: 12px;
                    height: 12px;
                    border-radius: 50%;
                    background: var(--brand-primary);
                }
                .release-head {
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    gap: 1rem;
                }
                .release h2 {
                    font-size: clamp(1.75rem, 3vw, 2.25rem);
                    font-weight: 700;
                    margin: 0;
                    transition: color 0.2s ease;
                }
                .release:hover h2 {
                    color: var(--brand-primary);
                }
                .release-date {
                    border-radius: 999px;
                    background: #fff;
                    border: 1px solid rgba(0, 0, 0, 0.1);
                    padding: 0.375rem 1rem;
                    font-size: 0.875rem;
                    font-weight: 600;
                    color: rgba(0, 0, 0, 0.7);
                }
                .release h3 {
                    font-size: 1.25rem;
                    font-weight: 600;
                    color: rgba(0, 0, 0, 0.7);
                    margin: 0.5rem 0 1.5rem;
                }
                .release ul {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .release li {
                    display: flex;
                    align-items: flex-start;
                    gap: 1rem;
                }
                .release li:hover .change-badge {
                    transform: scale(1.1);
                }
                .release li p {
                    margin: 0.25rem 0 0;
                    color: rgba(0, 0, 0, 0.75);
                    line-height: 1.6;
                }
                @media (max-width: 768px) {
                    .release {
                        padding-left: 0;
                        border-left: none;
                    }
                    .release-marker {
                        display: none;
                    }
                }
                "#}
            </style>
            <PageHero
                label="Version History"
                lead="Track our journey of continuous improvement. Every update, feature, and fix that makes Mitchy better."
            >
                {"Changelog"}
            </PageHero>
            <div class="changelog-column">
                <div class="change-legend">
                    { for ChangeKind::ALL.iter().map(|kind| html! {
                        <div key={kind.label()}>
                            <KindBadge kind={*kind} size={12} />
                            { kind.label() }
                        </div>
                    }) }
                </div>
            </div>
            <section class="timeline alt-bg">
                <div class="changelog-column">
                    { for RELEASES.iter().enumerate().map(|(i, release)| release_card(i, release)) }
                </div>
            </section>
        </main>
    }
}
