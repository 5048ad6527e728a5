use yew::prelude::*;

use crate::components::fill_text::FillLines;
use crate::components::page_sections::{CtaSection, PageHero};
use crate::content::agency::{TeamMember, STATS, STORY_LINES, TEAM, VALUES};
use crate::scroll::{use_scroll_progress, TrackerWeights};

#[function_component(StorySection)]
fn story_section() -> Html {
    let section_ref = use_node_ref();
    let progress = use_scroll_progress(section_ref.clone(), TrackerWeights::REVEAL);

    html! {
        <section ref={section_ref} class="story-section">
            <div class="container story-grid">
                <div class="story-lines">
                    <div class="section-label"><span class="dot"></span>{"Our Story"}</div>
                    <FillLines lines={STORY_LINES} progress={progress} />
                </div>
                <div class="story-copy">
                    <p>
                        {"Founded in 2016, Mitchy has grown from a small studio into a full-service digital agency. We combine strategic thinking with creative excellence to help brands thrive in the digital age."}
                    </p>
                    <p>
                        {"Our diverse team brings together expertise in design, development, branding, and strategy to deliver comprehensive solutions that make a real impact."}
                    </p>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct TeamCardProps {
    member: &'static TeamMember,
}

#[function_component(TeamCard)]
fn team_card(props: &TeamCardProps) -> Html {
    let member = props.member;
    html! {
        <article class="card team-card">
            <div class="team-photo">
                <img src={member.image} alt={member.name} loading="lazy" />
            </div>
            <div class="team-body">
                <h3>{ member.name }</h3>
                <p class="team-role">{ member.role }</p>
                <p class="team-bio">{ member.bio }</p>
            </div>
        </article>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <main class="about-page">
            <style>
                {r#"
                .story-section {
                    padding: 8rem 0 10rem;
                }
                .story-grid {
                    display: grid;
                    grid-template-columns: 7fr 5fr;
                    gap: 3rem;
                    align-items: start;
                }
                .story-lines .fill-lines {
                    margin-top: 2rem;
                    font-size: clamp(2.25rem, 4.5vw, 3.75rem);
                    font-weight: 700;
                    line-height: 1.25;
                }
                .story-copy p {
                    font-size: 1.125rem;
                    line-height: 1.7;
                    color: rgba(0, 0, 0, 0.7);
                    margin: 0 0 1.5rem;
                }
                .stats-section {
                    padding: 6rem 0;
                }
                .stats-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 3rem;
                    text-align: center;
                }
                .stat-value {
                    font-size: clamp(3rem, 6vw, 4.5rem);
                    font-weight: 900;
                    color: var(--brand-primary);
                    margin-bottom: 0.75rem;
                }
                .stat-label {
                    font-weight: 500;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    color: rgba(0, 0, 0, 0.7);
                }
                .team-section, .values-section {
                    padding: 6rem 0 8rem;
                }
                .section-heading {
                    margin-bottom: 4rem;
                }
                .section-heading h2 {
                    font-size: clamp(2.25rem, 5vw, 3.75rem);
                    font-weight: 700;
                    margin: 1.5rem 0;
                }
                .section-heading p {
                    font-size: 1.125rem;
                    color: rgba(0, 0, 0, 0.7);
                    max-width: 42rem;
                }
                .section-heading.centered {
                    text-align: center;
                }
                .team-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                }
                .team-photo {
                    aspect-ratio: 4 / 5;
                    overflow: hidden;
                }
                .team-photo img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.7s ease;
                }
                .team-card:hover .team-photo img {
                    transform: scale(1.1);
                }
                .team-body {
                    padding: 1.5rem;
                }
                .team-body h3 {
                    font-size: 1.25rem;
                    font-weight: 600;
                    margin: 0 0 0.5rem;
                }
                .team-role {
                    font-size: 0.875rem;
                    font-weight: 500;
                    text-transform: uppercase;
                    color: var(--brand-primary);
                    margin: 0;
                }
                .team-bio {
                    color: rgba(0, 0, 0, 0.65);
                    line-height: 1.6;
                }
                .values-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .value-card {
                    padding: 2rem;
                }
                .value-card h3 {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    font-size: 1.5rem;
                    font-weight: 600;
                    margin: 0 0 1rem;
                }
                .value-card p {
                    color: rgba(0, 0, 0, 0.7);
                    line-height: 1.6;
                    margin: 0;
                }
                @media (max-width: 1024px) {
                    .story-grid, .values-grid {
                        grid-template-columns: 1fr;
                    }
                    .stats-grid, .team-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                @media (max-width: 640px) {
                    .team-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
            <PageHero
                label="About Us"
                lead="Passionate about building digital experiences that inspire, engage, and deliver measurable results for businesses worldwide."
            >
                {"We're a team of "}<span class="accent">{"creators"}</span>{", "}
                <span class="accent">{"innovators"}</span>{", and "}
                <span class="accent">{"problem solvers"}</span>
            </PageHero>

            <StorySection />

            <section class="stats-section alt-bg">
                <div class="container stats-grid">
                    { for STATS.iter().enumerate().map(|(i, stat)| html! {
                        <div class="fade-in-up" key={stat.label} style={format!("animation-delay: {}ms;", i * 100)}>
                            <div class="stat-value">{ stat.value }</div>
                            <div class="stat-label">{ stat.label }</div>
                        </div>
                    }) }
                </div>
            </section>

            <section class="team-section">
                <div class="container">
                    <div class="section-heading">
                        <div class="section-label"><span class="dot"></span>{"Meet the Team"}</div>
                        <h2>{"The people behind"}<br />{"the magic"}</h2>
                        <p>{"Our diverse team of experts brings together years of experience in design, development, and digital strategy."}</p>
                    </div>
                    <div class="team-grid">
                        { for TEAM.iter().map(|member| html! {
                            <TeamCard key={member.id} member={member} />
                        }) }
                    </div>
                </div>
            </section>

            <section class="values-section alt-bg">
                <div class="container">
                    <div class="section-heading centered">
                        <div class="section-label"><span class="dot"></span>{"Our Values"}</div>
                        <h2>{"What drives us"}</h2>
                    </div>
                    <div class="values-grid">
                        { for VALUES.iter().map(|value| html! {
                            <div class="card value-card" key={value.title}>
                                <h3><span class="dot"></span>{ value.title }</h3>
                                <p>{ value.description }</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <CtaSection
                title="Ready to work together?"
                text="Let's create something amazing. Get in touch and tell us about your project."
                button="Start a Project"
            />
        </main>
    }
}
