use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::agency::FEATURED_COPY;
use crate::content::projects::{featured_projects, Project};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: &'static Project,
}

/// Image card linking to a project's detail page. Shared by the home grid,
/// the work listing and the related-projects strip.
#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let project = props.project;

    html! {
        <Link<Route> to={Route::Project { id: project.id.to_string() }}>
            <article class="card project-card">
                <div class={classes!("project-media", project.aspect.class())}>
                    <img src={project.image} alt={project.image_alt} loading="lazy" />
                </div>
                <div class="project-meta">
                    <h3>{ project.title }</h3>
                    <div class="project-facts">
                        <span class="project-year">{ project.year }</span>
                        <span class="project-category">{ project.category }</span>
                    </div>
                </div>
            </article>
        </Link<Route>>
    }
}

/// Styles for [`ProjectCard`]; mounted once by every page that shows cards.
#[function_component(ProjectCardStyles)]
pub fn project_card_styles() -> Html {
    html! {
        <style>
            {r#"
            .project-media {
                overflow: hidden;
            }
            .project-media.aspect-tall {
                aspect-ratio: 5 / 4;
            }
            .project-media.aspect-wide {
                aspect-ratio: 4 / 3;
            }
            .project-media img {
                width: 100%;
                height: 100%;
                object-fit: cover;
                transition: transform 0.7s ease;
            }
            .project-card:hover .project-media img {
                transform: scale(1.1);
            }
            .project-meta {
                display: flex;
                align-items: flex-end;
                justify-content: space-between;
                gap: 1.5rem;
                padding: 1.5rem 2rem 1.75rem;
            }
            .project-meta h3 {
                margin: 0;
                font-size: 1.25rem;
                font-weight: 600;
                transition: color 0.2s ease;
            }
            .project-card:hover h3 {
                color: var(--brand-primary);
            }
            .project-facts {
                display: flex;
                flex-direction: column;
                align-items: flex-end;
                text-align: right;
            }
            .project-year {
                font-weight: 600;
                font-size: 1.125rem;
            }
            .project-category {
                font-size: 0.875rem;
                color: rgba(0, 0, 0, 0.65);
            }
            "#}
        </style>
    }
}

#[function_component(FeaturedWorks)]
pub fn featured_works() -> Html {
    let projects = featured_projects();
    let (left, right) = projects.split_at(projects.len().min(2));
    let copy = &FEATURED_COPY;

    html! {
        <section class="featured-works alt-bg">
            <ProjectCardStyles />
            <style>
                {r#"
                .featured-works {
                    padding: 8rem 0;
                }
                .featured-grid {
                    max-width: 1400px;
                    margin: 0 auto;
                    padding: 0 5rem;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                }
                .featured-column {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .featured-column.offset {
                    margin-top: 7rem;
                }
                .quote-card {
                    border-radius: 12px;
                    background: var(--bg-tertiary);
                    padding: 4rem 2.5rem;
                    min-height: 320px;
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08);
                }
                .quote-card p {
                    margin: 0;
                    font-size: clamp(1.875rem, 3.5vw, 3rem);
                    font-weight: 300;
                    line-height: 1.2;
                    color: rgba(0, 0, 0, 0.35);
                }
                .intro-card {
                    padding: 3.5rem 2.5rem;
                }
                .intro-card h2 {
                    margin: 1.5rem 0 0;
                    font-size: clamp(1.875rem, 3.5vw, 3.125rem);
                    font-weight: 600;
                    line-height: 1.15;
                }
                .intro-card h2 span {
                    color: rgba(0, 0, 0, 0.3);
                }
                .intro-card p {
                    margin-top: 1.5rem;
                    max-width: 28rem;
                    line-height: 1.7;
                    color: rgba(0, 0, 0, 0.7);
                }
                @media (max-width: 1024px) {
                    .featured-grid {
                        grid-template-columns: 1fr;
                        padding: 0 2rem;
                    }
                    .featured-column.offset {
                        margin-top: 0;
                    }
                }
                "#}
            </style>
            <div class="featured-grid">
                <div class="featured-column">
                    { for left.iter().map(|project| html! { <ProjectCard project={project} /> }) }
                    <div class="quote-card"><p>{ copy.quote }</p></div>
                </div>
                <div class="featured-column offset">
                    <div class="card intro-card fade-in-up">
                        <div class="section-label"><span class="dot"></span>{ copy.label }</div>
                        <h2>{ copy.tagline }{" "}<span>{ copy.emphasis }</span></h2>
                        <p>{ copy.body }</p>
                    </div>
                    { for right.iter().map(|project| html! { <ProjectCard project={project} /> }) }
                </div>
            </div>
        </section>
    }
}
