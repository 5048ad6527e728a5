use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::featured_works::{ProjectCard, ProjectCardStyles};
use crate::components::icons::{Glyph, Icon};
use crate::components::page_sections::{BackButton, CtaSection, MissingRecord};
use crate::content::projects::{project_by_id, Project, PROJECTS};
use crate::content::related;
use crate::scroll::use_scroll_to_top;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ProjectDetailProps {
    pub id: String,
}

#[function_component(ProjectDetail)]
pub fn project_detail(props: &ProjectDetailProps) -> Html {
    use_scroll_to_top(props.id.clone());

    match project_by_id(&props.id) {
        Some(project) => render_project(project),
        None => {
            log::warn!("No project with id {}", props.id);
            html! {
                <MissingRecord
                    title="Project Not Found"
                    message="The project you're looking for doesn't exist."
                    back_label="Back to Portfolio"
                    back_to={Route::Work}
                />
            }
        }
    }
}

fn render_project(project: &'static Project) -> Html {
    let more = related(PROJECTS, |p| p.id == project.id);

    html! {
        <main class="detail-page">
            <ProjectCardStyles />
            <style>
                {r#"
                .detail-page {
                    padding-top: 8rem;
                }
                .detail-meta {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1.5rem;
                    font-size: 0.875rem;
                    color: rgba(0, 0, 0, 0.6);
                }
                .detail-meta span {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                .detail-meta .category {
                    color: var(--brand-primary);
                    font-weight: 600;
                }
                .detail-page h1 {
                    font-size: clamp(2.5rem, 6vw, 5rem);
                    font-weight: 900;
                    line-height: 1.1;
                    margin: 1.5rem 0;
                }
                .detail-lead {
                    font-size: 1.25rem;
                    line-height: 1.7;
                    color: rgba(0, 0, 0, 0.7);
                    max-width: 48rem;
                }
                .detail-hero-image {
                    margin: 4rem 0;
                    overflow: hidden;
                    border-radius: 24px;
                }
                .detail-hero-image img {
                    width: 100%;
                    aspect-ratio: 16 / 9;
                    object-fit: cover;
                }
                .detail-facts {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    padding: 3rem 0;
                    border-top: 1px solid rgba(0, 0, 0, 0.1);
                    border-bottom: 1px solid rgba(0, 0, 0, 0.1);
                }
                .detail-facts h3 {
                    font-size: 0.75rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    color: rgba(0, 0, 0, 0.5);
                    margin: 0 0 0.75rem;
                }
                .detail-facts p {
                    font-size: 1.125rem;
                    font-weight: 600;
                    margin: 0;
                }
                .tech-list {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }
                .tech-list span {
                    border-radius: 999px;
                    background: var(--bg-secondary);
                    padding: 0.25rem 0.75rem;
                    font-size: 0.875rem;
                }
                .detail-story {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 4rem;
                    padding: 5rem 0;
                }
                .detail-story h2 {
                    font-size: 2rem;
                    font-weight: 700;
                    margin: 0 0 1.5rem;
                }
                .detail-story p {
                    font-size: 1.125rem;
                    line-height: 1.7;
                    color: rgba(0, 0, 0, 0.7);
                }
                .detail-results {
                    grid-column: 1 / -1;
                }
                .detail-results ul {
                    list-style: none;
                    padding: 0;
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1rem;
                }
                .detail-results li {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    font-size: 1.125rem;
                }
                .detail-gallery {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1.5rem;
                    padding-bottom: 5rem;
                }
                .detail-gallery img {
                    width: 100%;
                    aspect-ratio: 4 / 3;
                    object-fit: cover;
                    border-radius: 16px;
                }
                .detail-quote {
                    border-radius: 24px;
                    padding: 4rem;
                    margin-bottom: 5rem;
                }
                .detail-quote blockquote {
                    font-size: clamp(1.5rem, 3vw, 2.25rem);
                    font-weight: 500;
                    line-height: 1.4;
                    margin: 0 0 2rem;
                }
                .detail-quote cite {
                    font-style: normal;
                    color: rgba(255, 255, 255, 0.7);
                }
                .detail-quote cite strong {
                    display: block;
                    color: #fff;
                }
                .more-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-end;
                    gap: 2rem;
                    margin-bottom: 3rem;
                }
                .more-header h2 {
                    font-size: clamp(2rem, 4vw, 3rem);
                    font-weight: 700;
                    margin: 0;
                }
                .more-header a {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-weight: 600;
                }
                .more-header a:hover {
                    color: var(--brand-primary);
                }
                .more-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .more-section {
                    padding: 6rem 0;
                }
                @media (max-width: 1024px) {
                    .detail-facts, .detail-story, .more-grid {
                        grid-template-columns: 1fr;
                    }
                    .detail-results ul, .detail-gallery {
                        grid-template-columns: 1fr;
                    }
                    .detail-quote {
                        padding: 2rem;
                    }
                }
                "#}
            </style>
            <div class="container">
                <BackButton />
                <div class="detail-meta fade-in-up">
                    <span class="category"><Icon glyph={Glyph::Tag} size={16} />{ project.category }</span>
                    <span><Icon glyph={Glyph::Calendar} size={16} />{ project.year }</span>
                </div>
                <h1 class="fade-in-up">{ project.title }</h1>
                <p class="detail-lead fade-in-up">{ project.description }</p>

                <div class="detail-hero-image">
                    <img src={project.hero_image} alt={project.image_alt} />
                </div>

                <div class="detail-facts">
                    <div>
                        <h3>{"Client"}</h3>
                        <p>{ project.client }</p>
                    </div>
                    <div>
                        <h3>{"Duration"}</h3>
                        <p>{ project.duration }</p>
                    </div>
                    <div>
                        <h3>{"Technologies"}</h3>
                        <div class="tech-list">
                            { for project.technologies.iter().map(|tech| html! { <span>{ *tech }</span> }) }
                        </div>
                    </div>
                </div>

                <div class="detail-story">
                    <div>
                        <h2>{"The Challenge"}</h2>
                        <p>{ project.challenge }</p>
                    </div>
                    <div>
                        <h2>{"Our Solution"}</h2>
                        <p>{ project.solution }</p>
                    </div>
                    <div class="detail-results">
                        <h2>{"Results"}</h2>
                        <ul>
                            { for project.results.iter().map(|result| html! {
                                <li><span class="dot"></span>{ *result }</li>
                            }) }
                        </ul>
                    </div>
                </div>

                <div class="detail-gallery">
                    { for project.gallery.iter().enumerate().map(|(i, src)| html! {
                        <img src={*src} alt={format!("{} gallery image {}", project.title, i + 1)} />
                    }) }
                </div>

                if let Some(testimonial) = &project.testimonial {
                    <div class="detail-quote dark-bg">
                        <blockquote>{ format!("\u{201c}{}\u{201d}", testimonial.quote) }</blockquote>
                        <cite>
                            <strong>{ testimonial.author }</strong>
                            { testimonial.role }
                        </cite>
                    </div>
                }
            </div>

            if !more.is_empty() {
                <section class="more-section alt-bg">
                    <div class="container">
                        <div class="more-header">
                            <h2>{"More Projects"}</h2>
                            <Link<Route> to={Route::Work}>
                                {"View All"}
                                <Icon glyph={Glyph::ArrowUpRight} size={18} />
                            </Link<Route>>
                        </div>
                        <div class="more-grid">
                            { for more.into_iter().map(|p| html! {
                                <ProjectCard key={p.id} project={p} />
                            }) }
                        </div>
                    </div>
                </section>
            }

            <CtaSection
                title="Have a project in mind?"
                text="Let's collaborate to create something extraordinary. Get in touch with our team today."
                button="Start a Project"
            />
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew_router::history::{AnyHistory, MemoryHistory};
    use yew_router::Router;

    #[derive(Properties, PartialEq)]
    struct ShellProps {
        id: String,
    }

    #[function_component]
    fn Shell(props: &ShellProps) -> Html {
        let history = AnyHistory::from(MemoryHistory::new());
        html! {
            <Router history={history}>
                <ProjectDetail id={props.id.clone()} />
            </Router>
        }
    }

    async fn render(id: &str) -> String {
        let id = id.to_string();
        yew::ServerRenderer::<Shell>::with_props(move || ShellProps { id })
            .render()
            .await
    }

    #[tokio::test]
    async fn unknown_id_renders_not_found_view() {
        let html = render("no-such-project").await;
        assert!(html.contains("Project Not Found"));
        assert!(html.contains("Back to Portfolio"));
        assert!(!html.contains("The Challenge"));
    }

    #[tokio::test]
    async fn known_id_renders_the_project() {
        let html = render("keelra").await;
        assert!(html.contains("Keëlra Industries"));
        assert!(html.contains("More Projects"));
        assert!(!html.contains("Project Not Found"));
    }
}
