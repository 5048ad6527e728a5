use yew::prelude::*;

use crate::components::category_filter::CategoryFilter;
use crate::components::featured_works::{ProjectCard, ProjectCardStyles};
use crate::components::page_sections::PageHero;
use crate::content::projects::{PROJECTS, WORK_CATEGORIES};
use crate::content::{filter_by_category, ALL};

#[function_component(Work)]
pub fn work() -> Html {
    let selected = use_state(|| ALL);
    let projects = filter_by_category(PROJECTS, *selected, |p| p.category);

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |category: &'static str| selected.set(category))
    };

    html! {
        <main class="alt-bg listing-page">
            <ProjectCardStyles />
            <style>
                {r#"
                .listing-filter {
                    padding-bottom: 4rem;
                }
                .listing-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    padding-bottom: 8rem;
                }
                .listing-empty {
                    text-align: center;
                    padding: 5rem 0 8rem;
                    font-size: 1.25rem;
                    color: rgba(0, 0, 0, 0.5);
                }
                @media (max-width: 1024px) {
                    .listing-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                @media (max-width: 640px) {
                    .listing-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
            <PageHero
                label="Our Portfolio"
                lead="Explore our portfolio of digital experiences, branding projects, and creative solutions that have helped businesses grow and thrive."
            >
                {"Selected Work"}
            </PageHero>
            <div class="container">
                <div class="listing-filter">
                    <CategoryFilter categories={WORK_CATEGORIES} selected={*selected} on_select={on_select} />
                </div>
                if projects.is_empty() {
                    <p class="listing-empty">{"No projects found in this category."}</p>
                } else {
                    <div class="listing-grid">
                        { for projects.into_iter().enumerate().map(|(i, project)| html! {
                            <div class="fade-in-up" key={project.id} style={format!("animation-delay: {}ms;", i * 50)}>
                                <ProjectCard project={project} />
                            </div>
                        }) }
                    </div>
                }
            </div>
        </main>
    }
}
