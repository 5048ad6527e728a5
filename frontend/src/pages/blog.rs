use yew::prelude::*;

use crate::components::blog_list::{PostCard, PostCardStyles};
use crate::components::category_filter::CategoryFilter;
use crate::components::page_sections::PageHero;
use crate::content::posts::{BLOG_CATEGORIES, POSTS};
use crate::content::{filter_by_category, ALL};

#[function_component(Blog)]
pub fn blog() -> Html {
    let selected = use_state(|| ALL);
    let posts = filter_by_category(POSTS, *selected, |p| p.tag);

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |category: &'static str| selected.set(category))
    };

    html! {
        <main class="listing-page">
            <PostCardStyles />
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
                label="Articles & Insights"
                lead="Expert perspectives on design, technology, and digital strategy to help you stay ahead of the curve."
            >
                {"Stories, insights, and ideas"}
            </PageHero>
            <div class="container">
                <div class="listing-filter">
                    <CategoryFilter categories={BLOG_CATEGORIES} selected={*selected} on_select={on_select} />
                </div>
                if posts.is_empty() {
                    <p class="listing-empty">{"No articles found in this category."}</p>
                } else {
                    <div class="listing-grid">
                        { for posts.into_iter().enumerate().map(|(i, post)| html! {
                            <div class="fade-in-up" key={post.id} style={format!("animation-delay: {}ms;", i * 50)}>
                                <PostCard post={post} />
                            </div>
                        }) }
                    </div>
                }
            </div>
        </main>
    }
}
