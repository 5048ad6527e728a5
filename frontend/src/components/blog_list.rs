use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::posts::{latest_posts, BlogPost};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct PostCardProps {
    pub post: &'static BlogPost,
}

/// Vertical article card used by the blog listing and related articles.
#[function_component(PostCard)]
pub fn post_card(props: &PostCardProps) -> Html {
    let post = props.post;

    html! {
        <Link<Route> to={Route::BlogPost { id: post.id.to_string() }}>
            <article class="card post-card">
                <div class="post-media">
                    <img src={post.image} alt={post.image_alt} loading="lazy" />
                </div>
                <div class="post-body">
                    <span class="tag-pill">{ post.tag }</span>
                    <h3>{ post.title }</h3>
                    <p>{ post.excerpt }</p>
                    <div class="post-meta">
                        <span>{ post.date }</span>
                        <span>{ post.read_time }</span>
                    </div>
                </div>
            </article>
        </Link<Route>>
    }
}

#[function_component(PostCardStyles)]
pub fn post_card_styles() -> Html {
    html! {
        <style>
            {r#"
            .tag-pill {
                display: inline-flex;
                width: fit-content;
                border-radius: 999px;
                border: 1px solid rgba(0, 0, 0, 0.1);
                background: #fff;
                padding: 0.5rem 1rem;
                font-size: 0.875rem;
                font-weight: 600;
            }
            .post-card {
                height: 100%;
                display: flex;
                flex-direction: column;
            }
            .post-media {
                aspect-ratio: 16 / 10;
                overflow: hidden;
            }
            .post-media img {
                width: 100%;
                height: 100%;
                object-fit: cover;
                transition: transform 0.7s ease;
            }
            .post-card:hover .post-media img {
                transform: scale(1.1);
            }
            .post-body {
                padding: 1.75rem 2rem 2rem;
                display: flex;
                flex-direction: column;
                gap: 1rem;
                flex: 1;
            }
            .post-body h3 {
                margin: 0;
                font-size: 1.5rem;
                font-weight: 600;
                line-height: 1.25;
                transition: color 0.2s ease;
            }
            .post-card:hover h3 {
                color: var(--brand-primary);
            }
            .post-body p {
                margin: 0;
                color: rgba(0, 0, 0, 0.7);
                line-height: 1.6;
            }
            .post-meta {
                margin-top: auto;
                display: flex;
                justify-content: space-between;
                font-size: 0.875rem;
                color: rgba(0, 0, 0, 0.5);
            }
            "#}
        </style>
    }
}

/// Home page "ARTICLE & BLOGS" rows: tag and title, square image, teaser.
#[function_component(BlogList)]
pub fn blog_list() -> Html {
    html! {
        <section class="blog-list alt-bg">
            <PostCardStyles />
            <style>
                {r#"
                .blog-list {
                    padding: 8rem 0;
                }
                .blog-list-inner {
                    max-width: 1400px;
                    margin: 0 auto;
                    padding: 0 5rem;
                }
                .blog-row {
                    display: grid;
                    grid-template-columns: 1.2fr auto 1fr;
                    gap: 3rem;
                    padding: 5rem 0;
                    align-items: center;
                }
                .blog-row h3 {
                    margin: 1.25rem 0 0;
                    font-size: clamp(1.5rem, 3vw, 2.375rem);
                    font-weight: 600;
                    line-height: 1.15;
                    transition: color 0.3s ease;
                }
                .blog-row:hover h3 {
                    color: var(--brand-primary);
                }
                .blog-row-image {
                    width: 340px;
                    height: 340px;
                    overflow: hidden;
                    border-radius: 12px;
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.1);
                }
                .blog-row-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .blog-row p {
                    color: rgba(0, 0, 0, 0.75);
                    font-size: 1.125rem;
                    line-height: 1.6;
                }
                @media (max-width: 1024px) {
                    .blog-list-inner {
                        padding: 0 2rem;
                    }
                    .blog-row {
                        grid-template-columns: 1fr;
                        padding: 3rem 0;
                    }
                    .blog-row-image {
                        width: 100%;
                        height: 260px;
                    }
                }
                "#}
            </style>
            <div class="blog-list-inner">
                <div class="section-label"><span class="dot"></span>{"ARTICLE & BLOGS"}</div>
                { for latest_posts().iter().map(|post| html! {
                    <Link<Route> to={Route::BlogPost { id: post.id.to_string() }}>
                        <article class="blog-row">
                            <div>
                                <span class="tag-pill">{ post.tag }</span>
                                <h3>{ post.title }</h3>
                            </div>
                            <div class="blog-row-image">
                                <img src={post.image} alt={post.image_alt} loading="lazy" />
                            </div>
                            <p>{ post.teaser }</p>
                        </article>
                    </Link<Route>>
                }) }
            </div>
        </section>
    }
}
