use yew::prelude::*;

use crate::components::blog_list::{PostCard, PostCardStyles};
use crate::components::icons::{Glyph, Icon};
use crate::components::page_sections::{BackButton, MissingRecord};
use crate::content::posts::{post_by_id, BlogPost, POSTS};
use crate::content::related;
use crate::scroll::use_scroll_to_top;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct BlogDetailProps {
    pub id: String,
}

#[function_component(BlogDetail)]
pub fn blog_detail(props: &BlogDetailProps) -> Html {
    use_scroll_to_top(props.id.clone());

    match post_by_id(&props.id) {
        Some(post) => render_post(post),
        None => {
            log::warn!("No article with id {}", props.id);
            html! {
                <MissingRecord
                    title="Article Not Found"
                    message="The article you're looking for doesn't exist."
                    back_label="Back to Blog"
                    back_to={Route::Blog}
                />
            }
        }
    }
}

fn render_post(post: &'static BlogPost) -> Html {
    let more = related(POSTS, |p| p.id == post.id);

    html! {
        <main class="article-page">
            <PostCardStyles />
            <style>
                {r#"
                .article-page {
                    padding-top: 8rem;
                }
                .article-column {
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .article-page h1 {
                    font-size: clamp(2.25rem, 5vw, 4rem);
                    font-weight: 900;
                    line-height: 1.15;
                    margin: 1.5rem 0 2rem;
                }
                .article-meta {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1.5rem;
                    font-size: 0.875rem;
                    color: rgba(0, 0, 0, 0.6);
                }
                .article-meta span {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                .article-image {
                    max-width: 1200px;
                    margin: 4rem auto;
                    padding: 0 1.5rem;
                }
                .article-image img {
                    width: 100%;
                    aspect-ratio: 16 / 9;
                    object-fit: cover;
                    border-radius: 24px;
                }
                .article-body p {
                    font-size: 1.125rem;
                    line-height: 1.8;
                    color: rgba(0, 0, 0, 0.8);
                    margin: 0 0 1.5rem;
                }
                .related-section {
                    margin-top: 6rem;
                    padding: 6rem 0;
                }
                .related-section h2 {
                    font-size: clamp(2rem, 4vw, 3rem);
                    font-weight: 700;
                    margin: 0 0 3rem;
                }
                .related-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                @media (max-width: 1024px) {
                    .related-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
            <div class="article-column">
                <BackButton />
                <span class="tag-pill">{ post.tag }</span>
                <h1 class="fade-in-up">{ post.title }</h1>
                <div class="article-meta">
                    <span><Icon glyph={Glyph::User} size={16} />{ post.author }</span>
                    <span><Icon glyph={Glyph::Calendar} size={16} />{ post.date }</span>
                    <span><Icon glyph={Glyph::Clock} size={16} />{ post.read_time }</span>
                </div>
            </div>
            <div class="article-image">
                <img src={post.image} alt={post.image_alt} />
            </div>
            <article class="article-column article-body">
                { for post.content.iter().map(|paragraph| html! { <p>{ *paragraph }</p> }) }
            </article>

            if !more.is_empty() {
                <section class="related-section alt-bg">
                    <div class="container">
                        <h2>{"Related Articles"}</h2>
                        <div class="related-grid">
                            { for more.into_iter().map(|p| html! {
                                <PostCard key={p.id} post={p} />
                            }) }
                        </div>
                    </div>
                </section>
            }
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
                <BlogDetail id={props.id.clone()} />
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
        let html = render("missing-article").await;
        assert!(html.contains("Article Not Found"));
        assert!(html.contains("Back to Blog"));
    }

    #[tokio::test]
    async fn known_id_renders_the_article() {
        let html = render("seo-king").await;
        assert!(html.contains("Why SEO Is Still King"));
        assert!(!html.contains("Article Not Found"));
    }
}
