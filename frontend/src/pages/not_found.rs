use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icons::{Glyph, Icon};
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <main class="not-found-page">
            <style>
                {r#"
                .not-found-page {
                    min-height: 80vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding: 10rem 1.5rem 6rem;
                }
                .not-found-page .not-found-code {
                    font-size: clamp(8rem, 25vw, 16rem);
                    font-weight: 900;
                    line-height: 1;
                    color: var(--brand-primary);
                    margin: 0;
                }
                .not-found-page h1 {
                    font-size: clamp(2rem, 4vw, 3rem);
                    font-weight: 700;
                    margin: 1rem 0;
                }
                .not-found-page p {
                    font-size: 1.25rem;
                    color: rgba(0, 0, 0, 0.6);
                    max-width: 32rem;
                    margin: 0 0 2.5rem;
                }
                "#}
            </style>
            <div class="section-label"><span class="dot"></span>{"Error 404"}</div>
            <p class="not-found-code">{"404"}</p>
            <h1>{"Page not found"}</h1>
            <p>{"The page you're looking for doesn't exist or has been moved."}</p>
            <Link<Route> to={Route::Home} classes="cta-button">
                <Icon glyph={Glyph::ArrowLeft} size={20} />
                {"Back to Home"}
            </Link<Route>>
        </main>
    }
}
