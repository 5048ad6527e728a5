use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icons::{Glyph, Icon};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct PageHeroProps {
    pub label: &'static str,
    #[prop_or_default]
    pub lead: Option<&'static str>,
    /// The headline; may contain accent spans.
    pub children: Children,
}

#[function_component(PageHero)]
pub fn page_hero(props: &PageHeroProps) -> Html {
    html! {
        <section class="page-hero">
            <div class="container">
                <div class="section-label fade-in-up"><span class="dot"></span>{ props.label }</div>
                <h1 class="fade-in-up">{ for props.children.iter() }</h1>
                if let Some(lead) = props.lead {
                    <p class="fade-in-up" style="animation-delay: 100ms;">{ lead }</p>
                }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct CtaSectionProps {
    pub title: &'static str,
    pub text: &'static str,
    pub button: &'static str,
    #[prop_or(false)]
    pub alt: bool,
}

/// Closing "talk to us" band linking to the contact page.
#[function_component(CtaSection)]
pub fn cta_section(props: &CtaSectionProps) -> Html {
    html! {
        <section class={classes!("cta-section", props.alt.then_some("alt-bg"))}>
            <h2>{ props.title }</h2>
            <p>{ props.text }</p>
            <Link<Route> to={Route::Contact} classes="cta-button">
                { props.button }
                <Icon glyph={Glyph::ArrowUpRight} size={20} />
            </Link<Route>>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct MissingRecordProps {
    pub title: &'static str,
    pub message: &'static str,
    pub back_label: &'static str,
    pub back_to: Route,
}

/// Shown by detail pages when the id in the URL matches nothing.
#[function_component(MissingRecord)]
pub fn missing_record(props: &MissingRecordProps) -> Html {
    html! {
        <section class="missing-record">
            <style>
                {r#"
                .missing-record {
                    min-height: 70vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding: 10rem 1.5rem 5rem;
                }
                .missing-record h1 {
                    font-size: clamp(2.25rem, 5vw, 3.75rem);
                    font-weight: 900;
                    margin: 0 0 1rem;
                }
                .missing-record p {
                    font-size: 1.25rem;
                    color: rgba(0, 0, 0, 0.6);
                    margin: 0 0 2.5rem;
                }
                "#}
            </style>
            <h1>{ props.title }</h1>
            <p>{ props.message }</p>
            <Link<Route> to={props.back_to.clone()} classes="cta-button">
                <Icon glyph={Glyph::ArrowLeft} size={20} />
                { props.back_label }
            </Link<Route>>
        </section>
    }
}

/// "Back" control that walks the browser history like the browser button.
#[function_component(BackButton)]
pub fn back_button() -> Html {
    let navigator = use_navigator();
    let onclick = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.back();
        }
    });

    html! {
        <>
            <style>
                {r#"
                .back-button {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    background: none;
                    border: none;
                    padding: 0;
                    margin-bottom: 2rem;
                    font-size: 0.875rem;
                    font-weight: 600;
                    color: rgba(0, 0, 0, 0.6);
                    cursor: pointer;
                    transition: color 0.2s ease;
                }
                .back-button:hover {
                    color: var(--brand-primary);
                }
                "#}
            </style>
            <button class="back-button" onclick={onclick}>
                <Icon glyph={Glyph::ArrowLeft} size={16} />
                {"Back"}
            </button>
        </>
    }
}
