use yew::prelude::*;

use crate::components::page_sections::CtaSection;
use crate::content::legal::{LegalDocument, LICENSE, PRIVACY_POLICY, TERMS_OF_SERVICE};

#[derive(Properties, PartialEq)]
pub struct LegalPageProps {
    pub document: &'static LegalDocument,
}

/// Renders one static legal document followed by a contact prompt.
#[function_component(LegalPage)]
pub fn legal_page(props: &LegalPageProps) -> Html {
    let doc = props.document;

    html! {
        <main class="legal-page">
            <style>
                {r#"
                .legal-column {
                    max-width: 900px;
                    margin: 0 auto;
                }
                .legal-hero {
                    padding: 12rem 1.5rem 5rem;
                }
                .legal-hero h1 {
                    font-size: clamp(3rem, 7vw, 4.5rem);
                    font-weight: 900;
                    line-height: 1.1;
                    margin: 1.5rem 0 2rem;
                }
                .legal-updated {
                    font-size: 0.875rem;
                    color: rgba(0, 0, 0, 0.5);
                    margin: 0 0 1.5rem;
                }
                .legal-intro {
                    font-size: 1.25rem;
                    line-height: 1.7;
                    color: rgba(0, 0, 0, 0.7);
                }
                .legal-body {
                    padding: 6rem 1.5rem;
                }
                .legal-body article + article {
                    margin-top: 3rem;
                }
                .legal-body h2 {
                    font-size: clamp(1.75rem, 3vw, 2.25rem);
                    font-weight: 700;
                    margin: 0 0 1.5rem;
                }
                .legal-body p, .legal-body li {
                    font-size: 1.125rem;
                    line-height: 1.7;
                    color: rgba(0, 0, 0, 0.75);
                }
                .legal-body ul {
                    list-style: none;
                    padding-left: 1.5rem;
                }
                .legal-body li {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.75rem;
                }
                .legal-body li .dot {
                    width: 6px;
                    height: 6px;
                    margin-top: 0.7rem;
                }
                @media (max-width: 768px) {
                    .legal-hero {
                        padding: 8rem 1.5rem 3rem;
                    }
                }
                "#}
            </style>
            <section class="legal-hero">
                <div class="legal-column">
                    <div class="section-label fade-in-up"><span class="dot"></span>{"Legal"}</div>
                    <h1 class="fade-in-up">{ doc.title }</h1>
                    if let Some(updated) = doc.last_updated {
                        <p class="legal-updated">{ format!("Last updated: {}", updated) }</p>
                    }
                    if let Some(intro) = doc.intro {
                        <p class="legal-intro">{ intro }</p>
                    }
                </div>
            </section>
            <section class="legal-body alt-bg">
                <div class="legal-column">
                    { for doc.sections.iter().map(|section| html! {
                        <article key={section.title}>
                            <h2>{ section.title }</h2>
                            { for section.paragraphs.iter().map(|p| html! { <p>{ *p }</p> }) }
                            if !section.bullets.is_empty() {
                                <ul>
                                    { for section.bullets.iter().map(|b| html! {
                                        <li><span class="dot"></span><span>{ *b }</span></li>
                                    }) }
                                </ul>
                            }
                        </article>
                    }) }
                </div>
            </section>
            <CtaSection title={doc.questions_heading} text={doc.questions_text} button="Contact Us" />
        </main>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! { <LegalPage document={&PRIVACY_POLICY} /> }
}

#[function_component(TermsOfService)]
pub fn terms_of_service() -> Html {
    html! { <LegalPage document={&TERMS_OF_SERVICE} /> }
}

#[function_component(License)]
pub fn license() -> Html {
    html! { <LegalPage document={&LICENSE} /> }
}
