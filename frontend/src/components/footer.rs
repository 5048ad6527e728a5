use chrono::{Datelike, Utc};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icons::{Glyph, Icon};
use crate::content::agency::CONTACT;
use crate::Route;

static MAIN_LINKS: [(&str, Route); 5] = [
    ("Home", Route::Home),
    ("About us", Route::About),
    ("Service", Route::Services),
    ("Works", Route::Work),
    ("Blogs", Route::Blog),
];

static SECONDARY_LINKS: [(&str, Route); 4] = [
    ("404", Route::NotFoundPage),
    ("Styleguide", Route::Styleguide),
    ("License", Route::License),
    ("Changelog", Route::Changelog),
];

static LEGAL_LINKS: [(&str, Route); 2] = [
    ("Privacy policy", Route::PrivacyPolicy),
    ("Terms of service", Route::TermsOfService),
];

const SOCIAL: [(Glyph, &str); 4] = [
    (Glyph::Facebook, "Facebook"),
    (Glyph::Twitter, "Twitter"),
    (Glyph::Linkedin, "LinkedIn"),
    (Glyph::Instagram, "Instagram"),
];

pub fn copyright_line(year: i32) -> String {
    format!("©Mitchy {}", year)
}

fn link_column(links: &[(&'static str, Route)]) -> Html {
    html! {
        <div class="footer-column">
            { for links.iter().map(|(label, route)| html! {
                <Link<Route> to={route.clone()} classes="footer-link">{ *label }</Link<Route>>
            }) }
        </div>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Utc::now().year();

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                .site-footer {
                    background: #000;
                    padding: 5rem 3rem;
                }
                .footer-card {
                    max-width: 1400px;
                    margin: 0 auto;
                    overflow: hidden;
                    border-radius: 48px;
                    background: #ff4800;
                    color: #fff;
                    padding: 5rem 4rem;
                }
                .footer-top {
                    display: grid;
                    grid-template-columns: 1fr 1fr 1fr 1fr auto;
                    gap: 2rem;
                    padding-bottom: 4rem;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                }
                .footer-column {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }
                .footer-link, .footer-column a {
                    font-weight: 500;
                    transition: opacity 0.2s ease;
                }
                .footer-link:hover, .footer-column a:hover {
                    opacity: 0.7;
                }
                .footer-cta {
                    width: fit-content;
                    border-radius: 999px;
                    background: #fff;
                    color: #000;
                    padding: 1rem 2rem;
                    font-weight: 600;
                    transition: all 0.3s ease;
                }
                .footer-cta:hover {
                    transform: scale(1.05);
                }
                .footer-hours {
                    margin-top: 1.5rem;
                }
                .footer-hours strong {
                    display: block;
                    font-size: 1.5rem;
                }
                .footer-wordmark {
                    font-size: clamp(80px, 15vw, 220px);
                    font-weight: 700;
                    line-height: 1;
                    margin: 4rem 0 2rem;
                }
                .footer-bottom {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-end;
                    gap: 2rem;
                    flex-wrap: wrap;
                }
                .footer-bottom p {
                    font-size: 0.875rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    color: rgba(255, 255, 255, 0.8);
                }
                .social-row {
                    display: flex;
                    gap: 0.75rem;
                }
                .social-row a {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 48px;
                    height: 48px;
                    border-radius: 50%;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    transition: all 0.3s ease;
                }
                .social-row a:hover {
                    transform: scale(1.1);
                    background: rgba(255, 255, 255, 0.1);
                }
                address {
                    font-style: normal;
                    line-height: 1.6;
                    margin-top: 0.5rem;
                }
                @media (max-width: 1024px) {
                    .footer-top {
                        grid-template-columns: 1fr 1fr;
                    }
                    .footer-card {
                        padding: 3rem 2rem;
                    }
                }
                @media (max-width: 640px) {
                    .site-footer {
                        padding: 3rem 1.5rem;
                    }
                    .footer-top {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
            <div class="footer-card">
                <div class="footer-top">
                    <div class="footer-column">
                        <p>{ copyright_line(year) }</p>
                        <Link<Route> to={Route::Contact} classes="footer-cta">{"Get Started Today"}</Link<Route>>
                    </div>
                    <div class="footer-column">
                        <a href={format!("tel:{}", CONTACT.phone)}>{ CONTACT.phone }</a>
                        <a href={format!("mailto:{}", CONTACT.email)}>{ CONTACT.email }</a>
                        <address>
                            { for CONTACT.address.iter().map(|line| html! { <>{ *line }<br /></> }) }
                        </address>
                    </div>
                    { link_column(&MAIN_LINKS) }
                    { link_column(&SECONDARY_LINKS) }
                    <div class="footer-column">
                        { for LEGAL_LINKS.iter().map(|(label, route)| html! {
                            <Link<Route> to={route.clone()} classes="footer-link">{ *label }</Link<Route>>
                        }) }
                        <div class="footer-hours">
                            <span>{"Mo—Fr"}</span>
                            <strong>{"9am—6pm"}</strong>
                        </div>
                    </div>
                </div>
                <h2 class="footer-wordmark">{"Mitchy."}</h2>
                <div class="footer-bottom">
                    <p>{"Powered by Yew."}</p>
                    <div class="social-row">
                        { for SOCIAL.iter().map(|(glyph, label)| html! {
                            <a href="#" aria-label={*label}>
                                <Icon glyph={*glyph} size={20} />
                            </a>
                        }) }
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_carries_the_given_year() {
        assert_eq!(copyright_line(2025), "©Mitchy 2025");
    }

    #[test]
    fn legal_column_points_at_legal_routes() {
        let paths: Vec<String> = LEGAL_LINKS.iter().map(|(_, r)| r.to_path()).collect();
        assert_eq!(paths, vec!["/privacy-policy", "/terms-of-service"]);
    }
}
