use wasm_bindgen::closure::Closure;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icons::{Glyph, Icon};
use crate::scroll::{listen_passive, unlisten};
use crate::Route;

/// Pixels of vertical scroll after which the bar turns opaque.
const SCROLLED_THRESHOLD: f64 = 20.0;

pub fn scrolled_past_threshold(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD
}

pub fn primary_links() -> Vec<(&'static str, Route)> {
    vec![
        ("Home", Route::Home),
        ("Work", Route::Work),
        ("About", Route::About),
        ("Service", Route::Services),
        ("Blog", Route::Blog),
        ("Contact", Route::Contact),
    ]
}

pub fn page_links() -> Vec<(&'static str, Route)> {
    vec![
        ("Styleguide", Route::Styleguide),
        ("License", Route::License),
        ("Changelog", Route::Changelog),
        ("Privacy policy", Route::PrivacyPolicy),
        ("Terms of service", Route::TermsOfService),
        ("404", Route::NotFoundPage),
    ]
}

#[function_component(Header)]
pub fn header() -> Html {
    let is_scrolled = use_state_eq(|| false);
    let menu_open = use_state(|| false);
    let pages_open = use_state(|| false);
    let current = use_route::<Route>();

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let listener = window.clone().map(|window| {
                    let callback = {
                        let window = window.clone();
                        Closure::wrap(Box::new(move || {
                            let y = window.scroll_y().unwrap_or(0.0);
                            is_scrolled.set(scrolled_past_threshold(y));
                        }) as Box<dyn FnMut()>)
                    };
                    listen_passive(&window, "scroll", &callback);
                    callback
                });

                move || {
                    if let (Some(window), Some(callback)) = (window, listener) {
                        unlisten(&window, "scroll", &callback);
                    }
                }
            },
            (),
        );
    }

    // Any navigation closes the open menus.
    {
        let menu_open = menu_open.clone();
        let pages_open = pages_open.clone();
        use_effect_with_deps(
            move |_| {
                menu_open.set(false);
                pages_open.set(false);
                || ()
            },
            current.clone(),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let toggle_pages = {
        let pages_open = pages_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            pages_open.set(!*pages_open);
        })
    };

    let link_class = |route: &Route| {
        if current.as_ref() == Some(route) {
            classes!("nav-pill", "active")
        } else {
            classes!("nav-pill")
        }
    };

    html! {
        <header class={classes!("site-header", (*is_scrolled).then_some("scrolled"))}>
            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    padding: 1rem 2rem;
                    background: rgba(238, 233, 227, 0.9);
                    backdrop-filter: blur(4px);
                    transition: all 0.3s ease;
                }
                .site-header.scrolled {
                    background: rgba(238, 233, 227, 0.95);
                    backdrop-filter: blur(12px);
                    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.08);
                }
                .header-inner {
                    max-width: 1600px;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .brand {
                    font-size: 1.5rem;
                    font-weight: 700;
                    transition: color 0.2s ease;
                }
                .brand:hover {
                    color: var(--brand-primary);
                }
                .nav-center, .nav-actions {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                .nav-pill {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    border-radius: 999px;
                    padding: 0.5rem 1.25rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                    border: 1px solid rgba(0, 0, 0, 0.1);
                    background: rgba(255, 255, 255, 0.7);
                    cursor: pointer;
                    transition: all 0.2s ease;
                }
                .nav-pill:hover, .nav-pill.active {
                    background: #fff;
                    border-color: rgba(255, 69, 0, 0.3);
                }
                .nav-book {
                    border-radius: 999px;
                    padding: 0.625rem 1.5rem;
                    background: var(--brand-primary);
                    color: #fff;
                    font-weight: 600;
                    font-size: 0.875rem;
                    transition: all 0.2s ease;
                }
                .nav-book:hover {
                    background: var(--brand-primary-hover);
                    transform: translateY(-2px);
                }
                .pages-menu {
                    position: relative;
                }
                .pages-dropdown {
                    position: absolute;
                    right: 0;
                    top: calc(100% + 0.5rem);
                    min-width: 200px;
                    background: #fff;
                    border-radius: 12px;
                    box-shadow: 0 16px 40px rgba(0, 0, 0, 0.12);
                    padding: 0.5rem;
                    display: flex;
                    flex-direction: column;
                }
                .pages-dropdown a {
                    padding: 0.625rem 1rem;
                    border-radius: 8px;
                    font-size: 0.875rem;
                }
                .pages-dropdown a:hover {
                    background: var(--bg-secondary);
                    color: var(--brand-primary);
                }
                .burger {
                    display: none;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.25rem;
                }
                .mobile-menu {
                    display: none;
                }
                @media (max-width: 1024px) {
                    .nav-center {
                        display: none;
                    }
                    .burger {
                        display: inline-flex;
                    }
                    .mobile-menu.open {
                        display: flex;
                        flex-direction: column;
                        gap: 0.25rem;
                        padding: 1rem 0 0.5rem;
                    }
                    .mobile-menu a {
                        padding: 0.75rem 0;
                        font-size: 1.125rem;
                        font-weight: 600;
                        border-bottom: 1px solid rgba(0, 0, 0, 0.06);
                    }
                }
                @media (max-width: 640px) {
                    .pages-menu {
                        display: none;
                    }
                }
                "#}
            </style>
            <div class="header-inner">
                <Link<Route> to={Route::Home} classes="brand">{"Mitchy."}</Link<Route>>

                <nav class="nav-center">
                    { for primary_links().into_iter().map(|(label, route)| html! {
                        <Link<Route> to={route.clone()} classes={link_class(&route)}>{ label }</Link<Route>>
                    }) }
                </nav>

                <div class="nav-actions">
                    <div class="pages-menu">
                        <button class="nav-pill" onclick={toggle_pages} aria-expanded={(*pages_open).to_string()}>
                            {"Pages"}
                            <Icon glyph={Glyph::ChevronDown} size={16} />
                        </button>
                        if *pages_open {
                            <div class="pages-dropdown">
                                { for page_links().into_iter().map(|(label, route)| html! {
                                    <Link<Route> to={route}>{ label }</Link<Route>>
                                }) }
                            </div>
                        }
                    </div>
                    <Link<Route> to={Route::Contact} classes="nav-book">{"Book a Call"}</Link<Route>>
                    <button class="burger" onclick={toggle_menu} aria-label="Toggle menu">
                        <Icon glyph={if *menu_open { Glyph::Close } else { Glyph::Menu }} />
                    </button>
                </div>
            </div>
            <nav class={classes!("mobile-menu", (*menu_open).then_some("open"))}>
                { for primary_links().into_iter().chain(page_links()).map(|(label, route)| html! {
                    <Link<Route> to={route}>{ label }</Link<Route>>
                }) }
            </nav>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_turns_solid_just_past_threshold() {
        assert!(!scrolled_past_threshold(0.0));
        assert!(!scrolled_past_threshold(20.0));
        assert!(scrolled_past_threshold(20.5));
    }

    #[test]
    fn every_link_points_at_a_distinct_route() {
        let routes: Vec<Route> = primary_links()
            .into_iter()
            .chain(page_links())
            .map(|(_, route)| route)
            .collect();
        for (i, route) in routes.iter().enumerate() {
            assert!(!routes[i + 1..].contains(route), "{}", route.to_path());
        }
    }
}
