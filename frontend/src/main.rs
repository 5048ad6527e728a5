use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod content;
mod effects;
mod scroll;
mod theme;

mod components {
    pub mod about_section;
    pub mod benefits_stack;
    pub mod blog_list;
    pub mod category_filter;
    pub mod featured_works;
    pub mod features;
    pub mod fill_text;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod icons;
    pub mod logo_marquee;
    pub mod page_sections;
    pub mod scrolling_banner;
    pub mod services_card;
    pub mod testimonials;
}

mod pages {
    pub mod about;
    pub mod blog;
    pub mod blog_detail;
    pub mod changelog;
    pub mod contact;
    pub mod home;
    pub mod legal;
    pub mod not_found;
    pub mod project_detail;
    pub mod services;
    pub mod styleguide;
    pub mod work;
}

use components::{footer::Footer, header::Header};
use pages::{
    about::About,
    blog::Blog,
    blog_detail::BlogDetail,
    changelog::Changelog,
    contact::Contact,
    home::Home,
    legal::{License, PrivacyPolicy, TermsOfService},
    not_found::NotFound,
    project_detail::ProjectDetail,
    services::Services,
    styleguide::Styleguide,
    work::Work,
};
use theme::GlobalStyles;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/work")]
    Work,
    #[at("/project/:id")]
    Project { id: String },
    #[at("/about")]
    About,
    #[at("/services")]
    Services,
    #[at("/blog")]
    Blog,
    #[at("/blog/:id")]
    BlogPost { id: String },
    #[at("/contact")]
    Contact,
    #[at("/privacy-policy")]
    PrivacyPolicy,
    #[at("/terms-of-service")]
    TermsOfService,
    #[at("/license")]
    License,
    #[at("/changelog")]
    Changelog,
    #[at("/styleguide")]
    Styleguide,
    // Reachable from the menus, unlike the catch-all below.
    #[at("/404")]
    NotFoundPage,
    #[not_found]
    #[at("/not-found")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Work => {
            info!("Rendering Work page");
            html! { <Work /> }
        },
        Route::Project { id } => {
            info!("Rendering Project page for {}", id);
            html! { <ProjectDetail id={id} /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        },
        Route::Blog => {
            info!("Rendering Blog page");
            html! { <Blog /> }
        },
        Route::BlogPost { id } => {
            info!("Rendering Blog post page for {}", id);
            html! { <BlogDetail id={id} /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::PrivacyPolicy => {
            info!("Rendering Privacy policy page");
            html! { <PrivacyPolicy /> }
        },
        Route::TermsOfService => {
            info!("Rendering Terms of service page");
            html! { <TermsOfService /> }
        },
        Route::License => {
            info!("Rendering License page");
            html! { <License /> }
        },
        Route::Changelog => {
            info!("Rendering Changelog page");
            html! { <Changelog /> }
        },
        Route::Styleguide => {
            info!("Rendering Styleguide page");
            html! { <Styleguide /> }
        },
        Route::NotFoundPage | Route::NotFound => {
            info!("Rendering Not found page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <GlobalStyles />
            <Header />
            <Switch<Route> render={switch} />
            <Footer />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(Level::Info) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_routes_carry_their_id() {
        assert_eq!(
            Route::recognize("/project/lumina-rebrand"),
            Some(Route::Project { id: "lumina-rebrand".into() })
        );
        assert_eq!(
            Route::recognize("/blog/seo-king"),
            Some(Route::BlogPost { id: "seo-king".into() })
        );
    }

    #[test]
    fn static_pages_are_recognized() {
        let cases = [
            ("/", Route::Home),
            ("/work", Route::Work),
            ("/about", Route::About),
            ("/services", Route::Services),
            ("/blog", Route::Blog),
            ("/contact", Route::Contact),
            ("/privacy-policy", Route::PrivacyPolicy),
            ("/terms-of-service", Route::TermsOfService),
            ("/license", Route::License),
            ("/changelog", Route::Changelog),
            ("/styleguide", Route::Styleguide),
            ("/404", Route::NotFoundPage),
        ];
        for (path, route) in cases {
            assert_eq!(Route::recognize(path), Some(route.clone()), "{}", path);
            assert_eq!(route.to_path(), path);
        }
    }

    #[test]
    fn detail_paths_are_built_from_ids() {
        assert_eq!(Route::Project { id: "x".into() }.to_path(), "/project/x");
        assert_eq!(Route::BlogPost { id: "y".into() }.to_path(), "/blog/y");
    }
}
