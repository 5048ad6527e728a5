use yew::prelude::*;

use crate::components::{
    about_section::AboutSection, benefits_stack::BenefitsStack, blog_list::BlogList,
    featured_works::FeaturedWorks, features::Features, hero::Hero, logo_marquee::LogoMarquee,
    scrolling_banner::ScrollingBanner, services_card::ServicesCard, testimonials::Testimonials,
};

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <main class="home">
            <Hero />
            <Features />
            <ScrollingBanner />
            <AboutSection />
            <ServicesCard />
            <BenefitsStack />
            <FeaturedWorks />
            <LogoMarquee />
            <Testimonials />
            <BlogList />
        </main>
    }
}
