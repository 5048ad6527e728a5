use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icons::{Glyph, Icon};
use crate::components::page_sections::{CtaSection, PageHero};
use crate::content::agency::{Service, PRICING_POINTS, PROCESS_STEPS, SERVICES};
use crate::Route;

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    service: &'static Service,
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    let service = props.service;
    html! {
        <article class="card service-card">
            <div class="service-icon">
                <Icon glyph={Glyph::from(service.icon)} size={48} stroke_width={1.5} />
            </div>
            <h3>{ service.title }</h3>
            <p>{ service.description }</p>
            <ul class="service-features">
                { for service.features.iter().map(|feature| html! {
                    <li><span class="dot"></span>{ *feature }</li>
                }) }
            </ul>
            <Link<Route> to={Route::Contact} classes="service-link">
                {"Learn More"}
                <Icon glyph={Glyph::ArrowUpRight} size={16} />
            </Link<Route>>
        </article>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <main class="services-page">
            <style>
                {r#"
                .services-grid-section {
                    padding: 6rem 0 8rem;
                }
                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .service-card {
                    height: 100%;
                    padding: 2.5rem;
                    border-radius: 16px;
                }
                .service-icon {
                    color: var(--brand-primary);
                    transition: transform 0.3s ease;
                }
                .service-card:hover .service-icon {
                    transform: scale(1.1);
                }
                .service-card h3 {
                    font-size: 1.75rem;
                    font-weight: 700;
                    margin: 1.5rem 0 1rem;
                }
                .service-card > p {
                    color: rgba(0, 0, 0, 0.7);
                    line-height: 1.6;
                }
                .service-features {
                    list-style: none;
                    padding: 1rem 0 0;
                    margin: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    font-size: 0.875rem;
                }
                .service-features li {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }
                .service-features .dot {
                    width: 6px;
                    height: 6px;
                }
                .service-link {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-top: 1.5rem;
                    font-size: 0.875rem;
                    font-weight: 600;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    color: var(--brand-primary);
                    transition: gap 0.3s ease;
                }
                .service-link:hover {
                    gap: 0.75rem;
                }
                .process-section {
                    padding: 8rem 0;
                }
                .process-section h2 {
                    font-size: clamp(2.25rem, 5vw, 3.75rem);
                    font-weight: 700;
                    margin: 1.5rem 0;
                }
                .process-intro {
                    font-size: 1.125rem;
                    color: rgba(255, 255, 255, 0.7);
                    max-width: 42rem;
                    margin-bottom: 4rem;
                }
                .process-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 4rem;
                }
                .process-step {
                    display: flex;
                    gap: 1.5rem;
                    align-items: flex-start;
                }
                .process-number {
                    font-size: clamp(3rem, 5vw, 3.75rem);
                    font-weight: 900;
                    color: rgba(255, 69, 0, 0.2);
                    transition: color 0.3s ease;
                }
                .process-step:hover .process-number {
                    color: rgba(255, 69, 0, 0.4);
                }
                .process-step h3 {
                    font-size: 1.75rem;
                    font-weight: 700;
                    margin: 0.5rem 0 0.75rem;
                }
                .process-step p {
                    color: rgba(255, 255, 255, 0.7);
                    line-height: 1.6;
                    margin: 0;
                }
                .pricing-section {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 8rem 1.5rem;
                    text-align: center;
                }
                .pricing-section h2 {
                    font-size: clamp(2.25rem, 5vw, 3.75rem);
                    font-weight: 700;
                    margin: 1.5rem 0 2rem;
                }
                .pricing-section > p {
                    font-size: 1.25rem;
                    line-height: 1.7;
                    color: rgba(0, 0, 0, 0.7);
                    max-width: 48rem;
                    margin: 0 auto;
                }
                .pricing-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    margin-top: 4rem;
                    text-align: left;
                }
                .pricing-point {
                    padding: 2rem;
                }
                .pricing-point .icon {
                    color: var(--brand-primary);
                    margin-bottom: 1rem;
                }
                .pricing-point h3 {
                    font-size: 1.25rem;
                    font-weight: 700;
                    margin: 0 0 0.75rem;
                }
                .pricing-point p {
                    color: rgba(0, 0, 0, 0.7);
                    margin: 0;
                }
                @media (max-width: 1024px) {
                    .services-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                    .pricing-grid, .process-grid {
                        grid-template-columns: 1fr;
                    }
                }
                @media (max-width: 640px) {
                    .services-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
            <PageHero
                label="What We Do"
                lead="From strategy to execution, we provide comprehensive digital services designed to help your business thrive in the modern marketplace."
            >
                {"Services that drive "}<span class="accent">{"growth"}</span>
                {" and "}<span class="accent">{"success"}</span>
            </PageHero>

            <section class="services-grid-section alt-bg">
                <div class="container services-grid">
                    { for SERVICES.iter().enumerate().map(|(i, service)| html! {
                        <div class="fade-in-up" key={service.id} style={format!("animation-delay: {}ms;", i * 80)}>
                            <ServiceCard service={service} />
                        </div>
                    }) }
                </div>
            </section>

            <section class="process-section dark-bg">
                <div class="container">
                    <div class="section-label light"><span class="dot"></span>{"Our Process"}</div>
                    <h2>{"How we work"}</h2>
                    <p class="process-intro">
                        {"A proven methodology that ensures every project is delivered on time, on budget, and exceeds expectations."}
                    </p>
                    <div class="process-grid">
                        { for PROCESS_STEPS.iter().map(|step| html! {
                            <div class="process-step" key={step.number}>
                                <div class="process-number">{ step.number }</div>
                                <div>
                                    <h3>{ step.title }</h3>
                                    <p>{ step.description }</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="pricing-section">
                <div class="section-label"><span class="dot"></span>{"Pricing"}</div>
                <h2>{"Flexible subscription model"}</h2>
                <p>
                    {"We offer a transparent, fixed monthly subscription that gives you unlimited access to our design and development services. No hidden costs, no surprises, just continuous support that fits your budget."}
                </p>
                <div class="pricing-grid">
                    { for PRICING_POINTS.iter().map(|point| html! {
                        <div class="card pricing-point" key={point.title}>
                            <Icon glyph={Glyph::from(point.icon)} size={40} stroke_width={1.5} class="icon" />
                            <h3>{ point.title }</h3>
                            <p>{ point.description }</p>
                        </div>
                    }) }
                </div>
            </section>

            <CtaSection
                title="Let's bring your vision to life"
                text="Ready to get started? Schedule a call with our team to discuss your project."
                button="Get Started"
                alt=true
            />
        </main>
    }
}
