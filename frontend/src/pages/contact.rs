use gloo_timers::future::TimeoutFuture;
use log::{info, warn};
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::icons::{Glyph, Icon};
use crate::components::page_sections::PageHero;
use crate::content::agency::CONTACT;

/// How long the simulated submission keeps the button in its sending state.
const SEND_DELAY_MS: u32 = 1500;

const THANK_YOU: &str = "Thank you for your message! We'll get back to you soon.";

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ContactField {
    Name,
    Email,
    Company,
    Message,
}

impl ContactField {
    pub fn set(self, form: &mut ContactForm, value: String) {
        match self {
            ContactField::Name => form.name = value,
            ContactField::Email => form.email = value,
            ContactField::Company => form.company = value,
            ContactField::Message => form.message = value,
        }
    }
}

impl ContactForm {
    /// Name, an address with an `@`, and a message are required. Company is optional.
    pub fn is_ready(&self) -> bool {
        !self.name.trim().is_empty()
            && self.email.contains('@')
            && !self.message.trim().is_empty()
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_state(ContactForm::default);
    let is_submitting = use_state(|| false);

    let update = |field: ContactField| {
        let form = form.clone();
        move |value: String| {
            let mut next = (*form).clone();
            field.set(&mut next, value);
            form.set(next);
        }
    };

    let on_input = |field: ContactField| {
        let update = update(field);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            update(input.value());
        })
    };

    let on_message = {
        let update = update(ContactField::Message);
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            update(input.value());
        })
    };

    let onsubmit = {
        let form = form.clone();
        let is_submitting = is_submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }
            if !form.is_ready() {
                warn!("Contact form submitted with missing fields");
                return;
            }

            is_submitting.set(true);
            let form = form.clone();
            let is_submitting = is_submitting.clone();
            spawn_local(async move {
                TimeoutFuture::new(SEND_DELAY_MS).await;
                match serde_json::to_string(&*form) {
                    Ok(payload) => info!("Form submitted: {}", payload),
                    Err(e) => warn!("Failed to serialize contact form: {}", e),
                }
                if let Some(window) = web_sys::window() {
                    if let Err(e) = window.alert_with_message(THANK_YOU) {
                        warn!("Failed to show confirmation: {:?}", e);
                    }
                }
                form.set(ContactForm::default());
                is_submitting.set(false);
            });
        })
    };

    html! {
        <main class="contact-page">
            <style>
                {r#"
                .contact-section {
                    padding: 4rem 0 8rem;
                }
                .contact-grid {
                    display: grid;
                    grid-template-columns: 7fr 5fr;
                    gap: 4rem;
                }
                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .contact-form label {
                    display: block;
                    font-size: 0.875rem;
                    font-weight: 600;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    margin-bottom: 0.5rem;
                }
                .contact-form input, .contact-form textarea {
                    width: 100%;
                    font: inherit;
                    font-size: 1rem;
                    background: #fff;
                    border: 1px solid rgba(0, 0, 0, 0.1);
                    border-radius: 12px;
                    padding: 1rem;
                    outline: none;
                    transition: border-color 0.2s ease;
                }
                .contact-form input {
                    height: 3.5rem;
                }
                .contact-form textarea {
                    min-height: 200px;
                    resize: none;
                }
                .contact-form input:focus, .contact-form textarea:focus {
                    border-color: var(--brand-primary);
                }
                .contact-form .cta-button {
                    justify-content: center;
                    width: 100%;
                    height: 3.5rem;
                }
                .contact-cards {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .contact-card {
                    display: flex;
                    align-items: flex-start;
                    gap: 1rem;
                    padding: 1.5rem;
                }
                .contact-card-icon {
                    flex-shrink: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 48px;
                    height: 48px;
                    border-radius: 50%;
                    background: rgba(255, 69, 0, 0.1);
                    color: var(--brand-primary);
                }
                .contact-card h3 {
                    font-size: 1.125rem;
                    font-weight: 600;
                    margin: 0 0 0.5rem;
                }
                .contact-card a, .contact-card address {
                    font-style: normal;
                    line-height: 1.6;
                    color: rgba(0, 0, 0, 0.7);
                    transition: color 0.2s ease;
                }
                .contact-card a:hover {
                    color: var(--brand-primary);
                }
                .office-hours {
                    margin-top: 2rem;
                    padding: 2rem;
                    border-radius: 16px;
                }
                .office-hours h3 {
                    font-size: 1.125rem;
                    font-weight: 600;
                    margin: 0 0 1rem;
                }
                .office-hours p {
                    margin: 0 0 0.5rem;
                    color: rgba(255, 255, 255, 0.7);
                }
                .office-hours strong {
                    font-size: 1.5rem;
                }
                .response-section {
                    padding: 8rem 1.5rem;
                    text-align: center;
                }
                .response-section h2 {
                    font-size: clamp(2.25rem, 5vw, 3.75rem);
                    font-weight: 700;
                    margin: 1.5rem 0;
                }
                .response-section p {
                    font-size: 1.125rem;
                    color: rgba(0, 0, 0, 0.7);
                    max-width: 42rem;
                    margin: 0 auto;
                }
                @media (max-width: 1024px) {
                    .contact-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
            <PageHero
                label="Get In Touch"
                lead="Have a project in mind? We'd love to hear from you. Send us a message and we'll respond as soon as possible."
            >
                {"Let's build something "}<span class="accent">{"amazing"}</span>{" together"}
            </PageHero>

            <section class="contact-section">
                <div class="container contact-grid">
                    <form class="contact-form" onsubmit={onsubmit}>
                        <div>
                            <label for="name">{"Your Name *"}</label>
                            <input
                                id="name"
                                name="name"
                                type="text"
                                required=true
                                placeholder="John Doe"
                                value={form.name.clone()}
                                oninput={on_input(ContactField::Name)}
                            />
                        </div>
                        <div>
                            <label for="email">{"Email Address *"}</label>
                            <input
                                id="email"
                                name="email"
                                type="email"
                                required=true
                                placeholder="john@example.com"
                                value={form.email.clone()}
                                oninput={on_input(ContactField::Email)}
                            />
                        </div>
                        <div>
                            <label for="company">{"Company"}</label>
                            <input
                                id="company"
                                name="company"
                                type="text"
                                placeholder="Your Company Name"
                                value={form.company.clone()}
                                oninput={on_input(ContactField::Company)}
                            />
                        </div>
                        <div>
                            <label for="message">{"Message *"}</label>
                            <textarea
                                id="message"
                                name="message"
                                required=true
                                placeholder="Tell us about your project..."
                                value={form.message.clone()}
                                oninput={on_message}
                            />
                        </div>
                        <button type="submit" class="cta-button" disabled={*is_submitting}>
                            if *is_submitting {
                                {"Sending..."}
                            } else {
                                {"Send Message"}
                                <Icon glyph={Glyph::Send} size={18} />
                            }
                        </button>
                    </form>

                    <div>
                        <div class="contact-cards">
                            <div class="card contact-card">
                                <div class="contact-card-icon"><Icon glyph={Glyph::Mail} size={20} /></div>
                                <div>
                                    <h3>{"Email"}</h3>
                                    <a href={format!("mailto:{}", CONTACT.email)}>{ CONTACT.email }</a>
                                </div>
                            </div>
                            <div class="card contact-card">
                                <div class="contact-card-icon"><Icon glyph={Glyph::Phone} size={20} /></div>
                                <div>
                                    <h3>{"Phone"}</h3>
                                    <a href={format!("tel:{}", CONTACT.phone)}>{ CONTACT.phone }</a>
                                </div>
                            </div>
                            <div class="card contact-card">
                                <div class="contact-card-icon"><Icon glyph={Glyph::MapPin} size={20} /></div>
                                <div>
                                    <h3>{"Office"}</h3>
                                    <address>
                                        { for CONTACT.address.iter().map(|line| html! { <>{ *line }<br /></> }) }
                                    </address>
                                </div>
                            </div>
                        </div>
                        <div class="office-hours dark-bg">
                            <h3>{"Office Hours"}</h3>
                            <p>{ CONTACT.hours[0] }</p>
                            <strong>{ CONTACT.hours[1] }</strong>
                        </div>
                    </div>
                </div>
            </section>

            <section class="response-section alt-bg">
                <div class="section-label"><span class="dot"></span>{"Quick Response"}</div>
                <h2>{"We typically respond within 24 hours"}</h2>
                <p>
                    {"Our team is here to help you with any questions about our services, pricing, or how we can work together on your next project."}
                </p>
            </section>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            company: String::new(),
            message: "Hello".into(),
        }
    }

    #[test]
    fn complete_form_is_ready_without_company() {
        assert!(filled().is_ready());
    }

    #[test]
    fn email_needs_an_at_sign() {
        let mut form = filled();
        ContactField::Email.set(&mut form, "ada.example.com".into());
        assert!(!form.is_ready());
    }

    #[test]
    fn blank_name_or_message_blocks_submission() {
        let mut form = filled();
        ContactField::Name.set(&mut form, "   ".into());
        assert!(!form.is_ready());

        let mut form = filled();
        ContactField::Message.set(&mut form, String::new());
        assert!(!form.is_ready());
    }

    #[test]
    fn payload_serializes_every_field() {
        let mut form = filled();
        ContactField::Company.set(&mut form, "Acme".into());
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["name"], "Ada");
        assert_eq!(json["email"], "ada@example.com");
        assert_eq!(json["company"], "Acme");
        assert_eq!(json["message"], "Hello");
    }

    #[test]
    fn default_form_is_empty() {
        assert!(!ContactForm::default().is_ready());
    }
}
