use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::reveal_section::{RevealItem, RevealSection, Trigger};
use crate::config;
use crate::motion::reveal::{Pose, Reveal, Stagger, Timing};

const HEADING: Reveal = Reveal::fade(500.0).staggered(
    Stagger::new(200.0, Pose::lowered(-50.0), Timing::new(500.0)).after(300.0),
);
const CARDS: Reveal = Reveal::new(Pose::SHOWN, Timing::new(0.0))
    .staggered(Stagger::new(200.0, Pose::lowered(30.0), Timing::new(500.0)).after(200.0));
const MAP: Reveal = Reveal::rise(30.0, 500.0).delayed(1000.0);

const SOCIAL: &[(&str, &str)] = &[
    ("Facebook", "#"),
    ("Instagram", "#"),
    ("Twitter", "#"),
    ("LinkedIn", "#"),
];

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <main class="contact-page grid-overlay">
            <div class="container">
                <RevealSection reveal={HEADING} trigger={Trigger::Mount} items={2} class="centered">
                    <RevealItem index={0}><h1>{"Contact Us"}</h1></RevealItem>
                    <RevealItem index={1}>
                        <p class="lead">
                            {"We'd love to hear from you! Get in touch with us for any inquiries or registration."}
                        </p>
                    </RevealItem>
                </RevealSection>

                <RevealSection reveal={CARDS} trigger={Trigger::Mount} items={4} class="grid three">
                    <RevealItem index={0}>
                        <ContactForm />
                    </RevealItem>
                    <RevealItem index={1} class="card">
                        <h3>{"Our Address"}</h3>
                        <p><span class="card-icon inline">{"📍"}</span>{config::ADDRESS}</p>
                    </RevealItem>
                    <RevealItem index={2} class="card">
                        <h3>{"Contact Us"}</h3>
                        <p><span class="card-icon inline">{"📞"}</span>{config::PHONE_DISPLAY}</p>
                        <p><span class="card-icon inline">{"✉️"}</span>{config::CONTACT_EMAIL}</p>
                    </RevealItem>
                    <RevealItem index={3} class="card">
                        <h3>{"Follow Us"}</h3>
                        <div class="social-row">
                            { for SOCIAL.iter().map(|(name, href)| html! {
                                <a href={*href} class="social-link">{*name}</a>
                            }) }
                        </div>
                    </RevealItem>
                </RevealSection>

                <RevealSection reveal={MAP} trigger={Trigger::Mount} class="map-frame">
                    <iframe
                        src={config::MAP_EMBED_URL}
                        width="100%"
                        height="450"
                        style="border: 0;"
                        loading="lazy"
                        referrerpolicy="no-referrer-when-downgrade"
                        title="Map to the academy"
                    ></iframe>
                </RevealSection>
            </div>
            <style>
                {r#"
                .contact-page {
                    padding: 6rem 0;
                    min-height: 100vh;
                }
                .contact-page h1 {
                    font-size: clamp(3rem, 8vw, 6rem);
                    margin-bottom: 2rem;
                }
                .form-field {
                    margin-bottom: 1rem;
                }
                .form-field label {
                    display: block;
                    font-size: 0.875rem;
                    font-weight: 700;
                    margin-bottom: 0.5rem;
                }
                .form-field input,
                .form-field textarea {
                    width: 100%;
                    padding: 0.5rem 0.75rem;
                    border-radius: 0.25rem;
                    border: 1px solid var(--border);
                    background: #000;
                    color: #fff;
                }
                .form-notice.success { color: var(--secondary); }
                .form-notice.error { color: #ff6b6b; }
                .social-row {
                    display: flex;
                    gap: 1rem;
                    flex-wrap: wrap;
                }
                .social-link {
                    color: var(--primary);
                }
                .card-icon.inline {
                    font-size: 1rem;
                    margin-right: 0.5rem;
                }
                .map-frame {
                    margin-top: 3rem;
                    border-radius: 1rem;
                    overflow: hidden;
                }
                "#}
            </style>
        </main>
    }
}
