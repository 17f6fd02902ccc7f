use yew::prelude::*;

use crate::components::faq_item::FaqItem;
use crate::components::reveal_section::{RevealItem, RevealSection};
use crate::config;
use crate::content::{FaqGroup, FAQ_GROUPS};
use crate::motion::reveal::{Easing, Pose, Reveal, Stagger, Timing};

const TITLE: Reveal = Reveal::rise(50.0, 800.0).eased(Easing::EaseInOut);
const QUESTIONS: Reveal = Reveal::fade(500.0)
    .staggered(Stagger::new(150.0, Pose::lowered(30.0), Timing::new(500.0)).after(300.0));
const SUPPORT: Reveal = Reveal::rise(50.0, 800.0).eased(Easing::EaseInOut).staggered(
    Stagger::new(200.0, Pose::lowered(30.0), Timing {
        duration_ms: 800.0,
        delay_ms: 0.0,
        easing: Easing::EaseInOut,
    })
    .after(300.0),
);

#[derive(Properties, PartialEq)]
struct FaqSectionProps {
    group: &'static FaqGroup,
}

#[function_component(FaqSection)]
fn faq_section(props: &FaqSectionProps) -> Html {
    let group = props.group;

    html! {
        <div class="faq-section container narrow">
            <RevealSection reveal={TITLE} id={group.id}>
                <h2>{group.title}</h2>
            </RevealSection>
            <RevealSection reveal={QUESTIONS} items={group.entries.len()}>
                { for group.entries.iter().enumerate().map(|(i, entry)| html! {
                    <RevealItem index={i}>
                        <FaqItem question={entry.question} answer={entry.answer} />
                    </RevealItem>
                }) }
            </RevealSection>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <main class="faq-page">
            <section class="faq-hero grid-overlay">
                <h1>{"Frequently Asked Questions"}</h1>
                <p class="lead">{"Everything you need to know about training with Pushpedal."}</p>
            </section>

            { for FAQ_GROUPS.iter().map(|group| html! { <FaqSection group={group} /> }) }

            <RevealSection reveal={SUPPORT} items={2} id="support" class="band muted centered">
                <div class="container">
                    <h2>{"Need More Help?"}</h2>
                    <RevealItem index={0}>
                        <p class="lead">{"Contact our support team for any further assistance."}</p>
                    </RevealItem>
                    <RevealItem index={1} class="support-links">
                        <a href={format!("mailto:{}", config::SUPPORT_EMAIL)}>{"✉️ "}{config::SUPPORT_EMAIL}</a>
                        <a href={format!("tel:{}", config::PHONE_LINK)}>{"📞 "}{config::PHONE_DISPLAY}</a>
                    </RevealItem>
                </div>
            </RevealSection>

            <style>
                {r#"
                .faq-hero {
                    text-align: center;
                    padding: 6rem 2rem 3rem;
                }
                .faq-hero h1 {
                    font-size: clamp(2.5rem, 6vw, 4.5rem);
                    margin-bottom: 1rem;
                }
                .faq-section {
                    padding: 3rem 1.5rem;
                }
                .faq-item {
                    border: 1px solid var(--border);
                    border-radius: 1rem;
                    margin-bottom: 1rem;
                    overflow: hidden;
                    background: var(--muted);
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1.25rem 1.5rem;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.1rem;
                    text-align: left;
                    cursor: pointer;
                    transition: background-color 0.2s;
                }
                .faq-question:hover {
                    background-color: #1a1a1a;
                }
                .toggle-icon {
                    transition: transform 0.3s;
                }
                .faq-item.open .toggle-icon {
                    transform: rotate(180deg);
                }
                .faq-answer {
                    max-height: 0;
                    opacity: 0;
                    overflow: hidden;
                    padding: 0 1.5rem;
                    transition: max-height 0.3s ease-in-out, opacity 0.3s ease-in-out;
                }
                .faq-item.open .faq-answer {
                    max-height: 500px;
                    opacity: 1;
                    padding-bottom: 1.25rem;
                }
                .support-links {
                    display: flex;
                    justify-content: center;
                    gap: 2rem;
                    flex-wrap: wrap;
                }
                .support-links a {
                    color: #fff;
                }
                "#}
            </style>
        </main>
    }
}
