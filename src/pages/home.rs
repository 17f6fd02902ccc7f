use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::reveal_section::{RevealItem, RevealSection};
use crate::content::{APPROACH, PARENT_REVIEWS, PARTNERS, PROGRAMS};
use crate::motion::reveal::{Pose, Reveal, Stagger, Timing};
use crate::motion::scroll::use_scroll_position;
use crate::Route;

const HERO: Reveal = Reveal::rise(50.0, 800.0).delayed(300.0);
const SCROLL_HINT: Reveal = Reveal::fade(500.0).delayed(1000.0);
const CARDS: Reveal = Reveal::rise(50.0, 700.0)
    .staggered(Stagger::new(200.0, Pose::lowered(20.0), Timing::new(500.0)));
const CTA: Reveal = Reveal::rise(50.0, 700.0);

#[function_component(ScrollHint)]
fn scroll_hint() -> Html {
    let scroll = use_scroll_position();

    html! {
        <RevealSection reveal={SCROLL_HINT} class="scroll-hint">
            <span>{"Scroll Down"}</span>
            <div class="scroll-hint-bar" style={format!("transform: scaleX({});", scroll.progress)}></div>
        </RevealSection>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <div class="home-hero grid-overlay">
            <RevealSection reveal={HERO} id="hero" class="container">
                <h1>{"Unleash Your Child's "}<span class="accent">{"Cycling Potential"}</span></h1>
                <p class="lead">
                    {"Professional cycling training for young champions in Bangalore. Win the competition with Pushpedal!"}
                </p>
                <Link<Route> to={Route::Contact} classes="pill-button">
                    {"Get Started →"}
                </Link<Route>>
            </RevealSection>
            <ScrollHint />
        </div>
    }
}

#[function_component(Approach)]
fn approach() -> Html {
    html! {
        <RevealSection reveal={CARDS} items={APPROACH.len() + 1} id="approach" class="band muted">
            <div class="container">
                <RevealItem index={0}><h2>{"Our Winning Approach"}</h2></RevealItem>
                <div class="grid three">
                    { for APPROACH.iter().enumerate().map(|(i, feature)| html! {
                        <RevealItem index={i + 1} class="card dark">
                            <span class="card-icon">{feature.icon}</span>
                            <h3>{feature.title}</h3>
                            <p>{feature.body}</p>
                        </RevealItem>
                    }) }
                </div>
            </div>
        </RevealSection>
    }
}

#[function_component(Programs)]
fn programs() -> Html {
    html! {
        <RevealSection reveal={CARDS} items={PROGRAMS.len() + 1} id="programs" class="band">
            <div class="container">
                <RevealItem index={0}><h2>{"Our Training Programs"}</h2></RevealItem>
                <div class="grid three">
                    { for PROGRAMS.iter().enumerate().map(|(i, program)| html! {
                        <RevealItem index={i + 1} class="card">
                            <h3>{program.title}</h3>
                            <p>{program.summary}</p>
                            <ul>
                                { for program.highlights.iter().map(|h| html! { <li>{*h}</li> }) }
                            </ul>
                        </RevealItem>
                    }) }
                </div>
            </div>
        </RevealSection>
    }
}

#[function_component(Testimonials)]
fn testimonials() -> Html {
    html! {
        <RevealSection reveal={CARDS} items={PARENT_REVIEWS.len() + 1} id="testimonials" class="band muted">
            <div class="container">
                <RevealItem index={0}><h2>{"What Parents Say"}</h2></RevealItem>
                <div class="grid two">
                    { for PARENT_REVIEWS.iter().enumerate().map(|(i, review)| html! {
                        <RevealItem index={i + 1} class="card dark">
                            <div class="stars">{"★★★★★"}</div>
                            <p>{format!("\"{}\"", review.quote)}</p>
                            <p class="byline">{format!("- {}", review.author)}</p>
                        </RevealItem>
                    }) }
                </div>
            </div>
        </RevealSection>
    }
}

#[function_component(Partners)]
fn partners() -> Html {
    html! {
        <RevealSection reveal={CARDS} items={PARTNERS.len() + 1} id="partners" class="band">
            <div class="container">
                <RevealItem index={0}><h2>{"Our Partners"}</h2></RevealItem>
                <div class="partner-row">
                    { for PARTNERS.iter().enumerate().map(|(i, partner)| html! {
                        <RevealItem index={i + 1}>
                            <img src={partner.logo} alt={partner.name} width="120" height="60" class="partner-logo" />
                        </RevealItem>
                    }) }
                </div>
            </div>
        </RevealSection>
    }
}

#[function_component(CallToAction)]
fn call_to_action() -> Html {
    html! {
        <RevealSection reveal={CTA} id="cta" class="band muted centered">
            <div class="container">
                <h2>{"Ready to Win?"}</h2>
                <p class="lead">{"Join Pushpedal today and give your child the winning edge!"}</p>
                <Link<Route> to={Route::Contact} classes="pill-button">
                    {"Contact Us ›"}
                </Link<Route>>
            </div>
        </RevealSection>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <main class="home-page">
            <Hero />
            <Approach />
            <Programs />
            <Testimonials />
            <Partners />
            <CallToAction />
            <style>
                {r#"
                .home-hero {
                    position: relative;
                    min-height: calc(100vh - 80px);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                }
                .home-hero h1 {
                    font-size: clamp(3rem, 8vw, 6rem);
                    line-height: 1.1;
                    margin-bottom: 1rem;
                }
                .scroll-hint {
                    position: absolute;
                    bottom: 1rem;
                    left: 50%;
                    transform: translateX(-50%);
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 0.875rem;
                }
                .scroll-hint-bar {
                    width: 30px;
                    height: 2px;
                    background: #fff;
                    transform-origin: left;
                }
                .stars {
                    color: var(--primary);
                    letter-spacing: 0.25rem;
                    margin-bottom: 1rem;
                }
                .byline {
                    font-weight: 600;
                    font-size: 0.95rem;
                }
                .partner-row {
                    display: flex;
                    justify-content: center;
                    gap: 4rem;
                    flex-wrap: wrap;
                }
                .partner-logo {
                    opacity: 0.7;
                    transition: opacity 0.3s;
                }
                .partner-logo:hover {
                    opacity: 1;
                }
                "#}
            </style>
        </main>
    }
}
