use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::reveal_section::{RevealSection, Trigger};
use crate::content::{AGE_GROUPS, CURRICULUM, PHILOSOPHY, SCHEDULE};
use crate::motion::reveal::{Easing, Reveal};
use crate::motion::scroll::{interpolate, use_scroll_position};
use crate::Route;

const HERO: Reveal = Reveal::rise(50.0, 800.0);
const SECTION: Reveal = Reveal::rise(50.0, 900.0).eased(Easing::GLIDE).delayed(200.0);

/// Title drifts down and the accent bar fills as the page scrolls.
#[function_component(ParallaxHero)]
fn parallax_hero() -> Html {
    let scroll = use_scroll_position();
    let drift = interpolate(scroll.progress, 0.0, 30.0);
    let fill = interpolate(scroll.progress, 0.2, 1.0);

    html! {
        <header class="training-hero grid-overlay">
            <RevealSection reveal={HERO} trigger={Trigger::Mount} id="training-hero" class="container narrow centered">
                <div style={format!("transform: translateY({drift}%);")}>
                    <h1>{"Training Programs"}</h1>
                    <p class="lead">
                        {"Unlock your child's cycling potential with our expert training programs."}
                    </p>
                    <Link<Route> to={Route::Register} classes="pill-button">
                        {"Register Now"}
                    </Link<Route>>
                </div>
            </RevealSection>
            <div class="accent-bar" style={format!("transform: scaleX({fill});")}></div>
        </header>
    }
}

#[function_component(TrainingPrograms)]
pub fn training_programs() -> Html {
    html! {
        <main class="training-page">
            <ParallaxHero />

            <RevealSection reveal={SECTION} id="philosophy" class="band">
                <div class="container narrow">
                    <h2>{"Our Training Philosophy"}</h2>
                    { for PHILOSOPHY.iter().map(|p| html! { <p class="lead">{*p}</p> }) }
                </div>
            </RevealSection>

            <RevealSection reveal={SECTION} id="curriculum" class="band muted">
                <div class="container">
                    <h2>{"Curriculum Highlights"}</h2>
                    <ul class="curriculum">
                        { for CURRICULUM.iter().map(|item| html! {
                            <li><span class="accent">{"✓ "}</span>{*item}</li>
                        }) }
                    </ul>
                </div>
            </RevealSection>

            <RevealSection reveal={SECTION} id="age-groups" class="band">
                <div class="container">
                    <h2>{"Age-Specific Programs"}</h2>
                    <div class="grid three">
                        { for AGE_GROUPS.iter().map(|group| html! {
                            <div class="card">
                                <p class="accent">{format!("Ages {}", group.ages)}</p>
                                <h3>{group.level}</h3>
                                <p>{group.description}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </RevealSection>

            <RevealSection reveal={SECTION} id="schedule" class="band muted">
                <div class="container">
                    <h2>{"Training Schedule"}</h2>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>{"Day"}</th>
                                <th>{"Time"}</th>
                                <th>{"Activity"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for SCHEDULE.iter().map(|row| html! {
                                <tr>
                                    <td>{row.day}</td>
                                    <td>{row.time}</td>
                                    <td>{row.activity}</td>
                                </tr>
                            }) }
                        </tbody>
                    </table>
                </div>
            </RevealSection>

            <RevealSection reveal={SECTION} id="enroll" class="band centered">
                <div class="container narrow">
                    <h2>{"Enroll Your Child Today!"}</h2>
                    <p class="lead">
                        {"Give your child the opportunity to excel in cycling. Contact us to learn more about our programs and registration process."}
                    </p>
                    <Link<Route> to={Route::Register} classes="primary-button">
                        {"Register Now"}
                    </Link<Route>>
                </div>
            </RevealSection>

            <style>
                {r#"
                .training-hero {
                    position: relative;
                    min-height: 70vh;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    overflow: hidden;
                }
                .training-hero h1 {
                    font-size: clamp(3rem, 8vw, 6rem);
                    margin-bottom: 1.5rem;
                }
                .accent-bar {
                    position: absolute;
                    left: 0;
                    right: 0;
                    bottom: 0;
                    height: 4px;
                    background: var(--primary);
                    transform-origin: left;
                }
                .curriculum {
                    list-style: none;
                    padding: 0;
                    display: grid;
                    gap: 0.75rem;
                    font-size: 1.1rem;
                }
                "#}
            </style>
        </main>
    }
}
