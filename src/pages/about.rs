use yew::prelude::*;

use crate::components::reveal_section::{RevealSection, Trigger};
use crate::content::{MISSION, SOCIAL_IMPACT, SOCIAL_IMPACT_INTRO, STORY, TEAM, VALUES, VISION};
use crate::motion::reveal::{Easing, Reveal};

const PAGE: Reveal = Reveal::fade(500.0).eased(Easing::Linear);

// Each block glides up a little later than the one before it.
const fn block(delay_ms: f64) -> Reveal {
    Reveal::rise(30.0, 800.0).eased(Easing::GLIDE).delayed(delay_ms)
}

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <RevealSection reveal={PAGE} trigger={Trigger::Mount} class="about-page">
            <main>
                <RevealSection reveal={block(100.0)} id="story" class="band grid-overlay">
                    <div class="container narrow">
                        <h2>{"Our Story"}</h2>
                        { for STORY.iter().map(|p| html! { <p class="lead">{*p}</p> }) }
                    </div>
                </RevealSection>

                <RevealSection reveal={block(200.0)} id="mission" class="band muted">
                    <div class="container grid two">
                        <div class="card dark">
                            <h3>{"Our Mission"}</h3>
                            <p>{MISSION}</p>
                        </div>
                        <div class="card dark">
                            <h3>{"Our Vision"}</h3>
                            <p>{VISION}</p>
                        </div>
                    </div>
                </RevealSection>

                <RevealSection reveal={block(300.0)} id="team" class="band">
                    <div class="container">
                        <h2>{"Meet Our Team"}</h2>
                        <div class="grid three">
                            { for TEAM.iter().map(|member| html! {
                                <div class="card team-card">
                                    <img src={member.image} alt={member.name} width="500" height="500" />
                                    <h3>{member.name}</h3>
                                    <p class="role">{member.title}</p>
                                    <p>{member.bio}</p>
                                </div>
                            }) }
                        </div>
                    </div>
                </RevealSection>

                <RevealSection reveal={block(400.0)} id="values" class="band muted">
                    <div class="container">
                        <h2>{"Our Core Values"}</h2>
                        <div class="grid four">
                            { for VALUES.iter().map(|value| html! {
                                <div class="card dark centered">
                                    <span class="card-icon">{value.icon}</span>
                                    <h3>{value.title}</h3>
                                    <p>{value.body}</p>
                                </div>
                            }) }
                        </div>
                    </div>
                </RevealSection>

                <RevealSection reveal={block(500.0)} id="social-impact" class="band">
                    <div class="container">
                        <h2>{"Our Social Impact"}</h2>
                        <p class="lead">{SOCIAL_IMPACT_INTRO}</p>
                        <div class="grid two">
                            { for SOCIAL_IMPACT.iter().map(|card| html! {
                                <div class="card">
                                    <h3>{card.title}</h3>
                                    <p>{card.body}</p>
                                </div>
                            }) }
                        </div>
                    </div>
                </RevealSection>
            </main>
            <style>
                {r#"
                .team-card img {
                    width: 100%;
                    height: auto;
                    border-radius: 1rem;
                    margin-bottom: 1rem;
                    object-fit: cover;
                }
                .team-card .role {
                    color: var(--primary);
                    font-weight: 600;
                }
                "#}
            </style>
        </RevealSection>
    }
}
