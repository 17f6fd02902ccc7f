use yew::prelude::*;

use crate::components::reveal_section::{RevealItem, RevealSection, Trigger};
use crate::content::{StudentProfile, FAMILY_TESTIMONIALS, GALLERY, NEWS, RESULTS, STUDENTS};
use crate::motion::reveal::{Pose, Reveal, Stagger, Timing};

const HERO: Reveal = Reveal::rise(50.0, 800.0);
const PROFILE: Reveal = Reveal::rise(50.0, 700.0);
const RESULTS_TABLE: Reveal = Reveal::slide(-50.0, 700.0);
const TESTIMONIALS: Reveal = Reveal::slide(50.0, 700.0);
const GALLERY_GRID: Reveal = Reveal::rise(50.0, 700.0)
    .staggered(Stagger::new(200.0, Pose::shrunk(0.8), Timing::new(500.0)));
const NEWS_LIST: Reveal = Reveal::slide(-50.0, 700.0);

#[derive(Properties, PartialEq)]
struct ProfileCardProps {
    student: &'static StudentProfile,
}

#[function_component(ProfileCard)]
fn profile_card(props: &ProfileCardProps) -> Html {
    let student = props.student;

    html! {
        <RevealSection reveal={PROFILE} class="card profile-card">
            <img src={student.image} alt={student.name} width="400" height="400" />
            <h3>{student.name}</h3>
            <ul class="achievements">
                { for student.achievements.iter().map(|a| html! { <li><span class="accent">{"🏆 "}</span>{*a}</li> }) }
            </ul>
            <p>{student.story}</p>
        </RevealSection>
    }
}

#[function_component(SuccessStories)]
pub fn success_stories() -> Html {
    html! {
        <main class="stories-page">
            <RevealSection reveal={HERO} trigger={Trigger::Mount} id="stories-hero" class="band grid-overlay centered">
                <div class="container narrow">
                    <h1>{"Pushpedal Success Stories"}</h1>
                    <p class="lead">
                        {"Inspiring journeys of our students who have excelled in cycling competitions."}
                    </p>
                </div>
            </RevealSection>

            <section id="champions" class="band">
                <div class="container">
                    <h2>{"Our Champions"}</h2>
                    <div class="grid three">
                        { for STUDENTS.iter().map(|student| html! { <ProfileCard student={student} /> }) }
                    </div>
                </div>
            </section>

            <RevealSection reveal={RESULTS_TABLE} id="results" class="band muted">
                <div class="container">
                    <h2>{"Competition Results"}</h2>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>{"Competition"}</th>
                                <th>{"Placement"}</th>
                                <th>{"Date"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for RESULTS.iter().map(|row| html! {
                                <tr>
                                    <td>{row.competition}</td>
                                    <td class="accent">{row.placement}</td>
                                    <td>{row.date}</td>
                                </tr>
                            }) }
                        </tbody>
                    </table>
                </div>
            </RevealSection>

            <RevealSection reveal={TESTIMONIALS} id="testimonials" class="band">
                <div class="container">
                    <h2>{"What Families Say"}</h2>
                    <div class="grid three">
                        { for FAMILY_TESTIMONIALS.iter().map(|t| html! {
                            <blockquote class="card testimonial">
                                if let Some(image) = t.image {
                                    <img src={image} alt={t.author} width="80" height="80" class="avatar" />
                                }
                                <p>{"\u{201C}"}{t.quote}{"\u{201D}"}</p>
                                <cite>{t.author}</cite>
                            </blockquote>
                        }) }
                    </div>
                </div>
            </RevealSection>

            <RevealSection reveal={GALLERY_GRID} items={GALLERY.len()} id="gallery" class="band muted">
                <div class="container">
                    <h2>{"Gallery"}</h2>
                    <div class="grid three">
                        { for GALLERY.iter().enumerate().map(|(i, src)| html! {
                            <RevealItem index={i} class="gallery-tile">
                                <img src={*src} alt={format!("Pushpedal students in action {}", i + 1)} width="600" height="400" />
                            </RevealItem>
                        }) }
                    </div>
                </div>
            </RevealSection>

            <RevealSection reveal={NEWS_LIST} id="news" class="band">
                <div class="container">
                    <h2>{"In the News"}</h2>
                    <div class="grid three">
                        { for NEWS.iter().map(|article| html! {
                            <article class="card">
                                <h3>{article.title}</h3>
                                <p>{article.excerpt}</p>
                                <a href={article.link} class="accent">{"Read more →"}</a>
                            </article>
                        }) }
                    </div>
                </div>
            </RevealSection>

            <style>
                {r#"
                .profile-card img,
                .gallery-tile img {
                    width: 100%;
                    height: auto;
                    border-radius: 1rem;
                    object-fit: cover;
                }
                .achievements {
                    list-style: none;
                    padding: 0;
                    margin: 1rem 0;
                }
                .testimonial {
                    margin: 0;
                }
                .testimonial .avatar {
                    border-radius: 50%;
                    margin-bottom: 1rem;
                }
                .testimonial cite {
                    color: var(--primary);
                    font-style: normal;
                    font-weight: 600;
                }
                "#}
            </style>
        </main>
    }
}
