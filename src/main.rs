use chrono::Datelike;
use log::info;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod contact;
mod content;
mod motion {
    pub mod clock;
    pub mod reveal;
    pub mod scroll;
    pub mod visibility;
}
mod components {
    pub mod contact_form;
    pub mod faq_item;
    pub mod reveal_section;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod faq;
    pub mod home;
    pub mod regional_impact;
    pub mod success_stories;
    pub mod training_programs;
}

use motion::scroll::{use_scroll_position, ScrollProvider};
use pages::{
    about::About,
    contact::Contact,
    faq::Faq,
    home::Home,
    regional_impact::RegionalImpact,
    success_stories::SuccessStories,
    training_programs::TrainingPrograms,
};

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/contact")]
    Contact,
    #[at("/register")]
    Register,
    #[at("/faq")]
    Faq,
    #[at("/regional-impact")]
    RegionalImpact,
    #[at("/success-stories")]
    SuccessStories,
    #[at("/training-programs")]
    TrainingPrograms,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        }
        Route::Contact | Route::Register => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
        Route::Faq => {
            info!("Rendering FAQ page");
            html! { <Faq /> }
        }
        Route::RegionalImpact => {
            info!("Rendering Regional Impact page");
            html! { <RegionalImpact /> }
        }
        Route::SuccessStories => {
            info!("Rendering Success Stories page");
            html! { <SuccessStories /> }
        }
        Route::TrainingPrograms => {
            info!("Rendering Training Programs page");
            html! { <TrainingPrograms /> }
        }
        Route::NotFound => {
            info!("Rendering Not Found page");
            html! {
                <main class="band centered not-found">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Home} classes="pill-button">
                        {"Back to Home"}
                    </Link<Route>>
                </main>
            }
        }
    }
}

const NAV_LINKS: &[(Route, &str)] = &[
    (Route::About, "About"),
    (Route::TrainingPrograms, "Programs"),
    (Route::SuccessStories, "Success Stories"),
    (Route::RegionalImpact, "Regional Impact"),
    (Route::Faq, "FAQ"),
    (Route::Contact, "Contact"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let scrolled = use_scroll_position().offset > config::NAV_SOLID_AFTER_PX;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", scrolled.then_some("scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {config::BRAND}
                </Link<Route>>

                <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_LINKS.iter().map(|(route, label)| html! {
                        <div onclick={close_menu.clone()}>
                            <Link<Route> to={route.clone()} classes="nav-link">
                                {*label}
                            </Link<Route>>
                        </div>
                    }) }
                </div>
            </div>
        </nav>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Utc::now().year();

    html! {
        <footer class="site-footer">
            <div class="container">
                <p>{format!("© {} {}. All rights reserved.", year, config::BRAND)}</p>
                <p class="footer-contact">
                    <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
                    {" · "}
                    <a href={format!("tel:{}", config::PHONE_LINK)}>{config::PHONE_DISPLAY}</a>
                </p>
            </div>
        </footer>
    }
}

/// Chrome around the routed page. The scroll source is keyed by the current
/// path so every page gets its own progress starting at zero.
#[function_component(Shell)]
fn shell() -> Html {
    let path = use_route::<Route>()
        .unwrap_or(Route::NotFound)
        .to_path();

    html! {
        <ScrollProvider key={path}>
            <Nav />
            <Switch<Route> render={switch} />
            <Footer />
        </ScrollProvider>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Shell />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {}", config::BRAND);
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_has_its_own_path() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::About.to_path(), "/about");
        assert_eq!(Route::Contact.to_path(), "/contact");
        assert_eq!(Route::Faq.to_path(), "/faq");
        assert_eq!(Route::RegionalImpact.to_path(), "/regional-impact");
        assert_eq!(Route::SuccessStories.to_path(), "/success-stories");
        assert_eq!(Route::TrainingPrograms.to_path(), "/training-programs");
    }

    #[test]
    fn register_and_unknown_paths_resolve() {
        assert_eq!(Route::recognize("/register"), Some(Route::Register));
        assert_eq!(Route::recognize("/no-such-page"), Some(Route::NotFound));
    }
}
