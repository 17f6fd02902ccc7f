use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;
use yew::prelude::*;
use yew_hooks::use_mount;

/// Read-only view of the page scroll, shared through context.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollPosition {
    /// Pixels scrolled from the top of the document.
    pub offset: f64,
    /// Fraction of the scrollable height already scrolled, in `[0, 1]`.
    pub progress: f64,
}

pub fn progress(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let scrollable = scroll_height - client_height;
    if !scroll_top.is_finite() || !(scrollable > 0.0) {
        return 0.0;
    }
    (scroll_top / scrollable).clamp(0.0, 1.0)
}

/// Maps a progress value onto `from..=to`.
pub fn interpolate(progress: f64, from: f64, to: f64) -> f64 {
    let t = if progress.is_finite() {
        progress.clamp(0.0, 1.0)
    } else {
        0.0
    };
    from + (to - from) * t
}

fn measure() -> Option<ScrollPosition> {
    let root = window()?.document()?.document_element()?;
    let offset = f64::from(root.scroll_top());
    Some(ScrollPosition {
        offset,
        progress: progress(
            offset,
            f64::from(root.scroll_height()),
            f64::from(root.client_height()),
        ),
    })
}

#[derive(Properties, PartialEq)]
pub struct ScrollProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Single scroll listener for the current page. Mount it once per page and
/// let everything below read [`use_scroll_position`].
#[function_component(ScrollProvider)]
pub fn scroll_provider(props: &ScrollProviderProps) -> Html {
    let position = use_state_eq(ScrollPosition::default);

    // New page, start from the top.
    use_mount(|| {
        if let Some(window) = window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    {
        let position = position.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = match window() {
                    Some(window) => {
                        let callback = Closure::<dyn Fn()>::new({
                            let position = position.clone();
                            move || {
                                if let Some(current) = measure() {
                                    position.set(current);
                                }
                            }
                        });

                        let registered = window.add_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                        match registered {
                            Ok(()) => {
                                if let Some(current) = measure() {
                                    position.set(current);
                                }
                                Box::new(move || {
                                    let _ = window.remove_event_listener_with_callback(
                                        "scroll",
                                        callback.as_ref().unchecked_ref(),
                                    );
                                })
                            }
                            Err(err) => {
                                warn!("could not listen for scroll events: {:?}", err);
                                Box::new(|| ())
                            }
                        }
                    }
                    None => Box::new(|| ()),
                };

                move || destructor()
            },
            (),
        );
    }

    html! {
        <ContextProvider<ScrollPosition> context={*position}>
            { for props.children.iter() }
        </ContextProvider<ScrollPosition>>
    }
}

#[hook]
pub fn use_scroll_position() -> ScrollPosition {
    use_context::<ScrollPosition>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_fraction_of_scrollable_height() {
        assert_eq!(progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(progress(500.0, 3000.0, 1000.0), 0.25);
        assert_eq!(progress(2000.0, 3000.0, 1000.0), 1.0);
    }

    #[test]
    fn progress_is_zero_when_page_cannot_scroll() {
        assert_eq!(progress(0.0, 800.0, 800.0), 0.0);
        assert_eq!(progress(10.0, 600.0, 800.0), 0.0);
        assert_eq!(progress(f64::NAN, 3000.0, 1000.0), 0.0);
    }

    #[test]
    fn progress_clamps_overscroll() {
        assert_eq!(progress(-40.0, 3000.0, 1000.0), 0.0);
        assert_eq!(progress(2100.0, 3000.0, 1000.0), 1.0);
    }

    #[test]
    fn interpolate_maps_progress_onto_range() {
        assert_eq!(interpolate(0.0, 0.2, 1.0), 0.2);
        assert_eq!(interpolate(1.0, 10.0, 30.0), 30.0);
        assert_eq!(interpolate(0.5, 0.0, 30.0), 15.0);
        assert_eq!(interpolate(4.0, 0.0, 30.0), 30.0);
        assert_eq!(interpolate(f64::NAN, 0.0, 30.0), 0.0);
    }
}
