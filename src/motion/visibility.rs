use std::cell::Cell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};
use yew::prelude::*;
use yew_hooks::use_mount;

/// One-way latch for a section: it starts hidden and flips to revealed the
/// first time it touches the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Revealed,
}

impl Visibility {
    pub fn is_revealed(self) -> bool {
        matches!(self, Visibility::Revealed)
    }

    /// Feeds one intersection report into the latch. Returns `true` only for
    /// the call that performs the `Hidden -> Revealed` transition.
    pub fn latch(&mut self, intersecting: bool) -> bool {
        match self {
            Visibility::Hidden if intersecting => {
                *self = Visibility::Revealed;
                true
            }
            _ => false,
        }
    }
}

/// Anything holding a live observation that must be torn down.
pub trait Disconnect {
    fn disconnect(&self);
}

/// Owns an observation for as long as the section is mounted. Releasing is
/// idempotent; dropping releases.
pub struct Subscription<H: Disconnect> {
    handle: Option<H>,
}

impl<H: Disconnect> Subscription<H> {
    pub fn new(handle: H) -> Self {
        Self {
            handle: Some(handle),
        }
    }

    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    pub fn release(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.disconnect();
        }
    }
}

impl<H: Disconnect> Drop for Subscription<H> {
    fn drop(&mut self) {
        self.release();
    }
}

struct ViewportWatch {
    observer: IntersectionObserver,
    // kept alive for as long as the observer may call into it
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Disconnect for ViewportWatch {
    fn disconnect(&self) {
        self.observer.disconnect();
    }
}

fn watch(element: &Element, on_enter: impl Fn() + 'static) -> Result<ViewportWatch, JsValue> {
    let state = Rc::new(Cell::new(Visibility::Hidden));
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, _observer: IntersectionObserver| {
            let intersecting = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());

            let mut current = state.get();
            if current.latch(intersecting) {
                state.set(current);
                on_enter();
            }
        },
    );

    // No init dictionary: threshold 0 fires on any overlap.
    let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())?;
    observer.observe(element);

    Ok(ViewportWatch {
        observer,
        _callback: callback,
    })
}

/// Once the latch has flipped there is nothing left to watch. Returns `true`
/// when this call released the observation.
fn release_when_revealed<H: Disconnect>(
    subscription: &mut Subscription<H>,
    visibility: Visibility,
) -> bool {
    if visibility.is_revealed() && subscription.is_active() {
        subscription.release();
        return true;
    }
    false
}

/// Reports whether the element behind `node` has ever intersected the
/// viewport. Stays `Hidden` forever if the node is never attached.
#[hook]
pub fn use_in_view(node: NodeRef) -> Visibility {
    let visibility = use_state_eq(Visibility::default);
    let slot = use_mut_ref(|| None::<Subscription<ViewportWatch>>);

    {
        let visibility = visibility.clone();
        let slot = slot.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                match node.cast::<Element>() {
                    Some(element) => {
                        let setter = visibility.setter();
                        match watch(&element, move || setter.set(Visibility::Revealed)) {
                            Ok(watch) => *slot.borrow_mut() = Some(Subscription::new(watch)),
                            Err(err) => {
                                warn!("viewport observer unavailable, revealing now: {:?}", err);
                                visibility.set(Visibility::Revealed);
                            }
                        }
                    }
                    None => debug!("section node not attached, leaving it hidden"),
                }

                // dropping the guard disconnects unless the reveal already did
                move || drop(slot.borrow_mut().take())
            },
            node,
        );
    }

    use_effect_with_deps(
        move |visibility: &Visibility| {
            if let Some(subscription) = slot.borrow_mut().as_mut() {
                if release_when_revealed(subscription, *visibility) {
                    debug!("viewport observer released after reveal");
                }
            }
            || ()
        },
        *visibility,
    );

    *visibility
}

/// Latches `Revealed` as soon as the component mounts.
#[hook]
pub fn use_mounted() -> Visibility {
    let visibility = use_state_eq(Visibility::default);

    {
        let visibility = visibility.clone();
        use_mount(move || visibility.set(Visibility::Revealed));
    }

    *visibility
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counting(Rc<Cell<u32>>);

    impl Disconnect for Counting {
        fn disconnect(&self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn latch_only_transitions_once() {
        let mut visibility = Visibility::Hidden;
        assert!(!visibility.latch(false));
        assert_eq!(visibility, Visibility::Hidden);

        assert!(visibility.latch(true));
        assert_eq!(visibility, Visibility::Revealed);

        assert!(!visibility.latch(true));
        assert!(!visibility.latch(false));
        assert_eq!(visibility, Visibility::Revealed);
    }

    #[test]
    fn sections_reveal_independently_and_never_rehide() {
        let mut sections = [Visibility::Hidden; 3];
        assert!(sections.iter().all(|s| !s.is_revealed()));

        // section 2 scrolls into view
        for (section, intersecting) in sections.iter_mut().zip([false, true, false]) {
            section.latch(intersecting);
        }
        assert_eq!(
            sections,
            [Visibility::Hidden, Visibility::Revealed, Visibility::Hidden]
        );

        // everything seen, then scrolled back up past all of them
        for frame in [[true, true, true], [false, false, false]] {
            for (section, intersecting) in sections.iter_mut().zip(frame) {
                section.latch(intersecting);
            }
        }
        assert!(sections.iter().all(|s| s.is_revealed()));
    }

    #[test]
    fn unmounting_unrevealed_sections_disconnects_each_once() {
        let disconnects = Rc::new(Cell::new(0));

        let subscriptions: Vec<_> = (0..25)
            .map(|_| Subscription::new(Counting(disconnects.clone())))
            .collect();
        assert!(subscriptions.iter().all(Subscription::is_active));
        drop(subscriptions);

        assert_eq!(disconnects.get(), 25);
    }

    #[test]
    fn observation_is_released_on_reveal_and_not_again_on_unmount() {
        let disconnects = Rc::new(Cell::new(0));
        let mut subscription = Subscription::new(Counting(disconnects.clone()));

        assert!(!release_when_revealed(&mut subscription, Visibility::Hidden));
        assert!(subscription.is_active());
        assert_eq!(disconnects.get(), 0);

        assert!(release_when_revealed(&mut subscription, Visibility::Revealed));
        assert!(!release_when_revealed(&mut subscription, Visibility::Revealed));
        assert_eq!(disconnects.get(), 1);

        drop(subscription);
        assert_eq!(disconnects.get(), 1);
    }

    #[test]
    fn early_release_is_not_repeated_on_drop() {
        let disconnects = Rc::new(Cell::new(0));

        let mut subscription = Subscription::new(Counting(disconnects.clone()));
        subscription.release();
        assert!(!subscription.is_active());
        subscription.release();
        drop(subscription);

        assert_eq!(disconnects.get(), 1);
    }
}
