use gloo_timers::callback::Timeout;
use web_sys::js_sys::Date;
use yew::prelude::*;

use super::visibility::Visibility;

const FRAME_MS: u32 = 16;

/// What the clock does after a render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tick {
    /// Not revealed yet, or already at the end of the span.
    Idle,
    /// Just revealed: stamp the start time and read zero.
    Start,
    /// Mid animation: read the wall clock again one frame from now.
    Next(f64),
}

pub fn next_tick(visibility: Visibility, current: Option<f64>, span_ms: f64) -> Tick {
    if !visibility.is_revealed() {
        return Tick::Idle;
    }
    match current {
        None => Tick::Start,
        Some(now) if now < span_ms => Tick::Next(now),
        Some(_) => Tick::Idle,
    }
}

/// Next clock reading. Always moves forward so a tick can never stall the
/// clock, and never passes `span_ms`.
pub fn advance(current_ms: f64, measured_ms: f64, span_ms: f64) -> f64 {
    measured_ms.max(current_ms + 1.0).min(span_ms.max(0.0))
}

/// Milliseconds since `visibility` latched, ticking once per frame until
/// `span_ms` is reached. `None` while hidden.
#[hook]
pub fn use_reveal_clock(visibility: Visibility, span_ms: f64) -> Option<f64> {
    let elapsed = use_state_eq(|| None::<f64>);
    let started_at = use_mut_ref(|| None::<f64>);
    let current = *elapsed;

    {
        let elapsed = elapsed.clone();
        use_effect_with_deps(
            move |(visibility, current): &(Visibility, Option<f64>)| {
                let mut pending = None;

                match next_tick(*visibility, *current, span_ms) {
                    Tick::Start => {
                        *started_at.borrow_mut() = Some(Date::now());
                        elapsed.set(Some(0.0));
                    }
                    Tick::Next(now) => {
                        let start = started_at.borrow().unwrap_or_else(Date::now);
                        pending = Some(Timeout::new(FRAME_MS, move || {
                            elapsed.set(Some(advance(now, Date::now() - start, span_ms)));
                        }));
                    }
                    Tick::Idle => {}
                }

                // dropping a pending Timeout cancels it
                move || drop(pending)
            },
            (visibility, current),
        );
    }

    *elapsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_sections_never_tick() {
        assert_eq!(next_tick(Visibility::Hidden, None, 700.0), Tick::Idle);
        assert_eq!(next_tick(Visibility::Hidden, Some(100.0), 700.0), Tick::Idle);
    }

    #[test]
    fn reveal_starts_then_ticks_until_the_span_ends() {
        assert_eq!(next_tick(Visibility::Revealed, None, 700.0), Tick::Start);
        assert_eq!(next_tick(Visibility::Revealed, Some(0.0), 700.0), Tick::Next(0.0));
        assert_eq!(next_tick(Visibility::Revealed, Some(699.0), 700.0), Tick::Next(699.0));
        assert_eq!(next_tick(Visibility::Revealed, Some(700.0), 700.0), Tick::Idle);
    }

    #[test]
    fn clock_reaches_the_span_in_a_bounded_number_of_frames() {
        let span = 1100.0;
        let mut current = None;
        let mut frames = 0;
        loop {
            match next_tick(Visibility::Revealed, current, span) {
                Tick::Start => current = Some(0.0),
                Tick::Next(now) => current = Some(advance(now, now + 16.0, span)),
                Tick::Idle => break,
            }
            frames += 1;
            assert!(frames < 100, "clock never settled");
        }
        assert_eq!(current, Some(span));
    }

    #[test]
    fn zero_span_settles_right_after_start() {
        assert_eq!(next_tick(Visibility::Revealed, None, 0.0), Tick::Start);
        assert_eq!(next_tick(Visibility::Revealed, Some(0.0), 0.0), Tick::Idle);
    }

    #[test]
    fn advance_follows_the_wall_clock() {
        assert_eq!(advance(0.0, 16.0, 700.0), 16.0);
        assert_eq!(advance(16.0, 33.5, 700.0), 33.5);
    }

    #[test]
    fn advance_never_stalls() {
        assert_eq!(advance(40.0, 40.0, 700.0), 41.0);
        assert_eq!(advance(40.0, 12.0, 700.0), 41.0);
    }

    #[test]
    fn advance_stops_at_span() {
        assert_eq!(advance(690.0, 1200.0, 700.0), 700.0);
        assert_eq!(advance(699.5, 699.5, 700.0), 700.0);
        assert_eq!(advance(0.0, 5.0, -1.0), 0.0);
    }
}
