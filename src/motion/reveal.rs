//! Pose interpolation for revealed sections.
//!
//! A [`Reveal`] describes how a section moves from its hidden pose to its
//! shown pose once it has been seen, and how its children are staggered.
//! Everything here is a pure function of the time elapsed since the reveal,
//! so the same description can be sampled by the clock hook or by tests.

use std::fmt::Write;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl Pose {
    pub const SHOWN: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    pub const fn faded() -> Pose {
        Pose {
            opacity: 0.0,
            ..Pose::SHOWN
        }
    }

    pub const fn lowered(y: f64) -> Pose {
        Pose {
            opacity: 0.0,
            y,
            ..Pose::SHOWN
        }
    }

    pub const fn shifted(x: f64) -> Pose {
        Pose {
            opacity: 0.0,
            x,
            ..Pose::SHOWN
        }
    }

    pub const fn shrunk(scale: f64) -> Pose {
        Pose {
            opacity: 0.0,
            scale,
            ..Pose::SHOWN
        }
    }

    pub fn is_well_formed(&self) -> bool {
        [self.opacity, self.x, self.y, self.scale]
            .iter()
            .all(|v| v.is_finite())
            && (0.0..=1.0).contains(&self.opacity)
            && self.scale >= 0.0
    }

    /// Linear blend towards `to`. The endpoints are returned verbatim so a
    /// finished animation lands exactly on its target.
    pub fn lerp(&self, to: &Pose, t: f64) -> Pose {
        if t <= 0.0 {
            return *self;
        }
        if t >= 1.0 {
            return *to;
        }
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Pose {
            opacity: mix(self.opacity, to.opacity),
            x: mix(self.x, to.x),
            y: mix(self.y, to.y),
            scale: mix(self.scale, to.scale),
        }
    }

    pub fn to_css(&self) -> String {
        let mut css = format!("opacity: {};", self.opacity);
        if self.x != 0.0 || self.y != 0.0 || self.scale != 1.0 {
            let _ = write!(
                css,
                " transform: translate({}px, {}px) scale({});",
                self.x, self.y, self.scale
            );
        }
        css
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    EaseOut,
    EaseInOut,
    CubicBezier(f64, f64, f64, f64),
}

impl Easing {
    /// The academy's house curve.
    pub const GLIDE: Easing = Easing::CubicBezier(0.17, 0.55, 0.55, 1.0);

    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => t,
            Easing::EaseOut => bezier(0.0, 0.0, 0.58, 1.0, t),
            Easing::EaseInOut => bezier(0.42, 0.0, 0.58, 1.0, t),
            Easing::CubicBezier(x1, y1, x2, y2) => bezier(x1, y1, x2, y2, t),
        }
    }

    fn is_well_formed(&self) -> bool {
        match *self {
            Easing::CubicBezier(x1, y1, x2, y2) => {
                [x1, y1, x2, y2].iter().all(|v| v.is_finite())
                    && (0.0..=1.0).contains(&x1)
                    && (0.0..=1.0).contains(&x2)
            }
            _ => true,
        }
    }
}

// Solves the curve for `x` then samples `y`, the same way CSS timing
// functions are evaluated.
fn bezier(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    let coord = |p1: f64, p2: f64, s: f64| {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
    };
    let slope = |p1: f64, p2: f64, s: f64| {
        let inv = 1.0 - s;
        3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
    };

    let mut s = x;
    for _ in 0..8 {
        let err = coord(x1, x2, s) - x;
        if err.abs() < 1e-7 {
            return coord(y1, y2, s);
        }
        let d = slope(x1, x2, s);
        if d.abs() < 1e-6 {
            break;
        }
        s = (s - err / d).clamp(0.0, 1.0);
    }

    // Newton stalled, fall back to bisection.
    let (mut lo, mut hi) = (0.0, 1.0);
    s = x;
    for _ in 0..50 {
        let guess = coord(x1, x2, s);
        if (guess - x).abs() < 1e-7 {
            break;
        }
        if guess < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    coord(y1, y2, s)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timing {
    pub duration_ms: f64,
    pub delay_ms: f64,
    pub easing: Easing,
}

impl Timing {
    pub const fn new(duration_ms: f64) -> Timing {
        Timing {
            duration_ms,
            delay_ms: 0.0,
            easing: Easing::EaseOut,
        }
    }

    fn is_well_formed(&self) -> bool {
        self.duration_ms.is_finite()
            && self.duration_ms >= 0.0
            && self.delay_ms.is_finite()
            && self.delay_ms >= 0.0
            && self.easing.is_well_formed()
    }

    /// Eased progress in `[0, 1]`, `elapsed_ms` measured from this timing's own start.
    fn progress(&self, elapsed_ms: f64) -> f64 {
        let active = elapsed_ms - self.delay_ms;
        if active < 0.0 {
            return 0.0;
        }
        if self.duration_ms == 0.0 {
            return 1.0;
        }
        self.easing.apply(active / self.duration_ms)
    }

    fn end_ms(&self) -> f64 {
        self.delay_ms + self.duration_ms
    }
}

/// How children of a revealed section follow their parent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stagger {
    pub interval_ms: f64,
    pub delay_children_ms: f64,
    pub hidden: Pose,
    pub timing: Timing,
}

impl Stagger {
    pub const fn new(interval_ms: f64, hidden: Pose, timing: Timing) -> Stagger {
        Stagger {
            interval_ms,
            delay_children_ms: 0.0,
            hidden,
            timing,
        }
    }

    pub const fn after(mut self, delay_children_ms: f64) -> Stagger {
        self.delay_children_ms = delay_children_ms;
        self
    }

    fn is_well_formed(&self) -> bool {
        self.interval_ms.is_finite()
            && self.interval_ms >= 0.0
            && self.delay_children_ms.is_finite()
            && self.delay_children_ms >= 0.0
            && self.hidden.is_well_formed()
            && self.timing.is_well_formed()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reveal {
    pub hidden: Pose,
    pub shown: Pose,
    pub timing: Timing,
    pub stagger: Option<Stagger>,
}

impl Reveal {
    pub const fn new(hidden: Pose, timing: Timing) -> Reveal {
        Reveal {
            hidden,
            shown: Pose::SHOWN,
            timing,
            stagger: None,
        }
    }

    /// Fade in while sliding up from `distance` pixels below.
    pub const fn rise(distance: f64, duration_ms: f64) -> Reveal {
        Reveal::new(Pose::lowered(distance), Timing::new(duration_ms))
    }

    pub const fn fade(duration_ms: f64) -> Reveal {
        Reveal::new(Pose::faded(), Timing::new(duration_ms))
    }

    /// Fade in while sliding horizontally from `dx` pixels away.
    pub const fn slide(dx: f64, duration_ms: f64) -> Reveal {
        Reveal::new(Pose::shifted(dx), Timing::new(duration_ms))
    }

    pub const fn delayed(mut self, delay_ms: f64) -> Reveal {
        self.timing.delay_ms = delay_ms;
        self
    }

    pub const fn eased(mut self, easing: Easing) -> Reveal {
        self.timing.easing = easing;
        self
    }

    pub const fn staggered(mut self, stagger: Stagger) -> Reveal {
        self.stagger = Some(stagger);
        self
    }

    fn is_well_formed(&self) -> bool {
        self.hidden.is_well_formed()
            && self.shown.is_well_formed()
            && self.timing.is_well_formed()
            && self.stagger.map_or(true, |s| s.is_well_formed())
    }

    fn resting(&self) -> Pose {
        if self.shown.is_well_formed() {
            self.shown
        } else {
            Pose::SHOWN
        }
    }

    /// Pose of the section itself. `since_reveal` is `None` while hidden.
    pub fn pose(&self, since_reveal: Option<f64>) -> Pose {
        if !self.is_well_formed() {
            return self.resting();
        }
        match since_reveal {
            None => self.hidden,
            Some(elapsed) => self.hidden.lerp(&self.shown, self.timing.progress(elapsed)),
        }
    }

    /// Offset from the reveal at which child `index` starts moving.
    pub fn item_start_ms(&self, index: usize) -> f64 {
        match self.stagger {
            Some(stagger) => {
                self.timing.delay_ms + stagger.delay_children_ms + index as f64 * stagger.interval_ms
            }
            None => self.timing.delay_ms,
        }
    }

    /// Pose of child `index`. Children without a stagger simply ride along
    /// with the section and stay at rest.
    pub fn item_pose(&self, index: usize, since_reveal: Option<f64>) -> Pose {
        let stagger = match self.stagger {
            Some(stagger) if self.is_well_formed() => stagger,
            _ => return Pose::SHOWN,
        };
        match since_reveal {
            None => stagger.hidden,
            Some(elapsed) => {
                let local = elapsed - self.item_start_ms(index);
                stagger.hidden.lerp(&self.shown, stagger.timing.progress(local))
            }
        }
    }

    /// Time after the reveal past which no pose changes any more.
    pub fn span_ms(&self, items: usize) -> f64 {
        if !self.is_well_formed() {
            return 0.0;
        }
        let own = self.timing.end_ms();
        match self.stagger {
            Some(stagger) if items > 0 => {
                own.max(self.item_start_ms(items - 1) + stagger.timing.end_ms())
            }
            _ => own,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    fn cards() -> Reveal {
        Reveal::rise(50.0, 700.0)
            .staggered(Stagger::new(200.0, Pose::lowered(20.0), Timing::new(500.0)))
    }

    #[test]
    fn hidden_section_renders_hidden_pose_exactly() {
        let reveal = Reveal::rise(30.0, 800.0).delayed(100.0).eased(Easing::GLIDE);
        assert_eq!(reveal.pose(None), Pose::lowered(30.0));
        assert_eq!(reveal.pose(None).to_css(), "opacity: 0; transform: translate(0px, 30px) scale(1);");
    }

    #[test]
    fn finished_section_renders_shown_pose_exactly() {
        for easing in [Easing::Linear, Easing::EaseOut, Easing::EaseInOut, Easing::GLIDE] {
            let reveal = Reveal::rise(50.0, 800.0).delayed(300.0).eased(easing);
            assert_eq!(reveal.pose(Some(1100.0)), Pose::SHOWN);
            assert_eq!(reveal.pose(Some(60_000.0)), Pose::SHOWN);
        }
        assert_eq!(Pose::SHOWN.to_css(), "opacity: 1;");
    }

    #[test]
    fn section_waits_for_its_delay() {
        let reveal = Reveal::fade(500.0).delayed(300.0);
        assert_eq!(reveal.pose(Some(0.0)), Pose::faded());
        assert_eq!(reveal.pose(Some(299.0)), Pose::faded());
        assert!(reveal.pose(Some(400.0)).opacity > 0.0);
    }

    #[test]
    fn linear_midpoint_is_halfway() {
        let reveal = Reveal::rise(40.0, 1000.0).eased(Easing::Linear);
        let mid = reveal.pose(Some(500.0));
        assert!(approx(mid.opacity, 0.5));
        assert!(approx(mid.y, 20.0));
    }

    #[test]
    fn opacity_never_decreases_while_animating() {
        let reveal = Reveal::slide(-50.0, 700.0);
        let mut last = reveal.pose(None).opacity;
        for step in 0..=80 {
            let now = reveal.pose(Some(step as f64 * 10.0)).opacity;
            assert!(now >= last, "opacity went back at step {step}");
            last = now;
        }
        assert_eq!(last, 1.0);
    }

    #[test]
    fn children_start_at_index_times_interval() {
        let reveal = cards();
        for i in 0..6 {
            assert!(approx(reveal.item_start_ms(i), i as f64 * 200.0));
        }

        let delayed = cards().delayed(300.0);
        assert!(approx(delayed.item_start_ms(2), 700.0));

        let with_children_delay = Reveal::fade(500.0)
            .staggered(Stagger::new(150.0, Pose::lowered(30.0), Timing::new(500.0)).after(300.0));
        assert!(approx(with_children_delay.item_start_ms(0), 300.0));
        assert!(approx(with_children_delay.item_start_ms(3), 750.0));
    }

    #[test]
    fn later_children_are_still_hidden_when_earlier_ones_move() {
        let reveal = cards();
        let at = Some(250.0);
        assert!(reveal.item_pose(0, at).opacity > 0.0);
        assert!(reveal.item_pose(1, at).opacity > 0.0);
        assert_eq!(reveal.item_pose(2, at), Pose::lowered(20.0));
        assert_eq!(reveal.item_pose(2, None), Pose::lowered(20.0));
        assert_eq!(reveal.item_pose(2, Some(400.0 + 500.0)), Pose::SHOWN);
    }

    #[test]
    fn span_covers_the_last_child() {
        assert!(approx(cards().span_ms(3), 900.0));
        assert!(approx(cards().span_ms(0), 700.0));
        assert!(approx(Reveal::fade(500.0).delayed(300.0).span_ms(10), 800.0));
    }

    #[test]
    fn unstaggered_children_stay_at_rest() {
        let reveal = Reveal::rise(50.0, 700.0);
        assert_eq!(reveal.item_pose(3, None), Pose::SHOWN);
    }

    #[test]
    fn malformed_descriptors_render_shown() {
        let bad_pose = Reveal::new(
            Pose {
                opacity: f64::NAN,
                ..Pose::SHOWN
            },
            Timing::new(500.0),
        );
        assert_eq!(bad_pose.pose(None), Pose::SHOWN);

        let bad_timing = Reveal::fade(-10.0);
        assert_eq!(bad_timing.pose(None), Pose::SHOWN);
        assert_eq!(bad_timing.span_ms(4), 0.0);

        let bad_curve = Reveal::fade(500.0).eased(Easing::CubicBezier(2.0, 0.0, 0.5, 1.0));
        assert_eq!(bad_curve.pose(Some(10.0)), Pose::SHOWN);

        let bad_stagger = Reveal::fade(500.0)
            .staggered(Stagger::new(f64::INFINITY, Pose::lowered(20.0), Timing::new(500.0)));
        assert_eq!(bad_stagger.item_pose(1, None), Pose::SHOWN);
    }

    #[test]
    fn zero_duration_jumps_after_delay() {
        let reveal = Reveal::rise(20.0, 0.0).delayed(100.0);
        assert_eq!(reveal.pose(Some(50.0)), Pose::lowered(20.0));
        assert_eq!(reveal.pose(Some(100.0)), Pose::SHOWN);
    }

    #[test]
    fn easing_curves_pin_endpoints_and_rise() {
        for easing in [Easing::Linear, Easing::EaseOut, Easing::EaseInOut, Easing::GLIDE] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            assert_eq!(easing.apply(-3.0), 0.0);
            assert_eq!(easing.apply(7.0), 1.0);

            let mut last = 0.0;
            for step in 1..=100 {
                let y = easing.apply(step as f64 / 100.0);
                assert!(y + 1e-9 >= last, "{easing:?} dipped at {step}");
                last = y;
            }
        }
    }

    #[test]
    fn ease_in_out_is_symmetric() {
        let e = Easing::EaseInOut;
        assert!(approx(e.apply(0.5), 0.5));
        assert!(approx(e.apply(0.25) + e.apply(0.75), 1.0));
    }

    #[test]
    fn ease_out_front_loads_progress() {
        assert!(Easing::EaseOut.apply(0.3) > 0.3);
        assert!(Easing::GLIDE.apply(0.3) > 0.3);
    }
}
