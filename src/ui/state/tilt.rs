// SPDX-License-Identifier: MPL-2.0
//! Pseudo-3D tilt state for the clock face.
//!
//! While the pointer is held down the dial tilts toward it, as if the face
//! were a plate pushed on one edge. On release the tilt springs back to
//! flat over half a second with a single overshoot past zero, driven by an
//! overshoot interpolator with tension 10.

use std::time::{Duration, Instant};

use iced::{Point, Rectangle};

use crate::clock::FaceMetrics;

/// How long the spring-back animation runs.
pub const SPRING_BACK_DURATION: Duration = Duration::from_millis(500);

/// Tension of the overshoot interpolator. Higher values overshoot further.
const OVERSHOOT_TENSION: f32 = 10.0;

/// Tilt of the dial around its two in-plane axes, in degrees.
///
/// `x` rotates around the horizontal axis (positive tips the top edge away),
/// `y` around the vertical axis (positive tips the right edge away).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TiltAngles {
    pub x: f32,
    pub y: f32,
}

impl TiltAngles {
    /// Tilt toward a pointer position on the widget.
    ///
    /// Each component is the pointer's offset from the center as a fraction
    /// of the radius, clamped to `[-1, 1]`, scaled by `max_degrees`. Points
    /// outside the dial therefore saturate at the maximum tilt instead of
    /// growing without bound.
    #[must_use]
    pub fn toward(position: Point, metrics: &FaceMetrics, max_degrees: f32) -> Self {
        if metrics.radius <= 0.0 {
            return Self::default();
        }
        let unit_x = -(position.y - metrics.center.y) / metrics.radius;
        let unit_y = (position.x - metrics.center.x) / metrics.radius;
        Self {
            x: unit_x.clamp(-1.0, 1.0) * max_degrees,
            y: unit_y.clamp(-1.0, 1.0) * max_degrees,
        }
    }

    /// Both components scaled by `factor`.
    #[must_use]
    pub fn scaled(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Horizontal and vertical foreshortening factors for the tilted dial.
    ///
    /// Tilting around the vertical axis narrows the face horizontally and
    /// tilting around the horizontal axis squashes it vertically; the
    /// cosine of each angle gives the scale along that direction.
    #[must_use]
    pub fn foreshortening(self) -> (f32, f32) {
        (self.y.to_radians().cos(), self.x.to_radians().cos())
    }
}

/// Overshoot interpolator: starts fast, passes 1, and settles back to
/// exactly 1 at `t = 1`. Matches `f(t) = (t-1)²·((T+1)(t-1) + T) + 1`.
#[must_use]
pub fn overshoot(t: f32) -> f32 {
    let t = t - 1.0;
    t * t * ((OVERSHOOT_TENSION + 1.0) * t + OVERSHOOT_TENSION) + 1.0
}

/// A running spring-back animation from a released tilt to flat.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringBack {
    from: TiltAngles,
    started: Instant,
}

impl SpringBack {
    #[must_use]
    pub fn new(from: TiltAngles, started: Instant) -> Self {
        Self { from, started }
    }

    /// Tilt at `now`. Overshoots past flat mid-animation and lands on
    /// exactly zero once the duration has elapsed.
    #[must_use]
    pub fn at(&self, now: Instant) -> TiltAngles {
        let elapsed = now.saturating_duration_since(self.started);
        self.from.scaled(1.0 - overshoot(Self::progress(elapsed)))
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= SPRING_BACK_DURATION
    }

    fn progress(elapsed: Duration) -> f32 {
        (elapsed.as_secs_f32() / SPRING_BACK_DURATION.as_secs_f32()).min(1.0)
    }
}

/// Interaction state of the tilt effect.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TiltState {
    /// Dial lies flat, no animation running.
    #[default]
    Idle,
    /// Pointer held down; the dial follows it directly.
    Tilting(TiltAngles),
    /// Pointer released; the dial is springing back to flat.
    SpringingBack(SpringBack),
}

impl TiltState {
    /// Pointer pressed or dragged at `tilt`. Cancels any running
    /// spring-back and follows the pointer again.
    pub fn press(&mut self, tilt: TiltAngles) {
        *self = Self::Tilting(tilt);
    }

    /// Pointer released; starts the spring-back from the current tilt.
    /// A release while idle or already springing back is ignored.
    pub fn release(&mut self, now: Instant) {
        if let Self::Tilting(tilt) = *self {
            *self = if tilt == TiltAngles::default() {
                Self::Idle
            } else {
                Self::SpringingBack(SpringBack::new(tilt, now))
            };
        }
    }

    /// Advances the animation; returns to [`TiltState::Idle`] once the
    /// spring-back has finished.
    pub fn tick(&mut self, now: Instant) {
        if let Self::SpringingBack(spring) = self {
            if spring.is_finished(now) {
                *self = Self::Idle;
            }
        }
    }

    /// The tilt to render at `now`.
    #[must_use]
    pub fn current(&self, now: Instant) -> TiltAngles {
        match self {
            Self::Idle => TiltAngles::default(),
            Self::Tilting(tilt) => *tilt,
            Self::SpringingBack(spring) => spring.at(now),
        }
    }

    /// Whether the state needs animation ticks to make progress.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        matches!(self, Self::SpringingBack(_))
    }
}

/// Maps a pointer position within `bounds` to a tilt, using the same
/// face metrics the renderer draws with.
#[must_use]
pub fn tilt_for_cursor(position: Point, bounds: Rectangle, max_degrees: f32) -> TiltAngles {
    let metrics = FaceMetrics::new(bounds.size(), 0.0);
    TiltAngles::toward(position, &metrics, max_degrees)
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Size;

    fn metrics() -> FaceMetrics {
        FaceMetrics::new(Size::new(800.0, 800.0), 28.0)
    }

    #[test]
    fn center_press_produces_no_tilt() {
        let tilt = TiltAngles::toward(Point::new(400.0, 400.0), &metrics(), 10.0);
        assert_eq!(tilt, TiltAngles::default());
    }

    #[test]
    fn press_above_center_tips_the_top_away() {
        let tilt = TiltAngles::toward(Point::new(400.0, 200.0), &metrics(), 10.0);
        assert!(tilt.x > 0.0);
        assert_eq!(tilt.y, 0.0);
    }

    #[test]
    fn press_right_of_center_tips_the_right_away() {
        let tilt = TiltAngles::toward(Point::new(600.0, 400.0), &metrics(), 10.0);
        assert_eq!(tilt.x, 0.0);
        assert!(tilt.y > 0.0);
    }

    #[test]
    fn tilt_saturates_at_the_maximum() {
        let far = TiltAngles::toward(Point::new(4000.0, -4000.0), &metrics(), 10.0);
        assert_eq!(far.x, 10.0);
        assert_eq!(far.y, 10.0);
    }

    #[test]
    fn rim_press_reaches_exactly_the_maximum() {
        let rim = TiltAngles::toward(Point::new(800.0, 400.0), &metrics(), 10.0);
        assert_eq!(rim.y, 10.0);
    }

    #[test]
    fn degenerate_bounds_stay_flat() {
        let m = FaceMetrics::new(Size::new(0.0, 0.0), 28.0);
        let tilt = TiltAngles::toward(Point::new(5.0, 5.0), &m, 10.0);
        assert_eq!(tilt, TiltAngles::default());
    }

    #[test]
    fn foreshortening_is_identity_when_flat() {
        let (sx, sy) = TiltAngles::default().foreshortening();
        assert_eq!(sx, 1.0);
        assert_eq!(sy, 1.0);
    }

    #[test]
    fn foreshortening_shrinks_with_tilt() {
        let (sx, sy) = TiltAngles { x: 10.0, y: 10.0 }.foreshortening();
        assert!(sx < 1.0 && sx > 0.9);
        assert!(sy < 1.0 && sy > 0.9);
    }

    #[test]
    fn overshoot_starts_at_zero_and_ends_at_one() {
        assert!(overshoot(0.0).abs() < 1e-6);
        assert!((overshoot(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn overshoot_passes_beyond_one_mid_curve() {
        assert!(overshoot(0.4) > 1.0);
    }

    #[test]
    fn spring_back_starts_at_the_released_tilt() {
        let from = TiltAngles { x: 6.0, y: -3.0 };
        let start = Instant::now();
        let spring = SpringBack::new(from, start);
        assert_eq!(spring.at(start), from);
    }

    #[test]
    fn spring_back_overshoots_then_lands_flat() {
        let from = TiltAngles { x: 10.0, y: 0.0 };
        let start = Instant::now();
        let spring = SpringBack::new(from, start);

        let mid = spring.at(start + Duration::from_millis(200));
        // 1 - overshoot(0.4) is negative, so the tilt flips sign.
        assert!(mid.x < 0.0);

        let done = spring.at(start + SPRING_BACK_DURATION);
        assert_eq!(done, TiltAngles::default());
        let after = spring.at(start + Duration::from_secs(2));
        assert_eq!(after, TiltAngles::default());
    }

    #[test]
    fn state_machine_runs_press_release_idle_cycle() {
        let mut state = TiltState::default();
        let start = Instant::now();
        assert_eq!(state.current(start), TiltAngles::default());

        let tilt = TiltAngles { x: 4.0, y: 2.0 };
        state.press(tilt);
        assert_eq!(state.current(start), tilt);
        assert!(!state.is_animating());

        state.release(start);
        assert!(state.is_animating());
        assert_eq!(state.current(start), tilt);

        state.tick(start + Duration::from_millis(100));
        assert!(state.is_animating());

        let end = start + SPRING_BACK_DURATION;
        state.tick(end);
        assert_eq!(state, TiltState::Idle);
        assert_eq!(state.current(end), TiltAngles::default());
    }

    #[test]
    fn press_during_spring_back_cancels_the_animation() {
        let mut state = TiltState::default();
        let start = Instant::now();
        state.press(TiltAngles { x: 8.0, y: 0.0 });
        state.release(start);
        assert!(state.is_animating());

        let tilt = TiltAngles { x: -2.0, y: 1.0 };
        state.press(tilt);
        assert!(!state.is_animating());
        assert_eq!(state.current(start), tilt);
    }

    #[test]
    fn releasing_a_flat_tilt_goes_straight_to_idle() {
        let mut state = TiltState::default();
        state.press(TiltAngles::default());
        state.release(Instant::now());
        assert_eq!(state, TiltState::Idle);
    }

    #[test]
    fn release_while_idle_is_a_no_op() {
        let mut state = TiltState::Idle;
        state.release(Instant::now());
        assert_eq!(state, TiltState::Idle);
    }
}
