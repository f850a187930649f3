// SPDX-License-Identifier: MPL-2.0
//! Face geometry: everything the renderer draws, computed as plain points.
//!
//! All ratios follow the classic MIUI dial: the rim padding and
//! tick length are 12% of the radius, the tick ring holds 200 marks of 1.8°
//! each, the corner arcs sweep 80° leaving 10° gaps around the labels, and
//! the hand silhouettes are narrow trapezoids closed by a quadratic tip.
//!
//! Angle convention: degrees measured clockwise from 12 o'clock, matching
//! the hand angles in [`crate::clock::angles`]. The y axis grows downward
//! (canvas coordinates).

use iced::{Point, Size};

/// Number of tick marks (and gradient ring segments) around the dial.
pub const TICK_COUNT: usize = 200;

/// Angular step between adjacent tick marks.
pub const TICK_STEP_DEGREES: f32 = 360.0 / TICK_COUNT as f32;

/// Fraction of the sweep cycle that stays at the dark color before the
/// ramp toward the light color begins.
pub const GRADIENT_STOP: f32 = 0.75;

/// Sweep of each corner arc.
pub const CORNER_ARC_SWEEP_DEGREES: f32 = 80.0;

/// Gap between a corner arc and the label axis next to it.
pub const CORNER_ARC_GAP_DEGREES: f32 = 5.0;

/// Estimated cap height of a digit as a fraction of the font size. The
/// canvas cannot measure text, so label layout works from this estimate.
const TEXT_HEIGHT_FACTOR: f32 = 0.72;

/// Estimated advance width of a digit as a fraction of the font size.
const DIGIT_WIDTH_FACTOR: f32 = 0.56;

/// Default line box height relative to the font size.
const LINE_HEIGHT_FACTOR: f32 = 1.3;

/// Per-frame layout of the clock face, derived from the allocated size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceMetrics {
    pub center: Point,
    /// Dial radius including the rim padding, `min(w, h) / 2`.
    pub radius: f32,
    /// Inset that keeps the tilted dial inside the widget bounds.
    pub rim_padding: f32,
    /// Length of a tick mark; also the gradient ring stroke width.
    pub scale_length: f32,
    /// Estimated glyph box height of the dial labels.
    pub text_height: f32,
}

impl FaceMetrics {
    #[must_use]
    pub fn new(size: Size, text_size: f32) -> Self {
        let radius = (size.width.min(size.height) / 2.0).max(0.0);
        Self {
            center: Point::new(size.width / 2.0, size.height / 2.0),
            radius,
            rim_padding: 0.12 * radius,
            scale_length: 0.12 * radius,
            text_height: TEXT_HEIGHT_FACTOR * text_size,
        }
    }

    /// Radius of the circle the corner arcs and label centers sit on.
    #[must_use]
    pub fn corner_arc_radius(&self) -> f32 {
        self.radius - self.rim_padding - self.text_height / 2.0
    }

    /// Center-line radius of the gradient ring.
    #[must_use]
    pub fn ring_radius(&self) -> f32 {
        self.corner_arc_radius() - 1.5 * self.scale_length
    }

    /// Stroke width of the gradient ring.
    #[must_use]
    pub fn ring_width(&self) -> f32 {
        self.scale_length
    }

    /// Stroke width of a tick mark.
    #[must_use]
    pub fn tick_width(&self) -> f32 {
        0.012 * self.radius
    }

    /// Stroke width of the corner arcs.
    #[must_use]
    pub fn rim_stroke_width(&self) -> f32 {
        (0.008 * self.radius).max(1.0)
    }

    /// Radii of the two cover circles hiding the hand joints.
    #[must_use]
    pub fn cover_circle_radii(&self) -> (f32, f32) {
        (0.05 * self.radius, 0.025 * self.radius)
    }
}

/// Point on a circle around `center`, `degrees` clockwise from 12 o'clock.
#[must_use]
pub fn point_on_circle(center: Point, radius: f32, degrees: f32) -> Point {
    let radians = degrees.to_radians();
    Point::new(
        center.x + radius * radians.sin(),
        center.y - radius * radians.cos(),
    )
}

/// Second hand: a small filled triangle near the rim. Points are relative
/// to the face center in the 12 o'clock orientation; the renderer rotates
/// the canvas by the hand angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SecondHand {
    pub tip: Point,
    pub left: Point,
    pub right: Point,
}

#[must_use]
pub fn second_hand(metrics: &FaceMetrics) -> SecondHand {
    let rim = -metrics.corner_arc_radius();
    let r = metrics.radius;
    SecondHand {
        tip: Point::new(0.0, rim + 0.27 * r),
        left: Point::new(-0.05 * r, rim + 0.35 * r),
        right: Point::new(0.05 * r, rim + 0.35 * r),
    }
}

/// Hour or minute hand: a trapezoid from the center toward the rim whose
/// tip is closed by one quadratic curve. Relative to the face center,
/// 12 o'clock orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaperedHand {
    pub base_left: Point,
    pub shaft_left: Point,
    /// Control point of the quadratic curve joining the two shaft ends.
    pub tip_control: Point,
    pub shaft_right: Point,
    pub base_right: Point,
}

fn tapered_hand(metrics: &FaceMetrics, base: f32, shaft: f32, reach: f32) -> TaperedHand {
    let rim = -metrics.corner_arc_radius();
    let r = metrics.radius;
    TaperedHand {
        base_left: Point::new(-base * r, 0.0),
        shaft_left: Point::new(-shaft * r, rim + reach * r),
        tip_control: Point::new(0.0, rim + (reach - 0.02) * r),
        shaft_right: Point::new(shaft * r, rim + reach * r),
        base_right: Point::new(base * r, 0.0),
    }
}

#[must_use]
pub fn hour_hand(metrics: &FaceMetrics) -> TaperedHand {
    tapered_hand(metrics, 0.02, 0.01, 0.5)
}

#[must_use]
pub fn minute_hand(metrics: &FaceMetrics) -> TaperedHand {
    tapered_hand(metrics, 0.01, 0.008, 0.38)
}

/// Tick ring parameters. The renderer draws one vertical tick at the top
/// and rotates the canvas by [`TICK_STEP_DEGREES`] between marks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickMarks {
    pub count: usize,
    pub step_degrees: f32,
    /// Distance from the center to the inner end of a tick.
    pub inner: f32,
    /// Distance from the center to the outer end of a tick.
    pub outer: f32,
    pub width: f32,
}

#[must_use]
pub fn tick_marks(metrics: &FaceMetrics) -> TickMarks {
    let outer = metrics.corner_arc_radius() - metrics.scale_length;
    TickMarks {
        count: TICK_COUNT,
        step_degrees: TICK_STEP_DEGREES,
        inner: outer - metrics.scale_length,
        outer,
        width: metrics.tick_width(),
    }
}

/// Chord endpoints of gradient ring segment `index` out of [`TICK_COUNT`].
#[must_use]
pub fn ring_segment(metrics: &FaceMetrics, index: usize) -> (Point, Point) {
    let radius = metrics.ring_radius();
    let from = index as f32 * TICK_STEP_DEGREES;
    let to = from + TICK_STEP_DEGREES;
    (
        point_on_circle(metrics.center, radius, from),
        point_on_circle(metrics.center, radius, to),
    )
}

/// Position of `angle` within the sweep cycle, `[0, 1)`.
///
/// The cycle starts at the second hand and runs clockwise, so the value
/// approaches 1 just behind the hand; feeding it through
/// [`gradient_mix`] puts the brightest point right at the hand with a
/// tail fading counter-clockwise behind it.
#[must_use]
pub fn gradient_fraction(angle_degrees: f32, second_degree: f32) -> f32 {
    ((angle_degrees - second_degree).rem_euclid(360.0)) / 360.0
}

/// Dark-to-light mix factor for a cycle position: 0 up to
/// [`GRADIENT_STOP`], then a linear ramp to 1.
#[must_use]
pub fn gradient_mix(fraction: f32) -> f32 {
    if fraction < GRADIENT_STOP {
        0.0
    } else {
        ((fraction - GRADIENT_STOP) / (1.0 - GRADIENT_STOP)).min(1.0)
    }
}

/// Polyline approximation of corner arc `index` (0 = top-right quadrant,
/// continuing clockwise), with `segments + 1` points.
#[must_use]
pub fn corner_arc(metrics: &FaceMetrics, index: usize, segments: usize) -> Vec<Point> {
    let radius = metrics.corner_arc_radius();
    let start = 90.0 * index as f32 + CORNER_ARC_GAP_DEGREES;
    (0..=segments)
        .map(|i| {
            let t = i as f32 / segments as f32;
            point_on_circle(metrics.center, radius, start + t * CORNER_ARC_SWEEP_DEGREES)
        })
        .collect()
}

/// A dial label and the top-left anchor to draw it at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Label {
    pub text: &'static str,
    pub anchor: Point,
}

/// The four dial labels. Their centers sit on the corner-arc circle at the
/// cardinal directions; anchors are estimated top-left corners since the
/// canvas draws text from its top-left by default.
#[must_use]
pub fn labels(metrics: &FaceMetrics, text_size: f32) -> [Label; 4] {
    let ring = metrics.corner_arc_radius();
    let line_half = LINE_HEIGHT_FACTOR * text_size / 2.0;
    let anchored = |text: &'static str, degrees: f32| {
        let center = point_on_circle(metrics.center, ring, degrees);
        let half_width = DIGIT_WIDTH_FACTOR * text_size * text.len() as f32 / 2.0;
        Label {
            text,
            anchor: Point::new(center.x - half_width, center.y - line_half),
        }
    };
    [
        anchored("12", 0.0),
        anchored("3", 90.0),
        anchored("6", 180.0),
        anchored("9", 270.0),
    ]
}
