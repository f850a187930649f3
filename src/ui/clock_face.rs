// SPDX-License-Identifier: MPL-2.0
//! Canvas renderer for the clock face.
//!
//! Draw order matches the layering of the dial: labels and corner arcs
//! first, then the gradient ring sliced into ticks by background-colored
//! lines, then the three hands, and finally two cover circles that hide
//! the hand joints at the center. Everything is drawn under a nonuniform
//! scale that foreshortens the face by the current tilt.

use iced::widget::canvas::{self, Frame, LineCap, Path, Stroke, Text};
use iced::{Point, Vector};

use crate::clock::{geometry, FaceMetrics, HandAngles};
use crate::ui::state::tilt::{tilt_for_cursor, TiltAngles};

/// Segments used to approximate each corner arc.
const ARC_SEGMENTS: usize = 24;

/// Pointer interaction on the clock face, reported to the application.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FaceEvent {
    /// Pointer pressed or dragged; carries the tilt it maps to.
    Pressed(TiltAngles),
    /// Pointer released or left the widget.
    Released,
}

/// Canvas program that draws the dial and reports pointer interaction.
pub struct ClockFace {
    pub angles: HandAngles,
    pub tilt: TiltAngles,
    pub background: iced::Color,
    pub light: iced::Color,
    pub dark: iced::Color,
    pub text_size: f32,
    pub max_tilt_degrees: f32,
}

impl ClockFace {
    fn draw_labels(&self, frame: &mut Frame, metrics: &FaceMetrics) {
        for label in geometry::labels(metrics, self.text_size) {
            frame.fill_text(Text {
                content: label.text.to_string(),
                position: label.anchor,
                color: self.dark,
                size: self.text_size.into(),
                ..Text::default()
            });
        }
    }

    fn draw_corner_arcs(&self, frame: &mut Frame, metrics: &FaceMetrics) {
        for index in 0..4 {
            let points = geometry::corner_arc(metrics, index, ARC_SEGMENTS);
            let mut builder = canvas::path::Builder::new();
            if let Some((first, rest)) = points.split_first() {
                builder.move_to(*first);
                for point in rest {
                    builder.line_to(*point);
                }
            }
            frame.stroke(
                &builder.build(),
                Stroke::default()
                    .with_width(metrics.rim_stroke_width())
                    .with_color(self.dark)
                    .with_line_cap(LineCap::Round),
            );
        }
    }

    /// The gradient ring: one chord per tick slot, colored by its position
    /// in the sweep cycle behind the second hand, then sliced into ticks
    /// by background-colored lines at the slot boundaries.
    fn draw_tick_ring(&self, frame: &mut Frame, metrics: &FaceMetrics) {
        let ticks = geometry::tick_marks(metrics);
        let ring_stroke = Stroke::default().with_width(metrics.ring_width());

        for index in 0..ticks.count {
            let (from, to) = geometry::ring_segment(metrics, index);
            let mid = (index as f32 + 0.5) * ticks.step_degrees;
            let fraction = geometry::gradient_fraction(mid, self.angles.second);
            let color = mix(self.dark, self.light, geometry::gradient_mix(fraction));
            frame.stroke(&Path::line(from, to), ring_stroke.with_color(color));
        }

        let gap_stroke = Stroke::default()
            .with_width(ticks.width)
            .with_color(self.background);
        for index in 0..ticks.count {
            let degrees = index as f32 * ticks.step_degrees;
            let inner = geometry::point_on_circle(metrics.center, ticks.inner, degrees);
            let outer = geometry::point_on_circle(metrics.center, ticks.outer, degrees);
            frame.stroke(&Path::line(inner, outer), gap_stroke);
        }
    }

    fn draw_tapered_hand(
        frame: &mut Frame,
        metrics: &FaceMetrics,
        hand: geometry::TaperedHand,
        degrees: f32,
        color: iced::Color,
    ) {
        frame.with_save(|frame| {
            frame.translate(Vector::new(metrics.center.x, metrics.center.y));
            frame.rotate(degrees.to_radians());
            let mut builder = canvas::path::Builder::new();
            builder.move_to(hand.base_left);
            builder.line_to(hand.shaft_left);
            builder.quadratic_curve_to(hand.tip_control, hand.shaft_right);
            builder.line_to(hand.base_right);
            builder.close();
            frame.fill(&builder.build(), color);
        });
    }

    fn draw_second_hand(&self, frame: &mut Frame, metrics: &FaceMetrics) {
        let hand = geometry::second_hand(metrics);
        frame.with_save(|frame| {
            frame.translate(Vector::new(metrics.center.x, metrics.center.y));
            frame.rotate(self.angles.second.to_radians());
            let mut builder = canvas::path::Builder::new();
            builder.move_to(hand.tip);
            builder.line_to(hand.left);
            builder.line_to(hand.right);
            builder.close();
            frame.fill(&builder.build(), self.light);
        });
    }

    fn draw_cover_circles(&self, frame: &mut Frame, metrics: &FaceMetrics) {
        let (outer, inner) = metrics.cover_circle_radii();
        frame.fill(&Path::circle(metrics.center, outer), self.light);
        frame.fill(&Path::circle(metrics.center, inner), self.background);
    }

    fn draw_face(&self, frame: &mut Frame, metrics: &FaceMetrics) {
        self.draw_labels(frame, metrics);
        self.draw_corner_arcs(frame, metrics);
        self.draw_tick_ring(frame, metrics);
        Self::draw_tapered_hand(
            frame,
            metrics,
            geometry::hour_hand(metrics),
            self.angles.hour,
            self.dark,
        );
        Self::draw_tapered_hand(
            frame,
            metrics,
            geometry::minute_hand(metrics),
            self.angles.minute,
            self.light,
        );
        self.draw_second_hand(frame, metrics);
        self.draw_cover_circles(frame, metrics);
    }
}

impl canvas::Program<FaceEvent> for ClockFace {
    /// Whether a left-button drag started on the face and is still held.
    type State = bool;

    fn update(
        &self,
        pressed: &mut Self::State,
        event: &iced::Event,
        bounds: iced::Rectangle,
        cursor: iced::mouse::Cursor,
    ) -> Option<iced::widget::Action<FaceEvent>> {
        use iced::widget::Action;

        match event {
            iced::Event::Mouse(iced::mouse::Event::ButtonPressed(iced::mouse::Button::Left)) => {
                cursor.position_in(bounds).map(|position| {
                    *pressed = true;
                    let tilt = tilt_for_cursor(position, bounds, self.max_tilt_degrees);
                    Action::publish(FaceEvent::Pressed(tilt)).and_capture()
                })
            }
            iced::Event::Mouse(iced::mouse::Event::CursorMoved { .. }) if *pressed => {
                match cursor.position_in(bounds) {
                    // A drag that leaves the widget releases the tilt.
                    None => {
                        *pressed = false;
                        Some(Action::publish(FaceEvent::Released).and_capture())
                    }
                    Some(position) => {
                        let tilt = tilt_for_cursor(position, bounds, self.max_tilt_degrees);
                        Some(Action::publish(FaceEvent::Pressed(tilt)).and_capture())
                    }
                }
            }
            iced::Event::Mouse(
                iced::mouse::Event::ButtonReleased(iced::mouse::Button::Left)
                | iced::mouse::Event::CursorLeft,
            ) if *pressed => {
                *pressed = false;
                Some(Action::publish(FaceEvent::Released).and_capture())
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: iced::Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let metrics = FaceMetrics::new(bounds.size(), self.text_size);

        frame.fill_rectangle(Point::ORIGIN, bounds.size(), self.background);
        if metrics.radius <= 0.0 {
            return vec![frame.into_geometry()];
        }

        let (scale_x, scale_y) = self.tilt.foreshortening();
        frame.with_save(|frame| {
            frame.translate(Vector::new(metrics.center.x, metrics.center.y));
            frame.scale_nonuniform(Vector::new(scale_x, scale_y));
            frame.translate(Vector::new(-metrics.center.x, -metrics.center.y));
            self.draw_face(frame, &metrics);
        });

        vec![frame.into_geometry()]
    }
}

/// Linear interpolation between two colors, component-wise.
fn mix(from: iced::Color, to: iced::Color, factor: f32) -> iced::Color {
    let factor = factor.clamp(0.0, 1.0);
    let lerp = |a: f32, b: f32| a + (b - a) * factor;
    iced::Color {
        r: lerp(from.r, to.r),
        g: lerp(from.g, to.g),
        b: lerp(from.b, to.b),
        a: lerp(from.a, to.a),
    }
}
