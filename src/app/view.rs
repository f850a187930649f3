// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The whole window is one canvas; the face renderer receives everything
//! it needs by value so the view stays a pure function of the state.

use iced::widget::canvas::Canvas;
use iced::{Element, Length};

use super::Message;
use crate::clock::HandAngles;
use crate::config::Config;
use crate::ui::clock_face::ClockFace;
use crate::ui::state::TiltAngles;

/// Context required to render the clock view.
pub struct ViewContext<'a> {
    pub config: &'a Config,
    pub angles: HandAngles,
    pub tilt: TiltAngles,
}

/// Renders the clock face filling the window.
pub fn view(ctx: ViewContext<'_>) -> Element<'static, Message> {
    let face = ClockFace {
        angles: ctx.angles,
        tilt: ctx.tilt,
        background: ctx.config.background(),
        light: ctx.config.light(),
        dark: ctx.config.dark(),
        text_size: ctx.config.text_size(),
        max_tilt_degrees: ctx.config.max_tilt_degrees(),
    };

    Element::from(
        Canvas::new(face)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .map(Message::Face)
}
