// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens for the clock face.
//!
//! The palette mirrors the classic MIUI clock styling: a deep blue dial with
//! a bright accent for the minute/second hands and a half-transparent white
//! for the quieter elements (hour hand, labels, rim arcs, gradient tail).

use iced::Color;

pub mod palette {
    use super::Color;

    /// Default dial background (#237EAD).
    pub const MI_BLUE: Color = Color::from_rgb(
        0x23 as f32 / 255.0,
        0x7E as f32 / 255.0,
        0xAD as f32 / 255.0,
    );

    /// Bright accent: minute hand, second hand, gradient head (#FFFFFF).
    pub const LIGHT: Color = Color::WHITE;

    /// Muted accent: hour hand, labels, rim arcs, gradient tail (#80FFFFFF).
    pub const DARK: Color = Color::from_rgba(1.0, 1.0, 1.0, 0x80 as f32 / 255.0);
}

pub mod typography {
    /// Default size of the "12"/"3"/"6"/"9" dial labels, in logical pixels.
    pub const LABEL_SIZE: f32 = 28.0;
}

pub mod sizing {
    /// Default edge length of the clock window. The widget was designed
    /// around an 800-unit square and all face metrics scale from it.
    pub const WINDOW_DEFAULT: f32 = 800.0;

    /// Smallest window edge at which the face stays legible.
    pub const WINDOW_MIN: f32 = 320.0;
}
