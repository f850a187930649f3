// SPDX-License-Identifier: MPL-2.0
//! Wall-clock time to hand angles.
//!
//! The second hand carries millisecond precision so it sweeps instead of
//! ticking; the fractional seconds feed the minute angle and the fractional
//! minutes feed the hour angle, which keeps every hand moving continuously.

use chrono::Timelike;

/// Angles of the three hands in fractional degrees, each in `[0, 360)`.
/// Zero points at 12 o'clock; angles grow clockwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandAngles {
    pub hour: f32,
    pub minute: f32,
    pub second: f32,
}

impl HandAngles {
    /// Computes hand angles for a clock reading.
    ///
    /// Out-of-range fields wrap (`hour` modulo 12, `minute`/`second`
    /// modulo 60) so any timestamp source is safe to feed in.
    #[must_use]
    pub fn from_clock(hour: u32, minute: u32, second: u32, millisecond: u32) -> Self {
        let seconds = (second % 60) as f32 + (millisecond % 1000) as f32 / 1000.0;
        let minutes = (minute % 60) as f32 + seconds / 60.0;
        let hours = (hour % 12) as f32 + minutes / 60.0;

        Self {
            hour: hours / 12.0 * 360.0,
            minute: minutes / 60.0 * 360.0,
            second: seconds / 60.0 * 360.0,
        }
    }

    /// Reads the local wall clock.
    #[must_use]
    pub fn now() -> Self {
        let now = chrono::Local::now();
        Self::from_clock(
            now.hour(),
            now.minute(),
            now.second(),
            now.timestamp_subsec_millis().min(999),
        )
    }
}
