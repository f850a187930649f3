// SPDX-License-Identifier: MPL-2.0
//! Animation subscriptions for the application.
//!
//! The second hand sweeps continuously, so the clock redraws on a fixed
//! timer instead of only when interaction happens. The same ticks drive
//! the tilt spring-back animation.

use iced::{time, Subscription};
use std::time::Duration;

use super::Message;

/// Interval between animation frames, roughly 60 frames per second.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Periodic tick driving the hand sweep and the tilt animation.
pub fn create_tick_subscription() -> Subscription<Message> {
    time::every(FRAME_INTERVAL).map(Message::Tick)
}
