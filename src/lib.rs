// SPDX-License-Identifier: MPL-2.0
//! `miclock` is an analog clock widget built with the Iced GUI framework.
//!
//! It renders the classic MIUI-style dial: sweeping hands with millisecond
//! precision, a rotating gradient ring sliced into 200 ticks, and a
//! touch-driven pseudo-3D tilt that springs back with an overshoot when
//! released.

pub mod app;
pub mod clock;
pub mod config;
pub mod error;
pub mod ui;
