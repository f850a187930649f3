// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use std::path::PathBuf;
use std::time::Instant;

use crate::ui::clock_face::FaceEvent;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Animation frame: refresh the hand angles and advance the tilt
    /// spring-back.
    Tick(Instant),
    /// Pointer interaction on the clock face.
    Face(FaceEvent),
}

/// Runtime flags parsed from the command line by `main.rs`.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Settings file to load instead of the per-user default location.
    pub config_path: Option<PathBuf>,
    /// Dial background color override, `#RRGGBB` or `#AARRGGBB`.
    pub background: Option<String>,
}
