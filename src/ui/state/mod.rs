// SPDX-License-Identifier: MPL-2.0
//! Interaction state that lives outside the renderer.

pub mod tilt;

pub use tilt::{SpringBack, TiltAngles, TiltState, SPRING_BACK_DURATION};
