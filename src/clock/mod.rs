// SPDX-License-Identifier: MPL-2.0
//! Pure per-frame clock computations: wall-clock time to hand angles, and
//! widget size to face geometry. Nothing in here touches the renderer.

pub mod angles;
pub mod geometry;

pub use angles::HandAngles;
pub use geometry::FaceMetrics;
