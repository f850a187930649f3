// SPDX-License-Identifier: MPL-2.0
//! User interface: the clock face renderer and its supporting state.

pub mod clock_face;
pub mod design_tokens;
pub mod state;
