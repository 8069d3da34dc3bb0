// Copyright 2025 the Spline Pen Authors
// SPDX-License-Identifier: Apache-2.0

//! Editing model and interaction

pub mod hit_test;
pub mod mouse;
pub mod selection;
pub mod session;

pub use mouse::{MouseDelegate, MouseEvent};
pub use selection::Selection;
pub use session::{Command, EditSession, SessionStatus};
