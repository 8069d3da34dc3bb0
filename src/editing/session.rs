// Copyright 2025 the Spline Pen Authors
// SPDX-License-Identifier: Apache-2.0

//! Edit session - owns the curve and the active tool

use super::mouse::{MouseDelegate, MouseEvent};
use crate::config::Config;
use crate::model::{Curve, PlaybackCursor};
use crate::tools::{ToolBox, ToolId};
use kurbo::Point;
use std::fmt;

// ===== Commands =====

/// Discrete editor commands, bound to keys by the canvas widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Drop every knot and return to the pen
    Reset,
    EnterPen,
    EnterSelect,
}

impl Command {
    /// Map a typed character to a command (case-insensitive)
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "c" | "C" => Some(Command::Reset),
            "p" | "P" => Some(Command::EnterPen),
            "s" | "S" => Some(Command::EnterSelect),
            _ => None,
        }
    }
}

// ===== Session Status =====

/// Summary of the session shown in the status label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStatus {
    pub tool: ToolId,
    pub knot_count: usize,
    pub capacity: usize,
    pub segment_count: usize,
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}  |  knots {}/{}  |  segments {}",
            self.tool.name(),
            self.knot_count,
            self.capacity,
            self.segment_count
        )
    }
}

// ===== EditSession Struct =====

/// Editing session for a single spline
///
/// Holds the curve, the current tool with its gesture state, and the
/// playback cursor. All input reaches the curve through here.
#[derive(Debug, Clone)]
pub struct EditSession {
    /// The spline being edited
    pub curve: Curve,

    /// Current editing tool
    pub current_tool: ToolBox,

    /// Pick distance for knots and handles
    pub hit_radius: f64,

    /// Position along the curve, advanced once per frame
    pub playback: PlaybackCursor,
}

impl EditSession {
    pub fn new(config: &Config) -> Self {
        Self {
            curve: Curve::with_capacity(config.max_knots),
            current_tool: ToolBox::default(),
            hit_radius: config.knot_radius,
            playback: PlaybackCursor::new(config.playback_speed),
        }
    }

    pub fn tool_id(&self) -> ToolId {
        self.current_tool.id()
    }

    // ===== Pointer Input =====

    pub fn mouse_down(&mut self, pos: Point) {
        self.with_tool(|tool, session| tool.left_down(MouseEvent::new(pos), session));
    }

    pub fn mouse_moved(&mut self, pos: Point) {
        self.with_tool(|tool, session| tool.mouse_moved(MouseEvent::new(pos), session));
    }

    pub fn mouse_up(&mut self, pos: Point) {
        self.with_tool(|tool, session| tool.left_up(MouseEvent::new(pos), session));
    }

    /// Abandon the gesture in progress, as when the pointer is lost
    pub fn cancel_gesture(&mut self) {
        self.with_tool(|tool, session| tool.cancel(session));
    }

    /// Run `f` with the tool taken out of the session, so the tool can
    /// mutate the session it lives in
    fn with_tool(&mut self, f: impl FnOnce(&mut ToolBox, &mut EditSession)) {
        let mut tool = std::mem::take(&mut self.current_tool);
        f(&mut tool, self);
        self.current_tool = tool;
    }

    // ===== Commands =====

    pub fn apply_command(&mut self, command: Command) {
        tracing::debug!("Command: {:?}", command);
        match command {
            Command::Reset => self.reset(),
            Command::EnterPen => self.set_tool(ToolId::Pen),
            Command::EnterSelect => self.set_tool(ToolId::Select),
        }
    }

    /// Clear the curve and return to an idle pen
    pub fn reset(&mut self) {
        self.curve.clear();
        self.playback.reset();
        self.current_tool = ToolBox::for_id(ToolId::Pen);
    }

    /// Switch tools. The outgoing tool is cancelled first; switching to
    /// the tool already in use keeps its state.
    pub fn set_tool(&mut self, id: ToolId) {
        if self.current_tool.id() == id {
            return;
        }
        self.cancel_gesture();
        self.current_tool = ToolBox::for_id(id);
        tracing::debug!("Switched to {} tool", id.name());
    }

    // ===== Playback =====

    pub fn advance_playback(&mut self, elapsed: f64) {
        self.playback.advance(elapsed, self.curve.len());
    }

    pub fn status(&self) -> SessionStatus {
        SessionStatus {
            tool: self.tool_id(),
            knot_count: self.curve.len(),
            capacity: self.curve.capacity(),
            segment_count: self.curve.segment_count(),
        }
    }
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
