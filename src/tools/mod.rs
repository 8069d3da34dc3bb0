// Copyright 2025 the Spline Pen Authors
// SPDX-License-Identifier: Apache-2.0

//! Tool system for spline editing

use crate::editing::{EditSession, MouseDelegate, MouseEvent};

// ===== Tool Identifier =====

/// Tool identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolId {
    /// Append knots and shape their tangents
    Pen,
    /// Pick up and move knots or handles
    Select,
}

impl ToolId {
    pub fn name(self) -> &'static str {
        match self {
            ToolId::Pen => "Pen",
            ToolId::Select => "Select",
        }
    }
}

// ===== Tool Trait =====

/// A tool for editing the spline
pub trait Tool: MouseDelegate<Data = EditSession> {
    /// Get the tool identifier
    fn id(&self) -> ToolId;

    /// Whether a gesture is in progress
    fn is_busy(&self) -> bool;
}

// ===== ToolBox Enum =====

/// The active tool together with its interaction state.
///
/// Each variant carries only the state that makes sense for its mode, so a
/// pen placement and a select drag can never be live at the same time.
#[derive(Debug, Clone)]
pub enum ToolBox {
    Pen(pen::PenTool),
    Select(select::SelectTool),
}

// ===== ToolBox Implementation =====

impl ToolBox {
    /// Create a tool by ID
    pub fn for_id(id: ToolId) -> Self {
        match id {
            ToolId::Pen => ToolBox::Pen(pen::PenTool::default()),
            ToolId::Select => ToolBox::Select(select::SelectTool::default()),
        }
    }

    /// Get the tool ID
    pub fn id(&self) -> ToolId {
        match self {
            ToolBox::Pen(tool) => tool.id(),
            ToolBox::Select(tool) => tool.id(),
        }
    }

    pub fn is_busy(&self) -> bool {
        match self {
            ToolBox::Pen(tool) => tool.is_busy(),
            ToolBox::Select(tool) => tool.is_busy(),
        }
    }
}

impl Default for ToolBox {
    fn default() -> Self {
        Self::for_id(ToolId::Pen)
    }
}

// ===== MouseDelegate Implementation =====

impl MouseDelegate for ToolBox {
    type Data = EditSession;

    fn left_down(&mut self, event: MouseEvent, data: &mut EditSession) {
        match self {
            ToolBox::Pen(tool) => tool.left_down(event, data),
            ToolBox::Select(tool) => tool.left_down(event, data),
        }
    }

    fn mouse_moved(&mut self, event: MouseEvent, data: &mut EditSession) {
        match self {
            ToolBox::Pen(tool) => tool.mouse_moved(event, data),
            ToolBox::Select(tool) => tool.mouse_moved(event, data),
        }
    }

    fn left_up(&mut self, event: MouseEvent, data: &mut EditSession) {
        match self {
            ToolBox::Pen(tool) => tool.left_up(event, data),
            ToolBox::Select(tool) => tool.left_up(event, data),
        }
    }

    fn cancel(&mut self, data: &mut EditSession) {
        match self {
            ToolBox::Pen(tool) => tool.cancel(data),
            ToolBox::Select(tool) => tool.cancel(data),
        }
    }
}

// ===== Tool Modules =====

pub mod pen;
pub mod select;
