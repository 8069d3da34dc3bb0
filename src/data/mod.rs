// Copyright 2025 the Spline Pen Authors
// SPDX-License-Identifier: Apache-2.0

//! Central application state (`AppState`) that drives the Xilem reactive UI.
//!
//! The edit session itself lives inside the canvas widget. `AppState` keeps
//! what the rest of the UI needs: the loaded config, the latest session
//! status for the status label, and window bookkeeping.

use crate::config::Config;
use crate::editing::SessionStatus;
use crate::tools::ToolId;
use std::sync::Arc;
use xilem::WindowId;

/// Main application state
pub struct AppState {
    /// Configuration loaded at startup, shared with the canvas view
    pub config: Arc<Config>,

    /// Latest status reported by the canvas
    pub status: SessionStatus,

    /// Whether the app should keep running
    pub running: bool,

    /// Main window ID (stable across rebuilds to prevent window
    /// recreation)
    pub main_window_id: WindowId,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let status = SessionStatus {
            tool: ToolId::Pen,
            knot_count: 0,
            capacity: config.max_knots,
            segment_count: 0,
        };
        Self {
            config: Arc::new(config),
            status,
            running: true,
            main_window_id: WindowId::next(),
        }
    }

    /// Record a status update from the canvas
    pub fn set_status(&mut self, status: SessionStatus) {
        self.status = status;
    }
}

impl xilem::AppState for AppState {
    fn keep_running(&self) -> bool {
        self.running
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
