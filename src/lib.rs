// Copyright 2025 the Spline Pen Authors
// SPDX-License-Identifier: Apache-2.0

//! Spline Pen: an interactive cubic Bézier spline editor built with Xilem

use anyhow::{Context, Result};
use std::path::PathBuf;
use winit::dpi::LogicalSize;
use xilem::{EventLoopBuilder, WindowView, Xilem, window};

mod components;
mod data;
pub mod config;
pub mod editing;
pub mod geometry;
pub mod model;
pub mod render;
pub mod settings;
pub mod theme;
pub mod tools;
mod views;

use config::Config;
use data::AppState;
use views::editor_window;

/// Entry point for the Spline Pen application
pub fn run(event_loop: EventLoopBuilder) -> Result<()> {
    init_tracing()?;

    let config = load_config()?;
    tracing::info!(
        "Starting with capacity {} knots, window {}x{}",
        config.max_knots,
        config.window_width,
        config.window_height
    );

    let app = Xilem::new(AppState::new(config), app_logic);
    app.run_in(event_loop).context("event loop failed")?;
    Ok(())
}

/// Initialize the tracing subscriber (overridable via RUST_LOG).
/// wgpu/naga shader compilation logs are held at warn.
fn init_tracing() -> Result<()> {
    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    for directive in [
        "spline_pen=info",
        "wgpu=warn",
        "naga=warn",
        "wgpu_core=warn",
        "wgpu_hal=warn",
    ] {
        filter = filter.add_directive(
            directive
                .parse()
                .with_context(|| format!("bad log directive {directive:?}"))?,
        );
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}

/// A config path given on the command line must load; the implicit one
/// falls back to defaults
fn load_config() -> Result<Config> {
    match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => Config::load(&path)
            .with_context(|| format!("could not load config from {}", path.display())),
        None => Ok(Config::load_or_default(&Config::default_path())),
    }
}

/// Build the single editor window
fn app_logic(state: &mut AppState) -> impl Iterator<Item = WindowView<AppState>> + use<> {
    let window_size = LogicalSize::new(state.config.window_width, state.config.window_height);
    let window_view = window(
        state.main_window_id,
        settings::window::TITLE,
        editor_window(state),
    );
    let window_with_options = window_view.with_options(|options| {
        options
            .with_initial_inner_size(window_size)
            .on_close(|state: &mut AppState| state.running = false)
    });

    std::iter::once(window_with_options)
}
