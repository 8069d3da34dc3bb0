// Copyright 2025 the Spline Pen Authors
// SPDX-License-Identifier: Apache-2.0

//! Runtime configuration loaded from a TOML file.
//!
//! Every field is optional in the file; missing fields take the defaults
//! from `settings`. The file is looked up in this order: an explicit path
//! (first command-line argument), `$SPLINE_PEN_CONFIG`, then
//! `spline-pen.toml` in the working directory.

use crate::settings;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an alternative config file
pub const CONFIG_ENV_VAR: &str = "SPLINE_PEN_CONFIG";

/// Config file name looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "spline-pen.toml";

/// Errors produced while loading a config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config value: {0}")]
    Invalid(String),
}

/// Editor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Initial window width in logical pixels
    pub window_width: f64,
    /// Initial window height in logical pixels
    pub window_height: f64,
    /// Maximum number of knots on the curve
    pub max_knots: usize,
    /// Radius of knot circles; also the hit radius for knots and handles
    pub knot_radius: f64,
    /// Radius of handle circles
    pub control_point_radius: f64,
    /// Width of the lines joining knots to their handles
    pub handle_line_width: f64,
    /// Width of the sampled curve polyline
    pub curve_width: f64,
    /// Parameter step used to sample each segment
    pub sample_step: f64,
    /// Playback cursor speed in curve parameter units per second
    pub playback_speed: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: settings::window::WIDTH,
            window_height: settings::window::HEIGHT,
            max_knots: settings::curve::MAX_KNOTS,
            knot_radius: settings::interaction::KNOT_RADIUS,
            control_point_radius: settings::interaction::CONTROL_POINT_RADIUS,
            handle_line_width: crate::theme::size::HANDLE_LINE_WIDTH,
            curve_width: crate::theme::size::CURVE_STROKE_WIDTH,
            sample_step: settings::curve::SAMPLE_STEP,
            playback_speed: settings::playback::SPEED,
        }
    }
}

impl Config {
    /// Parse and validate a config from TOML text
    pub fn from_toml_str(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text, path)?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load a config file, falling back to defaults when it is missing or
    /// unusable
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(ConfigError::Read { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                tracing::info!("No config file at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                tracing::warn!("{}, using defaults: {:?}", e, e);
                Self::default()
            }
        }
    }

    /// Resolve the config file path when none is given explicitly
    pub fn default_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Check that every value is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("window_width", self.window_width),
            ("window_height", self.window_height),
            ("knot_radius", self.knot_radius),
            ("control_point_radius", self.control_point_radius),
            ("handle_line_width", self.handle_line_width),
            ("curve_width", self.curve_width),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }

        let max_knots_limit = settings::curve::MAX_KNOTS_LIMIT;
        if !(1..=max_knots_limit).contains(&self.max_knots) {
            return Err(ConfigError::Invalid(format!(
                "max_knots must be between 1 and {max_knots_limit}, got {}",
                self.max_knots
            )));
        }

        let min_step = settings::curve::MIN_SAMPLE_STEP;
        if !(self.sample_step >= min_step && self.sample_step <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "sample_step must be in [{min_step}, 1], got {}",
                self.sample_step
            )));
        }

        if !(self.playback_speed.is_finite() && self.playback_speed >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "playback_speed must be a non-negative number, got {}",
                self.playback_speed
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_settings() {
        let config = Config::default();
        assert_eq!(config.max_knots, 256);
        assert_eq!(config.knot_radius, 15.0);
        assert_eq!(config.control_point_radius, 10.0);
        assert_eq!(config.sample_step, 0.01);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let text = "max_knots = 8\nknot_radius = 20.0\n";
        let config = Config::from_toml_str(text, Path::new("test.toml")).unwrap();

        assert_eq!(config.max_knots, 8);
        assert_eq!(config.knot_radius, 20.0);
        assert_eq!(config.control_point_radius, 10.0);
        assert_eq!(config.window_width, 1600.0);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let err = Config::from_toml_str("max_knots = \"lots\"", Path::new("bad.toml"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let err = Config::from_toml_str("sample_step = 0.0", Path::new("x.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = Config::from_toml_str("max_knots = 0", Path::new("x.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = Config::from_toml_str("knot_radius = -1.0", Path::new("x.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn oversized_capacity_is_rejected() {
        let err = Config::from_toml_str("max_knots = 9223372036854775807", Path::new("x.toml"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let config = Config::from_toml_str("max_knots = 65536", Path::new("x.toml")).unwrap();
        assert_eq!(config.max_knots, 65_536);
    }

    #[test]
    fn tiny_sample_step_is_rejected() {
        let err = Config::from_toml_str("sample_step = 1e-300", Path::new("x.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let config = Config::from_toml_str("sample_step = 1e-4", Path::new("x.toml")).unwrap();
        assert_eq!(config.sample_step, 1e-4);
    }

    #[test]
    fn curve_width_must_be_positive() {
        let err = Config::from_toml_str("curve_width = 0.0", Path::new("x.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let config = Config::from_toml_str("curve_width = 2.5", Path::new("x.toml")).unwrap();
        assert_eq!(config.curve_width, 2.5);
    }

    #[test]
    fn load_reads_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "playback_speed = 1.5").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.playback_speed, 1.5);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        assert!(matches!(
            Config::load(&path),
            Err(ConfigError::Read { .. })
        ));
        assert_eq!(Config::load_or_default(&path), Config::default());
    }

    #[test]
    fn invalid_file_falls_back_to_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "control_point_radius = 0.0").unwrap();

        assert_eq!(Config::load_or_default(file.path()), Config::default());
    }
}
