//! Viewer configuration
//!
//! Defaults, optionally overridden by a JSON file, then by command-line flags.

use std::path::Path;

use anyhow::{Context, Result};
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::core::WindowDimensions;
use crate::math::Color;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Pixels per world unit on each axis
    pub scale: [f32; 2],
    /// Screen-space offset in pixels
    pub offset: [f32; 2],
    /// Packed 0x00BBGGRR
    pub background: u32,
    pub foreground: u32,
    /// Interval between redraw-triggering timer wakeups
    pub timer_interval_ms: u64,
    pub tick_hz: f64,
    /// Catch-up cap, in ticks
    pub max_catch_up_quanta: u32,
    pub pendulums: usize,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "Wireframe Sim".to_string(),
            width: 800,
            height: 600,
            scale: [15.0, 15.0],
            offset: [0.0, 0.0],
            background: Color::WHITE.0,
            foreground: Color::BLACK.0,
            timer_interval_ms: 10,
            tick_hz: 60.0,
            max_catch_up_quanta: 10,
            pendulums: 5,
        }
    }
}

impl ViewerConfig {
    /// Parse a JSON configuration; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid viewer configuration")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("in {}", path.display()))
    }

    /// Resolve the configuration for a command line: file first, then flags
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let base = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        Ok(base.with_overrides(cli))
    }

    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(width) = cli.width {
            self.width = width;
        }
        if let Some(height) = cli.height {
            self.height = height;
        }
        if let Some(scale) = cli.scale {
            self.scale = [scale, scale];
        }
        if let Some(tick_hz) = cli.tick_hz {
            self.tick_hz = tick_hz;
        }
        if let Some(pendulums) = cli.pendulums {
            self.pendulums = pendulums;
        }
        self
    }

    pub fn dimensions(&self) -> WindowDimensions {
        WindowDimensions::new(self.width, self.height)
    }

    pub fn scale(&self) -> Vec2 {
        Vec2::from(self.scale)
    }

    pub fn offset(&self) -> Vec2 {
        Vec2::from(self.offset)
    }

    /// Simulation quantum in seconds; non-positive rates fall back to 60 Hz
    pub fn quantum(&self) -> f64 {
        if self.tick_hz > 0.0 {
            1.0 / self.tick_hz
        } else {
            crate::core::DEFAULT_QUANTUM
        }
    }

    /// Catch-up cap in ticks; zero would never step, so it falls back to 10
    pub fn catch_up_quanta(&self) -> u32 {
        if self.max_catch_up_quanta > 0 {
            self.max_catch_up_quanta
        } else {
            log::warn!(
                "max_catch_up_quanta = 0 would stall the simulation, using {}",
                crate::core::DEFAULT_MAX_QUANTA
            );
            crate::core::DEFAULT_MAX_QUANTA
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ViewerConfig::default();
        assert_eq!(config.dimensions(), WindowDimensions::new(800, 600));
        assert_eq!(config.scale(), Vec2::splat(15.0));
        assert!((config.quantum() - 1.0 / 60.0).abs() < 1e-12);
        assert_eq!(config.max_catch_up_quanta, 10);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ViewerConfig::from_json(r#"{ "width": 320, "background": 255 }"#).unwrap();
        assert_eq!(config.width, 320);
        assert_eq!(config.height, 600);
        assert_eq!(config.background, 255);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(ViewerConfig::from_json("{ width: }").is_err());
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli {
            scale: Some(4.0),
            tick_hz: Some(120.0),
            ..Cli::default()
        };
        let config = ViewerConfig::default().with_overrides(&cli);
        assert_eq!(config.scale, [4.0, 4.0]);
        assert!((config.quantum() - 1.0 / 120.0).abs() < 1e-12);
        assert_eq!(config.width, 800);
    }

    #[test]
    fn test_bad_tick_rate_falls_back() {
        let config = ViewerConfig {
            tick_hz: 0.0,
            ..ViewerConfig::default()
        };
        assert!((config.quantum() - 1.0 / 60.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_catch_up_cap_falls_back() {
        let config = ViewerConfig::from_json(r#"{ "max_catch_up_quanta": 0 }"#).unwrap();
        assert_eq!(config.catch_up_quanta(), 10);

        let config = ViewerConfig {
            max_catch_up_quanta: 3,
            ..ViewerConfig::default()
        };
        assert_eq!(config.catch_up_quanta(), 3);
    }
}
