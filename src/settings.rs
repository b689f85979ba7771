//! Game settings
//!
//! Tuning and playfield defaults, loadable from a JSON file. Every field is
//! optional in the file; missing fields keep their defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use snafu::{ResultExt, Snafu};

use crate::consts::*;
use crate::sim::Tuning;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum SettingsError {
    #[snafu(display("could not read settings from {}", path.display()))]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("could not parse settings"))]
    Parse { source: serde_json::Error },

    #[snafu(display("could not encode settings"))]
    Encode { source: serde_json::Error },

    #[snafu(display("invalid settings: {reason}"))]
    Invalid { reason: String },
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Playfield ===
    /// Initial playfield width
    pub width: f32,
    /// Initial playfield height
    pub height: f32,

    // === Bodies ===
    pub ball_size: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Gap between each paddle and its side wall
    pub paddle_margin: f32,

    // === Tuning ===
    /// Serve speed in pixels per tick
    pub serve_speed: f32,
    /// Multiplier applied to the ball's velocity on each paddle bounce
    pub bounce_speedup: f32,
    /// Ticks per second the frame driver aims for
    pub tick_rate: f32,

    /// Serve RNG seed; random when absent
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,

            ball_size: BALL_SIZE,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_margin: PADDLE_MARGIN,

            serve_speed: SERVE_SPEED,
            bounce_speedup: BOUNCE_SPEEDUP,
            tick_rate: TICK_RATE_HZ,

            seed: None,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json).context(ParseSnafu)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).context(ReadSnafu { path })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        serde_json::to_string_pretty(self).context(EncodeSnafu)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("ball_size", self.ball_size),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("serve_speed", self.serve_speed),
            ("bounce_speedup", self.bounce_speedup),
            ("tick_rate", self.tick_rate),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return InvalidSnafu {
                    reason: format!("{name} must be positive, got {value}"),
                }
                .fail();
            }
        }
        if !(self.paddle_margin.is_finite() && self.paddle_margin >= 0.0) {
            return InvalidSnafu {
                reason: format!("paddle_margin must not be negative, got {}", self.paddle_margin),
            }
            .fail();
        }
        if self.paddle_margin * 2.0 + self.paddle_width * 2.0 > self.width {
            return InvalidSnafu {
                reason: "paddles do not fit across the playfield".to_string(),
            }
            .fail();
        }
        Ok(())
    }

    /// Speed constants for the simulation
    pub fn tuning(&self) -> Tuning {
        Tuning {
            serve_speed: self.serve_speed,
            bounce_speedup: self.bounce_speedup,
        }
    }

    /// Fixed tick duration in seconds
    pub fn tick_dt(&self) -> f32 {
        1.0 / self.tick_rate
    }
}
