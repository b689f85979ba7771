//! Duo Pong - a two-paddle Pong simulation core
//!
//! Core modules:
//! - `sim`: Simulation (ball motion, paddle bounces, scoring, serve, pause/restart)
//! - `settings`: Data-driven tuning and playfield defaults
//! - `driver`: Fixed-cadence frame driver that feeds ticks into the simulation

pub mod driver;
pub mod settings;
pub mod sim;

pub use driver::FrameDriver;
pub use settings::{Settings, SettingsError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Tick rate the physics is tuned for (velocity is a per-tick step)
    pub const TICK_RATE_HZ: f32 = 60.0;
    /// Fixed simulation timestep
    pub const SIM_DT: f32 = 1.0 / TICK_RATE_HZ;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame the driver will account for (seconds)
    pub const MAX_FRAME_TIME: f32 = 0.1;

    /// Playfield defaults
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 50.0;
    /// Horizontal speed of a serve, before rotation (pixels per tick)
    pub const SERVE_SPEED: f32 = 4.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 25.0;
    pub const PADDLE_HEIGHT: f32 = 200.0;
    /// Gap between a paddle and its side wall
    pub const PADDLE_MARGIN: f32 = 0.0;
    /// Speed-up applied on each paddle bounce (multiplicative)
    pub const BOUNCE_SPEEDUP: f32 = 1.1;
}

/// Rotate a vector counter-clockwise by `degrees`
#[inline]
pub fn rotate_degrees(v: Vec2, degrees: f32) -> Vec2 {
    Vec2::from_angle(degrees.to_radians()).rotate(v)
}
