//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform code:
//! - One fixed velocity step per tick
//! - Serve randomness only through an injected `AngleSource`
//! - Input is validated at the `Game` boundary

pub mod ball;
pub mod collision;
pub mod error;
pub mod game;
pub mod paddle;
pub mod serve;
pub mod state;
pub mod tick;

pub use ball::Ball;
pub use collision::{Aabb, hit_offset};
pub use error::SimError;
pub use game::{Command, Game, Outcome};
pub use paddle::{Paddle, Side};
pub use serve::{AngleSource, FixedAngle, SeededAngles, serve_velocity};
pub use state::{GamePhase, GameState, Playfield, Snapshot, Tuning};
pub use tick::{GameEvent, tick};
