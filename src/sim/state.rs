//! Game state and core simulation types
//!
//! Everything the host needs to render a frame lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::error::{InvalidDimensionSnafu, SimError};
use super::paddle::{Paddle, Side};
use super::serve::serve_velocity;
use crate::consts::*;
use crate::settings::Settings;

/// Lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Never started; the opening serve is in play and scores are 0
    Fresh,
    /// Active gameplay
    Running,
    /// Game is paused
    Paused,
}

/// The playing area, supplied by the host on resize
///
/// Spans (0, 0) to (width, height).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
        }
    }
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Result<Self, SimError> {
        SimError::check_dimensions(width, height)?;
        Ok(Self { width, height })
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width, self.height) * 0.5
    }
}

/// Speed constants the simulation consumes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Horizontal speed of a serve before rotation
    pub serve_speed: f32,
    /// Multiplier applied on each paddle bounce
    pub bounce_speedup: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            serve_speed: SERVE_SPEED,
            bounce_speedup: BOUNCE_SPEEDUP,
        }
    }
}

impl Tuning {
    /// Base serve velocity heading toward `receiver`'s side
    pub fn serve_toward(&self, receiver: Side) -> Vec2 {
        match receiver {
            Side::Left => Vec2::new(-self.serve_speed, 0.0),
            Side::Right => Vec2::new(self.serve_speed, 0.0),
        }
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    pub playfield: Playfield,
    pub tuning: Tuning,
    pub ball: Ball,
    /// Left paddle
    pub player1: Paddle,
    /// Right paddle
    pub player2: Paddle,
    paddle_margin: f32,
}

impl GameState {
    /// Build a state from settings. The ball is centred and at rest until
    /// the first serve.
    pub fn from_settings(settings: &Settings) -> Result<Self, SimError> {
        let playfield = Playfield::new(settings.width, settings.height)?;
        let paddle_size = Vec2::new(settings.paddle_width, settings.paddle_height);
        let mut state = Self {
            phase: GamePhase::Fresh,
            playfield,
            tuning: settings.tuning(),
            ball: Ball::new(settings.ball_size),
            player1: Paddle::new(Side::Left).with_size(paddle_size),
            player2: Paddle::new(Side::Right).with_size(paddle_size),
            paddle_margin: settings.paddle_margin,
        };
        state.check_fit(playfield)?;
        state.layout_paddles();
        let center = state.playfield.center();
        state.player1.set_center_y(center.y);
        state.player2.set_center_y(center.y);
        state.ball.set_center(center);
        Ok(state)
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.player1,
            Side::Right => &mut self.player2,
        }
    }

    /// Scores as (player1, player2)
    pub fn scores(&self) -> (u32, u32) {
        (self.player1.score, self.player2.score)
    }

    pub fn reset_scores(&mut self) {
        self.player1.score = 0;
        self.player2.score = 0;
    }

    /// Check that both paddles fit side by side across `field`
    pub fn check_fit(&self, field: Playfield) -> Result<(), SimError> {
        let needed = self.player1.size.x + self.player2.size.x + self.paddle_margin * 2.0;
        if needed > field.width {
            return InvalidDimensionSnafu {
                width: field.width,
                height: field.height,
            }
            .fail();
        }
        Ok(())
    }

    /// Pin each paddle against its side wall, keeping its vertical position
    pub fn layout_paddles(&mut self) {
        let field = self.playfield;
        self.player1.pos.x = self.paddle_margin;
        self.player2.pos.x = field.width - self.paddle_margin - self.player2.size.x;
    }

    /// Centre the ball and send it off at `base` rotated by `angle` degrees
    pub fn serve_ball(&mut self, base: Vec2, angle: f32) {
        self.ball.set_center(self.playfield.center());
        self.ball.vel = serve_velocity(base, angle);
        log::debug!(
            "Serve at {:.1} deg, vel ({:.3}, {:.3})",
            angle,
            self.ball.vel.x,
            self.ball.vel.y
        );
    }

    /// Render view of the current state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            ball: self.ball.pos,
            ball_velocity: self.ball.vel,
            player1: self.player1.pos,
            player2: self.player2.pos,
            scores: [self.player1.score, self.player2.score],
            paused: self.is_paused(),
        }
    }
}

/// What the host draws each frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub ball: Vec2,
    pub ball_velocity: Vec2,
    pub player1: Vec2,
    pub player2: Vec2,
    pub scores: [u32; 2],
    pub paused: bool,
}

impl Snapshot {
    /// Score label text, left then right
    pub fn score_labels(&self) -> [String; 2] {
        [self.scores[0].to_string(), self.scores[1].to_string()]
    }
}
