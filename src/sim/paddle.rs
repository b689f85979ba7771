//! Player paddles

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::collision::{Aabb, hit_offset};
use crate::consts::{PADDLE_HEIGHT, PADDLE_WIDTH};

/// Which player a paddle belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Player 1, defends the left edge
    Left,
    /// Player 2, defends the right edge
    Right,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "player1",
            Side::Right => "player2",
        }
    }
}

/// A player's paddle and score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    /// Bottom-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub score: u32,
}

impl Paddle {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            pos: Vec2::ZERO,
            size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            score: 0,
        }
    }

    pub fn with_size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Place the paddle so its centre sits at `center`
    pub fn set_center(&mut self, center: Vec2) {
        self.pos = center - self.size * 0.5;
    }

    /// Move vertically so the centre sits at `y`. No clamping to the field.
    pub fn set_center_y(&mut self, y: f32) {
        self.pos.y = y - self.size.y * 0.5;
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    /// Reflect the ball if it overlaps this paddle
    ///
    /// The horizontal component flips, the whole velocity is scaled by
    /// `speedup`, then the hit offset (where on the paddle the ball struck,
    /// roughly -1 at the bottom edge to +1 at the top) is added to the
    /// vertical component. Returns whether a bounce happened.
    pub fn bounce_ball(&self, ball: &mut Ball, speedup: f32) -> bool {
        let paddle = self.bounds();
        let hit = ball.bounds();
        if !paddle.overlaps(&hit) {
            return false;
        }

        let offset = hit_offset(&paddle, &hit);
        let bounced = Vec2::new(-ball.vel.x, ball.vel.y) * speedup;
        ball.vel = Vec2::new(bounced.x, bounced.y + offset);

        log::debug!(
            "{} bounce: offset {:.3}, vel now ({:.3}, {:.3})",
            self.side.as_str(),
            offset,
            ball.vel.x,
            ball.vel.y
        );
        true
    }
}
