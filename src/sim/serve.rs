//! Serve direction
//!
//! A serve takes a base velocity and rotates it by a random angle. The
//! angle comes from an `AngleSource` so replays and tests can pin it.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::rotate_degrees;

/// Supplies serve angles in degrees, uniformly in [0, 360)
pub trait AngleSource {
    fn next_angle(&mut self) -> f32;
}

/// Seeded PCG angle source
#[derive(Debug, Clone)]
pub struct SeededAngles {
    seed: u64,
    rng: Pcg32,
}

impl SeededAngles {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl AngleSource for SeededAngles {
    fn next_angle(&mut self) -> f32 {
        self.rng.random_range(0.0..360.0)
    }
}

/// Always serves at the same angle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixedAngle(pub f32);

impl AngleSource for FixedAngle {
    fn next_angle(&mut self) -> f32 {
        self.0
    }
}

impl<A: AngleSource + ?Sized> AngleSource for &mut A {
    fn next_angle(&mut self) -> f32 {
        (**self).next_angle()
    }
}

impl<A: AngleSource + ?Sized> AngleSource for Box<A> {
    fn next_angle(&mut self) -> f32 {
        (**self).next_angle()
    }
}

/// Velocity of a serve: `base` rotated counter-clockwise by `angle` degrees
#[inline]
pub fn serve_velocity(base: Vec2, angle: f32) -> Vec2 {
    rotate_degrees(base, angle)
}
