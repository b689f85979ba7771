//! Rejected simulation input
//!
//! Nothing in the simulation is fatal. Malformed input is refused and the
//! state is left as it was; the host logs the error and carries on.

use snafu::Snafu;

#[derive(Debug, Clone, PartialEq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum SimError {
    /// Playfield must have finite, positive width and height
    #[snafu(display("invalid playfield dimensions {width}x{height}"))]
    InvalidDimension { width: f32, height: f32 },

    /// Tick duration must be finite and positive
    #[snafu(display("invalid tick duration {dt}"))]
    InvalidTick { dt: f32 },

    /// Pointer coordinates must be finite
    #[snafu(display("invalid pointer position ({x}, {y})"))]
    InvalidPointer { x: f32, y: f32 },
}

impl SimError {
    /// Check playfield dimensions
    pub fn check_dimensions(width: f32, height: f32) -> Result<(), SimError> {
        if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
            Ok(())
        } else {
            InvalidDimensionSnafu { width, height }.fail()
        }
    }

    /// Check a tick duration
    pub fn check_tick(dt: f32) -> Result<(), SimError> {
        if dt.is_finite() && dt > 0.0 {
            Ok(())
        } else {
            InvalidTickSnafu { dt }.fail()
        }
    }
}
