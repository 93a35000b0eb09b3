//! Meteor trajectory geometry.
//!
//! A meteor is a flat horizontal streak rotated by some angle. To make its
//! visible tail animate from off-screen into its resting spot, the generator
//! pre-offsets it by the full rotated tail length and lets the animation pull
//! that offset back to zero. This module computes the offset magnitudes; the
//! caller picks the signs.

use yuseong_core::GenerationConstants;

use crate::math;

/// Offset magnitudes for a meteor's animation start position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trajectory {
    /// Vertical pre-offset magnitude in pixels.
    pub vertical: f64,
    /// Horizontal pre-offset magnitude in pixels.
    pub horizontal: f64,
    /// Absolute rotation angle in degrees, for the caller's sign decision.
    pub beta: f64,
}

/// Derive the travel offset for a meteor rotated by `rotation_deg`.
pub fn calculate(rotation_deg: f64, constants: &GenerationConstants) -> Trajectory {
    let beta = rotation_deg.abs();
    let beta_radians = math::to_radians(beta);

    let reach = constants.meteor_length_px * constants.trajectory_multiplier;

    Trajectory {
        vertical: beta_radians.sin().abs() * reach,
        horizontal: beta_radians.cos().abs() * reach,
        beta,
    }
}
