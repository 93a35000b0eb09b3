//! Per-entity descriptor generators.

use rand::Rng;
use yuseong_core::GenerationConstants;

use crate::descriptor::{Animation, BlackHole, BlackHoleDetail, Meteor, Star};
use crate::{math, trajectory};

/// Generate one star: uniform placement plus a random twinkle start offset.
pub fn star(rng: &mut impl Rng, constants: &GenerationConstants) -> Star {
    Star {
        left_percent: math::uniform(rng, 0.0, 100.0),
        top_percent: math::uniform(rng, 0.0, 100.0),
        twinkle_delay_s: Some(math::uniform(rng, 0.0, constants.max_twinkle_delay_s)),
    }
}

/// Generate one meteor.
///
/// Rotation is the negative of a draw from the rotation range, so every
/// meteor travels down-and-across in the same diagonal family. The trajectory
/// offset magnitudes come from the rotation; the signs are decided here: the
/// streak always starts above its resting point, and it starts to the right
/// of it exactly when the travel direction is leftward (`beta < 90`).
pub fn meteor(rng: &mut impl Rng, constants: &GenerationConstants) -> Meteor {
    let rotation_deg = -math::uniform(
        rng,
        constants.min_rotation_deg,
        constants.max_rotation_deg,
    );
    let scale = math::uniform(rng, constants.min_scale, constants.max_scale);
    let left_percent = math::uniform(
        rng,
        constants.min_left_percent,
        constants.max_left_percent,
    );
    let top_percent = math::uniform(
        rng,
        constants.min_top_percent,
        constants.max_top_percent,
    );
    let duration_s = math::uniform(rng, constants.min_duration_s, constants.max_duration_s);
    let delay_s = math::uniform(rng, 0.0, constants.max_delay_s);

    let track = trajectory::calculate(rotation_deg, constants);
    let margin_left_px = horizontal_offset(&track);

    Meteor {
        left_percent,
        top_percent,
        width_px: constants.meteor_length_px,
        rotation_deg,
        scale,
        margin_top_px: -track.vertical,
        margin_left_px,
        translate_px: (track.horizontal, track.vertical),
        animation: Some(Animation {
            duration_s,
            delay_s,
        }),
    }
}

/// Signed horizontal pre-offset for a trajectory.
///
/// Below 90 degrees the streak travels leftward and starts to the right of
/// its resting point (positive offset); at 90 and beyond the sign flips.
fn horizontal_offset(track: &trajectory::Trajectory) -> f64 {
    if track.beta < 90.0 {
        track.horizontal
    } else {
        -track.horizontal
    }
}

/// Build the black hole descriptor. Layout is fixed; only the slow drift
/// loop animates, and the three streak details are static.
pub fn black_hole() -> BlackHole {
    BlackHole {
        size_px: 200.0,
        top_percent: 10.0,
        right_percent: 10.0,
        drift_target_px: (-500.0, 500.0),
        drift: Some(Animation {
            duration_s: 100.0,
            delay_s: 0.0,
        }),
        details: [
            BlackHoleDetail {
                top_percent: 74.0,
                left_percent: 50.0,
                rotation_deg: -10.0,
                width_px: 80.0,
                height_px: 4.0,
            },
            BlackHoleDetail {
                top_percent: 75.0,
                left_percent: 27.0,
                rotation_deg: 110.0,
                width_px: 16.0,
                height_px: 1.0,
            },
            BlackHoleDetail {
                top_percent: 70.0,
                left_percent: 75.0,
                rotation_deg: 50.0,
                width_px: 16.0,
                height_px: 1.0,
            },
        ],
    }
}
