//! Renderable element descriptors.
//!
//! Descriptors carry everything a render surface needs to materialise an
//! element: placement, transform, and declarative animation timing. They hold
//! no reference back into the surface.

/// Timing for a looping animation: linear easing, infinite repeat.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    /// One loop of the animation, in seconds.
    pub duration_s: f64,
    /// Start offset before the first loop, in seconds.
    pub delay_s: f64,
}

/// A twinkling background star.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    /// Horizontal placement in percent of the surface, 0..=100.
    pub left_percent: f64,
    /// Vertical placement in percent of the surface, 0..=100.
    pub top_percent: f64,
    /// Start offset of the twinkle loop in seconds; `None` once animations
    /// are frozen.
    pub twinkle_delay_s: Option<f64>,
}

/// A falling meteor streak.
#[derive(Debug, Clone, PartialEq)]
pub struct Meteor {
    /// Horizontal placement in percent of the surface.
    pub left_percent: f64,
    /// Vertical placement in percent of the surface.
    pub top_percent: f64,
    /// Streak tail length in pixels.
    pub width_px: f64,
    /// Rotation in degrees; always non-positive so every meteor falls in the
    /// same diagonal family.
    pub rotation_deg: f64,
    /// Uniform scale factor.
    pub scale: f64,
    /// Vertical start offset in pixels, animated back to zero. Always
    /// non-positive: the streak starts above its resting point.
    pub margin_top_px: f64,
    /// Horizontal start offset in pixels, animated back to zero. Sign follows
    /// the travel direction.
    pub margin_left_px: f64,
    /// Constant translate applied for the whole animation, in pixels.
    pub translate_px: (f64, f64),
    /// Streak animation timing; `None` once animations are frozen.
    pub animation: Option<Animation>,
}

/// A static bright streak detail on the black hole.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackHoleDetail {
    /// Vertical placement in percent of the black hole box.
    pub top_percent: f64,
    /// Horizontal placement in percent of the black hole box.
    pub left_percent: f64,
    /// Rotation in degrees.
    pub rotation_deg: f64,
    /// Streak width in pixels.
    pub width_px: f64,
    /// Streak height in pixels.
    pub height_px: f64,
}

/// The optional black hole. Fixed layout, no randomisation.
#[derive(Debug, Clone, PartialEq)]
pub struct BlackHole {
    /// Bounding box edge length in pixels.
    pub size_px: f64,
    /// Distance from the top of the surface in percent.
    pub top_percent: f64,
    /// Distance from the right of the surface in percent.
    pub right_percent: f64,
    /// End point of the slow drift loop, in pixels.
    pub drift_target_px: (f64, f64),
    /// Drift animation timing; `None` once animations are frozen.
    pub drift: Option<Animation>,
    /// The three static streak details.
    pub details: [BlackHoleDetail; 3],
}
