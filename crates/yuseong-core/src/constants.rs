//! Numeric constants driving element generation.

/// Tunable ranges used when synthesising stars and meteors.
///
/// All placement ranges are in percent of the render surface; lengths and
/// derived trajectory offsets are in pixels of the nominal surface.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConstants {
    /// Nominal meteor tail length in pixels.
    pub meteor_length_px: f64,
    /// Multiplier applied to the rotated tail length when deriving the
    /// animation start offset.
    pub trajectory_multiplier: f64,
    /// Minimum meteor rotation in degrees (before negation).
    pub min_rotation_deg: f64,
    /// Maximum meteor rotation in degrees (before negation).
    pub max_rotation_deg: f64,
    /// Minimum meteor scale factor.
    pub min_scale: f64,
    /// Maximum meteor scale factor.
    pub max_scale: f64,
    /// Minimum streak animation duration in seconds.
    pub min_duration_s: f64,
    /// Maximum streak animation duration in seconds.
    pub max_duration_s: f64,
    /// Maximum streak animation start delay in seconds.
    pub max_delay_s: f64,
    /// Minimum horizontal meteor placement in percent.
    pub min_left_percent: f64,
    /// Maximum horizontal meteor placement in percent.
    pub max_left_percent: f64,
    /// Minimum vertical meteor placement in percent.
    pub min_top_percent: f64,
    /// Maximum vertical meteor placement in percent.
    pub max_top_percent: f64,
    /// Maximum star twinkle start delay in seconds.
    pub max_twinkle_delay_s: f64,
}

impl Default for GenerationConstants {
    fn default() -> Self {
        Self {
            meteor_length_px: 200.0,
            trajectory_multiplier: 10.0,
            min_rotation_deg: 45.0,
            max_rotation_deg: 135.0,
            min_scale: 0.5,
            max_scale: 1.0,
            min_duration_s: 3.0,
            max_duration_s: 10.0,
            max_delay_s: 5.0,
            min_left_percent: -10.0,
            max_left_percent: 80.0,
            min_top_percent: -50.0,
            max_top_percent: 80.0,
            max_twinkle_delay_s: 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_are_well_ordered() {
        let c = GenerationConstants::default();
        assert!(c.min_rotation_deg < c.max_rotation_deg);
        assert!(c.min_scale < c.max_scale);
        assert!(c.min_duration_s < c.max_duration_s);
        assert!(c.min_left_percent < c.max_left_percent);
        assert!(c.min_top_percent < c.max_top_percent);
        assert!(c.max_delay_s >= 0.0);
        assert!(c.max_twinkle_delay_s >= 0.0);
    }
}
