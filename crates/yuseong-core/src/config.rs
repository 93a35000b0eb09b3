//! Validated component configuration.

/// Background gradient style for the sky behind the shower.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GradientStyle {
    /// Elliptical gradient radiating from the top of the sky.
    #[default]
    Radial,
    /// Top-to-bottom linear gradient.
    Linear,
}

impl GradientStyle {
    /// Parse an attribute value; only the two canonical names are accepted.
    pub fn from_attr(value: &str) -> Option<Self> {
        match value {
            "radial" => Some(GradientStyle::Radial),
            "linear" => Some(GradientStyle::Linear),
            _ => None,
        }
    }

    /// The attribute value for this style.
    pub fn as_str(self) -> &'static str {
        match self {
            GradientStyle::Radial => "radial",
            GradientStyle::Linear => "linear",
        }
    }

    /// Cycle to the next style.
    pub fn next(self) -> Self {
        match self {
            GradientStyle::Radial => GradientStyle::Linear,
            GradientStyle::Linear => GradientStyle::Radial,
        }
    }
}

/// One validated snapshot of the component's tunable state.
///
/// A regeneration cycle reads a single snapshot of this struct; attribute
/// changes produce a new value rather than mutating one mid-cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Configuration {
    /// Number of meteors, always at least 1.
    pub meteors: u32,
    /// Number of stars, always at least 1.
    pub stars: u32,
    /// Whether the black hole is rendered.
    pub show_black_hole: bool,
    /// Sky gradient style.
    pub type_gradient: GradientStyle,
}

impl Configuration {
    /// Default meteor count.
    pub const DEFAULT_METEORS: u32 = 30;
    /// Default star count.
    pub const DEFAULT_STARS: u32 = 300;
    /// The black hole is hidden by default.
    pub const DEFAULT_SHOW_BLACK_HOLE: bool = false;
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            meteors: Self::DEFAULT_METEORS,
            stars: Self::DEFAULT_STARS,
            show_black_hole: Self::DEFAULT_SHOW_BLACK_HOLE,
            type_gradient: GradientStyle::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = Configuration::default();
        assert_eq!(config.meteors, 30);
        assert_eq!(config.stars, 300);
        assert!(!config.show_black_hole);
        assert_eq!(config.type_gradient, GradientStyle::Radial);
    }

    #[test]
    fn gradient_parse_accepts_only_canonical_names() {
        assert_eq!(GradientStyle::from_attr("radial"), Some(GradientStyle::Radial));
        assert_eq!(GradientStyle::from_attr("linear"), Some(GradientStyle::Linear));
        assert_eq!(GradientStyle::from_attr("diagonal"), None);
        assert_eq!(GradientStyle::from_attr("Radial"), None);
    }

    #[test]
    fn gradient_cycles_through_both_styles() {
        assert_eq!(GradientStyle::Radial.next(), GradientStyle::Linear);
        assert_eq!(GradientStyle::Linear.next(), GradientStyle::Radial);
    }
}
