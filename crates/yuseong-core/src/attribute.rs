//! The closed set of attributes the component observes.

/// A configuration attribute recognised by the meteor shower component.
///
/// Attribute dispatch goes through this enum rather than raw strings so the
/// set of accepted names stays closed and every setter is typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Attribute {
    /// Number of meteors to generate (`meteors`).
    Meteors,
    /// Number of stars to generate (`stars`).
    Stars,
    /// Whether the black hole is shown (`show_black_hole`).
    ShowBlackHole,
    /// Background gradient style (`type_gradient`).
    TypeGradient,
}

impl Attribute {
    /// All observed attributes, in the order they are replayed on mount.
    pub const ALL: [Attribute; 4] = [
        Attribute::Meteors,
        Attribute::Stars,
        Attribute::ShowBlackHole,
        Attribute::TypeGradient,
    ];

    /// Parse an external attribute name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "meteors" => Some(Attribute::Meteors),
            "stars" => Some(Attribute::Stars),
            "show_black_hole" => Some(Attribute::ShowBlackHole),
            "type_gradient" => Some(Attribute::TypeGradient),
            _ => None,
        }
    }

    /// The external name of this attribute.
    pub fn name(self) -> &'static str {
        match self {
            Attribute::Meteors => "meteors",
            Attribute::Stars => "stars",
            Attribute::ShowBlackHole => "show_black_hole",
            Attribute::TypeGradient => "type_gradient",
        }
    }

    /// Stable index into per-attribute tables.
    pub fn index(self) -> usize {
        match self {
            Attribute::Meteors => 0,
            Attribute::Stars => 1,
            Attribute::ShowBlackHole => 2,
            Attribute::TypeGradient => 3,
        }
    }
}
