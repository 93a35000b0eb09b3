//! Non-fatal validation diagnostics.

use std::fmt;

/// A recoverable problem noticed while validating attribute input.
///
/// Diagnostics never abort generation; the offending value is replaced by a
/// safe default and the host may inspect or log the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A malformed boolean, enum, or integer attribute value was replaced by
    /// its default.
    InvalidAttributeValue {
        /// External name of the attribute.
        attribute: &'static str,
        /// The raw value that was rejected.
        value: String,
        /// The default substituted for it.
        fallback: String,
    },
    /// An attribute name outside the observed set; no state was changed.
    UnknownAttribute {
        /// The unrecognised name.
        name: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::InvalidAttributeValue {
                attribute,
                value,
                fallback,
            } => write!(
                f,
                "Invalid {attribute} value: {value}. Defaulting to '{fallback}'."
            ),
            Diagnostic::UnknownAttribute { name } => {
                write!(f, "Unknown attribute: {name}. No action taken.")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_attribute_and_value() {
        let d = Diagnostic::InvalidAttributeValue {
            attribute: "show_black_hole",
            value: "maybe".into(),
            fallback: "false".into(),
        };
        assert_eq!(
            d.to_string(),
            "Invalid show_black_hole value: maybe. Defaulting to 'false'."
        );

        let d = Diagnostic::UnknownAttribute { name: "comets".into() };
        assert_eq!(d.to_string(), "Unknown attribute: comets. No action taken.");
    }
}
