//! Attribute input validation.
//!
//! Raw attribute values arrive as strings and leave as typed, defaulted
//! values. Nothing here is fatal: malformed input degrades to the attribute's
//! default and files a [`Diagnostic`] for the host.

use log::warn;
use yuseong_core::{Diagnostic, GradientStyle};

/// Parse a strict boolean attribute. Only the literal strings `"true"` and
/// `"false"` are accepted; anything else keeps the default.
pub fn boolean(
    raw: &str,
    default: bool,
    attribute: &'static str,
    diagnostics: &mut Vec<Diagnostic>,
) -> bool {
    match raw {
        "true" => true,
        "false" => false,
        _ => {
            report(
                diagnostics,
                Diagnostic::InvalidAttributeValue {
                    attribute,
                    value: raw.to_string(),
                    fallback: default.to_string(),
                },
            );
            default
        }
    }
}

/// Parse the gradient style attribute; unrecognised values fall back to
/// radial.
pub fn gradient(raw: &str, diagnostics: &mut Vec<Diagnostic>) -> GradientStyle {
    match GradientStyle::from_attr(raw) {
        Some(style) => style,
        None => {
            report(
                diagnostics,
                Diagnostic::InvalidAttributeValue {
                    attribute: "type_gradient",
                    value: raw.to_string(),
                    fallback: GradientStyle::Radial.as_str().to_string(),
                },
            );
            GradientStyle::Radial
        }
    }
}

/// Parse a count attribute.
///
/// Parse failure substitutes the default (and files a diagnostic); the result
/// is clamped to at least 1 either way, so out-of-range numbers are corrected
/// silently.
pub fn count(
    raw: &str,
    default: u32,
    attribute: &'static str,
    diagnostics: &mut Vec<Diagnostic>,
) -> u32 {
    let value = match raw.trim().parse::<i64>() {
        Ok(n) => n,
        Err(_) => {
            report(
                diagnostics,
                Diagnostic::InvalidAttributeValue {
                    attribute,
                    value: raw.to_string(),
                    fallback: default.to_string(),
                },
            );
            i64::from(default)
        }
    };
    value.clamp(1, i64::from(u32::MAX)) as u32
}

/// File a diagnostic and mirror it to the log facade.
pub(crate) fn report(diagnostics: &mut Vec<Diagnostic>, diagnostic: Diagnostic) {
    warn!("{diagnostic}");
    diagnostics.push(diagnostic);
}
