//! Core types for the yuseong meteor shower.
//!
//! This crate holds the vocabulary shared between the generation engine and
//! its hosts: the closed set of observable attributes, the validated
//! configuration snapshot, the numeric generation constants, and the
//! non-fatal diagnostics the validator emits.

mod attribute;
mod config;
mod constants;
mod diagnostic;

pub use attribute::Attribute;
pub use config::{Configuration, GradientStyle};
pub use constants::GenerationConstants;
pub use diagnostic::Diagnostic;
