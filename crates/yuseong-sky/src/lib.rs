//! Procedural night-sky generation for the yuseong meteor shower.
//!
//! This crate turns a validated [`yuseong_core::Configuration`] into a
//! reproducible set of renderable element descriptors: a twinkling starfield,
//! a family of falling meteor streaks, and an optional black hole. The crate
//! owns generation and the reactive attribute state machine only; turning
//! descriptors into visible output is the host's job.

pub mod descriptor;
pub mod factory;
pub mod math;
mod scene;
pub mod trajectory;
pub mod validate;

pub use scene::{MeteorShower, Scene};
