//! Aero Simulation Core Library
//!
//! 3D vector math for the flight-simulation host application: magnitude,
//! dot and cross products, normalization, rotation about a principal axis,
//! and translation, plus progress/fatal reporting helpers.
//!
//! ## Mutation model
//!
//! [`Vector3`] is a `Copy` value type. `rotate` and `translate` update the
//! receiver in place through `&mut self`; everything else returns a new
//! value. The rotation axis is the closed [`Axis`] enum, with string
//! selectors parsed at the system edge via `FromStr` (the only fallible
//! operation in the crate).

// Vector type, axis selector, and angle units
pub mod core_types;

// Host-facing progress/fatal reporting
pub mod reporting;

// Re-export core types
pub use core_types::{Axis, Degrees, InvalidAxis, Radians, Vector3};
