//! Core types and utilities

pub mod axis;
pub mod units;
pub mod vector3;

pub use axis::{Axis, InvalidAxis};
pub use units::{Degrees, Radians};
pub use vector3::Vector3;
