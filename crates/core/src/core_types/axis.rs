//! Principal rotation axis selector
//!
//! A closed enum replaces the loosely-typed axis string the host
//! application historically passed around: with [`Axis`] in the signature
//! an invalid selector cannot reach the rotation math at all. String input
//! is still accepted at the system edge through [`FromStr`], which is the
//! single place an [`InvalidAxis`] error can originate.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three coordinate axes a vector can be rotated about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Rotation about the x-axis (y and z components move)
    X,
    /// Rotation about the y-axis (x and z components move)
    Y,
    /// Rotation about the z-axis (x and y components move)
    Z,
}

impl Axis {
    /// Canonical lower-case selector string
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Axis {
    type Err = InvalidAxis;

    /// Parse an axis selector.
    ///
    /// Accepts `"x"`, `"y"`, or `"z"`, case-insensitively (so `"X"` is
    /// valid too). Anything else, including multi-character strings,
    /// yields [`InvalidAxis`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("x") {
            Ok(Axis::X)
        } else if s.eq_ignore_ascii_case("y") {
            Ok(Axis::Y)
        } else if s.eq_ignore_ascii_case("z") {
            Ok(Axis::Z)
        } else {
            Err(InvalidAxis {
                input: s.to_owned(),
            })
        }
    }
}

/// Error returned when an axis selector string is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidAxis {
    /// The selector that failed to parse
    input: String,
}

impl InvalidAxis {
    /// The offending selector string
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for InvalidAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid axis {:?}: axis must be x, y, or z", self.input)
    }
}

impl std::error::Error for InvalidAxis {}
