//! Semantic angle types for rotation handling
//!
//! Newtype wrappers for angles so a degrees value cannot be fed where
//! radians are expected. The public rotation API takes [`Degrees`]; the
//! trigonometry happens on [`Radians`] after an explicit conversion.
//!
//! # Usage
//! ```
//! use aero_sim_core::core_types::units::{Degrees, Radians};
//!
//! let quarter_turn = Degrees::new(90.0);
//! let rad: Radians = quarter_turn.to_radians();
//! assert!((rad.sin() - 1.0).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Deref, DerefMut, Div, Mul, Neg, Sub};

/// Compare f64 values with total ordering using Rust's built-in `total_cmp`
/// (NaN ordered after all other values)
#[inline]
fn f64_total_cmp(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

// ============================================================================
// ANGLE TYPES
// ============================================================================

/// Angle in degrees
///
/// Uses f64 to match the vector component precision. Any finite value is a
/// valid rotation amount; no range normalization is applied.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Degrees(f64);

impl Eq for Degrees {}

impl PartialOrd for Degrees {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Degrees {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Degrees {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl DerefMut for Degrees {
    #[inline]
    fn deref_mut(&mut self) -> &mut f64 {
        &mut self.0
    }
}

impl Degrees {
    /// Full turn (360°)
    pub const FULL_TURN: Degrees = Degrees(360.0);

    /// Create a new angle in degrees
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Degrees(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Convert to radians
    #[inline]
    #[must_use]
    pub fn to_radians(self) -> Radians {
        Radians(self.0.to_radians())
    }
}

impl From<f64> for Degrees {
    fn from(v: f64) -> Self {
        Degrees(v)
    }
}

impl From<Degrees> for f64 {
    fn from(d: Degrees) -> f64 {
        d.0
    }
}

impl From<Degrees> for Radians {
    fn from(d: Degrees) -> Radians {
        d.to_radians()
    }
}

impl Neg for Degrees {
    type Output = Degrees;
    fn neg(self) -> Degrees {
        Degrees(-self.0)
    }
}

impl Add for Degrees {
    type Output = Degrees;
    fn add(self, rhs: Degrees) -> Degrees {
        Degrees(self.0 + rhs.0)
    }
}

impl Sub for Degrees {
    type Output = Degrees;
    fn sub(self, rhs: Degrees) -> Degrees {
        Degrees(self.0 - rhs.0)
    }
}

impl Mul<f64> for Degrees {
    type Output = Degrees;
    fn mul(self, rhs: f64) -> Degrees {
        Degrees(self.0 * rhs)
    }
}

impl Div<f64> for Degrees {
    type Output = Degrees;
    fn div(self, rhs: f64) -> Degrees {
        Degrees(self.0 / rhs)
    }
}

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°", self.0)
    }
}

/// Angle in radians
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Radians(f64);

impl Eq for Radians {}

impl PartialOrd for Radians {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Radians {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Radians {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl DerefMut for Radians {
    #[inline]
    fn deref_mut(&mut self) -> &mut f64 {
        &mut self.0
    }
}

impl Radians {
    /// Create a new angle in radians
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Radians(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Convert to degrees
    #[inline]
    #[must_use]
    pub fn to_degrees(self) -> Degrees {
        Degrees(self.0.to_degrees())
    }

    /// Compute sine
    #[inline]
    #[must_use]
    pub fn sin(self) -> f64 {
        self.0.sin()
    }

    /// Compute cosine
    #[inline]
    #[must_use]
    pub fn cos(self) -> f64 {
        self.0.cos()
    }
}

impl From<f64> for Radians {
    fn from(v: f64) -> Self {
        Radians(v)
    }
}

impl From<Radians> for f64 {
    fn from(r: Radians) -> f64 {
        r.0
    }
}

impl From<Radians> for Degrees {
    fn from(r: Radians) -> Degrees {
        r.to_degrees()
    }
}

impl Neg for Radians {
    type Output = Radians;
    fn neg(self) -> Radians {
        Radians(-self.0)
    }
}

impl Add for Radians {
    type Output = Radians;
    fn add(self, rhs: Radians) -> Radians {
        Radians(self.0 + rhs.0)
    }
}

impl Sub for Radians {
    type Output = Radians;
    fn sub(self, rhs: Radians) -> Radians {
        Radians(self.0 - rhs.0)
    }
}

impl Mul<f64> for Radians {
    type Output = Radians;
    fn mul(self, rhs: f64) -> Radians {
        Radians(self.0 * rhs)
    }
}

impl Div<f64> for Radians {
    type Output = Radians;
    fn div(self, rhs: f64) -> Radians {
        Radians(self.0 / rhs)
    }
}

impl fmt::Display for Radians {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4} rad", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_degrees_to_radians() {
        let half_turn = Degrees::new(180.0);
        assert!((half_turn.to_radians().value() - PI).abs() < 1e-12);
    }

    #[test]
    fn test_radians_to_degrees() {
        let rad = Radians::new(PI / 2.0);
        assert!((rad.to_degrees().value() - 90.0).abs() < 1e-12);
    }

    #[test]
    fn test_angle_arithmetic() {
        let a = Degrees::new(30.0) + Degrees::new(60.0);
        assert_eq!(a, Degrees::new(90.0));
        assert_eq!(-a, Degrees::new(-90.0));
        assert_eq!(a * 4.0, Degrees::FULL_TURN);
    }

    #[test]
    fn test_total_ordering_with_nan() {
        let nan = Degrees::new(f64::NAN);
        let big = Degrees::new(1e300);
        // NaN compares greater than every finite value under total_cmp
        assert_eq!(nan.max(big).cmp(&nan), Ordering::Equal);
    }

    #[test]
    fn test_display() {
        assert_eq!(Degrees::new(45.0).to_string(), "45.0°");
        assert_eq!(Radians::new(PI).to_string(), "3.1416 rad");
    }
}
