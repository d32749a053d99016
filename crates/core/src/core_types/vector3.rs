//! 3D vector type for positions, velocities, and directions
//!
//! [`Vector3`] is the coordinate value the flight-simulation host moves
//! around: a plain `(x, y, z)` triple of f64 components with the usual
//! vector algebra (magnitude, dot and cross products, normalization) and
//! two affine transforms (axis-aligned rotation, translation).
//!
//! The API keeps a deliberate split between the two styles of operation:
//! - `cross_product`, `normalize`, and every `std::ops` impl return a new
//!   value and never touch the receiver;
//! - `rotate` and `translate` update the receiver in place, which the
//!   `&mut self` signature makes explicit at the call site.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::core_types::axis::{Axis, InvalidAxis};
use crate::core_types::units::Degrees;

/// A 3D vector with x, y, and z components.
///
/// Components are stored as-is; any f64 triple is a valid vector and no
/// NaN/infinity check is applied. The type is `Copy`, so sharing across
/// the simulation is by value and a mutation never aliases.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3 {
    /// Component along the x-axis
    pub x: f64,
    /// Component along the y-axis
    pub y: f64,
    /// Component along the z-axis
    pub z: f64,
}

impl Vector3 {
    /// The zero vector (0, 0, 0)
    pub const ZERO: Vector3 = Vector3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Create a new vector from its three components
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3 { x, y, z }
    }

    /// Euclidean length of the vector, `sqrt(x² + y² + z²)`.
    ///
    /// Always non-negative.
    #[inline]
    #[must_use]
    pub fn magnitude(self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Squared Euclidean length, avoiding the square root where only a
    /// comparison is needed.
    #[inline]
    #[must_use]
    pub fn magnitude_squared(self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Dot product with another vector.
    ///
    /// Commutative; proportional to the cosine of the angle between the
    /// two vectors.
    #[inline]
    #[must_use]
    pub fn dot_product(self, other: Vector3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product with another vector.
    ///
    /// Returns a new vector perpendicular to both operands; neither
    /// operand is modified. Anti-commutative:
    /// `a.cross_product(b) == -b.cross_product(a)`.
    #[inline]
    #[must_use]
    pub fn cross_product(self, other: Vector3) -> Vector3 {
        Vector3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Unit-length vector in the same direction, as a new value.
    ///
    /// The zero vector has no direction; normalizing it returns
    /// [`Vector3::ZERO`] rather than dividing by zero. That is a
    /// degenerate-case policy, not an error path.
    #[must_use]
    pub fn normalize(self) -> Vector3 {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            return Vector3::ZERO;
        }
        Vector3 {
            x: self.x / magnitude,
            y: self.y / magnitude,
            z: self.z / magnitude,
        }
    }

    /// Rotate the vector in place about a principal axis.
    ///
    /// Applies the standard 2D rotation matrix to the two components
    /// orthogonal to `axis`; the component along `axis` is unchanged.
    /// With a typed [`Axis`] this cannot fail. String selectors go
    /// through [`Vector3::rotate_about`] instead.
    pub fn rotate(&mut self, angle: Degrees, axis: Axis) {
        let theta = angle.to_radians();
        let (sin, cos) = (theta.sin(), theta.cos());
        let Vector3 { x, y, z } = *self;
        *self = match axis {
            Axis::X => Vector3::new(x, y * cos - z * sin, y * sin + z * cos),
            Axis::Y => Vector3::new(x * cos + z * sin, y, -x * sin + z * cos),
            Axis::Z => Vector3::new(x * cos - y * sin, x * sin + y * cos, z),
        };
    }

    /// Rotate in place about an axis given as a selector string.
    ///
    /// The string is parsed before any component is touched, so on
    /// [`InvalidAxis`] the vector is left exactly as it was.
    ///
    /// # Errors
    /// Returns [`InvalidAxis`] when `axis` is not `"x"`, `"y"`, or `"z"`
    /// (case-insensitive).
    pub fn rotate_about(&mut self, angle: Degrees, axis: &str) -> Result<(), InvalidAxis> {
        let axis = axis.parse::<Axis>()?;
        self.rotate(angle, axis);
        Ok(())
    }

    /// Translate the vector in place by componentwise offsets.
    #[inline]
    pub fn translate(&mut self, dx: f64, dy: f64, dz: f64) {
        self.x += dx;
        self.y += dy;
        self.z += dz;
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from(c: [f64; 3]) -> Self {
        Vector3::new(c[0], c[1], c[2])
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(v: Vector3) -> [f64; 3] {
        [v.x, v.y, v.z]
    }
}

impl Neg for Vector3 {
    type Output = Vector3;
    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl Add for Vector3 {
    type Output = Vector3;
    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;
    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Vector3) {
        self.translate(rhs.x, rhs.y, rhs.z);
    }
}

impl SubAssign for Vector3 {
    fn sub_assign(&mut self, rhs: Vector3) {
        self.translate(-rhs.x, -rhs.y, -rhs.z);
    }
}

// Vector3 * f64 = scaled vector
impl Mul<f64> for Vector3 {
    type Output = Vector3;
    fn mul(self, rhs: f64) -> Vector3 {
        Vector3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

// f64 * Vector3 = scaled vector
impl Mul<Vector3> for f64 {
    type Output = Vector3;
    fn mul(self, rhs: Vector3) -> Vector3 {
        rhs * self
    }
}

impl Div<f64> for Vector3 {
    type Output = Vector3;
    fn div(self, rhs: f64) -> Vector3 {
        Vector3::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4}, {:.4})", self.x, self.y, self.z)
    }
}
