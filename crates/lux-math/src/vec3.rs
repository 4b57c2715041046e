//! 3D vector type for color triplets.
//!
//! [`Vec3`] represents RGB, XYZ, or cone-response values.
//!
//! # Usage
//!
//! ```rust
//! use lux_math::Vec3;
//!
//! let rgb = Vec3::new(1.0, 0.5, 0.25);
//! let scaled = rgb * 2.0;
//! assert_eq!(scaled.x, 2.0);
//! ```

use std::ops::{Div, Index, Mul};

/// A 3D `f64` vector for color triplets (RGB, XYZ, etc.).
///
/// For RGB: x=R, y=G, z=B. For XYZ: x=X, y=Y, z=Z.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Vec3 {
    /// X component (R for RGB, X for XYZ)
    pub x: f64,
    /// Y component (G for RGB, Y for XYZ)
    pub y: f64,
    /// Z component (B for RGB, Z for XYZ)
    pub z: f64,
}

impl Vec3 {
    /// Zero vector (0, 0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// One vector (1, 1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector from an array.
    #[inline]
    pub const fn from_array(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Returns components as an array.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Creates XYZ (with Y=1) from CIE xy chromaticity.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lux_math::Vec3;
    ///
    /// let d65 = Vec3::from_xy(0.3127, 0.3290);
    /// assert_eq!(d65.y, 1.0);
    /// ```
    #[inline]
    pub const fn from_xy(x: f64, y: f64) -> Self {
        Self::new(x / y, 1.0, (1.0 - x - y) / y)
    }

    /// Largest absolute component difference.
    #[inline]
    pub fn abs_diff(self, other: Self) -> f64 {
        (self.x - other.x)
            .abs()
            .max((self.y - other.y).abs())
            .max((self.z - other.z).abs())
    }

    /// Converts to glam DVec3.
    #[inline]
    pub fn to_glam(self) -> glam::DVec3 {
        glam::DVec3::new(self.x, self.y, self.z)
    }

    /// Creates from glam DVec3.
    #[inline]
    pub fn from_glam(v: glam::DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl Index<usize> for Vec3 {
    type Output = f64;

    #[inline]
    fn index(&self, i: usize) -> &f64 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index out of bounds: {i}"),
        }
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

// Component-wise
impl Div for Vec3 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ops() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(2.0, 4.0, 6.0);
        assert_eq!(a * 2.0, b);
        assert_eq!(b / a, Vec3::new(2.0, 2.0, 2.0));
        assert_eq!(a[2], 3.0);
    }

    #[test]
    fn test_from_xy() {
        let e = Vec3::from_xy(1.0 / 3.0, 1.0 / 3.0);
        assert!(e.abs_diff(Vec3::ONE) < 1e-12);
    }

    #[test]
    fn test_glam_roundtrip() {
        let v = Vec3::new(0.1, 0.2, 0.3);
        assert_eq!(Vec3::from_glam(v.to_glam()), v);
    }
}
