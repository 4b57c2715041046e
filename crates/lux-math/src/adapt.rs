//! Chromatic Adaptation Transforms (CAT).
//!
//! Matrices and functions for adapting XYZ colors between reference
//! whites. The ACES pipeline needs D65 (sRGB/Rec.709) <-> D60 (ACES).
//!
//! # Usage
//!
//! ```rust
//! use lux_math::{adapt_matrix, BRADFORD, D60, D65};
//!
//! let d65_to_d60 = adapt_matrix(BRADFORD, D65, D60);
//!
//! // The source white maps onto the destination white
//! let white = d65_to_d60 * D65;
//! assert!(white.abs_diff(D60) < 1e-12);
//! ```

use crate::{Mat3, Vec3};

// ============================================================================
// Standard Illuminants (XYZ white points, Y = 1)
// ============================================================================

/// CIE Standard Illuminant D65 (daylight, ~6500K), from xy (0.3127, 0.3290).
///
/// Reference white of sRGB and Rec.709.
pub const D65: Vec3 = Vec3::from_xy(0.3127, 0.3290);

/// ACES white point D60 (~6000K), from xy (0.32168, 0.33767).
pub const D60: Vec3 = Vec3::from_xy(0.32168, 0.33767);

// ============================================================================
// Chromatic Adaptation Matrices
// ============================================================================

/// Bradford chromatic adaptation matrix.
///
/// Transforms XYZ to a "sharpened" cone response space.
///
/// # Reference
///
/// Lam, K.M. (1985). Metamerism and Colour Constancy.
pub const BRADFORD: Mat3 = Mat3::from_rows([
    [0.8951, 0.2664, -0.1614],
    [-0.7502, 1.7135, 0.0367],
    [0.0389, -0.0685, 1.0296],
]);

/// Computes a chromatic adaptation matrix between two white points.
///
/// The resulting matrix transforms XYZ values relative to `src_white`
/// into XYZ values relative to `dst_white`:
///
/// ```text
/// M^-1 * diag(M * dst / M * src) * M
/// ```
///
/// A singular `method` falls back to identity.
pub fn adapt_matrix(method: Mat3, src_white: Vec3, dst_white: Vec3) -> Mat3 {
    let Some(method_inv) = method.inverse() else {
        return Mat3::IDENTITY;
    };

    let src_cone = method * src_white;
    let dst_cone = method * dst_white;
    let gain = dst_cone / src_cone;

    method_inv * Mat3::diagonal(gain.x, gain.y, gain.z) * method
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_maps_to_white() {
        let m = adapt_matrix(BRADFORD, D65, D60);
        assert!((m * D65).abs_diff(D60) < 1e-12);

        let back = adapt_matrix(BRADFORD, D60, D65);
        assert!((back * D60).abs_diff(D65) < 1e-12);
    }

    #[test]
    fn test_adapt_matrix_roundtrip() {
        let fwd = adapt_matrix(BRADFORD, D65, D60);
        let back = adapt_matrix(BRADFORD, D60, D65);
        assert!((back * fwd).abs_diff(&Mat3::IDENTITY) < 1e-12);
    }

    #[test]
    fn test_adapt_identity() {
        let same = adapt_matrix(BRADFORD, D65, D65);
        assert!(same.abs_diff(&Mat3::IDENTITY) < 1e-12);
    }

    #[test]
    fn test_singular_method() {
        assert_eq!(adapt_matrix(Mat3::ZERO, D65, D60), Mat3::IDENTITY);
    }

    #[test]
    fn test_illuminants() {
        assert_eq!(D65.y, 1.0);
        assert_eq!(D60.y, 1.0);
        assert!((D65.x - 0.950456).abs() < 1e-6);
        assert!((D60.z - 1.008825).abs() < 1e-6);
    }
}
