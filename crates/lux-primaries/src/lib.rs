//! # lux-primaries
//!
//! Color primaries, the named matrix registry, and ordered composition.
//!
//! The registry holds the fixed calibration matrices an ACES-style
//! pipeline needs:
//!
//! | Group | Matrices |
//! |-------|----------|
//! | Gamut | sRGB <-> XYZ (D65), ACEScg/AP1 <-> XYZ (D60) |
//! | Chromatic adaptation | D65 <-> D60 (Bradford) |
//! | Saturation | RRT (0.96), ODT (0.93) |
//!
//! All matrices are `const` values: shared read-only across threads,
//! never mutated after compilation.
//!
//! # Composition
//!
//! [`compose`] takes matrices in the order they act on a color. With
//! column vectors (`out = M * v`) the product is built right to left:
//!
//! ```rust
//! use lux_primaries::{compose, D65_TO_D60, SRGB_TO_XYZ, XYZ_TO_AP1};
//!
//! // sRGB -> XYZ, adapt white D65 -> D60, XYZ -> AP1
//! let srgb_to_ap1 = compose(&[SRGB_TO_XYZ, D65_TO_D60, XYZ_TO_AP1]);
//! let expected = XYZ_TO_AP1 * D65_TO_D60 * SRGB_TO_XYZ;
//! assert!(srgb_to_ap1.abs_diff(&expected) < 1e-12);
//! ```
//!
//! # Deriving matrices
//!
//! [`rgb_to_xyz_matrix`] rebuilds a gamut matrix from xy chromaticities,
//! and [`saturation_matrix`] rebuilds the ACES saturation matrices. Both
//! serve as cross-checks of the published literals.
//!
//! # Dependencies
//!
//! - [`lux-math`] - Matrix operations
//!
//! # Used By
//!
//! - `lux-cli` - Matrix generation commands

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod compose;
mod registry;

pub use compose::*;
pub use registry::*;

use lux_math::{Mat3, Vec3};

/// RGB color space primaries definition.
///
/// Defines a color space by its three primary colors (R, G, B) and white point,
/// all specified as CIE xy chromaticity coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primaries {
    /// Red primary (x, y) chromaticity
    pub r: (f64, f64),
    /// Green primary (x, y) chromaticity
    pub g: (f64, f64),
    /// Blue primary (x, y) chromaticity
    pub b: (f64, f64),
    /// White point (x, y) chromaticity
    pub w: (f64, f64),
    /// Color space name
    pub name: &'static str,
}

impl Primaries {
    /// White point as XYZ (Y=1).
    #[inline]
    pub fn white_xyz(&self) -> Vec3 {
        xy_to_xyz(self.w)
    }
}

/// D65 white point chromaticity (daylight, ~6500K).
pub const D65_XY: (f64, f64) = (0.31270, 0.32900);

/// D60 white point chromaticity (~6000K, used by ACES).
pub const D60_XY: (f64, f64) = (0.32168, 0.33767);

/// sRGB / Rec.709 primaries (D65 white point).
pub const SRGB: Primaries = Primaries {
    r: (0.6400, 0.3300),
    g: (0.3000, 0.6000),
    b: (0.1500, 0.0600),
    w: D65_XY,
    name: "sRGB",
};

/// ACES AP1 primaries (D60 white point), the ACEScg working space.
pub const ACES_AP1: Primaries = Primaries {
    r: (0.7130, 0.2930),
    g: (0.1650, 0.8300),
    b: (0.1280, 0.0440),
    w: D60_XY,
    name: "ACES AP1",
};

fn xy_to_xyz((x, y): (f64, f64)) -> Vec3 {
    if y.abs() < 1e-12 {
        Vec3::ZERO
    } else {
        Vec3::from_xy(x, y)
    }
}

/// Computes the RGB to XYZ matrix for a set of primaries.
///
/// Primaries become the matrix columns, scaled so that RGB (1, 1, 1)
/// lands on the white point:
///
/// ```text
/// M = [r g b],  S = M^-1 * W,  RGB->XYZ = [r*Sr  g*Sg  b*Sb]
/// ```
///
/// # Example
///
/// ```rust
/// use lux_primaries::{rgb_to_xyz_matrix, SRGB};
/// use lux_math::Vec3;
///
/// let m = rgb_to_xyz_matrix(&SRGB);
/// let white = m * Vec3::ONE;
/// assert!((white.y - 1.0).abs() < 1e-12);
/// ```
pub fn rgb_to_xyz_matrix(primaries: &Primaries) -> Mat3 {
    let r = xy_to_xyz(primaries.r);
    let g = xy_to_xyz(primaries.g);
    let b = xy_to_xyz(primaries.b);
    let w = primaries.white_xyz();

    let m = Mat3::from_col_vecs(r, g, b);
    let s = m.inverse().unwrap_or(Mat3::IDENTITY) * w;

    Mat3::from_col_vecs(r * s.x, g * s.y, b * s.z)
}

/// Computes the XYZ to RGB matrix for a set of primaries.
///
/// Inverse of [`rgb_to_xyz_matrix`].
pub fn xyz_to_rgb_matrix(primaries: &Primaries) -> Mat3 {
    rgb_to_xyz_matrix(primaries)
        .inverse()
        .unwrap_or(Mat3::IDENTITY)
}
