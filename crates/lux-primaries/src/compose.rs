//! Ordered composition of registry matrices.
//!
//! Order is significant: matrix multiplication is associative but not
//! commutative. Sequences are written in the order the transforms act on
//! a color, so `[A, B, C]` means "apply A, then B, then C" and evaluates
//! to `C * B * A` under the column-vector convention.

use lux_math::{Mat3, Vec3};

use crate::{
    AP1_TO_XYZ, D60_TO_D65, D65_TO_D60, MatrixId, ODT_SAT, RRT_SAT, SRGB_TO_XYZ, XYZ_TO_AP1,
    XYZ_TO_SRGB,
};

/// Luminance weights of AP1 RGB (the Y row of [`AP1_TO_XYZ`]).
pub const AP1_LUMA: Vec3 = AP1_TO_XYZ.row(1);

/// Saturation factor baked into [`RRT_SAT`].
pub const RRT_SATURATION: f64 = 0.96;

/// Saturation factor baked into [`ODT_SAT`].
pub const ODT_SATURATION: f64 = 0.93;

/// Composes matrices in application order.
///
/// Returns the product with the first element applied to the vector
/// first. An empty slice yields the identity. Inputs are taken by
/// reference and left untouched; every step produces a new value.
///
/// # Example
///
/// ```rust
/// use lux_primaries::{compose, SRGB_TO_XYZ, XYZ_TO_SRGB};
///
/// let m = compose(&[SRGB_TO_XYZ, XYZ_TO_SRGB]);
/// assert!(m.abs_diff(&lux_math::Mat3::IDENTITY) < 1e-5);
/// ```
pub fn compose(sequence: &[Mat3]) -> Mat3 {
    sequence
        .iter()
        .fold(Mat3::IDENTITY, |acc, next| next.mul_mat(&acc))
}

/// Composes registry entries in application order.
///
/// # Example
///
/// ```rust
/// use lux_primaries::{compose, compose_ids, MatrixId, AP1_TO_XYZ, XYZ_TO_SRGB};
///
/// let m = compose_ids(&[MatrixId::Ap1ToXyz, MatrixId::XyzToSrgb]);
/// assert_eq!(m, compose(&[AP1_TO_XYZ, XYZ_TO_SRGB]));
/// ```
pub fn compose_ids(ids: &[MatrixId]) -> Mat3 {
    ids.iter()
        .fold(Mat3::IDENTITY, |acc, id| id.matrix().mul_mat(&acc))
}

/// ACES saturation-adjust matrix.
///
/// Blends each channel toward luminance: `sat = 1` is identity, `sat = 0`
/// collapses every color to grey.
///
/// ```text
/// M[i][j] = (1 - sat) * luma[j] + (i == j ? sat : 0)
/// ```
///
/// # Example
///
/// ```rust
/// use lux_primaries::{saturation_matrix, AP1_LUMA, RRT_SAT, RRT_SATURATION};
///
/// let m = saturation_matrix(RRT_SATURATION, AP1_LUMA);
/// assert!(m.abs_diff(&RRT_SAT) < 1e-6);
/// ```
pub fn saturation_matrix(sat: f64, luma: Vec3) -> Mat3 {
    let k = 1.0 - sat;
    let mut m = Mat3::ZERO;
    for (i, row) in m.m.iter_mut().enumerate() {
        for (j, v) in row.iter_mut().enumerate() {
            *v = k * luma[j] + if i == j { sat } else { 0.0 };
        }
    }
    m
}

/// sRGB to ACEScg: sRGB -> XYZ, D65 -> D60, XYZ -> AP1.
pub fn srgb_to_ap1() -> Mat3 {
    compose(&[SRGB_TO_XYZ, D65_TO_D60, XYZ_TO_AP1])
}

/// ACEScg to sRGB: AP1 -> XYZ, D60 -> D65, XYZ -> sRGB.
pub fn ap1_to_srgb() -> Mat3 {
    compose(&[AP1_TO_XYZ, D60_TO_D65, XYZ_TO_SRGB])
}

/// [`srgb_to_ap1`] followed by the RRT saturation in AP1.
pub fn srgb_to_ap1_rrt_sat() -> Mat3 {
    compose(&[srgb_to_ap1(), RRT_SAT])
}

/// ODT saturation in AP1 followed by [`ap1_to_srgb`].
pub fn ap1_to_srgb_odt_sat() -> Mat3 {
    compose(&[ODT_SAT, ap1_to_srgb()])
}
