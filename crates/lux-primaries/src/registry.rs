//! Named base matrices.
//!
//! Every matrix is row-major and multiplies column vectors (`out = M * v`).

use std::fmt;
use std::str::FromStr;

use lux_math::Mat3;
use thiserror::Error;

// ============================================================================
// Gamut conversions
// ============================================================================

/// sRGB primaries to CIE XYZ (D65).
pub const SRGB_TO_XYZ: Mat3 = Mat3::from_rows([
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
]);

/// CIE XYZ (D65) to sRGB primaries.
pub const XYZ_TO_SRGB: Mat3 = Mat3::from_rows([
    [3.2404542, -1.5371385, -0.4985314],
    [-0.9692660, 1.8760108, 0.0415560],
    [0.0556434, -0.2040259, 1.0572252],
]);

/// ACEScg (AP1) primaries to CIE XYZ (D60).
pub const AP1_TO_XYZ: Mat3 = Mat3::from_rows([
    [0.6624541811, 0.1340042065, 0.1561876870],
    [0.2722287168, 0.6740817658, 0.0536895174],
    [-0.0055746495, 0.0040607335, 1.0103391003],
]);

/// CIE XYZ (D60) to ACEScg (AP1) primaries.
pub const XYZ_TO_AP1: Mat3 = Mat3::from_rows([
    [1.6410233797, -0.3248032942, -0.2364246952],
    [-0.6636628587, 1.6153315917, 0.0167563477],
    [0.0117218943, -0.0082844420, 0.9883948585],
]);

// ============================================================================
// Chromatic adaptation (Bradford, ACES reference values)
// ============================================================================

/// XYZ relative to D65 to XYZ relative to D60.
pub const D65_TO_D60: Mat3 = Mat3::from_rows([
    [1.01303, 0.00610531, -0.014971],
    [0.00769823, 0.998165, -0.00503203],
    [-0.00284131, 0.00468516, 0.924507],
]);

/// XYZ relative to D60 to XYZ relative to D65.
pub const D60_TO_D65: Mat3 = Mat3::from_rows([
    [0.987224, -0.00611327, 0.0159533],
    [-0.00759836, 1.00186, 0.00533002],
    [0.00307257, -0.00509595, 1.08168],
]);

// ============================================================================
// Saturation compensation (operate on AP1 RGB)
// ============================================================================

/// Reference rendering transform saturation (0.96 around AP1 luminance).
pub const RRT_SAT: Mat3 = Mat3::from_rows([
    [0.970889, 0.026963, 0.002148],
    [0.010889, 0.986963, 0.002148],
    [0.010889, 0.026963, 0.962148],
]);

/// Output device transform saturation (0.93 around AP1 luminance).
pub const ODT_SAT: Mat3 = Mat3::from_rows([
    [0.949056, 0.0471857, 0.00375827],
    [0.019056, 0.977186, 0.00375827],
    [0.019056, 0.0471857, 0.933758],
]);

/// Identifier of a registry matrix.
///
/// # Example
///
/// ```rust
/// use lux_primaries::{MatrixId, SRGB_TO_XYZ};
///
/// let id: MatrixId = "srgb-to-xyz".parse()?;
/// assert_eq!(id.matrix(), SRGB_TO_XYZ);
/// assert_eq!(id.inverse(), Some(MatrixId::XyzToSrgb));
/// # Ok::<(), lux_primaries::UnknownMatrix>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatrixId {
    /// sRGB primaries -> CIE XYZ
    SrgbToXyz,
    /// CIE XYZ -> sRGB primaries
    XyzToSrgb,
    /// ACEScg primaries -> CIE XYZ
    Ap1ToXyz,
    /// CIE XYZ -> ACEScg primaries
    XyzToAp1,
    /// D65 -> D60 chromatic adaptation
    D65ToD60,
    /// D60 -> D65 chromatic adaptation
    D60ToD65,
    /// RRT saturation compensation
    RrtSat,
    /// ODT saturation compensation
    OdtSat,
}

impl MatrixId {
    /// Every registry entry.
    pub const ALL: [Self; 8] = [
        Self::SrgbToXyz,
        Self::XyzToSrgb,
        Self::Ap1ToXyz,
        Self::XyzToAp1,
        Self::D65ToD60,
        Self::D60ToD65,
        Self::RrtSat,
        Self::OdtSat,
    ];

    /// The constant matrix.
    pub const fn matrix(self) -> Mat3 {
        match self {
            Self::SrgbToXyz => SRGB_TO_XYZ,
            Self::XyzToSrgb => XYZ_TO_SRGB,
            Self::Ap1ToXyz => AP1_TO_XYZ,
            Self::XyzToAp1 => XYZ_TO_AP1,
            Self::D65ToD60 => D65_TO_D60,
            Self::D60ToD65 => D60_TO_D65,
            Self::RrtSat => RRT_SAT,
            Self::OdtSat => ODT_SAT,
        }
    }

    /// Short kebab-case key, as accepted by [`FromStr`].
    pub const fn key(self) -> &'static str {
        match self {
            Self::SrgbToXyz => "srgb-to-xyz",
            Self::XyzToSrgb => "xyz-to-srgb",
            Self::Ap1ToXyz => "ap1-to-xyz",
            Self::XyzToAp1 => "xyz-to-ap1",
            Self::D65ToD60 => "d65-to-d60",
            Self::D60ToD65 => "d60-to-d65",
            Self::RrtSat => "rrt-sat",
            Self::OdtSat => "odt-sat",
        }
    }

    /// Human-readable semantic name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::SrgbToXyz => "sRGB primaries -> CIE XYZ",
            Self::XyzToSrgb => "CIE XYZ -> sRGB primaries",
            Self::Ap1ToXyz => "ACEScg primaries -> CIE XYZ",
            Self::XyzToAp1 => "CIE XYZ -> ACEScg primaries",
            Self::D65ToD60 => "D65 -> D60 chromatic adaptation",
            Self::D60ToD65 => "D60 -> D65 chromatic adaptation",
            Self::RrtSat => "RRT saturation compensation",
            Self::OdtSat => "ODT saturation compensation",
        }
    }

    /// The registry entry undoing this one, if there is one.
    ///
    /// Saturation matrices have no registered inverse.
    pub const fn inverse(self) -> Option<Self> {
        match self {
            Self::SrgbToXyz => Some(Self::XyzToSrgb),
            Self::XyzToSrgb => Some(Self::SrgbToXyz),
            Self::Ap1ToXyz => Some(Self::XyzToAp1),
            Self::XyzToAp1 => Some(Self::Ap1ToXyz),
            Self::D65ToD60 => Some(Self::D60ToD65),
            Self::D60ToD65 => Some(Self::D65ToD60),
            Self::RrtSat | Self::OdtSat => None,
        }
    }
}

impl fmt::Display for MatrixId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A matrix name that is not in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown matrix '{0}' (expected one of: srgb-to-xyz, xyz-to-srgb, ap1-to-xyz, xyz-to-ap1, d65-to-d60, d60-to-d65, rrt-sat, odt-sat)")]
pub struct UnknownMatrix(pub String);

impl FromStr for MatrixId {
    type Err = UnknownMatrix;

    /// Parses a key, ignoring case and accepting `_` for `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|id| id.key() == key)
            .ok_or_else(|| UnknownMatrix(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_keys() {
        for id in MatrixId::ALL {
            assert_eq!(id.key().parse::<MatrixId>(), Ok(id));
            assert_eq!(id.to_string(), id.key());
        }
        assert_eq!("RRT_SAT".parse::<MatrixId>(), Ok(MatrixId::RrtSat));
        assert_eq!(" D65-to-D60 ".parse::<MatrixId>(), Ok(MatrixId::D65ToD60));
    }

    #[test]
    fn test_parse_unknown() {
        let err = "rec2020-to-xyz".parse::<MatrixId>().unwrap_err();
        assert!(err.to_string().contains("rec2020-to-xyz"));
    }

    #[test]
    fn test_inverse_pairs() {
        for id in MatrixId::ALL {
            let Some(inv) = id.inverse() else {
                continue;
            };
            assert_eq!(inv.inverse(), Some(id));
            let product = inv.matrix() * id.matrix();
            assert!(product.abs_diff(&Mat3::IDENTITY) < 1e-5, "{id}: {product:?}");
        }
    }

    #[test]
    fn test_saturation_rows_sum_to_one() {
        // Greys stay grey
        for m in [RRT_SAT, ODT_SAT] {
            for r in 0..3 {
                let sum: f64 = m[r].iter().sum();
                assert!((sum - 1.0).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn test_all_finite() {
        assert!(MatrixId::ALL.iter().all(|id| id.matrix().is_finite()));
    }
}
