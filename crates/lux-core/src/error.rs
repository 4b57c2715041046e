//! Error types for lux-core operations.
//!
//! The lux crates are mostly pure math, so the taxonomy is small:
//! - Camera parameters outside the physical domain of the exposure model
//! - Image geometry outside what the pixel buffer supports
//!
//! # Usage
//!
//! ```rust
//! use lux_core::{Error, Result};
//!
//! fn check_aperture(n: f64) -> Result<f64> {
//!     if n <= 0.0 {
//!         return Err(Error::invalid_parameter("aperture", n, "must be > 0"));
//!     }
//!     Ok(n)
//! }
//!
//! assert!(check_aperture(2.8).is_ok());
//! assert!(check_aperture(0.0).is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - `lux-exposure` - Validated camera parameters
//! - [`crate::image::ImageData`] - Checked construction
//! - `lux-cli` - Reported through `anyhow`

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by validated lux operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A scalar parameter is outside its documented domain.
    ///
    /// Returned by checked constructors such as `ExposureParameters::new`
    /// when an aperture, shutter time or ISO is not strictly positive.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lux_core::Error;
    ///
    /// let err = Error::invalid_parameter("iso", -100.0, "must be > 0");
    /// assert!(err.to_string().contains("iso"));
    /// ```
    #[error("invalid {name} {value}: {reason}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Offending value
        value: f64,
        /// Why the value was rejected
        reason: String,
    },

    /// Image geometry is outside the supported range.
    #[error("invalid image geometry: {channels} channels, {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested channel count
        channels: u32,
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why the geometry was rejected
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::InvalidParameter`] error.
    #[inline]
    pub fn invalid_parameter(name: &'static str, value: f64, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            value,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(
        channels: u32,
        width: u32,
        height: u32,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidDimensions {
            channels,
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Returns `true` if this is a parameter-domain error.
    #[inline]
    pub fn is_parameter_error(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }

    /// Returns `true` if this is a geometry error.
    #[inline]
    pub fn is_dimension_error(&self) -> bool {
        matches!(self, Self::InvalidDimensions { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter() {
        let err = Error::invalid_parameter("shutter", 0.0, "must be > 0");
        let msg = err.to_string();
        assert!(msg.contains("shutter"));
        assert!(msg.contains("must be > 0"));
        assert!(err.is_parameter_error());
        assert!(!err.is_dimension_error());
    }

    #[test]
    fn test_invalid_dimensions() {
        let err = Error::invalid_dimensions(5, 512, 512, "channels must be 1-4");
        let msg = err.to_string();
        assert!(msg.contains("5 channels"));
        assert!(msg.contains("512x512"));
        assert!(err.is_dimension_error());
    }
}
