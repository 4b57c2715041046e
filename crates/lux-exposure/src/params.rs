//! Validated camera settings.

use lux_core::{Error, Result};

use crate::{ISO_BASE, calculate_ev100, ev100_to_exposure, ev100_to_yavg, ev100_to_ymax};

/// Aperture, shutter time and ISO of a physical camera.
///
/// Construction fails fast on values for which exposure is undefined, so
/// every derived quantity is finite.
///
/// # Example
///
/// ```rust
/// use lux_exposure::ExposureParameters;
///
/// let camera = ExposureParameters::new(2.8, 1.0 / 60.0, 400.0)?;
/// assert!(camera.ev100().is_finite());
///
/// assert!(ExposureParameters::new(2.8, 0.0, 400.0).is_err());
/// # Ok::<(), lux_core::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExposureParameters {
    aperture: f64,
    shutter: f64,
    iso: f64,
}

impl ExposureParameters {
    /// Validates and stores camera settings.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] if any value is not finite and strictly positive.
    pub fn new(aperture: f64, shutter: f64, iso: f64) -> Result<Self> {
        Ok(Self {
            aperture: positive("aperture", aperture)?,
            shutter: positive("shutter", shutter)?,
            iso: positive("iso", iso)?,
        })
    }

    /// f-number N.
    #[inline]
    pub fn aperture(&self) -> f64 {
        self.aperture
    }

    /// Exposure time t in seconds.
    #[inline]
    pub fn shutter(&self) -> f64 {
        self.shutter
    }

    /// ISO arithmetic speed S.
    #[inline]
    pub fn iso(&self) -> f64 {
        self.iso
    }

    /// Exposure value referenced to ISO 100.
    #[inline]
    pub fn ev100(&self) -> f64 {
        calculate_ev100(self.aperture, self.shutter, self.iso)
    }

    /// Exposure value at the camera's own sensitivity, `log2(N^2 / t)`.
    ///
    /// Equals `ev100() + log2(S / 100)`.
    #[inline]
    pub fn ev_s(&self) -> f64 {
        self.ev100() + (self.iso / ISO_BASE).log2()
    }

    /// Average scene luminance these settings meter as correctly exposed.
    #[inline]
    pub fn average_luminance(&self) -> f64 {
        ev100_to_yavg(self.ev100())
    }

    /// Luminance that saturates the sensor with these settings.
    #[inline]
    pub fn saturation_luminance(&self) -> f64 {
        ev100_to_ymax(self.ev100())
    }

    /// Linear multiplier for scene radiance before tone mapping.
    #[inline]
    pub fn exposure(&self) -> f64 {
        ev100_to_exposure(self.ev100())
    }
}

fn positive(name: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(Error::invalid_parameter(name, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(Error::invalid_parameter(name, value, "must be > 0"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_accessors() {
        let p = ExposureParameters::new(2.8, 0.5, 200.0).unwrap();
        assert_eq!(p.aperture(), 2.8);
        assert_eq!(p.shutter(), 0.5);
        assert_eq!(p.iso(), 200.0);
    }

    #[test]
    fn test_matches_free_functions() {
        let p = ExposureParameters::new(8.0, 1.0 / 250.0, 400.0).unwrap();
        let ev = calculate_ev100(8.0, 1.0 / 250.0, 400.0);
        assert_eq!(p.ev100(), ev);
        assert_eq!(p.exposure(), ev100_to_exposure(ev));
        assert_eq!(p.average_luminance(), ev100_to_yavg(ev));
        assert_eq!(p.saturation_luminance(), ev100_to_ymax(ev));
    }

    #[test]
    fn test_ev_s() {
        let p = ExposureParameters::new(4.0, 0.25, 800.0).unwrap();
        assert_relative_eq!(p.ev_s(), (16.0_f64 / 0.25).log2(), max_relative = 1e-12);
    }

    #[test]
    fn test_rejects_non_positive() {
        for (n, t, s, name) in [
            (0.0, 1.0, 100.0, "aperture"),
            (-1.4, 1.0, 100.0, "aperture"),
            (1.4, 0.0, 100.0, "shutter"),
            (1.4, -0.01, 100.0, "shutter"),
            (1.4, 1.0, 0.0, "iso"),
            (1.4, 1.0, -100.0, "iso"),
        ] {
            let err = ExposureParameters::new(n, t, s).unwrap_err();
            assert!(err.is_parameter_error());
            assert!(err.to_string().contains(name), "{err}");
        }
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(ExposureParameters::new(f64::NAN, 1.0, 100.0).is_err());
        assert!(ExposureParameters::new(1.0, f64::INFINITY, 100.0).is_err());
        assert!(ExposureParameters::new(1.0, 1.0, f64::INFINITY).is_err());
    }
}
