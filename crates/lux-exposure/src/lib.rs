//! # lux-exposure
//!
//! Physically based camera exposure.
//!
//! Converts between camera settings (aperture, shutter time, ISO), the
//! exposure value at ISO 100 (EV100), scene luminance, and the linear
//! multiplier applied to scene radiance before tone mapping.
//!
//! # Model
//!
//! ```text
//! EV_s   = log2(N^2 / t)                      N = f-number, t = seconds
//! EV_s   = EV100 + log2(S / 100)              S = ISO arithmetic speed
//! EV100  = log2(N^2 / t * 100 / S)
//!
//! N^2/t  = L * S / K                          reflected-light meter, K = 12.5
//! EV100  = log2(Yavg * 100 / 12.5)
//!
//! Hsat   = q * L * t / N^2 = 78 / Ssat        q = 0.65, Ssat = 100
//! Ymax   = 78 / (100 * 0.65) * 2^EV100
//! Exposure = 1 / Ymax
//! ```
//!
//! # Domain
//!
//! The free functions are total over `f64` and perform no validation.
//! Exposure is only physically defined for strictly positive inputs;
//! anything else falls through to the IEEE result of `log2`:
//!
//! | Input | Result |
//! |-------|--------|
//! | `N == 0`, `Yavg == 0` | `-inf` |
//! | `t == 0`, `S == 0` | `+inf` |
//! | `t < 0`, `S < 0`, `Yavg < 0` | `NaN` |
//! | `N < 0` | same as `|N|` (the aperture is squared) |
//!
//! Callers holding unvalidated camera settings should go through
//! [`ExposureParameters::new`], which rejects them up front.
//!
//! # Usage
//!
//! ```rust
//! use lux_exposure::{calculate_ev100, ev100_to_exposure, ExposureParameters};
//!
//! // Sunny 16: f/16, 1/100 s, ISO 100
//! let ev = calculate_ev100(16.0, 1.0 / 100.0, 100.0);
//! assert!((ev - 14.64).abs() < 0.01);
//!
//! let scale = ev100_to_exposure(ev);
//!
//! let camera = ExposureParameters::new(16.0, 1.0 / 100.0, 100.0)?;
//! assert_eq!(camera.exposure(), scale);
//! # Ok::<(), lux_core::Error>(())
//! ```
//!
//! # References
//!
//! - Lagarde & de Rousiers, *Moving Frostbite to PBR* (2014), section 4.6
//! - Filament, *Physically based camera* chapter
//! - ISO 12232:2006 (saturation-based speed)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod params;

pub use params::ExposureParameters;

/// Reflected-light meter calibration constant K.
pub const K_REFLECTED: f64 = 12.5;

/// Lens and vignetting attenuation factor q.
pub const LENS_Q: f64 = 0.65;

/// Sensitivity the saturation-based model is evaluated at.
pub const SATURATION_SPEED: f64 = 100.0;

/// Saturation luminous exposure numerator, `Hsat = 78 / Ssat`.
pub const SATURATION_HSAT: f64 = 78.0;

/// ISO speed EV100 is referenced to.
pub const ISO_BASE: f64 = 100.0;

/// Exposure value at ISO 100 from camera settings.
///
/// `EV100 = log2((N^2 / t) * (100 / S))`
///
/// # Arguments
///
/// * `aperture` - f-number N (> 0)
/// * `shutter` - exposure time t in seconds (> 0)
/// * `iso` - ISO arithmetic speed S (> 0)
///
/// See the crate docs for what non-positive inputs produce.
///
/// # Example
///
/// ```rust
/// use lux_exposure::calculate_ev100;
///
/// assert_eq!(calculate_ev100(1.0, 1.0, 100.0), 0.0);
/// ```
#[inline]
pub fn calculate_ev100(aperture: f64, shutter: f64, iso: f64) -> f64 {
    ((aperture * aperture / shutter) * (ISO_BASE / iso)).log2()
}

/// EV100 from average scene luminance in cd/m2.
///
/// `EV100 = log2(Yavg * 100 / 12.5)`
#[inline]
pub fn yavg_to_ev100(yavg: f64) -> f64 {
    (yavg * ISO_BASE / K_REFLECTED).log2()
}

/// Average scene luminance in cd/m2 metered at `ev100`.
///
/// Inverse of [`yavg_to_ev100`]: `Yavg = 12.5 / 100 * 2^EV100`.
///
/// # Example
///
/// ```rust
/// use lux_exposure::{ev100_to_yavg, yavg_to_ev100};
///
/// let y = ev100_to_yavg(10.0);
/// assert!((yavg_to_ev100(y) - 10.0).abs() < 1e-12);
/// ```
#[inline]
pub fn ev100_to_yavg(ev100: f64) -> f64 {
    K_REFLECTED / ISO_BASE * ev100.exp2()
}

/// Luminance in cd/m2 that saturates the sensor at `ev100`.
///
/// `Ymax = 78 / (100 * 0.65) * 2^EV100`
#[inline]
pub fn ev100_to_ymax(ev100: f64) -> f64 {
    SATURATION_HSAT / (SATURATION_SPEED * LENS_Q) * ev100.exp2()
}

/// Linear multiplier that maps the saturation luminance to 1.0.
///
/// `Exposure = 1 / Ymax = (100 * 0.65) / 78 * 2^-EV100`
///
/// # Example
///
/// ```rust
/// use lux_exposure::ev100_to_exposure;
///
/// assert!((ev100_to_exposure(0.0) - 100.0 * 0.65 / 78.0).abs() < 1e-15);
/// ```
#[inline]
pub fn ev100_to_exposure(ev100: f64) -> f64 {
    1.0 / ev100_to_ymax(ev100)
}
