//! Exposure calculation command.

use crate::ExposureArgs;
use anyhow::{Context, Result, bail};
use lux_core::Error;
use lux_exposure::{
    ExposureParameters, ev100_to_exposure, ev100_to_yavg, ev100_to_ymax, yavg_to_ev100,
};
use std::io::{self, Write};
use tracing::{debug, trace};

/// Derived exposure quantities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    pub ev100: f64,
    /// EV at the actual ISO (camera input only)
    pub ev_s: Option<f64>,
    pub yavg: f64,
    pub ymax: f64,
    pub exposure: f64,
}

impl Report {
    pub fn from_camera(params: &ExposureParameters) -> Self {
        Self {
            ev100: params.ev100(),
            ev_s: Some(params.ev_s()),
            yavg: params.average_luminance(),
            ymax: params.saturation_luminance(),
            exposure: params.exposure(),
        }
    }

    pub fn from_luminance(yavg: f64) -> Result<Self, Error> {
        if !(yavg.is_finite() && yavg > 0.0) {
            return Err(Error::invalid_parameter(
                "luminance",
                yavg,
                "must be positive and finite",
            ));
        }
        let ev100 = yavg_to_ev100(yavg);
        Ok(Self {
            ev100,
            ev_s: None,
            yavg: ev100_to_yavg(ev100),
            ymax: ev100_to_ymax(ev100),
            exposure: ev100_to_exposure(ev100),
        })
    }

    pub fn write<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "EV100:     {:.4}", self.ev100)?;
        if let Some(ev_s) = self.ev_s {
            writeln!(out, "EV (ISO):  {ev_s:.4}")?;
        }
        writeln!(out, "Yavg:      {:.6} cd/m^2", self.yavg)?;
        writeln!(out, "Ymax:      {:.6} cd/m^2", self.ymax)?;
        writeln!(out, "Exposure:  {:.6}", self.exposure)
    }
}

pub fn run(args: ExposureArgs) -> Result<()> {
    trace!(
        aperture = ?args.aperture,
        shutter = ?args.shutter,
        iso = ?args.iso,
        luminance = ?args.luminance,
        "exposure::run"
    );

    let report = match (args.aperture, args.shutter, args.iso, args.luminance) {
        (Some(n), Some(t), Some(s), None) => {
            let params = ExposureParameters::new(n, t, s).context("Invalid camera settings")?;
            Report::from_camera(&params)
        }
        (None, None, None, Some(y)) => {
            Report::from_luminance(y).context("Invalid scene luminance")?
        }
        _ => bail!("Give either --aperture, --shutter and --iso, or --luminance"),
    };
    debug!(ev100 = report.ev100, exposure = report.exposure, "Computed exposure");

    let mut out = io::stdout().lock();
    report.write(&mut out)?;
    out.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_report() {
        // f/1.0, 1s, ISO 100 is EV100 0
        let params = ExposureParameters::new(1.0, 1.0, 100.0).unwrap();
        let report = Report::from_camera(&params);
        assert!(report.ev100.abs() < 1e-12);
        assert!((report.yavg - 0.125).abs() < 1e-12);
        assert!((report.ymax - 1.2).abs() < 1e-12);
        assert!((report.exposure - 1.0 / 1.2).abs() < 1e-12);
    }

    #[test]
    fn test_luminance_report() {
        let report = Report::from_luminance(0.125).unwrap();
        assert!(report.ev100.abs() < 1e-12);
        assert!((report.yavg - 0.125).abs() < 1e-12);
        assert_eq!(report.ev_s, None);
    }

    #[test]
    fn test_luminance_rejects_non_positive() {
        for y in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = Report::from_luminance(y).unwrap_err();
            assert!(err.is_parameter_error());
        }
    }

    #[test]
    fn test_write_report() {
        let report = Report::from_luminance(0.125).unwrap();
        let mut out = Vec::new();
        report.write(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("EV100:     0.0000\n"));
        assert!(text.contains("Yavg:      0.125000 cd/m^2\n"));
        assert!(text.ends_with("Exposure:  0.833333\n"));
    }
}
