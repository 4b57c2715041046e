//! Property tests for the exposure model.

use lux_exposure::{calculate_ev100, ev100_to_exposure, ev100_to_yavg, ev100_to_ymax, yavg_to_ev100};
use proptest::prelude::*;

proptest! {
    #[test]
    fn yavg_roundtrip(ev in -5.0f64..20.0) {
        let back = yavg_to_ev100(ev100_to_yavg(ev));
        prop_assert!((back - ev).abs() <= 1e-9 * ev.abs().max(1.0), "{ev} -> {back}");
    }

    #[test]
    fn luminance_is_non_negative(ev in -5.0f64..20.0) {
        prop_assert!(ev100_to_yavg(ev) > 0.0);
        prop_assert!(ev100_to_ymax(ev) > 0.0);
        prop_assert!(ev100_to_exposure(ev) > 0.0);
    }

    #[test]
    fn ev100_increases_with_aperture(
        n in 0.5f64..64.0,
        step in 1.001f64..4.0,
        t in 1e-4f64..30.0,
        s in 25.0f64..25600.0,
    ) {
        prop_assert!(calculate_ev100(n * step, t, s) > calculate_ev100(n, t, s));
    }

    #[test]
    fn ev100_decreases_with_shutter(
        n in 0.5f64..64.0,
        t in 1e-4f64..30.0,
        step in 1.001f64..4.0,
        s in 25.0f64..25600.0,
    ) {
        prop_assert!(calculate_ev100(n, t * step, s) < calculate_ev100(n, t, s));
    }

    #[test]
    fn ev100_decreases_with_iso(
        n in 0.5f64..64.0,
        t in 1e-4f64..30.0,
        s in 25.0f64..25600.0,
        step in 1.001f64..4.0,
    ) {
        prop_assert!(calculate_ev100(n, t, s * step) < calculate_ev100(n, t, s));
    }

    #[test]
    fn exposure_halves_per_stop(ev in -5.0f64..20.0) {
        let ratio = ev100_to_exposure(ev) / ev100_to_exposure(ev + 1.0);
        prop_assert!((ratio - 2.0).abs() < 1e-12);
    }
}
