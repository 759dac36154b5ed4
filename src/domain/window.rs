//! Rectangular RA/DEC search window.

use crate::error::{AppError, ErrorKind};

/// Arc-minutes per degree.
const ARCMIN_PER_DEG: f64 = 60.0;

/// A validated RA/DEC box in degrees.
///
/// Construction is the only place the bounds are checked; a `Window` always
/// satisfies `ra_min < ra_max` and `dec_min < dec_max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window {
    ra_min: f64,
    ra_max: f64,
    dec_min: f64,
    dec_max: f64,
}

impl Window {
    pub fn new(ra_min: f64, ra_max: f64, dec_min: f64, dec_max: f64) -> Result<Self, AppError> {
        // Negated so NaN bounds are rejected too.
        if !(ra_min < ra_max && dec_min < dec_max) {
            return Err(AppError::new(
                ErrorKind::InvalidWindow,
                format!(
                    "Invalid RA-DEC window {{RAmin: {ra_min:?}, RAmax: {ra_max:?}, DECmin: {dec_min:?}, DECmax: {dec_max:?}}}"
                ),
            ));
        }
        Ok(Self {
            ra_min,
            ra_max,
            dec_min,
            dec_max,
        })
    }

    /// Window midpoint as `(ra, dec)`.
    pub fn center(&self) -> (f64, f64) {
        (
            0.5 * (self.ra_min + self.ra_max),
            0.5 * (self.dec_min + self.dec_max),
        )
    }

    /// Radius (arcmin) of the circle through the window corners.
    ///
    /// Half the box diagonal, converted from degrees: `30 * sqrt(Δra² + Δdec²)`.
    pub fn aperture_radius_arcmin(&self) -> f64 {
        let d_ra = self.ra_max - self.ra_min;
        let d_dec = self.dec_max - self.dec_min;
        ARCMIN_PER_DEG * 0.5 * (d_ra * d_ra + d_dec * d_dec).sqrt()
    }

    /// Inclusive containment test; no RA wraparound is applied here.
    pub fn contains(&self, ra: f64, dec: f64) -> bool {
        !(ra < self.ra_min || ra > self.ra_max || dec < self.dec_min || dec > self.dec_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_is_half_diagonal_in_arcmin() {
        let cases = [
            (0.0, 1.0, -0.5, 0.5),
            (-5.0, 5.0, -2.0, 3.0),
            (10.0, 10.25, 40.0, 41.5),
        ];
        for (ra_min, ra_max, dec_min, dec_max) in cases {
            let w = Window::new(ra_min, ra_max, dec_min, dec_max).unwrap();
            let expected = 30.0 * ((ra_max - ra_min).powi(2) + (dec_max - dec_min).powi(2)).sqrt();
            assert!((w.aperture_radius_arcmin() - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn default_window_radius() {
        let w = Window::new(0.0, 1.0, -0.5, 0.5).unwrap();
        assert!((w.aperture_radius_arcmin() - 30.0 * 2f64.sqrt()).abs() < 1e-12);
        assert_eq!(w.center(), (0.5, 0.0));
    }

    #[test]
    fn inverted_or_degenerate_bounds_are_rejected() {
        for (ra_min, ra_max, dec_min, dec_max) in [
            (1.0, 0.0, -0.5, 0.5),
            (1.0, 1.0, -0.5, 0.5),
            (0.0, 1.0, 0.5, -0.5),
            (0.0, 1.0, 0.5, 0.5),
            (f64::NAN, 1.0, -0.5, 0.5),
        ] {
            let err = Window::new(ra_min, ra_max, dec_min, dec_max).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidWindow);
        }
    }

    #[test]
    fn invalid_window_message_lists_bounds() {
        let err = Window::new(2.0, 1.0, -0.5, 0.5).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid RA-DEC window {RAmin: 2.0, RAmax: 1.0, DECmin: -0.5, DECmax: 0.5}"
        );
    }

    #[test]
    fn contains_is_inclusive() {
        let w = Window::new(0.0, 1.0, -0.5, 0.5).unwrap();
        assert!(w.contains(0.0, -0.5));
        assert!(w.contains(1.0, 0.5));
        assert!(w.contains(0.3, 0.1));
        assert!(!w.contains(1.0001, 0.0));
        assert!(!w.contains(0.5, -0.51));
    }
}
