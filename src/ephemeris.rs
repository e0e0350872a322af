// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Low-precision solar ephemeris
//!
//! The NOAA solar-position series, after Jean Meeus, *Astronomical
//! Algorithms* (2nd ed. 1998), ch. 25.  Every function is a pure function of
//! `t`, the number of Julian centuries since J2000.0 (see
//! [`Time::julian_centuries`](crate::Time::julian_centuries)).  Angles are in
//! degrees unless noted.
//!
//! Accuracy is about 0.01° in position and a few seconds in the equation of
//! time for dates within a few centuries of J2000; good enough for rise and
//! set times to the minute.
//!
//! ```rust
//! use sunriseset::{ephemeris, JulianDate};
//!
//! let t = JulianDate::new(2_458_929.0).julian_centuries();
//! let dec = ephemeris::declination(t);
//! assert!(dec.abs() < 0.5); // March equinox
//! ```

use qtty::Centuries;

/// Longitude of the Moon's ascending node, drives nutation and the
/// obliquity correction.
#[inline]
fn omega(t: f64) -> f64 {
    125.04 - 1934.136 * t
}

/// Geometric mean longitude of the Sun, normalised into `[0, 360)`.
pub fn geometric_mean_longitude(t: Centuries) -> f64 {
    let t = t.value();
    let l0 = (280.46646 + t * (36_000.76983 + 0.0003032 * t)).rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360
    if l0 >= 360.0 {
        0.0
    } else {
        l0
    }
}

/// Geometric mean anomaly of the Sun.
///
/// Not normalised: only its sine and cosine are ever used.
pub fn geometric_mean_anomaly(t: Centuries) -> f64 {
    let t = t.value();
    357.52911 + t * (35_999.05029 - 0.0001537 * t)
}

/// Eccentricity of the Earth's orbit (unitless).
pub fn orbital_eccentricity(t: Centuries) -> f64 {
    let t = t.value();
    0.016708634 - t * (0.000042037 + 0.0000001267 * t)
}

/// Equation of centre of the Sun.
pub fn equation_of_center(t: Centuries) -> f64 {
    let m = geometric_mean_anomaly(t).to_radians();
    let t = t.value();
    m.sin() * (1.914602 - t * (0.004817 + 0.000014 * t))
        + (2.0 * m).sin() * (0.019993 - 0.000101 * t)
        + (3.0 * m).sin() * 0.000289
}

pub fn true_longitude(t: Centuries) -> f64 {
    geometric_mean_longitude(t) + equation_of_center(t)
}

pub fn true_anomaly(t: Centuries) -> f64 {
    geometric_mean_anomaly(t) + equation_of_center(t)
}

/// Sun–Earth distance in astronomical units.
pub fn radius_vector(t: Centuries) -> f64 {
    let v = true_anomaly(t).to_radians();
    let e = orbital_eccentricity(t);
    1.000001018 * (1.0 - e * e) / (1.0 + e * v.cos())
}

/// True longitude corrected for nutation and aberration.
pub fn apparent_longitude(t: Centuries) -> f64 {
    true_longitude(t) - 0.00569 - 0.00478 * omega(t.value()).to_radians().sin()
}

/// Mean obliquity of the ecliptic.
pub fn mean_obliquity(t: Centuries) -> f64 {
    let t = t.value();
    let seconds = 21.448 - t * (46.815 + t * (0.00059 - 0.001813 * t));
    23.0 + (26.0 + seconds / 60.0) / 60.0
}

/// Obliquity of the ecliptic corrected for nutation.
pub fn corrected_obliquity(t: Centuries) -> f64 {
    mean_obliquity(t) + 0.00256 * omega(t.value()).to_radians().cos()
}

/// Apparent right ascension of the Sun, in `(-180, 180]`.
pub fn right_ascension(t: Centuries) -> f64 {
    let epsilon = corrected_obliquity(t).to_radians();
    let lambda = apparent_longitude(t).to_radians();
    (epsilon.cos() * lambda.sin())
        .atan2(lambda.cos())
        .to_degrees()
}

/// Apparent declination of the Sun.
pub fn declination(t: Centuries) -> f64 {
    let epsilon = corrected_obliquity(t).to_radians();
    let lambda = apparent_longitude(t).to_radians();
    (epsilon.sin() * lambda.sin()).asin().to_degrees()
}

/// Equation of time (true minus mean solar time), in **minutes** of time.
pub fn equation_of_time(t: Centuries) -> f64 {
    let epsilon = corrected_obliquity(t);
    let l0 = geometric_mean_longitude(t).to_radians();
    let e = orbital_eccentricity(t);
    let m = geometric_mean_anomaly(t).to_radians();

    let y = (epsilon.to_radians() / 2.0).tan().powi(2);

    let sin_2l0 = (2.0 * l0).sin();
    let sin_m = m.sin();
    let cos_2l0 = (2.0 * l0).cos();
    let sin_4l0 = (4.0 * l0).sin();
    let sin_2m = (2.0 * m).sin();

    let rotation = y * sin_2l0 - 2.0 * e * sin_m + 4.0 * e * y * sin_m * cos_2l0
        - 0.5 * y * y * sin_4l0
        - 1.25 * e * e * sin_2m;

    // four minutes of time per degree of rotation
    4.0 * rotation.to_degrees()
}

/// Snapshot of the Sun's apparent position at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Declination, degrees.
    pub declination: f64,
    /// Right ascension, degrees.
    pub right_ascension: f64,
    /// Equation of time, minutes.
    pub equation_of_time: f64,
    /// Distance, AU.
    pub radius_vector: f64,
}

impl SolarPosition {
    pub fn at(t: Centuries) -> Self {
        Self {
            declination: declination(t),
            right_ascension: right_ascension(t),
            equation_of_time: equation_of_time(t),
            radius_vector: radius_vector(t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::JulianDate;
    use approx::assert_abs_diff_eq;
    use chrono::NaiveDate;

    fn centuries(year: i32, month: u32, day: u32) -> Centuries {
        let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        (JulianDate::from_date(date) + qtty::Days::new(0.5)).julian_centuries()
    }

    #[test]
    fn mean_longitude_stays_in_range() {
        for i in -2_000..=2_000 {
            let t = Centuries::new(i as f64 * 0.0137);
            let l0 = geometric_mean_longitude(t);
            assert!((0.0..360.0).contains(&l0), "t = {}: {l0}", t.value());
        }
    }

    #[test]
    fn j2000_reference_values() {
        let t = Centuries::new(0.0);
        assert_abs_diff_eq!(geometric_mean_longitude(t), 280.46646, epsilon = 1e-9);
        assert_abs_diff_eq!(geometric_mean_anomaly(t), 357.52911, epsilon = 1e-9);
        assert_abs_diff_eq!(orbital_eccentricity(t), 0.016708634, epsilon = 1e-12);
        assert_abs_diff_eq!(mean_obliquity(t), 23.439291, epsilon = 1e-6);
        assert_abs_diff_eq!(declination(t), -23.03, epsilon = 0.02);
        assert_abs_diff_eq!(equation_of_time(t), -3.3, epsilon = 0.2);
        assert_abs_diff_eq!(radius_vector(t), 0.98333, epsilon = 1e-4);
    }

    #[test]
    fn solstices_and_equinoxes() {
        assert_abs_diff_eq!(declination(centuries(2021, 6, 21)), 23.44, epsilon = 0.05);
        assert_abs_diff_eq!(declination(centuries(2021, 12, 21)), -23.44, epsilon = 0.05);
        assert_abs_diff_eq!(declination(centuries(2020, 3, 20)), 0.0, epsilon = 0.5);
        assert_abs_diff_eq!(right_ascension(centuries(2020, 3, 20)), 0.0, epsilon = 1.0);
    }

    #[test]
    fn equation_of_time_extremes() {
        // early November: sundial fast by about 16.4 minutes
        assert_abs_diff_eq!(equation_of_time(centuries(2021, 11, 3)), 16.4, epsilon = 0.3);
        // mid February: sundial slow by about 14.2 minutes
        assert_abs_diff_eq!(equation_of_time(centuries(2021, 2, 11)), -14.2, epsilon = 0.3);
    }

    #[test]
    fn perihelion_and_aphelion_distances() {
        assert_abs_diff_eq!(radius_vector(centuries(2021, 1, 2)), 0.98326, epsilon = 2e-4);
        assert_abs_diff_eq!(radius_vector(centuries(2021, 7, 5)), 1.01673, epsilon = 2e-4);
    }

    #[test]
    fn obliquity_correction_is_small() {
        for i in 0..50 {
            let t = Centuries::new(i as f64 * 0.01);
            assert!((corrected_obliquity(t) - mean_obliquity(t)).abs() <= 0.00256 + 1e-12);
        }
    }

    #[test]
    fn position_snapshot_matches_functions() {
        let t = centuries(2024, 9, 1);
        let position = SolarPosition::at(t);
        assert_eq!(position.declination, declination(t));
        assert_eq!(position.right_ascension, right_ascension(t));
        assert_eq!(position.equation_of_time, equation_of_time(t));
        assert_eq!(position.radius_vector, radius_vector(t));
    }
}
