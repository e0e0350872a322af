// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Hour angle at which the Sun crosses a given zenith angle.
//!
//! ```text
//! cos H = cos Z / (cos φ · cos δ) − tan φ · tan δ
//! ```
//!
//! When the right-hand side leaves `[-1, 1]` the Sun never reaches `Z` that
//! day at latitude `φ`.  That is reported as [`NoCrossing`], never as a NaN.

use crate::horizon::{Crossing, Horizon};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Why a horizon is not crossed on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NoCrossing {
    /// The Sun stays above the horizon all day (midnight sun).
    AlwaysAbove,
    /// The Sun stays below the horizon all day (polar night).
    AlwaysBelow,
}

/// `cos H` for the crossing of `horizon`; outside `[-1, 1]` when there is none.
fn cos_hour_angle(declination: f64, latitude: f64, horizon: Horizon) -> f64 {
    let lat = latitude.to_radians();
    let dec = declination.to_radians();
    horizon.zenith_degrees().to_radians().cos() / (lat.cos() * dec.cos()) - lat.tan() * dec.tan()
}

/// Hour angle of the morning crossing, in radians (positive).
pub fn sunrise_hour_angle(
    declination: f64,
    latitude: f64,
    horizon: Horizon,
) -> Result<f64, NoCrossing> {
    let arg = cos_hour_angle(declination, latitude, horizon);
    if arg < -1.0 {
        Err(NoCrossing::AlwaysAbove)
    } else if arg > 1.0 {
        Err(NoCrossing::AlwaysBelow)
    } else {
        Ok(arg.acos())
    }
}

/// Hour angle of the evening crossing, in radians (negative).
pub fn sunset_hour_angle(
    declination: f64,
    latitude: f64,
    horizon: Horizon,
) -> Result<f64, NoCrossing> {
    sunrise_hour_angle(declination, latitude, horizon).map(|h| -h)
}

pub fn hour_angle(
    crossing: Crossing,
    declination: f64,
    latitude: f64,
    horizon: Horizon,
) -> Result<f64, NoCrossing> {
    match crossing {
        Crossing::Rise => sunrise_hour_angle(declination, latitude, horizon),
        Crossing::Set => sunset_hour_angle(declination, latitude, horizon),
    }
}

/// Hour angle of a crossing that happens between two sampled days.
///
/// Near the poles the Sun can pass from always-below to always-above a
/// horizon from one day to the next.  The argument is clamped to `[-1, 1]`,
/// so the crossing lands at local noon or local midnight of the day given.
pub fn grazing_hour_angle(
    crossing: Crossing,
    declination: f64,
    latitude: f64,
    horizon: Horizon,
) -> f64 {
    let h = cos_hour_angle(declination, latitude, horizon)
        .clamp(-1.0, 1.0)
        .acos();
    match crossing {
        Crossing::Rise => h,
        Crossing::Set => -h,
    }
}
