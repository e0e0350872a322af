// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Observer location on the Earth's surface.

use crate::error::{SolarError, SolarResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Geographic latitude and longitude in degrees.
///
/// Latitude is positive north, longitude positive **east** (west negative).
/// Both are range-checked on construction, so every `Location` in existence
/// is safe to feed to the trigonometry.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Location {
    latitude: f64,
    longitude: f64,
}

impl Location {
    /// Default site, south of Auckland, New Zealand:
    /// 36°59'27.6"S, 174°29'13.2"E.
    pub const DEFAULT: Self = Self {
        latitude: -(36.0 + 59.0 / 60.0 + 27.60 / 3600.0),
        longitude: 174.0 + 29.0 / 60.0 + 13.20 / 3600.0,
    };

    pub fn new(latitude: f64, longitude: f64) -> SolarResult<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(SolarError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(SolarError::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    #[inline]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    #[inline]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Location {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            latitude: f64,
            longitude: f64,
        }

        let raw = Raw::deserialize(deserializer)?;
        Location::new(raw.latitude, raw.longitude).map_err(serde::de::Error::custom)
    }
}
