// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Horizon definitions (zenith-angle thresholds) and event identities.
//!
//! | Horizon | Zenith angle | Meaning |
//! |---------|--------------|---------|
//! | [`Horizon::Official`] | 90.833° | sunrise / sunset, upper limb with standard refraction |
//! | [`Horizon::Civil`] | 96° | car lights on / off |
//! | [`Horizon::Nautical`] | 102° | horizon no longer visible at sea |
//! | [`Horizon::Astronomical`] | 108° | sky fully dark |

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Zenith angle the sun's centre must cross for an event to occur.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Horizon {
    /// 90.833°: 0.833° below the geometric horizon, allowing for refraction
    /// and the solar semi-diameter.
    Official,
    /// 96°
    Civil,
    /// 102°
    Nautical,
    /// 108°
    Astronomical,
    /// Any other zenith angle, in degrees.
    Custom(f64),
}

impl Horizon {
    /// Twilight horizons ordered from the geometric horizon outwards.
    pub const TWILIGHTS: [Horizon; 3] = [Horizon::Civil, Horizon::Nautical, Horizon::Astronomical];

    /// Zenith angle in degrees.
    pub const fn zenith_degrees(self) -> f64 {
        match self {
            Horizon::Official => 90.833,
            Horizon::Civil => 96.0,
            Horizon::Nautical => 102.0,
            Horizon::Astronomical => 108.0,
            Horizon::Custom(zenith) => zenith,
        }
    }
}

/// Which way the sun crosses the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Crossing {
    /// Morning: sunrise or the start of a twilight band.
    Rise,
    /// Evening: sunset or the end of a twilight band.
    Set,
}

/// A horizon crossing: what the solver is asked to find.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolarEvent {
    pub horizon: Horizon,
    pub crossing: Crossing,
}

impl SolarEvent {
    pub const SUNRISE: Self = Self::new(Horizon::Official, Crossing::Rise);
    pub const SUNSET: Self = Self::new(Horizon::Official, Crossing::Set);

    pub const fn new(horizon: Horizon, crossing: Crossing) -> Self {
        Self { horizon, crossing }
    }

    /// Sunrise or sunset proper, as opposed to a twilight boundary.
    pub fn is_sunrise_or_sunset(&self) -> bool {
        self.horizon == Horizon::Official
    }
}

impl fmt::Display for SolarEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let band = match self.horizon {
            Horizon::Official => {
                return f.write_str(match self.crossing {
                    Crossing::Rise => "sunrise",
                    Crossing::Set => "sunset",
                })
            }
            Horizon::Civil => "civil",
            Horizon::Nautical => "nautical",
            Horizon::Astronomical => "astronomical",
            Horizon::Custom(zenith) => {
                return match self.crossing {
                    Crossing::Rise => write!(f, "rise through zenith {zenith}°"),
                    Crossing::Set => write!(f, "set through zenith {zenith}°"),
                }
            }
        };
        match self.crossing {
            Crossing::Rise => write!(f, "{band} dawn"),
            Crossing::Set => write!(f, "{band} dusk"),
        }
    }
}
