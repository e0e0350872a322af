// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Sunrise, sunset, solar noon and twilight
//!
//! This crate computes the UTC times of the daily solar events for any date
//! and place with the NOAA low-precision solar-position algorithm: no
//! atmospheric data beyond the standard 0.833° refraction allowance, no
//! tables, no I/O.
//!
//! # Core types
//!
//! - [`TwilightReport`]: all nine events of one day at one [`Location`].
//! - [`EventSolver`]: two-pass solver for a single [`SolarEvent`].
//! - [`PolarFallback`]: nearest-day search for days without a crossing.
//! - [`ephemeris`]: the Sun's position as pure functions of Julian centuries.
//! - [`Time<S>`] / [`JulianDate`]: UTC-referenced instants.
//!
//! # Events
//!
//! | Event | Zenith angle | Field |
//! |-------|--------------|-------|
//! | astronomical dawn / dusk | 108° | `Option` |
//! | nautical dawn / dusk | 102° | `Option` |
//! | civil dawn / dusk | 96° | `Option` |
//! | sunrise / sunset | 90.833° | always present |
//! | solar noon | n/a | always present |
//!
//! Inside the polar circles a day may have no sunrise or no sunset.  The
//! report then carries the nearest one, found by [`PolarFallback`].
//!
//! ```rust
//! use chrono::NaiveDate;
//! use sunriseset::{Location, TwilightReport};
//!
//! let paris = Location::new(48.8566, 2.3522)?;
//! let report = TwilightReport::new(NaiveDate::from_ymd_opt(2024, 6, 21).unwrap(), paris)?;
//! assert!(report.sunrise() < report.solar_noon());
//! println!("{report}");
//! # Ok::<(), sunriseset::SolarError>(())
//! ```
//!
//! # Features
//!
//! - `log` (default): debug/trace output from the polar fallback search.
//! - `serde`: `Serialize`/`Deserialize` for reports, locations and options.

mod config;
pub mod ephemeris;
mod error;
mod event;
mod horizon;
mod hour_angle;
pub(crate) mod instant;
mod julian_date_ext;
mod location;
pub mod polar;
mod report;
pub(crate) mod scales;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use config::{FallbackPolicy, ReportOptions};
pub use ephemeris::SolarPosition;
pub use error::{SolarError, SolarResult};
pub use event::{EventOutcome, EventSolver};
pub use horizon::{Crossing, Horizon, SolarEvent};
pub use hour_angle::{hour_angle, sunrise_hour_angle, sunset_hour_angle, NoCrossing};
pub use instant::{Time, TimeScale};
pub use location::Location;
pub use polar::{DaySearch, PolarFallback, SearchDirection};
pub use report::TwilightReport;
pub use scales::{JD, MJD};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Julian Date on the UTC axis.
///
/// This is a type alias for [`Time<JD>`]; every event is reported as one.
pub type JulianDate = Time<JD>;

/// Modified Julian Date, `JD − 2 400 000.5`.
pub type ModifiedJulianDate = Time<MJD>;
