// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Sunrise, sunset, solar noon and twilight for one day at one place.
//!
//! A [`TwilightReport`] is computed in full when it is constructed and never
//! changes afterwards.  Every instant is a UTC [`JulianDate`]; the UTC offset
//! a report may carry is only used by [`TwilightReport::local`] and by the
//! `Display` rendering.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use sunriseset::{Location, TwilightReport};
//!
//! let date = NaiveDate::from_ymd_opt(2020, 3, 20).unwrap();
//! let report = TwilightReport::new(date, Location::new(0.0, 0.0)?)?;
//!
//! let sunrise = report.sunrise().to_utc().unwrap();
//! assert_eq!(sunrise.format("%H:%M").to_string(), "06:04");
//! # Ok::<(), sunriseset::SolarError>(())
//! ```

use chrono::{DateTime, Datelike, FixedOffset, Local, NaiveDate, Offset, TimeZone};
use qtty::Days;
use std::fmt;

use crate::config::{FallbackPolicy, ReportOptions};
use crate::error::{SolarError, SolarResult};
use crate::event::{EventOutcome, EventSolver};
use crate::horizon::{Crossing, Horizon, SolarEvent};
use crate::location::Location;
use crate::polar::{PolarFallback, SearchDirection};
use crate::JulianDate;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The nine solar events of one calendar day.
///
/// Sunrise, sunset and solar noon are always present: when the Sun does not
/// rise or set on the requested day the nearest sunrise or sunset is reported
/// instead (see [`crate::polar`]).  A twilight band is `None` when the Sun
/// does not cross it that day, unless [`FallbackPolicy::AllEvents`] was
/// requested.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TwilightReport {
    date: NaiveDate,
    location: Location,
    utc_offset_seconds: i32,
    astronomical_dawn: Option<JulianDate>,
    nautical_dawn: Option<JulianDate>,
    civil_dawn: Option<JulianDate>,
    sunrise: JulianDate,
    solar_noon: JulianDate,
    sunset: JulianDate,
    civil_dusk: Option<JulianDate>,
    nautical_dusk: Option<JulianDate>,
    astronomical_dusk: Option<JulianDate>,
}

impl TwilightReport {
    // ── constructors ──────────────────────────────────────────────────

    /// Report for a UTC calendar date.
    pub fn new(date: NaiveDate, location: Location) -> SolarResult<Self> {
        Self::with_options(date, location, ReportOptions::default())
    }

    pub fn with_options(
        date: NaiveDate,
        location: Location,
        options: ReportOptions,
    ) -> SolarResult<Self> {
        Self::compute(date, location, 0, options)
    }

    /// Report for the UTC date containing `instant`.
    pub fn for_instant(instant: JulianDate, location: Location) -> SolarResult<Self> {
        let date = instant.to_date().ok_or(SolarError::DateOutOfRange)?;
        Self::new(date, location)
    }

    /// Report for the local calendar date of `datetime`.
    ///
    /// The events themselves are still UTC; the offset of `datetime` is kept
    /// for display.
    pub fn from_datetime<Tz: TimeZone>(
        datetime: &DateTime<Tz>,
        location: Location,
    ) -> SolarResult<Self> {
        let offset = datetime.offset().fix().local_minus_utc();
        Self::compute(datetime.date_naive(), location, offset, ReportOptions::default())
    }

    /// Report for today, in the system's local time zone.
    pub fn today(location: Location) -> SolarResult<Self> {
        Self::from_datetime(&Local::now(), location)
    }

    fn compute(
        date: NaiveDate,
        location: Location,
        utc_offset_seconds: i32,
        options: ReportOptions,
    ) -> SolarResult<Self> {
        let day = JulianDate::from_date(date);
        let solver = EventSolver::new(location);
        let fallback = PolarFallback::new(solver, options.search_limit_days);

        let band = |horizon: Horizon, crossing: Crossing| -> SolarResult<Option<JulianDate>> {
            let event = SolarEvent::new(horizon, crossing);
            match (solver.solve(day, event), options.fallback) {
                (EventOutcome::Found(instant), _) => Ok(Some(instant)),
                (EventOutcome::NotFound(_), FallbackPolicy::SunriseSunsetOnly) => Ok(None),
                (EventOutcome::NotFound(no_crossing), FallbackPolicy::AllEvents) => {
                    let direction = SearchDirection::from_no_crossing(no_crossing, crossing);
                    fallback.search(day, event, direction).map(Some)
                }
            }
        };

        let sunrise = solver.solve(day, SolarEvent::SUNRISE);
        let civil_dawn = band(Horizon::Civil, Crossing::Rise)?;
        let nautical_dawn = band(Horizon::Nautical, Crossing::Rise)?;
        let astronomical_dawn = band(Horizon::Astronomical, Crossing::Rise)?;

        let sunset = solver.solve(day, SolarEvent::SUNSET);
        let civil_dusk = band(Horizon::Civil, Crossing::Set)?;
        let nautical_dusk = band(Horizon::Nautical, Crossing::Set)?;
        let astronomical_dusk = band(Horizon::Astronomical, Crossing::Set)?;

        let solar_noon = solver.solar_noon(day);

        let day_of_year = date.ordinal();
        let nearest = |outcome: EventOutcome, event: SolarEvent| match outcome {
            EventOutcome::Found(instant) => Ok(instant),
            EventOutcome::NotFound(no_crossing) => {
                fallback.resolve(day, day_of_year, event, no_crossing)
            }
        };
        let sunrise = nearest(sunrise, SolarEvent::SUNRISE)?;
        let sunset = nearest(sunset, SolarEvent::SUNSET)?;

        Ok(Self {
            date,
            location,
            utc_offset_seconds,
            astronomical_dawn,
            nautical_dawn,
            civil_dawn,
            sunrise,
            solar_noon,
            sunset,
            civil_dusk,
            nautical_dusk,
            astronomical_dusk,
        })
    }

    // ── accessors ─────────────────────────────────────────────────────

    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    pub const fn location(&self) -> Location {
        self.location
    }

    /// Offset used for display, in seconds east of UTC.
    pub const fn utc_offset_seconds(&self) -> i32 {
        self.utc_offset_seconds
    }

    /// Start of astronomical twilight: the sky starts to lighten.
    pub const fn astronomical_dawn(&self) -> Option<JulianDate> {
        self.astronomical_dawn
    }

    pub const fn nautical_dawn(&self) -> Option<JulianDate> {
        self.nautical_dawn
    }

    pub const fn civil_dawn(&self) -> Option<JulianDate> {
        self.civil_dawn
    }

    pub const fn sunrise(&self) -> JulianDate {
        self.sunrise
    }

    pub const fn solar_noon(&self) -> JulianDate {
        self.solar_noon
    }

    pub const fn sunset(&self) -> JulianDate {
        self.sunset
    }

    pub const fn civil_dusk(&self) -> Option<JulianDate> {
        self.civil_dusk
    }

    pub const fn nautical_dusk(&self) -> Option<JulianDate> {
        self.nautical_dusk
    }

    /// End of astronomical twilight: the sky is fully dark.
    pub const fn astronomical_dusk(&self) -> Option<JulianDate> {
        self.astronomical_dusk
    }

    /// Event of `horizon` and `crossing`; `Custom` horizons are not part of a
    /// report.
    pub fn event(&self, horizon: Horizon, crossing: Crossing) -> Option<JulianDate> {
        match (horizon, crossing) {
            (Horizon::Official, Crossing::Rise) => Some(self.sunrise),
            (Horizon::Official, Crossing::Set) => Some(self.sunset),
            (Horizon::Civil, Crossing::Rise) => self.civil_dawn,
            (Horizon::Civil, Crossing::Set) => self.civil_dusk,
            (Horizon::Nautical, Crossing::Rise) => self.nautical_dawn,
            (Horizon::Nautical, Crossing::Set) => self.nautical_dusk,
            (Horizon::Astronomical, Crossing::Rise) => self.astronomical_dawn,
            (Horizon::Astronomical, Crossing::Set) => self.astronomical_dusk,
            (Horizon::Custom(_), _) => None,
        }
    }

    /// All nine events in chronological order of a normal day.
    pub fn timeline(&self) -> [Option<JulianDate>; 9] {
        [
            self.astronomical_dawn,
            self.nautical_dawn,
            self.civil_dawn,
            Some(self.sunrise),
            Some(self.solar_noon),
            Some(self.sunset),
            self.civil_dusk,
            self.nautical_dusk,
            self.astronomical_dusk,
        ]
    }

    /// Time between sunrise and sunset.
    ///
    /// Only meaningful when both happen on the requested day.
    pub fn day_length(&self) -> Days {
        self.sunset - self.sunrise
    }

    /// `instant` in the report's display offset.
    pub fn local(&self, instant: JulianDate) -> Option<DateTime<FixedOffset>> {
        let offset = FixedOffset::east_opt(self.utc_offset_seconds)?;
        Some(instant.to_utc()?.with_timezone(&offset))
    }

    fn format_event(&self, instant: Option<JulianDate>) -> String {
        match instant.and_then(|instant| self.local(instant)) {
            Some(datetime) => datetime.format("%H:%M:%S %d-%m").to_string(),
            None => "Not Found".to_string(),
        }
    }
}

impl fmt::Display for TwilightReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const LABELS: [&str; 9] = [
            "Astronomical dawn",
            "Nautical dawn",
            "Civil dawn",
            "Sunrise",
            "Solar noon",
            "Sunset",
            "Civil dusk",
            "Nautical dusk",
            "Astronomical dusk",
        ];
        for (label, instant) in LABELS.iter().zip(self.timeline()) {
            writeln!(f, "{label:<18} {}", self.format_event(instant))?;
        }
        Ok(())
    }
}
