// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Polar fallback: the nearest day that does have a crossing.
//!
//! Inside the polar circles there are runs of days with no sunrise or no
//! sunset at all.  For those days the report carries the *nearest* such event
//! instead, looking backward ("most recent") or forward ("next") one day at a
//! time.  The direction depends on hemisphere and season:
//!
//! | Latitude | Day of year | Sunrise | Sunset |
//! |----------|-------------|---------|--------|
//! | > 66.4° | 79 < doy < 267 | most recent | next |
//! | > 66.4° | doy < 83 or doy > 263 | next | most recent |
//! | < −66.4° | doy < 83 or doy > 263 | most recent | next |
//! | < −66.4° | 79 < doy < 267 | next | most recent |
//!
//! The first matching row wins: the ranges overlap for a few days around
//! each equinox.  Between 65.7° and 66.4° refraction already gives a few
//! days of midnight sun that no row covers; there the direction follows
//! from why the day has no crossing ([`SearchDirection::from_no_crossing`]).
//!
//! Close to the poles the Sun can go from always below to always above the
//! horizon between two consecutive days.  The crossing is then placed on the
//! first day of the new state, with the hour angle clamped.
//!
//! The search is bounded (see
//! [`ReportOptions::search_limit_days`](crate::ReportOptions)).

use qtty::Days;

use crate::error::{SolarError, SolarResult};
use crate::event::{EventOutcome, EventSolver};
use crate::horizon::{Crossing, SolarEvent};
use crate::hour_angle::NoCrossing;
use crate::JulianDate;

/// Latitude beyond which a day may lack a sunrise or a sunset.
pub const POLAR_LATITUDE: f64 = 66.4;

/// Which way to step through the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchDirection {
    /// Towards the most recent event.
    Backward,
    /// Towards the next event.
    Forward,
}

impl SearchDirection {
    #[inline]
    fn step(self) -> Days {
        match self {
            SearchDirection::Backward => Days::new(-1.0),
            SearchDirection::Forward => Days::new(1.0),
        }
    }

    /// Direction from the hemisphere/season table, for sunrise and sunset.
    ///
    /// `None` when no row applies, i.e. outside the polar circles.
    pub fn from_season(latitude: f64, day_of_year: u32, crossing: Crossing) -> Option<Self> {
        let recent_sunrise = recent_sunrise_season(latitude, day_of_year);
        let next_sunrise = next_sunrise_season(latitude, day_of_year);
        match crossing {
            Crossing::Rise if recent_sunrise => Some(SearchDirection::Backward),
            Crossing::Rise if next_sunrise => Some(SearchDirection::Forward),
            Crossing::Set if recent_sunrise => Some(SearchDirection::Forward),
            Crossing::Set if next_sunrise => Some(SearchDirection::Backward),
            _ => None,
        }
    }

    /// Direction from why the requested day has no crossing.
    ///
    /// With the Sun above the horizon all day the last rise lies behind and
    /// the next set ahead; below it, the other way round.  Used for twilight
    /// bands, whose polar thresholds differ from [`POLAR_LATITUDE`].
    pub fn from_no_crossing(no_crossing: NoCrossing, crossing: Crossing) -> Self {
        match (no_crossing, crossing) {
            (NoCrossing::AlwaysAbove, Crossing::Rise) => SearchDirection::Backward,
            (NoCrossing::AlwaysAbove, Crossing::Set) => SearchDirection::Forward,
            (NoCrossing::AlwaysBelow, Crossing::Rise) => SearchDirection::Forward,
            (NoCrossing::AlwaysBelow, Crossing::Set) => SearchDirection::Backward,
        }
    }
}

/// Northern summer or southern winter: the last sunrise is behind us.
fn recent_sunrise_season(latitude: f64, day_of_year: u32) -> bool {
    (latitude > POLAR_LATITUDE && day_of_year > 79 && day_of_year < 267)
        || (latitude < -POLAR_LATITUDE && (day_of_year < 83 || day_of_year > 263))
}

/// Northern winter or southern summer: the next sunrise is ahead of us.
fn next_sunrise_season(latitude: f64, day_of_year: u32) -> bool {
    (latitude > POLAR_LATITUDE && (day_of_year < 83 || day_of_year > 263))
        || (latitude < -POLAR_LATITUDE && day_of_year > 79 && day_of_year < 267)
}

/// Candidate days, starting with the requested one, one day apart.
///
/// Yields the start day plus at most `limit` further days.
#[derive(Debug, Clone)]
pub struct DaySearch {
    next: JulianDate,
    step: Days,
    remaining: u32,
}

impl DaySearch {
    pub fn new(start: JulianDate, direction: SearchDirection, limit: u32) -> Self {
        Self {
            next: start.start_of_day(),
            step: direction.step(),
            remaining: limit.saturating_add(1),
        }
    }
}

impl Iterator for DaySearch {
    type Item = JulianDate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let day = self.next;
        self.next += self.step;
        Some(day)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DaySearch {}

/// Resolves events that have no crossing on the requested day.
#[derive(Debug, Clone, Copy)]
pub struct PolarFallback {
    solver: EventSolver,
    search_limit_days: u32,
}

impl PolarFallback {
    pub const fn new(solver: EventSolver, search_limit_days: u32) -> Self {
        Self {
            solver,
            search_limit_days,
        }
    }

    /// Nearest sunrise or sunset to a day on which it has no crossing.
    ///
    /// The season table decides the direction; where it has no row,
    /// `no_crossing` does.
    pub fn resolve(
        &self,
        day: JulianDate,
        day_of_year: u32,
        event: SolarEvent,
        no_crossing: NoCrossing,
    ) -> SolarResult<JulianDate> {
        let latitude = self.solver.location().latitude();
        let direction = SearchDirection::from_season(latitude, day_of_year, event.crossing)
            .unwrap_or_else(|| SearchDirection::from_no_crossing(no_crossing, event.crossing));
        self.search(day, event, direction)
    }

    /// First day in `direction`, starting at `day`, on which `event` occurs.
    pub fn search(
        &self,
        day: JulianDate,
        event: SolarEvent,
        direction: SearchDirection,
    ) -> SolarResult<JulianDate> {
        #[cfg(feature = "log")]
        log::debug!(
            "no {event} on JD {}, searching {direction:?} up to {} days",
            day.start_of_day().value(),
            self.search_limit_days
        );

        let mut previous: Option<NoCrossing> = None;
        for candidate in DaySearch::new(day, direction, self.search_limit_days) {
            match self.solver.solve(candidate, event) {
                EventOutcome::Found(instant) => {
                    #[cfg(feature = "log")]
                    log::debug!(
                        "{event} found {} days away, at JD {}",
                        (candidate - day.start_of_day()).value().abs(),
                        instant.value()
                    );
                    return Ok(instant);
                }
                EventOutcome::NotFound(no_crossing) => {
                    if previous.is_some_and(|p| p != no_crossing) {
                        #[cfg(feature = "log")]
                        log::debug!(
                            "{event} skipped between days, grazing on JD {}",
                            candidate.value()
                        );
                        return Ok(self.solver.grazing(candidate, event));
                    }
                    #[cfg(feature = "log")]
                    log::trace!("no {event} on JD {} ({no_crossing:?})", candidate.value());
                    previous = Some(no_crossing);
                }
            }
        }

        #[cfg(feature = "log")]
        log::warn!(
            "{event} search exhausted after {} days at latitude {}°",
            self.search_limit_days,
            self.solver.location().latitude()
        );
        Err(SolarError::PolarSearchExhausted {
            event,
            days: self.search_limit_days,
        })
    }
}
