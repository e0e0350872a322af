// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Two-pass solver for the UTC time of a horizon crossing and of solar noon.
//!
//! The Sun's declination and the equation of time both drift during a day,
//! so the event time is found by evaluating them at a first estimate and
//! then once more at the refined time:
//!
//! 1. evaluate at local solar noon of the requested day;
//! 2. re-evaluate at the pass-1 event time.
//!
//! All times are minutes after the UTC midnight of the requested day and
//! may fall outside `[0, 1440)` when the event belongs to an adjacent UTC
//! date (far east or west longitudes, high latitudes).

use qtty::{Centuries, Days};

use crate::ephemeris;
use crate::hour_angle::{grazing_hour_angle, hour_angle, NoCrossing};
use crate::horizon::SolarEvent;
use crate::location::Location;
use crate::JulianDate;

/// Minutes after midnight of solar noon on the Greenwich meridian, before
/// the equation of time.
const MEAN_NOON_MINUTES: f64 = 720.0;

/// Minutes of time per degree of Earth rotation.
const MINUTES_PER_DEGREE: f64 = 4.0;

/// Result of solving one event on one day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventOutcome {
    /// The crossing happens at this instant.
    Found(JulianDate),
    /// The Sun never crosses the horizon on that day.
    NotFound(NoCrossing),
}

impl EventOutcome {
    #[inline]
    pub fn instant(self) -> Option<JulianDate> {
        match self {
            EventOutcome::Found(instant) => Some(instant),
            EventOutcome::NotFound(_) => None,
        }
    }

    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, EventOutcome::Found(_))
    }
}

/// Solves rise, set and noon times for a fixed observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventSolver {
    location: Location,
}

impl EventSolver {
    pub const fn new(location: Location) -> Self {
        Self { location }
    }

    #[inline]
    pub const fn location(&self) -> Location {
        self.location
    }

    /// Solar noon of the day containing `day`, in minutes after its UTC
    /// midnight.
    pub fn solar_noon_minutes(&self, day: JulianDate) -> f64 {
        let midnight = day.start_of_day();
        let longitude = self.location.longitude();
        let estimate = self.noon_at(midnight + Days::new(0.5 - longitude / 360.0));
        self.noon_at(midnight.at_minutes(estimate))
    }

    /// Solar noon of the day containing `day`.
    pub fn solar_noon(&self, day: JulianDate) -> JulianDate {
        day.at_minutes(self.solar_noon_minutes(day))
    }

    /// Time of `event` on the UTC day containing `day`.
    pub fn solve(&self, day: JulianDate, event: SolarEvent) -> EventOutcome {
        match self.event_minutes(day, event) {
            Ok(minutes) => EventOutcome::Found(day.at_minutes(minutes)),
            Err(no_crossing) => EventOutcome::NotFound(no_crossing),
        }
    }

    /// Time of `event` in minutes after the UTC midnight of `day`.
    pub fn event_minutes(&self, day: JulianDate, event: SolarEvent) -> Result<f64, NoCrossing> {
        let midnight = day.start_of_day();
        let noon = self.solar_noon_minutes(midnight);
        let first = self.crossing_at(midnight.at_minutes(noon), event)?;
        self.crossing_at(midnight.at_minutes(first), event)
    }

    /// Crossing on a day the Sun only grazes the horizon.
    ///
    /// Same two passes as [`solve`](Self::solve), with the hour angle clamped
    /// to noon or midnight instead of failing.
    pub fn grazing(&self, day: JulianDate, event: SolarEvent) -> JulianDate {
        let midnight = day.start_of_day();
        let noon = self.solar_noon_minutes(midnight);
        let first = self.grazing_at(midnight.at_minutes(noon), event);
        midnight.at_minutes(self.grazing_at(midnight.at_minutes(first), event))
    }

    /// `720 − 4·λ − EoT`, with the equation of time taken at `at`.
    fn noon_at(&self, at: JulianDate) -> f64 {
        MEAN_NOON_MINUTES
            - MINUTES_PER_DEGREE * self.location.longitude()
            - ephemeris::equation_of_time(at.julian_centuries())
    }

    /// One refinement pass: crossing time using the Sun's state at `at`.
    fn crossing_at(&self, at: JulianDate, event: SolarEvent) -> Result<f64, NoCrossing> {
        let t = at.julian_centuries();
        let h = hour_angle(
            event.crossing,
            ephemeris::declination(t),
            self.location.latitude(),
            event.horizon,
        )?;
        Ok(self.minutes_at_hour_angle(h, t))
    }

    fn grazing_at(&self, at: JulianDate, event: SolarEvent) -> f64 {
        let t = at.julian_centuries();
        let h = grazing_hour_angle(
            event.crossing,
            ephemeris::declination(t),
            self.location.latitude(),
            event.horizon,
        );
        self.minutes_at_hour_angle(h, t)
    }

    fn minutes_at_hour_angle(&self, h: f64, t: Centuries) -> f64 {
        let delta = -self.location.longitude() - h.to_degrees();
        MEAN_NOON_MINUTES + MINUTES_PER_DEGREE * delta - ephemeris::equation_of_time(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::horizon::{Crossing, Horizon};
    use approx::assert_abs_diff_eq;
    use chrono::NaiveDate;

    fn day(year: i32, month: u32, d: u32) -> JulianDate {
        JulianDate::from_date(NaiveDate::from_ymd_opt(year, month, d).unwrap())
    }

    fn solver(latitude: f64, longitude: f64) -> EventSolver {
        EventSolver::new(Location::new(latitude, longitude).unwrap())
    }

    #[test]
    fn gulf_of_guinea_equinox() {
        let solver = solver(0.0, 0.0);
        let day = day(2020, 3, 20);

        let rise = solver.event_minutes(day, SolarEvent::SUNRISE).unwrap();
        let set = solver.event_minutes(day, SolarEvent::SUNSET).unwrap();
        let noon = solver.solar_noon_minutes(day);

        assert_abs_diff_eq!(rise, 6.0 * 60.0 + 4.0, epsilon = 2.0);
        assert_abs_diff_eq!(set, 18.0 * 60.0 + 10.5, epsilon = 2.0);
        assert_abs_diff_eq!(noon, 12.0 * 60.0 + 7.3, epsilon = 0.5);

        // 12 h plus twice the refraction allowance of 0.833°
        assert_abs_diff_eq!(set - rise, 720.0 + 2.0 * 4.0 * 0.833, epsilon = 2.0);
        assert_abs_diff_eq!(noon - rise, set - noon, epsilon = 1.0);
    }

    #[test]
    fn longitude_shifts_noon_four_minutes_per_degree() {
        let day = day(2021, 5, 1);
        let greenwich = solver(40.0, 0.0).solar_noon_minutes(day);
        let east = solver(40.0, 15.0).solar_noon_minutes(day);
        let west = solver(40.0, -15.0).solar_noon_minutes(day);
        assert_abs_diff_eq!(greenwich - east, 60.0, epsilon = 0.1);
        assert_abs_diff_eq!(west - greenwich, 60.0, epsilon = 0.1);
    }

    #[test]
    fn far_east_sunrise_rolls_back_into_previous_utc_date() {
        let solver = solver(-36.99, 174.49);
        let day = day(2021, 6, 21);
        let noon = solver.solar_noon(day);
        // 174.49°E is almost 12 h ahead of Greenwich: noon is just after 00:20 UTC
        assert_abs_diff_eq!(solver.solar_noon_minutes(day), 23.8, epsilon = 0.5);
        assert_eq!(noon.start_of_day(), day);

        let rise = solver.solve(day, SolarEvent::SUNRISE).instant().unwrap();
        assert!(rise < day, "sunrise falls on the previous UTC date");
    }

    #[test]
    fn twilight_bands_nest_around_the_day() {
        let solver = solver(48.85, 2.35);
        let day = day(2022, 10, 5);
        let minutes = |horizon: Horizon, crossing: Crossing| {
            solver
                .event_minutes(day, SolarEvent::new(horizon, crossing))
                .unwrap()
        };
        let rises: Vec<f64> = [
            Horizon::Astronomical,
            Horizon::Nautical,
            Horizon::Civil,
            Horizon::Official,
        ]
        .into_iter()
        .map(|h| minutes(h, Crossing::Rise))
        .collect();
        let sets: Vec<f64> = [
            Horizon::Official,
            Horizon::Civil,
            Horizon::Nautical,
            Horizon::Astronomical,
        ]
        .into_iter()
        .map(|h| minutes(h, Crossing::Set))
        .collect();
        let noon = solver.solar_noon_minutes(day);

        assert!(rises.windows(2).all(|w| w[0] < w[1]));
        assert!(rises[3] < noon && noon < sets[0]);
        assert!(sets.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn midnight_sun_is_not_found() {
        let solver = solver(78.0, 15.0);
        let outcome = solver.solve(day(2021, 6, 25), SolarEvent::SUNRISE);
        assert_eq!(outcome, EventOutcome::NotFound(NoCrossing::AlwaysAbove));
        assert!(!outcome.is_found());
        assert_eq!(outcome.instant(), None);

        let winter = solver.solve(day(2021, 12, 21), SolarEvent::SUNSET);
        assert_eq!(winter, EventOutcome::NotFound(NoCrossing::AlwaysBelow));
    }

    #[test]
    fn solving_is_deterministic() {
        let solver = solver(-33.87, 151.21);
        let day = day(2023, 1, 9);
        let a = solver.solve(day, SolarEvent::SUNSET);
        let b = solver.solve(day, SolarEvent::SUNSET);
        assert_eq!(
            a.instant().unwrap().value().to_bits(),
            b.instant().unwrap().value().to_bits()
        );
    }

    #[test]
    fn grazing_sunrise_near_the_pole() {
        let solver = solver(89.99, 0.0);
        // the first day after the spring flip still has the Sun below all day
        let day = day(2021, 3, 17);
        assert_eq!(
            solver.solve(day, SolarEvent::SUNRISE),
            EventOutcome::NotFound(NoCrossing::AlwaysBelow)
        );

        let rise = solver.grazing(day, SolarEvent::SUNRISE);
        assert_eq!(rise.start_of_day(), day);
        // clamped to local noon
        assert_abs_diff_eq!(
            rise.minutes_of_day(),
            solver.solar_noon_minutes(day),
            epsilon = 1.0
        );
    }

    #[test]
    fn time_of_day_within_the_requested_date_is_ignored() {
        let solver = solver(35.0, -100.0);
        let midnight = day(2024, 2, 29);
        assert_eq!(
            solver.solve(midnight, SolarEvent::SUNRISE),
            solver.solve(midnight + Days::new(0.75), SolarEvent::SUNRISE)
        );
    }
}
