// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Date (`Time<JD>`) specific extensions.
//!
//! These are the time-scale operations the solar solver is written in:
//! Julian centuries since J2000.0 (the ephemeris argument `t`), the UTC
//! midnight that anchors a calendar day, and minutes-of-day offsets from it.
//!
//! Julian Dates roll over at noon, so the midnight that opens a civil day is
//! always a half-integer JD.  The chronological Julian Day Number of a date is
//! that midnight plus one half.

use chrono::{Datelike, NaiveDate};
use qtty::*;

use super::instant::Time;
use super::scales::JD;

/// Chronological Julian Day Number of 0000-12-31 (chrono's day 0 from CE).
const JDN_AT_CE_EPOCH: f64 = 1_721_425.0;

impl Time<JD> {
    /// J2000.0 epoch: 2000-01-01T12:00:00 (JD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    /// One Julian century expressed in days.
    pub const JULIAN_CENTURY: Days = Days::new(36_525.0);

    /// Minutes in one civil day.
    pub const MINUTES_PER_DAY: f64 = 1_440.0;

    /// Julian centuries since J2000.0, the argument of every ephemeris term.
    #[inline]
    pub fn julian_centuries(&self) -> Centuries {
        Centuries::new(
            ((*self - Self::J2000) / Self::JULIAN_CENTURY)
                .simplify()
                .value(),
        )
    }

    /// Inverse of [`julian_centuries`](Self::julian_centuries).
    #[inline]
    pub fn from_julian_centuries(t: Centuries) -> Self {
        Self::J2000 + Days::new(t.value() * Self::JULIAN_CENTURY.value())
    }

    /// UTC midnight opening the civil day that contains this instant.
    #[inline]
    pub fn start_of_day(&self) -> Self {
        Self::new((self.value() - 0.5).floor() + 0.5)
    }

    /// The instant `minutes` after the UTC midnight of this instant's day.
    ///
    /// `minutes` may be negative or exceed a full day; the result then lands
    /// in the adjacent calendar day.
    #[inline]
    pub fn at_minutes(&self, minutes: f64) -> Self {
        self.start_of_day() + Days::new(minutes / Self::MINUTES_PER_DAY)
    }

    /// Minutes elapsed since the UTC midnight of this instant's day.
    #[inline]
    pub fn minutes_of_day(&self) -> f64 {
        (*self - self.start_of_day()).value() * Self::MINUTES_PER_DAY
    }

    /// UTC midnight of a calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self::new(date.num_days_from_ce() as f64 + JDN_AT_CE_EPOCH - 0.5)
    }

    /// Calendar date (UTC) containing this instant.
    ///
    /// Returns `None` outside chrono's representable range.
    pub fn to_date(&self) -> Option<NaiveDate> {
        let jdn = (self.value() + 0.5).floor();
        if !jdn.is_finite() {
            return None;
        }
        let days = jdn - JDN_AT_CE_EPOCH;
        if days < i32::MIN as f64 || days > i32::MAX as f64 {
            return None;
        }
        NaiveDate::from_num_days_from_ce_opt(days as i32)
    }
}
