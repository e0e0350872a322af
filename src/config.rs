// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Options controlling how a [`TwilightReport`](crate::TwilightReport) treats
//! days without a crossing.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which events get the polar fallback search when they have no crossing on
/// the requested day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FallbackPolicy {
    /// Only sunrise and sunset are searched for; twilight bands without a
    /// crossing are left as `None`.
    #[default]
    SunriseSunsetOnly,
    /// Every band is searched for.  Twilight bands pick their direction from
    /// whether the Sun stays above or below that band all day.
    AllEvents,
}

/// Report construction options.
///
/// ```rust
/// use sunriseset::{FallbackPolicy, ReportOptions};
///
/// let options = ReportOptions::default()
///     .with_fallback(FallbackPolicy::AllEvents)
///     .with_search_limit(366);
/// assert_eq!(options.search_limit_days, 366);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReportOptions {
    pub fallback: FallbackPolicy,
    /// Maximum number of days the fallback search steps away from the
    /// requested date.
    pub search_limit_days: u32,
}

impl ReportOptions {
    /// The polar day at the poles, refraction included, lasts about 190 days.
    pub const DEFAULT_SEARCH_LIMIT_DAYS: u32 = 200;

    pub const fn new() -> Self {
        Self {
            fallback: FallbackPolicy::SunriseSunsetOnly,
            search_limit_days: Self::DEFAULT_SEARCH_LIMIT_DAYS,
        }
    }

    pub const fn with_fallback(self, fallback: FallbackPolicy) -> Self {
        Self { fallback, ..self }
    }

    pub const fn with_search_limit(self, days: u32) -> Self {
        Self {
            search_limit_days: days,
            ..self
        }
    }
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self::new()
    }
}
