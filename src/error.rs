// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

use thiserror::Error;

use crate::horizon::SolarEvent;

pub type SolarResult<T> = Result<T, SolarError>;

/// Failures surfaced by report construction.
///
/// A day on which the sun simply never crosses a horizon is *not* an error:
/// that is [`EventOutcome::NotFound`](crate::EventOutcome::NotFound) and is
/// resolved by the polar fallback search.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SolarError {
    /// Latitude outside `[-90, 90]` degrees, or not a number.
    #[error("latitude {0}° out of range [-90, 90]")]
    LatitudeOutOfRange(f64),

    /// Longitude outside `[-180, 180]` degrees, or not a number.
    #[error("longitude {0}° out of range [-180, 180]")]
    LongitudeOutOfRange(f64),

    /// The bounded day-by-day search found no crossing.
    #[error("no {event} found within {days} days of the requested date")]
    PolarSearchExhausted { event: SolarEvent, days: u32 },

    /// A calendar conversion left chrono's representable range.
    #[error("date outside the representable calendar range")]
    DateOutOfRange,
}
