// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Fractional-day ↔ time-of-day codec.
//!
//! A time of day is either a `(hour, minute, second, microsecond)` tuple or
//! the equivalent fraction of a day in `[0, 1)`.

use chrono::{NaiveTime, Timelike};
use std::fmt;

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const MICROS_PER_SECOND: u32 = 1_000_000;

/// Wall-clock time of day at microsecond resolution.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimeOfDay {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub microsecond: u32,
}

impl TimeOfDay {
    pub const MIDNIGHT: Self = Self::new(0, 0, 0, 0);

    #[inline]
    pub const fn new(hour: u32, minute: u32, second: u32, microsecond: u32) -> Self {
        Self {
            hour,
            minute,
            second,
            microsecond,
        }
    }

    /// Fraction of a day elapsed at this time of day.
    #[inline]
    pub fn to_fraction(&self) -> f64 {
        hmsm_to_days(self.hour, self.minute, self.second, self.microsecond)
    }

    /// Inverse of [`to_fraction`](Self::to_fraction); see [`days_to_hmsm`].
    #[inline]
    pub fn from_fraction(days: f64) -> Result<Self> {
        days_to_hmsm(days)
    }

    /// Push overflowing microseconds, seconds and minutes into the next unit.
    ///
    /// Hours are left unbounded: 24 means the end of the day.
    fn carried(self) -> Self {
        let second = self.second + self.microsecond / MICROS_PER_SECOND;
        let minute = self.minute + second / 60;
        Self {
            hour: self.hour + minute / 60,
            minute: minute % 60,
            second: second % 60,
            microsecond: self.microsecond % MICROS_PER_SECOND,
        }
    }
}

impl From<NaiveTime> for TimeOfDay {
    /// Sub-microsecond precision is truncated. A leap second keeps its
    /// `second == 59` with `microsecond >= 1_000_000`, as chrono stores it.
    fn from(time: NaiveTime) -> Self {
        Self::new(
            time.hour(),
            time.minute(),
            time.second(),
            time.nanosecond() / 1_000,
        )
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}.{:06}",
            self.hour, self.minute, self.second, self.microsecond
        )
    }
}

/// Convert hours, minutes, seconds and microseconds to a fraction of a day.
///
/// Inputs are not range-checked; out-of-range fields simply contribute
/// proportionally (`hmsm_to_days(36, 0, 0, 0) == 1.5`).
///
/// ```
/// assert_eq!(jdtime::hmsm_to_days(6, 0, 0, 0), 0.25);
/// ```
pub fn hmsm_to_days(hour: u32, minute: u32, second: u32, microsecond: u32) -> f64 {
    let days = f64::from(second) + f64::from(microsecond) / 1.0e6;
    let days = f64::from(minute) + days / 60.0;
    let days = f64::from(hour) + days / 60.0;
    days / 24.0
}

/// Convert a fraction of a day to hours, minutes, seconds and microseconds.
///
/// Each unit is extracted as the integer part of the remainder scaled to
/// that unit; whatever is left below one second is rounded half-to-even to
/// the nearest microsecond. A remainder that rounds up to a whole second is
/// carried, so an input within half a microsecond of `1.0` yields
/// `24:00:00.000000`.
///
/// # Errors
///
/// [`Error::Domain`] if `days` is not in `[0, 1)`.
///
/// ```
/// use jdtime::{days_to_hmsm, TimeOfDay};
///
/// assert_eq!(days_to_hmsm(0.1).unwrap(), TimeOfDay::new(2, 24, 0, 0));
/// assert!(days_to_hmsm(1.0).is_err());
/// ```
pub fn days_to_hmsm(days: f64) -> Result<TimeOfDay> {
    if !(0.0..1.0).contains(&days) {
        return Err(Error::domain(days));
    }

    let hours = days * 24.0;
    let (hour, hours) = (hours.trunc(), hours.fract());

    let minutes = hours * 60.0;
    let (minute, minutes) = (minutes.trunc(), minutes.fract());

    let seconds = minutes * 60.0;
    let (second, seconds) = (seconds.trunc(), seconds.fract());

    let microsecond = (seconds * 1.0e6).round_ties_even();

    Ok(TimeOfDay::new(hour as u32, minute as u32, second as u32, microsecond as u32).carried())
}
