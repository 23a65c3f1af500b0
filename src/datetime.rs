// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! JD-mediated date-time arithmetic.
//!
//! [`JdDateTime`] wraps a `chrono::NaiveDateTime` and performs every
//! arithmetic operation on the Julian Day axis:
//!
//! ```text
//! lhs → JD ─┐
//!           ├─ add / subtract in days ─→ JD → date-time (or duration)
//! rhs → JD ─┘
//! ```
//!
//! Field arithmetic would count the ten days that were dropped in October
//! 1582, and chrono's proleptic Gregorian rules disagree with the Julian
//! calendar before it. Going through the JD avoids both.
//!
//! Two interfaces are provided:
//!
//! * statically typed operators for the meaningful combinations
//!   (`JdDateTime ± TimeDelta`, `TimeDelta + JdDateTime`,
//!   `JdDateTime − JdDateTime`, and differences against a plain
//!   `NaiveDateTime` in either order);
//! * [`JdDateTime::try_add`], [`JdDateTime::try_sub`] and
//!   [`JdDateTime::try_rsub`], which accept an [`Operand`] chosen at run
//!   time and report [`Error::UnsupportedOperand`] for meaningless
//!   combinations such as adding two date-times.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use std::fmt;
use std::ops::{Add, Sub};

use crate::error::{Error, Result};
use crate::timestamp::{datetime_to_jd, days_to_duration, duration_to_days, jd_to_datetime};
use crate::{JulianDate, ModifiedJulianDate};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Right-hand (or, for [`JdDateTime::try_rsub`], left-hand) operand of a
/// JD-mediated operation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operand {
    /// An elapsed time.
    Duration(TimeDelta),
    /// An absolute date-time, with or without JD arithmetic of its own.
    DateTime(NaiveDateTime),
}

impl Operand {
    fn kind(&self) -> &'static str {
        match self {
            Self::Duration(_) => "duration",
            Self::DateTime(_) => "date-time",
        }
    }
}

impl From<TimeDelta> for Operand {
    fn from(duration: TimeDelta) -> Self {
        Self::Duration(duration)
    }
}

impl From<NaiveDateTime> for Operand {
    fn from(datetime: NaiveDateTime) -> Self {
        Self::DateTime(datetime)
    }
}

impl From<JdDateTime> for Operand {
    fn from(datetime: JdDateTime) -> Self {
        Self::DateTime(datetime.0)
    }
}

/// Result of [`JdDateTime::try_sub`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Difference {
    /// A date-time minus a duration.
    DateTime(JdDateTime),
    /// A date-time minus another date-time.
    Duration(TimeDelta),
}

/// A calendar date-time whose arithmetic runs through the Julian Day.
///
/// The wrapped fields are historical calendar fields: Julian before
/// 1582-10-15, Gregorian from then on.
///
/// Every operation goes through an `f64` Julian Day, which resolves about
/// 40 µs near the present era. Results are exact for times on short binary
/// fractions of a day; otherwise the microseconds of a result can drift by
/// up to about 20 µs, even for `t + TimeDelta::zero()`.
///
/// ```
/// use chrono::TimeDelta;
/// use jdtime::JdDateTime;
///
/// let last_julian = JdDateTime::from_ymd_hms_micro(1582, 10, 4, 12, 0, 0, 0).unwrap();
/// let first_gregorian = JdDateTime::from_ymd_hms_micro(1582, 10, 15, 12, 0, 0, 0).unwrap();
///
/// assert_eq!(first_gregorian - last_julian, TimeDelta::days(1));
/// assert_eq!((last_julian + TimeDelta::days(1)).unwrap(), first_gregorian);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct JdDateTime(NaiveDateTime);

impl JdDateTime {
    #[inline]
    pub const fn new(datetime: NaiveDateTime) -> Self {
        Self(datetime)
    }

    /// Build from calendar fields.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCalendarDate`] if chrono cannot hold the fields.
    pub fn from_ymd_hms_micro(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        microsecond: u32,
    ) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_micro_opt(hour, minute, second, microsecond))
            .map(Self)
            .ok_or_else(|| Error::invalid_calendar_date(year, month, day))
    }

    /// Date-time at a Julian Day; see [`jd_to_datetime`] for precision.
    pub fn from_jd(jd: JulianDate) -> Result<Self> {
        jd_to_datetime(jd.value()).map(Self)
    }

    /// Date-time at a Modified Julian Day; see [`jd_to_datetime`] for
    /// precision.
    pub fn from_mjd(mjd: ModifiedJulianDate) -> Result<Self> {
        Self::from_jd(mjd.to_jd())
    }

    /// The wrapped `NaiveDateTime`.
    #[inline]
    pub const fn datetime(&self) -> NaiveDateTime {
        self.0
    }

    /// Julian Day of this date-time.
    #[inline]
    pub fn to_jd(&self) -> JulianDate {
        JulianDate::new(datetime_to_jd(&self.0))
    }

    /// Modified Julian Day of this date-time.
    #[inline]
    pub fn to_mjd(&self) -> ModifiedJulianDate {
        self.to_jd().to_mjd()
    }

    /// `self + duration` on the JD axis.
    pub fn add_duration(&self, duration: TimeDelta) -> Result<Self> {
        Self::from_jd(self.to_jd() + qtty::Days::new(duration_to_days(duration)))
    }

    /// `self - duration` on the JD axis.
    pub fn sub_duration(&self, duration: TimeDelta) -> Result<Self> {
        Self::from_jd(self.to_jd() - qtty::Days::new(duration_to_days(duration)))
    }

    /// Elapsed time from `other` to `self`, measured on the JD axis.
    pub fn signed_duration_since(&self, other: &NaiveDateTime) -> TimeDelta {
        days_to_duration(datetime_to_jd(&self.0) - datetime_to_jd(other))
    }

    /// `self + rhs`. Only a duration can be added.
    pub fn try_add(&self, rhs: impl Into<Operand>) -> Result<Self> {
        match rhs.into() {
            Operand::Duration(duration) => self.add_duration(duration),
            other => Err(Error::unsupported("+", other.kind())),
        }
    }

    /// `self - rhs`: a date-time for a duration, a duration for a date-time.
    pub fn try_sub(&self, rhs: impl Into<Operand>) -> Result<Difference> {
        match rhs.into() {
            Operand::Duration(duration) => self.sub_duration(duration).map(Difference::DateTime),
            Operand::DateTime(other) => Ok(Difference::Duration(self.signed_duration_since(&other))),
        }
    }

    /// `lhs - self`. Subtracting a date-time from a duration is meaningless.
    pub fn try_rsub(&self, lhs: impl Into<Operand>) -> Result<TimeDelta> {
        match lhs.into() {
            Operand::DateTime(other) => Ok(JdDateTime(other).signed_duration_since(&self.0)),
            other => Err(Error::unsupported("-", other.kind())),
        }
    }
}

impl From<NaiveDateTime> for JdDateTime {
    fn from(datetime: NaiveDateTime) -> Self {
        Self(datetime)
    }
}

impl From<JdDateTime> for NaiveDateTime {
    fn from(datetime: JdDateTime) -> Self {
        datetime.0
    }
}

impl fmt::Display for JdDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// ── Operators ─────────────────────────────────────────────────────────────

impl Add<TimeDelta> for JdDateTime {
    type Output = Result<JdDateTime>;
    fn add(self, rhs: TimeDelta) -> Self::Output {
        self.add_duration(rhs)
    }
}

impl Add<JdDateTime> for TimeDelta {
    type Output = Result<JdDateTime>;
    fn add(self, rhs: JdDateTime) -> Self::Output {
        rhs.add_duration(self)
    }
}

impl Sub<TimeDelta> for JdDateTime {
    type Output = Result<JdDateTime>;
    fn sub(self, rhs: TimeDelta) -> Self::Output {
        self.sub_duration(rhs)
    }
}

impl Sub for JdDateTime {
    type Output = TimeDelta;
    fn sub(self, rhs: Self) -> Self::Output {
        self.signed_duration_since(&rhs.0)
    }
}

impl Sub<NaiveDateTime> for JdDateTime {
    type Output = TimeDelta;
    fn sub(self, rhs: NaiveDateTime) -> Self::Output {
        self.signed_duration_since(&rhs)
    }
}

impl Sub<JdDateTime> for NaiveDateTime {
    type Output = TimeDelta;
    fn sub(self, rhs: JdDateTime) -> Self::Output {
        JdDateTime(self).signed_duration_since(&rhs.0)
    }
}
