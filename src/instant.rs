// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Day-count instant parameterised by its scale.
//!
//! [`Time<S>`] holds one [`Days`] value; the marker `S: TimeScale` says
//! where day zero is. Every scale is a plain offset from the Julian Day, so
//! shifting a `Time<S>` by some days moves along a continuous axis that
//! never sees the ten days dropped by the 1582 calendar reform.

use chrono::NaiveDateTime;
use qtty::Days;
use std::marker::PhantomData;
use std::ops::{Add, Sub};

use crate::calendar::{self, CalendarDate};
use crate::error::Result;
use crate::timestamp;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Marker trait for day-count scales.
///
/// A scale has a display label and maps its own day count to and from the
/// absolute Julian Day.
pub trait TimeScale: Copy + Clone + std::fmt::Debug + PartialEq + PartialOrd + 'static {
    /// Prefix used by the [`Time`] `Display` impl.
    const LABEL: &'static str;

    /// Day count on this scale → absolute JD.
    fn to_jd(value: Days) -> Days;

    /// Absolute JD → day count on this scale.
    fn from_jd(jd: Days) -> Days;
}

/// An instant expressed as a day count on scale `S`.
///
/// Layout-identical to a single `f64`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Time<S: TimeScale> {
    days: Days,
    _scale: PhantomData<S>,
}

impl<S: TimeScale> Time<S> {
    /// Instant `value` days after the scale's day zero.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self::from_days(Days::new(value))
    }

    #[inline]
    const fn from_days(days: Days) -> Self {
        Self {
            days,
            _scale: PhantomData,
        }
    }

    /// Day count on this scale.
    #[inline]
    pub const fn quantity(&self) -> Days {
        self.days
    }

    /// Day count on this scale, as a bare `f64`.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.days.value()
    }

    /// The absolute Julian Day of this instant.
    #[inline]
    pub fn julian_day_value(&self) -> f64 {
        S::to_jd(self.days).value()
    }

    /// Instant at an absolute Julian Day.
    #[inline]
    pub fn from_julian_day(jd: Days) -> Self {
        Self::from_days(S::from_jd(jd))
    }

    /// Re-express this instant on scale `T`.
    #[inline]
    pub fn to<T: TimeScale>(&self) -> Time<T> {
        Time::<T>::from_julian_day(S::to_jd(self.days))
    }

    /// Instant of a historical calendar date: Julian before 1582-10-15,
    /// Gregorian from then on.
    pub fn from_calendar(date: CalendarDate) -> Self {
        let jd = calendar::date_to_jd(date.year, date.month, date.day);
        Self::from_julian_day(Days::new(jd))
    }

    /// Historical calendar date of this instant.
    pub fn to_calendar(&self) -> CalendarDate {
        calendar::jd_to_date(self.julian_day_value())
    }

    /// Instant of a `NaiveDateTime` whose fields are historical calendar
    /// fields.
    pub fn from_datetime(datetime: &NaiveDateTime) -> Self {
        Self::from_julian_day(Days::new(timestamp::datetime_to_jd(datetime)))
    }

    /// `NaiveDateTime` carrying the historical calendar fields of this
    /// instant; see [`timestamp::jd_to_datetime`] for precision and errors.
    pub fn to_datetime(&self) -> Result<NaiveDateTime> {
        timestamp::jd_to_datetime(self.julian_day_value())
    }
}

impl<S: TimeScale> std::fmt::Display for Time<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", S::LABEL, self.days)
    }
}

#[cfg(feature = "serde")]
impl<S: TimeScale> Serialize for Time<S> {
    fn serialize<Ser>(&self, serializer: Ser) -> std::result::Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de, S: TimeScale> Deserialize<'de> for Time<S> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        f64::deserialize(deserializer).map(Self::new)
    }
}

impl<S: TimeScale> Add<Days> for Time<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self::Output {
        Self::from_days(self.days + rhs)
    }
}

impl<S: TimeScale> Sub<Days> for Time<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Days) -> Self::Output {
        Self::from_days(self.days - rhs)
    }
}
