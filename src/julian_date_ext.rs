// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Day (`Time<JD>`) and Modified Julian Day (`Time<MJD>`) specific
//! extensions.

use super::calendar::{CalendarDate, GREGORIAN_REFORM_JD};
use super::instant::Time;
use super::scales::{JD, MJD};

impl Time<JD> {
    /// J2000.0 epoch: 2000-01-01T12:00:00 (JD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    /// 1582-10-15T00:00, the first instant of the Gregorian calendar.
    pub const GREGORIAN_REFORM: Self = Self::new(GREGORIAN_REFORM_JD);

    /// Build a Julian Day from calendar fields; see [`crate::date_to_jd`].
    #[inline]
    pub fn from_ymd(year: i32, month: u32, day: f64) -> Self {
        Self::from_calendar(CalendarDate::new(year, month, day))
    }

    /// `true` if this instant falls in the Gregorian calendar.
    #[inline]
    pub fn is_gregorian(&self) -> bool {
        *self >= Self::GREGORIAN_REFORM
    }

    /// Convenience: MJD value corresponding to this JD.
    #[inline]
    pub fn to_mjd(&self) -> Time<MJD> {
        self.to::<MJD>()
    }
}

impl Time<MJD> {
    /// Convenience: JD value corresponding to this MJD.
    #[inline]
    pub fn to_jd(&self) -> Time<JD> {
        self.to::<JD>()
    }
}

impl From<CalendarDate> for Time<JD> {
    fn from(date: CalendarDate) -> Self {
        Self::from_calendar(date)
    }
}

impl From<Time<JD>> for CalendarDate {
    fn from(jd: Time<JD>) -> Self {
        jd.to_calendar()
    }
}
