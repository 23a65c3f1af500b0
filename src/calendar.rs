// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Historical calendar date ↔ Julian Day codec.
//!
//! Dates before **1582-10-15** are Julian calendar dates; that day and later
//! ones are Gregorian. The day after 1582-10-04 is therefore 1582-10-15, and
//! the calendar dates in between do not exist (they are not rejected either;
//! callers are responsible for well-formed input).
//!
//! Years use astronomical numbering: year `0` is 1 B.C.E., year `-9` is
//! 10 B.C.E.
//!
//! ## References
//! * Duffett-Smith & Zwart, *Practical Astronomy with your Calculator or
//!   Spreadsheet*, 4th ed. (2011), §4 and §5.
//! * Meeus, *Astronomical Algorithms*, 2nd ed. (1998), ch. 7.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// First day of the Gregorian calendar, 1582-10-15.
pub const GREGORIAN_REFORM: CalendarDate = CalendarDate::new(1582, 10, 15.0);

/// Julian Day at 00:00 on [`GREGORIAN_REFORM`].
pub const GREGORIAN_REFORM_JD: f64 = 2_299_160.5;

/// Last integer day number (of `JD + 0.5`) still counted in the Julian calendar.
const LAST_JULIAN_DAY_NUMBER: f64 = 2_299_160.0;

/// JD of 1 March, year 0, minus the days contributed by the `C`/`D` terms.
const EPOCH_OFFSET: f64 = 1_720_994.5;

/// A calendar date whose day may carry a fraction representing time of day.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: f64,
}

impl CalendarDate {
    #[inline]
    pub const fn new(year: i32, month: u32, day: f64) -> Self {
        Self { year, month, day }
    }

    /// `true` on or after 1582-10-15, i.e. when the fields are Gregorian.
    pub fn is_gregorian(&self) -> bool {
        (self.year, self.month) > (GREGORIAN_REFORM.year, GREGORIAN_REFORM.month)
            || ((self.year, self.month) == (GREGORIAN_REFORM.year, GREGORIAN_REFORM.month)
                && self.day >= GREGORIAN_REFORM.day)
    }

    /// Julian Day of this date; see [`date_to_jd`].
    #[inline]
    pub fn to_jd(&self) -> f64 {
        date_to_jd(self.year, self.month, self.day)
    }

    /// Calendar date of a Julian Day; see [`jd_to_date`].
    #[inline]
    pub fn from_jd(jd: f64) -> Self {
        jd_to_date(jd)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{}", self.year, self.month, self.day)
    }
}

/// Convert a calendar date to a Julian Day.
///
/// `day` may carry a fractional part. Months outside 1–12 and days past the
/// end of the month are not rejected; they count forward linearly.
///
/// ```
/// // 6 a.m., 17 February 1985
/// assert_eq!(jdtime::date_to_jd(1985, 2, 17.25), 2_446_113.75);
/// ```
pub fn date_to_jd(year: i32, month: u32, day: f64) -> f64 {
    // January and February count as months 13 and 14 of the previous year.
    let (year_p, month_p) = if month == 1 || month == 2 {
        (f64::from(year) - 1.0, f64::from(month) + 12.0)
    } else {
        (f64::from(year), f64::from(month))
    };

    let gregorian = CalendarDate::new(year, month, day).is_gregorian();
    crate::trace_log!(
        "{year:04}-{month:02}-{day}: {} calendar",
        if gregorian { "Gregorian" } else { "Julian" }
    );

    let b = if gregorian {
        let a = (year_p / 100.0).trunc();
        2.0 - a + (a / 4.0).trunc()
    } else {
        0.0
    };

    // The -0.75 makes truncation round toward the start of a negative year.
    let c = if year_p < 0.0 {
        (365.25 * year_p - 0.75).trunc()
    } else {
        (365.25 * year_p).trunc()
    };

    let d = (30.6001 * (month_p + 1.0)).trunc();

    b + c + d + day + EPOCH_OFFSET
}

/// Convert a Julian Day to a calendar date.
///
/// Inverse of [`date_to_jd`]: day numbers after the reform yield Gregorian
/// dates, earlier ones Julian dates. The time of day is returned as the
/// fractional part of `day`.
///
/// ```
/// use jdtime::{jd_to_date, CalendarDate};
///
/// assert_eq!(jd_to_date(2_446_113.75), CalendarDate::new(1985, 2, 17.25));
/// ```
pub fn jd_to_date(jd: f64) -> CalendarDate {
    // Floor, not truncation: before the epoch `jd + 0.5` is negative and the
    // day fraction must still count forward from the start of the day.
    let jd = jd + 0.5;
    let i = jd.floor();
    let f = jd - i;

    let b = if i > LAST_JULIAN_DAY_NUMBER {
        let a = ((i - 1_867_216.25) / 36_524.25).trunc();
        i + 1.0 + a - (a / 4.0).trunc()
    } else {
        i
    };

    let c = b + 1524.0;
    let d = ((c - 122.1) / 365.25).floor();
    let e = (365.25 * d).floor();
    let g = ((c - e) / 30.6001).trunc();

    let day = c - e + f - (30.6001 * g).trunc();
    let month = if g < 13.5 { g - 1.0 } else { g - 13.0 };
    let year = if month > 2.5 { d - 4716.0 } else { d - 4715.0 };

    CalendarDate::new(year as i32, month as u32, day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn assert_date_eq(actual: CalendarDate, expected: CalendarDate) {
        assert_eq!((actual.year, actual.month), (expected.year, expected.month));
        assert!(
            (actual.day - expected.day).abs() < 1e-9,
            "{actual} != {expected}"
        );
    }

    #[test]
    fn worked_example_1985() {
        assert_eq!(date_to_jd(1985, 2, 17.25), 2_446_113.75);
        assert_eq!(jd_to_date(2_446_113.75), CalendarDate::new(1985, 2, 17.25));
    }

    #[test]
    fn j2000_epoch() {
        assert_eq!(date_to_jd(2000, 1, 1.5), 2_451_545.0);
        assert_eq!(jd_to_date(2_451_545.0), CalendarDate::new(2000, 1, 1.5));
    }

    #[test]
    fn julian_period_epoch() {
        assert_eq!(date_to_jd(-4712, 1, 1.5), 0.0);
        assert_eq!(jd_to_date(0.0), CalendarDate::new(-4712, 1, 1.5));
    }

    #[test]
    fn dates_before_julian_period_epoch() {
        assert_eq!(date_to_jd(-4713, 12, 31.75), -0.75);
        assert_eq!(jd_to_date(-0.75), CalendarDate::new(-4713, 12, 31.75));
        assert_eq!(jd_to_date(-10.25), CalendarDate::new(-4713, 12, 22.25));

        let jd = date_to_jd(-4800, 1, 1.0);
        assert_eq!(jd, -32_142.5);
        assert_eq!(jd_to_date(jd), CalendarDate::new(-4800, 1, 1.0));
    }

    #[test]
    fn meeus_julian_calendar_examples() {
        assert_eq!(date_to_jd(333, 1, 27.5), 1_842_713.0);
        assert_eq!(date_to_jd(-1000, 7, 12.5), 1_356_001.0);
        assert_eq!(jd_to_date(1_356_001.0), CalendarDate::new(-1000, 7, 12.5));
    }

    #[test]
    fn negative_year_truncation_lands_on_march_first() {
        // -4712 is a Julian leap year: 31 + 29 days after JD -0.5.
        assert_eq!(date_to_jd(-4712, 3, 1.0), 59.5);
    }

    #[test]
    fn reform_boundary_selects_calendar() {
        assert_eq!(date_to_jd(1582, 10, 4.0), 2_299_159.5);
        assert_eq!(date_to_jd(1582, 10, 15.0), GREGORIAN_REFORM_JD);
        assert_eq!(jd_to_date(2_299_159.5), CalendarDate::new(1582, 10, 4.0));
        assert_eq!(jd_to_date(GREGORIAN_REFORM_JD), GREGORIAN_REFORM);
    }

    #[test]
    fn is_gregorian_compares_fields_lexicographically() {
        assert!(!CalendarDate::new(1582, 10, 14.99).is_gregorian());
        assert!(CalendarDate::new(1582, 10, 15.0).is_gregorian());
        assert!(!CalendarDate::new(1582, 9, 30.0).is_gregorian());
        assert!(CalendarDate::new(1582, 11, 1.0).is_gregorian());
        assert!(!CalendarDate::new(1200, 12, 31.0).is_gregorian());
        assert!(CalendarDate::new(1583, 1, 1.0).is_gregorian());
    }

    #[test]
    fn julian_only_leap_day_exists() {
        let jd = date_to_jd(1500, 2, 29.0);
        assert_eq!(jd_to_date(jd), CalendarDate::new(1500, 2, 29.0));
        assert_eq!(jd_to_date(jd + 1.0), CalendarDate::new(1500, 3, 1.0));
    }

    #[test]
    fn gregorian_century_is_not_leap() {
        let jd = date_to_jd(1900, 2, 28.0);
        assert_eq!(jd_to_date(jd + 1.0), CalendarDate::new(1900, 3, 1.0));
    }

    #[test]
    fn fractional_day_roundtrip() {
        assert_date_eq(
            jd_to_date(date_to_jd(1957, 10, 4.81)),
            CalendarDate::new(1957, 10, 4.81),
        );
    }

    #[test]
    fn display_pads_year_and_month() {
        assert_eq!(CalendarDate::new(985, 2, 17.25).to_string(), "0985-02-17.25");
    }

    fn days_in_month(year: i32, month: u32) -> u32 {
        let leap = if year < 1582 {
            year.rem_euclid(4) == 0
        } else {
            (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
        };
        match month {
            2 if leap => 29,
            2 => 28,
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    proptest! {
        #[test]
        fn prop_date_roundtrip(
            year in -10_000i32..4000,
            month in 1u32..=12,
            day_seed in 0u32..31,
            quarters in 0u32..4,
        ) {
            let day = 1 + day_seed % days_in_month(year, month);
            // Skip the ten calendar days that never existed.
            prop_assume!(!(year == 1582 && month == 10 && (5..15).contains(&day)));

            let date = CalendarDate::new(year, month, f64::from(day) + f64::from(quarters) / 4.0);
            let back = jd_to_date(date_to_jd(date.year, date.month, date.day));
            prop_assert_eq!((back.year, back.month), (date.year, date.month));
            prop_assert!((back.day - date.day).abs() < 1e-9);
        }

        #[test]
        fn prop_consecutive_days_are_one_jd_apart(jd in -3_000_000i64..3_000_000) {
            let today = jd_to_date(jd as f64 + 0.5);
            let tomorrow = jd_to_date(jd as f64 + 1.5);
            let jd_today = date_to_jd(today.year, today.month, today.day);
            let jd_tomorrow = date_to_jd(tomorrow.year, tomorrow.month, tomorrow.day);
            prop_assert_eq!(jd_tomorrow - jd_today, 1.0);
        }
    }
}
