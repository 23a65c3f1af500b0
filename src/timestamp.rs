// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Composite date-time ↔ JD codec and duration ↔ day-count conversion.
//!
//! The fields of a `chrono::NaiveDateTime` are read as *historical*
//! calendar fields: 1582-10-04 is the Julian date immediately followed by
//! the Gregorian 1582-10-15. Chrono's own proleptic-Gregorian arithmetic is
//! never used on them.

use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta};

use crate::calendar::{date_to_jd, jd_to_date};
use crate::error::{Error, Result};
use crate::time_of_day::{days_to_hmsm, TimeOfDay};

const SECONDS_PER_DAY: f64 = 86_400.0;
const MICROS_PER_DAY: f64 = 86_400_000_000.0;
const NANOS_PER_SECOND: i32 = 1_000_000_000;

/// Convert a date-time to a Julian Day.
///
/// Sub-microsecond precision is truncated, and the result carries the
/// precision of an `f64` JD: about 40 µs near the present era.
pub fn datetime_to_jd(datetime: &NaiveDateTime) -> f64 {
    let time = TimeOfDay::from(datetime.time());
    date_to_jd(
        datetime.year(),
        datetime.month(),
        f64::from(datetime.day()) + time.to_fraction(),
    )
}

/// Convert a Julian Day to a date-time.
///
/// The time of day is rounded to the nearest microsecond, but an `f64` JD
/// near the present era only resolves about 40 µs (one ulp of 2.4 × 10⁶
/// days), so a date-time that goes through [`datetime_to_jd`] and back can
/// move by up to about 20 µs. Whole seconds survive exactly only when the
/// day fraction is a short binary fraction (quarter days, for example).
///
/// # Errors
///
/// * [`Error::InvalidCalendarDate`] when the historical date cannot be
///   stored in a `NaiveDate`: Julian leap days of century years that are not
///   Gregorian leap years (1500-02-29, 1300-02-29, …).
/// * [`Error::Domain`] for a non-finite `jd`.
pub fn jd_to_datetime(jd: f64) -> Result<NaiveDateTime> {
    let date = jd_to_date(jd);
    let (day, fraction) = (date.day.trunc(), date.day.fract());
    let time = days_to_hmsm(fraction)?;

    // Rounding reached 24:00; step to the next day on the JD axis so the
    // reform gap is honoured.
    let (date, day, time) = if time.hour >= 24 {
        let next = jd_to_date(date_to_jd(date.year, date.month, day + 1.0));
        (next, next.day.trunc(), TimeOfDay::MIDNIGHT)
    } else {
        (date, day, time)
    };

    let day = day as u32;
    NaiveDate::from_ymd_opt(date.year, date.month, day)
        .and_then(|d| d.and_hms_micro_opt(time.hour, time.minute, time.second, time.microsecond))
        .ok_or_else(|| Error::invalid_calendar_date(date.year, date.month, day))
}

/// Split a duration into whole days, seconds within the day and
/// microseconds within the second.
///
/// Days carry the sign; the other two parts are always non-negative.
/// Microseconds keep chrono's sub-microsecond remainder as a fraction.
fn split_duration(duration: TimeDelta) -> (i64, i64, f64) {
    let mut seconds = duration.num_seconds();
    let mut nanos = duration.subsec_nanos();
    if nanos < 0 {
        seconds -= 1;
        nanos += NANOS_PER_SECOND;
    }
    (
        seconds.div_euclid(86_400),
        seconds.rem_euclid(86_400),
        f64::from(nanos) / 1.0e3,
    )
}

/// Total length of a duration in (fractional) days.
///
/// ```
/// use chrono::TimeDelta;
///
/// let td = TimeDelta::days(4) + TimeDelta::hours(12);
/// assert_eq!(jdtime::duration_to_days(td), 4.5);
/// ```
pub fn duration_to_days(duration: TimeDelta) -> f64 {
    let (days, seconds, micros) = split_duration(duration);
    days as f64 + (seconds as f64 + micros / 1.0e6) / SECONDS_PER_DAY
}

/// A duration of `days` (fractional) days, rounded half-to-even to the
/// nearest microsecond.
pub fn days_to_duration(days: f64) -> TimeDelta {
    TimeDelta::microseconds((days * MICROS_PER_DAY).round_ties_even() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn datetime(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn datetime_to_jd_worked_example() {
        assert_eq!(datetime_to_jd(&datetime(1985, 2, 17, 6, 0, 0)), 2_446_113.75);
    }

    #[test]
    fn jd_to_datetime_worked_example() {
        assert_eq!(
            jd_to_datetime(2_446_113.75).unwrap(),
            datetime(1985, 2, 17, 6, 0, 0)
        );
    }

    #[test]
    fn datetime_fields_are_historical() {
        // chrono would count 11 days between these; they are consecutive.
        let julian = datetime_to_jd(&datetime(1582, 10, 4, 0, 0, 0));
        let gregorian = datetime_to_jd(&datetime(1582, 10, 15, 0, 0, 0));
        assert_eq!(gregorian - julian, 1.0);
    }

    #[test]
    fn jd_to_datetime_rejects_julian_only_leap_day() {
        let jd = date_to_jd(1500, 2, 29.5);
        assert_eq!(
            jd_to_datetime(jd),
            Err(Error::InvalidCalendarDate {
                year: 1500,
                month: 2,
                day: 29
            })
        );
    }

    #[test]
    fn jd_to_datetime_before_julian_period_epoch() {
        assert_eq!(
            jd_to_datetime(-10.25).unwrap(),
            datetime(-4713, 12, 22, 6, 0, 0)
        );
    }

    #[test]
    fn jd_to_datetime_last_day_before_julian_period_epoch() {
        assert_eq!(
            jd_to_datetime(-0.75).unwrap(),
            datetime(-4713, 12, 31, 18, 0, 0)
        );
    }

    #[test]
    fn jd_to_datetime_rejects_nan() {
        assert!(matches!(jd_to_datetime(f64::NAN), Err(Error::Domain { .. })));
    }

    #[test]
    fn end_of_day_rounding_rolls_into_next_day() {
        // JD 0.5 is -4712-01-02T00:00; a hair before it rounds up to midnight.
        assert_eq!(
            jd_to_datetime(0.5 - 1e-12).unwrap(),
            datetime(-4712, 1, 2, 0, 0, 0)
        );
    }

    #[test]
    fn duration_to_days_whole_and_fractional() {
        assert_eq!(duration_to_days(TimeDelta::days(4) + TimeDelta::hours(12)), 4.5);
        assert_eq!(duration_to_days(TimeDelta::zero()), 0.0);
        let one_us = duration_to_days(TimeDelta::microseconds(1));
        assert!((one_us - 1.0 / MICROS_PER_DAY).abs() < 1e-20);
    }

    #[test]
    fn duration_to_days_negative() {
        assert_eq!(duration_to_days(TimeDelta::hours(-6)), -0.25);
        let d = duration_to_days(TimeDelta::milliseconds(-1_500));
        assert!((d + 1.5 / SECONDS_PER_DAY).abs() < 1e-15);
    }

    #[test]
    fn split_duration_normalises_like_a_calendar_duration() {
        assert_eq!(split_duration(TimeDelta::hours(-6)), (-1, 64_800, 0.0));
        assert_eq!(
            split_duration(TimeDelta::milliseconds(-1_500)),
            (-1, 86_398, 500_000.0)
        );
        assert_eq!(
            split_duration(TimeDelta::days(2) + TimeDelta::microseconds(7)),
            (2, 0, 7.0)
        );
    }

    #[test]
    fn days_to_duration_rounds_to_microseconds() {
        assert_eq!(days_to_duration(1.0), TimeDelta::days(1));
        assert_eq!(days_to_duration(-0.25), TimeDelta::hours(-6));
        assert_eq!(days_to_duration(0.0), TimeDelta::zero());
        assert_eq!(
            days_to_duration(2.6 / MICROS_PER_DAY),
            TimeDelta::microseconds(3)
        );
    }
}
