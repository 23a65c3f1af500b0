// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Day conversion for historical calendar dates.
//!
//! This crate converts between Julian Day (JD), Modified Julian Day (MJD)
//! and calendar dates, switching from the Julian to the Gregorian calendar
//! on **15 October 1582** (the day after 4 October 1582).
//!
//! # Core types
//!
//! - [`Time<S>`] — generic instant parameterised by a [`TimeScale`] marker.
//! - [`JulianDate`] — type alias for `Time<JD>`.
//! - [`ModifiedJulianDate`] — type alias for `Time<MJD>`.
//! - [`CalendarDate`] — `(year, month, fractional day)`.
//! - [`TimeOfDay`] — `(hour, minute, second, microsecond)`.
//! - [`JdDateTime`] — a `chrono::NaiveDateTime` whose arithmetic runs
//!   through the Julian Day, so differences across the 1582 reform count
//!   elapsed days rather than calendar fields.
//!
//! # Free functions
//!
//! | Function | Conversion |
//! |----------|------------|
//! | [`date_to_jd`] / [`jd_to_date`] | calendar date ↔ JD |
//! | [`mjd_to_jd`] / [`jd_to_mjd`] | MJD ↔ JD |
//! | [`hmsm_to_days`] / [`days_to_hmsm`] | time of day ↔ day fraction |
//! | [`datetime_to_jd`] / [`jd_to_datetime`] | `NaiveDateTime` ↔ JD |
//! | [`duration_to_days`] / [`days_to_duration`] | `TimeDelta` ↔ days |
//!
//! # Cargo features
//!
//! - `serde` — serialisation of the value types.
//! - `log` — `debug`-level records for every returned error and
//!   `trace`-level records of the calendar chosen for each conversion.

#[doc(hidden)]
macro_rules! debug_log {
    ($($args:tt)+) => {
        #[cfg(feature = "log")]
        log::debug!($($args)+);
    };
}

#[doc(hidden)]
macro_rules! trace_log {
    ($($args:tt)+) => {
        #[cfg(feature = "log")]
        log::trace!($($args)+);
    };
}

pub(crate) use debug_log;
pub(crate) use trace_log;

pub mod calendar;
mod datetime;
pub mod error;
pub(crate) mod instant;
mod julian_date_ext;
pub(crate) mod scales;
mod time_of_day;
mod timestamp;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calendar::{date_to_jd, jd_to_date, CalendarDate, GREGORIAN_REFORM, GREGORIAN_REFORM_JD};
pub use datetime::{Difference, JdDateTime, Operand};
pub use error::{Error, Result};
pub use instant::{Time, TimeScale};
pub use scales::{jd_to_mjd, mjd_to_jd, JD, MJD, MJD_EPOCH};
pub use time_of_day::{days_to_hmsm, hmsm_to_days, TimeOfDay};
pub use timestamp::{datetime_to_jd, days_to_duration, duration_to_days, jd_to_datetime};

/// Julian Day — continuous count of days since noon, 1 January 4713 B.C.E.
/// (Julian calendar).
///
/// This is a type alias for [`Time<JD>`].
pub type JulianDate = Time<JD>;

/// Modified Julian Day — `JD − 2 400 000.5`.
///
/// This is a type alias for [`Time<MJD>`].
pub type ModifiedJulianDate = Time<MJD>;
