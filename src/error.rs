// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types for jdtime.

use thiserror::Error;

/// Result type for jdtime operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when converting or combining dates.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A fractional day outside `[0, 1)` was passed to the time-of-day codec.
    #[error("fractional day {days} is outside [0, 1)")]
    Domain { days: f64 },

    /// An arithmetic operation was invoked with an operand it does not accept.
    #[error("unsupported operand for `{op}`: {operand}")]
    UnsupportedOperand {
        op: &'static str,
        operand: &'static str,
    },

    /// Historical calendar fields that cannot be stored in a `chrono` date.
    ///
    /// Julian-only leap days such as 1500-02-29 fall in this category.
    #[error("{year:04}-{month:02}-{day:02} has no chrono::NaiveDate representation")]
    InvalidCalendarDate { year: i32, month: u32, day: u32 },
}

impl Error {
    pub(crate) fn domain(days: f64) -> Self {
        crate::debug_log!("rejecting fractional day {days}: outside [0, 1)");
        Self::Domain { days }
    }

    pub(crate) fn unsupported(op: &'static str, operand: &'static str) -> Self {
        crate::debug_log!("unsupported operand for `{op}`: {operand}");
        Self::UnsupportedOperand { op, operand }
    }

    pub(crate) fn invalid_calendar_date(year: i32, month: u32, day: u32) -> Self {
        crate::debug_log!("{year:04}-{month:02}-{day:02} is not a valid chrono date");
        Self::InvalidCalendarDate { year, month, day }
    }
}
