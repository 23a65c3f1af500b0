// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Day-count scale markers and the MJD codec.
//!
//! | Marker | Description | Epoch (JD) |
//! |--------|-------------|------------|
//! | [`JD`] | Julian Day | 0.0 (noon, 1 January 4713 B.C.E., Julian calendar) |
//! | [`MJD`] | Modified Julian Day | 2 400 000.5 (1858-11-17T00:00) |

use super::instant::{Time, TimeScale};
use qtty::Days;

/// Julian Day — the identity scale.
///
/// `to_jd(v) = v`, i.e. the quantity *is* a Julian Day number.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JD;

impl TimeScale for JD {
    const LABEL: &'static str = "Julian Day:";

    #[inline(always)]
    fn to_jd(value: Days) -> Days {
        value
    }

    #[inline(always)]
    fn from_jd(jd: Days) -> Days {
        jd
    }
}

/// Modified Julian Day — JD minus 2 400 000.5.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct MJD;

/// The constant offset between JD and MJD: `JD = MJD + MJD_EPOCH`.
pub const MJD_EPOCH: Days = Days::new(2_400_000.5);

impl TimeScale for MJD {
    const LABEL: &'static str = "MJD";

    #[inline(always)]
    fn to_jd(value: Days) -> Days {
        value + MJD_EPOCH
    }

    #[inline(always)]
    fn from_jd(jd: Days) -> Days {
        jd - MJD_EPOCH
    }
}

impl From<Time<JD>> for Time<MJD> {
    #[inline]
    fn from(t: Time<JD>) -> Self {
        t.to::<MJD>()
    }
}

impl From<Time<MJD>> for Time<JD> {
    #[inline]
    fn from(t: Time<MJD>) -> Self {
        t.to::<JD>()
    }
}

/// Convert a Modified Julian Day to a Julian Day.
///
/// ```
/// assert_eq!(jdtime::mjd_to_jd(0.0), 2_400_000.5);
/// ```
#[inline]
pub fn mjd_to_jd(mjd: f64) -> f64 {
    MJD::to_jd(Days::new(mjd)).value()
}

/// Convert a Julian Day to a Modified Julian Day.
#[inline]
pub fn jd_to_mjd(jd: f64) -> f64 {
    MJD::from_jd(Days::new(jd)).value()
}
