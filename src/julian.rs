// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Day Number conversion.
//!
//! [`JulianDate`] is a thin newtype over a [`Days`] quantity holding a
//! UT-based Julian Day Number — the continuous day count that the solar
//! ephemeris in [`crate::solar`] uses as its time axis.
//!
//! The low-precision formula this crate implements takes the civil (UTC)
//! timestamp directly; no ΔT / Terrestrial-Time correction is applied.
//! That choice is part of the reference algorithm, not an oversight: the
//! ~1 minute ΔT offset is far below the arc-minute-class accuracy of the
//! ephemeris itself.

use chrono::{DateTime, Utc};
use qtty::{Centuries, Day, Days, Second, Seconds};
use std::ops::{Add, AddAssign, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// JD of the Unix epoch (1970-01-01T00:00:00Z).
const UNIX_EPOCH_JD: Days = Days::new(2_440_587.5);

/// A UT-based Julian Day Number.
///
/// The struct is `Copy` and zero-cost: it is layout-identical to a single
/// `f64` day count.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JulianDate(Days);

impl JulianDate {
    /// J2000.0 epoch: 2000-01-01T12:00:00 UTC (JD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    /// One Julian century expressed in days.
    pub const JULIAN_CENTURY: Days = Days::new(36_525.0);

    // ── constructors ──────────────────────────────────────────────────

    /// Create from a raw Julian Day Number.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(Days::new(value))
    }

    /// Create from a [`Days`] quantity.
    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self(days)
    }

    /// Julian Day Number of a UTC timestamp.
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        let seconds = Seconds::new(datetime.timestamp() as f64);
        let nanos = Seconds::new(datetime.timestamp_subsec_nanos() as f64 / 1e9);
        Self(UNIX_EPOCH_JD + (seconds + nanos).to::<Day>())
    }

    /// Julian Day Number of the current wall-clock instant.
    #[inline]
    pub fn now() -> Self {
        Self::from_utc(Utc::now())
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// The underlying quantity in days.
    #[inline]
    pub const fn quantity(&self) -> Days {
        self.0
    }

    /// The underlying scalar Julian Day Number.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.0.value()
    }

    /// Julian centuries since J2000.0 — `T` in ephemeris polynomials.
    #[inline]
    pub fn julian_centuries(&self) -> Centuries {
        Centuries::new((*self - Self::J2000).value() / Self::JULIAN_CENTURY.value())
    }

    /// Convert back to a `chrono::DateTime<Utc>`.
    ///
    /// Returns `None` if the value falls outside chrono's representable range.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        let seconds_since_epoch = (self.0 - UNIX_EPOCH_JD).to::<Second>().value();
        let secs = seconds_since_epoch.floor() as i64;
        let nanos = ((seconds_since_epoch - secs as f64) * 1e9) as u32;
        DateTime::<Utc>::from_timestamp(secs, nanos)
    }
}

// ── Display ───────────────────────────────────────────────────────────────

impl std::fmt::Display for JulianDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "JD {}", self.0)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for JulianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for JulianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Ok(Self::new(v))
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl Add<Days> for JulianDate {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self::Output {
        Self(self.0 + rhs)
    }
}

impl AddAssign<Days> for JulianDate {
    #[inline]
    fn add_assign(&mut self, rhs: Days) {
        self.0 += rhs;
    }
}

impl Sub<Days> for JulianDate {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Days) -> Self::Output {
        Self(self.0 - rhs)
    }
}

impl SubAssign<Days> for JulianDate {
    #[inline]
    fn sub_assign(&mut self, rhs: Days) {
        self.0 -= rhs;
    }
}

impl Sub for JulianDate {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.0 - rhs.0
    }
}

impl From<Days> for JulianDate {
    #[inline]
    fn from(days: Days) -> Self {
        Self(days)
    }
}

impl From<JulianDate> for Days {
    #[inline]
    fn from(jd: JulianDate) -> Self {
        jd.0
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
