// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Sub-solar point and twilight-band classification.
//!
//! This crate is the numerical core behind a day/night terminator
//! overlay: it maps an instant in time to the point on Earth directly
//! beneath the Sun, and classifies the illumination of any location or
//! rectangular region relative to that point.
//!
//! # Core types
//!
//! - [`GeoPoint`] — latitude/longitude in typed [`qtty::Degrees`].
//! - [`Region`] — axis-aligned lat/lon box with a fixed corner order.
//! - [`Twilight`] — the five illumination bands.
//! - [`JulianDate`] — UT-based Julian Day Number, the ephemeris time axis.
//!
//! # Operations
//!
//! | Function | Purpose |
//! |----------|---------|
//! | [`subsolar_point`] | UTC instant → sub-solar [`GeoPoint`] |
//! | [`subsolar_point_now`] | wall-clock convenience form |
//! | [`twilight_from_distance`] | central angle from the Sun → [`Twilight`] |
//! | [`twilight_at`] | sub-solar point + query point → [`Twilight`] |
//! | [`uniform_twilight`] | four-corner region uniformity shortcut |
//!
//! Everything is a pure function of its inputs (the `_now` form reads the
//! wall clock); calls are safe to run concurrently across map tiles with
//! no coordination.
//!
//! # Quick example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use subsolar::{subsolar_point, twilight_at, GeoPoint, Twilight};
//!
//! let noon = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
//! let sun = subsolar_point(noon);
//!
//! // The sub-solar point itself is always in daylight.
//! assert_eq!(twilight_at(&sun, &sun), Twilight::Daylight);
//!
//! // Midwinter noon in the far north is not.
//! let svalbard = GeoPoint::from_degrees(78.22, 15.65);
//! assert_ne!(twilight_at(&sun, &svalbard), Twilight::Daylight);
//! ```
//!
//! # Accuracy
//!
//! The ephemeris is the classic low-precision short series (arc-minute
//! class near the current epoch); distances use a spherical Earth of
//! radius [`geo::EARTH_RADIUS`]. See the module docs of [`solar`] for the
//! caveats kept deliberately intact from the reference formulation.

pub mod geo;
pub mod julian;
pub mod solar;
pub mod twilight;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use geo::{GeoPoint, InvalidRegion, Region};
pub use julian::JulianDate;
pub use solar::{subsolar_point, subsolar_point_at_jd, subsolar_point_now};
pub use twilight::{twilight_at, twilight_from_distance, uniform_twilight, Twilight};
