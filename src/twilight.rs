// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Twilight-band classification.
//!
//! A point's illumination band follows from the solar altitude, which in
//! turn is fixed by the great-circle separation from the sub-solar point:
//! `altitude = 90° − separation`. The standard civil / nautical /
//! astronomical thresholds at −6° / −12° / −18° split the shadow side
//! into bands; every threshold test is **closed below** (`>=`), so each
//! boundary altitude belongs to the brighter band.
//!
//! [`uniform_twilight`] is the shortcut a tile renderer uses to skip
//! per-pixel work: if all four corners of a tile agree, the whole tile is
//! shaded with one band.

use qtty::{Degrees, Radians};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geo::{GeoPoint, Region, EARTH_RADIUS};

/// Illumination band, from full darkness to full daylight.
///
/// Variants are declared in order of increasing solar altitude. That
/// ordering is relied on internally (altitude decreases monotonically
/// with distance from the sub-solar point, so bands darken monotonically
/// too) but is deliberately not exposed as `Ord`: bands are categories,
/// not numbers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Twilight {
    /// Sun more than 18° below the horizon.
    Night,
    /// Astronomical twilight: altitude in [−18°, −12°).
    Astronomical,
    /// Nautical twilight: altitude in [−12°, −6°).
    Nautical,
    /// Civil twilight: altitude in [−6°, 0°).
    Civil,
    /// Sun at or above the horizon.
    Daylight,
}

impl std::fmt::Display for Twilight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Twilight::Night => "night",
            Twilight::Astronomical => "astronomical twilight",
            Twilight::Nautical => "nautical twilight",
            Twilight::Civil => "civil twilight",
            Twilight::Daylight => "daylight",
        };
        f.write_str(label)
    }
}

/// Band for a point at a given angular separation from the sub-solar point.
///
/// `sun_distance` is the central angle between the query point and the
/// sub-solar point; 0 means the Sun is at the zenith, π means it is at
/// the nadir.
pub fn twilight_from_distance(sun_distance: Radians) -> Twilight {
    let altitude = Degrees::new(90.0) - sun_distance.to::<qtty::Deg>();
    if altitude >= Degrees::new(0.0) {
        Twilight::Daylight
    } else if altitude >= Degrees::new(-6.0) {
        Twilight::Civil
    } else if altitude >= Degrees::new(-12.0) {
        Twilight::Nautical
    } else if altitude >= Degrees::new(-18.0) {
        Twilight::Astronomical
    } else {
        Twilight::Night
    }
}

/// Band for a query point given the current sub-solar point.
///
/// The great-circle distance in kilometres is taken on the
/// [`EARTH_RADIUS`] sphere and converted back to a central angle with the
/// same radius, so the conversion is exact.
pub fn twilight_at(sub_solar: &GeoPoint, point: &GeoPoint) -> Twilight {
    let dist_km = point.distance_to_km(sub_solar);
    let dist = Radians::new(dist_km.value() / EARTH_RADIUS.value());
    twilight_from_distance(dist)
}

/// Band shared by an entire region, if any.
///
/// Applies `classify` to the region's four corners in the fixed order
/// given by [`Region::corners`] and returns the common band, or `None` as
/// soon as a corner disagrees with the first one.
///
/// This is a conservative 4-sample heuristic, and a known limitation: a
/// large region near the terminator can have four agreeing corners while
/// its interior crosses a band boundary, in which case the region is
/// still reported as uniform. The surrounding rendering layer accepts
/// that trade-off for the cheap check; do not replace the sampling with
/// something adaptive.
pub fn uniform_twilight<F>(region: &Region, classify: F) -> Option<Twilight>
where
    F: Fn(&GeoPoint) -> Twilight,
{
    let mut region_twilight = None;
    for corner in region.corners() {
        let band = classify(&corner);
        match region_twilight {
            None => region_twilight = Some(band),
            Some(first) if first != band => return None,
            Some(_) => {}
        }
    }
    region_twilight
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
