// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Geographic primitives: points, regions, great-circle distance.
//!
//! All angles are strongly typed [`Degrees`] / [`Radians`] quantities.
//! Distances are computed on a sphere of radius [`EARTH_RADIUS`]; the same
//! constant converts kilometres back to central-angle radians in the
//! twilight classifier, so the pair stays self-consistent.

use qtty::{Degrees, Kilometers, Radians};
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Spherical Earth radius used throughout the crate.
///
/// 6378.0 km is the equatorial value the reference terminator algorithm
/// uses for its angular-distance conversion. No oblateness correction is
/// applied anywhere in this crate.
pub const EARTH_RADIUS: Kilometers = Kilometers::new(6378.0);

/// A geographic point in signed degrees.
///
/// Latitude is expected in `[-90°, +90°]` and longitude in `[-180°, +180°]`.
/// Construction does not validate; callers holding angles outside those
/// ranges can fold them with [`GeoPoint::normalized`].
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoPoint {
    lat: Degrees,
    lon: Degrees,
}

impl GeoPoint {
    /// Create a point from typed latitude/longitude.
    #[inline]
    pub const fn new(lat: Degrees, lon: Degrees) -> Self {
        Self { lat, lon }
    }

    /// Create a point from raw degree values.
    #[inline]
    pub const fn from_degrees(lat: f64, lon: f64) -> Self {
        Self::new(Degrees::new(lat), Degrees::new(lon))
    }

    /// Latitude, positive north.
    #[inline]
    pub const fn lat(&self) -> Degrees {
        self.lat
    }

    /// Longitude, positive east.
    #[inline]
    pub const fn lon(&self) -> Degrees {
        self.lon
    }

    /// Fold arbitrary angles into the conventional ranges:
    /// latitude into `[-90°, +90°]` (quarter fold), longitude into
    /// `(-180°, +180°]`.
    #[inline]
    pub fn normalized(&self) -> Self {
        Self {
            lat: self.lat.wrap_quarter_fold(),
            lon: self.lon.wrap_signed(),
        }
    }

    /// Central angle between two points (haversine form).
    ///
    /// Numerically stable for both nearby and antipodal pairs.
    pub fn angle_to(&self, other: &GeoPoint) -> Radians {
        let half_dlat = (other.lat - self.lat) * 0.5;
        let half_dlon = (other.lon - self.lon) * 0.5;
        let a = half_dlat.sin() * half_dlat.sin()
            + self.lat.cos() * other.lat.cos() * half_dlon.sin() * half_dlon.sin();
        // sin² + cos² can land one ulp above 1 for near-antipodal pairs,
        // which would make the second sqrt NaN.
        let a = a.min(1.0);
        Radians::new(2.0 * a.sqrt().atan2((1.0 - a).sqrt()))
    }

    /// Great-circle distance on the [`EARTH_RADIUS`] sphere.
    #[inline]
    pub fn distance_to_km(&self, other: &GeoPoint) -> Kilometers {
        EARTH_RADIUS * self.angle_to(other).value()
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}

/// A malformed axis-aligned region.
#[derive(Debug, Error, PartialEq)]
pub enum InvalidRegion {
    /// Minimum latitude exceeds maximum latitude.
    #[error("min latitude {min} exceeds max latitude {max}")]
    LatitudeOrder { min: Degrees, max: Degrees },

    /// Minimum longitude exceeds maximum longitude.
    #[error("min longitude {min} exceeds max longitude {max}")]
    LongitudeOrder { min: Degrees, max: Degrees },
}

/// An axis-aligned lat/lon box.
///
/// Invariant: `min.lat ≤ max.lat` and `min.lon ≤ max.lon`, enforced at
/// construction. A box spanning the antimeridian must be split by the
/// caller before use.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Region {
    min: GeoPoint,
    max: GeoPoint,
}

impl Region {
    /// Build a region, rejecting inverted bounds.
    pub fn new(min: GeoPoint, max: GeoPoint) -> Result<Self, InvalidRegion> {
        if min.lat() > max.lat() {
            return Err(InvalidRegion::LatitudeOrder {
                min: min.lat(),
                max: max.lat(),
            });
        }
        if min.lon() > max.lon() {
            return Err(InvalidRegion::LongitudeOrder {
                min: min.lon(),
                max: max.lon(),
            });
        }
        Ok(Self { min, max })
    }

    /// South-west corner.
    #[inline]
    pub const fn min(&self) -> GeoPoint {
        self.min
    }

    /// North-east corner.
    #[inline]
    pub const fn max(&self) -> GeoPoint {
        self.max
    }

    /// The four corners in the fixed sampling order:
    /// (min,min), (max,min), (max,max), (min,max).
    ///
    /// The order is part of the contract: region evaluation short-circuits
    /// on the first corner that disagrees with the first one.
    pub fn corners(&self) -> [GeoPoint; 4] {
        [
            GeoPoint::new(self.min.lat(), self.min.lon()),
            GeoPoint::new(self.max.lat(), self.min.lon()),
            GeoPoint::new(self.max.lat(), self.max.lon()),
            GeoPoint::new(self.min.lat(), self.max.lon()),
        ]
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
