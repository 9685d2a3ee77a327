// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Sub-solar point from a low-precision solar ephemeris.
//!
//! Implements the classic short-series solar position formula (mean
//! anomaly + equation of center, mean obliquity, GMST polynomial) and
//! projects the Sun onto the Earth's surface: the returned [`GeoPoint`]
//! is where the Sun is at the zenith at the given instant.
//!
//! Accuracy is arc-minute class near the current epoch and degrades
//! slowly (polynomial drift) for dates centuries away; the formula is
//! total over any finite timestamp and never fails.
//!
//! Two details are kept exactly as published rather than "improved":
//!
//! * Declination and right ascension use single-argument arctangents
//!   (the RA via the tangent half-angle `Y / (X + R)`), not `atan2`.
//!   Changing this would silently move outputs away from the reference
//!   values the tests pin down.
//! * The hour-angle reduction uses the truncating `%` remainder. For
//!   instants well before the J2000 epoch the raw hour angle can turn
//!   negative and leave the resulting longitude east of +180°; fold with
//!   [`GeoPoint::normalized`] when the wrap convention matters.

use chrono::{DateTime, Utc};
use qtty::Degrees;
use tracing::debug;

use crate::geo::GeoPoint;
use crate::julian::JulianDate;

/// Sub-solar point at the current wall-clock instant.
#[inline]
pub fn subsolar_point_now() -> GeoPoint {
    subsolar_point(Utc::now())
}

/// Sub-solar point at a UTC instant.
pub fn subsolar_point(instant: DateTime<Utc>) -> GeoPoint {
    subsolar_point_at_jd(JulianDate::from_utc(instant))
}

/// Sub-solar point for a raw Julian Day Number.
///
/// Exposed for callers that already carry a [`JulianDate`] time axis;
/// [`subsolar_point`] is the usual entry point.
pub fn subsolar_point_at_jd(jd: JulianDate) -> GeoPoint {
    // Julian centuries since J2000.0.
    let t = jd.julian_centuries().value();

    // Mean anomaly of the Sun, degrees.
    let m = Degrees::new(357.52910 + 35999.05030 * t - 0.0001559 * t * t - 0.00000048 * t * t * t);

    // Mean longitude, degrees.
    let l0 = 280.46645 + 36000.76983 * t + 0.0003032 * t * t;

    // Equation of center.
    let dl = (1.914600 - 0.004817 * t - 0.000014 * t * t) * m.sin()
        + (0.019993 - 0.000101 * t) * (m * 2.0).sin()
        + 0.000290 * (m * 3.0).sin();

    // True ecliptic longitude, degrees.
    let l = Degrees::new(l0 + dl);

    // Mean obliquity of the ecliptic, degrees.
    let eps = Degrees::new(
        23.0 + 26.0 / 60.0 + 21.448 / 3600.0
            - (46.8150 * t + 0.00059 * t * t - 0.001813 * t * t * t) / 3600.0,
    );

    // Unit-sphere equatorial coordinates of the solar direction.
    let x = l.cos();
    let y = eps.cos() * l.sin();
    let z = eps.sin() * l.sin();
    let r = (1.0 - z * z).sqrt();

    // Declination, degrees.
    let delta = (z / r).atan().to_degrees();

    // Right ascension in hours via the tangent half-angle: atan(p) is
    // half the RA in degrees, and 24/180 folds the factor 2 into the
    // degree→hour conversion.
    let p = y / (x + r);
    let ra = (24.0 / 180.0) * p.atan().to_degrees();

    // Greenwich mean sidereal time, hours.
    let theta0 = 280.46061837 + 360.98564736629 * (jd.value() - 2_451_545.0)
        + 0.000387933 * t * t
        - t * t * t / 38_710_000.0;
    let sid_time = (theta0 % 360.0) / 15.0;

    // Hour angle of the Sun at Greenwich, degrees.
    let sun_ha = ((sid_time - ra) * 15.0) % 360.0;
    let lon = if sun_ha < 180.0 { -sun_ha } else { 360.0 - sun_ha };
    let lat = delta;

    debug!(
        sidereal_time_h = sid_time,
        right_ascension_h = ra,
        declination_deg = delta,
        lat_deg = lat,
        lon_deg = lon,
        "computed sub-solar point"
    );

    GeoPoint::from_degrees(lat, lon)
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use qtty::Degrees;

    fn utc(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(secs, 0).unwrap()
    }

    #[test]
    fn j2000_reference_point() {
        // 2000-01-01T12:00:00Z, JD 2 451 545.0. The reference output of
        // this formula is δ ≈ −23.03° (just past the December solstice)
        // with the sub-solar point slightly east of Greenwich, because
        // the equation of time puts apparent noon a few minutes after
        // 12:00 UT in early January.
        let point = subsolar_point(utc(946_728_000));
        assert!(
            (point.lat() - Degrees::new(-23.03)).abs() < Degrees::new(0.05),
            "lat = {}",
            point.lat()
        );
        assert!(
            (point.lon() - Degrees::new(0.87)).abs() < Degrees::new(0.5),
            "lon = {}",
            point.lon()
        );
    }

    #[test]
    fn jd_entry_point_matches_utc_entry_point() {
        let instant = utc(946_728_000);
        let a = subsolar_point(instant);
        let b = subsolar_point_at_jd(JulianDate::from_utc(instant));
        assert_eq!(a, b);
    }

    #[test]
    fn june_solstice_declination_is_far_north() {
        // 2000-06-21T12:00:00Z — within a day of the June solstice.
        let point = subsolar_point(utc(961_588_800));
        assert!(
            (point.lat() - Degrees::new(23.44)).abs() < Degrees::new(0.1),
            "lat = {}",
            point.lat()
        );
    }

    #[test]
    fn equinox_declination_is_near_equator() {
        // 2000-03-20T07:35:00Z — the March 2000 equinox.
        let point = subsolar_point(utc(953_537_700));
        assert!(point.lat().abs() < Degrees::new(0.1), "lat = {}", point.lat());
    }

    #[test]
    fn latitude_stays_within_the_tropics() {
        // One sample every ~37 hours across two years.
        for k in 0..480 {
            let point = subsolar_point(utc(946_728_000 + k * 133_200));
            assert!(
                point.lat().abs() <= Degrees::new(23.45),
                "lat = {} at sample {}",
                point.lat(),
                k
            );
        }
    }

    #[test]
    fn longitude_in_range_for_modern_dates() {
        for k in 0..480 {
            let point = subsolar_point(utc(946_728_000 + k * 133_200));
            assert!(
                point.lon().abs() <= Degrees::new(180.0),
                "lon = {} at sample {}",
                point.lon(),
                k
            );
        }
    }

    #[test]
    fn subsolar_longitude_tracks_earth_rotation() {
        // Six hours later the sub-solar point is ~90° further west.
        let noon = subsolar_point(utc(946_728_000));
        let evening = subsolar_point(utc(946_728_000 + 6 * 3600));
        let westward = (noon.lon() - evening.lon()).wrap_pos();
        assert!(
            (westward - Degrees::new(90.0)).abs() < Degrees::new(1.0),
            "westward drift = {}",
            westward
        );
    }
}
