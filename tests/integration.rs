use chrono::{DateTime, TimeZone, Utc};
use qtty::{Degrees, Kilometers, Radians};
use subsolar::{
    subsolar_point, twilight_at, twilight_from_distance, uniform_twilight, GeoPoint, JulianDate,
    Region, Twilight,
};

#[test]
fn j2000_reference_output_is_stable() {
    // JD 2 451 545.0 — the published reference case for the formula.
    let noon = DateTime::from_timestamp(946_728_000, 0).unwrap();
    assert!((JulianDate::from_utc(noon).value() - 2_451_545.0).abs() < 1e-9);

    let sun = subsolar_point(noon);
    assert!((sun.lat() - Degrees::new(-23.03)).abs() < Degrees::new(0.05));
    assert!((sun.lon() - Degrees::new(0.87)).abs() < Degrees::new(0.5));
}

#[test]
fn twilight_bands_ring_outward_from_the_subsolar_point() {
    let noon = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
    let sun = subsolar_point(noon);

    // Walk due north from the sub-solar point; each step crosses the next
    // boundary, so the expected band sequence is fixed.
    let expected = [
        (0.0, Twilight::Daylight),
        (89.0, Twilight::Daylight),
        (91.0, Twilight::Civil),
        (97.0, Twilight::Nautical),
        (103.0, Twilight::Astronomical),
        (109.0, Twilight::Night),
    ];
    for (offset, band) in expected {
        let query = GeoPoint::new(sun.lat() + Degrees::new(offset), sun.lon()).normalized();
        assert_eq!(twilight_at(&sun, &query), band, "offset {offset}°");
    }
}

#[test]
fn tile_at_the_subsolar_point_is_uniformly_daylight() {
    let noon = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
    let sun = subsolar_point(noon);

    let region = Region::new(
        GeoPoint::new(sun.lat() - Degrees::new(2.0), sun.lon() - Degrees::new(2.0)),
        GeoPoint::new(sun.lat() + Degrees::new(2.0), sun.lon() + Degrees::new(2.0)),
    )
    .unwrap();
    let band = uniform_twilight(&region, |p| twilight_at(&sun, p));
    assert_eq!(band, Some(Twilight::Daylight));
}

#[test]
fn tile_straddling_the_terminator_is_mixed() {
    let noon = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
    let sun = subsolar_point(noon);

    // The terminator sits 90° from the sub-solar point; a tall tile due
    // north spanning 85°–95° of separation crosses it.
    let region = Region::new(
        GeoPoint::new(sun.lat() + Degrees::new(85.0), sun.lon()),
        GeoPoint::new(sun.lat() + Degrees::new(95.0), sun.lon() + Degrees::new(1.0)),
    )
    .unwrap();
    let band = uniform_twilight(&region, |p| twilight_at(&sun, p));
    assert_eq!(band, None);
}

#[test]
fn classifier_forms_agree_on_measured_distances() {
    let sun = GeoPoint::from_degrees(-23.0, 15.0);
    let query = GeoPoint::from_degrees(51.4769, 0.0);

    let km: Kilometers = query.distance_to_km(&sun);
    let by_distance =
        twilight_from_distance(Radians::new(km.value() / subsolar::geo::EARTH_RADIUS.value()));
    assert_eq!(twilight_at(&sun, &query), by_distance);
}

#[test]
fn antipode_of_the_sun_is_night_at_any_epoch() {
    for year in [1990, 2000, 2026, 2100] {
        let noon = Utc.with_ymd_and_hms(year, 4, 1, 12, 0, 0).unwrap();
        let sun = subsolar_point(noon).normalized();
        let antipode = GeoPoint::new(
            Degrees::new(-sun.lat().value()),
            (sun.lon() + Degrees::new(180.0)).wrap_signed(),
        );
        assert_eq!(twilight_at(&sun, &antipode), Twilight::Night, "year {year}");
    }
}

#[cfg(feature = "serde")]
#[test]
fn serde_data_model_roundtrips() {
    let region = Region::new(
        GeoPoint::from_degrees(-10.0, 20.0),
        GeoPoint::from_degrees(10.0, 40.0),
    )
    .unwrap();
    let json = serde_json::to_string(&region).unwrap();
    let back: Region = serde_json::from_str(&json).unwrap();
    assert_eq!(back, region);

    let band_json = serde_json::to_string(&Twilight::Nautical).unwrap();
    assert_eq!(band_json, "\"Nautical\"");
}
