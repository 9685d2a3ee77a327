use chrono::Utc;
use subsolar::{subsolar_point_now, twilight_at, uniform_twilight, GeoPoint, Region};

fn main() {
    let sun = subsolar_point_now();
    println!("The Sun is at the zenith over {sun} ({})", Utc::now());

    for (name, lat, lon) in [
        ("Greenwich", 51.4769, 0.0),
        ("Sydney", -33.8688, 151.2093),
        ("Roque de los Muchachos", 28.7624, -17.8892),
    ] {
        let point = GeoPoint::from_degrees(lat, lon);
        println!("{name}: {}", twilight_at(&sun, &point));
    }

    // A map tile over western Europe: one shade or per-pixel work?
    let tile = Region::new(
        GeoPoint::from_degrees(45.0, 0.0),
        GeoPoint::from_degrees(55.0, 10.0),
    )
    .expect("valid tile bounds");
    match uniform_twilight(&tile, |p| twilight_at(&sun, p)) {
        Some(band) => println!("tile is uniformly {band}"),
        None => println!("tile straddles a twilight boundary"),
    }

}
