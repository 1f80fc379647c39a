mod common;

use claims::{assert_none, assert_some};
use common::city_points;
use latlon_sphere::{EarthModel, GeodeticPoint, MEAN_RADIUS_KM};
use std::f64::consts::{FRAC_PI_2, PI, TAU};

#[test]
fn all_cities_parse() {
    for (name, point) in city_points() {
        assert!(point.is_valid(), "{name} did not parse: {point:?}");
    }
}

#[test]
fn haversine_is_symmetric() {
    let cities = city_points();
    for (name1, p1) in &cities {
        assert_eq!(p1.distance_haversine(p1), 0.0, "{name1}");
        for (name2, p2) in &cities {
            assert_eq!(
                p1.distance_haversine(p2),
                p2.distance_haversine(p1),
                "{name1} <-> {name2}"
            );
        }
    }
}

#[test]
fn cosine_law_agrees_with_haversine_on_one_sphere() {
    let model = EarthModel::uniform(MEAN_RADIUS_KM);
    let cities = city_points();
    for (name1, p1) in &cities {
        for (name2, p2) in &cities {
            if name1 == name2 {
                continue;
            }
            let haversine = model.haversine_distance(p1, p2);
            let cosine = model.cosine_law_distance(p1, p2);
            assert!((haversine - cosine).abs() < 1e-6, "{name1} <-> {name2}");
        }
    }
}

#[test]
fn final_bearing_reverses_initial_bearing_from_destination() {
    let model = EarthModel::default();
    let cities = city_points();
    for (name1, p1) in &cities {
        for (name2, p2) in &cities {
            if name1 == name2 {
                continue;
            }
            let bearing = p1.initial_bearing(p2);
            let distance = model.cosine_law_distance(p1, p2);

            let arrival = model.final_bearing(p1, bearing, distance);
            let reversed = (p2.initial_bearing(p1) + PI).rem_euclid(TAU);
            let difference = (arrival - reversed).rem_euclid(TAU);
            assert!(
                difference < 1e-6 || TAU - difference < 1e-6,
                "{name1} -> {name2}: {arrival} vs {reversed}"
            );
        }
    }
}

#[test]
fn reverse_bearing_on_equator_and_meridian() {
    // elsewhere a great circle changes heading along the way, so the two
    // initial bearings only differ by exactly π on these lines
    let a = GeodeticPoint::from_degrees(0.0, 10.0);
    let b = GeodeticPoint::from_degrees(0.0, 20.0);
    let difference = (a.initial_bearing(&b) - b.initial_bearing(&a)).rem_euclid(TAU);
    assert!((difference - PI).abs() < 1e-12);

    let c = GeodeticPoint::from_degrees(10.0, 5.0);
    let d = GeodeticPoint::from_degrees(40.0, 5.0);
    let difference = (c.initial_bearing(&d) - d.initial_bearing(&c)).rem_euclid(TAU);
    assert!((difference - PI).abs() < 1e-12);
}

#[test]
fn destination_then_distance_back() {
    for (name, origin) in city_points() {
        for bearing in [0.0, 45.0, 123.4, 270.0] {
            for distance in [0.5, 10.0, 250.0] {
                let dest = assert_some!(origin.destination_point(bearing, distance));
                // haversine uses the equatorial radius, the direct problem the mean one
                let back = EarthModel::uniform(MEAN_RADIUS_KM).haversine_distance(&origin, &dest);
                let relative = (back - distance).abs() / distance;
                assert!(relative < 1e-9, "{name} {bearing}° {distance} km: {back}");
            }
        }
    }
}

#[test]
fn final_bearing_is_a_compass_bearing() {
    for (_, origin) in city_points() {
        let bearing = origin.final_bearing(60.0, 3000.0);
        assert!((0.0..TAU).contains(&bearing));
    }
}

#[test]
fn midpoint_is_equidistant() {
    let cities = city_points();
    let (_, london) = cities[0];
    let (_, sydney) = cities[3];

    let mid = assert_some!(london.midpoint(&sydney));
    let to_london = mid.distance_haversine(&london);
    let to_sydney = mid.distance_haversine(&sydney);
    assert!((to_london - to_sydney).abs() < 1e-6);
}

#[test]
fn midpoint_of_antipodal_points_is_none() {
    let a = GeodeticPoint::new("45°N", "030°E");
    let b = GeodeticPoint::new("45°S", "150°W");
    assert_none!(a.midpoint(&b));
}

#[test]
fn rhumb_destination_stays_normalized() {
    let origin = GeodeticPoint::new("85°N", "170°E");
    for bearing in [0.0, 30.0, 60.0, 90.0, 135.0, 300.0, 330.0] {
        for distance in [100.0, 1000.0, 1500.0] {
            let dest = assert_some!(origin.rhumb_destination_point(bearing, distance));
            assert!(dest.lat().abs() <= FRAC_PI_2, "{bearing}° {distance} km: {dest:?}");
            assert!(dest.lon() > -PI && dest.lon() <= PI, "{bearing}° {distance} km: {dest:?}");
        }
    }
}

#[test]
fn rhumb_destination_round_trips_between_cities() {
    let cities = city_points();
    for (name1, p1) in &cities {
        for (name2, p2) in &cities {
            if name1 == name2 {
                continue;
            }
            let bearing = p1.rhumb_bearing(p2);
            let distance = p1.rhumb_distance(p2);
            let dest = assert_some!(
                EarthModel::default().rhumb_destination_point(p1, bearing, distance)
            );
            assert!((dest.lat() - p2.lat()).abs() < 1e-9, "{name1} -> {name2}");
            assert!((dest.lon() - p2.lon()).abs() < 1e-9, "{name1} -> {name2}");
        }
    }
}

#[test]
fn invalid_points_propagate_nan() {
    let bad = GeodeticPoint::new("12.34Q", "000°00′05″W");
    let good = GeodeticPoint::new("51°28′39″N", "000°00′05″W");

    assert!(bad.distance_haversine(&good).is_nan());
    assert!(bad.distance_cosine_law(&good).is_nan());
    assert!(bad.rhumb_distance(&good).is_nan());
    assert!(bad.initial_bearing(&good).is_nan());
    assert!(good.rhumb_bearing(&bad).is_nan());
    assert_none!(bad.midpoint(&good));
    assert_none!(bad.destination_point(90.0, 10.0));
    assert_none!(bad.rhumb_destination_point(90.0, 10.0));
}
