use latlon_sphere::GeodeticPoint;

/// A handful of cities in the notations people actually type
pub const CITIES: &[(&str, &str, &str)] = &[
    ("London", "51°30′26″N", "000°07′39″W"),
    ("Paris", "48°51′24″N", "002°21′08″E"),
    ("New York", "40 42 46 N", "74 00 22 W"),
    ("Sydney", "33:52:08S", "151:12:30E"),
    ("Tokyo", "354122N", "1394130E"),
    ("Buenos Aires", "34°36′12″S", "058°22′54″W"),
    ("Cape Town", "33°55.5′S", "18°25.4′E"),
    ("Reykjavik", "64°08'48\"N", "21°56'24\"W"),
    ("Anchorage", "61 13 05 n", "149 54 01 w"),
    ("Singapore", "01°17′N", "103°51′E"),
];

pub fn city_points() -> Vec<(&'static str, GeodeticPoint)> {
    CITIES
        .iter()
        .map(|&(name, lat, lon)| (name, GeodeticPoint::new(lat, lon)))
        .collect()
}
