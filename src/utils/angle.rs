use std::f64::consts::{PI, TAU};

/// Wrap a longitude in radians into `(-π, π]`
pub fn wrap_longitude(lon: f64) -> f64 {
    let wrapped = (lon + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI { PI } else { wrapped }
}

/// Shorten a longitude difference that crosses the antimeridian
///
/// Differences beyond ±π are replaced by the equivalent difference the
/// other way round the globe.
pub fn shorter_arc(d_lon: f64) -> f64 {
    if d_lon > PI {
        d_lon - TAU
    } else if d_lon < -PI {
        d_lon + TAU
    } else {
        d_lon
    }
}

/// Normalize a bearing in radians into `[0, 2π)`
pub fn normalize_bearing(brng: f64) -> f64 {
    let normalized = brng.rem_euclid(TAU);
    if normalized >= TAU { 0.0 } else { normalized }
}
