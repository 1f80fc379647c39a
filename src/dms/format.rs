use crate::types::Hemisphere;
use crate::utils::angle::normalize_bearing;

/// Split an angle into whole degrees, minutes and seconds
///
/// The sign is dropped. The angle is rounded to the nearest whole second
/// first, so minutes and seconds always stay below 60.
fn decompose(rad: f64) -> (u64, u64, u64) {
    let seconds = (rad.abs().to_degrees() * 3600.0).round() as u64;

    (seconds / 3600, seconds / 60 % 60, seconds % 60)
}

fn join_fields(deg: u64, min: u64, sec: u64) -> String {
    format!("{deg:03}\u{00B0}{min:02}\u{2032}{sec:02}\u{2033}")
}

/// Format an angle in radians as unsigned `DDD°MM′SS″`
///
/// Non-finite input is formatted as the plain number (`NaN`, `inf`).
pub fn to_dms(rad: f64) -> String {
    if !rad.is_finite() {
        return rad.to_string();
    }

    let (deg, min, sec) = decompose(rad);
    join_fields(deg, min, sec)
}

/// Format an angle in radians as `DDD°MM′SS″`, prefixed with `-` when negative
pub fn to_signed_dms(rad: f64) -> String {
    if rad < 0.0 {
        format!("-{}", to_dms(rad))
    } else {
        to_dms(rad)
    }
}

/// Format a latitude in radians as `DD°MM′SS″N` or `DD°MM′SS″S`
pub fn to_lat(rad: f64) -> String {
    if !rad.is_finite() {
        return rad.to_string();
    }

    // latitudes fit in two degree digits
    let dms = to_dms(rad);
    format!("{}{}", &dms[1..], Hemisphere::for_latitude(rad))
}

/// Format a longitude in radians as `DDD°MM′SS″E` or `DDD°MM′SS″W`
pub fn to_lon(rad: f64) -> String {
    if !rad.is_finite() {
        return rad.to_string();
    }

    format!("{}{}", to_dms(rad), Hemisphere::for_longitude(rad))
}

/// Format a bearing in radians as a compass bearing in `[0°, 360°)`
///
/// A bearing that rounds up to a full turn is written as `000°00′00″`.
pub fn to_brng(rad: f64) -> String {
    if !rad.is_finite() {
        return rad.to_string();
    }

    let (deg, min, sec) = decompose(normalize_bearing(rad));
    join_fields(deg % 360, min, sec)
}

/// Format a number with `precision` significant digits in fixed notation
///
/// Unlike `{:e}`-style formatting this never switches to exponent notation;
/// large values are rounded and padded with zeros instead.
///
/// ```
/// use latlon_sphere::dms::to_precision_fixed;
///
/// assert_eq!(to_precision_fixed(1234.5678, 6), "1234.57");
/// assert_eq!(to_precision_fixed(12345.0, 2), "12000");
/// ```
pub fn to_precision_fixed(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return format!("{:.*}", precision, 0.0);
    }

    // digits before the decimal point
    let scale = value.abs().log10().floor() as i32 + 1;
    let decimals = precision as i32 - scale;

    if decimals >= 0 {
        format!("{:.*}", decimals as usize, value)
    } else {
        let factor = 10f64.powi(-decimals);
        format!("{:.0}", (value / factor).round() * factor)
    }
}
