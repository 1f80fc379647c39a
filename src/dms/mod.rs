//! Degree/minute/second text codec
//!
//! Parsing accepts the many ways people type angles (`51°28′40″N`,
//! `51 28 40 N`, `51:28.67N`, packed `512840N`) and returns radians.
//! Formatting turns radians back into `DDD°MM′SS″` strings.

mod format;
mod parse;

pub use self::format::{to_brng, to_dms, to_lat, to_lon, to_precision_fixed, to_signed_dms};
pub use self::parse::{deg_to_rad, ll_to_rad, parse_bearing, parse_coordinate};
