use crate::dms;
use crate::error::{Error, Result};
use crate::types::Degrees;
use std::fmt;
use std::str::FromStr;

/// A point on the surface of a spherical Earth
///
/// Latitude and longitude are stored in radians. Neither is clamped: an
/// out-of-range latitude simply produces degenerate results in the
/// navigation formulas. A point built from unparseable text holds `NaN`
/// components, which [`GeodeticPoint::is_valid`] reports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeodeticPoint {
    lat: f64,
    lon: f64,
}

impl GeodeticPoint {
    /// Create a point from two angles in degrees
    ///
    /// Each angle is either signed decimal degrees or DMS text with a compass
    /// letter (see [`dms::parse_coordinate`]). Text that fails to parse leaves
    /// the corresponding component as `NaN`.
    ///
    /// ```
    /// use latlon_sphere::GeodeticPoint;
    ///
    /// let greenwich = GeodeticPoint::new("51°28′40″N", "0°00′05″W");
    /// let same = GeodeticPoint::new("512840N", -5.0 / 3600.0);
    /// assert!(greenwich.is_valid());
    /// assert!((greenwich.lat() - same.lat()).abs() < 1e-15);
    /// ```
    pub fn new<'a, 'b>(lat: impl Into<Degrees<'a>>, lon: impl Into<Degrees<'b>>) -> Self {
        Self {
            lat: dms::ll_to_rad(lat),
            lon: dms::ll_to_rad(lon),
        }
    }

    /// Create a point from two DMS strings, reporting parse failures
    pub fn parse(lat: &str, lon: &str) -> Result<Self> {
        Ok(Self {
            lat: dms::parse_coordinate(lat)?,
            lon: dms::parse_coordinate(lon)?,
        })
    }

    pub const fn from_radians(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn from_degrees(lat: f64, lon: f64) -> Self {
        Self::from_radians(lat.to_radians(), lon.to_radians())
    }

    /// Build a point only if both components are finite
    pub(crate) fn checked(lat: f64, lon: f64) -> Option<Self> {
        let point = Self::from_radians(lat, lon);
        point.is_valid().then_some(point)
    }

    /// Latitude in radians
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in radians
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Check that both components are finite numbers
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }

    /// Latitude as `DD°MM′SS″N`/`S`
    pub fn lat_string(&self) -> String {
        dms::to_lat(self.lat)
    }

    /// Longitude as `DDD°MM′SS″E`/`W`
    pub fn lon_string(&self) -> String {
        dms::to_lon(self.lon)
    }
}

impl fmt::Display for GeodeticPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.lat_string(), self.lon_string())
    }
}

/// Parses `"<latitude>, <longitude>"` as produced by the `Display` impl
///
/// The latitude ends at the first `N` or `S`; an optional comma and
/// whitespace separate it from the longitude.
impl FromStr for GeodeticPoint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let end = s
            .find(['N', 'S', 'n', 's'])
            .ok_or_else(|| Error::MissingHemisphere {
                found: s.trim_end().chars().next_back(),
            })?;

        // compass letters are ASCII
        let (lat, rest) = s.split_at(end + 1);
        let lon = rest.trim_start_matches(|c: char| c == ',' || c.is_whitespace());
        if lon.is_empty() {
            return Err(Error::MissingLongitude);
        }

        Self::parse(lat, lon)
    }
}
