use crate::dms;
use crate::nav::EarthModel;
use crate::types::{Degrees, GeodeticPoint};
use crate::utils::angle::{shorter_arc, wrap_longitude};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};
use tracing::trace;

/// Difference of Mercator-projected latitudes between `lat1` and `lat2`
fn projected_lat_difference(lat1: f64, lat2: f64) -> f64 {
    ((lat2 / 2.0 + FRAC_PI_4).tan() / (lat1 / 2.0 + FRAC_PI_4).tan()).ln()
}

/// Ratio between a latitude difference and its projected difference
///
/// Falls back to `cos(lat1)` where the ratio is undefined, i.e. on an
/// east-west line (`0 / 0`) or when the projection breaks down past a pole.
fn stretch_ratio(lat1: f64, d_lat: f64, d_psi: f64) -> f64 {
    let q = d_lat / d_psi;
    if q.is_finite() {
        q
    } else {
        trace!(lat1, d_lat, d_psi, "Using cos(lat) for undefined rhumb ratio");
        lat1.cos()
    }
}

impl EarthModel {
    /// Length in km of the rhumb line (constant bearing) between two points
    ///
    /// Longitude differences larger than π are taken the short way across
    /// the antimeridian.
    pub fn rhumb_distance(&self, p1: &GeodeticPoint, p2: &GeodeticPoint) -> f64 {
        let d_lat = p2.lat() - p1.lat();
        let d_lon = shorter_arc(p2.lon() - p1.lon());
        let d_psi = projected_lat_difference(p1.lat(), p2.lat());
        let q = stretch_ratio(p1.lat(), d_lat, d_psi);

        (d_lat * d_lat + q * q * d_lon * d_lon).sqrt() * self.radius
    }

    /// Travel `distance` km from `origin` on the constant `bearing` (radians)
    ///
    /// A path that runs over a pole is reflected back across it, so the
    /// returned latitude stays within `±π/2`. The longitude is wrapped into
    /// `(-π, π]`.
    ///
    /// # Returns
    ///
    /// The destination, or `None` if the formula produced a non-finite
    /// coordinate
    pub fn rhumb_destination_point(
        &self,
        origin: &GeodeticPoint,
        bearing: f64,
        distance: f64,
    ) -> Option<GeodeticPoint> {
        let d = distance / self.radius;
        let lat1 = origin.lat();

        let mut lat2 = lat1 + d * bearing.cos();
        let d_lat = lat2 - lat1;
        let d_psi = projected_lat_difference(lat1, lat2);
        let q = stretch_ratio(lat1, d_lat, d_psi);
        let d_lon = d * bearing.sin() / q;

        if lat2.abs() > FRAC_PI_2 {
            lat2 = if lat2 > 0.0 { PI - lat2 } else { -PI - lat2 };
        }

        let destination = GeodeticPoint::checked(lat2, wrap_longitude(origin.lon() + d_lon));
        if destination.is_none() {
            trace!(?origin, bearing, distance, "No rhumb destination point");
        }
        destination
    }
}

impl GeodeticPoint {
    /// Rhumb-line distance in km to `other` (see [`EarthModel::rhumb_distance`])
    pub fn rhumb_distance(&self, other: &GeodeticPoint) -> f64 {
        EarthModel::default().rhumb_distance(self, other)
    }

    /// Constant bearing in radians (`(-π, π]`) of the rhumb line to `to`
    pub fn rhumb_bearing(&self, to: &GeodeticPoint) -> f64 {
        let d_lon = shorter_arc(to.lon() - self.lon());
        let d_psi = projected_lat_difference(self.lat(), to.lat());

        d_lon.atan2(d_psi)
    }

    /// Destination after travelling `distance` km on the constant `bearing`
    /// (degrees or DMS text)
    pub fn rhumb_destination_point<'a>(
        &self,
        bearing: impl Into<Degrees<'a>>,
        distance: f64,
    ) -> Option<GeodeticPoint> {
        EarthModel::default().rhumb_destination_point(self, dms::deg_to_rad(bearing), distance)
    }
}
