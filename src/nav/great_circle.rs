use crate::dms;
use crate::nav::EarthModel;
use crate::types::{Degrees, GeodeticPoint};
use crate::utils::angle::{normalize_bearing, wrap_longitude};
use std::f64::consts::PI;
use tracing::trace;

/// Below this length the vector sum of two unit vectors has no direction
const ANTIPODAL_EPSILON: f64 = 1e-12;

/// Angular distance between two points (haversine formula)
fn central_angle(p1: &GeodeticPoint, p2: &GeodeticPoint) -> f64 {
    let d_lat = p2.lat() - p1.lat();
    let d_lon = p2.lon() - p1.lon();

    // rounding can push antipodal points slightly past 1
    let a = ((d_lat / 2.0).sin().powi(2)
        + p1.lat().cos() * p2.lat().cos() * (d_lon / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);

    2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}

impl EarthModel {
    /// Great-circle distance in km using the haversine formula
    ///
    /// Well conditioned for small distances. Uses
    /// [`EarthModel::haversine_radius`].
    pub fn haversine_distance(&self, p1: &GeodeticPoint, p2: &GeodeticPoint) -> f64 {
        central_angle(p1, p2) * self.haversine_radius
    }

    /// Great-circle distance in km using the spherical law of cosines
    ///
    /// Loses precision for points a few metres apart, where the cosine of
    /// the central angle rounds to 1.
    pub fn cosine_law_distance(&self, p1: &GeodeticPoint, p2: &GeodeticPoint) -> f64 {
        let cos_angle = p1.lat().sin() * p2.lat().sin()
            + p1.lat().cos() * p2.lat().cos() * (p2.lon() - p1.lon()).cos();

        cos_angle.clamp(-1.0, 1.0).acos() * self.radius
    }

    /// Solve the direct problem: travel `distance` km from `origin` on the
    /// initial `bearing` (radians)
    ///
    /// The resulting longitude is wrapped into `(-π, π]`.
    ///
    /// # Returns
    ///
    /// The destination, or `None` if the formula produced a non-finite
    /// coordinate (e.g. because an input was `NaN`)
    pub fn destination_point(
        &self,
        origin: &GeodeticPoint,
        bearing: f64,
        distance: f64,
    ) -> Option<GeodeticPoint> {
        let d = distance / self.radius;
        let lat1 = origin.lat();

        let lat2 = (lat1.sin() * d.cos() + lat1.cos() * d.sin() * bearing.cos()).asin();
        let lon2 = origin.lon()
            + (bearing.sin() * d.sin() * lat1.cos()).atan2(d.cos() - lat1.sin() * lat2.sin());

        let destination = GeodeticPoint::checked(lat2, wrap_longitude(lon2));
        if destination.is_none() {
            trace!(?origin, bearing, distance, "No destination point");
        }
        destination
    }

    /// Bearing (radians, `[0, 2π)`) on arrival after travelling `distance`
    /// km from `origin` on the initial `bearing`
    ///
    /// Computed as the reverse of the initial bearing from the destination
    /// back to the origin. `NaN` if there is no destination.
    pub fn final_bearing(&self, origin: &GeodeticPoint, bearing: f64, distance: f64) -> f64 {
        match self.destination_point(origin, bearing, distance) {
            Some(destination) => normalize_bearing(destination.initial_bearing(origin) + PI),
            None => f64::NAN,
        }
    }

    /// Distance in km from `start` along the path towards `end` to the
    /// point abeam of `point`
    ///
    /// This is a planar projection of the haversine distance onto the
    /// initial course (`d₁₃ · cos(θ₁₃ − θ₁₂)`). It is only meaningful while
    /// the distances involved are small compared to the Earth's radius.
    pub fn along_track_distance(
        &self,
        start: &GeodeticPoint,
        end: &GeodeticPoint,
        point: &GeodeticPoint,
    ) -> f64 {
        let course = start.initial_bearing(end);
        let to_point = start.initial_bearing(point);

        self.haversine_distance(start, point) * (to_point - course).cos()
    }

    /// Signed distance in km of `point` from the great circle through
    /// `start` and `end`
    ///
    /// Negative values lie to the left of the path, positive to the right.
    pub fn cross_track_distance(
        &self,
        start: &GeodeticPoint,
        end: &GeodeticPoint,
        point: &GeodeticPoint,
    ) -> f64 {
        let course = start.initial_bearing(end);
        let to_point = start.initial_bearing(point);

        (central_angle(start, point).sin() * (to_point - course).sin()).asin() * self.radius
    }
}

impl GeodeticPoint {
    /// Haversine distance in km to `other` (see [`EarthModel::haversine_distance`])
    pub fn distance_haversine(&self, other: &GeodeticPoint) -> f64 {
        EarthModel::default().haversine_distance(self, other)
    }

    /// Law-of-cosines distance in km to `other` (see [`EarthModel::cosine_law_distance`])
    pub fn distance_cosine_law(&self, other: &GeodeticPoint) -> f64 {
        EarthModel::default().cosine_law_distance(self, other)
    }

    /// Initial great-circle bearing in radians from this point to `to`
    ///
    /// The result is in `(-π, π]`; use [`dms::to_brng`] or normalize it to
    /// get a compass bearing.
    pub fn initial_bearing(&self, to: &GeodeticPoint) -> f64 {
        let d_lon = to.lon() - self.lon();

        let y = d_lon.sin() * to.lat().cos();
        let x = self.lat().cos() * to.lat().sin() - self.lat().sin() * to.lat().cos() * d_lon.cos();

        y.atan2(x)
    }

    /// Final bearing after travelling `distance` km on the initial `bearing`
    /// (degrees or DMS text)
    pub fn final_bearing<'a>(&self, bearing: impl Into<Degrees<'a>>, distance: f64) -> f64 {
        EarthModel::default().final_bearing(self, dms::deg_to_rad(bearing), distance)
    }

    /// Point halfway along the great circle to `other`
    ///
    /// # Returns
    ///
    /// `None` for antipodal points, where every great circle between them
    /// is equally short, and for non-finite input
    pub fn midpoint(&self, other: &GeodeticPoint) -> Option<GeodeticPoint> {
        let d_lon = other.lon() - self.lon();
        let bx = other.lat().cos() * d_lon.cos();
        let by = other.lat().cos() * d_lon.sin();

        let x = self.lat().cos() + bx;
        let z = self.lat().sin() + other.lat().sin();
        if x.hypot(by).hypot(z) < ANTIPODAL_EPSILON {
            trace!(from = ?self, to = ?other, "No midpoint between antipodal points");
            return None;
        }

        let lat = z.atan2(x.hypot(by));
        let lon = self.lon() + by.atan2(x);

        GeodeticPoint::checked(lat, lon)
    }

    /// Destination after travelling `distance` km on the initial `bearing`
    /// (degrees or DMS text)
    ///
    /// ```
    /// use latlon_sphere::GeodeticPoint;
    ///
    /// let start = GeodeticPoint::new("51°28′40″N", "0°00′05″W");
    /// let end = start.destination_point("045°", 100.0).unwrap();
    /// assert!((start.distance_cosine_law(&end) - 100.0).abs() < 1e-6);
    /// ```
    pub fn destination_point<'a>(
        &self,
        bearing: impl Into<Degrees<'a>>,
        distance: f64,
    ) -> Option<GeodeticPoint> {
        EarthModel::default().destination_point(self, dms::deg_to_rad(bearing), distance)
    }

    /// Along-track distance in km (see [`EarthModel::along_track_distance`])
    pub fn along_track_distance(&self, end: &GeodeticPoint, point: &GeodeticPoint) -> f64 {
        EarthModel::default().along_track_distance(self, end, point)
    }

    /// Cross-track distance in km (see [`EarthModel::cross_track_distance`])
    pub fn cross_track_distance(&self, end: &GeodeticPoint, point: &GeodeticPoint) -> f64 {
        EarthModel::default().cross_track_distance(self, end, point)
    }
}
