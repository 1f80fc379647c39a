//! Great-circle and rhumb-line navigation on a spherical Earth
//!
//! Distances are in kilometres and bearings in radians, measured clockwise
//! from north. Operations that need an Earth radius are methods of
//! [`EarthModel`]; every one of them also has a [`crate::GeodeticPoint`]
//! shorthand that uses [`EarthModel::default()`].
//!
//! Operations that derive a new point return `None` instead of a point
//! with non-finite components. Anything else lets `NaN` flow through to the
//! result.

mod great_circle;
mod rhumb;

/// Equatorial radius of the Earth in kilometres
pub const EQUATORIAL_RADIUS_KM: f64 = 6378.137;

/// Mean radius of the Earth in kilometres
pub const MEAN_RADIUS_KM: f64 = 6371.0;

/// Radii used by the navigation formulas
///
/// The default model keeps the historical split: the haversine distance
/// uses the equatorial radius, every other formula the mean radius. Use
/// [`EarthModel::uniform`] to run all formulas against a single sphere.
///
/// ```
/// use latlon_sphere::{EarthModel, GeodeticPoint};
///
/// let a = GeodeticPoint::from_degrees(0.0, 0.0);
/// let b = GeodeticPoint::from_degrees(0.0, 1.0);
///
/// let sphere = EarthModel::uniform(6371.0);
/// let d1 = sphere.haversine_distance(&a, &b);
/// let d2 = sphere.cosine_law_distance(&a, &b);
/// assert!((d1 - d2).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EarthModel {
    /// Radius for [`EarthModel::haversine_distance`] (km)
    pub haversine_radius: f64,
    /// Radius for all other formulas (km)
    pub radius: f64,
}

impl EarthModel {
    pub const fn uniform(radius: f64) -> Self {
        Self {
            haversine_radius: radius,
            radius,
        }
    }
}

impl Default for EarthModel {
    fn default() -> Self {
        Self {
            haversine_radius: EQUATORIAL_RADIUS_KM,
            radius: MEAN_RADIUS_KM,
        }
    }
}
