/// Errors returned by the strict coordinate and bearing parsers
///
/// The lenient entry points ([`crate::dms::ll_to_rad`], [`crate::dms::deg_to_rad`],
/// [`crate::GeodeticPoint::new`]) map every one of these to `NaN` instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Missing compass direction (expected N, S, E or W, found {found:?})")]
    MissingHemisphere { found: Option<char> },

    #[error("Unsupported number of degree/minute/second fields: {0}")]
    SegmentCount(usize),

    #[error("Invalid numeric field: {0:?}")]
    InvalidNumber(String),

    #[error("Missing longitude after latitude")]
    MissingLongitude,
}

pub type Result<T> = std::result::Result<T, Error>;
