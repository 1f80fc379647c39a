#![doc = include_str!("../README.md")]

pub use crate::error::{Error, Result};
pub use crate::nav::{EQUATORIAL_RADIUS_KM, EarthModel, MEAN_RADIUS_KM};
pub use crate::types::*;

pub mod dms;
mod error;
pub mod nav;
mod types;
pub mod utils;
