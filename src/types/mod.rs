mod degrees;
mod hemisphere;
mod point;

pub use degrees::*;
pub use hemisphere::*;
pub use point::*;
