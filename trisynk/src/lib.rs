mod abst;
mod reduce;
mod scalar;

pub use abst::*;
pub use reduce::*;
pub use scalar::*;

pub mod util;
