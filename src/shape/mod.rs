//! Shape definitions, their point sources and colorization.

pub mod colorize;
pub mod model;
pub mod point;
pub mod source;
