//! Scroll-driven morphing between colorized shapes.

pub mod cursor;
pub mod interpolate;
pub mod matching;
