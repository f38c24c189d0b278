//! Progress along a gradient direction and the themed color it maps to.

pub mod direction;
pub mod mapper;
