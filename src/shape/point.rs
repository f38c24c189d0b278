use crate::foundation::core::{Point, Rgba};

/// A dataset point: position only, no color.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SeedPoint {
    pub id: u32,
    pub x: f64,
    pub y: f64,
}

impl SeedPoint {
    pub fn new(id: u32, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }
}

/// A colorized hexagonal pixel.
///
/// `matching_value` is the rank-normalized spatial progress within its own shape and is only
/// used to pair points across shapes. Interpolated output carries the current shape's value.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HexPixel {
    pub id: u32,
    pub x: f64,
    pub y: f64,
    pub color: Rgba,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matching_value: Option<f64>,
}

impl HexPixel {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn matching_or_zero(&self) -> f64 {
        self.matching_value.unwrap_or(0.0)
    }
}
