use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{HexError, HexResult};

pub use kurbo::{Point, Vec2};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> HexResult<Self> {
        if width == 0 || height == 0 {
            return Err(HexError::validation("canvas width/height must be non-zero"));
        }
        Ok(Self { width, height })
    }

    pub fn width_f64(self) -> f64 {
        f64::from(self.width)
    }

    pub fn height_f64(self) -> f64 {
        f64::from(self.height)
    }
}

/// Straight (non-premultiplied) RGB triple used for theme stops.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn with_alpha(self, a: f64) -> Rgba {
        Rgba::new(self.r, self.g, self.b, a)
    }
}

/// A straight-alpha color with opacity in `[0, 1]`.
///
/// Serialized as a CSS `rgba(r, g, b, a)` string, matching how pixel colors are consumed by the
/// page layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self {
            r,
            g,
            b,
            a: a.clamp(0.0, 1.0),
        }
    }

    pub fn alpha_u8(self) -> u8 {
        (self.a.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    /// Scale opacity by `factor`, clamping the result to `[0, 1]`.
    pub fn with_opacity_scaled(self, factor: f64) -> Self {
        Self::new(self.r, self.g, self.b, self.a * factor)
    }

    pub fn to_rgba8(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.alpha_u8()]
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, self.a)
    }
}

impl FromStr for Rgba {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .trim()
            .strip_prefix("rgba(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| HexError::serde(format!("expected 'rgba(r, g, b, a)', got '{s}'")))?;

        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        let [r, g, b, a] = parts.as_slice() else {
            return Err(HexError::serde(format!(
                "expected four rgba components, got {}",
                parts.len()
            )));
        };

        let channel = |v: &str| {
            v.parse::<u8>()
                .map_err(|e| HexError::serde(format!("invalid rgba channel '{v}': {e}")))
        };
        let a = a
            .parse::<f64>()
            .map_err(|e| HexError::serde(format!("invalid rgba alpha '{a}': {e}")))?;

        Ok(Self::new(channel(r)?, channel(g)?, channel(b)?, a))
    }
}

impl serde::Serialize for Rgba {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Rgba {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

pub fn lerp(start: f64, end: f64, t: f64) -> f64 {
    start * (1.0 - t) + end * t
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
