//! CPU rasterization of the hex layer and the neon trail layer.

pub mod composite;
pub mod cpu;

use crate::foundation::core::Vec2;

#[derive(Clone, Debug)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Straight-alpha copy of the pixel data, as expected by PNG writers.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        if !self.premultiplied {
            return self.data.clone();
        }
        let mut out = self.data.clone();
        for px in out.chunks_exact_mut(4) {
            let a = u32::from(px[3]);
            if a == 0 || a == 255 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u32::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        out
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Straight RGBA background painted under both layers.
    pub background_rgba: [u8; 4],
    /// Diameter of a hexagon sprite in pixels.
    pub hex_size: f64,
    /// Translation of the point cloud relative to the canvas centre.
    pub offset: Vec2,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            background_rgba: [18, 20, 28, 255],
            hex_size: 5.0,
            offset: Vec2::new(-200.0, -250.0),
        }
    }
}
