use std::f64::consts::PI;

use crate::ambient::neon::Segment;
use crate::foundation::core::{Canvas, Point, Rgba};
use crate::foundation::error::{HexError, HexResult};
use crate::render::composite::{fade_in_place, fill_in_place, over_in_place, premultiply};
use crate::render::{FrameRGBA, RenderSettings};
use crate::shape::point::HexPixel;

/// CPU raster target owning the persistent neon trail between frames.
pub struct CpuCanvas {
    width: u16,
    height: u16,
    settings: RenderSettings,
    trail: vello_cpu::Pixmap,
    scratch: vello_cpu::Pixmap,
    ctx: Option<vello_cpu::RenderContext>,
}

impl CpuCanvas {
    pub fn new(canvas: Canvas, settings: RenderSettings) -> HexResult<Self> {
        if !settings.hex_size.is_finite() || settings.hex_size <= 0.0 {
            return Err(HexError::validation("hex_size must be finite and > 0"));
        }
        if !settings.offset.x.is_finite() || !settings.offset.y.is_finite() {
            return Err(HexError::validation("offset must be finite"));
        }
        let (width, height) = surface_size(canvas)?;
        Ok(Self {
            width,
            height,
            settings,
            trail: vello_cpu::Pixmap::new(width, height),
            scratch: vello_cpu::Pixmap::new(width, height),
            ctx: None,
        })
    }

    pub fn size(&self) -> Canvas {
        Canvas {
            width: u32::from(self.width),
            height: u32::from(self.height),
        }
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Reallocate both layers. The neon trail starts over from transparent.
    pub fn resize(&mut self, canvas: Canvas) -> HexResult<()> {
        let (width, height) = surface_size(canvas)?;
        if (width, height) == (self.width, self.height) {
            return Ok(());
        }
        self.width = width;
        self.height = height;
        self.trail = vello_cpu::Pixmap::new(width, height);
        self.scratch = vello_cpu::Pixmap::new(width, height);
        self.ctx = None;
        Ok(())
    }

    /// Premultiplied pixels of the neon trail layer.
    pub fn trail(&self) -> &[u8] {
        self.trail.data_as_u8_slice()
    }

    /// Where a point lands on the canvas.
    pub fn project(&self, p: &HexPixel) -> Point {
        let cx = f64::from(self.width) / 2.0 + self.settings.offset.x;
        let cy = f64::from(self.height) / 2.0 + self.settings.offset.y;
        Point::new(cx + p.x, cy + p.y)
    }

    /// Fade the trail toward transparent by `fade`, then stroke `segments` onto it.
    pub fn draw_neon(&mut self, segments: &[Segment], fade: f64) -> HexResult<()> {
        fade_in_place(self.trail.data_as_u8_slice_mut(), fade as f32)?;
        if segments.is_empty() {
            return Ok(());
        }

        let mut scratch = std::mem::replace(&mut self.scratch, vello_cpu::Pixmap::new(1, 1));
        fill_in_place(scratch.data_as_u8_slice_mut(), [0, 0, 0, 0])?;
        self.with_ctx(|ctx| {
            for seg in segments {
                ctx.set_paint(paint_for(seg.color));
                ctx.set_stroke(
                    vello_cpu::kurbo::Stroke::new(seg.width).with_caps(vello_cpu::kurbo::Cap::Round),
                );
                let mut line = vello_cpu::kurbo::BezPath::new();
                line.move_to(point_to_cpu(seg.from));
                line.line_to(point_to_cpu(seg.to));
                ctx.stroke_path(&line);
            }
            ctx.flush();
            ctx.render_to_pixmap(&mut scratch);
        });
        let out = over_in_place(
            self.trail.data_as_u8_slice_mut(),
            scratch.data_as_u8_slice(),
            1.0,
        );
        self.scratch = scratch;
        out
    }

    /// Rasterize one hexagon per point into a fresh transparent layer.
    pub fn draw_hexes(&mut self, points: &[HexPixel]) -> HexResult<&[u8]> {
        let mut scratch = std::mem::replace(&mut self.scratch, vello_cpu::Pixmap::new(1, 1));
        fill_in_place(scratch.data_as_u8_slice_mut(), [0, 0, 0, 0])?;
        if !points.is_empty() {
            let radius = self.settings.hex_size / 2.0;
            let centres: Vec<(Point, Rgba)> =
                points.iter().map(|p| (self.project(p), p.color)).collect();
            self.with_ctx(|ctx| {
                for (centre, color) in &centres {
                    if color.a <= 0.0 {
                        continue;
                    }
                    ctx.set_paint(paint_for(*color));
                    ctx.fill_path(&hexagon(*centre, radius));
                }
                ctx.flush();
                ctx.render_to_pixmap(&mut scratch);
            });
        }
        self.scratch = scratch;
        Ok(self.scratch.data_as_u8_slice())
    }

    /// Compose background, trail and hex layer into a frame.
    pub fn compose(&mut self, points: &[HexPixel]) -> HexResult<FrameRGBA> {
        let mut data = vec![0u8; usize::from(self.width) * usize::from(self.height) * 4];
        fill_in_place(&mut data, premultiply(self.settings.background_rgba))?;
        over_in_place(&mut data, self.trail.data_as_u8_slice(), 1.0)?;
        let hexes = self.draw_hexes(points)?;
        over_in_place(&mut data, hexes, 1.0)?;

        Ok(FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data,
            premultiplied: true,
        })
    }

    fn with_ctx(&mut self, f: impl FnOnce(&mut vello_cpu::RenderContext)) {
        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == self.width && ctx.height() == self.height => ctx,
            _ => vello_cpu::RenderContext::new(self.width, self.height),
        };
        ctx.reset();
        f(&mut ctx);
        self.ctx = Some(ctx);
    }
}

impl std::fmt::Debug for CpuCanvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuCanvas")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("settings", &self.settings)
            .finish()
    }
}

fn surface_size(canvas: Canvas) -> HexResult<(u16, u16)> {
    let width: u16 = canvas
        .width
        .try_into()
        .map_err(|_| HexError::render("canvas width exceeds u16"))?;
    let height: u16 = canvas
        .height
        .try_into()
        .map_err(|_| HexError::render("canvas height exceeds u16"))?;
    if width == 0 || height == 0 {
        return Err(HexError::validation("canvas width/height must be non-zero"));
    }
    Ok((width, height))
}

fn paint_for(color: Rgba) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(color.r, color.g, color.b, color.alpha_u8())
}

/// Pointy-top regular hexagon with circumradius `radius`.
fn hexagon(centre: Point, radius: f64) -> vello_cpu::kurbo::BezPath {
    let mut path = vello_cpu::kurbo::BezPath::new();
    for k in 0..6 {
        let theta = PI / 3.0 * f64::from(k) - PI / 2.0;
        let v = Point::new(
            centre.x + radius * theta.cos(),
            centre.y + radius * theta.sin(),
        );
        if k == 0 {
            path.move_to(point_to_cpu(v));
        } else {
            path.line_to(point_to_cpu(v));
        }
    }
    path.close_path();
    path
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
