//! Mount-to-unmount lifecycle of the animation.
//!
//! A [`Stage`] exclusively owns the morph interpolator (and with it the colorized-set cache), the
//! neon field and the raster canvas. Progress updates and frame renders are independent calls
//! and may interleave; a frame always renders the progress that was last set.

use crate::ambient::neon::{NeonConfig, NeonField};
use crate::foundation::core::{Canvas, FrameIndex};
use crate::foundation::error::HexResult;
use crate::foundation::rng::source_for;
use crate::gradient::direction::clamp01;
use crate::gradient::mapper::GradientMapper;
use crate::morph::interpolate::Interpolator;
use crate::render::cpu::CpuCanvas;
use crate::render::{FrameRGBA, RenderSettings};
use crate::scroll::{ScrollMetrics, scroll_progress};
use crate::shape::model::Shape;
use crate::shape::point::HexPixel;
use crate::theme::Theme;

/// Everything a stage needs besides its shapes.
#[derive(Clone, Debug)]
pub struct StageOptions {
    pub canvas: Canvas,
    pub theme: Theme,
    pub neon: NeonConfig,
    pub render: RenderSettings,
    /// Fixed seed for reproducible jitter and neon motion; `None` draws from entropy.
    pub seed: Option<u64>,
}

impl StageOptions {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            theme: Theme::default(),
            neon: NeonConfig::default(),
            render: RenderSettings::default(),
            seed: None,
        }
    }
}

pub struct Stage {
    interpolator: Interpolator,
    neon: NeonField,
    canvas: CpuCanvas,
    progress: f64,
    points: Vec<HexPixel>,
    points_stale: bool,
    frame: FrameIndex,
    skipped: u64,
}

impl Stage {
    pub fn new(shapes: Vec<Shape>, opts: StageOptions) -> HexResult<Self> {
        opts.theme.validate()?;
        for shape in &shapes {
            shape.validate()?;
        }

        let canvas = CpuCanvas::new(opts.canvas, opts.render)?;
        let neon_seed = opts.seed.map(|s| s ^ 0x9E37_79B9_7F4A_7C15);
        let neon = NeonField::new(opts.canvas, opts.neon, &opts.theme, source_for(neon_seed))?;
        let interpolator = Interpolator::new(
            shapes,
            GradientMapper::new(opts.theme),
            source_for(opts.seed),
        );

        tracing::debug!(
            width = opts.canvas.width,
            height = opts.canvas.height,
            shapes = interpolator.shape_count(),
            "stage mounted"
        );
        Ok(Self {
            interpolator,
            neon,
            canvas,
            progress: 0.0,
            points: Vec::new(),
            points_stale: true,
            frame: FrameIndex(0),
            skipped: 0,
        })
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Record the global progress; points are recomputed on the next frame.
    pub fn set_progress(&mut self, progress: f64) {
        let progress = clamp01(progress);
        if progress != self.progress {
            self.progress = progress;
            self.points_stale = true;
        }
    }

    pub fn set_scroll(&mut self, metrics: ScrollMetrics) {
        self.set_progress(scroll_progress(metrics));
    }

    /// Points shown by the most recent frame.
    pub fn points(&self) -> &[HexPixel] {
        &self.points
    }

    /// Number of frames rendered so far.
    pub fn frame_index(&self) -> FrameIndex {
        self.frame
    }

    /// Frames whose points could not be resolved and showed the previous points instead.
    pub fn skipped_frames(&self) -> u64 {
        self.skipped
    }

    pub fn interpolator(&self) -> &Interpolator {
        &self.interpolator
    }

    pub fn neon(&self) -> &NeonField {
        &self.neon
    }

    pub fn canvas(&self) -> &CpuCanvas {
        &self.canvas
    }

    /// Follow a surface resize of both layers.
    pub fn resize(&mut self, canvas: Canvas) -> HexResult<()> {
        self.canvas.resize(canvas)?;
        self.neon.resize(canvas);
        Ok(())
    }

    /// Recolorize every shape on the next frame.
    pub fn invalidate(&mut self) {
        self.interpolator.invalidate();
        self.points_stale = true;
    }

    /// Run the neon field for `frames` frames without composing any output.
    pub fn warm_up(&mut self, frames: u32) -> HexResult<()> {
        for _ in 0..frames {
            self.step_neon()?;
        }
        Ok(())
    }

    /// Refresh points if progress moved. A failed resolution keeps the previous points.
    ///
    /// Returns `false` when the refresh was skipped.
    pub fn refresh_points(&mut self) -> bool {
        if !self.points_stale {
            return true;
        }
        match self.interpolator.interpolate(self.progress) {
            Ok(points) => {
                self.points = points;
                self.points_stale = false;
                true
            }
            Err(e) => {
                self.skipped += 1;
                tracing::warn!(
                    progress = self.progress,
                    frame = self.frame.0,
                    error = %e,
                    "point resolution failed; keeping previous frame"
                );
                false
            }
        }
    }

    /// Render one animation frame: refresh points, step the neon field, compose both layers.
    pub fn render_frame(&mut self) -> HexResult<FrameRGBA> {
        self.refresh_points();
        self.step_neon()?;
        let frame = self.canvas.compose(&self.points)?;
        self.frame = FrameIndex(self.frame.0 + 1);
        Ok(frame)
    }

    fn step_neon(&mut self) -> HexResult<()> {
        let segments = self.neon.step();
        let fade = self.neon.config().trail_fade;
        self.canvas.draw_neon(&segments, fade)
    }
}

impl Drop for Stage {
    fn drop(&mut self) {
        tracing::debug!(frames = self.frame.0, skipped = self.skipped, "stage unmounted");
    }
}

impl std::fmt::Debug for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stage")
            .field("progress", &self.progress)
            .field("frame", &self.frame)
            .field("points", &self.points.len())
            .field("canvas", &self.canvas)
            .finish()
    }
}

#[cfg(test)]
#[path = "../tests/unit/stage.rs"]
mod tests;
