//! hexmorph renders a cloud of hexagonal pixels that morphs between silhouettes as a scroll
//! progress moves from 0 to 1, over an ambient field of drifting neon lines.
//!
//! The pipeline is:
//!
//! - Colorize each [`Shape`]'s seed points along its [`GradientDirection`]
//! - Pair and interpolate the colorized sets with an [`Interpolator`]
//! - Step the [`NeonField`] and rasterize both layers on a [`CpuCanvas`]
//!
//! A [`Stage`] owns all of that state for one mount; [`StageConfig`] builds one from JSON.
#![forbid(unsafe_code)]

pub mod ambient;
pub mod config;
pub mod encode;
pub mod foundation;
pub mod gradient;
pub mod morph;
pub mod render;
pub mod scroll;
pub mod shape;
pub mod stage;
pub mod theme;

pub use crate::ambient::neon::{LineState, NeonConfig, NeonField, NeonLine, Segment};
pub use crate::config::{ShapeConfig, SourceConfig, StageConfig};
pub use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, is_ffmpeg_on_path};
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::encode::sweep::{SweepOpts, render_sweep, sweep_progress};
pub use crate::foundation::core::{Canvas, FrameIndex, Point, Rgb8, Rgba, Vec2};
pub use crate::foundation::error::{HexError, HexResult};
pub use crate::foundation::rng::{FastRand, RandomSource, Rng64};
pub use crate::gradient::direction::{GradientDirection, progress_for};
pub use crate::gradient::mapper::GradientMapper;
pub use crate::morph::interpolate::Interpolator;
pub use crate::render::cpu::CpuCanvas;
pub use crate::render::{FrameRGBA, RenderSettings};
pub use crate::scroll::{ScrollMetrics, Section, active_section, scroll_progress};
pub use crate::shape::colorize::colorize;
pub use crate::shape::model::Shape;
pub use crate::shape::point::{HexPixel, SeedPoint};
pub use crate::shape::source::{FnSource, HexGrid, JsonFile, PointSource, StaticPoints};
pub use crate::stage::{Stage, StageOptions};
pub use crate::theme::Theme;
