//! JSON stage configuration.
//!
//! Everything except `canvas` and `shapes` is optional and falls back to the site defaults.
//! File dataset paths are resolved relative to the config file.

use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::ambient::neon::NeonConfig;
use crate::foundation::core::{Canvas, Vec2};
use crate::foundation::error::{HexError, HexResult};
use crate::gradient::direction::GradientDirection;
use crate::render::RenderSettings;
use crate::shape::model::{DEFAULT_SCALE, Shape};
use crate::shape::point::SeedPoint;
use crate::shape::source::{HexGrid, JsonFile, StaticPoints};
use crate::stage::{Stage, StageOptions};
use crate::theme::Theme;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StageConfig {
    pub canvas: Canvas,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(default = "default_hex_size")]
    pub hex_size: f64,
    #[serde(default = "default_offset")]
    pub offset: Vec2,
    #[serde(default = "default_background")]
    pub background_rgba: [u8; 4],
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub neon: NeonConfig,
    pub shapes: Vec<ShapeConfig>,

    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ShapeConfig {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub direction: GradientDirection,
    #[serde(default = "default_scale")]
    pub scale: f64,
    pub source: SourceConfig,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceConfig {
    File { path: PathBuf },
    Inline { points: Vec<SeedPoint> },
    HexGrid(HexGrid),
}

fn default_hex_size() -> f64 {
    RenderSettings::default().hex_size
}

fn default_offset() -> Vec2 {
    RenderSettings::default().offset
}

fn default_background() -> [u8; 4] {
    RenderSettings::default().background_rgba
}

fn default_scale() -> f64 {
    DEFAULT_SCALE
}

impl StageConfig {
    pub fn new(canvas: Canvas, shapes: Vec<ShapeConfig>) -> Self {
        let render = RenderSettings::default();
        Self {
            canvas,
            seed: None,
            hex_size: render.hex_size,
            offset: render.offset,
            background_rgba: render.background_rgba,
            theme: Theme::default(),
            neon: NeonConfig::default(),
            shapes,
            base_dir: None,
        }
    }

    /// Read, parse and validate a config file.
    pub fn from_path(path: &Path) -> HexResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read stage config '{}'", path.display()))?;
        let mut cfg = Self::parse(&text)?;
        cfg.base_dir = path.parent().map(Path::to_path_buf);
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse and validate a config from JSON text. Relative dataset paths resolve against the
    /// working directory.
    pub fn from_json_str(text: &str) -> HexResult<Self> {
        let cfg = Self::parse(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn parse(text: &str) -> HexResult<Self> {
        serde_json::from_str(text)
            .map_err(|e| HexError::serde(format!("invalid stage config: {e}")))
    }

    /// Directory that relative dataset paths resolve against.
    pub fn base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }

    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    pub fn validate(&self) -> HexResult<()> {
        Canvas::new(self.canvas.width, self.canvas.height)?;
        if !self.hex_size.is_finite() || self.hex_size <= 0.0 {
            return Err(HexError::validation("hex_size must be finite and > 0"));
        }
        if !self.offset.x.is_finite() || !self.offset.y.is_finite() {
            return Err(HexError::validation("offset must be finite"));
        }
        self.theme.validate()?;
        self.neon.validate()?;
        if self.shapes.is_empty() {
            return Err(HexError::validation("stage config needs at least one shape"));
        }
        for shape in &self.shapes {
            if shape.name.trim().is_empty() {
                return Err(HexError::validation("shape name must be non-empty"));
            }
            if !shape.scale.is_finite() || shape.scale <= 0.0 {
                return Err(HexError::validation(format!(
                    "shape '{}' scale must be finite and > 0",
                    shape.name
                )));
            }
            if let SourceConfig::Inline { points } = &shape.source
                && let Some(bad) = points.iter().find(|p| !p.x.is_finite() || !p.y.is_finite())
            {
                return Err(HexError::validation(format!(
                    "shape '{}' point {} has a non-finite coordinate",
                    shape.name, bad.id
                )));
            }
        }
        Ok(())
    }

    pub fn render_settings(&self) -> RenderSettings {
        RenderSettings {
            background_rgba: self.background_rgba,
            hex_size: self.hex_size,
            offset: self.offset,
        }
    }

    pub fn stage_options(&self) -> StageOptions {
        StageOptions {
            canvas: self.canvas,
            theme: self.theme.clone(),
            neon: self.neon.clone(),
            render: self.render_settings(),
            seed: self.seed,
        }
    }

    /// Build the shapes, in config order.
    pub fn shapes(&self) -> Vec<Shape> {
        self.shapes
            .iter()
            .map(|s| {
                let shape = match &s.source {
                    SourceConfig::File { path } => {
                        Shape::new(s.name.clone(), JsonFile::new(self.resolve(path)))
                    }
                    SourceConfig::Inline { points } => {
                        Shape::new(s.name.clone(), StaticPoints(points.clone()))
                    }
                    SourceConfig::HexGrid(grid) => Shape::new(s.name.clone(), *grid),
                };
                shape
                    .with_description(s.description.clone())
                    .with_link(s.link.clone())
                    .with_direction(s.direction)
                    .with_scale(s.scale)
            })
            .collect()
    }

    #[tracing::instrument(level = "debug", skip(self), fields(shapes = self.shapes.len()))]
    pub fn build_stage(&self) -> HexResult<Stage> {
        Stage::new(self.shapes(), self.stage_options())
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
