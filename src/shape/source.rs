use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::error::{HexError, HexResult};
use crate::shape::point::SeedPoint;

/// Something that can produce a shape's seed points.
///
/// Static arrays, files and generators all sit behind this one capability, so callers never
/// branch on where a shape's points come from.
pub trait PointSource {
    fn produce(&self) -> HexResult<Vec<SeedPoint>>;

    /// Short human-readable label used in logs.
    fn label(&self) -> String {
        "points".to_string()
    }
}

impl<S: PointSource + ?Sized> PointSource for Box<S> {
    fn produce(&self) -> HexResult<Vec<SeedPoint>> {
        (**self).produce()
    }

    fn label(&self) -> String {
        (**self).label()
    }
}

/// Points known up front.
#[derive(Clone, Debug, Default)]
pub struct StaticPoints(pub Vec<SeedPoint>);

impl PointSource for StaticPoints {
    fn produce(&self) -> HexResult<Vec<SeedPoint>> {
        Ok(self.0.clone())
    }

    fn label(&self) -> String {
        format!("static[{}]", self.0.len())
    }
}

/// A JSON array of `{id, x, y}` objects read from disk on each `produce`.
#[derive(Clone, Debug)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PointSource for JsonFile {
    fn produce(&self) -> HexResult<Vec<SeedPoint>> {
        let bytes = std::fs::read(&self.path)
            .with_context(|| format!("read dataset '{}'", self.path.display()))?;
        parse_points_json(&bytes)
            .map_err(|e| HexError::dataset(format!("{}: {e}", self.path.display())))
    }

    fn label(&self) -> String {
        self.path.display().to_string()
    }
}

pub fn parse_points_json(bytes: &[u8]) -> HexResult<Vec<SeedPoint>> {
    let points: Vec<SeedPoint> =
        serde_json::from_slice(bytes).map_err(|e| HexError::serde(e.to_string()))?;
    if let Some(bad) = points.iter().find(|p| !p.x.is_finite() || !p.y.is_finite()) {
        return Err(HexError::dataset(format!(
            "point {} has a non-finite coordinate",
            bad.id
        )));
    }
    Ok(points)
}

/// Points produced by a closure, evaluated lazily.
pub struct FnSource<F> {
    label: String,
    f: F,
}

impl<F> FnSource<F>
where
    F: Fn() -> HexResult<Vec<SeedPoint>>,
{
    pub fn new(label: impl Into<String>, f: F) -> Self {
        Self {
            label: label.into(),
            f,
        }
    }
}

impl<F> PointSource for FnSource<F>
where
    F: Fn() -> HexResult<Vec<SeedPoint>>,
{
    fn produce(&self) -> HexResult<Vec<SeedPoint>> {
        (self.f)()
    }

    fn label(&self) -> String {
        self.label.clone()
    }
}

/// Offset-row hexagon grid, `rows * cols` points with ids starting at 1.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HexGrid {
    pub start_x: f64,
    pub start_y: f64,
    pub rows: u32,
    pub cols: u32,
}

impl HexGrid {
    pub const HEX_WIDTH: f64 = 5.0;
    pub const HEX_HEIGHT: f64 = 4.25;

    pub fn points(&self) -> Vec<SeedPoint> {
        let mut out = Vec::with_capacity(self.rows as usize * self.cols as usize);
        let mut id = 1u32;
        for row in 0..self.rows {
            let stagger = f64::from(row % 2) * (Self::HEX_WIDTH / 2.0);
            let y = self.start_y + f64::from(row) * (Self::HEX_HEIGHT * 0.75);
            for col in 0..self.cols {
                let x = self.start_x + f64::from(col) * Self::HEX_WIDTH + stagger;
                out.push(SeedPoint::new(id, x, y));
                id += 1;
            }
        }
        out
    }
}

impl PointSource for HexGrid {
    fn produce(&self) -> HexResult<Vec<SeedPoint>> {
        Ok(self.points())
    }

    fn label(&self) -> String {
        format!("hex_grid[{}x{}]", self.rows, self.cols)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shape/source.rs"]
mod tests;
