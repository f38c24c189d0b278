use crate::foundation::error::{HexError, HexResult};
use crate::foundation::rng::RandomSource;
use crate::gradient::direction::GradientDirection;
use crate::gradient::mapper::GradientMapper;
use crate::shape::point::{HexPixel, SeedPoint};

/// Axis-aligned bounds of a point set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Bounds of `points`, or `None` when empty.
    pub fn of(points: &[SeedPoint]) -> Option<Self> {
        let first = points.first()?;
        let init = Self {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };
        Some(points.iter().fold(init, |b, p| Self {
            min_x: b.min_x.min(p.x),
            max_x: b.max_x.max(p.x),
            min_y: b.min_y.min(p.y),
            max_y: b.max_y.max(p.y),
        }))
    }

    /// Position of `p` within the box on each axis. A zero-extent axis normalizes to 0.
    pub fn normalize(&self, p: &SeedPoint) -> (f64, f64) {
        (
            normalize_axis(p.x, self.min_x, self.max_x),
            normalize_axis(p.y, self.min_y, self.max_y),
        )
    }
}

fn normalize_axis(v: f64, min: f64, max: f64) -> f64 {
    let extent = max - min;
    if extent > 0.0 { (v - min) / extent } else { 0.0 }
}

/// Colorize `points` along `direction` and scale their positions.
///
/// The output is ordered by ascending spatial progress, not input order; each pixel keeps its
/// `id`. Rank `k` of `n` gets `matching_value = k / (n - 1)` (0 for a single point).
pub fn colorize(
    points: &[SeedPoint],
    scale: f64,
    direction: GradientDirection,
    mapper: &GradientMapper,
    rng: &mut dyn RandomSource,
) -> HexResult<Vec<HexPixel>> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(HexError::validation(format!(
            "colorize scale must be finite and > 0, got {scale}"
        )));
    }
    let Some(bounds) = BoundingBox::of(points) else {
        return Ok(Vec::new());
    };

    let mut ranked: Vec<(f64, &SeedPoint)> = points
        .iter()
        .map(|p| {
            let (nx, ny) = bounds.normalize(p);
            (direction.progress(nx, ny), p)
        })
        .collect();
    ranked.sort_by(|a, b| a.0.total_cmp(&b.0));

    let last = ranked.len().saturating_sub(1);
    Ok(ranked
        .into_iter()
        .enumerate()
        .map(|(rank, (progress, p))| HexPixel {
            id: p.id,
            x: p.x * scale,
            y: p.y * scale,
            color: mapper.color_for(progress, rng),
            matching_value: Some(rank_value(rank, last)),
        })
        .collect())
}

fn rank_value(rank: usize, last: usize) -> f64 {
    if last == 0 {
        0.0
    } else {
        rank as f64 / last as f64
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shape/colorize.rs"]
mod tests;
