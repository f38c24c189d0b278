use std::sync::Arc;

use crate::foundation::core::lerp;
use crate::foundation::error::{HexError, HexResult};
use crate::foundation::rng::RandomSource;
use crate::gradient::mapper::GradientMapper;
use crate::morph::cursor::ShapeCursor;
use crate::morph::matching::{Pairing, greedy_match};
use crate::shape::colorize::colorize;
use crate::shape::model::Shape;
use crate::shape::point::HexPixel;

/// Position-only interpolation: id, color and matching value come from `current`.
pub fn lerp_pixel(current: &HexPixel, next: &HexPixel, t: f64) -> HexPixel {
    HexPixel {
        x: lerp(current.x, next.x, t),
        y: lerp(current.y, next.y, t),
        ..*current
    }
}

/// Pair `current` onto `next` greedily and move each point `t` of the way to its partner.
pub fn interpolate_sets(current: &[HexPixel], next: &[HexPixel], t: f64) -> Vec<HexPixel> {
    greedy_match(current, next)
        .into_iter()
        .map(|pairing| match pairing {
            Pairing::Matched { index, next: n } => lerp_pixel(&current[index], &next[n], t),
            Pairing::Unmatched { index } => current[index],
        })
        .collect()
}

/// Scroll-driven morph across an ordered list of shapes.
///
/// Colorized point sets are computed on first use and cached for the interpolator's lifetime.
/// Failed resolutions are not cached.
pub struct Interpolator {
    shapes: Vec<Shape>,
    mapper: GradientMapper,
    rng: Box<dyn RandomSource>,
    cache: Vec<Option<Arc<[HexPixel]>>>,
}

impl Interpolator {
    pub fn new(shapes: Vec<Shape>, mapper: GradientMapper, rng: Box<dyn RandomSource>) -> Self {
        let cache = vec![None; shapes.len()];
        Self {
            shapes,
            mapper,
            rng,
            cache,
        }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Drop every cached colorized set; the next frame recolorizes with fresh jitter.
    pub fn invalidate(&mut self) {
        self.cache.iter_mut().for_each(|slot| *slot = None);
    }

    pub fn is_cached(&self, index: usize) -> bool {
        matches!(self.cache.get(index), Some(Some(_)))
    }

    /// Colorized points of shape `index`, computing and caching them on first use.
    pub fn resolve(&mut self, index: usize) -> HexResult<Arc<[HexPixel]>> {
        if let Some(Some(points)) = self.cache.get(index) {
            return Ok(Arc::clone(points));
        }
        let shape = self.shapes.get(index).ok_or_else(|| {
            HexError::validation(format!(
                "shape index {index} out of range ({} shapes)",
                self.shapes.len()
            ))
        })?;

        let seeds = shape.source().produce().map_err(|e| {
            HexError::dataset(format!("shape '{}' failed to produce points: {e}", shape.name))
        })?;
        let colorized: Arc<[HexPixel]> = colorize(
            &seeds,
            shape.scale,
            shape.direction,
            &self.mapper,
            self.rng.as_mut(),
        )?
        .into();

        tracing::debug!(
            shape = %shape.name,
            source = %shape.source().label(),
            points = colorized.len(),
            "colorized shape"
        );
        self.cache[index] = Some(Arc::clone(&colorized));
        Ok(colorized)
    }

    /// Interpolated points for `global_progress` in `[0, 1]` (clamped).
    ///
    /// An empty shape list yields no points.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn interpolate(&mut self, global_progress: f64) -> HexResult<Vec<HexPixel>> {
        let Some(cursor) = ShapeCursor::at(global_progress, self.shapes.len()) else {
            return Ok(Vec::new());
        };
        let current = self.resolve(cursor.shape_index)?;
        if cursor.local_progress == 0.0 {
            return Ok(current.to_vec());
        }
        let next = self.resolve(cursor.next_index)?;
        Ok(interpolate_sets(&current, &next, cursor.local_progress))
    }
}

impl std::fmt::Debug for Interpolator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interpolator")
            .field("shapes", &self.shapes)
            .field(
                "cached",
                &self.cache.iter().filter(|c| c.is_some()).count(),
            )
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/morph/interpolate.rs"]
mod tests;
