use crate::gradient::direction::clamp01;

/// Where a global progress value falls in an ordered sequence of shapes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeCursor {
    pub shape_index: usize,
    /// Saturates at the last shape; there is no wraparound.
    pub next_index: usize,
    /// Progress between `shape_index` and `next_index`, in `[0, 1)`.
    pub local_progress: f64,
}

impl ShapeCursor {
    /// Locate `global_progress` among `shape_count` shapes. Returns `None` when there are none.
    pub fn at(global_progress: f64, shape_count: usize) -> Option<Self> {
        if shape_count == 0 {
            return None;
        }
        let scaled = clamp01(global_progress) * shape_count as f64;
        let last = shape_count - 1;
        let shape_index = (scaled.floor() as usize).min(last);
        Some(Self {
            shape_index,
            next_index: (shape_index + 1).min(last),
            local_progress: scaled.rem_euclid(1.0),
        })
    }

    pub fn is_settled(&self) -> bool {
        self.shape_index == self.next_index || self.local_progress == 0.0
    }
}
