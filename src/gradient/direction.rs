use std::fmt;
use std::str::FromStr;

/// Which axis or diagonal defines "progress" across a bounding box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GradientDirection {
    BottomLeftToTopRight,
    TopLeftToBottomRight,
    #[default]
    LeftToRight,
    RightToLeft,
    BottomToTop,
    TopToBottom,
    TopRightToBottomLeft,
    BottomRightToTopLeft,
}

impl GradientDirection {
    pub const ALL: [Self; 8] = [
        Self::BottomLeftToTopRight,
        Self::TopLeftToBottomRight,
        Self::LeftToRight,
        Self::RightToLeft,
        Self::BottomToTop,
        Self::TopToBottom,
        Self::TopRightToBottomLeft,
        Self::BottomRightToTopLeft,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::BottomLeftToTopRight => "bottom-left-to-top-right",
            Self::TopLeftToBottomRight => "top-left-to-bottom-right",
            Self::LeftToRight => "left-to-right",
            Self::RightToLeft => "right-to-left",
            Self::BottomToTop => "bottom-to-top",
            Self::TopToBottom => "top-to-bottom",
            Self::TopRightToBottomLeft => "top-right-to-bottom-left",
            Self::BottomRightToTopLeft => "bottom-right-to-top-left",
        }
    }

    /// Parse a direction name, returning `None` for unknown names.
    pub fn parse_strict(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == s.trim())
    }

    /// Parse a direction name; unknown names fall back to [`GradientDirection::LeftToRight`].
    pub fn parse_lossy(s: &str) -> Self {
        match Self::parse_strict(s) {
            Some(d) => d,
            None => {
                tracing::warn!(direction = s, "unknown gradient direction, using left-to-right");
                Self::LeftToRight
            }
        }
    }

    /// Spatial progress of a normalized position. See [`progress_for`].
    pub fn progress(self, normalized_x: f64, normalized_y: f64) -> f64 {
        progress_for(normalized_x, normalized_y, self)
    }
}

impl fmt::Display for GradientDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GradientDirection {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse_lossy(s))
    }
}

impl<'de> serde::Deserialize<'de> for GradientDirection {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse_lossy(&s))
    }
}

/// Map a position normalized to its bounding box onto `[0, 1]` along `direction`.
///
/// Inputs are clamped to `[0, 1]` first, so the result is always in range.
pub fn progress_for(normalized_x: f64, normalized_y: f64, direction: GradientDirection) -> f64 {
    let x = clamp01(normalized_x);
    let y = clamp01(normalized_y);
    match direction {
        GradientDirection::BottomLeftToTopRight => (x + (1.0 - y)) / 2.0,
        GradientDirection::TopLeftToBottomRight => (x + y) / 2.0,
        GradientDirection::LeftToRight => x,
        GradientDirection::RightToLeft => 1.0 - x,
        GradientDirection::BottomToTop => 1.0 - y,
        GradientDirection::TopToBottom => y,
        GradientDirection::TopRightToBottomLeft => ((1.0 - x) + y) / 2.0,
        GradientDirection::BottomRightToTopLeft => ((1.0 - x) + (1.0 - y)) / 2.0,
    }
}

pub(crate) fn clamp01(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

#[cfg(test)]
#[path = "../../tests/unit/gradient/direction.rs"]
mod tests;
