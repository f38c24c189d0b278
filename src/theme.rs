use crate::foundation::core::Rgb8;
use crate::foundation::error::{HexError, HexResult};

/// Color and opacity constants shared by the gradient mapper and the neon field.
///
/// Every field has a default matching the site theme, so a config only needs to name what it
/// overrides.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Theme {
    pub ice_blue: Rgb8,
    pub electric_blue: Rgb8,
    pub rose_magenta: Rgb8,
    pub hot_pink: Rgb8,
    /// Progress where the ice-blue band ends.
    pub band_low: f64,
    /// Progress where the hot-pink band starts.
    pub band_high: f64,
    /// Per-channel jitter amplitude; channels move by up to `±color_jitter`.
    pub color_jitter: f64,
    pub opacity: OpacityTheme,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OpacityTheme {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
    /// Base opacity of a hex pixel before progress gain and jitter.
    pub base: f64,
    /// Opacity added at progress 1.
    pub progress_gain: f64,
    /// Full width of the symmetric opacity jitter.
    pub jitter: f64,
    pub neon_line: OpacityRange,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OpacityRange {
    pub min: f64,
    pub max: f64,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            ice_blue: Rgb8::new(235, 248, 255),
            electric_blue: Rgb8::new(56, 189, 248),
            rose_magenta: Rgb8::new(194, 24, 91),
            hot_pink: Rgb8::new(219, 39, 119),
            band_low: 0.15,
            band_high: 0.85,
            color_jitter: 10.0,
            opacity: OpacityTheme::default(),
        }
    }
}

impl Default for OpacityTheme {
    fn default() -> Self {
        Self {
            low: 0.25,
            medium: 0.5,
            high: 0.95,
            base: 0.5,
            progress_gain: 0.2,
            jitter: 0.35,
            neon_line: OpacityRange { min: 0.4, max: 0.7 },
        }
    }
}

impl Theme {
    /// Palette the ambient neon lines pick their colors from.
    pub fn neon_palette(&self) -> [Rgb8; 4] {
        [
            self.electric_blue,
            self.rose_magenta,
            self.hot_pink,
            self.ice_blue,
        ]
    }

    pub fn validate(&self) -> HexResult<()> {
        let bands_ok = self.band_low.is_finite()
            && self.band_high.is_finite()
            && 0.0 < self.band_low
            && self.band_low < self.band_high
            && self.band_high < 1.0;
        if !bands_ok {
            return Err(HexError::validation(
                "theme bands must satisfy 0 < band_low < band_high < 1",
            ));
        }
        if !self.color_jitter.is_finite() || self.color_jitter < 0.0 {
            return Err(HexError::validation(
                "theme color_jitter must be finite and >= 0",
            ));
        }

        let o = &self.opacity;
        if !(0.0..=1.0).contains(&o.low) || !(0.0..=1.0).contains(&o.high) || o.low > o.high {
            return Err(HexError::validation(
                "theme opacity bounds must satisfy 0 <= low <= high <= 1",
            ));
        }
        if !o.jitter.is_finite() || o.jitter < 0.0 {
            return Err(HexError::validation(
                "theme opacity jitter must be finite and >= 0",
            ));
        }
        let n = o.neon_line;
        if !(0.0..=1.0).contains(&n.min) || !(0.0..=1.0).contains(&n.max) || n.min > n.max {
            return Err(HexError::validation(
                "theme neon_line opacity must satisfy 0 <= min <= max <= 1",
            ));
        }
        Ok(())
    }
}
