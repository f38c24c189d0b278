use crate::foundation::core::{Rgb8, Rgba, lerp};
use crate::foundation::rng::RandomSource;
use crate::gradient::direction::clamp01;
use crate::theme::Theme;

/// Maps a progress value onto the themed four-stop gradient.
///
/// `[0, band_low)` runs ice-blue to electric-blue, `[band_low, band_high]` electric-blue to
/// rose-magenta and `(band_high, 1]` rose-magenta to hot-pink. Channels and opacity receive
/// symmetric jitter from the supplied [`RandomSource`].
#[derive(Clone, Debug)]
pub struct GradientMapper {
    theme: Theme,
}

impl GradientMapper {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Gradient color at `progress` before any jitter is applied.
    pub fn base_color(&self, progress: f64) -> [f64; 3] {
        let t = &self.theme;
        let p = clamp01(progress);

        let (from, to, local) = if p < t.band_low {
            (t.ice_blue, t.electric_blue, p / t.band_low)
        } else if p > t.band_high {
            (
                t.rose_magenta,
                t.hot_pink,
                (p - t.band_high) / (1.0 - t.band_high),
            )
        } else {
            (
                t.electric_blue,
                t.rose_magenta,
                (p - t.band_low) / (t.band_high - t.band_low),
            )
        };
        lerp_rgb(from, to, local)
    }

    /// Opacity at `progress` before jitter: `base + progress * progress_gain`.
    pub fn base_opacity(&self, progress: f64) -> f64 {
        let o = &self.theme.opacity;
        o.base + clamp01(progress) * o.progress_gain
    }

    pub fn color_for(&self, progress: f64, rng: &mut dyn RandomSource) -> Rgba {
        let t = &self.theme;
        let [r, g, b] = self.base_color(progress);

        let jitter = t.color_jitter;
        let r = to_channel(r + rng.symmetric(jitter));
        let g = to_channel(g + rng.symmetric(jitter));
        let b = to_channel(b + rng.symmetric(jitter));

        let o = &t.opacity;
        let opacity = (self.base_opacity(progress) + rng.symmetric(o.jitter / 2.0))
            .clamp(o.low, o.high);

        Rgba::new(r, g, b, opacity)
    }
}

impl Default for GradientMapper {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

fn lerp_rgb(from: Rgb8, to: Rgb8, t: f64) -> [f64; 3] {
    [
        lerp(f64::from(from.r), f64::from(to.r), t),
        lerp(f64::from(from.g), f64::from(to.g), t),
        lerp(f64::from(from.b), f64::from(to.b), t),
    ]
}

fn to_channel(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/gradient/mapper.rs"]
mod tests;
