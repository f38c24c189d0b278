use std::f64::consts::{PI, TAU};

use crate::foundation::core::{Canvas, Point, Rgba};
use crate::foundation::error::{HexError, HexResult};
use crate::foundation::rng::RandomSource;
use crate::theme::Theme;

/// Tunables of the ambient neon line field.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct NeonConfig {
    pub line_count: usize,
    pub speed_min: f64,
    pub speed_max: f64,
    pub curve_speed_min: f64,
    pub curve_speed_max: f64,
    pub curve_amplitude_min: f64,
    pub curve_amplitude_max: f64,
    pub line_width: f64,
    /// Opacity of the black wash painted over the previous frame.
    pub trail_fade: f64,
    /// Per-frame probability that a cruising line starts a pulse.
    pub pulse_probability: f64,
    pub pulse_frames: u32,
    pub pulse_opacity_gain: f64,
    pub pulse_width_gain: f64,
}

impl Default for NeonConfig {
    fn default() -> Self {
        Self {
            line_count: 50,
            speed_min: 0.5 / 3.0,
            speed_max: 1.5 / 3.0,
            curve_speed_min: 0.005,
            curve_speed_max: 0.015,
            curve_amplitude_min: 0.1,
            curve_amplitude_max: 0.3,
            line_width: 1.5,
            trail_fade: 0.2,
            pulse_probability: 0.002,
            pulse_frames: 60,
            pulse_opacity_gain: 0.8,
            pulse_width_gain: 1.5,
        }
    }
}

impl NeonConfig {
    pub fn validate(&self) -> HexResult<()> {
        let ordered = [
            ("speed", self.speed_min, self.speed_max),
            ("curve_speed", self.curve_speed_min, self.curve_speed_max),
            (
                "curve_amplitude",
                self.curve_amplitude_min,
                self.curve_amplitude_max,
            ),
        ];
        for (name, min, max) in ordered {
            if !min.is_finite() || !max.is_finite() || min > max {
                return Err(HexError::validation(format!(
                    "neon {name} range must be finite with min <= max"
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.pulse_probability) {
            return Err(HexError::validation(
                "neon pulse_probability must be in [0, 1]",
            ));
        }
        if !(0.0..=1.0).contains(&self.trail_fade) {
            return Err(HexError::validation("neon trail_fade must be in [0, 1]"));
        }
        if self.pulse_frames == 0 {
            return Err(HexError::validation("neon pulse_frames must be > 0"));
        }
        if !self.line_width.is_finite() || self.line_width <= 0.0 {
            return Err(HexError::validation("neon line_width must be > 0"));
        }
        Ok(())
    }
}

/// Per-line pulse state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineState {
    Cruising,
    Pulsing { frame: u32, duration: u32 },
}

impl LineState {
    /// Sine envelope in `[0, 1]`; zero while cruising.
    pub fn envelope(self) -> f64 {
        match self {
            Self::Cruising => 0.0,
            Self::Pulsing { frame, duration } => {
                (PI * f64::from(frame) / f64::from(duration.max(1))).sin().max(0.0)
            }
        }
    }

    fn advance(self, start_pulse: bool, pulse_frames: u32) -> Self {
        match self {
            Self::Cruising if start_pulse => Self::Pulsing {
                frame: 0,
                duration: pulse_frames,
            },
            Self::Cruising => Self::Cruising,
            Self::Pulsing { frame, duration } if frame + 1 >= duration => Self::Cruising,
            Self::Pulsing { frame, duration } => Self::Pulsing {
                frame: frame + 1,
                duration,
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NeonLine {
    pub x: f64,
    pub y: f64,
    pub angle: f64,
    pub speed: f64,
    pub color: Rgba,
    pub curve: f64,
    pub curve_speed: f64,
    pub curve_amplitude: f64,
    pub state: LineState,
}

/// One stroke emitted by a line during a step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    pub color: Rgba,
    pub width: f64,
}

/// Continuously running field of curved, bouncing, occasionally pulsing lines.
pub struct NeonField {
    width: f64,
    height: f64,
    config: NeonConfig,
    lines: Vec<NeonLine>,
    rng: Box<dyn RandomSource>,
}

impl NeonField {
    pub fn new(
        canvas: Canvas,
        config: NeonConfig,
        theme: &Theme,
        mut rng: Box<dyn RandomSource>,
    ) -> HexResult<Self> {
        config.validate()?;
        let (width, height) = (canvas.width_f64(), canvas.height_f64());
        let palette = theme.neon_palette();
        let opacity = theme.opacity.neon_line;

        let lines = (0..config.line_count)
            .map(|_| {
                let a = rng.range(opacity.min, opacity.max);
                let color = palette[rng.index(palette.len())].with_alpha(a);
                NeonLine {
                    x: rng.range(0.0, width),
                    y: rng.range(0.0, height),
                    angle: rng.range(0.0, TAU),
                    speed: rng.range(config.speed_min, config.speed_max),
                    color,
                    curve: 0.0,
                    curve_speed: rng.range(config.curve_speed_min, config.curve_speed_max),
                    curve_amplitude: rng
                        .range(config.curve_amplitude_min, config.curve_amplitude_max),
                    state: LineState::Cruising,
                }
            })
            .collect();

        Ok(Self {
            width,
            height,
            config,
            lines,
            rng,
        })
    }

    pub fn lines(&self) -> &[NeonLine] {
        &self.lines
    }

    pub fn config(&self) -> &NeonConfig {
        &self.config
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Follow a surface resize. Lines outside the new bounds bounce back on the next step.
    pub fn resize(&mut self, canvas: Canvas) {
        self.width = canvas.width_f64();
        self.height = canvas.height_f64();
    }

    /// Advance every line by one frame and return the strokes to draw.
    pub fn step(&mut self) -> Vec<Segment> {
        let cfg = &self.config;
        let rng = self.rng.as_mut();
        let (width, height) = (self.width, self.height);

        self.lines
            .iter_mut()
            .map(|line| {
                let from = Point::new(line.x, line.y);

                line.curve += line.curve_speed;
                let heading = line.angle + line.curve.sin() * line.curve_amplitude;
                line.x += heading.cos() * line.speed;
                line.y += heading.sin() * line.speed;

                let env = line.state.envelope();
                let segment = Segment {
                    from,
                    to: Point::new(line.x, line.y),
                    color: line
                        .color
                        .with_opacity_scaled(1.0 + env * cfg.pulse_opacity_gain),
                    width: cfg.line_width * (1.0 + env * cfg.pulse_width_gain),
                };

                let start_pulse = rng.chance(cfg.pulse_probability);
                line.state = line.state.advance(start_pulse, cfg.pulse_frames);

                if line.x < 0.0 || line.x > width {
                    line.angle = PI - line.angle;
                    reroll_curve(line, cfg, &mut *rng);
                    line.x = line.x.clamp(0.0, width);
                }
                if line.y < 0.0 || line.y > height {
                    line.angle = -line.angle;
                    reroll_curve(line, cfg, &mut *rng);
                    line.y = line.y.clamp(0.0, height);
                }

                segment
            })
            .collect()
    }
}

fn reroll_curve(line: &mut NeonLine, cfg: &NeonConfig, rng: &mut dyn RandomSource) {
    line.curve = rng.range(0.0, TAU);
    line.curve_amplitude = rng.range(cfg.curve_amplitude_min, cfg.curve_amplitude_max);
}

impl std::fmt::Debug for NeonField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NeonField")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("lines", &self.lines.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ambient/neon.rs"]
mod tests;
