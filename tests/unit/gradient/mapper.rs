use super::*;
use crate::foundation::rng::{FastRand, Rng64};

/// Source that always returns the midpoint, so symmetric jitter is exactly zero.
struct Midpoint;

impl RandomSource for Midpoint {
    fn next_f64(&mut self) -> f64 {
        0.5
    }
}

fn approx(a: [f64; 3], b: [u8; 3]) -> bool {
    a.iter()
        .zip(b)
        .all(|(x, y)| (x - f64::from(y)).abs() < 1e-9)
}

#[test]
fn band_endpoints_hit_theme_stops() {
    let m = GradientMapper::default();
    assert!(approx(m.base_color(0.0), [235, 248, 255]));
    assert!(approx(m.base_color(0.15), [56, 189, 248]));
    assert!(approx(m.base_color(0.85), [194, 24, 91]));
    assert!(approx(m.base_color(1.0), [219, 39, 119]));
}

#[test]
fn middle_band_is_renormalized() {
    let m = GradientMapper::default();
    // (0.5 - 0.15) / 0.7 = 0.5: halfway between electric-blue and rose-magenta.
    let [r, g, b] = m.base_color(0.5);
    assert!((r - 125.0).abs() < 1e-9);
    assert!((g - 106.5).abs() < 1e-9);
    assert!((b - 169.5).abs() < 1e-9);
}

#[test]
fn out_of_range_progress_is_clamped_before_banding() {
    let m = GradientMapper::default();
    assert_eq!(m.base_color(-3.0), m.base_color(0.0));
    assert_eq!(m.base_color(7.0), m.base_color(1.0));
    assert_eq!(m.base_opacity(7.0), m.base_opacity(1.0));
}

#[test]
fn zero_jitter_source_yields_base_values() {
    let m = GradientMapper::default();
    let c = m.color_for(0.0, &mut Midpoint);
    assert_eq!((c.r, c.g, c.b), (235, 248, 255));
    assert!((c.a - 0.5).abs() < 1e-12);

    let c = m.color_for(1.0, &mut Midpoint);
    assert_eq!((c.r, c.g, c.b), (219, 39, 119));
    assert!((c.a - 0.7).abs() < 1e-12);
}

#[test]
fn channels_and_opacity_stay_bounded_over_many_trials() {
    let m = GradientMapper::default();
    let o = m.theme().opacity.clone();
    let mut rng = FastRand::with_seed(2024);
    let mut progress_rng = Rng64::new(11);
    for _ in 0..1000 {
        let p = progress_rng.range(-0.2, 1.2);
        let c = m.color_for(p, &mut rng);
        assert!(c.a >= o.low && c.a <= o.high, "opacity {} for p={p}", c.a);

        let [r, g, b] = m.base_color(p);
        for (got, base) in [(c.r, r), (c.g, g), (c.b, b)] {
            let lo = (base - 10.0).round().max(0.0);
            let hi = (base + 10.0).round().min(255.0);
            let got = f64::from(got);
            assert!(got >= lo && got <= hi, "channel {got} outside [{lo}, {hi}]");
        }
    }
}

#[test]
fn seeded_sources_are_reproducible() {
    let m = GradientMapper::default();
    let a: Vec<Rgba> = {
        let mut rng = Rng64::new(3);
        (0..20).map(|i| m.color_for(i as f64 / 19.0, &mut rng)).collect()
    };
    let b: Vec<Rgba> = {
        let mut rng = Rng64::new(3);
        (0..20).map(|i| m.color_for(i as f64 / 19.0, &mut rng)).collect()
    };
    assert_eq!(a, b);
}

#[test]
fn theme_overrides_are_honoured() {
    let mut theme = Theme::default();
    theme.ice_blue = Rgb8::new(0, 0, 0);
    theme.opacity.low = 0.4;
    theme.opacity.high = 0.4;
    let m = GradientMapper::new(theme);
    let c = m.color_for(0.0, &mut Midpoint);
    assert_eq!((c.r, c.g, c.b), (0, 0, 0));
    assert_eq!(c.a, 0.4);
}
