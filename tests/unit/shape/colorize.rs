use super::*;
use crate::foundation::rng::Rng64;
use std::collections::BTreeSet;

fn seeds(coords: &[(f64, f64)]) -> Vec<SeedPoint> {
    coords
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| SeedPoint::new(i as u32 + 1, x, y))
        .collect()
}

fn run(points: &[SeedPoint], direction: GradientDirection) -> Vec<HexPixel> {
    colorize(
        points,
        1.0,
        direction,
        &GradientMapper::default(),
        &mut Rng64::new(1),
    )
    .unwrap()
}

#[test]
fn matching_values_are_evenly_spaced_for_every_size() {
    let mut rng = Rng64::new(99);
    for n in 1..=40usize {
        let points: Vec<SeedPoint> = (0..n)
            .map(|i| SeedPoint::new(i as u32, rng.range(-50.0, 50.0), rng.range(0.0, 80.0)))
            .collect();
        let out = run(&points, GradientDirection::BottomLeftToTopRight);
        assert_eq!(out.len(), n);

        let mut got: Vec<f64> = out.iter().map(|p| p.matching_value.unwrap()).collect();
        got.sort_by(f64::total_cmp);
        for (k, v) in got.iter().enumerate() {
            let want = if n == 1 { 0.0 } else { k as f64 / (n - 1) as f64 };
            assert_eq!(*v, want, "n={n} k={k}");
        }
    }
}

#[test]
fn single_point_maps_to_zero() {
    let out = run(&seeds(&[(3.0, 4.0)]), GradientDirection::TopToBottom);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].matching_value, Some(0.0));
}

#[test]
fn output_is_sorted_by_spatial_progress_and_keeps_ids() {
    let points = seeds(&[(10.0, 0.0), (0.0, 0.0), (5.0, 0.0)]);
    let out = run(&points, GradientDirection::LeftToRight);
    let ids: Vec<u32> = out.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2, 3, 1]);
    assert_eq!(
        out.iter().map(|p| p.matching_value.unwrap()).collect::<Vec<_>>(),
        vec![0.0, 0.5, 1.0]
    );

    let input_ids: BTreeSet<u32> = points.iter().map(|p| p.id).collect();
    let output_ids: BTreeSet<u32> = out.iter().map(|p| p.id).collect();
    assert_eq!(input_ids, output_ids);
}

#[test]
fn degenerate_x_extent_normalizes_to_zero() {
    let points = seeds(&[(5.0, 0.0), (5.0, 10.0), (5.0, 20.0)]);

    let bounds = BoundingBox::of(&points).unwrap();
    for p in &points {
        assert_eq!(bounds.normalize(p).0, 0.0);
    }

    // Left-to-right only looks at x, so every point has progress 0 and the stable sort keeps
    // input order.
    let out = run(&points, GradientDirection::LeftToRight);
    assert_eq!(out.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    assert!(out.iter().all(|p| p.x == 5.0));
}

#[test]
fn fully_degenerate_box_does_not_panic() {
    let points = seeds(&[(1.0, 1.0), (1.0, 1.0)]);
    let out = run(&points, GradientDirection::BottomRightToTopLeft);
    assert_eq!(out.len(), 2);
    assert!(out.iter().all(|p| p.color.a.is_finite()));
}

#[test]
fn positions_are_scaled() {
    let points = seeds(&[(2.0, 3.0), (4.0, 5.0)]);
    let out = colorize(
        &points,
        1.5,
        GradientDirection::LeftToRight,
        &GradientMapper::default(),
        &mut Rng64::new(0),
    )
    .unwrap();
    assert_eq!((out[0].x, out[0].y), (3.0, 4.5));
    assert_eq!((out[1].x, out[1].y), (6.0, 7.5));
}

#[test]
fn invalid_scale_is_rejected() {
    let points = seeds(&[(0.0, 0.0)]);
    for scale in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        assert!(
            colorize(
                &points,
                scale,
                GradientDirection::LeftToRight,
                &GradientMapper::default(),
                &mut Rng64::new(0),
            )
            .is_err()
        );
    }
}

#[test]
fn empty_input_yields_empty_output() {
    assert!(run(&[], GradientDirection::LeftToRight).is_empty());
}

#[test]
fn colors_are_bounded_over_randomized_sets() {
    let mapper = GradientMapper::default();
    let (low, high) = (mapper.theme().opacity.low, mapper.theme().opacity.high);
    let mut rng = Rng64::new(1234);
    let points: Vec<SeedPoint> = (0..1000)
        .map(|i| SeedPoint::new(i, rng.range(0.0, 300.0), rng.range(0.0, 300.0)))
        .collect();
    for d in GradientDirection::ALL {
        let out = colorize(&points, 1.2, d, &mapper, &mut rng).unwrap();
        for p in out {
            assert!(p.color.a >= low && p.color.a <= high);
        }
    }
}

#[test]
fn matching_value_is_deterministic_while_color_may_vary() {
    let points = seeds(&[(0.0, 0.0), (1.0, 2.0), (3.0, 1.0), (2.0, 2.0)]);
    let mapper = GradientMapper::default();
    let d = GradientDirection::TopLeftToBottomRight;
    let a = colorize(&points, 1.0, d, &mapper, &mut Rng64::new(1)).unwrap();
    let b = colorize(&points, 1.0, d, &mapper, &mut Rng64::new(2)).unwrap();
    let key = |v: &[HexPixel]| {
        v.iter()
            .map(|p| (p.id, p.matching_value))
            .collect::<Vec<_>>()
    };
    assert_eq!(key(&a), key(&b));
}
