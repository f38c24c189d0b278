use super::*;
use rstest::rstest;

// Corners of a 2x2 bounding box, normalized: (0,0) (1,0) (0,1) (1,1).
const CORNERS: [(f64, f64); 4] = [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)];

#[rstest]
#[case::bottom_left_to_top_right(GradientDirection::BottomLeftToTopRight, [0.5, 1.0, 0.0, 0.5])]
#[case::top_left_to_bottom_right(GradientDirection::TopLeftToBottomRight, [0.0, 0.5, 0.5, 1.0])]
#[case::left_to_right(GradientDirection::LeftToRight, [0.0, 1.0, 0.0, 1.0])]
#[case::right_to_left(GradientDirection::RightToLeft, [1.0, 0.0, 1.0, 0.0])]
#[case::bottom_to_top(GradientDirection::BottomToTop, [1.0, 1.0, 0.0, 0.0])]
#[case::top_to_bottom(GradientDirection::TopToBottom, [0.0, 0.0, 1.0, 1.0])]
#[case::top_right_to_bottom_left(GradientDirection::TopRightToBottomLeft, [0.5, 0.0, 1.0, 0.5])]
#[case::bottom_right_to_top_left(GradientDirection::BottomRightToTopLeft, [1.0, 0.5, 0.5, 0.0])]
fn corner_progress_matches_table(#[case] direction: GradientDirection, #[case] expected: [f64; 4]) {
    for ((x, y), want) in CORNERS.into_iter().zip(expected) {
        let got = progress_for(x, y, direction);
        assert!(
            (got - want).abs() < 1e-12,
            "{direction} at ({x},{y}): got {got}, want {want}"
        );
    }
}

#[rstest]
#[case(0.25, 0.75)]
#[case(0.6, 0.1)]
#[case(0.0, 0.3)]
fn interior_points_follow_formula(#[case] x: f64, #[case] y: f64) {
    let expect = [
        (GradientDirection::BottomLeftToTopRight, (x + (1.0 - y)) / 2.0),
        (GradientDirection::TopLeftToBottomRight, (x + y) / 2.0),
        (GradientDirection::LeftToRight, x),
        (GradientDirection::RightToLeft, 1.0 - x),
        (GradientDirection::BottomToTop, 1.0 - y),
        (GradientDirection::TopToBottom, y),
        (GradientDirection::TopRightToBottomLeft, ((1.0 - x) + y) / 2.0),
        (GradientDirection::BottomRightToTopLeft, ((1.0 - x) + (1.0 - y)) / 2.0),
    ];
    for (d, want) in expect {
        assert!((d.progress(x, y) - want).abs() < 1e-12, "{d}");
    }
}

#[test]
fn outputs_stay_in_unit_interval() {
    for d in GradientDirection::ALL {
        for x in [-1.0, 0.0, 0.3, 1.0, 2.0, f64::NAN] {
            for y in [-0.5, 0.0, 0.9, 1.0, 4.0] {
                let p = progress_for(x, y, d);
                assert!((0.0..=1.0).contains(&p), "{d} ({x},{y}) -> {p}");
            }
        }
    }
}

#[test]
fn unknown_names_fall_back_to_left_to_right() {
    assert_eq!(
        GradientDirection::parse_lossy("diagonal-ish"),
        GradientDirection::LeftToRight
    );
    assert_eq!(
        "".parse::<GradientDirection>().unwrap(),
        GradientDirection::LeftToRight
    );
    assert_eq!(GradientDirection::parse_strict("sideways"), None);

    let fallback = GradientDirection::parse_lossy("nope");
    assert_eq!(fallback.progress(0.3, 0.8), 0.3);
}

#[test]
fn names_round_trip_through_serde() {
    for d in GradientDirection::ALL {
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, format!("\"{}\"", d.as_str()));
        let back: GradientDirection = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
    }
    let unknown: GradientDirection = serde_json::from_str("\"spiral\"").unwrap();
    assert_eq!(unknown, GradientDirection::LeftToRight);
}
