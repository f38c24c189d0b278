use super::*;
use crate::encode::sink::InMemorySink;
use crate::foundation::core::Canvas;
use crate::shape::model::Shape;
use crate::shape::point::SeedPoint;
use crate::shape::source::StaticPoints;
use crate::stage::StageOptions;

fn stage() -> Stage {
    let a = StaticPoints(vec![SeedPoint::new(1, 0.0, 0.0), SeedPoint::new(2, 10.0, 0.0)]);
    let b = StaticPoints(vec![SeedPoint::new(1, 0.0, 30.0), SeedPoint::new(2, 10.0, 30.0)]);
    let opts = StageOptions {
        seed: Some(3),
        ..StageOptions::new(Canvas::new(32, 24).unwrap())
    };
    Stage::new(vec![Shape::new("a", a), Shape::new("b", b)], opts).unwrap()
}

#[test]
fn sweep_progress_spans_zero_to_one() {
    assert_eq!(sweep_progress(0, 5), 0.0);
    assert_eq!(sweep_progress(2, 5), 0.5);
    assert_eq!(sweep_progress(4, 5), 1.0);
    assert_eq!(sweep_progress(9, 5), 1.0);
    assert_eq!(sweep_progress(0, 1), 0.0);
}

#[test]
fn sweep_pushes_every_frame_in_order() {
    let mut stage = stage();
    let mut sink = InMemorySink::new();
    let opts = SweepOpts {
        frames: 6,
        fps: 30,
        warmup: 4,
    };
    render_sweep(&mut stage, opts, &mut sink).unwrap();

    assert!(sink.is_finished());
    assert_eq!(
        sink.config(),
        Some(SinkConfig {
            width: 32,
            height: 24,
            fps: 30
        })
    );
    let indices: Vec<u64> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(indices, vec![0, 1, 2, 3, 4, 5]);
    assert_eq!(stage.progress(), 1.0);
    assert_eq!(stage.frame_index(), FrameIndex(6));
}

#[test]
fn empty_sweep_is_rejected() {
    let mut stage = stage();
    let mut sink = InMemorySink::new();
    let opts = SweepOpts {
        frames: 0,
        fps: 30,
        warmup: 0,
    };
    assert!(render_sweep(&mut stage, opts, &mut sink).is_err());
    assert!(sink.frames().is_empty());
}
