use super::*;

#[test]
fn rng_is_deterministic() {
    let mut a = Rng64::new(123);
    let mut b = Rng64::new(123);
    for _ in 0..10 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

#[test]
fn unit_interval_is_half_open() {
    let mut rng = Rng64::new(9);
    for _ in 0..10_000 {
        let v = rng.next_f64();
        assert!((0.0..1.0).contains(&v));
    }
}

#[test]
fn symmetric_stays_within_amplitude() {
    let mut rng = FastRand::with_seed(42);
    for _ in 0..10_000 {
        let v = rng.symmetric(10.0);
        assert!((-10.0..10.0).contains(&v), "{v}");
    }
}

#[test]
fn index_never_reaches_len() {
    let mut rng = Rng64::new(5);
    for _ in 0..1_000 {
        assert!(rng.index(4) < 4);
    }
}

#[test]
fn boxed_and_borrowed_sources_delegate() {
    let mut direct = Rng64::new(77);
    let expected = direct.next_f64();

    let mut boxed = source_for(Some(77));
    assert_eq!(boxed.next_f64(), expected);

    let mut inner = Rng64::new(77);
    let borrowed: &mut dyn RandomSource = &mut inner;
    assert_eq!(borrowed.next_f64(), expected);
}

#[test]
fn chance_extremes() {
    let mut rng = Rng64::new(1);
    assert!((0..100).all(|_| !rng.chance(0.0)));
    assert!((0..100).all(|_| rng.chance(1.0)));
}
