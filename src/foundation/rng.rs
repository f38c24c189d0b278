/// Source of uniform random numbers used for visual-variety jitter.
///
/// Production code uses [`FastRand`]; tests and reproducible renders use the seeded [`Rng64`].
pub trait RandomSource {
    /// Uniform value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform value in `[-amplitude, amplitude)`.
    fn symmetric(&mut self, amplitude: f64) -> f64 {
        self.next_f64() * 2.0 * amplitude - amplitude
    }

    /// Uniform value in `[min, max)`.
    fn range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }

    /// Returns `true` with probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        ((self.next_f64() * len as f64) as usize).min(len.saturating_sub(1))
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Rng64 {
    state: u64,
}

impl Rng64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        // SplitMix64
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    pub fn next_f64_01(&mut self) -> f64 {
        // 53 bits of precision.
        let v = self.next_u64() >> 11;
        (v as f64) * (1.0 / ((1u64 << 53) as f64))
    }
}

impl RandomSource for Rng64 {
    fn next_f64(&mut self) -> f64 {
        self.next_f64_01()
    }
}

/// Entropy-seeded generator backed by `fastrand`.
#[derive(Clone, Debug)]
pub struct FastRand(fastrand::Rng);

impl FastRand {
    pub fn new() -> Self {
        Self(fastrand::Rng::new())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self(fastrand::Rng::with_seed(seed))
    }
}

impl Default for FastRand {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for FastRand {
    fn next_f64(&mut self) -> f64 {
        self.0.f64()
    }
}

/// Build the random source for a render: seeded when `seed` is set, entropy-seeded otherwise.
pub fn source_for(seed: Option<u64>) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => Box::new(Rng64::new(seed)),
        None => Box::new(FastRand::new()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/rng.rs"]
mod tests;
