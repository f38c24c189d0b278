use crate::shape::point::HexPixel;

/// Correspondence chosen for one point of the current shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pairing {
    /// `current[index]` moves toward `next[next]`.
    Matched { index: usize, next: usize },
    /// The next shape ran out of points; `current[index]` stays put.
    Unmatched { index: usize },
}

/// Greedy nearest-`matching_value` pairing of `current` onto `next`.
///
/// Current points are visited in their given order. Each takes the unclaimed next point with
/// the smallest `|Δ matching_value|`; ties go to the lowest index still in the pool. No next point
/// is used twice. The result is order-dependent and not a globally optimal assignment.
/// Missing matching values count as 0.
pub fn greedy_match(current: &[HexPixel], next: &[HexPixel]) -> Vec<Pairing> {
    let mut pool: Vec<usize> = (0..next.len()).collect();

    current
        .iter()
        .enumerate()
        .map(|(index, cur)| {
            let target = cur.matching_or_zero();
            let mut best: Option<(usize, f64)> = None;
            for (slot, &candidate) in pool.iter().enumerate() {
                let diff = (next[candidate].matching_or_zero() - target).abs();
                match best {
                    Some((_, best_diff)) if diff >= best_diff => {}
                    _ => best = Some((slot, diff)),
                }
            }

            match best {
                Some((slot, _)) => Pairing::Matched {
                    index,
                    next: pool.remove(slot),
                },
                None => Pairing::Unmatched { index },
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/morph/matching.rs"]
mod tests;
