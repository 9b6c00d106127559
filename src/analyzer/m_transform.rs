use crate::model::MSequence;

/// Parity factor of a Collatz value: 1 for odd (the next step is `3c+1`),
/// 2 for even (the next step is `c/2`).
pub fn parity_factor(value: u64) -> u64 {
    if value % 2 == 1 { 1 } else { 2 }
}

/// Derives the m-sequence: `m[i] = (c[i] - p) / 2` for every value that has a
/// successor, so the result is one element shorter than `collatz`.
pub fn m_sequence(collatz: &[u64]) -> MSequence {
    collatz
        .windows(2)
        .map(|pair| {
            let c = pair[0];
            // c >= 1 always, and c - p is even by construction of p.
            (c - parity_factor(c)) / 2
        })
        .collect()
}
