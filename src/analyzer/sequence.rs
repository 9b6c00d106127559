use crate::model::{CollatzSequence, SequenceError};

/// One extra lap around the trivial cycle, appended after the walk reaches 1.
const TRIVIAL_CYCLE_TAIL: [u64; 3] = [4, 2, 1];

/// Generates the Collatz sequence for `n`: halve when even, `3n+1` when odd,
/// until 1 is reached, then `4, 2, 1` once more.
///
/// There is no step bound; termination rests on the conjecture holding for
/// every input this is fed. The odd step uses checked arithmetic, so a walk
/// that leaves the `u64` range reports [`SequenceError::Overflow`] instead of
/// wrapping.
pub fn collatz_sequence(n: u64) -> Result<CollatzSequence, SequenceError> {
    if n == 0 {
        return Err(SequenceError::InvalidInput(n));
    }

    let mut sequence = vec![n];
    let mut current = n;
    while current != 1 {
        current = if current % 2 == 0 {
            current / 2
        } else {
            current
                .checked_mul(3)
                .and_then(|v| v.checked_add(1))
                .ok_or(SequenceError::Overflow { start: n, at: current })?
        };
        sequence.push(current);
    }
    sequence.extend_from_slice(&TRIVIAL_CYCLE_TAIL);

    Ok(sequence)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_yields_a_single_trivial_lap() {
        assert_eq!(collatz_sequence(1).unwrap(), vec![1, 4, 2, 1]);
    }

    #[test]
    fn two_halves_then_laps() {
        assert_eq!(collatz_sequence(2).unwrap(), vec![2, 1, 4, 2, 1]);
    }

    #[test]
    fn three_follows_the_full_walk() {
        assert_eq!(
            collatz_sequence(3).unwrap(),
            vec![3, 10, 5, 16, 8, 4, 2, 1, 4, 2, 1]
        );
    }

    #[test]
    fn every_sequence_ends_in_the_trivial_cycle_and_stays_positive() {
        for n in 1..=500u64 {
            let seq = collatz_sequence(n).unwrap();
            assert!(seq.len() >= 4, "n={n}");
            assert_eq!(&seq[seq.len() - 4..], &[1, 4, 2, 1], "n={n}");
            assert!(seq.iter().all(|&v| v > 0), "n={n}");
            assert_eq!(seq[0], n);
        }
    }

    #[test]
    fn zero_is_rejected() {
        assert_eq!(collatz_sequence(0), Err(SequenceError::InvalidInput(0)));
    }

    #[test]
    fn overflowing_odd_step_is_reported() {
        let n = u64::MAX;
        assert_eq!(
            collatz_sequence(n),
            Err(SequenceError::Overflow { start: n, at: n })
        );
    }

    #[test]
    fn generation_is_repeatable() {
        assert_eq!(collatz_sequence(27).unwrap(), collatz_sequence(27).unwrap());
    }
}
