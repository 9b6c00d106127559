use crate::model::{AnalysisResult, RegionMax, RegionStats};

/// Largest value in `values[start..=end]`; the earliest position wins ties.
/// An all-zero region reports value 0 at `start`.
pub fn region_max(values: &[u64], start: usize, end: usize) -> RegionMax {
    let mut best = RegionMax { position: start, value: 0 };
    if values.is_empty() {
        return best;
    }
    let end = end.min(values.len() - 1);
    for pos in start..=end {
        if values[pos] > best.value {
            best = RegionMax { position: pos, value: values[pos] };
        }
    }
    best
}

/// Region maxima over the reversed m-sequence for a result with an mr pair:
/// up to the first reversed occurrence, and between the two occurrences.
pub fn region_stats(result: &AnalysisResult) -> Option<RegionStats> {
    let (first_reversed, second_reversed) = result.reversed_mr_positions()?;
    let reversed = result.reversed_m_sequence();
    if second_reversed >= reversed.len() {
        return None;
    }

    Some(RegionStats {
        first_reversed,
        second_reversed,
        before_first: region_max(&reversed, 0, first_reversed),
        between: region_max(&reversed, first_reversed, second_reversed),
    })
}
