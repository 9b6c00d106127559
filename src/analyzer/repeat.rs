use crate::model::MrPair;
use std::collections::HashMap;

/// Scans left to right and returns the first repeat to complete.
///
/// The winner is decided by where the second occurrence lands, not by the
/// value or by which value appeared first.
pub fn find_first_repeat(m_sequence: &[u64]) -> Option<MrPair> {
    let mut seen: HashMap<u64, usize> = HashMap::new();
    for (index, &value) in m_sequence.iter().enumerate() {
        if let Some(&first_index) = seen.get(&value) {
            return Some(MrPair {
                value,
                first_index,
                second_index: index,
            });
        }
        seen.insert(value, index);
    }
    None
}
