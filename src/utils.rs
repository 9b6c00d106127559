// Utility functions

/// Position of `index` once a sequence of length `len` is read back to front.
pub fn reversed_index(len: usize, index: usize) -> usize {
    len - 1 - index
}

/// Renders a sequence as `a, b, [c], d` with the given positions bracketed.
pub fn bracket_marked(values: &[u64], marked: &[usize]) -> String {
    values
        .iter()
        .enumerate()
        .map(|(idx, val)| {
            if marked.contains(&idx) {
                format!("[{}]", val)
            } else {
                val.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders a sequence as `[a, b, c]`.
pub fn list_display(values: &[u64]) -> String {
    let inner = values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversed_index_mirrors_positions() {
        assert_eq!(reversed_index(10, 0), 9);
        assert_eq!(reversed_index(10, 9), 0);
        assert_eq!(reversed_index(1, 0), 0);
    }

    #[test]
    fn bracket_marked_wraps_only_marked_positions() {
        assert_eq!(bracket_marked(&[5, 3, 5, 3], &[0, 2]), "[5], 3, [5], 3");
        assert_eq!(bracket_marked(&[1, 0], &[]), "1, 0");
    }

    #[test]
    fn list_display_matches_sequence_notation() {
        assert_eq!(list_display(&[2, 1, 4, 2, 1]), "[2, 1, 4, 2, 1]");
        assert_eq!(list_display(&[]), "[]");
    }
}
