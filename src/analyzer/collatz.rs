use crate::analyzer::m_transform::m_sequence;
use crate::analyzer::repeat::find_first_repeat;
use crate::analyzer::sequence::collatz_sequence;
use crate::model::{AnalysisResult, CollatzSequence, MrPair, SequenceError, Transform};
use tracing::warn;

/// Trait defining the per-number analysis pipeline.
pub trait SequenceAnalyzer {
    fn generate(&self, n: u64) -> Result<CollatzSequence, SequenceError>;

    /// Collatz sequence together with its m-sequence.
    fn transform(&self, n: u64) -> Result<Transform, SequenceError> {
        let collatz = self.generate(n)?;
        let m_sequence = m_sequence(&collatz);
        Ok(Transform { collatz, m_sequence })
    }

    /// First mr pair for `n`. A failed transform is logged and reported as no pair.
    #[allow(dead_code)]
    fn first_repeat(&self, n: u64) -> Option<MrPair> {
        match self.transform(n) {
            Ok(t) => find_first_repeat(&t.m_sequence),
            Err(e) => {
                warn!("Transform unavailable for n={}: {}", n, e);
                None
            }
        }
    }

    /// Full result for one number, with the mr pair computed once.
    fn analyze_number(&self, n: u64) -> Result<AnalysisResult, SequenceError> {
        let Transform { collatz, m_sequence } = self.transform(n)?;
        let mr_pair = find_first_repeat(&m_sequence);
        Ok(AnalysisResult {
            number: n,
            collatz,
            m_sequence,
            mr_pair,
        })
    }
}

/// Standard `3n+1` analyzer.
#[derive(Debug, Default, Clone, Copy)]
pub struct CollatzAnalyzer;

impl CollatzAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl SequenceAnalyzer for CollatzAnalyzer {
    fn generate(&self, n: u64) -> Result<CollatzSequence, SequenceError> {
        collatz_sequence(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_and_seven_have_expected_pairs() {
        let analyzer = CollatzAnalyzer::new();
        assert_eq!(
            analyzer.first_repeat(3),
            Some(MrPair { value: 1, first_index: 0, second_index: 5 })
        );
        assert_eq!(
            analyzer.first_repeat(7),
            Some(MrPair { value: 3, first_index: 0, second_index: 13 })
        );
    }

    #[test]
    fn small_numbers_repeat_inside_the_trivial_cycle() {
        let analyzer = CollatzAnalyzer::new();
        assert_eq!(
            analyzer.first_repeat(1),
            Some(MrPair { value: 0, first_index: 0, second_index: 2 })
        );
        assert_eq!(
            analyzer.first_repeat(2),
            Some(MrPair { value: 0, first_index: 0, second_index: 1 })
        );
    }

    #[test]
    fn failed_transform_reads_as_no_pair() {
        let analyzer = CollatzAnalyzer::new();
        assert_eq!(analyzer.first_repeat(0), None);
        assert_eq!(analyzer.first_repeat(u64::MAX), None);
        assert!(analyzer.transform(0).is_err());
    }

    #[test]
    fn analyze_number_matches_the_separate_steps() {
        let analyzer = CollatzAnalyzer::new();
        let result = analyzer.analyze_number(27).unwrap();
        let transform = analyzer.transform(27).unwrap();
        assert_eq!(result.collatz, transform.collatz);
        assert_eq!(result.m_sequence, transform.m_sequence);
        assert_eq!(result.mr_pair, analyzer.first_repeat(27));
    }

    #[test]
    fn every_stage_is_idempotent() {
        let analyzer = CollatzAnalyzer::new();
        for n in [1u64, 6, 27, 97] {
            assert_eq!(analyzer.generate(n), analyzer.generate(n));
            assert_eq!(analyzer.transform(n), analyzer.transform(n));
            assert_eq!(analyzer.first_repeat(n), analyzer.first_repeat(n));
        }
    }
}
