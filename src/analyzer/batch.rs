use crate::analyzer::{CollatzAnalyzer, SequenceAnalyzer};
use crate::analyzer::regions::region_stats;
use crate::model::{AnalysisResult, AnalyzeError, RegionStats, SequenceError, ValueRange};
use tracing::{info, warn};

/// One successfully analyzed number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzedNumber {
    /// Position in the input list; drives colour assignment.
    pub input_index: usize,
    pub result: AnalysisResult,
    pub regions: Option<RegionStats>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedNumber {
    pub input_index: usize,
    pub number: u64,
    pub error: SequenceError,
}

/// Everything a run needs for reporting and charting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub analyzed: Vec<AnalyzedNumber>,
    pub skipped: Vec<SkippedNumber>,
    /// Highest mr value over all numbers, 0 when none repeats.
    pub highest_mr: u64,
    pub collatz_range: Option<ValueRange>,
    pub m_range: Option<ValueRange>,
    /// Index into `analyzed` of the number whose labels get drawn.
    pub best_label: Option<usize>,
}

impl BatchSummary {
    pub fn best(&self) -> Option<(&AnalyzedNumber, &RegionStats)> {
        let entry = self.analyzed.get(self.best_label?)?;
        entry.regions.as_ref().map(|stats| (entry, stats))
    }
}

/// Running totals, updated in input order.
#[derive(Debug, Default)]
pub struct BatchAccumulator {
    analyzed: Vec<AnalyzedNumber>,
    skipped: Vec<SkippedNumber>,
    highest_mr: u64,
    collatz_range: Option<ValueRange>,
    m_range: Option<ValueRange>,
    best_label: Option<(usize, u64)>,
}

impl BatchAccumulator {
    pub fn absorb(&mut self, input_index: usize, result: AnalysisResult) {
        if let Some(pair) = result.mr_pair {
            self.highest_mr = self.highest_mr.max(pair.value);
        }
        self.collatz_range = merge_range(self.collatz_range, ValueRange::of(&result.collatz));
        self.m_range = merge_range(self.m_range, ValueRange::of(&result.m_sequence));

        let regions = region_stats(&result);
        if let Some(stats) = regions {
            // Strictly greater: the earliest number keeps the labels on a tie.
            let beats = self
                .best_label
                .is_none_or(|(_, best)| stats.between.value > best);
            if beats {
                self.best_label = Some((self.analyzed.len(), stats.between.value));
            }
        }

        self.analyzed.push(AnalyzedNumber {
            input_index,
            result,
            regions,
        });
    }

    pub fn skip(&mut self, input_index: usize, number: u64, error: SequenceError) {
        self.skipped.push(SkippedNumber {
            input_index,
            number,
            error,
        });
    }

    pub fn finish(self) -> Result<BatchSummary, AnalyzeError> {
        if self.analyzed.is_empty() {
            return Err(AnalyzeError::NothingAnalyzed);
        }
        Ok(BatchSummary {
            analyzed: self.analyzed,
            skipped: self.skipped,
            highest_mr: self.highest_mr,
            collatz_range: self.collatz_range,
            m_range: self.m_range,
            best_label: self.best_label.map(|(idx, _)| idx),
        })
    }
}

fn merge_range(acc: Option<ValueRange>, next: Option<ValueRange>) -> Option<ValueRange> {
    match (acc, next) {
        (Some(a), Some(b)) => Some(a.merge(b)),
        (a, b) => a.or(b),
    }
}

/// Runs the per-number pipeline over a list and aggregates the results.
pub struct BatchAnalyzer<A = CollatzAnalyzer> {
    analyzer: A,
}

impl BatchAnalyzer<CollatzAnalyzer> {
    pub fn new() -> Self {
        Self::with_analyzer(CollatzAnalyzer::new())
    }
}

impl<A: SequenceAnalyzer> BatchAnalyzer<A> {
    pub fn with_analyzer(analyzer: A) -> Self {
        Self { analyzer }
    }

    /// Rejects an empty list or any zero up front; after that a failing number
    /// is logged and skipped so the rest of the batch still goes through.
    pub fn analyze(&self, numbers: &[u64]) -> Result<BatchSummary, AnalyzeError> {
        if numbers.is_empty() {
            return Err(AnalyzeError::EmptyInput);
        }
        if let Some(&bad) = numbers.iter().find(|&&n| n == 0) {
            return Err(AnalyzeError::InvalidInput(bad));
        }

        let mut acc = BatchAccumulator::default();
        for (input_index, &n) in numbers.iter().enumerate() {
            match self.analyzer.analyze_number(n) {
                Ok(result) => {
                    info!(
                        "Analyzed n={}: {} steps, mr={:?}",
                        n,
                        result.collatz.len(),
                        result.mr_pair.map(|p| p.value)
                    );
                    acc.absorb(input_index, result);
                }
                Err(e) => {
                    warn!("Skipping n={}: {}", n, e);
                    acc.skip(input_index, n, e);
                }
            }
        }

        acc.finish()
    }
}
