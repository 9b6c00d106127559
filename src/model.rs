// Core structs: AnalysisResult, MrPair, RegionStats and the error enums
use crate::utils::reversed_index;
use std::path::PathBuf;
use thiserror::Error;

/// Collatz values from the start number down to 1, plus one trailing `4, 2, 1`.
pub type CollatzSequence = Vec<u64>;

/// Parity-halved companion of a Collatz sequence, one element shorter.
pub type MSequence = Vec<u64>;

/// First value that occurs twice in an m-sequence, with both 0-based positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MrPair {
    pub value: u64,
    pub first_index: usize,
    pub second_index: usize,
}

impl MrPair {
    /// Positions of the pair once the sequence of length `len` is reversed.
    /// Reversal swaps the order, so the second occurrence comes first.
    pub fn reversed_positions(&self, len: usize) -> (usize, usize) {
        (
            reversed_index(len, self.second_index),
            reversed_index(len, self.first_index),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transform {
    pub collatz: CollatzSequence,
    pub m_sequence: MSequence,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    pub number: u64,
    pub collatz: CollatzSequence,
    pub m_sequence: MSequence,
    pub mr_pair: Option<MrPair>,
}

impl AnalysisResult {
    pub fn reversed_collatz(&self) -> Vec<u64> {
        self.collatz.iter().rev().copied().collect()
    }

    pub fn reversed_m_sequence(&self) -> Vec<u64> {
        self.m_sequence.iter().rev().copied().collect()
    }

    pub fn reversed_mr_positions(&self) -> Option<(usize, usize)> {
        self.mr_pair
            .map(|pair| pair.reversed_positions(self.m_sequence.len()))
    }
}

/// Largest value inside a region of the reversed m-sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionMax {
    pub position: usize,
    pub value: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionStats {
    pub first_reversed: usize,
    pub second_reversed: usize,
    /// Over `[0, first_reversed]`.
    pub before_first: RegionMax,
    /// Over `[first_reversed, second_reversed]`.
    pub between: RegionMax,
}

/// Inclusive min/max over a set of sequence values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueRange {
    pub min: u64,
    pub max: u64,
}

impl ValueRange {
    pub fn of(values: &[u64]) -> Option<Self> {
        let min = *values.iter().min()?;
        let max = *values.iter().max()?;
        Some(Self { min, max })
    }

    pub fn merge(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    pub fn span(&self) -> u64 {
        self.max - self.min
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    #[error("number must be positive, got {0}")]
    InvalidInput(u64),
    #[error("3n+1 overflowed u64 at {at} while following n={start}")]
    Overflow { start: u64, at: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyzeError {
    #[error("at least one number is required")]
    EmptyInput,
    #[error("all numbers must be positive integers, got {0}")]
    InvalidInput(u64),
    #[error("no number could be analyzed")]
    NothingAnalyzed,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParserError {
    #[error("'{0}' is not an integer")]
    NotAnInteger(String),
    #[error("all numbers must be positive integers, got {0}")]
    NonPositive(i128),
    #[error("{0} does not fit in 64 bits")]
    OutOfRange(i128),
    #[error("at least one number is required")]
    Empty,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("nothing to draw")]
    NothingToDraw,
    #[error("chart backend error: {0}")]
    Backend(String),
    #[error("cannot prepare output: {0}")]
    Io(#[from] std::io::Error),
}
