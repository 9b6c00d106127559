// Analyzer module: sequence generation, the m-transform, repeat detection and
// the batch statistics built on top of them.

pub mod batch;
pub mod collatz;
pub mod m_transform;
pub mod regions;
pub mod repeat;
pub mod sequence;
pub mod ticks;

// Re-export the main entry points for ease of use.
pub use batch::{BatchAnalyzer, BatchSummary};
pub use collatz::{CollatzAnalyzer, SequenceAnalyzer};
