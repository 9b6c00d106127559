use crate::analyzer::BatchSummary;
use crate::model::AnalysisResult;
use crate::utils::{bracket_marked, list_display};
use std::io::{self, Write};
use std::path::Path;

/// Formats the per-number analysis block.
pub fn format_analysis(result: &AnalysisResult) -> String {
    let reversed_m = result.reversed_m_sequence();
    let mut lines = vec![
        format!("=== Analysis for n={} ===", result.number),
        format!("Collatz sequence: {}", list_display(&result.collatz)),
        format!(
            "Collatz sequence reversed: {}",
            list_display(&result.reversed_collatz())
        ),
    ];

    match (result.mr_pair, result.reversed_mr_positions()) {
        (Some(pair), Some((first_rev, second_rev))) => {
            lines.push(format!(
                "m sequence: {}",
                bracket_marked(&result.m_sequence, &[pair.first_index, pair.second_index])
            ));
            lines.push(format!(
                "m inverted: {}",
                bracket_marked(&reversed_m, &[first_rev, second_rev])
            ));
            lines.push(format!("First mr value: {}", pair.value));
            lines.push(format!(
                "mr positions in original m sequence: {}, {}",
                pair.first_index, pair.second_index
            ));
            lines.push(format!(
                "mr positions in inverted m sequence: {}, {}",
                first_rev, second_rev
            ));
        }
        _ => {
            lines.push(format!("m sequence: {}", list_display(&result.m_sequence)));
            lines.push(format!("m inverted: {}", list_display(&reversed_m)));
            lines.push("No mr pair found".to_string());
        }
    }

    lines.join("\n")
}

/// One-line run summary, optionally naming the chart that was written.
pub fn format_summary(summary: &BatchSummary, artifact: Option<&Path>) -> String {
    let mut line = format!(
        "Analyzed {} number(s), skipped {}; highest mr value: {}",
        summary.analyzed.len(),
        summary.skipped.len(),
        summary.highest_mr
    );
    if let Some(path) = artifact {
        line.push_str(&format!("; chart saved as: {}", path.display()));
    }
    line
}

/// Writes reports to stdout.
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }

    pub fn report_batch(&self, summary: &BatchSummary) -> io::Result<()> {
        self.write_batch(&mut io::stdout().lock(), summary)
    }

    pub fn report_summary(&self, summary: &BatchSummary, artifact: Option<&Path>) -> io::Result<()> {
        writeln!(io::stdout().lock(), "{}", format_summary(summary, artifact))
    }

    /// Writes one block per input number, in input order, skipped ones included.
    pub fn write_batch<W: Write>(&self, out: &mut W, summary: &BatchSummary) -> io::Result<()> {
        let mut blocks: Vec<(usize, String)> = summary
            .analyzed
            .iter()
            .map(|entry| (entry.input_index, format_analysis(&entry.result)))
            .chain(summary.skipped.iter().map(|skipped| {
                (
                    skipped.input_index,
                    format!("Error for n={}: {}", skipped.number, skipped.error),
                )
            }))
            .collect();
        blocks.sort_by_key(|(input_index, _)| *input_index);

        for (_, block) in blocks {
            writeln!(out, "\n{}", block)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::{BatchAnalyzer, CollatzAnalyzer, SequenceAnalyzer};

    #[test]
    fn report_marks_pair_in_both_directions() {
        let result = CollatzAnalyzer::new().analyze_number(3).unwrap();
        let text = format_analysis(&result);
        let expected = "\
=== Analysis for n=3 ===
Collatz sequence: [3, 10, 5, 16, 8, 4, 2, 1, 4, 2, 1]
Collatz sequence reversed: [1, 2, 4, 1, 2, 4, 8, 16, 5, 10, 3]
m sequence: [1], 4, 2, 7, 3, [1], 0, 0, 1, 0
m inverted: 0, 1, 0, 0, [1], 3, 7, 2, 4, [1]
First mr value: 1
mr positions in original m sequence: 0, 5
mr positions in inverted m sequence: 4, 9";
        assert_eq!(text, expected);
    }

    #[test]
    fn report_without_pair_says_so() {
        let result = AnalysisResult {
            number: 9,
            collatz: vec![9, 8, 7],
            m_sequence: vec![4, 3],
            mr_pair: None,
        };
        let text = format_analysis(&result);
        assert!(text.contains("m sequence: [4, 3]"));
        assert!(text.contains("m inverted: [3, 4]"));
        assert!(text.ends_with("No mr pair found"));
    }

    #[test]
    fn summary_names_highest_mr_and_artifact() {
        let summary = BatchAnalyzer::new().analyze(&[3, 7]).unwrap();
        let line = format_summary(&summary, Some(Path::new("class_mr_3_visualization.svg")));
        assert_eq!(
            line,
            "Analyzed 2 number(s), skipped 0; highest mr value: 3; \
             chart saved as: class_mr_3_visualization.svg"
        );
    }

    #[test]
    fn skipped_numbers_are_reported_in_place() {
        let summary = BatchAnalyzer::new().analyze(&[3, u64::MAX, 7]).unwrap();
        assert_eq!(summary.skipped.len(), 1);
        let mut buf = Vec::new();
        ConsoleReporter::new().write_batch(&mut buf, &summary).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let three = text.find("=== Analysis for n=3 ===").unwrap();
        let failed = text.find(&format!("Error for n={}:", u64::MAX)).unwrap();
        let seven = text.find("=== Analysis for n=7 ===").unwrap();
        assert!(three < failed && failed < seven);
    }

    #[test]
    fn batch_report_lists_every_number() {
        let summary = BatchAnalyzer::new().analyze(&[1, 2]).unwrap();
        let mut buf = Vec::new();
        ConsoleReporter::new().write_batch(&mut buf, &summary).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("=== Analysis for n=1 ==="));
        assert!(text.contains("=== Analysis for n=2 ==="));
        assert!(text.contains("m sequence: [0], 1, [0]"));
    }
}
