mod analyzer;
mod cli;
mod config;
mod model;
mod parser;
mod render;
mod report;
mod utils;

use analyzer::BatchAnalyzer;
use config::load_config;
use parser::{NumberListParser, Parser};
use render::{ChartLayout, SvgRenderer, render_to_dir};
use report::ConsoleReporter;
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        error!("Panic occurred: {}", panic_info);
    }));

    let args = cli::parse_args();

    let mut config = match load_config(&args.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Some(dir) = args.output_dir.clone() {
        config.output_dir = dir;
    }

    let numbers = match NumberListParser::new().parse(&args.numbers) {
        Ok(n) => n,
        Err(e) => {
            error!("Invalid number list: {}", e);
            error!("Example: '3,7,12,27' or '3, 7, 12, 27'");
            return ExitCode::FAILURE;
        }
    };
    info!("Generating Collatz analysis for: {:?}", numbers);

    let summary = match BatchAnalyzer::new().analyze(&numbers) {
        Ok(s) => s,
        Err(e) => {
            error!("Analysis failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let reporter = ConsoleReporter::new();
    if let Err(e) = reporter.report_batch(&summary) {
        warn!("Failed to write report: {}", e);
    }

    let artifact = if args.no_chart {
        None
    } else {
        let rendered = ChartLayout::build(&summary, &config).and_then(|layout| {
            let renderer = SvgRenderer::new(config.width, config.height);
            render_to_dir(&renderer, &layout, &config.output_dir)
        });
        match rendered {
            Ok(path) => Some(path),
            Err(e) => {
                error!("Error generating visualization: {}", e);
                return ExitCode::FAILURE;
            }
        }
    };

    if let Err(e) = reporter.report_summary(&summary, artifact.as_deref()) {
        warn!("Failed to write summary: {}", e);
    }
    ExitCode::SUCCESS
}
