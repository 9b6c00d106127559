use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Visualize Collatz sequences and their m-transforms with mr-pair analysis",
    after_help = "Examples:\n  mr-classes \"3,7,12,27\"\n  mr-classes \"3, 7, 12, 27\" --output-dir charts"
)]
pub struct Args {
    /// Positive integers separated by commas (spaces optional)
    #[arg(value_name = "NUMBERS")]
    pub numbers: String,

    /// Path to config JSON
    #[arg(long, default_value = "mr_classes.json")]
    pub config: PathBuf,

    /// Directory for the chart (overrides config)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Print the analysis only, without writing a chart
    #[arg(long, default_value_t = false)]
    pub no_chart: bool,
}

pub fn parse_args() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_positional() {
        let args = Args::try_parse_from(["mr-classes", "3,7"]).unwrap();
        assert_eq!(args.numbers, "3,7");
        assert_eq!(args.config, PathBuf::from("mr_classes.json"));
        assert!(args.output_dir.is_none());
        assert!(!args.no_chart);
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::try_parse_from([
            "mr-classes",
            "3, 7",
            "--output-dir",
            "charts",
            "--no-chart",
        ])
        .unwrap();
        assert_eq!(args.output_dir, Some(PathBuf::from("charts")));
        assert!(args.no_chart);
    }

    #[test]
    fn numbers_are_required() {
        assert!(Args::try_parse_from(["mr-classes"]).is_err());
    }
}
