use std::path::PathBuf;

use clap::Parser;

use crate::config::CollectorKind;
use crate::input::InputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "license-vetter",
    about = "Report dependency license evaluations that need manual IP review",
    version
)]
pub struct Cli {
    /// Evaluated license records; `-` reads stdin
    #[arg(default_value = "-")]
    pub input: PathBuf,

    /// Input format [default: json for *.json, summary otherwise]
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<InputFormat>,

    /// Collector receiving the records [default: from config, else summary]
    #[arg(long, value_name = "KIND")]
    pub collector: Option<CollectorKind>,

    /// Write the report to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Config file [default: ./.license-vetter/config.toml, fallback ~/.config/license-vetter/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Show a per-status breakdown and debug logs
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["license-vetter"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("-"));
        assert!(cli.collector.is_none());
        assert!(cli.format.is_none());
    }

    #[test]
    fn test_collector_and_format() {
        let cli = Cli::try_parse_from([
            "license-vetter",
            "deps.txt",
            "--collector",
            "review",
            "--format",
            "json",
            "-o",
            "requests.md",
        ])
        .unwrap();
        assert_eq!(cli.collector, Some(CollectorKind::Review));
        assert_eq!(cli.format, Some(InputFormat::Json));
        assert_eq!(cli.output, Some(PathBuf::from("requests.md")));
    }
}
