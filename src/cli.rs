use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rescore")]
#[command(about = "Response-style bias correction for multi-category ratings", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase verbosity (-v shows style rules and global statistics, -vv debug logs)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Correct one ratings file and print the report
    Correct {
        /// Ratings file (JSON or YAML)
        input: PathBuf,

        /// Output format (defaults to the config file setting, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Export the full run as JSON; without a path a timestamped file name is used
        #[arg(long, num_args = 0..=1, value_name = "PATH")]
        export: Option<Option<PathBuf>>,

        /// Plain output (ASCII only, no colors)
        #[arg(long)]
        plain: bool,

        #[command(flatten)]
        correction: CorrectionArgs,
    },

    /// Correct many ratings files in parallel
    Batch {
        /// Ratings files (JSON or YAML)
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Directory receiving one exported run per input
        #[arg(long)]
        output_dir: Option<PathBuf>,

        #[command(flatten)]
        correction: CorrectionArgs,
    },

    /// Check a ratings file without correcting it
    Validate {
        /// Ratings file (JSON or YAML)
        input: PathBuf,
    },

    /// Write a default .rescore.toml to the current directory
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Run the correction on built-in sample data
    Demo {
        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Plain output (ASCII only, no colors)
        #[arg(long)]
        plain: bool,
    },
}

/// Correction parameters accepted by every correcting command.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct CorrectionArgs {
    /// Configuration file (defaults to .rescore.toml discovery)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Maximum acquiescence adjustment, between 0 and 1
    #[arg(long)]
    pub max_global_adjustment: Option<f64>,

    /// Maximum relative adjustment, between 0 and 1
    #[arg(long)]
    pub max_relative_adjustment: Option<f64>,

    /// Lower bound for corrected scores
    #[arg(long)]
    pub min_score: Option<f64>,

    /// Upper bound for corrected scores
    #[arg(long)]
    pub max_score: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::output::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_conversion() {
        assert_eq!(
            crate::io::output::OutputFormat::from(OutputFormat::Json),
            crate::io::output::OutputFormat::Json
        );
        assert_eq!(
            crate::io::output::OutputFormat::from(OutputFormat::Markdown),
            crate::io::output::OutputFormat::Markdown
        );
        assert_eq!(
            crate::io::output::OutputFormat::from(OutputFormat::Terminal),
            crate::io::output::OutputFormat::Terminal
        );
    }

    #[test]
    fn test_cli_parsing_correct_command() {
        let args = vec![
            "rescore",
            "correct",
            "ratings.json",
            "--format",
            "json",
            "--max-global-adjustment",
            "0.2",
            "--min-score",
            "1.5",
        ];

        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Correct {
                input,
                format,
                export,
                correction,
                ..
            } => {
                assert_eq!(input, PathBuf::from("ratings.json"));
                assert_eq!(format, Some(OutputFormat::Json));
                assert_eq!(export, None);
                assert_eq!(correction.max_global_adjustment, Some(0.2));
                assert_eq!(correction.min_score, Some(1.5));
                assert_eq!(correction.max_score, None);
            }
            _ => panic!("Expected Correct command"),
        }
    }

    #[test]
    fn test_export_flag_with_and_without_path() {
        let cli = Cli::parse_from(["rescore", "correct", "r.json", "--export"]);
        match cli.command {
            Commands::Correct { export, .. } => assert_eq!(export, Some(None)),
            _ => panic!("Expected Correct command"),
        }

        let cli = Cli::parse_from(["rescore", "correct", "r.json", "--export", "out.json"]);
        match cli.command {
            Commands::Correct { export, .. } => {
                assert_eq!(export, Some(Some(PathBuf::from("out.json"))))
            }
            _ => panic!("Expected Correct command"),
        }
    }

    #[test]
    fn test_verbose_is_global_and_counted() {
        let cli = Cli::parse_from(["rescore", "demo", "-vv"]);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Demo { .. }));
    }

    #[test]
    fn test_cli_parsing_batch_command() {
        let cli = Cli::parse_from(["rescore", "batch", "a.json", "b.yaml", "--output-dir", "out"]);
        match cli.command {
            Commands::Batch {
                inputs, output_dir, ..
            } => {
                assert_eq!(inputs, vec![PathBuf::from("a.json"), PathBuf::from("b.yaml")]);
                assert_eq!(output_dir, Some(PathBuf::from("out")));
            }
            _ => panic!("Expected Batch command"),
        }
    }

    #[test]
    fn test_batch_requires_inputs() {
        assert!(Cli::try_parse_from(["rescore", "batch"]).is_err());
    }

    #[test]
    fn test_cli_parsing_init_command() {
        let cli = Cli::parse_from(["rescore", "init", "--force"]);
        match cli.command {
            Commands::Init { force } => assert!(force),
            _ => panic!("Expected Init command"),
        }
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
