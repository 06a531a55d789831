use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "oncorisk")]
#[command(about = "Cancer risk classification from questionnaire answers", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assess cancer risk from an answer file
    Assess {
        /// Answer record as JSON (`-` reads stdin)
        answers: PathBuf,

        /// Questionnaire the answers come from (defaults to the config, then premium)
        #[arg(short, long, value_enum)]
        level: Option<Level>,

        /// Output format (defaults to the config, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (skips discovery of .oncorisk.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Number of high-priority actions to list
        #[arg(long = "top", visible_alias = "head")]
        top: Option<usize>,

        /// Plain output without colours
        #[arg(long)]
        plain: bool,

        /// Reject question ids the questionnaire does not define
        #[arg(long)]
        strict: bool,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Check that an answer file parses, listing every problem
    Validate {
        /// Answer record as JSON (`-` reads stdin)
        answers: PathBuf,

        /// Questionnaire the answers come from
        #[arg(short, long, value_enum)]
        level: Option<Level>,

        /// Reject question ids the questionnaire does not define
        #[arg(long)]
        strict: bool,

        /// Configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    pub fn verbosity(&self) -> u8 {
        match self {
            Commands::Assess { verbosity, .. } | Commands::Validate { verbosity, .. } => {
                *verbosity
            }
            Commands::Init { .. } => 0,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Level {
    Basic,
    Premium,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl From<Level> for crate::assessment::DetailLevel {
    fn from(level: Level) -> Self {
        match level {
            Level::Basic => crate::assessment::DetailLevel::Basic,
            Level::Premium => crate::assessment::DetailLevel::Premium,
        }
    }
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
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
    use crate::assessment::DetailLevel;

    #[test]
    fn test_level_conversion() {
        assert_eq!(DetailLevel::from(Level::Basic), DetailLevel::Basic);
        assert_eq!(DetailLevel::from(Level::Premium), DetailLevel::Premium);
    }

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
    fn test_cli_parsing_assess_command() {
        let args = vec![
            "oncorisk",
            "assess",
            "answers.json",
            "--level",
            "basic",
            "--format",
            "json",
            "--top",
            "3",
            "-vv",
        ];

        let cli = Cli::parse_from(args);
        assert_eq!(cli.command.verbosity(), 2);

        match cli.command {
            Commands::Assess {
                answers,
                level,
                format,
                top,
                plain,
                ..
            } => {
                assert_eq!(answers, PathBuf::from("answers.json"));
                assert_eq!(level, Some(Level::Basic));
                assert_eq!(format, Some(OutputFormat::Json));
                assert_eq!(top, Some(3));
                assert!(!plain);
            }
            _ => panic!("Expected Assess command"),
        }
    }

    #[test]
    fn test_cli_parsing_init_command() {
        let cli = Cli::parse_from(vec!["oncorisk", "init", "--force"]);
        match cli.command {
            Commands::Init { force } => assert!(force),
            _ => panic!("Expected Init command"),
        }
    }

    #[test]
    fn test_cli_parsing_validate_command() {
        let args = vec![
            "oncorisk",
            "validate",
            "-",
            "--strict",
            "--config",
            "/config/path",
        ];

        let cli = Cli::parse_from(args);
        match cli.command {
            Commands::Validate {
                answers,
                strict,
                config,
                ..
            } => {
                assert_eq!(answers, PathBuf::from("-"));
                assert!(strict);
                assert_eq!(config, Some(PathBuf::from("/config/path")));
            }
            _ => panic!("Expected Validate command"),
        }
    }
}
