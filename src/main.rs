use anyhow::Result;
use oncorisk::cli::{parse_args, Commands};
use oncorisk::commands::{self, AssessConfig, ValidateConfig};
use oncorisk::observability::init_tracing;

fn main() -> Result<()> {
    let cli = parse_args();
    init_tracing(cli.command.verbosity());

    match cli.command {
        Commands::Assess {
            answers,
            level,
            format,
            output,
            config,
            top,
            plain,
            strict,
            verbosity: _,
        } => commands::handle_assess(AssessConfig {
            answers,
            level,
            format,
            output,
            config,
            top,
            plain,
            strict,
        }),
        Commands::Validate {
            answers,
            level,
            strict,
            config,
            verbosity: _,
        } => commands::validate_answers(ValidateConfig {
            answers,
            level,
            strict,
            config,
        }),
        Commands::Init { force } => commands::init_config(force),
    }
}
