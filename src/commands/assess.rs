use super::{effective_level, effective_parse_options};
use crate::aggregate::assess_record;
use crate::config::{self, OncoriskConfig};
use crate::io::{self, create_writer, Report};
use crate::cli;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::info;

pub struct AssessConfig {
    pub answers: PathBuf,
    pub level: Option<cli::Level>,
    pub format: Option<cli::OutputFormat>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub top: Option<usize>,
    pub plain: bool,
    pub strict: bool,
}

/// Merge flags over the loaded config and validate the result.
fn effective_config(assess: &AssessConfig) -> Result<OncoriskConfig> {
    let mut settings =
        config::resolve_config(assess.config.as_deref()).context("Failed to load configuration")?;

    settings.assessment.level = effective_level(assess.level, &settings);
    settings.assessment.strict_questions =
        effective_parse_options(assess.strict, &settings).strict_questions;
    if let Some(format) = assess.format {
        settings.output.format = format.into();
    }
    if let Some(top) = assess.top {
        settings.output.action_plan_limit = top;
    }
    settings.output.plain |= assess.plain;

    config::validate_config_result(&settings)?;
    Ok(settings)
}

pub fn handle_assess(assess: AssessConfig) -> Result<()> {
    let settings = effective_config(&assess)?;
    let record = io::read_answer_record(&assess.answers)?;
    info!(
        answers = record.len(),
        level = %settings.assessment.level,
        "assessing answer record"
    );

    let assessments = assess_record(
        &record,
        settings.assessment.level,
        settings.parse_options(),
    )?;
    let report = Report::new(assessments, settings.output.action_plan_limit);

    let destination: Box<dyn Write> = match &assess.output {
        Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
            format!("Failed to create output file {}", path.display())
        })?)),
        None => Box::new(std::io::stdout().lock()),
    };
    // Colour only makes sense on a terminal.
    let plain = settings.output.plain || assess.output.is_some();

    let mut writer = create_writer(settings.output.format, destination, plain);
    writer.write_report(&report)?;
    drop(writer);

    if let Some(path) = &assess.output {
        info!("Report written to {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::DetailLevel;
    use crate::io::output;
    use std::fs;

    fn assess_config(dir: &std::path::Path) -> AssessConfig {
        let config = dir.join("config.toml");
        fs::write(
            &config,
            "[assessment]\nlevel = \"basic\"\n[output]\nformat = \"markdown\"\n",
        )
        .unwrap();
        AssessConfig {
            answers: dir.join("answers.json"),
            level: None,
            format: None,
            output: None,
            config: Some(config),
            top: None,
            plain: false,
            strict: false,
        }
    }

    #[test]
    fn test_config_supplies_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = effective_config(&assess_config(dir.path())).unwrap();
        assert_eq!(settings.assessment.level, DetailLevel::Basic);
        assert_eq!(settings.output.format, output::OutputFormat::Markdown);
    }

    #[test]
    fn test_flags_override_config() {
        let dir = tempfile::tempdir().unwrap();
        let mut assess = assess_config(dir.path());
        assess.level = Some(cli::Level::Premium);
        assess.format = Some(cli::OutputFormat::Json);
        assess.top = Some(2);

        let settings = effective_config(&assess).unwrap();
        assert_eq!(settings.assessment.level, DetailLevel::Premium);
        assert_eq!(settings.output.format, output::OutputFormat::Json);
        assert_eq!(settings.output.action_plan_limit, 2);
    }

    #[test]
    fn test_zero_top_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut assess = assess_config(dir.path());
        assess.top = Some(0);
        assert!(effective_config(&assess).is_err());
    }

    #[test]
    fn test_report_written_to_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut assess = assess_config(dir.path());
        fs::write(&assess.answers, r#"{"age": 70, "smokingStatus": "current"}"#).unwrap();
        let out = dir.path().join("report.md");
        assess.output = Some(out.clone());

        handle_assess(assess).unwrap();

        let text = fs::read_to_string(out).unwrap();
        assert!(text.contains("## Lung Cancer"));
        assert!(text.contains("- Current smoking"));
    }
}
