use super::{effective_level, effective_parse_options};
use crate::answers::{self, AnswerRecord, BasicAnswers, ParseOptions, PremiumAnswers};
use crate::assessment::DetailLevel;
use crate::errors::AnswerErrors;
use crate::{cli, config, io};
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::debug;

pub struct ValidateConfig {
    pub answers: PathBuf,
    pub level: Option<cli::Level>,
    pub strict: bool,
    pub config: Option<PathBuf>,
}

/// Parse `record` for `level` without scoring it.
pub fn check_record(
    record: &AnswerRecord,
    level: DetailLevel,
    options: ParseOptions,
) -> Result<(), AnswerErrors> {
    match level {
        DetailLevel::Basic => {
            answers::into_result(BasicAnswers::from_record(record, options)).map(|_| ())
        }
        DetailLevel::Premium => {
            answers::into_result(PremiumAnswers::from_record(record, options)).map(|_| ())
        }
    }
}

pub fn validate_answers(validate: ValidateConfig) -> Result<()> {
    let settings = config::resolve_config(validate.config.as_deref())
        .context("Failed to load configuration")?;
    let level = effective_level(validate.level, &settings);
    let options = effective_parse_options(validate.strict, &settings);

    let record = io::read_answer_record(&validate.answers)?;
    debug!(
        answers = record.len(),
        %level,
        strict = options.strict_questions,
        "validating answer record"
    );

    check_record(&record, level, options)?;
    println!(
        "valid: {} answers for the {} questionnaire",
        record.len(),
        level
    );
    Ok(())
}
