pub mod output;

pub use output::{create_writer, OutputFormat, OutputWriter, Report};

use crate::answers::AnswerRecord;
use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

pub fn read_file(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}

/// Read an answer record from `path`, or from stdin when `path` is `-`.
pub fn read_answer_record(path: &Path) -> Result<AnswerRecord> {
    let contents = if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read answers from stdin")?;
        buffer
    } else {
        read_file(path)
            .with_context(|| format!("Failed to read answers from {}", path.display()))?
    };
    parse_answer_record(&contents)
        .with_context(|| format!("Answers in {} are not a JSON object", path.display()))
}

pub fn parse_answer_record(contents: &str) -> Result<AnswerRecord> {
    Ok(serde_json::from_str(contents)?)
}
