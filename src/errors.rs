//! Error types for the answer boundary and the command-line tool.
//!
//! The risk functions themselves are total and never fail. Errors only arise
//! where untyped data enters the crate: the collector's answer record and the
//! `.oncorisk.toml` configuration file. Both validations accumulate every
//! problem before reporting, so a user sees all of them in one run.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// A single problem found while reading an answer record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnswerError {
    /// Question id not part of the questionnaire (strict mode only)
    #[error("unknown question '{question}'")]
    UnknownQuestion { question: String },

    /// Option code outside the question's vocabulary
    #[error("question '{question}': unknown option '{value}' (expected one of: {expected})")]
    UnknownOption {
        question: String,
        value: String,
        expected: String,
    },

    /// Value of the wrong shape, e.g. a selection map for a numeric question
    #[error("question '{question}': expected {expected}, got {found}")]
    WrongType {
        question: String,
        expected: &'static str,
        found: &'static str,
    },

    /// Numeric answer that cannot describe a person
    #[error("question '{question}': {value} is out of range ({reason})")]
    OutOfRange {
        question: String,
        value: String,
        reason: &'static str,
    },
}

impl AnswerError {
    /// The question id this error refers to.
    pub fn question(&self) -> &str {
        match self {
            Self::UnknownQuestion { question }
            | Self::UnknownOption { question, .. }
            | Self::WrongType { question, .. }
            | Self::OutOfRange { question, .. } => question,
        }
    }
}

/// Every error accumulated while parsing one answer record. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct AnswerErrors(Vec<AnswerError>);

impl AnswerErrors {
    pub(crate) fn new(errors: Vec<AnswerError>) -> Self {
        Self(errors)
    }

    pub fn errors(&self) -> &[AnswerError] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for AnswerErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} invalid answer(s):", self.0.len())?;
        for error in &self.0 {
            writeln!(f, "  - {}", error)?;
        }
        Ok(())
    }
}

impl IntoIterator for AnswerErrors {
    type Item = AnswerError;
    type IntoIter = std::vec::IntoIter<AnswerError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("invalid configuration: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_errors_display_lists_every_error() {
        let errors = AnswerErrors::new(vec![
            AnswerError::UnknownOption {
                question: "smokingStatus".to_string(),
                value: "sometimes".to_string(),
                expected: "never, former, current".to_string(),
            },
            AnswerError::WrongType {
                question: "age".to_string(),
                expected: "a number",
                found: "selections",
            },
        ]);

        let text = errors.to_string();
        assert!(text.starts_with("2 invalid answer(s):"));
        assert!(text.contains("smokingStatus"));
        assert!(text.contains("question 'age': expected a number, got selections"));
    }

    #[test]
    fn test_question_accessor() {
        let err = AnswerError::UnknownQuestion {
            question: "favouriteColour".to_string(),
        };
        assert_eq!(err.question(), "favouriteColour");
    }

    #[test]
    fn test_config_invalid_joins_messages() {
        let err = ConfigError::Invalid(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(err.to_string(), "invalid configuration: a; b");
    }
}
