//! The sparse, untyped answer record written by the questionnaire collector,
//! and the reader that turns it into typed fields.

use super::vocabulary::Vocabulary;
use crate::errors::AnswerError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use stillwater::{NonEmptyVec, Validation};

/// Validation result accumulating every answer error.
pub type AnswerValidation<T> = Validation<T, NonEmptyVec<AnswerError>>;

/// One answer as the collector stores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    /// JSON `null`; read as "not provided"
    Empty,
    Flag(bool),
    Number(f64),
    Text(String),
    /// Multi-select: option code -> ticked
    Selections(BTreeMap<String, bool>),
}

impl AnswerValue {
    fn kind(&self) -> &'static str {
        match self {
            AnswerValue::Empty => "null",
            AnswerValue::Flag(_) => "a boolean",
            AnswerValue::Number(_) => "a number",
            AnswerValue::Text(_) => "text",
            AnswerValue::Selections(_) => "selections",
        }
    }
}

impl From<f64> for AnswerValue {
    fn from(value: f64) -> Self {
        AnswerValue::Number(value)
    }
}

impl From<i32> for AnswerValue {
    fn from(value: i32) -> Self {
        AnswerValue::Number(f64::from(value))
    }
}

impl From<bool> for AnswerValue {
    fn from(value: bool) -> Self {
        AnswerValue::Flag(value)
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        AnswerValue::Text(value.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        AnswerValue::Text(value)
    }
}

impl<const N: usize> From<[(&str, bool); N]> for AnswerValue {
    fn from(entries: [(&str, bool); N]) -> Self {
        AnswerValue::Selections(
            entries
                .into_iter()
                .map(|(code, ticked)| (code.to_string(), ticked))
                .collect(),
        )
    }
}

/// Sparse mapping from question id to answer. No key is guaranteed present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerRecord(BTreeMap<String, AnswerValue>);

impl AnswerRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, question: &str, value: impl Into<AnswerValue>) -> Self {
        self.insert(question, value);
        self
    }

    pub fn insert(&mut self, question: &str, value: impl Into<AnswerValue>) {
        self.0.insert(question.to_string(), value.into());
    }

    pub fn get(&self, question: &str) -> Option<&AnswerValue> {
        self.0.get(question)
    }

    pub fn question_ids(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Options for reading a record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Treat question ids outside the questionnaire as errors instead of ignoring them
    pub strict_questions: bool,
}

/// Reads typed fields out of a record, collecting errors instead of failing fast.
pub(crate) struct FieldReader<'a> {
    record: &'a AnswerRecord,
    errors: Vec<AnswerError>,
}

impl<'a> FieldReader<'a> {
    pub(crate) fn new(record: &'a AnswerRecord) -> Self {
        Self {
            record,
            errors: Vec::new(),
        }
    }

    /// Present, non-null value for `question`. Empty text counts as absent.
    fn present(&self, question: &str) -> Option<&'a AnswerValue> {
        match self.record.get(question)? {
            AnswerValue::Empty => None,
            AnswerValue::Text(text) if text.trim().is_empty() => None,
            value => Some(value),
        }
    }

    fn wrong_type(&mut self, question: &str, expected: &'static str, value: &AnswerValue) {
        self.errors.push(AnswerError::WrongType {
            question: question.to_string(),
            expected,
            found: value.kind(),
        });
    }

    /// Non-negative finite number; numeric text is coerced.
    pub(crate) fn number(&mut self, question: &str) -> Option<f64> {
        let value = self.present(question)?;
        let number = match value {
            AnswerValue::Number(n) => *n,
            AnswerValue::Text(text) => match text.trim().parse::<f64>() {
                Ok(n) => n,
                Err(_) => {
                    self.wrong_type(question, "a number", value);
                    return None;
                }
            },
            other => {
                self.wrong_type(question, "a number", other);
                return None;
            }
        };

        if !number.is_finite() || number < 0.0 {
            self.errors.push(AnswerError::OutOfRange {
                question: question.to_string(),
                value: number.to_string(),
                reason: "must be a finite, non-negative number",
            });
            return None;
        }
        Some(number)
    }

    /// Whole, non-negative count.
    pub(crate) fn count(&mut self, question: &str) -> Option<u32> {
        let number = self.number(question)?;
        if number.fract() != 0.0 || number > f64::from(u32::MAX) {
            self.errors.push(AnswerError::OutOfRange {
                question: question.to_string(),
                value: number.to_string(),
                reason: "must be a whole number",
            });
            return None;
        }
        Some(number as u32)
    }

    pub(crate) fn choice<T: Vocabulary>(&mut self, question: &str) -> Option<T> {
        let value = self.present(question)?;
        let AnswerValue::Text(text) = value else {
            self.wrong_type(question, "an option code", value);
            return None;
        };

        match text.trim().parse::<T>() {
            Ok(choice) => Some(choice),
            Err(unknown) => {
                self.errors.push(AnswerError::UnknownOption {
                    question: question.to_string(),
                    value: unknown.0,
                    expected: T::expected(),
                });
                None
            }
        }
    }

    /// Options ticked `true`. Absent question yields an empty set.
    pub(crate) fn selections<T: Vocabulary>(&mut self, question: &str) -> BTreeSet<T> {
        let mut selected = BTreeSet::new();
        let Some(value) = self.present(question) else {
            return selected;
        };
        let AnswerValue::Selections(options) = value else {
            self.wrong_type(question, "selections", value);
            return selected;
        };

        for (code, ticked) in options {
            match code.parse::<T>() {
                Ok(option) if *ticked => {
                    selected.insert(option);
                }
                Ok(_) => {}
                Err(unknown) => self.errors.push(AnswerError::UnknownOption {
                    question: question.to_string(),
                    value: unknown.0,
                    expected: T::expected(),
                }),
            }
        }
        selected
    }

    /// Check for questions outside `known`, then produce the validation result.
    pub(crate) fn finish<T>(
        mut self,
        value: T,
        known: &[&str],
        options: ParseOptions,
    ) -> AnswerValidation<T> {
        for question in self.record.question_ids() {
            if known.contains(&question) {
                continue;
            }
            if options.strict_questions {
                self.errors.push(AnswerError::UnknownQuestion {
                    question: question.to_string(),
                });
            } else {
                tracing::debug!(question, "ignoring unknown question id");
            }
        }

        match NonEmptyVec::from_vec(self.errors) {
            Some(errors) => Validation::Failure(errors),
            None => Validation::Success(value),
        }
    }
}
