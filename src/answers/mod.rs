//! Answer records and their typed, validated forms.
//!
//! The questionnaire collector produces a sparse JSON object keyed by question
//! id ([`AnswerRecord`]). Risk functions never see that raw shape: it is read
//! once into [`BasicAnswers`] or [`PremiumAnswers`], with option codes checked
//! against closed vocabularies and every problem reported together.

pub mod basic;
pub mod premium;
pub mod record;
pub mod vocabulary;

pub use basic::BasicAnswers;
pub use premium::PremiumAnswers;
pub use record::{AnswerRecord, AnswerValidation, AnswerValue, ParseOptions};

use crate::errors::AnswerErrors;
use stillwater::Validation;

/// Collapse an accumulated validation into a `Result` for callers that only
/// need pass/fail.
pub fn into_result<T>(validation: AnswerValidation<T>) -> Result<T, AnswerErrors> {
    match validation {
        Validation::Success(value) => Ok(value),
        Validation::Failure(errors) => Err(AnswerErrors::new(errors.into_vec())),
    }
}

/// `value` is present and strictly greater than `threshold`.
pub(crate) fn is_over(value: Option<f64>, threshold: f64) -> bool {
    value.is_some_and(|v| v > threshold)
}

/// Body mass index from kilograms and centimetres. `None` unless both are
/// answered and non-zero.
pub(crate) fn body_mass_index(weight: Option<f64>, height: Option<f64>) -> Option<f64> {
    match (weight, height) {
        (Some(w), Some(h)) if w != 0.0 && h != 0.0 => Some(w / (h / 100.0).powi(2)),
        _ => None,
    }
}
