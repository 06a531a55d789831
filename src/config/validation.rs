//! Configuration validation with error accumulation.
//!
//! Every check runs and every failure is reported, so a user fixes the
//! whole file in one pass.

use super::{OncoriskConfig, OutputConfig};
use crate::errors::ConfigError;
use std::ops::RangeInclusive;
use stillwater::{NonEmptyVec, Validation};

pub type ConfigValidation<T> = Validation<T, NonEmptyVec<String>>;

const ACTION_PLAN_LIMITS: RangeInclusive<usize> = 1..=50;

/// Validate the whole config, accumulating all errors.
pub fn validate_config(config: &OncoriskConfig) -> ConfigValidation<()> {
    let errors = validate_output(&config.output);

    match NonEmptyVec::from_vec(errors) {
        Some(errors) => Validation::Failure(errors),
        None => Validation::Success(()),
    }
}

/// `validate_config` as a `Result`.
pub fn validate_config_result(config: &OncoriskConfig) -> Result<(), ConfigError> {
    match validate_config(config) {
        Validation::Success(()) => Ok(()),
        Validation::Failure(errors) => Err(ConfigError::Invalid(errors.into_vec())),
    }
}

fn validate_output(output: &OutputConfig) -> Vec<String> {
    let mut errors = Vec::new();

    if !ACTION_PLAN_LIMITS.contains(&output.action_plan_limit) {
        errors.push(format!(
            "output.action_plan_limit out of range: {} (must be {}-{})",
            output.action_plan_limit,
            ACTION_PLAN_LIMITS.start(),
            ACTION_PLAN_LIMITS.end()
        ));
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&OncoriskConfig::default()).is_success());
    }

    #[test]
    fn test_action_plan_limit_bounds() {
        let mut config = OncoriskConfig::default();
        config.output.action_plan_limit = 0;
        let err = validate_config_result(&config).unwrap_err();
        assert!(err.to_string().contains("action_plan_limit out of range: 0"));

        config.output.action_plan_limit = 50;
        assert!(validate_config_result(&config).is_ok());

        config.output.action_plan_limit = 51;
        assert!(validate_config_result(&config).is_err());
    }
}
