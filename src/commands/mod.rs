//! CLI command implementations.
//!
//! - **assess**: score an answer file and write a report
//! - **validate**: check an answer file without scoring it
//! - **init**: write a default `.oncorisk.toml`

pub mod assess;
pub mod init;
pub mod validate;

pub use assess::{handle_assess, AssessConfig};
pub use init::init_config;
pub use validate::{validate_answers, ValidateConfig};

use crate::answers::ParseOptions;
use crate::assessment::DetailLevel;
use crate::cli;
use crate::config::OncoriskConfig;

/// Flag first, then config file.
pub(crate) fn effective_level(flag: Option<cli::Level>, config: &OncoriskConfig) -> DetailLevel {
    flag.map(DetailLevel::from)
        .unwrap_or(config.assessment.level)
}

/// `--strict` only ever tightens the config setting.
pub(crate) fn effective_parse_options(strict: bool, config: &OncoriskConfig) -> ParseOptions {
    ParseOptions {
        strict_questions: strict || config.assessment.strict_questions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_overrides_config_level() {
        let mut config = OncoriskConfig::default();
        config.assessment.level = DetailLevel::Basic;

        assert_eq!(effective_level(None, &config), DetailLevel::Basic);
        assert_eq!(
            effective_level(Some(cli::Level::Premium), &config),
            DetailLevel::Premium
        );
    }

    #[test]
    fn test_strict_from_either_source() {
        let mut config = OncoriskConfig::default();
        assert!(!effective_parse_options(false, &config).strict_questions);
        assert!(effective_parse_options(true, &config).strict_questions);
        config.assessment.strict_questions = true;
        assert!(effective_parse_options(false, &config).strict_questions);
    }
}
