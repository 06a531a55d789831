//! `.oncorisk.toml` configuration.
//!
//! Every section and key is optional. Command-line flags override whatever
//! the file sets.
//!
//! ```toml
//! [assessment]
//! level = "basic"
//! strict_questions = true
//!
//! [output]
//! format = "markdown"
//! action_plan_limit = 4
//! ```

pub mod loader;
pub mod validation;

pub use loader::{
    directory_ancestors, load_config, load_config_from, parse_and_validate_config,
    resolve_config,
};
pub use validation::{validate_config, validate_config_result, ConfigValidation};

use crate::answers::ParseOptions;
use crate::assessment::DetailLevel;
use crate::io::output::OutputFormat;
use crate::summary::DEFAULT_ACTION_PLAN_LIMIT;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".oncorisk.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OncoriskConfig {
    pub assessment: AssessmentSettings,
    pub output: OutputConfig,
}

impl OncoriskConfig {
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            strict_questions: self.assessment.strict_questions,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessmentSettings {
    /// Which questionnaire the answer files come from
    pub level: DetailLevel,
    /// Reject question ids the questionnaire does not define
    pub strict_questions: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Maximum entries in the action plan (1-50)
    pub action_plan_limit: usize,
    pub plain: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Terminal,
            action_plan_limit: DEFAULT_ACTION_PLAN_LIMIT,
            plain: false,
        }
    }
}

/// Written by `oncorisk init`.
pub const DEFAULT_CONFIG_TOML: &str = r#"# oncorisk configuration

[assessment]
# "basic" for the short questionnaire, "premium" for the comprehensive one
level = "premium"
# Reject answer files containing question ids outside the questionnaire
strict_questions = false

[output]
# "terminal", "markdown" or "json"
format = "terminal"
# Number of high-priority recommendations in the action plan (1-50)
action_plan_limit = 6
# Disable colours in terminal output
plain = false
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config_file_parses_to_defaults() {
        let config: OncoriskConfig = toml::from_str(DEFAULT_CONFIG_TOML).unwrap();
        assert_eq!(config, OncoriskConfig::default());
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config: OncoriskConfig = toml::from_str("[output]\nformat = \"json\"\n").unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.action_plan_limit, DEFAULT_ACTION_PLAN_LIMIT);
        assert_eq!(config.assessment.level, DetailLevel::Premium);
    }

    #[test]
    fn test_parse_options_follow_strict_flag() {
        let mut config = OncoriskConfig::default();
        assert!(!config.parse_options().strict_questions);
        config.assessment.strict_questions = true;
        assert!(config.parse_options().strict_questions);
    }
}
