// Export modules for library usage
pub mod aggregate;
pub mod answers;
pub mod assessment;
pub mod cli;
pub mod commands;
pub mod config;
pub mod engine;
pub mod errors;
pub mod io;
pub mod observability;
pub mod profiles;
pub mod summary;

// Re-export commonly used types
pub use crate::aggregate::{
    assess_record, basic_sites, calculate_basic_risks, calculate_risks, premium_sites,
    Assessments,
};

pub use crate::answers::{
    into_result, AnswerRecord, AnswerValue, BasicAnswers, ParseOptions, PremiumAnswers,
};

pub use crate::assessment::{
    AbsoluteRisk, Assessed, BasicCategory, BasicRecommendation, BasicRiskAssessment, CancerType,
    DetailLevel, Impact, Priority, Recommendation, RecommendationCategory, RiskAssessment,
    RiskFactor, RiskLevel, ScreeningPriority, ScreeningRecommendation,
};

pub use crate::errors::{AnswerError, AnswerErrors, ConfigError};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter, Report};

pub use crate::summary::{action_plan, ActionItem, LevelCounts, RiskSummary};

pub use crate::profiles::*;
