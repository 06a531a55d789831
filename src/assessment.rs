//! Assessment output types shared by the basic and premium pipelines.
//!
//! Field names serialize in camelCase so the JSON report matches the shape the
//! display layer consumes (`cancerType`, `riskLevel`, `absoluteRisk`, ...).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which questionnaire flow produced the answers and which output shape to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DetailLevel {
    /// ~18 questions, additive 0-10 score
    Basic,
    /// ~60 questions, multiplicative lifetime percentage
    #[default]
    Premium,
}

impl fmt::Display for DetailLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetailLevel::Basic => write!(f, "basic"),
            DetailLevel::Premium => write!(f, "premium"),
        }
    }
}

/// Cancer sites covered by at least one pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CancerType {
    Lung,
    Colorectal,
    Skin,
    Breast,
    Cervical,
    Ovarian,
    Prostate,
    Bladder,
    Pancreatic,
    Liver,
}

impl CancerType {
    /// Display label. The two flows name melanoma differently.
    pub fn label(self, level: DetailLevel) -> &'static str {
        match (self, level) {
            (CancerType::Lung, _) => "Lung Cancer",
            (CancerType::Colorectal, _) => "Colorectal Cancer",
            (CancerType::Skin, DetailLevel::Premium) => "Skin Cancer (Melanoma)",
            (CancerType::Skin, DetailLevel::Basic) => "Skin Cancer/Melanoma",
            (CancerType::Breast, _) => "Breast Cancer",
            (CancerType::Cervical, _) => "Cervical Cancer",
            (CancerType::Ovarian, _) => "Ovarian Cancer",
            (CancerType::Prostate, _) => "Prostate Cancer",
            (CancerType::Bladder, _) => "Bladder Cancer",
            (CancerType::Pancreatic, _) => "Pancreatic Cancer",
            (CancerType::Liver, _) => "Liver Cancer",
        }
    }
}

/// Four-band classification, ordered from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Average,
    Elevated,
    High,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Low,
        RiskLevel::Average,
        RiskLevel::Elevated,
        RiskLevel::High,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Average => "Average",
            RiskLevel::Elevated => "Elevated",
            RiskLevel::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Low,
    Moderate,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

/// Recommendation category. `Genetic` only appears in premium output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationCategory {
    Lifestyle,
    Screening,
    Medical,
    Genetic,
}

impl RecommendationCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationCategory::Lifestyle => "lifestyle",
            RecommendationCategory::Screening => "screening",
            RecommendationCategory::Medical => "medical",
            RecommendationCategory::Genetic => "genetic",
        }
    }
}

/// Basic recommendations cannot be genetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BasicCategory {
    Lifestyle,
    Screening,
    Medical,
}

impl From<BasicCategory> for RecommendationCategory {
    fn from(category: BasicCategory) -> Self {
        match category {
            BasicCategory::Lifestyle => RecommendationCategory::Lifestyle,
            BasicCategory::Screening => RecommendationCategory::Screening,
            BasicCategory::Medical => RecommendationCategory::Medical,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub factor: String,
    pub impact: Impact,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub category: RecommendationCategory,
    pub priority: Priority,
    pub action: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub potential_impact: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicRecommendation {
    pub category: BasicCategory,
    pub priority: Priority,
    pub action: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScreeningPriority {
    Routine,
    Enhanced,
    HighRisk,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningRecommendation {
    pub test: String,
    pub start_age: u32,
    pub frequency: String,
    pub priority: ScreeningPriority,
}

/// Absolute risk percentages over three horizons.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbsoluteRisk {
    pub five_year: f64,
    pub ten_year: f64,
    pub lifetime: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub site: CancerType,
    pub cancer_type: String,
    pub risk_level: RiskLevel,
    pub absolute_risk: AbsoluteRisk,
    /// Accumulated multiplier against the site's base lifetime risk
    pub relative_risk: f64,
    pub risk_category: String,
    pub modifiable_factors: Vec<RiskFactor>,
    pub non_modifiable_factors: Vec<RiskFactor>,
    pub recommendations: Vec<Recommendation>,
    pub screening_timeline: Vec<ScreeningRecommendation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_reduction_potential: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_model: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicRiskAssessment {
    pub site: CancerType,
    pub cancer_type: String,
    pub risk_level: RiskLevel,
    /// Capped at 10 from above only; see `engine::basic`.
    pub risk_score: i32,
    pub key_factors: Vec<String>,
    pub recommendations: Vec<BasicRecommendation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_model: Option<String>,
}

/// Read access shared by both assessment flavours, used by summaries and writers.
pub trait Assessed {
    fn site(&self) -> CancerType;
    fn cancer_type(&self) -> &str;
    fn risk_level(&self) -> RiskLevel;
    fn modifiable_factor_count(&self) -> usize;
    /// Recommendations as `(priority, action, description)` in emitted order.
    fn recommendation_entries(&self) -> Vec<(Priority, &str, &str)>;
}

impl Assessed for RiskAssessment {
    fn site(&self) -> CancerType {
        self.site
    }

    fn cancer_type(&self) -> &str {
        &self.cancer_type
    }

    fn risk_level(&self) -> RiskLevel {
        self.risk_level
    }

    fn modifiable_factor_count(&self) -> usize {
        self.modifiable_factors.len()
    }

    fn recommendation_entries(&self) -> Vec<(Priority, &str, &str)> {
        self.recommendations
            .iter()
            .map(|r| (r.priority, r.action.as_str(), r.description.as_str()))
            .collect()
    }
}

impl Assessed for BasicRiskAssessment {
    fn site(&self) -> CancerType {
        self.site
    }

    fn cancer_type(&self) -> &str {
        &self.cancer_type
    }

    fn risk_level(&self) -> RiskLevel {
        self.risk_level
    }

    fn modifiable_factor_count(&self) -> usize {
        0
    }

    fn recommendation_entries(&self) -> Vec<(Priority, &str, &str)> {
        self.recommendations
            .iter()
            .map(|r| (r.priority, r.action.as_str(), r.description.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_level_ordering() {
        assert!(RiskLevel::High > RiskLevel::Elevated);
        assert!(RiskLevel::Elevated > RiskLevel::Average);
        assert!(RiskLevel::Average > RiskLevel::Low);
    }

    #[test]
    fn test_skin_label_differs_by_level() {
        assert_eq!(
            CancerType::Skin.label(DetailLevel::Premium),
            "Skin Cancer (Melanoma)"
        );
        assert_eq!(
            CancerType::Skin.label(DetailLevel::Basic),
            "Skin Cancer/Melanoma"
        );
    }

    #[test]
    fn test_screening_priority_serializes_kebab_case() {
        let json = serde_json::to_string(&ScreeningPriority::HighRisk).unwrap();
        assert_eq!(json, "\"high-risk\"");
    }

    #[test]
    fn test_recommendation_omits_missing_impact() {
        let rec = Recommendation {
            category: RecommendationCategory::Genetic,
            priority: Priority::High,
            action: "Consider genetic counseling".to_string(),
            description: "Discuss testing".to_string(),
            potential_impact: None,
        };
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["category"], "genetic");
        assert!(json.get("potentialImpact").is_none());
    }
}
