//! Profile-level summary and the prioritized action plan.

use crate::assessment::{Assessed, Priority, RiskLevel};
use serde::Serialize;

/// Action plan length used when nothing else is configured.
pub const DEFAULT_ACTION_PLAN_LIMIT: usize = 6;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LevelCounts {
    pub high: usize,
    pub elevated: usize,
    pub average: usize,
    pub low: usize,
}

impl LevelCounts {
    pub fn get(&self, level: RiskLevel) -> usize {
        match level {
            RiskLevel::High => self.high,
            RiskLevel::Elevated => self.elevated,
            RiskLevel::Average => self.average,
            RiskLevel::Low => self.low,
        }
    }

    fn bump(&mut self, level: RiskLevel) {
        match level {
            RiskLevel::High => self.high += 1,
            RiskLevel::Elevated => self.elevated += 1,
            RiskLevel::Average => self.average += 1,
            RiskLevel::Low => self.low += 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskSummary {
    pub cancers_assessed: usize,
    pub level_counts: LevelCounts,
    /// Highest level among the assessments; `Low` when there are none
    pub overall_level: RiskLevel,
    pub modifiable_factors: usize,
    pub high_priority_recommendations: usize,
}

impl RiskSummary {
    pub fn from_assessments<A: Assessed>(assessments: &[A]) -> Self {
        let mut level_counts = LevelCounts::default();
        for assessment in assessments {
            level_counts.bump(assessment.risk_level());
        }

        let overall_level = assessments
            .iter()
            .map(Assessed::risk_level)
            .max()
            .unwrap_or(RiskLevel::Low);

        Self {
            cancers_assessed: assessments.len(),
            level_counts,
            overall_level,
            modifiable_factors: assessments
                .iter()
                .map(Assessed::modifiable_factor_count)
                .sum(),
            high_priority_recommendations: assessments
                .iter()
                .flat_map(|a| a.recommendation_entries())
                .filter(|(priority, _, _)| *priority == Priority::High)
                .count(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionItem {
    pub cancer_type: String,
    pub action: String,
    pub description: String,
}

/// High-priority recommendations in assessment order, at most `limit`.
pub fn action_plan<A: Assessed>(assessments: &[A], limit: usize) -> Vec<ActionItem> {
    assessments
        .iter()
        .flat_map(|assessment| {
            assessment
                .recommendation_entries()
                .into_iter()
                .filter(|(priority, _, _)| *priority == Priority::High)
                .map(move |(_, action, description)| ActionItem {
                    cancer_type: assessment.cancer_type().to_string(),
                    action: action.to_string(),
                    description: description.to_string(),
                })
        })
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::vocabulary::{BiologicalSex, SmokingStatus};
    use crate::answers::{BasicAnswers, PremiumAnswers};
    use crate::aggregate::{calculate_basic_risks, calculate_risks};
    use crate::assessment::RiskAssessment;

    #[test]
    fn test_empty_summary_is_low() {
        let summary = RiskSummary::from_assessments::<RiskAssessment>(&[]);
        assert_eq!(summary.overall_level, RiskLevel::Low);
        assert_eq!(summary.cancers_assessed, 0);
    }

    #[test]
    fn test_summary_of_current_smoker() {
        let answers = PremiumAnswers {
            age: Some(70.0),
            biological_sex: Some(BiologicalSex::Male),
            smoking_status: Some(SmokingStatus::Current),
            ..Default::default()
        };
        let assessments = calculate_risks(&answers);
        let summary = RiskSummary::from_assessments(&assessments);

        assert_eq!(summary.cancers_assessed, 7);
        assert_eq!(summary.overall_level, RiskLevel::High);
        let total: usize = RiskLevel::ALL
            .iter()
            .map(|level| summary.level_counts.get(*level))
            .sum();
        assert_eq!(total, 7);
        assert!(summary.modifiable_factors >= 4);
    }

    #[test]
    fn test_action_plan_keeps_order_and_limit() {
        let answers = PremiumAnswers {
            smoking_status: Some(SmokingStatus::Current),
            ..Default::default()
        };
        let assessments = calculate_risks(&answers);
        let plan = action_plan(&assessments, 2);

        assert_eq!(plan.len(), 2);
        assert_eq!(plan[0].cancer_type, "Lung Cancer");
        assert_eq!(plan[0].action, "Quit smoking immediately");
        assert_eq!(plan[1].cancer_type, "Colorectal Cancer");
    }

    #[test]
    fn test_basic_summary_has_no_modifiable_factors() {
        let assessments = calculate_basic_risks(&BasicAnswers::default());
        let summary = RiskSummary::from_assessments(&assessments);
        assert_eq!(summary.modifiable_factors, 0);
        assert_eq!(summary.cancers_assessed, 4);
    }
}
