//! Additive reducer for the short questionnaire.
//!
//! The level is banded from the raw accumulated score. The reported score is
//! capped at [`MAX_SCORE`] from above only, so a profile whose protective
//! deltas outweigh its base would report a negative score.

use super::{Rule, Text, FALLBACK_ACTION, FALLBACK_DESCRIPTION, FALLBACK_PRIORITY};
use crate::answers::BasicAnswers;
use crate::assessment::{
    BasicCategory, BasicRecommendation, BasicRiskAssessment, CancerType, DetailLevel, Priority,
    RiskLevel,
};
use tracing::{debug, debug_span};

pub const MAX_SCORE: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BasicRecommendationTemplate {
    pub category: BasicCategory,
    pub priority: Priority,
    pub action: &'static str,
    pub description: &'static str,
    pub impact: Option<&'static str>,
}

impl BasicRecommendationTemplate {
    fn emit(&self) -> BasicRecommendation {
        BasicRecommendation {
            category: self.category,
            priority: self.priority,
            action: self.action.to_string(),
            description: self.description.to_string(),
            impact: self.impact.map(str::to_string),
        }
    }
}

/// Effect of a fired basic branch.
pub struct Delta {
    pub points: i32,
    pub key_factor: Option<Text<BasicAnswers>>,
    pub recommendations: Vec<BasicRecommendationTemplate>,
}

impl Delta {
    pub fn points(points: i32) -> Self {
        Self {
            points,
            key_factor: None,
            recommendations: Vec::new(),
        }
    }

    /// Recommendation only.
    pub fn advice() -> Self {
        Self::points(0)
    }

    pub fn factor(mut self, text: impl Into<Text<BasicAnswers>>) -> Self {
        self.key_factor = Some(text.into());
        self
    }

    pub fn recommend(
        mut self,
        category: BasicCategory,
        priority: Priority,
        action: &'static str,
        description: &'static str,
    ) -> Self {
        self.recommendations.push(BasicRecommendationTemplate {
            category,
            priority,
            action,
            description,
            impact: None,
        });
        self
    }

    /// Attach an impact note to the last recommendation.
    pub fn with_impact(mut self, note: &'static str) -> Self {
        if let Some(last) = self.recommendations.last_mut() {
            last.impact = Some(note);
        }
        self
    }
}

/// A named basic configuration for one cancer site.
pub struct BasicProfile {
    pub site: CancerType,
    pub base_score: i32,
    pub model: Option<&'static str>,
    pub rules: Vec<Rule<BasicAnswers, Delta>>,
}

impl BasicProfile {
    pub fn assess(&self, answers: &BasicAnswers) -> BasicRiskAssessment {
        let span = debug_span!("basic_assessment", site = ?self.site);
        let _enter = span.enter();

        let mut score = self.base_score;
        let mut key_factors = Vec::new();
        let mut recommendations = Vec::new();

        for rule in &self.rules {
            let Some(branch) = rule.fire(answers) else {
                continue;
            };
            let effect = &branch.effect;
            debug!(rule = branch.label, points = effect.points, "rule fired");

            score += effect.points;
            if let Some(text) = &effect.key_factor {
                key_factors.push(text.render(answers));
            }
            recommendations.extend(
                effect
                    .recommendations
                    .iter()
                    .map(BasicRecommendationTemplate::emit),
            );
        }

        if recommendations.is_empty() {
            recommendations.push(BasicRecommendation {
                category: BasicCategory::Medical,
                priority: FALLBACK_PRIORITY,
                action: FALLBACK_ACTION.to_string(),
                description: FALLBACK_DESCRIPTION.to_string(),
                impact: None,
            });
        }

        let risk_level = score_band(score);
        debug!(score, level = %risk_level, "basic assessment complete");

        BasicRiskAssessment {
            site: self.site,
            cancer_type: self.site.label(DetailLevel::Basic).to_string(),
            risk_level,
            risk_score: score.min(MAX_SCORE),
            key_factors,
            recommendations,
            risk_model: self.model.map(str::to_string),
        }
    }
}

/// `>= 8` High, `>= 6` Elevated, `>= 4` Average, otherwise Low.
pub fn score_band(score: i32) -> RiskLevel {
    match score {
        s if s >= 8 => RiskLevel::High,
        s if s >= 6 => RiskLevel::Elevated,
        s if s >= 4 => RiskLevel::Average,
        _ => RiskLevel::Low,
    }
}
