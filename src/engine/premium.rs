//! Multiplicative reducer for the comprehensive pipeline.

use super::{
    Horizons, Rule, ScreeningContext, ScreeningRule, Thresholds, FALLBACK_ACTION,
    FALLBACK_DESCRIPTION, FALLBACK_PRIORITY,
};
use crate::answers::PremiumAnswers;
use crate::assessment::{
    AbsoluteRisk, CancerType, DetailLevel, Impact, Priority, Recommendation,
    RecommendationCategory, RiskAssessment, RiskFactor,
};
use tracing::{debug, debug_span};

/// Lifetime percentages never exceed this.
pub const LIFETIME_CAP: f64 = 85.0;

/// Which factor list a fired rule reports into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactorClass {
    Modifiable,
    NonModifiable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactorTemplate {
    pub class: FactorClass,
    pub factor: &'static str,
    pub impact: Impact,
    pub description: &'static str,
}

impl FactorTemplate {
    fn emit(&self) -> RiskFactor {
        RiskFactor {
            factor: self.factor.to_string(),
            impact: self.impact,
            description: self.description.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendationTemplate {
    pub category: RecommendationCategory,
    pub priority: Priority,
    pub action: &'static str,
    pub description: &'static str,
    pub potential_impact: Option<&'static str>,
}

impl RecommendationTemplate {
    fn emit(&self) -> Recommendation {
        Recommendation {
            category: self.category,
            priority: self.priority,
            action: self.action.to_string(),
            description: self.description.to_string(),
            potential_impact: self.potential_impact.map(str::to_string),
        }
    }
}

/// Effect of a fired premium branch.
#[derive(Debug, Clone, PartialEq)]
pub struct Multiplier {
    pub factor: f64,
    pub risk_factor: Option<FactorTemplate>,
    pub recommendations: Vec<RecommendationTemplate>,
}

impl Multiplier {
    /// Multiply by `factor` with nothing reported.
    pub fn by(factor: f64) -> Self {
        Self {
            factor,
            risk_factor: None,
            recommendations: Vec::new(),
        }
    }

    /// Recommendation only; leaves the multiplier unchanged.
    pub fn advice() -> Self {
        Self::by(1.0)
    }

    pub fn modifiable(self, factor: &'static str, impact: Impact, description: &'static str) -> Self {
        self.reporting(FactorClass::Modifiable, factor, impact, description)
    }

    pub fn non_modifiable(
        self,
        factor: &'static str,
        impact: Impact,
        description: &'static str,
    ) -> Self {
        self.reporting(FactorClass::NonModifiable, factor, impact, description)
    }

    fn reporting(
        mut self,
        class: FactorClass,
        factor: &'static str,
        impact: Impact,
        description: &'static str,
    ) -> Self {
        self.risk_factor = Some(FactorTemplate {
            class,
            factor,
            impact,
            description,
        });
        self
    }

    pub fn recommend(
        mut self,
        category: RecommendationCategory,
        priority: Priority,
        action: &'static str,
        description: &'static str,
    ) -> Self {
        self.recommendations.push(RecommendationTemplate {
            category,
            priority,
            action,
            description,
            potential_impact: None,
        });
        self
    }

    /// Attach a potential-impact note to the last recommendation.
    pub fn with_potential_impact(mut self, note: &'static str) -> Self {
        if let Some(last) = self.recommendations.last_mut() {
            last.potential_impact = Some(note);
        }
        self
    }
}

/// A named premium configuration for one cancer site.
pub struct PremiumProfile {
    pub site: CancerType,
    /// Population lifetime risk, percent
    pub base_risk: f64,
    pub horizons: Horizons,
    pub thresholds: Thresholds,
    /// Completes "{level} risk based on ..."
    pub basis: &'static str,
    pub rules: Vec<Rule<PremiumAnswers, Multiplier>>,
    pub screening: Vec<ScreeningRule>,
    /// Percent of the risk addressable through lifestyle change
    pub reduction_potential: fn(&PremiumAnswers) -> f64,
}

impl PremiumProfile {
    pub fn assess(&self, answers: &PremiumAnswers) -> RiskAssessment {
        let span = debug_span!("premium_assessment", site = ?self.site);
        let _enter = span.enter();

        let mut multiplier = 1.0;
        let mut modifiable_factors = Vec::new();
        let mut non_modifiable_factors = Vec::new();
        let mut recommendations = Vec::new();

        for rule in &self.rules {
            let Some(branch) = rule.fire(answers) else {
                continue;
            };
            let effect = &branch.effect;
            debug!(rule = branch.label, factor = effect.factor, "rule fired");

            multiplier *= effect.factor;
            if let Some(template) = &effect.risk_factor {
                match template.class {
                    FactorClass::Modifiable => modifiable_factors.push(template.emit()),
                    FactorClass::NonModifiable => non_modifiable_factors.push(template.emit()),
                }
            }
            recommendations.extend(effect.recommendations.iter().map(RecommendationTemplate::emit));
        }

        if recommendations.is_empty() {
            recommendations.push(fallback_recommendation());
        }

        let absolute_risk = absolute_risk(self.base_risk, multiplier, self.horizons);
        let risk_level = self.thresholds.classify(absolute_risk.lifetime);

        let context = ScreeningContext {
            age: answers.age,
            pack_years: answers.pack_years(),
            level: risk_level,
        };
        let screening_timeline = self
            .screening
            .iter()
            .filter_map(|rule| rule.fire(&context))
            .flat_map(|branch| branch.effect.iter().map(|test| test.emit()))
            .collect();

        debug!(
            multiplier,
            lifetime = absolute_risk.lifetime,
            level = %risk_level,
            "premium assessment complete"
        );

        RiskAssessment {
            site: self.site,
            cancer_type: self.site.label(DetailLevel::Premium).to_string(),
            risk_level,
            absolute_risk,
            relative_risk: multiplier,
            risk_category: format!("{} risk based on {}", risk_level, self.basis),
            modifiable_factors,
            non_modifiable_factors,
            recommendations,
            screening_timeline,
            risk_reduction_potential: Some((self.reduction_potential)(answers)),
            risk_model: None,
        }
    }
}

/// Horizon figures from the accumulated multiplier.
pub fn absolute_risk(base_risk: f64, multiplier: f64, horizons: Horizons) -> AbsoluteRisk {
    let product = base_risk * multiplier;
    AbsoluteRisk {
        five_year: product * horizons.five_year,
        ten_year: product * horizons.ten_year,
        lifetime: product.clamp(0.0, LIFETIME_CAP),
    }
}

fn fallback_recommendation() -> Recommendation {
    Recommendation {
        category: RecommendationCategory::Medical,
        priority: FALLBACK_PRIORITY,
        action: FALLBACK_ACTION.to_string(),
        description: FALLBACK_DESCRIPTION.to_string(),
        potential_impact: None,
    }
}
