//! Aggregators: run every applicable site table in a fixed order.
//!
//! Sex-specific sites are gated on `biologicalSex`. Any value other than
//! `female` or `male` (including an unanswered question) gets only the
//! sex-neutral sites.

use crate::answers::{self, AnswerRecord, BasicAnswers, ParseOptions, PremiumAnswers};
use crate::assessment::{BasicRiskAssessment, CancerType, DetailLevel, RiskAssessment};
use crate::errors::AnswerErrors;
use crate::profiles::{basic, premium};
use serde::Serialize;
use tracing::info;

/// Premium site order.
pub fn premium_sites(answers: &PremiumAnswers) -> Vec<CancerType> {
    let mut sites = vec![CancerType::Lung, CancerType::Colorectal, CancerType::Skin];
    if answers.is_female() {
        sites.extend([CancerType::Breast, CancerType::Cervical, CancerType::Ovarian]);
    }
    if answers.is_male() {
        sites.push(CancerType::Prostate);
    }
    sites.extend([CancerType::Bladder, CancerType::Pancreatic, CancerType::Liver]);
    sites
}

/// Basic site order.
pub fn basic_sites(answers: &BasicAnswers) -> Vec<CancerType> {
    let mut sites = vec![CancerType::Lung, CancerType::Colorectal, CancerType::Skin];
    if answers.is_female() {
        sites.extend([CancerType::Breast, CancerType::Ovarian]);
    }
    if answers.is_male() {
        sites.push(CancerType::Prostate);
    }
    sites.push(CancerType::Pancreatic);
    sites
}

/// All premium assessments for one answer record, in report order.
pub fn calculate_risks(answers: &PremiumAnswers) -> Vec<RiskAssessment> {
    let assessments: Vec<RiskAssessment> = premium_sites(answers)
        .into_iter()
        .map(|site| premium::profile(site).assess(answers))
        .collect();
    info!(count = assessments.len(), "premium assessments calculated");
    assessments
}

/// All basic assessments for one answer record, in report order.
pub fn calculate_basic_risks(answers: &BasicAnswers) -> Vec<BasicRiskAssessment> {
    let assessments: Vec<BasicRiskAssessment> = basic_sites(answers)
        .into_iter()
        .filter_map(basic::profile)
        .map(|profile| profile.assess(answers))
        .collect();
    info!(count = assessments.len(), "basic assessments calculated");
    assessments
}

/// Assessments of either flow.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Assessments {
    Basic(Vec<BasicRiskAssessment>),
    Premium(Vec<RiskAssessment>),
}

impl Assessments {
    pub fn level(&self) -> DetailLevel {
        match self {
            Assessments::Basic(_) => DetailLevel::Basic,
            Assessments::Premium(_) => DetailLevel::Premium,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Assessments::Basic(list) => list.len(),
            Assessments::Premium(list) => list.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn sites(&self) -> Vec<CancerType> {
        match self {
            Assessments::Basic(list) => list.iter().map(|a| a.site).collect(),
            Assessments::Premium(list) => list.iter().map(|a| a.site).collect(),
        }
    }
}

/// Parse a raw record for `level` and run the matching aggregator.
pub fn assess_record(
    record: &AnswerRecord,
    level: DetailLevel,
    options: ParseOptions,
) -> Result<Assessments, AnswerErrors> {
    match level {
        DetailLevel::Basic => {
            let answers = answers::into_result(BasicAnswers::from_record(record, options))?;
            Ok(Assessments::Basic(calculate_basic_risks(&answers)))
        }
        DetailLevel::Premium => {
            let answers = answers::into_result(PremiumAnswers::from_record(record, options))?;
            Ok(Assessments::Premium(calculate_risks(&answers)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::vocabulary::BiologicalSex;

    #[test]
    fn test_premium_order_for_each_sex() {
        let female = PremiumAnswers {
            biological_sex: Some(BiologicalSex::Female),
            ..Default::default()
        };
        assert_eq!(
            premium_sites(&female),
            vec![
                CancerType::Lung,
                CancerType::Colorectal,
                CancerType::Skin,
                CancerType::Breast,
                CancerType::Cervical,
                CancerType::Ovarian,
                CancerType::Bladder,
                CancerType::Pancreatic,
                CancerType::Liver,
            ]
        );

        let unspecified = PremiumAnswers::default();
        assert_eq!(premium_sites(&unspecified).len(), 6);
    }

    #[test]
    fn test_basic_male_includes_prostate_only() {
        let male = BasicAnswers {
            biological_sex: Some(BiologicalSex::Male),
            ..Default::default()
        };
        assert_eq!(
            basic_sites(&male),
            vec![
                CancerType::Lung,
                CancerType::Colorectal,
                CancerType::Skin,
                CancerType::Prostate,
                CancerType::Pancreatic,
            ]
        );
    }

    #[test]
    fn test_assess_record_reports_parse_errors() {
        let record = AnswerRecord::new().with("smokingStatus", "sometimes");
        let err = assess_record(&record, DetailLevel::Premium, ParseOptions::default())
            .unwrap_err();
        assert_eq!(err.len(), 1);
    }

    #[test]
    fn test_assess_record_dispatches_on_level() {
        let record = AnswerRecord::new().with("biologicalSex", "other");
        let basic = assess_record(&record, DetailLevel::Basic, ParseOptions::default()).unwrap();
        assert_eq!(basic.level(), DetailLevel::Basic);
        assert_eq!(basic.len(), 4);

        let premium =
            assess_record(&record, DetailLevel::Premium, ParseOptions::default()).unwrap();
        assert_eq!(premium.level(), DetailLevel::Premium);
        assert_eq!(premium.len(), 6);
    }
}
