//! Multiplicative tables of the comprehensive questionnaire.

use oncorisk::answers::vocabulary::{BiologicalSex, CancerSite, PapSmearHistory};
use oncorisk::{
    calculate_breast_cancer_risk, calculate_cervical_cancer_risk,
    calculate_colorectal_cancer_risk, calculate_lung_cancer_risk, Impact, PremiumAnswers,
    RiskLevel, ScreeningPriority,
};
use pretty_assertions::assert_eq;

fn close(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-9
}

#[test]
fn test_empty_record_gives_low_lung_risk() {
    let result = calculate_lung_cancer_risk(&PremiumAnswers::default());
    assert_eq!(result.relative_risk, 1.0);
    assert!(close(result.absolute_risk.lifetime, 0.6));
    assert_eq!(result.risk_level, RiskLevel::Low);
    assert!(!result.recommendations.is_empty());
}

#[test]
fn test_colorectal_age_and_parent_history_multiply() {
    let result = calculate_colorectal_cancer_risk(&PremiumAnswers {
        age: Some(55.0),
        family_history_parents: [CancerSite::Colorectal].into_iter().collect(),
        ..Default::default()
    });

    assert!(close(result.relative_risk, 3.96));
    assert!(close(result.absolute_risk.lifetime, 17.028));
    assert!(close(result.absolute_risk.five_year, 17.028 * 0.08));
    assert!(close(result.absolute_risk.ten_year, 17.028 * 0.18));
    assert_eq!(result.risk_level, RiskLevel::High);
    assert_eq!(
        result.risk_category,
        "High risk based on lifestyle and family history"
    );

    let factors: Vec<_> = result
        .non_modifiable_factors
        .iter()
        .map(|f| (f.factor.as_str(), f.impact))
        .collect();
    assert_eq!(
        factors,
        vec![
            ("Age over 50", Impact::Moderate),
            ("Family history of colorectal cancer", Impact::High),
        ]
    );

    assert_eq!(result.screening_timeline.len(), 1);
    assert_eq!(result.screening_timeline[0].test, "Colonoscopy");
    assert_eq!(result.screening_timeline[0].start_age, 40);
    assert_eq!(
        result.screening_timeline[0].priority,
        ScreeningPriority::HighRisk
    );
    assert_eq!(result.risk_reduction_potential, Some(40.0));
}

#[test]
fn test_sibling_history_counts_like_parent_history() {
    let parent = calculate_colorectal_cancer_risk(&PremiumAnswers {
        family_history_parents: [CancerSite::Colorectal].into_iter().collect(),
        ..Default::default()
    });
    let sibling = calculate_colorectal_cancer_risk(&PremiumAnswers {
        family_history_siblings: [CancerSite::Colorectal].into_iter().collect(),
        ..Default::default()
    });
    assert_eq!(parent.relative_risk, sibling.relative_risk);
}

#[test]
fn test_breast_with_a_pregnancy_stays_at_baseline() {
    let result = calculate_breast_cancer_risk(&PremiumAnswers {
        age: Some(40.0),
        biological_sex: Some(BiologicalSex::Female),
        pregnancies: Some(1),
        ..Default::default()
    });

    assert_eq!(result.relative_risk, 1.0);
    assert!(close(result.absolute_risk.lifetime, 12.9));
    assert_eq!(result.risk_level, RiskLevel::Average);
    assert!(result.non_modifiable_factors.is_empty());
    assert_eq!(result.screening_timeline.len(), 1);
    assert_eq!(result.screening_timeline[0].test, "Mammography");
    assert_eq!(result.screening_timeline[0].start_age, 50);
}

#[test]
fn test_zero_pregnancies_raises_breast_risk() {
    let result = calculate_breast_cancer_risk(&PremiumAnswers {
        age: Some(40.0),
        biological_sex: Some(BiologicalSex::Female),
        pregnancies: Some(0),
        ..Default::default()
    });
    assert!(close(result.relative_risk, 1.3));
    assert_eq!(result.non_modifiable_factors[0].factor, "No pregnancies");
}

#[test]
fn test_regular_pap_smears_keep_cervical_risk_low() {
    let result = calculate_cervical_cancer_risk(&PremiumAnswers {
        age: Some(35.0),
        biological_sex: Some(BiologicalSex::Female),
        pap_smear_history: Some(PapSmearHistory::Regular),
        ..Default::default()
    });

    assert!(close(result.relative_risk, 0.36));
    assert_eq!(result.risk_level, RiskLevel::Low);
    let tests: Vec<_> = result
        .screening_timeline
        .iter()
        .map(|s| s.test.as_str())
        .collect();
    assert_eq!(tests, vec!["Pap smear", "Pap + HPV test"]);
    assert_eq!(result.risk_reduction_potential, Some(80.0));
}

#[test]
fn test_premium_never_reports_a_model_name() {
    let result = calculate_colorectal_cancer_risk(&PremiumAnswers::default());
    assert_eq!(result.risk_model, None);
    assert_eq!(result.cancer_type, "Colorectal Cancer");
}
