//! Aggregators and the profile summary built on top of them.

use oncorisk::answers::vocabulary::{BiologicalSex, SmokingStatus};
use oncorisk::{
    action_plan, calculate_basic_risks, calculate_risks, BasicAnswers, CancerType,
    PremiumAnswers, RiskLevel, RiskSummary,
};
use pretty_assertions::assert_eq;

#[test]
fn test_premium_male_gets_prostate_and_no_female_sites() {
    let answers = PremiumAnswers {
        age: Some(60.0),
        biological_sex: Some(BiologicalSex::Male),
        ..Default::default()
    };
    let sites: Vec<CancerType> = calculate_risks(&answers).iter().map(|a| a.site).collect();

    assert_eq!(
        sites,
        vec![
            CancerType::Lung,
            CancerType::Colorectal,
            CancerType::Skin,
            CancerType::Prostate,
            CancerType::Bladder,
            CancerType::Pancreatic,
            CancerType::Liver,
        ]
    );
}

#[test]
fn test_basic_female_gets_breast_and_ovarian() {
    let answers = BasicAnswers {
        biological_sex: Some(BiologicalSex::Female),
        ..Default::default()
    };
    let labels: Vec<String> = calculate_basic_risks(&answers)
        .into_iter()
        .map(|a| a.cancer_type)
        .collect();

    assert_eq!(
        labels,
        vec![
            "Lung Cancer",
            "Colorectal Cancer",
            "Skin Cancer/Melanoma",
            "Breast Cancer",
            "Ovarian Cancer",
            "Pancreatic Cancer",
        ]
    );
}

#[test]
fn test_other_sex_gets_sex_neutral_sites_only() {
    let answers = PremiumAnswers {
        biological_sex: Some(BiologicalSex::Other),
        ..Default::default()
    };
    assert_eq!(calculate_risks(&answers).len(), 6);
}

#[test]
fn test_every_assessment_carries_a_recommendation() {
    let premium = calculate_risks(&PremiumAnswers {
        biological_sex: Some(BiologicalSex::Female),
        ..Default::default()
    });
    assert!(premium.iter().all(|a| !a.recommendations.is_empty()));

    let basic = calculate_basic_risks(&BasicAnswers {
        biological_sex: Some(BiologicalSex::Male),
        ..Default::default()
    });
    assert!(basic.iter().all(|a| !a.recommendations.is_empty()));
}

#[test]
fn test_summary_of_a_heavy_smoker() {
    let assessments = calculate_basic_risks(&BasicAnswers {
        age: Some(70.0),
        smoking_status: Some(SmokingStatus::Current),
        smoking_pack_years: Some(40.0),
        ..Default::default()
    });
    let summary = RiskSummary::from_assessments(&assessments);

    assert_eq!(summary.cancers_assessed, 4);
    assert_eq!(summary.overall_level, RiskLevel::High);
    assert!(summary.level_counts.high >= 1);
    assert_eq!(
        summary.level_counts.high
            + summary.level_counts.elevated
            + summary.level_counts.average
            + summary.level_counts.low,
        4
    );

    let plan = action_plan(&assessments, 3);
    assert!(plan.len() <= 3);
    assert_eq!(plan[0].cancer_type, "Lung Cancer");
    assert_eq!(plan[0].action, "Quit smoking immediately");
}
