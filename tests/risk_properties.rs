//! Property-based tests for both pipelines
//!
//! These tests verify invariants that should hold for all answer sets:
//! - Basic scores never exceed 10 and agree with their level band
//! - Premium lifetime risk stays within 0-85% and horizons are ordered
//! - A breast cancer family history never lowers breast risk
//! - Every assessment carries at least one recommendation
//! - Site gating depends only on biological sex

use oncorisk::answers::vocabulary::{
    AlcoholConsumption, BiologicalSex, CancerSite, PhysicalActivity, SmokingStatus,
};
use oncorisk::{
    calculate_basic_risks, calculate_breast_cancer_risk, calculate_risks, BasicAnswers,
    PremiumAnswers, RiskLevel,
};
use proptest::prelude::*;
use proptest::sample::select;
use std::collections::BTreeSet;

fn sex() -> impl Strategy<Value = Option<BiologicalSex>> {
    proptest::option::of(select(vec![
        BiologicalSex::Male,
        BiologicalSex::Female,
        BiologicalSex::Other,
    ]))
}

fn smoking() -> impl Strategy<Value = Option<SmokingStatus>> {
    proptest::option::of(select(vec![
        SmokingStatus::Never,
        SmokingStatus::Former,
        SmokingStatus::Current,
    ]))
}

fn activity() -> impl Strategy<Value = Option<PhysicalActivity>> {
    proptest::option::of(select(vec![
        PhysicalActivity::Inactive,
        PhysicalActivity::Low,
        PhysicalActivity::Moderate,
        PhysicalActivity::High,
    ]))
}

fn alcohol() -> impl Strategy<Value = Option<AlcoholConsumption>> {
    proptest::option::of(select(vec![
        AlcoholConsumption::Never,
        AlcoholConsumption::Light,
        AlcoholConsumption::Moderate,
        AlcoholConsumption::Heavy,
    ]))
}

fn family() -> impl Strategy<Value = BTreeSet<CancerSite>> {
    proptest::collection::btree_set(
        select(vec![
            CancerSite::Breast,
            CancerSite::Lung,
            CancerSite::Colorectal,
            CancerSite::Prostate,
            CancerSite::Skin,
            CancerSite::Pancreatic,
        ]),
        0..4,
    )
}

prop_compose! {
    fn basic_answers()(
        age in proptest::option::of(18.0f64..100.0),
        biological_sex in sex(),
        smoking_status in smoking(),
        smoking_pack_years in proptest::option::of(0.0f64..80.0),
        physical_activity in activity(),
        alcohol_consumption in alcohol(),
        family_history in family(),
        weight in proptest::option::of(40.0f64..160.0),
        height in proptest::option::of(140.0f64..210.0),
        pregnancies in proptest::option::of(0u32..6),
    ) -> BasicAnswers {
        BasicAnswers {
            age,
            biological_sex,
            smoking_status,
            smoking_pack_years,
            physical_activity,
            alcohol_consumption,
            family_history,
            weight,
            height,
            pregnancies,
            ..Default::default()
        }
    }
}

prop_compose! {
    fn premium_answers()(
        age in proptest::option::of(18.0f64..100.0),
        biological_sex in sex(),
        smoking_status in smoking(),
        smoking_pack_years in proptest::option::of(0.0f64..80.0),
        physical_activity in activity(),
        alcohol_consumption in alcohol(),
        family_history_parents in family(),
        family_history_siblings in family(),
        weight in proptest::option::of(40.0f64..160.0),
        height in proptest::option::of(140.0f64..210.0),
        pregnancies in proptest::option::of(0u32..6),
    ) -> PremiumAnswers {
        PremiumAnswers {
            age,
            biological_sex,
            smoking_status,
            smoking_pack_years,
            physical_activity,
            alcohol_consumption,
            family_history_parents,
            family_history_siblings,
            weight,
            height,
            pregnancies,
            ..Default::default()
        }
    }
}

fn band(score: i32) -> RiskLevel {
    match score {
        s if s >= 8 => RiskLevel::High,
        s if s >= 6 => RiskLevel::Elevated,
        s if s >= 4 => RiskLevel::Average,
        _ => RiskLevel::Low,
    }
}

fn expected_site_count(sex: Option<BiologicalSex>, neutral: usize, female: usize) -> usize {
    match sex {
        Some(BiologicalSex::Female) => neutral + female,
        Some(BiologicalSex::Male) => neutral + 1,
        _ => neutral,
    }
}

proptest! {
    /// Property: reported score is capped at 10 and its band is the level
    #[test]
    fn prop_basic_score_matches_level(answers in basic_answers()) {
        for assessment in calculate_basic_risks(&answers) {
            prop_assert!(assessment.risk_score <= 10);
            prop_assert_eq!(assessment.risk_level, band(assessment.risk_score));
            prop_assert!(!assessment.recommendations.is_empty());
        }
    }

    /// Property: lifetime risk is bounded and horizons are ordered
    #[test]
    fn prop_premium_risk_is_bounded(answers in premium_answers()) {
        for assessment in calculate_risks(&answers) {
            let risk = assessment.absolute_risk;
            prop_assert!(assessment.relative_risk > 0.0);
            prop_assert!((0.0..=85.0).contains(&risk.lifetime));
            prop_assert!(risk.five_year >= 0.0);
            prop_assert!(risk.five_year <= risk.ten_year);
            if risk.lifetime < 85.0 {
                prop_assert!(risk.ten_year <= risk.lifetime);
            }
            prop_assert!(!assessment.recommendations.is_empty());
            prop_assert!(assessment
                .risk_category
                .starts_with(assessment.risk_level.as_str()));
        }
    }

    /// Property: adding a parent with breast cancer never lowers breast risk
    #[test]
    fn prop_breast_family_history_is_monotone(answers in premium_answers()) {
        let mut without = answers.clone();
        without.family_history_parents.remove(&CancerSite::Breast);
        let mut with = answers;
        with.family_history_parents.insert(CancerSite::Breast);

        prop_assert!(
            calculate_breast_cancer_risk(&with).absolute_risk.lifetime
                >= calculate_breast_cancer_risk(&without).absolute_risk.lifetime
        );
    }

    /// Property: only biological sex decides which sites are assessed
    #[test]
    fn prop_site_count_follows_sex(
        basic in basic_answers(),
        premium in premium_answers(),
    ) {
        prop_assert_eq!(
            calculate_basic_risks(&basic).len(),
            expected_site_count(basic.biological_sex, 4, 2)
        );
        prop_assert_eq!(
            calculate_risks(&premium).len(),
            expected_site_count(premium.biological_sex, 6, 3)
        );
    }

    /// Property: assessment is deterministic
    #[test]
    fn prop_assessment_is_deterministic(answers in premium_answers()) {
        prop_assert_eq!(calculate_risks(&answers), calculate_risks(&answers));
    }
}
