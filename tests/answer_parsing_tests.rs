//! Reading collector records into typed answers.

use indoc::indoc;
use oncorisk::answers::vocabulary::{CancerSite, GeneticTesting, SmokingStatus};
use oncorisk::io::parse_answer_record;
use oncorisk::{
    assess_record, into_result, AnswerError, BasicAnswers, DetailLevel, ParseOptions,
    PremiumAnswers,
};
use pretty_assertions::assert_eq;

const STRICT: ParseOptions = ParseOptions {
    strict_questions: true,
};

#[test]
fn test_full_premium_record_parses() {
    let record = parse_answer_record(indoc! {r#"
        {
          "age": "58",
          "biologicalSex": "female",
          "height": 165,
          "weight": 90,
          "familyHistoryParents": { "breast": true, "lung": false },
          "familyHistorySiblings": { "colorectal": true },
          "geneticTesting": "positive_brca",
          "pregnancies": 0,
          "smokingStatus": "former",
          "smokingPackYears": 12.5,
          "countryOfBirth": "Canada"
        }
    "#})
    .unwrap();

    let answers = into_result(PremiumAnswers::from_record(&record, STRICT)).unwrap();

    assert_eq!(answers.age, Some(58.0));
    assert_eq!(answers.pregnancies, Some(0));
    assert_eq!(answers.genetic_testing, Some(GeneticTesting::PositiveBrca));
    assert_eq!(answers.smoking_status, Some(SmokingStatus::Former));
    assert!(answers.family_history_of(CancerSite::Breast));
    assert!(answers.family_history_of(CancerSite::Colorectal));
    assert!(!answers.family_history_of(CancerSite::Lung));
    assert!(answers.bmi().is_some_and(|bmi| bmi > 30.0));
}

#[test]
fn test_null_and_blank_answers_are_absent() {
    let record = parse_answer_record(indoc! {r#"
        { "age": null, "smokingStatus": "  ", "pregnancies": null }
    "#})
    .unwrap();

    let answers = into_result(BasicAnswers::from_record(&record, ParseOptions::default())).unwrap();
    assert_eq!(answers, BasicAnswers::default());
}

#[test]
fn test_all_problems_are_collected() {
    let record = parse_answer_record(indoc! {r#"
        {
          "age": -4,
          "biologicalSex": true,
          "smokingStatus": "sometimes",
          "pregnancies": 1.5,
          "familyHistory": "lung"
        }
    "#})
    .unwrap();

    let errors = into_result(BasicAnswers::from_record(&record, ParseOptions::default()))
        .unwrap_err();
    let questions: Vec<&str> = errors.errors().iter().map(AnswerError::question).collect();

    assert_eq!(errors.len(), 5);
    for question in [
        "age",
        "biologicalSex",
        "smokingStatus",
        "pregnancies",
        "familyHistory",
    ] {
        assert!(questions.contains(&question), "missing {question}");
    }
}

#[test]
fn test_unknown_question_only_fails_strict_parsing() {
    let record = parse_answer_record(r#"{ "age": 40, "shoeSize": 42 }"#).unwrap();

    assert!(assess_record(&record, DetailLevel::Basic, ParseOptions::default()).is_ok());

    let errors = assess_record(&record, DetailLevel::Basic, STRICT).unwrap_err();
    assert_eq!(
        errors.errors(),
        &[AnswerError::UnknownQuestion {
            question: "shoeSize".to_string()
        }]
    );
}

#[test]
fn test_non_object_record_is_rejected() {
    assert!(parse_answer_record("[1, 2, 3]").is_err());
    assert!(parse_answer_record("not json").is_err());
}
