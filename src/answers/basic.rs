//! Typed answers of the short questionnaire.

use super::record::{AnswerRecord, AnswerValidation, FieldReader, ParseOptions};
use super::vocabulary::*;
use super::{body_mass_index, is_over};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Question ids of the short questionnaire.
pub const QUESTION_IDS: &[&str] = &[
    "age",
    "biologicalSex",
    "raceEthnicity",
    "height",
    "weight",
    "familyHistory",
    "smokingStatus",
    "smokingPackYears",
    "alcoholConsumption",
    "physicalActivity",
    "fruitsVegetables",
    "redMeatConsumption",
    "sunExposure",
    "skinType",
    "ageAtMenarche",
    "pregnancies",
    "mammogramHistory",
    "colonoscopyHistory",
    "healthcareAccess",
];

/// Answers to the short questionnaire. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BasicAnswers {
    pub age: Option<f64>,
    pub biological_sex: Option<BiologicalSex>,
    pub race_ethnicity: Option<RaceEthnicity>,
    /// Centimetres
    pub height: Option<f64>,
    /// Kilograms
    pub weight: Option<f64>,
    pub family_history: BTreeSet<CancerSite>,
    pub smoking_status: Option<SmokingStatus>,
    pub smoking_pack_years: Option<f64>,
    pub alcohol_consumption: Option<AlcoholConsumption>,
    pub physical_activity: Option<PhysicalActivity>,
    pub fruits_vegetables: Option<FruitsVegetables>,
    pub red_meat_consumption: Option<MeatFrequency>,
    pub sun_exposure: Option<SunExposure>,
    pub skin_type: Option<SkinType>,
    pub age_at_menarche: Option<f64>,
    pub pregnancies: Option<u32>,
    pub mammogram_history: Option<MammogramHistory>,
    pub colonoscopy_history: Option<ColonoscopyHistory>,
    pub healthcare_access: Option<HealthcareAccess>,
}

impl BasicAnswers {
    /// Read a collector record, accumulating every invalid answer.
    pub fn from_record(record: &AnswerRecord, options: ParseOptions) -> AnswerValidation<Self> {
        let mut r = FieldReader::new(record);
        let answers = BasicAnswers {
            age: r.number("age"),
            biological_sex: r.choice("biologicalSex"),
            race_ethnicity: r.choice("raceEthnicity"),
            height: r.number("height"),
            weight: r.number("weight"),
            family_history: r.selections("familyHistory"),
            smoking_status: r.choice("smokingStatus"),
            smoking_pack_years: r.number("smokingPackYears"),
            alcohol_consumption: r.choice("alcoholConsumption"),
            physical_activity: r.choice("physicalActivity"),
            fruits_vegetables: r.choice("fruitsVegetables"),
            red_meat_consumption: r.choice("redMeatConsumption"),
            sun_exposure: r.choice("sunExposure"),
            skin_type: r.choice("skinType"),
            age_at_menarche: r.number("ageAtMenarche"),
            pregnancies: r.count("pregnancies"),
            mammogram_history: r.choice("mammogramHistory"),
            colonoscopy_history: r.choice("colonoscopyHistory"),
            healthcare_access: r.choice("healthcareAccess"),
        };
        r.finish(answers, QUESTION_IDS, options)
    }

    /// Age present and strictly greater than `years`.
    pub fn age_over(&self, years: f64) -> bool {
        is_over(self.age, years)
    }

    /// Age present and at least `years`.
    pub fn age_at_least(&self, years: f64) -> bool {
        self.age.is_some_and(|age| age != 0.0 && age >= years)
    }

    pub fn is_female(&self) -> bool {
        self.biological_sex == Some(BiologicalSex::Female)
    }

    pub fn is_male(&self) -> bool {
        self.biological_sex == Some(BiologicalSex::Male)
    }

    pub fn family_history_of(&self, site: CancerSite) -> bool {
        self.family_history.contains(&site)
    }

    /// Pack-years, zero when not answered.
    pub fn pack_years(&self) -> f64 {
        self.smoking_pack_years.unwrap_or(0.0)
    }

    pub fn bmi(&self) -> Option<f64> {
        body_mass_index(self.weight, self.height)
    }

    /// Menarche age answered (non-zero) and below 12.
    pub fn early_menarche(&self) -> bool {
        self.age_at_menarche
            .is_some_and(|age| age != 0.0 && age < 12.0)
    }

    pub fn is_inactive(&self) -> bool {
        matches!(
            self.physical_activity,
            Some(PhysicalActivity::Inactive | PhysicalActivity::Low)
        )
    }
}
