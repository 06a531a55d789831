//! Typed answers of the comprehensive questionnaire.

use super::record::{AnswerRecord, AnswerValidation, FieldReader, ParseOptions};
use super::vocabulary::*;
use super::{body_mass_index, is_over};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Question ids the premium tables read.
pub const QUESTION_IDS: &[&str] = &[
    "age",
    "biologicalSex",
    "raceEthnicity",
    "height",
    "weight",
    "familyHistoryParents",
    "familyHistorySiblings",
    "geneticTesting",
    "chronicConditions",
    "ageAtMenarche",
    "pregnancies",
    "ageAtFirstBirth",
    "breastfeedingMonths",
    "birthControlUse",
    "hrtUse",
    "menopauseStatus",
    "smokingStatus",
    "smokingPackYears",
    "secondhandSmoke",
    "alcoholConsumption",
    "physicalActivity",
    "fruitsVegetables",
    "redMeatConsumption",
    "processedMeat",
    "occupationalExposures",
    "airPollution",
    "radonExposure",
    "skinType",
    "sunExposure",
    "severeSunburns",
    "tanningBedUse",
    "sunProtection",
    "papSmearHistory",
    "colonoscopyHistory",
];

/// Questions the comprehensive questionnaire asks that no risk table reads.
/// Accepted in strict mode so a complete record stays valid.
pub const COLLECTED_ONLY_IDS: &[&str] = &[
    "countryOfBirth",
    "currentLocation",
    "earlyOnsetCancers",
    "multipleRelativesSameCancer",
    "ashkenaziJewish",
    "previousCancer",
    "previousCancerDetails",
    "benignConditions",
    "radiationExposure",
    "immunosuppression",
    "ageAtMenopause",
    "breastDensity",
    "ageStartedSmoking",
    "ageQuitSmoking",
    "otherTobacco",
    "bingeFrequency",
    "alcoholYears",
    "fiberIntake",
    "sedentaryTime",
    "dietType",
    "supplements",
    "asbestosYears",
    "shiftWork",
    "waterQuality",
    "pesticideExposure",
    "tanningBedYears",
    "moleChanges",
    "mammogramHistory",
    "prostateScreening",
    "skinCancerScreening",
    "lungScreening",
    "healthcareAccess",
    "primaryCareProvider",
    "stressLevel",
    "sleepQuality",
    "socialSupport",
    "mentalHealthHistory",
    "socioeconomicStatus",
    "education",
];

/// Answers to the comprehensive questionnaire. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PremiumAnswers {
    pub age: Option<f64>,
    pub biological_sex: Option<BiologicalSex>,
    pub race_ethnicity: Option<RaceEthnicity>,
    pub height: Option<f64>,
    pub weight: Option<f64>,

    pub family_history_parents: BTreeSet<CancerSite>,
    pub family_history_siblings: BTreeSet<CancerSite>,
    pub genetic_testing: Option<GeneticTesting>,
    pub chronic_conditions: BTreeSet<ChronicCondition>,

    pub age_at_menarche: Option<f64>,
    pub pregnancies: Option<u32>,
    pub age_at_first_birth: Option<f64>,
    pub breastfeeding_months: Option<f64>,
    pub birth_control_use: Option<BirthControlUse>,
    pub hrt_use: Option<HrtUse>,
    pub menopause_status: Option<MenopauseStatus>,

    pub smoking_status: Option<SmokingStatus>,
    pub smoking_pack_years: Option<f64>,
    pub secondhand_smoke: Option<SecondhandSmoke>,
    pub alcohol_consumption: Option<AlcoholConsumption>,
    pub physical_activity: Option<PhysicalActivity>,
    pub fruits_vegetables: Option<FruitsVegetables>,
    pub red_meat_consumption: Option<MeatFrequency>,
    pub processed_meat: Option<MeatFrequency>,

    pub occupational_exposures: BTreeSet<OccupationalExposure>,
    pub air_pollution: Option<AirPollution>,
    pub radon_exposure: Option<RadonExposure>,

    pub skin_type: Option<SkinType>,
    pub sun_exposure: Option<SunExposure>,
    pub severe_sunburns: Option<SevereSunburns>,
    pub tanning_bed_use: Option<TanningBedUse>,
    pub sun_protection: Option<SunProtection>,

    pub pap_smear_history: Option<PapSmearHistory>,
    pub colonoscopy_history: Option<ColonoscopyHistory>,
}

impl PremiumAnswers {
    /// Read a collector record, accumulating every invalid answer.
    pub fn from_record(record: &AnswerRecord, options: ParseOptions) -> AnswerValidation<Self> {
        let mut r = FieldReader::new(record);
        let answers = PremiumAnswers {
            age: r.number("age"),
            biological_sex: r.choice("biologicalSex"),
            race_ethnicity: r.choice("raceEthnicity"),
            height: r.number("height"),
            weight: r.number("weight"),
            family_history_parents: r.selections("familyHistoryParents"),
            family_history_siblings: r.selections("familyHistorySiblings"),
            genetic_testing: r.choice("geneticTesting"),
            chronic_conditions: r.selections("chronicConditions"),
            age_at_menarche: r.number("ageAtMenarche"),
            pregnancies: r.count("pregnancies"),
            age_at_first_birth: r.number("ageAtFirstBirth"),
            breastfeeding_months: r.number("breastfeedingMonths"),
            birth_control_use: r.choice("birthControlUse"),
            hrt_use: r.choice("hrtUse"),
            menopause_status: r.choice("menopauseStatus"),
            smoking_status: r.choice("smokingStatus"),
            smoking_pack_years: r.number("smokingPackYears"),
            secondhand_smoke: r.choice("secondhandSmoke"),
            alcohol_consumption: r.choice("alcoholConsumption"),
            physical_activity: r.choice("physicalActivity"),
            fruits_vegetables: r.choice("fruitsVegetables"),
            red_meat_consumption: r.choice("redMeatConsumption"),
            processed_meat: r.choice("processedMeat"),
            occupational_exposures: r.selections("occupationalExposures"),
            air_pollution: r.choice("airPollution"),
            radon_exposure: r.choice("radonExposure"),
            skin_type: r.choice("skinType"),
            sun_exposure: r.choice("sunExposure"),
            severe_sunburns: r.choice("severeSunburns"),
            tanning_bed_use: r.choice("tanningBedUse"),
            sun_protection: r.choice("sunProtection"),
            pap_smear_history: r.choice("papSmearHistory"),
            colonoscopy_history: r.choice("colonoscopyHistory"),
        };

        let known: Vec<&str> = QUESTION_IDS
            .iter()
            .chain(COLLECTED_ONLY_IDS)
            .copied()
            .collect();
        r.finish(answers, &known, options)
    }

    pub fn age_over(&self, years: f64) -> bool {
        is_over(self.age, years)
    }

    pub fn age_at_least(&self, years: f64) -> bool {
        self.age.is_some_and(|age| age != 0.0 && age >= years)
    }

    pub fn is_female(&self) -> bool {
        self.biological_sex == Some(BiologicalSex::Female)
    }

    pub fn is_male(&self) -> bool {
        self.biological_sex == Some(BiologicalSex::Male)
    }

    /// A parent or sibling had cancer at `site`.
    pub fn family_history_of(&self, site: CancerSite) -> bool {
        self.family_history_parents.contains(&site) || self.family_history_siblings.contains(&site)
    }

    pub fn has_condition(&self, condition: ChronicCondition) -> bool {
        self.chronic_conditions.contains(&condition)
    }

    pub fn exposed_to(&self, exposure: OccupationalExposure) -> bool {
        self.occupational_exposures.contains(&exposure)
    }

    pub fn pack_years(&self) -> f64 {
        self.smoking_pack_years.unwrap_or(0.0)
    }

    pub fn bmi(&self) -> Option<f64> {
        body_mass_index(self.weight, self.height)
    }

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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AnswerError;
    use stillwater::Validation;

    #[test]
    fn test_family_history_combines_parents_and_siblings() {
        let answers = PremiumAnswers {
            family_history_siblings: [CancerSite::Colorectal].into_iter().collect(),
            ..Default::default()
        };
        assert!(answers.family_history_of(CancerSite::Colorectal));
        assert!(!answers.family_history_of(CancerSite::Lung));
    }

    #[test]
    fn test_collected_only_ids_pass_strict_mode() {
        let record = AnswerRecord::new()
            .with("stressLevel", "high")
            .with("education", "college")
            .with("age", 40);
        let strict = ParseOptions {
            strict_questions: true,
        };
        assert!(PremiumAnswers::from_record(&record, strict).is_success());
    }

    #[test]
    fn test_strict_mode_rejects_basic_only_ids() {
        let record = AnswerRecord::new().with("familyHistory", [("lung", true)]);
        let strict = ParseOptions {
            strict_questions: true,
        };
        match PremiumAnswers::from_record(&record, strict) {
            Validation::Failure(errors) => {
                let errors = errors.into_vec();
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].question(), "familyHistory");
                assert!(matches!(errors[0], AnswerError::UnknownQuestion { .. }));
            }
            Validation::Success(_) => panic!("expected strict failure"),
        }
    }

    #[test]
    fn test_chronic_conditions_use_collector_codes() {
        let record = AnswerRecord::new().with(
            "chronicConditions",
            [("hepatitisB", true), ("diabetes", true), ("ibd", false)],
        );
        let Validation::Success(answers) =
            PremiumAnswers::from_record(&record, ParseOptions::default())
        else {
            panic!("record should parse");
        };
        assert!(answers.has_condition(ChronicCondition::HepatitisB));
        assert!(answers.has_condition(ChronicCondition::Diabetes));
        assert!(!answers.has_condition(ChronicCondition::Ibd));
    }
}
