//! Multiplier tables of the comprehensive questionnaire.
//!
//! Every table anchors on a population lifetime risk percentage. Fired rules
//! multiply it, and the product is reported over five years, ten years and a
//! lifetime (capped at 85%). Band cut points are per site.

use crate::answers::vocabulary::{
    AirPollution, AlcoholConsumption, BirthControlUse, CancerSite, ChronicCondition,
    ColonoscopyHistory, FruitsVegetables, GeneticTesting, HrtUse, MeatFrequency, MenopauseStatus,
    OccupationalExposure, PapSmearHistory, PhysicalActivity, RaceEthnicity, RadonExposure,
    SecondhandSmoke, SevereSunburns, SkinType, SmokingStatus, SunExposure, SunProtection,
    TanningBedUse,
};
use crate::answers::PremiumAnswers;
use crate::assessment::Priority::{High, Low, Medium};
use crate::assessment::RecommendationCategory::{Genetic, Lifestyle, Medical, Screening};
use crate::assessment::{CancerType, Impact, RiskAssessment, ScreeningPriority};
use crate::engine::{
    Horizons, Multiplier, PremiumProfile, Rule, ScreeningContext, ScreeningTemplate, Thresholds,
};
use once_cell::sync::Lazy;

type PremiumRule = Rule<PremiumAnswers, Multiplier>;

fn is_current(a: &PremiumAnswers) -> bool {
    a.smoking_status == Some(SmokingStatus::Current)
}

fn is_former(a: &PremiumAnswers) -> bool {
    a.smoking_status == Some(SmokingStatus::Former)
}

fn is_black(a: &PremiumAnswers) -> bool {
    a.race_ethnicity == Some(RaceEthnicity::Black)
}

fn is_obese(a: &PremiumAnswers) -> bool {
    a.bmi().is_some_and(|bmi| bmi > 30.0)
}

fn is_highly_active(a: &PremiumAnswers) -> bool {
    a.physical_activity == Some(PhysicalActivity::High)
}

fn drinks_heavily(a: &PremiumAnswers) -> bool {
    a.alcohol_consumption == Some(AlcoholConsumption::Heavy)
}

fn eats_red_meat_daily(a: &PremiumAnswers) -> bool {
    a.red_meat_consumption == Some(MeatFrequency::Daily)
}

fn eats_six_plus_servings(a: &PremiumAnswers) -> bool {
    a.fruits_vegetables == Some(FruitsVegetables::SixPlus)
}

fn tested_positive(a: &PremiumAnswers) -> bool {
    a.genetic_testing == Some(GeneticTesting::Positive)
}

fn has_diabetes(a: &PremiumAnswers) -> bool {
    a.has_condition(ChronicCondition::Diabetes)
}

/// Over 65 / over 50 age bands shared by several sites.
fn age_rule(
    over_65: (f64, &'static str),
    over_50: Option<(f64, &'static str)>,
) -> PremiumRule {
    let rule = Rule::when(
        "age over 65",
        |a: &PremiumAnswers| a.age_over(65.0),
        Multiplier::by(over_65.0).non_modifiable("Age over 65", Impact::High, over_65.1),
    );
    match over_50 {
        Some((factor, description)) => rule.otherwise_when(
            "age over 50",
            |a: &PremiumAnswers| a.age_over(50.0),
            Multiplier::by(factor).non_modifiable("Age over 50", Impact::Moderate, description),
        ),
        None => rule,
    }
}

fn male_rule(factor: f64, impact: Impact, description: &'static str) -> PremiumRule {
    Rule::when(
        "male",
        |a: &PremiumAnswers| a.is_male(),
        Multiplier::by(factor).non_modifiable("Male gender", impact, description),
    )
}

fn keep_exercising(factor: f64) -> Multiplier {
    Multiplier::by(factor).recommend(
        Lifestyle,
        Medium,
        "Continue regular exercise",
        "Maintain your excellent exercise routine",
    )
}

fn lung() -> PremiumProfile {
    PremiumProfile {
        site: CancerType::Lung,
        base_risk: 0.6,
        horizons: Horizons::new(0.05, 0.12),
        thresholds: Thresholds::new(20.0, 5.0, 1.5),
        basis: "smoking history and other factors",
        rules: vec![
            age_rule(
                (2.5, "Lung cancer risk increases significantly with age"),
                Some((1.5, "Age is a major risk factor for lung cancer")),
            ),
            male_rule(1.2, Impact::Low, "Men have slightly higher lung cancer rates"),
            Rule::when(
                "african american",
                is_black,
                Multiplier::by(1.3).non_modifiable(
                    "African American ethnicity",
                    Impact::Moderate,
                    "Higher lung cancer rates in African Americans",
                ),
            ),
            Rule::when(
                "current smoker",
                is_current,
                Multiplier::by(15.0)
                    .modifiable(
                        "Current smoking",
                        Impact::High,
                        "Smoking is the leading cause of lung cancer",
                    )
                    .recommend(
                        Lifestyle,
                        High,
                        "Quit smoking immediately",
                        "Quitting smoking is the most important step to reduce lung cancer risk",
                    )
                    .with_potential_impact("Can reduce risk by 50% within 5 years"),
            )
            .otherwise_when(
                "former heavy smoker",
                |a: &PremiumAnswers| is_former(a) && a.pack_years() > 30.0,
                Multiplier::by(8.0).non_modifiable(
                    "Heavy smoking history (>30 pack-years)",
                    Impact::High,
                    "Extensive smoking history significantly increases risk",
                ),
            )
            .otherwise_when(
                "former moderate smoker",
                |a: &PremiumAnswers| is_former(a) && a.pack_years() > 20.0,
                Multiplier::by(5.0).non_modifiable(
                    "Moderate smoking history (20-30 pack-years)",
                    Impact::High,
                    "Significant smoking history increases risk",
                ),
            )
            .otherwise_when(
                "former light smoker",
                |a: &PremiumAnswers| is_former(a) && a.pack_years() > 0.0,
                Multiplier::by(2.0).non_modifiable(
                    "Light smoking history",
                    Impact::Moderate,
                    "Any smoking history increases lung cancer risk",
                ),
            ),
            Rule::when(
                "secondhand smoke",
                |a: &PremiumAnswers| a.secondhand_smoke == Some(SecondhandSmoke::Regularly),
                Multiplier::by(1.3)
                    .modifiable(
                        "Regular secondhand smoke exposure",
                        Impact::Moderate,
                        "Secondhand smoke increases lung cancer risk",
                    )
                    .recommend(
                        Lifestyle,
                        Medium,
                        "Avoid secondhand smoke",
                        "Minimize exposure to secondhand smoke at home and work",
                    ),
            ),
            Rule::when(
                "family history",
                |a: &PremiumAnswers| a.family_history_of(CancerSite::Lung),
                Multiplier::by(2.0).non_modifiable(
                    "Family history of lung cancer",
                    Impact::High,
                    "Genetic predisposition increases risk",
                ),
            ),
            Rule::when(
                "asbestos",
                |a: &PremiumAnswers| a.exposed_to(OccupationalExposure::Asbestos),
                Multiplier::by(3.0).non_modifiable(
                    "Asbestos exposure",
                    Impact::High,
                    "Asbestos exposure significantly increases lung cancer risk",
                ),
            ),
            Rule::when(
                "occupational radiation",
                |a: &PremiumAnswers| a.exposed_to(OccupationalExposure::Radiation),
                Multiplier::by(1.5).non_modifiable(
                    "Radiation exposure",
                    Impact::Moderate,
                    "Occupational radiation exposure increases risk",
                ),
            ),
            Rule::when(
                "poor air quality",
                |a: &PremiumAnswers| a.air_pollution == Some(AirPollution::Poor),
                Multiplier::by(1.2).modifiable(
                    "Poor air quality",
                    Impact::Low,
                    "Air pollution increases lung cancer risk",
                ),
            ),
            Rule::when(
                "high radon",
                |a: &PremiumAnswers| a.radon_exposure == Some(RadonExposure::High),
                Multiplier::by(1.4)
                    .modifiable(
                        "High radon exposure",
                        Impact::Moderate,
                        "Radon is the second leading cause of lung cancer",
                    )
                    .recommend(
                        Lifestyle,
                        Medium,
                        "Test and mitigate radon",
                        "Test your home for radon and install mitigation if levels are high",
                    ),
            ),
            Rule::when("high activity", is_highly_active, keep_exercising(0.8))
                .otherwise(
                    "not highly active",
                    Multiplier::advice().recommend(
                        Lifestyle,
                        Medium,
                        "Increase physical activity",
                        "Regular exercise may help reduce lung cancer risk",
                    ),
                ),
            Rule::always(
                "general advice",
                Multiplier::advice()
                    .recommend(
                        Screening,
                        Medium,
                        "Discuss lung cancer screening",
                        "Talk to your doctor about lung cancer screening if you have risk factors",
                    )
                    .recommend(
                        Lifestyle,
                        Low,
                        "Eat antioxidant-rich foods",
                        "Include fruits and vegetables high in antioxidants in your diet",
                    ),
            ),
        ],
        screening: vec![Rule::when(
            "heavy smoking history over 50",
            |ctx: &ScreeningContext| ctx.age_at_least(50.0) && ctx.pack_years >= 20.0,
            vec![ScreeningTemplate::new(
                "Low-dose CT scan",
                50,
                "Annual",
                ScreeningPriority::HighRisk,
            )],
        )],
        reduction_potential: |a| if is_current(a) { 50.0 } else { 20.0 },
    }
}

fn breast() -> PremiumProfile {
    PremiumProfile {
        site: CancerType::Breast,
        base_risk: 12.9,
        horizons: Horizons::new(0.05, 0.12),
        thresholds: Thresholds::new(25.0, 18.0, 10.0),
        basis: "hormonal and lifestyle factors",
        rules: vec![
            age_rule(
                (2.0, "Breast cancer risk increases significantly with age"),
                Some((1.5, "Most breast cancers occur after age 50")),
            ),
            Rule::when(
                "white",
                |a: &PremiumAnswers| a.race_ethnicity == Some(RaceEthnicity::White),
                Multiplier::by(1.1).non_modifiable(
                    "White ethnicity",
                    Impact::Low,
                    "Slightly higher breast cancer rates in white women",
                ),
            )
            .otherwise_when(
                "african american",
                is_black,
                Multiplier::by(1.0).non_modifiable(
                    "African American ethnicity",
                    Impact::Moderate,
                    "Higher rates of aggressive breast cancer subtypes",
                ),
            ),
            Rule::when(
                "family history",
                |a: &PremiumAnswers| a.family_history_of(CancerSite::Breast),
                Multiplier::by(2.1)
                    .non_modifiable(
                        "Family history of breast cancer",
                        Impact::High,
                        "Strong family history significantly increases risk",
                    )
                    .recommend(
                        Genetic,
                        High,
                        "Consider genetic counseling",
                        "Discuss genetic testing for BRCA mutations with your doctor",
                    ),
            ),
            Rule::when(
                "genetic mutation",
                tested_positive,
                Multiplier::by(5.0)
                    .non_modifiable(
                        "BRCA or other genetic mutation",
                        Impact::High,
                        "Genetic mutations dramatically increase breast cancer risk",
                    )
                    .recommend(
                        Screening,
                        High,
                        "Enhanced screening protocol",
                        "Follow high-risk screening guidelines with MRI and mammography",
                    ),
            ),
            Rule::when(
                "early menarche",
                PremiumAnswers::early_menarche,
                Multiplier::by(1.2).non_modifiable(
                    "Early menarche (before age 12)",
                    Impact::Low,
                    "Early onset of menstruation increases lifetime estrogen exposure",
                ),
            ),
            Rule::when(
                "nulliparity",
                |a: &PremiumAnswers| a.pregnancies == Some(0),
                Multiplier::by(1.3).non_modifiable(
                    "No pregnancies",
                    Impact::Moderate,
                    "Nulliparity increases breast cancer risk",
                ),
            )
            .otherwise_when(
                "late first birth",
                |a: &PremiumAnswers| a.age_at_first_birth.is_some_and(|age| age > 30.0),
                Multiplier::by(1.2).non_modifiable(
                    "First pregnancy after age 30",
                    Impact::Low,
                    "Late first pregnancy slightly increases risk",
                ),
            ),
            Rule::when(
                "breastfeeding",
                |a: &PremiumAnswers| a.breastfeeding_months.is_some_and(|months| months > 12.0),
                Multiplier::by(0.9).recommend(
                    Lifestyle,
                    Low,
                    "Breastfeeding was protective",
                    "Your breastfeeding history helped reduce your risk",
                ),
            ),
            Rule::when(
                "long-term birth control",
                |a: &PremiumAnswers| a.birth_control_use == Some(BirthControlUse::Long),
                Multiplier::by(1.1).modifiable(
                    "Long-term birth control use",
                    Impact::Low,
                    "Extended oral contraceptive use slightly increases risk",
                ),
            ),
            Rule::when(
                "current hrt",
                |a: &PremiumAnswers| a.hrt_use == Some(HrtUse::Current),
                hormone_therapy().recommend(
                    Medical,
                    Medium,
                    "Discuss HRT risks with doctor",
                    "Review the benefits and risks of continuing hormone therapy",
                ),
            )
            .otherwise_when(
                "long former hrt",
                |a: &PremiumAnswers| a.hrt_use == Some(HrtUse::FormerLong),
                hormone_therapy(),
            ),
            Rule::when(
                "regular alcohol",
                |a: &PremiumAnswers| {
                    matches!(
                        a.alcohol_consumption,
                        Some(AlcoholConsumption::Moderate | AlcoholConsumption::Heavy)
                    )
                },
                Multiplier::by(1.2)
                    .modifiable(
                        "Regular alcohol consumption",
                        Impact::Moderate,
                        "Alcohol increases breast cancer risk",
                    )
                    .recommend(
                        Lifestyle,
                        Medium,
                        "Limit alcohol consumption",
                        "Reduce alcohol intake to lower breast cancer risk",
                    ),
            ),
            Rule::when(
                "postmenopausal obesity",
                |a: &PremiumAnswers| {
                    is_obese(a) && a.menopause_status == Some(MenopauseStatus::Postmenopausal)
                },
                Multiplier::by(1.2)
                    .modifiable(
                        "Obesity after menopause",
                        Impact::Moderate,
                        "Obesity increases breast cancer risk in postmenopausal women",
                    )
                    .recommend(
                        Lifestyle,
                        Medium,
                        "Maintain healthy weight",
                        "Weight management can help reduce breast cancer risk",
                    ),
            ),
            Rule::when("high activity", is_highly_active, keep_exercising(0.9))
                .otherwise(
                    "not highly active",
                    Multiplier::advice().recommend(
                        Lifestyle,
                        Medium,
                        "Increase physical activity",
                        "Regular exercise can help reduce breast cancer risk",
                    ),
                ),
            Rule::always(
                "general advice",
                Multiplier::advice()
                    .recommend(
                        Screening,
                        High,
                        "Follow mammography guidelines",
                        "Regular mammograms are crucial for early detection",
                    )
                    .recommend(
                        Lifestyle,
                        Medium,
                        "Perform breast self-exams",
                        "Monthly breast self-examinations can help detect changes early",
                    ),
            ),
        ],
        screening: vec![Rule::when(
            "high risk over 40",
            |ctx: &ScreeningContext| ctx.age_at_least(40.0) && ctx.is_high(),
            vec![ScreeningTemplate::new(
                "Mammography + MRI",
                30,
                "Annual",
                ScreeningPriority::HighRisk,
            )],
        )
        .otherwise_when(
            "over 40",
            |ctx: &ScreeningContext| ctx.age_at_least(40.0),
            vec![ScreeningTemplate::new(
                "Mammography",
                50,
                "Every 2 years",
                ScreeningPriority::Routine,
            )],
        )],
        reduction_potential: |_| 25.0,
    }
}

fn hormone_therapy() -> Multiplier {
    Multiplier::by(1.3).modifiable(
        "Hormone replacement therapy",
        Impact::Moderate,
        "HRT increases breast cancer risk",
    )
}

fn colorectal() -> PremiumProfile {
    PremiumProfile {
        site: CancerType::Colorectal,
        base_risk: 4.3,
        horizons: Horizons::new(0.08, 0.18),
        thresholds: Thresholds::new(10.0, 6.0, 3.0),
        basis: "lifestyle and family history",
        rules: vec![
            age_rule(
                (2.5, "Colorectal cancer risk increases significantly with age"),
                Some((1.8, "Most colorectal cancers occur after age 50")),
            ),
            male_rule(1.1, Impact::Low, "Men have slightly higher colorectal cancer rates"),
            Rule::when(
                "african american",
                is_black,
                Multiplier::by(1.3).non_modifiable(
                    "African American ethnicity",
                    Impact::Moderate,
                    "Higher colorectal cancer rates in African Americans",
                ),
            ),
            Rule::when(
                "family history",
                |a: &PremiumAnswers| a.family_history_of(CancerSite::Colorectal),
                Multiplier::by(2.2)
                    .non_modifiable(
                        "Family history of colorectal cancer",
                        Impact::High,
                        "Strong family history significantly increases risk",
                    )
                    .recommend(
                        Screening,
                        High,
                        "Start screening earlier",
                        "Begin colonoscopy screening at age 40 or 10 years before family member's diagnosis",
                    ),
            ),
            Rule::when(
                "polyps",
                |a: &PremiumAnswers| a.colonoscopy_history == Some(ColonoscopyHistory::Polyps),
                Multiplier::by(1.5).non_modifiable(
                    "History of polyps",
                    Impact::Moderate,
                    "Previous polyps increase future cancer risk",
                ),
            ),
            Rule::when(
                "ibd",
                |a: &PremiumAnswers| a.has_condition(ChronicCondition::Ibd),
                Multiplier::by(2.0).non_modifiable(
                    "Inflammatory bowel disease",
                    Impact::High,
                    "IBD significantly increases colorectal cancer risk",
                ),
            ),
            Rule::when(
                "diabetes",
                has_diabetes,
                Multiplier::by(1.3).non_modifiable(
                    "Diabetes",
                    Impact::Moderate,
                    "Diabetes increases colorectal cancer risk",
                ),
            ),
            Rule::when(
                "daily red meat",
                eats_red_meat_daily,
                Multiplier::by(1.3)
                    .modifiable(
                        "High red meat consumption",
                        Impact::Moderate,
                        "Daily red meat consumption increases risk",
                    )
                    .recommend(
                        Lifestyle,
                        Medium,
                        "Reduce red meat intake",
                        "Limit red meat to 2-3 servings per week",
                    ),
            ),
            Rule::when(
                "processed meat",
                |a: &PremiumAnswers| {
                    matches!(
                        a.processed_meat,
                        Some(MeatFrequency::Daily | MeatFrequency::Weekly)
                    )
                },
                Multiplier::by(1.2)
                    .modifiable(
                        "Processed meat consumption",
                        Impact::Moderate,
                        "Processed meats are linked to colorectal cancer",
                    )
                    .recommend(
                        Lifestyle,
                        Medium,
                        "Avoid processed meats",
                        "Eliminate or significantly reduce processed meat consumption",
                    ),
            ),
            Rule::when(
                "low produce",
                |a: &PremiumAnswers| {
                    matches!(
                        a.fruits_vegetables,
                        Some(FruitsVegetables::ZeroToOne | FruitsVegetables::TwoToThree)
                    )
                },
                Multiplier::by(1.2)
                    .modifiable(
                        "Low fruit and vegetable intake",
                        Impact::Moderate,
                        "Insufficient fiber and antioxidants increase risk",
                    )
                    .recommend(
                        Lifestyle,
                        High,
                        "Increase fruits and vegetables",
                        "Aim for 5-9 servings of fruits and vegetables daily",
                    ),
            )
            .otherwise_when("six plus servings", eats_six_plus_servings, healthy_diet()),
            Rule::when(
                "sedentary",
                PremiumAnswers::is_inactive,
                Multiplier::by(1.3)
                    .modifiable(
                        "Sedentary lifestyle",
                        Impact::Moderate,
                        "Lack of physical activity increases colorectal cancer risk",
                    )
                    .recommend(
                        Lifestyle,
                        High,
                        "Increase physical activity",
                        "Aim for 150 minutes of moderate exercise per week",
                    ),
            )
            .otherwise_when(
                "high activity",
                is_highly_active,
                Multiplier::by(0.8).recommend(
                    Lifestyle,
                    Low,
                    "Continue regular exercise",
                    "Maintain your excellent exercise routine",
                ),
            ),
            Rule::when(
                "obesity",
                is_obese,
                Multiplier::by(1.3)
                    .modifiable(
                        "Obesity (BMI > 30)",
                        Impact::Moderate,
                        "Obesity increases colorectal cancer risk",
                    )
                    .recommend(
                        Lifestyle,
                        Medium,
                        "Achieve healthy weight",
                        "Weight loss can help reduce colorectal cancer risk",
                    ),
            ),
            Rule::when(
                "heavy alcohol",
                drinks_heavily,
                Multiplier::by(1.4)
                    .modifiable(
                        "Heavy alcohol consumption",
                        Impact::Moderate,
                        "Heavy drinking increases colorectal cancer risk",
                    )
                    .recommend(
                        Lifestyle,
                        Medium,
                        "Reduce alcohol consumption",
                        "Limit alcohol to moderate levels (1-2 drinks per day max)",
                    ),
            ),
            Rule::when(
                "current smoker",
                is_current,
                Multiplier::by(1.2)
                    .modifiable(
                        "Current smoking",
                        Impact::Moderate,
                        "Smoking increases colorectal cancer risk",
                    )
                    .recommend(
                        Lifestyle,
                        High,
                        "Quit smoking",
                        "Smoking cessation reduces colorectal cancer risk",
                    ),
            ),
            Rule::always(
                "general advice",
                Multiplier::advice().recommend(
                    Screening,
                    High,
                    "Follow colonoscopy guidelines",
                    "Regular screening is the most effective way to prevent colorectal cancer",
                ),
            ),
        ],
        screening: vec![Rule::when(
            "high risk over 45",
            |ctx: &ScreeningContext| ctx.age_at_least(45.0) && ctx.is_high(),
            vec![ScreeningTemplate::new(
                "Colonoscopy",
                40,
                "Every 5 years",
                ScreeningPriority::HighRisk,
            )],
        )
        .otherwise_when(
            "over 45",
            |ctx: &ScreeningContext| ctx.age_at_least(45.0),
            vec![ScreeningTemplate::new(
                "Colonoscopy or FIT test",
                45,
                "Colonoscopy every 10 years or FIT annually",
                ScreeningPriority::Routine,
            )],
        )],
        reduction_potential: |_| 40.0,
    }
}

fn healthy_diet() -> Multiplier {
    Multiplier::by(0.9).recommend(
        Lifestyle,
        Low,
        "Continue healthy diet",
        "Maintain your excellent fruit and vegetable intake",
    )
}

fn skin() -> PremiumProfile {
    PremiumProfile {
        site: CancerType::Skin,
        base_risk: 2.0,
        horizons: Horizons::new(0.03, 0.08),
        thresholds: Thresholds::new(6.0, 3.0, 1.5),
        basis: "skin type and sun exposure",
        rules: vec![
            Rule::when(
                "very fair skin",
                |a: &PremiumAnswers| {
                    matches!(a.skin_type, Some(SkinType::TypeI | SkinType::TypeII))
                },
                Multiplier::by(3.0).non_modifiable(
                    "Very fair skin (Type I-II)",
                    Impact::High,
                    "Fair skin burns easily and has higher melanoma risk",
                ),
            )
            .otherwise_when(
                "fair to medium skin",
                |a: &PremiumAnswers| a.skin_type == Some(SkinType::TypeIII),
                Multiplier::by(1.5).non_modifiable(
                    "Fair to medium skin (Type III)",
                    Impact::Moderate,
                    "Medium skin tone has moderate melanoma risk",
                ),
            )
            .otherwise_when(
                "darker skin",
                |a: &PremiumAnswers| {
                    matches!(
                        a.skin_type,
                        Some(SkinType::TypeIV | SkinType::TypeV | SkinType::TypeVI)
                    )
                },
                Multiplier::by(0.5).non_modifiable(
                    "Darker skin tone",
                    Impact::Low,
                    "Darker skin provides natural protection against UV damage",
                ),
            ),
            Rule::when(
                "age over 65",
                |a: &PremiumAnswers| a.age_over(65.0),
                Multiplier::by(1.5).non_modifiable(
                    "Age over 65",
                    Impact::Moderate,
                    "Skin cancer risk increases with age due to cumulative sun damage",
                ),
            ),
            male_rule(1.2, Impact::Low, "Men have slightly higher melanoma rates"),
            Rule::when(
                "family history",
                |a: &PremiumAnswers| a.family_history_of(CancerSite::Skin),
                Multiplier::by(2.0).non_modifiable(
                    "Family history of skin cancer",
                    Impact::High,
                    "Genetic predisposition to melanoma",
                ),
            ),
            Rule::when(
                "six plus sunburns",
                |a: &PremiumAnswers| a.severe_sunburns == Some(SevereSunburns::SixPlus),
                Multiplier::by(2.5).non_modifiable(
                    "Multiple severe sunburns",
                    Impact::High,
                    "History of severe sunburns significantly increases risk",
                ),
            )
            .otherwise_when(
                "three to five sunburns",
                |a: &PremiumAnswers| a.severe_sunburns == Some(SevereSunburns::ThreeToFive),
                Multiplier::by(1.8).non_modifiable(
                    "Several severe sunburns",
                    Impact::Moderate,
                    "Multiple sunburns increase melanoma risk",
                ),
            )
            .otherwise_when(
                "one or two sunburns",
                |a: &PremiumAnswers| a.severe_sunburns == Some(SevereSunburns::OneToTwo),
                Multiplier::by(1.3).non_modifiable(
                    "Some severe sunburns",
                    Impact::Low,
                    "Any severe sunburn increases risk",
                ),
            ),
            Rule::when(
                "regular tanning beds",
                |a: &PremiumAnswers| a.tanning_bed_use == Some(TanningBedUse::Regular),
                Multiplier::by(2.0)
                    .modifiable(
                        "Regular tanning bed use",
                        Impact::High,
                        "Tanning beds significantly increase melanoma risk",
                    )
                    .recommend(
                        Lifestyle,
                        High,
                        "Stop using tanning beds",
                        "Eliminate tanning bed use completely",
                    ),
            )
            .otherwise_when(
                "occasional tanning beds",
                |a: &PremiumAnswers| a.tanning_bed_use == Some(TanningBedUse::Occasional),
                Multiplier::by(1.3)
                    .modifiable(
                        "Occasional tanning bed use",
                        Impact::Moderate,
                        "Any tanning bed use increases risk",
                    )
                    .recommend(
                        Lifestyle,
                        Medium,
                        "Avoid tanning beds",
                        "Stop using tanning beds to reduce risk",
                    ),
            ),
            Rule::when(
                "high sun exposure",
                |a: &PremiumAnswers| a.sun_exposure == Some(SunExposure::High),
                Multiplier::by(1.5)
                    .modifiable(
                        "High sun exposure",
                        Impact::Moderate,
                        "Frequent sun exposure increases risk",
                    )
                    .recommend(
                        Lifestyle,
                        High,
                        "Improve sun protection",
                        "Use sunscreen, protective clothing, and seek shade",
                    ),
            ),
            Rule::when(
                "poor sun protection",
                |a: &PremiumAnswers| {
                    matches!(
                        a.sun_protection,
                        Some(SunProtection::Never | SunProtection::Sometimes)
                    )
                },
                Multiplier::by(1.4)
                    .modifiable(
                        "Poor sun protection habits",
                        Impact::Moderate,
                        "Inadequate sun protection increases risk",
                    )
                    .recommend(
                        Lifestyle,
                        High,
                        "Use sun protection consistently",
                        "Apply SPF 30+ sunscreen daily and wear protective clothing",
                    ),
            )
            .otherwise_when(
                "consistent sun protection",
                |a: &PremiumAnswers| a.sun_protection == Some(SunProtection::Always),
                Multiplier::by(0.8).recommend(
                    Lifestyle,
                    Low,
                    "Continue excellent sun protection",
                    "Maintain your consistent sun protection habits",
                ),
            ),
            Rule::always(
                "general advice",
                Multiplier::advice()
                    .recommend(
                        Screening,
                        Medium,
                        "Perform monthly skin self-exams",
                        "Check for new or changing moles regularly",
                    )
                    .recommend(
                        Lifestyle,
                        High,
                        "Practice sun safety",
                        "Use broad-spectrum SPF 30+ sunscreen, wear protective clothing, and avoid peak sun hours",
                    ),
            ),
        ],
        screening: vec![Rule::when(
            "high risk",
            ScreeningContext::is_high,
            vec![ScreeningTemplate::new(
                "Dermatologist skin exam",
                18,
                "Every 6 months",
                ScreeningPriority::HighRisk,
            )],
        )
        .otherwise(
            "routine",
            vec![
                ScreeningTemplate::new("Skin self-exam", 18, "Monthly", ScreeningPriority::Routine),
                ScreeningTemplate::new(
                    "Professional skin exam",
                    40,
                    "Annual",
                    ScreeningPriority::Routine,
                ),
            ],
        )],
        reduction_potential: |_| 50.0,
    }
}

fn prostate() -> PremiumProfile {
    PremiumProfile {
        site: CancerType::Prostate,
        base_risk: 11.6,
        horizons: Horizons::new(0.06, 0.15),
        thresholds: Thresholds::new(20.0, 15.0, 8.0),
        basis: "age, race, and family history",
        rules: vec![
            Rule::when(
                "age over 70",
                |a: &PremiumAnswers| a.age_over(70.0),
                Multiplier::by(3.0).non_modifiable(
                    "Age over 70",
                    Impact::High,
                    "Prostate cancer risk increases dramatically with age",
                ),
            )
            .otherwise_when(
                "age over 60",
                |a: &PremiumAnswers| a.age_over(60.0),
                Multiplier::by(2.0).non_modifiable(
                    "Age over 60",
                    Impact::High,
                    "Most prostate cancers occur after age 60",
                ),
            )
            .otherwise_when(
                "age over 50",
                |a: &PremiumAnswers| a.age_over(50.0),
                Multiplier::by(1.3).non_modifiable(
                    "Age over 50",
                    Impact::Moderate,
                    "Prostate cancer risk begins to increase after 50",
                ),
            ),
            Rule::when(
                "african american",
                is_black,
                Multiplier::by(2.2)
                    .non_modifiable(
                        "African American ethnicity",
                        Impact::High,
                        "African American men have the highest prostate cancer rates",
                    )
                    .recommend(
                        Screening,
                        High,
                        "Start screening at age 45",
                        "Earlier screening recommended for African American men",
                    ),
            ),
            Rule::when(
                "family history",
                |a: &PremiumAnswers| a.family_history_of(CancerSite::Prostate),
                Multiplier::by(2.5)
                    .non_modifiable(
                        "Family history of prostate cancer",
                        Impact::High,
                        "Strong family history significantly increases risk",
                    )
                    .recommend(
                        Screening,
                        High,
                        "Start screening at age 45",
                        "Earlier screening recommended with family history",
                    ),
            ),
            Rule::when(
                "daily red meat",
                eats_red_meat_daily,
                Multiplier::by(1.2)
                    .modifiable(
                        "High red meat consumption",
                        Impact::Low,
                        "High red meat intake may increase prostate cancer risk",
                    )
                    .recommend(
                        Lifestyle,
                        Medium,
                        "Reduce red meat intake",
                        "Limit red meat and increase plant-based foods",
                    ),
            ),
            Rule::when("six plus servings", eats_six_plus_servings, healthy_diet()),
            Rule::when("high activity", is_highly_active, keep_exercising(0.9))
                .otherwise_when(
                    "low activity",
                    PremiumAnswers::is_inactive,
                    Multiplier::advice().recommend(
                        Lifestyle,
                        Medium,
                        "Increase physical activity",
                        "Regular exercise may help reduce prostate cancer risk",
                    ),
                ),
            Rule::when(
                "obesity",
                is_obese,
                Multiplier::by(1.1)
                    .modifiable(
                        "Obesity (BMI > 30)",
                        Impact::Low,
                        "Obesity may increase risk of aggressive prostate cancer",
                    )
                    .recommend(
                        Lifestyle,
                        Medium,
                        "Achieve healthy weight",
                        "Weight management may help reduce risk",
                    ),
            ),
            Rule::always(
                "general advice",
                Multiplier::advice().recommend(
                    Screening,
                    High,
                    "Discuss PSA screening with doctor",
                    "Have an informed discussion about prostate cancer screening",
                ),
            ),
        ],
        screening: vec![Rule::when(
            "high risk over 45",
            |ctx: &ScreeningContext| ctx.age_at_least(45.0) && ctx.is_high(),
            vec![ScreeningTemplate::new(
                "PSA test + Digital rectal exam",
                45,
                "Annual",
                ScreeningPriority::HighRisk,
            )],
        )
        .otherwise_when(
            "over 45",
            |ctx: &ScreeningContext| ctx.age_at_least(45.0),
            vec![ScreeningTemplate::new(
                "PSA test discussion",
                50,
                "Every 2 years",
                ScreeningPriority::Routine,
            )],
        )],
        reduction_potential: |_| 20.0,
    }
}

fn cervical() -> PremiumProfile {
    PremiumProfile {
        site: CancerType::Cervical,
        base_risk: 0.6,
        horizons: Horizons::new(0.08, 0.18),
        thresholds: Thresholds::new(2.0, 1.0, 0.4),
        basis: "screening history and lifestyle",
        rules: vec![
            Rule::when(
                "age over 65",
                |a: &PremiumAnswers| a.age_over(65.0),
                Multiplier::by(0.5).non_modifiable(
                    "Age over 65",
                    Impact::Low,
                    "Cervical cancer risk decreases with age if screening is up to date",
                ),
            )
            .otherwise_when(
                "peak age",
                |a: &PremiumAnswers| a.age_at_least(30.0) && !a.age_over(50.0),
                Multiplier::by(1.2).non_modifiable(
                    "Peak risk age (30-50)",
                    Impact::Moderate,
                    "Cervical cancer most commonly occurs in this age range",
                ),
            ),
            Rule::when(
                "never screened",
                |a: &PremiumAnswers| a.pap_smear_history == Some(PapSmearHistory::Never),
                Multiplier::by(5.0)
                    .modifiable(
                        "No Pap smear screening",
                        Impact::High,
                        "Lack of screening dramatically increases risk",
                    )
                    .recommend(
                        Screening,
                        High,
                        "Start Pap smear screening immediately",
                        "Regular Pap smears can prevent most cervical cancers",
                    ),
            )
            .otherwise_when(
                "irregular screening",
                |a: &PremiumAnswers| a.pap_smear_history == Some(PapSmearHistory::Irregular),
                Multiplier::by(2.0)
                    .modifiable(
                        "Irregular Pap smear screening",
                        Impact::Moderate,
                        "Inconsistent screening increases risk",
                    )
                    .recommend(
                        Screening,
                        High,
                        "Follow regular screening schedule",
                        "Maintain consistent Pap smear screening",
                    ),
            )
            .otherwise_when(
                "regular screening",
                |a: &PremiumAnswers| a.pap_smear_history == Some(PapSmearHistory::Regular),
                Multiplier::by(0.3).recommend(
                    Screening,
                    Medium,
                    "Continue regular screening",
                    "Maintain your excellent screening habits",
                ),
            ),
            Rule::when(
                "current smoker",
                is_current,
                Multiplier::by(2.0)
                    .modifiable(
                        "Current smoking",
                        Impact::High,
                        "Smoking significantly increases cervical cancer risk",
                    )
                    .recommend(
                        Lifestyle,
                        High,
                        "Quit smoking",
                        "Smoking cessation reduces cervical cancer risk",
                    ),
            ),
        ],
        screening: vec![
            Rule::when(
                "over 21",
                |ctx: &ScreeningContext| ctx.age_at_least(21.0),
                vec![ScreeningTemplate::new(
                    "Pap smear",
                    21,
                    "Every 3 years",
                    ScreeningPriority::Routine,
                )],
            ),
            Rule::when(
                "over 30",
                |ctx: &ScreeningContext| ctx.age_at_least(30.0),
                vec![ScreeningTemplate::new(
                    "Pap + HPV test",
                    30,
                    "Every 5 years",
                    ScreeningPriority::Routine,
                )],
            ),
        ],
        reduction_potential: |_| 80.0,
    }
}

fn ovarian() -> PremiumProfile {
    PremiumProfile {
        site: CancerType::Ovarian,
        base_risk: 1.3,
        horizons: Horizons::new(0.05, 0.12),
        thresholds: Thresholds::new(5.0, 2.0, 1.0),
        basis: "genetics and reproductive history",
        rules: vec![
            age_rule(
                (2.0, "Ovarian cancer risk increases with age"),
                Some((1.5, "Most ovarian cancers occur after menopause")),
            ),
            Rule::when(
                "family history",
                |a: &PremiumAnswers| a.family_history_of(CancerSite::Ovarian),
                Multiplier::by(3.0)
                    .non_modifiable(
                        "Family history of ovarian cancer",
                        Impact::High,
                        "Strong family history significantly increases risk",
                    )
                    .recommend(
                        Genetic,
                        High,
                        "Consider genetic counseling",
                        "Discuss BRCA testing and risk management options",
                    ),
            ),
            Rule::when(
                "brca mutation",
                tested_positive,
                Multiplier::by(10.0)
                    .non_modifiable(
                        "BRCA mutation",
                        Impact::High,
                        "BRCA mutations dramatically increase ovarian cancer risk",
                    )
                    .recommend(
                        Medical,
                        High,
                        "Consider prophylactic surgery",
                        "Discuss risk-reducing surgery options with your doctor",
                    ),
            ),
            Rule::when(
                "nulliparity",
                |a: &PremiumAnswers| a.pregnancies == Some(0),
                Multiplier::by(1.5).non_modifiable(
                    "No pregnancies",
                    Impact::Moderate,
                    "Nulliparity increases ovarian cancer risk",
                ),
            )
            .otherwise_when(
                "three or more pregnancies",
                |a: &PremiumAnswers| a.pregnancies.is_some_and(|n| n >= 3),
                Multiplier::by(0.7).recommend(
                    Lifestyle,
                    Low,
                    "Multiple pregnancies were protective",
                    "Your pregnancy history helped reduce your risk",
                ),
            ),
            Rule::when(
                "long-term birth control",
                |a: &PremiumAnswers| a.birth_control_use == Some(BirthControlUse::Long),
                Multiplier::by(0.6).recommend(
                    Lifestyle,
                    Low,
                    "Birth control use was protective",
                    "Long-term oral contraceptive use reduced your risk",
                ),
            ),
        ],
        screening: Vec::new(),
        reduction_potential: |_| 30.0,
    }
}

fn bladder() -> PremiumProfile {
    PremiumProfile {
        site: CancerType::Bladder,
        base_risk: 2.4,
        horizons: Horizons::new(0.06, 0.14),
        thresholds: Thresholds::new(8.0, 4.0, 2.0),
        basis: "smoking and demographics",
        rules: vec![
            age_rule(
                (2.5, "Bladder cancer risk increases significantly with age"),
                None,
            ),
            male_rule(3.0, Impact::High, "Men have much higher bladder cancer rates"),
            Rule::when(
                "current smoker",
                is_current,
                Multiplier::by(4.0)
                    .modifiable(
                        "Current smoking",
                        Impact::High,
                        "Smoking is the leading cause of bladder cancer",
                    )
                    .recommend(
                        Lifestyle,
                        High,
                        "Quit smoking immediately",
                        "Smoking cessation significantly reduces bladder cancer risk",
                    ),
            )
            .otherwise_when(
                "former smoker",
                is_former,
                Multiplier::by(2.0).non_modifiable(
                    "Former smoking",
                    Impact::Moderate,
                    "Previous smoking history increases risk",
                ),
            ),
        ],
        screening: Vec::new(),
        reduction_potential: |a| if is_current(a) { 60.0 } else { 20.0 },
    }
}

fn pancreatic() -> PremiumProfile {
    PremiumProfile {
        site: CancerType::Pancreatic,
        base_risk: 1.6,
        horizons: Horizons::new(0.04, 0.10),
        thresholds: Thresholds::new(4.0, 2.5, 1.2),
        basis: "family history and lifestyle",
        rules: vec![
            age_rule((2.0, "Pancreatic cancer risk increases with age"), None),
            Rule::when(
                "family history",
                |a: &PremiumAnswers| a.family_history_of(CancerSite::Pancreatic),
                Multiplier::by(2.5).non_modifiable(
                    "Family history of pancreatic cancer",
                    Impact::High,
                    "Strong family history increases risk",
                ),
            ),
            Rule::when(
                "current smoker",
                is_current,
                Multiplier::by(2.2)
                    .modifiable(
                        "Current smoking",
                        Impact::High,
                        "Smoking doubles pancreatic cancer risk",
                    )
                    .recommend(
                        Lifestyle,
                        High,
                        "Quit smoking",
                        "Smoking cessation reduces pancreatic cancer risk",
                    ),
            ),
            Rule::when(
                "diabetes",
                has_diabetes,
                Multiplier::by(1.8).non_modifiable(
                    "Diabetes",
                    Impact::Moderate,
                    "Diabetes increases pancreatic cancer risk",
                ),
            ),
        ],
        screening: Vec::new(),
        reduction_potential: |a| if is_current(a) { 40.0 } else { 15.0 },
    }
}

fn liver() -> PremiumProfile {
    PremiumProfile {
        site: CancerType::Liver,
        base_risk: 1.0,
        horizons: Horizons::new(0.03, 0.08),
        thresholds: Thresholds::new(5.0, 2.0, 0.8),
        basis: "infections and alcohol use",
        rules: vec![
            male_rule(2.5, Impact::High, "Men have much higher liver cancer rates"),
            Rule::when(
                "hepatitis b",
                |a: &PremiumAnswers| a.has_condition(ChronicCondition::HepatitisB),
                Multiplier::by(10.0).non_modifiable(
                    "Hepatitis B infection",
                    Impact::High,
                    "Hepatitis B dramatically increases liver cancer risk",
                ),
            ),
            Rule::when(
                "hepatitis c",
                |a: &PremiumAnswers| a.has_condition(ChronicCondition::HepatitisC),
                Multiplier::by(8.0).non_modifiable(
                    "Hepatitis C infection",
                    Impact::High,
                    "Hepatitis C significantly increases liver cancer risk",
                ),
            ),
            Rule::when(
                "heavy alcohol",
                drinks_heavily,
                Multiplier::by(3.0)
                    .modifiable(
                        "Heavy alcohol consumption",
                        Impact::High,
                        "Heavy drinking causes cirrhosis and liver cancer",
                    )
                    .recommend(
                        Lifestyle,
                        High,
                        "Reduce alcohol consumption",
                        "Limit alcohol to prevent liver damage",
                    ),
            ),
        ],
        screening: Vec::new(),
        reduction_potential: |a| if drinks_heavily(a) { 50.0 } else { 20.0 },
    }
}

static LUNG: Lazy<PremiumProfile> = Lazy::new(lung);
static BREAST: Lazy<PremiumProfile> = Lazy::new(breast);
static COLORECTAL: Lazy<PremiumProfile> = Lazy::new(colorectal);
static SKIN: Lazy<PremiumProfile> = Lazy::new(skin);
static PROSTATE: Lazy<PremiumProfile> = Lazy::new(prostate);
static CERVICAL: Lazy<PremiumProfile> = Lazy::new(cervical);
static OVARIAN: Lazy<PremiumProfile> = Lazy::new(ovarian);
static BLADDER: Lazy<PremiumProfile> = Lazy::new(bladder);
static PANCREATIC: Lazy<PremiumProfile> = Lazy::new(pancreatic);
static LIVER: Lazy<PremiumProfile> = Lazy::new(liver);

/// The premium table for `site`. Every site has one.
pub fn profile(site: CancerType) -> &'static PremiumProfile {
    let profile: &'static Lazy<PremiumProfile> = match site {
        CancerType::Lung => &LUNG,
        CancerType::Breast => &BREAST,
        CancerType::Colorectal => &COLORECTAL,
        CancerType::Skin => &SKIN,
        CancerType::Prostate => &PROSTATE,
        CancerType::Cervical => &CERVICAL,
        CancerType::Ovarian => &OVARIAN,
        CancerType::Bladder => &BLADDER,
        CancerType::Pancreatic => &PANCREATIC,
        CancerType::Liver => &LIVER,
    };
    Lazy::force(profile)
}

pub fn calculate_lung_cancer_risk(answers: &PremiumAnswers) -> RiskAssessment {
    LUNG.assess(answers)
}

pub fn calculate_breast_cancer_risk(answers: &PremiumAnswers) -> RiskAssessment {
    BREAST.assess(answers)
}

pub fn calculate_colorectal_cancer_risk(answers: &PremiumAnswers) -> RiskAssessment {
    COLORECTAL.assess(answers)
}

pub fn calculate_skin_cancer_risk(answers: &PremiumAnswers) -> RiskAssessment {
    SKIN.assess(answers)
}

pub fn calculate_prostate_cancer_risk(answers: &PremiumAnswers) -> RiskAssessment {
    PROSTATE.assess(answers)
}

pub fn calculate_cervical_cancer_risk(answers: &PremiumAnswers) -> RiskAssessment {
    CERVICAL.assess(answers)
}

pub fn calculate_ovarian_cancer_risk(answers: &PremiumAnswers) -> RiskAssessment {
    OVARIAN.assess(answers)
}

pub fn calculate_bladder_cancer_risk(answers: &PremiumAnswers) -> RiskAssessment {
    BLADDER.assess(answers)
}

pub fn calculate_pancreatic_cancer_risk(answers: &PremiumAnswers) -> RiskAssessment {
    PANCREATIC.assess(answers)
}

pub fn calculate_liver_cancer_risk(answers: &PremiumAnswers) -> RiskAssessment {
    LIVER.assess(answers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::RiskLevel;

    #[test]
    fn test_hrt_recommendation_only_for_current_use() {
        let current = PremiumAnswers {
            hrt_use: Some(HrtUse::Current),
            ..Default::default()
        };
        let former = PremiumAnswers {
            hrt_use: Some(HrtUse::FormerLong),
            ..Default::default()
        };

        let with_current = calculate_breast_cancer_risk(&current);
        let with_former = calculate_breast_cancer_risk(&former);

        assert_eq!(with_current.relative_risk, with_former.relative_risk);
        assert!(with_current
            .recommendations
            .iter()
            .any(|r| r.action == "Discuss HRT risks with doctor"));
        assert!(!with_former
            .recommendations
            .iter()
            .any(|r| r.action == "Discuss HRT risks with doctor"));
    }

    #[test]
    fn test_cervical_peak_age_band_is_inclusive() {
        for age in [30.0, 50.0] {
            let answers = PremiumAnswers {
                age: Some(age),
                ..Default::default()
            };
            let result = calculate_cervical_cancer_risk(&answers);
            assert_eq!(result.non_modifiable_factors[0].factor, "Peak risk age (30-50)");
        }
        let answers = PremiumAnswers {
            age: Some(55.0),
            ..Default::default()
        };
        assert!(calculate_cervical_cancer_risk(&answers)
            .non_modifiable_factors
            .is_empty());
    }

    #[test]
    fn test_skin_age_factor_is_moderate() {
        let answers = PremiumAnswers {
            age: Some(70.0),
            ..Default::default()
        };
        let result = calculate_skin_cancer_risk(&answers);
        assert_eq!(result.non_modifiable_factors[0].impact, Impact::Moderate);
    }

    #[test]
    fn test_only_bare_positive_code_raises_ovarian_risk() {
        let brca = PremiumAnswers {
            genetic_testing: Some(GeneticTesting::PositiveBrca),
            ..Default::default()
        };
        assert_eq!(calculate_ovarian_cancer_risk(&brca).relative_risk, 1.0);

        let positive = PremiumAnswers {
            genetic_testing: Some(GeneticTesting::Positive),
            ..Default::default()
        };
        let result = calculate_ovarian_cancer_risk(&positive);
        assert_eq!(result.relative_risk, 10.0);
        assert_eq!(result.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_liver_reduction_potential_follows_alcohol() {
        let answers = PremiumAnswers {
            alcohol_consumption: Some(AlcoholConsumption::Heavy),
            ..Default::default()
        };
        assert_eq!(
            calculate_liver_cancer_risk(&answers).risk_reduction_potential,
            Some(50.0)
        );
    }
}
