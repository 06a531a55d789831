//! Score tables of the short questionnaire.
//!
//! Each table starts from a small integer base and adds or subtracts points.
//! The level bands are shared: `>= 8` High, `>= 6` Elevated, `>= 4` Average.

use crate::answers::vocabulary::{
    AlcoholConsumption, CancerSite, ColonoscopyHistory, FruitsVegetables, MammogramHistory,
    MeatFrequency, PhysicalActivity, RaceEthnicity, SkinType, SmokingStatus, SunExposure,
};
use crate::answers::BasicAnswers;
use crate::assessment::BasicCategory::{Lifestyle, Medical, Screening};
use crate::assessment::Priority::{High, Low, Medium};
use crate::assessment::{BasicRiskAssessment, CancerType};
use crate::engine::{BasicProfile, Delta, Rule, Text};
use once_cell::sync::Lazy;

type BasicRule = Rule<BasicAnswers, Delta>;

fn is_current(a: &BasicAnswers) -> bool {
    a.smoking_status == Some(SmokingStatus::Current)
}

fn is_former(a: &BasicAnswers) -> bool {
    a.smoking_status == Some(SmokingStatus::Former)
}

fn is_obese(a: &BasicAnswers) -> bool {
    a.bmi().is_some_and(|bmi| bmi > 30.0)
}

fn eats_red_meat_daily(a: &BasicAnswers) -> bool {
    a.red_meat_consumption == Some(MeatFrequency::Daily)
}

fn is_highly_active(a: &BasicAnswers) -> bool {
    a.physical_activity == Some(PhysicalActivity::High)
}

/// +2 over 65, +1 over 50.
fn age_rule() -> BasicRule {
    Rule::when(
        "age over 65",
        |a: &BasicAnswers| a.age_over(65.0),
        Delta::points(2).factor("Age over 65 (major risk factor)"),
    )
    .otherwise_when(
        "age over 50",
        |a: &BasicAnswers| a.age_over(50.0),
        Delta::points(1).factor("Age over 50"),
    )
}

fn lung() -> BasicProfile {
    BasicProfile {
        site: CancerType::Lung,
        base_score: 2,
        model: Some("Modified PLCO Model"),
        rules: vec![
            age_rule(),
            Rule::when(
                "current heavy smoker",
                |a: &BasicAnswers| is_current(a) && a.pack_years() > 30.0,
                quit_smoking(Delta::points(5).factor(Text::Computed(|a: &BasicAnswers| {
                    format!("Current heavy smoking ({} pack-years)", a.pack_years())
                }))),
            )
            .otherwise_when(
                "current moderate smoker",
                |a: &BasicAnswers| is_current(a) && a.pack_years() > 10.0,
                quit_smoking(Delta::points(4).factor(Text::Computed(|a: &BasicAnswers| {
                    format!("Current moderate smoking ({} pack-years)", a.pack_years())
                }))),
            )
            .otherwise_when(
                "current smoker",
                is_current,
                quit_smoking(Delta::points(3).factor("Current smoking")),
            )
            .otherwise_when(
                "former heavy smoker",
                |a: &BasicAnswers| is_former(a) && a.pack_years() > 30.0,
                stay_smoke_free(Delta::points(3).factor(Text::Computed(|a: &BasicAnswers| {
                    format!("Former heavy smoking history ({} pack-years)", a.pack_years())
                }))),
            )
            .otherwise_when(
                "former moderate smoker",
                |a: &BasicAnswers| is_former(a) && a.pack_years() > 10.0,
                stay_smoke_free(Delta::points(2).factor(Text::Computed(|a: &BasicAnswers| {
                    format!(
                        "Former moderate smoking history ({} pack-years)",
                        a.pack_years()
                    )
                }))),
            )
            .otherwise_when(
                "former smoker",
                is_former,
                stay_smoke_free(Delta::points(1).factor("Former smoking history")),
            )
            .otherwise(
                "never smoked",
                Delta::advice().recommend(
                    Lifestyle,
                    Low,
                    "Never start smoking",
                    "Continue avoiding tobacco products",
                ),
            ),
            Rule::when(
                "family history",
                |a: &BasicAnswers| a.family_history_of(CancerSite::Lung),
                Delta::points(1)
                    .factor("Family history of lung cancer")
                    .recommend(
                        Screening,
                        Medium,
                        "Discuss early screening",
                        "Talk to your doctor about lung cancer screening options",
                    ),
            ),
            Rule::when(
                "low activity",
                BasicAnswers::is_inactive,
                Delta::points(1).factor("Low physical activity").recommend(
                    Lifestyle,
                    Medium,
                    "Increase physical activity",
                    "Aim for 150 minutes of moderate exercise per week",
                ),
            ),
            Rule::always(
                "antioxidants",
                Delta::advice().recommend(
                    Lifestyle,
                    Medium,
                    "Eat antioxidant-rich foods",
                    "Include fruits and vegetables high in antioxidants",
                ),
            ),
        ],
    }
}

fn quit_smoking(delta: Delta) -> Delta {
    delta
        .recommend(
            Lifestyle,
            High,
            "Quit smoking immediately",
            "Smoking cessation is the most important step to reduce lung cancer risk",
        )
        .with_impact("Can reduce risk by 50% within 5 years")
}

fn stay_smoke_free(delta: Delta) -> Delta {
    delta.recommend(
        Lifestyle,
        Medium,
        "Continue avoiding tobacco",
        "Maintain your smoke-free lifestyle",
    )
}

fn breast() -> BasicProfile {
    BasicProfile {
        site: CancerType::Breast,
        base_score: 3,
        model: Some("Simplified Gail Model"),
        rules: vec![
            age_rule(),
            Rule::when(
                "early menarche",
                BasicAnswers::early_menarche,
                Delta::points(1).factor("Early menarche (before age 12)"),
            ),
            Rule::when(
                "nulliparity",
                |a: &BasicAnswers| a.pregnancies == Some(0) && a.age_over(30.0),
                Delta::points(1).factor("No pregnancies (nulliparity)"),
            )
            .otherwise_when(
                "pregnancy history",
                |a: &BasicAnswers| a.pregnancies.is_some_and(|n| n > 0),
                Delta::points(-1).recommend(
                    Lifestyle,
                    Low,
                    "Pregnancy history is protective",
                    "Your pregnancy history helps reduce breast cancer risk",
                ),
            ),
            Rule::when(
                "family history",
                |a: &BasicAnswers| a.family_history_of(CancerSite::Breast),
                Delta::points(2)
                    .factor("Family history of breast cancer")
                    .recommend(
                        Screening,
                        High,
                        "Enhanced screening protocol",
                        "Discuss earlier and more frequent mammograms with your doctor",
                    )
                    .recommend(
                        Medical,
                        High,
                        "Consider genetic counseling",
                        "Discuss genetic testing for BRCA mutations",
                    ),
            ),
            Rule::when(
                "regular alcohol",
                |a: &BasicAnswers| {
                    matches!(
                        a.alcohol_consumption,
                        Some(AlcoholConsumption::Moderate | AlcoholConsumption::Heavy)
                    )
                },
                Delta::points(1)
                    .factor("Regular alcohol consumption")
                    .recommend(
                        Lifestyle,
                        Medium,
                        "Limit alcohol consumption",
                        "Reduce alcohol intake to lower breast cancer risk",
                    ),
            ),
            Rule::when(
                "obesity",
                is_obese,
                Delta::points(1).factor("Obesity (BMI > 30)").recommend(
                    Lifestyle,
                    Medium,
                    "Maintain healthy weight",
                    "Weight management can help reduce breast cancer risk",
                ),
            ),
            Rule::when(
                "high activity",
                is_highly_active,
                Delta::points(-1).recommend(
                    Lifestyle,
                    Low,
                    "Continue regular exercise",
                    "Maintain your excellent exercise routine",
                ),
            )
            .otherwise(
                "not highly active",
                Delta::advice().recommend(
                    Lifestyle,
                    Medium,
                    "Increase physical activity",
                    "Regular exercise can help reduce breast cancer risk",
                ),
            ),
            Rule::when(
                "no mammogram after 40",
                |a: &BasicAnswers| {
                    a.mammogram_history == Some(MammogramHistory::Never) && a.age_at_least(40.0)
                },
                Delta::advice().recommend(
                    Screening,
                    High,
                    "Start mammography screening",
                    "Begin regular mammograms as recommended by your doctor",
                ),
            )
            .otherwise_when(
                "regular mammograms",
                |a: &BasicAnswers| a.mammogram_history == Some(MammogramHistory::Regular),
                Delta::advice().recommend(
                    Screening,
                    Medium,
                    "Continue regular screening",
                    "Maintain your excellent screening routine",
                ),
            ),
            Rule::always(
                "self exams",
                Delta::advice().recommend(
                    Lifestyle,
                    Medium,
                    "Perform breast self-exams",
                    "Monthly self-examinations can help detect changes early",
                ),
            ),
        ],
    }
}

fn colorectal() -> BasicProfile {
    BasicProfile {
        site: CancerType::Colorectal,
        base_score: 2,
        model: Some("Simplified CCRAT"),
        rules: vec![
            age_rule(),
            Rule::when(
                "family history",
                |a: &BasicAnswers| a.family_history_of(CancerSite::Colorectal),
                Delta::points(2)
                    .factor("Family history of colorectal cancer")
                    .recommend(
                        Screening,
                        High,
                        "Start screening earlier",
                        "Begin colonoscopy screening before age 50",
                    ),
            ),
            Rule::when(
                "daily red meat",
                eats_red_meat_daily,
                Delta::points(1).factor("High red meat consumption").recommend(
                    Lifestyle,
                    Medium,
                    "Reduce red meat intake",
                    "Limit red meat to 2-3 servings per week",
                ),
            ),
            Rule::when(
                "low produce",
                |a: &BasicAnswers| {
                    matches!(
                        a.fruits_vegetables,
                        Some(FruitsVegetables::ZeroToOne | FruitsVegetables::TwoToThree)
                    )
                },
                Delta::points(1)
                    .factor("Low fruit and vegetable intake")
                    .recommend(
                        Lifestyle,
                        High,
                        "Increase fruits and vegetables",
                        "Aim for 5-9 servings of fruits and vegetables daily",
                    ),
            ),
            Rule::when(
                "sedentary",
                BasicAnswers::is_inactive,
                Delta::points(1).factor("Sedentary lifestyle").recommend(
                    Lifestyle,
                    High,
                    "Increase physical activity",
                    "Aim for 150 minutes of moderate exercise per week",
                ),
            ),
            Rule::when(
                "obesity",
                is_obese,
                Delta::points(1).factor("Obesity (BMI > 30)").recommend(
                    Lifestyle,
                    Medium,
                    "Achieve healthy weight",
                    "Weight loss can help reduce colorectal cancer risk",
                ),
            ),
            Rule::when(
                "heavy alcohol",
                |a: &BasicAnswers| a.alcohol_consumption == Some(AlcoholConsumption::Heavy),
                Delta::points(1).factor("Heavy alcohol consumption").recommend(
                    Lifestyle,
                    Medium,
                    "Reduce alcohol consumption",
                    "Limit alcohol to moderate levels",
                ),
            ),
            Rule::when(
                "no colonoscopy after 45",
                |a: &BasicAnswers| {
                    a.colonoscopy_history == Some(ColonoscopyHistory::Never)
                        && a.age_at_least(45.0)
                },
                Delta::advice().recommend(
                    Screening,
                    High,
                    "Start colonoscopy screening",
                    "Begin regular colorectal cancer screening",
                ),
            ),
        ],
    }
}

fn skin() -> BasicProfile {
    BasicProfile {
        site: CancerType::Skin,
        base_score: 2,
        model: Some("Simplified MRAT"),
        rules: vec![
            Rule::when(
                "very fair skin",
                |a: &BasicAnswers| matches!(a.skin_type, Some(SkinType::TypeI | SkinType::TypeII)),
                Delta::points(3)
                    .factor("Very fair skin (burns easily)")
                    .recommend(
                        Lifestyle,
                        High,
                        "Use high SPF sunscreen daily",
                        "Apply SPF 30+ sunscreen every day, even indoors",
                    ),
            )
            .otherwise_when(
                "fair to medium skin",
                |a: &BasicAnswers| a.skin_type == Some(SkinType::TypeIII),
                Delta::points(1).factor("Fair to medium skin tone"),
            ),
            Rule::when(
                "high sun exposure",
                |a: &BasicAnswers| a.sun_exposure == Some(SunExposure::High),
                Delta::points(2).factor("High sun exposure").recommend(
                    Lifestyle,
                    High,
                    "Reduce sun exposure",
                    "Seek shade during peak hours (10am-4pm) and wear protective clothing",
                ),
            )
            .otherwise_when(
                "moderate sun exposure",
                |a: &BasicAnswers| a.sun_exposure == Some(SunExposure::Moderate),
                Delta::points(1).factor("Moderate sun exposure"),
            ),
            Rule::when(
                "family history",
                |a: &BasicAnswers| a.family_history_of(CancerSite::Skin),
                Delta::points(1)
                    .factor("Family history of skin cancer")
                    .recommend(
                        Screening,
                        High,
                        "Annual skin cancer screening",
                        "Get professional skin examinations yearly",
                    ),
            ),
            Rule::when(
                "age over 65",
                |a: &BasicAnswers| a.age_over(65.0),
                Delta::points(1).factor("Age over 65"),
            ),
            Rule::always(
                "sun safety",
                Delta::advice()
                    .recommend(
                        Lifestyle,
                        High,
                        "Perform monthly skin self-exams",
                        "Check your skin monthly for new or changing moles",
                    )
                    .recommend(
                        Lifestyle,
                        Medium,
                        "Avoid tanning beds",
                        "Never use tanning beds or sun lamps",
                    ),
            ),
        ],
    }
}

fn prostate() -> BasicProfile {
    BasicProfile {
        site: CancerType::Prostate,
        base_score: 3,
        model: None,
        rules: vec![
            Rule::when(
                "age over 70",
                |a: &BasicAnswers| a.age_over(70.0),
                Delta::points(3).factor("Age over 70 (major risk factor)"),
            )
            .otherwise_when(
                "age over 60",
                |a: &BasicAnswers| a.age_over(60.0),
                Delta::points(2).factor("Age over 60"),
            )
            .otherwise_when(
                "age over 50",
                |a: &BasicAnswers| a.age_over(50.0),
                Delta::points(1).factor("Age over 50"),
            ),
            Rule::when(
                "african american",
                |a: &BasicAnswers| a.race_ethnicity == Some(RaceEthnicity::Black),
                Delta::points(2)
                    .factor("African American ethnicity (higher risk)")
                    .recommend(
                        Screening,
                        High,
                        "Start screening at age 45",
                        "Begin PSA testing earlier due to higher risk",
                    ),
            ),
            Rule::when(
                "family history",
                |a: &BasicAnswers| a.family_history_of(CancerSite::Prostate),
                Delta::points(2)
                    .factor("Family history of prostate cancer")
                    .recommend(
                        Screening,
                        High,
                        "Enhanced screening protocol",
                        "Discuss earlier and more frequent PSA testing",
                    ),
            ),
            Rule::when(
                "daily red meat",
                eats_red_meat_daily,
                Delta::points(1).factor("High red meat consumption").recommend(
                    Lifestyle,
                    Medium,
                    "Reduce red meat intake",
                    "Limit red meat and increase fish consumption",
                ),
            ),
            Rule::when(
                "high activity",
                is_highly_active,
                Delta::points(-1).recommend(
                    Lifestyle,
                    Low,
                    "Continue regular exercise",
                    "Maintain your excellent exercise routine",
                ),
            )
            .otherwise(
                "not highly active",
                Delta::advice().recommend(
                    Lifestyle,
                    Medium,
                    "Increase physical activity",
                    "Regular exercise may help reduce prostate cancer risk",
                ),
            ),
            Rule::always(
                "lycopene",
                Delta::advice().recommend(
                    Lifestyle,
                    Medium,
                    "Eat tomato-based foods",
                    "Include lycopene-rich foods like tomatoes in your diet",
                ),
            ),
            Rule::when(
                "psa age",
                |a: &BasicAnswers| a.age_at_least(50.0),
                Delta::advice().recommend(
                    Screening,
                    High,
                    "Discuss PSA screening",
                    "Talk to your doctor about prostate cancer screening",
                ),
            ),
        ],
    }
}

fn ovarian() -> BasicProfile {
    BasicProfile {
        site: CancerType::Ovarian,
        base_score: 2,
        model: None,
        rules: vec![
            age_rule(),
            Rule::when(
                "family history",
                |a: &BasicAnswers| {
                    a.family_history_of(CancerSite::Ovarian)
                        || a.family_history_of(CancerSite::Breast)
                },
                Delta::points(2)
                    .factor("Family history of ovarian/breast cancer")
                    .recommend(
                        Medical,
                        High,
                        "Consider genetic counseling",
                        "Discuss BRCA testing due to family history",
                    ),
            ),
            Rule::when(
                "nulliparity",
                |a: &BasicAnswers| a.pregnancies == Some(0),
                Delta::points(1).factor("No pregnancies (nulliparity)"),
            )
            .otherwise_when(
                "pregnancy history",
                |a: &BasicAnswers| a.pregnancies.is_some_and(|n| n > 0),
                Delta::points(-1),
            ),
            Rule::always(
                "awareness",
                Delta::advice()
                    .recommend(
                        Screening,
                        Medium,
                        "Regular pelvic exams",
                        "Maintain regular gynecological check-ups",
                    )
                    .recommend(
                        Lifestyle,
                        Medium,
                        "Know the symptoms",
                        "Be aware of persistent bloating, pelvic pain, and urinary symptoms",
                    ),
            ),
        ],
    }
}

fn pancreatic() -> BasicProfile {
    BasicProfile {
        site: CancerType::Pancreatic,
        base_score: 1,
        model: None,
        rules: vec![
            age_rule(),
            Rule::when(
                "current smoker",
                is_current,
                Delta::points(2).factor("Current smoking").recommend(
                    Lifestyle,
                    High,
                    "Quit smoking",
                    "Smoking significantly increases pancreatic cancer risk",
                ),
            )
            .otherwise_when(
                "former smoker",
                is_former,
                Delta::points(1).factor("Former smoking history"),
            ),
            Rule::when(
                "family history",
                |a: &BasicAnswers| a.family_history_of(CancerSite::Pancreatic),
                Delta::points(2)
                    .factor("Family history of pancreatic cancer")
                    .recommend(
                        Medical,
                        High,
                        "Discuss with oncologist",
                        "Consider genetic counseling for hereditary pancreatic cancer",
                    ),
            ),
            Rule::when(
                "obesity",
                is_obese,
                Delta::points(1).factor("Obesity (BMI > 30)").recommend(
                    Lifestyle,
                    Medium,
                    "Maintain healthy weight",
                    "Weight management may help reduce pancreatic cancer risk",
                ),
            ),
            Rule::always(
                "healthy diet",
                Delta::advice().recommend(
                    Lifestyle,
                    Medium,
                    "Maintain healthy diet",
                    "Eat plenty of fruits, vegetables, and whole grains",
                ),
            ),
        ],
    }
}

static LUNG: Lazy<BasicProfile> = Lazy::new(lung);
static BREAST: Lazy<BasicProfile> = Lazy::new(breast);
static COLORECTAL: Lazy<BasicProfile> = Lazy::new(colorectal);
static SKIN: Lazy<BasicProfile> = Lazy::new(skin);
static PROSTATE: Lazy<BasicProfile> = Lazy::new(prostate);
static OVARIAN: Lazy<BasicProfile> = Lazy::new(ovarian);
static PANCREATIC: Lazy<BasicProfile> = Lazy::new(pancreatic);

/// The basic table for `site`, if the short questionnaire covers it.
pub fn profile(site: CancerType) -> Option<&'static BasicProfile> {
    let profile: &'static Lazy<BasicProfile> = match site {
        CancerType::Lung => &LUNG,
        CancerType::Breast => &BREAST,
        CancerType::Colorectal => &COLORECTAL,
        CancerType::Skin => &SKIN,
        CancerType::Prostate => &PROSTATE,
        CancerType::Ovarian => &OVARIAN,
        CancerType::Pancreatic => &PANCREATIC,
        CancerType::Cervical | CancerType::Bladder | CancerType::Liver => return None,
    };
    Some(Lazy::force(profile))
}

pub fn calculate_basic_lung_cancer_risk(answers: &BasicAnswers) -> BasicRiskAssessment {
    LUNG.assess(answers)
}

pub fn calculate_basic_breast_cancer_risk(answers: &BasicAnswers) -> BasicRiskAssessment {
    BREAST.assess(answers)
}

pub fn calculate_basic_colorectal_cancer_risk(answers: &BasicAnswers) -> BasicRiskAssessment {
    COLORECTAL.assess(answers)
}

pub fn calculate_basic_skin_cancer_risk(answers: &BasicAnswers) -> BasicRiskAssessment {
    SKIN.assess(answers)
}

pub fn calculate_basic_prostate_cancer_risk(answers: &BasicAnswers) -> BasicRiskAssessment {
    PROSTATE.assess(answers)
}

pub fn calculate_basic_ovarian_cancer_risk(answers: &BasicAnswers) -> BasicRiskAssessment {
    OVARIAN.assess(answers)
}

pub fn calculate_basic_pancreatic_cancer_risk(answers: &BasicAnswers) -> BasicRiskAssessment {
    PANCREATIC.assess(answers)
}
