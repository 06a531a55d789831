//! Option codes for every choice and multi-select question.
//!
//! The codes are a fixed contract with the questionnaire collector: each enum
//! parses from and serializes to exactly the code the collector writes.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Returned when a string is not one of a vocabulary's codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCode(pub String);

/// A closed set of option codes.
pub trait Vocabulary: FromStr<Err = UnknownCode> + Copy + Ord {
    const CODES: &'static [&'static str];

    fn code(&self) -> &'static str;

    fn expected() -> String {
        Self::CODES.join(", ")
    }
}

macro_rules! option_codes {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $code:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $code)]
                $variant,
            )+
        }

        impl Vocabulary for $name {
            const CODES: &'static [&'static str] = &[$($code),+];

            fn code(&self) -> &'static str {
                match self {
                    $($name::$variant => $code,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = UnknownCode;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($code => Ok($name::$variant),)+
                    other => Err(UnknownCode(other.to_string())),
                }
            }
        }
    };
}

option_codes! {
    BiologicalSex {
        Male => "male",
        Female => "female",
        Other => "other",
    }
}

option_codes! {
    RaceEthnicity {
        White => "white",
        Black => "black",
        Hispanic => "hispanic",
        Asian => "asian",
        NativeAmerican => "native_american",
        PacificIslander => "pacific_islander",
        Other => "other",
    }
}

option_codes! {
    SmokingStatus {
        Never => "never",
        Former => "former",
        Current => "current",
    }
}

option_codes! {
    AlcoholConsumption {
        Never => "never",
        Light => "light",
        Moderate => "moderate",
        Heavy => "heavy",
    }
}

option_codes! {
    /// Weekly moderate-to-vigorous exercise band.
    PhysicalActivity {
        Inactive => "none",
        Low => "low",
        Moderate => "moderate",
        High => "high",
    }
}

option_codes! {
    /// Daily servings of fruit and vegetables.
    FruitsVegetables {
        ZeroToOne => "0-1",
        TwoToThree => "2-3",
        FourToFive => "4-5",
        SixPlus => "6+",
    }
}

option_codes! {
    /// Used by both red and processed meat questions.
    MeatFrequency {
        Never => "never",
        Rarely => "rarely",
        Weekly => "weekly",
        Daily => "daily",
    }
}

option_codes! {
    SunExposure {
        Minimal => "minimal",
        Moderate => "moderate",
        High => "high",
    }
}

option_codes! {
    /// Fitzpatrick skin type.
    SkinType {
        TypeI => "1",
        TypeII => "2",
        TypeIII => "3",
        TypeIV => "4",
        TypeV => "5",
        TypeVI => "6",
    }
}

option_codes! {
    SevereSunburns {
        NoBurns => "0",
        OneToTwo => "1-2",
        ThreeToFive => "3-5",
        SixPlus => "6+",
    }
}

option_codes! {
    TanningBedUse {
        Never => "never",
        Occasional => "occasional",
        Regular => "regular",
    }
}

option_codes! {
    SunProtection {
        Never => "never",
        Sometimes => "sometimes",
        Usually => "usually",
        Always => "always",
    }
}

option_codes! {
    SecondhandSmoke {
        Regularly => "yes",
        Occasionally => "occasionally",
        No => "no",
    }
}

option_codes! {
    AirPollution {
        Good => "good",
        Moderate => "moderate",
        Poor => "poor",
    }
}

option_codes! {
    RadonExposure {
        Low => "low",
        High => "high",
        NeverTested => "never",
    }
}

option_codes! {
    /// Genetic testing outcome. Only the bare `positive` code raises breast
    /// and ovarian risk; the collector's `positive_*` codes are accepted but
    /// carry no rule.
    GeneticTesting {
        Positive => "positive",
        PositiveBrca => "positive_brca",
        PositiveLynch => "positive_lynch",
        PositiveOther => "positive_other",
        Negative => "negative",
        NotTested => "no",
        Interested => "interested",
        Unknown => "unknown",
    }
}

option_codes! {
    BirthControlUse {
        Never => "never",
        Short => "short",
        Medium => "medium",
        Long => "long",
        Current => "current",
    }
}

option_codes! {
    HrtUse {
        Never => "never",
        Current => "current",
        FormerShort => "former_short",
        FormerLong => "former_long",
    }
}

option_codes! {
    MenopauseStatus {
        Premenopausal => "premenopausal",
        Perimenopausal => "perimenopausal",
        Postmenopausal => "postmenopausal",
        Surgical => "surgical",
    }
}

option_codes! {
    MammogramHistory {
        Never => "never",
        Irregular => "irregular",
        Regular => "regular",
        Enhanced => "enhanced",
        NotApplicable => "not_applicable",
    }
}

option_codes! {
    PapSmearHistory {
        Never => "never",
        Irregular => "irregular",
        Regular => "regular",
        Abnormal => "abnormal",
    }
}

option_codes! {
    ColonoscopyHistory {
        Never => "never",
        Irregular => "irregular",
        Regular => "regular",
        Polyps => "polyps",
    }
}

option_codes! {
    HealthcareAccess {
        Poor => "poor",
        Fair => "fair",
        Good => "good",
        Excellent => "excellent",
    }
}

option_codes! {
    /// Options of the family history multi-selects.
    CancerSite {
        Breast => "breast",
        Lung => "lung",
        Colorectal => "colorectal",
        Prostate => "prostate",
        Ovarian => "ovarian",
        Skin => "skin",
        Pancreatic => "pancreatic",
        Liver => "liver",
        Kidney => "kidney",
        Bladder => "bladder",
        Other => "other",
        NoneReported => "none",
    }
}

option_codes! {
    ChronicCondition {
        Diabetes => "diabetes",
        Ibd => "ibd",
        HepatitisB => "hepatitisB",
        HepatitisC => "hepatitisC",
        Hiv => "hiv",
        Autoimmune => "autoimmune",
        Pcos => "pcos",
        Endometriosis => "endometriosis",
        NoneReported => "none",
    }
}

option_codes! {
    OccupationalExposure {
        Asbestos => "asbestos",
        Chemicals => "chemicals",
        Radiation => "radiation",
        Pesticides => "pesticides",
        Metals => "metals",
        Dust => "dust",
        Diesel => "diesel",
        NoneReported => "none",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip_through_from_str() {
        for code in FruitsVegetables::CODES {
            let parsed: FruitsVegetables = code.parse().unwrap();
            assert_eq!(parsed.code(), *code);
        }
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        let err = "sometimes".parse::<SmokingStatus>().unwrap_err();
        assert_eq!(err, UnknownCode("sometimes".to_string()));
    }

    #[test]
    fn test_serde_uses_collector_codes() {
        let json = serde_json::to_string(&ChronicCondition::HepatitisB).unwrap();
        assert_eq!(json, "\"hepatitisB\"");
        let parsed: PhysicalActivity = serde_json::from_str("\"none\"").unwrap();
        assert_eq!(parsed, PhysicalActivity::Inactive);
    }

    #[test]
    fn test_expected_lists_codes_in_order() {
        assert_eq!(SmokingStatus::expected(), "never, former, current");
    }
}
