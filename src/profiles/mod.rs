//! Per-site rule tables.
//!
//! Each site is a named configuration of the generic engine: base value,
//! ordered rules, bands and screening rules. The tables are built once on
//! first use and shared.

pub mod basic;
pub mod premium;

pub use basic::{
    calculate_basic_breast_cancer_risk, calculate_basic_colorectal_cancer_risk,
    calculate_basic_lung_cancer_risk, calculate_basic_ovarian_cancer_risk,
    calculate_basic_pancreatic_cancer_risk, calculate_basic_prostate_cancer_risk,
    calculate_basic_skin_cancer_risk,
};
pub use premium::{
    calculate_bladder_cancer_risk, calculate_breast_cancer_risk,
    calculate_cervical_cancer_risk, calculate_colorectal_cancer_risk,
    calculate_liver_cancer_risk, calculate_lung_cancer_risk, calculate_ovarian_cancer_risk,
    calculate_pancreatic_cancer_risk, calculate_prostate_cancer_risk, calculate_skin_cancer_risk,
};
