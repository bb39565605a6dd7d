//! The assessment schema: every field a student reports, its bounds and
//! its categorical levels.
//!
//! The column names and their ordering in [`FEATURE_COLUMNS`] are the
//! contract with the trained artifact. The encoder compares the artifact's
//! own column list against this one at inference time, so a model trained
//! against a different schema fails closed instead of silently mis-encoding.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use thiserror::Error;

/// Canonical feature column names, in the order the classifier expects.
pub mod columns {
    pub const GENDER: &str = "Gender";
    pub const AGE: &str = "Age";
    pub const ACADEMIC_PRESSURE: &str = "Academic Pressure";
    pub const CGPA: &str = "CGPA";
    pub const STUDY_SATISFACTION: &str = "Study Satisfaction";
    pub const SLEEP_DURATION: &str = "Sleep Duration";
    pub const DIETARY_HABITS: &str = "Dietary Habits";
    pub const DEGREE: &str = "Degree";
    pub const FINANCIAL_STRESS: &str = "Financial Stress";
    pub const SUICIDAL_THOUGHTS: &str = "Suicidal Thoughts";
    pub const FAMILY_HISTORY: &str = "Family History of Mental Illness";
}

pub const FEATURE_COLUMNS: [&str; 11] = [
    columns::GENDER,
    columns::AGE,
    columns::ACADEMIC_PRESSURE,
    columns::CGPA,
    columns::STUDY_SATISFACTION,
    columns::SLEEP_DURATION,
    columns::DIETARY_HABITS,
    columns::DEGREE,
    columns::FINANCIAL_STRESS,
    columns::SUICIDAL_THOUGHTS,
    columns::FAMILY_HISTORY,
];

pub const AGE_RANGE: RangeInclusive<u8> = 15..=40;
pub const SCALE_RANGE: RangeInclusive<u8> = 1..=5;
pub const CGPA_RANGE: RangeInclusive<f64> = 0.0..=10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum SleepDuration {
    #[serde(rename = "5-6 hours")]
    FiveToSix,
    #[serde(rename = "Less than 5 hours")]
    LessThanFive,
    #[serde(rename = "7-8 hours")]
    SevenToEight,
    #[serde(rename = "More than 8 hours")]
    MoreThanEight,
    Others,
}

impl SleepDuration {
    pub const ALL: [SleepDuration; 5] = [
        SleepDuration::FiveToSix,
        SleepDuration::LessThanFive,
        SleepDuration::SevenToEight,
        SleepDuration::MoreThanEight,
        SleepDuration::Others,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SleepDuration::FiveToSix => "5-6 hours",
            SleepDuration::LessThanFive => "Less than 5 hours",
            SleepDuration::SevenToEight => "7-8 hours",
            SleepDuration::MoreThanEight => "More than 8 hours",
            SleepDuration::Others => "Others",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum DietaryHabits {
    Healthy,
    Moderate,
    Unhealthy,
    Others,
}

impl DietaryHabits {
    pub const ALL: [DietaryHabits; 4] = [
        DietaryHabits::Healthy,
        DietaryHabits::Moderate,
        DietaryHabits::Unhealthy,
        DietaryHabits::Others,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DietaryHabits::Healthy => "Healthy",
            DietaryHabits::Moderate => "Moderate",
            DietaryHabits::Unhealthy => "Unhealthy",
            DietaryHabits::Others => "Others",
        }
    }
}

/// Closed list of degree programs the survey recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Degree {
    #[serde(rename = "B.Pharm")]
    BPharm,
    BSc,
    BA,
    BCA,
    #[serde(rename = "M.Tech")]
    MTech,
    PhD,
    #[serde(rename = "Class 12")]
    Class12,
    #[serde(rename = "B.Ed")]
    BEd,
    LLB,
    BE,
    #[serde(rename = "M.Ed")]
    MEd,
    MSc,
    BHM,
    #[serde(rename = "M.Pharm")]
    MPharm,
    MCA,
    MA,
    #[serde(rename = "B.Com")]
    BCom,
    MD,
    MBA,
    MBBS,
    #[serde(rename = "M.Com")]
    MCom,
    #[serde(rename = "B.Arch")]
    BArch,
    LLM,
    #[serde(rename = "B.Tech")]
    BTech,
    BBA,
    ME,
    MHM,
    Others,
}

impl Degree {
    pub const ALL: [Degree; 28] = [
        Degree::BPharm,
        Degree::BSc,
        Degree::BA,
        Degree::BCA,
        Degree::MTech,
        Degree::PhD,
        Degree::Class12,
        Degree::BEd,
        Degree::LLB,
        Degree::BE,
        Degree::MEd,
        Degree::MSc,
        Degree::BHM,
        Degree::MPharm,
        Degree::MCA,
        Degree::MA,
        Degree::BCom,
        Degree::MD,
        Degree::MBA,
        Degree::MBBS,
        Degree::MCom,
        Degree::BArch,
        Degree::LLM,
        Degree::BTech,
        Degree::BBA,
        Degree::ME,
        Degree::MHM,
        Degree::Others,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Degree::BPharm => "B.Pharm",
            Degree::BSc => "BSc",
            Degree::BA => "BA",
            Degree::BCA => "BCA",
            Degree::MTech => "M.Tech",
            Degree::PhD => "PhD",
            Degree::Class12 => "Class 12",
            Degree::BEd => "B.Ed",
            Degree::LLB => "LLB",
            Degree::BE => "BE",
            Degree::MEd => "M.Ed",
            Degree::MSc => "MSc",
            Degree::BHM => "BHM",
            Degree::MPharm => "M.Pharm",
            Degree::MCA => "MCA",
            Degree::MA => "MA",
            Degree::BCom => "B.Com",
            Degree::MD => "MD",
            Degree::MBA => "MBA",
            Degree::MBBS => "MBBS",
            Degree::MCom => "M.Com",
            Degree::BArch => "B.Arch",
            Degree::LLM => "LLM",
            Degree::BTech => "B.Tech",
            Degree::BBA => "BBA",
            Degree::ME => "ME",
            Degree::MHM => "MHM",
            Degree::Others => "Others",
        }
    }
}

/// Yes/no survey answers that feed the classifier as 0/1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum YesNo {
    No,
    Yes,
}

impl YesNo {
    pub const ALL: [YesNo; 2] = [YesNo::No, YesNo::Yes];

    pub fn as_str(&self) -> &'static str {
        match self {
            YesNo::No => "No",
            YesNo::Yes => "Yes",
        }
    }

    pub fn as_feature(&self) -> f64 {
        match self {
            YesNo::No => 0.0,
            YesNo::Yes => 1.0,
        }
    }
}

/// One student submission, created per request and discarded after the
/// outcome is rendered.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AssessmentRecord {
    pub gender: Gender,
    pub age: u8,
    pub academic_pressure: u8,
    pub cgpa: f64,
    pub study_satisfaction: u8,
    pub sleep_duration: SleepDuration,
    pub dietary_habits: DietaryHabits,
    pub degree: Degree,
    pub financial_stress: u8,
    pub suicidal_thoughts: YesNo,
    pub family_history: YesNo,
}

#[derive(Debug, Error)]
#[error("{field} must be between {min} and {max}, got {value}")]
pub struct FieldError {
    pub field: &'static str,
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

impl AssessmentRecord {
    /// Per-field range checks. Enum fields are already closed by the type,
    /// so only the numeric fields can be out of bounds.
    pub fn validate(&self) -> Result<(), FieldError> {
        check_scale(columns::AGE, self.age, AGE_RANGE)?;
        check_scale(columns::ACADEMIC_PRESSURE, self.academic_pressure, SCALE_RANGE)?;
        check_scale(columns::STUDY_SATISFACTION, self.study_satisfaction, SCALE_RANGE)?;
        check_scale(columns::FINANCIAL_STRESS, self.financial_stress, SCALE_RANGE)?;
        if !CGPA_RANGE.contains(&self.cgpa) {
            return Err(FieldError {
                field: columns::CGPA,
                value: self.cgpa,
                min: *CGPA_RANGE.start(),
                max: *CGPA_RANGE.end(),
            });
        }
        Ok(())
    }
}

fn check_scale(
    field: &'static str,
    value: u8,
    range: RangeInclusive<u8>,
) -> Result<(), FieldError> {
    if range.contains(&value) {
        return Ok(());
    }
    Err(FieldError {
        field,
        value: f64::from(value),
        min: f64::from(*range.start()),
        max: f64::from(*range.end()),
    })
}
