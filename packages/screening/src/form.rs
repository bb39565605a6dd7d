//! Form definition for the assessment surface.
//!
//! Each field declares its widget, valid values and default so the form can
//! be rendered (or introspected) without duplicating the schema.

use crate::schema::{self, Degree, DietaryHabits, Gender, SleepDuration, YesNo, columns};
use schemars::JsonSchema;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct FieldSpec {
    /// Key used in the submitted record.
    pub name: &'static str,
    /// Column label shown to the user.
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<&'static str>,
    pub widget: Widget,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Widget {
    Select {
        options: Vec<&'static str>,
        default: &'static str,
    },
    Slider {
        min: i64,
        max: i64,
        default: i64,
    },
    Number {
        min: f64,
        max: f64,
        step: f64,
        default: f64,
    },
}

fn select<T>(levels: &[T], as_str: fn(&T) -> &'static str) -> Widget {
    let options: Vec<&'static str> = levels.iter().map(as_str).collect();
    let default = options[0];
    Widget::Select { options, default }
}

/// The ordered field set of the assessment form.
pub fn fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec {
            name: "gender",
            label: columns::GENDER,
            help: None,
            widget: select(&Gender::ALL, Gender::as_str),
        },
        FieldSpec {
            name: "age",
            label: columns::AGE,
            help: None,
            widget: Widget::Slider {
                min: i64::from(*schema::AGE_RANGE.start()),
                max: i64::from(*schema::AGE_RANGE.end()),
                default: 20,
            },
        },
        FieldSpec {
            name: "academic_pressure",
            label: columns::ACADEMIC_PRESSURE,
            help: Some("On a scale of 1-5: 1 = low workload, 5 = very high workload or expectations."),
            widget: scale_slider(),
        },
        FieldSpec {
            name: "cgpa",
            label: columns::CGPA,
            help: None,
            widget: Widget::Number {
                min: *schema::CGPA_RANGE.start(),
                max: *schema::CGPA_RANGE.end(),
                step: 0.1,
                default: 0.0,
            },
        },
        FieldSpec {
            name: "study_satisfaction",
            label: columns::STUDY_SATISFACTION,
            help: Some("On a scale of 1-5: 1 = not satisfied with study time, 5 = very satisfied."),
            widget: scale_slider(),
        },
        FieldSpec {
            name: "sleep_duration",
            label: columns::SLEEP_DURATION,
            help: None,
            widget: select(&SleepDuration::ALL, SleepDuration::as_str),
        },
        FieldSpec {
            name: "dietary_habits",
            label: columns::DIETARY_HABITS,
            help: None,
            widget: select(&DietaryHabits::ALL, DietaryHabits::as_str),
        },
        FieldSpec {
            name: "degree",
            label: columns::DEGREE,
            help: None,
            widget: select(&Degree::ALL, Degree::as_str),
        },
        FieldSpec {
            name: "financial_stress",
            label: columns::FINANCIAL_STRESS,
            help: Some("On a scale of 1-5: 1 = little or no financial strain, 5 = severe financial pressure."),
            widget: scale_slider(),
        },
        FieldSpec {
            name: "suicidal_thoughts",
            label: columns::SUICIDAL_THOUGHTS,
            help: None,
            widget: select(&YesNo::ALL, YesNo::as_str),
        },
        FieldSpec {
            name: "family_history",
            label: columns::FAMILY_HISTORY,
            help: None,
            widget: select(&YesNo::ALL, YesNo::as_str),
        },
    ]
}

fn scale_slider() -> Widget {
    Widget::Slider {
        min: i64::from(*schema::SCALE_RANGE.start()),
        max: i64::from(*schema::SCALE_RANGE.end()),
        default: 3,
    }
}
