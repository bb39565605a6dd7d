//! Risk evaluation: one assessment record in, one screening outcome out.

use crate::classifier::Classifier;
use crate::error::InferenceError;
use crate::schema::AssessmentRecord;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Fixed response texts shown with each outcome.
pub mod messages {
    pub const HIGH_RISK_HEADLINE: &str =
        "High Risk: The student may be experiencing depression.";
    pub const HIGH_RISK_SUGGESTION: &str =
        "Consider seeking counseling support, stress management, and community help.";
    pub const LOW_RISK_HEADLINE: &str =
        "Low Risk: The student is unlikely to be experiencing depression.";
    pub const LOW_RISK_ENCOURAGEMENT: &str =
        "Keep it up: Maintain balance with sleep, studies, and healthy habits.";
    pub const INFERENCE_WARNING: &str =
        "Something went wrong. Ensure the model encoding matches the submitted inputs.";
    pub const DISCLAIMER: &str =
        "This tool is not a medical diagnosis. It is for awareness and educational purposes only.";
}

/// The classifier's binary verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    HighRisk,
    LowRisk,
}

/// What the user sees. Classifier failures surface as `Unavailable`
/// rather than as an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScreeningOutcome {
    HighRisk { headline: String, suggestion: String },
    LowRisk { headline: String, encouragement: String },
    Unavailable { warning: String, detail: String },
}

/// Maps records to outcomes through an injected classification capability.
#[derive(Clone)]
pub struct RiskEvaluator {
    classifier: Arc<dyn Classifier>,
}

impl RiskEvaluator {
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        RiskEvaluator { classifier }
    }

    /// Raw verdict from the classification capability.
    pub fn verdict(&self, record: &AssessmentRecord) -> Result<Verdict, InferenceError> {
        self.classifier.predict(record)
    }

    /// Evaluate one record. Any [`InferenceError`] is caught here and
    /// converted into the `Unavailable` outcome; nothing propagates past
    /// this boundary.
    pub fn evaluate(&self, record: &AssessmentRecord) -> ScreeningOutcome {
        match self.classifier.predict(record) {
            Ok(Verdict::HighRisk) => ScreeningOutcome::HighRisk {
                headline: messages::HIGH_RISK_HEADLINE.to_string(),
                suggestion: messages::HIGH_RISK_SUGGESTION.to_string(),
            },
            Ok(Verdict::LowRisk) => ScreeningOutcome::LowRisk {
                headline: messages::LOW_RISK_HEADLINE.to_string(),
                encouragement: messages::LOW_RISK_ENCOURAGEMENT.to_string(),
            },
            Err(err) => {
                tracing::warn!(error = %err, "classifier rejected the assessment record");
                ScreeningOutcome::Unavailable {
                    warning: messages::INFERENCE_WARNING.to_string(),
                    detail: err.to_string(),
                }
            }
        }
    }
}
