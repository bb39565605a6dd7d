//! The classification capability behind the risk evaluator.
//!
//! [`Classifier`] is the injection seam: the service wires in an
//! [`ArtifactClassifier`] around the loaded artifact, tests substitute
//! stubs.

use crate::artifact::ScreeningArtifact;
use crate::error::InferenceError;
use crate::evaluator::Verdict;
use crate::schema::{AssessmentRecord, FEATURE_COLUMNS, columns};
use ndarray::Array2;

pub trait Classifier: Send + Sync {
    fn predict(&self, record: &AssessmentRecord) -> Result<Verdict, InferenceError>;
}

/// Classifier backed by a loaded [`ScreeningArtifact`]. Encoding follows
/// the artifact's own level tables, so the record is rejected at inference
/// time when the artifact was trained against a different schema.
pub struct ArtifactClassifier {
    artifact: ScreeningArtifact,
}

impl ArtifactClassifier {
    pub fn new(artifact: ScreeningArtifact) -> Self {
        ArtifactClassifier { artifact }
    }

    fn level_code(&self, column: &str, value: &str) -> Result<f64, InferenceError> {
        self.artifact
            .levels
            .get(column)
            .and_then(|table| table.iter().position(|level| level == value))
            .map(|code| code as f64)
            .ok_or_else(|| InferenceError::UnknownLevel {
                field: column.to_string(),
                value: value.to_string(),
            })
    }

    fn feature(&self, record: &AssessmentRecord, column: &str) -> Result<f64, InferenceError> {
        match column {
            columns::GENDER => self.level_code(column, record.gender.as_str()),
            columns::AGE => Ok(f64::from(record.age)),
            columns::ACADEMIC_PRESSURE => Ok(f64::from(record.academic_pressure)),
            columns::CGPA => Ok(record.cgpa),
            columns::STUDY_SATISFACTION => Ok(f64::from(record.study_satisfaction)),
            columns::SLEEP_DURATION => self.level_code(column, record.sleep_duration.as_str()),
            columns::DIETARY_HABITS => self.level_code(column, record.dietary_habits.as_str()),
            columns::DEGREE => self.level_code(column, record.degree.as_str()),
            columns::FINANCIAL_STRESS => Ok(f64::from(record.financial_stress)),
            columns::SUICIDAL_THOUGHTS => Ok(record.suicidal_thoughts.as_feature()),
            columns::FAMILY_HISTORY => Ok(record.family_history.as_feature()),
            other => Err(InferenceError::SchemaMismatch {
                expected: FEATURE_COLUMNS.join(", "),
                found: other.to_string(),
            }),
        }
    }

    /// One record as a single-row feature matrix, in the artifact's column
    /// order.
    fn encode(&self, record: &AssessmentRecord) -> Result<Array2<f64>, InferenceError> {
        if self.artifact.columns != FEATURE_COLUMNS {
            return Err(InferenceError::SchemaMismatch {
                expected: FEATURE_COLUMNS.join(", "),
                found: self.artifact.columns.join(", "),
            });
        }

        let mut row = Vec::with_capacity(self.artifact.columns.len());
        for column in &self.artifact.columns {
            row.push(self.feature(record, column)?);
        }
        let width = row.len();
        Array2::from_shape_vec((1, width), row)
            .map_err(|err| InferenceError::Other(sanctuary_types::Error::from(err)))
    }
}

impl Classifier for ArtifactClassifier {
    fn predict(&self, record: &AssessmentRecord) -> Result<Verdict, InferenceError> {
        let features = self.encode(record)?;
        let label = self
            .artifact
            .model
            .predict_one(features)
            .ok_or(InferenceError::EmptyPrediction)?;
        match label {
            0 => Ok(Verdict::LowRisk),
            1 => Ok(Verdict::HighRisk),
            other => Err(InferenceError::UnexpectedLabel(other)),
        }
    }
}
