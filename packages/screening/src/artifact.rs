//! The serialized screening artifact: a trained classifier together with
//! the categorical encodings and column ordering it was trained with.
//!
//! On disk the artifact is a versioned wrapper around a MessagePack
//! payload, so the format can evolve without breaking old files. The model
//! itself is one of the supported linfa families, carried as a tagged enum.

use crate::error::ArtifactError;
use crate::schema::{Degree, DietaryHabits, FEATURE_COLUMNS, Gender, SleepDuration, columns};
use linfa::DatasetBase;
use linfa::traits::Predict;
use linfa_bayes::GaussianNb;
use linfa_trees::DecisionTree;
use ndarray::Array2;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

pub const ARTIFACT_VERSION: u8 = 1;

/// Supported classifier families.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RiskModel {
    DecisionTree(DecisionTree<f64, usize>),
    GaussianNaiveBayes(GaussianNb<f64, usize>),
}

impl fmt::Display for RiskModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskModel::DecisionTree(_) => write!(f, "Decision Tree Classification"),
            RiskModel::GaussianNaiveBayes(_) => write!(f, "Gaussian Naive Bayes Classification"),
        }
    }
}

impl RiskModel {
    pub fn family(&self) -> &'static str {
        match self {
            RiskModel::DecisionTree(_) => "DecisionTree",
            RiskModel::GaussianNaiveBayes(_) => "GaussianNaiveBayes",
        }
    }

    /// Class label for a single encoded row.
    pub(crate) fn predict_one(&self, features: Array2<f64>) -> Option<usize> {
        let dataset = DatasetBase::from(features);
        let predictions = match self {
            RiskModel::DecisionTree(model) => model.predict(&dataset),
            RiskModel::GaussianNaiveBayes(model) => model.predict(&dataset),
        };
        predictions.first().copied()
    }
}

/// Everything the inference path needs, in one file.
#[derive(Debug, Serialize, Deserialize)]
pub struct ScreeningArtifact {
    /// Feature columns in training order.
    pub columns: Vec<String>,
    /// Ordinal level tables for the categorical columns; the position of a
    /// level is its code.
    pub levels: BTreeMap<String, Vec<String>>,
    pub model: RiskModel,
}

#[derive(Serialize, Deserialize)]
struct Envelope {
    version: u8,
    payload: Vec<u8>,
}

impl ScreeningArtifact {
    /// Artifact whose columns and level tables mirror the compiled schema.
    /// This is what a training pipeline aligned with this service produces.
    pub fn with_schema_defaults(model: RiskModel) -> Self {
        let mut levels = BTreeMap::new();
        levels.insert(
            columns::GENDER.to_string(),
            Gender::ALL.iter().map(|v| v.as_str().to_string()).collect(),
        );
        levels.insert(
            columns::SLEEP_DURATION.to_string(),
            SleepDuration::ALL
                .iter()
                .map(|v| v.as_str().to_string())
                .collect(),
        );
        levels.insert(
            columns::DIETARY_HABITS.to_string(),
            DietaryHabits::ALL
                .iter()
                .map(|v| v.as_str().to_string())
                .collect(),
        );
        levels.insert(
            columns::DEGREE.to_string(),
            Degree::ALL.iter().map(|v| v.as_str().to_string()).collect(),
        );

        ScreeningArtifact {
            columns: FEATURE_COLUMNS.iter().map(|c| c.to_string()).collect(),
            levels,
            model,
        }
    }

    pub fn to_vec(&self) -> Result<Vec<u8>, ArtifactError> {
        let payload = rmp_serde::to_vec(self)?;
        let envelope = Envelope {
            version: ARTIFACT_VERSION,
            payload,
        };
        Ok(rmp_serde::to_vec(&envelope)?)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, ArtifactError> {
        let envelope: Envelope = rmp_serde::from_slice(bytes)?;
        if envelope.version != ARTIFACT_VERSION {
            return Err(ArtifactError::UnsupportedVersion(envelope.version));
        }
        Ok(rmp_serde::from_slice(&envelope.payload)?)
    }

    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let bytes = std::fs::read(path).map_err(|source| ArtifactError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let artifact = Self::from_slice(&bytes)?;
        tracing::debug!(
            path = %path.display(),
            model = %artifact.model,
            "loaded screening artifact"
        );
        Ok(artifact)
    }

    pub fn save(&self, path: &Path) -> Result<(), ArtifactError> {
        let bytes = self.to_vec()?;
        std::fs::write(path, bytes).map_err(|source| ArtifactError::Write {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn info(&self) -> ModelInfo {
        ModelInfo {
            family: self.model.family().to_string(),
            columns: self.columns.clone(),
        }
    }
}

/// Artifact metadata safe to expose over the API.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ModelInfo {
    pub family: String,
    pub columns: Vec<String>,
}
