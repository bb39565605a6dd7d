//! Student depression-risk screening core.
//!
//! Holds the assessment schema, the serialized classifier artifact and the
//! risk evaluator. The HTTP surface lives in `sanctuary-api`; this crate
//! has no opinion about transport.

pub mod artifact;
pub mod classifier;
pub mod error;
pub mod evaluator;
pub mod form;
pub mod schema;


pub use artifact::{ARTIFACT_VERSION, ModelInfo, RiskModel, ScreeningArtifact};
pub use classifier::{ArtifactClassifier, Classifier};
pub use error::{ArtifactError, InferenceError};
pub use evaluator::{RiskEvaluator, ScreeningOutcome, Verdict, messages};
pub use schema::{AssessmentRecord, FEATURE_COLUMNS};
