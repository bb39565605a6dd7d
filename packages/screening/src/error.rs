use thiserror::Error;

/// Raised when the classification capability rejects a record. Callers at
/// the evaluation boundary catch this and surface a warning outcome.
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("unseen categorical level `{value}` for `{field}`")]
    UnknownLevel { field: String, value: String },
    #[error("feature columns do not match the trained schema: expected [{expected}], found [{found}]")]
    SchemaMismatch { expected: String, found: String },
    #[error("classifier returned label {0}, expected 0 or 1")]
    UnexpectedLabel(usize),
    #[error("classifier returned no prediction")]
    EmptyPrediction,
    #[error(transparent)]
    Other(#[from] sanctuary_types::Error),
}

/// Failures loading or storing the serialized model artifact. These only
/// occur at process start (or in tooling), never per request.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to read model artifact at {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write model artifact at {path}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("unsupported model artifact version: {0}")]
    UnsupportedVersion(u8),
    #[error("model artifact encoding failed: {0}")]
    Encode(#[from] rmp_serde::encode::Error),
    #[error("model artifact decoding failed: {0}")]
    Decode(#[from] rmp_serde::decode::Error),
}
