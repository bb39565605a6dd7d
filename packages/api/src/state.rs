use sanctuary_screening::{ModelInfo, RiskEvaluator};
use std::sync::Arc;

pub type AppState = Arc<State>;

/// Shared, read-only service state. Built once at startup around the
/// loaded artifact; requests never mutate it.
pub struct State {
    pub evaluator: RiskEvaluator,
    pub model_info: ModelInfo,
}

impl State {
    pub fn new(evaluator: RiskEvaluator, model_info: ModelInfo) -> Self {
        State {
            evaluator,
            model_info,
        }
    }
}
