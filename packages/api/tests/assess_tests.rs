//! Integration tests for the screening API, driven through the assembled
//! router with stub classifiers standing in for the artifact.

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use sanctuary_api::construct_router;
use sanctuary_api::state::State;
use sanctuary_screening::error::InferenceError;
use sanctuary_screening::schema::columns;
use sanctuary_screening::{
    AssessmentRecord, Classifier, FEATURE_COLUMNS, ModelInfo, RiskEvaluator, Verdict, messages,
};
use sanctuary_types::json::{self, Value, json};
use std::sync::Arc;
use tower::ServiceExt;

struct Always(Verdict);

impl Classifier for Always {
    fn predict(&self, _record: &AssessmentRecord) -> Result<Verdict, InferenceError> {
        Ok(self.0)
    }
}

struct Failing;

impl Classifier for Failing {
    fn predict(&self, _record: &AssessmentRecord) -> Result<Verdict, InferenceError> {
        Err(InferenceError::UnknownLevel {
            field: columns::DEGREE.to_string(),
            value: "B.Voc".to_string(),
        })
    }
}

fn test_router(classifier: Arc<dyn Classifier>) -> Router {
    let evaluator = RiskEvaluator::new(classifier);
    let model_info = ModelInfo {
        family: "Stub".to_string(),
        columns: FEATURE_COLUMNS.iter().map(|c| c.to_string()).collect(),
    };
    construct_router(Arc::new(State::new(evaluator, model_info)))
}

fn example_payload() -> Value {
    json!({
        "gender": "Female",
        "age": 20,
        "academic_pressure": 4,
        "cgpa": 7.5,
        "study_satisfaction": 2,
        "sleep_duration": "Less than 5 hours",
        "dietary_habits": "Unhealthy",
        "degree": "B.Tech",
        "financial_stress": 5,
        "suicidal_thoughts": "Yes",
        "family_history": "No"
    })
}

async fn post_assess(router: Router, payload: &Value) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/assess")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

async fn get(router: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

#[tokio::test]
async fn assess_returns_high_risk_outcome() {
    let router = test_router(Arc::new(Always(Verdict::HighRisk)));
    let (status, body) = post_assess(router, &example_payload()).await;

    assert_eq!(status, StatusCode::OK);
    let outcome: Value = json::from_slice(&body).unwrap();
    assert_eq!(outcome["status"], "high_risk");
    assert_eq!(outcome["headline"], messages::HIGH_RISK_HEADLINE);
    assert_eq!(outcome["suggestion"], messages::HIGH_RISK_SUGGESTION);
}

#[tokio::test]
async fn assess_returns_low_risk_outcome() {
    let router = test_router(Arc::new(Always(Verdict::LowRisk)));
    let (status, body) = post_assess(router, &example_payload()).await;

    assert_eq!(status, StatusCode::OK);
    let outcome: Value = json::from_slice(&body).unwrap();
    assert_eq!(outcome["status"], "low_risk");
    assert_eq!(outcome["headline"], messages::LOW_RISK_HEADLINE);
}

#[tokio::test]
async fn assess_surfaces_classifier_failure_as_warning() {
    let router = test_router(Arc::new(Failing));
    let (status, body) = post_assess(router, &example_payload()).await;

    // A rejected record is an outcome, not a transport failure.
    assert_eq!(status, StatusCode::OK);
    let outcome: Value = json::from_slice(&body).unwrap();
    assert_eq!(outcome["status"], "unavailable");
    assert_eq!(outcome["warning"], messages::INFERENCE_WARNING);
    assert!(outcome["detail"].as_str().unwrap().contains("B.Voc"));
}

#[tokio::test]
async fn assess_rejects_unknown_enum_label() {
    let router = test_router(Arc::new(Always(Verdict::LowRisk)));
    let mut payload = example_payload();
    payload["degree"] = json!("B.Voc");

    let (status, _body) = post_assess(router, &payload).await;
    assert!(status.is_client_error(), "got {status}");
}

#[tokio::test]
async fn assess_rejects_out_of_range_age() {
    let router = test_router(Arc::new(Always(Verdict::LowRisk)));
    let mut payload = example_payload();
    payload["age"] = json!(41);

    let (status, body) = post_assess(router, &payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: Value = json::from_slice(&body).unwrap();
    assert_eq!(error["code"], "BAD_REQUEST");
    assert!(error["message"].as_str().unwrap().contains("Age"));
}

#[tokio::test]
async fn assess_accepts_boundary_values() {
    for (age, cgpa, scale) in [(15, 0.0, 1), (40, 10.0, 5)] {
        let router = test_router(Arc::new(Always(Verdict::LowRisk)));
        let mut payload = example_payload();
        payload["age"] = json!(age);
        payload["cgpa"] = json!(cgpa);
        payload["academic_pressure"] = json!(scale);
        payload["study_satisfaction"] = json!(scale);
        payload["financial_stress"] = json!(scale);

        let (status, _body) = post_assess(router, &payload).await;
        assert_eq!(status, StatusCode::OK, "boundary {age}/{cgpa}/{scale}");
    }
}

#[tokio::test]
async fn schema_lists_every_field_in_order() {
    let router = test_router(Arc::new(Always(Verdict::LowRisk)));
    let (status, body) = get(router, "/api/v1/schema").await;

    assert_eq!(status, StatusCode::OK);
    let definition: Value = json::from_slice(&body).unwrap();
    let fields = definition["fields"].as_array().unwrap();
    assert_eq!(fields.len(), 11);
    assert_eq!(fields[0]["name"], "gender");
    assert_eq!(fields[10]["label"], columns::FAMILY_HISTORY);
    assert_eq!(definition["disclaimer"], messages::DISCLAIMER);
}

#[tokio::test]
async fn model_endpoint_reports_artifact_metadata() {
    let router = test_router(Arc::new(Always(Verdict::LowRisk)));
    let (status, body) = get(router, "/api/v1/model").await;

    assert_eq!(status, StatusCode::OK);
    let info: Value = json::from_slice(&body).unwrap();
    assert_eq!(info["family"], "Stub");
    assert_eq!(info["columns"].as_array().unwrap().len(), 11);
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let router = test_router(Arc::new(Always(Verdict::LowRisk)));
    let (status, body) = get(router, "/api/v1/health").await;

    assert_eq!(status, StatusCode::OK);
    let health: Value = json::from_slice(&body).unwrap();
    assert_eq!(health["status"], "ok");
}

#[tokio::test]
async fn form_page_renders_every_field() {
    let router = test_router(Arc::new(Always(Verdict::LowRisk)));
    let (status, body) = get(router, "/").await;

    assert_eq!(status, StatusCode::OK);
    let page = String::from_utf8(body).unwrap();
    assert!(page.contains("id=\"assessment\""));
    assert!(page.contains("B.Tech"));
    assert!(page.contains(columns::FAMILY_HISTORY));
    assert!(page.contains(messages::DISCLAIMER));
}
