use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::{GradeError, Grader};

/// Evaluation request body. The duration mirrors the original form
/// control's default when omitted.
#[derive(Debug, Deserialize)]
pub struct EvaluationRequest {
    pub text: String,
    #[serde(default = "default_duration_seconds")]
    pub duration_seconds: u32,
}

fn default_duration_seconds() -> u32 {
    60
}

/// Router builder exposing the evaluation endpoint.
pub fn evaluation_router(grader: Arc<Grader>) -> Router {
    Router::new()
        .route("/api/v1/evaluations", post(evaluate_handler))
        .with_state(grader)
}

pub(crate) async fn evaluate_handler(
    State(grader): State<Arc<Grader>>,
    axum::Json(request): axum::Json<EvaluationRequest>,
) -> Response {
    match grader.grade(&request.text, request.duration_seconds) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(GradeError::EmptyTranscript) => {
            let payload = json!({
                "error": "no text provided",
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
