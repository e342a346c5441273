use std::sync::Arc;

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use intro_grader::grading::{evaluation_router, Grader};
use serde::Serialize;
use serde_json::json;

use crate::infra::{AppState, SampleText};

#[derive(Debug, Serialize)]
pub(crate) struct SampleResponse {
    pub(crate) text: String,
    pub(crate) source: String,
}

pub(crate) fn with_service_routes(grader: Arc<Grader>) -> axum::Router {
    evaluation_router(grader)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/evaluations/sample",
            axum::routing::get(sample_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Hands front ends the default transcript for pre-filling their input
/// widget.
pub(crate) async fn sample_endpoint(
    Extension(sample): Extension<Arc<SampleText>>,
) -> Json<SampleResponse> {
    Json(SampleResponse {
        text: sample.text.clone(),
        source: sample.source.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn sample_endpoint_returns_configured_text() {
        let sample = Arc::new(SampleText {
            text: "Hello everyone, my name is Asha.".to_string(),
            source: "data/sample_text.txt".to_string(),
        });

        let Json(body) = sample_endpoint(Extension(sample)).await;
        assert_eq!(body.text, "Hello everyone, my name is Asha.");
        assert_eq!(body.source, "data/sample_text.txt");
    }

    #[tokio::test]
    async fn sample_endpoint_passes_through_empty_defaults() {
        let sample = Arc::new(crate::infra::load_sample(std::path::Path::new(
            "missing/sample.txt",
        )));

        let Json(body) = sample_endpoint(Extension(sample)).await;
        assert_eq!(body.text, "");
    }
}
