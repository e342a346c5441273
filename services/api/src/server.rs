use crate::cli::ServeArgs;
use crate::infra::{load_sample, AppState};
use crate::routes::with_service_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use intro_grader::config::AppConfig;
use intro_grader::error::AppError;
use intro_grader::grading::Grader;
use intro_grader::nlp::NlpToolkit;
use intro_grader::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    // The language backends are the expensive part of startup; they
    // are built once here and shared read-only by every evaluation.
    let grader = Arc::new(Grader::new(NlpToolkit::baseline()));
    let sample = Arc::new(load_sample(&config.grading.sample_path));

    let app = with_service_routes(grader)
        .layer(Extension(app_state))
        .layer(Extension(sample))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "self-introduction grader ready");

    axum::serve(listener, app).await?;
    Ok(())
}
