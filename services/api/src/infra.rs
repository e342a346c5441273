use std::fs;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Default transcript offered to callers, read once at startup. A
/// missing or unreadable file degrades to an empty default.
#[derive(Debug, Clone)]
pub(crate) struct SampleText {
    pub(crate) text: String,
    pub(crate) source: String,
}

pub(crate) fn load_sample(path: &Path) -> SampleText {
    SampleText {
        text: fs::read_to_string(path).unwrap_or_default(),
        source: path.display().to_string(),
    }
}
