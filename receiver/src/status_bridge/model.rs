use crate::workflow::runner::FrameSummary;
use serde::{Deserialize, Serialize};
use ultracore::telemetry::MetricsSnapshot;

/// State served over HTTP: the most recent decoded frame and the counters.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StatusModel {
    pub latest: Option<FrameSummary>,
    pub metrics: MetricsSnapshot,
}
