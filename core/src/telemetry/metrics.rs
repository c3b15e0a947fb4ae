use crate::prelude::{DecodeResult, Decoded};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// Shared decode counters.
pub struct MetricsRecorder {
    inner: Mutex<MetricsSnapshot>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub decoded: usize,
    pub rejected: usize,
    pub anomalies: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(MetricsSnapshot::default()),
        }
    }

    pub fn record_decoded(&self, anomalies: usize) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.decoded += 1;
            metrics.anomalies += anomalies;
        }
    }

    pub fn record_rejected(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.rejected += 1;
        }
    }

    pub fn observe(&self, outcome: &DecodeResult<Decoded>) {
        match outcome {
            Ok(decoded) => self.record_decoded(decoded.anomalies.len()),
            Err(_) => self.record_rejected(),
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        self.inner
            .lock()
            .map(|metrics| *metrics)
            .unwrap_or_default()
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}
