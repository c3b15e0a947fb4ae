use crate::status_bridge::model::StatusModel;
use crate::workflow::runner::FrameSummary;
use log::info;
use std::{
    net::SocketAddr,
    sync::{Arc, RwLock},
};
use ultracore::telemetry::MetricsSnapshot;
use warp::Filter;

/// Shared status state plus the warp routes that expose it.
#[derive(Clone, Default)]
pub struct StatusBridge {
    state: Arc<RwLock<StatusModel>>,
}

impl StatusBridge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&self, summary: FrameSummary, metrics: MetricsSnapshot) {
        if let Ok(mut guard) = self.state.write() {
            guard.latest = Some(summary);
            guard.metrics = metrics;
        }
    }

    /// Updates the counters only, e.g. after a rejected datagram.
    pub fn publish_metrics(&self, metrics: MetricsSnapshot) {
        if let Ok(mut guard) = self.state.write() {
            guard.metrics = metrics;
        }
    }

    pub fn snapshot(&self) -> StatusModel {
        self.state
            .read()
            .map(|model| model.clone())
            .unwrap_or_default()
    }

    /// `GET /latest` and `GET /stats`.
    pub fn routes(
        &self,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let latest_bridge = self.clone();
        let stats_bridge = self.clone();

        let latest_route = warp::path("latest")
            .and(warp::path::end())
            .and(warp::get())
            .map(move || warp::reply::json(&latest_bridge.snapshot().latest));

        let stats_route = warp::path("stats")
            .and(warp::path::end())
            .and(warp::get())
            .map(move || warp::reply::json(&stats_bridge.snapshot().metrics));

        latest_route.or(stats_route)
    }

    pub async fn serve(self, addr: SocketAddr) {
        info!("status bridge listening on http://{}", addr);
        warp::serve(self.routes()).run(addr).await;
    }
}
