use crate::workflow::config::ReceiverConfig;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use ultracore::frame::{Axes, TelemetryRecord, TrackingMode};
use ultracore::math::{
    bearing, distance, distance_3d, wgs84_to_ecef, DistanceUnit, Ecef, GeoPoint,
};
use ultracore::telemetry::{LogManager, MetricsRecorder, MetricsSnapshot};
use ultracore::{decode, DecodeResult, Decoded};

/// Great-circle geometry from the configured reference site to the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SiteGeometry {
    pub distance_km: f64,
    pub bearing_deg: f64,
    /// Line-of-sight range including the tracker height.
    pub slant_range_km: f64,
}

/// Condensed view of one decoded frame, as logged and served.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSummary {
    pub site_id: String,
    pub satellite_id: u16,
    pub vehicle_id: u8,
    pub day_of_year: u16,
    pub time_of_day: f64,
    pub mode: TrackingMode,
    pub position: Axes<f64>,
    pub velocity: Option<Axes<f64>>,
    pub tracker_ecef: Ecef,
    pub reference: Option<SiteGeometry>,
    pub anomalies: Vec<String>,
    pub record: TelemetryRecord,
}

#[derive(Clone)]
pub struct Runner {
    config: ReceiverConfig,
    metrics: Arc<MetricsRecorder>,
    logger: Arc<LogManager>,
}

impl Runner {
    pub fn new(config: ReceiverConfig) -> Self {
        Self {
            config,
            metrics: Arc::new(MetricsRecorder::new()),
            logger: Arc::new(LogManager::new()),
        }
    }

    /// Decodes one datagram, records the outcome and reports it to the log sink.
    pub fn process(&self, datagram: &[u8]) -> DecodeResult<FrameSummary> {
        let outcome = decode(datagram);
        self.metrics.observe(&outcome);
        match outcome {
            Ok(decoded) => {
                self.logger.report(&decoded);
                Ok(self.summarize(&decoded))
            }
            Err(err) => {
                self.logger.report_error(&err, datagram);
                Err(err)
            }
        }
    }

    pub fn summarize(&self, decoded: &Decoded) -> FrameSummary {
        let record = &decoded.record;
        let ltas = &record.ltas_frame;
        let target = &record.target_position;

        let reference = self.config.reference_site.map(|site| {
            let from = GeoPoint::new(site.longitude, site.latitude);
            // tracker height is in metres
            let to = GeoPoint::with_altitude(
                target.tracker_lon,
                target.tracker_lat,
                target.tracker_height / 1000.0,
            );
            SiteGeometry {
                distance_km: distance(from, to, DistanceUnit::Km),
                bearing_deg: bearing(from, to),
                slant_range_km: distance_3d(from, to, DistanceUnit::Km),
            }
        });

        FrameSummary {
            site_id: record.ethernet_address.site_id.clone(),
            satellite_id: ltas.satellite_id,
            vehicle_id: ltas.vehicle_id,
            day_of_year: ltas.day_of_year,
            time_of_day: f64::from(ltas.time_of_day_seconds) + ltas.time_of_day_tenths(),
            mode: ltas.mode,
            position: ltas.scaled_position(),
            velocity: ltas.scaled_velocity(),
            tracker_ecef: wgs84_to_ecef(
                target.tracker_lat,
                target.tracker_lon,
                target.tracker_height,
            ),
            reference,
            anomalies: decoded.anomalies.iter().map(ToString::to_string).collect(),
            record: record.clone(),
        }
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::config::ReferenceSite;
    use ultracore::decoding::ltas::layout;
    use ultracore::{DecodeError, FrameBuilder};

    fn sample_frame() -> Vec<u8> {
        FrameBuilder::new()
            .address("PFRR", "AWOTS", "Recorder")
            .tracker(65.0, -147.0, 0.0)
            .ltas(layout::SATELLITE_ID, 1234)
            .ltas(layout::TIME_OF_DAY_SECONDS, 3600)
            .ltas(layout::TIME_OF_DAY_TENTHS, 5)
            .ltas(layout::MODE, 1)
            .ltas(layout::POSITION_SCALE, 1)
            .ltas_signed(layout::E_POSITION, layout::E_POSITION_SIGN, -25)
            .build()
    }

    #[test]
    fn runner_summarizes_valid_frame() {
        let runner = Runner::new(ReceiverConfig::default());
        let summary = runner.process(&sample_frame()).unwrap();
        assert_eq!(summary.site_id, "PFRR");
        assert_eq!(summary.satellite_id, 1234);
        assert!((summary.time_of_day - 3600.5).abs() < 1e-9);
        assert_eq!(summary.mode, TrackingMode::OnAxisPoweredFlight);
        assert_eq!(summary.position.e, -250.0);
        assert!(summary.velocity.is_some());
        assert!(summary.reference.is_none());
        assert!(summary.anomalies.is_empty());
        assert!(summary.tracker_ecef.z > 0.0);
        assert_eq!(runner.metrics().decoded, 1);
    }

    #[test]
    fn runner_counts_rejected_datagrams() {
        let runner = Runner::new(ReceiverConfig::default());
        let err = runner.process(b"Some bytes").unwrap_err();
        assert_eq!(err, DecodeError::TooShort { actual: 10 });
        assert_eq!(runner.metrics().rejected, 1);
        assert_eq!(runner.metrics().decoded, 0);
    }

    #[test]
    fn runner_reports_anomalies_as_text() {
        let runner = Runner::new(ReceiverConfig::default());
        let frame = FrameBuilder::new().address_type(9).build();
        let summary = runner.process(&frame).unwrap();
        assert_eq!(
            summary.anomalies,
            vec!["ethernet address: unknown address type 9".to_string()]
        );
        assert_eq!(runner.metrics().anomalies, 1);
    }

    #[test]
    fn reference_site_adds_range_and_bearing() {
        let config = ReceiverConfig {
            reference_site: Some(ReferenceSite {
                latitude: 65.654321,
                longitude: -147.123456,
            }),
            ..Default::default()
        };
        let runner = Runner::new(config);
        let summary = runner.process(&sample_frame()).unwrap();
        let geometry = summary.reference.unwrap();
        assert!((geometry.distance_km - 72.982560054382).abs() < 1e-6);
        assert!((geometry.bearing_deg - 175.440499979729).abs() < 1e-6);
        assert!((geometry.slant_range_km - geometry.distance_km).abs() < 1e-6);
    }

    #[test]
    fn slant_range_accounts_for_tracker_height() {
        let config = ReceiverConfig {
            reference_site: Some(ReferenceSite {
                latitude: 65.654321,
                longitude: -147.123456,
            }),
            ..Default::default()
        };
        let frame = FrameBuilder::new().tracker(65.0, -147.0, 100_000.0).build();
        let summary = Runner::new(config).process(&frame).unwrap();
        let geometry = summary.reference.unwrap();
        assert!((geometry.distance_km - 72.982560054382).abs() < 1e-6);
        assert!((geometry.slant_range_km - 124.13857860874971).abs() < 1e-6);
    }
}
