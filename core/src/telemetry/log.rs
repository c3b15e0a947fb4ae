use crate::prelude::{DecodeError, Decoded};
use log::{debug, info, warn};

/// Number of trailing datagram bytes echoed when a decode is rejected.
const REJECT_TAIL: usize = 16;

/// Hex of the last 16 bytes, or of the whole datagram if shorter.
pub fn tail_hex(datagram: &[u8]) -> String {
    hex::encode(&datagram[datagram.len().saturating_sub(REJECT_TAIL)..])
}

/// Log sink for decode outcomes. The decoder never logs on its own behalf;
/// callers hand each outcome to this sink.
pub struct LogManager;

impl LogManager {
    pub fn new() -> Self {
        Self
    }

    pub fn report(&self, decoded: &Decoded) {
        let record = &decoded.record;
        let ltas = &record.ltas_frame;
        info!(
            "frame site={} sat={} day={} t={}.{}s mode={:?} anomalies={}",
            record.ethernet_address.site_id,
            ltas.satellite_id,
            ltas.day_of_year,
            ltas.time_of_day_seconds,
            ltas.time_of_day_tenths_raw,
            ltas.mode,
            decoded.anomalies.len()
        );
        for anomaly in &decoded.anomalies {
            warn!("{}", anomaly);
        }
        if log::log_enabled!(log::Level::Debug) {
            match serde_json::to_string(record) {
                Ok(json) => debug!("{}", json),
                Err(err) => debug!("record not serializable: {}", err),
            }
        }
    }

    pub fn report_error(&self, error: &DecodeError, datagram: &[u8]) {
        warn!(
            "rejected {}-byte datagram: {} (tail {})",
            datagram.len(),
            error,
            tail_hex(datagram)
        );
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new()
    }
}
