use crate::frame::TelemetryRecord;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Length of a complete frame on the wire.
pub const FRAME_LEN: usize = 302;

/// Trailing sync markers accepted by the validator.
pub const SYNC_MARKERS: [u16; 2] = [0x5858, 0x58A0];

/// Fatal decode failures. No record is produced for these.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("frame too short: got {actual} bytes, need 302")]
    TooShort { actual: usize },
    #[error("bad sync bytes: expected 5858 or 58a0, got {observed:04x}")]
    BadSync { observed: u16 },
}

pub type DecodeResult<T> = Result<T, DecodeError>;

/// Non-fatal field anomalies. The affected field is set to its
/// `Unknown`/`Invalid` variant and decoding continues.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Anomaly {
    #[error("fixed header: unknown word byte ordering {0:02x?}")]
    UnknownEndianness([u8; 4]),
    #[error("fixed header: unknown extended header type {0}")]
    UnknownExtendedHeaderType(u32),
    #[error("ethernet address: unknown address type {0}")]
    UnknownAddressType(u32),
    #[error("target position: unknown range availability {0}")]
    UnknownRangeAvailability(u32),
    #[error("ethernet id: unknown category {0}")]
    UnknownCategory(u32),
    #[error("ethernet id: unknown message type {0}")]
    UnknownMessageType(u32),
    #[error("ethernet id: unknown certified flag {0}")]
    UnknownCertified(u32),
    #[error("ltas frame: invalid velocity scale code {0}")]
    InvalidVelocityScale(u8),
    #[error("ltas frame: unknown mode {0}")]
    UnknownMode(u8),
}

/// Successful decode: the record plus every anomaly met on the way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decoded {
    pub record: TelemetryRecord,
    pub anomalies: Vec<Anomaly>,
}

impl Decoded {
    pub fn is_clean(&self) -> bool {
        self.anomalies.is_empty()
    }
}

/// A positional decoder for one fixed byte range of a validated frame.
///
/// Decoders are stateless; anomalies go to the caller-provided sink.
pub trait SectionDecoder {
    type Output;

    /// Absolute byte range within the 302-byte frame.
    const SPAN: Range<usize>;

    fn decode(section: &[u8], anomalies: &mut Vec<Anomaly>) -> Self::Output;
}
