//! Frame decoder for the ULTRA radar tracking telemetry downlink.
//!
//! A 302-byte frame carries a WFF Ethernet fixed header, a SIPS extended
//! header and a bit-packed STDN LTAS trailer. [`decode`] turns one datagram
//! into a [`TelemetryRecord`] plus any non-fatal anomalies, or a
//! [`DecodeError`] when the frame is too short or out of sync.

pub mod decoding;
pub mod frame;
pub mod math;
pub mod prelude;
pub mod telemetry;

pub use decoding::decode;
pub use frame::{FrameBuilder, TelemetryRecord};
pub use prelude::{Anomaly, DecodeError, DecodeResult, Decoded};
