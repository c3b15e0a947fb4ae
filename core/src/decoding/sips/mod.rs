//! SIPS extended header, bytes [16, 272).
//!
//! Four fixed sub-sections followed by 4 spare bytes:
//!
//! | bytes      | section            |
//! |------------|--------------------|
//! | [16, 112)  | Ethernet address   |
//! | [112, 208) | target position    |
//! | [208, 252) | Ethernet ID        |
//! | [252, 268) | Ethernet timestamp |
//! | [268, 272) | spare              |

pub mod address;
pub mod ident;
pub mod target;
pub mod timestamp;

pub use address::EthernetAddressDecoder;
pub use ident::EthernetIdDecoder;
pub use target::TargetPositionDecoder;
pub use timestamp::EthernetTimestampDecoder;

use crate::frame::{EthernetAddress, EthernetId, TargetPosition, Timestamp};
use crate::prelude::{Anomaly, SectionDecoder};
use std::ops::Range;

#[derive(Debug, Clone, PartialEq)]
pub struct SipsHeader {
    pub ethernet_address: EthernetAddress,
    pub target_position: TargetPosition,
    pub ethernet_id: EthernetId,
    pub ethernet_timestamp: Timestamp,
}

pub struct SipsHeaderDecoder;

impl SipsHeaderDecoder {
    fn run<D: SectionDecoder>(section: &[u8], anomalies: &mut Vec<Anomaly>) -> D::Output {
        let start = D::SPAN.start - Self::SPAN.start;
        let end = D::SPAN.end - Self::SPAN.start;
        D::decode(&section[start..end], anomalies)
    }
}

impl SectionDecoder for SipsHeaderDecoder {
    type Output = SipsHeader;
    const SPAN: Range<usize> = 16..272;

    fn decode(section: &[u8], anomalies: &mut Vec<Anomaly>) -> SipsHeader {
        SipsHeader {
            ethernet_address: Self::run::<EthernetAddressDecoder>(section, anomalies),
            target_position: Self::run::<TargetPositionDecoder>(section, anomalies),
            ethernet_id: Self::run::<EthernetIdDecoder>(section, anomalies),
            ethernet_timestamp: Self::run::<EthernetTimestampDecoder>(section, anomalies),
        }
    }
}
