use crate::decoding::bytes::be_u32;
use crate::frame::{ByteOrder, ExtendedHeaderType, FixedHeader};
use crate::prelude::{Anomaly, SectionDecoder};
use std::ops::Range;

/// WFF Ethernet fixed header, bytes [0, 16).
///
/// The byte-ordering word is informational only: every multi-byte field in
/// the frame has a fixed endianness regardless of what it advertises.
pub struct FixedHeaderDecoder;

impl SectionDecoder for FixedHeaderDecoder {
    type Output = FixedHeader;
    const SPAN: Range<usize> = 0..16;

    fn decode(section: &[u8], anomalies: &mut Vec<Anomaly>) -> FixedHeader {
        let mut flag = [0u8; 4];
        flag.copy_from_slice(&section[0..4]);
        let byte_order = match flag {
            [0xFF, 0xFF, 0xFF, 0xFF] => ByteOrder::Little,
            [0x00, 0x00, 0x00, 0x00] => ByteOrder::Big,
            other => {
                anomalies.push(Anomaly::UnknownEndianness(other));
                ByteOrder::Unknown
            }
        };

        let extended_header_type = match be_u32(section, 4) {
            0 => ExtendedHeaderType::None,
            1 => ExtendedHeaderType::Standard,
            2 => ExtendedHeaderType::Donna,
            3 => ExtendedHeaderType::Sips,
            code => {
                anomalies.push(Anomaly::UnknownExtendedHeaderType(code));
                ExtendedHeaderType::Unknown
            }
        };

        FixedHeader {
            byte_order,
            extended_header_type,
            body_size: be_u32(section, 8),
            body_blocking_size: be_u32(section, 12),
        }
    }
}
