use crate::decoding::bytes::be_u32;
use crate::frame::Timestamp;
use crate::prelude::{Anomaly, SectionDecoder};
use std::ops::Range;

/// Four big-endian u32 words: year, day of year, seconds of day, microseconds.
pub(crate) fn read_timestamp(words: &[u8]) -> Timestamp {
    Timestamp {
        year: be_u32(words, 0),
        day_of_year: be_u32(words, 4),
        seconds_gmt: be_u32(words, 8),
        microseconds: be_u32(words, 12),
    }
}

/// WFF Ethernet timestamp block.
pub struct EthernetTimestampDecoder;

impl SectionDecoder for EthernetTimestampDecoder {
    type Output = Timestamp;
    const SPAN: Range<usize> = 252..268;

    fn decode(section: &[u8], _anomalies: &mut Vec<Anomaly>) -> Timestamp {
        read_timestamp(section)
    }
}
