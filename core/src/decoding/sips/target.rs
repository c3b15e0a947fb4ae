use crate::decoding::bytes::{be_f64, be_u32};
use crate::decoding::sips::timestamp::read_timestamp;
use crate::frame::{RangeAvailability, TargetPosition};
use crate::prelude::{Anomaly, SectionDecoder};
use std::ops::Range;

/// WFF Ethernet target position block.
///
/// | offset | field                          |
/// |--------|--------------------------------|
/// | 0      | range available (u32)          |
/// | 4      | timestamp (4 x u32)            |
/// | 20     | tracker lat / lon / height     |
/// | 44     | target azimuth / elevation     |
/// | 60     | target range (f64)             |
/// | 68     | site id (u32)                  |
/// | 72     | data quality (1 byte)          |
/// | 73     | spare                          |
pub struct TargetPositionDecoder;

impl SectionDecoder for TargetPositionDecoder {
    type Output = TargetPosition;
    const SPAN: Range<usize> = 112..208;

    fn decode(section: &[u8], anomalies: &mut Vec<Anomaly>) -> TargetPosition {
        let range_available = match be_u32(section, 0) {
            0 => RangeAvailability::No,
            1 => RangeAvailability::Yes,
            code => {
                anomalies.push(Anomaly::UnknownRangeAvailability(code));
                RangeAvailability::Unknown
            }
        };

        TargetPosition {
            range_available,
            timestamp: read_timestamp(&section[4..20]),
            tracker_lat: be_f64(section, 20),
            tracker_lon: be_f64(section, 28),
            tracker_height: be_f64(section, 36),
            target_azimuth: be_f64(section, 44),
            target_elevation: be_f64(section, 52),
            target_range: be_f64(section, 60),
            site_id: be_u32(section, 68),
            data_quality: char::from(section[72]),
        }
    }
}
