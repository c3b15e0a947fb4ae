use crate::decoding::sips::SipsHeader;
use crate::frame::{FixedHeader, LtasFrame, TelemetryRecord};

/// Combines the stage outputs into one record. Pure aggregation.
pub fn assemble(
    fixed_header: FixedHeader,
    sips: SipsHeader,
    ltas_frame: LtasFrame,
) -> TelemetryRecord {
    let SipsHeader {
        ethernet_address,
        target_position,
        ethernet_id,
        ethernet_timestamp,
    } = sips;

    TelemetryRecord {
        fixed_header,
        ethernet_address,
        target_position,
        ethernet_id,
        ethernet_timestamp,
        ltas_frame,
    }
}
