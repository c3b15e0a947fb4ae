use crate::decoding::bytes::{be_u32, text};
use crate::frame::{AddressType, EthernetAddress};
use crate::prelude::{Anomaly, SectionDecoder};
use std::ops::Range;

/// WFF Ethernet address block. Bytes [88, 96) of the block are spare.
pub struct EthernetAddressDecoder;

impl SectionDecoder for EthernetAddressDecoder {
    type Output = EthernetAddress;
    const SPAN: Range<usize> = 16..112;

    fn decode(section: &[u8], anomalies: &mut Vec<Anomaly>) -> EthernetAddress {
        let address_type = match be_u32(section, 48) {
            0 => AddressType::Socket,
            1 => AddressType::WindowsPipe,
            code => {
                anomalies.push(Anomaly::UnknownAddressType(code));
                AddressType::Unknown
            }
        };

        EthernetAddress {
            site_id: text(section, 0, 16),
            system_name: text(section, 16, 16),
            logical_unit_name: text(section, 32, 16),
            address_type,
            box_id: text(section, 52, 32),
            task_id: be_u32(section, 84),
        }
    }
}
