use crate::decoding::bytes::{be_i32, be_u32, text};
use crate::frame::{Category, Certified, EthernetId, MessageType};
use crate::prelude::{Anomaly, SectionDecoder};
use std::ops::Range;

/// WFF Ethernet ID block: group, category, type, unit, id, certified,
/// priority and the raw security key.
pub struct EthernetIdDecoder;

impl SectionDecoder for EthernetIdDecoder {
    type Output = EthernetId;
    const SPAN: Range<usize> = 208..252;

    fn decode(section: &[u8], anomalies: &mut Vec<Anomaly>) -> EthernetId {
        let category = match be_u32(section, 16) {
            0 => Category::Command,
            1 => Category::Data,
            2 => Category::Status,
            code => {
                anomalies.push(Anomaly::UnknownCategory(code));
                Category::Unknown
            }
        };

        let message_type = match be_u32(section, 20) {
            0 => MessageType::Query,
            1 => MessageType::Mddf,
            2 => MessageType::Ltas,
            3 => MessageType::Time,
            4 => MessageType::Execute,
            code => {
                anomalies.push(Anomaly::UnknownMessageType(code));
                MessageType::Unknown
            }
        };

        let certified = match be_u32(section, 32) {
            0 => Certified::No,
            1 => Certified::Yes,
            code => {
                anomalies.push(Anomaly::UnknownCertified(code));
                Certified::Unknown
            }
        };

        let mut security_key = [0u8; 4];
        security_key.copy_from_slice(&section[40..44]);

        EthernetId {
            group: text(section, 0, 16),
            category,
            message_type,
            unit: be_u32(section, 24),
            id: be_i32(section, 28),
            certified,
            priority: be_i32(section, 36),
            security_key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id_block(category: u32, message_type: u32, certified: u32) -> Vec<u8> {
        let mut section = vec![0u8; 44];
        section[0..5].copy_from_slice(b"AWOTS");
        section[16..20].copy_from_slice(&category.to_be_bytes());
        section[20..24].copy_from_slice(&message_type.to_be_bytes());
        section[28..32].copy_from_slice(&65_536i32.to_be_bytes());
        section[32..36].copy_from_slice(&certified.to_be_bytes());
        section[36..40].copy_from_slice(&(-2i32).to_be_bytes());
        section[40..44].copy_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]);
        section
    }

    #[test]
    fn decodes_ltas_data_message() {
        let mut anomalies = Vec::new();
        let id = EthernetIdDecoder::decode(&id_block(1, 2, 1), &mut anomalies);
        assert!(anomalies.is_empty());
        assert_eq!(id.group, "AWOTS");
        assert_eq!(id.category, Category::Data);
        assert_eq!(id.message_type, MessageType::Ltas);
        assert_eq!(id.unit, 0);
        assert_eq!(id.id, 65_536);
        assert_eq!(id.certified, Certified::Yes);
        assert_eq!(id.priority, -2);
        assert_eq!(id.security_key, [0xDE, 0xAD, 0xBE, 0xEF]);
    }

    #[test]
    fn every_message_type_code_maps() {
        let expected = [
            MessageType::Query,
            MessageType::Mddf,
            MessageType::Ltas,
            MessageType::Time,
            MessageType::Execute,
        ];
        for (code, want) in expected.iter().enumerate() {
            let mut anomalies = Vec::new();
            let id = EthernetIdDecoder::decode(&id_block(0, code as u32, 0), &mut anomalies);
            assert_eq!(id.message_type, *want);
            assert_eq!(id.category, Category::Command);
            assert_eq!(id.certified, Certified::No);
        }
    }

    #[test]
    fn unmapped_codes_become_unknown() {
        let mut anomalies = Vec::new();
        let id = EthernetIdDecoder::decode(&id_block(3, 5, 2), &mut anomalies);
        assert_eq!(id.category, Category::Unknown);
        assert_eq!(id.message_type, MessageType::Unknown);
        assert_eq!(id.certified, Certified::Unknown);
        assert_eq!(
            anomalies,
            vec![
                Anomaly::UnknownCategory(3),
                Anomaly::UnknownMessageType(5),
                Anomaly::UnknownCertified(2),
            ]
        );
    }
}
