use crate::decoding::ltas::layout::BitField;
use crate::decoding::ltas::signed::encode_twos_complement;
use crate::decoding::ltas::LtasFrameDecoder;
use crate::decoding::sips::{
    EthernetAddressDecoder, EthernetIdDecoder, EthernetTimestampDecoder, TargetPositionDecoder,
};
use crate::frame::Timestamp;
use crate::prelude::{SectionDecoder, FRAME_LEN};
use byteorder::{BigEndian, ByteOrder};

/// Assembles raw 302-byte frames field by field.
///
/// Starts from an all-zero frame carrying the `5858` sync marker. Offsets
/// mirror the decoders, so whatever is written here decodes back to the
/// same field.
#[derive(Debug, Clone)]
pub struct FrameBuilder {
    bytes: Vec<u8>,
}

impl Default for FrameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuilder {
    pub fn new() -> Self {
        Self {
            bytes: vec![0u8; FRAME_LEN],
        }
        .sync(0x5858)
    }

    fn put_u32<D: SectionDecoder>(mut self, offset: usize, value: u32) -> Self {
        let at = D::SPAN.start + offset;
        BigEndian::write_u32(&mut self.bytes[at..at + 4], value);
        self
    }

    fn put_i32<D: SectionDecoder>(mut self, offset: usize, value: i32) -> Self {
        let at = D::SPAN.start + offset;
        BigEndian::write_i32(&mut self.bytes[at..at + 4], value);
        self
    }

    fn put_f64<D: SectionDecoder>(mut self, offset: usize, value: f64) -> Self {
        let at = D::SPAN.start + offset;
        BigEndian::write_f64(&mut self.bytes[at..at + 8], value);
        self
    }

    /// Writes `value` null-padded into a fixed-width text field, truncating
    /// to the field width.
    fn put_text<D: SectionDecoder>(mut self, offset: usize, width: usize, value: &str) -> Self {
        let at = D::SPAN.start + offset;
        let field = &mut self.bytes[at..at + width];
        field.fill(0);
        let len = value.len().min(width);
        field[..len].copy_from_slice(&value.as_bytes()[..len]);
        self
    }

    fn put_timestamp<D: SectionDecoder>(self, offset: usize, stamp: Timestamp) -> Self {
        self.put_u32::<D>(offset, stamp.year)
            .put_u32::<D>(offset + 4, stamp.day_of_year)
            .put_u32::<D>(offset + 8, stamp.seconds_gmt)
            .put_u32::<D>(offset + 12, stamp.microseconds)
    }

    pub fn sync(mut self, marker: u16) -> Self {
        BigEndian::write_u16(&mut self.bytes[FRAME_LEN - 2..], marker);
        self
    }

    pub fn byte_order_flag(mut self, flag: [u8; 4]) -> Self {
        self.bytes[0..4].copy_from_slice(&flag);
        self
    }

    pub fn extended_header_type(mut self, code: u32) -> Self {
        BigEndian::write_u32(&mut self.bytes[4..8], code);
        self
    }

    pub fn body_size(mut self, size: u32, blocking: u32) -> Self {
        BigEndian::write_u32(&mut self.bytes[8..12], size);
        BigEndian::write_u32(&mut self.bytes[12..16], blocking);
        self
    }

    pub fn address(self, site_id: &str, system_name: &str, logical_unit_name: &str) -> Self {
        self.put_text::<EthernetAddressDecoder>(0, 16, site_id)
            .put_text::<EthernetAddressDecoder>(16, 16, system_name)
            .put_text::<EthernetAddressDecoder>(32, 16, logical_unit_name)
    }

    pub fn address_type(self, code: u32) -> Self {
        self.put_u32::<EthernetAddressDecoder>(48, code)
    }

    pub fn box_id(self, box_id: &str, task_id: u32) -> Self {
        self.put_text::<EthernetAddressDecoder>(52, 32, box_id)
            .put_u32::<EthernetAddressDecoder>(84, task_id)
    }

    pub fn range_available(self, code: u32) -> Self {
        self.put_u32::<TargetPositionDecoder>(0, code)
    }

    pub fn target_timestamp(self, stamp: Timestamp) -> Self {
        self.put_timestamp::<TargetPositionDecoder>(4, stamp)
    }

    pub fn tracker(self, lat: f64, lon: f64, height: f64) -> Self {
        self.put_f64::<TargetPositionDecoder>(20, lat)
            .put_f64::<TargetPositionDecoder>(28, lon)
            .put_f64::<TargetPositionDecoder>(36, height)
    }

    pub fn pointing(self, azimuth: f64, elevation: f64, range: f64) -> Self {
        self.put_f64::<TargetPositionDecoder>(44, azimuth)
            .put_f64::<TargetPositionDecoder>(52, elevation)
            .put_f64::<TargetPositionDecoder>(60, range)
    }

    pub fn target_site(mut self, site_id: u32, data_quality: u8) -> Self {
        self.bytes[TargetPositionDecoder::SPAN.start + 72] = data_quality;
        self.put_u32::<TargetPositionDecoder>(68, site_id)
    }

    pub fn group(self, group: &str) -> Self {
        self.put_text::<EthernetIdDecoder>(0, 16, group)
    }

    pub fn message_codes(self, category: u32, message_type: u32, certified: u32) -> Self {
        self.put_u32::<EthernetIdDecoder>(16, category)
            .put_u32::<EthernetIdDecoder>(20, message_type)
            .put_u32::<EthernetIdDecoder>(32, certified)
    }

    pub fn message_ident(self, unit: u32, id: i32, priority: i32) -> Self {
        self.put_u32::<EthernetIdDecoder>(24, unit)
            .put_i32::<EthernetIdDecoder>(28, id)
            .put_i32::<EthernetIdDecoder>(36, priority)
    }

    pub fn security_key(mut self, key: [u8; 4]) -> Self {
        let at = EthernetIdDecoder::SPAN.start + 40;
        self.bytes[at..at + 4].copy_from_slice(&key);
        self
    }

    pub fn ethernet_timestamp(self, stamp: Timestamp) -> Self {
        self.put_timestamp::<EthernetTimestampDecoder>(0, stamp)
    }

    /// Sets one LTAS bit field to the low bits of `value`.
    pub fn ltas(mut self, field: BitField, value: u32) -> Self {
        field.insert(&mut self.bytes[LtasFrameDecoder::SPAN], value);
        self
    }

    /// Sets a magnitude/sign pair from a signed value. Negative values are
    /// stored as two's-complement bits with the sign bit raised.
    pub fn ltas_signed(self, magnitude: BitField, sign: BitField, value: i32) -> Self {
        let bits = encode_twos_complement(value, magnitude.width);
        self.ltas(magnitude, bits).ltas(sign, u32::from(value < 0))
    }

    pub fn build(self) -> Vec<u8> {
        self.bytes
    }
}
