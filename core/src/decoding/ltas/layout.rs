//! Bit layout of the 30-byte LTAS trailer.
//!
//! The trailer is a little-endian bitstream: bit 1 is the least significant
//! bit of byte 0, bit 9 the least significant bit of byte 1, and so on. A
//! field is read through the smallest little-endian window of whole bytes
//! that covers it, shifted down and masked to its width.

use byteorder::{ByteOrder, LittleEndian};

/// Section length in bytes.
pub const SECTION_LEN: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitField {
    pub name: &'static str,
    /// 1-indexed position of the least significant bit.
    pub start: u16,
    pub width: u8,
}

impl BitField {
    pub const fn new(name: &'static str, start: u16, width: u8) -> Self {
        Self { name, start, width }
    }

    /// 1-indexed position of the most significant bit.
    pub fn end(&self) -> u16 {
        self.start + u16::from(self.width) - 1
    }

    pub fn mask(&self) -> u32 {
        ((1u64 << self.width) - 1) as u32
    }

    /// Byte window `[first, last]` and the shift that aligns the field.
    fn window(&self) -> (usize, usize, u32) {
        let offset = usize::from(self.start - 1);
        let first = offset / 8;
        let last = (offset + usize::from(self.width) - 1) / 8;
        (first, last, (offset % 8) as u32)
    }

    pub fn extract(&self, section: &[u8]) -> u32 {
        let (first, last, shift) = self.window();
        let word = LittleEndian::read_uint(&section[first..=last], last - first + 1);
        ((word >> shift) as u32) & self.mask()
    }

    pub fn flag(&self, section: &[u8]) -> bool {
        self.extract(section) != 0
    }

    /// Writes the low `width` bits of `value` into the field, leaving
    /// neighbouring bits untouched.
    pub fn insert(&self, section: &mut [u8], value: u32) {
        let (first, last, shift) = self.window();
        let len = last - first + 1;
        let window = &mut section[first..=last];
        let mask = u64::from(self.mask()) << shift;
        let word = LittleEndian::read_uint(window, len);
        let word = (word & !mask) | ((u64::from(value) << shift) & mask);
        LittleEndian::write_uint(window, word, len);
    }
}

pub const SATELLITE_ID: BitField = BitField::new("satellite_id", 1, 13);
pub const VEHICLE_ID: BitField = BitField::new("vehicle_id", 14, 4);
pub const DAY_OF_YEAR: BitField = BitField::new("day_of_year", 18, 9);
pub const FORMAT_TYPE: BitField = BitField::new("format_type", 27, 4);
pub const TIME_OF_DAY_TENTHS: BitField = BitField::new("time_of_day_tenths", 31, 4);
pub const TIME_OF_DAY_SECONDS: BitField = BitField::new("time_of_day_seconds", 35, 17);
pub const SITE_ID: BitField = BitField::new("site_id", 52, 9);
pub const E_POSITION: BitField = BitField::new("e_position", 61, 27);
pub const E_POSITION_SIGN: BitField = BitField::new("e_position_sign", 88, 1);
pub const POSITION_SCALE: BitField = BitField::new("position_scale", 89, 2);
pub const F_POSITION: BitField = BitField::new("f_position", 91, 27);
pub const F_POSITION_SIGN: BitField = BitField::new("f_position_sign", 118, 1);
pub const VELOCITY_SCALE: BitField = BitField::new("velocity_scale", 119, 2);
pub const G_POSITION: BitField = BitField::new("g_position", 121, 27);
pub const G_POSITION_SIGN: BitField = BitField::new("g_position_sign", 148, 1);
pub const OPTICAL_TRACK_BIT: BitField = BitField::new("optical_track_bit", 149, 1);
pub const PLUS_TIME_FLAG: BitField = BitField::new("plus_time_flag", 150, 1);
pub const F_VELOCITY: BitField = BitField::new("f_velocity", 151, 14);
pub const F_VELOCITY_SIGN: BitField = BitField::new("f_velocity_sign", 165, 1);
pub const E_VELOCITY: BitField = BitField::new("e_velocity", 166, 14);
pub const E_VELOCITY_SIGN: BitField = BitField::new("e_velocity_sign", 180, 1);
pub const LIFTOFF: BitField = BitField::new("liftoff", 181, 1);
pub const PLUNGE: BitField = BitField::new("plunge", 182, 1);
pub const PULSE_WIDTH: BitField = BitField::new("pulse_width", 183, 2);
pub const REFRACTION_CORRECTION: BitField = BitField::new("refraction_correction", 185, 1);
pub const DROOP: BitField = BitField::new("droop", 186, 1);
pub const PARAMP: BitField = BitField::new("paramp", 187, 1);
pub const RADIATION: BitField = BitField::new("radiation", 188, 1);
pub const LOCAL_OSCILLATORS: BitField = BitField::new("local_oscillators", 189, 1);
pub const BEACON_SKIN: BitField = BitField::new("beacon_skin", 190, 1);
pub const TRACK_BIT: BitField = BitField::new("track_bit", 191, 1);
pub const QUALITY_BIT: BitField = BitField::new("quality_bit", 192, 1);
pub const MODE: BitField = BitField::new("mode", 193, 3);
pub const G_VELOCITY: BitField = BitField::new("g_velocity", 196, 14);
pub const G_VELOCITY_SIGN: BitField = BitField::new("g_velocity_sign", 210, 1);
pub const CHECKSUM: BitField = BitField::new("checksum", 211, 7);
pub const SPARE: BitField = BitField::new("spare", 218, 7);
pub const SYNC: BitField = BitField::new("sync", 225, 16);

/// Every field of the trailer in wire order.
pub const LAYOUT: [BitField; 38] = [
    SATELLITE_ID,
    VEHICLE_ID,
    DAY_OF_YEAR,
    FORMAT_TYPE,
    TIME_OF_DAY_TENTHS,
    TIME_OF_DAY_SECONDS,
    SITE_ID,
    E_POSITION,
    E_POSITION_SIGN,
    POSITION_SCALE,
    F_POSITION,
    F_POSITION_SIGN,
    VELOCITY_SCALE,
    G_POSITION,
    G_POSITION_SIGN,
    OPTICAL_TRACK_BIT,
    PLUS_TIME_FLAG,
    F_VELOCITY,
    F_VELOCITY_SIGN,
    E_VELOCITY,
    E_VELOCITY_SIGN,
    LIFTOFF,
    PLUNGE,
    PULSE_WIDTH,
    REFRACTION_CORRECTION,
    DROOP,
    PARAMP,
    RADIATION,
    LOCAL_OSCILLATORS,
    BEACON_SKIN,
    TRACK_BIT,
    QUALITY_BIT,
    MODE,
    G_VELOCITY,
    G_VELOCITY_SIGN,
    CHECKSUM,
    SPARE,
    SYNC,
];
