use serde::{Deserialize, Serialize};

/// Word byte ordering advertised by the fixed header.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ByteOrder {
    Little,
    Big,
    Unknown,
}

/// Extended header announced after the fixed header.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ExtendedHeaderType {
    None,
    Standard,
    Donna,
    Sips,
    Unknown,
}

/// 16-byte WFF Ethernet fixed header.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FixedHeader {
    pub byte_order: ByteOrder,
    pub extended_header_type: ExtendedHeaderType,
    pub body_size: u32,
    pub body_blocking_size: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AddressType {
    Socket,
    WindowsPipe,
    Unknown,
}

/// Source addressing block of the SIPS header.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EthernetAddress {
    pub site_id: String,
    pub system_name: String,
    pub logical_unit_name: String,
    pub address_type: AddressType,
    pub box_id: String,
    pub task_id: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RangeAvailability {
    Yes,
    No,
    Unknown,
}

/// Year / day-of-year / seconds-of-day / microseconds stamp used by the SIPS sections.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Timestamp {
    pub year: u32,
    pub day_of_year: u32,
    pub seconds_gmt: u32,
    pub microseconds: u32,
}

/// Tracker location and pointing solution carried in the SIPS header.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TargetPosition {
    pub range_available: RangeAvailability,
    pub timestamp: Timestamp,
    pub tracker_lat: f64,
    pub tracker_lon: f64,
    pub tracker_height: f64,
    pub target_azimuth: f64,
    pub target_elevation: f64,
    pub target_range: f64,
    pub site_id: u32,
    /// `G`ood, `B`ad or `C`omputed on well-formed frames.
    pub data_quality: char,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Category {
    Command,
    Data,
    Status,
    Unknown,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MessageType {
    Query,
    #[serde(rename = "MDDF")]
    Mddf,
    #[serde(rename = "LTAS")]
    Ltas,
    #[serde(rename = "TIME")]
    Time,
    Execute,
    Unknown,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Certified {
    Yes,
    No,
    Unknown,
}

/// Message identification block of the SIPS header.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EthernetId {
    pub group: String,
    pub category: Category,
    pub message_type: MessageType,
    pub unit: u32,
    pub id: i32,
    pub certified: Certified,
    pub priority: i32,
    pub security_key: [u8; 4],
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PositionScale {
    X1,
    X10,
    X10e3,
    X10e10,
}

impl PositionScale {
    /// Multiplier applied to position components. Codes 2 and 3 carry the
    /// decimal literals 10e3 and 10e10, i.e. 1e4 and 1e11.
    pub fn factor(self) -> f64 {
        match self {
            PositionScale::X1 => 1.0,
            PositionScale::X10 => 10.0,
            PositionScale::X10e3 => 10e3,
            PositionScale::X10e10 => 10e10,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum VelocityScale {
    X1,
    X10,
    Invalid,
}

impl VelocityScale {
    pub fn factor(self) -> Option<f64> {
        match self {
            VelocityScale::X1 => Some(1.0),
            VelocityScale::X10 => Some(10.0),
            VelocityScale::Invalid => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PulseWidth {
    Us1_0,
    Us2_4,
    Us5_0,
    Us10_0,
}

impl PulseWidth {
    pub fn micros(self) -> f64 {
        match self {
            PulseWidth::Us1_0 => 1.0,
            PulseWidth::Us2_4 => 2.4,
            PulseWidth::Us5_0 => 5.0,
            PulseWidth::Us10_0 => 10.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TrackingMode {
    Manual,
    OnAxisPoweredFlight,
    ComputerDrive,
    AutotrackCoast,
    Autotrack,
    OnAxisCoast,
    OnAxisOrbital,
    Unknown,
}

/// 27-bit position component with its sign bit.
///
/// When the sign bit is set the magnitude holds the low 27 bits of a
/// two's-complement value and `corrected` carries the negative result.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PositionComponent {
    pub magnitude: u32,
    pub sign: bool,
    pub corrected: Option<i32>,
}

impl PositionComponent {
    pub fn value(&self) -> i32 {
        // magnitude is at most 27 bits wide
        self.corrected.unwrap_or(self.magnitude as i32)
    }
}

/// 14-bit velocity component with its sign bit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct VelocityComponent {
    pub magnitude: u16,
    pub sign: bool,
    pub corrected: Option<i16>,
}

impl VelocityComponent {
    pub fn value(&self) -> i16 {
        self.corrected.unwrap_or(self.magnitude as i16)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Axes<T> {
    pub e: T,
    pub f: T,
    pub g: T,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusFlags {
    pub refraction_correction: bool,
    pub droop: bool,
    pub paramp: bool,
    pub radiation: bool,
    pub local_oscillators: bool,
    pub beacon_skin: bool,
    pub track_bit: bool,
    pub quality_bit: bool,
}

/// Bit-packed STDN LTAS trailer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LtasFrame {
    pub satellite_id: u16,
    pub vehicle_id: u8,
    pub day_of_year: u16,
    pub format_type: u8,
    /// Raw tenths-of-second count; see [`LtasFrame::time_of_day_tenths`].
    pub time_of_day_tenths_raw: u8,
    pub time_of_day_seconds: u32,
    pub site_id: u16,
    pub position: Axes<PositionComponent>,
    pub position_scale: PositionScale,
    pub velocity_scale: VelocityScale,
    pub velocity: Axes<VelocityComponent>,
    pub optical_track_bit: bool,
    pub plus_time_flag: bool,
    pub liftoff: bool,
    pub plunge: bool,
    pub pulse_width: PulseWidth,
    pub flags: StatusFlags,
    pub mode: TrackingMode,
    pub checksum: u8,
}

impl LtasFrame {
    pub fn time_of_day_tenths(&self) -> f64 {
        f64::from(self.time_of_day_tenths_raw) / 10.0
    }

    pub fn scaled_position(&self) -> Axes<f64> {
        let factor = self.position_scale.factor();
        Axes {
            e: f64::from(self.position.e.value()) * factor,
            f: f64::from(self.position.f.value()) * factor,
            g: f64::from(self.position.g.value()) * factor,
        }
    }

    /// `None` when the velocity scale code is invalid.
    pub fn scaled_velocity(&self) -> Option<Axes<f64>> {
        let factor = self.velocity_scale.factor()?;
        Some(Axes {
            e: f64::from(self.velocity.e.value()) * factor,
            f: f64::from(self.velocity.f.value()) * factor,
            g: f64::from(self.velocity.g.value()) * factor,
        })
    }
}

/// Fully decoded 302-byte frame.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TelemetryRecord {
    pub fixed_header: FixedHeader,
    pub ethernet_address: EthernetAddress,
    pub target_position: TargetPosition,
    pub ethernet_id: EthernetId,
    pub ethernet_timestamp: Timestamp,
    pub ltas_frame: LtasFrame,
}
