//! STDN LTAS trailer, bytes [272, 302).
//!
//! Every field is positional; see [`layout`] for the bit map. Nothing here is
//! fatal: out-of-range codes decode to their `Unknown`/`Invalid` variant and
//! are reported as anomalies.

pub mod layout;
pub mod signed;

use crate::frame::{
    Axes, LtasFrame, PositionComponent, PositionScale, PulseWidth, StatusFlags, TrackingMode,
    VelocityComponent, VelocityScale,
};
use crate::prelude::{Anomaly, SectionDecoder};
use layout::BitField;
use signed::twos_complement;
use std::ops::Range;

pub struct LtasFrameDecoder;

fn position(section: &[u8], magnitude: BitField, sign: BitField) -> PositionComponent {
    let value = magnitude.extract(section);
    let sign = sign.flag(section);
    PositionComponent {
        magnitude: value,
        sign,
        corrected: sign.then(|| twos_complement(value, magnitude.width)),
    }
}

fn velocity(section: &[u8], magnitude: BitField, sign: BitField) -> VelocityComponent {
    let value = magnitude.extract(section);
    let sign = sign.flag(section);
    // 14-bit fields: both the magnitude and its negation fit in 16 bits
    VelocityComponent {
        magnitude: value as u16,
        sign,
        corrected: sign.then(|| twos_complement(value, magnitude.width) as i16),
    }
}

impl SectionDecoder for LtasFrameDecoder {
    type Output = LtasFrame;
    const SPAN: Range<usize> = 272..302;

    fn decode(section: &[u8], anomalies: &mut Vec<Anomaly>) -> LtasFrame {
        use layout::*;

        let position_scale = match POSITION_SCALE.extract(section) {
            0 => PositionScale::X1,
            1 => PositionScale::X10,
            2 => PositionScale::X10e3,
            _ => PositionScale::X10e10,
        };

        let velocity_scale = match VELOCITY_SCALE.extract(section) {
            0 => VelocityScale::X1,
            1 => VelocityScale::X10,
            code => {
                anomalies.push(Anomaly::InvalidVelocityScale(code as u8));
                VelocityScale::Invalid
            }
        };

        let pulse_width = match PULSE_WIDTH.extract(section) {
            0 => PulseWidth::Us1_0,
            1 => PulseWidth::Us2_4,
            2 => PulseWidth::Us5_0,
            _ => PulseWidth::Us10_0,
        };

        let mode = match MODE.extract(section) {
            0 => TrackingMode::Manual,
            1 => TrackingMode::OnAxisPoweredFlight,
            2 => TrackingMode::ComputerDrive,
            3 => TrackingMode::AutotrackCoast,
            4 => TrackingMode::Autotrack,
            5 => TrackingMode::OnAxisCoast,
            6 => TrackingMode::OnAxisOrbital,
            code => {
                anomalies.push(Anomaly::UnknownMode(code as u8));
                TrackingMode::Unknown
            }
        };

        LtasFrame {
            satellite_id: SATELLITE_ID.extract(section) as u16,
            vehicle_id: VEHICLE_ID.extract(section) as u8,
            day_of_year: DAY_OF_YEAR.extract(section) as u16,
            format_type: FORMAT_TYPE.extract(section) as u8,
            time_of_day_tenths_raw: TIME_OF_DAY_TENTHS.extract(section) as u8,
            time_of_day_seconds: TIME_OF_DAY_SECONDS.extract(section),
            site_id: SITE_ID.extract(section) as u16,
            position: Axes {
                e: position(section, E_POSITION, E_POSITION_SIGN),
                f: position(section, F_POSITION, F_POSITION_SIGN),
                g: position(section, G_POSITION, G_POSITION_SIGN),
            },
            position_scale,
            velocity_scale,
            velocity: Axes {
                e: velocity(section, E_VELOCITY, E_VELOCITY_SIGN),
                f: velocity(section, F_VELOCITY, F_VELOCITY_SIGN),
                g: velocity(section, G_VELOCITY, G_VELOCITY_SIGN),
            },
            optical_track_bit: OPTICAL_TRACK_BIT.flag(section),
            plus_time_flag: PLUS_TIME_FLAG.flag(section),
            liftoff: LIFTOFF.flag(section),
            plunge: PLUNGE.flag(section),
            pulse_width,
            flags: StatusFlags {
                refraction_correction: REFRACTION_CORRECTION.flag(section),
                droop: DROOP.flag(section),
                paramp: PARAMP.flag(section),
                radiation: RADIATION.flag(section),
                local_oscillators: LOCAL_OSCILLATORS.flag(section),
                beacon_skin: BEACON_SKIN.flag(section),
                track_bit: TRACK_BIT.flag(section),
                quality_bit: QUALITY_BIT.flag(section),
            },
            mode,
            checksum: CHECKSUM.extract(section) as u8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_hex(hex_str: &str) -> (LtasFrame, Vec<Anomaly>) {
        let section = hex::decode(hex_str).unwrap();
        let mut anomalies = Vec::new();
        let frame = LtasFrameDecoder::decode(&section, &mut anomalies);
        (frame, anomalies)
    }

    #[test]
    fn zero_trailer_maps_to_zero_variants() {
        let (frame, anomalies) =
            decode_hex("0000000000000000000000000000000000000000000000000000000058a0");
        assert!(anomalies.is_empty());
        assert_eq!(frame.position_scale, PositionScale::X1);
        assert_eq!(frame.velocity_scale, VelocityScale::X1);
        assert_eq!(frame.pulse_width, PulseWidth::Us1_0);
        assert_eq!(frame.mode, TrackingMode::Manual);
        assert_eq!(frame.position.e.corrected, None);
        assert_eq!(frame.flags, StatusFlags::default());
        assert_eq!(frame.checksum, 0);
    }

    #[test]
    fn decodes_captured_style_trailer() {
        let (frame, anomalies) =
            decode_hex("a54dca182530bb1d6d132cded6237b2ed91e3f721fcb1971174494d65858");

        assert_eq!(frame.satellite_id, 3493);
        assert_eq!(frame.vehicle_id, 2);
        assert_eq!(frame.day_of_year, 101);
        assert_eq!(frame.format_type, 6);
        assert_eq!(frame.time_of_day_tenths_raw, 4);
        assert!((frame.time_of_day_tenths() - 0.4).abs() < f64::EPSILON);
        assert_eq!(frame.time_of_day_seconds, 52_233);
        assert_eq!(frame.site_id, 439);

        assert_eq!(
            frame.position.e,
            PositionComponent {
                magnitude: 46_216_913,
                sign: false,
                corrected: None,
            }
        );
        assert_eq!(
            frame.position.f,
            PositionComponent {
                magnitude: 113_833_399,
                sign: true,
                corrected: Some(-20_384_329),
            }
        );
        assert_eq!(frame.position.g.magnitude, 119_462_190);
        assert_eq!(frame.position.g.corrected, Some(-14_755_538));
        assert_eq!(frame.position_scale, PositionScale::X10e3);
        assert_eq!(frame.velocity_scale, VelocityScale::X10);

        assert_eq!(frame.velocity.f.magnitude, 15_816);
        assert_eq!(frame.velocity.f.corrected, Some(-568));
        assert_eq!(frame.velocity.e.magnitude, 3_672);
        assert_eq!(frame.velocity.e.corrected, Some(-12_712));
        assert_eq!(frame.velocity.g.magnitude, 2_178);
        assert!(!frame.velocity.g.sign);

        assert!(frame.optical_track_bit);
        assert!(frame.plus_time_flag);
        assert!(frame.liftoff);
        assert!(!frame.plunge);
        assert_eq!(frame.pulse_width, PulseWidth::Us1_0);
        assert_eq!(
            frame.flags,
            StatusFlags {
                refraction_correction: true,
                droop: false,
                paramp: false,
                radiation: false,
                local_oscillators: true,
                beacon_skin: true,
                track_bit: true,
                quality_bit: false,
            }
        );
        assert_eq!(frame.mode, TrackingMode::Unknown);
        assert_eq!(frame.checksum, 37);
        assert_eq!(anomalies, vec![Anomaly::UnknownMode(7)]);
    }

    #[test]
    fn invalid_velocity_scale_is_reported() {
        let mut section = [0u8; layout::SECTION_LEN];
        layout::VELOCITY_SCALE.insert(&mut section, 3);
        layout::POSITION_SCALE.insert(&mut section, 3);
        layout::PULSE_WIDTH.insert(&mut section, 1);
        let mut anomalies = Vec::new();
        let frame = LtasFrameDecoder::decode(&section, &mut anomalies);
        assert_eq!(frame.velocity_scale, VelocityScale::Invalid);
        assert_eq!(frame.position_scale, PositionScale::X10e10);
        assert_eq!(frame.pulse_width.micros(), 2.4);
        assert!(frame.scaled_velocity().is_none());
        assert_eq!(anomalies, vec![Anomaly::InvalidVelocityScale(3)]);
    }

    #[test]
    fn every_mode_code_is_handled() {
        let expected = [
            TrackingMode::Manual,
            TrackingMode::OnAxisPoweredFlight,
            TrackingMode::ComputerDrive,
            TrackingMode::AutotrackCoast,
            TrackingMode::Autotrack,
            TrackingMode::OnAxisCoast,
            TrackingMode::OnAxisOrbital,
            TrackingMode::Unknown,
        ];
        for (code, want) in expected.iter().enumerate() {
            let mut section = [0u8; layout::SECTION_LEN];
            layout::MODE.insert(&mut section, code as u32);
            let mut anomalies = Vec::new();
            let frame = LtasFrameDecoder::decode(&section, &mut anomalies);
            assert_eq!(frame.mode, *want);
            assert_eq!(anomalies.is_empty(), code < 7);
        }
    }

    #[test]
    fn negative_e_position_of_one() {
        let mut section = [0u8; layout::SECTION_LEN];
        layout::E_POSITION.insert(&mut section, 1);
        layout::E_POSITION_SIGN.insert(&mut section, 1);
        let mut anomalies = Vec::new();
        let frame = LtasFrameDecoder::decode(&section, &mut anomalies);
        assert_eq!(frame.position.e.magnitude, 1);
        assert_eq!(frame.position.e.corrected, Some(-134_217_727));
        assert_eq!(frame.position.f.corrected, None);
    }

    #[test]
    fn scaled_position_applies_factor_to_signed_value() {
        let mut section = [0u8; layout::SECTION_LEN];
        layout::E_POSITION.insert(&mut section, 0x7FF_FFFF);
        layout::E_POSITION_SIGN.insert(&mut section, 1);
        layout::F_POSITION.insert(&mut section, 12);
        layout::POSITION_SCALE.insert(&mut section, 1);
        let mut anomalies = Vec::new();
        let frame = LtasFrameDecoder::decode(&section, &mut anomalies);
        let scaled = frame.scaled_position();
        assert_eq!(scaled.e, -10.0);
        assert_eq!(scaled.f, 120.0);
        assert_eq!(scaled.g, 0.0);
    }
}
