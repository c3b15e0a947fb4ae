//! Magnitude-plus-sign components.
//!
//! A set sign bit means the `width`-bit magnitude holds the low bits of a
//! two's-complement value; the corrected value is its negation over `width`
//! bits, `-((magnitude ^ (2^width - 1)) + 1)`.

/// Negative value of a `width`-bit two's-complement magnitude (`width` < 32).
pub fn twos_complement(magnitude: u32, width: u8) -> i32 {
    let mask = ((1u64 << width) - 1) as u32;
    -(((magnitude & mask) ^ mask) as i32 + 1)
}

/// Low `width` bits of `value`, the inverse of [`twos_complement`] for
/// negative inputs and the identity for in-range positive ones.
pub fn encode_twos_complement(value: i32, width: u8) -> u32 {
    let mask = ((1u64 << width) - 1) as u32;
    (value as u32) & mask
}
