//! Fixed-offset readers over section slices.
//!
//! Offsets are relative to the section start. Callers only pass offsets
//! inside their own fixed-size section, so the slices are always in bounds.

use byteorder::{BigEndian, ByteOrder};

pub fn be_u32(section: &[u8], offset: usize) -> u32 {
    BigEndian::read_u32(&section[offset..offset + 4])
}

pub fn be_i32(section: &[u8], offset: usize) -> i32 {
    BigEndian::read_i32(&section[offset..offset + 4])
}

pub fn be_f64(section: &[u8], offset: usize) -> f64 {
    BigEndian::read_f64(&section[offset..offset + 8])
}

/// Null-terminated, fixed-width text field.
///
/// Reads up to the first NUL and drops trailing whitespace. Bytes after the
/// first NUL are padding and are dropped even when non-zero. Bytes that are not
/// valid UTF-8 are replaced rather than failing the decode.
pub fn text(section: &[u8], offset: usize, width: usize) -> String {
    let field = &section[offset..offset + width];
    let end = field.iter().position(|&b| b == 0).unwrap_or(width);
    String::from_utf8_lossy(&field[..end]).trim_end().to_string()
}
