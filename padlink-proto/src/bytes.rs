//! Big-endian byte helpers shared by the record and link codecs.
//!
//! Every multi-byte field in the bridge's wire formats is MSB-first. All
//! encoding and decoding goes through these four functions so the byte
//! order is defined in exactly one place.

/// Write a u16 as two bytes, high byte first.
///
/// # Panics
///
/// Panics if `buf.len() < 2`.
#[inline]
pub fn put_u16_be(buf: &mut [u8], value: u16) {
    debug_assert!(buf.len() >= 2, "buffer too small for u16");
    buf[0] = (value >> 8) as u8;
    buf[1] = (value & 0xFF) as u8;
}

/// Write an i16 as two bytes, high byte first.
///
/// # Panics
///
/// Panics if `buf.len() < 2`.
#[inline]
pub fn put_i16_be(buf: &mut [u8], value: i16) {
    put_u16_be(buf, value as u16);
}

/// Read a u16 from two bytes, high byte first.
///
/// # Panics
///
/// Panics if `buf.len() < 2`.
#[inline]
#[must_use]
pub fn get_u16_be(buf: &[u8]) -> u16 {
    debug_assert!(buf.len() >= 2, "buffer too small for u16");
    ((buf[0] as u16) << 8) | buf[1] as u16
}

/// Read an i16 from two bytes, high byte first.
///
/// # Panics
///
/// Panics if `buf.len() < 2`.
#[inline]
#[must_use]
pub fn get_i16_be(buf: &[u8]) -> i16 {
    get_u16_be(buf) as i16
}
