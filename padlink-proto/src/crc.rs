//! CRC-8 checksum for co-processor link frames.
//!
//! Uses CRC-8/SMBUS with a 256-byte lookup table.

use crc::{Crc, CRC_8_SMBUS};

const CRC8: Crc<u8> = Crc::<u8>::new(&CRC_8_SMBUS);

/// Calculate the CRC-8 checksum of a byte slice.
#[inline]
#[must_use]
pub fn calculate_crc8(data: &[u8]) -> u8 {
    CRC8.checksum(data)
}
