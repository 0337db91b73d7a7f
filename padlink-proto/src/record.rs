//! Fixed-layout slot record: the 19-byte snapshot of one controller seat.
//!
//! # Layout
//!
//! | Offset | Size | Field                                        |
//! |--------|------|----------------------------------------------|
//! | 0      | 1    | header: slot (7-5), connected (4), type (3-0)|
//! | 1      | 2    | button bitmask, high byte first              |
//! | 3      | 2    | left stick X, i16 MSB-first                  |
//! | 5      | 2    | left stick Y                                 |
//! | 7      | 2    | right stick X                                |
//! | 9      | 2    | right stick Y                                |
//! | 11     | 1    | auxiliary button bitmask                     |
//! | 12     | 2    | left trigger, u16 MSB-first                  |
//! | 14     | 2    | right trigger                                |
//! | 16     | 3    | reserved, always zero                        |
//!
//! The layout is position-independent of controller state: every record is
//! exactly [`RECORD_LEN`] bytes regardless of occupancy.

use crate::bytes::{get_i16_be, get_u16_be, put_i16_be, put_u16_be};

/// Number of controller seats served by the bridge.
pub const MAX_SLOTS: usize = 4;

/// Size of one encoded slot record in bytes.
pub const RECORD_LEN: usize = 19;

/// Size of the full bus report: all slots in index order.
pub const REPORT_LEN: usize = RECORD_LEN * MAX_SLOTS;

/// Number of trailing reserved bytes in a record.
pub const RESERVED_LEN: usize = 3;

/// Header bit for the connected flag.
const HEADER_CONNECTED: u8 = 1 << 4;

/// Pack the record header byte from slot index, connected flag, and
/// controller-type tag.
#[inline]
#[must_use]
pub const fn pack_header(slot: u8, connected: bool, category: u8) -> u8 {
    let mut header = (slot & 0x07) << 5;
    if connected {
        header |= HEADER_CONNECTED;
    }
    header | (category & 0x0F)
}

/// Decoded snapshot of one slot.
///
/// A disconnected seat is represented by [`SlotRecord::EMPTY`]: all fields
/// zero with the connected flag clear. The store and encoder use it both at
/// startup and when a seat is vacated, so the bus never serves stale data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SlotRecord {
    /// Slot index, 0..3.
    pub slot: u8,
    /// Connected flag (header bit 4).
    pub connected: bool,
    /// Controller-type tag, low 4 bits significant.
    pub category: u8,
    /// 16-bit button bitmask.
    pub buttons: u16,
    pub left_x: i16,
    pub left_y: i16,
    pub right_x: i16,
    pub right_y: i16,
    /// Auxiliary/misc button bitmask.
    pub misc_buttons: u8,
    pub left_trigger: u16,
    pub right_trigger: u16,
}

impl SlotRecord {
    /// The empty-slot record: every one of the 19 bytes is zero.
    pub const EMPTY: Self = Self {
        slot: 0,
        connected: false,
        category: 0,
        buttons: 0,
        left_x: 0,
        left_y: 0,
        right_x: 0,
        right_y: 0,
        misc_buttons: 0,
        left_trigger: 0,
        right_trigger: 0,
    };

    /// Encode the record into its fixed 19-byte wire form.
    #[must_use]
    pub fn encode(&self) -> [u8; RECORD_LEN] {
        let mut buf = [0u8; RECORD_LEN];
        buf[0] = pack_header(self.slot, self.connected, self.category);
        put_u16_be(&mut buf[1..3], self.buttons);
        put_i16_be(&mut buf[3..5], self.left_x);
        put_i16_be(&mut buf[5..7], self.left_y);
        put_i16_be(&mut buf[7..9], self.right_x);
        put_i16_be(&mut buf[9..11], self.right_y);
        buf[11] = self.misc_buttons;
        put_u16_be(&mut buf[12..14], self.left_trigger);
        put_u16_be(&mut buf[14..16], self.right_trigger);
        // Bytes 16..19 stay zero (reserved).
        buf
    }

    /// Decode a record from its wire form.
    ///
    /// The reserved bytes are ignored; encoding always writes them as zero.
    #[must_use]
    pub fn decode(buf: &[u8; RECORD_LEN]) -> Self {
        Self {
            slot: buf[0] >> 5,
            connected: buf[0] & HEADER_CONNECTED != 0,
            category: buf[0] & 0x0F,
            buttons: get_u16_be(&buf[1..3]),
            left_x: get_i16_be(&buf[3..5]),
            left_y: get_i16_be(&buf[5..7]),
            right_x: get_i16_be(&buf[7..9]),
            right_y: get_i16_be(&buf[9..11]),
            misc_buttons: buf[11],
            left_trigger: get_u16_be(&buf[12..14]),
            right_trigger: get_u16_be(&buf[14..16]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record_is_all_zero_bytes() {
        assert_eq!(SlotRecord::EMPTY.encode(), [0u8; RECORD_LEN]);
    }

    #[test]
    fn test_header_packing() {
        assert_eq!(pack_header(0, false, 0), 0x00);
        assert_eq!(pack_header(0, true, 0), 0x10);
        assert_eq!(pack_header(3, true, 3), 0x73);
        assert_eq!(pack_header(1, false, 0x0F), 0x2F);
        // Out-of-range inputs are masked to their bit fields.
        assert_eq!(pack_header(0xFF, false, 0), 0xE0);
        assert_eq!(pack_header(0, false, 0xFF), 0x0F);
    }

    #[test]
    fn test_encode_field_positions() {
        let record = SlotRecord {
            slot: 2,
            connected: true,
            category: 3,
            buttons: 0x1234,
            left_x: 100,
            left_y: -200,
            right_x: 0,
            right_y: 0,
            misc_buttons: 0xA5,
            left_trigger: 300,
            right_trigger: 0,
        };
        let bytes = record.encode();

        assert_eq!(bytes[0], 0x53); // slot 2 << 5 | connected | type 3
        assert_eq!(bytes[1], 0x12); // button mask high byte first
        assert_eq!(bytes[2], 0x34);
        assert_eq!(&bytes[3..5], &100i16.to_be_bytes());
        assert_eq!(&bytes[5..7], &(-200i16).to_be_bytes());
        assert_eq!(bytes[11], 0xA5);
        assert_eq!(&bytes[12..14], &300u16.to_be_bytes());
        assert_eq!(&bytes[16..], &[0, 0, 0]); // reserved
    }

    #[test]
    fn test_byte_exact_round_trip() {
        let record = SlotRecord {
            slot: 1,
            connected: true,
            category: 3,
            buttons: 0x1234,
            left_x: 100,
            left_y: -200,
            right_x: 0,
            right_y: 0,
            misc_buttons: 0x05,
            left_trigger: 300,
            right_trigger: 0,
        };
        let bytes = record.encode();
        assert_eq!(SlotRecord::decode(&bytes), record);
        // And the wire form itself is stable.
        assert_eq!(SlotRecord::decode(&bytes).encode(), bytes);
    }

    #[test]
    fn test_decode_extreme_values() {
        let record = SlotRecord {
            slot: 3,
            connected: true,
            category: 0x0F,
            buttons: 0xFFFF,
            left_x: i16::MIN,
            left_y: i16::MAX,
            right_x: i16::MIN,
            right_y: i16::MAX,
            misc_buttons: 0xFF,
            left_trigger: u16::MAX,
            right_trigger: 1023,
        };
        assert_eq!(SlotRecord::decode(&record.encode()), record);
    }

    #[test]
    fn test_record_len_matches_layout() {
        // header + buttons + 4 axes + misc + 2 triggers + reserved
        assert_eq!(RECORD_LEN, 1 + 2 + 8 + 1 + 4 + RESERVED_LEN);
        assert_eq!(REPORT_LEN, 76);
    }
}
