//! Snapshot encoder: controller reading to slot record.
//!
//! A pure structural transform. No smoothing, filtering, or deadzone logic
//! is applied; the bus master interprets the values.

use padlink_proto::{ControllerReading, SlotRecord};

/// Encode one occupied slot's current reading into its snapshot record.
///
/// The stack's 32-bit axis and trigger accessors are narrowed to the
/// record's 16-bit fields; sticks are nominally -511..512 and triggers
/// 0..1023, so the casts are value-preserving for in-range inputs. The
/// directional pad has no record field and is not encoded.
#[must_use]
pub fn encode_slot(slot: usize, reading: &ControllerReading) -> SlotRecord {
    SlotRecord {
        slot: slot as u8,
        connected: reading.connected,
        category: reading.category & 0x0F,
        buttons: reading.buttons,
        left_x: reading.left_x as i16,
        left_y: reading.left_y as i16,
        right_x: reading.right_x as i16,
        right_y: reading.right_y as i16,
        misc_buttons: reading.misc_buttons,
        left_trigger: reading.brake as u16,
        right_trigger: reading.throttle as u16,
    }
}
