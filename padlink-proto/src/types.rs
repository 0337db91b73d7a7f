//! Controller reading: the field bundle the wireless stack exposes per pad.

/// One controller's current inputs as reported by the wireless stack.
///
/// Field widths match the stack's accessor types: stick axes are nominally
/// -511..512 and triggers 0..1023, both delivered as `i32`. Narrowing to the
/// 16-bit snapshot fields happens in the snapshot encoder, not here.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControllerReading {
    /// 16-bit button bitmask. Semantics are left to the bus master.
    pub buttons: u16,
    /// Directional pad bitmask.
    pub dpad: u8,
    /// Left stick X axis.
    pub left_x: i32,
    /// Left stick Y axis.
    pub left_y: i32,
    /// Right stick X axis.
    pub right_x: i32,
    /// Right stick Y axis.
    pub right_y: i32,
    /// Brake-style trigger (left).
    pub brake: i32,
    /// Throttle-style trigger (right).
    pub throttle: i32,
    /// Auxiliary/misc button bitmask (home, start, select, ...).
    pub misc_buttons: u8,
    /// Controller-type tag from the stack, low 4 bits significant.
    pub category: u8,
    /// Connection status as last reported by the stack.
    pub connected: bool,
}

impl ControllerReading {
    /// A connected controller with everything at rest.
    ///
    /// Used to seed a pad's entry between the connect notification and its
    /// first state report.
    #[must_use]
    pub const fn neutral(category: u8) -> Self {
        Self {
            buttons: 0,
            dpad: 0,
            left_x: 0,
            left_y: 0,
            right_x: 0,
            right_y: 0,
            brake: 0,
            throttle: 0,
            misc_buttons: 0,
            category,
            connected: true,
        }
    }
}
