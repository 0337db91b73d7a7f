//! Controller stack seam: events, the read-accessor trait, and a
//! latest-reading table for push-style stacks.

use padlink_proto::{ControllerReading, LinkFrame};

/// Connect/disconnect notification from the wireless stack.
///
/// Events are consumed synchronously by the sampling bridge, which keeps the
/// registry pure and testable without a live radio.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControllerEvent<H> {
    /// A pad finished pairing; `category` is its controller-type tag.
    Connected { handle: H, category: u8 },
    /// A pad dropped off the radio.
    Disconnected { handle: H },
}

/// Read access to the live state of connected controllers.
///
/// This is the bridge's only view of the wireless stack. Implementations
/// must be non-blocking: `read` is called from the sampling loop once per
/// occupied slot per iteration.
pub trait ControllerStack {
    /// Opaque controller handle issued by the stack.
    type Handle: Copy + PartialEq;

    /// Current inputs for `handle`, or `None` if the stack has nothing for
    /// it (never paired, or already torn down).
    fn read(&self, handle: Self::Handle) -> Option<ControllerReading>;
}

/// Most handles the radio co-processor hands out.
pub const MAX_HANDLES: usize = 8;

/// Latest-reading cache for a push-style stack.
///
/// The radio co-processor streams state frames; this table keeps the most
/// recent reading per handle so the sampling loop can read synchronously.
/// A connect seeds a neutral reading carrying the pad's category, so the
/// seat shows up connected-but-idle until the first state frame lands.
pub struct ControllerTable {
    readings: [Option<ControllerReading>; MAX_HANDLES],
}

impl ControllerTable {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            readings: [None; MAX_HANDLES],
        }
    }

    /// Apply a decoded link frame.
    ///
    /// Returns the registry-facing event for connect/disconnect frames;
    /// state frames only refresh the cache. Frames with a handle outside
    /// `0..MAX_HANDLES` are dropped.
    pub fn apply(&mut self, frame: &LinkFrame) -> Option<ControllerEvent<u8>> {
        match *frame {
            LinkFrame::Connected { handle, category } => {
                let entry = self.readings.get_mut(handle as usize)?;
                *entry = Some(ControllerReading::neutral(category));
                Some(ControllerEvent::Connected { handle, category })
            }
            LinkFrame::Disconnected { handle } => {
                let entry = self.readings.get_mut(handle as usize)?;
                *entry = None;
                Some(ControllerEvent::Disconnected { handle })
            }
            LinkFrame::State { handle, reading } => {
                if let Some(entry) = self.readings.get_mut(handle as usize) {
                    *entry = Some(reading);
                }
                None
            }
        }
    }
}

impl ControllerStack for ControllerTable {
    type Handle = u8;

    fn read(&self, handle: u8) -> Option<ControllerReading> {
        self.readings.get(handle as usize).copied().flatten()
    }
}

impl Default for ControllerTable {
    fn default() -> Self {
        Self::new()
    }
}
