//! Sampler: connects stack events and readings to the snapshot store.

use embassy_sync::blocking_mutex::raw::RawMutex;

use crate::encoder::encode_slot;
use crate::registry::{RegistryError, SlotRegistry};
use crate::stack::{ControllerEvent, ControllerStack};
use crate::store::SnapshotStore;

/// Drives the slot registry and snapshot encoding for one sampling loop.
///
/// The sampler owns seat assignment; the snapshot store is shared with the
/// bus responder and only referenced here. Controller lifetime stays with
/// the wireless stack.
///
/// # Error Handling
///
/// Event errors (capacity overflow, untracked disconnect) are returned to
/// the caller for reporting and never stop sampling.
pub struct Sampler<'a, H, M: RawMutex> {
    registry: SlotRegistry<H>,
    store: &'a SnapshotStore<M>,
}

impl<'a, H: Copy + PartialEq, M: RawMutex> Sampler<'a, H, M> {
    /// Create a sampler over an (initially all-empty) snapshot store.
    #[must_use]
    pub fn new(store: &'a SnapshotStore<M>) -> Self {
        Self {
            registry: SlotRegistry::new(),
            store,
        }
    }

    /// Route one connect/disconnect notification to the registry.
    ///
    /// A disconnect also resets the vacated slot's record immediately, so
    /// the very next bus read serves the not-connected representation.
    /// Returns the affected slot index.
    ///
    /// # Errors
    ///
    /// Propagates [`RegistryError`]; both variants leave the seats and the
    /// store unchanged.
    pub fn handle_event(&mut self, event: ControllerEvent<H>) -> Result<usize, RegistryError> {
        match event {
            ControllerEvent::Connected { handle, .. } => self.registry.on_connect(handle),
            ControllerEvent::Disconnected { handle } => {
                let slot = self.registry.on_disconnect(handle)?;
                self.store.clear(slot);
                Ok(slot)
            }
        }
    }

    /// Refresh the snapshot store from every occupied slot.
    ///
    /// Called once per sampling iteration. Seats whose controller currently
    /// reports not-connected (or has no reading at all) keep their previous
    /// record; only a disconnect notification vacates a seat.
    pub fn sample<S: ControllerStack<Handle = H>>(&self, stack: &S) {
        for (slot, handle) in self.registry.iter_occupied() {
            if let Some(reading) = stack.read(handle) {
                if reading.connected {
                    self.store.publish(slot, encode_slot(slot, &reading));
                }
            }
        }
    }

    /// The current seat table.
    #[must_use]
    pub fn registry(&self) -> &SlotRegistry<H> {
        &self.registry
    }
}
