//! Slot registry: fixed-capacity table of controller seats.

use padlink_proto::MAX_SLOTS;

/// Error type for registry operations.
///
/// Both conditions are local and non-fatal: the caller reports them and
/// carries on. Nothing in the registry can halt sampling or bus service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegistryError {
    /// A connect arrived with all slots occupied; the pad is not tracked.
    CapacityExceeded,
    /// A disconnect referenced a handle not present in any slot.
    UntrackedDisconnect,
}

/// Fixed table mapping slot index to the currently seated controller handle.
///
/// The registry tracks seat assignment only; controller lifetime stays with
/// the wireless stack that issued the handle. Connects take the lowest-index
/// empty slot, disconnects clear the matching slot.
///
/// # Example
///
/// ```
/// use padlink_core::SlotRegistry;
///
/// let mut registry: SlotRegistry<u8> = SlotRegistry::new();
/// assert_eq!(registry.on_connect(7), Ok(0));
/// assert_eq!(registry.on_connect(9), Ok(1));
/// assert_eq!(registry.on_disconnect(7), Ok(0));
/// assert_eq!(registry.on_connect(9), Ok(1)); // already seated
/// ```
pub struct SlotRegistry<H> {
    slots: [Option<H>; MAX_SLOTS],
}

impl<H: Copy + PartialEq> SlotRegistry<H> {
    /// Create a registry with every slot empty.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: [None; MAX_SLOTS],
        }
    }

    /// Seat a newly connected controller in the first empty slot.
    ///
    /// Scan order is slot 0 through 3. A handle that is already seated keeps
    /// its slot and gets its existing index back, so no handle ever occupies
    /// two slots.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::CapacityExceeded`] when every slot is taken;
    /// the handle is not tracked and the existing seats are untouched.
    pub fn on_connect(&mut self, handle: H) -> Result<usize, RegistryError> {
        if let Some(slot) = self.slot_of(handle) {
            return Ok(slot);
        }
        for (slot, entry) in self.slots.iter_mut().enumerate() {
            if entry.is_none() {
                *entry = Some(handle);
                return Ok(slot);
            }
        }
        Err(RegistryError::CapacityExceeded)
    }

    /// Clear the slot seated by `handle`, returning its index.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UntrackedDisconnect`] when no slot holds the
    /// handle; the registry is unchanged.
    pub fn on_disconnect(&mut self, handle: H) -> Result<usize, RegistryError> {
        match self.slot_of(handle) {
            Some(slot) => {
                self.slots[slot] = None;
                Ok(slot)
            }
            None => Err(RegistryError::UntrackedDisconnect),
        }
    }

    /// Find the slot currently holding `handle`.
    #[must_use]
    pub fn slot_of(&self, handle: H) -> Option<usize> {
        self.slots.iter().position(|s| *s == Some(handle))
    }

    /// The handle seated at `slot`, if any.
    #[must_use]
    pub fn handle_at(&self, slot: usize) -> Option<H> {
        self.slots.get(slot).copied().flatten()
    }

    /// Iterate over occupied slots in index order.
    pub fn iter_occupied(&self) -> impl Iterator<Item = (usize, H)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, entry)| entry.map(|h| (slot, h)))
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Whether every slot is taken.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|s| s.is_some())
    }
}

impl<H: Copy + PartialEq> Default for SlotRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn test_connect_takes_lowest_empty_slot() {
        let mut registry: SlotRegistry<u8> = SlotRegistry::new();
        assert_eq!(registry.on_connect(10), Ok(0));
        assert_eq!(registry.on_connect(11), Ok(1));
        assert_eq!(registry.on_connect(12), Ok(2));

        // Vacate slot 1; the next connect must refill it, not slot 3.
        assert_eq!(registry.on_disconnect(11), Ok(1));
        assert_eq!(registry.on_connect(13), Ok(1));
    }

    #[test]
    fn test_fifth_connect_is_rejected_and_seats_unchanged() {
        let mut registry: SlotRegistry<u8> = SlotRegistry::new();
        for handle in 0..4 {
            registry.on_connect(handle).unwrap();
        }
        assert_eq!(registry.on_connect(4), Err(RegistryError::CapacityExceeded));

        for (slot, handle) in (0..4).enumerate() {
            assert_eq!(registry.handle_at(slot), Some(handle));
        }
        assert!(registry.slot_of(4).is_none());
    }

    #[test]
    fn test_duplicate_connect_keeps_single_seat() {
        let mut registry: SlotRegistry<u8> = SlotRegistry::new();
        assert_eq!(registry.on_connect(7), Ok(0));
        assert_eq!(registry.on_connect(7), Ok(0));
        assert_eq!(registry.occupied_count(), 1);
    }

    #[test]
    fn test_untracked_disconnect_is_noop() {
        let mut registry: SlotRegistry<u8> = SlotRegistry::new();
        registry.on_connect(1).unwrap();
        assert_eq!(
            registry.on_disconnect(99),
            Err(RegistryError::UntrackedDisconnect)
        );
        assert_eq!(registry.occupied_count(), 1);
    }

    #[test]
    fn test_iter_occupied_in_index_order() {
        let mut registry: SlotRegistry<u8> = SlotRegistry::new();
        registry.on_connect(20).unwrap();
        registry.on_connect(21).unwrap();
        registry.on_connect(22).unwrap();
        registry.on_disconnect(21).unwrap();

        let seats: std::vec::Vec<_> = registry.iter_occupied().collect();
        assert_eq!(seats, std::vec![(0, 20), (2, 22)]);
    }

    #[test]
    fn test_arbitrary_sequences_never_double_seat() {
        // Churn through connects and disconnects; the invariant must hold
        // after every step.
        let mut registry: SlotRegistry<u16> = SlotRegistry::new();
        for step in 0u16..200 {
            let handle = step % 7;
            if step % 3 == 0 {
                let _ = registry.on_disconnect(handle);
            } else {
                let _ = registry.on_connect(handle);
            }
            for probe in 0..7 {
                let seats = registry
                    .iter_occupied()
                    .filter(|&(_, h)| h == probe)
                    .count();
                assert!(seats <= 1, "handle {probe} seated {seats} times");
            }
        }
    }
}
