//! Snapshot store: the record table shared with the bus responder.
//!
//! The sampling loop writes records; the bus responder reads the whole
//! table from an interrupt-like context triggered by the bus master. Every
//! access runs under the store's mutex, so the responder can never observe
//! a half-written record and the sampling loop can never tear a read. Each
//! critical section is a bounded handful of byte copies, negligible against
//! bus timing.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;
use padlink_proto::{SlotRecord, MAX_SLOTS, RECORD_LEN, REPORT_LEN};

/// Shared table of the most recently encoded slot records.
///
/// Generic over the mutex kind: firmware uses `CriticalSectionRawMutex` so
/// the table is safe against the bus interrupt, host tests use
/// `NoopRawMutex`. The store starts out all-empty, so a bus read that
/// arrives before the first sampling iteration still gets a complete,
/// self-consistent report.
pub struct SnapshotStore<M: RawMutex> {
    records: Mutex<M, RefCell<[SlotRecord; MAX_SLOTS]>>,
}

impl<M: RawMutex> SnapshotStore<M> {
    /// Create a store with every slot holding the empty record.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Mutex::new(RefCell::new([SlotRecord::EMPTY; MAX_SLOTS])),
        }
    }

    /// Publish a freshly encoded record for `slot`.
    ///
    /// The record becomes visible to the responder as a whole; readers see
    /// either the previous record or this one, never a mix.
    pub fn publish(&self, slot: usize, record: SlotRecord) {
        debug_assert!(slot < MAX_SLOTS);
        self.records.lock(|records| {
            records.borrow_mut()[slot] = record;
        });
    }

    /// Reset `slot` to the empty record.
    ///
    /// Called on disconnect so the very next bus read already serves the
    /// not-connected representation instead of stale data.
    pub fn clear(&self, slot: usize) {
        self.publish(slot, SlotRecord::EMPTY);
    }

    /// Serialize the full table, slot 0 through 3, into `out`.
    ///
    /// One lock covers the whole report, so the 76 bytes always describe a
    /// single point in time.
    pub fn read_report(&self, out: &mut [u8; REPORT_LEN]) {
        self.records.lock(|records| {
            let records = records.borrow();
            for (slot, record) in records.iter().enumerate() {
                let offset = slot * RECORD_LEN;
                out[offset..offset + RECORD_LEN].copy_from_slice(&record.encode());
            }
        });
    }

    /// Copy of the record currently published for `slot`.
    #[must_use]
    pub fn record(&self, slot: usize) -> SlotRecord {
        debug_assert!(slot < MAX_SLOTS);
        self.records.lock(|records| records.borrow()[slot])
    }
}

impl<M: RawMutex> Default for SnapshotStore<M> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;
    use padlink_proto::RECORD_LEN;

    type TestStore = SnapshotStore<NoopRawMutex>;

    fn record_for(slot: u8, buttons: u16) -> SlotRecord {
        SlotRecord {
            slot,
            connected: true,
            buttons,
            ..SlotRecord::EMPTY
        }
    }

    #[test]
    fn test_initial_report_is_all_empty() {
        let store = TestStore::new();
        let mut report = [0xAAu8; REPORT_LEN];
        store.read_report(&mut report);
        assert_eq!(report, [0u8; REPORT_LEN]);
    }

    #[test]
    fn test_publish_lands_at_slot_offset() {
        let store = TestStore::new();
        store.publish(2, record_for(2, 0xBEEF));

        let mut report = [0u8; REPORT_LEN];
        store.read_report(&mut report);

        let offset = 2 * RECORD_LEN;
        let mut record_bytes = [0u8; RECORD_LEN];
        record_bytes.copy_from_slice(&report[offset..offset + RECORD_LEN]);
        let decoded = SlotRecord::decode(&record_bytes);
        assert_eq!(decoded.buttons, 0xBEEF);
        assert!(decoded.connected);

        // The other three slots stay empty.
        for slot in [0, 1, 3] {
            let offset = slot * RECORD_LEN;
            assert_eq!(&report[offset..offset + RECORD_LEN], &[0u8; RECORD_LEN]);
        }
    }

    #[test]
    fn test_clear_restores_empty_record() {
        let store = TestStore::new();
        store.publish(1, record_for(1, 0xFFFF));
        store.clear(1);
        assert_eq!(store.record(1), SlotRecord::EMPTY);
    }

    #[test]
    fn test_reads_between_publishes_never_mix_iterations() {
        // Two full "sampling iterations" with distinct values everywhere;
        // a report taken at any interleaving point must decode each record
        // to exactly one iteration's values, never a blend.
        let store = TestStore::new();

        let iteration = |n: u16| SlotRecord {
            slot: 0,
            connected: true,
            buttons: n,
            left_x: n as i16,
            left_y: n as i16,
            right_x: n as i16,
            right_y: n as i16,
            left_trigger: n,
            right_trigger: n,
            ..SlotRecord::EMPTY
        };

        store.publish(0, iteration(0x1111));
        for pass in 0..2 {
            let mut report = [0u8; REPORT_LEN];
            store.read_report(&mut report);
            let mut first = [0u8; RECORD_LEN];
            first.copy_from_slice(&report[..RECORD_LEN]);
            let decoded = SlotRecord::decode(&first);
            let expected = if pass == 0 {
                iteration(0x1111)
            } else {
                iteration(0x2222)
            };
            assert_eq!(decoded, expected);
            store.publish(0, iteration(0x2222));
        }
    }
}
