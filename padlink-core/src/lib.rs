//! Platform-agnostic core of the padlink controller-to-I2C bridge.
//!
//! Up to four wireless controllers are seated in fixed slots, sampled every
//! loop iteration, and packed into fixed-layout records that a bus master
//! reads on demand. This crate holds everything that does not touch a
//! peripheral:
//!
//! - [`registry`]: seat assignment ([`SlotRegistry`])
//! - [`encoder`]: reading-to-record transform ([`encode_slot`])
//! - [`store`]: the record table shared with the bus responder
//!   ([`SnapshotStore`])
//! - [`bridge`]: per-iteration orchestration ([`Sampler`])
//! - [`stack`]: the wireless-stack seam ([`ControllerStack`],
//!   [`ControllerEvent`], [`ControllerTable`])
//!
//! # Concurrency
//!
//! The sampling loop is single-threaded and cooperative; the bus responder
//! runs in an interrupt-like context owned by the bus peripheral. The two
//! meet only at the [`SnapshotStore`], which publishes whole records under a
//! mutex chosen by the platform (`CriticalSectionRawMutex` on target,
//! `NoopRawMutex` in host tests). Reports are therefore always complete and
//! self-consistent, including before the first sampling iteration.
//!
//! # Example
//!
//! ```
//! use embassy_sync::blocking_mutex::raw::NoopRawMutex;
//! use padlink_core::{ControllerEvent, Sampler, SnapshotStore};
//! use padlink_proto::REPORT_LEN;
//!
//! let store: SnapshotStore<NoopRawMutex> = SnapshotStore::new();
//! let mut sampler: Sampler<'_, u8, _> = Sampler::new(&store);
//!
//! let slot = sampler
//!     .handle_event(ControllerEvent::Connected { handle: 7, category: 3 })
//!     .unwrap();
//! assert_eq!(slot, 0);
//!
//! // The bus responder can read a complete report at any time.
//! let mut report = [0u8; REPORT_LEN];
//! store.read_report(&mut report);
//! ```
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Enable defmt formatting (for embedded logging)
//!
//! # No-std Support
//!
//! This crate is `#![no_std]` by default and uses no heap allocations.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod bridge;
pub mod encoder;
pub mod registry;
pub mod stack;
pub mod store;

// Re-export main types at crate root
pub use bridge::Sampler;
pub use encoder::encode_slot;
pub use registry::{RegistryError, SlotRegistry};
pub use stack::{ControllerEvent, ControllerStack, ControllerTable, MAX_HANDLES};
pub use store::SnapshotStore;

// Wire-format types the core API surfaces
pub use padlink_proto::{ControllerReading, SlotRecord, MAX_SLOTS, RECORD_LEN, REPORT_LEN};
