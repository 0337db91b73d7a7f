//! Wire formats for the padlink controller-to-I2C bridge.
//!
//! Two byte layouts live here, shared by the bridge core, the firmware, and
//! the host-side tests:
//!
//! - **Slot records** ([`SlotRecord`]): the fixed 19-byte snapshot of one
//!   controller seat that the bridge serves to the bus master. Four records
//!   in slot order make up the 76-byte bus report ([`REPORT_LEN`]).
//! - **Link frames** ([`LinkFrame`]): the framed binary protocol the radio
//!   co-processor uses to deliver connect/disconnect notifications and
//!   controller state ([`ControllerReading`]) to the bridge.
//!
//! All multi-byte fields are MSB-first; the byte-order helpers in [`bytes`]
//! are the single place that defines it.
//!
//! # Example
//!
//! ```
//! use padlink_proto::SlotRecord;
//!
//! let record = SlotRecord {
//!     slot: 0,
//!     connected: true,
//!     category: 3,
//!     buttons: 0x1234,
//!     ..SlotRecord::EMPTY
//! };
//! let bytes = record.encode();
//! assert_eq!(bytes[0], 0x13); // slot 0, connected, type 3
//! assert_eq!(SlotRecord::decode(&bytes), record);
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

pub mod bytes;
pub mod crc;
pub mod link;
pub mod record;
pub mod types;

// Re-export types at crate root for convenience
pub use crc::calculate_crc8;
pub use link::{LinkError, LinkFrame, LinkParser, LINK_SYNC, MAX_FRAME_LEN};
pub use record::{pack_header, SlotRecord, MAX_SLOTS, RECORD_LEN, REPORT_LEN, RESERVED_LEN};
pub use types::ControllerReading;
