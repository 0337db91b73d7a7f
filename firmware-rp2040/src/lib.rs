//! Wireless controller to I2C telemetry bridge for RP2040.
//!
//! Up to four wireless gamepads, paired and managed by a radio
//! co-processor, are continuously sampled and served as a fixed 76-byte
//! report to an I2C bus master.
//!
//! # Hardware Configuration
//!
//! | Function | GPIO | Description                        |
//! |----------|------|------------------------------------|
//! | UART1 RX | 9    | Co-processor link frame input      |
//! | UART1 TX | 8    | Reserved (link backchannel)        |
//! | I2C1 SCL | 3    | Bus master clock                   |
//! | I2C1 SDA | 2    | Bus master data                    |
//!
//! # Architecture
//!
//! Three Embassy tasks:
//!
//! - **Link Task**: reads UART bytes, decodes co-processor frames, pushes
//!   them into a channel
//! - **Sampling Task**: drains the channel into the slot registry and the
//!   controller table, then refreshes the snapshot store every 2 ms
//! - **Bus Task**: answers I2C read transactions with the current report
//!
//! The sampling task and the bus task meet only at the
//! [`SnapshotStore`](padlink_core::SnapshotStore), which publishes whole
//! records under a critical-section mutex, so the master never sees a torn
//! record.
//!
//! # Features
//!
//! - **`dev-panic`** (default): Use `panic-probe` for development (prints panic info via RTT)
//! - **`prod-panic`**: Use `panic-reset` for production (silent watchdog reset)

#![no_std]

// Ensure mutually exclusive panic strategies
#[cfg(all(feature = "dev-panic", feature = "prod-panic"))]
compile_error!("Cannot enable both `dev-panic` and `prod-panic` features");

// Re-export core types for convenience
pub use padlink_core::{
    encode_slot, ControllerEvent, ControllerReading, ControllerStack, ControllerTable,
    RegistryError, Sampler, SlotRecord, SlotRegistry, SnapshotStore, MAX_SLOTS, RECORD_LEN,
    REPORT_LEN,
};

pub mod bus;
pub mod link;

pub use bus::{serve, BUS_ADDRESS};
pub use link::{LinkChannel, UartLink, LINK_BAUDRATE};
