//! UART link to the radio co-processor.
//!
//! The radio co-processor owns pairing and the wireless controller stack;
//! it streams [`LinkFrame`]s over UART1 (115200 baud, 8N1). This module
//! pumps those frames into a channel for the sampling task.
//!
//! # Pins
//!
//! - GPIO 8: TX (unused, reserved for a future backchannel)
//! - GPIO 9: RX (co-processor frame input)

use defmt::warn;
use embassy_rp::uart::{Async, UartRx};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use padlink_proto::{LinkFrame, LinkParser};

/// Link baud rate.
pub const LINK_BAUDRATE: u32 = 115_200;

/// Channel carrying decoded frames from the link pump to the sampling task.
pub type LinkChannel = Channel<CriticalSectionRawMutex, LinkFrame, 16>;

/// UART-fed source of co-processor link frames.
pub struct UartLink<'d> {
    rx: UartRx<'d, Async>,
    parser: LinkParser,
}

impl<'d> UartLink<'d> {
    /// Create a link pump from the given UART receiver.
    #[must_use]
    pub fn new(rx: UartRx<'d, Async>) -> Self {
        Self {
            rx,
            parser: LinkParser::new(),
        }
    }

    /// Pump frames into `frames` indefinitely.
    ///
    /// Decode errors are logged and skipped; the parser resynchronizes on
    /// the next sync byte. UART errors are logged and reading continues.
    pub async fn run(mut self, frames: &'static LinkChannel) -> ! {
        let mut byte = [0u8; 1];
        loop {
            if let Err(e) = self.rx.read(&mut byte).await {
                warn!("link uart error: {:?}", e);
                continue;
            }
            match self.parser.feed(byte[0]) {
                Ok(Some(frame)) => frames.send(frame).await,
                Ok(None) => {}
                Err(e) => warn!("link frame error: {:?}", e),
            }
        }
    }
}
