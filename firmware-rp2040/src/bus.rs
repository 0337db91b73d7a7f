//! I2C follower serving the snapshot report to the bus master.
//!
//! The bridge is a read-only telemetry device at a fixed bus address: every
//! externally initiated read transaction returns the full 76-byte report,
//! slot 0 through slot 3. There is no write-side protocol; writes from the
//! master are logged and discarded.
//!
//! The responder runs in the I2C peripheral's interrupt-driven context,
//! asynchronously to the sampling loop. Per read it does one bounded copy
//! out of the [`SnapshotStore`] and hands the bytes to the peripheral;
//! nothing here blocks or allocates.

use defmt::{error, warn};
use embassy_rp::i2c_slave::{Command, I2cSlave, ReadStatus};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use padlink_core::SnapshotStore;
use padlink_proto::REPORT_LEN;

/// Fixed follower address of the bridge.
pub const BUS_ADDRESS: u16 = 0x20;

/// Serve snapshot reports indefinitely.
///
/// Bus errors are logged and never stop service.
pub async fn serve(mut dev: I2cSlave<'_>, store: &SnapshotStore<CriticalSectionRawMutex>) -> ! {
    let mut write_buf = [0u8; 8];
    loop {
        match dev.listen(&mut write_buf).await {
            Ok(Command::Read) => respond(&mut dev, store).await,
            Ok(Command::WriteRead(len)) => {
                // No register map; any preceding write is ignored and the
                // read still gets the full report.
                warn!("ignoring {} command bytes before read", len);
                respond(&mut dev, store).await;
            }
            Ok(Command::Write(len)) => warn!("ignoring {} byte write, device is read-only", len),
            Ok(Command::GeneralCall(len)) => warn!("ignoring {} byte general call", len),
            Err(e) => error!("bus listen error: {:?}", e),
        }
    }
}

/// Answer one read transaction with the current report.
async fn respond(dev: &mut I2cSlave<'_>, store: &SnapshotStore<CriticalSectionRawMutex>) {
    let mut report = [0u8; REPORT_LEN];
    store.read_report(&mut report);

    match dev.respond_and_fill(&report, 0x00).await {
        Ok(ReadStatus::Done) => {}
        Ok(ReadStatus::LeftoverBytes(n)) => warn!("master stopped {} bytes short", n),
        Ok(ReadStatus::NeedMoreBytes) => {}
        Err(e) => error!("bus respond error: {:?}", e),
    }
}
