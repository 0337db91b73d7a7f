#![no_std]
#![no_main]

use defmt::{debug, info, warn};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::i2c;
use embassy_rp::i2c_slave::{self, I2cSlave};
use embassy_rp::peripherals::{I2C1, UART1};
use embassy_rp::uart::{Config as UartConfig, Uart};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_time::{Duration, Ticker};
use padlink_rp2040::{
    bus, ControllerEvent, ControllerTable, LinkChannel, Sampler, SnapshotStore, UartLink,
    BUS_ADDRESS, LINK_BAUDRATE,
};

#[cfg(feature = "dev-panic")]
use panic_probe as _;
#[cfg(feature = "prod-panic")]
use panic_reset as _;

bind_interrupts!(struct Irqs {
    UART1_IRQ => embassy_rp::uart::InterruptHandler<UART1>;
    I2C1_IRQ => i2c::InterruptHandler<I2C1>;
});

/// Snapshot store shared between the sampling task and the bus responder.
/// All-empty at startup, so a bus read before the first sampling iteration
/// already gets a complete report.
static SNAPSHOT: SnapshotStore<CriticalSectionRawMutex> = SnapshotStore::new();

/// Decoded co-processor frames, link task to sampling task.
static FRAMES: LinkChannel = LinkChannel::new();

/// Sampling cadence.
const SAMPLE_PERIOD: Duration = Duration::from_millis(2);

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("padlink bridge starting...");

    let p = embassy_rp::init(embassy_rp::config::Config::default());

    // --- Co-processor link (UART1) ---
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = LINK_BAUDRATE;

    let uart = Uart::new(
        p.UART1,
        p.PIN_8, // TX
        p.PIN_9, // RX
        Irqs,
        p.DMA_CH0,
        p.DMA_CH1,
        uart_config,
    );
    let (_tx, rx) = uart.split();
    let uart_link = UartLink::new(rx);

    // --- Bus follower (I2C1) ---
    let mut i2c_config = i2c_slave::Config::default();
    i2c_config.addr = BUS_ADDRESS;

    let i2c_dev = I2cSlave::new(
        p.I2C1,
        p.PIN_3, // SCL
        p.PIN_2, // SDA
        Irqs,
        i2c_config,
    );

    spawner.spawn(link_task(uart_link)).unwrap();
    spawner.spawn(sample_task()).unwrap();
    spawner.spawn(bus_task(i2c_dev)).unwrap();

    info!("padlink bridge initialized, waiting for pads...");
}

/// Link task - decodes co-processor frames into the channel.
#[embassy_executor::task]
async fn link_task(link: UartLink<'static>) {
    link.run(&FRAMES).await
}

/// Sampling task - seats pads and refreshes the snapshot store.
#[embassy_executor::task]
async fn sample_task() {
    let mut table = ControllerTable::new();
    let mut sampler: Sampler<'static, u8, CriticalSectionRawMutex> = Sampler::new(&SNAPSHOT);
    let mut ticker = Ticker::every(SAMPLE_PERIOD);
    let mut iterations: u32 = 0;

    loop {
        // Drain everything the link delivered since the last iteration.
        while let Ok(frame) = FRAMES.try_receive() {
            let Some(event) = table.apply(&frame) else {
                continue;
            };
            match sampler.handle_event(event) {
                Ok(slot) => match event {
                    ControllerEvent::Connected { handle, category } => {
                        info!(
                            "pad connected: handle={} category={} slot={}",
                            handle, category, slot
                        );
                    }
                    ControllerEvent::Disconnected { handle } => {
                        info!("pad disconnected: handle={} slot={}", handle, slot);
                    }
                },
                // Non-fatal; the pad is simply not tracked.
                Err(e) => warn!("registry: {:?}", e),
            }
        }

        sampler.sample(&table);

        iterations = iterations.wrapping_add(1);
        if iterations % 500 == 0 {
            debug!("sampling: {} pads seated", sampler.registry().occupied_count());
        }

        ticker.next().await;
    }
}

/// Bus task - answers I2C reads with the current 76-byte report.
#[embassy_executor::task]
async fn bus_task(dev: I2cSlave<'static>) {
    bus::serve(dev, &SNAPSHOT).await
}
