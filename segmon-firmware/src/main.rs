//! Segmon - EEPROM and segment-table serial monitor
//!
//! Bring-up firmware for RP2040 boards with a 24xx I2C EEPROM. An operator
//! on the serial console can store characters in the EEPROM scratch area,
//! read them back and see their 16-segment display encoding, taken from the
//! table kept in the low 110 bytes of the same EEPROM.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Uart};
use embassy_time::{Duration, Instant, Ticker};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use segmon_core::config::{Layout, PROMPT};
use segmon_core::errors::{ErrorLatch, ErrorStore};
use segmon_core::menu::CommandMenu;
use segmon_core::segment::provision;
use segmon_core::store::ByteStore;
use segmon_drivers::{At24, Heartbeat};
use segmon_hal::{IoSerial, SerialTx};

mod board;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; board::UART_TX_BUF]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; board::UART_RX_BUF]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Segmon firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Console
    let console = board::console_config();
    let tx_buf = TX_BUF.init([0u8; board::UART_TX_BUF]);
    let rx_buf = RX_BUF.init([0u8; board::UART_RX_BUF]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, board::to_rp_config(&console));
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();
    let mut tx = IoSerial(tx);
    let mut rx = IoSerial(rx);
    info!("UART initialized at {} baud", console.baudrate);

    // EEPROM
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = board::I2C_FREQUENCY;
    let i2c = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, i2c_config);
    let eeprom = At24::with_address(i2c, board::EEPROM_ADDRESS, board::EEPROM_SIZE);
    let mut store = ByteStore::new(eeprom);

    // An absent or unpowered EEPROM never ACKs, so this is where boot hangs
    info!(
        "Checking segment table (EEPROM at 0x{:02x}, {} bytes)",
        board::EEPROM_ADDRESS,
        board::EEPROM_SIZE
    );
    match provision(&mut store) {
        Ok(0) => info!("Segment table verified"),
        Ok(n) => info!("Segment table provisioned ({} bytes rewritten)", n),
        Err(e) => error!("Segment table provisioning failed: {:?}", Debug2Format(&e)),
    }

    let layout = Layout::new(board::EEPROM_SIZE);
    let mut menu = CommandMenu::new(store, ErrorLatch::new(), layout);

    let led = Output::new(p.PIN_25, Level::Low);
    let mut heartbeat = Heartbeat::new(led, board::HEARTBEAT_PERIOD_MS, Instant::now().as_millis());

    if let Err(e) = tx.write_str(PROMPT) {
        warn!("Console write failed: {:?}", Debug2Format(&e));
    }

    info!(
        "Command menu ready (scratch {}..={})",
        layout.first_scratch(),
        layout.last_address()
    );

    let mut ticker = Ticker::every(Duration::from_millis(board::LOOP_INTERVAL_MS));
    let mut reports = 0u16;

    loop {
        ticker.next().await;

        if let Err(e) = menu.poll(&mut rx, &mut tx) {
            warn!("Console error: {:?}", Debug2Format(&e));
        }

        let count = menu.errors().report_count();
        if count > reports {
            warn!("Menu error {} ({} since last clear)", menu.errors().get_error(), count);
        }
        reports = count;

        if let Err(e) = heartbeat.tick(Instant::now().as_millis()) {
            warn!("Heartbeat LED error: {:?}", Debug2Format(&e));
        }
    }
}
