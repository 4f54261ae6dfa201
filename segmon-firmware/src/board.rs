//! Board wiring for a Raspberry Pi Pico with a 24LC32 on I2C0
//!
//! Pin assignments:
//! - UART0 console: GPIO0 TX, GPIO1 RX
//! - I2C0 EEPROM: GPIO4 SDA, GPIO5 SCL
//! - Heartbeat LED: GPIO25 (on-board)

use embassy_rp::uart;
use segmon_hal::uart::{DataBits, Parity, StopBits};
use segmon_hal::UartConfig;

/// EEPROM size in bytes (24LC32)
pub const EEPROM_SIZE: usize = 4096;

/// EEPROM bus address
pub const EEPROM_ADDRESS: u8 = segmon_drivers::eeprom::DEFAULT_ADDRESS;

/// I2C clock in Hz (Fast mode)
pub const I2C_FREQUENCY: u32 = 400_000;

/// Foreground loop period
pub const LOOP_INTERVAL_MS: u64 = 10;

/// Heartbeat LED half-period
pub const HEARTBEAT_PERIOD_MS: u64 = 500;

/// UART buffer sizes
pub const UART_TX_BUF: usize = 256;
pub const UART_RX_BUF: usize = 64;

/// Console settings
pub fn console_config() -> UartConfig {
    UartConfig::default()
}

/// Convert console settings to the embassy-rp UART configuration
pub fn to_rp_config(config: &UartConfig) -> uart::Config {
    let mut cfg = uart::Config::default();
    cfg.baudrate = config.baudrate;
    cfg.data_bits = match config.data_bits {
        DataBits::Seven => uart::DataBits::DataBits7,
        DataBits::Eight => uart::DataBits::DataBits8,
    };
    cfg.parity = match config.parity {
        Parity::None => uart::Parity::ParityNone,
        Parity::Even => uart::Parity::ParityEven,
        Parity::Odd => uart::Parity::ParityOdd,
    };
    cfg.stop_bits = match config.stop_bits {
        StopBits::One => uart::StopBits::STOP1,
        StopBits::Two => uart::StopBits::STOP2,
    };
    cfg
}
