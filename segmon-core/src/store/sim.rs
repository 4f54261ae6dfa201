//! Simulated EEPROM device
//!
//! RAM-backed stand-in for real EEPROM hardware. Writes take a configurable
//! number of busy polls to commit, which lets host tests exercise the
//! handshake without real timing. Operations issued while a write is still
//! in flight are counted as overlap violations.

use core::convert::Infallible;

use segmon_hal::{Address, EepromDevice};

/// Value of an erased EEPROM cell
pub const ERASED: u8 = 0xFF;

/// Access counters for a simulated device
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SimStats {
    /// Completed `read_byte` calls
    pub reads: u32,
    /// Accepted `begin_write` calls
    pub writes: u32,
    /// Handshake polls that reported a write still in progress
    pub busy_polls: u32,
    /// Reads or writes issued while a write was in flight
    pub overlap_violations: u32,
}

#[derive(Debug, Clone, Copy)]
struct InFlight {
    address: Address,
    value: u8,
    remaining: u32,
}

/// Simulated EEPROM of `N` bytes
#[derive(Debug, Clone)]
pub struct SimEeprom<const N: usize> {
    data: [u8; N],
    latency: u32,
    in_flight: Option<InFlight>,
    stats: SimStats,
}

impl<const N: usize> Default for SimEeprom<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> SimEeprom<N> {
    /// Create an erased device whose writes commit on the first poll
    pub const fn new() -> Self {
        Self::with_latency(0)
    }

    /// Create an erased device whose writes stay busy for `latency` polls
    pub const fn with_latency(latency: u32) -> Self {
        Self {
            data: [ERASED; N],
            latency,
            in_flight: None,
            stats: SimStats {
                reads: 0,
                writes: 0,
                busy_polls: 0,
                overlap_violations: 0,
            },
        }
    }

    /// Preload bytes starting at `offset`, bypassing the handshake
    ///
    /// Bytes that would land past the end of the device are dropped.
    pub fn load(&mut self, offset: usize, bytes: &[u8]) {
        for (i, &byte) in bytes.iter().enumerate() {
            if let Some(cell) = self.data.get_mut(offset + i) {
                *cell = byte;
            }
        }
    }

    /// Raw cell contents, bypassing the handshake and the counters
    pub fn peek(&self, address: Address) -> u8 {
        self.data.get(address as usize).copied().unwrap_or(ERASED)
    }

    /// Check if a write has been accepted but not yet committed
    pub fn write_pending(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Access counters
    pub fn stats(&self) -> SimStats {
        self.stats
    }

    /// Reset the access counters
    pub fn reset_stats(&mut self) {
        self.stats = SimStats::default();
    }

    fn commit(&mut self) {
        if let Some(write) = self.in_flight.take() {
            if let Some(cell) = self.data.get_mut(write.address as usize) {
                *cell = write.value;
            }
        }
    }
}

impl<const N: usize> EepromDevice for SimEeprom<N> {
    type Error = Infallible;

    fn capacity(&self) -> usize {
        N
    }

    fn write_in_progress(&mut self) -> Result<bool, Infallible> {
        let Some(write) = self.in_flight.as_mut() else {
            return Ok(false);
        };

        if write.remaining > 0 {
            write.remaining -= 1;
            self.stats.busy_polls = self.stats.busy_polls.saturating_add(1);
            return Ok(true);
        }

        self.commit();
        Ok(false)
    }

    fn begin_write(&mut self, address: Address, value: u8) -> Result<(), Infallible> {
        if self.in_flight.is_some() {
            self.stats.overlap_violations = self.stats.overlap_violations.saturating_add(1);
            self.commit();
        }

        self.in_flight = Some(InFlight {
            address,
            value,
            remaining: self.latency,
        });
        self.stats.writes = self.stats.writes.saturating_add(1);
        Ok(())
    }

    fn read_byte(&mut self, address: Address) -> Result<u8, Infallible> {
        if self.in_flight.is_some() {
            self.stats.overlap_violations = self.stats.overlap_violations.saturating_add(1);
        }

        self.stats.reads = self.stats.reads.saturating_add(1);
        Ok(self.peek(address))
    }
}
