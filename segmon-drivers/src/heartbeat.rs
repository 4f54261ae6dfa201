//! Heartbeat LED
//!
//! Blinks a status LED from the foreground loop so a hung loop is visible
//! on the board.

use embedded_hal::digital::StatefulOutputPin;

/// Toggles a pin every `period_ms`
pub struct Heartbeat<P> {
    pin: P,
    period_ms: u64,
    next_toggle_ms: u64,
}

impl<P: StatefulOutputPin> Heartbeat<P> {
    /// Create a heartbeat; the first toggle is due one period after `now_ms`
    pub fn new(pin: P, period_ms: u64, now_ms: u64) -> Self {
        Self {
            pin,
            period_ms,
            next_toggle_ms: now_ms.saturating_add(period_ms),
        }
    }

    /// Advance to `now_ms`, toggling the LED if a period has elapsed
    ///
    /// Returns `true` if the LED was toggled. Missed periods are not made
    /// up; the next toggle is scheduled one period after `now_ms`.
    pub fn tick(&mut self, now_ms: u64) -> Result<bool, P::Error> {
        if now_ms < self.next_toggle_ms {
            return Ok(false);
        }

        self.pin.toggle()?;
        self.next_toggle_ms = now_ms.saturating_add(self.period_ms);
        Ok(true)
    }

    /// Check if the LED is currently lit
    pub fn is_on(&mut self) -> Result<bool, P::Error> {
        self.pin.is_set_high()
    }

    /// Release the pin
    pub fn release(self) -> P {
        self.pin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::{ErrorType, OutputPin};

    struct MockPin {
        high: bool,
        toggles: u32,
    }

    impl ErrorType for MockPin {
        type Error = Infallible;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.high = false;
            self.toggles += 1;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.high = true;
            self.toggles += 1;
            Ok(())
        }
    }

    impl StatefulOutputPin for MockPin {
        fn is_set_high(&mut self) -> Result<bool, Infallible> {
            Ok(self.high)
        }

        fn is_set_low(&mut self) -> Result<bool, Infallible> {
            Ok(!self.high)
        }
    }

    fn pin() -> MockPin {
        MockPin {
            high: false,
            toggles: 0,
        }
    }

    #[test]
    fn test_toggles_once_per_period() {
        let mut heartbeat = Heartbeat::new(pin(), 500, 0);

        assert!(!heartbeat.tick(10).unwrap());
        assert!(!heartbeat.tick(499).unwrap());
        assert!(heartbeat.tick(500).unwrap());
        assert!(heartbeat.is_on().unwrap());

        assert!(!heartbeat.tick(990).unwrap());
        assert!(heartbeat.tick(1000).unwrap());
        assert!(!heartbeat.is_on().unwrap());
    }

    #[test]
    fn test_missed_periods_not_replayed() {
        let mut heartbeat = Heartbeat::new(pin(), 100, 0);

        assert!(heartbeat.tick(1000).unwrap());
        assert!(!heartbeat.tick(1050).unwrap());
        assert!(heartbeat.tick(1100).unwrap());
        assert_eq!(heartbeat.release().toggles, 2);
    }
}
