//! Latching error store
//!
//! Holds the most recently reported error until the operator clears it.

use super::{ErrorCode, ErrorStore};

/// Error store that latches the most recent error
#[derive(Debug, Clone, Default)]
pub struct ErrorLatch {
    /// Most recent error since the last clear
    current: ErrorCode,
    /// Errors reported since the last clear
    reports: u16,
}

impl ErrorLatch {
    /// Create an empty error latch
    pub const fn new() -> Self {
        Self {
            current: ErrorCode::NoError,
            reports: 0,
        }
    }

    /// Number of errors reported since the last clear (saturating)
    pub fn report_count(&self) -> u16 {
        self.reports
    }
}

impl ErrorStore for ErrorLatch {
    fn get_error(&self) -> ErrorCode {
        self.current
    }

    fn clear_error(&mut self) {
        self.current = ErrorCode::NoError;
        self.reports = 0;
    }

    fn report_error(&mut self, code: ErrorCode) {
        if !code.is_error() {
            return;
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("error reported: {}", code);

        self.current = code;
        self.reports = self.reports.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_clear() {
        let latch = ErrorLatch::new();
        assert_eq!(latch.get_error(), ErrorCode::NoError);
        assert_eq!(latch.report_count(), 0);
    }

    #[test]
    fn test_latest_error_wins() {
        let mut latch = ErrorLatch::new();
        latch.report_error(ErrorCode::InvalidCharacter);
        latch.report_error(ErrorCode::AddressOutOfRange);
        assert_eq!(latch.get_error(), ErrorCode::AddressOutOfRange);
        assert_eq!(latch.report_count(), 2);
    }

    #[test]
    fn test_clear_resets() {
        let mut latch = ErrorLatch::new();
        latch.report_error(ErrorCode::InvalidNumber);
        latch.clear_error();
        assert_eq!(latch.get_error(), ErrorCode::NoError);
        assert_eq!(latch.report_count(), 0);
    }

    #[test]
    fn test_reporting_no_error_is_ignored() {
        let mut latch = ErrorLatch::new();
        latch.report_error(ErrorCode::StorageFault);
        latch.report_error(ErrorCode::NoError);
        assert_eq!(latch.get_error(), ErrorCode::StorageFault);
        assert_eq!(latch.report_count(), 1);
    }
}
