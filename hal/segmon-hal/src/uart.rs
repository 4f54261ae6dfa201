//! UART serial console abstractions
//!
//! Provides the byte-at-a-time receive and string transmit primitives the
//! command menu is driven by.

/// Serial receiver
///
/// Non-blocking: the menu drains whatever is buffered and returns.
pub trait SerialRx {
    /// Error type for receive operations
    type Error;

    /// Take the next received character, if any
    ///
    /// Returns `Ok(None)` when no character is pending.
    fn read_char(&mut self) -> Result<Option<u8>, Self::Error>;
}

/// Serial transmitter
pub trait SerialTx {
    /// Error type for transmit operations
    type Error;

    /// Write raw bytes to the console
    ///
    /// Blocks until all data has been queued or an error occurs.
    fn write_bytes(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Write a string to the console
    fn write_str(&mut self, text: &str) -> Result<(), Self::Error> {
        self.write_bytes(text.as_bytes())
    }

    /// Flush any buffered data
    fn flush(&mut self) -> Result<(), Self::Error>;
}

impl<T: SerialRx + ?Sized> SerialRx for &mut T {
    type Error = T::Error;

    fn read_char(&mut self) -> Result<Option<u8>, Self::Error> {
        T::read_char(self)
    }
}

impl<T: SerialTx + ?Sized> SerialTx for &mut T {
    type Error = T::Error;

    fn write_bytes(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        T::write_bytes(self, data)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        T::flush(self)
    }
}

/// Adapter from `embedded-io` readers and writers to the serial traits
///
/// Wrap a buffered UART half (or anything else implementing the blocking
/// `embedded-io` traits) to hand it to the command menu.
#[cfg(feature = "embedded-io")]
#[derive(Debug)]
pub struct IoSerial<T>(pub T);

#[cfg(feature = "embedded-io")]
impl<T> IoSerial<T> {
    /// Unwrap the inner reader/writer
    pub fn into_inner(self) -> T {
        self.0
    }
}

#[cfg(feature = "embedded-io")]
impl<T: embedded_io::Read + embedded_io::ReadReady> SerialRx for IoSerial<T> {
    type Error = T::Error;

    fn read_char(&mut self) -> Result<Option<u8>, Self::Error> {
        if !self.0.read_ready()? {
            return Ok(None);
        }

        let mut buf = [0u8; 1];
        let n = self.0.read(&mut buf)?;
        Ok(if n == 1 { Some(buf[0]) } else { None })
    }
}

#[cfg(feature = "embedded-io")]
impl<T: embedded_io::Write> SerialTx for IoSerial<T> {
    type Error = T::Error;

    fn write_bytes(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.0.write_all(data)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.0.flush()
    }
}

/// UART configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
    /// Number of data bits (typically 8)
    pub data_bits: DataBits,
    /// Parity mode
    pub parity: Parity,
    /// Number of stop bits
    pub stop_bits: StopBits,
}

impl Default for UartConfig {
    fn default() -> Self {
        Self {
            baudrate: 9600,
            data_bits: DataBits::Eight,
            parity: Parity::None,
            stop_bits: StopBits::One,
        }
    }
}

/// Number of data bits per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataBits {
    Seven,
    Eight,
}

/// Parity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Parity {
    None,
    Even,
    Odd,
}

/// Number of stop bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopBits {
    One,
    Two,
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Recorder {
        written: [u8; 16],
        len: usize,
    }

    impl SerialTx for Recorder {
        type Error = ();

        fn write_bytes(&mut self, data: &[u8]) -> Result<(), ()> {
            let end = self.len + data.len();
            if end > self.written.len() {
                return Err(());
            }
            self.written[self.len..end].copy_from_slice(data);
            self.len = end;
            Ok(())
        }

        fn flush(&mut self) -> Result<(), ()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_str_forwards_bytes() {
        let mut tx = Recorder {
            written: [0; 16],
            len: 0,
        };
        tx.write_str("cmd> ").unwrap();
        assert_eq!(&tx.written[..tx.len], b"cmd> ");
    }

    #[test]
    fn test_write_through_mut_ref() {
        let mut tx = Recorder {
            written: [0; 16],
            len: 0,
        };
        fn send<T: SerialTx>(mut tx: T) -> Result<(), T::Error> {
            tx.write_str("ok")
        }

        send(&mut tx).unwrap();
        assert_eq!(&tx.written[..tx.len], b"ok");
    }

    #[test]
    fn test_default_config_is_8n1() {
        let config = UartConfig::default();
        assert_eq!(config.data_bits, DataBits::Eight);
        assert_eq!(config.parity, Parity::None);
        assert_eq!(config.stop_bits, StopBits::One);
    }

    #[cfg(feature = "embedded-io")]
    mod io_serial {
        use super::super::*;
        use core::convert::Infallible;

        // Buffered UART half: `ready` bytes are available before it runs dry
        struct MockUart {
            input: &'static [u8],
            pos: usize,
            ready: usize,
            output: [u8; 16],
            len: usize,
        }

        impl MockUart {
            fn new(input: &'static [u8], ready: usize) -> Self {
                Self {
                    input,
                    pos: 0,
                    ready,
                    output: [0; 16],
                    len: 0,
                }
            }
        }

        impl embedded_io::ErrorType for MockUart {
            type Error = Infallible;
        }

        impl embedded_io::ReadReady for MockUart {
            fn read_ready(&mut self) -> Result<bool, Infallible> {
                Ok(self.pos < self.ready.min(self.input.len()))
            }
        }

        impl embedded_io::Read for MockUart {
            fn read(&mut self, buf: &mut [u8]) -> Result<usize, Infallible> {
                let n = buf.len().min(self.input.len() - self.pos);
                buf[..n].copy_from_slice(&self.input[self.pos..self.pos + n]);
                self.pos += n;
                Ok(n)
            }
        }

        impl embedded_io::Write for MockUart {
            fn write(&mut self, buf: &[u8]) -> Result<usize, Infallible> {
                let n = buf.len().min(self.output.len() - self.len);
                self.output[self.len..self.len + n].copy_from_slice(&buf[..n]);
                self.len += n;
                Ok(n)
            }

            fn flush(&mut self) -> Result<(), Infallible> {
                Ok(())
            }
        }

        #[test]
        fn test_reads_one_char_at_a_time() {
            let mut serial = IoSerial(MockUart::new(b"rc\r", 3));
            assert_eq!(serial.read_char(), Ok(Some(b'r')));
            assert_eq!(serial.read_char(), Ok(Some(b'c')));
            assert_eq!(serial.read_char(), Ok(Some(b'\r')));
            assert_eq!(serial.read_char(), Ok(None));
        }

        #[test]
        fn test_not_ready_is_none() {
            let mut serial = IoSerial(MockUart::new(b"ge", 0));
            assert_eq!(serial.read_char(), Ok(None));
            assert_eq!(serial.into_inner().pos, 0);
        }

        #[test]
        fn test_writes_through() {
            let mut serial = IoSerial(MockUart::new(b"", 0));
            serial.write_str("cmd> ").unwrap();
            SerialTx::flush(&mut serial).unwrap();

            let uart = serial.into_inner();
            assert_eq!(&uart.output[..uart.len], b"cmd> ");
        }
    }
}
