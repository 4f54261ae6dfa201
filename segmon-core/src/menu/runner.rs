//! Command menu runner
//!
//! Owns the session context and carries out the actions chosen by the
//! state machine. Called once per foreground-loop pass; drains all pending
//! console input and returns without waiting for more.

use core::fmt::Write;

use segmon_hal::{Address, EepromDevice, SerialRx, SerialTx};

use super::address::ParseAddressError;
use super::line::LineBuffer;
use super::output::Output;
use super::state::{Action, MenuState};
use crate::config::{Layout, LINE_CAPACITY, LINE_TERMINATOR, NEWLINE, PROMPT};
use crate::errors::{ErrorCode, ErrorStore};
use crate::segment::{LookupError, SegmentTable};
use crate::store::ByteStore;

/// Console fault while polling the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SerialError<R, T> {
    /// Receiving failed
    Rx(R),
    /// Transmitting failed
    Tx(T),
}

/// Per-console interaction state
#[derive(Debug, Clone, Default)]
pub struct Session {
    state: MenuState,
    line: LineBuffer<LINE_CAPACITY>,
    pending_character: Option<u8>,
    last_address: Option<Address>,
}

impl Session {
    /// Current menu state
    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Characters typed since the last terminator
    pub fn line(&self) -> &[u8] {
        self.line.as_bytes()
    }

    /// Character chosen by the last `wc`
    pub fn pending_character(&self) -> Option<u8> {
        self.pending_character
    }

    /// Last accepted scratch address
    pub fn last_address(&self) -> Option<Address> {
        self.last_address
    }
}

/// Serial command menu over an EEPROM-resident segment table
pub struct CommandMenu<D, E> {
    store: ByteStore<D>,
    table: SegmentTable,
    errors: E,
    layout: Layout,
    session: Session,
}

impl<D: EepromDevice, E: ErrorStore> CommandMenu<D, E> {
    /// Create a menu at the top level with an empty line
    pub fn new(store: ByteStore<D>, errors: E, layout: Layout) -> Self {
        Self {
            store,
            table: SegmentTable::new(),
            errors,
            layout,
            session: Session::default(),
        }
    }

    /// Current menu state
    pub fn state(&self) -> MenuState {
        self.session.state
    }

    /// Session context
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Get access to the byte store
    pub fn store(&self) -> &ByteStore<D> {
        &self.store
    }

    /// Get mutable access to the byte store
    pub fn store_mut(&mut self) -> &mut ByteStore<D> {
        &mut self.store
    }

    /// Get access to the error store
    pub fn errors(&self) -> &E {
        &self.errors
    }

    /// EEPROM layout in use
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Consume the menu and return its byte store and error store
    pub fn into_parts(self) -> (ByteStore<D>, E) {
        (self.store, self.errors)
    }

    /// Drain pending input and run one foreground-loop pass
    pub fn poll<R: SerialRx, T: SerialTx>(
        &mut self,
        rx: &mut R,
        tx: &mut T,
    ) -> Result<(), SerialError<R::Error, T::Error>> {
        let mut out = Output::new();

        while let Some(byte) = rx.read_char().map_err(SerialError::Rx)? {
            self.feed(byte, &mut out);
            flush_output(&mut out, tx).map_err(SerialError::Tx)?;
        }

        self.service(&mut out);
        flush_output(&mut out, tx).map_err(SerialError::Tx)
    }

    /// Handle one received character
    ///
    /// Ordinary characters are buffered and echoed; once the line is full
    /// they are dropped silently. The terminator dispatches the line.
    pub fn feed(&mut self, byte: u8, out: &mut Output) {
        if byte != LINE_TERMINATOR {
            if self.session.line.push(byte).is_ok() {
                out.push_byte(byte);
            }
            return;
        }

        out.push_str(NEWLINE);
        let line = self.session.line.take();
        self.dispatch(&line, out);

        if self.session.state == MenuState::Top {
            out.push_str(PROMPT);
        }
    }

    /// Once-per-pass work: print the next help page, if one is due
    pub fn service(&mut self, out: &mut Output) {
        let (next, page) = self.session.state.on_pass();
        if let Some(lines) = page {
            for line in lines {
                out.push_str(line);
            }
        }
        self.session.state = next;
    }

    /// Run a completed line through the state machine
    fn dispatch(&mut self, line: &[u8], out: &mut Output) {
        let (next, action) = self.session.state.on_line(line);

        #[cfg(feature = "defmt")]
        defmt::debug!("menu: {} -> {} ({})", self.session.state, next, action);

        self.session.state = next;
        self.perform(action, out);
    }

    fn perform(&mut self, action: Action, out: &mut Output) {
        match action {
            Action::None => {}
            Action::ShowError => {
                let code = self.errors.get_error();
                let _ = write!(out, "  Error = {}{}", code.as_u8(), NEWLINE);
            }
            Action::ClearError => self.errors.clear_error(),
            Action::PromptCharacter => out.push_str("  Enter char to store: "),
            Action::PromptReadAddress => self.prompt_address(out),
            Action::SelectCharacter(character) => {
                self.session.pending_character = Some(character);
                self.prompt_address(out);
            }
            Action::ReadScratch(entry) => match self.resolve(entry) {
                Ok(address) => self.read_scratch(address, out),
                Err(code) => self.errors.report_error(code),
            },
            Action::WriteScratch(entry) => match self.resolve(entry) {
                Ok(address) => self.write_scratch(address),
                Err(code) => self.errors.report_error(code),
            },
        }
    }

    fn prompt_address(&self, out: &mut Output) {
        let _ = write!(
            out,
            "  Enter EEPROM address, {} - {}: ",
            self.layout.first_scratch(),
            self.layout.last_address()
        );
    }

    /// Turn an address entry into a scratch address, before any store access
    fn resolve(&mut self, entry: Result<u32, ParseAddressError>) -> Result<Address, ErrorCode> {
        let address = match entry {
            Ok(value) => self
                .layout
                .check_scratch(value)
                .map_err(|_| ErrorCode::AddressOutOfRange)?,
            Err(ParseAddressError::Overflow) => return Err(ErrorCode::AddressOutOfRange),
            Err(ParseAddressError::Empty | ParseAddressError::InvalidDigit) => {
                return Err(ErrorCode::InvalidNumber)
            }
        };

        self.session.last_address = Some(address);
        Ok(address)
    }

    fn read_scratch(&mut self, address: Address, out: &mut Output) {
        let Ok(character) = self.store.read(address) else {
            self.errors.report_error(ErrorCode::StorageFault);
            return;
        };

        match self.table.lookup(&mut self.store, character) {
            Ok(entry) => {
                out.push_str("Char = ");
                out.push_byte(character);
                out.push_str(NEWLINE);
                let _ = write!(out, "Segment Data = {}{}", entry, NEWLINE);
            }
            Err(LookupError::InvalidCharacter) => {
                self.errors.report_error(ErrorCode::InvalidCharacter)
            }
            Err(LookupError::Storage(_)) => self.errors.report_error(ErrorCode::StorageFault),
        }
    }

    fn write_scratch(&mut self, address: Address) {
        let Some(character) = self.session.pending_character else {
            return;
        };

        if self.store.write(address, character).is_err() {
            self.errors.report_error(ErrorCode::StorageFault);
        }
    }
}

fn flush_output<T: SerialTx>(out: &mut Output, tx: &mut T) -> Result<(), T::Error> {
    if out.is_empty() {
        return Ok(());
    }

    #[cfg(feature = "defmt")]
    if out.is_truncated() {
        defmt::warn!("menu: console output truncated to {} bytes", out.len());
    }

    let result = tx.write_bytes(out.as_bytes());
    out.clear();
    result
}
