//! Serial command menu
//!
//! Line-oriented state machine driven by console input. Characters are
//! collected into a bounded line buffer; a carriage return dispatches the
//! line to the handler for the current state.
//!
//! - [`state::MenuState::on_line`] is the pure transition function
//! - [`runner::CommandMenu`] performs the resulting actions against the
//!   byte store, segment table and error store

pub mod address;
pub mod command;
pub mod line;
pub mod output;
pub mod runner;
pub mod state;

pub use address::{parse_address, ParseAddressError};
pub use command::Command;
pub use line::{CapacityExceeded, LineBuffer};
pub use output::Output;
pub use runner::{CommandMenu, SerialError, Session};
pub use state::{Action, MenuState};
