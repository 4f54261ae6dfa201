//! Top-level console commands

/// Commands accepted at the `cmd>` prompt
///
/// Matching is exact and case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// `?` - show the help pages
    Help,
    /// `ge` - display the current error code
    GetError,
    /// `ce` - clear the current error
    ClearError,
    /// `wc` - write a character to the EEPROM
    WriteChar,
    /// `rc` - read a character from the EEPROM
    ReadChar,
}

impl Command {
    /// All commands, in help-page order
    pub const ALL: [Command; 5] = [
        Command::GetError,
        Command::ClearError,
        Command::WriteChar,
        Command::ReadChar,
        Command::Help,
    ];

    /// Parse a completed input line
    pub fn parse(line: &[u8]) -> Option<Self> {
        Command::ALL
            .into_iter()
            .find(|command| command.keyword().as_bytes() == line)
    }

    /// Text the operator types for this command
    pub fn keyword(self) -> &'static str {
        match self {
            Command::Help => "?",
            Command::GetError => "ge",
            Command::ClearError => "ce",
            Command::WriteChar => "wc",
            Command::ReadChar => "rc",
        }
    }
}
