//! Menu state machine definition
//!
//! The next state is a function of the current state and the completed
//! line alone. Side effects are described by the returned [`Action`] and
//! carried out by the runner, so every transition can be checked without a
//! byte store or a serial port.

use super::address::{parse_address, ParseAddressError};
use super::command::Command;

/// Help text, one page per foreground-loop pass
const HELP_PAGE_1: &[&str] = &[
    "  Commands are:\n\r",
    "  ge  - Display error code\n\r",
    "  ce  - Clear current error\n\r",
];
const HELP_PAGE_2: &[&str] = &[
    "  wc - Write character to EEPROM\n\r",
    "  rc - Read character from EEPROM\n\r",
];
const HELP_PAGE_3: &[&str] = &["  ?   - Display this help menu\n\r"];

/// Menu states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuState {
    /// Waiting for a command at the `cmd>` prompt
    #[default]
    Top,
    /// Help requested; first page goes out on the next pass
    HelpPage1,
    /// Second help page pending
    HelpPage2,
    /// Last help page pending
    HelpPage3,
    /// `wc`: waiting for the character to store
    AwaitCharForWrite,
    /// `rc`: waiting for the address to read
    AwaitReadAddress,
    /// `wc`: character chosen, waiting for the address to write
    AwaitWriteAddress,
}

/// Work requested by a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Nothing to do
    None,
    /// Print the current error code
    ShowError,
    /// Clear the current error
    ClearError,
    /// Prompt for the character to store
    PromptCharacter,
    /// Prompt for an address to read
    PromptReadAddress,
    /// Remember the character to store and prompt for its address
    SelectCharacter(u8),
    /// Read the scratch byte at the entered address and show its pattern
    ReadScratch(Result<u32, ParseAddressError>),
    /// Write the pending character at the entered address
    WriteScratch(Result<u32, ParseAddressError>),
}

impl MenuState {
    /// Process a completed input line
    ///
    /// This is the core transition logic. An empty line abandons any
    /// pending exchange.
    pub fn on_line(self, line: &[u8]) -> (Self, Action) {
        use MenuState::*;

        match self {
            Top => match Command::parse(line) {
                Some(Command::Help) => (HelpPage1, Action::None),
                Some(Command::GetError) => (Top, Action::ShowError),
                Some(Command::ClearError) => (Top, Action::ClearError),
                Some(Command::WriteChar) => (AwaitCharForWrite, Action::PromptCharacter),
                Some(Command::ReadChar) => (AwaitReadAddress, Action::PromptReadAddress),
                None => (Top, Action::None),
            },

            AwaitCharForWrite => match line.first() {
                Some(&character) => (AwaitWriteAddress, Action::SelectCharacter(character)),
                None => (Top, Action::None),
            },

            AwaitReadAddress if line.is_empty() => (Top, Action::None),
            AwaitReadAddress => (Top, Action::ReadScratch(parse_address(line))),

            AwaitWriteAddress if line.is_empty() => (Top, Action::None),
            AwaitWriteAddress => (Top, Action::WriteScratch(parse_address(line))),

            // A line typed before the help pages finished cancels them
            HelpPage1 | HelpPage2 | HelpPage3 => (Top, Action::None),
        }
    }

    /// Advance once per foreground-loop pass
    ///
    /// Returns the next state and the help page to print, if any.
    pub fn on_pass(self) -> (Self, Option<&'static [&'static str]>) {
        match self {
            MenuState::HelpPage1 => (MenuState::HelpPage2, Some(HELP_PAGE_1)),
            MenuState::HelpPage2 => (MenuState::HelpPage3, Some(HELP_PAGE_2)),
            MenuState::HelpPage3 => (MenuState::Top, Some(HELP_PAGE_3)),
            _ => (self, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_from_top() {
        assert_eq!(
            MenuState::Top.on_line(b"?"),
            (MenuState::HelpPage1, Action::None)
        );
    }

    #[test]
    fn test_help_pages_sequence() {
        let (state, page) = MenuState::HelpPage1.on_pass();
        assert_eq!(state, MenuState::HelpPage2);
        assert_eq!(page.unwrap().len(), 3);

        let (state, page) = state.on_pass();
        assert_eq!(state, MenuState::HelpPage3);
        assert_eq!(page.unwrap().len(), 2);

        let (state, page) = state.on_pass();
        assert_eq!(state, MenuState::Top);
        assert_eq!(page.unwrap().len(), 1);

        assert_eq!(state.on_pass(), (MenuState::Top, None));
    }

    #[test]
    fn test_help_text_wording() {
        let (_, page) = MenuState::HelpPage2.on_pass();
        assert_eq!(
            page,
            Some(
                &[
                    "  wc - Write character to EEPROM\n\r",
                    "  rc - Read character from EEPROM\n\r",
                ][..]
            )
        );

        let (_, page) = MenuState::HelpPage1.on_pass();
        assert_eq!(page.map(|lines| lines[1]), Some("  ge  - Display error code\n\r"));
    }

    #[test]
    fn test_error_commands_stay_at_top() {
        assert_eq!(
            MenuState::Top.on_line(b"ge"),
            (MenuState::Top, Action::ShowError)
        );
        assert_eq!(
            MenuState::Top.on_line(b"ce"),
            (MenuState::Top, Action::ClearError)
        );
    }

    #[test]
    fn test_unknown_and_empty_are_noops() {
        assert_eq!(MenuState::Top.on_line(b""), (MenuState::Top, Action::None));
        assert_eq!(
            MenuState::Top.on_line(b"dump"),
            (MenuState::Top, Action::None)
        );
    }

    #[test]
    fn test_write_flow() {
        let (state, action) = MenuState::Top.on_line(b"wc");
        assert_eq!(state, MenuState::AwaitCharForWrite);
        assert_eq!(action, Action::PromptCharacter);

        // Only the first character of the line is kept
        let (state, action) = state.on_line(b"XYZ");
        assert_eq!(state, MenuState::AwaitWriteAddress);
        assert_eq!(action, Action::SelectCharacter(b'X'));

        let (state, action) = state.on_line(b"200");
        assert_eq!(state, MenuState::Top);
        assert_eq!(action, Action::WriteScratch(Ok(200)));
    }

    #[test]
    fn test_read_flow() {
        let (state, action) = MenuState::Top.on_line(b"rc");
        assert_eq!(state, MenuState::AwaitReadAddress);
        assert_eq!(action, Action::PromptReadAddress);

        let (state, action) = state.on_line(b"300");
        assert_eq!(state, MenuState::Top);
        assert_eq!(action, Action::ReadScratch(Ok(300)));
    }

    #[test]
    fn test_malformed_address_is_explicit() {
        assert_eq!(
            MenuState::AwaitReadAddress.on_line(b"12x"),
            (
                MenuState::Top,
                Action::ReadScratch(Err(ParseAddressError::InvalidDigit))
            )
        );
    }

    #[test]
    fn test_empty_line_abandons_exchange() {
        let states = [
            MenuState::AwaitCharForWrite,
            MenuState::AwaitReadAddress,
            MenuState::AwaitWriteAddress,
        ];

        for state in states {
            assert_eq!(state.on_line(b""), (MenuState::Top, Action::None));
        }
    }

    #[test]
    fn test_line_during_help_cancels() {
        assert_eq!(
            MenuState::HelpPage2.on_line(b"ge"),
            (MenuState::Top, Action::None)
        );
    }
}
