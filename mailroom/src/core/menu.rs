//! Parsing of menu selections and thank-you prompt input.

use crate::core::registry::normalize_name;

/// Main menu text, printed before each selection.
pub const MAIN_MENU: &str = "\nSelect an option number:\
\n1. Send a Thank You\
\n2. Create a Report\
\n3. Send letters to all donors\
\n4. Quit\n";

/// Main menu options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    SendThankYou,
    CreateReport,
    SendLetters,
    Quit,
}

impl MenuCommand {
    /// Map a menu selection to a command; `None` for anything unrecognized.
    pub fn from_input(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::SendThankYou),
            "2" => Some(Self::CreateReport),
            "3" => Some(Self::SendLetters),
            "4" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// What the user typed at the thank-you prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThankYouInput {
    /// `menu`: return to the main menu.
    Menu,
    /// `list`: print all donor keys.
    List,
    /// Empty line. Deliberately not a donor name: the prompt repeats rather
    /// than creating a donor with an empty name.
    Blank,
    /// Anything else is a donor name.
    Donor(String),
}

impl ThankYouInput {
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Self::Blank;
        }
        // Keywords use the same uppercasing as registry keys.
        match normalize_name(trimmed).as_str() {
            "MENU" => Self::Menu,
            "LIST" => Self::List,
            _ => Self::Donor(trimmed.to_string()),
        }
    }
}
