//! Interactive menu loop over a reader/writer pair.
//!
//! The shell owns the registry and walks an explicit state machine:
//!
//! ```text
//! MainMenu --"1"--> ThankYouPrompt --name--> AmountPrompt --amount--> MainMenu
//!    |  ^               |  ^   |
//!    |  +----"menu"-----+  +---+ "list" / blank
//!    +--"2" report, "3" letters, invalid: stay; "4" / EOF: quit
//! ```

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use tracing::debug;

use crate::core::menu::{MAIN_MENU, MenuCommand, ThankYouInput};
use crate::core::money::Amount;
use crate::core::registry::Registry;
use crate::core::report::render_report;
use crate::io::letters::write_letters;

const THANK_YOU_PROMPT: &str =
    "\nPlease provide a full name to send thank you note to (options 'list' and 'menu'): ";

#[derive(Debug, Clone, PartialEq, Eq)]
enum ShellState {
    MainMenu,
    ThankYouPrompt,
    AmountPrompt { donor: String },
}

pub struct Shell<R, W> {
    registry: Registry,
    letters_dir: PathBuf,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(registry: Registry, letters_dir: PathBuf, input: R, output: W) -> Self {
        Self {
            registry,
            letters_dir,
            input,
            output,
        }
    }

    #[cfg(any(test, feature = "test-support"))]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    #[cfg(any(test, feature = "test-support"))]
    pub fn into_parts(self) -> (Registry, W) {
        (self.registry, self.output)
    }

    /// Run until the user quits or input ends.
    ///
    /// Errors only on I/O failure (console or letter files).
    pub fn run(&mut self) -> Result<()> {
        let mut state = ShellState::MainMenu;
        loop {
            let next = match &state {
                ShellState::MainMenu => self.main_menu()?,
                ShellState::ThankYouPrompt => self.thank_you_prompt()?,
                ShellState::AmountPrompt { donor } => self.amount_prompt(donor)?,
            };
            match next {
                Some(next) => {
                    if next != state {
                        debug!(from = ?state, to = ?next, "shell transition");
                    }
                    state = next;
                }
                None => {
                    debug!("shell finished");
                    return Ok(());
                }
            }
        }
    }

    fn main_menu(&mut self) -> Result<Option<ShellState>> {
        self.prompt(MAIN_MENU)?;
        let Some(line) = self.read_line()? else {
            return Ok(None);
        };
        let next = match MenuCommand::from_input(&line) {
            Some(MenuCommand::SendThankYou) => ShellState::ThankYouPrompt,
            Some(MenuCommand::CreateReport) => {
                let report = render_report(&self.registry);
                write!(self.output, "{report}").context("write report")?;
                ShellState::MainMenu
            }
            Some(MenuCommand::SendLetters) => {
                self.send_letters()?;
                ShellState::MainMenu
            }
            Some(MenuCommand::Quit) => return Ok(None),
            None => {
                debug!(input = %line, "invalid menu selection");
                writeln!(self.output, "Please provide a valid option").context("write output")?;
                ShellState::MainMenu
            }
        };
        Ok(Some(next))
    }

    fn thank_you_prompt(&mut self) -> Result<Option<ShellState>> {
        self.prompt(THANK_YOU_PROMPT)?;
        let Some(line) = self.read_line()? else {
            return Ok(None);
        };
        let next = match ThankYouInput::parse(&line) {
            ThankYouInput::Menu => ShellState::MainMenu,
            ThankYouInput::List => {
                for key in self.registry.list_donors() {
                    writeln!(self.output, "{key}").context("write donor list")?;
                }
                ShellState::ThankYouPrompt
            }
            ThankYouInput::Blank => ShellState::ThankYouPrompt,
            ThankYouInput::Donor(donor) => ShellState::AmountPrompt { donor },
        };
        Ok(Some(next))
    }

    /// Prompt until a valid amount arrives; the registry is untouched before then.
    fn amount_prompt(&mut self, donor: &str) -> Result<Option<ShellState>> {
        let amount = loop {
            self.prompt(&format!("\nHow much did {donor} donate?: "))?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match Amount::parse(&line) {
                Ok(amount) => break amount,
                Err(err) => {
                    debug!(%err, "rejected donation amount");
                    writeln!(self.output, "Please provide a valid amount")
                        .context("write output")?;
                }
            }
        };

        let new_donor = self.registry.get(donor).is_none();
        let record = self.registry.record_donation(donor, amount);
        debug!(
            donor = %record.name,
            new_donor,
            %amount,
            total = %record.total,
            donations = record.donations,
            "donation recorded"
        );
        writeln!(
            self.output,
            "Thank you {}, for your generous donation of ${amount}!",
            record.name
        )
        .context("write output")?;
        Ok(Some(ShellState::MainMenu))
    }

    fn send_letters(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "letters stored at: {}",
            self.letters_dir.display()
        )
        .context("write output")?;
        write_letters(
            &self.registry,
            &self.letters_dir,
            Local::now().naive_local(),
        )
        .context("send letters")?;
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{text}").context("write prompt")?;
        self.output.flush().context("flush output")
    }

    /// Next input line, trimmed; `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = String::new();
        let read = self.input.read_line(&mut buf).context("read input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::test_support::seeded_registry;

    struct Session {
        registry: Registry,
        output: String,
        letters_dir: PathBuf,
        _temp: tempfile::TempDir,
    }

    fn run_session(input: &str) -> Session {
        let temp = tempfile::tempdir().expect("tempdir");
        let letters_dir = temp.path().join("letters");
        let mut shell = Shell::new(
            seeded_registry(),
            letters_dir.clone(),
            input.as_bytes(),
            Vec::new(),
        );
        shell.run().expect("run shell");
        let (registry, output) = shell.into_parts();
        Session {
            registry,
            output: String::from_utf8(output).expect("utf8 output"),
            letters_dir,
            _temp: temp,
        }
    }

    #[test]
    fn quit_prints_nothing_after_menu() {
        let session = run_session("4\n");
        assert_eq!(session.output, MAIN_MENU);
        assert!(!session.letters_dir.exists());
        assert_eq!(session.registry, seeded_registry());
    }

    #[test]
    fn end_of_input_quits() {
        let session = run_session("");
        assert_eq!(session.output, MAIN_MENU);
    }

    #[test]
    fn new_donor_is_created_with_first_donation() {
        let session = run_session("1\nAda Lovelace\n50\n4\n");
        let record = session.registry.get("ada lovelace").expect("created");
        assert_eq!(record.donations, 1);
        assert_eq!(record.total, Amount::from_cents(5000));
        assert_eq!(record.average, Amount::from_cents(5000));
        assert!(
            session
                .output
                .contains("Thank you Ada Lovelace, for your generous donation of $50.00!")
        );
        assert_eq!(session.output.matches(MAIN_MENU).count(), 2);
    }

    #[test]
    fn seeded_donor_matches_case_insensitively() {
        let session = run_session("1\nsteve jobs\n10\n4\n");
        let record = session.registry.get("Steve Jobs").expect("seeded");
        assert_eq!(record.total, Amount::from_cents(101_240));
        assert_eq!(record.donations, 3);
        assert_eq!(record.average, Amount::from_cents(33_747));
        assert_eq!(session.registry.len(), 5);
        assert!(session.output.contains("Thank you Steve Jobs, for"));
    }

    #[test]
    fn invalid_amount_reprompts_without_mutating() {
        let session = run_session("1\nAda\nabc\n");
        assert!(session.output.contains("Please provide a valid amount"));
        assert_eq!(session.output.matches("How much did Ada donate?: ").count(), 2);
        assert_eq!(session.registry, seeded_registry());
    }

    #[test]
    fn invalid_amount_then_valid_amount_records_once() {
        let session = run_session("1\nPaul Allen\nabc\n\n12.5\n4\n");
        let record = session.registry.get("paul allen").expect("seeded");
        assert_eq!(record.donations, 4);
        assert_eq!(record.total, Amount::from_cents(70_842 + 1250));
        assert_eq!(session.output.matches("Please provide a valid amount").count(), 2);
    }

    #[test]
    fn invalid_menu_choice_reprompts() {
        let session = run_session("9\nhello\n4\n");
        assert_eq!(session.output.matches("Please provide a valid option").count(), 2);
        assert_eq!(session.output.matches(MAIN_MENU).count(), 3);
    }

    #[test]
    fn list_prints_keys_and_stays_at_prompt() {
        let session = run_session("1\nLIST\nmenu\n4\n");
        assert!(
            session
                .output
                .contains("STEVE JOBS\nJEFF BEZOS\nBILL GATES\nMARK ZUCKERBERG\nPAUL ALLEN\n")
        );
        assert_eq!(session.output.matches(THANK_YOU_PROMPT).count(), 2);
        assert_eq!(session.registry, seeded_registry());
    }

    #[test]
    fn blank_name_reprompts() {
        let session = run_session("1\n\n   \nMenu\n4\n");
        assert_eq!(session.output.matches(THANK_YOU_PROMPT).count(), 3);
        assert_eq!(session.registry.len(), 5);
    }

    #[test]
    fn report_is_printed_and_menu_returns() {
        let session = run_session("2\n4\n");
        let expected = format!("{MAIN_MENU}{}{MAIN_MENU}", render_report(&seeded_registry()));
        assert_eq!(session.output, expected);
    }

    #[test]
    fn report_reflects_new_donations() {
        let session = run_session("1\nAda\n2000000\n2\n4\n");
        let report_start = session.output.find("Donor Name").expect("report printed");
        let first_row = session.output[report_start..]
            .lines()
            .nth(2)
            .expect("first row");
        assert!(first_row.starts_with("Ada "));
    }

    #[test]
    fn letters_written_for_every_donor() {
        let session = run_session("3\n4\n");
        assert!(session.output.contains(&format!(
            "letters stored at: {}",
            session.letters_dir.display()
        )));
        let files: Vec<String> = fs::read_dir(&session.letters_dir)
            .expect("letters dir")
            .map(|entry| entry.expect("entry").file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(files.len(), 5);
        assert!(files.iter().all(|name| name.ends_with(".txt")));
        assert!(files.iter().any(|name| name.starts_with("Mark Zuckerberg")));
    }

    #[test]
    fn letter_write_failure_propagates() {
        let temp = tempfile::tempdir().expect("tempdir");
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "").expect("write blocker");
        let mut shell = Shell::new(seeded_registry(), blocker, "3\n4\n".as_bytes(), Vec::new());
        let err = shell.run().expect_err("letters dir is a file");
        assert!(format!("{err:#}").contains("send letters"));
    }

    #[test]
    fn registry_accessor_reflects_session_state() {
        let mut shell = Shell::new(
            Registry::new(),
            PathBuf::from("unused"),
            "1\nAda\n5\n".as_bytes(),
            Vec::new(),
        );
        shell.run().expect("run shell");
        assert_eq!(shell.registry().len(), 1);
    }
}
