use crate::app::commands::{parse_input, Command};
use crate::app::handlers;
use crate::domain::ports::{Clock, Storage};
use crate::domain::AddressBook;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";
pub const FAREWELL: &str = "Good bye!";
pub const INVALID_COMMAND: &str = "Invalid command.";

/// What the loop should do after one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Continue(String),
    Exit(String),
    /// Blank line; nothing to print.
    Empty,
}

/// Holds the session's address book and routes each input line to a handler.
pub struct Assistant<S: Storage, K: Clock> {
    book: AddressBook,
    storage: S,
    clock: K,
    window_days: u32,
}

impl<S: Storage, K: Clock> Assistant<S, K> {
    pub fn new(book: AddressBook, storage: S, clock: K, window_days: u32) -> Self {
        Self {
            book,
            storage,
            clock,
            window_days,
        }
    }

    /// Starts a session from whatever `storage` has saved.
    pub fn load(storage: S, clock: K, window_days: u32) -> Result<Self> {
        let book = storage.load()?;
        Ok(Self::new(book, storage, clock, window_days))
    }

    pub fn save(&self) -> Result<()> {
        self.storage.save(&self.book)
    }

    /// Runs one command. Command failures become the reply text; they never
    /// end the session.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let Some((token, args)) = parse_input(line) else {
            return Reply::Empty;
        };

        let command = Command::from_token(&token);
        tracing::debug!(?command, args = args.len(), "dispatching");

        let result = match command {
            Command::Exit => return Reply::Exit(FAREWELL.to_string()),
            Command::Unknown => {
                tracing::debug!(%token, "unknown command");
                return Reply::Continue(INVALID_COMMAND.to_string());
            }
            Command::Hello => Ok("How can I help you?".to_string()),
            Command::Add => handlers::add_contact(&args, &mut self.book),
            Command::Change => handlers::change_contact(&args, &mut self.book),
            Command::Delete => handlers::remove_contact(&args, &mut self.book),
            Command::Phone => handlers::show_phone(&args, &self.book),
            Command::All => handlers::show_all(&self.book),
            Command::AddBirthday => handlers::add_birthday(&args, &mut self.book),
            Command::ShowBirthday => handlers::show_birthday(&args, &self.book),
            Command::Birthdays => {
                handlers::birthdays(&self.book, self.clock.today(), self.window_days)
            }
        };

        match result {
            Ok(text) => Reply::Continue(text),
            Err(e) => {
                // the reply already tells the user; only surprises reach the default filter
                if e.is_recoverable() {
                    tracing::debug!("{:?} failed: {} (Category: {:?})", command, e, e.category());
                } else {
                    tracing::warn!(
                        "⚠️ {:?} failed: {} (Category: {:?})",
                        command,
                        e,
                        e.category()
                    );
                }
                Reply::Continue(e.user_friendly_message())
            }
        }
    }

    /// Reads commands until `close`/`exit` or end of input, then saves.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<()> {
        writeln!(output, "{}", WELCOME)?;

        let mut line = String::new();
        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                tracing::info!("End of input, closing session");
                writeln!(output)?;
                break;
            }

            match self.handle_line(&line) {
                Reply::Continue(text) => writeln!(output, "{}", text)?,
                Reply::Empty => {}
                Reply::Exit(text) => {
                    writeln!(output, "{}", text)?;
                    break;
                }
            }
        }

        self.save()
    }
}
