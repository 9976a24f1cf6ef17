use super::menu::{LoopStep, MenuChoice};
use crate::render::Renderer;
use anyhow::{Context, Result};
use diary_core::{EntryKey, EntryStore, StoreError};
use std::io::{BufRead, Write};
use tracing::{debug, warn};

/// One answer read at a prompt.
enum Reply {
    Line(String),
    NotUtf8,
    Closed,
}

/// The interactive menu: show the choices, read one, run it, repeat.
///
/// Input and output are plain `BufRead`/`Write` handles so the same loop runs against the
/// terminal or against scripted input.
pub struct CommandLoop<'a, R, W> {
    store: &'a EntryStore,
    input: R,
    output: W,
    renderer: Renderer,
}

impl<'a, R: BufRead, W: Write> CommandLoop<'a, R, W> {
    pub fn new(store: &'a EntryStore, input: R, output: W, renderer: Renderer) -> Self {
        Self {
            store,
            input,
            output,
            renderer,
        }
    }

    /// Runs until the user picks "Exit" or the input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.renderer.print_menu(&mut self.output)?;
            let line = match self.ask("Enter your choice: ")? {
                Reply::Line(line) => line,
                // Not text, so not one of the numbers either.
                Reply::NotUtf8 => String::new(),
                Reply::Closed => {
                    debug!("input closed at menu");
                    return Ok(());
                }
            };

            let step = match MenuChoice::from_input(&line) {
                Some(choice) => {
                    debug!(?choice, "dispatching");
                    self.dispatch(choice)?
                }
                None => {
                    self.renderer.print_error(&mut self.output, "Invalid choice!")?;
                    LoopStep::Continue
                }
            };

            if step == LoopStep::Exit {
                return Ok(());
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<LoopStep> {
        match choice {
            MenuChoice::Create => self.create_entry(),
            MenuChoice::View => self.view_entry(),
            MenuChoice::Edit => self.edit_entry(),
            MenuChoice::Delete => self.delete_entry(),
            MenuChoice::List => self.list_entries(),
            MenuChoice::Exit => Ok(LoopStep::Exit),
        }
    }

    fn create_entry(&mut self) -> Result<LoopStep> {
        let date = match self.ask_date()? {
            Reply::Line(date) => date,
            Reply::NotUtf8 => return self.reject_malformed(),
            Reply::Closed => return Ok(LoopStep::Exit),
        };
        match self.store.exists(&date) {
            Ok(true) => {
                self.renderer
                    .print_error(&mut self.output, "Entry already exists for this date.")?;
                return Ok(LoopStep::Continue);
            }
            Ok(false) => {}
            Err(e) => {
                self.report(&e)?;
                return Ok(LoopStep::Continue);
            }
        }

        let content = match self.ask("Write your diary entry: ")? {
            Reply::Line(content) => content,
            Reply::NotUtf8 => return self.reject_malformed(),
            Reply::Closed => return Ok(LoopStep::Exit),
        };
        match self.store.create(&date, &content) {
            Ok(_) => self
                .renderer
                .print_success(&mut self.output, "Diary entry saved successfully!")?,
            Err(e) => self.report(&e)?,
        }
        Ok(LoopStep::Continue)
    }

    fn view_entry(&mut self) -> Result<LoopStep> {
        let date = match self.ask_date()? {
            Reply::Line(date) => date,
            Reply::NotUtf8 => return self.reject_malformed(),
            Reply::Closed => return Ok(LoopStep::Exit),
        };
        match self.store.read(&date) {
            Ok(content) => self.renderer.print_entry(
                &mut self.output,
                &format!("Diary Entry for {date}:"),
                &content,
            )?,
            Err(e) => self.report(&e)?,
        }
        Ok(LoopStep::Continue)
    }

    fn edit_entry(&mut self) -> Result<LoopStep> {
        let date = match self.ask_date()? {
            Reply::Line(date) => date,
            Reply::NotUtf8 => return self.reject_malformed(),
            Reply::Closed => return Ok(LoopStep::Exit),
        };
        let current = match self.store.read(&date) {
            Ok(content) => content,
            Err(e) => {
                self.report(&e)?;
                return Ok(LoopStep::Continue);
            }
        };
        self.renderer
            .print_entry(&mut self.output, "Current entry:", &current)?;

        let content = match self.ask("Enter new content to append: ")? {
            Reply::Line(content) => content,
            Reply::NotUtf8 => return self.reject_malformed(),
            Reply::Closed => return Ok(LoopStep::Exit),
        };
        match self.store.append(&date, &content) {
            Ok(()) => self
                .renderer
                .print_success(&mut self.output, "Entry updated successfully!")?,
            Err(e) => self.report(&e)?,
        }
        Ok(LoopStep::Continue)
    }

    fn delete_entry(&mut self) -> Result<LoopStep> {
        let date = match self.ask_date()? {
            Reply::Line(date) => date,
            Reply::NotUtf8 => return self.reject_malformed(),
            Reply::Closed => return Ok(LoopStep::Exit),
        };
        match self.store.delete(&date) {
            Ok(true) => self
                .renderer
                .print_success(&mut self.output, &format!("Diary entry for {date} deleted."))?,
            Ok(false) => self
                .renderer
                .print_error(&mut self.output, "No entry found for this date.")?,
            Err(e) => self.report(&e)?,
        }
        Ok(LoopStep::Continue)
    }

    fn list_entries(&mut self) -> Result<LoopStep> {
        match self.store.list() {
            Ok(keys) => self.renderer.print_entry_list(&mut self.output, &keys)?,
            Err(e) => self.report(&e)?,
        }
        Ok(LoopStep::Continue)
    }

    /// Prompts for a date. A blank answer means today.
    fn ask_date(&mut self) -> Result<Reply> {
        let today = EntryKey::today();
        let prompt = format!("Enter date (YYYY-MM-DD) [{today}]: ");
        Ok(match self.ask(&prompt)? {
            Reply::Line(answer) if answer.trim().is_empty() => Reply::Line(today.to_string()),
            Reply::Line(answer) => Reply::Line(answer.trim().to_string()),
            other => other,
        })
    }

    /// Shows `prompt` and reads one line.
    fn ask(&mut self, prompt: &str) -> Result<Reply> {
        self.renderer.print_prompt(&mut self.output, prompt)?;

        let mut buf = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut buf)
            .context("reading from input")?;
        if read == 0 {
            writeln!(self.output)?;
            return Ok(Reply::Closed);
        }

        let line = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        match std::str::from_utf8(line) {
            Ok(line) => Ok(Reply::Line(line.to_string())),
            Err(e) => {
                debug!(error = %e, "discarding input line");
                Ok(Reply::NotUtf8)
            }
        }
    }

    /// A line that isn't text cancels the current operation; nothing is written.
    fn reject_malformed(&mut self) -> Result<LoopStep> {
        self.renderer
            .print_error(&mut self.output, "Input is not valid UTF-8 text.")?;
        Ok(LoopStep::Continue)
    }

    fn report(&mut self, error: &StoreError) -> Result<()> {
        let message = match error {
            StoreError::AlreadyExists { .. } => "Entry already exists for this date.".to_string(),
            StoreError::NotFound { .. } => "No entry found for this date.".to_string(),
            StoreError::InvalidKey { reason, .. } => format!("Invalid date: {reason}."),
            StoreError::Io { .. } => {
                warn!(error = %error, "store operation failed");
                format!("Could not access the diary: {error}")
            }
        };
        self.renderer.print_error(&mut self.output, &message)?;
        Ok(())
    }
}
