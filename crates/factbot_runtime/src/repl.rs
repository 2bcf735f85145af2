//! The interactive query loop.
//!
//! Reads one query per line, tokenizes it, dispatches it against the
//! pattern table, and prints each answer line. Lookup failures are caught
//! here, per-query, and the session continues; termination (the `bye`
//! pattern, Ctrl+C, or Ctrl+D) ends the loop gracefully.

use factbot_dispatch::{PatternTable, Response, dispatch};
use factbot_foundation::{Error, Result};
use factbot_matcher::tokenize;

use crate::editor::{LineEditor, ReadResult, RustylineEditor};

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// The pattern-action table queries dispatch against.
    table: PatternTable,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Query prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(table: PatternTable) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, table))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(editor: E, table: PatternTable) -> Self {
        Self {
            editor,
            table,
            show_banner: true,
            prompt: "Your query? ".to_string(),
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the query prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Runs the query loop.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally. Lookup failures
    /// never end the loop; they are reported and the next query is read.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            println!("Welcome to the wikipedia chatbot!\n");
        }

        loop {
            if !self.read_answer_print()? {
                break;
            }
        }

        println!("\nSo long!\n");
        Ok(())
    }

    /// Executes one read-answer-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_answer_print(&mut self) -> Result<bool> {
        println!();
        let line = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            // Ctrl+C and Ctrl+D both end the session.
            ReadResult::Interrupted | ReadResult::Eof => return Ok(false),
        };

        if !line.trim().is_empty() {
            self.editor.add_history(&line);
        }

        match dispatch(&self.table, &tokenize(&line)) {
            Ok(Response::Answers(answers)) => {
                for answer in answers {
                    println!("{answer}");
                }
                Ok(true)
            }
            Ok(Response::Terminate) => Ok(false),
            Err(e) => {
                Self::print_error(&e);
                Ok(true)
            }
        }
    }

    /// Reports a per-query failure without ending the session.
    fn print_error(error: &Error) {
        eprintln!("\x1b[31mError: {error}\x1b[0m");
    }
}
