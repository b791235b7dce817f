//! Interactive shell.
//!
//! Reads one command per line, runs it to completion and prints the
//! outcome. A failing command prints its error and the loop carries on.

use std::io::Write;

use mtgdb_core::{Error, Result};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::format::{render_columns, render_detail, render_rows};
use crate::session::{Session, CARD_CATALOG_ALIASES, INVENTORY_ALIASES};

const PROMPT: &str = "mtg> ";
const SQLITE_PROGRAM: &str = "sqlite3";

/// A parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `query <instruction>`
    Query(String),
    /// `show <row>`
    Show(String),
    /// `cols <entity>`
    Cols(String),
    /// `sql <db alias>`
    Sql(String),
    /// `entities`
    Entities,
    /// `help`
    Help,
    /// `exit` / `quit`
    Exit,
    /// Blank line or comment
    Empty,
    /// Anything else
    Unknown(String),
}

impl Command {
    /// Parse one input line.
    ///
    /// A leading `%` and `m_` prefix are accepted, so `%m_query cards` and
    /// `query cards` mean the same.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Command::Empty;
        }

        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };
        let name = name.trim_start_matches('%');
        let name = name.strip_prefix("m_").unwrap_or(name);

        match name {
            "query" | "q" => Command::Query(rest.to_string()),
            "show" | "s" => Command::Show(rest.to_string()),
            "cols" => Command::Cols(rest.to_string()),
            "sql" => Command::Sql(rest.to_string()),
            "entities" => Command::Entities,
            "help" | "?" => Command::Help,
            "exit" | "quit" => Command::Exit,
            _ => Command::Unknown(name.to_string()),
        }
    }
}

/// What the loop should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit,
}

/// The shell around one session
pub struct Shell {
    session: Session,
    sqlite_program: String,
}

impl Shell {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            sqlite_program: SQLITE_PROGRAM.to_string(),
        }
    }

    /// Program launched by `sql`, `sqlite3` unless overridden
    pub fn with_sqlite_program(mut self, program: impl Into<String>) -> Self {
        self.sqlite_program = program.into();
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Run one line, printing results and errors to `out`.
    ///
    /// Only a failure to write to `out` is returned as an error.
    pub fn run_line<W: Write>(&mut self, line: &str, out: &mut W) -> std::io::Result<Control> {
        let command = Command::parse(line);
        match self.dispatch(&command, out) {
            Ok(control) => Ok(control),
            Err(Error::Io(e)) => Err(e),
            Err(e) => {
                tracing::debug!(error = %e, ?command, "command failed");
                writeln!(out, "Error: {}", e)?;
                Ok(Control::Continue)
            }
        }
    }

    /// Run every command in order, stopping early on `exit`.
    pub fn run_commands<W, I, S>(&mut self, commands: I, out: &mut W) -> std::io::Result<Control>
    where
        W: Write,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for command in commands {
            writeln!(out, "{}{}", PROMPT, command.as_ref())?;
            if self.run_line(command.as_ref(), out)? == Control::Exit {
                return Ok(Control::Exit);
            }
        }
        Ok(Control::Continue)
    }

    /// Read commands from the terminal until `exit` or end of input.
    pub fn run_interactive(&mut self) -> Result<()> {
        let mut editor = DefaultEditor::new().map_err(readline_err)?;
        let stdout = std::io::stdout();

        loop {
            match editor.readline(PROMPT) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        if let Err(e) = editor.add_history_entry(line.as_str()) {
                            tracing::debug!(error = %e, "could not record history entry");
                        }
                    }
                    let mut out = stdout.lock();
                    if self.run_line(&line, &mut out)? == Control::Exit {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => break,
                Err(e) => return Err(readline_err(e)),
            }
        }
        Ok(())
    }

    fn dispatch<W: Write>(&mut self, command: &Command, out: &mut W) -> Result<Control> {
        match command {
            Command::Query(instruction) => {
                let output = self.session.query(instruction)?;
                writeln!(out, "{}", render_rows(output.columns, output.rows))?;
            }
            Command::Show(row) => {
                let detail = self.session.show(row)?;
                writeln!(out, "{}", render_detail(&detail))?;
            }
            Command::Cols(entity) => {
                let listing = self.session.columns(entity)?;
                writeln!(out, "{}", render_columns(&listing))?;
            }
            Command::Sql(alias) => {
                let path = self.session.database_path(alias)?;
                tracing::info!(program = %self.sqlite_program, path = %path.display(), "starting sql shell");
                let status = std::process::Command::new(&self.sqlite_program)
                    .arg(&path)
                    .status()
                    .map_err(|e| Error::ExternalCommand {
                        program: self.sqlite_program.clone(),
                        message: e.to_string(),
                    })?;
                if !status.success() {
                    writeln!(out, "{} exited with {}", self.sqlite_program, status)?;
                }
            }
            Command::Entities => {
                for entity in self.session.catalog().entities() {
                    writeln!(out, "{} ({})", entity.name(), entity.database())?;
                }
            }
            Command::Help => writeln!(out, "{}", help_text())?,
            Command::Exit => return Ok(Control::Exit),
            Command::Empty => {}
            Command::Unknown(name) => {
                writeln!(out, "Unknown command: {} (try `help`)", name)?;
            }
        }
        Ok(Control::Continue)
    }
}

fn readline_err(err: ReadlineError) -> Error {
    match err {
        ReadlineError::Io(e) => Error::Io(e),
        other => Error::Io(std::io::Error::other(other)),
    }
}

/// Command reference printed by `help`
pub fn help_text() -> String {
    format!(
        "Available commands:\n\n  \
         query <entity> [w:<where>|l:<limit>|g:<group_by>|o:<order_by>...]\n      \
         Select rows of an entity with optional filters.\n  \
         show <row_number>\n      \
         Print details about a row of the previous query.\n  \
         cols <entity>\n      \
         Print available and shown columns of an entity.\n  \
         sql <db_alias>\n      \
         Open a sqlite3 shell on a database ({} | {}).\n  \
         entities\n      \
         List known entities and their database.\n  \
         help\n      \
         This help message.\n  \
         exit\n      \
         Leave the shell.",
        CARD_CATALOG_ALIASES.join(", "),
        INVENTORY_ALIASES.join(", "),
    )
}
