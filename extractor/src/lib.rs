use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use tagcore::{Notice, Session, TagError};

pub const BANNER: &str = "Tag Extractor. Commands: load-text <PATH>, load-stop-words <PATH>, process, save <PATH>, show, quit";

#[derive(Parser, Debug)]
#[command(name = "tag-extractor", no_binary_name = true)]
struct CommandLine {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load a text file and count its words
    #[command(visible_alias = "text")]
    LoadText {
        #[arg(allow_hyphen_values = true)]
        path: String,
    },
    /// Load a stop words file, one word per line
    #[command(visible_alias = "stop")]
    LoadStopWords {
        #[arg(allow_hyphen_values = true)]
        path: String,
    },
    /// Count the loaded text file again with the current stop words
    Process,
    /// Save the results, one "word: count" per line
    Save {
        #[arg(allow_hyphen_values = true)]
        path: String,
    },
    /// Show the current results
    Show,
    /// Leave the extractor
    #[command(visible_alias = "exit")]
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Drives a `Session` from text commands and renders the display area to `out`.
pub struct Console<W: Write> {
    session: Session,
    out: W,
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Self { session: Session::new(), out }
    }

    pub fn session(&self) -> &Session { &self.session }

    pub fn into_output(self) -> W { self.out }

    /// Run commands until `quit` or end of input.
    pub fn run<R: BufRead>(&mut self, mut input: R) -> Result<()> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 { break; }
            let flow = match std::str::from_utf8(&buf) {
                Ok(line) => self.execute(line.trim_end_matches(['\n', '\r']))?,
                Err(err) => {
                    tracing::warn!(error = %err, "skipping command that is not valid UTF-8");
                    writeln!(self.out, "Error: command is not valid UTF-8")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit { break; }
            self.out.flush()?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Execute one command line. Session failures are shown, never returned.
    pub fn execute(&mut self, line: &str) -> Result<Flow> {
        // The command word is split off; the rest of the line is one argument, kept verbatim.
        let line = line.trim();
        if line.is_empty() { return Ok(Flow::Continue); }
        let args: Vec<&str> = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => vec![word, rest.trim_start()],
            None => vec![line],
        };

        let command = match CommandLine::try_parse_from(args) {
            Ok(cli) => cli.command,
            Err(err) => {
                write!(self.out, "{err}")?;
                return Ok(Flow::Continue);
            }
        };
        tracing::debug!(?command, "dispatching command");

        match command {
            Command::LoadText { path } => {
                let loaded = self.session.load_text(&path);
                if self.report(loaded)? {
                    let processed = self.session.process();
                    self.report(processed)?;
                }
            }
            Command::LoadStopWords { path } => {
                let loaded = self.session.load_stop_words(&path);
                self.report(loaded)?;
            }
            Command::Process => {
                let processed = self.session.process();
                self.report(processed)?;
            }
            Command::Save { path } => {
                let saved = self.session.save(&path);
                self.report(saved)?;
            }
            Command::Show => self.show_results()?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Print the outcome of a session command. Returns whether it succeeded.
    fn report(&mut self, outcome: Result<Notice, TagError>) -> Result<bool> {
        match outcome {
            Ok(notice @ Notice::Processed { .. }) => {
                self.show_results()?;
                writeln!(self.out, "{notice}")?;
                Ok(true)
            }
            Ok(notice @ Notice::Saved { .. }) => {
                writeln!(self.out)?;
                writeln!(self.out, "{notice}")?;
                Ok(true)
            }
            Ok(notice) => {
                writeln!(self.out, "{notice}")?;
                Ok(true)
            }
            Err(err) => {
                tracing::warn!(category = err.category(), error = %err, "command failed");
                writeln!(self.out, "Error [{}]: {err}", err.category())?;
                Ok(false)
            }
        }
    }

    fn show_results(&mut self) -> Result<()> {
        match self.session.display_lines() {
            Some(lines) => {
                for line in lines {
                    writeln!(self.out, "{line}")?;
                }
            }
            None => writeln!(self.out, "No results yet.")?,
        }
        Ok(())
    }
}
