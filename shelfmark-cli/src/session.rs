//! Line-oriented session loop

use anyhow::Result;
use clap::Parser;
use shelfmark_core::Catalog;
use std::io::{BufRead, Write};

use crate::commands::{self, Flow, SessionLine};

/// An interactive session owning the catalog for its lifetime
pub struct Session {
    catalog: Catalog,
    interactive: bool,
}

impl Session {
    pub fn new(catalog: Catalog, interactive: bool) -> Self {
        Self {
            catalog,
            interactive,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Read commands until `quit` or end of input
    pub fn run(&mut self, mut input: impl BufRead, out: &mut dyn Write) -> Result<()> {
        let mut buf = Vec::new();
        loop {
            if self.interactive {
                write!(out, "> ")?;
                out.flush()?;
            }

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            let line = match std::str::from_utf8(&buf) {
                Ok(line) => line,
                Err(e) => {
                    tracing::debug!(error = %e, "rejected session line");
                    writeln!(out, "Could not read line: input is not valid UTF-8")?;
                    continue;
                }
            };

            if let Flow::Quit = self.handle_line(line, out)? {
                break;
            }
        }

        Ok(())
    }

    /// Parse and execute a single line.
    ///
    /// Malformed input is reported to `out` and the session continues; only
    /// write failures are returned as errors.
    pub fn handle_line(&mut self, line: &str, out: &mut dyn Write) -> Result<Flow> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(Flow::Continue);
        }

        let words = match shell_words::split(line) {
            Ok(words) => words,
            Err(e) => {
                writeln!(out, "Could not parse line: {}", e)?;
                return Ok(Flow::Continue);
            }
        };

        match SessionLine::try_parse_from(words) {
            Ok(parsed) => commands::execute(parsed.command, &mut self.catalog, out),
            Err(e) => {
                tracing::debug!(kind = ?e.kind(), "rejected session line");
                write!(out, "{}", e)?;
                Ok(Flow::Continue)
            }
        }
    }
}
