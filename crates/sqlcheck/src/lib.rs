//! Command-line front end for `sqlcheck-core`.
//!
//! Queries come from arguments, a file (one per line) or an interactive
//! prompt; each one is checked independently and its verdict is written as
//! text or as one JSON object per line.

use std::io::{self, BufRead, Write};
use std::path::Path;

use serde::Serialize;
use sqlcheck_core::{Token, TokenKind, check, tokenize};
use tracing::debug;

/// How verdicts are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per query.
    Json,
}

/// A token as shown by `--tokens`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenReport {
    pub kind: String,
    pub lexeme: String,
}

impl From<&Token> for TokenReport {
    fn from(token: &Token) -> Self {
        let kind = match token.kind {
            TokenKind::Keyword(kw) => kw.as_str().to_string(),
            kind => format!("{kind:?}"),
        };
        Self {
            kind,
            lexeme: token.lexeme.clone(),
        }
    }
}

/// The outcome of checking one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub query: String,
    pub ok: bool,
    pub diagnostics: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens: Option<Vec<TokenReport>>,
}

impl Report {
    /// Checks `query`, optionally keeping its token stream.
    ///
    /// Tokens are only listed when the query tokenizes; a lexical error shows
    /// up in the diagnostics instead.
    #[must_use]
    pub fn new(query: &str, with_tokens: bool) -> Self {
        let tokens = if with_tokens {
            tokenize(query).ok().map(|tokens| {
                tokens
                    .iter()
                    .filter(|t| !t.is_eof())
                    .map(TokenReport::from)
                    .collect()
            })
        } else {
            None
        };

        let result = check(query);
        Self {
            query: query.to_string(),
            ok: result.ok,
            diagnostics: result.diagnostics,
            tokens,
        }
    }
}

/// Checks queries and writes their verdicts to `out`.
pub struct Session<W> {
    out: W,
    format: OutputFormat,
    show_tokens: bool,
    checked: usize,
    failures: usize,
}

impl<W: Write> Session<W> {
    /// Creates a session that writes verdicts to `out`.
    #[must_use]
    pub const fn new(out: W, format: OutputFormat, show_tokens: bool) -> Self {
        Self {
            out,
            format,
            show_tokens,
            checked: 0,
            failures: 0,
        }
    }

    /// Checks one query and writes its verdict. Returns whether it was valid.
    ///
    /// # Errors
    ///
    /// Returns an error if writing the verdict fails.
    pub fn check(&mut self, query: &str) -> io::Result<bool> {
        let report = Report::new(query, self.show_tokens);
        debug!(query, ok = report.ok, "checked query");

        self.checked += 1;
        if !report.ok {
            self.failures += 1;
        }

        match self.format {
            OutputFormat::Text => self.write_text(&report)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, &report)?;
                writeln!(self.out)?;
            }
        }
        self.out.flush()?;
        Ok(report.ok)
    }

    fn write_text(&mut self, report: &Report) -> io::Result<()> {
        writeln!(self.out, "Validating: {}", report.query)?;
        if let Some(tokens) = &report.tokens {
            writeln!(self.out, "Tokens:")?;
            for token in tokens {
                writeln!(self.out, "  {} '{}'", token.kind, token.lexeme)?;
            }
        }
        if report.ok {
            writeln!(self.out, "SQL query is valid.")
        } else {
            for diagnostic in &report.diagnostics {
                writeln!(self.out, "Error: {diagnostic}")?;
            }
            Ok(())
        }
    }

    /// Number of queries checked so far.
    #[must_use]
    pub const fn checked(&self) -> usize {
        self.checked
    }

    /// Number of rejected queries so far.
    #[must_use]
    pub const fn failures(&self) -> usize {
        self.failures
    }

    /// Consumes the session, returning the writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Prompts for queries on `input` until `exit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading a line or writing output fails.
    pub fn run_interactive<R: BufRead>(&mut self, mut input: R) -> io::Result<()> {
        if self.format == OutputFormat::Text {
            writeln!(self.out, "Enter SQL query (or 'exit' to quit):")?;
        }

        let mut line = String::new();
        loop {
            if self.format == OutputFormat::Text {
                write!(self.out, "> ")?;
                self.out.flush()?;
            }

            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }
            let query = line.trim_end_matches(['\n', '\r']);
            if is_exit(query) {
                break;
            }

            self.check(query)?;
            if self.format == OutputFormat::Text {
                writeln!(self.out)?;
            }
        }
        Ok(())
    }
}

/// Returns true if `line` asks the interactive loop to stop.
#[must_use]
pub fn is_exit(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case("exit")
}

/// Reads one query per non-blank line of `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn read_queries(path: &Path) -> io::Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}
