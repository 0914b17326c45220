//! Implementations of `lex`, `print` and `check`.
//!
//! Each command returns `true` when the input lexed cleanly. Failures that
//! stop a command outright (unreadable input, broken stdout) come back as a
//! message for `main` to print.

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};

use jsonlex::{
    reprint, validate, Lexer, LexerOptions, PrintSummary, Span, TokenKind, TokenStream,
    VerbatimPrinter,
};
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::cli::{CliOptions, Command};

/// Run `command` over the parsed inputs.
pub fn run(command: Command, options: &CliOptions) -> Result<bool, String> {
    match command {
        Command::Lex => each_file(options, lex_file),
        Command::Print => each_file(options, print_file),
        Command::Check => Ok(check_files(&options.files, options.lexer)),
    }
}

fn each_file(
    options: &CliOptions,
    command: fn(&str, &CliOptions) -> Result<bool, String>,
) -> Result<bool, String> {
    let mut clean = true;
    for path in &options.files {
        clean &= command(path, options)?;
    }
    Ok(clean)
}

// ─── Input ───────────────────────────────────────────────────────

/// Open an input file, or standard input for `-`.
pub fn open_input(path: &str) -> Result<Box<dyn Read>, String> {
    if path == "-" {
        return Ok(Box::new(io::stdin().lock()));
    }
    match File::open(path) {
        Ok(file) => Ok(Box::new(file)),
        Err(e) => Err(describe_read_error(path, &e)),
    }
}

/// Read a whole input file, or standard input for `-`.
pub fn read_input(path: &str) -> Result<Vec<u8>, String> {
    let mut buf = Vec::new();
    open_input(path)?
        .read_to_end(&mut buf)
        .map_err(|e| describe_read_error(path, &e))?;
    Ok(buf)
}

/// Turn an I/O error on `path` into a user-facing message.
pub fn describe_read_error(path: &str, err: &io::Error) -> String {
    match err.kind() {
        io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        _ => format!("error reading '{path}': {err}"),
    }
}

/// Message for an input that stopped on the illegal token at `span`.
///
/// An empty span means the input ended while the document was still open.
pub fn illegal_message(path: &str, span: Span) -> String {
    if span.is_empty() {
        format!("{path}: unexpected end of input at byte {}", span.start)
    } else {
        format!("{path}: illegal input at byte {}", span.start)
    }
}

// ─── lex ─────────────────────────────────────────────────────────

/// Print one line per token of `path` to stdout.
pub fn lex_file(path: &str, options: &CliOptions) -> Result<bool, String> {
    let input = open_input(path)?;
    let mut out = BufWriter::new(io::stdout().lock());
    let illegal = write_token_lines(&mut out, input, options.lexer, options.threaded)
        .map_err(|e| format!("{path}: {e}"))?;
    out.flush().map_err(|e| e.to_string())?;
    if let Some(span) = illegal {
        eprintln!("{}", illegal_message(path, span));
    }
    Ok(illegal.is_none())
}

/// Format one token as `offset kind value`.
pub fn token_line(kind: TokenKind, span: Span, value: &[u8]) -> String {
    format!(
        "{:>8} {:<11} {:?}",
        span.start,
        kind.name(),
        String::from_utf8_lossy(value)
    )
}

/// Write a line per token of `input` to `out`. Returns the span of the
/// illegal token, if one was produced.
pub fn write_token_lines<R: Read, W: Write>(
    out: &mut W,
    mut input: R,
    options: LexerOptions,
    threaded: bool,
) -> jsonlex::Result<Option<Span>> {
    let mut illegal = None;
    if threaded {
        for token in TokenStream::from_reader(input, options)? {
            if token.kind.is_illegal() {
                illegal = Some(token.span);
            }
            writeln!(out, "{}", token_line(token.kind, token.span, token.value()))?;
        }
    } else {
        let mut source = Vec::new();
        input.read_to_end(&mut source)?;
        for token in Lexer::with_options(&source, options) {
            if token.kind.is_illegal() {
                illegal = Some(token.span);
            }
            writeln!(out, "{}", token_line(token.kind, token.span, token.value))?;
        }
    }
    Ok(illegal)
}

// ─── print ───────────────────────────────────────────────────────

/// Write the tokens of `path` verbatim to stdout.
pub fn print_file(path: &str, options: &CliOptions) -> Result<bool, String> {
    let input = open_input(path)?;
    let out = BufWriter::new(io::stdout().lock());
    let summary = print_tokens(out, input, options.lexer, options.threaded)
        .map_err(|e| format!("{path}: {e}"))?;
    debug!(path, tokens = summary.tokens, bytes = summary.bytes, "printed");
    if let Some(span) = summary.illegal {
        eprintln!("{}", illegal_message(path, span));
    }
    Ok(summary.is_clean())
}

/// Reprint `input` into `out`, optionally through a [`TokenStream`].
pub fn print_tokens<R: Read, W: Write>(
    out: W,
    mut input: R,
    options: LexerOptions,
    threaded: bool,
) -> jsonlex::Result<PrintSummary> {
    if !threaded {
        let mut source = Vec::new();
        input.read_to_end(&mut source)?;
        return reprint(&source, options, out);
    }

    let mut printer = VerbatimPrinter::new(out);
    let mut illegal = None;
    for token in TokenStream::from_reader(input, options)? {
        printer.print_value(token.value())?;
        if token.kind.is_illegal() {
            illegal = Some(token.span);
        }
    }
    let summary = PrintSummary {
        tokens: printer.tokens_written(),
        bytes: printer.bytes_written(),
        illegal,
    };
    printer.finish()?;
    Ok(summary)
}

// ─── check ───────────────────────────────────────────────────────

/// Result of checking one input.
#[derive(Debug, PartialEq, Eq)]
pub struct CheckOutcome {
    pub path: String,
    /// Token count, or the reason the input is not a valid document.
    pub result: Result<usize, String>,
}

/// Read and validate one input.
pub fn check_path(path: &str, options: LexerOptions) -> CheckOutcome {
    let result =
        read_input(path).and_then(|source| validate(&source, options).map_err(|e| e.to_string()));
    CheckOutcome {
        path: path.to_string(),
        result,
    }
}

/// Check every input and report each on stdout or stderr. Returns `true`
/// if all of them are valid.
pub fn check_files(paths: &[String], options: LexerOptions) -> bool {
    let outcomes = if paths.len() > 1 {
        check_parallel(paths, options)
    } else {
        paths.iter().map(|path| check_path(path, options)).collect()
    };

    let mut all_valid = true;
    for outcome in &outcomes {
        match &outcome.result {
            Ok(tokens) => println!("{}: ok ({tokens} tokens)", outcome.path),
            Err(reason) => {
                eprintln!("{}: {reason}", outcome.path);
                all_valid = false;
            }
        }
    }
    all_valid
}

/// Check inputs on a scoped rayon pool. Output order follows `paths`.
pub fn check_parallel(paths: &[String], options: LexerOptions) -> Vec<CheckOutcome> {
    rayon::ThreadPoolBuilder::new()
        .build_scoped(rayon::ThreadBuilder::run, |pool| {
            pool.install(|| {
                paths
                    .par_iter()
                    .map(|path| check_path(path, options))
                    .collect::<Vec<_>>()
            })
        })
        .unwrap_or_else(|e| {
            warn!("failed to create thread pool ({e}), checking sequentially");
            paths.iter().map(|path| check_path(path, options)).collect()
        })
}
