//! Command-line argument parsing.
//!
//! Flags are applied left to right, so `--rfc8259 --no-plus-sign` and
//! `--no-plus-sign --rfc8259` can differ: a preset overwrites everything
//! set before it.

use jsonlex::{LeadingWhitespace, LexerOptions, WhitespaceSet};
use thiserror::Error;

/// Subcommand selected by the first argument.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// One line per token.
    Lex,
    /// Tokens written back verbatim.
    Print,
    /// Validation only.
    Check,
}

impl Command {
    /// Look up a subcommand by its command-line name.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "lex" => Some(Command::Lex),
            "print" => Some(Command::Print),
            "check" => Some(Command::Check),
            _ => None,
        }
    }

    /// Command-line name, as accepted by [`Command::parse`].
    pub fn name(self) -> &'static str {
        match self {
            Command::Lex => "lex",
            Command::Print => "print",
            Command::Check => "check",
        }
    }

    /// Whether the command accepts more than one input file.
    pub fn takes_many_files(self) -> bool {
        matches!(self, Command::Check)
    }
}

/// Options and inputs gathered from the arguments after the subcommand.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub lexer: LexerOptions,
    /// Lex on a worker thread through `TokenStream`.
    pub threaded: bool,
    /// Input paths; `-` is standard input.
    pub files: Vec<String>,
}

/// Invalid command-line arguments.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgError {
    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("invalid value for --max-depth: '{0}' (expected a non-negative integer)")]
    InvalidMaxDepth(String),

    #[error("missing file path")]
    MissingFile,

    #[error("'{command}' takes a single file, got {count}")]
    TooManyFiles { command: &'static str, count: usize },
}

/// Parse everything after the subcommand name.
pub fn parse_options(command: Command, args: &[String]) -> Result<CliOptions, ArgError> {
    let mut options = CliOptions::default();

    for arg in args {
        if arg == "--rfc8259" {
            options.lexer = LexerOptions::rfc8259();
        } else if arg == "--json-whitespace" {
            options.lexer = options.lexer.with_whitespace(WhitespaceSet::JSON);
        } else if arg == "--lex-leading-whitespace" {
            options.lexer = options
                .lexer
                .with_leading_whitespace(LeadingWhitespace::Lex);
        } else if arg == "--no-plus-sign" {
            options.lexer = options.lexer.with_plus_sign(false);
        } else if let Some(value) = arg.strip_prefix("--max-depth=") {
            let depth = value
                .parse::<usize>()
                .map_err(|_| ArgError::InvalidMaxDepth(value.to_string()))?;
            options.lexer = options.lexer.with_max_depth(Some(depth));
        } else if arg == "--threaded" {
            options.threaded = true;
        } else if arg.starts_with('-') && arg != "-" {
            return Err(ArgError::UnknownOption(arg.clone()));
        } else {
            options.files.push(arg.clone());
        }
    }

    match options.files.len() {
        0 => Err(ArgError::MissingFile),
        count if count > 1 && !command.takes_many_files() => Err(ArgError::TooManyFiles {
            command: command.name(),
            count,
        }),
        _ => Ok(options),
    }
}
