//! `jsonlex` command-line interface.

use jsonlexc::cli::{parse_options, Command};
use jsonlexc::commands::run;

fn main() {
    jsonlexc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let name = args[1].as_str();
    if matches!(name, "help" | "--help" | "-h") {
        print_usage();
        return;
    }

    let Some(command) = Command::parse(name) else {
        eprintln!("error: unknown command '{name}'");
        eprintln!();
        print_usage();
        std::process::exit(1);
    };

    let options = match parse_options(command, &args[2..]) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("Usage: jsonlex {} <file> [options]", command.name());
            std::process::exit(1);
        }
    };

    match run(command, &options) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("jsonlex - streaming JSON lexer");
    eprintln!();
    eprintln!("Usage: jsonlex <command> <file> [options]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  lex <file>          Print one line per token: offset, kind, value");
    eprintln!("  print <file>        Write the tokens back out verbatim");
    eprintln!("  check <files...>    Validate each file; exit 1 if any is invalid");
    eprintln!();
    eprintln!("A file of '-' reads standard input.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --rfc8259                 RFC 8259 whitespace, leading whitespace, no '+'");
    eprintln!("  --json-whitespace         Treat tab, LF and CR as whitespace too");
    eprintln!("  --lex-leading-whitespace  Lex input that starts with whitespace");
    eprintln!("  --no-plus-sign            Reject a leading '+' on numbers");
    eprintln!("  --max-depth=<n>           Limit container nesting to n levels");
    eprintln!("  --threaded                Lex on a worker thread (lex, print)");
    eprintln!();
    eprintln!("Set JSONLEX_LOG (or RUST_LOG) to enable logging, e.g. JSONLEX_LOG=jsonlex_core=trace");
}
