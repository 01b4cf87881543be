use arith::term::{self, Options};
use clap::Parser;
use std::fs;
use tracing_subscriber::EnvFilter;

/// Lex and parse arithmetic expressions, printing the syntax tree.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat SOURCE as the path of a file to read.
    #[arg(short, long)]
    file: bool,

    /// Print the token stream before the tree.
    #[arg(short, long)]
    tokens: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Expression text, or a path with --file. Omit for an interactive prompt.
    source: Option<String>,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);
    let options = Options {
        show_tokens: args.tokens,
    };

    let contents = match args.source {
        Some(contents) => contents,
        None => return term::main(&options),
    };
    let (name, text) = if args.file {
        match fs::read_to_string(&contents) {
            Ok(text) => {
                let text = text.trim_end_matches(&['\r', '\n'][..]).to_string();
                (contents, text)
            }
            Err(error) => {
                eprintln!("Failed to read '{}': {}", contents, error);
                std::process::exit(1);
            }
        }
    } else {
        ("<arg>".to_string(), contents)
    };
    std::process::exit(term::run_once(&name, &text, &options));
}
