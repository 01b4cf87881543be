extern crate ansi_term;
extern crate linefeed;
use crate::lang::{self, Error};
use ansi_term::Style;
use linefeed::{Interface, ReadResult};

#[derive(Debug, Default, Clone)]
pub struct Options {
    pub show_tokens: bool,
}

pub fn main(options: &Options) {
    if let Err(error) = main_loop(options) {
        eprintln!("{}", error);
    }
}

fn main_loop(options: &Options) -> std::io::Result<()> {
    let interface = Interface::new("arith")?;
    interface.set_prompt("arith > ")?;
    loop {
        let string = match interface.read_line()? {
            ReadResult::Input(string) => string,
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        if string.trim().is_empty() {
            continue;
        }
        interface.add_history_unique(string.clone());
        match evaluate("<stdin>", &string, options) {
            Ok(s) => interface.write_fmt(format_args!("{}\n", s))?,
            Err(error) => interface.write_fmt(format_args!("{}\n", decorate_error(&error)))?,
        }
    }
    Ok(())
}

/// Run one source buffer and print the outcome. Returns the process exit code.
pub fn run_once(source_name: &str, source_text: &str, options: &Options) -> i32 {
    match evaluate(source_name, source_text, options) {
        Ok(s) => {
            println!("{}", s);
            0
        }
        Err(error) => {
            eprintln!("{}", decorate_error(&error));
            1
        }
    }
}

/// The text shown for a successful run: the token listing when requested,
/// then the tree.
pub fn evaluate(source_name: &str, source_text: &str, options: &Options) -> Result<String, Error> {
    let tokens = lang::lex(source_name, source_text)?;
    let mut out = String::new();
    if options.show_tokens {
        out.push_str(&format!("{}\n", tokens));
    }
    out.push_str(&lang::parse(&tokens)?.to_string());
    Ok(out)
}

fn decorate_error(error: &Error) -> String {
    Style::new().bold().paint(error.to_string()).to_string()
}
