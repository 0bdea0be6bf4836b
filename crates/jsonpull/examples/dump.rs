//! Parses one value from a file named on the command line, or from standard
//! input when no argument is given, and dumps the resulting tree.

use std::process::ExitCode;

use jsonpull::{ByteSource, Parser, ParserOptions};

fn main() -> ExitCode {
    let parsed = match std::env::args_os().nth(1) {
        Some(path) => match ByteSource::from_path(&path) {
            Ok(source) => Parser::new(source, ParserOptions::default()).parse(),
            Err(err) => {
                eprintln!("error: cannot open {}: {err}", path.to_string_lossy());
                return ExitCode::FAILURE;
            }
        },
        None => Parser::new(ByteSource::from_stdin(), ParserOptions::default()).parse(),
    };
    match parsed {
        Ok(value) => {
            println!("{value:#?}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
