mod cli;
mod compiler;
mod error_handling;
mod machine;
mod search;

use std::io::BufRead;
use std::process::ExitCode;

use clap::Parser;
use simple_logger::SimpleLogger;

use search::Outcome;

fn main() -> ExitCode {
    SimpleLogger::new().with_level(log::LevelFilter::Warn).env().init().unwrap();

    let args = cli::Cli::parse();

    let text = match std::fs::read_to_string(&args.file) {
        Ok(text) => text,
        Err(error) => {
            eprintln!("{}", compiler::io_error(error, &args.file));
            return ExitCode::FAILURE;
        }
    };

    let table = match compiler::compile(&text, &args.file) {
        Ok(table) => table,
        Err(errors) => {
            for error in errors {
                eprintln!("{}", error);
            }
            return ExitCode::FAILURE;
        }
    };

    if !args.quiet {
        println!("{}", table);
    }

    let depth = args.depth.unwrap_or(search::DEFAULT_DEPTH_LIMIT);
    for line in std::io::stdin().lock().lines() {
        let input = match line {
            Ok(input) => input,
            Err(_) => break,
        };

        match search::recognize_with_limit(&table, &input, depth) {
            Outcome::Accepted(chain) => {
                println!("derivable");
                println!("{}", chain);
            }
            Outcome::Rejected => println!("not derivable"),
            Outcome::Exhausted => println!("search limit reached"),
        }
    }

    return ExitCode::SUCCESS;
}
