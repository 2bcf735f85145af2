//! Factbot CLI entry point.

use std::env;
use std::process::ExitCode;
use std::sync::Arc;

use factbot_dispatch::{Response, dispatch};
use factbot_matcher::tokenize;
use factbot_runtime::{Repl, standard_table};
use factbot_wiki::WikiClient;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    query: Vec<String>,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    for arg in args.into_iter().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            word => config.query.push(word.to_string()),
        }
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("factbot {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let lookup = Arc::new(WikiClient::new());
    let table = standard_table(lookup);

    // One-shot mode: trailing words form a single query.
    if !config.query.is_empty() {
        let tokens = tokenize(&config.query.join(" "));
        if let Response::Answers(answers) = dispatch(&table, &tokens)? {
            for answer in answers {
                println!("{answer}");
            }
        }
        return Ok(());
    }

    // Interactive query loop.
    Repl::new(table)?.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mFactbot\x1b[0m - Wikipedia fact-query chatbot

\x1b[1mUSAGE:\x1b[0m
    factbot [OPTIONS] [QUERY...]

\x1b[1mARGUMENTS:\x1b[0m
    [QUERY...]    Words of a single query to answer and exit

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information

\x1b[1mEXAMPLES:\x1b[0m
    factbot                                    Start the interactive loop
    factbot when was ada lovelace born         Answer one query and exit
    factbot what is the polar radius of venus  Answer one query and exit

\x1b[1mQUERIES:\x1b[0m
    when was <person> born
    what is the polar radius of <planet>
    what is the address of <school>
    what is the elevation of <airport>
    what is the length of runway <designation> at <airport>
    bye                Exit the interactive loop (Ctrl+C / Ctrl+D also work)"
    );
}
