//! fib - file bundler
//!
//! Walks a source directory, selects files by language and exclusion rules,
//! and concatenates them into a single output file.

use clap::Parser;

mod bundler;
mod catalog;
mod cli;
mod commands;
mod error;
mod path_utils;
mod progress;
mod prompt;
mod response_file;
mod selection;

use cli::{Cli, Commands};

fn main() {
    let args = match response_file::expand_args(std::env::args_os()) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    let cli = Cli::parse_from(args);

    let result = match cli.command {
        Commands::Bundle(args) => commands::bundle::run(args, cli.verbose).map(|_| ()),
        Commands::CreateRsp => commands::create_rsp::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
