//! checkrun CLI entry point

use checkrun::cli::run::RunOptions;
use checkrun::cli::{Cli, Command};
use clap::Parser;
use std::process;

fn main() {
    let cli = Cli::parse();
    let color = cli.color.map(Into::into);

    // A bare invocation runs the full checker sequence in the current tree
    let command = cli.command.unwrap_or_default();

    let exit_code = match command {
        Command::Run {
            root,
            discovery,
            format,
            only,
            fail_fast,
        } => checkrun::cli::run::run_run(&RunOptions {
            root,
            discovery,
            format,
            only,
            fail_fast,
            color,
        }),
        Command::List { format, root } => checkrun::cli::list::run_list(&root, format),
        Command::Init { force } => match checkrun::cli::init::run_init(force) {
            Ok(result) => {
                if !result.created.is_empty() {
                    println!("Created checkrun.toml. Adjust checkers and discovery to taste.");
                } else if !result.overwritten.is_empty() {
                    println!("Overwrote checkrun.toml.");
                } else {
                    println!("checkrun.toml already exists. Use --force to overwrite.");
                }
                0
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                2
            }
        },
    };

    process::exit(exit_code);
}
