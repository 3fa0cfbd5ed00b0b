pub mod commands;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "happycore",
    about = "HappyCore laptop assistant operator CLI",
    long_about = "Query the laptop catalog offline, inspect configuration, and check catalog readiness.",
    after_help = "Examples:\n  happycore ask \"dell laptop under ₹60000\"\n  happycore catalog\n  happycore doctor --json"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Answer one chat message against the configured catalog")]
    Ask {
        #[arg(required = true, num_args = 1.., help = "Message text; words are joined with spaces")]
        message: Vec<String>,
    },
    #[command(about = "Load the catalog and report record and known-value counts")]
    Catalog,
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
    #[command(about = "Validate config and catalog loadability")]
    Doctor {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Ask { message } => commands::ask::run(&message.join(" ")),
        Command::Catalog => commands::catalog::run(),
        Command::Config => {
            commands::CommandResult { exit_code: 0, output: commands::config::run() }
        }
        Command::Doctor { json } => commands::doctor::run(json),
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
