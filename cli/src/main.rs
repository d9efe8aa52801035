mod cli;
mod config;
mod error;
mod generate;
mod init;
mod progress;
mod serve;
mod stats;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use std::process;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            input,
            output,
            template,
            config,
            install_command,
            title,
            author,
            description,
            verbose,
        } => generate::execute(
            input,
            output,
            template,
            config,
            install_command,
            title,
            author,
            description,
            verbose,
        ),
        Commands::Stats {
            input,
            config,
            json,
        } => stats::execute(input, config, json),
        Commands::Preview {
            input,
            template,
            config,
            port,
            host,
            verbose,
        } => serve::execute(input, template, config, port, host, verbose),
        Commands::Init { force } => init::execute(force),
    };

    if let Err(err) = result {
        eprintln!("{} {}", "Error:".bold().red(), err.user_message());
        process::exit(err.exit_code());
    }
}
