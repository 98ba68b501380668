use clap::{Parser, Subcommand};
use git_shorthand::commands;
use git_shorthand::core::{error::GitShorthandError, print_error};
use std::env;

#[derive(Parser)]
#[command(name = "gsh")]
#[command(about = "Typed git shorthand with index-based entity references")]
#[command(version = "0.1.0")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show or set the active index type (branch, path or tag)
    Type {
        /// New active index type; omit to show the current one
        value: Option<String>,
    },
    /// Any shorthand alias followed by its arguments (e.g. "co 2")
    #[command(external_subcommand)]
    Alias(Vec<String>),
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let result = match cli.command {
        Commands::Type { value } => commands::run_index_type(value.as_deref()),
        Commands::Alias(words) => match words.split_first() {
            Some((alias, raw_args)) => commands::run_alias(alias, raw_args),
            None => Err(GitShorthandError::unknown_alias("")),
        },
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            if let GitShorthandError::NotInGitRepo = e {
                print_error("Not in a git repository");
            } else {
                print_error(&e.to_string());
            }
            std::process::exit(1);
        }
    }
}
