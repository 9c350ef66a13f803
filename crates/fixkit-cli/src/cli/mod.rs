//! CLI for the fixkit helpers.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use fixkit_core::config;

use commands::{run_completions, run_fetch, run_locate, run_normalize_user, run_sum};

#[derive(Debug, Parser)]
#[command(name = "fixkit")]
#[command(about = "fixkit: locate items, sum numbers, fetch JSON, normalize users", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Add two numbers, failing on overflow.
    Sum {
        #[arg(allow_negative_numbers = true)]
        a: String,
        #[arg(allow_negative_numbers = true)]
        b: String,
        /// Treat operands as floating point.
        #[arg(long)]
        float: bool,
    },

    /// Print the index of the first item equal to TARGET, or -1.
    Locate {
        #[arg(allow_hyphen_values = true)]
        target: String,
        #[arg(allow_hyphen_values = true)]
        items: Vec<String>,
    },

    /// GET a URL and pretty-print the JSON body.
    Fetch {
        url: String,
        /// Extra request header, `Name: value`. Repeatable.
        #[arg(long = "header", short = 'H', value_name = "NAME:VALUE")]
        headers: Vec<String>,
    },

    /// Normalize a JSON user record read from a file, stdin (`-`), or a URL.
    NormalizeUser {
        /// Path to a JSON file, `-` for stdin, or a URL with --url.
        source: String,
        /// Treat SOURCE as a URL and fetch it.
        #[arg(long)]
        url: bool,
    },

    /// Print a shell completion script.
    Completions {
        shell: Shell,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Sum { a, b, float } => run_sum(&a, &b, float)?,
            CliCommand::Locate { target, items } => run_locate(&target, &items),
            CliCommand::Fetch { url, headers } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_fetch(&cfg, &url, &headers).await?;
            }
            CliCommand::NormalizeUser { source, url } => {
                let cfg = config::load_or_init()?;
                run_normalize_user(&cfg, &source, url).await?;
            }
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
