//! Binary crate for the `hatcast` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Running the fetch/parse/recommend sequence
//! - Mapping failures to exit codes

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() {
    let cmd = cli::Cli::parse();

    if let Err(err) = cmd.run().await {
        // One printed line per failure, then the single process exit.
        println!("{err}");
        std::process::exit(err.exit_code());
    }
}
