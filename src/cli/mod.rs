//! CLI for newsdesk

pub mod serve;

use clap::{Parser, Subcommand};

/// newsdesk - personalized news feed API
#[derive(Parser)]
#[command(name = "newsdesk")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve,
}
