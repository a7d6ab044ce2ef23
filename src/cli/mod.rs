//! CLI module for the employee directory service

pub mod serve;

use clap::{Parser, Subcommand};

/// Employee Directory - REST API for employee records
#[derive(Parser)]
#[command(name = "employee-directory")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,
}
