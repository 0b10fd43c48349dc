//! Command-line client for the todo API.
//!
//! Mirrors the operations the web client exposes: list with a completion
//! summary, add, mark done or not done, and remove.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use todo_client::{TodoApi, UreqTransport};
use uuid::Uuid;

mod commands;
mod error;

/// Manage todos on a running todo API server.
#[derive(Parser)]
#[command(name = "todo")]
#[command(about = "Manage todos on a running todo API server")]
struct Cli {
    /// Base URL of the API, including the /api prefix
    #[arg(
        long,
        env = "TODO_API_URL",
        default_value = "http://localhost:8001/api"
    )]
    url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List all todos with a completion summary
    List,

    /// Create a new todo
    Add {
        /// Title of the new todo
        title: String,
    },

    /// Mark a todo as completed
    Done {
        /// Id of the todo to mark
        id: Uuid,
    },

    /// Mark a todo as not completed
    Undone {
        /// Id of the todo to unmark
        id: Uuid,
    },

    /// Delete a todo
    Rm {
        /// Id of the todo to delete
        id: Uuid,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let api = TodoApi::new(&cli.url);
    let mut transport = UreqTransport::new();
    match commands::run(cli.command, &api, &mut transport) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
