//! Gridbench CLI
//!
//! Scores registered grid-puzzle solutions and draws tasks in the terminal.
//!
//! ```bash
//! gridbench score 7            # score one task and print its summary
//! gridbench score --all-tasks  # score everything and write the logs
//! gridbench visualize 7        # browse the examples of a task
//! gridbench list               # show task files and registered solutions
//! ```
//!
//! Set `RUST_LOG=debug` for verbose logging.

mod args;
mod commands;
mod console;
mod router;

use clap::Parser;

pub use args::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    router::route(cli)
}
