//! rjsjai-dummy CLI
//!
//! Sends one request to the mock RJSJ AI service.

use clap::Parser;

use rjsjai_dummy::cli::{execute, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    execute(cli)
}
