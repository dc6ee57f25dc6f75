use anyhow::Result;
use clap::Parser;

mod alfred;
mod cli;
mod commands;
mod convert;
mod init;
mod preview;
mod query;
mod render;
mod store;
mod style;
mod utils;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    commands::run(cli)
}
