mod commands;
mod ops;
mod reports;
mod workspace;
mod writer;

use clap::Parser;
use eyre::Result;

use crate::commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;

    Cli::parse().run()
}
