use anyhow::Error as Anyhow;
use clap::Parser;

mod cli;
mod io;

fn main() -> Result<(), Anyhow> {
    cli::Cli::parse().execute()
}
