// src/bin/cli.rs
use cetaf_scrape::cli;
use clap::Parser;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run(cli::Args::parse())?;
    Ok(())
}
