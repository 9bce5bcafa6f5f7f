// src/bin/cli.rs
use color_eyre::eyre::Result;

fn main() -> Result<()> {
    color_eyre::install()?;
    slf_bot::cli::run()
}
