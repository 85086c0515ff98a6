mod cli;
mod application;
mod domain;
mod data;
mod ml;
mod infra;
mod web;

#[cfg(test)]
mod test_support;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("alz_screen=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    cli.run()
}
