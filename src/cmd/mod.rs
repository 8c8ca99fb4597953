mod generate;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "surql-seed")]
#[command(version)]
#[command(
    about = "Generate a SurrealQL seed file with customers, books and orders",
    long_about = None
)]
pub struct Cli {
    /// Seed file to write (created or truncated)
    #[arg(short, long)]
    pub output: PathBuf,

    /// Positional arguments are accepted and ignored
    #[arg(hide = true)]
    pub ignored: Vec<String>,
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    generate::run(cli.output)
}
