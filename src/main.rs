//! CLI entry point for the constellation token generator

use clap::Parser;
use constellation::io::cli::{Cli, TokenProcessor};

fn main() -> constellation::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let mut processor = TokenProcessor::new(cli);
    processor.process()
}
