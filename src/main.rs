//! CLI entry point for the pixel art asset pipeline

use clap::Parser;
use pixelsmith::io::cli::Cli;

fn main() -> pixelsmith::Result<()> {
    let cli = Cli::parse();
    cli.run()
}
