//! CLI entry point for the stochastic pixel-art synthesis tool

use clap::Parser;
use pixeldrift::io::cli::{Cli, PipelineRunner};

fn main() -> pixeldrift::Result<()> {
    let cli = Cli::parse();
    let runner = PipelineRunner::new(cli);
    runner.run()
}
