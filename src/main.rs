//! CLI entry point for the kaleidoscopic chart generator

use clap::Parser;
use kaleidostitch::io::cli::{ChartProcessor, Cli};

fn main() -> kaleidostitch::Result<()> {
    let cli = Cli::parse();
    let mut processor = ChartProcessor::new(cli);
    processor.process()
}
