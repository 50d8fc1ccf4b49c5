use anyhow::Result;
use clap::Parser;

use csved::cli::{run, CliArgs};

fn main() -> Result<()> {
    csved::tracing::init();
    let args = CliArgs::parse();
    run(args)
}
