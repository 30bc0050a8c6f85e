//! Itemlist CLI - print a generated list of items

use anyhow::Context;
use clap::Parser;
use itemlist::cli::Args;
use log::LevelFilter;

fn main() {
    let args = Args::parse();

    let level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let config = args.run_config();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    itemlist::run(&config, &mut out).context("failed to print items")?;
    Ok(())
}
