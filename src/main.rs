use std::io;
use std::process;
use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use cardstack::data::{Deck, Portfolio, Section};

mod commands;
mod config;
#[cfg(feature = "viewer")]
mod viewer;

use crate::config::{Cli, CliCommand, DeckArgs};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        error!("{e:#}");
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        CliCommand::Positions { total, current } => {
            commands::write_positions(&mut io::stdout().lock(), total, current)?;
        }
        CliCommand::Inspect(args) => {
            let deck = load_deck(&args)?;
            commands::write_inspect(&mut io::stdout().lock(), &deck)?;
        }
        CliCommand::Simulate { deck, seconds, fps } => {
            let deck = load_deck(&deck)?;
            commands::simulate(&deck, seconds, fps)?;
        }
        #[cfg(feature = "viewer")]
        CliCommand::Show(args) => {
            let deck = load_deck(&args.deck)?;
            viewer::run(deck, &args)?;
        }
    }
    Ok(())
}

fn load_deck(args: &DeckArgs) -> Result<Deck> {
    let section = Section::from(args.section);
    let portfolio = Portfolio::load(&args.data)
        .with_context(|| format!("loading {}", args.data.display()))?;
    let mut deck = portfolio.deck(section, &args.asset_root())?;
    if deck.cards.is_empty() {
        bail!("{} section has no cards", section.name());
    }
    if args.shuffle {
        deck.shuffle(args.seed);
    }
    Ok(deck)
}
