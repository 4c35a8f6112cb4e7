use std::path::{Path, PathBuf};
use clap::{Args, Parser, Subcommand, ValueEnum};

use cardstack::constants::*;
use cardstack::data::Section;

#[derive(Debug, Parser)]
#[command(name = "cardstack", version, about = "Circular card-stack carousel")]
pub struct Cli {
    /// More log output (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the slot of every card for a deck size and current card
    Positions {
        #[arg(long)]
        total: usize,
        #[arg(long, default_value_t = 0)]
        current: usize,
    },
    /// Validate a data file and list the cards of one section
    Inspect(DeckArgs),
    /// Run the carousel without a window and log every auto-advance
    Simulate {
        #[command(flatten)]
        deck: DeckArgs,
        /// Simulated time
        #[arg(long, default_value_t = 30.0)]
        seconds: f32,
        #[arg(long, default_value_t = FPS)]
        fps: u32,
    },
    /// Open the card stack in a window
    #[cfg(feature = "viewer")]
    Show(ShowArgs),
}

#[derive(Debug, Args)]
pub struct DeckArgs {
    /// Portfolio data file (database.json)
    pub data: PathBuf,

    #[arg(long, value_enum, default_value_t = SectionArg::Gallery)]
    pub section: SectionArg,

    /// Directory image paths are relative to (defaults to the data file's directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Shuffle the cards
    #[arg(long)]
    pub shuffle: bool,

    /// Seed for --shuffle
    #[arg(long, requires = "shuffle")]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SectionArg {
    Gallery,
    Awards,
}

impl From<SectionArg> for Section {
    fn from(arg: SectionArg) -> Self {
        match arg {
            SectionArg::Gallery => Section::Gallery,
            SectionArg::Awards => Section::Awards,
        }
    }
}

impl DeckArgs {
    pub fn asset_root(&self) -> PathBuf {
        self.root.clone().unwrap_or_else(|| {
            self.data.parent().map_or_else(|| PathBuf::from("."), Path::to_path_buf)
        })
    }
}

#[cfg(feature = "viewer")]
#[derive(Debug, Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub deck: DeckArgs,

    /// Disable auto-advance
    #[arg(long)]
    pub no_auto: bool,

    #[arg(long)]
    pub width: Option<i32>,

    #[arg(long)]
    pub height: Option<i32>,
}
