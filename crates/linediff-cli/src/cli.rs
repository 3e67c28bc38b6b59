use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::settings::ColorChoice;

#[derive(Parser)]
#[command(
    name = "linediff",
    about = "linediff — line-level diffs with the Myers algorithm",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// TOML settings file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare two files line by line
    Diff(DiffArgs),
    /// Diff the two built-in sample documents
    Demo(DemoArgs),
}

#[derive(Args)]
pub struct DiffArgs {
    pub old: PathBuf,
    pub new: PathBuf,
    /// Show only changed regions with this many lines of context
    #[arg(short = 'U', long)]
    pub context: Option<usize>,
    /// Print a summary instead of the listing
    #[arg(long)]
    pub stat: bool,
    #[arg(long)]
    pub color: Option<ColorChoice>,
}

#[derive(Args)]
pub struct DemoArgs {
    #[arg(long)]
    pub color: Option<ColorChoice>,
}

impl Command {
    /// The `--color` flag of the subcommand, if given.
    pub fn color(&self) -> Option<ColorChoice> {
        match self {
            Command::Diff(args) => args.color,
            Command::Demo(args) => args.color,
        }
    }
}
