use std::io::IsTerminal;

use clap::Parser;
use tracing::Level;

mod cli;
mod commands;
mod settings;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let settings = settings::Settings::resolve(&cli)?;
    let stdout = std::io::stdout();
    let colorize = settings.color.enabled(stdout.is_terminal());
    colored::control::set_override(colorize);

    commands::run_command(cli, &settings, colorize, &mut stdout.lock())
}
