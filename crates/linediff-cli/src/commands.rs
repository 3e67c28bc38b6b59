use std::io::Write;
use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use tracing::debug;

use linediff_engine::{diff_with, hunks, plural, DiffStat};
use linediff_render::Printer;
use linediff_types::{lines, Diff};

use crate::cli::*;
use crate::settings::Settings;

const DEMO_OLD: &str = "A\nB\nC\nA\nB\nB\nA\n";
const DEMO_NEW: &str = "C\nB\nA\nB\nA\nC\n";

pub fn run_command<W: Write>(
    cli: Cli,
    settings: &Settings,
    colorize: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    match cli.command {
        Command::Diff(args) => cmd_diff(&args, &cli.format, settings, colorize, out),
        Command::Demo(_) => cmd_demo(&cli.format, settings, colorize, out),
    }
}

fn cmd_diff<W: Write>(
    args: &DiffArgs,
    format: &OutputFormat,
    settings: &Settings,
    colorize: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    let old = read_document(&args.old)?;
    let new = read_document(&args.new)?;
    let diff = diff_with(&lines(&old), &lines(&new), &settings.diff_options())
        .with_context(|| format!("cannot diff {} and {}", args.old.display(), args.new.display()))?;
    debug!(edits = diff.len(), distance = diff.distance(), "diff computed");

    if args.stat {
        return write_stat(&DiffStat::of(&diff), format, colorize, out);
    }
    write_diff(&diff, format, settings, colorize, out)
}

fn cmd_demo<W: Write>(
    format: &OutputFormat,
    settings: &Settings,
    colorize: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    let diff = diff_with(&lines(DEMO_OLD), &lines(DEMO_NEW), &settings.diff_options())?;
    write_diff(&diff, format, settings, colorize, out)
}

fn read_document(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))
}

fn write_diff<W: Write>(
    diff: &Diff,
    format: &OutputFormat,
    settings: &Settings,
    colorize: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    match (format, settings.context) {
        (OutputFormat::Json, Some(context)) => {
            serde_json::to_writer_pretty(&mut *out, &hunks(diff, context))?;
            writeln!(out)?;
        }
        (OutputFormat::Json, None) => {
            serde_json::to_writer_pretty(&mut *out, diff)?;
            writeln!(out)?;
        }
        (OutputFormat::Text, Some(context)) => {
            Printer::new(out, settings.printer_config(colorize)).print_hunks(&hunks(diff, context))?;
        }
        (OutputFormat::Text, None) => {
            Printer::new(out, settings.printer_config(colorize)).print(diff)?;
        }
    }
    Ok(())
}

fn write_stat<W: Write>(
    stat: &DiffStat,
    format: &OutputFormat,
    colorize: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, stat)?;
            writeln!(out)?;
        }
        OutputFormat::Text if colorize => {
            writeln!(
                out,
                "{} insertion{}{}, {} deletion{}{}",
                stat.additions.to_string().bold(),
                plural(stat.additions),
                "(+)".green(),
                stat.deletions.to_string().bold(),
                plural(stat.deletions),
                "(-)".red(),
            )?;
        }
        OutputFormat::Text => writeln!(out, "{stat}")?,
    }
    Ok(())
}
