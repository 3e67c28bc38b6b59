use std::io::{self, Write};

use linediff_engine::Hunk;
use linediff_types::{Diff, Edit, EditKind};

use crate::config::PrinterConfig;

const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const DEFAULT_FG: &str = "\x1b[39m";

/// Writes diffs as annotated listings.
pub struct Printer<W> {
    output: W,
    config: PrinterConfig,
}

impl<W: Write> Printer<W> {
    pub fn new(output: W, config: PrinterConfig) -> Self {
        Self { output, config }
    }

    /// Print every edit of `diff`, one line each.
    pub fn print(&mut self, diff: &Diff) -> io::Result<()> {
        for edit in diff {
            self.print_edit(edit)?;
        }
        Ok(())
    }

    /// Print hunks, each preceded by an `@@ -a,b +c,d @@` header.
    pub fn print_hunks(&mut self, hunks: &[Hunk]) -> io::Result<()> {
        for hunk in hunks {
            writeln!(
                self.output,
                "@@ -{},{} +{},{} @@",
                hunk.old_start, hunk.old_count, hunk.new_start, hunk.new_count
            )?;
            for edit in &hunk.edits {
                self.print_edit(edit)?;
            }
        }
        Ok(())
    }

    pub fn print_edit(&mut self, edit: &Edit) -> io::Result<()> {
        let (color, reset) = match (self.config.colorize, edit.kind()) {
            (true, EditKind::Delete) => (RED, DEFAULT_FG),
            (true, EditKind::Insert) => (GREEN, DEFAULT_FG),
            (true, EditKind::Equal) => ("", DEFAULT_FG),
            (false, _) => ("", ""),
        };
        let width = self.config.line_width;

        writeln!(
            self.output,
            "{color}{tag} {old:>width$} {new:>width$}  {text}{reset}",
            tag = edit.kind().tag(),
            old = number(edit.old_number()),
            new = number(edit.new_number()),
            text = edit.text().trim_end(),
        )
    }

    pub fn into_inner(self) -> W {
        self.output
    }
}

fn number(n: Option<usize>) -> String {
    n.map(|n| n.to_string()).unwrap_or_default()
}

/// Render a whole diff into a string.
pub fn render(diff: &Diff, config: &PrinterConfig) -> String {
    render_with(config, |printer| printer.print(diff))
}

/// Render hunks into a string.
pub fn render_hunks(hunks: &[Hunk], config: &PrinterConfig) -> String {
    render_with(config, |printer| printer.print_hunks(hunks))
}

fn render_with<F>(config: &PrinterConfig, print: F) -> String
where
    F: FnOnce(&mut Printer<Vec<u8>>) -> io::Result<()>,
{
    let mut printer = Printer::new(Vec::new(), config.clone());
    // Writing into a Vec cannot fail.
    let _ = print(&mut printer);
    String::from_utf8_lossy(&printer.into_inner()).into_owned()
}
