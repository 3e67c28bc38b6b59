//! Annotated listing renderer for linediff.
//!
//! Each edit becomes one line: a tag (`' '`, `'-'` or `'+'`), the old and
//! new line numbers right-aligned in fixed-width columns (blank when
//! absent), then the text with trailing whitespace removed. Deletions and
//! insertions can be colored for terminal output.

pub mod config;
pub mod printer;

pub use config::PrinterConfig;
pub use printer::{render, render_hunks, Printer};
