//! Numbered lines and the line sequencer.

use serde::{Deserialize, Serialize};

/// A single line of a document.
///
/// `number` is 1-based and fixed when the line is sequenced; it does not
/// change with the line's index in any later slice. `text` keeps its line
/// terminator, if the document had one.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    pub number: usize,
    pub text: String,
}

impl Line {
    /// Create a line with an explicit number.
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }

    /// The line text, terminator included.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns `true` if both lines carry the same text, whatever their numbers.
    pub fn same_text(&self, other: &Line) -> bool {
        self.text == other.text
    }
}

/// Split a document into numbered lines.
///
/// The document is split after every `\n`, which stays part of the line.
/// A final fragment without a terminator is a line of its own, and an empty
/// document has no lines.
pub fn lines(document: &str) -> Vec<Line> {
    lines_from(document.split_inclusive('\n'))
}

/// Number an already-ordered sequence of text fragments, starting at 1.
pub fn lines_from<I, S>(fragments: I) -> Vec<Line>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    fragments
        .into_iter()
        .enumerate()
        .map(|(i, text)| Line::new(i + 1, text))
        .collect()
}
