//! A single step of an edit script.

use serde::{Deserialize, Serialize};

use crate::line::Line;

/// The kind of an edit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditKind {
    /// The line is present, unchanged, on both sides.
    Equal,
    /// The line appears only in the new sequence.
    Insert,
    /// The line appears only in the old sequence.
    Delete,
}

impl EditKind {
    /// One-character tag used in annotated listings.
    pub fn tag(self) -> char {
        match self {
            EditKind::Equal => ' ',
            EditKind::Insert => '+',
            EditKind::Delete => '-',
        }
    }

    /// Returns `true` for insertions and deletions.
    pub fn is_change(self) -> bool {
        !matches!(self, EditKind::Equal)
    }
}

/// One edit in a [`Diff`](crate::Diff).
///
/// Edits are only built through [`Edit::equal`], [`Edit::insert`] and
/// [`Edit::delete`]: an equal edit carries both lines, an insert only the
/// new line, a delete only the old line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Edit {
    kind: EditKind,
    old_line: Option<Line>,
    new_line: Option<Line>,
}

impl Edit {
    /// An unchanged line, present in both sequences.
    pub fn equal(old_line: Line, new_line: Line) -> Self {
        debug_assert_eq!(old_line.text, new_line.text);
        Self {
            kind: EditKind::Equal,
            old_line: Some(old_line),
            new_line: Some(new_line),
        }
    }

    /// A line added in the new sequence.
    pub fn insert(new_line: Line) -> Self {
        Self {
            kind: EditKind::Insert,
            old_line: None,
            new_line: Some(new_line),
        }
    }

    /// A line removed from the old sequence.
    pub fn delete(old_line: Line) -> Self {
        Self {
            kind: EditKind::Delete,
            old_line: Some(old_line),
            new_line: None,
        }
    }

    pub fn kind(&self) -> EditKind {
        self.kind
    }

    pub fn old_line(&self) -> Option<&Line> {
        self.old_line.as_ref()
    }

    pub fn new_line(&self) -> Option<&Line> {
        self.new_line.as_ref()
    }

    /// Number of the old line, if any.
    pub fn old_number(&self) -> Option<usize> {
        self.old_line.as_ref().map(|l| l.number)
    }

    /// Number of the new line, if any.
    pub fn new_number(&self) -> Option<usize> {
        self.new_line.as_ref().map(|l| l.number)
    }

    /// The text this edit is about: the old line's if present, else the new line's.
    pub fn text(&self) -> &str {
        self.old_line
            .as_ref()
            .or(self.new_line.as_ref())
            .map(Line::text)
            .unwrap_or_default()
    }
}
