//! The ordered edit script.

use serde::Serialize;

use crate::edit::{Edit, EditKind};
use crate::line::Line;

/// An ordered sequence of edits transforming an old line sequence into a
/// new one.
///
/// Reading the old lines of the edits in order gives back the old sequence;
/// the same holds for the new lines and the new sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Diff {
    edits: Vec<Edit>,
}

impl Diff {
    /// Create an empty diff.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of edits.
    pub fn len(&self) -> usize {
        self.edits.len()
    }

    /// Returns `true` if there are no edits (both sequences were empty).
    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Edit> {
        self.edits.iter()
    }

    pub fn edits(&self) -> &[Edit] {
        &self.edits
    }

    /// Append an edit at the end of the script.
    pub fn push(&mut self, edit: Edit) {
        self.edits.push(edit);
    }

    /// Number of inserted lines.
    pub fn additions(&self) -> usize {
        self.count(EditKind::Insert)
    }

    /// Number of deleted lines.
    pub fn deletions(&self) -> usize {
        self.count(EditKind::Delete)
    }

    /// Number of unchanged lines.
    pub fn unchanged(&self) -> usize {
        self.count(EditKind::Equal)
    }

    /// Edit distance: insertions plus deletions.
    pub fn distance(&self) -> usize {
        self.additions() + self.deletions()
    }

    /// Returns `true` if the two sides have the same lines.
    pub fn is_identical(&self) -> bool {
        self.edits.iter().all(|e| !e.kind().is_change())
    }

    /// The old sequence, rebuilt from the edits.
    pub fn old_lines(&self) -> impl Iterator<Item = &Line> {
        self.edits.iter().filter_map(Edit::old_line)
    }

    /// The new sequence, rebuilt from the edits.
    pub fn new_lines(&self) -> impl Iterator<Item = &Line> {
        self.edits.iter().filter_map(Edit::new_line)
    }

    fn count(&self, kind: EditKind) -> usize {
        self.edits.iter().filter(|e| e.kind() == kind).count()
    }
}

impl From<Vec<Edit>> for Diff {
    fn from(edits: Vec<Edit>) -> Self {
        Self { edits }
    }
}

impl FromIterator<Edit> for Diff {
    fn from_iter<I: IntoIterator<Item = Edit>>(iter: I) -> Self {
        Self {
            edits: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Diff {
    type Item = Edit;
    type IntoIter = std::vec::IntoIter<Edit>;

    fn into_iter(self) -> Self::IntoIter {
        self.edits.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diff {
    type Item = &'a Edit;
    type IntoIter = std::slice::Iter<'a, Edit>;

    fn into_iter(self) -> Self::IntoIter {
        self.edits.iter()
    }
}
