//! Grouping of a diff into changed regions with context.

use serde::Serialize;

use linediff_types::{Diff, Edit, EditKind};

/// A contiguous run of edits around one or more changes.
///
/// Starts are 1-based line numbers. When a side contributes no lines to the
/// hunk, its start is the number of the line just before the hunk (0 at the
/// top of the document).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Hunk {
    pub old_start: usize,
    pub old_count: usize,
    pub new_start: usize,
    pub new_count: usize,
    pub edits: Vec<Edit>,
}

impl Hunk {
    /// Number of inserted lines in this hunk.
    pub fn additions(&self) -> usize {
        self.edits.iter().filter(|e| e.kind() == EditKind::Insert).count()
    }

    /// Number of deleted lines in this hunk.
    pub fn deletions(&self) -> usize {
        self.edits.iter().filter(|e| e.kind() == EditKind::Delete).count()
    }
}

/// Group the changes of `diff` into hunks with up to `context` unchanged
/// lines on each side. Changes whose context would touch or overlap end up
/// in the same hunk. An identical diff yields no hunks.
pub fn hunks(diff: &Diff, context: usize) -> Vec<Hunk> {
    let edits = diff.edits();

    let mut windows: Vec<(usize, usize)> = Vec::new();
    for (i, edit) in edits.iter().enumerate() {
        if !edit.kind().is_change() {
            continue;
        }
        let start = i.saturating_sub(context);
        let end = (i + context + 1).min(edits.len());
        match windows.last_mut() {
            Some(last) if start <= last.1 => last.1 = end,
            _ => windows.push((start, end)),
        }
    }

    // Lines of each side consumed before every edit index.
    let mut old_before = Vec::with_capacity(edits.len() + 1);
    let mut new_before = Vec::with_capacity(edits.len() + 1);
    let (mut old_seen, mut new_seen) = (0, 0);
    for edit in edits {
        old_before.push(old_seen);
        new_before.push(new_seen);
        old_seen += usize::from(edit.old_line().is_some());
        new_seen += usize::from(edit.new_line().is_some());
    }
    old_before.push(old_seen);
    new_before.push(new_seen);

    windows
        .into_iter()
        .map(|(start, end)| {
            let old_count = old_before[end] - old_before[start];
            let new_count = new_before[end] - new_before[start];
            Hunk {
                old_start: old_before[start] + usize::from(old_count > 0),
                old_count,
                new_start: new_before[start] + usize::from(new_count > 0),
                new_count,
                edits: edits[start..end].to_vec(),
            }
        })
        .collect()
}
