//! Diff assembly and the public entry points.

use serde::{Deserialize, Serialize};
use tracing::debug;

use linediff_types::{lines, Diff, Edit, EditKind, Line};

use crate::backtrack::{backtrack, Move};
use crate::error::{DiffError, DiffResult};
use crate::search::{shortest_edit_by, shortest_edit_within};

/// Resource limits for a single diff.
///
/// The search needs O(N + M) memory per explored distance, so unbounded
/// inputs that share little can grow large. Both limits are off by default.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffOptions {
    /// Maximum number of lines across both sequences.
    pub max_lines: Option<usize>,
    /// Maximum edit distance the search may explore.
    pub max_distance: Option<usize>,
}

impl DiffOptions {
    /// Options with no limits.
    pub fn unlimited() -> Self {
        Self::default()
    }

    pub fn with_max_lines(mut self, limit: usize) -> Self {
        self.max_lines = Some(limit);
        self
    }

    pub fn with_max_distance(mut self, limit: usize) -> Self {
        self.max_distance = Some(limit);
        self
    }
}

/// Something that can compute a diff between two line sequences.
pub trait Differ {
    fn diff(&self, old: &[Line], new: &[Line]) -> DiffResult<Diff>;
}

/// The Myers O(ND) differ.
#[derive(Clone, Debug, Default)]
pub struct Myers {
    options: DiffOptions,
}

impl Myers {
    pub fn new(options: DiffOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DiffOptions {
        &self.options
    }
}

impl Differ for Myers {
    fn diff(&self, old: &[Line], new: &[Line]) -> DiffResult<Diff> {
        diff_with(old, new, &self.options)
    }
}

/// Compute the shortest diff between two line sequences.
///
/// Lines are compared by text; their numbers play no part in matching.
pub fn diff(old: &[Line], new: &[Line]) -> Diff {
    let trace = shortest_edit_by(old, new, Line::same_text);
    debug!(
        old = old.len(),
        new = new.len(),
        distance = trace.distance(),
        "shortest edit script found"
    );
    assemble(&backtrack(&trace, old.len(), new.len()), old, new)
}

/// Compute the shortest diff, enforcing `options`.
pub fn diff_with(old: &[Line], new: &[Line], options: &DiffOptions) -> DiffResult<Diff> {
    let total = old.len() + new.len();
    if let Some(limit) = options.max_lines {
        if total > limit {
            debug!(lines = total, limit, "diff input over line limit");
            return Err(DiffError::InputTooLarge {
                lines: total,
                limit,
            });
        }
    }

    let trace = match options.max_distance {
        Some(limit) => shortest_edit_within(old, new, Line::same_text, limit).inspect_err(|_| {
            debug!(old = old.len(), new = new.len(), limit, "edit distance over limit");
        })?,
        None => shortest_edit_by(old, new, Line::same_text),
    };
    debug!(
        old = old.len(),
        new = new.len(),
        distance = trace.distance(),
        "shortest edit script found"
    );

    Ok(assemble(&backtrack(&trace, old.len(), new.len()), old, new))
}

/// Split two documents into lines and diff them.
pub fn diff_text(old: &str, new: &str) -> Diff {
    diff(&lines(old), &lines(new))
}

/// Turn a forward-ordered path into edits over `old` and `new`.
pub fn assemble(moves: &[Move], old: &[Line], new: &[Line]) -> Diff {
    moves
        .iter()
        .map(|mv| match mv.kind() {
            EditKind::Insert => Edit::insert(new[mv.prev_y].clone()),
            EditKind::Delete => Edit::delete(old[mv.prev_x].clone()),
            EditKind::Equal => Edit::equal(old[mv.prev_x].clone(), new[mv.prev_y].clone()),
        })
        .collect()
}
