//! Summary statistics for a diff.

use std::fmt;

use serde::Serialize;

use linediff_types::Diff;

/// Line counts for a diff.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DiffStat {
    pub additions: usize,
    pub deletions: usize,
    pub unchanged: usize,
}

impl DiffStat {
    pub fn of(diff: &Diff) -> Self {
        Self {
            additions: diff.additions(),
            deletions: diff.deletions(),
            unchanged: diff.unchanged(),
        }
    }

    /// Insertions plus deletions.
    pub fn distance(&self) -> usize {
        self.additions + self.deletions
    }
}

impl fmt::Display for DiffStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} insertion{}(+), {} deletion{}(-)",
            self.additions,
            plural(self.additions),
            self.deletions,
            plural(self.deletions),
        )
    }
}

/// Suffix for a counted noun: `""` for one, `"s"` otherwise.
pub fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
