//! Shortest edit script search over the edit graph.
//!
//! The edit graph of `a` (size N) and `b` (size M) has a point `(x, y)` for
//! every `0 <= x <= N`, `0 <= y <= M`. Moving right deletes `a[x]`, moving
//! down inserts `b[y]`, and moving diagonally keeps a line both sides share.
//! Diagonal `k` holds the points with `x - y == k`.
//!
//! For each edit distance `d` the search extends every reachable diagonal
//! as far as possible and records how far it got. The frontier is recorded
//! into the trace *before* it is updated for `d`, so snapshot `d` holds the
//! furthest points reachable with `d - 1` edits. [`backtrack`] relies on
//! exactly this layout.
//!
//! [`backtrack`]: crate::backtrack::backtrack

use crate::error::{DiffError, DiffResult};

/// Furthest `x` reached on each diagonal, stored with an index offset so
/// that negative diagonals fit in a flat array.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frontier {
    xs: Vec<isize>,
    offset: isize,
}

impl Frontier {
    /// A zeroed frontier able to hold diagonals `-max..=max + 1`.
    pub fn new(max: usize) -> Self {
        Self {
            xs: vec![0; 2 * max + 2],
            offset: max as isize,
        }
    }

    /// Furthest `x` recorded on diagonal `k`, or `None` if `k` lies outside
    /// this frontier.
    pub fn get(&self, k: isize) -> Option<isize> {
        let index = usize::try_from(k.checked_add(self.offset)?).ok()?;
        self.xs.get(index).copied()
    }

    // Callers stay within `-max..=max + 1`.
    pub(crate) fn at(&self, k: isize) -> isize {
        self.xs[(k + self.offset) as usize]
    }

    fn set(&mut self, k: isize, x: isize) {
        self.xs[(k + self.offset) as usize] = x;
    }

    /// Whether the step onto diagonal `k` at distance `d` comes from the
    /// diagonal above (`k + 1`, an insertion) rather than from the left
    /// (`k - 1`, a deletion). Ties go to the insertion side.
    pub(crate) fn steps_down(&self, k: isize, d: isize) -> bool {
        k == -d || (k != d && self.at(k - 1) < self.at(k + 1))
    }
}

/// The recorded search: one frontier snapshot per edit distance explored,
/// from 0 up to and including the final distance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trace {
    snapshots: Vec<Frontier>,
}

impl Trace {
    /// The edit distance found by the search.
    pub fn distance(&self) -> usize {
        self.snapshots.len().saturating_sub(1)
    }

    /// Number of snapshots (distance + 1).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// The frontier as it stood when distance `d` started.
    pub fn snapshot(&self, d: usize) -> Option<&Frontier> {
        self.snapshots.get(d)
    }

    pub(crate) fn snapshots(&self) -> &[Frontier] {
        &self.snapshots
    }
}

/// Search the shortest edit script between two sequences compared with `==`.
pub fn shortest_edit<T: PartialEq>(a: &[T], b: &[T]) -> Trace {
    shortest_edit_by(a, b, |x, y| x == y)
}

/// Search the shortest edit script, comparing items with `eq`.
///
/// `eq` must be a total, side-effect free equality, or the resulting script
/// is meaningless.
pub fn shortest_edit_by<T, F>(a: &[T], b: &[T], eq: F) -> Trace
where
    F: FnMut(&T, &T) -> bool,
{
    let max = a.len() + b.len();
    match search(a, b, eq, max) {
        Some(trace) => trace,
        None => unreachable!("an edit script of at most N + M edits always exists"),
    }
}

/// Like [`shortest_edit_by`], but give up once the distance would exceed
/// `limit`.
pub fn shortest_edit_within<T, F>(a: &[T], b: &[T], eq: F, limit: usize) -> DiffResult<Trace>
where
    F: FnMut(&T, &T) -> bool,
{
    let bound = limit.min(a.len() + b.len());
    search(a, b, eq, bound).ok_or(DiffError::DistanceLimitExceeded { limit })
}

fn search<T, F>(a: &[T], b: &[T], mut eq: F, bound: usize) -> Option<Trace>
where
    F: FnMut(&T, &T) -> bool,
{
    let n = a.len() as isize;
    let m = b.len() as isize;
    let mut v = Frontier::new(a.len() + b.len());
    let mut snapshots = Vec::new();

    for d in 0..=bound as isize {
        snapshots.push(v.clone());

        for k in (-d..=d).step_by(2) {
            let mut x = if v.steps_down(k, d) {
                v.at(k + 1)
            } else {
                v.at(k - 1) + 1
            };
            let mut y = x - k;

            // Follow the snake.
            while x < n && y < m && eq(&a[x as usize], &b[y as usize]) {
                x += 1;
                y += 1;
            }

            v.set(k, x);

            if x >= n && y >= m {
                return Some(Trace { snapshots });
            }
        }
    }

    None
}
