//! Diff engine for linediff.
//!
//! Computes the shortest edit script between two line sequences with
//! Myers' O(ND) algorithm: a greedy search over the diagonals of the edit
//! graph records a [`Trace`] of frontiers, [`backtrack`] replays it in
//! reverse to recover the path, and [`assemble`] turns the path into a
//! [`Diff`](linediff_types::Diff).
//!
//! # Key Types
//!
//! - [`Trace`] / [`Frontier`] -- Search state, one frontier snapshot per edit distance
//! - [`Move`] -- One step of the reconstructed path through the edit graph
//! - [`Differ`] / [`Myers`] -- Pluggable differ, with [`DiffOptions`] limits
//! - [`DiffStat`] -- Summary counts of a diff
//! - [`Hunk`] -- A changed region with surrounding context

pub mod assemble;
pub mod backtrack;
pub mod error;
pub mod hunk;
pub mod search;
pub mod stat;

pub use assemble::{assemble, diff, diff_text, diff_with, DiffOptions, Differ, Myers};
pub use backtrack::{backtrack, Move};
pub use error::{DiffError, DiffResult};
pub use hunk::{hunks, Hunk};
pub use search::{shortest_edit, shortest_edit_by, shortest_edit_within, Frontier, Trace};
pub use stat::{plural, DiffStat};

#[cfg(test)]
mod properties;
