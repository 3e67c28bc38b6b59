//! Foundation types for linediff.
//!
//! # Key Types
//!
//! - [`Line`] -- A numbered line of a document, produced by [`lines`] / [`lines_from`]
//! - [`Edit`] / [`EditKind`] -- One step of an edit script (equal, insert, delete)
//! - [`Diff`] -- The ordered edit script turning an old sequence into a new one

pub mod diff;
pub mod edit;
pub mod line;

pub use diff::Diff;
pub use edit::{Edit, EditKind};
pub use line::{lines, lines_from, Line};
