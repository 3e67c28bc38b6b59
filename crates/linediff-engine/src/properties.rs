use proptest::prelude::*;
use similar::{capture_diff_slices, Algorithm, DiffTag};

use linediff_types::{lines_from, EditKind, Line};

use crate::assemble::diff;
use crate::search::shortest_edit_by;

fn document() -> impl Strategy<Value = Vec<Line>> {
    // A small alphabet keeps plenty of matches between the two sides.
    prop::collection::vec(prop::sample::select(vec!["a", "b", "c", "d"]), 0..24).prop_map(lines_from)
}

fn texts(seq: &[Line]) -> Vec<&str> {
    seq.iter().map(Line::text).collect()
}

fn lcs_len(a: &[&str], b: &[&str]) -> usize {
    let mut table = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for i in 0..a.len() {
        for j in 0..b.len() {
            table[i + 1][j + 1] = if a[i] == b[j] {
                table[i][j] + 1
            } else {
                table[i][j + 1].max(table[i + 1][j])
            };
        }
    }
    table[a.len()][b.len()]
}

fn reference_distance(a: &[&str], b: &[&str]) -> usize {
    capture_diff_slices(Algorithm::Myers, a, b)
        .iter()
        .map(|op| {
            let (tag, old, new) = op.as_tag_tuple();
            match tag {
                DiffTag::Equal => 0,
                DiffTag::Delete => old.len(),
                DiffTag::Insert => new.len(),
                DiffTag::Replace => old.len() + new.len(),
            }
        })
        .sum()
}

proptest! {
    #[test]
    fn identity_is_all_equal(x in document()) {
        let d = diff(&x, &x);
        prop_assert_eq!(d.len(), x.len());
        prop_assert!(d.iter().all(|e| e.kind() == EditKind::Equal));
        prop_assert_eq!(d.distance(), 0);
    }

    #[test]
    fn lines_are_conserved(old in document(), new in document()) {
        let d = diff(&old, &new);
        let rebuilt_old: Vec<Line> = d.old_lines().cloned().collect();
        let rebuilt_new: Vec<Line> = d.new_lines().cloned().collect();
        prop_assert_eq!(rebuilt_old, old);
        prop_assert_eq!(rebuilt_new, new);
    }

    #[test]
    fn edit_count_equals_search_distance(old in document(), new in document()) {
        let trace = shortest_edit_by(&old, &new, Line::same_text);
        let d = diff(&old, &new);
        prop_assert_eq!(d.distance(), trace.distance());
    }

    #[test]
    fn distance_is_minimal(old in document(), new in document()) {
        let (a, b) = (texts(&old), texts(&new));
        let d = diff(&old, &new);
        prop_assert_eq!(d.distance(), a.len() + b.len() - 2 * lcs_len(&a, &b));
        prop_assert_eq!(d.distance(), reference_distance(&a, &b));
    }

    #[test]
    fn distance_is_symmetric(x in document(), y in document()) {
        let forward = diff(&x, &y);
        let backward = diff(&y, &x);
        prop_assert_eq!(forward.distance(), backward.distance());
        prop_assert_eq!(forward.additions(), backward.deletions());
        prop_assert_eq!(forward.deletions(), backward.additions());
        prop_assert_eq!(forward.unchanged(), backward.unchanged());
    }

    #[test]
    fn equal_edits_match_text(old in document(), new in document()) {
        for edit in diff(&old, &new).iter().filter(|e| e.kind() == EditKind::Equal) {
            let (o, n) = (edit.old_line().unwrap(), edit.new_line().unwrap());
            prop_assert_eq!(&o.text, &n.text);
        }
    }

    #[test]
    fn empty_old_is_all_inserts(y in document()) {
        let d = diff(&[], &y);
        prop_assert_eq!(d.len(), y.len());
        prop_assert!(d.iter().all(|e| e.kind() == EditKind::Insert));
    }

    #[test]
    fn empty_new_is_all_deletes(x in document()) {
        let d = diff(&x, &[]);
        prop_assert_eq!(d.len(), x.len());
        prop_assert!(d.iter().all(|e| e.kind() == EditKind::Delete));
    }
}
