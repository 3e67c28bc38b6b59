//! Path reconstruction from a search trace.

use linediff_types::EditKind;

use crate::search::Trace;

/// One step of the shortest path through the edit graph, from
/// `(prev_x, prev_y)` to `(x, y)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub prev_x: usize,
    pub prev_y: usize,
    pub x: usize,
    pub y: usize,
}

impl Move {
    pub fn new(prev_x: usize, prev_y: usize, x: usize, y: usize) -> Self {
        Self {
            prev_x,
            prev_y,
            x,
            y,
        }
    }

    // Every point on the recovered path lies inside the edit graph.
    fn between(prev_x: isize, prev_y: isize, x: isize, y: isize) -> Self {
        Self::new(prev_x as usize, prev_y as usize, x as usize, y as usize)
    }

    /// What this step does: only `y` advancing inserts, only `x` advancing
    /// deletes, both advancing keeps a line.
    pub fn kind(&self) -> EditKind {
        if self.x == self.prev_x {
            EditKind::Insert
        } else if self.y == self.prev_y {
            EditKind::Delete
        } else {
            EditKind::Equal
        }
    }
}

/// Replay `trace` backwards from `(n, m)` and return the moves of one
/// shortest path from `(0, 0)` to `(n, m)`, in forward order.
///
/// At each distance `d`, the snapshot tells which neighbouring diagonal the
/// search stepped from. Everything between that step and the current point
/// is a snake of equal lines; the step itself is the single insertion or
/// deletion that distance `d` paid for.
pub fn backtrack(trace: &Trace, n: usize, m: usize) -> Vec<Move> {
    let mut x = n as isize;
    let mut y = m as isize;
    let mut moves = Vec::with_capacity(n + m);

    for (d, v) in trace.snapshots().iter().enumerate().rev() {
        let d = d as isize;
        let k = x - y;

        let prev_k = if v.steps_down(k, d) { k + 1 } else { k - 1 };
        let prev_x = v.at(prev_k);
        let prev_y = prev_x - prev_k;

        while x > prev_x && y > prev_y {
            moves.push(Move::between(x - 1, y - 1, x, y));
            x -= 1;
            y -= 1;
        }

        if d > 0 {
            moves.push(Move::between(prev_x, prev_y, x, y));
        }

        x = prev_x;
        y = prev_y;
    }

    moves.reverse();
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::shortest_edit;

    fn path(a: &str, b: &str) -> Vec<Move> {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        backtrack(&shortest_edit(&a, &b), a.len(), b.len())
    }

    #[test]
    fn empty_inputs_have_no_moves() {
        assert!(path("", "").is_empty());
    }

    #[test]
    fn identical_inputs_walk_the_main_diagonal() {
        let moves = path("abc", "abc");
        assert_eq!(
            moves,
            vec![
                Move::new(0, 0, 1, 1),
                Move::new(1, 1, 2, 2),
                Move::new(2, 2, 3, 3),
            ]
        );
        assert!(moves.iter().all(|mv| mv.kind() == EditKind::Equal));
    }

    #[test]
    fn swap_deletes_then_inserts() {
        let moves = path("ab", "ba");
        assert_eq!(
            moves,
            vec![
                Move::new(0, 0, 1, 0),
                Move::new(1, 0, 2, 1),
                Move::new(2, 1, 2, 2),
            ]
        );
        let kinds: Vec<EditKind> = moves.iter().map(Move::kind).collect();
        assert_eq!(
            kinds,
            vec![EditKind::Delete, EditKind::Equal, EditKind::Insert]
        );
    }

    #[test]
    fn path_is_connected_from_origin_to_end() {
        let moves = path("ABCABBA", "CBABAC");
        assert_eq!((moves[0].prev_x, moves[0].prev_y), (0, 0));
        let last = moves.last().unwrap();
        assert_eq!((last.x, last.y), (7, 6));
        for pair in moves.windows(2) {
            assert_eq!((pair[0].x, pair[0].y), (pair[1].prev_x, pair[1].prev_y));
        }
    }

    #[test]
    fn changes_match_distance() {
        let a: Vec<char> = "ABCABBA".chars().collect();
        let b: Vec<char> = "CBABAC".chars().collect();
        let trace = shortest_edit(&a, &b);
        let moves = backtrack(&trace, a.len(), b.len());
        let changes = moves.iter().filter(|mv| mv.kind().is_change()).count();
        assert_eq!(changes, trace.distance());
    }
}
