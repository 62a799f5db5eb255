//! Stamping a brush onto a board.

use std::collections::HashSet;

use crate::brush::Brush;
use crate::geometry::Coord;
use crate::model::{Board, Cell};

/// Board indices written by one brush application.
pub type PaintedIndices = HashSet<usize>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Application {
    pub board: Board,
    pub painted: PaintedIndices,
}

/// Centers `brush` on `anchor` and returns a new board plus every index an alive
/// template cell landed on. Dead template cells leave the board untouched and
/// targets off the grid are dropped.
pub fn apply_brush(anchor: Coord, board: &Board, brush: &Brush) -> Application {
    let size = board.size();
    let mut out = board.clone();
    let mut painted = PaintedIndices::new();
    for (i, &(dx, dy)) in brush.offsets().iter().enumerate() {
        if !brush.is_alive_at(i) {
            continue;
        }
        if let Some(idx) = size.index_of(anchor.offset(dx, dy)) {
            out.set_index(idx, Cell::Alive);
            painted.insert(idx);
        }
    }
    Application { board: out, painted }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brush::{default_brush, find_brush};
    use crate::geometry::GridSize;

    #[test]
    fn glider_lands_around_anchor() {
        let board = Board::empty(GridSize::new(5, 5));
        let glider = find_brush("glider").unwrap();
        let applied = apply_brush(Coord::new(2, 2), &board, &glider);
        let expected = Board::with_alive(GridSize::new(5, 5), &[(2, 1), (3, 2), (1, 3), (2, 3), (3, 3)]);
        assert_eq!(applied.board, expected);
        let mut painted: Vec<_> = applied.painted.into_iter().collect();
        painted.sort();
        assert_eq!(painted, vec![7, 13, 16, 17, 18]);
    }

    #[test]
    fn out_of_bounds_cells_are_dropped() {
        let board = Board::empty(GridSize::new(3, 3));
        let glider = find_brush("glider").unwrap();
        // anchored on the corner only the top-left quadrant survives
        let applied = apply_brush(Coord::new(0, 0), &board, &glider);
        assert_eq!(applied.painted, PaintedIndices::from([1, 3, 4]));
        assert_eq!(applied.board.alive_count(), 3);

        let nowhere = apply_brush(Coord::new(-5, 40), &board, &glider);
        assert!(nowhere.painted.is_empty());
        assert_eq!(nowhere.board, board);
    }

    #[test]
    fn dead_template_cells_do_not_erase() {
        let size = GridSize::new(3, 3);
        let board = Board::with_alive(size, &[(0, 0), (2, 0)]);
        let glider = find_brush("glider").unwrap();
        let applied = apply_brush(Coord::new(1, 1), &board, &glider);
        assert!(applied.board.get(Coord::new(0, 0)).is_alive());
        assert!(applied.board.get(Coord::new(2, 0)).is_alive());
        assert!(!applied.painted.contains(&0));
    }

    #[test]
    fn already_alive_cells_still_count_as_painted() {
        let size = GridSize::new(3, 3);
        let board = Board::with_alive(size, &[(1, 1)]);
        let applied = apply_brush(Coord::new(1, 1), &board, &default_brush());
        assert_eq!(applied.painted, PaintedIndices::from([4]));
        assert_eq!(applied.board, board);
    }

    #[test]
    fn application_is_pure_and_deterministic() {
        let size = GridSize::new(12, 12);
        let board = Board::with_alive(size, &[(0, 0), (11, 11)]);
        let before = board.clone();
        let gun = find_brush("hwss").unwrap();
        let a = apply_brush(Coord::new(5, 6), &board, &gun);
        let b = apply_brush(Coord::new(5, 6), &board, &gun);
        assert_eq!(board, before);
        assert_eq!(a, b);
    }

    #[test]
    fn empty_board_is_a_no_op() {
        let board = Board::empty(GridSize::new(0, 0));
        let applied = apply_brush(Coord::new(0, 0), &board, &default_brush());
        assert!(applied.painted.is_empty());
        assert!(applied.board.is_empty());
    }
}
