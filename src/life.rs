//! Conway's Game of Life transition on a bounded board.
//!
//! A live cell with two or three live neighbours survives, a dead cell with
//! exactly three is born, everything else is dead next generation. Cells off
//! the edge count as dead.

use crate::geometry::{Coord, index_to_coord};
use crate::model::{Board, Cell};

#[rustfmt::skip]
const NEIGHBOURS: [(i32, i32); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

fn alive_neighbours(board: &Board, c: Coord) -> usize {
    NEIGHBOURS
        .iter()
        .filter(|&&(dx, dy)| board.get(c.offset(dx, dy)).is_alive())
        .count()
}

/// Computes the next generation into a fresh board; `board` is only read.
pub fn advance(board: &Board) -> Board {
    let mut next = Board::empty(board.size());
    for (i, &cell) in board.cells().iter().enumerate() {
        let c = index_to_coord(i, board.cols());
        let state = match (cell, alive_neighbours(board, c)) {
            (Cell::Alive, 2..=3) => Cell::Alive,
            (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        };
        if state.is_alive() {
            next.set_index(i, state);
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brush::find_brush;
    use crate::geometry::GridSize;
    use crate::paint::apply_brush;

    #[test]
    fn lone_cell_dies() {
        let b = Board::with_alive(GridSize::new(3, 3), &[(1, 1)]);
        assert_eq!(advance(&b).alive_count(), 0);
    }

    #[test]
    fn block_is_still() {
        let size = GridSize::new(4, 4);
        let block = Board::with_alive(size, &[(1, 1), (2, 1), (1, 2), (2, 2)]);
        let mut b = block.clone();
        for _ in 0..5 {
            b = advance(&b);
            assert_eq!(b, block);
        }
    }

    #[test]
    fn block_in_corner_is_still() {
        // neighbours past the edge are dead, not wrapped
        let size = GridSize::new(3, 3);
        let block = Board::with_alive(size, &[(0, 0), (1, 0), (0, 1), (1, 1)]);
        assert_eq!(advance(&block), block);
    }

    #[test]
    fn blinker_oscillates() {
        let size = GridSize::new(3, 3);
        let upright = Board::with_alive(size, &[(1, 0), (1, 1), (1, 2)]);
        let flat = Board::with_alive(size, &[(0, 1), (1, 1), (2, 1)]);
        let g1 = advance(&upright);
        assert_eq!(g1, flat);
        assert_eq!(advance(&g1), upright);
    }

    #[test]
    fn input_board_is_not_modified() {
        let size = GridSize::new(5, 5);
        let b = Board::with_alive(size, &[(1, 2), (2, 2), (3, 2)]);
        let copy = b.clone();
        let _ = advance(&b);
        assert_eq!(b, copy);
    }

    #[test]
    fn glider_moves_one_diagonal_every_four_generations() {
        let size = GridSize::new(12, 12);
        let glider = find_brush("glider").unwrap();
        let start = apply_brush(Coord::new(3, 3), &Board::empty(size), &glider).board;
        let mut b = start.clone();
        for _ in 0..4 {
            b = advance(&b);
        }
        let expected = apply_brush(Coord::new(4, 4), &Board::empty(size), &glider).board;
        assert_eq!(b, expected);
    }

    #[test]
    fn empty_board_stays_empty() {
        let b = Board::empty(GridSize::new(0, 0));
        assert!(advance(&b).is_empty());
    }
}
