//! Core data models for the Life sandbox.
//! A `Board` is a flat row-major grid; the live and preview boards wrap it.

use serde::{Deserialize, Serialize};

use crate::brush::Brush;
use crate::error::GridError;
use crate::geometry::{Coord, GridSize, coord_to_index};
use crate::life;
use crate::paint::{PaintedIndices, apply_brush};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    pub fn from_bit(bit: u8) -> Self {
        if bit == 0 { Cell::Dead } else { Cell::Alive }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: GridSize,
    /// Row-major cells; length = width * height.
    cells: Vec<Cell>,
}

impl Board {
    /// All-dead board of the given size.
    pub fn empty(size: GridSize) -> Self {
        Self { size, cells: vec![Cell::Dead; size.area()] }
    }

    pub fn from_cells(size: GridSize, cells: Vec<Cell>) -> Result<Self, GridError> {
        if cells.len() != size.area() {
            return Err(GridError::LengthMismatch {
                len: cells.len(),
                cols: size.width as usize,
                rows: size.height as usize,
            });
        }
        Ok(Self { size, cells })
    }

    pub fn from_bits(size: GridSize, bits: &[u8]) -> Result<Self, GridError> {
        Self::from_cells(size, bits.iter().copied().map(Cell::from_bit).collect())
    }

    /// Board with the given coordinates alive; coordinates outside the grid are ignored.
    #[cfg(test)]
    pub fn with_alive(size: GridSize, alive: &[(i32, i32)]) -> Self {
        let mut board = Self::empty(size);
        for &(x, y) in alive {
            if let Some(i) = size.index_of(Coord::new(x, y)) {
                board.cells[i] = Cell::Alive;
            }
        }
        board
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn cols(&self) -> u32 {
        self.size.width
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// State at `c`; anything off the grid reads as dead.
    pub fn get(&self, c: Coord) -> Cell {
        self.size.index_of(c).map(|i| self.cells[i]).unwrap_or(Cell::Dead)
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    #[cfg(test)]
    pub fn alive_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells.iter().enumerate().filter(|(_, c)| c.is_alive()).map(|(i, _)| i)
    }

    /// Writes through an already validated index. Callers obtain `i` from `GridSize::index_of`.
    pub(crate) fn set_index(&mut self, i: usize, cell: Cell) {
        self.cells[i] = cell;
    }

    /// Remaps onto a board of `new_size`, keeping every cell inside the overlapping rectangle.
    pub fn resized(&self, new_size: GridSize) -> Board {
        let mut out = Board::empty(new_size);
        let keep_w = self.size.width.min(new_size.width);
        let keep_h = self.size.height.min(new_size.height);
        for y in 0..keep_h {
            for x in 0..keep_w {
                let from = coord_to_index(x, y, self.size.width);
                let to = coord_to_index(x, y, new_size.width);
                out.cells[to] = self.cells[from];
            }
        }
        debug_assert_eq!(out.cells.len(), new_size.area());
        out
    }
}

/// Authoritative board that the simulation advances.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationBoard {
    pub board: Board,
    pub running: bool,
    pub generation: u64,
}

impl SimulationBoard {
    pub fn new(size: GridSize) -> Self {
        Self { board: Board::empty(size), running: false, generation: 0 }
    }

    pub fn size(&self) -> GridSize {
        self.board.size()
    }

    pub fn resize(&mut self, size: GridSize) {
        self.board = self.board.resized(size);
    }

    pub fn step(&mut self) {
        self.board = life::advance(&self.board);
        self.generation = self.generation.saturating_add(1);
    }

    /// Stamps `brush` at `anchor` and returns the indices it wrote.
    pub fn paint(&mut self, anchor: Coord, brush: &Brush) -> PaintedIndices {
        let applied = apply_brush(anchor, &self.board, brush);
        self.board = applied.board;
        applied.painted
    }

    pub fn clear(&mut self) {
        self.board = Board::empty(self.board.size());
        self.generation = 0;
    }
}

/// Transient board showing where the selected brush would land.
/// Always rebuilt from an all-dead seed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewBoard {
    pub board: Board,
}

impl PreviewBoard {
    pub fn new(size: GridSize) -> Self {
        Self { board: Board::empty(size) }
    }

    pub fn resize(&mut self, size: GridSize) {
        self.board = Board::empty(size);
    }

    pub fn show(&mut self, anchor: Coord, brush: &Brush) -> PaintedIndices {
        let applied = apply_brush(anchor, &Board::empty(self.board.size()), brush);
        self.board = applied.board;
        applied.painted
    }

    pub fn clear(&mut self) {
        self.board = Board::empty(self.board.size());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Board {
        // 3x2
        Board::from_bits(GridSize::new(3, 2), &[1, 0, 1, 0, 1, 1]).unwrap()
    }

    #[test]
    fn from_cells_checks_length() {
        let err = Board::from_bits(GridSize::new(3, 3), &[1, 0]).unwrap_err();
        assert_eq!(err, GridError::LengthMismatch { len: 2, cols: 3, rows: 3 });
    }

    #[test]
    fn get_treats_outside_as_dead() {
        let b = sample();
        assert_eq!(b.get(Coord::new(0, 0)), Cell::Alive);
        assert_eq!(b.get(Coord::new(1, 0)), Cell::Dead);
        assert_eq!(b.get(Coord::new(3, 0)), Cell::Dead);
        assert_eq!(b.get(Coord::new(-1, 1)), Cell::Dead);
    }

    #[test]
    fn grow_keeps_cells_and_exposes_dead() {
        let b = sample();
        let grown = b.resized(GridSize::new(5, 4));
        assert_eq!(grown.len(), 20);
        for y in 0..4 {
            for x in 0..5 {
                let c = Coord::new(x, y);
                assert_eq!(grown.get(c), b.get(c), "cell {:?}", c);
            }
        }
        assert_eq!(grown.alive_count(), b.alive_count());
    }

    #[test]
    fn shrink_drops_outside_cells_only() {
        let b = Board::with_alive(GridSize::new(6, 6), &[(0, 0), (1, 1), (5, 5), (2, 4)]);
        let small = b.resized(GridSize::new(3, 3));
        assert_eq!(small.size(), GridSize::new(3, 3));
        assert_eq!(small.alive_indices().collect::<Vec<_>>(), vec![0, 4]);
    }

    #[test]
    fn resize_to_same_size_is_equal() {
        let b = sample();
        assert_eq!(b.resized(b.size()), b);
    }

    #[test]
    fn resize_to_zero_is_empty() {
        let b = sample().resized(GridSize::new(0, 7));
        assert!(b.is_empty());
        assert_eq!(b.resized(GridSize::new(2, 2)), Board::empty(GridSize::new(2, 2)));
    }

    #[test]
    fn simulation_board_counts_generations() {
        let mut sim = SimulationBoard::new(GridSize::new(4, 4));
        sim.board = Board::with_alive(sim.size(), &[(1, 1)]);
        sim.step();
        assert_eq!(sim.generation, 1);
        assert_eq!(sim.board.alive_count(), 0);
        sim.clear();
        assert_eq!(sim.generation, 0);
    }
}
