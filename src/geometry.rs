//! Coordinate helpers shared by boards and brushes.

use serde::{Deserialize, Serialize};

/// Board dimensions in cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    pub width: u32,
    pub height: u32,
}

impl GridSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn contains(&self, c: Coord) -> bool {
        c.x >= 0 && c.y >= 0 && (c.x as u32) < self.width && (c.y as u32) < self.height
    }

    /// Flat index of `c`, or `None` when it falls outside the grid.
    pub fn index_of(&self, c: Coord) -> Option<usize> {
        if self.contains(c) {
            Some(coord_to_index(c.x as u32, c.y as u32, self.width))
        } else {
            None
        }
    }
}

/// Signed cell coordinate. Pointer math may produce negatives; bounds checks reject them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }
}

pub fn coord_to_index(x: u32, y: u32, cols: u32) -> usize {
    y as usize * cols as usize + x as usize
}

pub fn index_to_coord(index: usize, cols: u32) -> Coord {
    let cols = cols as usize;
    Coord { x: (index % cols) as i32, y: (index / cols) as i32 }
}

/// Maps one pixel axis to a cell axis for cells of `cell_size` separated by `gap`.
pub fn pixel_to_cell(px: f64, cell_size: f64, gap: f64) -> i32 {
    (px / (cell_size + gap)).floor() as i32
}

/// Number of whole cells (plus trailing gap) that fit in `extent` pixels.
pub fn cells_that_fit(extent: f64, cell_size: f64, gap: f64) -> u32 {
    ((extent + gap) / (cell_size + gap)).floor().max(0.0) as u32
}
