//! Brush templates and the quarter-turn transform.

use serde::Serialize;

use crate::error::GridError;
use crate::geometry::{Coord, GridSize, coord_to_index, index_to_coord};
use crate::model::{Board, Cell};

struct BrushDef {
    name: &'static str,
    display_name: &'static str,
    cols: u32,
    rows: u32,
    template: &'static [u8],
}

#[rustfmt::skip]
const BRUSHES: &[BrushDef] = &[
    BrushDef { name: "pixel", display_name: "Pixel", cols: 1, rows: 1, template: &[1] },
    BrushDef {
        name: "glider", display_name: "Glider", cols: 3, rows: 3,
        template: &[
            0, 1, 0,
            0, 0, 1,
            1, 1, 1,
        ],
    },
    BrushDef {
        name: "diehard", display_name: "Die Hard", cols: 8, rows: 2,
        template: &[
            1, 1, 0, 0, 0, 0, 1, 0,
            0, 1, 0, 0, 0, 1, 1, 1,
        ],
    },
    BrushDef {
        name: "rpentomino", display_name: "R-Pentomino", cols: 3, rows: 3,
        template: &[
            0, 1, 1,
            1, 1, 0,
            0, 1, 0,
        ],
    },
    BrushDef {
        name: "mwss", display_name: "Middle weight space ship", cols: 6, rows: 5,
        template: &[
            0, 0, 0, 1, 0, 0,
            0, 1, 0, 0, 0, 1,
            1, 0, 0, 0, 0, 0,
            1, 0, 0, 0, 0, 1,
            1, 1, 1, 1, 1, 0,
        ],
    },
    BrushDef {
        name: "hwss", display_name: "Heavy weight space ship", cols: 7, rows: 5,
        template: &[
            0, 0, 0, 1, 1, 0, 0,
            0, 1, 0, 0, 0, 0, 1,
            1, 0, 0, 0, 0, 0, 0,
            1, 0, 0, 0, 0, 0, 1,
            1, 1, 1, 1, 1, 1, 0,
        ],
    },
    BrushDef {
        name: "gospergun", display_name: "Gosper glider gun", cols: 36, rows: 9,
        template: &[
            0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1,0,0,0,0,0,0,0,0,0,0,0,
            0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1,0,1,0,0,0,0,0,0,0,0,0,0,0,
            0,0,0,0,0,0,0,0,0,0,0,0,1,1,0,0,0,0,0,0,1,1,0,0,0,0,0,0,0,0,0,0,0,0,1,1,
            0,0,0,0,0,0,0,0,0,0,0,1,0,0,0,1,0,0,0,0,1,1,0,0,0,0,0,0,0,0,0,0,0,0,1,1,
            1,1,0,0,0,0,0,0,0,0,1,0,0,0,0,0,1,0,0,0,1,1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
            1,1,0,0,0,0,0,0,0,0,1,0,0,0,1,0,1,1,0,0,0,0,1,0,1,0,0,0,0,0,0,0,0,0,0,0,
            0,0,0,0,0,0,0,0,0,0,1,0,0,0,0,0,1,0,0,0,0,0,0,0,1,0,0,0,0,0,0,0,0,0,0,0,
            0,0,0,0,0,0,0,0,0,0,0,1,0,0,0,1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
            0,0,0,0,0,0,0,0,0,0,0,0,1,1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
        ],
    },
];

pub const DEFAULT_BRUSH: &str = "pixel";

/// A named stamp. Offsets are relative to the template's center and
/// always line up one-to-one with the template cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Brush {
    pub name: &'static str,
    pub display_name: &'static str,
    template: Board,
    offsets: Vec<(i32, i32)>,
}

impl Brush {
    pub fn new(name: &'static str, display_name: &'static str, template: Board) -> Self {
        let center = center_of(template.size());
        let offsets = offsets_from(&template, center);
        Self { name, display_name, template, offsets }
    }

    fn from_def(def: &BrushDef) -> Self {
        let template = Board::from_bits(GridSize::new(def.cols, def.rows), def.template)
            .unwrap_or_else(|e| panic!("brush `{}`: {}", def.name, e));
        Self::new(def.name, def.display_name, template)
    }

    pub fn template(&self) -> &Board {
        &self.template
    }

    pub fn size(&self) -> GridSize {
        self.template.size()
    }

    /// Number of template cells, dead ones included.
    pub fn cell_count(&self) -> usize {
        self.template.len()
    }

    #[cfg(test)]
    pub fn center(&self) -> Coord {
        center_of(self.size())
    }

    pub fn offsets(&self) -> &[(i32, i32)] {
        &self.offsets
    }

    /// Quarter turn: reads old columns right to left, each top to bottom,
    /// so the new width is the old height.
    pub fn rotate90(&self) -> Brush {
        let GridSize { width: cols, height: rows } = self.template.size();
        let mut cells = Vec::with_capacity(self.template.len());
        for x in (0..cols).rev() {
            for y in 0..rows {
                cells.push(self.template.cells()[coord_to_index(x, y, cols)]);
            }
        }
        let template = match Board::from_cells(GridSize::new(rows, cols), cells) {
            Ok(t) => t,
            Err(e) => unreachable!("rotation preserves cell count: {e}"),
        };
        Brush::new(self.name, self.display_name, template)
    }

    pub fn is_alive_at(&self, i: usize) -> bool {
        self.template.cells().get(i).copied().is_some_and(Cell::is_alive)
    }
}

fn center_of(size: GridSize) -> Coord {
    Coord::new(
        (size.width.saturating_sub(1) / 2) as i32,
        (size.height.saturating_sub(1) / 2) as i32,
    )
}

fn offsets_from(template: &Board, center: Coord) -> Vec<(i32, i32)> {
    (0..template.len())
        .map(|i| {
            let c = index_to_coord(i, template.cols());
            (c.x - center.x, c.y - center.y)
        })
        .collect()
}

/// Every brush, in picker order.
pub fn catalog() -> Vec<Brush> {
    BRUSHES.iter().map(Brush::from_def).collect()
}

pub fn find_brush(name: &str) -> Result<Brush, GridError> {
    BRUSHES
        .iter()
        .find(|def| def.name == name)
        .map(Brush::from_def)
        .ok_or_else(|| GridError::UnknownBrush(name.to_string()))
}

pub fn default_brush() -> Brush {
    Brush::from_def(&BRUSHES[0])
}
