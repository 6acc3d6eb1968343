//! Square cell grid with row-major storage.

use voidfleet_core::types::{Cell, Coord};

/// An N x N board. Cells are stored row-major (`y * size + x`), all
/// initialized empty with no shields and no impact tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: u8,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(size: u8) -> Self {
        Self {
            size,
            cells: vec![Cell::default(); size as usize * size as usize],
        }
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn in_bounds(&self, at: Coord) -> bool {
        at.x < self.size && at.y < self.size
    }

    pub fn cell(&self, at: Coord) -> Option<&Cell> {
        if self.in_bounds(at) {
            Some(&self.cells[self.index(at)])
        } else {
            None
        }
    }

    pub fn cell_mut(&mut self, at: Coord) -> Option<&mut Cell> {
        if self.in_bounds(at) {
            let idx = self.index(at);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    /// Every coordinate on the board, row by row.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        let size = self.size;
        (0..size).flat_map(move |y| (0..size).map(move |x| Coord::new(x, y)))
    }

    /// Cells in row-major order, matching `coords()`.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Coordinates whose state is not yet hit or miss.
    pub fn unresolved(&self) -> Vec<Coord> {
        self.coords()
            .filter(|&c| !self.cells[self.index(c)].state.is_resolved())
            .collect()
    }

    /// Reset every cell to its initial empty state. Used when a boss warp
    /// wipes the board's attack history; the caller re-marks ship cells.
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::default();
        }
    }

    fn index(&self, at: Coord) -> usize {
        at.y as usize * self.size as usize + at.x as usize
    }
}
