// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The solver's output table.
//!
//! One [`Cost`] per (cell, direction), stored flat and indexed by the
//! canonical direction order. Created empty by the solver, filled
//! monotonically during the six sweeps, immutable once returned.

use crate::grid::direction::{Direction, NDIRECTIONS};
use crate::solver::cost::Cost;
use strum::IntoEnumIterator;

/// Escape costs for every cell and direction of one grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceTable {
    rows: usize,
    columns: usize,
    costs: Vec<Cost>,
}

impl DistanceTable {
    /// Create a table with every slot `Undefined`; the solver overwrites
    /// each slot exactly once.
    pub(crate) fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            costs: vec![Cost::Undefined; rows * columns * NDIRECTIONS],
        }
    }

    fn index(&self, row: usize, col: usize, direction: Direction) -> usize {
        assert!(
            row < self.rows && col < self.columns,
            "Cell ({}, {}) outside {}x{} table",
            row,
            col,
            self.rows,
            self.columns
        );
        (row * self.columns + col) * NDIRECTIONS + direction.as_usize()
    }

    /// Number of rows covered.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns covered.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Escape cost of the cell at (row, col) in `direction`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    pub fn get(&self, row: usize, col: usize, direction: Direction) -> Cost {
        self.costs[self.index(row, col, direction)]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, direction: Direction, cost: Cost) {
        let i = self.index(row, col, direction);
        self.costs[i] = cost;
    }

    /// Cheapest escape over the six directions, or `None` when every
    /// direction is blocked (walls have no escape by definition).
    pub fn best(&self, row: usize, col: usize) -> Option<u32> {
        Direction::iter()
            .filter_map(|d| self.get(row, col, d).steps())
            .min()
    }
}
