// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Directional sweeps computing escape costs.
//!
//! For one fixed direction every cell has at most one successor, so the
//! neighbour relation partitions the grid into disjoint simple chains, each
//! strictly monotone in row or column and therefore acyclic, each ending at
//! the grid boundary or at a wall. Along a chain the cost is a linear
//! recurrence:
//!
//! - no successor (the cell is on the edge): `Steps(1)`,
//! - wall successor: `Unreachable`,
//! - corridor successor: the successor's cost unchanged,
//! - hazard successor: the successor's cost plus one.
//!
//! A sweep visits every cell, walks its chain forward to the first cell
//! whose cost is already known (or to the edge, or to a wall), then unwinds
//! the walked segment applying the recurrence. Each (cell, direction) is
//! computed exactly once; the "already known" marker is sweep-local working
//! state, never stored on the grid.

use crate::grid::cell::CellKind;
use crate::grid::direction::Direction;
use crate::grid::hex::HexGrid;
use crate::solver::cost::Cost;
use crate::solver::table::DistanceTable;
use strum::IntoEnumIterator;

/// Computes a [`DistanceTable`] for a grid.
///
/// Stateless; borrows the grid read-only for the duration of one
/// computation and owns nothing but the table it returns.
pub struct EscapeCostSolver;

impl EscapeCostSolver {
    /// Compute the escape cost of every cell in all six directions.
    ///
    /// Six independent passes, each O(rows * columns); deterministic for an
    /// unchanged grid.
    pub fn compute(grid: &HexGrid) -> DistanceTable {
        let mut table = DistanceTable::new(grid.rows(), grid.columns());
        for direction in Direction::iter() {
            Self::sweep_direction(grid, direction, &mut table);
        }
        table
    }

    /// Fill one direction's slice of the table.
    fn sweep_direction(grid: &HexGrid, direction: Direction, table: &mut DistanceTable) {
        let columns = grid.columns();
        let mut resolved = vec![false; grid.len()];
        for row in 0..grid.rows() {
            for col in 0..columns {
                if !resolved[row * columns + col] {
                    Self::resolve_chain(grid, direction, row, col, &mut resolved, table);
                }
            }
        }
    }

    /// Resolve the chain segment starting at (row, col): walk forward to a
    /// terminus, then unwind applying the recurrence.
    fn resolve_chain(
        grid: &HexGrid,
        direction: Direction,
        row: usize,
        col: usize,
        resolved: &mut [bool],
        table: &mut DistanceTable,
    ) {
        let columns = grid.columns();
        let mut chain: Vec<(usize, usize)> = Vec::new();
        let mut cursor = (row, col);

        // Kind and cost of the cell ahead of the last chain element, or
        // None when the chain steps off the grid.
        let mut ahead: Option<(CellKind, Cost)> = loop {
            let (r, c) = cursor;
            let i = r * columns + c;
            let kind = grid.kind(r, c);
            if kind == CellKind::Wall {
                // A wall terminates the walk and has no cost of its own.
                if !resolved[i] {
                    table.set(r, c, direction, Cost::Undefined);
                    resolved[i] = true;
                }
                break Some((kind, Cost::Undefined));
            }
            if resolved[i] {
                break Some((kind, table.get(r, c, direction)));
            }
            chain.push((r, c));
            match grid.neighbor(r, c, direction) {
                None => break None,
                Some(next) => cursor = next,
            }
        };

        for &(r, c) in chain.iter().rev() {
            let cost = match ahead {
                None => Cost::Steps(1),
                Some((CellKind::Corridor, Cost::Steps(n))) => Cost::Steps(n),
                Some((CellKind::Hazard, Cost::Steps(n))) => Cost::Steps(n + 1),
                Some(_) => Cost::Unreachable,
            };
            table.set(r, c, direction, cost);
            resolved[r * columns + c] = true;
            ahead = Some((grid.kind(r, c), cost));
        }
    }
}
