// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Flat-array hexagonal grid with parity-aware neighbour lookup.
//!
//! The lattice is unrolled row-major into `rows * columns` cells where
//! `columns = 2 * half_cols`. Within a row, even and odd columns are the two
//! parity classes of the hex lattice; stepping diagonally from an even
//! column moves up a row where the same step from an odd column stays level
//! (and symmetrically downward).
//!
//! Neighbour lookup is a total function: a delta table keyed by (column
//! parity, direction) gives the row/column offsets, and a single bounds
//! check decides whether the step leaves the grid. Earlier formulations
//! special-cased the first and last columns with unreachable fallthrough
//! branches; every one of those cases is just an out-of-bounds coordinate,
//! so the bounds check subsumes them.

use crate::grid::cell::CellKind;
use crate::grid::direction::{Direction, NDIRECTIONS};
use crate::grid::errors::GridError;

/// Row/column offsets per direction for cells in an even column, in the
/// canonical direction order.
const EVEN_COLUMN_DELTAS: [(isize, isize); NDIRECTIONS] = [
    (-1, 0),  // North
    (-1, 1),  // NorthEast
    (0, 1),   // SouthEast
    (1, 0),   // South
    (0, -1),  // SouthWest
    (-1, -1), // NorthWest
];

/// Row/column offsets per direction for cells in an odd column.
const ODD_COLUMN_DELTAS: [(isize, isize); NDIRECTIONS] = [
    (-1, 0), // North
    (0, 1),  // NorthEast
    (1, 1),  // SouthEast
    (1, 0),  // South
    (1, -1), // SouthWest
    (0, -1), // NorthWest
];

/// A hexagonal labyrinth stored in offset coordinates.
///
/// Owns one contiguous row-major sequence of cell kinds. Adjacency is
/// computed by [`neighbor`](HexGrid::neighbor); cells store nothing but
/// their kind.
///
/// # Examples
///
/// ```
/// use hex_escape::grid::{Direction, HexGrid};
///
/// // One row, two logical columns (half_cols = 1).
/// let grid = HexGrid::create(1, 1, &[vec!["C", "W"]]).unwrap();
///
/// assert_eq!(grid.neighbor(0, 0, Direction::SouthEast), Some((0, 1)));
/// assert_eq!(grid.neighbor(0, 0, Direction::North), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexGrid {
    rows: usize,
    columns: usize,
    cells: Vec<CellKind>,
}

impl HexGrid {
    /// Build a grid from `rows` rows of `2 * half_cols` cell tokens.
    ///
    /// Tokens must arrive in final column order: token `j` of a row is
    /// logical column `j`. Callers reading the external two-block row format
    /// interleave the halves first (see the `escape` binary).
    ///
    /// Fails with [`GridError::InvalidDimensions`] if `rows` or `half_cols`
    /// is zero, [`GridError::MalformedRow`] if any row (or the row count
    /// itself) does not match the dimensions, and
    /// [`GridError::UnknownCellToken`] for an unrecognized token. No partial
    /// grid is ever produced.
    pub fn create<S: AsRef<str>>(
        rows: usize,
        half_cols: usize,
        row_tokens: &[Vec<S>],
    ) -> Result<Self, GridError> {
        if rows == 0 || half_cols == 0 {
            return Err(GridError::InvalidDimensions { rows, half_cols });
        }
        let columns = 2 * half_cols;

        // A missing row supplied no tokens; a surplus row was expected to
        // supply none.
        if row_tokens.len() < rows {
            return Err(GridError::MalformedRow {
                row: row_tokens.len(),
                expected: columns,
                found: 0,
            });
        }
        if row_tokens.len() > rows {
            return Err(GridError::MalformedRow {
                row: rows,
                expected: 0,
                found: row_tokens[rows].len(),
            });
        }

        let mut cells = Vec::with_capacity(rows * columns);
        for (row, tokens) in row_tokens.iter().enumerate() {
            if tokens.len() != columns {
                return Err(GridError::MalformedRow {
                    row,
                    expected: columns,
                    found: tokens.len(),
                });
            }
            for (col, token) in tokens.iter().enumerate() {
                cells.push(CellKind::from_token(token.as_ref(), row, col)?);
            }
        }

        Ok(Self {
            rows,
            columns,
            cells,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of logical columns (always even).
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid holds no cells. Construction guarantees it never
    /// does; provided for completeness.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Kind of the cell at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    pub fn kind(&self, row: usize, col: usize) -> CellKind {
        assert!(
            row < self.rows && col < self.columns,
            "Cell ({}, {}) outside {}x{} grid",
            row,
            col,
            self.rows,
            self.columns
        );
        self.cells[row * self.columns + col]
    }

    /// Coordinates of the adjacent cell in `direction`, or `None` when the
    /// step leaves the grid.
    ///
    /// Total over all in-bounds (row, col, direction) combinations: the
    /// delta for the cell's column parity is applied and the result bounds
    /// checked, with the boundary always winning over the arithmetic.
    ///
    /// # Panics
    ///
    /// Panics if (row, col) itself is out of bounds.
    pub fn neighbor(&self, row: usize, col: usize, direction: Direction) -> Option<(usize, usize)> {
        assert!(
            row < self.rows && col < self.columns,
            "Cell ({}, {}) outside {}x{} grid",
            row,
            col,
            self.rows,
            self.columns
        );
        let deltas = if col % 2 == 0 {
            &EVEN_COLUMN_DELTAS
        } else {
            &ODD_COLUMN_DELTAS
        };
        let (dr, dc) = deltas[direction.as_usize()];
        let nr = row as isize + dr;
        let nc = col as isize + dc;
        if nr < 0 || nc < 0 || nr >= self.rows as isize || nc >= self.columns as isize {
            None
        } else {
            Some((nr as usize, nc as usize))
        }
    }
}
