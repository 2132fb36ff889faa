// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Escape-cost computation for hexagonal labyrinths.
//!
//! A labyrinth is a hexagonal lattice stored as a flat rectangular array in
//! offset coordinates: adjacency depends on column parity, so a cell's six
//! neighbours are computed, never stored. Cells are walls (impassable),
//! corridors (free to cross) or hazards (one extra unit of cost to cross).
//!
//! For every cell and each of the six directions the solver computes the
//! minimum cost of leaving the grid by walking a straight hex-line in that
//! single fixed direction. Crossing the boundary costs one unit; corridors
//! add nothing; each hazard on the way out adds one.
//!
//! # Architecture
//!
//! Two components, consumed in order:
//!
//! 1. [`HexGrid`] - owns the cell storage and answers neighbour lookups
//!    under the offset-coordinate scheme. Leaf component.
//! 2. [`EscapeCostSolver`] - consumes a grid and fills a [`DistanceTable`]
//!    with a cost per (cell, direction). Depends on the grid only through
//!    its neighbour contract.
//!
//! # Algorithm
//!
//! For a fixed direction the neighbour relation partitions the grid into
//! disjoint simple chains, each terminating at the boundary, so the cost of
//! a cell depends only on the cost of its single successor: a linear
//! recurrence, not a graph search. The solver runs six independent sweeps,
//! each walking chains from the boundary end inward with memoization, for
//! O(rows * columns) work per direction.
//!
//! Blocked outcomes are data, not failures: a wall cell itself has no cost
//! ([`Cost::Undefined`]) and a chain cut off by a wall yields
//! [`Cost::Unreachable`] for everything behind it.

pub mod grid;
pub mod solver;

// Re-export commonly used types
pub use grid::{CellKind, Direction, GridError, HexGrid};
pub use solver::{Cost, DistanceTable, EscapeCostSolver};
