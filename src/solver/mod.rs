// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Escape-cost solver.
//!
//! This module contains the computation side of the crate:
//! - Cost: per-(cell, direction) outcome, including the blocked sentinels
//! - DistanceTable: the solver's output, one Cost per cell and direction
//! - EscapeCostSolver: six directional sweeps filling a DistanceTable
//!
//! The solver borrows the grid read-only and never mutates it; all working
//! state is pass-local.

pub mod cost;
pub mod sweep;
pub mod table;

// Re-export for convenience
pub use cost::Cost;
pub use sweep::EscapeCostSolver;
pub use table::DistanceTable;
