// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Hexagonal grid model.
//!
//! This module contains the grid-side types:
//! - CellKind: wall / hazard / corridor classification of one cell
//! - Direction: the six compass headings of the hex lattice
//! - HexGrid: flat row-major storage plus parity-aware neighbour lookup
//! - GridError: construction failures
//!
//! The lattice is stored in offset coordinates: logical columns alternate
//! between two parity classes and the vertical component of a diagonal step
//! depends on the parity of the column stepped from.

pub mod cell;
pub mod direction;
pub mod errors;
pub mod hex;

// Re-export for convenience
pub use cell::CellKind;
pub use direction::Direction;
pub use errors::GridError;
pub use hex::HexGrid;
