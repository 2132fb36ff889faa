// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The six compass headings of the hex lattice.
//!
//! The ordering below is canonical and fixed: `DistanceTable` indexes its
//! storage by discriminant, and the per-parity delta tables in `hex` are
//! laid out in the same order. Earlier drafts of the problem rotated this
//! ordering between revisions; this crate does not.

use strum::EnumCount;
use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

/// A heading on the hexagonal lattice.
///
/// North and South move within a column; the four diagonal headings change
/// column and their vertical component depends on the parity of the column
/// stepped from (see [`HexGrid::neighbor`](crate::grid::HexGrid::neighbor)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCountMacro, EnumIter)]
#[repr(u8)]
pub enum Direction {
    North,
    NorthEast,
    SouthEast,
    South,
    SouthWest,
    NorthWest,
}

/// Number of headings.
pub const NDIRECTIONS: usize = Direction::COUNT;

impl Direction {
    /// Get the direction as a usize (for array indexing).
    pub fn as_usize(self) -> usize {
        self as usize
    }

    /// The reverse heading.
    ///
    /// Walking `d` then `d.opposite()` returns to the starting cell whenever
    /// both steps stay on the grid.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::NorthEast => Direction::SouthWest,
            Direction::SouthEast => Direction::NorthWest,
            Direction::South => Direction::North,
            Direction::SouthWest => Direction::NorthEast,
            Direction::NorthWest => Direction::SouthEast,
        }
    }
}
