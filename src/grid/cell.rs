// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Cell classification.
//!
//! Each grid position holds exactly one [`CellKind`]; cells own no other
//! lasting state. The solver's per-run bookkeeping lives in the solver, not
//! here, so a grid can be handed to `compute` any number of times.
//!
//! The external text format marks a cell with a token whose first character
//! is the discriminator: `W` for walls, `C` for corridors, `M` for hazards
//! (monitored cells in the original problem statement). Unrecognized tokens
//! are rejected outright rather than defaulted.

use crate::grid::errors::GridError;

/// Classification of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// Impassable. A wall has no escape cost itself and cuts every chain
    /// that runs into it.
    Wall,
    /// Passable, charging one extra unit of cost when crossed.
    Hazard,
    /// Passable and free to cross.
    Corridor,
}

impl CellKind {
    /// Parse a cell token by its leading marker character.
    ///
    /// `row` and `col` locate the token in the input and are only used to
    /// build the error value.
    ///
    /// # Examples
    ///
    /// ```
    /// use hex_escape::grid::CellKind;
    ///
    /// assert_eq!(CellKind::from_token("W1", 0, 0), Ok(CellKind::Wall));
    /// assert_eq!(CellKind::from_token("C", 0, 0), Ok(CellKind::Corridor));
    /// assert_eq!(CellKind::from_token("M3", 0, 0), Ok(CellKind::Hazard));
    /// assert!(CellKind::from_token("X", 0, 0).is_err());
    /// ```
    pub fn from_token(token: &str, row: usize, col: usize) -> Result<Self, GridError> {
        match token.chars().next() {
            Some('W') => Ok(CellKind::Wall),
            Some('C') => Ok(CellKind::Corridor),
            Some('M') => Ok(CellKind::Hazard),
            _ => Err(GridError::UnknownCellToken {
                row,
                col,
                token: token.to_string(),
            }),
        }
    }

    /// Whether the cell can be stepped onto at all.
    pub fn is_passable(self) -> bool {
        !matches!(self, CellKind::Wall)
    }
}
