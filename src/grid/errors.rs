// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for grid construction.
//!
//! These cover structural input failures only. Blocked escape routes are not
//! errors: they are [`Cost`](crate::solver::Cost) values produced by the
//! solver.

use std::error::Error;
use std::fmt;
use strum_macros::EnumCount as EnumCountMacro;

/// Errors that can occur while building a [`HexGrid`](crate::grid::HexGrid).
///
/// All variants are fatal to construction; no partial grid is produced.
#[derive(Debug, Clone, PartialEq, Eq, EnumCountMacro)]
pub enum GridError {
    /// Row or half-column count is zero.
    InvalidDimensions { rows: usize, half_cols: usize },

    /// A row did not supply exactly `2 * half_cols` tokens.
    MalformedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A token's leading character is not one of the recognized markers
    /// (`W`, `C`, `M`).
    UnknownCellToken {
        row: usize,
        col: usize,
        token: String,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidDimensions { rows, half_cols } => {
                write!(
                    f,
                    "Grid dimensions must be positive: {} rows, {} half-columns",
                    rows, half_cols
                )
            }
            GridError::MalformedRow {
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Row {} has {} tokens but {} were expected",
                    row, found, expected
                )
            }
            GridError::UnknownCellToken { row, col, token } => {
                write!(
                    f,
                    "Unrecognized cell token {:?} at row {}, column {}",
                    token, row, col
                )
            }
        }
    }
}

impl Error for GridError {}
