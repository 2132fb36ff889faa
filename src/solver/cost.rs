// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-(cell, direction) escape cost.
//!
//! Blocked outcomes are ordinary values here, not errors: the solver always
//! succeeds and the table it fills answers every (cell, direction) query
//! with one of the three variants below.

use std::fmt;

/// Outcome of escaping from one cell in one fixed direction.
///
/// # Examples
///
/// ```
/// use hex_escape::solver::Cost;
///
/// assert_eq!(Cost::Steps(2).steps(), Some(2));
/// assert_eq!(Cost::Unreachable.steps(), None);
/// assert_eq!(format!("{}", Cost::Steps(2)), "2");
/// assert_eq!(format!("{}", Cost::Unreachable), "-");
/// assert_eq!(format!("{}", Cost::Undefined), "#");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cost {
    /// Total cost of leaving the grid this way: one unit for the boundary
    /// crossing plus one per hazard traversed.
    Steps(u32),
    /// The straight line in this direction runs into a wall before the
    /// boundary.
    Unreachable,
    /// The cell itself is a wall and participates in no chain.
    Undefined,
}

impl Cost {
    /// The cost as a number of units, or `None` for the blocked sentinels.
    pub fn steps(self) -> Option<u32> {
        match self {
            Cost::Steps(n) => Some(n),
            Cost::Unreachable | Cost::Undefined => None,
        }
    }

    /// Whether this outcome actually leaves the grid.
    pub fn is_escape(self) -> bool {
        matches!(self, Cost::Steps(_))
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cost::Steps(n) => write!(f, "{}", n),
            Cost::Unreachable => write!(f, "-"),
            Cost::Undefined => write!(f, "#"),
        }
    }
}
