// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! End-to-end scenarios for the escape-cost pipeline: grids built through
//! the public API, solved, and checked cell by cell.

use hex_escape::{CellKind, Cost, Direction, DistanceTable, EscapeCostSolver, GridError, HexGrid};
use strum::IntoEnumIterator;

fn solve(rows: usize, half_cols: usize, tokens: &[Vec<&str>]) -> (HexGrid, DistanceTable) {
    let grid = HexGrid::create(rows, half_cols, tokens).unwrap();
    let table = EscapeCostSolver::compute(&grid);
    (grid, table)
}

#[test]
fn test_single_cell_pair_grid() {
    // Smallest legal grid: one row, one column pair, both corridors.
    // Every direction from either cell leaves the grid at a cost of one,
    // directly or through the free partner cell.
    let (_, table) = solve(1, 1, &[vec!["C", "C"]]);
    for col in 0..2 {
        for d in Direction::iter() {
            assert_eq!(table.get(0, col, d), Cost::Steps(1), "column {} {:?}", col, d);
        }
    }
}

#[test]
fn test_boundary_cells_cost_one_everywhere() {
    // Any non-wall cell whose neighbour lookup says "off grid" costs one.
    let tokens = vec![
        vec!["C", "M", "C", "M"],
        vec!["M", "C", "M", "C"],
        vec!["C", "C", "C", "C"],
    ];
    let (grid, table) = solve(3, 2, &tokens);
    for row in 0..grid.rows() {
        for col in 0..grid.columns() {
            for d in Direction::iter() {
                if grid.neighbor(row, col, d).is_none() {
                    assert_eq!(
                        table.get(row, col, d),
                        Cost::Steps(1),
                        "({}, {}) {:?}",
                        row,
                        col,
                        d
                    );
                }
            }
        }
    }
}

#[test]
fn test_walls_are_undefined_in_all_directions() {
    let tokens = vec![vec!["W", "C", "W", "C"], vec!["C", "W", "C", "W"]];
    let (grid, table) = solve(2, 2, &tokens);
    for row in 0..grid.rows() {
        for col in 0..grid.columns() {
            if grid.kind(row, col) == CellKind::Wall {
                for d in Direction::iter() {
                    assert_eq!(table.get(row, col, d), Cost::Undefined);
                }
                assert_eq!(table.best(row, col), None);
            }
        }
    }
}

#[test]
fn test_corridor_chain_to_north_boundary() {
    // Column 0 is a straight northward chain of three corridors. Corridors
    // pass their neighbour's cost through unchanged, so the whole chain
    // shares the boundary cost of one.
    let tokens = vec![vec!["C", "W"], vec!["C", "W"], vec!["C", "W"]];
    let (_, table) = solve(3, 1, &tokens);
    assert_eq!(table.get(0, 0, Direction::North), Cost::Steps(1));
    assert_eq!(table.get(1, 0, Direction::North), Cost::Steps(1));
    assert_eq!(table.get(2, 0, Direction::North), Cost::Steps(1));
}

#[test]
fn test_hazard_in_chain_charges_once() {
    // Same chain with the middle cell a hazard: the cell behind it pays
    // one surcharge for crossing it; the hazard itself exits through the
    // free corridor above.
    let tokens = vec![vec!["C", "W"], vec!["M", "W"], vec!["C", "W"]];
    let (_, table) = solve(3, 1, &tokens);
    assert_eq!(table.get(0, 0, Direction::North), Cost::Steps(1));
    assert_eq!(table.get(1, 0, Direction::North), Cost::Steps(1));
    assert_eq!(table.get(2, 0, Direction::North), Cost::Steps(2));
}

#[test]
fn test_wall_terminus_blocks_whole_chain() {
    // The southernmost cell of column 0 is a wall: everything north of it
    // on that chain is unreachable toward South.
    let tokens = vec![vec!["C", "C"], vec!["M", "C"], vec!["W", "C"]];
    let (_, table) = solve(3, 1, &tokens);
    assert_eq!(table.get(0, 0, Direction::South), Cost::Unreachable);
    assert_eq!(table.get(1, 0, Direction::South), Cost::Unreachable);
    assert_eq!(table.get(2, 0, Direction::South), Cost::Undefined);
}

#[test]
fn test_recurrence_properties_hold_per_kind() {
    // Corridors inherit their successor's cost; hazard successors charge
    // one extra; wall successors block.
    let tokens = vec![
        vec!["C", "M", "W", "C", "M", "C"],
        vec!["M", "C", "C", "M", "W", "C"],
        vec!["C", "W", "M", "C", "C", "M"],
        vec!["M", "C", "C", "W", "M", "C"],
    ];
    let (grid, table) = solve(4, 3, &tokens);
    for row in 0..grid.rows() {
        for col in 0..grid.columns() {
            if grid.kind(row, col) == CellKind::Wall {
                continue;
            }
            for d in Direction::iter() {
                let cost = table.get(row, col, d);
                match grid.neighbor(row, col, d) {
                    None => assert_eq!(cost, Cost::Steps(1)),
                    Some((nr, nc)) => {
                        let expected = match (grid.kind(nr, nc), table.get(nr, nc, d)) {
                            (CellKind::Corridor, Cost::Steps(n)) => Cost::Steps(n),
                            (CellKind::Hazard, Cost::Steps(n)) => Cost::Steps(n + 1),
                            _ => Cost::Unreachable,
                        };
                        assert_eq!(cost, expected, "({}, {}) {:?}", row, col, d);
                    }
                }
            }
        }
    }
}

#[test]
fn test_recompute_is_deterministic() {
    let tokens = vec![
        vec!["C", "M", "C", "W"],
        vec!["W", "C", "M", "C"],
        vec!["M", "C", "C", "M"],
    ];
    let grid = HexGrid::create(3, 2, &tokens).unwrap();
    let first = EscapeCostSolver::compute(&grid);
    let second = EscapeCostSolver::compute(&grid);
    assert_eq!(first, second);
}

#[test]
fn test_short_row_fails_construction() {
    let tokens = vec![vec!["C", "C", "C"]];
    assert_eq!(
        HexGrid::create(1, 2, &tokens),
        Err(GridError::MalformedRow {
            row: 0,
            expected: 4,
            found: 3
        })
    );
}

#[test]
fn test_fully_walled_neighbourhood_has_no_escape() {
    // A corridor whose six neighbours are all in-grid walls: every
    // direction is blocked and the cell has no escape at all.
    let tokens = vec![
        vec!["W", "W", "W", "W"],
        vec!["W", "W", "C", "W"],
        vec!["W", "W", "W", "W"],
    ];
    let (grid, table) = solve(3, 2, &tokens);
    assert_eq!(grid.kind(1, 2), CellKind::Corridor);
    for d in Direction::iter() {
        assert_eq!(table.get(1, 2, d), Cost::Unreachable, "{:?}", d);
    }
    assert_eq!(table.best(1, 2), None);
}

#[test]
fn test_hazard_surcharges_accumulate_along_a_chain() {
    // Four hazards stacked northward: each traversal adds one.
    let tokens = vec![
        vec!["M", "W"],
        vec!["M", "W"],
        vec!["M", "W"],
        vec!["M", "W"],
        vec!["C", "W"],
    ];
    let (_, table) = solve(5, 1, &tokens);
    assert_eq!(table.get(0, 0, Direction::North), Cost::Steps(1));
    assert_eq!(table.get(1, 0, Direction::North), Cost::Steps(2));
    assert_eq!(table.get(2, 0, Direction::North), Cost::Steps(3));
    assert_eq!(table.get(3, 0, Direction::North), Cost::Steps(4));
    assert_eq!(table.get(4, 0, Direction::North), Cost::Steps(5));
    // Southward the same chain exits through corridor (4, 0) for free.
    assert_eq!(table.get(4, 0, Direction::South), Cost::Steps(1));
    assert_eq!(table.get(3, 0, Direction::South), Cost::Steps(1));
    assert_eq!(table.get(0, 0, Direction::South), Cost::Steps(4));
}

#[test]
fn test_best_escape_is_min_over_directions() {
    // (1, 0): north and south are hazards, west is the grid edge.
    let tokens = vec![vec!["M", "C"], vec!["C", "C"], vec!["M", "C"]];
    let (_, table) = solve(3, 1, &tokens);
    // Westward directions exit immediately from column 0.
    assert_eq!(table.get(1, 0, Direction::SouthWest), Cost::Steps(1));
    assert_eq!(table.get(1, 0, Direction::North), Cost::Steps(2));
    assert_eq!(table.get(1, 0, Direction::South), Cost::Steps(2));
    assert_eq!(table.best(1, 0), Some(1));
}
