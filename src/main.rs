// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Thin stdin/stdout shim around the escape-cost core.
//!
//! Input format, as in the original problem statement:
//! - a header line `K N` (rows and half-columns),
//! - `K` map lines of `2N` space-separated cell tokens, where the first `N`
//!   tokens of a line are the even columns of that row and the last `N` the
//!   odd columns.
//!
//! The shim interleaves each line's two halves into logical column order,
//! builds the grid, runs the solver and prints one line per row: the best
//! escape cost per cell, `#` for walls and `-` for cells with no escape.
//! The core never sees raw text; everything here is replaceable.

use std::fmt::Write as _;
use std::io::{self, BufRead};
use std::process::ExitCode;

use hex_escape::{EscapeCostSolver, HexGrid};

fn main() -> ExitCode {
    let stdin = io::stdin();
    match run(stdin.lock()) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("escape: {}", message);
            ExitCode::FAILURE
        }
    }
}

fn run(input: impl BufRead) -> Result<String, String> {
    let mut lines = input.lines();

    let header = next_line(&mut lines)?;
    let (rows, half_cols) = parse_header(&header)?;

    let mut map_lines = Vec::with_capacity(rows);
    for _ in 0..rows {
        map_lines.push(next_line(&mut lines)?);
    }
    let row_tokens: Vec<Vec<&str>> = map_lines
        .iter()
        .map(|line| interleave(line, half_cols))
        .collect();

    let grid = HexGrid::create(rows, half_cols, &row_tokens).map_err(|e| e.to_string())?;
    let table = EscapeCostSolver::compute(&grid);

    let mut output = String::new();
    for row in 0..grid.rows() {
        for col in 0..grid.columns() {
            if col > 0 {
                output.push(' ');
            }
            match table.best(row, col) {
                Some(cost) => {
                    let _ = write!(output, "{}", cost);
                }
                None if !grid.kind(row, col).is_passable() => output.push('#'),
                None => output.push('-'),
            }
        }
        output.push('\n');
    }
    Ok(output)
}

fn next_line(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<String, String> {
    match lines.next() {
        Some(Ok(line)) => Ok(line),
        Some(Err(e)) => Err(format!("read failed: {}", e)),
        None => Err("unexpected end of input".to_string()),
    }
}

fn parse_header(line: &str) -> Result<(usize, usize), String> {
    let mut fields = line.split_whitespace();
    let rows = fields
        .next()
        .ok_or("header must be `K N`")?
        .parse::<usize>()
        .map_err(|e| format!("bad row count: {}", e))?;
    let half_cols = fields
        .next()
        .ok_or("header must be `K N`")?
        .parse::<usize>()
        .map_err(|e| format!("bad column count: {}", e))?;
    Ok((rows, half_cols))
}

/// Reorder a map line's tokens into logical column order: position `2i`
/// takes token `i`, position `2i+1` takes token `half_cols + i`. Token
/// count mismatches are left for `HexGrid::create` to report.
fn interleave(line: &str, half_cols: usize) -> Vec<&str> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 2 * half_cols {
        return tokens;
    }
    let mut ordered = Vec::with_capacity(tokens.len());
    for i in 0..half_cols {
        ordered.push(tokens[i]);
        ordered.push(tokens[half_cols + i]);
    }
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interleave_pairs_halves() {
        assert_eq!(
            interleave("C W M C M W", 3),
            vec!["C", "C", "W", "M", "M", "W"]
        );
    }

    #[test]
    fn test_run_end_to_end() {
        let input: &[u8] = b"1 1\nC C\n";
        let output = run(input).unwrap();
        assert_eq!(output, "1 1\n");
    }

    #[test]
    fn test_run_marks_walls_and_trapped_cells() {
        // Column 0 is corridor, column 1 is wall; the corridor still
        // escapes west off the edge.
        let input: &[u8] = b"1 1\nC W\n";
        let output = run(input).unwrap();
        assert_eq!(output, "1 #\n");
    }

    #[test]
    fn test_run_rejects_malformed_row() {
        let input: &[u8] = b"1 2\nC C\n";
        let err = run(input).unwrap_err();
        assert!(err.contains("Row 0"), "{}", err);
    }

    #[test]
    fn test_run_rejects_truncated_input() {
        let input: &[u8] = b"2 1\nC C\n";
        assert!(run(input).is_err());
    }
}
