/*
validator.rs

Copyright 2025 Hervé Quatremain

This file is part of Linegame.

Linegame is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Linegame is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Linegame. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Verify the answers submitted by players.
//!
//! The answer is replayed from the start cell by following the direction stored in each cell.
//! The replay does not rely on the solution stored with the level: any path that covers all the
//! free cells, goes through the waypoints in order, and never steps back is accepted.
//!
//! Each cell is entered at most once, so the replay stops after at most
//! [`Grid::free_cell_count`] steps.
//!
//! Only the first problem is reported, in this order: the size of the matrix, then the problems
//! found during the replay (step back, out of the field, blocker, cell visited twice), then the
//! waypoint order, and last the number of visited cells.

use log::debug;
use thiserror::Error;

use crate::generator::answer_matrix::{self, AnswerMatrix, DecodedAnswer};
use crate::generator::cell::{Cell, Direction};
use crate::generator::grid::Grid;

/// Reasons for rejecting an answer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnswerError {
    #[error("answer size does not match the {expected}x{expected} field ({rows} rows)")]
    FieldSizeMismatch { expected: usize, rows: usize },

    #[error("answer leaves the field from cell {from} going {direction:?}")]
    OutOfBounds { from: Cell, direction: Direction },

    #[error("answer loops back at cell {at}")]
    LoopDetected { at: Cell },

    #[error("answer goes through the blocker {at}")]
    BlockerCrossed { at: Cell },

    #[error("waypoints are not visited in order: {matched} of {expected} matched")]
    OrderIncorrect { matched: usize, expected: usize },

    #[error("cells in way {visited}, expected {expected}")]
    CellsWayIncorrect { visited: usize, expected: usize },
}

/// Verify the answer matrix for the grid.
///
/// # Errors
///
/// The function returns the first [`AnswerError`] found.
pub fn validate(grid: &Grid, answer: &AnswerMatrix) -> Result<(), AnswerError> {
    let decoded: DecodedAnswer = answer_matrix::decode(answer, grid)?;
    validate_decoded(grid, &decoded)
}

/// Replay an already decoded answer.
pub fn validate_decoded(grid: &Grid, answer: &DecodedAnswer) -> Result<(), AnswerError> {
    let n: usize = grid.field_size();
    let mut visited: Vec<bool> = vec![false; n * n];
    let mut current: Cell = grid.start();
    let mut visited_count: usize = 1;
    let mut matched_waypoints: usize = 0;
    let mut previous: Option<Direction> = None;

    visited[current.y * n + current.x] = true;

    while current != grid.end() {
        let d: Direction = answer.at(&current);
        if !d.is_move() {
            debug!("Walk stopped at {current} after {visited_count} cells");
            break;
        }
        if previous.is_some() && previous == d.opposite() {
            return Err(AnswerError::LoopDetected { at: current });
        }
        let next: Cell = current
            .step(d, n)
            .ok_or(AnswerError::OutOfBounds {
                from: current,
                direction: d,
            })?;
        if grid.is_blocker(&next) {
            return Err(AnswerError::BlockerCrossed { at: next });
        }
        if visited[next.y * n + next.x] {
            return Err(AnswerError::LoopDetected { at: next });
        }
        visited[next.y * n + next.x] = true;
        visited_count += 1;
        previous = Some(d);

        // Waypoints are matched in order; reaching a later one early does not count
        if grid.waypoints().get(matched_waypoints) == Some(&next) {
            matched_waypoints += 1;
        }
        current = next;
    }

    if matched_waypoints != grid.waypoints().len() {
        return Err(AnswerError::OrderIncorrect {
            matched: matched_waypoints,
            expected: grid.waypoints().len(),
        });
    }
    let expected: usize = grid.free_cell_count();
    if visited_count != expected {
        return Err(AnswerError::CellsWayIncorrect {
            visited: visited_count,
            expected,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::answer_matrix::encode;
    use crate::generator::answer_search::search_answers;
    use crate::generator::path::Path;

    const U: i32 = 0;
    const R: i32 = 1;
    const D: i32 = 2;
    const L: i32 = 3;
    const F: i32 = 4;
    const X: i32 = 5;

    fn c(x: usize, y: usize) -> Cell {
        Cell::new(x, y)
    }

    fn open_3x3() -> Grid {
        Grid::new(3, c(0, 0), c(2, 2), vec![], vec![]).unwrap()
    }

    #[test]
    fn snake_is_accepted() {
        let answer: AnswerMatrix = AnswerMatrix(vec![
            vec![R, R, D],
            vec![D, L, L],
            vec![R, R, F],
        ]);
        assert_eq!(validate(&open_3x3(), &answer), Ok(()));
    }

    #[test]
    fn any_solution_is_accepted() {
        let grid: Grid = Grid::new(4, c(0, 0), c(3, 2), vec![c(2, 0), c(0, 2)], vec![]).unwrap();
        let answers: Vec<Path> = search_answers(&grid);
        assert!(!answers.is_empty());
        for p in &answers {
            assert_eq!(validate(&grid, &encode(p, &grid)), Ok(()));
        }
    }

    #[test]
    fn too_short() {
        let answer: AnswerMatrix = AnswerMatrix(vec![
            vec![R, D, F],
            vec![F, F, F],
            vec![F, F, F],
        ]);
        assert_eq!(
            validate(&open_3x3(), &answer),
            Err(AnswerError::CellsWayIncorrect {
                visited: 3,
                expected: 9
            })
        );
    }

    #[test]
    fn immediate_reversal() {
        // Down to (0, 1), then up again
        let answer: AnswerMatrix = AnswerMatrix(vec![
            vec![D, F, F],
            vec![U, F, F],
            vec![F, F, F],
        ]);
        assert_eq!(
            validate(&open_3x3(), &answer),
            Err(AnswerError::LoopDetected { at: c(0, 1) })
        );

        // Right then left
        let answer: AnswerMatrix = AnswerMatrix(vec![
            vec![R, L, F],
            vec![F, F, F],
            vec![F, F, F],
        ]);
        assert_eq!(
            validate(&open_3x3(), &answer),
            Err(AnswerError::LoopDetected { at: c(1, 0) })
        );
    }

    #[test]
    fn cycle_is_rejected() {
        // (0,0) -> (1,0) -> (1,1) -> (0,1) -> (0,0)
        let answer: AnswerMatrix = AnswerMatrix(vec![
            vec![R, D, F],
            vec![U, L, F],
            vec![F, F, F],
        ]);
        assert_eq!(
            validate(&open_3x3(), &answer),
            Err(AnswerError::LoopDetected { at: c(0, 0) })
        );
    }

    #[test]
    fn out_of_bounds() {
        let answer: AnswerMatrix = AnswerMatrix(vec![
            vec![U, F, F],
            vec![F, F, F],
            vec![F, F, F],
        ]);
        assert_eq!(
            validate(&open_3x3(), &answer),
            Err(AnswerError::OutOfBounds {
                from: c(0, 0),
                direction: Direction::Up
            })
        );
    }

    #[test]
    fn blocker_crossed() {
        let grid: Grid = Grid::new(3, c(0, 0), c(2, 2), vec![], vec![c(1, 0)]).unwrap();
        let answer: AnswerMatrix = AnswerMatrix(vec![
            vec![R, X, F],
            vec![F, F, F],
            vec![F, F, F],
        ]);
        assert_eq!(
            validate(&grid, &answer),
            Err(AnswerError::BlockerCrossed { at: c(1, 0) })
        );
    }

    #[test]
    fn size_mismatch_comes_first() {
        // Contains a reversal, but only two rows
        let answer: AnswerMatrix = AnswerMatrix(vec![vec![D, F, F], vec![U, F, F]]);
        assert_eq!(
            validate(&open_3x3(), &answer),
            Err(AnswerError::FieldSizeMismatch {
                expected: 3,
                rows: 2
            })
        );

        // Ragged rows
        let answer: AnswerMatrix =
            AnswerMatrix(vec![vec![D, F, F], vec![U, F], vec![F, F, F]]);
        assert!(matches!(
            validate(&open_3x3(), &answer),
            Err(AnswerError::FieldSizeMismatch { .. })
        ));
    }

    #[test]
    fn order_comes_before_coverage() {
        let grid: Grid = Grid::new(3, c(0, 0), c(2, 2), vec![c(0, 2)], vec![]).unwrap();
        // Short path along the top and right borders, never reaching (0, 2)
        let answer: AnswerMatrix = AnswerMatrix(vec![
            vec![R, R, D],
            vec![F, F, D],
            vec![F, F, F],
        ]);
        assert_eq!(
            validate(&grid, &answer),
            Err(AnswerError::OrderIncorrect {
                matched: 0,
                expected: 1
            })
        );
    }

    #[test]
    fn waypoints_out_of_order() {
        // The row snake visits (2, 0) before (0, 1)
        let grid: Grid =
            Grid::new(3, c(0, 0), c(2, 2), vec![c(0, 1), c(2, 0)], vec![]).unwrap();
        let answer: AnswerMatrix = AnswerMatrix(vec![
            vec![R, R, D],
            vec![D, L, L],
            vec![R, R, F],
        ]);
        assert_eq!(
            validate(&grid, &answer),
            Err(AnswerError::OrderIncorrect {
                matched: 1,
                expected: 2
            })
        );
    }

    #[test]
    fn end_reached_too_early() {
        let grid: Grid = Grid::new(3, c(0, 0), c(2, 2), vec![], vec![c(1, 1)]).unwrap();
        let answer: AnswerMatrix = AnswerMatrix(vec![
            vec![R, R, D],
            vec![U, X, D],
            vec![U, L, F],
        ]);
        // (0,0) R (1,0) R (2,0) D (2,1) D (2,2) end
        assert_eq!(
            validate(&grid, &answer),
            Err(AnswerError::CellsWayIncorrect {
                visited: 5,
                expected: 8
            })
        );
    }
}
