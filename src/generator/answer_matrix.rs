/*
answer_matrix.rs

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

//! Encode and decode paths as answer matrices.
//!
//! An answer matrix is the form in which solutions are stored and submitted: a square matrix of
//! integer codes (see [`Direction`]), one per cell.
//! For each cell of the path, the code gives the direction of the next cell.
//! The end cell holds the "finish" code and blockers hold the "blocked" code.
//!
//! The matrix is indexed `answer[y][x]`. Everywhere else in the crate, cells are addressed by
//! `(x, y)`: [`encode`] and [`decode`] are the only places where the two layouts meet.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::cell::{Cell, Direction, UNSET_CODE};
use super::grid::Grid;
use super::path::Path;
use crate::validator::AnswerError;

/// Answer matrix, as exchanged with storage and players.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct AnswerMatrix(pub Vec<Vec<i32>>);

impl AnswerMatrix {
    /// Return the raw rows.
    pub fn rows(&self) -> &[Vec<i32>] {
        &self.0
    }

    /// Whether the matrix is a `field_size` x `field_size` square.
    pub fn has_size(&self, field_size: usize) -> bool {
        self.0.len() == field_size && self.0.iter().all(|row| row.len() == field_size)
    }

    /// Return the code stored for the cell, or None if the cell is outside the matrix.
    pub fn code_at(&self, cell: &Cell) -> Option<i32> {
        self.0.get(cell.y).and_then(|row| row.get(cell.x)).copied()
    }
}

impl From<Vec<Vec<i32>>> for AnswerMatrix {
    fn from(rows: Vec<Vec<i32>>) -> Self {
        Self(rows)
    }
}

/// Draw the matrix with arrows, one line per row.
impl fmt::Display for AnswerMatrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.0 {
            let line: String = row
                .iter()
                .map(|code| {
                    if *code == UNSET_CODE {
                        '_'
                    } else {
                        Direction::from_code(*code).symbol()
                    }
                })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Per-cell directions of a submitted answer, addressed by `(x, y)`.
#[derive(Debug, Clone)]
pub struct DecodedAnswer {
    /// `moves[x][y]` is the direction to follow from the cell `(x, y)`.
    moves: Vec<Vec<Direction>>,
}

impl DecodedAnswer {
    /// Return the direction to follow from the cell. Cells outside the grid finish the walk.
    pub fn at(&self, cell: &Cell) -> Direction {
        self.moves
            .get(cell.x)
            .and_then(|column| column.get(cell.y))
            .copied()
            .unwrap_or(Direction::Finish)
    }
}

/// Encode a path as an answer matrix.
///
/// Cells that are neither on the path nor blockers hold [`UNSET_CODE`].
pub fn encode(path: &Path, grid: &Grid) -> AnswerMatrix {
    let n: usize = grid.field_size();
    let mut answer: Vec<Vec<i32>> = vec![vec![UNSET_CODE; n]; n];

    for w in path.get().windows(2) {
        if let Some(d) = w[0].direction_to(&w[1]) {
            answer[w[0].y][w[0].x] = d.code();
        }
    }
    let end: Cell = grid.end();
    answer[end.y][end.x] = Direction::Finish.code();
    for b in grid.blockers() {
        answer[b.y][b.x] = Direction::Blocked.code();
    }
    AnswerMatrix(answer)
}

/// Decode an answer matrix into per-cell directions.
///
/// # Errors
///
/// The function returns [`AnswerError::FieldSizeMismatch`] if the matrix is not a square of the
/// grid size.
pub fn decode(answer: &AnswerMatrix, grid: &Grid) -> Result<DecodedAnswer, AnswerError> {
    let n: usize = grid.field_size();
    if !answer.has_size(n) {
        return Err(AnswerError::FieldSizeMismatch {
            expected: n,
            rows: answer.0.len(),
        });
    }

    let mut moves: Vec<Vec<Direction>> = vec![vec![Direction::Finish; n]; n];
    for (y, row) in answer.0.iter().enumerate() {
        for (x, code) in row.iter().enumerate() {
            moves[x][y] = Direction::from_code(*code);
        }
    }
    Ok(DecodedAnswer { moves })
}
