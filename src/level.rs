/*
level.rs

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

//! Stored levels and level groups.
//!
//! A [`Level`] is the record written by the generator and read back at play time: the puzzle
//! geometry together with one accepted solution.
//! Levels of the same difficulty are stored together in a [`LevelGroup`].
//!
//! ```json
//! {
//!   "field_size": 3,
//!   "start_cell": {"x": 0, "y": 0},
//!   "end_cell": {"x": 2, "y": 2},
//!   "order": [{"x": 0, "y": 1}],
//!   "blockers": [],
//!   "answer": [[1, 1, 2], [2, 3, 3], [1, 1, 4]]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::generator::answer_matrix::{self, AnswerMatrix};
use crate::generator::cell::Cell;
use crate::generator::grid::{Grid, GridError};
use crate::generator::group_code::LevelGroupCode;
use crate::generator::path::Path;
use crate::validator::{self, AnswerError};

/// Level record.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Level {
    pub field_size: usize,
    pub start_cell: Cell,
    pub end_cell: Cell,

    /// Waypoints, in the order they must be visited.
    #[serde(default)]
    pub order: Vec<Cell>,

    #[serde(default)]
    pub blockers: Vec<Cell>,

    /// One accepted solution, which is also the hint given to players.
    pub answer: AnswerMatrix,
}

impl Level {
    /// Create a [`Level`] object from a grid and one of its solutions.
    pub fn from_solution(grid: &Grid, path: &Path) -> Self {
        Self {
            field_size: grid.field_size(),
            start_cell: grid.start(),
            end_cell: grid.end(),
            order: grid.waypoints().to_vec(),
            blockers: grid.blockers().to_vec(),
            answer: answer_matrix::encode(path, grid),
        }
    }

    /// Rebuild the puzzle geometry.
    ///
    /// # Errors
    ///
    /// The method returns an error if the stored geometry is not consistent.
    pub fn grid(&self) -> Result<Grid, GridError> {
        Grid::new(
            self.field_size,
            self.start_cell,
            self.end_cell,
            self.order.clone(),
            self.blockers.clone(),
        )
    }

    /// Return the level group.
    pub fn group_code(&self) -> LevelGroupCode {
        LevelGroupCode::new(self.field_size, self.order.len(), self.blockers.len())
    }

    /// Return the solution stored with the level.
    pub fn hint(&self) -> &AnswerMatrix {
        &self.answer
    }

    /// Verify a player's answer.
    ///
    /// # Errors
    ///
    /// The method returns [`LevelError::Grid`] if the level itself is broken, and
    /// [`LevelError::Answer`] with the first problem found in the answer otherwise.
    pub fn check(&self, answer: &AnswerMatrix) -> Result<(), LevelError> {
        let grid: Grid = self.grid()?;
        validator::validate(&grid, answer)?;
        Ok(())
    }
}

/// Error returned by [`Level::check`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Answer(#[from] AnswerError),
}

/// Group of levels of the same difficulty.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LevelGroup {
    pub field_size: usize,

    /// Number of waypoints in each level.
    pub orders: usize,

    /// Number of blockers in each level.
    pub blockers: usize,

    #[serde(default)]
    pub levels: Vec<Level>,
}

impl LevelGroup {
    /// Create an empty [`LevelGroup`] object.
    pub fn new(code: LevelGroupCode) -> Self {
        Self {
            field_size: code.field_size,
            orders: code.waypoints,
            blockers: code.blockers,
            levels: Vec::new(),
        }
    }

    /// Return the group code.
    pub fn code(&self) -> LevelGroupCode {
        LevelGroupCode::new(self.field_size, self.orders, self.blockers)
    }

    /// Return the level at the given position.
    pub fn get(&self, level_num: usize) -> Option<&Level> {
        self.levels.get(level_num)
    }
}
