/*
grid.rs

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

//! Puzzle geometry.
//!
//! A [`Grid`] describes one puzzle: the size of the square field, the start and end cells, the
//! ordered waypoints and the blockers.
//! The object is validated when it is created and cannot be modified afterward. The search engine
//! and the validator only take it by reference.

use thiserror::Error;

use super::cell::Cell;
use super::group_code::LevelGroupCode;

/// Largest supported field size.
pub const MAX_FIELD_SIZE: usize = 64;

/// Error returned when the geometry of a puzzle is not consistent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
}

/// Puzzle geometry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Width and height of the field.
    field_size: usize,

    /// First cell of the path.
    start: Cell,

    /// Last cell of the path.
    end: Cell,

    /// Cells the path must go through, in that order, before reaching [`Grid::end`].
    waypoints: Vec<Cell>,

    /// Cells excluded from the path, in the order they were provided.
    blockers: Vec<Cell>,

    /// Blocker lookup table, indexed by `y * field_size + x`.
    blocked: Vec<bool>,
}

impl Grid {
    /// Create a [`Grid`] object.
    ///
    /// # Errors
    ///
    /// The method returns [`GridError::InvalidGeometry`] if the field is smaller than 2x2 or
    /// larger than [`MAX_FIELD_SIZE`], if a cell is outside the field, if the start and end cells are the same, if a cell is listed
    /// twice, or if a blocker is also the start, the end, or a waypoint.
    pub fn new(
        field_size: usize,
        start: Cell,
        end: Cell,
        waypoints: Vec<Cell>,
        blockers: Vec<Cell>,
    ) -> Result<Self, GridError> {
        if field_size <= 1 {
            return Err(invalid(format!(
                "field size must be greater than 1, got {field_size}"
            )));
        }
        if field_size > MAX_FIELD_SIZE {
            return Err(invalid(format!(
                "field size must be at most {MAX_FIELD_SIZE}, got {field_size}"
            )));
        }

        let inside = |c: &Cell| c.x < field_size && c.y < field_size;
        if let Some(c) = [start, end]
            .iter()
            .chain(waypoints.iter())
            .chain(blockers.iter())
            .find(|c| !inside(*c))
        {
            return Err(invalid(format!(
                "cell {c} is outside the {field_size}x{field_size} field"
            )));
        }
        if start == end {
            return Err(invalid(format!("start and end are the same cell {start}")));
        }

        let mut blocked: Vec<bool> = vec![false; field_size * field_size];
        for c in &blockers {
            let i: usize = c.y * field_size + c.x;
            if blocked[i] {
                return Err(invalid(format!("blocker {c} is listed twice")));
            }
            blocked[i] = true;
        }
        for (name, c) in [("start", &start), ("end", &end)] {
            if blocked[c.y * field_size + c.x] {
                return Err(invalid(format!("{name} cell {c} is a blocker")));
            }
        }

        for (i, c) in waypoints.iter().enumerate() {
            if blocked[c.y * field_size + c.x] {
                return Err(invalid(format!("waypoint {c} is a blocker")));
            }
            if *c == start || *c == end {
                return Err(invalid(format!(
                    "waypoint {c} is also the start or the end cell"
                )));
            }
            if waypoints[..i].contains(c) {
                return Err(invalid(format!("waypoint {c} is listed twice")));
            }
        }

        Ok(Self {
            field_size,
            start,
            end,
            waypoints,
            blockers,
            blocked,
        })
    }

    pub fn field_size(&self) -> usize {
        self.field_size
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn end(&self) -> Cell {
        self.end
    }

    pub fn waypoints(&self) -> &[Cell] {
        &self.waypoints
    }

    pub fn blockers(&self) -> &[Cell] {
        &self.blockers
    }

    /// Whether the cell is inside the field.
    pub fn contains(&self, cell: &Cell) -> bool {
        cell.x < self.field_size && cell.y < self.field_size
    }

    /// Whether the cell is a blocker. Cells outside the field are not blockers.
    pub fn is_blocker(&self, cell: &Cell) -> bool {
        self.contains(cell) && self.blocked[cell.y * self.field_size + cell.x]
    }

    /// Return the position of the cell in the waypoint list.
    pub fn waypoint_index(&self, cell: &Cell) -> Option<usize> {
        self.waypoints.iter().position(|c| c == cell)
    }

    /// Number of cells a complete path must visit.
    pub fn free_cell_count(&self) -> usize {
        self.field_size * self.field_size - self.blockers.len()
    }

    /// Return the level group this puzzle belongs to.
    pub fn group_code(&self) -> LevelGroupCode {
        LevelGroupCode::new(self.field_size, self.waypoints.len(), self.blockers.len())
    }
}

fn invalid(msg: String) -> GridError {
    GridError::InvalidGeometry(msg)
}
