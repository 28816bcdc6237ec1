/*
cell.rs

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

//! Grid cells and move vectors.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::FromRepr;

/// Code written in an answer matrix for a cell that is not on the path.
pub const UNSET_CODE: i32 = -1;

/// Cell coordinates. Both coordinates start at 0.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    /// Create a [`Cell`] object.
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Return the cell reached by moving in the given direction, or None if the move leaves
    /// a grid of the given size.
    ///
    /// [`Direction::Finish`] and [`Direction::Blocked`] are not moves and always return None.
    pub fn step(&self, direction: Direction, field_size: usize) -> Option<Cell> {
        let (dx, dy) = direction.vector()?;
        let x: usize = self.x.checked_add_signed(dx)?;
        let y: usize = self.y.checked_add_signed(dy)?;
        if x >= field_size || y >= field_size {
            return None;
        }
        Some(Cell { x, y })
    }

    /// Return the direction to go from this cell to the given adjacent cell.
    pub fn direction_to(&self, other: &Cell) -> Option<Direction> {
        let dx: isize = other.x as isize - self.x as isize;
        let dy: isize = other.y as isize - self.y as isize;
        Direction::from_vector(dx, dy)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Move vector, as stored in answer matrices.
///
/// The discriminant is the code exchanged with the callers:
/// `0` up, `1` right, `2` down, `3` left, `4` finish, `5` blocked.
/// "Up" decreases the `y` coordinate.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, FromRepr)]
#[repr(i32)]
pub enum Direction {
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
    Finish = 4,
    Blocked = 5,
}

impl Direction {
    /// Directions tried, in that order, by the path search engine.
    pub const SEARCH_ORDER: [Direction; 4] =
        [Direction::Left, Direction::Up, Direction::Down, Direction::Right];

    /// Return the code for the direction.
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Return the direction for a code. Unknown codes are read as [`Direction::Finish`].
    pub fn from_code(code: i32) -> Self {
        Direction::from_repr(code).unwrap_or(Direction::Finish)
    }

    /// Return the `(dx, dy)` unit vector, or None for the markers.
    pub fn vector(self) -> Option<(isize, isize)> {
        match self {
            Direction::Up => Some((0, -1)),
            Direction::Right => Some((1, 0)),
            Direction::Down => Some((0, 1)),
            Direction::Left => Some((-1, 0)),
            Direction::Finish | Direction::Blocked => None,
        }
    }

    /// Return the direction for a unit vector.
    pub fn from_vector(dx: isize, dy: isize) -> Option<Self> {
        match (dx, dy) {
            (0, -1) => Some(Direction::Up),
            (1, 0) => Some(Direction::Right),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            _ => None,
        }
    }

    /// Whether the direction is one of the four moves.
    pub fn is_move(self) -> bool {
        self.vector().is_some()
    }

    /// Return the reverse move.
    pub fn opposite(self) -> Option<Self> {
        match self {
            Direction::Up => Some(Direction::Down),
            Direction::Right => Some(Direction::Left),
            Direction::Down => Some(Direction::Up),
            Direction::Left => Some(Direction::Right),
            Direction::Finish | Direction::Blocked => None,
        }
    }

    /// Character used when drawing an answer.
    pub fn symbol(self) -> char {
        match self {
            Direction::Up => '↑',
            Direction::Right => '→',
            Direction::Down => '↓',
            Direction::Left => '←',
            Direction::Finish => 'f',
            Direction::Blocked => 'X',
        }
    }
}
