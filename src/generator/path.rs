/*
path.rs

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

//! Path across the grid.

use serde::{Deserialize, Serialize};

use super::cell::{Cell, Direction};

/// Path object.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Path {
    /// Path as an ordered list of cells.
    path: Vec<Cell>,
}

impl Path {
    /// Create an empty [`Path`] object.
    pub fn new(num_cells: usize) -> Self {
        Self {
            path: Vec::with_capacity(num_cells),
        }
    }

    /// Create a [`Path`] object from a list of cells.
    pub fn from_cells(cells: &[Cell]) -> Self {
        Self {
            path: cells.to_vec(),
        }
    }

    /// Add a cell to the path.
    pub fn push(&mut self, cell: Cell) {
        self.path.push(cell);
    }

    /// Get the number of cells in the path.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Whether the cell is in the path or not.
    pub fn contains(&self, cell: &Cell) -> bool {
        self.path.contains(cell)
    }

    /// Return a reference to the list of cells.
    pub fn get(&self) -> &[Cell] {
        &self.path
    }

    /// Return the first cell in the path.
    pub fn get_first(&self) -> Option<Cell> {
        self.path.first().copied()
    }

    /// Return the last cell in the path.
    pub fn get_last(&self) -> Option<Cell> {
        self.path.last().copied()
    }

    /// Return the moves between consecutive cells.
    ///
    /// The list is shorter than expected if two consecutive cells are not adjacent.
    pub fn moves(&self) -> Vec<Direction> {
        self.path
            .windows(2)
            .map_while(|w| w[0].direction_to(&w[1]))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves() {
        let p: Path = Path::from_cells(&[
            Cell::new(0, 0),
            Cell::new(1, 0),
            Cell::new(1, 1),
            Cell::new(0, 1),
        ]);
        assert_eq!(p.len(), 4);
        assert_eq!(p.get_first(), Some(Cell::new(0, 0)));
        assert_eq!(p.get_last(), Some(Cell::new(0, 1)));
        assert_eq!(
            p.moves(),
            vec![Direction::Right, Direction::Down, Direction::Left]
        );
        assert!(p.contains(&Cell::new(1, 1)));
        assert!(!p.contains(&Cell::new(2, 2)));
    }

    #[test]
    fn empty() {
        let p: Path = Path::new(4);
        assert!(p.is_empty());
        assert_eq!(p.get_first(), None);
        assert!(p.moves().is_empty());
    }
}
