/*
generator.rs

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

//! Describe puzzles and generate solved levels.
//!
//! A puzzle is a square field in which the player draws one continuous path from a start cell to
//! an end cell.
//! The path must visit every free cell once, go through the waypoints in order, and avoid the
//! blockers.
//!
//! * A [`grid::Grid`] object describes the puzzle geometry. It is validated when created and is
//!   read-only afterward.
//!
//! * An [`answer_search::AnswerSearch`] object finds all the solutions of a grid by exhaustive
//!   search. Solutions are [`path::Path`] objects.
//!
//! * The [`answer_matrix`] module converts a solution into the integer matrix that is stored
//!   with the level and submitted by players, and converts it back.
//!
//! * A [`level_builder::LevelBuilder`] object draws random placements until it finds grids with
//!   solutions, and groups the resulting levels.
//!   Groups are identified by a [`group_code::LevelGroupCode`].

pub mod answer_matrix;
pub mod answer_search;
pub mod cell;
pub mod grid;
pub mod group_code;
pub mod level_builder;
pub mod path;
