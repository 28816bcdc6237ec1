/*
properties.rs

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

//! Invariants shared by the search engine, the encoder, and the validator, checked on random
//! placements.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;
use std::time::Duration;

use linegame::generator::answer_matrix::{self, AnswerMatrix};
use linegame::generator::answer_search::search_answers;
use linegame::generator::cell::{Cell, Direction};
use linegame::generator::grid::Grid;
use linegame::generator::level_builder::LevelBuilder;
use linegame::generator::path::Path;
use linegame::settings::GeneratorSettings;
use linegame::validator::{self, AnswerError};

/// Draw a random grid from a seed.
fn random_grid(seed: u64, field_size: usize, blockers: usize, waypoints: usize) -> Grid {
    let builder: LevelBuilder = LevelBuilder::new(GeneratorSettings {
        field_size,
        blockers,
        waypoints,
        max_try: 1,
        timeout: Duration::from_secs(1),
    })
    .unwrap();
    builder
        .random_grid(&mut StdRng::seed_from_u64(seed))
        .unwrap()
}

fn grids() -> impl Strategy<Value = Grid> {
    (any::<u64>(), 2usize..=4, 0usize..=2, 0usize..=2)
        .prop_filter("cells must fit", |(_, n, b, w)| b + w <= n * n - 2)
        .prop_map(|(seed, n, b, w)| random_grid(seed, n, b, w))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn accepted_paths_cover_the_field(grid in grids()) {
        for path in search_answers(&grid) {
            prop_assert_eq!(path.len(), grid.free_cell_count());
            prop_assert_eq!(path.get_first(), Some(grid.start()));
            prop_assert_eq!(path.get_last(), Some(grid.end()));
            let cells: HashSet<Cell> = path.get().iter().copied().collect();
            prop_assert_eq!(cells.len(), path.len());
            prop_assert!(path.get().iter().all(|c| !grid.is_blocker(c)));
        }
    }

    #[test]
    fn accepted_paths_never_step_back(grid in grids()) {
        for path in search_answers(&grid) {
            let moves: Vec<Direction> = path.moves();
            prop_assert_eq!(moves.len(), path.len() - 1);
            for w in moves.windows(2) {
                prop_assert_ne!(Some(w[1]), w[0].opposite());
            }
        }
    }

    #[test]
    fn accepted_paths_respect_the_order(grid in grids()) {
        for path in search_answers(&grid) {
            let seen: Vec<Cell> = path
                .get()
                .iter()
                .filter(|c| grid.waypoint_index(c).is_some())
                .copied()
                .collect();
            prop_assert_eq!(seen.as_slice(), grid.waypoints());
        }
    }

    #[test]
    fn encoded_paths_are_accepted(grid in grids()) {
        for path in search_answers(&grid) {
            let answer: AnswerMatrix = answer_matrix::encode(&path, &grid);
            prop_assert_eq!(validator::validate(&grid, &answer), Ok(()));

            // Through JSON, as stored and submitted
            let json: String = serde_json::to_string(&answer).unwrap();
            let back: AnswerMatrix = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(validator::validate(&grid, &back), Ok(()));
        }
    }

    #[test]
    fn redirected_paths_are_rejected(grid in grids(), pick in any::<prop::sample::Index>(),
                                     turn in 1i32..4) {
        let answers: Vec<Path> = search_answers(&grid);
        prop_assume!(!answers.is_empty());
        let path: &Path = &answers[0];
        let mut answer: AnswerMatrix = answer_matrix::encode(path, &grid);

        // Change the direction of one cell of the path (not the end cell)
        let cell: Cell = path.get()[pick.index(path.len() - 1)];
        let code: i32 = answer.0[cell.y][cell.x];
        answer.0[cell.y][cell.x] = (code + turn) % 4;
        prop_assert!(validator::validate(&grid, &answer).is_err());
    }

    #[test]
    fn size_mismatch_comes_first(grid in grids()) {
        let answers: Vec<Path> = search_answers(&grid);
        prop_assume!(!answers.is_empty());
        let mut answer: AnswerMatrix = answer_matrix::encode(&answers[0], &grid);
        answer.0.pop();
        let is_mismatch = matches!(
            validator::validate(&grid, &answer),
            Err(AnswerError::FieldSizeMismatch { .. })
        );
        prop_assert!(is_mismatch);
    }
}

#[test]
fn scenario_open_field() {
    let grid: Grid = Grid::new(4, Cell::new(0, 0), Cell::new(3, 2), vec![], vec![]).unwrap();
    let answers: Vec<Path> = search_answers(&grid);
    assert!(!answers.is_empty());
    assert!(answers.iter().all(|p| p.len() == 16));
}

#[test]
fn scenario_rejection_precedence() {
    // Dimension mismatch and a reversal: the size is reported
    let grid: Grid = Grid::new(3, Cell::new(0, 0), Cell::new(2, 2), vec![], vec![]).unwrap();
    let answer: AnswerMatrix = AnswerMatrix(vec![vec![2, 4, 4, 4], vec![0, 4, 4, 4]]);
    assert!(matches!(
        validator::validate(&grid, &answer),
        Err(AnswerError::FieldSizeMismatch { .. })
    ));
}
