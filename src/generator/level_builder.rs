/*
level_builder.rs

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

//! Generate random levels.
//!
//! Each attempt draws a random placement of the start, end, blockers, and waypoints, and searches
//! for solutions. Most placements have no solution, in which case the attempt returns
//! [`LevelBuildError::NoSolutionFound`] and the caller simply tries again.
//!
//! [`LevelBuilder::generate`] runs many attempts on worker threads. The attempts share nothing:
//! each one owns its grid and search state. The results come back over a channel, and the run
//! stops when all the attempts are done or when the timeout expires. Attempts still running at
//! that point are abandoned.

use log::{debug, info, warn};
use rand::Rng;
use std::collections::HashSet;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use thiserror::Error;

use super::answer_search::AnswerSearch;
use super::cell::Cell;
use super::grid::{Grid, GridError};
use super::path::Path;
use crate::level::{Level, LevelGroup};
use crate::settings::{GeneratorSettings, SettingsError};

/// Type of errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LevelBuildError {
    /// The random placement has no solution.
    #[error("no solution found")]
    NoSolutionFound,

    #[error(transparent)]
    InvalidGeometry(#[from] GridError),
}

/// Longest sleep of the timer thread between two checks of the run status.
const TIMER_TICK: Duration = Duration::from_millis(100);

/// Message sent by the worker threads and the timer.
enum Message {
    Attempt(Result<Level, LevelBuildError>),
    Deadline,
}

/// [`LevelBuilder`] object.
#[derive(Debug, Clone)]
pub struct LevelBuilder {
    settings: GeneratorSettings,

    /// Number of attempts collected during the last run.
    pub attempts: usize,

    /// Number of attempts without solution during the last run.
    pub failures: usize,

    /// Duration in seconds of the last run.
    pub duration: f32,
}

impl LevelBuilder {
    /// Create the object.
    ///
    /// # Errors
    ///
    /// The method returns an error if the settings do not allow drawing random levels.
    pub fn new(settings: GeneratorSettings) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self {
            settings,
            attempts: 0,
            failures: 0,
            duration: 0.0,
        })
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// Draw a random placement.
    ///
    /// Cells are drawn in this order: start, end, blockers, and then waypoints. All the cells
    /// are distinct.
    pub fn random_grid<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Grid, GridError> {
        let size: usize = self.settings.field_size;
        let mut used: Vec<Cell> =
            Vec::with_capacity(2 + self.settings.blockers + self.settings.waypoints);

        let start: Cell = random_cell(rng, size, &mut used);
        let end: Cell = random_cell(rng, size, &mut used);
        let blockers: Vec<Cell> = (0..self.settings.blockers)
            .map(|_| random_cell(rng, size, &mut used))
            .collect();
        let waypoints: Vec<Cell> = (0..self.settings.waypoints)
            .map(|_| random_cell(rng, size, &mut used))
            .collect();

        Grid::new(size, start, end, waypoints, blockers)
    }

    /// Draw a random placement and return a level built from its first solution.
    ///
    /// # Errors
    ///
    /// The method returns [`LevelBuildError::NoSolutionFound`] if the placement has no solution.
    pub fn attempt<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Level, LevelBuildError> {
        let grid: Grid = self.random_grid(rng)?;
        let mut search: AnswerSearch = AnswerSearch::new(&grid);
        let answers: Vec<Path> = search.search();
        let first: &Path = answers.first().ok_or(LevelBuildError::NoSolutionFound)?;
        let level: Level = Level::from_solution(&grid, first);
        debug!(
            "Level with {} solutions found in {}s:\n{}",
            answers.len(),
            search.duration,
            level.answer
        );
        Ok(level)
    }

    /// Run all the attempts and return the group of generated levels.
    ///
    /// Levels with the same placement are only kept once.
    pub fn generate(&mut self) -> LevelGroup {
        let start: Instant = Instant::now();
        let max_try: usize = self.settings.max_try;
        let workers: usize = thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
            .min(max_try);
        debug!("Running {max_try} attempts on {workers} threads");

        // One ticket per attempt. The workers stop when the tickets run out.
        let (ticket_sender, ticket_receiver) = async_channel::bounded::<()>(max_try);
        for _ in 0..max_try {
            if ticket_sender.try_send(()).is_err() {
                break;
            }
        }
        ticket_sender.close();

        let (sender, receiver) = async_channel::unbounded::<Message>();
        for _ in 0..workers {
            let tickets = ticket_receiver.clone();
            let sender = sender.clone();
            let builder: LevelBuilder = self.clone();
            thread::spawn(move || {
                let mut rng = rand::rng();
                while tickets.recv_blocking().is_ok() {
                    let res: Result<Level, LevelBuildError> = builder.attempt(&mut rng);
                    if sender.send_blocking(Message::Attempt(res)).is_err() {
                        // The run is over
                        break;
                    }
                }
            });
        }

        // The timer stops early when the run is over and the channel is closed
        let timer: Option<JoinHandle<()>> =
            start.checked_add(self.settings.timeout).map(|deadline| {
                thread::spawn(move || {
                    while !sender.is_closed() {
                        let now: Instant = Instant::now();
                        if now >= deadline {
                            let _ = sender.send_blocking(Message::Deadline);
                            break;
                        }
                        thread::sleep((deadline - now).min(TIMER_TICK));
                    }
                })
            });

        let mut group: LevelGroup = LevelGroup::new(self.settings.group_code());
        let mut seen: HashSet<(Cell, Cell, Vec<Cell>, Vec<Cell>)> = HashSet::new();
        self.attempts = 0;
        self.failures = 0;

        while self.attempts < max_try {
            match receiver.recv_blocking() {
                Ok(Message::Attempt(Ok(level))) => {
                    self.attempts += 1;
                    let mut blockers: Vec<Cell> = level.blockers.clone();
                    blockers.sort_unstable();
                    let key = (level.start_cell, level.end_cell, level.order.clone(), blockers);
                    if seen.insert(key) {
                        info!("Level {} generated", group.levels.len());
                        group.levels.push(level);
                    } else {
                        debug!("Duplicated level ignored");
                    }
                }
                Ok(Message::Attempt(Err(e))) => {
                    self.attempts += 1;
                    self.failures += 1;
                    debug!("Attempt {}: {e}", self.attempts);
                }
                Ok(Message::Deadline) => {
                    warn!("Timeout after {} attempts", self.attempts);
                    break;
                }
                Err(_) => break,
            }
        }
        receiver.close();
        if let Some(timer) = timer
            && timer.join().is_err()
        {
            warn!("Timer thread failed");
        }

        self.duration = start.elapsed().as_secs_f32();
        info!(
            "Generation finished: {} levels, {} attempts, {} without solution, {}s",
            group.levels.len(),
            self.attempts,
            self.failures,
            self.duration
        );
        group
    }
}

/// Draw a random cell that is not in `used`, and add it to `used`.
fn random_cell<R: Rng + ?Sized>(rng: &mut R, size: usize, used: &mut Vec<Cell>) -> Cell {
    loop {
        let cell: Cell = Cell::new(rng.random_range(0..size), rng.random_range(0..size));
        if !used.contains(&cell) {
            used.push(cell);
            return cell;
        }
    }
}
