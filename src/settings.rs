/*
settings.rs

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

//! Level generation settings.

use std::time::Duration;
use thiserror::Error;

use crate::generator::grid::MAX_FIELD_SIZE;
use crate::generator::group_code::LevelGroupCode;

pub const DEFAULT_FIELD_SIZE: usize = 4;
pub const DEFAULT_BLOCKERS: usize = 2;
pub const DEFAULT_WAYPOINTS: usize = 2;
pub const DEFAULT_MAX_TRY: usize = 500;
pub const DEFAULT_TIMEOUT_SEC: u64 = 60 * 60;

/// Invalid settings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("field size must be greater than 1")]
    FieldTooSmall,

    #[error("field size must be at most {max}")]
    FieldTooLarge { max: usize },

    #[error("{name} must be less than the number of cells minus two ({max})")]
    TooManyCells { name: &'static str, max: usize },

    #[error("maximum number of tries must be greater than 0")]
    NoTry,
}

/// Parameters of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorSettings {
    /// Width and height of the field.
    pub field_size: usize,

    /// Number of blockers in each level.
    pub blockers: usize,

    /// Number of waypoints in each level, in addition to the start and end cells.
    pub waypoints: usize,

    /// Number of random placements to try.
    pub max_try: usize,

    /// Wall-clock budget of the whole run.
    pub timeout: Duration,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            field_size: DEFAULT_FIELD_SIZE,
            blockers: DEFAULT_BLOCKERS,
            waypoints: DEFAULT_WAYPOINTS,
            max_try: DEFAULT_MAX_TRY,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SEC),
        }
    }
}

impl GeneratorSettings {
    /// Verify that random levels can be drawn with these settings.
    ///
    /// # Errors
    ///
    /// Start, end, blockers, and waypoints are distinct cells, so they must all fit in the field.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.field_size <= 1 {
            return Err(SettingsError::FieldTooSmall);
        }
        if self.field_size > MAX_FIELD_SIZE {
            return Err(SettingsError::FieldTooLarge {
                max: MAX_FIELD_SIZE,
            });
        }
        let max: usize = self.field_size * self.field_size - 2;
        if self.blockers > max {
            return Err(SettingsError::TooManyCells {
                name: "blocker count",
                max,
            });
        }
        if self.waypoints > max {
            return Err(SettingsError::TooManyCells {
                name: "waypoint count",
                max,
            });
        }
        if self.blockers.saturating_add(self.waypoints) > max {
            return Err(SettingsError::TooManyCells {
                name: "blocker and waypoint count",
                max,
            });
        }
        if self.max_try == 0 {
            return Err(SettingsError::NoTry);
        }
        Ok(())
    }

    /// Return the group the generated levels belong to.
    pub fn group_code(&self) -> LevelGroupCode {
        LevelGroupCode::new(self.field_size, self.waypoints, self.blockers)
    }
}
