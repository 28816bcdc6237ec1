/*
group_code.rs

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

//! Level group codes.
//!
//! Levels with the same field size, number of waypoints, and number of blockers have the same
//! difficulty and belong to the same group. The group is identified by a code such as `4_2_1`
//! (field size 4, two waypoints, one blocker).

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a group code cannot be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GroupCodeError {
    #[error("malformed group code: empty input")]
    Empty,

    #[error("malformed group code \"{0}\": expected three segments separated by '_'")]
    WrongArity(String),

    #[error("malformed group code \"{code}\": cannot decode the {segment}")]
    NotANumber { code: String, segment: &'static str },
}

/// Level group code.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LevelGroupCode {
    pub field_size: usize,
    pub waypoints: usize,
    pub blockers: usize,
}

impl LevelGroupCode {
    pub fn new(field_size: usize, waypoints: usize, blockers: usize) -> Self {
        Self {
            field_size,
            waypoints,
            blockers,
        }
    }
}

impl fmt::Display for LevelGroupCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}_{}_{}", self.field_size, self.waypoints, self.blockers)
    }
}

impl FromStr for LevelGroupCode {
    type Err = GroupCodeError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        if code.is_empty() {
            return Err(GroupCodeError::Empty);
        }
        let segments: Vec<&str> = code.split('_').collect();
        if segments.len() != 3 {
            return Err(GroupCodeError::WrongArity(code.to_string()));
        }
        let number = |i: usize, segment: &'static str| {
            segments[i]
                .parse::<usize>()
                .map_err(|_| GroupCodeError::NotANumber {
                    code: code.to_string(),
                    segment,
                })
        };
        Ok(Self {
            field_size: number(0, "field size")?,
            waypoints: number(1, "waypoint count")?,
            blockers: number(2, "blocker count")?,
        })
    }
}

impl Serialize for LevelGroupCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for LevelGroupCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: String = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
