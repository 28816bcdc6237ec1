/*
levels.rs

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

//! Save and restore level groups.
//!
//! Each [`LevelGroup`] is stored in its own `<group code>.json` file, such as `4_2_2.json`, in
//! the levels directory.
//! The saved object is a serialization of the [`LevelGroup`] object in JSON format by using
//! [`serde`].
//!
//! Groups are played in the order of their codes: the field size first, then the number of
//! waypoints, and then the number of blockers.

use log::debug;
use std::error::Error;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

use crate::generator::group_code::LevelGroupCode;
use crate::level::{Level, LevelGroup};

/// Object to save and restore level groups.
pub struct SaverLevels {
    /// Absolute or relative path to the levels directory.
    levels_dir: PathBuf,
}

impl SaverLevels {
    /// Create a [`SaverLevels`] object.
    pub fn new(levels_dir: PathBuf) -> Self {
        debug!("Levels directory: {levels_dir:?}");
        Self { levels_dir }
    }

    /// Return the path to the file of the given group.
    pub fn group_file(&self, code: LevelGroupCode) -> PathBuf {
        self.levels_dir.join(format!("{code}.json"))
    }

    /// Save the provided [`LevelGroup`] object. An existing file for the same group is replaced.
    pub fn save_group(&self, group: &LevelGroup) -> Result<PathBuf, Box<dyn Error>> {
        fs::create_dir_all(&self.levels_dir)?;
        let path: PathBuf = self.group_file(group.code());
        let file: File = File::create(&path)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, group)?;
        writer.flush()?;
        debug!("{} levels saved in {path:?}", group.levels.len());
        Ok(path)
    }

    /// Retrieve the [`LevelGroup`] object for the given code.
    ///
    /// Return None if the group file does not exist.
    pub fn load_group(&self, code: LevelGroupCode) -> Result<Option<LevelGroup>, Box<dyn Error>> {
        let path: PathBuf = self.group_file(code);
        let file: File = match File::open(&path) {
            Ok(f) => f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        };
        let reader: BufReader<File> = BufReader::new(file);
        let group: LevelGroup = serde_json::from_reader(reader)?;
        if group.code() != code {
            return Err(format!("file {path:?} holds the group {}", group.code()).into());
        }
        Ok(Some(group))
    }

    /// Retrieve one level.
    ///
    /// Return None if the group or the level does not exist.
    pub fn load_level(
        &self,
        code: LevelGroupCode,
        level_num: usize,
    ) -> Result<Option<Level>, Box<dyn Error>> {
        Ok(self
            .load_group(code)?
            .and_then(|group| group.levels.into_iter().nth(level_num)))
    }

    /// Retrieve the requested level, or the last level of the group when the number is past
    /// its end.
    ///
    /// Return the number of the level that was retrieved. Return None if the group does not
    /// exist or is empty.
    pub fn closest_level(
        &self,
        code: LevelGroupCode,
        level_num: usize,
    ) -> Result<Option<(usize, Level)>, Box<dyn Error>> {
        let Some(group) = self.load_group(code)? else {
            return Ok(None);
        };
        let num: usize = level_num.min(group.levels.len().saturating_sub(1));
        Ok(group.levels.into_iter().nth(num).map(|level| (num, level)))
    }

    /// Return the codes of the stored groups, sorted.
    ///
    /// Files whose name is not a group code are ignored.
    pub fn group_codes(&self) -> Result<Vec<LevelGroupCode>, Box<dyn Error>> {
        let entries = match fs::read_dir(&self.levels_dir) {
            Ok(e) => e,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(Vec::new()),
                _ => return Err(Box::new(error)),
            },
        };
        let mut codes: Vec<LevelGroupCode> = Vec::new();
        for entry in entries {
            let path: PathBuf = entry?.path();
            if path.extension().is_none_or(|ext| ext != "json") {
                continue;
            }
            match path.file_stem().and_then(|s| s.to_str()).map(str::parse::<LevelGroupCode>) {
                Some(Ok(code)) => codes.push(code),
                _ => debug!("Ignoring {path:?}"),
            }
        }
        codes.sort_unstable();
        Ok(codes)
    }

    /// Return the code of the first group to play.
    pub fn start_group_code(&self) -> Result<Option<LevelGroupCode>, Box<dyn Error>> {
        Ok(self.group_codes()?.into_iter().next())
    }

    /// Return the level that follows the given one: the next level in the same group, or the
    /// first level of the next non-empty group.
    ///
    /// Return None when there are no more levels.
    pub fn next_level(
        &self,
        code: LevelGroupCode,
        level_num: usize,
    ) -> Result<Option<(LevelGroupCode, usize)>, Box<dyn Error>> {
        if let Some(group) = self.load_group(code)?
            && level_num + 1 < group.levels.len()
        {
            return Ok(Some((code, level_num + 1)));
        }
        for next in self.group_codes()?.into_iter().filter(|c| *c > code) {
            if let Some(group) = self.load_group(next)?
                && !group.levels.is_empty()
            {
                return Ok(Some((next, 0)));
            }
        }
        Ok(None)
    }
}
