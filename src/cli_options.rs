/*
cli_options.rs

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

//! Process command-line options.
//!
//! By default, Linegame generates a group of random levels and saves it in the levels
//! directory.
//! The other options inspect the stored levels and verify answers.
//!
//! # Examples
//!
//! Generate levels on a 5x5 field with three blockers and two waypoints:
//!
//! ```
//! $ linegame --size 5 --block 3 --order 2 --max-try 200
//! generation is finished. result count is 41
//! ```
//!
//! List the stored groups:
//!
//! ```
//! $ linegame --ls
//! 4_2_2 (96 levels)
//! 5_2_3 (41 levels)
//! ```
//!
//! Verify an answer for the first level of a group:
//!
//! ```
//! $ linegame --check 5_2_3 --level 0 --answer answer.json
//! Answer rejected: cells in way 23, expected 22
//! ```

use clap::Parser;
use log::debug;
use std::env;
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::Duration;

use linegame::generator::answer_matrix::AnswerMatrix;
use linegame::generator::group_code::LevelGroupCode;
use linegame::generator::level_builder::LevelBuilder;
use linegame::level::{Level, LevelGroup};
use linegame::saver::levels::SaverLevels;
use linegame::settings::{self, GeneratorSettings};

/// Generate single-path grid puzzles and verify answers.
#[derive(Parser)]
#[command(about, long_about = None, version)]
struct Args {
    /// List the stored level groups
    #[arg(short, long, default_value_t = false)]
    ls: bool,

    /// Field size of the generated levels
    #[arg(short, long, default_value_t = settings::DEFAULT_FIELD_SIZE)]
    size: usize,

    /// Number of blockers in each generated level
    #[arg(short, long, default_value_t = settings::DEFAULT_BLOCKERS)]
    block: usize,

    /// Number of waypoints in each generated level, in addition to the start and end cells
    #[arg(short, long, default_value_t = settings::DEFAULT_WAYPOINTS)]
    order: usize,

    /// Maximum number of random placements to try
    #[arg(short, long, default_value_t = settings::DEFAULT_MAX_TRY)]
    max_try: usize,

    /// Generation timeout in seconds
    #[arg(short, long, default_value_t = settings::DEFAULT_TIMEOUT_SEC)]
    timeout: u64,

    /// Directory of the level group files
    #[arg(short = 'D', long, default_value = "levels")]
    levels_dir: PathBuf,

    /// Print the solution of each generated level
    #[arg(long, default_value_t = false)]
    show: bool,

    /// Verify the answer file against a stored level of the group
    #[arg(short, long, group = "play", value_name = "CODE", requires = "answer")]
    check: Option<String>,

    /// Print the stored solution of a level of the group
    #[arg(long, group = "play", value_name = "CODE")]
    hint: Option<String>,

    /// Level number in the group, starting at 0
    #[arg(short = 'n', long, default_value_t = 0)]
    level: usize,

    /// JSON file with the answer matrix, such as [[1, 2], [4, 3]]
    #[arg(short, long, requires = "check")]
    answer: Option<PathBuf>,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse and process command-line options. Return the exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let saver: SaverLevels = SaverLevels::new(args.levels_dir.clone());
    let res: Result<u8, Box<dyn Error>> = if args.ls {
        list(&saver)
    } else if let Some(code) = &args.check {
        check(&saver, code, args.level, args.answer.as_ref())
    } else if let Some(code) = &args.hint {
        hint(&saver, code, args.level)
    } else {
        generate(&saver, &args)
    };

    match res {
        Ok(ret) => ret,
        Err(e) => {
            eprintln!("Error: {e}");
            2
        }
    }
}

/// List the stored groups.
fn list(saver: &SaverLevels) -> Result<u8, Box<dyn Error>> {
    for code in saver.group_codes()? {
        let count: usize = saver.load_group(code)?.map_or(0, |g| g.levels.len());
        println!("{code} ({count} levels)");
    }
    Ok(0)
}

/// Retrieve a stored level.
fn load_level(saver: &SaverLevels, code: &str, level_num: usize) -> Result<Level, Box<dyn Error>> {
    let code: LevelGroupCode = code.parse()?;
    saver
        .load_level(code, level_num)?
        .ok_or_else(|| format!("level {level_num} of group {code} does not exist").into())
}

/// Verify an answer file.
fn check(
    saver: &SaverLevels,
    code: &str,
    level_num: usize,
    answer_file: Option<&PathBuf>,
) -> Result<u8, Box<dyn Error>> {
    let level: Level = load_level(saver, code, level_num)?;
    let answer_file: &PathBuf = answer_file.ok_or("missing answer file")?;
    let reader: BufReader<File> = BufReader::new(File::open(answer_file)?);
    let answer: AnswerMatrix = serde_json::from_reader(reader)?;
    debug!("Submitted answer:\n{answer}");

    match level.check(&answer) {
        Ok(()) => {
            println!("Answer accepted");
            Ok(0)
        }
        Err(e) => {
            println!("Answer rejected: {e}");
            Ok(1)
        }
    }
}

/// Print the stored solution of a level.
fn hint(saver: &SaverLevels, code: &str, level_num: usize) -> Result<u8, Box<dyn Error>> {
    let level: Level = load_level(saver, code, level_num)?;
    print!("{}", level.hint());
    println!("{}", serde_json::to_string(level.hint())?);
    Ok(0)
}

/// Generate and save a level group.
fn generate(saver: &SaverLevels, args: &Args) -> Result<u8, Box<dyn Error>> {
    let settings: GeneratorSettings = GeneratorSettings {
        field_size: args.size,
        blockers: args.block,
        waypoints: args.order,
        max_try: args.max_try,
        timeout: Duration::from_secs(args.timeout),
    };
    let mut builder: LevelBuilder = LevelBuilder::new(settings)?;
    let group: LevelGroup = builder.generate();

    if args.show {
        for (i, level) in group.levels.iter().enumerate() {
            println!("Level {i}: start {} end {}", level.start_cell, level.end_cell);
            print!("{}", level.answer);
        }
    }

    let path: PathBuf = saver.save_group(&group)?;
    debug!("Saved in {path:?}");
    println!(
        "generation is finished. result count is {}",
        group.levels.len()
    );
    Ok(0)
}
