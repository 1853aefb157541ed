//! One solver per puzzle day, all answering with a printable string.

pub mod day1;
pub mod day3;
pub mod day4;
pub mod day5;
pub mod day6;
pub mod day7;
pub mod day8;

use anyhow::{bail, Result};
use itertools::Itertools;

use crate::config::Config;

pub const SUPPORTED: [u8; 7] = [1, 3, 4, 5, 6, 7, 8];

pub fn solve(config: &Config, input: &str) -> Result<String> {
    let part = config.part;
    match config.day {
        1 => day1::solve(part, input),
        3 => day3::solve(part, input),
        4 => day4::solve(part, input),
        5 => day5::solve(part, input),
        6 => day6::solve(part, input, config.search_mode),
        7 => day7::solve(part, input),
        8 => day8::solve(part, input),
        day => bail!("no solver for day {day} (supported: {})", SUPPORTED.iter().join(", ")),
    }
}
