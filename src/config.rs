//! Run settings, resolved once from the command line.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::guard::SearchMode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub day: u8,
    pub part: u8,
    pub input: PathBuf,
    pub search_mode: SearchMode,
    pub verbosity: u8,
}

impl Config {
    pub fn new(day: u8, part: u8) -> Self {
        Self {
            day,
            part,
            input: default_input(day, None),
            search_mode: SearchMode::default(),
            verbosity: 0,
        }
    }

    pub fn load_input(&self) -> Result<String> {
        fs::read_to_string(&self.input)
            .with_context(|| format!("read input {}", self.input.display()))
    }
}

/// `day6.in` for the real puzzle, `day6test2.in` for the second example.
pub fn default_input(day: u8, test: Option<u32>) -> PathBuf {
    match test {
        None => format!("day{day}.in"),
        Some(test) => format!("day{day}test{test}.in"),
    }
    .into()
}
