use std::iter::zip;

use anyhow::{bail, Context, Result};
use rustc_hash::FxHashMap;

fn parse(input: &str) -> Result<(Vec<i64>, Vec<i64>)> {
    let mut lefts = vec![];
    let mut rights = vec![];
    for (li, line) in input.trim().lines().enumerate() {
        let fields = line.split_whitespace().collect::<Vec<_>>();
        let [left, right] = fields[..] else {
            bail!("line {}: expected two numbers, got {:?}", li + 1, line)
        };
        lefts.push(left.parse().with_context(|| format!("line {}: bad number {left:?}", li + 1))?);
        rights.push(right.parse().with_context(|| format!("line {}: bad number {right:?}", li + 1))?);
    }
    Ok((lefts, rights))
}

fn distance(mut lefts: Vec<i64>, mut rights: Vec<i64>) -> Result<u64> {
    lefts.sort_unstable();
    rights.sort_unstable();
    zip(lefts, rights).try_fold(0u64, |total, (left, right)| {
        total.checked_add(left.abs_diff(right)).context("distance overflows")
    })
}

fn similarity(lefts: &[i64], rights: &[i64]) -> Result<i64> {
    let mut counts = FxHashMap::default();
    for &right in rights {
        *counts.entry(right).or_insert(0i64) += 1;
    }
    lefts.iter().try_fold(0i64, |total, &left| {
        left.checked_mul(counts.get(&left).copied().unwrap_or(0))
            .and_then(|score| total.checked_add(score))
            .with_context(|| format!("similarity overflows at {left}"))
    })
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let (lefts, rights) = parse(input)?;
    Ok(if part == 1 {
        distance(lefts, rights)?.to_string()
    } else {
        similarity(&lefts, &rights)?.to_string()
    })
}
