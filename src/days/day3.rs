use anyhow::{bail, Context, Result};
use regex::Regex;

pub fn solve(part: u8, input: &str) -> Result<String> {
    if part != 1 {
        bail!("day 3 only has a first part");
    }
    let mul = Regex::new(r"mul\((\d+),(\d+)\)")?;
    let mut found = false;
    let mut total = 0u64;
    for m in mul.captures_iter(input) {
        found = true;
        let a = m[1].parse::<u64>().with_context(|| format!("bad operand in {}", &m[0]))?;
        let b = m[2].parse::<u64>().with_context(|| format!("bad operand in {}", &m[0]))?;
        total = a
            .checked_mul(b)
            .and_then(|product| total.checked_add(product))
            .with_context(|| format!("total overflows at {}", &m[0]))?;
    }
    if !found {
        bail!("no instructions found");
    }
    Ok(total.to_string())
}
