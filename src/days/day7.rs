use anyhow::{ensure, Context, Result};
use itertools::Itertools;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operator {
    Add,
    Multiply,
    Concatenate,
}

impl Operator {
    fn apply(self, left: u64, right: u64) -> Option<u64> {
        match self {
            Self::Add => left.checked_add(right),
            Self::Multiply => left.checked_mul(right),
            Self::Concatenate => concat(left, right),
        }
    }
}

fn concat(left: u64, right: u64) -> Option<u64> {
    let shift = 10u64.checked_pow(right.checked_ilog10().unwrap_or(0) + 1)?;
    left.checked_mul(shift)?.checked_add(right)
}

struct Equation {
    total: u64,
    numbers: Vec<u64>,
}

impl Equation {
    fn parse(line: &str) -> Result<Self> {
        let (total, numbers) = line
            .split_once(':')
            .with_context(|| format!("invalid equation {line:?}"))?;
        let total = total.trim().parse().with_context(|| format!("bad total in {line:?}"))?;
        let numbers = numbers
            .split_whitespace()
            .map(|n| n.parse::<u64>().with_context(|| format!("bad number {n:?} in {line:?}")))
            .collect::<Result<Vec<_>>>()?;
        ensure!(!numbers.is_empty(), "equation {line:?} has no numbers");
        Ok(Self { total, numbers })
    }

    fn evaluate(&self, operators: &[Operator]) -> Option<u64> {
        let (&first, rest) = self.numbers.split_first()?;
        rest.iter()
            .zip(operators)
            .try_fold(first, |acc, (&n, op)| op.apply(acc, n))
    }

    /// Tries every operator permutation, left to right, no precedence.
    fn solvable(&self, operators: &[Operator]) -> bool {
        let slots = self.numbers.len() - 1;
        if slots == 0 {
            return self.numbers[0] == self.total;
        }
        std::iter::repeat(operators.iter().copied())
            .take(slots)
            .multi_cartesian_product()
            .any(|perm| self.evaluate(&perm) == Some(self.total))
    }
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let operators: &[Operator] = if part == 1 {
        &[Operator::Add, Operator::Multiply]
    } else {
        &[Operator::Add, Operator::Multiply, Operator::Concatenate]
    };
    let equations = input.trim().lines().map(Equation::parse).collect::<Result<Vec<_>>>()?;
    Ok(equations
        .iter()
        .filter(|eq| eq.solvable(operators))
        .map(|eq| eq.total)
        .sum::<u64>()
        .to_string())
}
