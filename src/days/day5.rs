use anyhow::{bail, ensure, Context, Result};
use bitvec::prelude::*;
use tracing::debug;

const MAX_PAGE: usize = 100;

/// `rules[MAX_PAGE * x + y]` is set when page `x` must come before page `y`.
struct Manual {
    rules: BitArr!(for MAX_PAGE * MAX_PAGE),
    updates: Vec<Vec<usize>>,
}

fn page(s: &str) -> Result<usize> {
    let page = s.trim().parse::<usize>().with_context(|| format!("bad page number {s:?}"))?;
    ensure!(page < MAX_PAGE, "page number {page} out of range");
    Ok(page)
}

impl Manual {
    fn parse(input: &str) -> Result<Self> {
        let mut rules = bitarr![0; MAX_PAGE * MAX_PAGE];
        let mut updates = vec![];
        for line in input.trim().lines().map(str::trim).filter(|line| !line.is_empty()) {
            if let Some((x, y)) = line.split_once('|') {
                rules.set(MAX_PAGE * page(x)? + page(y)?, true);
            } else {
                let update = line.split(',').map(page).collect::<Result<Vec<_>>>()?;
                updates.push(update);
            }
        }
        Ok(Self { rules, updates })
    }

    fn before(&self, x: usize, y: usize) -> bool {
        self.rules[MAX_PAGE * x + y]
    }

    fn is_ordered(&self, update: &[usize]) -> bool {
        (0..update.len()).all(|x| (x + 1..update.len()).all(|y| !self.before(update[y], update[x])))
    }

    /// Exchange passes: any pair standing against a rule swaps places, until
    /// a pass swaps nothing or the pass budget runs out.
    fn repair(&self, update: &mut [usize]) -> bool {
        for _ in 0..=update.len() {
            let mut swapped = false;
            for x in 0..update.len() {
                for y in x + 1..update.len() {
                    if self.before(update[y], update[x]) {
                        update.swap(x, y);
                        swapped = true;
                    }
                }
            }
            if !swapped {
                return true;
            }
        }
        false
    }
}

fn middle(update: &[usize]) -> usize {
    update[update.len() / 2]
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let manual = Manual::parse(input)?;
    if manual.updates.iter().any(Vec::is_empty) {
        bail!("empty update");
    }

    if part == 1 {
        Ok(manual
            .updates
            .iter()
            .filter(|update| manual.is_ordered(update))
            .map(|update| middle(update))
            .sum::<usize>()
            .to_string())
    } else {
        Ok(manual
            .updates
            .iter()
            .filter(|update| !manual.is_ordered(update))
            .filter_map(|update| {
                let mut repaired = update.clone();
                if !manual.repair(&mut repaired) || !manual.is_ordered(&repaired) {
                    debug!(?update, "update could not be reordered");
                    return None;
                }
                Some(middle(&repaired))
            })
            .sum::<usize>()
            .to_string())
    }
}
