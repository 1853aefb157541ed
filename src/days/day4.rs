use anyhow::Result;

const DIRECTIONS: [(isize, isize); 8] =
    [(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0), (1, 1)];

struct Letters<'a> {
    rows: Vec<&'a [u8]>,
}

impl<'a> Letters<'a> {
    fn parse(input: &'a str) -> Self {
        Self {
            rows: input.trim().lines().map(str::as_bytes).collect(),
        }
    }

    fn get(&self, ri: isize, ci: isize) -> Option<u8> {
        let row = self.rows.get(usize::try_from(ri).ok()?)?;
        row.get(usize::try_from(ci).ok()?).copied()
    }

    fn positions(&self) -> impl Iterator<Item = (isize, isize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(ri, row)| {
            (0..row.len()).map(move |ci| (ri as isize, ci as isize))
        })
    }

    fn spells(&self, word: &[u8], (ri, ci): (isize, isize), (rd, cd): (isize, isize)) -> bool {
        (0..).zip(word).all(|(n, &letter)| self.get(ri + n * rd, ci + n * cd) == Some(letter))
    }

    fn count_xmas(&self) -> usize {
        self.positions()
            .map(|at| DIRECTIONS.iter().filter(|&&dir| self.spells(b"XMAS", at, dir)).count())
            .sum()
    }

    /// An `A` whose two diagonals each read `MAS` one way or the other.
    fn count_crossed_mas(&self) -> usize {
        self.positions()
            .filter(|&(ri, ci)| {
                self.get(ri, ci) == Some(b'A')
                    && [(-1, -1), (-1, 1)].iter().all(|&(rd, cd)| {
                        matches!(
                            (self.get(ri + rd, ci + cd), self.get(ri - rd, ci - cd)),
                            (Some(b'M'), Some(b'S')) | (Some(b'S'), Some(b'M'))
                        )
                    })
            })
            .count()
    }
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let letters = Letters::parse(input);
    Ok(if part == 1 {
        letters.count_xmas()
    } else {
        letters.count_crossed_mas()
    }
    .to_string())
}
