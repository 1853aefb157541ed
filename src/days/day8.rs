use anyhow::{bail, Result};
use itertools::Itertools;
use rustc_hash::{FxHashMap, FxHashSet};

type Point = (isize, isize);

struct Antennas {
    rows: isize,
    cols: isize,
    frequencies: FxHashMap<u8, Vec<Point>>,
}

impl Antennas {
    fn parse(input: &str) -> Result<Self> {
        let mut frequencies: FxHashMap<u8, Vec<Point>> = FxHashMap::default();
        let lines = input.trim().lines().collect::<Vec<_>>();
        for (ri, line) in lines.iter().enumerate() {
            for (ci, &cell) in line.as_bytes().iter().enumerate() {
                match cell {
                    b'.' => (),
                    cell if cell.is_ascii_alphanumeric() => {
                        frequencies.entry(cell).or_default().push((ri as isize, ci as isize));
                    }
                    _ => bail!("unexpected character {:?} at ({}, {})", cell as char, ri, ci),
                }
            }
        }
        Ok(Self {
            rows: lines.len() as isize,
            cols: lines.first().map_or(0, |line| line.len()) as isize,
            frequencies,
        })
    }

    fn contains(&self, (ri, ci): Point) -> bool {
        (0..self.rows).contains(&ri) && (0..self.cols).contains(&ci)
    }

    /// Walks from `a` away from `b` in steps of `a - b`, starting `first`
    /// steps out, for as long as the grid lasts.
    fn ray(&self, a: Point, b: Point, first: isize) -> impl Iterator<Item = Point> + '_ {
        let (dr, dc) = (a.0 - b.0, a.1 - b.1);
        (first..)
            .map(move |n| (a.0 + n * dr, a.1 + n * dc))
            .take_while(move |&point| self.contains(point))
    }

    fn antinodes(&self, resonant: bool) -> FxHashSet<Point> {
        self.frequencies
            .values()
            .flat_map(|antennas| antennas.iter().copied().permutations(2))
            .flat_map(|pair| {
                let (first, limit) = if resonant { (0, usize::MAX) } else { (1, 1) };
                self.ray(pair[0], pair[1], first).take(limit)
            })
            .collect()
    }
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    Ok(Antennas::parse(input)?.antinodes(part > 1).len().to_string())
}
