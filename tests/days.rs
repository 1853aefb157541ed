use std::fs;

use advent_solvers::config::{default_input, Config};
use advent_solvers::days;
use advent_solvers::guard::SearchMode;

const PATROL: &str = "\
....#.....
.........#
..........
..#.......
.......#..
..........
.#..^.....
........#.
#.........
......#...
";

fn config_in(dir: &tempfile::TempDir, day: u8, part: u8, input: &str) -> Config {
    let path = dir.path().join(default_input(day, Some(1)));
    fs::write(&path, input).expect("write input");
    Config {
        input: path,
        ..Config::new(day, part)
    }
}

#[test]
fn patrol_from_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    for (part, expected) in [(1, "41"), (2, "6")] {
        let config = config_in(&dir, 6, part, PATROL);
        let input = config.load_input().expect("load");
        assert_eq!(days::solve(&config, &input).expect("solve"), expected);
    }
}

#[test]
fn parallel_search_from_config() {
    let config = Config {
        search_mode: SearchMode::Parallel,
        ..Config::new(6, 2)
    };
    assert_eq!(days::solve(&config, PATROL).expect("solve"), "6");
}

#[test]
fn dispatches_sibling_days() {
    let cases = [
        (1, 1, "3   4\n4   3\n2   5\n1   3\n3   9\n3   3\n", "11"),
        (3, 1, "mul(2,4)mul(3,7)", "29"),
        (7, 2, "156: 15 6\n7290: 6 8 6 15\n", "7446"),
        (8, 1, "a...\n.a..\n....\n....\n", "1"),
    ];
    for (day, part, input, expected) in cases {
        let answer = days::solve(&Config::new(day, part), input).expect("solve");
        assert_eq!(answer, expected, "day {day} part {part}");
    }
}

#[test]
fn unsupported_day_is_an_error() {
    let err = days::solve(&Config::new(2, 1), "7 6 4 2 1").unwrap_err();
    assert!(err.to_string().starts_with("no solver for day 2"), "{err}");
}
