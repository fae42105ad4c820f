use criterion::{criterion_group, criterion_main, Criterion, SamplingMode};

use sudoku_checker::SudokuGrid;
use sudoku_checker::solver::{BacktrackingSolver, Solution, Solver};

use std::time::Duration;

const MEASUREMENT_TIME_SECS: u64 = 10;

// A typical service request: a puzzle with 38 clues.
const SAMPLE_PUZZLE: &str =
    "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37.";
const SAMPLE_SOLUTION: &str =
    "135762984946381257728459613694517832812936745357824196473298561581673429269145378";

// A puzzle with few clues, which forces deeper backtracking.
// World Puzzle Federation Sudoku GP 2020 Round 8, Puzzle 2.
const SPARSE_PUZZLE: &str = concat!(
    "....81...",
    "..2..78..",
    ".53...17.",
    "37.......",
    "6.......3",
    ".......24",
    ".69...23.",
    "..59..4..",
    "...65...."
);
const SPARSE_SOLUTION: &str = concat!(
    "746281359",
    "912537846",
    "853496172",
    "374125698",
    "628749513",
    "591368724",
    "169874235",
    "285913467",
    "437652981"
);

fn solve_task(grid: &SudokuGrid, expected: &str) {
    match BacktrackingSolver.solve(grid) {
        Solution::Solved(solution) => assert_eq!(expected, solution.code()),
        Solution::Impossible => panic!("benchmark puzzle marked impossible")
    }
}

fn benchmark_backtracking(c: &mut Criterion) {
    let mut group = c.benchmark_group("backtracking");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(MEASUREMENT_TIME_SECS));

    let sample = SudokuGrid::parse(SAMPLE_PUZZLE).unwrap();
    let sparse = SudokuGrid::parse(SPARSE_PUZZLE).unwrap();

    group.bench_function("sample puzzle",
        |b| b.iter(|| solve_task(&sample, SAMPLE_SOLUTION)));
    group.bench_function("sparse puzzle",
        |b| b.iter(|| solve_task(&sparse, SPARSE_SOLUTION)));
    group.finish();
}

criterion_group!(all_groups, benchmark_backtracking);
criterion_main!(all_groups);
