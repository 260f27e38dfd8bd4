use criterion::{criterion_group, criterion_main, Criterion};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use sudoku_engine::{Config, Sudoku};
use sudoku_engine::solver::BacktrackingSolver;

// Explanation of benchmark classes:
//
// validate: a whole-board validation pass over the classic puzzle.
// solve ascending: backtracking with candidates in ascending order, which is
//                  fully deterministic.
// solve shuffled: backtracking with seeded shuffled candidate order, the
//                 configuration callers use to vary completions across runs.

const CLASSIC_PUZZLE: &str = "\
    5,3, , ,7, , , , ,\
    6, , ,1,9,5, , , ,\
     ,9,8, , , , ,6, ,\
    8, , , ,6, , , ,3,\
    4, , ,8, ,3, , ,1,\
    7, , , ,2, , , ,6,\
     ,6, , , , ,2,8, ,\
     , , ,4,1,9, , ,5,\
     , , , ,8, , ,7,9";

fn config(shuffle_candidates: bool) -> Config {
    Config {
        validate_on_insert: true,
        shuffle_candidates
    }
}

fn benchmark_validate(c: &mut Criterion) {
    let mut sudoku = Sudoku::parse(CLASSIC_PUZZLE, config(false)).unwrap();

    c.bench_function("validate classic puzzle", |b| b.iter(|| {
        assert!(sudoku.validate_board());
    }));
}

fn benchmark_solve_ascending(c: &mut Criterion) {
    let sudoku = Sudoku::parse(CLASSIC_PUZZLE, config(false)).unwrap();
    let mut solver = BacktrackingSolver::new_default();

    c.bench_function("solve classic puzzle ascending", |b| b.iter(|| {
        let mut sudoku = sudoku.clone();
        assert!(solver.solve(&mut sudoku));
    }));
}

fn benchmark_solve_shuffled(c: &mut Criterion) {
    let sudoku = Sudoku::parse(CLASSIC_PUZZLE, config(true)).unwrap();
    let mut solver = BacktrackingSolver::new(ChaCha8Rng::seed_from_u64(42));

    c.bench_function("solve classic puzzle shuffled", |b| b.iter(|| {
        let mut sudoku = sudoku.clone();
        assert!(solver.solve(&mut sudoku));
    }));
}

fn benchmark_solve_empty(c: &mut Criterion) {
    let mut solver = BacktrackingSolver::new(ChaCha8Rng::seed_from_u64(42));

    c.bench_function("solve empty board shuffled", |b| b.iter(|| {
        let mut sudoku = Sudoku::new(config(true));
        assert!(solver.solve(&mut sudoku));
    }));
}

criterion_group!(benches, benchmark_validate, benchmark_solve_ascending,
    benchmark_solve_shuffled, benchmark_solve_empty);
criterion_main!(benches);
