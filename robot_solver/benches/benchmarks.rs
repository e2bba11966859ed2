use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use robot_board::generator::Generator;
use robot_board::{Board, Field};
use robot_solver::util::VisitedFields;
use robot_solver::{DepthFirst, PathFinder};

fn bench_path_finder(c: &mut Criterion) {
    let mut group = c.benchmark_group("Robot Path Finder");
    for (name, board) in bench_boards() {
        let target = Field::new(board.max_width() / 2, board.max_height() / 2);
        group.bench_function(BenchmarkId::new("Depth-First", name), |b| {
            b.iter(|| DepthFirst::new().find_path(&board, Field::new(0, 0), target))
        });
    }
    group.finish();
}

fn bench_util(c: &mut Criterion) {
    let board = Board::new(99, 99);

    let mut group = c.benchmark_group("Robot Path Finder Utils");
    group.bench_function(BenchmarkId::new("VisitedFields", "100x100"), |b| {
        b.iter(|| VisitedFields::new(&board))
    });

    group.finish();
}

/// The target in the middle of a board without a route to it.
fn bench_unreachable(c: &mut Criterion) {
    let mut board = Board::new(199, 199);
    let target = Field::new(100, 100);
    board.add_obstacles(
        [(99, 100), (101, 100), (100, 99), (100, 101)]
            .iter()
            .copied()
            .map(Into::into),
    );

    let mut group = c.benchmark_group("Unreachable target");
    group.sample_size(10);
    group.bench_function(BenchmarkId::new("Depth-First", "200x200"), |b| {
        b.iter(|| DepthFirst::new().find_path(&board, Field::new(0, 0), target))
    });
    group.finish();
}

criterion_group!(benches, bench_path_finder, bench_util, bench_unreachable);
criterion_main!(benches);

fn bench_boards() -> Vec<(&'static str, Board)> {
    vec![
        ("empty 6x6", Board::new(5, 5)),
        ("empty 50x50", Board::new(49, 49)),
        (
            "generated 50x50",
            Generator::from_seed(17)
                .reserve(Field::new(0, 0))
                .reserve(Field::new(24, 24))
                .generate_board(49, 49, 400),
        ),
    ]
}
