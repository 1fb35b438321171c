//! Benchmarks for run painting.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use pixelfield::editor::{Command, EditorState, RunLength};
use pixelfield::grid::PixelGrid;

fn bench_fill_grid(c: &mut Criterion) {
    let run = Command::PlaceRun(RunLength::new(9).unwrap());
    c.bench_function("fill_256x256_with_runs", |b| {
        b.iter(|| {
            let mut state = EditorState::new(PixelGrid::new(256, 256).unwrap());
            for _ in 0..(256 * 256 / 9 + 1) {
                state.apply(black_box(run));
            }
            state
        })
    });
}

fn bench_cursor_moves(c: &mut Criterion) {
    let mut state = EditorState::new(PixelGrid::new(1024, 1024).unwrap());
    let moves = [
        Command::Move(pixelfield::editor::Direction::Right),
        Command::Move(pixelfield::editor::Direction::Down),
        Command::Home,
    ];
    c.bench_function("cursor_moves", |b| {
        b.iter(|| {
            for command in moves {
                state.apply(black_box(command));
            }
        })
    });
}

criterion_group!(benches, bench_fill_grid, bench_cursor_moves);
criterion_main!(benches);
