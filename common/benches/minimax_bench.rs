use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tictactoe_common::games::tictactoe::{Board, Mark, best_move, search};

fn bench_single_move_empty_board() {
    let board = Board::new();
    black_box(search(black_box(&board), Mark::X).ok());
}

fn bench_reply_to_center_opening() {
    let mut board = Board::new();
    if board.apply(4, Mark::X).is_err() {
        return;
    }
    black_box(search(black_box(&board), Mark::O).ok());
}

fn bench_self_play_game() {
    let mut board = Board::new();
    while let Some(mark) = board.to_move() {
        let Ok(index) = best_move(&board, mark) else {
            break;
        };
        if board.apply(index, mark).is_err() {
            break;
        }
    }
    black_box(board);
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group.bench_function("single_move_empty", |b| {
        b.iter(bench_single_move_empty_board)
    });

    group.bench_function("reply_to_center", |b| {
        b.iter(bench_reply_to_center_opening)
    });

    group.bench_function("self_play_game", |b| b.iter(bench_self_play_game));

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
