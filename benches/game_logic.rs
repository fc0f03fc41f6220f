use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_lines::core::{shortest_path, turn, Board, Game, TurnAnim, TurnClickResult};

fn bench_line_mask(c: &mut Criterion) {
    let mut board = Board::new();
    for i in 0..81usize {
        board.set_index(i, (i % 7) as u8 + 1);
    }

    c.bench_function("line_mask_full_board", |b| {
        b.iter(|| black_box(&board).line_mask())
    });
}

fn bench_clear_cross(c: &mut Criterion) {
    c.bench_function("clear_13_cell_cross", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for i in 0..9 {
                board.set(i, 4, 2);
                board.set(4, i, 2);
            }
            board.clear_lines()
        })
    });
}

fn bench_shortest_path(c: &mut Criterion) {
    // Serpentine walls force a long path.
    let mut board = Board::new();
    for row in (1..9).step_by(2) {
        for col in 0..8 {
            let col = if row % 4 == 1 { col } else { col + 1 };
            board.set(row, col, (col % 7) as u8 + 1);
        }
    }
    board.set_index(0, 3);

    c.bench_function("shortest_path_serpentine", |b| {
        b.iter(|| shortest_path(black_box(&board), 0, 80))
    });
}

fn bench_turn_click(c: &mut Criterion) {
    let mut result = TurnClickResult::default();

    c.bench_function("turn_select_and_move", |b| {
        b.iter_batched(
            || {
                let mut board = Board::new();
                board.set(0, 0, 1);
                board.set(3, 3, 2);
                let mut game = Game::from_board(board, [3, 4, 5], 12345);
                game.click(0, 0);
                game
            },
            |mut game| {
                turn::click_into(&mut game, 8, 8, &mut result);
                game
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_anim_turn(c: &mut Criterion) {
    let mut before = Board::new();
    for i in 1..5 {
        before.set_index(i, 1);
    }
    before.set_index(9, 1);
    let mut after = Board::new();
    after.set_index(80, 2);
    after.set_index(70, 3);

    c.bench_function("anim_full_turn_60fps", |b| {
        let mut anim = TurnAnim::new();
        let mut render = Board::new();
        b.iter(|| {
            anim.start(&before, &after, Some(9), Some(0), &[9, 0]);
            anim.begin_render(&mut render);
            while anim.active() {
                anim.update(black_box(1.0 / 60.0), &mut render);
            }
        })
    });
}

criterion_group!(
    benches,
    bench_line_mask,
    bench_clear_cross,
    bench_shortest_path,
    bench_turn_click,
    bench_anim_turn,
);
criterion_main!(benches);
