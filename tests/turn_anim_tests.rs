use tui_lines::core::{Board, TurnAnim};
use tui_lines::types::{TurnPhase, EMPTY};

fn board_with(cells: &[(usize, u8)]) -> Board {
    let mut board = Board::new();
    for &(idx, color) in cells {
        board.set_index(idx, color);
    }
    board
}

#[test]
fn move_only_sequence() {
    let before = board_with(&[(0, 3)]);
    let final_board = board_with(&[(1, 3)]);
    let mut render = Board::new();

    let mut anim = TurnAnim::new();
    anim.start(&before, &final_board, Some(0), Some(1), &[0, 1]);
    assert!(anim.active());
    assert_eq!(anim.phase(), TurnPhase::Move);
    assert!(anim.cleared().is_empty());
    assert!(anim.spawned().is_empty());

    anim.begin_render(&mut render);
    assert_eq!(render.get_index(0), EMPTY);
    assert_eq!(render.get_index(1), EMPTY);

    assert!(anim.update(0.19, &mut render));
    assert_eq!(anim.phase(), TurnPhase::Spawn);
    assert_eq!(anim.spawn_scale(1), None);
    assert_eq!(render.get_index(1), 3);

    assert!(!anim.update(0.19, &mut render));
    assert!(!anim.active());
    assert_eq!(render.get_index(1), 3);
}

#[test]
fn move_clear_spawn_sequence() {
    // The moved ball completes a line at index 0 and is consumed with it;
    // a ball also appears at 80.
    let before = board_with(&[(9, 1), (1, 1), (2, 1), (3, 1), (4, 1)]);
    let final_board = board_with(&[(80, 2)]);
    let mut render = Board::new();

    let mut anim = TurnAnim::new();
    anim.start(&before, &final_board, Some(9), Some(0), &[9, 0]);
    anim.begin_render(&mut render);

    assert!(anim.update(0.19, &mut render));
    assert_eq!(anim.phase(), TurnPhase::Clear);
    assert!(anim.cleared().len() >= 5);
    assert!(anim.cleared().iter().any(|b| b.index == 0 && b.color == 1));
    for idx in [0, 1, 2, 3, 4, 80] {
        assert_eq!(render.get_index(idx), EMPTY, "index {idx}");
    }

    assert!(!anim.update(0.17, &mut render));
    assert_eq!(anim.phase(), TurnPhase::Spawn);
    assert_eq!(anim.spawn_scale(80), Some(0.0));
    assert_eq!(render.get_index(80), EMPTY);

    anim.update(0.01, &mut render);
    let early = anim.spawn_scale(80).unwrap();
    assert!(early > 0.0);
    assert_eq!(render.get_index(80), 2);

    anim.update(0.05, &mut render);
    let later = anim.spawn_scale(80).unwrap();
    assert!(later > early && later <= 1.0);

    anim.update(0.20, &mut render);
    assert!(!anim.active());
    assert_eq!(render, final_board);
}

#[test]
fn clear_phase_holds_the_cleared_board() {
    let before = board_with(&[(9, 1), (1, 1), (2, 1), (3, 1), (4, 1)]);
    let final_board = Board::new();
    let mut render = Board::new();

    let mut anim = TurnAnim::new();
    anim.start(&before, &final_board, Some(9), Some(0), &[9, 0]);
    anim.begin_render(&mut render);
    anim.update(0.2, &mut render);

    for _ in 0..3 {
        assert!(!anim.update(0.05, &mut render));
        assert_eq!(anim.phase(), TurnPhase::Clear);
        assert_eq!(&render, anim.after_clear_board());
    }
}

#[test]
fn snapshots_are_derived_from_the_diff() {
    // Ball moves 0 -> 2 and survives; two balls spawn elsewhere.
    let before = board_with(&[(0, 4), (40, 6)]);
    let final_board = board_with(&[(2, 4), (40, 6), (10, 1), (70, 7)]);

    let mut anim = TurnAnim::new();
    anim.start(&before, &final_board, Some(0), Some(2), &[0, 1, 2]);

    assert_eq!(anim.after_move_board(), &board_with(&[(2, 4), (40, 6)]));
    assert_eq!(anim.after_clear_board(), anim.after_move_board());
    assert_eq!(anim.final_board(), &final_board);
    assert!(anim.cleared().is_empty());

    let spawned: Vec<(usize, u8)> = anim.spawned().iter().map(|b| (b.index, b.color)).collect();
    assert_eq!(spawned, vec![(10, 1), (70, 7)]);
    assert_eq!(anim.movement().color, 4);
    assert_eq!(anim.movement().path.as_slice(), &[0, 1, 2]);
}

#[test]
fn move_progress_is_clamped_to_path() {
    let before = board_with(&[(0, 2)]);
    let final_board = board_with(&[(3, 2)]);
    let mut render = Board::new();

    let mut anim = TurnAnim::with_durations(1.0, 1.0, 1.0);
    anim.start(&before, &final_board, Some(0), Some(3), &[0, 1, 2, 3]);

    assert_eq!(anim.move_progress(), Some(0.0));
    anim.update(0.5, &mut render);
    let u = anim.move_progress().unwrap();
    assert!((u - 1.5).abs() < 1e-5);
    let (a, b, frac) = anim.move_segment().unwrap();
    assert_eq!((a, b), (1, 2));
    assert!((frac - 0.5).abs() < 1e-5);

    anim.update(0.5, &mut render);
    assert_eq!(anim.move_progress(), None);
}

#[test]
fn restart_forces_idle() {
    let before = board_with(&[(0, 2)]);
    let final_board = board_with(&[(1, 2)]);
    let mut anim = TurnAnim::new();
    anim.start(&before, &final_board, Some(0), Some(1), &[0, 1]);
    anim.reset();

    let mut render = final_board;
    assert!(!anim.active());
    assert_eq!(anim.phase(), TurnPhase::None);
    assert!(!anim.update(1.0, &mut render));
    assert_eq!(render, final_board);
}
