use othello_engine::test_utils::{run_perft, run_perft_from};
use othello_engine::{Board, Color};

#[test]
fn perft_1() {
    assert_eq!(run_perft(1), 4);
}

#[test]
fn perft_2() {
    assert_eq!(run_perft(2), 12);
}

#[test]
fn perft_3() {
    assert_eq!(run_perft(3), 56);
}

#[test]
fn perft_4() {
    assert_eq!(run_perft(4), 244);
}

#[test]
fn perft_5() {
    assert_eq!(run_perft(5), 1396);
}

#[test]
fn perft_6() {
    assert_eq!(run_perft(6), 8200);
}

#[test]
fn perft_7() {
    assert_eq!(run_perft(7), 55092);
}

// A 2x2 board has no room to bracket a stone, so the game ends at once.
#[test]
fn perft_finished_game() {
    let board = Board::with_layout(2, 2, ["-W", "WB"]).unwrap();
    assert_eq!(run_perft_from(&board, Color::Black, 1), 1);
    assert_eq!(run_perft_from(&board, Color::Black, 5), 1);
}

// Each half of the row offers black one capture.
#[test]
fn perft_rectangular_board() {
    let board = Board::with_layout(2, 8, ["-WB--BW-", "--------"]).unwrap();
    assert_eq!(run_perft_from(&board, Color::Black, 1), 2);
}
