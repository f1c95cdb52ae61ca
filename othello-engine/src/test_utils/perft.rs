//! "Perft" performance test: count the number of leaves at a given depth.
//! Useful for checking move generation against known counts.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::{Board, Color};

/// Count the leaves `depth` plies below the standard 8x8 opening.
pub fn run_perft(depth: u64) -> u64 {
    let board = Board::new(8, 8).expect("8x8 is a valid board size");
    run_perft_from(&board, Color::Black, depth)
}

/// Count the leaves `depth` plies below `board` with `color` to move.
/// A pass counts as a ply; two passes in a row end the game.
pub fn run_perft_from(board: &Board, color: Color, depth: u64) -> u64 {
    leaves_below(board, color, depth, false)
}

fn leaves_below(board: &Board, color: Color, depth: u64, passed: bool) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let moves = board.legal_moves(color);
    if moves.is_empty() {
        // Both players passed: game is over
        if passed {
            return 1;
        }

        return leaves_below(board, !color, depth - 1, true);
    }

    moves
        .iter()
        .map(|mv| {
            let mut next = board.clone();
            next.apply_move(mv).expect("move was generated on this board");
            leaves_below(&next, !color, depth - 1, false)
        })
        .sum()
}
