//! Win condition checking
//!
//! A player wins with `win_length` or more of their stones in an unbroken
//! line: horizontal, vertical or either diagonal. Overlines count.

use crate::board::{Board, Player, Pos, Stone};

/// Direction vectors for line checking (4 directions)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal down-right
    (1, -1), // Diagonal down-left
];

/// Number of consecutive `player` stones starting one step from `pos` along
/// `(dr, dc)`, looking at most `limit` steps. Stops at the first foreign or
/// empty cell, or the board edge.
#[inline]
fn run_length(board: &Board, pos: Pos, player: Player, (dr, dc): (i32, i32), limit: usize) -> usize {
    let stone = Stone::from(player);
    let size = board.size();
    let mut count = 0;
    for step in 1..=limit as i32 {
        match pos.offset(dr, dc, step, size) {
            Some(next) if board.get(next) == stone => count += 1,
            _ => break,
        }
    }
    count
}

/// Find the winning run through `pos`, if any.
///
/// Returns the stones of the first direction that reaches `win_length`,
/// ordered from the backward end to the forward end. The run includes `pos`
/// and extends at most `win_length - 1` cells either side of it.
pub fn winning_line_at(board: &Board, pos: Pos, player: Player, win_length: usize) -> Option<Vec<Pos>> {
    let reach = win_length.saturating_sub(1);
    let size = board.size();

    for &(dr, dc) in &DIRECTIONS {
        let forward = run_length(board, pos, player, (dr, dc), reach);
        let backward = run_length(board, pos, player, (-dr, -dc), reach);
        if 1 + forward + backward < win_length {
            continue;
        }

        let line = (-(backward as i32)..=forward as i32)
            .filter_map(|step| pos.offset(dr, dc, step, size))
            .collect();
        return Some(line);
    }
    None
}
