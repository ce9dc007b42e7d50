//! Win condition checking for plain five-in-a-row
//!
//! A player wins with five or more contiguous stones along one of the four
//! board axes. Overlines count as wins.

use crate::board::{Board, Pos, Stone};

/// Number of contiguous stones needed to win
pub const WIN_LENGTH: usize = 5;

/// Direction vectors for line checking (4 directions).
/// Each axis appears once; its reverse is covered by walking both ways.
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Count contiguous `stone`s starting one step from `pos` along `(dr, dc)`.
/// The cell at `pos` is not counted.
#[inline]
pub fn count_direction(board: &Board, pos: Pos, dr: i32, dc: i32, stone: Stone) -> usize {
    (1..)
        .map_while(|step| pos.offset(dr, dc, step))
        .take_while(|&p| board.stone_at(p) == Some(stone))
        .count()
}

/// Length of the run through `pos` on the axis `(dr, dc)`, counting `pos` itself
#[inline]
pub fn line_length(board: &Board, pos: Pos, dr: i32, dc: i32, stone: Stone) -> usize {
    1 + count_direction(board, pos, dr, dc, stone) + count_direction(board, pos, -dr, -dc, stone)
}

/// Fast five-in-a-row check at a specific position.
///
/// Only checks 4 directions from the given position, so the cost is bounded
/// by the board size rather than the number of stones.
pub fn has_five_at_pos(board: &Board, pos: Pos, stone: Stone) -> bool {
    DIRECTIONS
        .iter()
        .any(|&(dr, dc)| line_length(board, pos, dr, dc, stone) >= WIN_LENGTH)
}

/// Find the run of `stone` through `pos` on the first axis reaching five.
///
/// The returned positions are ordered from the negative end of the axis to
/// the positive end and include every stone of an overline.
pub fn find_five_line_at_pos(board: &Board, pos: Pos, stone: Stone) -> Option<Vec<Pos>> {
    for &(dr, dc) in &DIRECTIONS {
        let back = count_direction(board, pos, -dr, -dc, stone) as i32;
        let forward = count_direction(board, pos, dr, dc, stone) as i32;
        if (back + forward + 1) as usize >= WIN_LENGTH {
            return (-back..=forward)
                .map(|step| pos.offset(dr, dc, step))
                .collect();
        }
    }
    None
}
