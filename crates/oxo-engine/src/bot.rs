//! The greedy heuristic opponent.
//!
//! Priority order: win, block, center, corner, edge. Within the win and
//! block steps, ties break on the first matching triple in [`WIN_LINES`]
//! order, taking that triple's empty cell.

use oxo_protocol::{Board, Mark};

use crate::rules::WIN_LINES;

/// Corner cells, scanned top-left, top-right, bottom-left, bottom-right.
const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// Edge midpoints, scanned top, left, right, bottom.
const EDGES: [usize; 4] = [1, 3, 5, 7];

const CENTER: usize = 4;

/// Picks the bot's next cell, or `None` if the board is full.
///
/// 1. Complete a line of two `me` marks.
/// 2. Block a line of two opposing marks.
/// 3. Take the center.
/// 4. Take the first empty corner.
/// 5. Take the first empty edge.
pub fn choose_move(board: &Board, me: Mark) -> Option<usize> {
    if let Some(index) = completing_cell(board, me) {
        return Some(index);
    }
    if let Some(index) = completing_cell(board, me.other()) {
        return Some(index);
    }
    if board.cell(CENTER).is_none() {
        return Some(CENTER);
    }
    for index in CORNERS {
        if board.cell(index).is_none() {
            return Some(index);
        }
    }
    for index in EDGES {
        if board.cell(index).is_none() {
            return Some(index);
        }
    }
    None
}

/// Finds the empty cell of the first triple holding exactly two `mark`s
/// and one empty cell.
fn completing_cell(board: &Board, mark: Mark) -> Option<usize> {
    for line in WIN_LINES {
        let mut empty = None;
        let mut mine = 0;
        for index in line {
            match board.cell(index) {
                Some(m) if m == mark => mine += 1,
                Some(_) => {}
                None => empty = Some(index),
            }
        }
        if mine == 2 {
            if let Some(index) = empty {
                return Some(index);
            }
        }
    }
    None
}

// =========================================================================
// Tests
// =========================================================================
