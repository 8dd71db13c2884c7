//! Win and draw detection.

use oxo_protocol::{Board, Outcome};

/// The eight winning triples, in the order the game has always scanned
/// them. The order is observable: the reported winning line (and the
/// bot's tie-breaks) take the first match.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [3, 4, 5],
    [6, 7, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// The result of scanning a board, when there is one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub outcome: Outcome,
    /// The completed triple for a win; `None` for a draw.
    pub line: Option<[usize; 3]>,
}

/// Scans the board for a result.
///
/// Returns the first line of three equal non-empty marks, a draw if the
/// board is full with no such line, or `None` while the game is open.
/// Because marks are added one at a time and this runs after every move,
/// at most one mark can have a completed line.
pub fn verdict(board: &Board) -> Option<Verdict> {
    for line in WIN_LINES {
        let [a, b, c] = line;
        if let Some(mark) = board.cell(a) {
            if board.cell(b) == Some(mark) && board.cell(c) == Some(mark) {
                return Some(Verdict {
                    outcome: mark.into(),
                    line: Some(line),
                });
            }
        }
    }

    if board.is_full() {
        return Some(Verdict {
            outcome: Outcome::Draw,
            line: None,
        });
    }

    None
}

// =========================================================================
// Tests
// =========================================================================
