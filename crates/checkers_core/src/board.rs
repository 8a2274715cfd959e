use crate::movegen;
use crate::types::*;
use thiserror::Error;

/// A move rejected by [`Position::apply_move`].
///
/// Drivers are expected to pick moves out of the enumeration functions
/// first, so hitting this means the caller contract was violated somewhere
/// upstream. The position is left untouched.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("no legal move from square {from} to square {to}")]
    Illegal { from: u8, to: u8 },
}

/// An 8x8 board plus the side to move.
///
/// Positions are plain values: every transformation returns a new
/// `Position` and never mutates the receiver. Square indices run 0..64,
/// row-major from the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    pub board: [Option<Piece>; 64],
    pub side_to_move: Color,
}

impl Position {
    /// A board with no pieces, White to move. Test and setup scaffolding.
    pub fn empty() -> Self {
        Position {
            board: [None; 64],
            side_to_move: Color::White,
        }
    }

    /// The standard starting layout: twelve pawns per side on the dark
    /// squares, Black on the three top rows, White on the three bottom
    /// rows, White to move.
    pub fn startpos() -> Self {
        let mut p = Position::empty();
        for row in 0..8usize {
            for col in 0..8usize {
                // Play happens on the dark squares only
                if (col + row) % 2 == 0 {
                    continue;
                }
                if row < 3 {
                    p.board[col + row * 8] = Some(Piece::pawn(Color::Black));
                } else if row >= 5 {
                    p.board[col + row * 8] = Some(Piece::pawn(Color::White));
                }
            }
        }
        p
    }

    /// Contents of `sq`. Callers guarantee `sq < 64`; anything else is a
    /// programming error and panics on the index.
    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.board[sq as usize]
    }

    /// A copy of the position with `sq` replaced. All other squares and
    /// the side to move are unchanged.
    pub fn set_piece(mut self, sq: u8, pc: Option<Piece>) -> Position {
        self.board[sq as usize] = pc;
        self
    }

    pub fn current_player(&self) -> Color {
        self.side_to_move
    }

    /// A copy of the position with the turn handed to the other side.
    pub fn pass_turn(mut self) -> Position {
        self.side_to_move = self.side_to_move.other();
        self
    }

    /// Play `from -> to` and report whether anything was captured.
    ///
    /// The pair is validated against the engine's own enumeration; anything
    /// the enumerators would not offer is rejected. A pawn arriving on its
    /// far row is crowned before it lands. Every square strictly between
    /// `from` and `to` is cleared; a cleared piece is what flips the
    /// capture flag.
    ///
    /// The turn does NOT pass here. On `did_capture == true` the driver
    /// must keep jumping from `to` while [`movegen::legal_captures_from`]
    /// offers more, and only then call [`Position::pass_turn`].
    pub fn apply_move(&self, from: u8, to: u8) -> Result<(Position, bool), MoveError> {
        let Some(mut moved) = self.piece_at(from) else {
            return Err(MoveError::Illegal { from, to });
        };
        if !movegen::legal_moves_from(self, from)
            .iter()
            .any(|m| m.to == to)
        {
            return Err(MoveError::Illegal { from, to });
        }

        if row_of(to) == moved.color.crowning_row() {
            moved = moved.crowned();
        }
        let mut next = self.set_piece(to, Some(moved)).set_piece(from, None);

        let (fc, fr) = (col_of(from), row_of(from));
        let (tc, tr) = (col_of(to), row_of(to));
        let span = (tc - fc).abs();
        // Adjacent diagonal step: a quiet move, nothing jumped
        if span == 1 {
            return Ok((next, false));
        }

        let dc = if tc > fc { 1 } else { -1 };
        let dr = if tr > fr { 1 } else { -1 };
        let mut did_capture = false;
        for step in 1..span {
            // Strictly between two on-board squares, so always in range
            let over = (fc + dc * step) as u8 + (fr + dr * step) as u8 * 8;
            if next.piece_at(over).is_some() {
                next = next.set_piece(over, None);
                did_capture = true;
            }
        }
        Ok((next, did_capture))
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
