//! Styling constants for the terminal board
//!
//! SGR parameter fragments; `terminal::style` assembles them into escape
//! sequences.

use checkers_core::{Color, Piece, PieceKind};

pub const RESET: &str = "0";

pub const FG_BLACK: &str = "30";
pub const FG_GRAY: &str = "90";
pub const FG_BRIGHT_WHITE: &str = "97";

pub const BG_RED: &str = "41";
pub const BG_GREEN: &str = "42";
pub const BG_BLUE: &str = "44";
pub const BG_MAGENTA: &str = "45";
pub const BG_WHITE: &str = "47";

// Board palette
pub const LIGHT_SQUARE: &str = BG_WHITE;
pub const DARK_SQUARE: &str = BG_GREEN;
pub const SELECTED_SQUARE: &str = BG_RED;
pub const TARGET_SQUARE: &str = BG_MAGENTA;
pub const HEADER: &str = BG_BLUE;

/// Glyph for a piece. Unicode mode colors both sides' glyphs via the
/// foreground; letter mode encodes the side in the letter itself.
pub fn piece_glyph(piece: Piece, unicode: bool) -> char {
    if unicode {
        match piece.kind {
            PieceKind::Pawn => '●',
            PieceKind::King => '◉',
        }
    } else {
        match (piece.color, piece.kind) {
            (Color::White, PieceKind::Pawn) => 'w',
            (Color::White, PieceKind::King) => 'W',
            (Color::Black, PieceKind::Pawn) => 'b',
            (Color::Black, PieceKind::King) => 'B',
        }
    }
}
