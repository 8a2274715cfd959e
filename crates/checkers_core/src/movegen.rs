use crate::{board::Position, types::*};

/// Generate all legal moves for the side to move.
///
/// Captures are mandatory: whenever any capture exists, the capture list IS
/// the move list and no quiet move is legal.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let jumps = legal_captures(pos);
    if !jumps.is_empty() {
        return jumps;
    }
    let mut out = Vec::with_capacity(32);
    for from in 0..64u8 {
        gen_quiet(pos, from, &mut out);
    }
    out
}

/// Moves available from a single square, captures first.
///
/// Empty when the square holds no piece of the side to move. Drivers narrow
/// the piece choice through [`legal_moves`] before calling this, which is
/// what enforces the mandatory-capture rule across the whole board.
pub fn legal_moves_from(pos: &Position, from: u8) -> Vec<Move> {
    let jumps = legal_captures_from(pos, from);
    if !jumps.is_empty() {
        return jumps;
    }
    let mut out = Vec::new();
    gen_quiet(pos, from, &mut out);
    out
}

/// Every capture available to the side to move.
pub fn legal_captures(pos: &Position) -> Vec<Move> {
    let mut out = Vec::with_capacity(16);
    for from in 0..64u8 {
        gen_captures(pos, from, &mut out);
    }
    out
}

/// Captures available from a single square.
pub fn legal_captures_from(pos: &Position, from: u8) -> Vec<Move> {
    let mut out = Vec::new();
    gen_captures(pos, from, &mut out);
    out
}

fn own_piece(pos: &Position, from: u8) -> Option<Piece> {
    pos.piece_at(from).filter(|pc| pc.color == pos.side_to_move)
}

/// Walk each capture ray outward. A destination is any empty square
/// reached after passing exactly one enemy piece; an own piece or a second
/// enemy ends the ray. Pawns reach distance 2 (the single jump), kings the
/// whole diagonal.
fn gen_captures(pos: &Position, from: u8, out: &mut Vec<Move>) {
    let pc = match own_piece(pos, from) {
        Some(p) => p,
        None => return,
    };
    let reach: i8 = match pc.kind {
        PieceKind::Pawn => 2,
        PieceKind::King => 7,
    };
    let (c0, r0) = (col_of(from), row_of(from));
    for &(dc, dr) in directions_for(pc) {
        let mut enemies = 0;
        for dist in 1..=reach {
            let to = match sq(c0 + dc * dist, r0 + dr * dist) {
                Some(s) => s,
                None => break,
            };
            match pos.piece_at(to) {
                Some(other) if other.color == pc.color => break,
                Some(_) => {
                    enemies += 1;
                    if enemies > 1 {
                        break;
                    }
                }
                None => {
                    if enemies == 1 {
                        out.push(Move::new(from, to));
                    }
                }
            }
        }
    }
}

/// Walk each quiet ray, stopping at the first occupied square. Pawns step
/// one square, kings slide any open distance.
fn gen_quiet(pos: &Position, from: u8, out: &mut Vec<Move>) {
    let pc = match own_piece(pos, from) {
        Some(p) => p,
        None => return,
    };
    let reach: i8 = match pc.kind {
        PieceKind::Pawn => 1,
        PieceKind::King => 7,
    };
    let (c0, r0) = (col_of(from), row_of(from));
    for &(dc, dr) in directions_for(pc) {
        for dist in 1..=reach {
            let to = match sq(c0 + dc * dist, r0 + dr * dist) {
                Some(s) => s,
                None => break,
            };
            if pos.piece_at(to).is_some() {
                break;
            }
            out.push(Move::new(from, to));
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
