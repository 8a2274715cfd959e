//! Rules-level tests for the checkers engine
//!
//! These exercise the contracts a game driver relies on:
//! - Mandatory capture (captures ARE the move list when any exist)
//! - Piece-count conservation through apply_move
//! - Multi-jump sequencing (keep jumping from the landing square)
//! - Crowning at the far row

use checkers_core::{
    legal_captures, legal_captures_from, legal_moves, material_score, name_to_index, Color, Piece,
    Position,
};

fn at(name: &str) -> u8 {
    name_to_index(name).expect("valid cell name")
}

fn piece_count(pos: &Position) -> usize {
    (0..64u8).filter(|&s| pos.piece_at(s).is_some()).count()
}

// =============================================================================
// Mandatory Capture
// =============================================================================

#[test]
fn test_capture_list_is_the_move_list_when_nonempty() {
    let pos = Position::empty()
        .set_piece(at("A3"), Some(Piece::pawn(Color::White)))
        .set_piece(at("C3"), Some(Piece::pawn(Color::White)))
        .set_piece(at("D4"), Some(Piece::pawn(Color::Black)))
        .set_piece(at("H8"), Some(Piece::pawn(Color::Black)));

    let captures = legal_captures(&pos);
    assert!(!captures.is_empty());
    assert_eq!(legal_moves(&pos), captures);
}

#[test]
fn test_quiet_moves_return_once_captures_are_gone() {
    let pos = Position::empty()
        .set_piece(at("C3"), Some(Piece::pawn(Color::White)))
        .set_piece(at("D4"), Some(Piece::pawn(Color::Black)));

    let (pos, did_capture) = pos.apply_move(at("C3"), at("E5")).unwrap();
    assert!(did_capture);
    assert!(legal_captures(&pos).is_empty());
    assert!(!legal_moves(&pos).is_empty());
}

// =============================================================================
// Conservation
// =============================================================================

#[test]
fn test_piece_count_through_a_game_fragment() {
    let mut pos = Position::startpos();

    // Scripted opening: quiet moves keep the count, the jump removes one
    for (from, to, expect_capture) in [
        ("C3", "D4", false),
        ("F6", "E5", false),
        ("D4", "F6", true), // jumps E5
    ] {
        let before = piece_count(&pos);
        let (next, did_capture) = pos.apply_move(at(from), at(to)).unwrap();
        assert_eq!(did_capture, expect_capture, "{from}-{to}");
        let expected = if did_capture { before - 1 } else { before };
        assert_eq!(piece_count(&next), expected, "{from}-{to}");
        pos = next.pass_turn();
    }

    assert_eq!(material_score(&pos), (12, 11));
}

// =============================================================================
// Multi-jump Sequencing
// =============================================================================

#[test]
fn test_double_jump_chain() {
    let pos = Position::empty()
        .set_piece(at("C3"), Some(Piece::pawn(Color::White)))
        .set_piece(at("D4"), Some(Piece::pawn(Color::Black)))
        .set_piece(at("F6"), Some(Piece::pawn(Color::Black)));

    // First leg: C3 x D4 -> E5
    let (pos, did_capture) = pos.apply_move(at("C3"), at("E5")).unwrap();
    assert!(did_capture);

    // The driver must continue from the landing square
    let next_jumps = legal_captures_from(&pos, at("E5"));
    assert_eq!(next_jumps.len(), 1);
    assert_eq!(next_jumps[0].to, at("G7"));

    // Second leg: E5 x F6 -> G7, chain exhausted, turn may pass
    let (pos, did_capture) = pos.apply_move(at("E5"), at("G7")).unwrap();
    assert!(did_capture);
    assert!(legal_captures_from(&pos, at("G7")).is_empty());

    let pos = pos.pass_turn();
    assert_eq!(pos.side_to_move, Color::Black);
    assert_eq!(material_score(&pos), (1, 0));
}

#[test]
fn test_quiet_move_never_extends_the_turn() {
    let pos = Position::startpos();
    let (pos, did_capture) = pos.apply_move(at("C3"), at("B4")).unwrap();

    // did_capture == false: the driver passes the turn unconditionally,
    // regardless of what other pieces could do next
    assert!(!did_capture);
    let pos = pos.pass_turn();
    assert_eq!(pos.current_player(), Color::Black);
}

// =============================================================================
// Crowning
// =============================================================================

#[test]
fn test_crowned_king_moves_backward_next_turn() {
    let pos = Position::empty().set_piece(at("A7"), Some(Piece::pawn(Color::White)));

    let (pos, _) = pos.apply_move(at("A7"), at("B8")).unwrap();
    assert_eq!(pos.piece_at(at("B8")), Some(Piece::king(Color::White)));

    // Still White's position; the fresh king has the backward diagonal
    let back = legal_moves(&pos)
        .iter()
        .any(|m| m.from == at("B8") && m.to == at("A7"));
    assert!(back);
}
