use super::*;

#[test]
fn test_sq_bounds() {
    assert_eq!(sq(0, 0), Some(0));
    assert_eq!(sq(7, 7), Some(63));
    assert_eq!(sq(3, 2), Some(19));
    assert_eq!(sq(-1, 0), None);
    assert_eq!(sq(0, -1), None);
    assert_eq!(sq(8, 0), None);
    assert_eq!(sq(0, 8), None);
}

#[test]
fn test_coord_round_trip() {
    for i in 0..64u8 {
        assert_eq!(sq(col_of(i), row_of(i)), Some(i));
    }
}

#[test]
fn test_pawn_directions_point_forward() {
    // White pawns advance toward row 0
    let dirs = directions_for(Piece::pawn(Color::White));
    assert_eq!(dirs.len(), 2);
    assert!(dirs.iter().all(|&(_, dr)| dr == Color::White.forward()));

    // Black pawns advance toward row 7
    let dirs = directions_for(Piece::pawn(Color::Black));
    assert_eq!(dirs.len(), 2);
    assert!(dirs.iter().all(|&(_, dr)| dr == Color::Black.forward()));
}

#[test]
fn test_king_directions_cover_all_diagonals() {
    for color in [Color::White, Color::Black] {
        let dirs = directions_for(Piece::king(color));
        assert_eq!(dirs.len(), 4);
        for d in [(-1, -1), (1, -1), (-1, 1), (1, 1)] {
            assert!(dirs.contains(&d));
        }
    }
}

#[test]
fn test_crowned_is_idempotent() {
    let pawn = Piece::pawn(Color::White);
    assert_eq!(pawn.crowned(), Piece::king(Color::White));
    assert_eq!(pawn.crowned().crowned(), Piece::king(Color::White));
}
