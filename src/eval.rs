//! A material-counting fallback evaluator.
//!
//! Scores each legal move by the material balance after playing it,
//! with a small bonus for giving check, and picks the best.
//!
//! # Examples
//!
//! ```
//! use sakk::{eval, fen::Fen, Square};
//!
//! // Taking the queen also gives check up the a-file.
//! let fen: Fen = "k7/8/8/8/qR1p4/8/8/K7 w - - 0 1".parse()?;
//! let m = eval::best_move(fen.as_position()).unwrap();
//! assert_eq!((m.from, m.to), (Square::B4, Square::A4));
//! # Ok::<_, sakk::fen::ParseFenError>(())
//! ```

use crate::{
    attacks,
    board::Board,
    color::ByColor,
    m::Move,
    position::Position,
    role::Role,
    square::Square,
};

/// Score bonus for leaving the opponent in check.
pub const CHECK_BONUS: i32 = 5;

/// The conventional material value of a piece type. Kings are valued
/// high enough to dominate any material swing.
pub const fn piece_value(role: Role) -> i32 {
    match role {
        Role::Pawn => 1,
        Role::Knight => 3,
        Role::Bishop => 3,
        Role::Rook => 5,
        Role::Queen => 9,
        Role::King => 100,
    }
}

fn material(board: &Board) -> ByColor<i32> {
    let mut tally = ByColor::new_with(|_| 0);
    for square in Square::ALL {
        if let Some(piece) = board.piece_at(square) {
            *tally.by_color_mut(piece.color) += piece_value(piece.role);
        }
    }
    tally
}

/// Picks the legal move with the best immediate outcome for the side
/// to move: the material balance after the move, plus [`CHECK_BONUS`]
/// if the opponent is left in check. Ties keep the earliest move in
/// enumeration order.
///
/// `None` if there is no legal move.
pub fn best_move(pos: &Position) -> Option<Move> {
    let mut best: Option<(Move, i32)> = None;

    for m in pos.legal_moves() {
        let board = pos.board.apply_move(m.from, m.to);
        let tally = material(&board);
        let mut score = *tally.by_color(pos.turn) - *tally.by_color(!pos.turn);
        if attacks::king_in_check(&board, !pos.turn) {
            score += CHECK_BONUS;
        }
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((m, score));
        }
    }

    best.map(|(m, _)| m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fen::Fen;

    fn position(fen: &str) -> Position {
        fen.parse::<Fen>().unwrap().into_position()
    }

    #[test]
    fn test_piece_values() {
        assert_eq!(piece_value(Role::Pawn), 1);
        assert_eq!(piece_value(Role::Knight), 3);
        assert_eq!(piece_value(Role::Bishop), 3);
        assert_eq!(piece_value(Role::Rook), 5);
        assert_eq!(piece_value(Role::Queen), 9);
        assert_eq!(piece_value(Role::King), 100);
    }

    #[test]
    fn test_material_tally() {
        let tally = material(&Board::default());
        assert_eq!(tally.white, 139);
        assert_eq!(tally.white, tally.black);
    }

    #[test]
    fn test_resolves_check_by_winning_material() {
        // White is in check from the queen on a4. Rxa4, Kb1 and Kb2
        // are the only legal moves; the capture wins a queen and gives
        // check back.
        let pos = position("k7/8/8/8/qR1p4/8/8/K7 w - - 0 1");
        assert_eq!(pos.legal_moves().len(), 3);

        let m = best_move(&pos).unwrap();
        assert_eq!((m.from, m.to), (Square::B4, Square::A4));
    }

    #[test]
    fn test_takes_biggest_capture() {
        // The rook can take a queen or a pawn.
        let pos = position("1k6/8/8/8/q2R3p/8/8/1K6 w - - 0 1");
        let m = best_move(&pos).unwrap();
        assert_eq!((m.from, m.to), (Square::D4, Square::A4));
    }

    #[test]
    fn test_check_bonus_breaks_material_ties() {
        // Either pawn can be taken; only Rxa4 checks the king behind.
        let pos = position("k7/8/8/8/p2R3p/8/8/1K6 w - - 0 1");
        let m = best_move(&pos).unwrap();
        assert_eq!((m.from, m.to), (Square::D4, Square::A4));
    }

    #[test]
    fn test_no_legal_moves() {
        let pos = position("7k/5K2/6Q1/8/8/8/8/8 b - - 0 1");
        assert_eq!(best_move(&pos), None);
    }
}
