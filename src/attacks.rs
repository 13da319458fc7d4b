//! Pseudo-legal movement and attack detection.
//!
//! Pseudo-legal moves follow piece movement and capture rules but do
//! not consider whether the mover's own king is left in check. Attack
//! detection is defined over pseudo-legal moves on purpose: a piece
//! that is pinned to its king still gives check.
//!
//! # Examples
//!
//! ```
//! use sakk::{attacks, Board, Square};
//!
//! let board = Board::default();
//! let destinations = attacks::pseudo_legal_moves(&board, Square::B1);
//! assert_eq!(destinations.as_slice(), &[Square::C3, Square::A3]);
//! ```

use crate::{board::Board, color::Color, m::SquareList, role::Role, square::Square};

const ROOK_DIRS: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

const BISHOP_DIRS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

const KNIGHT_JUMPS: [(i32, i32); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

const KING_STEPS: [(i32, i32); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// Collects the pseudo-legal destination squares of the piece on
/// `from`, in a deterministic order. Empty if the square is empty.
pub fn pseudo_legal_moves(board: &Board, from: Square) -> SquareList {
    let mut moves = SquareList::new();
    let Some(piece) = board.piece_at(from) else {
        return moves;
    };
    match piece.role {
        Role::Pawn => pawn_moves(board, from, piece.color, &mut moves),
        Role::Knight => step_moves(board, from, piece.color, &KNIGHT_JUMPS, &mut moves),
        Role::Bishop => sliding_moves(board, from, piece.color, &BISHOP_DIRS, &mut moves),
        Role::Rook => sliding_moves(board, from, piece.color, &ROOK_DIRS, &mut moves),
        Role::Queen => {
            sliding_moves(board, from, piece.color, &ROOK_DIRS, &mut moves);
            sliding_moves(board, from, piece.color, &BISHOP_DIRS, &mut moves);
        }
        Role::King => step_moves(board, from, piece.color, &KING_STEPS, &mut moves),
    }
    moves
}

/// Tests if any piece of `by` has `square` among its pseudo-legal
/// destinations.
pub fn is_attacked(board: &Board, square: Square, by: Color) -> bool {
    Square::ALL.into_iter().any(|from| {
        board.piece_at(from).is_some_and(|piece| piece.color == by)
            && pseudo_legal_moves(board, from).contains(&square)
    })
}

/// Tests if the given side's king is attacked. A side without a king
/// is never in check.
pub fn king_in_check(board: &Board, color: Color) -> bool {
    board
        .king_of(color)
        .is_some_and(|king| is_attacked(board, king, !color))
}

fn pawn_moves(board: &Board, from: Square, color: Color, moves: &mut SquareList) {
    let dir = color.fold(1, -1);

    if let Some(advance) = from.offset(0, dir) {
        if board.piece_at(advance).is_none() {
            moves.push(advance);

            if from.rank() == color.pawn_rank() {
                if let Some(double) = advance.offset(0, dir) {
                    if board.piece_at(double).is_none() {
                        moves.push(double);
                    }
                }
            }
        }
    }

    for file_delta in [-1, 1] {
        if let Some(to) = from.offset(file_delta, dir) {
            if board
                .piece_at(to)
                .is_some_and(|target| target.color != color)
            {
                moves.push(to);
            }
        }
    }
}

fn step_moves(
    board: &Board,
    from: Square,
    color: Color,
    steps: &[(i32, i32)],
    moves: &mut SquareList,
) {
    for &(file_delta, rank_delta) in steps {
        if let Some(to) = from.offset(file_delta, rank_delta) {
            if board
                .piece_at(to)
                .is_none_or(|target| target.color != color)
            {
                moves.push(to);
            }
        }
    }
}

fn sliding_moves(
    board: &Board,
    from: Square,
    color: Color,
    dirs: &[(i32, i32)],
    moves: &mut SquareList,
) {
    for &(file_delta, rank_delta) in dirs {
        let mut previous = from;
        while let Some(to) = previous.offset(file_delta, rank_delta) {
            match board.piece_at(to) {
                None => moves.push(to),
                Some(target) => {
                    if target.color != color {
                        moves.push(to);
                    }
                    break;
                }
            }
            previous = to;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_square_has_no_moves() {
        assert!(pseudo_legal_moves(&Board::default(), Square::E4).is_empty());
    }

    #[test]
    fn test_pawn_double_step() {
        let board = Board::default();
        let moves = pseudo_legal_moves(&board, Square::E2);
        assert_eq!(moves.as_slice(), &[Square::E3, Square::E4]);

        let advanced = board.apply_move(Square::E2, Square::E3);
        let moves = pseudo_legal_moves(&advanced, Square::E3);
        assert_eq!(moves.as_slice(), &[Square::E4]);
    }

    #[test]
    fn test_pawn_blocked() {
        let mut board = Board::empty();
        board.set_piece_at(Square::E4, Color::White.pawn());
        board.set_piece_at(Square::E5, Color::Black.pawn());
        assert!(pseudo_legal_moves(&board, Square::E4).is_empty());

        let mut board = Board::empty();
        board.set_piece_at(Square::E2, Color::White.pawn());
        board.set_piece_at(Square::E4, Color::Black.rook());
        assert_eq!(
            pseudo_legal_moves(&board, Square::E2).as_slice(),
            &[Square::E3]
        );
    }

    #[test]
    fn test_pawn_captures() {
        let mut board = Board::empty();
        board.set_piece_at(Square::E4, Color::White.pawn());
        board.set_piece_at(Square::D5, Color::Black.pawn());
        board.set_piece_at(Square::F5, Color::White.knight());
        let moves = pseudo_legal_moves(&board, Square::E4);
        assert_eq!(moves.as_slice(), &[Square::E5, Square::D5]);
    }

    #[test]
    fn test_black_pawn_moves_down() {
        let board = Board::default();
        let moves = pseudo_legal_moves(&board, Square::D7);
        assert_eq!(moves.as_slice(), &[Square::D6, Square::D5]);
    }

    #[test]
    fn test_sliding_blockers() {
        let mut board = Board::empty();
        board.set_piece_at(Square::A1, Color::White.rook());
        board.set_piece_at(Square::A4, Color::White.pawn());
        board.set_piece_at(Square::E1, Color::Black.king());

        let moves = pseudo_legal_moves(&board, Square::A1);
        assert!(moves.contains(&Square::A2));
        assert!(moves.contains(&Square::A3));
        assert!(!moves.contains(&Square::A4));
        assert!(!moves.contains(&Square::A5));
        assert!(moves.contains(&Square::E1));
        assert!(!moves.contains(&Square::F1));
    }

    #[test]
    fn test_knight_in_corner() {
        let mut board = Board::empty();
        board.set_piece_at(Square::A1, Color::White.knight());
        assert_eq!(
            pseudo_legal_moves(&board, Square::A1).as_slice(),
            &[Square::B3, Square::C2]
        );
    }

    #[test]
    fn test_pinned_piece_attacks() {
        // The white bishop on e2 is pinned by the rook on e8 but still
        // attacks the black king on d3.
        let mut board = Board::empty();
        board.set_piece_at(Square::E1, Color::White.king());
        board.set_piece_at(Square::E2, Color::White.bishop());
        board.set_piece_at(Square::E8, Color::Black.rook());
        board.set_piece_at(Square::D3, Color::Black.king());

        assert!(is_attacked(&board, Square::D3, Color::White));
        assert!(king_in_check(&board, Color::Black));
        assert!(!king_in_check(&board, Color::White));
    }

    #[test]
    fn test_absent_king() {
        assert!(!king_in_check(&Board::empty(), Color::White));
    }
}
