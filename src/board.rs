use core::fmt::{self, Write as _};

use crate::{
    color::Color,
    role::Role,
    square::{File, Rank, Square},
    types::Piece,
};

const BACK_RANK: [Role; 8] = [
    Role::Rook,
    Role::Knight,
    Role::Bishop,
    Role::Queen,
    Role::King,
    Role::Bishop,
    Role::Knight,
    Role::Rook,
];

/// Piece positions on a board.
///
/// At most one piece stands on each square by construction. Boards are
/// plain values: [`Board::apply_move`] returns a new board and leaves
/// the original untouched.
///
/// # Examples
///
/// ```
/// use sakk::{Board, Color, Square};
///
/// let board = Board::default();
/// assert_eq!(board.piece_at(Square::E1), Some(Color::White.king()));
/// assert_eq!(board.piece_at(Square::E4), None);
/// ```
#[derive(Clone, Eq, PartialEq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// An empty board.
    pub const fn empty() -> Board {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Sets up the starting position.
    pub fn new() -> Board {
        let mut board = Board::empty();
        for (file, role) in File::ALL.into_iter().zip(BACK_RANK) {
            for color in Color::ALL {
                board.set_piece_at(Square::from_coords(file, color.backrank()), role.of(color));
                board.set_piece_at(Square::from_coords(file, color.pawn_rank()), color.pawn());
            }
        }
        board
    }

    /// Gets the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.rank() as usize][square.file() as usize]
    }

    /// Puts a piece on the given square, replacing any previous
    /// occupant.
    #[inline]
    pub fn set_piece_at(&mut self, square: Square, piece: Piece) {
        self.squares[square.rank() as usize][square.file() as usize] = Some(piece);
    }

    /// Takes the piece off the given square.
    #[inline]
    pub fn remove_piece_at(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.rank() as usize][square.file() as usize].take()
    }

    /// Returns a new board with the piece on `from` moved to `to`,
    /// discarding whatever stood on the target square. The moved piece
    /// is marked as having moved.
    ///
    /// No legality check of any kind. If `from` is empty, an unchanged
    /// copy is returned.
    #[must_use]
    pub fn apply_move(&self, from: Square, to: Square) -> Board {
        let mut board = self.clone();
        if let Some(mut piece) = board.remove_piece_at(from) {
            piece.moved = true;
            board.set_piece_at(to, piece);
        }
        board
    }

    /// Finds the square of the given side's king, scanning in
    /// [`Square::ALL`] order.
    pub fn king_of(&self, color: Color) -> Option<Square> {
        Square::ALL
            .into_iter()
            .find(|&square| self.piece_at(square) == Some(color.king()))
    }

    /// Displays the board part of a position string, e.g.
    /// `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR`.
    pub fn board_fen(&self) -> BoardFen<'_> {
        BoardFen { board: self }
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

/// Displays the board part of a position string. Created by
/// [`Board::board_fen`].
#[derive(Debug)]
pub struct BoardFen<'a> {
    board: &'a Board,
}

impl fmt::Display for BoardFen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rank) in Rank::ALL.into_iter().rev().enumerate() {
            if i > 0 {
                f.write_char('/')?;
            }
            let mut empty = 0u8;
            for file in File::ALL {
                match self.board.piece_at(Square::from_coords(file, rank)) {
                    Some(piece) => {
                        if empty > 0 {
                            f.write_char(char::from(b'0' + empty))?;
                            empty = 0;
                        }
                        f.write_char(piece.char())?;
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                f.write_char(char::from(b'0' + empty))?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::ALL.into_iter().rev() {
            for file in File::ALL {
                f.write_char(
                    self.piece_at(Square::from_coords(file, rank))
                        .map_or('.', Piece::char),
                )?;
                f.write_char(if file == File::H { '\n' } else { ' ' })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn test_piece_at() {
        let board = Board::default();
        assert_eq!(board.piece_at(Square::A2), Some(Color::White.pawn()));
        assert_eq!(board.piece_at(Square::B1), Some(Color::White.knight()));
        assert_eq!(board.piece_at(Square::D8), Some(Color::Black.queen()));
        assert_eq!(board.piece_at(Square::E4), None);
    }

    #[test]
    fn test_apply_move_leaves_source_untouched() {
        let board = Board::default();
        let after = board.apply_move(Square::E2, Square::E4);
        assert_eq!(board.piece_at(Square::E2), Some(Color::White.pawn()));
        assert_eq!(after.piece_at(Square::E2), None);
        assert_eq!(after.piece_at(Square::E4), Some(Color::White.pawn()));
        assert!(after.piece_at(Square::E4).unwrap().moved);
    }

    #[test]
    fn test_apply_move_captures() {
        let mut board = Board::empty();
        board.set_piece_at(Square::D4, Color::White.rook());
        board.set_piece_at(Square::D7, Color::Black.pawn());
        let after = board.apply_move(Square::D4, Square::D7);
        assert_eq!(after.piece_at(Square::D7), Some(Color::White.rook()));
        assert_eq!(after.piece_at(Square::D4), None);
    }

    #[test]
    fn test_apply_move_from_empty_square() {
        let board = Board::default();
        assert_eq!(board.apply_move(Square::E4, Square::E5), board);
    }

    #[test]
    fn test_king_of() {
        let board = Board::default();
        assert_eq!(board.king_of(Color::White), Some(Square::E1));
        assert_eq!(board.king_of(Color::Black), Some(Square::E8));
        assert_eq!(Board::empty().king_of(Color::White), None);
    }

    #[test]
    fn test_board_fen() {
        assert_eq!(
            Board::default().board_fen().to_string(),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"
        );
    }
}
