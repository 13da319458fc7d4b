use core::fmt;

use crate::{
    attacks,
    board::Board,
    color::Color,
    m::{Move, MoveList, SquareList},
    square::Square,
};

/// A chess position: piece placement and the side to move.
///
/// Positions are plain values. [`Position::play`] returns the
/// successor position and leaves the original untouched.
///
/// # Examples
///
/// ```
/// use sakk::{Color, Position};
///
/// let pos = Position::default();
/// assert_eq!(pos.turn, Color::White);
/// assert_eq!(pos.legal_moves().len(), 20);
/// ```
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Position {
    pub board: Board,
    pub turn: Color,
}

impl Position {
    /// The standard starting position.
    pub fn new() -> Position {
        Position {
            board: Board::new(),
            turn: Color::White,
        }
    }

    /// Collects the legal destination squares of the piece on `from`:
    /// the pseudo-legal destinations whose application does not leave
    /// the moving side's own king in check.
    ///
    /// The moving side is the color of the piece on `from`, which
    /// need not be the side to move.
    pub fn legal_moves_from(&self, from: Square) -> SquareList {
        let mut moves = attacks::pseudo_legal_moves(&self.board, from);
        if let Some(piece) = self.board.piece_at(from) {
            moves.retain(|&mut to| {
                !attacks::king_in_check(&self.board.apply_move(from, to), piece.color)
            });
        }
        moves
    }

    /// Collects all legal moves for the side to move, scanning origin
    /// squares in [`Square::ALL`] order.
    pub fn legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        for from in Square::ALL {
            let Some(piece) = self.board.piece_at(from) else {
                continue;
            };
            if piece.color != self.turn {
                continue;
            }
            for to in self.legal_moves_from(from) {
                moves.push(Move {
                    piece,
                    from,
                    to,
                    capture: self.board.piece_at(to),
                });
            }
        }
        moves
    }

    /// Tests if the side to move is in check.
    pub fn is_check(&self) -> bool {
        attacks::king_in_check(&self.board, self.turn)
    }

    /// Classifies the position for the side to move.
    ///
    /// # Examples
    ///
    /// ```
    /// use sakk::{GameStatus, Position};
    ///
    /// assert_eq!(Position::default().status(), GameStatus::Playing);
    /// ```
    pub fn status(&self) -> GameStatus {
        let check = self.is_check();
        if self.legal_moves().is_empty() {
            if check {
                GameStatus::Checkmate { winner: !self.turn }
            } else {
                GameStatus::Stalemate
            }
        } else if check {
            GameStatus::Check
        } else {
            GameStatus::Playing
        }
    }

    /// Plays a move after checking that it is legal in this position.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError`] if the move is not legal.
    pub fn play(&self, m: Move) -> Result<Position, PlayError> {
        if self.legal_moves().contains(&m) {
            Ok(self.play_unchecked(m))
        } else {
            Err(PlayError { m })
        }
    }

    /// Plays a move without checking legality. The caller is
    /// responsible for only passing moves from
    /// [`Position::legal_moves`].
    #[must_use]
    pub fn play_unchecked(&self, m: Move) -> Position {
        Position {
            board: self.board.apply_move(m.from, m.to),
            turn: !self.turn,
        }
    }
}

impl Default for Position {
    fn default() -> Position {
        Position::new()
    }
}

/// The classification of a [`Position`] for the side to move.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum GameStatus {
    /// The side to move has legal moves and is not in check.
    Playing,
    /// The side to move is in check but has legal moves.
    Check,
    /// The side to move is in check and has no legal moves.
    Checkmate {
        /// The side that delivered the mate.
        winner: Color,
    },
    /// The side to move is not in check and has no legal moves.
    Stalemate,
}

impl GameStatus {
    /// The winning side, if the game ended decisively.
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Checkmate { winner } => Some(winner),
            _ => None,
        }
    }

    /// Tests if the game is over.
    pub const fn is_game_over(self) -> bool {
        matches!(
            self,
            GameStatus::Checkmate { .. } | GameStatus::Stalemate
        )
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GameStatus::Playing => "playing",
            GameStatus::Check => "check",
            GameStatus::Checkmate { .. } => "checkmate",
            GameStatus::Stalemate => "stalemate",
        })
    }
}

/// Error when trying to play an illegal move.
#[derive(Clone, Debug)]
pub struct PlayError {
    m: Move,
}

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "illegal move: {}", self.m)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlayError {}
