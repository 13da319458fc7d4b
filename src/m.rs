use core::fmt::{self, Write as _};

use arrayvec::ArrayVec;

use crate::{color::Color, role::Role, square::Square, types::Piece};

/// Information about a move.
///
/// # Display
///
/// `Move` implements [`Display`](fmt::Display) using long algebraic notation, e.g.
/// `Ng1-f3` or `e5xd6`. For the short algebraic form used at service
/// boundaries, see [`San`](crate::san::San).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Move {
    /// The moved piece, as it stood before the move.
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    /// The piece formerly on the target square.
    pub capture: Option<Piece>,
}

impl Move {
    /// Gets the role of the moved piece.
    pub const fn role(self) -> Role {
        self.piece.role
    }

    /// Gets the color of the moved piece.
    pub const fn color(self) -> Color {
        self.piece.color
    }

    /// Checks if the move is a capture.
    pub const fn is_capture(self) -> bool {
        self.capture.is_some()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.role() != Role::Pawn {
            f.write_char(self.role().upper_char())?;
        }
        write!(
            f,
            "{}{}{}",
            self.from,
            if self.is_capture() { 'x' } else { '-' },
            self.to
        )
    }
}

/// A container for moves that can be stored inline on the stack.
///
/// The capacity is limited, but there is enough space to hold the legal
/// moves of any chess position.
///
/// # Example
///
/// ```
/// use sakk::{Position, Role};
///
/// let pos = Position::default();
/// let mut moves = pos.legal_moves();
/// moves.retain(|m| m.role() == Role::Pawn);
/// assert_eq!(moves.len(), 16);
/// ```
pub type MoveList = ArrayVec<Move, 256>;

/// A container for the destination squares of a single piece.
///
/// A queen in the middle of an otherwise open board reaches 27 squares,
/// which bounds the destinations of any one piece.
pub type SquareList = ArrayVec<Square, 27>;

#[cfg(test)]
mod tests {
    use core::mem;

    use super::*;

    #[test]
    fn test_move_size() {
        assert!(mem::size_of::<Move>() <= 8);
    }
}
