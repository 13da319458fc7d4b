use core::hash::{Hash, Hasher};

use crate::{color::Color, role::Role};

/// A piece with [`Color`] and [`Role`].
///
/// The `moved` flag records whether the piece has moved. No movement
/// rule is gated on it (pawn double-step eligibility is determined by
/// the starting rank), and equality and hashing cover color and role
/// only, so boards that differ just in move history compare equal.
///
/// # Examples
///
/// ```
/// use sakk::{Color, Piece, Role};
///
/// let piece = Color::White.knight();
/// assert_eq!(piece.char(), 'N');
/// assert_eq!(Piece::from_char('n'), Some(Role::Knight.of(Color::Black)));
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Piece {
    pub color: Color,
    pub role: Role,
    pub moved: bool,
}

impl Piece {
    /// Gets the FEN letter for the piece. Uppercase for white.
    pub fn char(self) -> char {
        self.color.fold(self.role.upper_char(), self.role.char())
    }

    /// Gets an unmoved piece from its FEN letter.
    pub fn from_char(ch: char) -> Option<Piece> {
        Role::from_char(ch).map(|role| role.of(Color::from_white(ch.is_ascii_uppercase())))
    }
}

impl PartialEq for Piece {
    #[inline]
    fn eq(&self, other: &Piece) -> bool {
        self.color == other.color && self.role == other.role
    }
}

impl Eq for Piece {}

impl Hash for Piece {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.color.hash(state);
        self.role.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_roundtrip() {
        for role in Role::ALL {
            for color in Color::ALL {
                let piece = role.of(color);
                assert_eq!(Piece::from_char(piece.char()), Some(piece));
            }
        }
    }

    #[test]
    fn test_moved_flag_ignored_by_eq() {
        let unmoved = Color::White.pawn();
        let mut moved = unmoved;
        moved.moved = true;
        assert_eq!(moved, unmoved);
    }
}
