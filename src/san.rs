//! Read and write moves in algebraic notation.
//!
//! The notation is deliberately small: a piece letter (omitted for
//! pawns, `N` for knights), the origin file for pawn captures, `x` for
//! captures, and the destination square. There are no check suffixes
//! and no disambiguation beyond the pawn capture file.
//!
//! Decoding never parses the input structurally. A candidate string is
//! accepted exactly when it equals the encoding of a current legal
//! move, compared ASCII case-insensitively.
//!
//! # Examples
//!
//! ```
//! use sakk::{san::San, Position, Square};
//!
//! let pos = Position::default();
//! let moves = pos.legal_moves();
//!
//! let m = San::find_move("Nf3", &moves)?;
//! assert_eq!(m.from, Square::G1);
//! assert_eq!(San::from_move(&m).to_string(), "Nf3");
//! # Ok::<_, sakk::san::SanError>(())
//! ```

use core::fmt::{self, Write as _};

use arrayvec::ArrayString;

use crate::{
    m::{Move, MoveList},
    role::Role,
    square::{File, Square},
};

/// Error when a string does not match the encoding of any legal move.
#[derive(Clone, Debug)]
pub struct SanError;

impl fmt::Display for SanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("illegal san")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SanError {}

/// A move in algebraic notation.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct San {
    pub role: Role,
    /// The origin file, present for pawn captures.
    pub file: Option<File>,
    pub capture: bool,
    pub to: Square,
}

impl San {
    /// Encodes a move.
    pub fn from_move(m: &Move) -> San {
        San {
            role: m.role(),
            file: (m.role() == Role::Pawn && m.is_capture()).then(|| m.from.file()),
            capture: m.is_capture(),
            to: m.to,
        }
    }

    /// Finds the legal move whose encoding matches `san`, compared
    /// ASCII case-insensitively. When two moves share an encoding, the
    /// first one in move order wins.
    ///
    /// # Errors
    ///
    /// Returns [`SanError`] if no legal move encodes to `san`.
    pub fn find_move(san: &str, moves: &MoveList) -> Result<Move, SanError> {
        for &m in moves {
            let mut encoded = ArrayString::<8>::new();
            if write!(encoded, "{}", San::from_move(&m)).is_ok()
                && encoded.eq_ignore_ascii_case(san)
            {
                return Ok(m);
            }
        }
        Err(SanError)
    }
}

impl fmt::Display for San {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.role != Role::Pawn {
            f.write_char(self.role.upper_char())?;
        }
        if let Some(file) = self.file {
            f.write_char(file.char())?;
        }
        if self.capture {
            f.write_char('x')?;
        }
        write!(f, "{}", self.to)
    }
}
