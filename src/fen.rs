//! Parse and write position strings in Forsyth-Edwards Notation.
//!
//! Only the piece placement and side to move fields carry information:
//! the remaining fields are accepted (and ignored) on input and
//! written as the conventional `- - 0 1` placeholders on output. A
//! missing side to move defaults to white.
//!
//! # Examples
//!
//! ```
//! use sakk::{fen::Fen, Position};
//!
//! let fen: Fen = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1".parse()?;
//! assert_eq!(fen.into_position(), Position::default());
//! # Ok::<_, sakk::fen::ParseFenError>(())
//! ```

use core::{fmt, str::FromStr};

use crate::{
    board::Board,
    color::Color,
    position::Position,
    square::{File, Rank, Square},
    types::Piece,
};

/// A position string in Forsyth-Edwards Notation.
///
/// # Examples
///
/// ```
/// use sakk::{fen::Fen, Position};
///
/// assert_eq!(
///     Fen(Position::default()).to_string(),
///     "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1"
/// );
/// ```
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Fen(pub Position);

impl Fen {
    pub fn from_position(pos: Position) -> Fen {
        Fen(pos)
    }

    pub fn into_position(self) -> Position {
        self.0
    }

    pub fn as_position(&self) -> &Position {
        &self.0
    }
}

/// Errors that can occur when parsing position strings.
#[derive(Clone, Debug)]
pub enum ParseFenError {
    /// The piece placement field is malformed.
    InvalidBoard,
    /// The side to move field is neither `w` nor `b`.
    InvalidTurn,
}

impl fmt::Display for ParseFenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ParseFenError::InvalidBoard => "invalid board part in fen",
            ParseFenError::InvalidTurn => "invalid turn part in fen",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseFenError {}

fn parse_board(part: &str) -> Result<Board, ParseFenError> {
    let mut board = Board::empty();
    let mut parts = part.split('/');

    for rank in Rank::ALL.into_iter().rev() {
        let rank_part = parts.next().ok_or(ParseFenError::InvalidBoard)?;
        let mut file_index = 0;

        for ch in rank_part.chars() {
            if let Some(digit) = ch.to_digit(10) {
                if digit == 0 {
                    return Err(ParseFenError::InvalidBoard);
                }
                file_index += digit;
            } else {
                let piece = Piece::from_char(ch).ok_or(ParseFenError::InvalidBoard)?;
                let file = File::from_index(file_index).ok_or(ParseFenError::InvalidBoard)?;
                board.set_piece_at(Square::from_coords(file, rank), piece);
                file_index += 1;
            }
        }

        if file_index != 8 {
            return Err(ParseFenError::InvalidBoard);
        }
    }

    if parts.next().is_some() {
        return Err(ParseFenError::InvalidBoard);
    }

    Ok(board)
}

impl FromStr for Fen {
    type Err = ParseFenError;

    fn from_str(s: &str) -> Result<Fen, ParseFenError> {
        let mut parts = s.split(' ');

        let board_part = parts.next().expect("split has at least one part");
        let board = parse_board(board_part)?;

        let turn = match parts.next() {
            Some(turn_part) => {
                let mut chars = turn_part.chars();
                match (chars.next().and_then(Color::from_char), chars.next()) {
                    (Some(turn), None) => turn,
                    _ => return Err(ParseFenError::InvalidTurn),
                }
            }
            None => Color::White,
        };

        Ok(Fen(Position { board, turn }))
    }
}

impl fmt::Display for Fen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - - 0 1",
            self.0.board.board_fen(),
            self.0.turn.char()
        )
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Fen {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Fen {
    fn deserialize<D>(deserializer: D) -> Result<Fen, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct FenVisitor;

        impl serde::de::Visitor<'_> for FenVisitor {
            type Value = Fen;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("fen string")
            }

            fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<Fen, E> {
                value.parse().map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_str(FenVisitor)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    const INITIAL_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1";

    #[test]
    fn test_initial_fen() {
        assert_eq!(Fen(Position::default()).to_string(), INITIAL_FEN);
        let fen: Fen = INITIAL_FEN.parse().unwrap();
        assert_eq!(fen.into_position(), Position::default());
    }

    #[test]
    fn test_roundtrip() {
        for fen_str in [
            INITIAL_FEN,
            "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w - - 0 1",
            "8/8/8/8/8/8/8/K6k w - - 0 1",
            "7k/5K2/6Q1/8/8/8/8/8 b - - 0 1",
        ] {
            let fen: Fen = fen_str.parse().unwrap();
            assert_eq!(fen.to_string(), fen_str);
        }
    }

    #[test]
    fn test_permissive_trailing_fields() {
        // The board part alone is enough. A missing side to move
        // defaults to white.
        let fen: Fen = "8/8/8/8/8/8/8/K6k".parse().unwrap();
        assert_eq!(fen.as_position().turn, Color::White);

        // Castling, en passant and clock fields are ignored.
        let fen: Fen = "8/8/8/8/8/8/8/K6k b KQkq e3 13 37".parse().unwrap();
        assert_eq!(fen.as_position().turn, Color::Black);
    }

    #[test]
    fn test_invalid_board() {
        for fen_str in [
            "",
            "8/8/8/8/8/8/8",           // only 7 ranks
            "8/8/8/8/8/8/8/8/8",       // 9 ranks
            "9/8/8/8/8/8/8/8",         // rank too long
            "7/8/8/8/8/8/8/8",         // rank too short
            "x7/8/8/8/8/8/8/8",        // unknown piece letter
            "ppppppppp/8/8/8/8/8/8/8", // too many pieces in a rank
            "0p7/8/8/8/8/8/8/8",       // zero digit
        ] {
            assert!(
                matches!(fen_str.parse::<Fen>(), Err(ParseFenError::InvalidBoard)),
                "expected invalid board: {fen_str:?}"
            );
        }
    }

    #[test]
    fn test_invalid_turn() {
        for fen_str in ["8/8/8/8/8/8/8/K6k x", "8/8/8/8/8/8/8/K6k ww"] {
            assert!(matches!(
                fen_str.parse::<Fen>(),
                Err(ParseFenError::InvalidTurn)
            ));
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_from_str() {
        use serde::de::{
            value::{self, StrDeserializer},
            Deserialize, IntoDeserializer,
        };

        let deserializer: StrDeserializer<'_, value::Error> = INITIAL_FEN.into_deserializer();
        let fen = Fen::deserialize(deserializer).unwrap();
        assert_eq!(fen.into_position(), Position::default());
    }
}
