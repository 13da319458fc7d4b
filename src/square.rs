use core::{
    fmt::{self, Write as _},
    str::FromStr,
};

/// A file of the chessboard.
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum File {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

impl File {
    /// Gets a `File` from an index between 0 and 7.
    pub const fn from_index(index: u32) -> Option<File> {
        match index {
            0 => Some(File::A),
            1 => Some(File::B),
            2 => Some(File::C),
            3 => Some(File::D),
            4 => Some(File::E),
            5 => Some(File::F),
            6 => Some(File::G),
            7 => Some(File::H),
            _ => None,
        }
    }

    /// Gets a `File` from its letter, `a` to `h`.
    pub const fn from_char(ch: char) -> Option<File> {
        match ch {
            'a' => Some(File::A),
            'b' => Some(File::B),
            'c' => Some(File::C),
            'd' => Some(File::D),
            'e' => Some(File::E),
            'f' => Some(File::F),
            'g' => Some(File::G),
            'h' => Some(File::H),
            _ => None,
        }
    }

    /// Gets the letter for the file, `a` to `h`.
    pub const fn char(self) -> char {
        match self {
            File::A => 'a',
            File::B => 'b',
            File::C => 'c',
            File::D => 'd',
            File::E => 'e',
            File::F => 'f',
            File::G => 'g',
            File::H => 'h',
        }
    }

    /// Offsets the file, returning `None` if the result would be off
    /// the board.
    #[inline]
    #[must_use]
    pub fn offset(self, delta: i32) -> Option<File> {
        (self as i32)
            .checked_add(delta)
            .filter(|index| (0..8).contains(index))
            .and_then(|index| File::from_index(index as u32))
    }

    /// `A` to `H`, in this order.
    pub const ALL: [File; 8] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H,
    ];
}

/// A rank of the chessboard. `Rank::First` is the rank the first
/// mover's pieces start on.
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Rank {
    First = 0,
    Second = 1,
    Third = 2,
    Fourth = 3,
    Fifth = 4,
    Sixth = 5,
    Seventh = 6,
    Eighth = 7,
}

impl Rank {
    /// Gets a `Rank` from an index between 0 and 7.
    pub const fn from_index(index: u32) -> Option<Rank> {
        match index {
            0 => Some(Rank::First),
            1 => Some(Rank::Second),
            2 => Some(Rank::Third),
            3 => Some(Rank::Fourth),
            4 => Some(Rank::Fifth),
            5 => Some(Rank::Sixth),
            6 => Some(Rank::Seventh),
            7 => Some(Rank::Eighth),
            _ => None,
        }
    }

    /// Gets a `Rank` from its digit, `1` to `8`.
    pub const fn from_char(ch: char) -> Option<Rank> {
        match ch {
            '1' => Some(Rank::First),
            '2' => Some(Rank::Second),
            '3' => Some(Rank::Third),
            '4' => Some(Rank::Fourth),
            '5' => Some(Rank::Fifth),
            '6' => Some(Rank::Sixth),
            '7' => Some(Rank::Seventh),
            '8' => Some(Rank::Eighth),
            _ => None,
        }
    }

    /// Gets the digit for the rank, `1` to `8`.
    pub const fn char(self) -> char {
        match self {
            Rank::First => '1',
            Rank::Second => '2',
            Rank::Third => '3',
            Rank::Fourth => '4',
            Rank::Fifth => '5',
            Rank::Sixth => '6',
            Rank::Seventh => '7',
            Rank::Eighth => '8',
        }
    }

    /// Offsets the rank, returning `None` if the result would be off
    /// the board.
    #[inline]
    #[must_use]
    pub fn offset(self, delta: i32) -> Option<Rank> {
        (self as i32)
            .checked_add(delta)
            .filter(|index| (0..8).contains(index))
            .and_then(|index| Rank::from_index(index as u32))
    }

    /// `First` to `Eighth`, in this order.
    pub const ALL: [Rank; 8] = [
        Rank::First,
        Rank::Second,
        Rank::Third,
        Rank::Fourth,
        Rank::Fifth,
        Rank::Sixth,
        Rank::Seventh,
        Rank::Eighth,
    ];
}

/// A square of the chessboard, packed as a file and rank index.
///
/// # Examples
///
/// ```
/// use sakk::{File, Rank, Square};
///
/// let square = Square::from_coords(File::E, Rank::Fourth);
/// assert_eq!(square, Square::E4);
/// assert_eq!(square.to_string(), "e4");
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub struct Square(u8);

impl Square {
    /// Gets a `Square` from file and rank.
    #[inline]
    pub const fn from_coords(file: File, rank: Rank) -> Square {
        Square(file as u8 | ((rank as u8) << 3))
    }

    /// Parses a square name like `e4`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseSquareError`] if the input is not a valid square
    /// name.
    pub fn from_ascii(s: &[u8]) -> Result<Square, ParseSquareError> {
        if s.len() != 2 {
            return Err(ParseSquareError);
        }
        match (
            File::from_char(char::from(s[0])),
            Rank::from_char(char::from(s[1])),
        ) {
            (Some(file), Some(rank)) => Ok(Square::from_coords(file, rank)),
            _ => Err(ParseSquareError),
        }
    }

    /// Gets the file.
    #[inline]
    pub const fn file(self) -> File {
        match self.0 & 7 {
            0 => File::A,
            1 => File::B,
            2 => File::C,
            3 => File::D,
            4 => File::E,
            5 => File::F,
            6 => File::G,
            _ => File::H,
        }
    }

    /// Gets the rank.
    #[inline]
    pub const fn rank(self) -> Rank {
        match self.0 >> 3 {
            0 => Rank::First,
            1 => Rank::Second,
            2 => Rank::Third,
            3 => Rank::Fourth,
            4 => Rank::Fifth,
            5 => Rank::Sixth,
            6 => Rank::Seventh,
            _ => Rank::Eighth,
        }
    }

    /// Offsets the square by the given number of files and ranks, or
    /// returns `None` if the result would be off the board.
    ///
    /// # Examples
    ///
    /// ```
    /// use sakk::Square;
    ///
    /// assert_eq!(Square::G1.offset(-1, 2), Some(Square::F3));
    /// assert_eq!(Square::A1.offset(-1, 0), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn offset(self, file_delta: i32, rank_delta: i32) -> Option<Square> {
        Some(Square::from_coords(
            self.file().offset(file_delta)?,
            self.rank().offset(rank_delta)?,
        ))
    }

    /// All squares in ascending order, `A1` to `H8`. This is the scan
    /// order of move enumeration and king lookup.
    pub const ALL: [Square; 64] = {
        let mut all = [Square(0); 64];
        let mut index = 0;
        while index < 64 {
            all[index] = Square(index as u8);
            index += 1;
        }
        all
    };
}

#[allow(missing_docs)]
impl Square {
    pub const A1: Square = Square::from_coords(File::A, Rank::First);
    pub const B1: Square = Square::from_coords(File::B, Rank::First);
    pub const C1: Square = Square::from_coords(File::C, Rank::First);
    pub const D1: Square = Square::from_coords(File::D, Rank::First);
    pub const E1: Square = Square::from_coords(File::E, Rank::First);
    pub const F1: Square = Square::from_coords(File::F, Rank::First);
    pub const G1: Square = Square::from_coords(File::G, Rank::First);
    pub const H1: Square = Square::from_coords(File::H, Rank::First);
    pub const A2: Square = Square::from_coords(File::A, Rank::Second);
    pub const B2: Square = Square::from_coords(File::B, Rank::Second);
    pub const C2: Square = Square::from_coords(File::C, Rank::Second);
    pub const D2: Square = Square::from_coords(File::D, Rank::Second);
    pub const E2: Square = Square::from_coords(File::E, Rank::Second);
    pub const F2: Square = Square::from_coords(File::F, Rank::Second);
    pub const G2: Square = Square::from_coords(File::G, Rank::Second);
    pub const H2: Square = Square::from_coords(File::H, Rank::Second);
    pub const A3: Square = Square::from_coords(File::A, Rank::Third);
    pub const B3: Square = Square::from_coords(File::B, Rank::Third);
    pub const C3: Square = Square::from_coords(File::C, Rank::Third);
    pub const D3: Square = Square::from_coords(File::D, Rank::Third);
    pub const E3: Square = Square::from_coords(File::E, Rank::Third);
    pub const F3: Square = Square::from_coords(File::F, Rank::Third);
    pub const G3: Square = Square::from_coords(File::G, Rank::Third);
    pub const H3: Square = Square::from_coords(File::H, Rank::Third);
    pub const A4: Square = Square::from_coords(File::A, Rank::Fourth);
    pub const B4: Square = Square::from_coords(File::B, Rank::Fourth);
    pub const C4: Square = Square::from_coords(File::C, Rank::Fourth);
    pub const D4: Square = Square::from_coords(File::D, Rank::Fourth);
    pub const E4: Square = Square::from_coords(File::E, Rank::Fourth);
    pub const F4: Square = Square::from_coords(File::F, Rank::Fourth);
    pub const G4: Square = Square::from_coords(File::G, Rank::Fourth);
    pub const H4: Square = Square::from_coords(File::H, Rank::Fourth);
    pub const A5: Square = Square::from_coords(File::A, Rank::Fifth);
    pub const B5: Square = Square::from_coords(File::B, Rank::Fifth);
    pub const C5: Square = Square::from_coords(File::C, Rank::Fifth);
    pub const D5: Square = Square::from_coords(File::D, Rank::Fifth);
    pub const E5: Square = Square::from_coords(File::E, Rank::Fifth);
    pub const F5: Square = Square::from_coords(File::F, Rank::Fifth);
    pub const G5: Square = Square::from_coords(File::G, Rank::Fifth);
    pub const H5: Square = Square::from_coords(File::H, Rank::Fifth);
    pub const A6: Square = Square::from_coords(File::A, Rank::Sixth);
    pub const B6: Square = Square::from_coords(File::B, Rank::Sixth);
    pub const C6: Square = Square::from_coords(File::C, Rank::Sixth);
    pub const D6: Square = Square::from_coords(File::D, Rank::Sixth);
    pub const E6: Square = Square::from_coords(File::E, Rank::Sixth);
    pub const F6: Square = Square::from_coords(File::F, Rank::Sixth);
    pub const G6: Square = Square::from_coords(File::G, Rank::Sixth);
    pub const H6: Square = Square::from_coords(File::H, Rank::Sixth);
    pub const A7: Square = Square::from_coords(File::A, Rank::Seventh);
    pub const B7: Square = Square::from_coords(File::B, Rank::Seventh);
    pub const C7: Square = Square::from_coords(File::C, Rank::Seventh);
    pub const D7: Square = Square::from_coords(File::D, Rank::Seventh);
    pub const E7: Square = Square::from_coords(File::E, Rank::Seventh);
    pub const F7: Square = Square::from_coords(File::F, Rank::Seventh);
    pub const G7: Square = Square::from_coords(File::G, Rank::Seventh);
    pub const H7: Square = Square::from_coords(File::H, Rank::Seventh);
    pub const A8: Square = Square::from_coords(File::A, Rank::Eighth);
    pub const B8: Square = Square::from_coords(File::B, Rank::Eighth);
    pub const C8: Square = Square::from_coords(File::C, Rank::Eighth);
    pub const D8: Square = Square::from_coords(File::D, Rank::Eighth);
    pub const E8: Square = Square::from_coords(File::E, Rank::Eighth);
    pub const F8: Square = Square::from_coords(File::F, Rank::Eighth);
    pub const G8: Square = Square::from_coords(File::G, Rank::Eighth);
    pub const H8: Square = Square::from_coords(File::H, Rank::Eighth);
}

/// Error when parsing an invalid square name.
#[derive(Clone, Debug)]
pub struct ParseSquareError;

impl fmt::Display for ParseSquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid square name")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseSquareError {}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Square, ParseSquareError> {
        Square::from_ascii(s.as_bytes())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(self.file().char())?;
        f.write_char(self.rank().char())
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn test_coords_roundtrip() {
        for file in File::ALL {
            for rank in Rank::ALL {
                let square = Square::from_coords(file, rank);
                assert_eq!(square.file(), file);
                assert_eq!(square.rank(), rank);
            }
        }
    }

    #[test]
    fn test_parse() {
        for square in Square::ALL {
            assert_eq!(square.to_string().parse::<Square>().unwrap(), square);
        }
        assert!("e9".parse::<Square>().is_err());
        assert!("i4".parse::<Square>().is_err());
        assert!("e".parse::<Square>().is_err());
        assert!("e44".parse::<Square>().is_err());
    }

    #[test]
    fn test_offset() {
        assert_eq!(Square::E4.offset(1, 1), Some(Square::F5));
        assert_eq!(Square::E4.offset(-2, 1), Some(Square::C5));
        assert_eq!(Square::A1.offset(-1, 0), None);
        assert_eq!(Square::H8.offset(0, 1), None);
    }
}
