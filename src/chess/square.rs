//! Enumerations of chessboard accessing constants, such as files, ranks and squares.

use thiserror::Error;

/// Files of a chessboard (A-H).
#[repr(u8)]
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum File {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}
impl File {
    /// A file from a given index.
    ///
    /// Fails if the index is more than 7.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 8 {
            Some(unsafe { Self::from_index_unchecked(index) })
        } else {
            None
        }
    }

    /// A file from a given index.
    /// # Safety
    /// If the index is more than 7, results in undefined behavior.
    #[inline]
    pub const unsafe fn from_index_unchecked(index: u8) -> Self {
        std::mem::transmute(index)
    }
}
impl std::fmt::Display for File {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", (b'a' + *self as u8) as char)
    }
}
impl std::str::FromStr for File {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.as_bytes() {
            &[c @ b'a'..=b'h'] => Ok(unsafe { Self::from_index_unchecked(c - b'a') }),
            _ => Err(ParseSquareError::InvalidFile),
        }
    }
}

/// Ranks of a chessboard (1-8).
#[repr(u8)]
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum Rank {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
}
impl Rank {
    /// A rank from a given index.
    ///
    /// Fails if the index is more than 7.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 8 {
            Some(unsafe { Self::from_index_unchecked(index) })
        } else {
            None
        }
    }

    /// A rank from a given index.
    /// # Safety
    /// If the index is more than 7, results in undefined behavior.
    #[inline]
    pub const unsafe fn from_index_unchecked(index: u8) -> Self {
        std::mem::transmute(index)
    }
}
impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", 1 + *self as u8)
    }
}
impl std::str::FromStr for Rank {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.as_bytes() {
            &[c @ b'1'..=b'8'] => Ok(unsafe { Self::from_index_unchecked(c - b'1') }),
            _ => Err(ParseSquareError::InvalidRank),
        }
    }
}

/// Errors encountered when parsing a square from algebraic notation.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Error)]
pub enum ParseSquareError {
    #[error("expected a file letter between 'a' and 'h'")]
    InvalidFile,
    #[error("expected a rank digit between '1' and '8'")]
    InvalidRank,
    #[error("expected two characters, e.g. \"e4\"")]
    WrongLength,
}

/// A square of the 8x8 board, indexed rank-major from a1 (0) to h8 (63).
#[repr(transparent)]
#[derive(Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Square(u8);
impl Square {
    /// Instantiates a new square based on file and rank.
    #[inline]
    pub const fn new(file: File, rank: Rank) -> Self {
        Self((rank as u8) << 3 | (file as u8))
    }

    /// Instantiates a new square from its index.
    ///
    /// Returns `None` if the index is more than 63.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Instantiates a new square from signed file and rank indices.
    ///
    /// This is the bounds predicate all move generation goes through: the
    /// square exists iff both indices lie in [0,7].
    #[inline]
    pub const fn checked(file_index: i8, rank_index: i8) -> Option<Self> {
        match (
            File::from_index(file_index as u8),
            Rank::from_index(rank_index as u8),
        ) {
            (Some(file), Some(rank)) => Some(Self::new(file, rank)),
            _ => None,
        }
    }

    /// Returns the index of the square, between 0 and 63.
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the rank of the square.
    #[inline]
    pub const fn rank(self) -> Rank {
        unsafe { Rank::from_index_unchecked(self.0 >> 3) }
    }
    /// Returns the file of the square.
    #[inline]
    pub const fn file(self) -> File {
        unsafe { File::from_index_unchecked(self.0 & 7) }
    }

    /// Translates this square by a given delta.
    ///
    /// Returns `None` if the translation would go out of the board.
    #[inline]
    pub const fn translate(self, delta: Delta) -> Option<Self> {
        Self::checked(
            self.file() as i8 + delta.file_offset(),
            self.rank() as i8 + delta.rank_offset(),
        )
    }

    /// An iterator over all squares, ordered from a1 to h8.
    pub fn squares_iter() -> impl Iterator<Item = Self> {
        (0..64u8).map(Self)
    }

    /// An iterator over all squares in printing order: rank 8 down to rank 1,
    /// files a to h within each rank.
    pub fn squares_grid_iter() -> impl Iterator<Item = Self> {
        (0..8u8).rev().flat_map(|rank| (0..8u8).map(move |file| Self(rank << 3 | file)))
    }
}
impl std::fmt::Debug for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self}")
    }
}
impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}
impl std::str::FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.is_ascii() || s.len() != 2 {
            return Err(ParseSquareError::WrongLength);
        }
        let (file, rank) = s.split_at(1);
        Ok(Self::new(file.parse()?, rank.parse()?))
    }
}

/// Deltas represent directions in which pieces can move.
///
/// They can be applied to [`Square`]s through [`Square::translate`] to obtain
/// the target of the translation following this delta.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum Delta {
    North,
    South,
    East,
    West,

    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,

    KnightNorthEast,
    KnightNorthWest,
    KnightSouthEast,
    KnightSouthWest,
    KnightEastNorth,
    KnightWestNorth,
    KnightEastSouth,
    KnightWestSouth,
}
impl Delta {
    pub const ORTHOGONALS: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];
    pub const DIAGONALS: [Self; 4] = [
        Self::NorthEast,
        Self::NorthWest,
        Self::SouthEast,
        Self::SouthWest,
    ];
    pub const QUEEN_DELTAS: [Self; 8] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::NorthEast,
        Self::NorthWest,
        Self::SouthEast,
        Self::SouthWest,
    ];
    pub const KNIGHT_DELTAS: [Self; 8] = [
        Self::KnightNorthEast,
        Self::KnightNorthWest,
        Self::KnightSouthEast,
        Self::KnightSouthWest,
        Self::KnightEastNorth,
        Self::KnightWestNorth,
        Self::KnightEastSouth,
        Self::KnightWestSouth,
    ];

    /// Returns the file component of this delta.
    #[inline]
    pub const fn file_offset(self) -> i8 {
        match self {
            Self::North | Self::South => 0,
            Self::East | Self::NorthEast | Self::SouthEast => 1,
            Self::West | Self::NorthWest | Self::SouthWest => -1,
            Self::KnightNorthEast | Self::KnightSouthEast => 1,
            Self::KnightNorthWest | Self::KnightSouthWest => -1,
            Self::KnightEastNorth | Self::KnightEastSouth => 2,
            Self::KnightWestNorth | Self::KnightWestSouth => -2,
        }
    }

    /// Returns the rank component of this delta.
    #[inline]
    pub const fn rank_offset(self) -> i8 {
        match self {
            Self::East | Self::West => 0,
            Self::North | Self::NorthEast | Self::NorthWest => 1,
            Self::South | Self::SouthEast | Self::SouthWest => -1,
            Self::KnightNorthEast | Self::KnightNorthWest => 2,
            Self::KnightSouthEast | Self::KnightSouthWest => -2,
            Self::KnightEastNorth | Self::KnightWestNorth => 1,
            Self::KnightEastSouth | Self::KnightWestSouth => -1,
        }
    }
}
