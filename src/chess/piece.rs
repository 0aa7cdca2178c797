//! Piece types encoding.

use thiserror::Error;

use super::{
    colour::Colour,
    movegen::{self, MoveList},
    square::Square,
};

/// The kind of a piece, one of Pawn, Knight, Bishop, Rook, Queen or King.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}
impl PieceKind {
    /// The single-character display representation of this kind.
    ///
    /// Glyphs depend on the kind only, never on the colour of the piece.
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            Self::Pawn => 'p',
            Self::Knight => 'n',
            Self::Bishop => 'b',
            Self::Rook => 'r',
            Self::Queen => 'q',
            Self::King => 'k',
        }
    }

    /// The full lowercase name of this kind.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pawn => "pawn",
            Self::Knight => "knight",
            Self::Bishop => "bishop",
            Self::Rook => "rook",
            Self::Queen => "queen",
            Self::King => "king",
        }
    }

    /// Iterator over all piece kinds.
    pub fn iter() -> impl Iterator<Item = Self> {
        [
            PieceKind::Pawn,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Rook,
            PieceKind::Queen,
            PieceKind::King,
        ]
        .into_iter()
    }
}
impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Error returned when parsing a piece kind from an unrecognized string.
#[derive(Clone, Debug, Hash, Eq, PartialEq, Error)]
#[error("expected a piece name or glyph (e.g. \"knight\" or \"n\"), found {0:?}")]
pub struct ParsePieceError(String);

impl std::str::FromStr for PieceKind {
    type Err = ParsePieceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pawn" | "p" => Ok(Self::Pawn),
            "knight" | "n" => Ok(Self::Knight),
            "bishop" | "b" => Ok(Self::Bishop),
            "rook" | "r" => Ok(Self::Rook),
            "queen" | "q" => Ok(Self::Queen),
            "king" | "k" => Ok(Self::King),
            _ => Err(ParsePieceError(s.to_string())),
        }
    }
}

/// A piece standing on a square of the board.
///
/// The `has_moved` flag is false at construction. Its only current reader is
/// pawn double push generation; castling eligibility is out of scope.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct Piece {
    pub colour: Colour,
    pub kind: PieceKind,
    pub square: Square,
    pub has_moved: bool,
}
impl Piece {
    /// Instantiates a piece of the given colour and kind on a square.
    #[inline]
    pub const fn new(colour: Colour, kind: PieceKind, square: Square) -> Self {
        Self {
            colour,
            kind,
            square,
            has_moved: false,
        }
    }

    /// The single-character display representation of this piece.
    #[inline]
    pub const fn glyph(&self) -> char {
        self.kind.glyph()
    }

    /// Enumerates candidate destination squares for this piece, by the
    /// geometric pattern of its kind.
    ///
    /// Board occupancy is ignored: no blocking, captures or legality
    /// filtering.
    pub fn moves(&self) -> MoveList {
        match self.kind {
            PieceKind::King => movegen::king_moves(self.square),
            PieceKind::Queen => movegen::queen_moves(self.square),
            PieceKind::Rook => movegen::rook_moves(self.square),
            PieceKind::Bishop => movegen::bishop_moves(self.square),
            PieceKind::Knight => movegen::knight_moves(self.square),
            PieceKind::Pawn => {
                movegen::pawn_pushes(self.square, self.colour, self.has_moved)
            }
        }
    }
}
