//! The board: an 8x8 grid of optional pieces.

use thiserror::Error;

use super::{
    colour::Colour,
    piece::{Piece, PieceKind},
    square::{File, Rank, Square},
};

/// Returned when trying to place a piece on an occupied square.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Error)]
#[error("square {square} is already occupied by a {} {}", .occupant.colour, .occupant.kind.name())]
pub struct SquareOccupied {
    pub square: Square,
    pub occupant: Piece,
}

/// A fixed 8x8 grid of pieces.
///
/// Empty squares hold `None`; there is no sentinel piece value.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
}
impl Default for Board {
    /// A board with no pieces.
    fn default() -> Self {
        Self {
            squares: [None; 64],
        }
    }
}
impl Board {
    /// A board with no pieces.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The initial board: 8 pawns per colour on their starting ranks.
    ///
    /// No other piece kind is placed; use [`Board::place`] to set up
    /// arbitrary boards.
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for file_index in 0..8 {
            let file = File::from_index(file_index).unwrap();
            board.set(Piece::new(
                Colour::White,
                PieceKind::Pawn,
                Square::new(file, Rank::Two),
            ));
            board.set(Piece::new(
                Colour::Black,
                PieceKind::Pawn,
                Square::new(file, Rank::Seven),
            ));
        }
        board
    }

    /// Returns the piece sitting on a given square, if any.
    #[inline]
    pub fn piece_on(&self, square: Square) -> Option<&Piece> {
        self.squares[square.index() as usize].as_ref()
    }

    /// Places a piece on the square it carries.
    ///
    /// # Errors
    /// Fails if the square is already occupied.
    pub fn place(&mut self, piece: Piece) -> Result<(), SquareOccupied> {
        if let Some(occupant) = self.piece_on(piece.square) {
            return Err(SquareOccupied {
                square: piece.square,
                occupant: *occupant,
            });
        }
        self.set(piece);
        Ok(())
    }

    /// Removes and returns the piece on a given square, if any.
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.index() as usize].take()
    }

    /// Returns the number of pieces on the board.
    pub fn piece_count(&self) -> usize {
        self.squares.iter().flatten().count()
    }

    /// An iterator over all pieces on the board, from a1 to h8.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.squares.iter().flatten()
    }

    #[inline]
    fn set(&mut self, piece: Piece) {
        self.squares[piece.square.index() as usize] = Some(piece)
    }
}
