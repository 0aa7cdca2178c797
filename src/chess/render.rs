//! ASCII rendering of boards and move charts.
//!
//! Both printers emit eight lines of eight space-separated characters, one
//! line per rank, rank 8 first.

use super::{board::Board, movegen::MoveList, piece::Piece, square::Square};

/// Glyph for an empty square.
const EMPTY_SQUARE: char = '-';
/// Glyph marking a candidate destination on a move chart.
const MOVE_MARKER: char = '0';

fn write_grid(
    f: &mut std::fmt::Formatter<'_>,
    mut glyph_on: impl FnMut(Square) -> char,
) -> std::fmt::Result {
    for (i, square) in Square::squares_grid_iter().enumerate() {
        write!(f, "{} ", glyph_on(square))?;
        if i % 8 == 7 {
            writeln!(f)?
        }
    }
    Ok(())
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_grid(f, |square| {
            self.piece_on(square)
                .map_or(EMPTY_SQUARE, |piece| piece.glyph())
        })
    }
}
impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self}")?;
        write!(f, "pieces: {}", self.piece_count())
    }
}

/// Overlay of a single piece's candidate moves on an otherwise blank grid.
///
/// Destinations are marked with `0`, the piece's own square with its glyph.
pub struct MoveChart {
    piece: Piece,
    moves: MoveList,
}
impl MoveChart {
    /// Charts the moves of the given piece.
    pub fn new(piece: Piece) -> Self {
        Self {
            moves: piece.moves(),
            piece,
        }
    }
}
impl std::fmt::Display for MoveChart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_grid(f, |square| {
            if square == self.piece.square {
                self.piece.glyph()
            } else if self.moves.contains(&square) {
                MOVE_MARKER
            } else {
                EMPTY_SQUARE
            }
        })
    }
}

#[cfg(test)]
mod test {
    use super::MoveChart;
    use crate::chess::{
        board::Board,
        colour::Colour,
        piece::{Piece, PieceKind},
    };

    #[test]
    fn empty_board_renders_dashes() {
        let rendered = Board::empty().to_string();
        assert_eq!(rendered.lines().count(), 8);
        for line in rendered.lines() {
            assert_eq!(line, "- - - - - - - - ")
        }
    }

    #[test]
    fn initial_board_renders_pawn_ranks() {
        let rendered = Board::initial().to_string();
        let lines: Vec<_> = rendered.lines().collect();
        let pawns = "p p p p p p p p ";
        let empty = "- - - - - - - - ";
        assert_eq!(
            lines,
            [empty, pawns, empty, empty, empty, empty, pawns, empty]
        )
    }

    #[test]
    fn chart_marks_moves_and_origin() {
        let knight = Piece::new(Colour::White, PieceKind::Knight, "b1".parse().unwrap());
        let rendered = MoveChart::new(knight).to_string();
        let lines: Vec<_> = rendered.lines().collect();
        // Rank 3 holds the a3/c3 destinations, rank 2 the d2 destination,
        // rank 1 the knight itself.
        assert_eq!(lines[5], "0 - 0 - - - - - ");
        assert_eq!(lines[6], "- - - 0 - - - - ");
        assert_eq!(lines[7], "- n - - - - - - ")
    }

    #[test]
    fn occupied_squares_render_their_glyph() {
        let mut board = Board::empty();
        for (kind, name) in PieceKind::iter().zip(["a1", "b2", "c3", "d4", "e5", "f6"]) {
            board
                .place(Piece::new(Colour::Black, kind, name.parse().unwrap()))
                .unwrap()
        }
        let rendered = board.to_string();
        for glyph in ['p', 'n', 'b', 'r', 'q', 'k'] {
            assert_eq!(rendered.matches(glyph).count(), 1, "{glyph}")
        }
    }

    #[test]
    fn every_kind_renders_its_glyph() {
        for kind in PieceKind::iter() {
            let piece = Piece::new(Colour::White, kind, "e5".parse().unwrap());
            let rendered = MoveChart::new(piece).to_string();
            assert!(rendered.contains(kind.glyph()))
        }
    }
}
