//! Candidate move enumeration for each piece kind.
//!
//! Generators are pure geometry: they map an origin square to the set of
//! destinations the kind's movement pattern reaches, bounded by the board
//! edges. Occupancy is never consulted, so there is no blocking, capturing or
//! self-piece filtering.

use std::iter::FusedIterator;

use super::{
    colour::Colour,
    square::{Delta, Square},
};

/// Candidate destinations for a single piece.
///
/// A queen on an interior square tops out at 27 destinations, so the capacity
/// is never exceeded.
pub type MoveList = heapless::Vec<Square, 32>;

/// An iterator over the squares reached from an origin along a fixed
/// direction, in order, ending at the board edge.
///
/// The origin itself is not yielded.
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    cursor: Square,
    direction: Delta,
}
impl Ray {
    /// A ray cast from `origin` towards `direction`.
    #[inline]
    pub const fn new(origin: Square, direction: Delta) -> Self {
        Self {
            cursor: origin,
            direction,
        }
    }
}
impl Iterator for Ray {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.cursor = self.cursor.translate(self.direction)?;
        Some(self.cursor)
    }
}
impl FusedIterator for Ray {}

/// Collects full-length rays in each of the given directions.
fn rays(origin: Square, directions: &[Delta]) -> MoveList {
    let mut moves = MoveList::new();
    for &direction in directions {
        for square in Ray::new(origin, direction) {
            let _ = moves.push(square);
        }
    }
    moves
}

/// Collects single translations of the origin in each of the given
/// directions, discarding those that fall off the board.
fn steps(origin: Square, directions: &[Delta]) -> MoveList {
    directions
        .iter()
        .filter_map(|&direction| origin.translate(direction))
        .collect()
}

/// All 8 neighbouring squares within bounds.
pub fn king_moves(origin: Square) -> MoveList {
    steps(origin, &Delta::QUEEN_DELTAS)
}

/// Full-length rays in the 4 orthogonal and 4 diagonal directions.
pub fn queen_moves(origin: Square) -> MoveList {
    rays(origin, &Delta::QUEEN_DELTAS)
}

/// Full-length rays in the 4 orthogonal directions.
pub fn rook_moves(origin: Square) -> MoveList {
    rays(origin, &Delta::ORTHOGONALS)
}

/// Full-length rays in the 4 diagonal directions.
pub fn bishop_moves(origin: Square) -> MoveList {
    rays(origin, &Delta::DIAGONALS)
}

/// The 8 fixed knight offsets, bounds-filtered.
pub fn knight_moves(origin: Square) -> MoveList {
    steps(origin, &Delta::KNIGHT_DELTAS)
}

/// Forward push direction for pawns of a given colour.
#[inline]
const fn push_delta(colour: Colour) -> Delta {
    if colour.is_black() {
        Delta::South
    } else {
        Delta::North
    }
}

/// Forward capture directions for pawns of a given colour.
#[inline]
const fn attack_deltas(colour: Colour) -> [Delta; 2] {
    if colour.is_black() {
        [Delta::SouthEast, Delta::SouthWest]
    } else {
        [Delta::NorthEast, Delta::NorthWest]
    }
}

/// Forward pushes of a pawn: a single step towards the opponent's side, plus
/// a double step if the pawn has not moved yet.
pub fn pawn_pushes(origin: Square, colour: Colour, has_moved: bool) -> MoveList {
    let mut moves = MoveList::new();
    let Some(step) = origin.translate(push_delta(colour)) else {
        return moves;
    };
    let _ = moves.push(step);
    if !has_moved {
        if let Some(double_step) = step.translate(push_delta(colour)) {
            let _ = moves.push(double_step);
        }
    }
    moves
}

/// The two forward diagonal squares a pawn attacks.
///
/// Kept separate from [`pawn_pushes`]: attack squares only matter once
/// capture resolution exists, which is out of scope here.
pub fn pawn_attacks(origin: Square, colour: Colour) -> MoveList {
    steps(origin, &attack_deltas(colour))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::chess::square::{File, Rank};

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn ray_runs_to_the_edge() {
        let collected: Vec<_> = Ray::new(sq("e4"), Delta::West).collect();
        assert_eq!(collected, ["d4", "c4", "b4", "a4"].map(sq))
    }

    #[test]
    fn ray_from_the_edge_is_empty() {
        assert_eq!(Ray::new(sq("a4"), Delta::West).count(), 0)
    }

    #[test]
    fn king_move_counts() {
        assert_eq!(king_moves(sq("a1")).len(), 3);
        assert_eq!(king_moves(sq("e1")).len(), 5);
        assert_eq!(king_moves(sq("e5")).len(), 8)
    }

    #[test]
    fn knight_move_counts() {
        let interior = knight_moves(sq("e5"));
        assert_eq!(interior.len(), 8);
        let unique: std::collections::HashSet<_> = interior.iter().collect();
        assert_eq!(unique.len(), 8);

        assert_eq!(knight_moves(sq("a1")).as_slice(), [sq("b3"), sq("c2")])
    }

    #[test]
    fn rook_moves_share_rank_or_file() {
        for origin in Square::squares_iter() {
            for destination in rook_moves(origin) {
                assert_ne!(destination, origin);
                assert!(
                    destination.rank() == origin.rank() || destination.file() == origin.file()
                )
            }
        }
    }

    #[test]
    fn bishop_moves_share_a_diagonal() {
        for origin in Square::squares_iter() {
            for destination in bishop_moves(origin) {
                assert_ne!(destination, origin);
                let file_distance = (destination.file() as i8 - origin.file() as i8).abs();
                let rank_distance = (destination.rank() as i8 - origin.rank() as i8).abs();
                assert_eq!(file_distance, rank_distance)
            }
        }
    }

    #[test]
    fn queen_is_rook_plus_bishop() {
        for origin in [sq("e5"), sq("a1"), sq("h4")] {
            let mut expected: Vec<_> = rook_moves(origin)
                .into_iter()
                .chain(bishop_moves(origin))
                .collect();
            let mut queen: Vec<_> = queen_moves(origin).into_iter().collect();
            expected.sort();
            queen.sort();
            assert_eq!(queen, expected)
        }
        assert_eq!(queen_moves(sq("e5")).len(), 27)
    }

    #[test]
    fn pawn_pushes_are_colour_aware() {
        assert_eq!(
            pawn_pushes(sq("e2"), Colour::White, false).as_slice(),
            [sq("e3"), sq("e4")]
        );
        assert_eq!(
            pawn_pushes(sq("e3"), Colour::White, true).as_slice(),
            [sq("e4")]
        );
        assert_eq!(
            pawn_pushes(sq("e7"), Colour::Black, false).as_slice(),
            [sq("e6"), sq("e5")]
        )
    }

    #[test]
    fn pawn_pushes_stop_at_the_last_rank() {
        assert!(pawn_pushes(sq("e8"), Colour::White, true).is_empty());
        assert_eq!(
            pawn_pushes(sq("e7"), Colour::White, false).as_slice(),
            [sq("e8")]
        )
    }

    #[test]
    fn pawn_attacks_are_the_forward_diagonals() {
        assert_eq!(
            pawn_attacks(sq("e4"), Colour::White).as_slice(),
            [sq("f5"), sq("d5")]
        );
        assert_eq!(
            pawn_attacks(sq("a4"), Colour::Black).as_slice(),
            [sq("b3")]
        )
    }

    #[test]
    fn every_destination_is_on_the_board() {
        // `MoveList` holds `Square`s, which exist iff in bounds; this checks
        // the generators against the raw predicate instead.
        let origin = Square::new(File::A, Rank::Eight);
        for destination in queen_moves(origin)
            .into_iter()
            .chain(knight_moves(origin))
            .chain(king_moves(origin))
        {
            assert!(Square::checked(
                destination.file() as i8,
                destination.rank() as i8
            )
            .is_some())
        }
    }
}
