// This file is part of the ferrochess library.
// Copyright (C) 2026 The ferrochess developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

//! Attack and ray tables.
//!
//! All tables are computed during constant evaluation, so they exist before
//! the first lookup and are never written afterwards.
//!
//! # Example
//!
//! ```
//! use ferrochess::{attacks, Bitboard, Square};
//!
//! let occupied = Bitboard::from(Square::F3);
//! let attacks = attacks::bishop_attacks(Square::C6, occupied);
//! // . . . . . . . .
//! // 1 . . . 1 . . .
//! // . 1 . 1 . . . .
//! // . . . . . . . .
//! // . 1 . 1 . . . .
//! // 1 . . . 1 . . .
//! // . . . . . 1 . .
//! // . . . . . . . .
//!
//! assert!(attacks.contains(Square::F3));
//! assert!(!attacks.contains(Square::G2));
//! ```

use crate::{
    bitboard::Bitboard,
    color::{ByColor, Color},
    role::Role,
    square::Square,
    types::Piece,
};

const KING_DELTAS: [i32; 8] = [9, 8, 7, 1, -9, -8, -7, -1];
const KNIGHT_DELTAS: [i32; 8] = [17, 15, 10, 6, -17, -15, -10, -6];
const WHITE_PAWN_DELTAS: [i32; 2] = [7, 9];
const BLACK_PAWN_DELTAS: [i32; 2] = [-7, -9];

/// One of the eight directions a sliding piece moves in.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    North = 0,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    /// Directions of a rook.
    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Directions of a bishop.
    pub const DIAGONAL: [Direction; 4] = [
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    /// Square index delta of a single step.
    pub const fn delta(self) -> i32 {
        match self {
            Direction::North => 8,
            Direction::South => -8,
            Direction::East => 1,
            Direction::West => -1,
            Direction::NorthEast => 9,
            Direction::NorthWest => 7,
            Direction::SouthEast => -7,
            Direction::SouthWest => -9,
        }
    }

    /// Rays in this direction head towards higher square indices.
    const fn is_ascending(self) -> bool {
        self.delta() > 0
    }
}

/// Walks each delta from `square` until leaving the board or hitting an
/// occupied square, which is included.
const fn sliding_attacks(square: i32, occupied: u64, deltas: &[i32]) -> u64 {
    let mut attack = 0;

    let mut i = 0;
    let len = deltas.len();
    while i < len {
        let mut previous = square;
        loop {
            let sq = previous + deltas[i];
            let file_diff = (sq & 0x7) - (previous & 0x7);
            if file_diff > 2 || file_diff < -2 || sq < 0 || sq > 63 {
                break;
            }
            let bb = 1 << sq;
            attack |= bb;
            if occupied & bb != 0 {
                break;
            }
            previous = sq;
        }
        i += 1;
    }

    attack
}

const fn init_stepping_attacks(deltas: &[i32]) -> [u64; 64] {
    let mut table = [0; 64];
    let mut sq = 0;
    while sq < 64 {
        table[sq] = sliding_attacks(sq as i32, !0, deltas);
        sq += 1;
    }
    table
}

const fn init_rays() -> [[u64; 64]; 8] {
    let mut table = [[0; 64]; 8];
    let mut dir = 0;
    while dir < 8 {
        let delta = Direction::ALL[dir].delta();
        let mut sq = 0;
        while sq < 64 {
            table[dir][sq] = sliding_attacks(sq as i32, 0, &[delta]);
            sq += 1;
        }
        dir += 1;
    }
    table
}

const fn init_between() -> [[u64; 64]; 64] {
    let mut table = [[0; 64]; 64];
    let mut a = 0;
    while a < 64 {
        let mut dir = 0;
        while dir < 8 {
            let delta = KING_DELTAS[dir];
            let mut path = 0;
            let mut previous = a as i32;
            loop {
                let sq = previous + delta;
                let file_diff = (sq & 0x7) - (previous & 0x7);
                if file_diff > 1 || file_diff < -1 || sq < 0 || sq > 63 {
                    break;
                }
                table[a][sq as usize] = path;
                path |= 1 << sq;
                previous = sq;
            }
            dir += 1;
        }
        a += 1;
    }
    table
}

static KNIGHT_ATTACKS: [u64; 64] = init_stepping_attacks(&KNIGHT_DELTAS);
static KING_ATTACKS: [u64; 64] = init_stepping_attacks(&KING_DELTAS);
static PAWN_ATTACKS: ByColor<[u64; 64]> = ByColor {
    white: init_stepping_attacks(&WHITE_PAWN_DELTAS),
    black: init_stepping_attacks(&BLACK_PAWN_DELTAS),
};
static RAYS: [[u64; 64]; 8] = init_rays();
static BETWEEN: [[u64; 64]; 64] = init_between();

/// Looks up attacks for a pawn of `color` on `sq`. These are the diagonal
/// capture squares only.
#[inline]
pub fn pawn_attacks(color: Color, sq: Square) -> Bitboard {
    Bitboard(PAWN_ATTACKS.get(color)[sq.to_usize()])
}

/// Looks up attacks for a knight on `sq`.
#[inline]
pub fn knight_attacks(sq: Square) -> Bitboard {
    Bitboard(KNIGHT_ATTACKS[sq.to_usize()])
}

/// Looks up attacks for a king on `sq`.
#[inline]
pub fn king_attacks(sq: Square) -> Bitboard {
    Bitboard(KING_ATTACKS[sq.to_usize()])
}

/// The full ray from `sq` in direction `dir` on an empty board, excluding
/// `sq` itself.
#[inline]
pub fn ray(dir: Direction, sq: Square) -> Bitboard {
    Bitboard(RAYS[dir as usize][sq.to_usize()])
}

/// Squares reached from `sq` in direction `dir`, up to and including the
/// first occupied square.
///
/// ```
/// use ferrochess::{attacks::{self, Direction}, Bitboard, Square};
///
/// let occupied = Bitboard::from_iter([Square::E6, Square::E8]);
/// assert_eq!(
///     attacks::ray_attacks(Direction::North, Square::E4, occupied),
///     Bitboard::from_iter([Square::E5, Square::E6])
/// );
/// ```
pub fn ray_attacks(dir: Direction, sq: Square, occupied: Bitboard) -> Bitboard {
    let full = ray(dir, sq);
    let blockers = full & occupied;
    let blocker = if dir.is_ascending() {
        blockers.first()
    } else {
        blockers.last()
    };
    match blocker {
        Some(blocker) => full ^ ray(dir, blocker),
        None => full,
    }
}

fn slider_attacks(dirs: &[Direction], sq: Square, occupied: Bitboard) -> Bitboard {
    dirs.iter().fold(Bitboard::EMPTY, |acc, &dir| {
        acc | ray_attacks(dir, sq, occupied)
    })
}

/// Looks up attacks for a rook on `sq` with `occupied` squares.
#[inline]
pub fn rook_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    slider_attacks(&Direction::ORTHOGONAL, sq, occupied)
}

/// Looks up attacks for a bishop on `sq` with `occupied` squares.
#[inline]
pub fn bishop_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    slider_attacks(&Direction::DIAGONAL, sq, occupied)
}

/// Looks up attacks for a queen on `sq` with `occupied` squares.
#[inline]
pub fn queen_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    rook_attacks(sq, occupied) | bishop_attacks(sq, occupied)
}

/// Looks up attacks for `piece` on `sq` with `occupied` squares.
///
/// Squares occupied by either side are included if they are reachable, so
/// the caller removes its own pieces. Pawn attacks are the capture squares,
/// never pushes.
pub fn attacks(sq: Square, piece: Piece, occupied: Bitboard) -> Bitboard {
    match piece.role {
        Role::Pawn => pawn_attacks(piece.color, sq),
        Role::Knight => knight_attacks(sq),
        Role::Bishop => bishop_attacks(sq, occupied),
        Role::Rook => rook_attacks(sq, occupied),
        Role::Queen => queen_attacks(sq, occupied),
        Role::King => king_attacks(sq),
    }
}

/// The squares strictly between `a` and `b`, if they share a rank, file or
/// diagonal. Otherwise empty.
///
/// ```
/// use ferrochess::{attacks, Bitboard, Square};
///
/// assert_eq!(
///     attacks::between(Square::B2, Square::E5),
///     Bitboard::from_iter([Square::C3, Square::D4])
/// );
/// assert!(attacks::between(Square::A1, Square::B3).is_empty());
/// ```
#[inline]
pub fn between(a: Square, b: Square) -> Bitboard {
    Bitboard(BETWEEN[a.to_usize()][b.to_usize()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knight_attacks() {
        assert_eq!(
            knight_attacks(Square::A1),
            Bitboard::from_iter([Square::B3, Square::C2])
        );
        assert_eq!(knight_attacks(Square::E4).count(), 8);
        assert_eq!(
            knight_attacks(Square::H8),
            Bitboard::from_iter([Square::G6, Square::F7])
        );
    }

    #[test]
    fn test_king_attacks() {
        assert_eq!(
            king_attacks(Square::H1),
            Bitboard::from_iter([Square::G1, Square::G2, Square::H2])
        );
        assert_eq!(king_attacks(Square::D5).count(), 8);
    }

    #[test]
    fn test_pawn_attacks() {
        assert_eq!(
            pawn_attacks(Color::White, Square::E4),
            Bitboard::from_iter([Square::D5, Square::F5])
        );
        assert_eq!(
            pawn_attacks(Color::Black, Square::E4),
            Bitboard::from_iter([Square::D3, Square::F3])
        );
        assert_eq!(
            pawn_attacks(Color::White, Square::A2),
            Bitboard::from_square(Square::B3)
        );
        assert_eq!(
            pawn_attacks(Color::Black, Square::H7),
            Bitboard::from_square(Square::G6)
        );
    }

    #[test]
    fn test_rook_attacks() {
        assert_eq!(rook_attacks(Square::A1, Bitboard::EMPTY).count(), 14);
        assert_eq!(rook_attacks(Square::D4, Bitboard::EMPTY).count(), 14);

        let occupied = Bitboard::from_iter([Square::D6, Square::B4, Square::D2, Square::G4]);
        assert_eq!(
            rook_attacks(Square::D4, occupied),
            Bitboard::from_iter([
                Square::D5,
                Square::D6,
                Square::C4,
                Square::B4,
                Square::E4,
                Square::F4,
                Square::G4,
                Square::D3,
                Square::D2,
            ])
        );
    }

    #[test]
    fn test_bishop_attacks() {
        assert_eq!(bishop_attacks(Square::A1, Bitboard::EMPTY).count(), 7);
        assert_eq!(bishop_attacks(Square::D4, Bitboard::EMPTY).count(), 13);
        let occupied = Bitboard::from_square(Square::F6);
        let attacks = bishop_attacks(Square::D4, occupied);
        assert!(attacks.contains(Square::F6));
        assert!(!attacks.contains(Square::G7));
        assert!(attacks.contains(Square::A1));
    }

    #[test]
    fn test_queen_attacks() {
        assert_eq!(queen_attacks(Square::D4, Bitboard::EMPTY).count(), 27);
        assert_eq!(
            attacks(Square::D4, Color::Black.queen(), Bitboard::FULL),
            king_attacks(Square::D4)
        );
    }

    #[test]
    fn test_slider_stops_at_edges() {
        assert_eq!(
            ray_attacks(Direction::East, Square::H3, Bitboard::EMPTY),
            Bitboard::EMPTY
        );
        assert_eq!(
            ray_attacks(Direction::NorthWest, Square::A3, Bitboard::EMPTY),
            Bitboard::EMPTY
        );
        assert_eq!(
            ray_attacks(Direction::SouthEast, Square::G2, Bitboard::EMPTY),
            Bitboard::from_square(Square::H1)
        );
    }

    #[test]
    fn test_ray_attacks_descending() {
        let occupied = Bitboard::from_iter([Square::B4, Square::C4]);
        assert_eq!(
            ray_attacks(Direction::West, Square::F4, occupied),
            Bitboard::from_iter([Square::E4, Square::D4, Square::C4])
        );
        assert_eq!(
            ray_attacks(Direction::SouthWest, Square::E5, Bitboard::EMPTY),
            Bitboard::from_iter([Square::D4, Square::C3, Square::B2, Square::A1])
        );
    }

    #[test]
    fn test_between() {
        assert_eq!(
            between(Square::E1, Square::H1),
            Bitboard::from_iter([Square::F1, Square::G1])
        );
        assert_eq!(between(Square::E1, Square::H1), between(Square::H1, Square::E1));
        assert_eq!(
            between(Square::A8, Square::A5),
            Bitboard::from_iter([Square::A7, Square::A6])
        );
        assert!(between(Square::E4, Square::E5).is_empty());
        assert!(between(Square::E4, Square::E4).is_empty());
        assert!(between(Square::H1, Square::A2).is_empty());
    }

    #[test]
    fn test_attacks_are_deterministic() {
        let occupied = Bitboard(0x1234_5678_9abc_def0);
        for sq in Bitboard::FULL {
            for piece in [Color::White.rook(), Color::Black.bishop(), Color::White.queen()] {
                assert_eq!(attacks(sq, piece, occupied), attacks(sq, piece, occupied));
                assert!(attacks(sq, piece, occupied).is_subset(attacks(sq, piece, Bitboard::EMPTY)));
            }
        }
    }
}
