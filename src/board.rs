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

//! Piece placement.

use core::{fmt, iter::FromIterator};

use crate::{
    attacks,
    bitboard::Bitboard,
    color::{ByColor, Color},
    errors::{PositionError, PositionErrorKinds},
    role::{ByRole, Role},
    square::Square,
    types::Piece,
};

/// Piece positions on a board, as twelve bitboards, one per color and role.
///
/// Per-color, per-role and occupancy views are computed from these on
/// demand, so there is a single source of truth.
///
/// # Examples
///
/// ```
/// use ferrochess::{Board, Color, Square};
///
/// let board = Board::new();
/// // r n b q k b n r
/// // p p p p p p p p
/// // . . . . . . . .
/// // . . . . . . . .
/// // . . . . . . . .
/// // . . . . . . . .
/// // P P P P P P P P
/// // R N B Q K B N R
///
/// assert_eq!(board.piece_at(Square::E8), Some(Color::Black.king()));
/// assert_eq!(board.occupied().count(), 32);
/// ```
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Board {
    by_piece: ByColor<ByRole<Bitboard>>,
}

impl Board {
    /// The standard starting position.
    pub fn new() -> Board {
        Board {
            by_piece: ByColor {
                white: ByRole {
                    pawn: Bitboard(0x0000_0000_0000_ff00),
                    knight: Bitboard(0x0000_0000_0000_0042),
                    bishop: Bitboard(0x0000_0000_0000_0024),
                    rook: Bitboard(0x0000_0000_0000_0081),
                    queen: Bitboard(0x0000_0000_0000_0008),
                    king: Bitboard(0x0000_0000_0000_0010),
                },
                black: ByRole {
                    pawn: Bitboard(0x00ff_0000_0000_0000),
                    knight: Bitboard(0x4200_0000_0000_0000),
                    bishop: Bitboard(0x2400_0000_0000_0000),
                    rook: Bitboard(0x8100_0000_0000_0000),
                    queen: Bitboard(0x0800_0000_0000_0000),
                    king: Bitboard(0x1000_0000_0000_0000),
                },
            },
        }
    }

    pub fn empty() -> Board {
        Board {
            by_piece: ByColor::default(),
        }
    }

    /// Builds a board from twelve raw piece bitboards. Nothing is checked,
    /// see [`Board::validate()`].
    pub fn from_bitboards(by_piece: ByColor<ByRole<Bitboard>>) -> Board {
        Board { by_piece }
    }

    /// The twelve piece bitboards.
    pub fn into_bitboards(self) -> ByColor<ByRole<Bitboard>> {
        self.by_piece
    }

    #[inline]
    pub fn by_piece(&self, piece: Piece) -> Bitboard {
        *self.by_piece.get(piece.color).get(piece.role)
    }

    #[inline]
    pub fn by_color(&self, color: Color) -> Bitboard {
        self.by_piece
            .get(color)
            .iter()
            .fold(Bitboard::EMPTY, |acc, &bb| acc | bb)
    }

    #[inline]
    pub fn by_role(&self, role: Role) -> Bitboard {
        *self.by_piece.white.get(role) | *self.by_piece.black.get(role)
    }

    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.by_color(Color::White) | self.by_color(Color::Black)
    }

    #[inline]
    pub fn white(&self) -> Bitboard {
        self.by_color(Color::White)
    }

    #[inline]
    pub fn black(&self) -> Bitboard {
        self.by_color(Color::Black)
    }

    #[inline]
    pub fn pawns(&self) -> Bitboard {
        self.by_role(Role::Pawn)
    }

    #[inline]
    pub fn knights(&self) -> Bitboard {
        self.by_role(Role::Knight)
    }

    #[inline]
    pub fn bishops(&self) -> Bitboard {
        self.by_role(Role::Bishop)
    }

    #[inline]
    pub fn rooks(&self) -> Bitboard {
        self.by_role(Role::Rook)
    }

    #[inline]
    pub fn queens(&self) -> Bitboard {
        self.by_role(Role::Queen)
    }

    #[inline]
    pub fn kings(&self) -> Bitboard {
        self.by_role(Role::King)
    }

    /// The square of the king of `color`, if there is exactly one.
    #[inline]
    pub fn king_of(&self, color: Color) -> Option<Square> {
        self.by_piece(color.king()).single_square()
    }

    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.by_piece
            .find(|by_role| by_role.iter().any(|bb| bb.contains(sq)))
    }

    pub fn role_at(&self, sq: Square) -> Option<Role> {
        self.piece_at(sq).map(|piece| piece.role)
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        Color::ALL.into_iter().find_map(|color| {
            self.by_piece
                .get(color)
                .find(|bb| bb.contains(sq))
                .map(|role| role.of(color))
        })
    }

    /// Removes and returns the piece on `sq`.
    pub fn remove_piece_at(&mut self, sq: Square) -> Option<Piece> {
        let piece = self.piece_at(sq);
        if let Some(piece) = piece {
            self.by_piece
                .get_mut(piece.color)
                .get_mut(piece.role)
                .discard(sq);
        }
        piece
    }

    /// Puts `piece` on `sq`, replacing whatever was there.
    pub fn set_piece_at(&mut self, sq: Square, piece: Piece) {
        self.remove_piece_at(sq);
        self.by_piece
            .get_mut(piece.color)
            .get_mut(piece.role)
            .add(sq);
    }

    /// Pieces of `attacker` that attack `sq`, with the given occupancy for
    /// sliding pieces.
    pub fn attacks_to(&self, sq: Square, attacker: Color, occupied: Bitboard) -> Bitboard {
        let them = self.by_piece.get(attacker);
        (attacks::rook_attacks(sq, occupied) & (them.rook | them.queen))
            | (attacks::bishop_attacks(sq, occupied) & (them.bishop | them.queen))
            | (attacks::knight_attacks(sq) & them.knight)
            | (attacks::king_attacks(sq) & them.king)
            | (attacks::pawn_attacks(!attacker, sq) & them.pawn)
    }

    /// Attacks of the piece on `sq`, or an empty set.
    pub fn attacks_from(&self, sq: Square) -> Bitboard {
        self.piece_at(sq)
            .map_or(Bitboard::EMPTY, |piece| {
                attacks::attacks(sq, piece, self.occupied())
            })
    }

    /// Iterates all pieces, by square.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied()
            .into_iter()
            .filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Board-level problems: overlapping piece bitboards and king counts.
    pub(crate) fn problems(&self) -> PositionErrorKinds {
        let mut kinds = PositionErrorKinds::empty();

        let mut seen = Bitboard::EMPTY;
        for color in Color::ALL {
            for &bb in self.by_piece.get(color).iter() {
                if seen.intersects(bb) {
                    kinds |= PositionErrorKinds::OVERLAPPING_PIECES;
                }
                seen |= bb;
            }
        }

        for color in Color::ALL {
            let kings = self.by_piece(color.king());
            if kings.is_empty() {
                kinds |= PositionErrorKinds::MISSING_KING;
            } else if kings.more_than_one() {
                kinds |= PositionErrorKinds::TOO_MANY_KINGS;
            }
        }

        kinds
    }

    /// Checks that no two pieces share a square and that each side has
    /// exactly one king.
    ///
    /// # Errors
    ///
    /// Returns a [`PositionError`] listing every violation.
    pub fn validate(&self) -> Result<(), PositionError> {
        let kinds = self.problems();
        if kinds.is_empty() {
            Ok(())
        } else {
            Err(PositionError { kinds })
        }
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

impl FromIterator<(Square, Piece)> for Board {
    fn from_iter<T>(iter: T) -> Board
    where
        T: IntoIterator<Item = (Square, Piece)>,
    {
        let mut board = Board::empty();
        for (sq, piece) in iter {
            board.set_piece_at(sq, piece);
        }
        board
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            for file in 0..8 {
                let sq = Square::new(rank * 8 + file);
                let ch = self.piece_at(sq).map_or('.', Piece::char);
                fmt::Write::write_char(f, ch)?;
                f.write_str(if file < 7 { " " } else { "\n" })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_at() {
        let board = Board::new();
        assert_eq!(board.piece_at(Square::A1), Some(Color::White.rook()));
        assert_eq!(board.piece_at(Square::D8), Some(Color::Black.queen()));
        assert_eq!(board.piece_at(Square::E4), None);
        assert_eq!(board.color_at(Square::B7), Some(Color::Black));
        assert_eq!(board.role_at(Square::G1), Some(Role::Knight));
    }

    #[test]
    fn test_views_are_consistent() {
        let board = Board::new();
        assert_eq!(board.white(), Bitboard(0xffff));
        assert_eq!(board.black(), Bitboard(0xffff_0000_0000_0000));
        assert_eq!(board.occupied(), board.white() | board.black());
        assert_eq!(
            board.pawns() | board.knights() | board.bishops() | board.rooks() | board.queens()
                | board.kings(),
            board.occupied()
        );
        assert_eq!(board.king_of(Color::White), Some(Square::E1));
        assert_eq!(board.king_of(Color::Black), Some(Square::E8));
    }

    #[test]
    fn test_set_and_remove() {
        let mut board = Board::new();
        board.set_piece_at(Square::E2, Color::Black.knight());
        assert_eq!(board.piece_at(Square::E2), Some(Color::Black.knight()));
        assert!(!board.pawns().contains(Square::E2));
        assert_eq!(board.remove_piece_at(Square::E2), Some(Color::Black.knight()));
        assert_eq!(board.remove_piece_at(Square::E2), None);
        assert_eq!(board.occupied().count(), 31);
        assert!(board.validate().is_ok());
    }

    #[test]
    fn test_attacks_to() {
        let board = Board::new();
        assert_eq!(
            board.attacks_to(Square::F3, Color::White, board.occupied()),
            Bitboard::from_iter([Square::E2, Square::G2, Square::G1])
        );
        assert!(board
            .attacks_to(Square::E4, Color::Black, board.occupied())
            .is_empty());
    }

    #[test]
    fn test_validate() {
        assert_eq!(
            Board::empty().validate().map_err(|e| e.kinds()),
            Err(PositionErrorKinds::MISSING_KING)
        );

        let mut by_piece = Board::new().into_bitboards();
        by_piece.white.queen.add(Square::E8);
        by_piece.white.king.add(Square::E4);
        let board = Board::from_bitboards(by_piece);
        assert_eq!(
            board.validate().map_err(|e| e.kinds()),
            Err(PositionErrorKinds::OVERLAPPING_PIECES | PositionErrorKinds::TOO_MANY_KINGS)
        );
    }

    #[test]
    fn test_from_iter() {
        let board: Board = [
            (Square::E1, Color::White.king()),
            (Square::E8, Color::Black.king()),
            (Square::A1, Color::White.rook()),
        ]
        .into_iter()
        .collect();
        assert!(board.validate().is_ok());
        assert_eq!(board.pieces().count(), 3);
        assert_eq!(board.attacks_from(Square::A1).count(), 11);
    }
}
