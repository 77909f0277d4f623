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

use core::fmt::{self, Display, Write as _};

use arrayvec::ArrayVec;
use bitflags::bitflags;

use crate::{castling_side::CastlingSide, role::Role, square::Square};

bitflags! {
    /// Special properties of a [`Move`].
    #[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
    pub struct MoveFlags: u8 {
        /// Removes an enemy piece.
        const CAPTURE = 1 << 0;
        /// Pawn capture of a pawn that just made a double push. Always
        /// comes with `CAPTURE`.
        const EN_PASSANT = 1 << 1;
        const CASTLE_KING_SIDE = 1 << 2;
        const CASTLE_QUEEN_SIDE = 1 << 3;
        /// Pawn advancing two squares from its starting rank.
        const DOUBLE_PAWN_PUSH = 1 << 4;
    }
}

/// Information about a move.
///
/// A move only describes the change. Applying it needs the position it was
/// generated for.
///
/// For castling, the origin and destination are the squares of the king.
/// The rook move is implied.
///
/// # Examples
///
/// ```
/// use ferrochess::{Move, MoveFlags, Role, Square};
///
/// let m = Move::new(Role::Knight, Square::G1, Square::F3, None, MoveFlags::empty());
/// assert_eq!(m.to_string(), "Ng1-f3");
/// assert_eq!(m.uci().to_string(), "g1f3");
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Move {
    role: Role,
    from: Square,
    to: Square,
    promotion: Option<Role>,
    flags: MoveFlags,
}

impl Move {
    pub const fn new(
        role: Role,
        from: Square,
        to: Square,
        promotion: Option<Role>,
        flags: MoveFlags,
    ) -> Move {
        Move {
            role,
            from,
            to,
            promotion,
            flags,
        }
    }

    /// A non-capturing move without special properties.
    pub const fn quiet(role: Role, from: Square, to: Square) -> Move {
        Move::new(role, from, to, None, MoveFlags::empty())
    }

    /// A capture of the piece on `to`.
    pub const fn capture(role: Role, from: Square, to: Square) -> Move {
        Move::new(role, from, to, None, MoveFlags::CAPTURE)
    }

    /// Castling of the king on `king` to `side`.
    pub const fn castle(king: Square, side: CastlingSide) -> Move {
        let flags = match side {
            CastlingSide::KingSide => MoveFlags::CASTLE_KING_SIDE,
            CastlingSide::QueenSide => MoveFlags::CASTLE_QUEEN_SIDE,
        };
        let to = Square::from_coords(side.king_to_file(), king.rank());
        Move::new(Role::King, king, to, None, flags)
    }

    /// Gets the role of the moved piece.
    #[inline]
    pub const fn role(self) -> Role {
        self.role
    }

    /// Gets the origin square.
    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Gets the target square. For castling moves this is the destination
    /// of the king.
    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Gets the promotion role.
    #[inline]
    pub const fn promotion(self) -> Option<Role> {
        self.promotion
    }

    #[inline]
    pub const fn flags(self) -> MoveFlags {
        self.flags
    }

    /// Checks if the move is a capture, including en passant.
    #[inline]
    pub const fn is_capture(self) -> bool {
        self.flags.contains(MoveFlags::CAPTURE)
    }

    /// Checks if the move is en passant.
    #[inline]
    pub const fn is_en_passant(self) -> bool {
        self.flags.contains(MoveFlags::EN_PASSANT)
    }

    #[inline]
    pub const fn is_double_pawn_push(self) -> bool {
        self.flags.contains(MoveFlags::DOUBLE_PAWN_PUSH)
    }

    /// Gets the castling side.
    pub const fn castling_side(self) -> Option<CastlingSide> {
        if self.flags.contains(MoveFlags::CASTLE_KING_SIDE) {
            Some(CastlingSide::KingSide)
        } else if self.flags.contains(MoveFlags::CASTLE_QUEEN_SIDE) {
            Some(CastlingSide::QueenSide)
        } else {
            None
        }
    }

    /// Checks if the move is a castling move.
    #[inline]
    pub const fn is_castle(self) -> bool {
        self.castling_side().is_some()
    }

    /// Checks if the move is a promotion.
    #[inline]
    pub const fn is_promotion(self) -> bool {
        self.promotion.is_some()
    }

    /// Checks if the move zeros the half-move clock.
    pub const fn is_zeroing(self) -> bool {
        matches!(self.role, Role::Pawn) || self.is_capture()
    }

    /// Square of the piece removed by this move. Differs from the target
    /// square only for en passant.
    pub const fn capture_square(self) -> Option<Square> {
        if self.is_en_passant() {
            Some(self.to.with_rank(self.from.rank()))
        } else if self.is_capture() {
            Some(self.to)
        } else {
            None
        }
    }

    /// Formats the move in UCI notation, like `e2e4` or `e7e8q`.
    pub const fn uci(self) -> Uci {
        Uci(self)
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.castling_side() {
            Some(CastlingSide::KingSide) => return f.write_str("O-O"),
            Some(CastlingSide::QueenSide) => return f.write_str("O-O-O"),
            None => (),
        }

        if self.role != Role::Pawn {
            f.write_char(self.role.upper_char())?;
        }

        write!(
            f,
            "{}{}{}",
            self.from,
            if self.is_capture() { 'x' } else { '-' },
            self.to
        )?;

        if let Some(p) = self.promotion {
            write!(f, "={}", p.upper_char())?;
        }

        Ok(())
    }
}

/// [`Move`] rendered in UCI notation. See [`Move::uci()`].
#[derive(Copy, Clone, Debug)]
pub struct Uci(Move);

impl Display for Uci {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0.from, self.0.to)?;
        if let Some(p) = self.0.promotion {
            f.write_char(p.char())?;
        }
        Ok(())
    }
}

/// A container for moves that can be stored inline on the stack.
///
/// The capacity is limited, but there is enough space to hold the legal
/// moves of any chess position.
///
/// # Example
///
/// ```
/// use ferrochess::{Position, Role};
///
/// let pos = Position::default();
/// let mut moves = pos.legal_moves();
/// moves.retain(|m| m.role() == Role::Pawn);
/// assert_eq!(moves.len(), 16);
/// ```
pub type MoveList = ArrayVec<Move, 256>;
