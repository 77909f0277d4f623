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

use core::fmt;
use std::error::Error;

use bitflags::bitflags;

use crate::{m::Move, position::Position, square::Square};

bitflags! {
    /// Reasons for a [`Setup`](crate::Setup) or
    /// [`Board`](crate::Board) not being a valid position.
    #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
    pub struct PositionErrorKinds: u32 {
        /// Two piece bitboards share a square.
        const OVERLAPPING_PIECES = 1 << 0;

        /// A side has no king.
        const MISSING_KING = 1 << 1;

        /// A side has more than one king.
        const TOO_MANY_KINGS = 1 << 2;

        /// There are pawns on the first or eighth rank.
        const PAWNS_ON_BACKRANK = 1 << 3;

        /// A castling right is set, but the king or the corresponding rook
        /// is not on its original square.
        const INVALID_CASTLING_RIGHTS = 1 << 4;

        /// The en passant square is not behind a pawn that could just have
        /// made a double push.
        const INVALID_EP_SQUARE = 1 << 5;

        /// The player not to move is in check.
        const OPPOSITE_CHECK = 1 << 6;

        /// The fullmove number is zero.
        const INVALID_FULLMOVES = 1 << 7;

        /// A side has more pieces or pawns than can be reached from the
        /// starting position.
        const TOO_MUCH_MATERIAL = 1 << 8;
    }
}

impl fmt::Display for PositionErrorKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (kind, reason) in [
            (PositionErrorKinds::OVERLAPPING_PIECES, "overlapping pieces"),
            (PositionErrorKinds::MISSING_KING, "missing king"),
            (PositionErrorKinds::TOO_MANY_KINGS, "too many kings"),
            (PositionErrorKinds::PAWNS_ON_BACKRANK, "pawns on backrank"),
            (PositionErrorKinds::INVALID_CASTLING_RIGHTS, "invalid castling rights"),
            (PositionErrorKinds::INVALID_EP_SQUARE, "invalid en passant square"),
            (PositionErrorKinds::OPPOSITE_CHECK, "opposite check"),
            (PositionErrorKinds::INVALID_FULLMOVES, "invalid fullmove number"),
            (PositionErrorKinds::TOO_MUCH_MATERIAL, "too much material"),
        ] {
            if self.contains(kind) {
                if !first {
                    f.write_str(", ")?;
                }
                f.write_str(reason)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Error when trying to create a [`Position`] from an illegal
/// [`Setup`](crate::Setup), or to use a malformed
/// [`Board`](crate::Board).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PositionError {
    pub(crate) kinds: PositionErrorKinds,
}

impl PositionError {
    /// Every reason the position was rejected.
    pub fn kinds(&self) -> PositionErrorKinds {
        self.kinds
    }
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "illegal position: {}", self.kinds)
    }
}

impl Error for PositionError {}

/// Reason for [`Position::apply()`] refusing a move. The position is left
/// untouched in every case.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ApplyError {
    /// There is no piece on the origin square.
    EmptyOrigin { from: Square },
    /// The piece on the origin square belongs to the side not to move.
    WrongColor { from: Square },
    /// The piece on the origin square does not have the role of the move.
    RoleMismatch { from: Square },
    /// The destination is occupied by a piece of the moving side.
    SelfCapture { to: Square },
    /// The destination holds a king.
    KingCapture { to: Square },
    /// The capture flag does not agree with the occupancy of the capture
    /// square.
    CaptureMismatch { to: Square },
    /// En passant without an enemy pawn to capture, or without a matching
    /// en passant square.
    MissingEnPassantPawn { to: Square },
    /// Castling without the rook, the king or the right to do so.
    MissingCastlingRook,
    /// Castling with pieces between king and rook.
    CastlingPathBlocked,
    /// Promotion is not a pawn move to the last rank, or names a role that
    /// cannot be promoted to.
    InvalidPromotion,
    /// A pawn move to the last rank without a promotion role.
    MissingPromotion,
}

impl fmt::Display for ApplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplyError::EmptyOrigin { from } => write!(f, "no piece on {from}"),
            ApplyError::WrongColor { from } => write!(f, "piece on {from} is not ours"),
            ApplyError::RoleMismatch { from } => write!(f, "unexpected piece on {from}"),
            ApplyError::SelfCapture { to } => write!(f, "own piece on {to}"),
            ApplyError::KingCapture { to } => write!(f, "cannot capture king on {to}"),
            ApplyError::CaptureMismatch { to } => {
                write!(f, "capture flag does not match occupancy of {to}")
            }
            ApplyError::MissingEnPassantPawn { to } => {
                write!(f, "no pawn to capture en passant on {to}")
            }
            ApplyError::MissingCastlingRook => f.write_str("cannot castle without king, rook and right"),
            ApplyError::CastlingPathBlocked => f.write_str("castling path is blocked"),
            ApplyError::InvalidPromotion => f.write_str("invalid promotion"),
            ApplyError::MissingPromotion => f.write_str("pawn reaching last rank must promote"),
        }
    }
}

impl Error for ApplyError {}

/// Error when trying to play an illegal move.
#[derive(Debug)]
pub struct PlayError {
    pub(crate) m: Move,
    pub(crate) position: Position,
}

impl PlayError {
    /// Returns the unchanged position.
    pub fn into_inner(self) -> Position {
        self.position
    }

    /// The move that was refused.
    pub fn m(&self) -> Move {
        self.m
    }
}

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "illegal move {}", self.m)
    }
}

impl Error for PlayError {}
