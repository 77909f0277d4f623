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

use crate::{board::Board, castling_side::CastlingRights, color::Color, square::Square};

/// A not necessarily legal position, decomposed into its fields.
///
/// Text formats like FEN are parsed elsewhere. Their result is filled into
/// a `Setup` and handed to [`Position::from_setup()`](crate::Position::from_setup).
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Setup {
    /// Piece positions on the board.
    pub board: Board,

    /// Side to move.
    pub turn: Color,

    /// Castling rights.
    ///
    /// ```
    /// use ferrochess::{CastlingRights, Setup};
    ///
    /// assert_eq!(Setup::default().castling_rights, CastlingRights::all());
    /// ```
    pub castling_rights: CastlingRights,

    /// En passant target square: the square a pawn passed over with a
    /// double push on the previous move.
    pub ep_square: Option<Square>,

    /// Number of half-moves since the last
    /// [capture or pawn move](super::Move::is_zeroing()).
    pub halfmoves: u32,

    /// Current move number.
    ///
    /// Starts at 1 and is increased after every black move.
    pub fullmoves: u32,
}

impl Setup {
    /// No pieces, white to move, no castling rights.
    pub fn empty() -> Setup {
        Setup {
            board: Board::empty(),
            turn: Color::White,
            castling_rights: CastlingRights::empty(),
            ep_square: None,
            halfmoves: 0,
            fullmoves: 1,
        }
    }
}

impl Default for Setup {
    /// The standard starting position.
    fn default() -> Setup {
        Setup {
            board: Board::new(),
            castling_rights: CastlingRights::all(),
            ..Setup::empty()
        }
    }
}
