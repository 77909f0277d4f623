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

use tracing::debug;

use crate::{m::MoveList, position::Position};

/// Removes the moves that leave the own king attacked.
///
/// Every candidate is made on a scratch copy of the position and taken
/// back again. Castling is additionally rejected if the king starts on,
/// passes over, or lands on an attacked square.
pub(crate) fn filter_legal(pos: &Position, moves: &mut MoveList) {
    let us = pos.turn();
    let mut scratch = pos.clone();

    moves.retain(|m| {
        if let Some(side) = m.castling_side() {
            if side.king_path(us).into_iter().any(|sq| pos.is_attacked(sq, !us)) {
                return false;
            }
        }

        match scratch.apply(*m) {
            Ok(undo) => {
                let safe = scratch
                    .board()
                    .king_of(us)
                    .map_or(true, |king| !scratch.is_attacked(king, !us));
                scratch.unmake(*m, undo);
                safe
            }
            Err(err) => {
                debug!(m = %m, %err, "dropped generated move");
                false
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        board::Board,
        castling_side::{CastlingRights, CastlingSide},
        color::Color,
        m::{Move, MoveFlags},
        role::Role,
        setup::Setup,
        square::Square,
        types::Piece,
    };

    fn position(pieces: &[(Square, Piece)], turn: Color) -> Position {
        Position::from_setup(Setup {
            board: pieces.iter().copied().collect::<Board>(),
            turn,
            ..Setup::empty()
        })
        .expect("legal position")
    }

    #[test]
    fn test_scratch_position_untouched() {
        let pos = Position::default();
        let mut moves = pos.pseudo_legal_moves();
        let before = pos.clone();
        filter_legal(&pos, &mut moves);
        assert_eq!(pos, before);
        assert_eq!(moves.len(), 20);
    }

    #[test]
    fn test_pinned_piece() {
        let pos = position(
            &[
                (Square::E1, Color::White.king()),
                (Square::E2, Color::White.knight()),
                (Square::E8, Color::Black.rook()),
                (Square::A8, Color::Black.king()),
            ],
            Color::White,
        );
        let moves = pos.legal_moves();
        assert!(moves.iter().all(|m| m.role() == Role::King));
        assert_eq!(moves.len(), 4);
    }

    #[test]
    fn test_castling_out_of_and_through_check() {
        let setup = Setup {
            board: [
                (Square::E1, Color::White.king()),
                (Square::A1, Color::White.rook()),
                (Square::H1, Color::White.rook()),
                (Square::F8, Color::Black.rook()),
                (Square::B7, Color::Black.king()),
            ]
            .into_iter()
            .collect(),
            castling_rights: CastlingRights::WHITE,
            ..Setup::empty()
        };
        let pos = Position::from_setup(setup).expect("legal position");
        let moves = pos.legal_moves();
        assert!(!moves.contains(&Move::castle(Square::E1, CastlingSide::KingSide)));
        assert!(moves.contains(&Move::castle(Square::E1, CastlingSide::QueenSide)));
    }

    #[test]
    fn test_queen_side_b_file_may_be_attacked() {
        let setup = Setup {
            board: [
                (Square::E1, Color::White.king()),
                (Square::A1, Color::White.rook()),
                (Square::B8, Color::Black.rook()),
                (Square::H8, Color::Black.king()),
            ]
            .into_iter()
            .collect(),
            castling_rights: CastlingRights::WHITE_QUEEN_SIDE,
            ..Setup::empty()
        };
        let pos = Position::from_setup(setup).expect("legal position");
        assert!(pos
            .legal_moves()
            .contains(&Move::castle(Square::E1, CastlingSide::QueenSide)));
    }

    #[test]
    fn test_en_passant_discovered_check() {
        let setup = Setup {
            board: [
                (Square::A5, Color::White.king()),
                (Square::E5, Color::White.pawn()),
                (Square::D5, Color::Black.pawn()),
                (Square::H5, Color::Black.rook()),
                (Square::H8, Color::Black.king()),
            ]
            .into_iter()
            .collect(),
            ep_square: Some(Square::D6),
            ..Setup::empty()
        };
        let pos = Position::from_setup(setup).expect("legal position");
        let ep = Move::new(
            Role::Pawn,
            Square::E5,
            Square::D6,
            None,
            MoveFlags::CAPTURE | MoveFlags::EN_PASSANT,
        );
        assert!(pos.pseudo_legal_moves().contains(&ep));
        assert!(!pos.legal_moves().contains(&ep));
    }
}
