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

//! Pseudo-legal move generation.
//!
//! Moves are generated piece type by piece type, in the order pawns,
//! knights, bishops, rooks, queens, king, castling. Within a piece type,
//! origins and destinations are visited in ascending square order.

use crate::{
    attacks,
    bitboard::Bitboard,
    castling_side::CastlingSide,
    m::{Move, MoveFlags, MoveList},
    position::Position,
    role::Role,
    square::{Rank, Square},
};

/// Appends every pseudo-legal move of the side to move to `moves`.
pub(crate) fn gen_pseudo_legal(pos: &Position, moves: &mut MoveList) {
    gen_pawn_moves(pos, moves);
    KnightTag::gen_moves(pos, moves);
    BishopTag::gen_moves(pos, moves);
    RookTag::gen_moves(pos, moves);
    QueenTag::gen_moves(pos, moves);
    KingTag::gen_moves(pos, moves);
    gen_castling_moves(pos, moves);
}

fn target_flags(pos: &Position, to: Square) -> MoveFlags {
    if pos.them().contains(to) {
        MoveFlags::CAPTURE
    } else {
        MoveFlags::empty()
    }
}

trait Stepper {
    const ROLE: Role;

    fn attacks(from: Square) -> Bitboard;

    fn gen_moves(pos: &Position, moves: &mut MoveList) {
        for from in pos.our(Self::ROLE) {
            moves.extend((Self::attacks(from) & !pos.us()).into_iter().map(|to| {
                Move::new(Self::ROLE, from, to, None, target_flags(pos, to))
            }));
        }
    }
}

trait Slider {
    const ROLE: Role;

    fn attacks(from: Square, occupied: Bitboard) -> Bitboard;

    fn gen_moves(pos: &Position, moves: &mut MoveList) {
        let occupied = pos.board().occupied();
        for from in pos.our(Self::ROLE) {
            moves.extend((Self::attacks(from, occupied) & !pos.us()).into_iter().map(|to| {
                Move::new(Self::ROLE, from, to, None, target_flags(pos, to))
            }));
        }
    }
}

enum KingTag {}
enum KnightTag {}
enum BishopTag {}
enum RookTag {}
enum QueenTag {}

impl Stepper for KingTag {
    const ROLE: Role = Role::King;
    fn attacks(from: Square) -> Bitboard {
        attacks::king_attacks(from)
    }
}

impl Stepper for KnightTag {
    const ROLE: Role = Role::Knight;
    fn attacks(from: Square) -> Bitboard {
        attacks::knight_attacks(from)
    }
}

impl Slider for BishopTag {
    const ROLE: Role = Role::Bishop;
    fn attacks(from: Square, occupied: Bitboard) -> Bitboard {
        attacks::bishop_attacks(from, occupied)
    }
}

impl Slider for RookTag {
    const ROLE: Role = Role::Rook;
    fn attacks(from: Square, occupied: Bitboard) -> Bitboard {
        attacks::rook_attacks(from, occupied)
    }
}

impl Slider for QueenTag {
    const ROLE: Role = Role::Queen;
    fn attacks(from: Square, occupied: Bitboard) -> Bitboard {
        attacks::queen_attacks(from, occupied)
    }
}

/// Pushes a pawn move, fanning out into one move per promotion role when
/// the pawn reaches the last rank.
fn push_pawn_moves(pos: &Position, moves: &mut MoveList, from: Square, to: Square, flags: MoveFlags) {
    if to.rank() == pos.turn().promotion_rank() {
        for promotion in Role::PROMOTIONS {
            moves.push(Move::new(Role::Pawn, from, to, Some(promotion), flags));
        }
    } else {
        moves.push(Move::new(Role::Pawn, from, to, None, flags));
    }
}

fn gen_pawn_moves(pos: &Position, moves: &mut MoveList) {
    let turn = pos.turn();
    let empty = !pos.board().occupied();
    let pawns = pos.our(Role::Pawn);

    for from in pawns {
        for to in attacks::pawn_attacks(turn, from) & pos.them() {
            push_pawn_moves(pos, moves, from, to, MoveFlags::CAPTURE);
        }
    }

    if let Some(to) = pos.ep_square() {
        for from in pawns & attacks::pawn_attacks(!turn, to) {
            moves.push(Move::new(
                Role::Pawn,
                from,
                to,
                None,
                MoveFlags::CAPTURE | MoveFlags::EN_PASSANT,
            ));
        }
    }

    let single_moves = pawns.shift_forward(turn) & empty;
    let double_moves =
        single_moves.shift_forward(turn) & empty & Bitboard::relative_rank(turn, Rank::Fourth);

    let back = -turn.forward();

    for to in single_moves {
        if let Some(from) = to.offset(back) {
            push_pawn_moves(pos, moves, from, to, MoveFlags::empty());
        }
    }

    for to in double_moves {
        if let Some(from) = to.offset(2 * back) {
            moves.push(Move::new(
                Role::Pawn,
                from,
                to,
                None,
                MoveFlags::DOUBLE_PAWN_PUSH,
            ));
        }
    }
}

/// Castling needs the right, the king and rook on their original squares,
/// and empty squares between them. Attacked squares are left to the
/// legality filter.
fn gen_castling_moves(pos: &Position, moves: &mut MoveList) {
    let turn = pos.turn();
    let king = CastlingSide::king_from(turn);
    if !pos.our(Role::King).contains(king) {
        return;
    }

    for side in CastlingSide::ALL {
        if pos.castling_rights().has(turn, side)
            && pos.our(Role::Rook).contains(side.rook_from(turn))
            && pos.board().occupied().is_disjoint(side.path(turn))
        {
            moves.push(Move::castle(king, side));
        }
    }
}
