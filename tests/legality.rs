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

mod common;

use ferrochess::{CastlingSide, Move, Role, Square};

#[test]
fn test_check_evasion() {
    let pos = common::position("4r2k/8/8/8/8/8/8/4K3 w - - 0 1");
    assert!(pos.is_check());
    assert_eq!(pos.checkers(), Square::E8.into());

    let moves = pos.legal_moves();
    assert_eq!(moves.len(), 4);
    assert!(moves.iter().all(|m| m.role() == Role::King));
    assert!(!moves.iter().any(|m| m.to() == Square::E2));
}

#[test]
fn test_block_check() {
    // Rook on e8 checks; the bishop and the knight can interpose.
    let pos = common::position("4r2k/8/8/8/8/5N2/8/3BK3 w - - 0 1");
    let moves = pos.legal_moves();
    assert_eq!(moves.len(), 5);
    assert!(moves.contains(&common::legal_uci(&pos, "d1e2")));
    assert!(moves.contains(&common::legal_uci(&pos, "f3e5")));
    assert_eq!(moves.iter().filter(|m| m.role() == Role::King).count(), 3);
}

#[test]
fn test_checkmate() {
    let pos = common::position("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
    assert!(pos.is_check());
    assert!(pos.legal_moves().is_empty());
    assert!(!pos.pseudo_legal_moves().is_empty());
}

#[test]
fn test_stalemate() {
    let pos = common::position("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    assert!(!pos.is_check());
    assert!(pos.legal_moves().is_empty());
}

#[test]
fn test_pinned_rook_moves_along_pin() {
    let pos = common::position("4k3/4r3/8/8/8/8/4R3/4K3 w - - 0 1");
    let rook_moves: Vec<Move> = pos
        .legal_moves()
        .into_iter()
        .filter(|m| m.role() == Role::Rook)
        .collect();
    assert_eq!(rook_moves.len(), 5);
    assert!(rook_moves.iter().all(|m| m.to().file() == Square::E1.file()));
    assert!(rook_moves.iter().any(|m| m.is_capture() && m.to() == Square::E7));
}

#[test]
fn test_en_passant() {
    let pos = common::position("4k3/8/8/K2pP3/8/8/8/8 w - d6 0 1");
    let m = common::legal_uci(&pos, "e5d6");
    assert!(m.is_en_passant());
    assert_eq!(m.capture_square(), Some(Square::D5));

    let pos = pos.play(m).expect("legal");
    assert_eq!(pos.board().piece_at(Square::D5), None);
    assert_eq!(pos.board().pawns().count(), 1);
}

#[test]
fn test_en_passant_horizontal_discovered_check() {
    let pos = common::position("8/8/8/K2pP2r/8/8/8/7k w - d6 0 1");
    assert!(pos.pseudo_legal_moves().iter().any(|m| m.is_en_passant()));
    assert!(!pos.legal_moves().iter().any(|m| m.is_en_passant()));
    // The plain push stays legal.
    common::legal_uci(&pos, "e5e6");
}

#[test]
fn test_en_passant_evades_pawn_check() {
    // The pawn that just moved gives check and can be taken en passant.
    let pos = common::position("8/8/8/2k5/3Pp3/8/8/4K3 b - d3 0 1");
    assert!(pos.is_check());
    let m = common::legal_uci(&pos, "e4d3");
    assert!(m.is_en_passant());
}

#[test]
fn test_castling_through_attacked_square() {
    let pos = common::position("r3kr2/8/8/8/8/8/8/R3K2R w KQq - 0 1");
    let moves = pos.legal_moves();
    assert!(!moves.contains(&Move::castle(Square::E1, CastlingSide::KingSide)));
    assert!(moves.contains(&Move::castle(Square::E1, CastlingSide::QueenSide)));
}

#[test]
fn test_castling_out_of_check() {
    let pos = common::position("4k3/8/8/8/8/8/4r3/R3K2R w KQ - 0 1");
    assert!(pos.is_check());
    assert!(!pos.legal_moves().iter().any(|m| m.is_castle()));
}

#[test]
fn test_castling_into_check() {
    let pos = common::position("4k1r1/8/8/8/8/8/8/4K2R w K - 0 1");
    assert!(!pos.legal_moves().iter().any(|m| m.is_castle()));
}

#[test]
fn test_queen_side_castling_with_attacked_b_file() {
    let pos = common::position("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1");
    let m = common::legal_uci(&pos, "e1c1");
    assert_eq!(m.castling_side(), Some(CastlingSide::QueenSide));

    let pos = pos.play(m).expect("legal");
    assert_eq!(pos.board().piece_at(Square::C1), Some(ferrochess::Color::White.king()));
    assert_eq!(pos.board().piece_at(Square::D1), Some(ferrochess::Color::White.rook()));
    assert!(pos.castling_rights().is_empty());
}

#[test]
fn test_promotion_fan_out() {
    let pos = common::position("8/P7/8/8/8/8/8/k1K5 w - - 0 1");
    let promotions: Vec<Move> = pos
        .legal_moves()
        .into_iter()
        .filter(|m| m.role() == Role::Pawn)
        .collect();
    assert_eq!(promotions.len(), 4);
    for role in [Role::Queen, Role::Rook, Role::Bishop, Role::Knight] {
        assert!(promotions.iter().any(|m| m.promotion() == Some(role)));
    }
    assert!(promotions.iter().all(|m| m.to() == Square::A8));
}

#[test]
fn test_king_cannot_approach_king() {
    let pos = common::position("8/8/8/3k4/8/3K4/8/8 w - - 0 1");
    let moves = pos.legal_moves();
    assert_eq!(moves.len(), 5);
    assert!(!moves.iter().any(|m| m.to().rank() == Square::D4.rank()));
}

#[test]
fn test_play_rejects_illegal_move() {
    let pos = common::position("4r2k/8/8/8/8/8/8/4K3 w - - 0 1");
    let m = Move::quiet(Role::King, Square::E1, Square::E2);
    let err = pos.clone().play(m).unwrap_err();
    assert_eq!(err.into_inner(), pos);
}

#[test]
fn test_start_position_symmetry() {
    let pos = common::position(common::START);
    let moves = pos.legal_moves();
    assert_eq!(moves.len(), 20);
    assert_eq!(moves.iter().filter(|m| m.is_double_pawn_push()).count(), 8);
    assert_eq!(moves.iter().filter(|m| m.role() == Role::Knight).count(), 4);

    let m = common::legal_uci(&pos, "g1f3");
    let pos = pos.play(m).expect("legal");
    let moves = pos.legal_moves();
    assert_eq!(moves.len(), 20);
    assert_eq!(moves.iter().filter(|m| m.role() == Role::Pawn).count(), 16);
    assert!(moves.iter().all(|m| m.from().rank() >= ferrochess::Rank::Seventh));
}
