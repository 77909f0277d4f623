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

use ferrochess::{Color, Position};

const FENS: [&str; 6] = [
    common::START,
    common::KIWIPETE,
    common::ENDGAME,
    common::PROMOTIONS,
    common::CHECKS,
    "8/8/8/K2pP2r/8/8/8/7k w - d6 0 1",
];

fn piece_count(pos: &Position, color: Color) -> usize {
    pos.board().by_color(color).count()
}

/// Every pseudo-legal move can be applied and taken back exactly.
fn check_round_trip(pos: &Position) {
    let mut scratch = pos.clone();
    let us = pos.turn();

    for m in pos.pseudo_legal_moves() {
        let undo = scratch.apply(m).expect("generated move applies");

        assert!(scratch.board().validate().is_ok(), "{m} broke the board");
        assert_eq!(scratch.turn(), !us);
        assert_eq!(piece_count(&scratch, us), piece_count(pos, us), "{m}");
        let captured = usize::from(m.is_capture());
        assert_eq!(undo.captured().is_some(), m.is_capture(), "{m}");
        assert_eq!(
            piece_count(&scratch, !us) + captured,
            piece_count(pos, !us),
            "{m}"
        );
        if let Some((sq, piece)) = undo.captured() {
            assert_eq!(Some(sq), m.capture_square());
            assert_eq!(piece.color, !us);
        }

        scratch.unmake(m, undo);
        assert_eq!(&scratch, pos, "unmake {m}");
    }
}

#[test]
fn test_round_trip() {
    for fen in FENS {
        check_round_trip(&common::position(fen));
    }
}

#[test]
fn test_round_trip_two_plies() {
    for fen in [common::KIWIPETE, common::PROMOTIONS] {
        let pos = common::position(fen);
        for m in pos.legal_moves() {
            let child = pos.clone().play(m).expect("legal move");
            check_round_trip(&child);
        }
    }
}

#[test]
fn test_legal_moves_keep_king_safe() {
    for fen in FENS {
        let pos = common::position(fen);
        let us = pos.turn();
        for m in pos.legal_moves() {
            let child = pos.clone().play(m).expect("legal move");
            let king = child.board().king_of(us).expect("king");
            assert!(!child.is_attacked(king, !us), "{m} leaves king attacked");
        }
    }
}

#[test]
fn test_legal_subset_of_pseudo_legal() {
    for fen in FENS {
        let pos = common::position(fen);
        let pseudo = pos.pseudo_legal_moves();
        assert!(pos.legal_moves().iter().all(|m| pseudo.contains(m)));
    }
}

#[test]
fn test_apply_rejection_leaves_position_unchanged() {
    let mut pos = common::position(common::KIWIPETE);
    let before = pos.clone();
    let m = pos.legal_moves()[0];
    let undo = pos.apply(m).expect("applies");
    // Same move again: the origin is now empty.
    assert!(pos.apply(m).is_err());
    pos.unmake(m, undo);
    assert_eq!(pos, before);
}
