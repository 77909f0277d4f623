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

//! Helpers shared by the integration suites.

#![allow(dead_code)]

use ferrochess::{
    Board, CastlingRights, CastlingSide, Color, File, Move, Piece, Position, Rank, Setup, Square,
};

/// Decomposes FEN text into [`Setup`] fields. Panics on malformed input.
///
/// The move counters may be omitted, as in EPD.
pub fn setup(fen: &str) -> Setup {
    let mut parts = fen.split_ascii_whitespace();

    let mut board = Board::empty();
    let placement = parts.next().expect("missing board");
    let ranks: Vec<&str> = placement.split('/').collect();
    assert_eq!(ranks.len(), 8, "expected 8 ranks in {fen:?}");
    for (rank, row) in Rank::ALL.into_iter().rev().zip(ranks) {
        let mut file = 0;
        for ch in row.chars() {
            if let Some(skip) = ch.to_digit(10) {
                file += skip;
            } else {
                let piece = Piece::from_char(ch).expect("valid piece char");
                board.set_piece_at(Square::from_coords(File::new(file), rank), piece);
                file += 1;
            }
        }
        assert_eq!(file, 8, "expected 8 files in {row:?}");
    }

    let turn = parts
        .next()
        .and_then(|s| s.chars().next())
        .and_then(Color::from_char)
        .expect("valid turn");

    let mut castling_rights = CastlingRights::empty();
    for ch in parts.next().expect("missing castling").chars() {
        castling_rights |= match ch {
            'K' => CastlingRights::flag(Color::White, CastlingSide::KingSide),
            'Q' => CastlingRights::flag(Color::White, CastlingSide::QueenSide),
            'k' => CastlingRights::flag(Color::Black, CastlingSide::KingSide),
            'q' => CastlingRights::flag(Color::Black, CastlingSide::QueenSide),
            '-' => CastlingRights::empty(),
            _ => panic!("invalid castling char {ch:?}"),
        };
    }

    let ep_square = match parts.next().expect("missing ep square") {
        "-" => None,
        sq => Some(sq.parse::<Square>().expect("valid ep square")),
    };

    let halfmoves = parts.next().map_or(0, |s| s.parse().expect("valid halfmoves"));
    let fullmoves = parts.next().map_or(1, |s| s.parse().expect("valid fullmoves"));

    Setup {
        board,
        turn,
        castling_rights,
        ep_square,
        halfmoves,
        fullmoves,
    }
}

pub fn position(fen: &str) -> Position {
    Position::from_setup(setup(fen)).expect("legal position")
}

/// Finds the legal move with the given UCI notation.
pub fn legal_uci(pos: &Position, uci: &str) -> Move {
    pos.legal_moves()
        .into_iter()
        .find(|m| m.uci().to_string() == uci)
        .unwrap_or_else(|| panic!("{uci} is not legal in {pos:?}"))
}

pub const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
pub const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
pub const ENDGAME: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
pub const PROMOTIONS: &str = "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1";
pub const CHECKS: &str = "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8";
