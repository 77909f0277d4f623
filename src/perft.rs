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

//! Count legal move paths.
//!
//! # Examples
//!
//! ```
//! use ferrochess::{perft::perft, Position};
//!
//! let pos = Position::default();
//! assert_eq!(perft(&pos, 1), 20);
//! assert_eq!(perft(&pos, 2), 400);
//! assert_eq!(perft(&pos, 3), 8902);
//! ```

use tracing::{debug, trace};

use crate::{m::Move, position::Position};

/// Counts legal move paths of a given length.
///
/// Paths with mate or stalemate are not counted unless it occurs in the
/// final position. Useful for comparing, testing and debugging move
/// generation correctness and performance.
pub fn perft(pos: &Position, depth: u32) -> u64 {
    let mut scratch = pos.clone();
    perft_inner(&mut scratch, depth)
}

fn perft_inner(pos: &mut Position, depth: u32) -> u64 {
    if depth < 1 {
        return 1;
    }

    let moves = pos.legal_moves();
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0;
    for m in moves {
        match pos.apply(m) {
            Ok(undo) => {
                nodes += perft_inner(pos, depth - 1);
                pos.unmake(m, undo);
            }
            Err(err) => debug!(m = %m, %err, "legal move failed to apply"),
        }
    }
    nodes
}

/// Like [`perft()`], but returns the number of paths below each legal move
/// of `pos`, in generation order.
///
/// ```
/// use ferrochess::{perft::perft_divide, Position};
///
/// let pos = Position::default();
/// let divided = perft_divide(&pos, 2);
/// assert_eq!(divided.len(), 20);
/// assert!(divided.iter().all(|&(_, nodes)| nodes == 20));
/// ```
pub fn perft_divide(pos: &Position, depth: u32) -> Vec<(Move, u64)> {
    let mut scratch = pos.clone();
    let mut divided = Vec::new();

    if depth < 1 {
        return divided;
    }

    for m in pos.legal_moves() {
        match scratch.apply(m) {
            Ok(undo) => {
                let nodes = perft_inner(&mut scratch, depth - 1);
                scratch.unmake(m, undo);
                trace!(m = %m.uci(), nodes, "perft subtotal");
                divided.push((m, nodes));
            }
            Err(err) => debug!(m = %m, %err, "legal move failed to apply"),
        }
    }

    divided
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        board::Board, castling_side::CastlingRights, color::Color, setup::Setup, square::Square,
    };

    #[test]
    fn test_depth_zero() {
        assert_eq!(perft(&Position::default(), 0), 1);
        assert!(perft_divide(&Position::default(), 0).is_empty());
    }

    #[test]
    fn test_divide_sums_to_perft() {
        let pos = Position::default();
        let total: u64 = perft_divide(&pos, 3).iter().map(|&(_, nodes)| nodes).sum();
        assert_eq!(total, perft(&pos, 3));
    }

    #[test]
    fn test_position_unchanged() {
        let pos = Position::default();
        let before = pos.clone();
        perft(&pos, 3);
        assert_eq!(pos, before);
    }

    #[test]
    fn test_castling_rook_endgame() {
        // Only kings and rooks with all castling rights.
        let setup = Setup {
            board: [
                (Square::E1, Color::White.king()),
                (Square::A1, Color::White.rook()),
                (Square::H1, Color::White.rook()),
                (Square::E8, Color::Black.king()),
                (Square::A8, Color::Black.rook()),
                (Square::H8, Color::Black.rook()),
            ]
            .into_iter()
            .collect::<Board>(),
            castling_rights: CastlingRights::all(),
            ..Setup::empty()
        };
        let pos = Position::from_setup(setup).expect("legal position");
        assert_eq!(perft(&pos, 1), 26);
        assert_eq!(perft(&pos, 2), 568);

        // Every legal move, castling included, gets a subtotal.
        let divided = perft_divide(&pos, 2);
        assert_eq!(divided.len(), pos.legal_moves().len());
        assert_eq!(divided.iter().filter(|&&(m, _)| m.is_castle()).count(), 2);
        assert_eq!(divided.iter().map(|&(_, nodes)| nodes).sum::<u64>(), 568);
    }
}
