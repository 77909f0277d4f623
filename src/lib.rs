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

//! Chess position representation and legal move generation on bitboards.
//!
//! # Examples
//!
//! Generate legal moves in the starting position:
//!
//! ```
//! use ferrochess::Position;
//!
//! let pos = Position::default();
//! let legals = pos.legal_moves();
//! assert_eq!(legals.len(), 20);
//! ```
//!
//! Play moves:
//!
//! ```
//! use ferrochess::{Move, MoveFlags, Position, Role, Square};
//!
//! let pos = Position::default();
//!
//! // 1. e4
//! let pos = pos.play(Move::new(
//!     Role::Pawn,
//!     Square::E2,
//!     Square::E4,
//!     None,
//!     MoveFlags::DOUBLE_PAWN_PUSH,
//! ))?;
//! assert_eq!(pos.ep_square(), Some(Square::E3));
//! # Ok::<_, ferrochess::PlayError>(())
//! ```
//!
//! Make and take back moves in place:
//!
//! ```
//! use ferrochess::{Move, Position, Role, Square};
//!
//! let mut pos = Position::default();
//! let m = Move::quiet(Role::Knight, Square::B1, Square::C3);
//! let undo = pos.apply(m)?;
//! assert!(!pos.is_check());
//! pos.unmake(m, undo);
//! assert_eq!(pos, Position::default());
//! # Ok::<_, ferrochess::ApplyError>(())
//! ```
//!
//! Positions other than the standard start are built from a [`Setup`],
//! which is validated by [`Position::from_setup()`].
//!
//! # Feature flags
//!
//! * `serde`: Implements [`serde::Serialize`](https://docs.rs/serde/1/serde/trait.Serialize.html)
//!   and [`serde::Deserialize`](https://docs.rs/serde/1/serde/trait.Deserialize.html) for
//!   types with unique natural representations.
//! * `nohash-hasher`: Implements
//!   [`nohash_hasher::IsEnabled`](https://docs.rs/nohash-hasher/0.2/nohash_hasher/trait.IsEnabled.html)
//!   for sensible types.

#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]
#![cfg_attr(docs_rs, feature(doc_auto_cfg))]

mod castling_side;
mod color;
mod errors;
mod legal;
mod m;
mod movegen;
mod position;
mod role;
mod setup;
mod square;
mod types;
mod util;

pub mod attacks;
pub mod bitboard;
pub mod board;
pub mod diagram;
pub mod perft;

pub use bitboard::Bitboard;
pub use board::Board;
pub use castling_side::{CastlingRights, CastlingSide};
pub use color::{ByColor, Color, ParseColorError};
pub use errors::{ApplyError, PlayError, PositionError, PositionErrorKinds};
pub use m::{Move, MoveFlags, MoveList, Uci};
pub use perft::perft;
pub use position::{Position, UndoRecord};
pub use role::{ByRole, Role};
pub use setup::Setup;
pub use square::{File, ParseSquareError, Rank, Square};
pub use types::Piece;

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for File {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Rank {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Square {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Role {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Color {}
