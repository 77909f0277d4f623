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

//! Text diagrams of boards.
//!
//! # Examples
//!
//! ```
//! use ferrochess::{diagram, Position};
//!
//! let text = diagram::render(Position::default().board())?;
//! assert!(text.starts_with("  +---+---+"));
//! assert!(text.contains("8 | r | n | b | q | k | b | n | r |"));
//! assert!(text.ends_with("    a   b   c   d   e   f   g   h\n"));
//! # Ok::<_, ferrochess::PositionError>(())
//! ```

use core::fmt::{self, Display, Write as _};

use crate::{
    board::Board,
    errors::PositionError,
    square::{File, Rank, Square},
    types::Piece,
};

const SEPARATOR: &str = "  +---+---+---+---+---+---+---+---+\n";

struct Diagram<'a>(&'a Board);

impl Display for Diagram<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(SEPARATOR)?;
        for rank in Rank::ALL.into_iter().rev() {
            write!(f, "{} |", rank)?;
            for file in File::ALL {
                let ch = self
                    .0
                    .piece_at(Square::from_coords(file, rank))
                    .map_or(' ', Piece::char);
                write!(f, " {} |", ch)?;
            }
            f.write_char('\n')?;
            f.write_str(SEPARATOR)?;
        }
        f.write_str("   ")?;
        for file in File::ALL {
            write!(f, " {}", file)?;
            if file != File::H {
                f.write_str("  ")?;
            }
        }
        f.write_char('\n')
    }
}

/// Renders `board` as a boxed grid, rank 8 on top, white pieces in
/// uppercase.
///
/// # Errors
///
/// Refuses boards where pieces overlap or a side does not have exactly one
/// king.
pub fn render(board: &Board) -> Result<String, PositionError> {
    board.validate()?;
    Ok(Diagram(board).to_string())
}
