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

use core::num::NonZeroU32;

use tracing::debug;

use crate::{
    bitboard::Bitboard,
    board::Board,
    castling_side::{CastlingRights, CastlingSide},
    color::Color,
    errors::{ApplyError, PlayError, PositionError, PositionErrorKinds},
    legal,
    m::{Move, MoveList},
    movegen,
    role::Role,
    setup::Setup,
    square::{Rank, Square},
    types::Piece,
};

/// Everything needed to take back one [`Position::apply()`].
///
/// Only valid for the position it was returned from, and only until the
/// next move is applied to that position.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct UndoRecord {
    captured: Option<(Square, Piece)>,
    castling_rights: CastlingRights,
    ep_square: Option<Square>,
    halfmoves: u32,
    fullmoves: NonZeroU32,
}

impl UndoRecord {
    /// The captured piece and the square it was taken from. For en passant
    /// this is not the target square of the move.
    pub fn captured(&self) -> Option<(Square, Piece)> {
        self.captured
    }
}

/// A legal chess position.
///
/// # Examples
///
/// ```
/// use ferrochess::{Color, Position, Square};
///
/// let pos = Position::default();
/// assert_eq!(pos.legal_moves().len(), 20);
/// assert_eq!(pos.board().piece_at(Square::E1), Some(Color::White.king()));
/// assert_eq!(pos.turn(), Color::White);
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Position {
    board: Board,
    turn: Color,
    castling_rights: CastlingRights,
    ep_square: Option<Square>,
    halfmoves: u32,
    fullmoves: NonZeroU32,
}

impl Default for Position {
    fn default() -> Position {
        Position::new()
    }
}

impl Position {
    /// The standard starting position.
    pub fn new() -> Position {
        Position {
            board: Board::new(),
            turn: Color::White,
            castling_rights: CastlingRights::all(),
            ep_square: None,
            halfmoves: 0,
            fullmoves: NonZeroU32::MIN,
        }
    }

    /// Validates a [`Setup`] and turns it into a position.
    ///
    /// # Errors
    ///
    /// Returns a [`PositionError`] with every reason the setup is not a
    /// legal position.
    ///
    /// ```
    /// use ferrochess::{Board, Position, PositionErrorKinds, Setup};
    ///
    /// let setup = Setup {
    ///     board: Board::empty(),
    ///     ..Setup::default()
    /// };
    /// let err = Position::from_setup(setup).unwrap_err();
    /// assert!(err.kinds().contains(PositionErrorKinds::MISSING_KING));
    /// ```
    pub fn from_setup(setup: Setup) -> Result<Position, PositionError> {
        let board = setup.board;
        let turn = setup.turn;
        let mut kinds = board.problems();

        if board.pawns().intersects(Bitboard::BACKRANKS) {
            kinds |= PositionErrorKinds::PAWNS_ON_BACKRANK;
        }

        if Color::ALL
            .into_iter()
            .any(|color| has_too_much_material(&board, color))
        {
            kinds |= PositionErrorKinds::TOO_MUCH_MATERIAL;
        }

        for (color, side) in setup.castling_rights.sides() {
            if board.piece_at(CastlingSide::king_from(color)) != Some(color.king())
                || board.piece_at(side.rook_from(color)) != Some(color.rook())
            {
                kinds |= PositionErrorKinds::INVALID_CASTLING_RIGHTS;
            }
        }

        if let Some(ep_square) = setup.ep_square {
            let pushed_to = ep_square.with_rank(Rank::Fifth.relative_to(turn));
            let pushed_from = ep_square.with_rank(Rank::Seventh.relative_to(turn));
            if ep_square.rank() != Rank::Sixth.relative_to(turn)
                || board.piece_at(pushed_to) != Some((!turn).pawn())
                || board.occupied().contains(ep_square)
                || board.occupied().contains(pushed_from)
            {
                kinds |= PositionErrorKinds::INVALID_EP_SQUARE;
            }
        }

        let fullmoves = NonZeroU32::new(setup.fullmoves);
        if fullmoves.is_none() {
            kinds |= PositionErrorKinds::INVALID_FULLMOVES;
        }

        let board_ok = !kinds.intersects(
            PositionErrorKinds::OVERLAPPING_PIECES
                | PositionErrorKinds::MISSING_KING
                | PositionErrorKinds::TOO_MANY_KINGS,
        );
        if board_ok {
            if let Some(their_king) = board.king_of(!turn) {
                if board
                    .attacks_to(their_king, turn, board.occupied())
                    .is_any()
                {
                    kinds |= PositionErrorKinds::OPPOSITE_CHECK;
                }
            }
        }

        match fullmoves {
            Some(fullmoves) if kinds.is_empty() => Ok(Position {
                board,
                turn,
                castling_rights: setup.castling_rights,
                ep_square: setup.ep_square,
                halfmoves: setup.halfmoves,
                fullmoves,
            }),
            _ => {
                debug!(%kinds, "rejected setup");
                Err(PositionError { kinds })
            }
        }
    }

    /// Decomposes the position into its fields.
    pub fn to_setup(&self) -> Setup {
        Setup {
            board: self.board.clone(),
            turn: self.turn,
            castling_rights: self.castling_rights,
            ep_square: self.ep_square,
            halfmoves: self.halfmoves,
            fullmoves: self.fullmoves.get(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move.
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    /// Square passed over by a double pawn push on the previous move.
    #[inline]
    pub fn ep_square(&self) -> Option<Square> {
        self.ep_square
    }

    /// Number of half-moves since the last capture or pawn move.
    #[inline]
    pub fn halfmoves(&self) -> u32 {
        self.halfmoves
    }

    /// Current move number, starting at 1 and increased after every black
    /// move.
    #[inline]
    pub fn fullmoves(&self) -> NonZeroU32 {
        self.fullmoves
    }

    /// Pieces of the side to move.
    #[inline]
    pub fn us(&self) -> Bitboard {
        self.board.by_color(self.turn)
    }

    #[inline]
    pub fn our(&self, role: Role) -> Bitboard {
        self.board.by_piece(role.of(self.turn))
    }

    /// Pieces of the side not to move.
    #[inline]
    pub fn them(&self) -> Bitboard {
        self.board.by_color(!self.turn)
    }

    #[inline]
    pub fn their(&self, role: Role) -> Bitboard {
        self.board.by_piece(role.of(!self.turn))
    }

    /// Checks if `sq` is attacked by any piece of `attacker`.
    pub fn is_attacked(&self, sq: Square, attacker: Color) -> bool {
        self.board
            .attacks_to(sq, attacker, self.board.occupied())
            .is_any()
    }

    /// Pieces giving check to the side to move.
    pub fn checkers(&self) -> Bitboard {
        self.board.king_of(self.turn).map_or(Bitboard::EMPTY, |king| {
            self.board
                .attacks_to(king, !self.turn, self.board.occupied())
        })
    }

    #[inline]
    pub fn is_check(&self) -> bool {
        self.checkers().is_any()
    }

    /// Moves that follow the movement rules of the pieces, but may leave
    /// the own king in check.
    pub fn pseudo_legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        movegen::gen_pseudo_legal(self, &mut moves);
        moves
    }

    /// Generates all legal moves.
    ///
    /// ```
    /// use ferrochess::Position;
    ///
    /// let pos = Position::default();
    /// let moves = pos.legal_moves();
    /// assert_eq!(moves.iter().filter(|m| m.is_double_pawn_push()).count(), 8);
    /// ```
    pub fn legal_moves(&self) -> MoveList {
        let mut moves = self.pseudo_legal_moves();
        legal::filter_legal(self, &mut moves);
        moves
    }

    /// Checks if `m` is among the legal moves.
    pub fn is_legal(&self, m: Move) -> bool {
        self.legal_moves().contains(&m)
    }

    /// Plays a legal move.
    ///
    /// # Errors
    ///
    /// Returns a [`PlayError`] holding the unchanged position if `m` is
    /// not legal.
    pub fn play(self, m: Move) -> Result<Position, PlayError> {
        if !self.is_legal(m) {
            return Err(PlayError { m, position: self });
        }
        let mut pos = self;
        match pos.apply(m) {
            Ok(_) => Ok(pos),
            Err(_) => Err(PlayError { m, position: pos }),
        }
    }

    /// Checks that `m` can be carried out on this board without breaking
    /// its invariants, and finds the piece it captures.
    fn validate_move(&self, m: Move) -> Result<Option<(Square, Piece)>, ApplyError> {
        let from = m.from();
        let to = m.to();

        let piece = self
            .board
            .piece_at(from)
            .ok_or(ApplyError::EmptyOrigin { from })?;
        if piece.color != self.turn {
            return Err(ApplyError::WrongColor { from });
        }
        if piece.role != m.role() {
            return Err(ApplyError::RoleMismatch { from });
        }

        if let Some(side) = m.castling_side() {
            if from != CastlingSide::king_from(self.turn)
                || to != side.king_to(self.turn)
                || !self.castling_rights.has(self.turn, side)
                || self.board.piece_at(side.rook_from(self.turn)) != Some(self.turn.rook())
            {
                return Err(ApplyError::MissingCastlingRook);
            }
            if self.board.occupied().intersects(side.path(self.turn)) {
                return Err(ApplyError::CastlingPathBlocked);
            }
            return Ok(None);
        }

        match m.promotion() {
            Some(promotion) => {
                if m.role() != Role::Pawn
                    || to.rank() != self.turn.promotion_rank()
                    || !promotion.is_promotion_target()
                {
                    return Err(ApplyError::InvalidPromotion);
                }
            }
            None => {
                if m.role() == Role::Pawn && to.rank() == self.turn.promotion_rank() {
                    return Err(ApplyError::MissingPromotion);
                }
            }
        }

        let target = self.board.piece_at(to);
        if let Some(target) = target {
            if target.color == self.turn {
                return Err(ApplyError::SelfCapture { to });
            }
            if target.role == Role::King {
                return Err(ApplyError::KingCapture { to });
            }
        }

        if m.is_en_passant() {
            let capture_square = to.with_rank(from.rank());
            let captured = (!self.turn).pawn();
            if m.role() != Role::Pawn
                || self.ep_square != Some(to)
                || target.is_some()
                || self.board.piece_at(capture_square) != Some(captured)
            {
                return Err(ApplyError::MissingEnPassantPawn { to });
            }
            return Ok(Some((capture_square, captured)));
        }

        match (m.is_capture(), target) {
            (true, Some(target)) => Ok(Some((to, target))),
            (false, None) => Ok(None),
            _ => Err(ApplyError::CaptureMismatch { to }),
        }
    }

    /// Applies `m` in place and returns what is needed to take it back.
    ///
    /// The move is not checked for legality, only for consistency with the
    /// board: the moved piece must be there, captures must capture, and so
    /// on.
    ///
    /// # Errors
    ///
    /// Returns an [`ApplyError`] if the move does not fit the position.
    /// The position is not modified in that case.
    ///
    /// ```
    /// use ferrochess::{Position, Role, Move, Square};
    ///
    /// let mut pos = Position::default();
    /// let before = pos.clone();
    /// let m = Move::quiet(Role::Knight, Square::G1, Square::F3);
    /// let undo = pos.apply(m)?;
    /// assert_ne!(pos, before);
    /// pos.unmake(m, undo);
    /// assert_eq!(pos, before);
    /// # Ok::<_, ferrochess::ApplyError>(())
    /// ```
    pub fn apply(&mut self, m: Move) -> Result<UndoRecord, ApplyError> {
        let captured = self.validate_move(m).map_err(|err| {
            debug!(m = %m, %err, "rejected move");
            err
        })?;

        let undo = UndoRecord {
            captured,
            castling_rights: self.castling_rights,
            ep_square: self.ep_square,
            halfmoves: self.halfmoves,
            fullmoves: self.fullmoves,
        };

        let turn = self.turn;
        let from = m.from();
        let to = m.to();

        if let Some(side) = m.castling_side() {
            self.board.remove_piece_at(from);
            self.board.remove_piece_at(side.rook_from(turn));
            self.board.set_piece_at(to, turn.king());
            self.board.set_piece_at(side.rook_to(turn), turn.rook());
        } else {
            if let Some((capture_square, _)) = captured {
                self.board.remove_piece_at(capture_square);
            }
            self.board.remove_piece_at(from);
            let role = m.promotion().unwrap_or(m.role());
            self.board.set_piece_at(to, role.of(turn));
        }

        self.castling_rights -= CastlingRights::touched(from) | CastlingRights::touched(to);

        self.ep_square = if m.role() == Role::Pawn && from.rank().distance(to.rank()) == 2 {
            from.offset(turn.forward())
        } else {
            None
        };

        if m.is_zeroing() {
            self.halfmoves = 0;
        } else {
            self.halfmoves = self.halfmoves.saturating_add(1);
        }

        if turn == Color::Black {
            self.fullmoves = self.fullmoves.saturating_add(1);
        }

        self.turn = !turn;

        Ok(undo)
    }

    /// Takes back `m`, which must be the last move applied to this position,
    /// with the record returned by that [`Position::apply()`].
    ///
    /// Moves must be taken back in the reverse order they were applied in.
    /// The position is left in an unspecified (but memory safe) state if
    /// this is violated.
    pub fn unmake(&mut self, m: Move, undo: UndoRecord) {
        let turn = !self.turn;
        let from = m.from();
        let to = m.to();

        if let Some(side) = m.castling_side() {
            self.board.remove_piece_at(to);
            self.board.remove_piece_at(side.rook_to(turn));
            self.board.set_piece_at(from, turn.king());
            self.board.set_piece_at(side.rook_from(turn), turn.rook());
        } else {
            self.board.remove_piece_at(to);
            self.board.set_piece_at(from, m.role().of(turn));
            if let Some((capture_square, piece)) = undo.captured {
                self.board.set_piece_at(capture_square, piece);
            }
        }

        self.turn = turn;
        self.castling_rights = undo.castling_rights;
        self.ep_square = undo.ep_square;
        self.halfmoves = undo.halfmoves;
        self.fullmoves = undo.fullmoves;
    }
}

/// More pieces than a side can have in a game from the starting position,
/// counting promoted pieces against missing pawns.
fn has_too_much_material(board: &Board, color: Color) -> bool {
    let ours = board.by_color(color);
    let pawns = (board.pawns() & ours).count();
    if ours.count() > 16 || pawns > 8 {
        return true;
    }

    let bishops = board.bishops() & ours;
    let promoted = (board.knights() & ours).count().saturating_sub(2)
        + (bishops & Bitboard::LIGHT_SQUARES).count().saturating_sub(1)
        + (bishops & Bitboard::DARK_SQUARES).count().saturating_sub(1)
        + (board.rooks() & ours).count().saturating_sub(2)
        + (board.queens() & ours).count().saturating_sub(1);
    promoted > 8 - pawns
}
