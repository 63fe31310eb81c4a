// src/board.rs
//! The 8x8 grid, both piece sets and move execution.
//!
//! Cells hold [`PieceId`] handles into the two [`PieceSet`]s. Every move is tried on a clone of
//! [`BoardState`] and only swapped in once the mover's king is known to be safe, so a rejected move
//! never leaves a trace.

use crate::error::MoveError;
use crate::move_log::{Move, MoveLog};
use crate::piece::{Color, Piece, PieceId, PieceType, Variant};
use crate::piece_set::PieceSet;
use crate::position::{Position, BOARD_SIZE};
use log::{debug, error, info};
use std::fmt;

const CELL_COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

// --- Cells and occupancy ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cell {
    position: Position,
    occupant: Option<PieceId>,
}

/// Occupancy plus piece sets, without history. Cheap to clone for trial moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    cells: [Cell; CELL_COUNT],
    sets: [PieceSet; 2],
}

impl BoardState {
    /// Standard starting position.
    pub fn new() -> Self {
        let mut state = BoardState {
            cells: std::array::from_fn(|i| Cell {
                position: Position::at((i % BOARD_SIZE as usize) as u8, (i / BOARD_SIZE as usize) as u8),
                occupant: None,
            }),
            sets: [PieceSet::new(Color::White), PieceSet::new(Color::Black)],
        };
        state.sync_cells();
        state
    }

    /// Rebuilds cell occupancy from the live pieces.
    fn sync_cells(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.occupant = None;
        }
        for set in &self.sets {
            for piece in set.alive() {
                self.cells[piece.position().index()].occupant = Some(piece.id());
            }
        }
    }

    pub fn set(&self, color: Color) -> &PieceSet {
        &self.sets[color.index()]
    }

    pub(crate) fn set_mut(&mut self, color: Color) -> &mut PieceSet {
        &mut self.sets[color.index()]
    }

    pub fn piece(&self, id: PieceId) -> &Piece {
        self.set(id.color).get(id.slot)
    }

    pub(crate) fn piece_mut(&mut self, id: PieceId) -> &mut Piece {
        self.set_mut(id.color).get_mut(id.slot)
    }

    /// The piece whose handle sits in the cell at `position`.
    pub fn occupant(&self, position: Position) -> Option<&Piece> {
        self.cells[position.index()].occupant.map(|id| self.piece(id))
    }

    /// Whether every square strictly between `from` and `to` is empty. False when the two
    /// squares do not share a rank, file or diagonal.
    pub fn path_clear(&self, from: Position, to: Position) -> bool {
        from.squares_between(to)
            .is_some_and(|between| between.iter().all(|sq| self.cells[sq.index()].occupant.is_none()))
    }

    /// Whether a `color` king standing on `square` would be attacked by any live enemy piece
    /// other than the enemy king.
    pub fn is_king_safe(&self, color: Color, square: Position) -> bool {
        !self
            .set(color.opponent())
            .alive()
            .filter(|p| !p.is_king())
            .any(|p| p.attacks(self, square))
    }

    /// Moves a piece and its cell handle together. The destination must already be empty.
    fn relocate(&mut self, id: PieceId, to: Position) {
        let from = self.piece(id).position();
        self.cells[from.index()].occupant = None;
        self.cells[to.index()].occupant = Some(id);
        self.piece_mut(id).set_position(to);
    }

    /// Kills whatever stands on `position` and empties the cell.
    fn capture_at(&mut self, position: Position) -> Option<PieceId> {
        let victim = self.cells[position.index()].occupant.take()?;
        self.piece_mut(victim).kill();
        Some(victim)
    }

    fn capture_piece(&mut self, id: PieceId) {
        let at = self.piece(id).position();
        if self.cells[at.index()].occupant == Some(id) {
            self.cells[at.index()].occupant = None;
        }
        self.piece_mut(id).kill();
    }

    fn expire_en_passant(&mut self) {
        for set in self.sets.iter_mut() {
            for slot in Variant::ALL {
                set.get_mut(slot).expire_en_passant();
            }
        }
    }

    /// A board holding only the listed pieces; every other slot is dead. Pawns off their
    /// starting rank have already used their double step.
    #[cfg(test)]
    pub(crate) fn arranged(pieces: &[(Color, Variant, Position)]) -> Self {
        let mut state = BoardState::new();
        for color in [Color::White, Color::Black] {
            for slot in Variant::ALL {
                state.set_mut(color).get_mut(slot).kill();
            }
        }
        for &(color, variant, position) in pieces {
            let mut piece = Piece::new(color, variant, position);
            if position.rank() != color.pawn_rank() {
                piece.mark_moved();
            }
            *state.set_mut(color).get_mut(variant) = piece;
        }
        state.sync_cells();
        state
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

// --- Board ---

/// The cached check on one side: which king is attacked and where it may go.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Check {
    color: Color,
    escapes: Vec<Position>,
}

/// What a committed move did to the opposing king.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Clear,
    Check(Color),
    Checkmate { winner: Color },
}

/// Everything a caller needs to know about a committed move.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveReport {
    pub mv: Move,
    pub captured: Option<PieceId>,
    pub promoted: Option<Variant>,
    pub status: CheckStatus,
}

#[derive(Debug, Clone)]
pub struct Board {
    state: BoardState,
    log: MoveLog,
    check: Option<Check>,
    winner: Option<Color>,
}

impl Board {
    pub fn new() -> Self {
        Board { state: BoardState::new(), log: MoveLog::new(), check: None, winner: None }
    }

    #[cfg(test)]
    pub(crate) fn from_state(state: BoardState) -> Self {
        Board { state, log: MoveLog::new(), check: None, winner: None }
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// Bounds-checked square lookup.
    pub fn position(&self, file: u8, rank: u8) -> Option<Position> {
        Position::new(file, rank)
    }

    pub fn piece_at(&self, position: Position) -> Option<&Piece> {
        self.state.occupant(position)
    }

    pub fn piece(&self, id: PieceId) -> &Piece {
        self.state.piece(id)
    }

    pub fn set(&self, color: Color) -> &PieceSet {
        self.state.set(color)
    }

    pub fn log(&self) -> &MoveLog {
        &self.log
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.log.last()
    }

    /// Color of the side that delivered checkmate, once the board is closed.
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    /// Side whose king is currently in check, if any.
    pub fn in_check(&self) -> Option<Color> {
        self.check.as_ref().map(|c| c.color)
    }

    /// Squares the checked king may move to. Empty when nobody is in check.
    pub fn escape_squares(&self) -> &[Position] {
        self.check.as_ref().map(|c| c.escapes.as_slice()).unwrap_or(&[])
    }

    /// Whether `piece` could legally be asked to move to `destination` right now, ignoring
    /// king safety and promotion. Pure.
    pub fn is_move_legal(&self, piece: PieceId, destination: Position) -> bool {
        self.state.piece(piece).can_move_to(&self.state, self.log.last(), destination)
    }

    /// Executes a move for `piece` on behalf of the `owner` set.
    ///
    /// Capture, en passant and promotion are applied to a trial copy first; the copy replaces the
    /// live state only once the owner's king is safe on it. Any `Err` leaves the board unchanged.
    pub fn move_piece(
        &mut self,
        piece: PieceId,
        owner: Color,
        destination: Position,
        promotion: Option<PieceType>,
    ) -> Result<MoveReport, MoveError> {
        if self.winner.is_some() {
            return Err(MoveError::BoardClosed);
        }
        if piece.color != owner {
            error!("integrity violation: {:?} submitted for the {} set", piece, owner);
            return Err(MoveError::IntegrityViolation(piece, owner));
        }
        let mover = *self.state.piece(piece);
        if !mover.is_alive() {
            return Err(MoveError::DeadPiece(piece));
        }
        let origin = mover.position();
        if origin == destination {
            return Err(MoveError::SameSquare(destination));
        }

        let last = self.log.last();
        if !mover.can_move_to(&self.state, last, destination) {
            return Err(MoveError::IllegalMove { piece: mover.identifier(), from: origin, to: destination });
        }
        if let Some(check) = &self.check {
            if check.color == owner && !(mover.is_king() && check.escapes.contains(&destination)) {
                return Err(MoveError::MustEscapeCheck(owner));
            }
        }

        // Trial: capture, relocate, promote.
        let mut trial = self.state.clone();
        let captured = match mover.en_passant_victim(&self.state, last, destination) {
            Some(victim) => {
                trial.capture_piece(victim);
                Some(victim)
            }
            None => trial.capture_at(destination),
        };
        trial.relocate(piece, destination);

        let mut promoted = None;
        if mover.is_pawn() && destination.rank() == owner.last_rank() {
            let requested = promotion.ok_or(MoveError::PromotionRequired(destination))?;
            promoted = Some(trial.set_mut(owner).promote_pawn(piece.slot, requested)?.variant());
        }

        let king = trial.set(owner).king();
        if king.is_alive() && !trial.is_king_safe(owner, king.position()) {
            return Err(MoveError::LeavesKingInCheck(destination));
        }

        // Commit.
        trial.expire_en_passant();
        trial.piece_mut(piece).record_move(origin, destination);
        self.state = trial;
        self.check = None;
        let mv = self.log.record(&mover, origin, destination, captured).clone();
        debug!("move {}: {} {} -> {}", mv.number(), mover.identifier(), origin, destination);
        if let Some(victim) = captured {
            debug!("captured {}", self.state.piece(victim).identifier());
        }
        if let Some(variant) = promoted {
            info!("{} promoted to {:?} on {}", mover.identifier(), variant, destination);
        }

        let status = match captured {
            Some(victim) if victim == PieceId::new(owner.opponent(), Variant::King) => {
                info!("{} captured the {} king and wins", owner, owner.opponent());
                self.winner = Some(owner);
                CheckStatus::Checkmate { winner: owner }
            }
            _ => self.evaluate_check(owner),
        };
        Ok(MoveReport { mv, captured, promoted, status })
    }

    /// Looks at the opposing king after `mover` has moved and caches the result.
    fn evaluate_check(&mut self, mover: Color) -> CheckStatus {
        let defender = mover.opponent();
        let king = *self.state.set(defender).king();
        if !king.is_alive() || self.state.is_king_safe(defender, king.position()) {
            return CheckStatus::Clear;
        }
        let escapes = self.king_escapes(defender);
        if escapes.is_empty() {
            info!("checkmate: {} wins", mover);
            self.winner = Some(mover);
            CheckStatus::Checkmate { winner: mover }
        } else {
            info!("{} is in check, escapes: {:?}", defender, escapes);
            self.check = Some(Check { color: defender, escapes });
            CheckStatus::Check(defender)
        }
    }

    /// The adjacent squares the `color` king may legally step to and be safe on.
    fn king_escapes(&self, color: Color) -> Vec<Position> {
        let king = *self.state.set(color).king();
        let mut escapes = Vec::new();
        for d_file in -1..=1 {
            for d_rank in -1..=1 {
                let Some(square) = king.position().offset(d_file, d_rank) else { continue };
                if !king.can_move_to(&self.state, None, square) {
                    continue;
                }
                let mut trial = self.state.clone();
                trial.capture_at(square);
                trial.relocate(king.id(), square);
                if trial.is_king_safe(color, square) {
                    escapes.push(square);
                }
            }
        }
        escapes
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..BOARD_SIZE).rev() {
            for file in 0..BOARD_SIZE {
                let cell = &self.state.cells[Position::at(file, rank).index()];
                match cell.occupant {
                    Some(id) => write!(f, "{} ", self.state.piece(id))?,
                    None if (cell.position.file() + cell.position.rank()) % 2 == 0 => write!(f, "## ")?,
                    None => write!(f, "   ")?,
                }
            }
            writeln!(f, "{}", rank + 1)?;
        }
        writeln!(f, " a  b  c  d  e  f  g  h")
    }
}
