// src/move_log.rs
use crate::piece::{Piece, PieceId, PieceType, Variant};
use crate::position::Position;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::fmt;

/// An executed move. Only ever created by the board once a move has been committed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Move {
    piece: PieceId,
    variant: Variant,
    piece_type: PieceType,
    start: Position,
    end: Position,
    number: usize,
    alive: bool,
    captured: Option<PieceId>,
    timestamp: DateTime<Local>,
}

impl Move {
    pub fn piece(&self) -> PieceId { self.piece }
    /// Variant of the piece as it was when it moved (a promoting pawn logs as a pawn).
    pub fn variant(&self) -> Variant { self.variant }
    pub fn piece_type(&self) -> PieceType { self.piece_type }
    pub fn start(&self) -> Position { self.start }
    pub fn end(&self) -> Position { self.end }
    /// 1-based sequence number within the game.
    pub fn number(&self) -> usize { self.number }
    pub fn alive(&self) -> bool { self.alive }
    pub fn captured(&self) -> Option<PieceId> { self.captured }
    pub fn timestamp(&self) -> DateTime<Local> { self.timestamp }

    fn code(&self) -> String {
        format!("{}{}", self.piece.color.symbol(), self.piece_type.symbol())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.number,
            self.code(),
            self.start,
            self.end,
            self.alive
        )
    }
}

/// Append-only record of executed moves, oldest first.
#[derive(Debug, Clone, Default)]
pub struct MoveLog {
    moves: Vec<Move>,
}

impl MoveLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a move for `piece` (captured in its pre-move state) and returns the entry.
    /// Timestamps never go backwards even if the wall clock does.
    pub(crate) fn record(&mut self, piece: &Piece, start: Position, end: Position, captured: Option<PieceId>) -> &Move {
        let now = Local::now();
        let timestamp = match self.moves.last() {
            Some(prev) if prev.timestamp > now => prev.timestamp,
            _ => now,
        };
        self.moves.push(Move {
            piece: piece.id(),
            variant: piece.variant(),
            piece_type: piece.piece_type(),
            start,
            end,
            number: self.moves.len() + 1,
            alive: piece.is_alive(),
            captured,
            timestamp,
        });
        &self.moves[self.moves.len() - 1]
    }

    pub fn last(&self) -> Option<&Move> {
        self.moves.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

impl fmt::Display for MoveLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MOVE LOG ---------------------------------------------")?;
        writeln!(f, "Time\t\tNo.\tPiece\tStart\tEnd\tAlive")?;
        writeln!(f, "-----------------------------------------------------")?;
        for mv in &self.moves {
            writeln!(f, "{mv}")?;
        }
        Ok(())
    }
}
