// src/player.rs
use crate::board::{Board, MoveReport};
use crate::error::MoveError;
use crate::piece::{Color, PieceType};
use crate::position::Position;

/// One side of the match. Turns square pairs into board moves on its own pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    color: Color,
}

impl Player {
    pub fn new(color: Color) -> Self {
        Player { color }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Moves this player's piece standing on `from` to `to`.
    pub fn play_move(
        &self,
        board: &mut Board,
        from: Position,
        to: Position,
        promotion: Option<PieceType>,
    ) -> Result<MoveReport, MoveError> {
        if from == to {
            return Err(MoveError::SameSquare(from));
        }
        let piece = match board.piece_at(from) {
            Some(p) if p.color() == self.color => p.id(),
            Some(_) => return Err(MoveError::NotYourPiece(from)),
            None => return Err(MoveError::NoPieceAt(from)),
        };
        board.move_piece(piece, self.color, to, promotion)
    }
}
