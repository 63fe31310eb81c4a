// src/error.rs
//! Error taxonomy for the rules engine.
//!
//! Ordinary rule violations never panic: they come back as one of these values and leave the
//! board untouched. `InputError` covers text that could not be understood, `MoveError` covers
//! requests that were understood but are not allowed, and `Rejection` is what the game hands
//! back to its caller.

use crate::piece::{Color, PieceId, PieceType};
use crate::position::Position;
use thiserror::Error;

/// The move text (or command) could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("invalid input '{0}', expected '<from> <to> [draw?|Q|B|N|R]', 'draw' or 'resign'")]
    Malformed(String),

    #[error("invalid promotion '{0}', use Q, B, N or R")]
    InvalidPromotion(String),

    #[error("there is no draw offer from the opponent to accept")]
    NoDrawOffer,
}

/// A parsed move request that the rules do not allow.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("no piece at {0}")]
    NoPieceAt(Position),

    #[error("the piece at {0} belongs to the opponent")]
    NotYourPiece(Position),

    #[error("a piece cannot move to the square it already occupies ({0})")]
    SameSquare(Position),

    #[error("{piece} cannot move from {from} to {to}")]
    IllegalMove { piece: String, from: Position, to: Position },

    #[error("{0:?} is in check and only the king may move out of it")]
    MustEscapeCheck(Color),

    #[error("moving to {0} would leave the king in check")]
    LeavesKingInCheck(Position),

    #[error("a pawn reaching {0} must name its promotion piece")]
    PromotionRequired(Position),

    #[error("a pawn cannot promote to {0:?}")]
    InvalidPromotion(PieceType),

    #[error("{0:?} does not belong to the {1:?} piece set")]
    IntegrityViolation(PieceId, Color),

    #[error("{0:?} has been captured and cannot move")]
    DeadPiece(PieceId),

    #[error("the board is closed after checkmate")]
    BoardClosed,
}

/// Why a submission to a game was turned down. Nothing changes when this is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("{0}, try again")]
    Input(#[from] InputError),

    #[error("illegal move: {0}, try again")]
    Illegal(#[from] MoveError),
}
