// src/lib.rs
//! Two-player chess rules engine: board state, per-piece move legality, check and checkmate,
//! promotion, en passant and a move log, driven one request at a time through [`Game`].

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod move_log;
pub mod piece;
pub mod piece_set;
pub mod player;
pub mod position;

pub use board::{Board, CheckStatus, MoveReport};
pub use config::GameConfig;
pub use error::{InputError, MoveError, Rejection};
pub use game::{DrawReason, Game, GameResult, Outcome, Snapshot, SquareView, Status, WinReason, Winner};
pub use move_log::{Move, MoveLog};
pub use piece::{Color, Piece, PieceId, PieceType, Variant};
pub use piece_set::PieceSet;
pub use position::Position;

/// Standard starting position, White to move.
pub fn new_game() -> Game {
    Game::new()
}

/// Applies one line of move text (or a `draw`/`resign` token) to `game`.
pub fn submit(game: &mut Game, text: &str) -> Outcome {
    game.submit(text)
}

pub fn board_snapshot(game: &Game) -> Snapshot {
    game.board_snapshot()
}

pub fn is_active(game: &Game) -> bool {
    game.is_active()
}

pub fn winner(game: &Game) -> Option<Winner> {
    game.winner()
}

pub fn last_move(game: &Game) -> Option<&Move> {
    game.last_move()
}

/// Executed moves, oldest first.
pub fn move_log(game: &Game) -> Vec<&Move> {
    game.move_log().iter().collect()
}
