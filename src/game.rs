// src/game.rs
//! Turn state machine for one match.
//!
//! A [`Game`] owns the board and both players, accepts one request at a time and answers every
//! request with an [`Outcome`]. Once a terminal state is reached every later request gets
//! [`Outcome::GameOver`].

use crate::board::{Board, CheckStatus, MoveReport};
use crate::config::GameConfig;
use crate::error::{InputError, MoveError, Rejection};
use crate::input::{parse_request, InputFlags, Request};
use crate::move_log::{Move, MoveLog};
use crate::piece::{Color, PieceType, Variant};
use crate::player::Player;
use crate::position::{Position, BOARD_SIZE};
use log::{debug, info, warn};
use serde::Serialize;

// --- Results ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    Active,
    DrawPending { offered_by: Color },
    Resigned { winner: Color },
    Checkmated { winner: Color },
    Drawn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WinReason { Checkmate, Resignation }

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DrawReason { Agreement }

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameResult {
    Win(Color, WinReason),
    Draw(DrawReason),
}

/// Answer to `winner()`: a side, or a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Winner {
    Side(Color),
    Draw,
}

/// What happened to a submitted request.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The move was played and the game goes on.
    Accepted(MoveReport),
    /// Nothing changed; the same side should try again.
    Rejected(Rejection),
    /// The request ended the game, or the game had already ended.
    GameOver(GameResult),
}

// --- Snapshot ---

/// What a renderer needs to know about an occupied square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SquareView {
    pub variant: Variant,
    pub piece_type: PieceType,
    pub color: Color,
    pub alive: bool,
}

/// Occupancy grid indexed `[rank][file]`, rank 0 being White's home rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub squares: [[Option<SquareView>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Snapshot {
    fn of(board: &Board) -> Self {
        let mut squares = [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize];
        for position in Position::all() {
            squares[position.rank() as usize][position.file() as usize] = board.piece_at(position).map(|p| SquareView {
                variant: p.variant(),
                piece_type: p.piece_type(),
                color: p.color(),
                alive: p.is_alive(),
            });
        }
        Snapshot { squares }
    }

    pub fn get(&self, position: Position) -> Option<&SquareView> {
        self.squares[position.rank() as usize][position.file() as usize].as_ref()
    }
}

// --- Game ---

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    white: Player,
    black: Player,
    config: GameConfig,
    status: Status,
    turn: Color,
    promotion_pending: [bool; 2],
    last_input: InputFlags,
}

impl Game {
    /// Standard starting position, White to move.
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    pub fn with_config(config: GameConfig) -> Self {
        Game {
            board: Board::new(),
            white: Player::new(Color::White),
            black: Player::new(Color::Black),
            config,
            status: Status::Active,
            turn: Color::White,
            promotion_pending: [false; 2],
            last_input: InputFlags::default(),
        }
    }

    pub fn board(&self) -> &Board { &self.board }
    pub fn config(&self) -> &GameConfig { &self.config }
    pub fn status(&self) -> Status { self.status }
    pub fn turn(&self) -> Color { self.turn }
    pub fn last_input(&self) -> InputFlags { self.last_input }
    pub fn last_move(&self) -> Option<&Move> { self.board.last_move() }
    pub fn move_log(&self) -> &MoveLog { self.board.log() }

    /// Whether `color` was told to name a promotion piece and has not moved since.
    pub fn promotion_pending(&self, color: Color) -> bool {
        self.promotion_pending[color.index()]
    }

    pub fn is_active(&self) -> bool {
        matches!(self.status, Status::Active | Status::DrawPending { .. })
    }

    pub fn result(&self) -> Option<GameResult> {
        match self.status {
            Status::Active | Status::DrawPending { .. } => None,
            Status::Resigned { winner } => Some(GameResult::Win(winner, WinReason::Resignation)),
            Status::Checkmated { winner } => Some(GameResult::Win(winner, WinReason::Checkmate)),
            Status::Drawn => Some(GameResult::Draw(DrawReason::Agreement)),
        }
    }

    pub fn winner(&self) -> Option<Winner> {
        self.result().map(|result| match result {
            GameResult::Win(color, _) => Winner::Side(color),
            GameResult::Draw(_) => Winner::Draw,
        })
    }

    pub fn board_snapshot(&self) -> Snapshot {
        Snapshot::of(&self.board)
    }

    /// Whether moving the side-to-move's piece from `from` to `to` is a legal pawn advance onto
    /// the last rank, i.e. whether a promotion piece should be asked for.
    pub fn needs_promotion(&self, from: Position, to: Position) -> bool {
        match self.board.piece_at(from) {
            Some(piece) => {
                piece.is_pawn()
                    && piece.color() == self.turn
                    && to.rank() == piece.color().last_rank()
                    && self.board.is_move_legal(piece.id(), to)
            }
            None => false,
        }
    }

    fn player(&self, color: Color) -> Player {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    /// Parses one line of text and applies it.
    pub fn submit(&mut self, text: &str) -> Outcome {
        if let Some(result) = self.result() {
            return Outcome::GameOver(result);
        }
        let request = match parse_request(text, &self.config) {
            Ok(request) => request,
            Err(e) => {
                warn!("{} input rejected: {}", self.turn, e);
                self.last_input = InputFlags::default();
                return Outcome::Rejected(e.into());
            }
        };
        self.last_input = request.flags();
        match request {
            Request::Move { from, to, promotion, offer_draw } => self.submit_move(from, to, promotion, offer_draw),
            Request::AcceptDraw => self.accept_draw(),
            Request::Resign => self.resign(),
        }
    }

    /// Plays a move for the side to move, optionally offering a draw with it.
    pub fn submit_move(&mut self, from: Position, to: Position, promotion: Option<PieceType>, offer_draw: bool) -> Outcome {
        if let Some(result) = self.result() {
            return Outcome::GameOver(result);
        }
        let promotion = match promotion {
            None if self.config.auto_promote_queen && self.needs_promotion(from, to) => Some(PieceType::Queen),
            other => other,
        };

        let mover = self.turn;
        let report = match self.player(mover).play_move(&mut self.board, from, to, promotion) {
            Ok(report) => report,
            Err(e) => {
                if matches!(e, MoveError::PromotionRequired(_)) {
                    self.promotion_pending[mover.index()] = true;
                }
                warn!("{} move {} {} rejected: {}", mover, from, to, e);
                return Outcome::Rejected(e.into());
            }
        };
        self.promotion_pending[mover.index()] = false;

        if let CheckStatus::Checkmate { winner } = report.status {
            self.status = Status::Checkmated { winner };
            return Outcome::GameOver(GameResult::Win(winner, WinReason::Checkmate));
        }

        if offer_draw {
            info!("{} offers a draw", mover);
            self.status = Status::DrawPending { offered_by: mover };
        } else if let Status::DrawPending { offered_by } = self.status {
            debug!("draw offer from {} lapsed", offered_by);
            self.status = Status::Active;
        }
        self.turn = mover.opponent();
        Outcome::Accepted(report)
    }

    /// Accepts the opponent's pending draw offer.
    pub fn accept_draw(&mut self) -> Outcome {
        if let Some(result) = self.result() {
            return Outcome::GameOver(result);
        }
        match self.status {
            Status::DrawPending { offered_by } if offered_by != self.turn => {
                info!("{} accepts the draw offered by {}", self.turn, offered_by);
                self.status = Status::Drawn;
                Outcome::GameOver(GameResult::Draw(DrawReason::Agreement))
            }
            _ => {
                warn!("{} tried to accept a draw that was never offered", self.turn);
                Outcome::Rejected(InputError::NoDrawOffer.into())
            }
        }
    }

    /// The side to move gives up; the opponent wins.
    pub fn resign(&mut self) -> Outcome {
        if let Some(result) = self.result() {
            return Outcome::GameOver(result);
        }
        let winner = self.turn.opponent();
        info!("{} resigns, {} wins", self.turn, winner);
        self.status = Status::Resigned { winner };
        Outcome::GameOver(GameResult::Win(winner, WinReason::Resignation))
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
