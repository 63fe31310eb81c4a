// src/input.rs
//! Move text grammar: `<from> <to> [draw?|Q|B|N|R]`, or a whole-input draw or resign token.

use crate::config::GameConfig;
use crate::error::InputError;
use crate::piece::PieceType;
use crate::position::Position;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref MOVE_TEXT: Regex = Regex::new(r"^([a-hA-H][1-8])\s+([a-hA-H][1-8])(?:\s+(\S+))?$")
        .expect("move pattern is valid");
}

/// What a line of input asks the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    Move { from: Position, to: Position, promotion: Option<PieceType>, offer_draw: bool },
    AcceptDraw,
    Resign,
}

/// What the most recently parsed input carried.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputFlags {
    pub valid_move: bool,
    pub with_draw: bool,
    pub with_promotion: bool,
}

impl Request {
    pub fn flags(&self) -> InputFlags {
        match *self {
            Request::Move { promotion, offer_draw, .. } => InputFlags {
                valid_move: true,
                with_draw: offer_draw,
                with_promotion: promotion.is_some(),
            },
            Request::AcceptDraw => InputFlags { with_draw: true, ..InputFlags::default() },
            Request::Resign => InputFlags::default(),
        }
    }
}

/// Parses one line of input. Tokens compare case-insensitively.
pub fn parse_request(input: &str, config: &GameConfig) -> Result<Request, InputError> {
    let trimmed = input.trim();
    if trimmed.eq_ignore_ascii_case(&config.draw_token) {
        return Ok(Request::AcceptDraw);
    }
    if trimmed.eq_ignore_ascii_case(&config.resign_token) {
        return Ok(Request::Resign);
    }

    let caps = MOVE_TEXT.captures(trimmed).ok_or_else(|| InputError::Malformed(trimmed.to_string()))?;
    let square = |i: usize| {
        caps.get(i)
            .and_then(|m| Position::from_algebraic(m.as_str()))
            .ok_or_else(|| InputError::Malformed(trimmed.to_string()))
    };
    let from = square(1)?;
    let to = square(2)?;

    let (promotion, offer_draw) = match caps.get(3).map(|m| m.as_str()) {
        None => (None, false),
        Some(token) if token.eq_ignore_ascii_case(&config.draw_offer_suffix) => (None, true),
        Some(token) => (Some(promotion_code(token)?), false),
    };
    Ok(Request::Move { from, to, promotion, offer_draw })
}

fn promotion_code(token: &str) -> Result<PieceType, InputError> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => PieceType::from_promotion_code(c).ok_or_else(|| InputError::InvalidPromotion(token.to_string())),
        _ => Err(InputError::InvalidPromotion(token.to_string())),
    }
}
