// src/config.rs
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::Path;

pub const DEFAULT_DRAW_TOKEN: &str = "draw";
pub const DEFAULT_RESIGN_TOKEN: &str = "resign";
pub const DEFAULT_DRAW_OFFER_SUFFIX: &str = "draw?";

/// Per-match knobs. Every field has a default, so a config file may name only what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// A pawn reaching its last rank without a promotion letter becomes a Queen.
    pub auto_promote_queen: bool,
    /// Whole-input token that accepts a pending draw offer.
    pub draw_token: String,
    /// Whole-input token that resigns.
    pub resign_token: String,
    /// Third token of a move that offers a draw along with it.
    pub draw_offer_suffix: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            auto_promote_queen: true,
            draw_token: DEFAULT_DRAW_TOKEN.to_string(),
            resign_token: DEFAULT_RESIGN_TOKEN.to_string(),
            draw_offer_suffix: DEFAULT_DRAW_OFFER_SUFFIX.to_string(),
        }
    }
}

impl GameConfig {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let text = fs::read_to_string(path)?;
        Ok(Self::from_json(&text)?)
    }
}
