// src/position.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of files (and ranks) on the board.
pub const BOARD_SIZE: u8 = 8;

/// An immutable board coordinate. `file` 0-7 is a-h, `rank` 0-7 is 1-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    file: u8,
    rank: u8,
}

impl Position {
    /// Bounds-checked constructor. Returns `None` outside the 8x8 grid.
    pub fn new(file: u8, rank: u8) -> Option<Self> {
        if file < BOARD_SIZE && rank < BOARD_SIZE { Some(Position { file, rank }) } else { None }
    }

    /// Constructor for coordinates the caller already knows are on the board.
    pub(crate) const fn at(file: u8, rank: u8) -> Self {
        Position { file, rank }
    }

    pub fn file(&self) -> u8 { self.file }
    pub fn rank(&self) -> u8 { self.rank }

    /// Row-major index (a1 = 0, h8 = 63).
    pub fn index(&self) -> usize {
        self.rank as usize * BOARD_SIZE as usize + self.file as usize
    }

    /// Shifts the position by a signed file/rank delta, `None` if that leaves the board.
    pub fn offset(&self, d_file: i8, d_rank: i8) -> Option<Self> {
        let file = self.file as i8 + d_file;
        let rank = self.rank as i8 + d_rank;
        if (0..BOARD_SIZE as i8).contains(&file) && (0..BOARD_SIZE as i8).contains(&rank) {
            Some(Position { file: file as u8, rank: rank as u8 })
        } else {
            None
        }
    }

    /// Signed (file, rank) distance from `self` to `other`.
    pub fn delta(&self, other: Position) -> (i8, i8) {
        (other.file as i8 - self.file as i8, other.rank as i8 - self.rank as i8)
    }

    /// Squares strictly between `self` and `other` on a shared rank, file or diagonal.
    /// `None` when the two squares are equal or not aligned.
    pub fn squares_between(&self, other: Position) -> Option<Vec<Position>> {
        let (df, dr) = self.delta(other);
        let aligned = df == 0 || dr == 0 || df.abs() == dr.abs();
        if !aligned || (df == 0 && dr == 0) {
            return None;
        }
        let (step_f, step_r) = (df.signum(), dr.signum());
        let steps = df.abs().max(dr.abs());
        let mut squares = Vec::with_capacity(steps as usize);
        let mut current = *self;
        for _ in 1..steps {
            current = current.offset(step_f, step_r)?;
            squares.push(current);
        }
        Some(squares)
    }

    /// Parses algebraic notation such as `"e4"` (file letter is case-insensitive).
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let file_char = chars.next()?.to_ascii_lowercase();
        let rank_char = chars.next()?;
        if chars.next().is_some() { return None; }
        let file = match file_char { 'a'..='h' => file_char as u8 - b'a', _ => return None };
        let rank = match rank_char { '1'..='8' => rank_char as u8 - b'1', _ => return None };
        Some(Position { file, rank })
    }

    /// Iterates all 64 squares, rank by rank from a1.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|rank| (0..BOARD_SIZE).map(move |file| Position::at(file, rank)))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file) as char, (b'1' + self.rank) as char)
    }
}
