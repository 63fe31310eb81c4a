// src/piece.rs
//! Pieces and their movement rules.
//!
//! A [`Piece`] is a plain value owned by a [`PieceSet`](crate::piece_set::PieceSet). Cells on the
//! board refer to it through a [`PieceId`] (color + slot), never by pointer. Legality is a closed
//! match over [`PieceKind`], one rule per shape.

use crate::board::BoardState;
use crate::move_log::Move;
use crate::position::{Position, BOARD_SIZE};
use serde::{Deserialize, Serialize};
use std::fmt;

// --- Colors and shapes ---

#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Color { White, Black }

impl Color {
    pub fn opponent(&self) -> Color {
        match self { Color::White => Color::Black, Color::Black => Color::White }
    }

    /// Helper for per-color arrays.
    pub fn index(&self) -> usize {
        match self { Color::White => 0, Color::Black => 1 }
    }

    /// Rank direction a pawn of this color advances in.
    pub fn forward(&self) -> i8 {
        match self { Color::White => 1, Color::Black => -1 }
    }

    /// Rank holding the king and the other back-row pieces at the start.
    pub fn home_rank(&self) -> u8 {
        match self { Color::White => 0, Color::Black => BOARD_SIZE - 1 }
    }

    pub fn pawn_rank(&self) -> u8 {
        match self { Color::White => 1, Color::Black => BOARD_SIZE - 2 }
    }

    /// Rank on which a pawn of this color promotes.
    pub fn last_rank(&self) -> u8 {
        self.opponent().home_rank()
    }

    /// Rank a pawn of this color must stand on to capture en passant.
    pub fn en_passant_rank(&self) -> u8 {
        match self { Color::White => 4, Color::Black => 3 }
    }

    pub fn symbol(&self) -> char {
        match self { Color::White => 'w', Color::Black => 'b' }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self { Color::White => write!(f, "White"), Color::Black => write!(f, "Black") }
    }
}

/// Color-agnostic shape of a piece.
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PieceType { Pawn, Knight, Bishop, Rook, Queen, King }

impl PieceType {
    /// Maps a promotion letter (Q, B, N, R in either case) to the shape it names.
    pub fn from_promotion_code(code: char) -> Option<PieceType> {
        match code.to_ascii_uppercase() {
            'Q' => Some(PieceType::Queen),
            'B' => Some(PieceType::Bishop),
            'N' => Some(PieceType::Knight),
            'R' => Some(PieceType::Rook),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            PieceType::Pawn => 'P', PieceType::Knight => 'N', PieceType::Bishop => 'B',
            PieceType::Rook => 'R', PieceType::Queen => 'Q', PieceType::King => 'K',
        }
    }
}

// --- Variants (slot identities) ---

/// Concrete identity of a piece within its set. The left/right and per-file distinctions tell
/// promotion which handedness to hand out.
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Variant {
    King,
    Queen,
    BishopLeft,
    BishopRight,
    KnightLeft,
    KnightRight,
    RookLeft,
    RookRight,
    Pawn0,
    Pawn1,
    Pawn2,
    Pawn3,
    Pawn4,
    Pawn5,
    Pawn6,
    Pawn7,
}

impl Variant {
    /// Slot order inside a piece set.
    pub const ALL: [Variant; 16] = [
        Variant::King, Variant::Queen,
        Variant::BishopLeft, Variant::BishopRight,
        Variant::KnightLeft, Variant::KnightRight,
        Variant::RookLeft, Variant::RookRight,
        Variant::Pawn0, Variant::Pawn1, Variant::Pawn2, Variant::Pawn3,
        Variant::Pawn4, Variant::Pawn5, Variant::Pawn6, Variant::Pawn7,
    ];

    pub fn slot(&self) -> usize {
        *self as usize
    }

    pub fn piece_type(&self) -> PieceType {
        match self {
            Variant::King => PieceType::King,
            Variant::Queen => PieceType::Queen,
            Variant::BishopLeft | Variant::BishopRight => PieceType::Bishop,
            Variant::KnightLeft | Variant::KnightRight => PieceType::Knight,
            Variant::RookLeft | Variant::RookRight => PieceType::Rook,
            _ => PieceType::Pawn,
        }
    }

    /// File a pawn variant starts on.
    pub fn pawn_file(&self) -> Option<u8> {
        match self {
            Variant::Pawn0 => Some(0), Variant::Pawn1 => Some(1),
            Variant::Pawn2 => Some(2), Variant::Pawn3 => Some(3),
            Variant::Pawn4 => Some(4), Variant::Pawn5 => Some(5),
            Variant::Pawn6 => Some(6), Variant::Pawn7 => Some(7),
            _ => None,
        }
    }

    /// Starting file of every variant.
    pub fn home_file(&self) -> u8 {
        match self {
            Variant::RookLeft => 0,
            Variant::KnightLeft => 1,
            Variant::BishopLeft => 2,
            Variant::Queen => 3,
            Variant::King => 4,
            Variant::BishopRight => 5,
            Variant::KnightRight => 6,
            Variant::RookRight => 7,
            pawn => pawn.pawn_file().unwrap_or(0),
        }
    }

    /// Queen-side (left) half of the board; pawns 0-3 and the left-hand pieces.
    pub fn is_left_side(&self) -> bool {
        self.home_file() < BOARD_SIZE / 2
    }

    /// The variant a pawn of this slot becomes when promoting to `target`.
    /// `None` when `self` is not a pawn or `target` is not a promotion shape.
    pub fn promoted(&self, target: PieceType) -> Option<Variant> {
        self.pawn_file()?;
        let left = self.is_left_side();
        match target {
            PieceType::Queen => Some(Variant::Queen),
            PieceType::Bishop => Some(if left { Variant::BishopLeft } else { Variant::BishopRight }),
            PieceType::Knight => Some(if left { Variant::KnightLeft } else { Variant::KnightRight }),
            PieceType::Rook => Some(if left { Variant::RookLeft } else { Variant::RookRight }),
            PieceType::Pawn | PieceType::King => None,
        }
    }

    fn description(&self) -> String {
        match self {
            Variant::King => "King".to_string(),
            Variant::Queen => "Queen".to_string(),
            Variant::BishopLeft => "Bishop (left)".to_string(),
            Variant::BishopRight => "Bishop (right)".to_string(),
            Variant::KnightLeft => "Knight (left)".to_string(),
            Variant::KnightRight => "Knight (right)".to_string(),
            Variant::RookLeft => "Rook (left)".to_string(),
            Variant::RookRight => "Rook (right)".to_string(),
            pawn => format!("Pawn ({})", pawn.home_file() + 1),
        }
    }
}

/// Handle to a slot in one of the two piece sets.
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PieceId {
    pub color: Color,
    pub slot: Variant,
}

impl PieceId {
    pub fn new(color: Color, slot: Variant) -> Self { PieceId { color, slot } }
}

// --- Pieces ---

/// Shape plus the per-shape state the movement rules need.
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq)]
pub enum PieceKind {
    Pawn { first_move: bool, en_passant_eligible: bool },
    /// Castling is not implemented; the flag is never consumed.
    Rook { can_castle: bool },
    Knight,
    Bishop,
    Queen,
    /// Castling is not implemented; the flag is never consumed.
    King { castled: bool },
}

impl PieceKind {
    fn fresh(piece_type: PieceType) -> Self {
        match piece_type {
            PieceType::Pawn => PieceKind::Pawn { first_move: true, en_passant_eligible: false },
            PieceType::Rook => PieceKind::Rook { can_castle: true },
            PieceType::Knight => PieceKind::Knight,
            PieceType::Bishop => PieceKind::Bishop,
            PieceType::Queen => PieceKind::Queen,
            PieceType::King => PieceKind::King { castled: false },
        }
    }

    pub fn piece_type(&self) -> PieceType {
        match self {
            PieceKind::Pawn { .. } => PieceType::Pawn,
            PieceKind::Rook { .. } => PieceType::Rook,
            PieceKind::Knight => PieceType::Knight,
            PieceKind::Bishop => PieceType::Bishop,
            PieceKind::Queen => PieceType::Queen,
            PieceKind::King { .. } => PieceType::King,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq)]
pub struct Piece {
    color: Color,
    slot: Variant,
    variant: Variant,
    alive: bool,
    position: Position,
    kind: PieceKind,
}

impl Piece {
    /// A live piece of `variant` occupying its own slot.
    pub(crate) fn new(color: Color, variant: Variant, position: Position) -> Self {
        Piece {
            color,
            slot: variant,
            variant,
            alive: true,
            position,
            kind: PieceKind::fresh(variant.piece_type()),
        }
    }

    /// The replacement for a promoting pawn: same slot and square, new variant.
    pub(crate) fn promoted_from(pawn: &Piece, variant: Variant) -> Self {
        Piece {
            color: pawn.color,
            slot: pawn.slot,
            variant,
            alive: true,
            position: pawn.position,
            kind: PieceKind::fresh(variant.piece_type()),
        }
    }

    pub fn id(&self) -> PieceId { PieceId::new(self.color, self.slot) }
    pub fn color(&self) -> Color { self.color }
    pub fn slot(&self) -> Variant { self.slot }
    pub fn variant(&self) -> Variant { self.variant }
    pub fn kind(&self) -> PieceKind { self.kind }
    pub fn piece_type(&self) -> PieceType { self.kind.piece_type() }
    pub fn is_alive(&self) -> bool { self.alive }
    /// Last square the piece stood on; kept after capture for display.
    pub fn position(&self) -> Position { self.position }
    pub fn is_pawn(&self) -> bool { self.piece_type() == PieceType::Pawn }
    pub fn is_king(&self) -> bool { self.piece_type() == PieceType::King }

    pub fn has_first_move(&self) -> bool {
        matches!(self.kind, PieceKind::Pawn { first_move: true, .. })
    }

    /// Whether this pawn just advanced two squares and may be taken en passant.
    pub fn en_passant_eligible(&self) -> bool {
        matches!(self.kind, PieceKind::Pawn { en_passant_eligible: true, .. })
    }

    /// Long name, e.g. "White Bishop (left)".
    pub fn identifier(&self) -> String {
        format!("{} {}", self.color, self.variant.description())
    }

    pub(crate) fn kill(&mut self) { self.alive = false; }
    pub(crate) fn set_position(&mut self, position: Position) { self.position = position; }

    /// Bookkeeping after this piece completed a move from `from` to `to`.
    pub(crate) fn record_move(&mut self, from: Position, to: Position) {
        if let PieceKind::Pawn { first_move, en_passant_eligible } = &mut self.kind {
            *first_move = false;
            *en_passant_eligible = from.delta(to).1.abs() == 2;
        }
    }

    /// Drops a pawn's double-step right without touching en passant state.
    #[cfg(test)]
    pub(crate) fn mark_moved(&mut self) {
        if let PieceKind::Pawn { first_move, .. } = &mut self.kind {
            *first_move = false;
        }
    }

    /// Clears en passant eligibility once the opponent has had its chance.
    pub(crate) fn expire_en_passant(&mut self) {
        if let PieceKind::Pawn { en_passant_eligible, .. } = &mut self.kind {
            *en_passant_eligible = false;
        }
    }

    // --- Legality ---

    /// Whether moving from the current square to `destination` obeys this piece's rule on
    /// `state`. `last_move` is only consulted for en passant. Pure: nothing is captured here.
    pub(crate) fn can_move_to(&self, state: &BoardState, last_move: Option<&Move>, destination: Position) -> bool {
        if !self.alive || destination == self.position {
            return false;
        }
        if let Some(occupant) = state.occupant(destination) {
            if occupant.color == self.color {
                return false;
            }
        }
        match self.kind {
            PieceKind::Pawn { first_move, .. } => {
                self.pawn_advance(state, destination, first_move)
                    || self.pawn_capture(state, destination)
                    || self.en_passant_victim(state, last_move, destination).is_some()
            }
            PieceKind::Rook { .. } => self.rook_reach(state, destination),
            PieceKind::Bishop => self.bishop_reach(state, destination),
            PieceKind::Queen => self.rook_reach(state, destination) || self.bishop_reach(state, destination),
            PieceKind::Knight => self.knight_reach(destination),
            PieceKind::King { .. } => self.king_reach(destination),
        }
    }

    /// Whether this piece attacks `target`, whatever stands there. Pawns attack only their two
    /// forward diagonals. Used by the king-safety predicate.
    pub(crate) fn attacks(&self, state: &BoardState, target: Position) -> bool {
        if !self.alive || target == self.position {
            return false;
        }
        match self.kind {
            PieceKind::Pawn { .. } => {
                let (df, dr) = self.position.delta(target);
                df.abs() == 1 && dr == self.color.forward()
            }
            PieceKind::Rook { .. } => self.rook_reach(state, target),
            PieceKind::Bishop => self.bishop_reach(state, target),
            PieceKind::Queen => self.rook_reach(state, target) || self.bishop_reach(state, target),
            PieceKind::Knight => self.knight_reach(target),
            PieceKind::King { .. } => self.king_reach(target),
        }
    }

    /// The enemy pawn this pawn would capture en passant by moving to `destination`, if any.
    pub(crate) fn en_passant_victim(&self, state: &BoardState, last_move: Option<&Move>, destination: Position) -> Option<PieceId> {
        if !self.alive || !self.is_pawn() || state.occupant(destination).is_some() {
            return None;
        }
        let (df, dr) = self.position.delta(destination);
        if df.abs() != 1 || dr != self.color.forward() || self.position.rank() != self.color.en_passant_rank() {
            return None;
        }
        let last = last_move?;
        let passed = Position::new(destination.file(), self.position.rank())?;
        let double_step = last.start().delta(last.end()).1.abs() == 2;
        if last.piece().color == self.color
            || last.piece_type() != PieceType::Pawn
            || !double_step
            || last.end() != passed
        {
            return None;
        }
        let victim = state.occupant(passed)?;
        (victim.id() == last.piece() && victim.is_pawn()).then(|| victim.id())
    }

    fn pawn_advance(&self, state: &BoardState, destination: Position, first_move: bool) -> bool {
        let (df, dr) = self.position.delta(destination);
        let forward = self.color.forward();
        if df != 0 || state.occupant(destination).is_some() {
            return false;
        }
        if dr == forward {
            return true;
        }
        dr == 2 * forward && first_move && state.path_clear(self.position, destination)
    }

    fn pawn_capture(&self, state: &BoardState, destination: Position) -> bool {
        let (df, dr) = self.position.delta(destination);
        df.abs() == 1
            && dr == self.color.forward()
            && state.occupant(destination).is_some_and(|p| p.color != self.color)
    }

    fn rook_reach(&self, state: &BoardState, target: Position) -> bool {
        let (df, dr) = self.position.delta(target);
        (df == 0) != (dr == 0) && state.path_clear(self.position, target)
    }

    fn bishop_reach(&self, state: &BoardState, target: Position) -> bool {
        let (df, dr) = self.position.delta(target);
        df != 0 && df.abs() == dr.abs() && state.path_clear(self.position, target)
    }

    fn knight_reach(&self, target: Position) -> bool {
        let (df, dr) = self.position.delta(target);
        matches!((df.abs(), dr.abs()), (1, 2) | (2, 1))
    }

    fn king_reach(&self, target: Position) -> bool {
        let (df, dr) = self.position.delta(target);
        df.abs() <= 1 && dr.abs() <= 1 && (df, dr) != (0, 0)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.color.symbol(), self.piece_type().symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardState;

    fn sq(s: &str) -> Position {
        Position::from_algebraic(s).unwrap()
    }

    fn lone(color: Color, variant: Variant, at: &str) -> (BoardState, PieceId) {
        let state = BoardState::arranged(&[(color, variant, sq(at))]);
        (state, PieceId::new(color, variant))
    }

    #[test]
    fn promotion_handedness_follows_pawn_file() {
        assert_eq!(Variant::Pawn0.promoted(PieceType::Bishop), Some(Variant::BishopLeft));
        assert_eq!(Variant::Pawn3.promoted(PieceType::Knight), Some(Variant::KnightLeft));
        assert_eq!(Variant::Pawn4.promoted(PieceType::Rook), Some(Variant::RookRight));
        assert_eq!(Variant::Pawn7.promoted(PieceType::Queen), Some(Variant::Queen));
        assert_eq!(Variant::Pawn5.promoted(PieceType::King), None);
        assert_eq!(Variant::RookLeft.promoted(PieceType::Queen), None);
    }

    #[test]
    fn knight_moves_are_exactly_the_l_shapes() {
        let (state, id) = lone(Color::White, Variant::KnightLeft, "d4");
        let knight = state.piece(id);
        let reachable: Vec<String> = Position::all()
            .filter(|p| knight.can_move_to(&state, None, *p))
            .map(|p| p.to_string())
            .collect();
        let mut expected = vec!["c2", "e2", "b3", "f3", "b5", "f5", "c6", "e6"];
        expected.sort_by_key(|s| sq(s).index());
        assert_eq!(reachable, expected);
    }

    #[test]
    fn knight_ignores_surrounding_pieces() {
        let state = BoardState::arranged(&[
            (Color::White, Variant::KnightLeft, sq("b1")),
            (Color::White, Variant::Pawn0, sq("a2")),
            (Color::White, Variant::Pawn1, sq("b2")),
            (Color::White, Variant::Pawn2, sq("c2")),
        ]);
        let knight = state.piece(PieceId::new(Color::White, Variant::KnightLeft));
        assert!(knight.can_move_to(&state, None, sq("c3")));
        assert!(knight.can_move_to(&state, None, sq("a3")));
        assert!(knight.can_move_to(&state, None, sq("d2")));
        assert!(!knight.can_move_to(&state, None, sq("b3")));
    }

    #[test]
    fn no_piece_may_stay_put_or_land_on_a_friend() {
        for variant in [Variant::King, Variant::Queen, Variant::RookLeft, Variant::BishopLeft, Variant::KnightLeft, Variant::Pawn3] {
            let state = BoardState::arranged(&[
                (Color::White, variant, sq("d4")),
                (Color::White, Variant::Pawn4, sq("e5")),
                (Color::White, Variant::Pawn7, sq("c6")),
            ]);
            let piece = state.piece(PieceId::new(Color::White, variant));
            assert!(!piece.can_move_to(&state, None, sq("d4")), "{variant:?} stayed put");
            assert!(!piece.can_move_to(&state, None, sq("e5")), "{variant:?} took a friend on e5");
            assert!(!piece.can_move_to(&state, None, sq("c6")), "{variant:?} took a friend on c6");
        }
    }

    #[test]
    fn sliders_are_blocked_for_every_path_length() {
        for length in 2..=7u8 {
            // Rook along the a-file, blocker on each intervening square.
            for blocker in 1..length {
                let state = BoardState::arranged(&[
                    (Color::White, Variant::RookLeft, Position::at(0, 0)),
                    (Color::Black, Variant::Pawn0, Position::at(0, blocker)),
                ]);
                let rook = state.piece(PieceId::new(Color::White, Variant::RookLeft));
                assert!(!rook.can_move_to(&state, None, Position::at(0, length)), "rook len {length} blocker {blocker}");
            }
            // Bishop and queen along the a1-h8 diagonal.
            for blocker in 1..length {
                for variant in [Variant::BishopLeft, Variant::Queen] {
                    let state = BoardState::arranged(&[
                        (Color::White, variant, Position::at(0, 0)),
                        (Color::Black, Variant::Pawn0, Position::at(blocker, blocker)),
                    ]);
                    let piece = state.piece(PieceId::new(Color::White, variant));
                    assert!(!piece.can_move_to(&state, None, Position::at(length, length)), "{variant:?} len {length} blocker {blocker}");
                }
            }
            let (state, id) = lone(Color::White, Variant::Queen, "a1");
            assert!(state.piece(id).can_move_to(&state, None, Position::at(length, length)));
            assert!(state.piece(id).can_move_to(&state, None, Position::at(0, length)));
        }
    }

    #[test]
    fn rook_and_bishop_reject_off_axis_moves() {
        let (state, rook) = lone(Color::Black, Variant::RookRight, "d4");
        assert!(!state.piece(rook).can_move_to(&state, None, sq("e5")));
        assert!(state.piece(rook).can_move_to(&state, None, sq("d8")));
        let (state, bishop) = lone(Color::Black, Variant::BishopRight, "d4");
        assert!(!state.piece(bishop).can_move_to(&state, None, sq("d5")));
        assert!(!state.piece(bishop).can_move_to(&state, None, sq("e6")));
        assert!(state.piece(bishop).can_move_to(&state, None, sq("h8")));
    }

    #[test]
    fn king_steps_one_square_and_captures_enemies() {
        let state = BoardState::arranged(&[
            (Color::White, Variant::King, sq("e4")),
            (Color::Black, Variant::Pawn3, sq("d5")),
        ]);
        let king = state.piece(PieceId::new(Color::White, Variant::King));
        assert!(king.can_move_to(&state, None, sq("e5")));
        assert!(king.can_move_to(&state, None, sq("d5")));
        assert!(!king.can_move_to(&state, None, sq("e6")));
        assert!(!king.can_move_to(&state, None, sq("g4")));
    }

    #[test]
    fn pawns_advance_toward_the_opponent_only() {
        let state = BoardState::arranged(&[
            (Color::White, Variant::Pawn4, sq("e2")),
            (Color::Black, Variant::Pawn3, sq("d7")),
        ]);
        let white = state.piece(PieceId::new(Color::White, Variant::Pawn4));
        assert!(white.can_move_to(&state, None, sq("e3")));
        assert!(white.can_move_to(&state, None, sq("e4")));
        assert!(!white.can_move_to(&state, None, sq("e1")));
        assert!(!white.can_move_to(&state, None, sq("e5")));
        let black = state.piece(PieceId::new(Color::Black, Variant::Pawn3));
        assert!(black.can_move_to(&state, None, sq("d6")));
        assert!(black.can_move_to(&state, None, sq("d5")));
        assert!(!black.can_move_to(&state, None, sq("d8")));
    }

    #[test]
    fn pawn_double_step_needs_a_clear_path() {
        let state = BoardState::arranged(&[
            (Color::White, Variant::Pawn4, sq("e2")),
            (Color::Black, Variant::KnightLeft, sq("e3")),
        ]);
        let pawn = state.piece(PieceId::new(Color::White, Variant::Pawn4));
        assert!(!pawn.can_move_to(&state, None, sq("e4")));
        assert!(!pawn.can_move_to(&state, None, sq("e3")));
    }

    #[test]
    fn pawn_captures_diagonally_but_never_straight() {
        let state = BoardState::arranged(&[
            (Color::White, Variant::Pawn4, sq("e4")),
            (Color::Black, Variant::Pawn3, sq("d5")),
            (Color::Black, Variant::Pawn4, sq("e5")),
        ]);
        let pawn = state.piece(PieceId::new(Color::White, Variant::Pawn4));
        assert!(pawn.can_move_to(&state, None, sq("d5")));
        assert!(!pawn.can_move_to(&state, None, sq("e5")));
        assert!(!pawn.can_move_to(&state, None, sq("f5")));
    }

    #[test]
    fn pawn_attacks_only_forward_diagonals() {
        let (state, id) = lone(Color::Black, Variant::Pawn2, "c5");
        let pawn = state.piece(id);
        assert!(pawn.attacks(&state, sq("b4")));
        assert!(pawn.attacks(&state, sq("d4")));
        assert!(!pawn.attacks(&state, sq("c4")));
        assert!(!pawn.attacks(&state, sq("d6")));
    }

    #[test]
    fn dead_pieces_neither_move_nor_attack() {
        let (mut state, id) = lone(Color::White, Variant::Queen, "d1");
        state.piece_mut(id).kill();
        let queen = state.piece(id);
        assert!(!queen.can_move_to(&state, None, sq("d5")));
        assert!(!queen.attacks(&state, sq("d5")));
    }

    #[test]
    fn identifiers_and_codes() {
        let piece = Piece::new(Color::White, Variant::BishopLeft, sq("c1"));
        assert_eq!(piece.identifier(), "White Bishop (left)");
        assert_eq!(piece.to_string(), "wB");
        let pawn = Piece::new(Color::Black, Variant::Pawn2, sq("c7"));
        assert_eq!(pawn.identifier(), "Black Pawn (3)");
        assert_eq!(pawn.to_string(), "bP");
    }
}
