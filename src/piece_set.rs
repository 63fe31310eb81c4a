// src/piece_set.rs
use crate::error::MoveError;
use crate::piece::{Color, Piece, PieceType, Variant};
use crate::position::Position;
use std::fmt;

/// Number of slots in one color's set.
pub const PIECE_COUNT: usize = 16;

/// The sixteen pieces of one color. Slots never move: a captured piece stays in its slot marked
/// dead, and a promoted pawn is overwritten in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceSet {
    color: Color,
    pieces: [Piece; PIECE_COUNT],
}

impl PieceSet {
    /// A full set on its standard starting squares.
    pub fn new(color: Color) -> Self {
        let pieces = Variant::ALL.map(|variant| {
            let rank = if variant.pawn_file().is_some() { color.pawn_rank() } else { color.home_rank() };
            Piece::new(color, variant, Position::at(variant.home_file(), rank))
        });
        PieceSet { color, pieces }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn get(&self, slot: Variant) -> &Piece {
        &self.pieces[slot.slot()]
    }

    pub(crate) fn get_mut(&mut self, slot: Variant) -> &mut Piece {
        &mut self.pieces[slot.slot()]
    }

    pub fn king(&self) -> &Piece {
        self.get(Variant::King)
    }

    /// The live piece standing on `position`, if any.
    pub fn piece_at(&self, position: Position) -> Option<&Piece> {
        self.alive().find(|p| p.position() == position)
    }

    /// All sixteen slots in slot order, dead pieces included.
    pub fn iter(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter()
    }

    pub fn alive(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter().filter(|p| p.is_alive())
    }

    /// Replaces the pawn in `slot` by a fresh piece of the requested shape on the same square.
    /// Bishops, knights and rooks take the left or right handedness of the pawn's file.
    pub(crate) fn promote_pawn(&mut self, slot: Variant, requested: PieceType) -> Result<Piece, MoveError> {
        let pawn = *self.get(slot);
        if !pawn.is_pawn() {
            return Err(MoveError::InvalidPromotion(pawn.piece_type()));
        }
        let variant = slot.promoted(requested).ok_or(MoveError::InvalidPromotion(requested))?;
        let promoted = Piece::promoted_from(&pawn, variant);
        self.pieces[slot.slot()] = promoted;
        Ok(promoted)
    }
}

impl fmt::Display for PieceSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PIECE SET ({}) --------------------------------", self.color)?;
        writeln!(f, "Symbol\t{:<24}Position\tAlive", "Identifier")?;
        writeln!(f, "-----------------------------------------------------")?;
        for piece in self.iter() {
            writeln!(f, "{}\t{:<24}{}\t\t{}", piece, piece.identifier(), piece.position(), piece.is_alive())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_squares() {
        let white = PieceSet::new(Color::White);
        assert_eq!(white.king().position().to_string(), "e1");
        assert_eq!(white.get(Variant::Queen).position().to_string(), "d1");
        assert_eq!(white.get(Variant::RookRight).position().to_string(), "h1");
        assert_eq!(white.get(Variant::Pawn0).position().to_string(), "a2");

        let black = PieceSet::new(Color::Black);
        assert_eq!(black.king().position().to_string(), "e8");
        assert_eq!(black.get(Variant::KnightLeft).position().to_string(), "b8");
        assert_eq!(black.get(Variant::Pawn7).position().to_string(), "h7");
        assert_eq!(black.alive().count(), PIECE_COUNT);
        assert!(black.iter().all(|p| p.color() == Color::Black));
    }

    #[test]
    fn piece_at_skips_dead_pieces() {
        let mut set = PieceSet::new(Color::White);
        let e2 = Position::from_algebraic("e2").unwrap();
        assert_eq!(set.piece_at(e2).map(|p| p.variant()), Some(Variant::Pawn4));
        set.get_mut(Variant::Pawn4).kill();
        assert!(set.piece_at(e2).is_none());
        assert_eq!(set.alive().count(), PIECE_COUNT - 1);
        assert_eq!(set.iter().count(), PIECE_COUNT);
    }

    #[test]
    fn promotion_overwrites_the_pawn_slot() {
        let mut set = PieceSet::new(Color::White);
        let promoted = set.promote_pawn(Variant::Pawn6, PieceType::Knight).unwrap();
        assert_eq!(promoted.variant(), Variant::KnightRight);
        assert_eq!(promoted.slot(), Variant::Pawn6);
        assert_eq!(promoted.position().to_string(), "g2");
        assert!(promoted.is_alive());
        assert_eq!(*set.get(Variant::Pawn6), promoted);

        let queen = set.promote_pawn(Variant::Pawn1, PieceType::Queen).unwrap();
        assert_eq!(queen.variant(), Variant::Queen);
        assert_eq!(set.get(Variant::Queen).position().to_string(), "d1");
    }

    #[test]
    fn promotion_rejects_kings_pawns_and_non_pawns() {
        let mut set = PieceSet::new(Color::Black);
        assert_eq!(set.promote_pawn(Variant::Pawn2, PieceType::King), Err(MoveError::InvalidPromotion(PieceType::King)));
        assert_eq!(set.promote_pawn(Variant::Pawn2, PieceType::Pawn), Err(MoveError::InvalidPromotion(PieceType::Pawn)));
        assert_eq!(set.promote_pawn(Variant::RookLeft, PieceType::Queen), Err(MoveError::InvalidPromotion(PieceType::Rook)));
        assert_eq!(set.get(Variant::Pawn2).variant(), Variant::Pawn2);
    }

    #[test]
    fn display_lists_every_slot() {
        let text = PieceSet::new(Color::Black).to_string();
        assert!(text.contains("Black King"));
        assert!(text.contains("Black Pawn (8)"));
        assert_eq!(text.lines().count(), 3 + PIECE_COUNT);
    }
}
