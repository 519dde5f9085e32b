//! Castling rights stored as a 4-bit field within a `u8`.

use std::fmt;

use crate::piece::Color;

/// Which side of the board to castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

/// Castling rights encoded as a 4-bit field: bit 0 = white kingside,
/// 1 = white queenside, 2 = black kingside, 3 = black queenside.
///
/// Rights only ever disappear: there is no public way to add a right back
/// once it has been cleared.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleRights(u8);

impl CastleRights {
    /// No castling rights.
    pub const NONE: CastleRights = CastleRights(0);
    /// All four castling rights.
    pub const ALL: CastleRights = CastleRights(0b1111);

    /// Return the single-bit mask for a color and side.
    #[inline]
    const fn bit(color: Color, side: CastleSide) -> u8 {
        let shift = match side {
            CastleSide::KingSide => 0,
            CastleSide::QueenSide => 1,
        };
        1 << (color.index() * 2 + shift)
    }

    /// Check whether the given color may still castle toward the given side.
    #[inline]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.0 & Self::bit(color, side) != 0
    }

    /// Return rights with one color/side right cleared.
    #[inline]
    #[must_use]
    pub const fn cleared(self, color: Color, side: CastleSide) -> CastleRights {
        CastleRights(self.0 & !Self::bit(color, side))
    }

    /// Return rights with both of a color's rights cleared.
    #[inline]
    #[must_use]
    pub const fn cleared_color(self, color: Color) -> CastleRights {
        self.cleared(color, CastleSide::KingSide)
            .cleared(color, CastleSide::QueenSide)
    }

    /// Return `true` if no castling rights remain.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Build rights from the FEN castling field by letter membership:
    /// `K`/`Q` for White, `k`/`q` for Black. Any other character
    /// (including `-`) grants nothing.
    pub fn from_fen(field: &str) -> CastleRights {
        let mut rights = CastleRights::NONE;
        for c in field.chars() {
            let bit = match c {
                'K' => Self::bit(Color::White, CastleSide::KingSide),
                'Q' => Self::bit(Color::White, CastleSide::QueenSide),
                'k' => Self::bit(Color::Black, CastleSide::KingSide),
                'q' => Self::bit(Color::Black, CastleSide::QueenSide),
                _ => 0,
            };
            rights.0 |= bit;
        }
        rights
    }
}

impl fmt::Display for CastleRights {
    /// FEN castling field: granted letters in `KQkq` order, or `-`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        for (color, side, c) in [
            (Color::White, CastleSide::KingSide, 'K'),
            (Color::White, CastleSide::QueenSide, 'Q'),
            (Color::Black, CastleSide::KingSide, 'k'),
            (Color::Black, CastleSide::QueenSide, 'q'),
        ] {
            if self.has(color, side) {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CastleRights({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::{CastleRights, CastleSide};
    use crate::piece::Color;

    #[test]
    fn all_grants_everything() {
        for color in Color::ALL {
            assert!(CastleRights::ALL.has(color, CastleSide::KingSide));
            assert!(CastleRights::ALL.has(color, CastleSide::QueenSide));
        }
        assert!(CastleRights::NONE.is_empty());
    }

    #[test]
    fn cleared_is_targeted() {
        let rights = CastleRights::ALL.cleared(Color::White, CastleSide::KingSide);
        assert!(!rights.has(Color::White, CastleSide::KingSide));
        assert!(rights.has(Color::White, CastleSide::QueenSide));
        assert!(rights.has(Color::Black, CastleSide::KingSide));
        assert!(rights.has(Color::Black, CastleSide::QueenSide));
    }

    #[test]
    fn cleared_color_removes_both() {
        let rights = CastleRights::ALL.cleared_color(Color::Black);
        assert!(rights.has(Color::White, CastleSide::KingSide));
        assert!(rights.has(Color::White, CastleSide::QueenSide));
        assert!(!rights.has(Color::Black, CastleSide::KingSide));
        assert!(!rights.has(Color::Black, CastleSide::QueenSide));
    }

    #[test]
    fn clearing_is_idempotent() {
        let once = CastleRights::ALL.cleared(Color::White, CastleSide::QueenSide);
        let twice = once.cleared(Color::White, CastleSide::QueenSide);
        assert_eq!(once, twice);
    }

    #[test]
    fn fen_roundtrip() {
        for field in ["KQkq", "KQ", "kq", "Kq", "Qk", "K", "q"] {
            let rights = CastleRights::from_fen(field);
            assert_eq!(format!("{rights}"), field, "roundtrip failed for {field}");
        }
        assert_eq!(format!("{}", CastleRights::from_fen("-")), "-");
    }

    #[test]
    fn fen_is_membership_based() {
        // Unknown letters are ignored rather than rejected.
        let rights = CastleRights::from_fen("Kxq");
        assert!(rights.has(Color::White, CastleSide::KingSide));
        assert!(!rights.has(Color::White, CastleSide::QueenSide));
        assert!(rights.has(Color::Black, CastleSide::QueenSide));
    }
}
