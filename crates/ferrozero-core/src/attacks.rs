//! Attack and check detection, evaluated outward from the target square.

use crate::direction::{ALL_DIRECTIONS, DIAGONALS, KNIGHT_JUMPS, ORTHOGONALS};
use crate::piece::{Color, Piece, PieceKind};
use crate::square::Square;
use crate::state::State;

impl State {
    /// Return `true` if `color`'s king is attacked by any opposing piece.
    ///
    /// A board without a king of `color` is never in check.
    pub fn in_check(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(sq) => self.is_attacked(sq, color),
            None => false,
        }
    }

    /// Return `true` if the piece of `owner` sitting on `sq` would be
    /// attacked by `owner`'s opponent.
    pub(crate) fn is_attacked(&self, sq: Square, owner: Color) -> bool {
        let attacker = owner.opponent();

        // Pawns attack one row toward their opponent, diagonally. White's
        // pieces are attacked by black pawns from the row above (smaller
        // row index), black's by white pawns from the row below.
        let pawn_row: i8 = match owner {
            Color::White => -1,
            Color::Black => 1,
        };
        let enemy_pawn = Piece::new(PieceKind::Pawn, attacker);
        for dc in [-1, 1] {
            if let Some(from) = sq.offset(pawn_row, dc)
                && self.piece_on(from) == Some(enemy_pawn)
            {
                return true;
            }
        }

        // Knights.
        let enemy_knight = Piece::new(PieceKind::Knight, attacker);
        for (dr, dc) in KNIGHT_JUMPS {
            if let Some(from) = sq.offset(dr, dc)
                && self.piece_on(from) == Some(enemy_knight)
            {
                return true;
            }
        }

        // Adjacent enemy king (kings may never touch).
        let enemy_king = Piece::new(PieceKind::King, attacker);
        for (dr, dc) in ALL_DIRECTIONS {
            if let Some(from) = sq.offset(dr, dc)
                && self.piece_on(from) == Some(enemy_king)
            {
                return true;
            }
        }

        // Sliders: walk each ray until the first occupied square and check
        // whether it holds an enemy slider of the matching family.
        if self.ray_hits(sq, attacker, &DIAGONALS, PieceKind::Bishop) {
            return true;
        }
        if self.ray_hits(sq, attacker, &ORTHOGONALS, PieceKind::Rook) {
            return true;
        }

        false
    }

    /// Walk the given rays from `sq`; return `true` if the first occupied
    /// square along any of them holds an `attacker` piece of `kind` or an
    /// `attacker` queen.
    fn ray_hits(
        &self,
        sq: Square,
        attacker: Color,
        rays: &[(i8, i8)],
        kind: PieceKind,
    ) -> bool {
        for &(dr, dc) in rays {
            let mut current = sq;
            while let Some(next) = current.offset(dr, dc) {
                if let Some(piece) = self.piece_on(next) {
                    if piece.color() == attacker
                        && (piece.kind() == kind || piece.kind() == PieceKind::Queen)
                    {
                        return true;
                    }
                    break;
                }
                current = next;
            }
        }
        false
    }
}
