//! Fixed-shape feature encoding of a [`State`] for a learned evaluator.

use crate::castle_rights::CastleSide;
use crate::piece::Color;
use crate::square::Square;
use crate::state::State;

/// Number of feature planes.
///
/// Planes 0-11 are one-hot piece placement in `P N B R Q K p n b r q k`
/// order, plane 12 is the side-to-move flag (all ones when White is to
/// move), and planes 13-16 are the castling rights in `w_ck w_cq b_ck
/// b_cq` order.
pub const PLANE_COUNT: usize = 17;

/// A stack of 8x8 feature planes, indexed `[plane][row][col]` with row 0
/// at the top, matching the board layout.
pub type FeaturePlanes = [[[f32; 8]; 8]; PLANE_COUNT];

/// Encode a state as evaluator input.
pub fn encode(state: &State) -> FeaturePlanes {
    let mut planes: FeaturePlanes = [[[0.0; 8]; 8]; PLANE_COUNT];

    for sq in Square::all() {
        if let Some(piece) = state.piece_on(sq) {
            planes[piece.plane()][sq.row() as usize][sq.col() as usize] = 1.0;
        }
    }

    if state.side_to_move() == Color::White {
        planes[12] = [[1.0; 8]; 8];
    }

    let rights = [
        (Color::White, CastleSide::KingSide),
        (Color::White, CastleSide::QueenSide),
        (Color::Black, CastleSide::KingSide),
        (Color::Black, CastleSide::QueenSide),
    ];
    for (i, (color, side)) in rights.into_iter().enumerate() {
        if state.castling().has(color, side) {
            planes[13 + i] = [[1.0; 8]; 8];
        }
    }

    planes
}
