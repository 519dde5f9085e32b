//! Move application via copy-make.

use crate::castle_rights::CastleSide;
use crate::chess_move::Move;
use crate::piece::{Color, Piece, PieceKind};
use crate::square::Square;
use crate::state::State;

impl State {
    /// Apply a move and return the resulting state. Copy-make: `self` is
    /// not modified.
    ///
    /// The move must come from [`legal_moves`](crate::legal_moves); no
    /// legality checking happens here beyond the castling bookkeeping. An
    /// empty source square returns the state unchanged.
    ///
    /// A king travelling two columns is executed as a castle: the rook on
    /// that side's back rank is relocated across the king. A pawn reaching
    /// its final row leaves a queen there.
    pub fn play(&self, mv: &Move) -> State {
        let Some(piece) = self.piece_on(mv.from) else {
            return self.clone();
        };

        let mover = self.side_to_move();
        let mut next = self.clone();
        next.set_turn(mover.opponent());
        next.record(mover, *mv);

        // The clock counts plies since the last pawn move or capture.
        if piece.kind() == PieceKind::Pawn || !self.is_empty(mv.to) {
            next.set_halfmove_clock(0);
        } else {
            next.set_halfmove_clock(self.halfmove_clock() + 1);
        }

        // Castling rights go away when the king moves, or when a rook moves
        // off its home column. Rights never come back.
        match piece.kind() {
            PieceKind::King => {
                next.set_castling(next.castling().cleared_color(piece.color()));
            }
            PieceKind::Rook => {
                if mv.from.col() == 7 {
                    next.set_castling(next.castling().cleared(piece.color(), CastleSide::KingSide));
                }
                if mv.from.col() == 0 {
                    next.set_castling(next.castling().cleared(piece.color(), CastleSide::QueenSide));
                }
            }
            _ => {}
        }

        // A two-column king move is a castle: drag the rook across on the
        // mover's back rank.
        if piece.kind() == PieceKind::King {
            let back = match piece.color() {
                Color::White => 7,
                Color::Black => 0,
            };
            let rook = Some(Piece::new(PieceKind::Rook, piece.color()));
            match mv.to.col() as i8 - mv.from.col() as i8 {
                2 => {
                    next.set(Square::new(back, 5), rook);
                    next.set(Square::new(back, 7), None);
                }
                -2 => {
                    next.set(Square::new(back, 3), rook);
                    next.set(Square::new(back, 0), None);
                }
                _ => {}
            }
        }

        next.set(mv.to, Some(piece));
        next.set(mv.from, None);

        // Promotion is always to a queen.
        if piece.kind() == PieceKind::Pawn {
            let final_row = match piece.color() {
                Color::White => 0,
                Color::Black => 7,
            };
            if mv.to.row() == final_row {
                next.set(mv.to, Some(Piece::new(PieceKind::Queen, piece.color())));
            }
        }

        next
    }
}
