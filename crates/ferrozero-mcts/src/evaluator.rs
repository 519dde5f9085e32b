//! Leaf evaluators: batched state scoring.

use crate::backend::{Backend, ChessBackend};
use ferrozero_core::{PieceKind, Square, State};

/// A batched value function.
///
/// In the full system this wraps the value network; batching exists so
/// that one network call can amortize over many leaves. Scores are signed
/// and read from each state's own side-to-move perspective: higher is
/// better for the player about to move.
pub trait Evaluator<B: Backend> {
    /// Score every state in the batch, one value per state in input order.
    fn evaluate(&mut self, states: &[B::State]) -> Vec<f64>;
}

/// Material-count evaluation squashed into (-1, 1), with exact scores for
/// finished games: -1 when the side to move is checkmated, 0 for a draw.
///
/// This is a deliberately crude stand-in for a value network, but it is
/// enough to steer the search toward material wins and forced mates.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialEvaluator;

/// Material swings beyond roughly a rook and a minor piece saturate.
const MATERIAL_SCALE: f64 = 8.0;

impl MaterialEvaluator {
    fn score(state: &State) -> f64 {
        if state.is_checkmate() {
            return -1.0;
        }
        if state.is_draw() {
            return 0.0;
        }

        let us = state.side_to_move();
        let mut balance = 0i32;
        for sq in Square::all() {
            let Some(piece) = state.piece_on(sq) else {
                continue;
            };
            if piece.kind() == PieceKind::King {
                continue;
            }
            let value = piece.value() as i32;
            if piece.color() == us {
                balance += value;
            } else {
                balance -= value;
            }
        }
        (f64::from(balance) / MATERIAL_SCALE).tanh()
    }
}

impl Evaluator<ChessBackend> for MaterialEvaluator {
    fn evaluate(&mut self, states: &[State]) -> Vec<f64> {
        states.iter().map(Self::score).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{Evaluator, MaterialEvaluator};
    use ferrozero_core::{Color, State};

    fn score(fen: &str) -> f64 {
        let state: State = fen.parse().unwrap();
        MaterialEvaluator.evaluate(std::slice::from_ref(&state))[0]
    }

    #[test]
    fn balanced_position_scores_zero() {
        assert_eq!(score("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"), 0.0);
    }

    #[test]
    fn material_edge_is_signed_for_the_mover() {
        // White is up a queen.
        let up = score("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert!(up > 0.0);
        // Same position with Black to move: the mover is down a queen.
        let down = score("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1");
        assert!(down < 0.0);
        assert!((up + down).abs() < 1e-12, "sign flip should be exact");
    }

    #[test]
    fn scores_stay_inside_the_unit_interval() {
        // Four extra queens saturate the squash without reaching +/-1.
        let v = score("4k3/8/8/8/8/8/QQQQ4/4K3 w - - 0 1");
        assert!(v > 0.99 && v < 1.0);
        let w = score("4k3/8/8/8/8/8/QQQQ4/4K3 b - - 0 1");
        assert!(w < -0.99 && w > -1.0);
    }

    #[test]
    fn checkmate_scores_minus_one_for_the_mover() {
        assert_eq!(
            score("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3"),
            -1.0
        );
    }

    #[test]
    fn stalemate_scores_zero() {
        assert_eq!(score("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1"), 0.0);
    }

    #[test]
    fn batch_preserves_order() {
        let balanced: State = State::starting_position();
        let winning: State = "rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
            .parse()
            .unwrap();
        assert_eq!(winning.side_to_move(), Color::White);
        let values = MaterialEvaluator.evaluate(&[balanced, winning]);
        assert_eq!(values.len(), 2);
        assert_eq!(values[0], 0.0);
        assert!(values[1] > 0.0);
    }
}
