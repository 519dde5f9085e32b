//! The game backend the search drives.

use ferrozero_core::{Move, State, legal_moves};

/// Rules of the game under search.
///
/// The driver only ever asks two questions: which moves are legal in a
/// state, and what state a move leads to. Everything else (terminal
/// classification, scoring) belongs to the [`Evaluator`](crate::Evaluator)
/// side of the contract.
pub trait Backend {
    /// A game position. Cloned when leaves are queued for evaluation.
    type State: Clone;
    /// A move. Compared by equality when the policy's choice is located
    /// in the candidate list.
    type Move: Clone + PartialEq;

    /// All legal moves in `state`; empty exactly when `state` is terminal.
    fn legal_moves(&self, state: &Self::State) -> Vec<Self::Move>;

    /// The successor of `state` under `mv`. `mv` must be legal in `state`.
    fn apply(&self, state: &Self::State, mv: &Self::Move) -> Self::State;
}

/// The chess rules from `ferrozero-core`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChessBackend;

impl Backend for ChessBackend {
    type State = State;
    type Move = Move;

    fn legal_moves(&self, state: &State) -> Vec<Move> {
        legal_moves(state)
    }

    fn apply(&self, state: &State, mv: &Move) -> State {
        state.play(mv)
    }
}
