//! Expansion policies: which untried move a leaf tries first.

use crate::backend::{Backend, ChessBackend};
use ferrozero_core::Move;

/// A guidance prior over candidate moves.
///
/// Called during expansion with the node's untried moves; must return one
/// of them. In the full system this is the learned prior network; the
/// implementations here are lightweight stand-ins.
pub trait Policy<B: Backend> {
    /// Pick one move from a non-empty candidate list.
    fn pick(&mut self, moves: &[B::Move]) -> B::Move;
}

/// Picks uniformly at random among the candidates.
#[derive(Debug)]
pub struct UniformPolicy {
    rng: fastrand::Rng,
}

impl UniformPolicy {
    /// Create a policy with OS-seeded randomness.
    pub fn new() -> UniformPolicy {
        UniformPolicy {
            rng: fastrand::Rng::new(),
        }
    }

    /// Create a policy with a fixed seed, for reproducible searches.
    pub fn with_seed(seed: u64) -> UniformPolicy {
        UniformPolicy {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Default for UniformPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Backend> Policy<B> for UniformPolicy {
    fn pick(&mut self, moves: &[B::Move]) -> B::Move {
        moves[self.rng.usize(..moves.len())].clone()
    }
}

/// Prefers the candidate with the highest advisory capture gain, falling
/// back to the first candidate when everything is quiet.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaptureBiasedPolicy;

impl Policy<ChessBackend> for CaptureBiasedPolicy {
    fn pick(&mut self, moves: &[Move]) -> Move {
        let mut best = moves[0];
        for mv in &moves[1..] {
            if mv.gain > best.gain {
                best = *mv;
            }
        }
        best
    }
}
