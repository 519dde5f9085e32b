//! Terminal detection: checkmate and the draw rules.

use std::collections::VecDeque;

use crate::chess_move::Move;
use crate::movegen::legal_moves;
use crate::piece::Color;
use crate::state::State;

/// Halfmove-clock threshold (in plies) at which the game is drawn.
const HALFMOVE_DRAW_LIMIT: u16 = 50;

/// Shortest move pattern the repetition scan accepts.
const MIN_PERIOD: usize = 2;

/// How many times a pattern must repeat before it counts.
const MIN_REPEATS: usize = 3;

impl State {
    /// Return `true` if the side to move has been checkmated.
    pub fn is_checkmate(&self) -> bool {
        legal_moves(self).is_empty() && self.in_check(self.side_to_move())
    }

    /// Return `true` if the game is drawn: stalemate or a dead position
    /// (no legal moves while not in check), the halfmove clock reaching its
    /// limit, or both sides shuffling through a repeating move pattern.
    pub fn is_draw(&self) -> bool {
        if self.halfmove_clock() >= HALFMOVE_DRAW_LIMIT {
            return true;
        }
        if has_repeating_pattern(self.history(Color::White))
            && has_repeating_pattern(self.history(Color::Black))
        {
            return true;
        }
        legal_moves(self).is_empty() && !self.in_check(self.side_to_move())
    }
}

/// Detect whether the history is a whole number (at least [`MIN_REPEATS`])
/// of repetitions of some pattern of length at least [`MIN_PERIOD`].
///
/// Runs the KMP failure function over the move sequence: prefix `i` has
/// period `p = (i+1) - failure[i]`, and a prefix that is an exact multiple
/// of its period is a repetition. This catches shuffle loops (e.g. two
/// pieces bouncing between the same squares) without any positional
/// hashing; it is deliberately not threefold repetition.
fn has_repeating_pattern(history: &VecDeque<Move>) -> bool {
    let n = history.len();
    if n < MIN_PERIOD * MIN_REPEATS {
        return false;
    }

    let mut failure = vec![0usize; n];
    let mut j = 0;
    for i in 1..n {
        while j > 0 && history[i] != history[j] {
            j = failure[j - 1];
        }
        if history[i] == history[j] {
            j += 1;
        }
        failure[i] = j;
    }

    for (i, &f) in failure.iter().enumerate() {
        let len = i + 1;
        let period = len - f;
        if period >= MIN_PERIOD && len % period == 0 && len / period >= MIN_REPEATS {
            return true;
        }
    }
    false
}
