//! Legal move generation.

use crate::chess_move::Move;
use crate::direction::{ALL_DIRECTIONS, DIAGONALS, KNIGHT_JUMPS, ORTHOGONALS};
use crate::piece::{Color, Piece, PieceKind};
use crate::square::Square;
use crate::state::State;

/// Generate all legal moves for the side to move.
///
/// Returns an empty list when the side to move has no legal move
/// (checkmate or stalemate) and also when neither side retains mating
/// material (no pawns, rooks, or queens and at most one minor piece on
/// the board); callers distinguish the cases by check status.
///
/// Castling moves are never generated; the generator's closure over
/// [`State::play`](crate::State::play) therefore never exercises the rook
/// relocation in move application.
pub fn legal_moves(state: &State) -> Vec<Move> {
    if insufficient_material(state) {
        return Vec::new();
    }

    let us = state.side_to_move();
    let mut moves = Vec::new();

    for from in Square::all() {
        let Some(piece) = state.piece_on(from) else {
            continue;
        };
        if piece.color() != us {
            continue;
        }

        match piece.kind() {
            PieceKind::Pawn => pawn_moves(state, from, us, &mut moves),
            PieceKind::Knight => step_moves(state, from, us, &KNIGHT_JUMPS, &mut moves),
            PieceKind::King => step_moves(state, from, us, &ALL_DIRECTIONS, &mut moves),
            PieceKind::Bishop => ray_moves(state, from, us, &DIAGONALS, &mut moves),
            PieceKind::Rook => ray_moves(state, from, us, &ORTHOGONALS, &mut moves),
            PieceKind::Queen => ray_moves(state, from, us, &ALL_DIRECTIONS, &mut moves),
        }
    }

    // Drop pseudo-legal moves that leave the mover's own king attacked.
    moves.retain(|mv| !state.play(mv).in_check(us));
    moves
}

/// Neither side can deliver mate: no pawns, rooks, or queens anywhere, and
/// at most one bishop or knight on the whole board.
fn insufficient_material(state: &State) -> bool {
    let mut heavy = 0u32;
    let mut minor = 0u32;
    for sq in Square::all() {
        match state.piece_on(sq).map(Piece::kind) {
            Some(PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen) => heavy += 1,
            Some(PieceKind::Bishop | PieceKind::Knight) => minor += 1,
            Some(PieceKind::King) | None => {}
        }
    }
    heavy == 0 && minor <= 1
}

/// Push a move to `to` if it lands on an empty square or captures an enemy
/// piece other than the king. Returns `true` while a slider may continue
/// past `to`.
fn push_step(state: &State, from: Square, to: Square, us: Color, moves: &mut Vec<Move>) -> bool {
    match state.piece_on(to) {
        None => {
            moves.push(Move::quiet(from, to));
            true
        }
        Some(target) => {
            if target.color() != us && target.kind() != PieceKind::King {
                moves.push(Move::capture(from, to, f64::from(target.value())));
            }
            false
        }
    }
}

/// Single-step movers: knight and king.
fn step_moves(
    state: &State,
    from: Square,
    us: Color,
    offsets: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(dr, dc) in offsets {
        if let Some(to) = from.offset(dr, dc) {
            push_step(state, from, to, us, moves);
        }
    }
}

/// Sliding movers: bishop, rook, and queen.
fn ray_moves(state: &State, from: Square, us: Color, rays: &[(i8, i8)], moves: &mut Vec<Move>) {
    for &(dr, dc) in rays {
        let mut current = from;
        while let Some(to) = current.offset(dr, dc) {
            if !push_step(state, from, to, us, moves) {
                break;
            }
            current = to;
        }
    }
}

/// Pawns: single push, double push from the starting row, and diagonal
/// captures. Promotion happens inside move application, not here.
fn pawn_moves(state: &State, from: Square, us: Color, moves: &mut Vec<Move>) {
    let (forward, start_row): (i8, u8) = match us {
        Color::White => (-1, 6),
        Color::Black => (1, 1),
    };

    if let Some(to) = from.offset(forward, 0)
        && state.is_empty(to)
    {
        moves.push(Move::quiet(from, to));
        if from.row() == start_row
            && let Some(two) = from.offset(forward * 2, 0)
            && state.is_empty(two)
        {
            moves.push(Move::quiet(from, two));
        }
    }

    for dc in [-1, 1] {
        if let Some(to) = from.offset(forward, dc)
            && let Some(target) = state.piece_on(to)
            && target.color() != us
            && target.kind() != PieceKind::King
        {
            moves.push(Move::capture(from, to, f64::from(target.value())));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::legal_moves;
    use crate::chess_move::Move;
    use crate::piece::Color;
    use crate::square::Square;
    use crate::state::State;

    fn state(fen: &str) -> State {
        fen.parse().unwrap()
    }

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    fn moves_from(moves: &[Move], from: Square) -> Vec<Move> {
        moves.iter().filter(|m| m.from == from).copied().collect()
    }

    #[test]
    fn starting_position_has_20_moves() {
        let moves = legal_moves(&State::starting_position());
        assert_eq!(moves.len(), 20);
    }

    #[test]
    fn no_duplicate_moves() {
        let moves = legal_moves(&State::starting_position());
        for (i, a) in moves.iter().enumerate() {
            for b in &moves[i + 1..] {
                assert!(
                    !(a.from == b.from && a.to == b.to),
                    "duplicate move {a}"
                );
            }
        }
    }

    #[test]
    fn pawn_double_push_only_from_start_row() {
        let s = state("4k3/8/8/8/8/4P3/8/4K3 w - - 0 1");
        let pawn_moves = moves_from(&legal_moves(&s), sq("e3"));
        assert_eq!(pawn_moves.len(), 1);
        assert_eq!(pawn_moves[0].to, sq("e4"));
    }

    #[test]
    fn pawn_double_push_blocked_by_intermediate() {
        // Black knight on e3 blocks both e2e3 and e2e4.
        let s = state("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1");
        let pawn_moves = moves_from(&legal_moves(&s), sq("e2"));
        assert!(pawn_moves.is_empty());
    }

    #[test]
    fn pawn_double_push_blocked_on_target_only() {
        // Black knight on e4: single push is available, double is not.
        let s = state("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1");
        let pawn_moves = moves_from(&legal_moves(&s), sq("e2"));
        assert_eq!(pawn_moves.len(), 1);
        assert_eq!(pawn_moves[0].to, sq("e3"));
    }

    #[test]
    fn pawn_captures_diagonally_with_gain() {
        // Black rook d3, black knight f3; pawn e2 can capture either.
        let s = state("4k3/8/8/8/8/3r1n2/4P3/4K3 w - - 0 1");
        let captures: Vec<Move> = moves_from(&legal_moves(&s), sq("e2"))
            .into_iter()
            .filter(Move::is_capture)
            .collect();
        assert_eq!(captures.len(), 2);
        for mv in &captures {
            let expected = if mv.to == sq("d3") { 5.0 } else { 3.0 };
            assert_eq!(mv.gain, expected, "wrong gain for {mv}");
        }
    }

    #[test]
    fn pawn_cannot_capture_straight_ahead() {
        let s = state("4k3/8/8/8/8/4r3/4P3/4K3 w - - 0 1");
        let pawn_moves = moves_from(&legal_moves(&s), sq("e2"));
        assert!(pawn_moves.is_empty());
    }

    #[test]
    fn black_pawns_move_down_the_board() {
        let s = state("4k3/4p3/8/8/8/8/8/4K3 b - - 0 1");
        let pawn_moves = moves_from(&legal_moves(&s), sq("e7"));
        let targets: Vec<Square> = pawn_moves.iter().map(|m| m.to).collect();
        assert!(targets.contains(&sq("e6")));
        assert!(targets.contains(&sq("e5")));
    }

    #[test]
    fn knight_jumps_from_corner() {
        // The black pawn keeps the dead-position shortcut from firing.
        let s = state("4k3/p7/8/8/8/8/8/N3K3 w - - 0 1");
        let knight_moves = moves_from(&legal_moves(&s), sq("a1"));
        assert_eq!(knight_moves.len(), 2);
        let targets: Vec<Square> = knight_moves.iter().map(|m| m.to).collect();
        assert!(targets.contains(&sq("b3")));
        assert!(targets.contains(&sq("c2")));
    }

    #[test]
    fn rook_ray_stops_at_blockers() {
        // Rook a1, own king e1 blocks to the right, black pawn a4 caps the file.
        let s = state("4k3/8/8/8/p7/8/8/R3K3 w - - 0 1");
        let rook_moves = moves_from(&legal_moves(&s), sq("a1"));
        let targets: Vec<Square> = rook_moves.iter().map(|m| m.to).collect();
        assert!(targets.contains(&sq("a2")));
        assert!(targets.contains(&sq("a3")));
        assert!(targets.contains(&sq("a4")), "capture on a4 expected");
        assert!(!targets.contains(&sq("a5")), "ray must stop at the capture");
        assert!(targets.contains(&sq("b1")));
        assert!(targets.contains(&sq("d1")));
        assert!(!targets.contains(&sq("e1")), "own king blocks the ray");
    }

    #[test]
    fn king_is_never_a_capture_target() {
        // White queen adjacent to the black king.
        let s = state("4k3/4Q3/8/8/8/8/8/4K3 w - - 0 1");
        let moves = legal_moves(&s);
        assert!(
            moves.iter().all(|m| m.to != sq("e8")),
            "no move may land on a king"
        );
    }

    #[test]
    fn moves_leaving_king_in_check_are_dropped() {
        // White knight on e2 is pinned by the rook on e8.
        let s = state("4r2k/8/8/8/8/8/4N3/4K3 w - - 0 1");
        let knight_moves = moves_from(&legal_moves(&s), sq("e2"));
        assert!(knight_moves.is_empty(), "pinned knight cannot move");
    }

    #[test]
    fn check_evasions_only() {
        // Rook on e8 checks the king on e1; every reply must resolve it.
        let s = state("4r2k/8/8/8/8/8/3P4/3QK3 w - - 0 1");
        let moves = legal_moves(&s);
        assert!(!moves.is_empty());
        for mv in &moves {
            let next = s.play(mv);
            assert!(!next.in_check(Color::White), "{mv} leaves king in check");
        }
    }

    #[test]
    fn no_castling_moves_generated() {
        // Castling-ready position: the king still gets only its single steps.
        let s = state("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1");
        let king_moves = moves_from(&legal_moves(&s), sq("e1"));
        for mv in &king_moves {
            let spread = (mv.to.col() as i8 - mv.from.col() as i8).abs();
            assert!(spread <= 1, "unexpected king move {mv}");
        }
    }

    #[test]
    fn bare_kings_have_no_moves() {
        let s = state("4k3/8/8/8/8/8/8/4K3 w - - 0 1");
        assert!(legal_moves(&s).is_empty());
    }

    #[test]
    fn king_and_single_minor_is_drawn_dead() {
        assert!(legal_moves(&state("4k3/8/8/8/8/8/8/3NK3 w - - 0 1")).is_empty());
        assert!(legal_moves(&state("4k3/8/8/8/8/8/8/3BK3 w - - 0 1")).is_empty());
    }

    #[test]
    fn two_minors_keep_the_game_alive() {
        let s = state("4k3/8/8/8/8/8/8/2NNK3 w - - 0 1");
        assert!(!legal_moves(&s).is_empty());
    }

    #[test]
    fn lone_pawn_keeps_the_game_alive() {
        let s = state("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1");
        assert!(!legal_moves(&s).is_empty());
    }

    #[test]
    fn stalemate_returns_empty() {
        let s = state("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        assert!(legal_moves(&s).is_empty());
        assert!(!s.in_check(Color::Black));
    }

    #[test]
    fn checkmate_returns_empty() {
        // Fool's mate final position.
        let s = state("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
        assert!(legal_moves(&s).is_empty());
        assert!(s.in_check(Color::White));
    }
}
